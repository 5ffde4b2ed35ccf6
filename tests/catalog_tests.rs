// Host-side tests for the catalog registry.

use helix_core::*;

fn src<'a>(id: &'a str, accent: &'a str, order: i32) -> EntrySource<'a> {
    EntrySource {
        id,
        title: "Title",
        subtitle: "Sub",
        description: "Desc",
        tags: &["a", "b"],
        accent,
        order,
    }
}

#[test]
fn builtin_catalog_has_six_ordered_entries() {
    let c = Catalog::builtin();
    assert_eq!(c.len(), 6);
    assert_eq!(c.get(0).map(|e| e.id.as_str()), Some("sustainable-horizons"));
    assert_eq!(c.get(5).map(|e| e.id.as_str()), Some("neural-networks"));
    for (i, e) in c.entries().iter().enumerate() {
        assert_eq!(e.order, i as i32);
        assert_eq!(e.tags.len(), 3);
    }
}

#[test]
fn accent_tokens_parse_to_unit_rgb() {
    let c = AccentColor::parse("#8EE6FF").map(|a| a.rgb);
    let [r, g, b] = c.unwrap_or_default();
    assert!((r - 142.0 / 255.0).abs() < 1e-6);
    assert!((g - 230.0 / 255.0).abs() < 1e-6);
    assert_eq!(b, 1.0);
    assert_eq!(AccentColor::parse("#fff").map(|a| a.rgb), Some([1.0, 1.0, 1.0]));
    assert_eq!(AccentColor::parse("8EE6FF"), None);
    assert_eq!(AccentColor::parse("#8EE6F"), None);
    assert_eq!(AccentColor::parse("#GGGGGG"), None);
}

#[test]
fn entries_sort_by_rank_stably() {
    let c = Catalog::new(&[src("c", "#000", 2), src("a", "#000", 0), src("b", "#000", 2)])
        .unwrap_or_default();
    let ids: Vec<&str> = c.entries().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["a", "c", "b"]);
    assert_eq!(c.position("b"), Some(2));
    assert_eq!(c.by_id("c").map(|e| e.order), Some(2));
    assert!(c.by_id("zzz").is_none());
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = Catalog::new(&[src("x", "#000", 0), src("x", "#111", 1)]).err();
    assert_eq!(err, Some(CatalogError::DuplicateId("x".into())));
}

#[test]
fn empty_ids_are_rejected() {
    let err = Catalog::new(&[src("ok", "#000", 0), src("  ", "#000", 1)]).err();
    assert_eq!(err, Some(CatalogError::EmptyId { index: 1 }));
}

#[test]
fn bad_accent_is_rejected() {
    let err = Catalog::new(&[src("x", "blue", 0)]).err();
    assert_eq!(
        err,
        Some(CatalogError::InvalidAccent {
            id: "x".into(),
            token: "blue".into()
        })
    );
    let msg = err.map(|e| e.to_string()).unwrap_or_default();
    assert!(msg.contains("blue"));
}

#[test]
fn empty_catalog_is_allowed() {
    let c = Catalog::new(&[]).unwrap_or_default();
    assert!(c.is_empty());
}
