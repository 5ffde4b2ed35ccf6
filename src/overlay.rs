// Info panel showing the active catalog entry.
use crate::constants::{
    INFO_DESCRIPTION_ID, INFO_PANEL_ID, INFO_SUBTITLE_ID, INFO_TAGS_ID, INFO_TITLE_ID, TAG_CLASS,
};
use helix_core::CatalogEntry;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// Rewrite the panel for `entry`, or clear it when nothing is active.
pub fn show_entry(document: &web::Document, entry: Option<&CatalogEntry>) {
    let Some(panel) = document.get_element_by_id(INFO_PANEL_ID) else {
        return;
    };
    match entry {
        Some(e) => {
            set_text(document, INFO_SUBTITLE_ID, &e.subtitle);
            set_text(document, INFO_TITLE_ID, &e.title);
            set_text(document, INFO_DESCRIPTION_ID, &e.description);
            if let Some(tags) = document.get_element_by_id(INFO_TAGS_ID) {
                tags.set_text_content(None);
                for tag in &e.tags {
                    if let Ok(span) = document.create_element("span") {
                        span.set_class_name(TAG_CLASS);
                        span.set_text_content(Some(tag));
                        _ = tags.append_child(&span);
                    }
                }
            }
            if let Some(html) = panel.dyn_ref::<web::HtmlElement>() {
                _ = html.style().set_property("--accent", &e.accent_token);
            }
            _ = panel.set_attribute("data-active", &e.id);
        }
        None => {
            for id in [INFO_SUBTITLE_ID, INFO_TITLE_ID, INFO_DESCRIPTION_ID, INFO_TAGS_ID] {
                set_text(document, id, "");
            }
            _ = panel.remove_attribute("data-active");
        }
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(INFO_PANEL_ID)
        .and_then(|el| el.get_attribute("style"))
        .map(|s| s.contains("display:none"))
        .unwrap_or(false)
}

#[inline]
pub fn toggle(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(INFO_PANEL_ID) {
        let style = if is_hidden(document) { "" } else { "display:none" };
        _ = el.set_attribute("style", style);
    }
}
