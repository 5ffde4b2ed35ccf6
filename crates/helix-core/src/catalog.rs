//! Catalog registry: the ordered, immutable list of entries shown as cards.
//!
//! Entries are built once at start-up and never mutated. Order on the helix is
//! the entry's `order` rank; entries sharing a rank keep their input position.

use fnv::FnvHashSet;
use smallvec::SmallVec;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate catalog id `{0}`")]
    DuplicateId(String),
    #[error("catalog entry {index} has an empty id")]
    EmptyId { index: usize },
    #[error("catalog entry `{id}` has an invalid accent colour `{token}`")]
    InvalidAccent { id: String, token: String },
}

/// Display accent colour, stored as linear RGB components in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AccentColor {
    pub rgb: [f32; 3],
}

impl AccentColor {
    /// Parse a `#RRGGBB` or `#RGB` token. Returns `None` for anything else.
    pub fn parse(token: &str) -> Option<Self> {
        let hex = token.strip_prefix('#')?;
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        let (r, g, b) = match hex.len() {
            6 => (
                channel(hex.get(0..2)?)?,
                channel(hex.get(2..4)?)?,
                channel(hex.get(4..6)?)?,
            ),
            3 => {
                let r = channel(hex.get(0..1)?)?;
                let g = channel(hex.get(1..2)?)?;
                let b = channel(hex.get(2..3)?)?;
                (r * 17, g * 17, b * 17)
            }
            _ => return None,
        };
        Some(Self {
            rgb: [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0],
        })
    }
}

pub type Tags = SmallVec<[String; 4]>;

#[derive(Clone, Debug)]
pub struct CatalogEntry {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub tags: Tags,
    pub accent_token: String,
    pub accent: AccentColor,
    pub order: i32,
}

/// Static description of an entry, as written in build-time data.
#[derive(Clone, Copy, Debug)]
pub struct EntrySource<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub subtitle: &'a str,
    pub description: &'a str,
    pub tags: &'a [&'a str],
    pub accent: &'a str,
    pub order: i32,
}

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(sources: &[EntrySource<'_>]) -> Result<Self, CatalogError> {
        let mut seen = FnvHashSet::default();
        let mut entries = Vec::with_capacity(sources.len());
        for (index, src) in sources.iter().enumerate() {
            if src.id.trim().is_empty() {
                return Err(CatalogError::EmptyId { index });
            }
            if !seen.insert(src.id) {
                return Err(CatalogError::DuplicateId(src.id.to_owned()));
            }
            let accent = AccentColor::parse(src.accent).ok_or_else(|| {
                CatalogError::InvalidAccent {
                    id: src.id.to_owned(),
                    token: src.accent.to_owned(),
                }
            })?;
            entries.push(CatalogEntry {
                id: src.id.to_owned(),
                title: src.title.to_owned(),
                subtitle: src.subtitle.to_owned(),
                description: src.description.to_owned(),
                tags: src.tags.iter().map(|t| (*t).to_owned()).collect(),
                accent_token: src.accent.to_owned(),
                accent,
                order: src.order,
            });
        }
        // Stable: equal ranks keep input order.
        entries.sort_by_key(|e| e.order);
        Ok(Self { entries })
    }

    /// The product catalog shipped with the page.
    pub fn builtin() -> Self {
        match Self::new(BUILTIN_ENTRIES) {
            Ok(c) => c,
            Err(e) => {
                log::error!("builtin catalog rejected: {e}");
                Self::default()
            }
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn by_id(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

pub const BUILTIN_ENTRIES: &[EntrySource<'static>] = &[
    EntrySource {
        id: "sustainable-horizons",
        title: "Sustainable Horizons",
        subtitle: "Immersive 3D editorial experience",
        description: "A cinematic narrative where the camera orbits around a living structural spine, revealing layered content panels.",
        tags: &["Three.js", "WebGL", "Interactive Story"],
        accent: "#8EE6FF",
        order: 0,
    },
    EntrySource {
        id: "digital-ecosystems",
        title: "Digital Ecosystems",
        subtitle: "Interactive data visualization",
        description: "Explore complex relationships through an immersive 3D network visualization that responds to user interaction.",
        tags: &["Data Viz", "React", "WebGL"],
        accent: "#A78BFA",
        order: 1,
    },
    EntrySource {
        id: "architectural-visions",
        title: "Architectural Visions",
        subtitle: "Virtual space exploration",
        description: "Navigate through architectural concepts rendered in real-time, with dynamic lighting and spatial audio.",
        tags: &["Architecture", "3D Modeling", "VR Ready"],
        accent: "#F472B6",
        order: 2,
    },
    EntrySource {
        id: "molecular-journey",
        title: "Molecular Journey",
        subtitle: "Scientific visualization",
        description: "Dive into the microscopic world with an interactive 3D representation of molecular structures and reactions.",
        tags: &["Science", "Education", "WebGL"],
        accent: "#34D399",
        order: 3,
    },
    EntrySource {
        id: "cosmic-narrative",
        title: "Cosmic Narrative",
        subtitle: "Space exploration experience",
        description: "Embark on a journey through the cosmos with procedurally generated star systems and celestial bodies.",
        tags: &["Space", "Procedural", "Immersive"],
        accent: "#FBBF24",
        order: 4,
    },
    EntrySource {
        id: "neural-networks",
        title: "Neural Networks",
        subtitle: "AI visualization platform",
        description: "Visualize artificial intelligence in action through an interactive representation of neural network architectures.",
        tags: &["AI", "Machine Learning", "Interactive"],
        accent: "#60A5FA",
        order: 5,
    },
];
