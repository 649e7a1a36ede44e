//! Data model for tagged ROM records and external catalog metadata.

use serde::{Deserialize, Serialize};

/// Descriptive metadata for one game, sourced from an external catalog
/// (gamelist, scraper, database). Only `id` and `name` participate in
/// identity decisions; the media paths ride along for consumers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameMetadata {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub manual: Option<String>,
}

/// One scanned file with every identity signal extracted from its name
/// (and optionally its catalog metadata).
///
/// The parser fills the name-derived fields; callers attach location, size,
/// catalog id, and collection tag via the `with_*` builders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaggedRecord {
    /// Full filename including extension.
    pub filename: String,
    /// Opaque location identifier, never interpreted here.
    pub base_path: String,
    /// Display name with all parenthetical/bracketed groups stripped.
    pub base_name: String,
    /// Lowercased, punctuation-stripped form of `base_name`, used only as a
    /// fallback identity key when no catalog id is available.
    pub normalized_name: String,
    /// Canonical region names, insertion order, no duplicates.
    pub regions: Vec<String>,
    /// Canonical language codes, insertion order, no duplicates.
    pub languages: Vec<String>,
    /// Recognized free-form tags: special-version keywords, prototype
    /// keywords, the revision token, and bracket groups verbatim.
    pub tags: Vec<String>,
    /// Revision number. 0 = base release, `Rev A` = 1, `v1.1` = 11.
    pub revision: u32,
    pub is_prototype: bool,
    pub is_hack: bool,
    /// External catalog identifier. `None`, empty, and the literal "0" all
    /// mean "no identifier".
    pub catalog_id: Option<String>,
    /// File size in bytes.
    pub file_size: u64,
    /// Set only for records from a preserved collection folder; such
    /// records bypass grouping and scoring entirely.
    pub collection: Option<String>,
}

impl TaggedRecord {
    pub fn with_location(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn with_file_size(mut self, size: u64) -> Self {
        self.file_size = size;
        self
    }

    pub fn with_catalog_id(mut self, id: impl Into<String>) -> Self {
        self.catalog_id = Some(id.into());
        self
    }

    pub fn with_collection(mut self, name: impl Into<String>) -> Self {
        self.collection = Some(name.into());
        self
    }

    /// The catalog id usable as a grouping key, if any. Empty strings and
    /// the placeholder "0" do not count.
    pub fn catalog_key(&self) -> Option<&str> {
        match self.catalog_id.as_deref() {
            None | Some("") | Some("0") => None,
            Some(id) => Some(id),
        }
    }

    /// True if any tag is the bad-dump marker (`b` or `[b]`).
    pub fn is_bad_dump(&self) -> bool {
        self.tags
            .iter()
            .any(|t| t.eq_ignore_ascii_case("b") || t.eq_ignore_ascii_case("[b]"))
    }

    /// Case-insensitive region membership test.
    pub fn has_region(&self, region: &str) -> bool {
        self.regions.iter().any(|r| r.eq_ignore_ascii_case(region))
    }
}
