//! User preferences driving winner selection.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Region and language preferences for a curation run.
///
/// `preferred_*` lists are ordered, highest priority first. All comparisons
/// against record data are case-insensitive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub preferred_regions: Vec<String>,
    pub preferred_languages: Vec<String>,
    pub ignore_regions: Vec<String>,
    pub ignore_languages: Vec<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            preferred_regions: to_strings(&["USA", "World", "Europe", "Australia"]),
            preferred_languages: to_strings(&["En"]),
            ignore_regions: Vec::new(),
            ignore_languages: Vec::new(),
        }
    }
}

impl Preferences {
    /// Parse preferences from TOML text. Missing fields take their
    /// defaults; callers own reading the file.
    pub fn from_toml_str(text: &str) -> Result<Self, EngineError> {
        Ok(toml::from_str(text)?)
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Position of `value` in `list`, compared case-insensitively.
pub(crate) fn position_ci(list: &[String], value: &str) -> Option<usize> {
    list.iter().position(|item| item.eq_ignore_ascii_case(value))
}

/// Case-insensitive membership test.
pub(crate) fn contains_ci(list: &[String], value: &str) -> bool {
    position_ci(list, value).is_some()
}
