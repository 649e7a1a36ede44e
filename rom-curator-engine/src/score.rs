//! Preference scoring for one record.

use rom_curator_core::TaggedRecord;

use crate::preferences::{Preferences, contains_ci, position_ci};

/// Compute the preference score for a record.
///
/// The score is purely additive with no early exit: a region or language
/// listed both as preferred and ignored collects both the bonus and the
/// penalty. Scores only rank candidates within one identity group;
/// absolute values carry no meaning across groups.
pub fn score(record: &TaggedRecord, prefs: &Preferences) -> i64 {
    let mut score = 0i64;

    // Earlier position in the preferred list is worth more.
    for region in &record.regions {
        if let Some(idx) = position_ci(&prefs.preferred_regions, region) {
            score += (prefs.preferred_regions.len() - idx) as i64 * 20;
        }
    }

    // Flat bonus for multi-region dumps that cover a preferred region.
    if record.regions.len() > 1
        && record
            .regions
            .iter()
            .any(|r| contains_ci(&prefs.preferred_regions, r))
    {
        score += 5;
    }

    for language in &record.languages {
        if let Some(idx) = position_ci(&prefs.preferred_languages, language) {
            score += (prefs.preferred_languages.len() - idx) as i64 * 10;
        }
    }

    // A USA dump with no language tags is implicitly English.
    if record.has_region("USA") && record.languages.is_empty() {
        score += 8;
    }

    score += record.revision as i64 * 5;

    for region in &record.regions {
        if contains_ci(&prefs.ignore_regions, region) {
            score -= 100;
        }
    }
    for language in &record.languages {
        if contains_ci(&prefs.ignore_languages, language) {
            score -= 50;
        }
    }

    if record.is_bad_dump() {
        score -= 200;
    }

    score
}
