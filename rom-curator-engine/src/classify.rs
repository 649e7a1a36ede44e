//! Destination classification: pick a winner per group, route the rest.

use log::debug;
use rom_curator_core::{TaggedRecord, primary_region};

use crate::error::EngineError;
use crate::grouper::IdentityGroup;
use crate::preferences::{Preferences, contains_ci};
use crate::score::score;

/// Outcome of classifying one identity group.
///
/// Every member lands in exactly one of the four routing lists or becomes
/// the winner, with one exception: when every regular candidate is
/// explicitly unwanted, the winner falls back to the first regular,
/// prototype, or hack record, and that record is also reported in its own
/// list.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    /// The copy to keep in the main folder. Absent only for single-record
    /// groups resolved directly to another destination.
    pub winner: Option<TaggedRecord>,
    /// Losers with no preferred attribute, bucketed by primary region,
    /// bucket insertion order preserved.
    pub regional: Vec<(String, Vec<TaggedRecord>)>,
    pub prototypes: Vec<TaggedRecord>,
    pub hacks: Vec<TaggedRecord>,
    /// Exact duplicates and explicitly unwanted records.
    pub duplicates: Vec<TaggedRecord>,
}

impl Classification {
    fn regional_bucket(&mut self, region: &str) -> &mut Vec<TaggedRecord> {
        let pos = match self.regional.iter().position(|(r, _)| r == region) {
            Some(pos) => pos,
            None => {
                self.regional.push((region.to_string(), Vec::new()));
                self.regional.len() - 1
            }
        };
        &mut self.regional[pos].1
    }
}

/// True if the record is explicitly unwanted.
///
/// A record is ignored when all of its regions are ignored, or when all of
/// its languages are ignored and it has no regions at all. Languages alone
/// never ignore a record that still carries a region; a record with neither
/// regions nor languages is never ignored. The asymmetry is longstanding
/// behavior and is preserved as-is.
pub fn should_ignore(record: &TaggedRecord, prefs: &Preferences) -> bool {
    if !record.regions.is_empty()
        && record
            .regions
            .iter()
            .all(|r| contains_ci(&prefs.ignore_regions, r))
    {
        return true;
    }

    if !record.languages.is_empty()
        && record.regions.is_empty()
        && record
            .languages
            .iter()
            .all(|l| contains_ci(&prefs.ignore_languages, l))
    {
        return true;
    }

    false
}

/// True if any of the record's regions is preferred.
pub fn has_preferred_region(record: &TaggedRecord, prefs: &Preferences) -> bool {
    record
        .regions
        .iter()
        .any(|r| contains_ci(&prefs.preferred_regions, r))
}

/// True if any of the record's languages is preferred. A USA record with no
/// language tags counts as implicitly English.
pub fn has_preferred_language(record: &TaggedRecord, prefs: &Preferences) -> bool {
    if record.languages.is_empty() && record.has_region("USA") {
        return true;
    }
    record
        .languages
        .iter()
        .any(|l| contains_ci(&prefs.preferred_languages, l))
}

/// Classify one identity group.
///
/// Total over any non-empty group; an empty group is a grouping invariant
/// failure and is reported as [`EngineError::EmptyGroup`].
pub fn classify(group: &IdentityGroup, prefs: &Preferences) -> Result<Classification, EngineError> {
    match group.members.as_slice() {
        [] => Err(EngineError::EmptyGroup(group.key.to_string())),
        [record] => Ok(classify_single(record, prefs)),
        members => Ok(classify_many(members, prefs)),
    }
}

/// Single-record groups skip scoring entirely.
fn classify_single(record: &TaggedRecord, prefs: &Preferences) -> Classification {
    let mut outcome = Classification::default();

    if should_ignore(record, prefs) {
        outcome.duplicates.push(record.clone());
    } else if record.is_hack {
        outcome.hacks.push(record.clone());
    } else if record.is_prototype {
        outcome.prototypes.push(record.clone());
    } else if !has_preferred_region(record, prefs) && !has_preferred_language(record, prefs) {
        outcome
            .regional_bucket(primary_region(record))
            .push(record.clone());
    } else {
        outcome.winner = Some(record.clone());
    }

    outcome
}

fn classify_many(members: &[TaggedRecord], prefs: &Preferences) -> Classification {
    let mut outcome = Classification::default();

    // Both-flagged records count as hacks, not prototypes.
    let prototypes: Vec<&TaggedRecord> = members
        .iter()
        .filter(|r| r.is_prototype && !r.is_hack)
        .collect();
    let hacks: Vec<&TaggedRecord> = members.iter().filter(|r| r.is_hack).collect();
    let regular: Vec<&TaggedRecord> = members
        .iter()
        .filter(|r| !r.is_prototype && !r.is_hack)
        .collect();

    let (considered, ignored): (Vec<&TaggedRecord>, Vec<&TaggedRecord>) = regular
        .iter()
        .copied()
        .partition(|r| !should_ignore(r, prefs));

    outcome.prototypes = prototypes.iter().map(|r| (*r).clone()).collect();
    outcome.hacks = hacks.iter().map(|r| (*r).clone()).collect();

    if considered.is_empty() {
        // Every regular candidate is explicitly unwanted; still guarantee a
        // winner if the group holds any record at all.
        let fallback = regular
            .first()
            .or_else(|| prototypes.first())
            .or_else(|| hacks.first());
        debug!(
            "group has no considered candidates, falling back to {:?}",
            fallback.map(|r| &r.filename)
        );
        outcome.winner = fallback.map(|r| (*r).clone());
        outcome.duplicates = ignored.iter().map(|r| (*r).clone()).collect();
        return outcome;
    }

    // Stable sort: equal scores keep input order, making list order the
    // deliberate tie-break.
    let mut scored: Vec<(&TaggedRecord, i64)> =
        considered.iter().map(|r| (*r, score(r, prefs))).collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    let (winner, winning_score) = scored[0];
    debug!(
        "winner for group: {} (score {winning_score})",
        winner.filename
    );
    outcome.winner = Some(winner.clone());
    outcome.duplicates = ignored.iter().map(|r| (*r).clone()).collect();

    for &(record, _) in &scored[1..] {
        let preferred = has_preferred_region(record, prefs) || has_preferred_language(record, prefs);
        if preferred {
            // Lost to a higher-scoring sibling with the same appeal.
            outcome.duplicates.push(record.clone());
        } else {
            outcome
                .regional_bucket(primary_region(record))
                .push(record.clone());
        }
    }

    outcome
}
