//! Per-system curation pipeline: collections out, group, classify, count.

use log::debug;
use rom_curator_core::TaggedRecord;

use crate::classify::{Classification, classify};
use crate::error::EngineError;
use crate::grouper::{GroupKey, group_records};
use crate::preferences::Preferences;

/// Classification outcome for one identity group.
#[derive(Debug, Clone)]
pub struct GroupOutcome {
    pub key: GroupKey,
    pub outcome: Classification,
}

/// Counters for one curation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub total_records: usize,
    pub unique_titles: usize,
    pub kept: usize,
    pub regional: usize,
    pub prototypes: usize,
    pub hacks: usize,
    pub duplicates_removed: usize,
    pub collection_records: usize,
}

/// Result of curating one system's records.
#[derive(Debug, Clone)]
pub struct CurationReport {
    /// Collection passthrough: collection name to its records, insertion
    /// order. These bypass grouping and scoring entirely.
    pub collections: Vec<(String, Vec<TaggedRecord>)>,
    pub groups: Vec<GroupOutcome>,
    pub stats: RunStats,
}

/// Run the full decision pipeline over one system's records.
///
/// Purely in-memory: the caller supplies parsed records with catalog ids
/// and collection tags already attached, and turns the returned report
/// into copy operations, a catalog rewrite, and a human-readable summary.
pub fn curate(
    records: Vec<TaggedRecord>,
    prefs: &Preferences,
) -> Result<CurationReport, EngineError> {
    let total_records = records.len();

    let mut collections: Vec<(String, Vec<TaggedRecord>)> = Vec::new();
    let mut regular: Vec<TaggedRecord> = Vec::new();
    for record in records {
        match record.collection.clone() {
            Some(name) => collection_bucket(&mut collections, &name).push(record),
            None => regular.push(record),
        }
    }
    let collection_records: usize = collections.iter().map(|(_, v)| v.len()).sum();

    let groups = group_records(regular);
    let mut stats = RunStats {
        total_records,
        unique_titles: groups.len(),
        collection_records,
        ..RunStats::default()
    };

    let mut outcomes = Vec::with_capacity(groups.len());
    for group in &groups {
        let outcome = classify(group, prefs)?;

        if outcome.winner.is_some() {
            stats.kept += 1;
        }
        stats.regional += outcome.regional.iter().map(|(_, v)| v.len()).sum::<usize>();
        stats.prototypes += outcome.prototypes.len();
        stats.hacks += outcome.hacks.len();
        stats.duplicates_removed += outcome.duplicates.len();

        outcomes.push(GroupOutcome {
            key: group.key.clone(),
            outcome,
        });
    }

    debug!(
        "curated {} records into {} titles ({} kept, {} regional, {} duplicates)",
        stats.total_records, stats.unique_titles, stats.kept, stats.regional, stats.duplicates_removed
    );

    Ok(CurationReport {
        collections,
        groups: outcomes,
        stats,
    })
}

fn collection_bucket<'a>(
    collections: &'a mut Vec<(String, Vec<TaggedRecord>)>,
    name: &str,
) -> &'a mut Vec<TaggedRecord> {
    let pos = match collections.iter().position(|(n, _)| n == name) {
        Some(pos) => pos,
        None => {
            collections.push((name.to_string(), Vec::new()));
            collections.len() - 1
        }
    };
    &mut collections[pos].1
}
