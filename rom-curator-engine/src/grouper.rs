//! Identity grouping: partition records into per-game groups.

use std::collections::HashMap;

use log::debug;
use rom_curator_core::TaggedRecord;

/// How an identity group is keyed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKey {
    /// External catalog identifier (authoritative).
    CatalogId(String),
    /// Normalized display name (fallback when no id is known).
    Name(String),
}

impl std::fmt::Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CatalogId(id) => write!(f, "id:{id}"),
            Self::Name(name) => write!(f, "name:{name}"),
        }
    }
}

/// An ordered set of records believed to represent the same game.
#[derive(Debug, Clone)]
pub struct IdentityGroup {
    pub key: GroupKey,
    pub members: Vec<TaggedRecord>,
}

/// Partition records into identity groups.
///
/// Records carrying a usable catalog id group by that id; the rest group by
/// normalized name. A name-group whose name matches the first member of an
/// id-group merges into that id-group (first id-group in creation order
/// wins). Collection records are excluded entirely; their passthrough is
/// handled by the caller.
///
/// Output order is id-groups in creation order, then unmerged name-groups
/// in creation order. Order affects only iteration and reporting.
pub fn group_records(records: Vec<TaggedRecord>) -> Vec<IdentityGroup> {
    // Build both partitions first, then merge into a fresh result, so no
    // collection is mutated while being iterated.
    let mut id_groups: Vec<IdentityGroup> = Vec::new();
    let mut id_index: HashMap<String, usize> = HashMap::new();
    let mut name_groups: Vec<IdentityGroup> = Vec::new();
    let mut name_index: HashMap<String, usize> = HashMap::new();

    for record in records {
        if record.collection.is_some() {
            continue;
        }

        if let Some(id) = record.catalog_key().map(str::to_string) {
            match id_index.get(&id) {
                Some(&pos) => id_groups[pos].members.push(record),
                None => {
                    id_index.insert(id.clone(), id_groups.len());
                    id_groups.push(IdentityGroup {
                        key: GroupKey::CatalogId(id),
                        members: vec![record],
                    });
                }
            }
        } else {
            match name_index.get(&record.normalized_name) {
                Some(&pos) => name_groups[pos].members.push(record),
                None => {
                    name_index.insert(record.normalized_name.clone(), name_groups.len());
                    name_groups.push(IdentityGroup {
                        key: GroupKey::Name(record.normalized_name.clone()),
                        members: vec![record],
                    });
                }
            }
        }
    }

    // Reconcile: a name-group matching an id-group's representative record
    // folds into that id-group.
    let mut result = id_groups;
    for name_group in name_groups {
        let name = match &name_group.key {
            GroupKey::Name(name) => name.clone(),
            GroupKey::CatalogId(_) => unreachable!("name partition holds only name keys"),
        };
        match result
            .iter()
            .position(|g| matches!(g.key, GroupKey::CatalogId(_)) && g.members[0].normalized_name == name)
        {
            Some(pos) => {
                debug!(
                    "merging name group '{}' ({} records) into {}",
                    name,
                    name_group.members.len(),
                    result[pos].key
                );
                result[pos].members.extend(name_group.members);
            }
            None => result.push(name_group),
        }
    }

    result
}
