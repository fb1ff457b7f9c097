//! Tie-break ranks derived from a prior load order.
//!
//! Ranks only decide between mods the graph leaves unordered. Ids from the
//! prior order come first, in that order; every other id follows
//! alphabetically.

use std::collections::{HashMap, HashSet};

use modorder_core::id::normalize_id;

/// A total, deterministic rank for every discovered id. Lower sorts earlier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriorityTable {
    ranks: HashMap<String, usize>,
}

impl PriorityTable {
    /// Assign ranks to `all_ids` using `prior_order` as the preferred sequence.
    ///
    /// Prior entries are normalized; entries that are not among `all_ids`,
    /// blank entries and repeats are skipped.
    pub fn assign<I, S, P>(all_ids: I, prior_order: &[P]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        P: AsRef<str>,
    {
        let mut remaining: Vec<String> = all_ids
            .into_iter()
            .map(|id| normalize_id(id.as_ref()))
            .collect();
        let known: HashSet<&str> = remaining.iter().map(String::as_str).collect();

        let mut ranks: HashMap<String, usize> = HashMap::with_capacity(remaining.len());
        for raw in prior_order {
            let id = normalize_id(raw.as_ref());
            if known.contains(id.as_str()) && !ranks.contains_key(&id) {
                let rank = ranks.len();
                ranks.insert(id, rank);
            }
        }

        remaining.retain(|id| !ranks.contains_key(id));
        remaining.sort();
        remaining.dedup();
        for id in remaining {
            let rank = ranks.len();
            ranks.insert(id, rank);
        }

        Self { ranks }
    }

    /// The rank of an id. Unknown ids sort after everything.
    pub fn rank(&self, id: &str) -> usize {
        self.ranks.get(id).copied().unwrap_or(usize::MAX)
    }

    /// Sort key used everywhere ties are broken: rank, then id.
    pub fn sort_key<'a>(&self, id: &'a str) -> (usize, &'a str) {
        (self.rank(id), id)
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Ids ordered by rank.
    pub fn ordered_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.ranks.keys().map(String::as_str).collect();
        ids.sort_by_key(|id| self.rank(id));
        ids
    }
}
