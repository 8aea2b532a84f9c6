//! Id-indexed list merge.

use crate::schema::Keyed;
use im::HashMap;

/// Refresh `existing` against `source`, matching entries by key.
///
/// The result has exactly one entry per `source` entry, in `source` order:
/// - entries present on both sides keep their `existing` value;
/// - `source`-only entries are built with `seed`;
/// - `existing`-only entries are dropped.
///
/// Applying the merge to its own output returns the output unchanged.
pub fn merge_by_id<S, T, F>(source: &[S], existing: &[T], seed: F) -> Vec<T>
where
    S: Keyed,
    T: Keyed + Clone,
    F: Fn(&S) -> T,
{
    let index: HashMap<&str, &T> = existing.iter().map(|e| (e.key(), e)).collect();

    source
        .iter()
        .map(|s| match index.get(s.key()) {
            Some(kept) => (*kept).clone(),
            None => seed(s),
        })
        .collect()
}
