use std::collections::HashSet;

pub mod competition;
pub mod event;
pub mod result;
pub mod runner;

/// `?, ?, ...` placeholder list for binding a batch of ids into an `IN` clause.
/// MySQL has no array parameters, so the list is spliced into the statement.
pub(crate) fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}

/// Deduplicates ids, keeping the order in which they first appear.
pub(crate) fn distinct_ids<I>(ids: I) -> Vec<i32>
where
    I: IntoIterator<Item = i32>,
{
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

#[cfg(test)]
mod tests {
    use super::{distinct_ids, placeholders};

    #[test]
    fn test_placeholders() {
        assert_eq!(placeholders(1), "?");
        assert_eq!(placeholders(3), "?, ?, ?");
    }

    #[test]
    fn test_distinct_ids_keeps_first_appearance_order() {
        assert_eq!(distinct_ids([3, 1, 3, 2]), vec![3, 1, 2]);
        assert_eq!(distinct_ids([]), Vec::<i32>::new());
    }
}
