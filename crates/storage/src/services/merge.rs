/// Merges two sequences that are each sorted descending by `key` into one
/// descending sequence. Walks the base list and places every addition
/// immediately before the first base element whose key is not greater,
/// so an addition precedes base elements it ties with and the relative
/// order inside each input is kept.
pub fn merge_descending_by<T, K, F>(base: Vec<T>, additions: Vec<T>, key: F) -> Vec<T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut merged = Vec::with_capacity(base.len() + additions.len());
    let mut base = base.into_iter().peekable();

    for addition in additions {
        while let Some(head) = base.next_if(|head| key(head) > key(&addition)) {
            merged.push(head);
        }
        merged.push(addition);
    }
    merged.extend(base);

    merged
}

#[cfg(test)]
mod tests {
    use super::merge_descending_by;

    fn keys(items: &[(i32, &str)]) -> Vec<i32> {
        items.iter().map(|item| item.0).collect()
    }

    #[test]
    fn test_merge_interleaves_descending_sequences() {
        let base = vec![(9, "b1"), (7, "b2"), (3, "b3")];
        let additions = vec![(8, "a1"), (4, "a2")];
        let merged = merge_descending_by(base, additions, |item| item.0);
        assert_eq!(keys(&merged), vec![9, 8, 7, 4, 3]);
    }

    #[test]
    fn test_merge_with_empty_inputs() {
        let merged = merge_descending_by(Vec::new(), vec![(2, "a1")], |item| item.0);
        assert_eq!(merged, vec![(2, "a1")]);

        let merged = merge_descending_by(vec![(2, "b1")], Vec::new(), |item| item.0);
        assert_eq!(merged, vec![(2, "b1")]);
    }

    #[test]
    fn test_merge_addition_precedes_equal_key_base_element() {
        let base = vec![(5, "b1")];
        let additions = vec![(5, "a1")];
        let merged = merge_descending_by(base, additions, |item| item.0);
        assert_eq!(merged, vec![(5, "a1"), (5, "b1")]);
    }

    #[test]
    fn test_merge_keeps_relative_order_inside_each_input() {
        let base = vec![(5, "b1"), (5, "b2")];
        let additions = vec![(5, "a1"), (5, "a2")];
        let merged = merge_descending_by(base, additions, |item| item.0);
        assert_eq!(merged, vec![(5, "a1"), (5, "a2"), (5, "b1"), (5, "b2")]);
    }
}
