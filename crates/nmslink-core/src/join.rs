// Generic relational join primitives
//
// Both joins hash the right-side table once, keyed by `right_key`, then walk
// the left side in order. Duplicate keys on the right fan out one merged row
// per match. Left-side order is preserved in the output.

use std::collections::HashMap;
use std::hash::Hash;

fn index_right<R, K>(right: &[R], key: impl Fn(&R) -> K) -> HashMap<K, Vec<&R>>
where
    K: Eq + Hash,
{
    let mut index: HashMap<K, Vec<&R>> = HashMap::new();
    for r in right {
        index.entry(key(r)).or_default().push(r);
    }
    index
}

/// Inner join: one merged row per key-equal pair; left rows with no match
/// on the right are dropped.
pub fn inner_join<L, R, K, T>(
    left: &[L],
    right: &[R],
    left_key: impl Fn(&L) -> K,
    right_key: impl Fn(&R) -> K,
    mut merge: impl FnMut(&L, &R) -> T,
) -> Vec<T>
where
    K: Eq + Hash,
{
    let index = index_right(right, right_key);
    let mut out = Vec::new();
    for l in left {
        if let Some(matches) = index.get(&left_key(l)) {
            for r in matches {
                out.push(merge(l, r));
            }
        }
    }
    out
}

/// Left join: every left row is kept; `merge` receives `None` for the right
/// side when the key has no match.
pub fn left_join<L, R, K, T>(
    left: &[L],
    right: &[R],
    left_key: impl Fn(&L) -> K,
    right_key: impl Fn(&R) -> K,
    mut merge: impl FnMut(&L, Option<&R>) -> T,
) -> Vec<T>
where
    K: Eq + Hash,
{
    let index = index_right(right, right_key);
    let mut out = Vec::new();
    for l in left {
        match index.get(&left_key(l)) {
            Some(matches) => {
                for r in matches {
                    out.push(merge(l, Some(r)));
                }
            }
            None => out.push(merge(l, None)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn inner_join_keeps_only_matching_keys() {
        let left = [(1, "a"), (2, "b"), (3, "c")];
        let right = [(2, "B"), (3, "C"), (4, "D")];

        let joined = inner_join(
            &left,
            &right,
            |l| l.0,
            |r| r.0,
            |l, r| (l.0, l.1, r.1),
        );

        assert_eq!(joined, vec![(2, "b", "B"), (3, "c", "C")]);
    }

    #[test]
    fn inner_join_fans_out_duplicate_right_keys() {
        let left = [(1, "a")];
        let right = [(1, "x"), (1, "y")];

        let joined = inner_join(&left, &right, |l| l.0, |r| r.0, |l, r| (l.1, r.1));

        assert_eq!(joined, vec![("a", "x"), ("a", "y")]);
    }

    #[test]
    fn left_join_keeps_unmatched_left_rows() {
        let left = [(1, "a"), (9, "z")];
        let right = [(1, "A")];

        let joined = left_join(
            &left,
            &right,
            |l| l.0,
            |r| r.0,
            |l, r| (l.1, r.map(|r| r.1)),
        );

        assert_eq!(joined, vec![("a", Some("A")), ("z", None)]);
    }

    #[test]
    fn left_join_never_drops_rows() {
        let left: Vec<(i64, &str)> = (0..100).map(|i| (i, "row")).collect();
        let right = [(7, "only")];

        let joined = left_join(&left, &right, |l| l.0, |r| r.0, |l, r| (l.0, r.is_some()));

        assert_eq!(joined.len(), left.len());
        assert_eq!(joined.iter().filter(|(_, hit)| *hit).count(), 1);
    }

    #[test]
    fn joins_preserve_left_order() {
        let left = [(3, ()), (1, ()), (2, ())];
        let right = [(1, ()), (2, ()), (3, ())];

        let inner = inner_join(&left, &right, |l| l.0, |r| r.0, |l, _| l.0);
        let lefted = left_join(&left, &right, |l| l.0, |r| r.0, |l, _| l.0);

        assert_eq!(inner, vec![3, 1, 2]);
        assert_eq!(lefted, vec![3, 1, 2]);
    }
}
