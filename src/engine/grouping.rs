//! Row grouping of sorted attribute keys.
//!
//! | keys `n` | groups                                   |
//! |----------|------------------------------------------|
//! | 0        | none                                     |
//! | 1..=3    | one group of `n`                         |
//! | 4..=6    | first 3, then the remaining `n - 3`      |
//! | > 6      | first 3, each middle key alone, last 3   |

/// Keys per head and tail group.
const EDGE_GROUP_LEN: usize = 3;

/// Splits `keys` into row groups. Every key lands in exactly one group and
/// group order preserves key order.
///
/// ```
/// use compara::engine::partition;
///
/// let sizes = |n: usize| partition(&vec![0; n]).iter().map(Vec::len).collect::<Vec<_>>();
/// assert_eq!(sizes(7), [3, 1, 1, 3]);
/// assert_eq!(sizes(5), [3, 2]);
/// ```
#[must_use]
pub fn partition<T: Clone>(keys: &[T]) -> Vec<Vec<T>> {
    let n = keys.len();

    match n {
        0 => Vec::new(),
        1..=EDGE_GROUP_LEN => vec![keys.to_vec()],
        _ if n <= 2 * EDGE_GROUP_LEN => {
            let (head, rest) = keys.split_at(EDGE_GROUP_LEN);
            vec![head.to_vec(), rest.to_vec()]
        }
        _ => {
            let (head, rest) = keys.split_at(EDGE_GROUP_LEN);
            let (middle, tail) = rest.split_at(rest.len() - EDGE_GROUP_LEN);

            let mut groups = Vec::with_capacity(middle.len() + 2);
            groups.push(head.to_vec());
            groups.extend(middle.iter().map(|key| vec![key.clone()]));
            groups.push(tail.to_vec());
            groups
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(n: usize) -> Vec<usize> {
        let keys: Vec<usize> = (0..n).collect();
        partition(&keys).iter().map(Vec::len).collect()
    }

    #[test]
    fn boundary_group_sizes() {
        assert_eq!(sizes(0), Vec::<usize>::new());
        assert_eq!(sizes(1), [1]);
        assert_eq!(sizes(3), [3]);
        assert_eq!(sizes(4), [3, 1]);
        assert_eq!(sizes(6), [3, 3]);
        assert_eq!(sizes(7), [3, 1, 1, 3]);
        assert_eq!(sizes(10), [3, 1, 1, 1, 1, 3]);
    }

    #[test]
    fn partition_is_exhaustive_disjoint_and_ordered() {
        for n in 0..=25 {
            let keys: Vec<usize> = (0..n).collect();
            let flattened: Vec<usize> = partition(&keys).into_iter().flatten().collect();
            assert_eq!(flattened, keys, "n = {n}");
        }
    }

    #[test]
    fn middle_keys_are_singletons() {
        let keys = ["a", "b", "c", "d", "e", "f", "g", "h"];
        let groups = partition(&keys);
        assert_eq!(groups, vec![vec!["a", "b", "c"], vec!["d"], vec!["e"], vec!["f", "g", "h"]]);
    }
}
