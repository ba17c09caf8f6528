use std::collections::HashSet;

use quickcheck::{Arbitrary, Gen};

use ordered_tree::Tree;

/// An enum for the kinds of "things" to do to an ordered tree in a quicktest.
#[derive(Copy, Clone, Debug)]
enum Op<T> {
    /// Insert the value into the data structure
    Insert(T),
    /// Remove the value from the data structure
    Remove(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Remove(T::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}

fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                tree.insert(v.clone());
            }
            Op::Remove(v) => {
                tree.delete(v);
            }
        }
    }
}

quickcheck::quickcheck! {
    /// No matter what sequence of inserts and deletes was applied, the
    /// in-order traversal is strictly ascending.
    fn traversal_always_strictly_ascending(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        do_ops(&ops, &mut tree);

        let values: Vec<i8> = tree.iter().copied().collect();
        values.windows(2).all(|pair| pair[0] < pair[1])
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }

        xs.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }
        for delete in &deletes {
            tree.delete(delete);
        }

        let mut still_present = xs;
        for delete in &deletes {
            // We may have inserted the same value multiple times - drop each copy.
            while let Some(pos) = still_present.iter().position(|x| x == delete) {
                still_present.swap_remove(pos);
            }
        }

        deletes.iter().all(|x| !tree.contains(x))
            && still_present.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    /// Inserting any set of distinct values and traversing yields exactly the
    /// sorted set, with the length to match.
    fn round_trips_sorted_distinct_input(xs: HashSet<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }

        let mut expected: Vec<i8> = xs.into_iter().collect();
        expected.sort_unstable();

        tree.len() == expected.len() && tree.iter().eq(expected.iter())
    }
}

quickcheck::quickcheck! {
    /// Deleting one present value shrinks the traversal by exactly one; a
    /// duplicate insert doesn't grow it at all.
    fn size_conservation(xs: HashSet<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }
        let n = tree.len();

        if let Some(&x) = xs.iter().next() {
            tree.insert(x);
            if tree.len() != n {
                return false;
            }
            tree.delete(&x);
            tree.len() == n - 1 && tree.iter().count() == n - 1
        } else {
            n == 0
        }
    }
}
