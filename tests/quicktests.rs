//! Property tests driving the tree through its public API only.

use std::collections::HashSet;

use bst_set::Tree;

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

        let mut still_present: HashSet<_> = xs.into_iter().collect();
        for delete in &deletes {
            still_present.remove(delete);
        }

        deletes.iter().all(|x| !tree.contains(x))
            && still_present.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn node_count_tracks_distinct_inserts(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        let mut distinct = 0;
        for x in &xs {
            if tree.insert(*x) {
                distinct += 1;
            }
        }

        tree.info().nodes == distinct
    }
}

quickcheck::quickcheck! {
    fn rebalance_preserves_membership(xs: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        tree.rebalance();

        xs.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn cloned_trees_do_not_share_nodes(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let mut copy = tree.clone();

        for delete in &deletes {
            copy.delete(delete);
        }

        xs.iter().all(|x| tree.contains(x))
    }
}
