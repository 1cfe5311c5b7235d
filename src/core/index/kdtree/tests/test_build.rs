// src/core/index/kdtree/tests/test_build.rs

#[cfg(test)]
mod build_tests {
    use crate::core::index::kdtree::{KdTree, KdTreeError, Side};
    use crate::core::types::Point;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn points(coords: &[[f64; 2]]) -> Vec<Point> {
        coords.iter().map(|c| Point::new(c.to_vec())).collect()
    }

    /// The worked 2-D example: {(0,0), (5,4), (2,2), (8,1), (3,7)}.
    fn worked_example() -> Vec<Point> {
        points(&[[0.0, 0.0], [5.0, 4.0], [2.0, 2.0], [8.0, 1.0], [3.0, 7.0]])
    }

    #[test]
    fn test_build_empty() {
        let mut tree = KdTree::new(2);
        tree.build(Vec::new()).unwrap();
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
        assert_eq!(tree.height(), 0);
    }

    #[test]
    fn test_build_single_point() {
        let mut tree = KdTree::new(2);
        tree.build(points(&[[1.0, 2.0]])).unwrap();

        assert_eq!(tree.len(), 1);
        let root = tree.root().unwrap();
        let node = tree.node(root).unwrap();
        assert!(!node.has_children());
        assert!(node.parent().is_none());
        assert_eq!(node.height(), 1);
        assert_eq!(node.balance(), 0);
    }

    #[test]
    fn test_build_worked_example_shape() {
        let mut tree = KdTree::new(2);
        tree.build(worked_example()).unwrap();

        // Lower median on x picks (3,7); subtrees split on y below it.
        let root = tree.root().unwrap();
        assert_eq!(root, 4);
        let root_node = tree.node(root).unwrap();
        assert_eq!(root_node.cut_dimension(), 0);

        let low = root_node.low().unwrap();
        let high = root_node.high().unwrap();
        assert_eq!(low, 0); // (0,0)
        assert_eq!(high, 3); // (8,1)
        assert_eq!(tree.node(low).unwrap().cut_dimension(), 1);
        assert_eq!(tree.node(high).unwrap().cut_dimension(), 1);
        assert_eq!(tree.node(low).unwrap().parent_side(), Some(Side::Low));
        assert_eq!(tree.node(high).unwrap().parent_side(), Some(Side::High));

        // (2,2) hangs high off (0,0): same x half, larger y.
        let low_node = tree.node(low).unwrap();
        assert!(low_node.low().is_none());
        assert_eq!(low_node.high(), Some(2));
        assert_eq!(tree.node(2).unwrap().cut_dimension(), 0);
        assert_eq!(tree.node(2).unwrap().parent(), Some(0));

        // (5,4) hangs high off (8,1).
        let high_node = tree.node(high).unwrap();
        assert!(high_node.low().is_none());
        assert_eq!(high_node.high(), Some(1));
        assert_eq!(tree.node(1).unwrap().parent(), Some(3));
    }

    #[test]
    fn test_build_height_and_balance_bookkeeping() {
        let mut tree = KdTree::new(2);
        tree.build(worked_example()).unwrap();

        assert_eq!(tree.height(), 3);
        assert_eq!(tree.balance(), 0); // both subtrees have height 2
        assert_eq!(tree.node(0).unwrap().height(), 2);
        assert_eq!(tree.node(0).unwrap().balance(), 1); // only a high child
        assert_eq!(tree.node(3).unwrap().height(), 2);
        assert_eq!(tree.node(3).unwrap().balance(), 1);
        assert_eq!(tree.node(2).unwrap().height(), 1);
        assert_eq!(tree.node(1).unwrap().height(), 1);
    }

    #[test]
    fn test_build_completeness() {
        let input = worked_example();
        let mut tree = KdTree::new(2);
        tree.build(input.clone()).unwrap();

        // One node per input point, ids in input order.
        assert_eq!(tree.len(), input.len());
        for (id, point) in input.iter().enumerate() {
            assert_eq!(tree.point(id).unwrap(), point);
            assert_eq!(tree.node(id).unwrap().id(), id);
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        let mut first = KdTree::new(2);
        let mut second = KdTree::new(2);
        first.build(worked_example()).unwrap();
        second.build(worked_example()).unwrap();

        assert_eq!(first.root(), second.root());
        for id in 0..first.len() {
            let a = first.node(id).unwrap();
            let b = second.node(id).unwrap();
            assert_eq!(a.low(), b.low());
            assert_eq!(a.high(), b.high());
            assert_eq!(a.parent(), b.parent());
            assert_eq!(a.parent_side(), b.parent_side());
            assert_eq!(a.cut_dimension(), b.cut_dimension());
        }
    }

    #[test]
    fn test_rebuild_discards_prior_tree() {
        let mut tree = KdTree::new(2);
        tree.build(worked_example()).unwrap();
        assert_eq!(tree.len(), 5);

        tree.build(points(&[[1.0, 1.0], [2.0, 2.0]])).unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.height(), 2);
    }

    #[test]
    fn test_build_dimension_mismatch_keeps_existing_tree() {
        let mut tree = KdTree::new(2);
        tree.build(worked_example()).unwrap();

        let bad = vec![Point::new(vec![1.0, 2.0]), Point::new(vec![1.0, 2.0, 3.0])];
        let result = tree.build(bad);
        assert!(matches!(
            result,
            Err(KdTreeError::DimensionMismatch { expected: 2, actual: 3 })
        ));

        // The prior tree survives and still answers queries.
        assert_eq!(tree.len(), 5);
        let (id, _) = tree.find_nearest(&[3.0, 3.0]).unwrap();
        assert_eq!(id, 2);
    }

    #[test]
    fn test_build_dimension_zero_error() {
        let mut tree = KdTree::new(0);
        let result = tree.build(Vec::new());
        assert!(matches!(result, Err(KdTreeError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_partition_invariant_on_random_points() {
        let mut rng = StdRng::seed_from_u64(42);
        let input: Vec<Point> = (0..128)
            .map(|_| Point::new((0..3).map(|_| rng.gen_range(-100.0..100.0)).collect()))
            .collect();
        let mut tree = KdTree::new(3);
        tree.build(input).unwrap();

        // Every node must sit on the correct side of every ancestor's cut.
        for id in 0..tree.len() {
            let here = tree.node(id).unwrap();
            let mut child = here;
            while let Some(ancestor_id) = child.parent() {
                let ancestor = tree.node(ancestor_id).unwrap();
                let axis = ancestor.cut_dimension();
                let own = here.point().coordinates()[axis];
                let cut = ancestor.point().coordinates()[axis];
                match child.parent_side().unwrap() {
                    Side::Low => assert!(own <= cut),
                    Side::High => assert!(own > cut),
                }
                child = ancestor;
            }
        }
    }

    #[test]
    fn test_build_stays_depth_balanced() {
        let mut rng = StdRng::seed_from_u64(7);
        let input: Vec<Point> = (0..1024)
            .map(|_| Point::new((0..2).map(|_| rng.gen_range(-1.0..1.0)).collect()))
            .collect();
        let mut tree = KdTree::new(2);
        tree.build(input).unwrap();

        // Median selection keeps the height near log2(N); 1024 points fit
        // in height 11 exactly.
        assert_eq!(tree.height(), 11);
    }
}
