//! Phase 2 tests: breadth-first and depth-first walks.

use depdag::{Dag, DagError, WalkError, WalkStrategy};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn build(nodes: &[&str], edges: &[(&str, &str)]) -> Dag<()> {
    let mut dag = Dag::new();
    for id in nodes {
        dag.add_node(*id, ()).unwrap();
    }
    for (from, to) in edges {
        dag.add_edge(from, to).unwrap();
    }
    dag
}

/// R -> X, R -> Y, X -> Z, Y -> Z
fn diamond() -> Dag<()> {
    build(
        &["R", "X", "Y", "Z"],
        &[("R", "X"), ("R", "Y"), ("X", "Z"), ("Y", "Z")],
    )
}

/// bin -> lib -> {a_o, b_o}; a_o -> a_c; b_o -> b_c
fn build_graph() -> Dag<()> {
    build(
        &["bin", "lib", "a_o", "b_o", "a_c", "b_c"],
        &[
            ("bin", "lib"),
            ("lib", "a_o"),
            ("lib", "b_o"),
            ("a_o", "a_c"),
            ("b_o", "b_c"),
        ],
    )
}

fn order(dag: &Dag<()>, start: &str, strategy: WalkStrategy) -> Vec<String> {
    let mut visited = Vec::new();
    dag.get(start)
        .unwrap()
        .walk(strategy, |node| {
            visited.push(node.id().to_string());
            Ok::<(), ()>(())
        })
        .unwrap();
    visited
}

// ==================== Ordering ====================

#[test]
fn test_depth_first_diamond() {
    init_logger();
    let dag = diamond();
    assert_eq!(
        order(&dag, "R", WalkStrategy::DepthFirst),
        vec!["R", "X", "Z", "Y", "Z"]
    );
}

#[test]
fn test_breadth_first_diamond() {
    init_logger();
    let dag = diamond();
    assert_eq!(
        order(&dag, "R", WalkStrategy::BreadthFirst),
        vec!["R", "X", "Y", "Z", "Z"]
    );
}

#[test]
fn test_build_graph_orders() {
    let dag = build_graph();
    assert_eq!(
        order(&dag, "bin", WalkStrategy::DepthFirst),
        vec!["bin", "lib", "a_o", "a_c", "b_o", "b_c"]
    );
    assert_eq!(
        order(&dag, "bin", WalkStrategy::BreadthFirst),
        vec!["bin", "lib", "a_o", "b_o", "a_c", "b_c"]
    );
}

#[test]
fn test_walk_from_inner_node_starts_there() {
    let dag = build_graph();
    assert_eq!(
        order(&dag, "lib", WalkStrategy::DepthFirst),
        vec!["lib", "a_o", "a_c", "b_o", "b_c"]
    );
    assert_eq!(
        order(&dag, "a_o", WalkStrategy::BreadthFirst),
        vec!["a_o", "a_c"]
    );
}

#[test]
fn test_walk_from_leaf_visits_only_leaf() {
    let dag = build_graph();
    for strategy in [WalkStrategy::DepthFirst, WalkStrategy::BreadthFirst] {
        assert_eq!(order(&dag, "b_c", strategy), vec!["b_c"]);
    }
}

#[test]
fn test_depth_first_is_pre_order_over_wide_tree() {
    // r -> {a, b}; a -> {a1, a2}; b -> {b1}; a1 -> {a1x}
    let dag = build(
        &["r", "a", "b", "a1", "a2", "b1", "a1x"],
        &[
            ("r", "a"),
            ("r", "b"),
            ("a", "a1"),
            ("a", "a2"),
            ("b", "b1"),
            ("a1", "a1x"),
        ],
    );
    assert_eq!(
        order(&dag, "r", WalkStrategy::DepthFirst),
        vec!["r", "a", "a1", "a1x", "a2", "b", "b1"]
    );
    assert_eq!(
        order(&dag, "r", WalkStrategy::BreadthFirst),
        vec!["r", "a", "b", "a1", "a2", "b1", "a1x"]
    );
}

// ==================== Abort ====================

#[test]
fn test_callback_error_stops_depth_first_walk() {
    init_logger();
    let dag = diamond();
    let mut visited = Vec::new();

    let result = dag.get("R").unwrap().walk(WalkStrategy::DepthFirst, |node| {
        visited.push(node.id().to_string());
        if node.id() == "X" {
            return Err("stop at X");
        }
        Ok(())
    });

    assert_eq!(result, Err("stop at X"));
    assert_eq!(visited, vec!["R", "X"]);
}

#[test]
fn test_callback_error_stops_breadth_first_walk() {
    let dag = diamond();
    let mut visited = Vec::new();

    let result = dag
        .get("R")
        .unwrap()
        .walk(WalkStrategy::BreadthFirst, |node| {
            visited.push(node.id().to_string());
            if node.id() == "X" {
                return Err(node.index());
            }
            Ok(())
        });

    assert_eq!(result, Err(dag.get("X").unwrap().index()));
    assert_eq!(visited, vec!["R", "X"]);
}

#[test]
fn test_callback_error_on_start_visits_nothing_else() {
    let dag = build_graph();
    let mut count = 0;
    let result = dag.get("bin").unwrap().walk(WalkStrategy::DepthFirst, |_| {
        count += 1;
        Err(DagError::InvalidArgument("refused".into()))
    });
    assert!(matches!(result, Err(DagError::InvalidArgument(_))));
    assert_eq!(count, 1);
}

#[test]
fn test_cycle_walk_can_be_aborted_by_callback() {
    let dag = build(&["R", "A", "B"], &[("R", "A"), ("A", "B"), ("B", "A")]);
    for strategy in [WalkStrategy::DepthFirst, WalkStrategy::BreadthFirst] {
        let mut visits = 0;
        let result = dag.get("R").unwrap().walk(strategy, |_| {
            visits += 1;
            if visits == 50 {
                Err(visits)
            } else {
                Ok(())
            }
        });
        assert_eq!(result, Err(50));
    }
}

// ==================== walk_from ====================

#[test]
fn test_walk_from_by_id() {
    let dag = build_graph();
    let mut visited = Vec::new();
    dag.walk_from("lib", WalkStrategy::BreadthFirst, |node| {
        visited.push(node.id());
        Ok::<(), ()>(())
    })
    .unwrap();
    assert_eq!(visited, vec!["lib", "a_o", "b_o", "a_c", "b_c"]);
}

#[test]
fn test_walk_from_unknown_start() {
    let dag = build_graph();
    let result = dag.walk_from("nope", WalkStrategy::DepthFirst, |_| Ok::<(), String>(()));
    match result {
        Err(WalkError::Graph(DagError::NodeNotFound(id))) => assert_eq!(id, "nope"),
        other => panic!("Expected NodeNotFound, got {:?}", other),
    }
}

#[test]
fn test_walk_from_callback_error() {
    let dag = build_graph();
    let result = dag.walk_from("bin", WalkStrategy::DepthFirst, |node| {
        if node.is_leaf() {
            Err(node.id().to_string())
        } else {
            Ok(())
        }
    });
    assert_eq!(result.unwrap_err().into_callback(), Some("a_c".to_string()));
}

// ==================== Depth ====================

#[test]
fn test_depth_first_handles_very_deep_chain() {
    const DEPTH: usize = 100_000;
    let mut dag = Dag::with_capacity(DEPTH);
    for i in 0..DEPTH {
        dag.add_node(format!("n{}", i), i).unwrap();
    }
    for i in 1..DEPTH {
        dag.add_edge(&format!("n{}", i - 1), &format!("n{}", i))
            .unwrap();
    }

    let mut expected = 0usize;
    dag.walk_from("n0", WalkStrategy::DepthFirst, |node| {
        assert_eq!(*node.payload(), expected);
        expected += 1;
        Ok::<(), ()>(())
    })
    .unwrap();
    assert_eq!(expected, DEPTH);
    assert!(dag.is_acyclic());
}

#[test]
fn test_strategy_names() {
    assert_eq!(WalkStrategy::from_name("dfs"), Some(WalkStrategy::DepthFirst));
    assert_eq!(
        WalkStrategy::from_name("Breadth-First"),
        Some(WalkStrategy::BreadthFirst)
    );
    assert_eq!(WalkStrategy::from_name("sideways"), None);
    assert_eq!(WalkStrategy::DepthFirst.name(), "depth_first");
    assert_eq!(WalkStrategy::default(), WalkStrategy::DepthFirst);
}
