//! Build graph flow: binaries -> shared libraries -> objects -> sources.

use depdag::*;

fn main() -> DagResult<()> {
    let nodes: [(&str, Option<&str>); 11] = [
        ("a.c", Some("gpl")),
        ("b.c", Some("mit")),
        ("c.c", Some("apache2")),
        ("a.o", None),
        ("b.o", None),
        ("c.o", None),
        ("libcustom.so", None),
        ("libsysA.so", Some("apache2")),
        ("libsysB.so", Some("custom")),
        ("binA", None),
        ("binB", None),
    ];
    let edges = [
        ("binA", "libcustom.so"),
        ("binA", "libsysA.so"),
        ("binB", "libcustom.so"),
        ("binB", "libsysB.so"),
        ("libcustom.so", "a.o"),
        ("libcustom.so", "b.o"),
        ("libcustom.so", "c.o"),
        ("a.o", "a.c"),
        ("b.o", "b.c"),
        ("c.o", "c.c"),
    ];

    let mut dag: Dag<Option<&str>> = Dag::new();
    for (id, licence) in nodes {
        dag.add_node(id, licence)?;
    }
    for (from, to) in edges {
        dag.add_edge(from, to)?;
    }

    // Re-adding an edge is rejected
    if let Err(e) = dag.add_edge("a.o", "a.c") {
        println!("Error: {}", e);
    }

    let roots = dag.roots();
    println!("Roots found: {}", roots.len());

    for strategy in [WalkStrategy::DepthFirst, WalkStrategy::BreadthFirst] {
        println!("\nWalking {}", strategy.name());
        for root in &roots {
            println!("\nRoot: {}", root.id());
            root.walk(strategy, |node| {
                match node.payload() {
                    Some(licence) => println!("  Visiting node {} (licence: {})", node.id(), licence),
                    None => println!("  Visiting node {}", node.id()),
                }
                Ok::<(), DagError>(())
            })?;
        }
    }

    println!("\nAcyclic: {}", dag.is_acyclic());
    Ok(())
}
