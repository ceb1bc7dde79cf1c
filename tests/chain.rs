//! Tests for chain building: graph validation and walk-order derivation.
mod common;
use common::*;
use tebiki::error::{ChainBuildError, EdgeRole};
use tebiki::prelude::*;

#[test]
fn test_builds_simple_chain_in_edge_order() {
    let chain = build_chain(linear_playbook(4));

    assert_eq!(chain.len(), 4);
    let ids: Vec<&str> = chain.iter().map(|s| s.process.id.as_str()).collect();
    assert_eq!(ids, vec!["p1", "p2", "p3", "p4"]);
    assert_eq!(chain.head().process.id, "p1");
    assert_eq!(chain.tail().process.id, "p4");
    assert_eq!(chain.position_of("p3"), Some(2));
    assert_eq!(chain.position_of("p9"), None);
}

#[test]
fn test_single_process_playbook_builds() {
    let chain = build_chain(linear_playbook(1));
    assert_eq!(chain.len(), 1);
    assert_eq!(chain.head().process.id, chain.tail().process.id);
}

#[test]
fn test_walk_order_ignores_declaration_order() {
    // Declare the processes backwards; the edges still define p1 -> p2 -> p3.
    let mut playbook = linear_playbook(3);
    playbook.processes.reverse();

    let chain = build_chain(playbook);
    let ids: Vec<&str> = chain.iter().map(|s| s.process.id.as_str()).collect();
    assert_eq!(ids, vec!["p1", "p2", "p3"]);
}

#[test]
fn test_triggers_attach_to_successor_steps() {
    let chain = build_chain(review_playbook());

    assert_eq!(chain.head().trigger, None);
    assert_eq!(
        chain.steps()[1].trigger.as_deref(),
        Some("intake complete")
    );
    assert_eq!(chain.steps()[2].trigger.as_deref(), Some("on approval"));
}

#[test]
fn test_empty_playbook_is_rejected() {
    let playbook = PlaybookDefinition {
        id: "pb-empty".to_string(),
        ..Default::default()
    };
    let result = ChainBuilder::new(playbook).build();
    assert_eq!(
        result.err(),
        Some(ChainBuildError::EmptyPlaybook {
            playbook_id: "pb-empty".to_string()
        })
    );
}

#[test]
fn test_duplicate_process_id_is_rejected() {
    let mut playbook = linear_playbook(2);
    playbook.processes[1].id = "p1".to_string();
    let result = ChainBuilder::new(playbook).build();
    assert_eq!(
        result.err(),
        Some(ChainBuildError::DuplicateProcessId("p1".to_string()))
    );
}

#[test]
fn test_edge_to_unknown_process_is_rejected() {
    let mut playbook = linear_playbook(2);
    playbook.dependencies[0].successor_id = "ghost".to_string();
    let result = ChainBuilder::new(playbook).build();
    assert_eq!(
        result.err(),
        Some(ChainBuildError::UnknownProcess {
            missing_process_id: "ghost".to_string(),
            edge_id: "d1".to_string()
        })
    );
}

#[test]
fn test_branching_successor_is_rejected() {
    // p1 -> p2 and p1 -> p3: never silently follow the "first" edge.
    let mut playbook = linear_playbook(3);
    playbook.dependencies = vec![
        DependencyDefinition {
            id: "d1".to_string(),
            predecessor_id: "p1".to_string(),
            successor_id: "p2".to_string(),
            trigger: None,
        },
        DependencyDefinition {
            id: "d2".to_string(),
            predecessor_id: "p1".to_string(),
            successor_id: "p3".to_string(),
            trigger: None,
        },
    ];
    let result = ChainBuilder::new(playbook).build();
    assert_eq!(
        result.err(),
        Some(ChainBuildError::BranchingDependency {
            process_id: "p1".to_string(),
            role: EdgeRole::Successor
        })
    );
}

#[test]
fn test_branching_predecessor_is_rejected() {
    // p1 -> p3 and p2 -> p3.
    let mut playbook = linear_playbook(3);
    playbook.dependencies = vec![
        DependencyDefinition {
            id: "d1".to_string(),
            predecessor_id: "p1".to_string(),
            successor_id: "p3".to_string(),
            trigger: None,
        },
        DependencyDefinition {
            id: "d2".to_string(),
            predecessor_id: "p2".to_string(),
            successor_id: "p3".to_string(),
            trigger: None,
        },
    ];
    let result = ChainBuilder::new(playbook).build();
    assert_eq!(
        result.err(),
        Some(ChainBuildError::BranchingDependency {
            process_id: "p3".to_string(),
            role: EdgeRole::Predecessor
        })
    );
}

#[test]
fn test_disconnected_chain_heads_are_reported() {
    // Two separate chains: p1 -> p2 and p3 -> p4. Picking one head
    // arbitrarily would silently drop half the playbook.
    let mut playbook = linear_playbook(4);
    playbook.dependencies = vec![
        DependencyDefinition {
            id: "d1".to_string(),
            predecessor_id: "p1".to_string(),
            successor_id: "p2".to_string(),
            trigger: None,
        },
        DependencyDefinition {
            id: "d2".to_string(),
            predecessor_id: "p3".to_string(),
            successor_id: "p4".to_string(),
            trigger: None,
        },
    ];
    let result = ChainBuilder::new(playbook).build();
    assert_eq!(
        result.err(),
        Some(ChainBuildError::MultipleChainHeads {
            candidates: vec!["p1".to_string(), "p3".to_string()]
        })
    );
}

#[test]
fn test_self_edge_is_a_cycle() {
    let mut playbook = linear_playbook(2);
    playbook.dependencies.push(DependencyDefinition {
        id: "d-self".to_string(),
        predecessor_id: "p2".to_string(),
        successor_id: "p2".to_string(),
        trigger: None,
    });
    let result = ChainBuilder::new(playbook).build();
    assert_eq!(
        result.err(),
        Some(ChainBuildError::CycleDetected {
            process_id: "p2".to_string()
        })
    );
}

#[test]
fn test_full_cycle_has_no_chain_head() {
    // p1 -> p2 -> p3 -> p1: every process has a predecessor.
    let mut playbook = linear_playbook(3);
    playbook.dependencies.push(DependencyDefinition {
        id: "d3".to_string(),
        predecessor_id: "p3".to_string(),
        successor_id: "p1".to_string(),
        trigger: None,
    });
    let result = ChainBuilder::new(playbook).build();
    assert_eq!(
        result.err(),
        Some(ChainBuildError::NoChainHead {
            playbook_id: "pb-linear".to_string()
        })
    );
}

#[test]
fn test_detached_cycle_is_disconnected() {
    // p1 -> p2 is walkable, but p3 <-> p4 cycle hangs off nothing.
    let mut playbook = linear_playbook(4);
    playbook.dependencies = vec![
        DependencyDefinition {
            id: "d1".to_string(),
            predecessor_id: "p1".to_string(),
            successor_id: "p2".to_string(),
            trigger: None,
        },
        DependencyDefinition {
            id: "d2".to_string(),
            predecessor_id: "p3".to_string(),
            successor_id: "p4".to_string(),
            trigger: None,
        },
        DependencyDefinition {
            id: "d3".to_string(),
            predecessor_id: "p4".to_string(),
            successor_id: "p3".to_string(),
            trigger: None,
        },
    ];
    let result = ChainBuilder::new(playbook).build();
    assert_eq!(
        result.err(),
        Some(ChainBuildError::DisconnectedGraph {
            unreached: vec!["p3".to_string(), "p4".to_string()]
        })
    );
}

#[test]
fn test_compiled_chain_roundtrip() {
    let chain = build_chain(review_playbook());
    let compiled = chain.to_compiled();

    assert_eq!(compiled.playbook_id, "pb-review");
    assert_eq!(compiled.steps.len(), 3);
    assert_eq!(compiled.steps[0].process_id, "intake");
    assert_eq!(compiled.steps[1].trigger.as_deref(), Some("intake complete"));

    let path = std::env::temp_dir().join("tebiki_test_chain.bin");
    let path = path.to_string_lossy().to_string();
    compiled.save(&path).expect("Failed to save snapshot");
    let restored = CompiledChain::from_file(&path).expect("Failed to load snapshot");
    assert_eq!(restored, compiled);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_compiled_chain_rejects_garbage_bytes() {
    let result = CompiledChain::from_bytes(&[0xff, 0xff, 0xff, 0xff]);
    assert!(result.is_err());
}
