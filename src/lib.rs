//! # Tebiki - Playbook Chain Validation and Navigation Engine
//!
//! **Tebiki** turns a playbook - a set of business processes linked by directed
//! dependency edges - into a validated, linear **process chain**, and then walks
//! a user through that chain one process at a time while collecting parameter
//! responses. The walk is finalized into an event record ready to be handed to
//! a persistence layer.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical internal model of
//! a "playbook definition." The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse your playbook export (e.g. JSON from your
//!     persistence layer) into your own Rust structs, or use the bundled
//!     [`data::PlaybookDocument`] model.
//! 2.  **Convert to Tebiki's Model**: Implement the `IntoPlaybook` trait for
//!     your structs to translate them into a `PlaybookDefinition`.
//! 3.  **Build**: Use `ChainBuilder` to validate the dependency graph and
//!     derive the linear traversal order. Malformed graphs (branching, cycles,
//!     missing or ambiguous chain heads) fail fast with a `ChainBuildError`.
//! 4.  **Navigate**: Create a `Navigator` over the chain and step forward and
//!     backward, recording responses, then `finish` into an `EventRecord`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tebiki::prelude::*;
//! use tebiki::event::EventMeta;
//! use tebiki::navigator::ResponseValue;
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let playbook = PlaybookDefinition {
//!         id: "pb-1".to_string(),
//!         name: "Incident response".to_string(),
//!         processes: vec![
//!             ProcessDefinition {
//!                 id: "p1".to_string(),
//!                 name: "Triage".to_string(),
//!                 description: None,
//!                 nodes: vec![],
//!                 parameters: vec![ParameterDefinition {
//!                     id: "severity".to_string(),
//!                     prompt: "Severity (1-5)?".to_string(),
//!                     mandatory: true,
//!                     kind: ParameterKind::Scale { min: 1, max: 5 },
//!                 }],
//!             },
//!             ProcessDefinition {
//!                 id: "p2".to_string(),
//!                 name: "Mitigation".to_string(),
//!                 description: None,
//!                 nodes: vec![],
//!                 parameters: vec![],
//!             },
//!         ],
//!         dependencies: vec![DependencyDefinition {
//!             id: "d1".to_string(),
//!             predecessor_id: "p1".to_string(),
//!             successor_id: "p2".to_string(),
//!             trigger: Some("triage complete".to_string()),
//!         }],
//!         ..Default::default()
//!     };
//!
//!     // Validate the graph and derive the walk order.
//!     let chain = ChainBuilder::new(playbook).build()?;
//!     println!("{}", OutlineFormatter::format_chain(&chain));
//!
//!     // Walk the chain, collecting responses along the way.
//!     let mut navigator = Navigator::new(chain);
//!     navigator.record("severity", ResponseValue::Scale(3))?;
//!     navigator.advance();
//!
//!     // Finalize the walk into an event record for the persistence layer.
//!     let event = navigator.finish(EventMeta {
//!         name: "2026-08 outage".to_string(),
//!         description: None,
//!         owner_id: "user-42".to_string(),
//!     })?;
//!     println!("{}", event.to_json()?);
//!
//!     Ok(())
//! }
//! ```

pub mod chain;
pub mod data;
pub mod error;
pub mod event;
pub mod navigator;
pub mod outline;
pub mod playbook;
pub mod prelude;
