//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! tebiki crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use tebiki::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load a playbook export and validate its chain
//! let document = PlaybookDocument::from_file("path/to/playbook.json")?;
//! let chain = ChainBuilder::new(document.into_playbook()?).build()?;
//!
//! // Walk the chain
//! let mut navigator = Navigator::new(chain);
//! println!("Starting at: {}", navigator.current().name);
//! while navigator.advance().is_some() {
//!     println!("Now at: {}", navigator.current().name);
//! }
//! # Ok(())
//! # }
//! ```

// Chain building and navigation
pub use crate::chain::{ChainBuilder, ChainStep, CompiledChain, ProcessChain};
pub use crate::navigator::{Navigator, ProcessView, ResponseSheet, ResponseValue};

// Playbook model
pub use crate::playbook::{
    DependencyDefinition, IntoPlaybook, NodeDefinition, NodeKind, ParameterDefinition,
    ParameterKind, PlaybookDefinition, PlaybookStatus, ProcessDefinition,
};

// Data structures
pub use crate::data::PlaybookDocument;
pub use crate::event::{EventMeta, EventRecord, ParameterResponse};

// Error types
pub use crate::error::{ChainBuildError, PlaybookConversionError, ResponseError};

// Outline formatting
pub use crate::outline::OutlineFormatter;

// Standard library re-exports commonly used with this crate
pub use std::collections::HashMap;
pub use std::path::Path;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
