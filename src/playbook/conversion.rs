use super::definition::PlaybookDefinition;
use crate::error::PlaybookConversionError;

/// A trait for custom data models that can be converted into a Tebiki
/// `PlaybookDefinition`.
///
/// This is the primary extension point for making Tebiki format-agnostic. By
/// implementing this trait on your own structs, you provide a translation
/// layer that allows the chain builder to process your playbook export
/// format, whatever shape your persistence layer gives it.
///
/// # Example
///
/// ```rust,no_run
/// use tebiki::prelude::*;
/// use tebiki::error::PlaybookConversionError;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyStep { id: String, title: String }
/// struct MyRunbook { id: String, steps: Vec<MyStep> }
///
/// // 2. Implement `IntoPlaybook` for your top-level struct.
/// impl IntoPlaybook for MyRunbook {
///     fn into_playbook(self) -> std::result::Result<PlaybookDefinition, PlaybookConversionError> {
///         let processes = self
///             .steps
///             .into_iter()
///             .map(|step| ProcessDefinition {
///                 id: step.id,
///                 name: step.title,
///                 ..Default::default()
///             })
///             .collect();
///
///         Ok(PlaybookDefinition {
///             id: self.id,
///             processes,
///             dependencies: vec![], // Convert your edges here as well
///             ..Default::default()
///         })
///     }
/// }
/// ```
pub trait IntoPlaybook {
    /// Consumes the object and converts it into a Tebiki-compatible playbook.
    fn into_playbook(self) -> Result<PlaybookDefinition, PlaybookConversionError>;
}
