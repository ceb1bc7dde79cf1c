use crate::chain::{ChainStep, ProcessChain};
use crate::error::ResponseError;
use crate::event::{EventMeta, EventRecord};
use crate::playbook::{NodeDefinition, ParameterDefinition, ProcessDefinition};

mod responses;

pub use responses::{ResponseSheet, ResponseValue};

/// A read-only view of the active process, for rendering one step of the
/// walk: the process, the trigger that led into it, and where it sits in
/// the overall chain.
#[derive(Debug, Clone, Copy)]
pub struct ProcessView<'a> {
    pub process: &'a ProcessDefinition,
    pub trigger: Option<&'a str>,
    /// Zero-based walk position.
    pub position: usize,
    pub total: usize,
}

impl<'a> ProcessView<'a> {
    pub fn nodes(&self) -> &'a [NodeDefinition] {
        &self.process.nodes
    }

    /// All parameters in scope for this process, process-level first.
    pub fn parameters(&self) -> impl Iterator<Item = &'a ParameterDefinition> {
        self.process.all_parameters()
    }
}

/// Steps a user through a validated process chain.
///
/// A `Navigator` is created from the output of a `ChainBuilder` and starts
/// at the chain head. It moves one process at a time in either direction,
/// collects parameter responses, and finalizes the walk into an
/// `EventRecord`. Traversal itself never touches the persistence layer.
pub struct Navigator {
    chain: ProcessChain,
    position: usize,
    responses: ResponseSheet,
}

impl Navigator {
    /// Creates a navigator positioned at the chain head.
    pub fn new(chain: ProcessChain) -> Self {
        Self {
            chain,
            position: 0,
            responses: ResponseSheet::new(),
        }
    }

    pub fn chain(&self) -> &ProcessChain {
        &self.chain
    }

    /// Zero-based position of the active process.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The active step, including its incoming trigger label.
    pub fn current_step(&self) -> &ChainStep {
        &self.chain.steps()[self.position]
    }

    /// The active process shown to the user.
    pub fn current(&self) -> &ProcessDefinition {
        &self.current_step().process
    }

    pub fn at_start(&self) -> bool {
        self.position == 0
    }

    /// `true` when there is no further process; the UI replaces Next with
    /// Save at this point.
    pub fn at_end(&self) -> bool {
        self.position + 1 == self.chain.len()
    }

    /// The process `advance` would move to, or `None` at the chain tail.
    pub fn peek_next(&self) -> Option<&ProcessDefinition> {
        self.chain.get(self.position + 1).map(|step| &step.process)
    }

    /// Moves forward one process and returns the new active process.
    /// A no-op returning `None` at the chain tail.
    pub fn advance(&mut self) -> Option<&ProcessDefinition> {
        if self.at_end() {
            return None;
        }
        self.position += 1;
        Some(self.current())
    }

    /// Moves back one process and returns the new active process.
    /// A no-op returning `None` at the chain head.
    pub fn retreat(&mut self) -> Option<&ProcessDefinition> {
        if self.at_start() {
            return None;
        }
        self.position -= 1;
        Some(self.current())
    }

    /// A pure read of the active process for display; no mutation.
    pub fn view(&self) -> ProcessView<'_> {
        let step = self.current_step();
        ProcessView {
            process: &step.process,
            trigger: step.trigger.as_deref(),
            position: self.position,
            total: self.chain.len(),
        }
    }

    /// Records a response for a parameter of the active process.
    ///
    /// The parameter must be in scope for the current process (attached to
    /// it directly or to one of its nodes) and the value must match the
    /// parameter's kind.
    pub fn record(&mut self, parameter_id: &str, value: ResponseValue) -> Result<(), ResponseError> {
        let parameter = self.current().parameter(parameter_id).cloned().ok_or_else(|| {
            ResponseError::UnknownParameter {
                parameter_id: parameter_id.to_string(),
            }
        })?;
        self.responses.record(&parameter, value)
    }

    pub fn responses(&self) -> &ResponseSheet {
        &self.responses
    }

    /// Finalizes the walk into an event record.
    ///
    /// Every mandatory parameter of every process visited so far (head up to
    /// and including the current position) must have a response; the first
    /// one missing is reported. The record carries the current process id so
    /// a walk saved before the tail stays resumable.
    pub fn finish(self, meta: EventMeta) -> Result<EventRecord, ResponseError> {
        for step in &self.chain.steps()[..=self.position] {
            for parameter in step.process.all_parameters() {
                if parameter.mandatory && !self.responses.contains(&parameter.id) {
                    return Err(ResponseError::MissingMandatory {
                        parameter_id: parameter.id.clone(),
                        process_id: step.process.id.clone(),
                    });
                }
            }
        }

        Ok(EventRecord {
            name: meta.name,
            description: meta.description,
            owner_id: meta.owner_id,
            playbook_id: self.chain.playbook_id().to_string(),
            current_process_id: self.current().id.clone(),
            responses: self.responses.into_responses(),
        })
    }
}
