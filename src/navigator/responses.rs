use crate::error::ResponseError;
use crate::event::ParameterResponse;
use crate::playbook::{ParameterDefinition, ParameterKind};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A user's answer to a single parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ResponseValue {
    /// Chosen options of a checklist parameter.
    Selection(Vec<String>),
    Scale(i64),
    Number(f64),
    Text(String),
}

impl ResponseValue {
    /// A short label used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            ResponseValue::Selection(_) => "checklist",
            ResponseValue::Scale(_) => "scale",
            ResponseValue::Number(_) => "number",
            ResponseValue::Text(_) => "text",
        }
    }
}

impl fmt::Display for ResponseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseValue::Selection(options) => write!(f, "{}", options.join(", ")),
            ResponseValue::Scale(v) => write!(f, "{}", v),
            ResponseValue::Number(v) => write!(f, "{}", v),
            ResponseValue::Text(v) => write!(f, "{}", v),
        }
    }
}

/// The responses collected during one walk, keyed by parameter id.
///
/// Every response is validated against its parameter's kind before it is
/// stored, so a sheet never holds a value its parameter cannot represent.
#[derive(Debug, Clone, Default)]
pub struct ResponseSheet {
    entries: AHashMap<String, ResponseValue>,
}

impl ResponseSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `value` against the parameter's kind and stores it,
    /// replacing any earlier response for the same parameter.
    pub fn record(
        &mut self,
        parameter: &ParameterDefinition,
        value: ResponseValue,
    ) -> Result<(), ResponseError> {
        Self::validate(parameter, &value)?;
        self.entries.insert(parameter.id.clone(), value);
        Ok(())
    }

    fn validate(parameter: &ParameterDefinition, value: &ResponseValue) -> Result<(), ResponseError> {
        match (&parameter.kind, value) {
            (ParameterKind::Checklist { options }, ResponseValue::Selection(chosen)) => {
                for option in chosen {
                    if !options.contains(option) {
                        return Err(ResponseError::UnknownOption {
                            parameter_id: parameter.id.clone(),
                            option: option.clone(),
                        });
                    }
                }
                Ok(())
            }
            (ParameterKind::Scale { min, max }, ResponseValue::Scale(v)) => {
                if v < min || v > max {
                    return Err(ResponseError::OutOfRange {
                        parameter_id: parameter.id.clone(),
                        value: *v,
                        min: *min,
                        max: *max,
                    });
                }
                Ok(())
            }
            (ParameterKind::Number { .. }, ResponseValue::Number(_)) => Ok(()),
            (ParameterKind::Text, ResponseValue::Text(_)) => Ok(()),
            (kind, found) => Err(ResponseError::KindMismatch {
                parameter_id: parameter.id.clone(),
                expected: kind.label(),
                found: found.label(),
            }),
        }
    }

    pub fn get(&self, parameter_id: &str) -> Option<&ResponseValue> {
        self.entries.get(parameter_id)
    }

    pub fn contains(&self, parameter_id: &str) -> bool {
        self.entries.contains_key(parameter_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the sheet into the event-record response list, sorted by
    /// parameter id for a deterministic wire format.
    pub fn into_responses(self) -> Vec<ParameterResponse> {
        let mut responses: Vec<ParameterResponse> = self
            .entries
            .into_iter()
            .map(|(parameter_id, value)| ParameterResponse {
                parameter_id,
                value,
            })
            .collect();
        responses.sort_by(|a, b| a.parameter_id.cmp(&b.parameter_id));
        responses
    }
}
