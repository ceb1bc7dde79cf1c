use crate::error::ChainBuildError;
use crate::playbook::{DependencyDefinition, PlaybookDefinition, ProcessDefinition};
use ahash::AHashMap;
use itertools::Itertools;
use std::collections::HashMap;

mod links;
pub mod snapshot;

use links::{ResolvedLinks, resolve_links};
pub use snapshot::{ChainStepRecord, CompiledChain};

/// One position in the validated walk order: the process itself and the
/// trigger label of the edge that leads into it (`None` for the head).
#[derive(Debug, Clone)]
pub struct ChainStep {
    pub process: ProcessDefinition,
    pub trigger: Option<String>,
}

/// The validated, linearized form of a playbook's process graph.
///
/// A `ProcessChain` is the artifact produced by a `ChainBuilder`. It is
/// guaranteed non-empty, acyclic and branch-free, so every accessor that
/// assumes a head can rely on one existing.
#[derive(Debug, Clone)]
pub struct ProcessChain {
    playbook_id: String,
    playbook_name: String,
    steps: Vec<ChainStep>,
    positions: AHashMap<String, usize>,
}

/// Validates a playbook's dependency graph and derives its linear chain.
pub struct ChainBuilder {
    playbook: PlaybookDefinition,
}

impl ChainBuilder {
    pub fn new(playbook: PlaybookDefinition) -> Self {
        Self { playbook }
    }

    /// Consumes the builder and produces the validated chain.
    ///
    /// Fails fast on every malformed-graph shape instead of silently walking
    /// whatever edge comes first: duplicate process ids, edges referencing
    /// unknown processes, branching (more than one edge per direction on a
    /// process), cycles, a missing or ambiguous chain head, and processes
    /// unreachable from the head.
    pub fn build(self) -> Result<ProcessChain, ChainBuildError> {
        let playbook = self.playbook;
        if playbook.processes.is_empty() {
            return Err(ChainBuildError::EmptyPlaybook {
                playbook_id: playbook.id,
            });
        }

        // Index processes by id, rejecting duplicates.
        let mut index: AHashMap<&str, usize> = AHashMap::with_capacity(playbook.processes.len());
        for (position, process) in playbook.processes.iter().enumerate() {
            if index.insert(process.id.as_str(), position).is_some() {
                return Err(ChainBuildError::DuplicateProcessId(process.id.clone()));
            }
        }

        // Every edge must reference known processes. A self-edge is the
        // smallest possible cycle and is reported as such.
        for edge in &playbook.dependencies {
            for endpoint in [&edge.predecessor_id, &edge.successor_id] {
                if !index.contains_key(endpoint.as_str()) {
                    return Err(ChainBuildError::UnknownProcess {
                        missing_process_id: endpoint.clone(),
                        edge_id: edge.id.clone(),
                    });
                }
            }
            if edge.predecessor_id == edge.successor_id {
                return Err(ChainBuildError::CycleDetected {
                    process_id: edge.predecessor_id.clone(),
                });
            }
        }

        // Group edges by the process they touch, then resolve each process
        // down to at most one edge per direction.
        let incoming: HashMap<&str, Vec<&DependencyDefinition>> = playbook
            .dependencies
            .iter()
            .map(|edge| (edge.successor_id.as_str(), edge))
            .into_group_map();
        let outgoing: HashMap<&str, Vec<&DependencyDefinition>> = playbook
            .dependencies
            .iter()
            .map(|edge| (edge.predecessor_id.as_str(), edge))
            .into_group_map();

        let mut links: Vec<ResolvedLinks<'_>> = Vec::with_capacity(playbook.processes.len());
        for process in &playbook.processes {
            links.push(resolve_links(
                &process.id,
                incoming
                    .get(process.id.as_str())
                    .map_or(&[][..], |edges| edges.as_slice()),
                outgoing
                    .get(process.id.as_str())
                    .map_or(&[][..], |edges| edges.as_slice()),
            )?);
        }

        // The chain head is the unique process with no predecessor edge.
        let heads: Vec<usize> = (0..playbook.processes.len())
            .filter(|&position| links[position].predecessor.is_none())
            .collect();
        let head = match heads.as_slice() {
            [] => {
                return Err(ChainBuildError::NoChainHead {
                    playbook_id: playbook.id,
                });
            }
            [head] => *head,
            _ => {
                return Err(ChainBuildError::MultipleChainHeads {
                    candidates: heads
                        .iter()
                        .map(|&position| playbook.processes[position].id.clone())
                        .collect(),
                });
            }
        };

        // Walk successor edges from the head. The visited marks guard the
        // single-predecessor invariant established above.
        let mut order: Vec<(usize, Option<String>)> = Vec::with_capacity(playbook.processes.len());
        let mut visited = vec![false; playbook.processes.len()];
        let mut cursor = head;
        let mut trigger: Option<String> = None;
        loop {
            if visited[cursor] {
                return Err(ChainBuildError::CycleDetected {
                    process_id: playbook.processes[cursor].id.clone(),
                });
            }
            visited[cursor] = true;
            order.push((cursor, trigger.take()));
            match links[cursor].successor {
                Some(edge) => {
                    trigger = edge.trigger.clone();
                    cursor = index.get(edge.successor_id.as_str()).copied().ok_or_else(|| {
                        ChainBuildError::UnknownProcess {
                            missing_process_id: edge.successor_id.clone(),
                            edge_id: edge.id.clone(),
                        }
                    })?;
                }
                None => break,
            }
        }

        if order.len() != playbook.processes.len() {
            let unreached = playbook
                .processes
                .iter()
                .enumerate()
                .filter(|&(position, _)| !visited[position])
                .map(|(_, process)| process.id.clone())
                .collect();
            return Err(ChainBuildError::DisconnectedGraph { unreached });
        }

        // Materialize the steps in walk order.
        let steps: Vec<ChainStep> = order
            .into_iter()
            .map(|(position, trigger)| ChainStep {
                process: playbook.processes[position].clone(),
                trigger,
            })
            .collect();
        let positions = steps
            .iter()
            .enumerate()
            .map(|(position, step)| (step.process.id.clone(), position))
            .collect();

        Ok(ProcessChain {
            playbook_id: playbook.id,
            playbook_name: playbook.name,
            steps,
            positions,
        })
    }
}

impl ProcessChain {
    pub fn builder(playbook: PlaybookDefinition) -> ChainBuilder {
        ChainBuilder::new(playbook)
    }

    pub fn playbook_id(&self) -> &str {
        &self.playbook_id
    }

    pub fn playbook_name(&self) -> &str {
        &self.playbook_name
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The first step of the walk.
    pub fn head(&self) -> &ChainStep {
        &self.steps[0]
    }

    /// The final step of the walk.
    pub fn tail(&self) -> &ChainStep {
        &self.steps[self.steps.len() - 1]
    }

    pub fn get(&self, position: usize) -> Option<&ChainStep> {
        self.steps.get(position)
    }

    /// The walk position of a process, if it is part of this chain.
    pub fn position_of(&self, process_id: &str) -> Option<usize> {
        self.positions.get(process_id).copied()
    }

    pub fn steps(&self) -> &[ChainStep] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChainStep> {
        self.steps.iter()
    }

    /// Captures the validated walk order as a serializable snapshot.
    pub fn to_compiled(&self) -> CompiledChain {
        CompiledChain {
            playbook_id: self.playbook_id.clone(),
            steps: self
                .steps
                .iter()
                .map(|step| ChainStepRecord {
                    process_id: step.process.id.clone(),
                    process_name: step.process.name.clone(),
                    trigger: step.trigger.clone(),
                })
                .collect(),
        }
    }
}
