use crate::error::{ChainBuildError, EdgeRole};
use crate::playbook::DependencyDefinition;

/// A process's dependency edges resolved into explicit roles: at most one
/// edge per direction. A second edge in either direction is rejected rather
/// than truncated, since the walk can only follow a single linear chain.
#[derive(Debug, Clone, Default)]
pub(super) struct ResolvedLinks<'a> {
    pub predecessor: Option<&'a DependencyDefinition>,
    pub successor: Option<&'a DependencyDefinition>,
}

pub(super) fn resolve_links<'a>(
    process_id: &str,
    incoming: &[&'a DependencyDefinition],
    outgoing: &[&'a DependencyDefinition],
) -> Result<ResolvedLinks<'a>, ChainBuildError> {
    Ok(ResolvedLinks {
        predecessor: single_edge(process_id, incoming, EdgeRole::Predecessor)?,
        successor: single_edge(process_id, outgoing, EdgeRole::Successor)?,
    })
}

fn single_edge<'a>(
    process_id: &str,
    edges: &[&'a DependencyDefinition],
    role: EdgeRole,
) -> Result<Option<&'a DependencyDefinition>, ChainBuildError> {
    match edges {
        [] => Ok(None),
        [edge] => Ok(Some(edge)),
        _ => Err(ChainBuildError::BranchingDependency {
            process_id: process_id.to_string(),
            role,
        }),
    }
}
