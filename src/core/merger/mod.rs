use crate::core::types::{Parameter, ParameterList};
use std::collections::HashSet;

/// Result of merging a fresh parameter list into a persisted one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MergeOutcome {
    /// Merged list, sorted by key.
    pub parameters: ParameterList,
    /// Keys appended from the fresh list.
    pub added: Vec<String>,
    /// Persisted entries removed because the template no longer declares them.
    pub pruned: Vec<Parameter>,
}

/// Merge `fresh` (derived from the template) into `existing` (read from the
/// destination).
///
/// Persisted values always win: a key already present in `existing` is never
/// overwritten. With `prune` set, persisted keys missing from `fresh` are
/// removed and each removal is logged.
pub fn merge(existing: ParameterList, fresh: &ParameterList, prune: bool) -> MergeOutcome {
    let known: HashSet<String> = existing.keys().map(str::to_string).collect();
    let mut parameters = existing;
    let mut added = Vec::new();

    for parameter in fresh {
        if !known.contains(&parameter.parameter_key) {
            added.push(parameter.parameter_key.clone());
            parameters.push(parameter.clone());
        }
    }

    let mut pruned = Vec::new();
    if prune {
        let declared: HashSet<&str> = fresh.keys().collect();
        parameters.retain(|parameter| {
            if declared.contains(parameter.parameter_key.as_str()) {
                true
            } else {
                tracing::info!(
                    key = %parameter.parameter_key,
                    value = %parameter.parameter_value,
                    "Removing value {}",
                    parameter
                );
                pruned.push(parameter.clone());
                false
            }
        });
    }

    parameters.sort_by_key();
    MergeOutcome {
        parameters,
        added,
        pruned,
    }
}

/// Outcome for a run without a persisted list: the fresh list, sorted.
pub fn fresh_only(fresh: &ParameterList) -> MergeOutcome {
    let mut parameters = fresh.clone();
    parameters.sort_by_key();
    MergeOutcome {
        added: parameters.keys().map(str::to_string).collect(),
        parameters,
        pruned: Vec::new(),
    }
}
