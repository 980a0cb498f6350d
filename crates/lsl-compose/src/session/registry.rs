use std::collections::BTreeMap;

use lsl_core::StateName;

/// State name → whether its skeleton has been written.
#[derive(Debug, Clone, Default)]
pub(super) struct StateRegistry {
    flags: BTreeMap<StateName, bool>,
}

impl StateRegistry {
    pub(super) fn declare(&mut self, state: &StateName) {
        self.flags.entry(state.clone()).or_insert(false);
    }

    pub(super) fn is_materialized(&self, state: &StateName) -> bool {
        self.flags.get(state).copied().unwrap_or(false)
    }

    pub(super) fn mark_materialized(&mut self, state: &StateName) {
        self.flags.insert(state.clone(), true);
    }

    pub(super) fn clear(&mut self) {
        self.flags.clear();
    }
}
