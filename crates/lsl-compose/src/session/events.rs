use lsl_core::{EventKind, LslGenError, Param, StateName};

use super::{default_state_notice, resolve_state, Closing, EventBlock, Session, StateBlock};

impl Session {
    /// Adds an empty `kind` block to `state`, writing the state's skeleton
    /// first if it has none yet. `params` are the identifiers bound to the
    /// kind's fixed parameter types.
    pub fn register_event(
        &mut self,
        state: &str,
        kind: EventKind,
        params: &[&str],
    ) -> Result<(), LslGenError> {
        let raw = state;
        let state = resolve_state(raw)?;
        let params = kind.signature().bind(params)?;
        let materialized = self.append_event(state, kind, params)?;
        report_default_state(raw, materialized);
        Ok(())
    }

    /// Same as [`Session::register_event`] with the catalogue's parameter names.
    pub fn register_event_with_defaults(
        &mut self,
        state: &str,
        kind: EventKind,
    ) -> Result<(), LslGenError> {
        let raw = state;
        let state = resolve_state(raw)?;
        let params = kind.signature().canonical_params();
        let materialized = self.append_event(state, kind, params)?;
        report_default_state(raw, materialized);
        Ok(())
    }

    /// Returns `true` when the state's skeleton was written by this call.
    pub(super) fn append_event(
        &mut self,
        state: StateName,
        kind: EventKind,
        params: Vec<Param>,
    ) -> Result<bool, LslGenError> {
        if let Some(block) = self.state_block(&state) {
            if block.events.iter().any(|event| event.kind == kind) {
                return Err(LslGenError::validation(
                    "VALIDATION_EVENT_DUPLICATE",
                    format!(
                        "Event '{}' is already registered in state '{}'.",
                        kind,
                        state.label()
                    ),
                ));
            }
        }

        let event = EventBlock {
            kind,
            params,
            body: Vec::new(),
            closing: Closing::Sentinel,
        };

        if self.states.is_empty() || !self.registry.is_materialized(&state) {
            self.states.push(StateBlock {
                name: state.clone(),
                events: vec![event],
                closing: Closing::Sentinel,
            });
            self.registry.mark_materialized(&state);
            return Ok(true);
        }

        // Registry flags and state blocks change together; a materialized
        // state without a block means the two have drifted apart.
        let label = state.label();
        let block = self.state_block_mut(&state).ok_or_else(|| {
            LslGenError::structural(
                "STRUCTURAL_NO_ANCHOR",
                format!("Could not find end of current state: '{}'", label),
            )
        })?;
        block.events.push(event);
        Ok(false)
    }
}

fn report_default_state(raw: &str, materialized: bool) {
    if let Some(notice) = default_state_notice(raw, materialized) {
        log::warn!("{}", notice);
    }
}
