use lsl_core::{EventKind, LslGenError, Missing};

use super::{body_chunk, resolve_state, Closing, Session};
use crate::calls::LslCall;

const EVENT_BODY_INDENT: usize = 2;

impl Session {
    /// Adds `line` to the body of `kind` in `state`, directly above the event's
    /// sentinel. Blank lines are ignored.
    pub fn insert_event_line(
        &mut self,
        state: &str,
        kind: EventKind,
        line: &str,
    ) -> Result<(), LslGenError> {
        let Some(chunk) = body_chunk(line, EVENT_BODY_INDENT)? else {
            return Ok(());
        };
        let state = resolve_state(state)?;
        let label = state.label();

        let block = self.state_block_mut(&state).ok_or_else(|| {
            LslGenError::not_found(Missing::State, format!("Unable to find state: '{}'", label))
        })?;
        let event = block
            .events
            .iter_mut()
            .find(|event| event.kind == kind)
            .ok_or_else(|| {
                LslGenError::not_found(
                    Missing::Event,
                    format!("Unable to find event: '{}' in state: '{}'", kind, label),
                )
            })?;
        if event.closing != Closing::Sentinel {
            return Err(LslGenError::not_found(
                Missing::Sentinel,
                format!(
                    "Unable to find end of event: '{}' in state: '{}'",
                    kind, label
                ),
            ));
        }

        event.body.push(chunk);
        Ok(())
    }

    pub fn insert_call(
        &mut self,
        state: &str,
        kind: EventKind,
        call: &LslCall,
    ) -> Result<(), LslGenError> {
        self.insert_event_line(state, kind, &call.render())
    }
}
