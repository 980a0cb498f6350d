use lsl_core::{find_raw_delimiter, EventKind, LslGenError, Param, StateName};

mod event_body;
mod events;
mod functions;
mod load;
mod registry;
mod render;

use registry::StateRegistry;

/// One indent unit of generated text.
pub const INDENT: &str = "    ";

/// A generation session: the script-in-progress and its state registry.
///
/// The script is held as states, events and functions with their body lines and
/// is serialized to text by [`Session::document`]. Every operation validates its
/// input before touching the model, so a failed call leaves the document as it
/// was.
#[derive(Debug, Clone, Default)]
pub struct Session {
    registry: StateRegistry,
    states: Vec<StateBlock>,
    functions: Vec<FunctionBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Closing {
    Sentinel,
    /// A closing line without its end-of-block comment, kept verbatim.
    Bare(String),
}

#[derive(Debug, Clone)]
struct StateBlock {
    name: StateName,
    events: Vec<EventBlock>,
    closing: Closing,
}

#[derive(Debug, Clone)]
struct EventBlock {
    kind: EventKind,
    params: Vec<Param>,
    body: Vec<String>,
    closing: Closing,
}

#[derive(Debug, Clone)]
struct FunctionBlock {
    name: String,
    params: Vec<Param>,
    body: Vec<String>,
    closing: Closing,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the document and forgets every state.
    pub fn reset(&mut self) {
        self.registry.clear();
        self.states.clear();
        self.functions.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty() && self.functions.is_empty()
    }

    /// Registers a state without materializing it; its skeleton is written by
    /// the first event registered for it.
    pub fn declare_state(&mut self, raw: &str) -> Result<StateName, LslGenError> {
        let state = resolve_state(raw)?;
        self.registry.declare(&state);
        Ok(state)
    }

    pub fn is_materialized(&self, raw: &str) -> bool {
        StateName::parse(raw)
            .map(|state| self.registry.is_materialized(&state))
            .unwrap_or(false)
    }

    pub fn state_names(&self) -> Vec<StateName> {
        self.states.iter().map(|block| block.name.clone()).collect()
    }

    pub fn function_names(&self) -> Vec<String> {
        self.functions.iter().map(|block| block.name.clone()).collect()
    }

    pub fn events_of(&self, raw: &str) -> Option<Vec<EventKind>> {
        let state = StateName::parse(raw).ok()?;
        self.state_block(&state)
            .map(|block| block.events.iter().map(|event| event.kind).collect())
    }

    fn state_block(&self, state: &StateName) -> Option<&StateBlock> {
        self.states.iter().find(|block| &block.name == state)
    }

    fn state_block_mut(&mut self, state: &StateName) -> Option<&mut StateBlock> {
        self.states.iter_mut().find(|block| &block.name == state)
    }

    fn function_block_mut(&mut self, name: &str) -> Option<&mut FunctionBlock> {
        self.functions.iter_mut().find(|block| block.name == name)
    }
}

fn resolve_state(raw: &str) -> Result<StateName, LslGenError> {
    StateName::parse(raw)
}

/// The blank-state diagnostic. It is reported once, when an event registered
/// with a blank state name writes the `default` skeleton.
fn default_state_notice(raw: &str, materialized: bool) -> Option<String> {
    if materialized && raw.trim().is_empty() {
        Some(format!(
            "State name not provided. Defaulting to '{}'.",
            lsl_core::DEFAULT_STATE
        ))
    } else {
        None
    }
}

/// Turns caller content into the text stored above a sentinel. Returns `None`
/// for blank content.
fn body_chunk(line: &str, indent_units: usize) -> Result<Option<String>, LslGenError> {
    if line.trim().is_empty() {
        return Ok(None);
    }
    if let Some(raw) = find_raw_delimiter(line) {
        return Err(LslGenError::validation(
            "VALIDATION_LINE_RAW_DELIMITER",
            format!(
                "Content contains a raw '{}'; use the placeholder tokens instead: {}",
                raw,
                line.trim_end()
            ),
        ));
    }

    let mut chunk = INDENT.repeat(indent_units);
    chunk.push_str(line);
    if !chunk.ends_with('\n') {
        chunk.push('\n');
    }
    Ok(Some(chunk))
}
