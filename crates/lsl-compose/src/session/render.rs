use lsl_core::join_params;

use super::{Closing, EventBlock, FunctionBlock, Session, StateBlock, INDENT};

pub(super) fn function_sentinel(name: &str) -> String {
    format!("}}  // End of '{}' function", name)
}

pub(super) fn event_sentinel(name: &str) -> String {
    format!("{}}}  // End of '{}' event", INDENT, name)
}

pub(super) fn state_sentinel(label: &str) -> String {
    format!("}}  // End of '{}' state", label)
}

impl Session {
    /// The current document text.
    pub fn document(&self) -> String {
        let mut writer = ScriptWriter::default();
        for function in &self.functions {
            writer.function(function);
        }
        for state in &self.states {
            writer.state(state);
        }
        writer.buffer
    }
}

#[derive(Default)]
struct ScriptWriter {
    buffer: String,
}

impl ScriptWriter {
    fn line(&mut self, text: &str) {
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    fn closing(&mut self, closing: &Closing, sentinel: String) {
        match closing {
            Closing::Sentinel => self.line(&sentinel),
            Closing::Bare(text) => self.line(text),
        }
        self.buffer.push('\n');
    }

    fn function(&mut self, function: &FunctionBlock) {
        self.line(&format!("{}({})", function.name, join_params(&function.params)));
        self.line("{");
        for chunk in &function.body {
            self.buffer.push_str(chunk);
        }
        self.closing(&function.closing, function_sentinel(&function.name));
    }

    fn state(&mut self, state: &StateBlock) {
        let label = state.name.label();
        self.line(&label);
        self.line("{");
        for event in &state.events {
            self.event(event);
        }
        self.closing(&state.closing, state_sentinel(&label));
    }

    fn event(&mut self, event: &EventBlock) {
        self.line(&format!(
            "{}{}({})",
            INDENT,
            event.kind,
            join_params(&event.params)
        ));
        self.line(&format!("{}{{", INDENT));
        for chunk in &event.body {
            self.buffer.push_str(chunk);
        }
        self.closing(&event.closing, event_sentinel(event.kind.name()));
    }
}
