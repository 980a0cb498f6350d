use std::sync::OnceLock;

use lsl_core::{EventKind, LslGenError, Param, StateName};
use regex::Regex;

use super::render::{event_sentinel, function_sentinel, state_sentinel};
use super::{Closing, EventBlock, FunctionBlock, Session, StateBlock, INDENT};

impl Session {
    /// Replaces the document with `text`, which must follow the layout this
    /// session renders: functions first, then state blocks of events, each
    /// block closed by its sentinel line. Statements inside bodies are kept
    /// verbatim and never interpreted.
    pub fn set_document(&mut self, text: &str) -> Result<(), LslGenError> {
        let loaded = DocumentLoader::new(text).load()?;
        *self = loaded;
        Ok(())
    }
}

struct DocumentLoader<'a> {
    lines: Vec<&'a str>,
    cursor: usize,
}

impl<'a> DocumentLoader<'a> {
    fn new(text: &'a str) -> Self {
        let mut lines = text.split('\n').collect::<Vec<_>>();
        if text.ends_with('\n') {
            lines.pop();
        }
        Self { lines, cursor: 0 }
    }

    fn load(mut self) -> Result<Session, LslGenError> {
        let mut session = Session::new();

        while let Some(line) = self.next_non_blank() {
            if let Some(state) = StateName::from_label(line) {
                if session.state_block(&state).is_some() {
                    return Err(self.unrecognized(format!(
                        "state '{}' appears twice",
                        state.label()
                    )));
                }
                let block = self.state(state)?;
                session.registry.mark_materialized(&block.name);
                session.states.push(block);
            } else if let Some(captures) = function_header_regex().captures(line) {
                if !session.states.is_empty() {
                    return Err(self.unrecognized("functions must precede every state"));
                }
                let name = captures[1].to_string();
                if session.functions.iter().any(|block| block.name == name) {
                    return Err(self.unrecognized(format!("function '{}' appears twice", name)));
                }
                let params = self.params(&captures[2])?;
                let block = self.function(name, params)?;
                session.functions.push(block);
            } else {
                return Err(self.unrecognized("expected a function or state header"));
            }
        }

        Ok(session)
    }

    fn next_non_blank(&mut self) -> Option<&'a str> {
        while let Some(&line) = self.lines.get(self.cursor) {
            if !line.trim().is_empty() {
                return Some(line);
            }
            self.cursor += 1;
        }
        None
    }

    fn take(&mut self) -> Option<&'a str> {
        let line = self.lines.get(self.cursor).copied();
        if line.is_some() {
            self.cursor += 1;
        }
        line
    }

    fn expect(&mut self, expected: &str) -> Result<(), LslGenError> {
        if self.lines.get(self.cursor) == Some(&expected) {
            self.cursor += 1;
            return Ok(());
        }
        Err(self.unrecognized(format!("expected \"{}\"", expected)))
    }

    fn function(
        &mut self,
        name: String,
        params: Vec<Param>,
    ) -> Result<FunctionBlock, LslGenError> {
        self.take();
        self.expect("{")?;
        let (body, closing) = self.body("", &function_sentinel(&name), &name)?;
        Ok(FunctionBlock {
            name,
            params,
            body,
            closing,
        })
    }

    fn state(&mut self, name: StateName) -> Result<StateBlock, LslGenError> {
        self.take();
        self.expect("{")?;
        let label = name.label();
        let mut events: Vec<EventBlock> = Vec::new();

        loop {
            let Some(line) = self.lines.get(self.cursor).copied() else {
                return Err(self.unrecognized(format!("state '{}' is never closed", label)));
            };
            if line.trim().is_empty() {
                self.cursor += 1;
                continue;
            }
            if line.starts_with('}') {
                self.cursor += 1;
                let closing = closing_for(line, &state_sentinel(&label));
                return Ok(StateBlock {
                    name,
                    events,
                    closing,
                });
            }

            let Some(captures) = event_header_regex().captures(line) else {
                return Err(self.unrecognized(format!("expected an event in state '{}'", label)));
            };
            let Some(kind) = EventKind::from_name(&captures[1]) else {
                return Err(self.unrecognized(format!("unknown event '{}'", &captures[1])));
            };
            if events.iter().any(|event| event.kind == kind) {
                return Err(self.unrecognized(format!(
                    "event '{}' appears twice in state '{}'",
                    kind, label
                )));
            }
            let params = self.params(&captures[2])?;
            let expected = kind.signature().params;
            if params.len() != expected.len()
                || params.iter().zip(expected).any(|(param, sig)| param.ty != sig.ty)
            {
                return Err(self.unrecognized(format!(
                    "parameters of '{}' do not match its signature",
                    kind
                )));
            }

            self.take();
            self.expect(&format!("{}{{", INDENT))?;
            let (body, closing) = self.body(INDENT, &event_sentinel(kind.name()), kind.name())?;
            events.push(EventBlock {
                kind,
                params,
                body,
                closing,
            });
        }
    }

    /// Collects body lines up to the closing brace at `indent`.
    fn body(
        &mut self,
        indent: &str,
        sentinel: &str,
        owner: &str,
    ) -> Result<(Vec<String>, Closing), LslGenError> {
        let close_prefix = format!("{}}}", indent);
        let mut body = Vec::new();
        while let Some(line) = self.take() {
            if line.starts_with(&close_prefix) {
                return Ok((body, closing_for(line, sentinel)));
            }
            if line.starts_with('}') {
                self.cursor -= 1;
                break;
            }
            body.push(format!("{}\n", line));
        }
        Err(self.unrecognized(format!("block '{}' is never closed", owner)))
    }

    fn params(&self, raw: &str) -> Result<Vec<Param>, LslGenError> {
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        raw.split(',')
            .map(|pair| {
                Param::parse_pair(pair).map_err(|error| self.unrecognized(error.message))
            })
            .collect()
    }

    fn unrecognized(&self, detail: impl Into<String>) -> LslGenError {
        LslGenError::structural(
            "STRUCTURAL_UNRECOGNIZED_LAYOUT",
            format!("line {}: {}", self.cursor + 1, detail.into()),
        )
    }
}

fn closing_for(line: &str, sentinel: &str) -> Closing {
    if line == sentinel {
        Closing::Sentinel
    } else {
        Closing::Bare(line.to_string())
    }
}

fn function_header_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)\((.*)\)\s*$").expect("function header regex")
    })
}

fn event_header_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^    ([a-z_]+)\((.*)\)\s*$").expect("event header regex"))
}
