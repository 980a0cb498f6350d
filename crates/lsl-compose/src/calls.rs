//! Builders for common library calls, rendered as ready-to-insert body lines.
//! String arguments are wrapped in quote placeholders.

use lsl_core::{encode_placeholders, LslKey, LslVector, DOUBLE_QUOTE_TOKEN};

#[derive(Debug, Clone, PartialEq)]
pub enum LslCall {
    /// `llSay(channel, "message");`
    Say { channel: i32, message: String },
    /// `llListen(channel, "name", "id", "message")`; `embed` leaves off the
    /// statement terminator so the call can sit inside a longer expression.
    Listen {
        channel: i32,
        name: String,
        id: LslKey,
        message: String,
        embed: bool,
    },
    /// `llSetColor(<r,g,b>, face);`
    SetColor { color: LslVector, face: i32 },
    /// Content passed through unchanged.
    Raw(String),
}

impl LslCall {
    pub fn render(&self) -> String {
        match self {
            Self::Say { channel, message } => {
                format!("llSay({}, {});\n", channel, quoted(message))
            }
            Self::Listen {
                channel,
                name,
                id,
                message,
                embed,
            } => {
                let call = format!(
                    "llListen({}, {}, {}, {})",
                    channel,
                    quoted(name),
                    quoted(id.as_str()),
                    quoted(message)
                );
                if *embed {
                    call
                } else {
                    format!("{};\n", call)
                }
            }
            Self::SetColor { color, face } => format!("llSetColor({}, {});\n", color, face),
            Self::Raw(text) => text.clone(),
        }
    }
}

/// A string literal with LSL escapes; quotes and braces become placeholders.
fn quoted(text: &str) -> String {
    let escaped = text
        .replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace('"', "\\\"");
    format!(
        "{}{}{}",
        DOUBLE_QUOTE_TOKEN,
        encode_placeholders(&escaped),
        DOUBLE_QUOTE_TOKEN
    )
}
