use lsl_core::{encode_placeholders, EventKind, LslGenError, LslKey, LslVector};
use lsl_compose::LslCall;
use serde::{Deserialize, Serialize};

pub const RECIPE_SCHEMA_V1: &str = "lslgen-recipe.v1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub schema_version: String,
    #[serde(default)]
    pub operations: Vec<RecipeOp>,
}

/// One step of a recipe. Lines are plain LSL; braces and quotes are encoded
/// into placeholders before they reach the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum RecipeOp {
    Event {
        #[serde(default)]
        state: String,
        event: EventKind,
        /// Catalogue names are used when absent.
        #[serde(default)]
        params: Option<Vec<String>>,
    },
    EventLine {
        #[serde(default)]
        state: String,
        event: EventKind,
        line: String,
    },
    Call {
        #[serde(default)]
        state: String,
        event: EventKind,
        call: CallSpec,
    },
    Function {
        name: String,
        #[serde(default)]
        params: Vec<Vec<String>>,
    },
    FunctionLine {
        name: String,
        line: String,
    },
    FunctionBlankLine {
        name: String,
    },
}

impl RecipeOp {
    pub fn op_name(&self) -> &'static str {
        match self {
            Self::Event { .. } => "event",
            Self::EventLine { .. } => "eventLine",
            Self::Call { .. } => "call",
            Self::Function { .. } => "function",
            Self::FunctionLine { .. } => "functionLine",
            Self::FunctionBlankLine { .. } => "functionBlankLine",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "fn")]
pub enum CallSpec {
    #[serde(rename = "llSay")]
    Say { channel: i32, message: String },
    #[serde(rename = "llListen")]
    Listen {
        channel: i32,
        #[serde(default)]
        name: String,
        #[serde(default)]
        id: String,
        #[serde(default)]
        message: String,
        #[serde(default)]
        embed: bool,
    },
    #[serde(rename = "llSetColor")]
    SetColor { color: String, face: i32 },
    #[serde(rename = "raw")]
    Raw { text: String },
}

impl CallSpec {
    /// Validates literal arguments and builds the call. Raw text is plain LSL
    /// and gets the same placeholder encoding as recipe lines.
    pub fn to_call(&self) -> Result<LslCall, LslGenError> {
        let call = match self {
            Self::Say { channel, message } => LslCall::Say {
                channel: *channel,
                message: message.clone(),
            },
            Self::Listen {
                channel,
                name,
                id,
                message,
                embed,
            } => LslCall::Listen {
                channel: *channel,
                name: name.clone(),
                id: LslKey::parse(id)?,
                message: message.clone(),
                embed: *embed,
            },
            Self::SetColor { color, face } => LslCall::SetColor {
                color: LslVector::parse(color)?,
                face: *face,
            },
            Self::Raw { text } => LslCall::Raw(encode_placeholders(text)),
        };
        Ok(call)
    }
}

#[cfg(test)]
mod recipe_tests {
    use super::*;

    #[test]
    fn recipe_deserialize_supports_all_operations() {
        let parsed: Recipe = serde_json::from_str(
            r#"{
  "schemaVersion": "lslgen-recipe.v1",
  "operations": [
    {"op":"event","event":"state_entry"},
    {"op":"event","state":"two","event":"listen","params":["c","n","i","m"]},
    {"op":"eventLine","event":"state_entry","line":"x = 1;"},
    {"op":"call","event":"state_entry","call":{"fn":"llSay","channel":0,"message":"hi"}},
    {"op":"function","name":"Show","params":[["integer a"],["string b"]]},
    {"op":"functionLine","name":"Show","line":"llOwnerSay(b);"},
    {"op":"functionBlankLine","name":"Show"}
  ]
}"#,
        )
        .expect("recipe should deserialize");

        assert_eq!(parsed.schema_version, RECIPE_SCHEMA_V1);
        let names = parsed
            .operations
            .iter()
            .map(RecipeOp::op_name)
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![
                "event",
                "event",
                "eventLine",
                "call",
                "function",
                "functionLine",
                "functionBlankLine"
            ]
        );
        assert_eq!(
            parsed.operations[0],
            RecipeOp::Event {
                state: String::new(),
                event: EventKind::StateEntry,
                params: None,
            }
        );
    }

    #[test]
    fn recipe_rejects_unknown_event_names() {
        let error = serde_json::from_str::<RecipeOp>(r#"{"op":"event","event":"remote_data"}"#)
            .expect_err("unknown event should fail");
        assert!(error.to_string().contains("remote_data"));
    }

    #[test]
    fn call_spec_validates_literals() {
        let listen: CallSpec =
            serde_json::from_str(r#"{"fn":"llListen","channel":-5,"embed":true}"#)
                .expect("listen should deserialize");
        assert!(matches!(
            listen.to_call().expect("empty key is valid"),
            LslCall::Listen { embed: true, .. }
        ));

        let bad_key = CallSpec::Listen {
            channel: 0,
            name: String::new(),
            id: "not-a-key".to_string(),
            message: String::new(),
            embed: false,
        };
        assert_eq!(
            bad_key.to_call().expect_err("key should fail").code,
            "VALIDATION_KEY"
        );

        let bad_color = CallSpec::SetColor {
            color: "<1,0>".to_string(),
            face: 0,
        };
        assert_eq!(
            bad_color.to_call().expect_err("vector should fail").code,
            "VALIDATION_VECTOR"
        );
    }
}
