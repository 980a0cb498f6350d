use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::catalog::{EventSignature, EVENT_CATALOG};
use crate::error::LslGenError;

pub const DEFAULT_STATE: &str = "default";
const STATE_LABEL_PREFIX: &str = "state ";

/// The seven LSL variable types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LslType {
    String,
    Key,
    Integer,
    Float,
    Vector,
    Rotation,
    List,
}

impl LslType {
    pub const ALL: [LslType; 7] = [
        Self::String,
        Self::Key,
        Self::Integer,
        Self::Float,
        Self::Vector,
        Self::Rotation,
        Self::List,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Key => "key",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Vector => "vector",
            Self::Rotation => "rotation",
            Self::List => "list",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.as_str() == name)
    }
}

impl fmt::Display for LslType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn is_identifier(raw: &str) -> bool {
    identifier_regex().is_match(raw)
}

fn identifier_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier regex"))
}

/// A typed parameter of a function or event signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub ty: LslType,
    pub ident: String,
}

impl Param {
    pub fn new(ty: LslType, ident: impl Into<String>) -> Result<Self, LslGenError> {
        let ident = ident.into();
        if !is_identifier(&ident) {
            return Err(LslGenError::validation(
                "VALIDATION_PARAM_IDENT",
                format!("Parameter identifier \"{}\" is not a valid identifier.", ident),
            ));
        }
        Ok(Self { ty, ident })
    }

    /// Parses a `"<type> <identifier>"` pair.
    pub fn parse_pair(pair: &str) -> Result<Self, LslGenError> {
        let tokens = pair.split_whitespace().collect::<Vec<_>>();
        let Some(first) = tokens.first() else {
            return Err(LslGenError::validation(
                "VALIDATION_PARAM_PAIR",
                "An argument needs a valid LSL type and a name, got an empty string.",
            ));
        };
        let Some(ty) = LslType::from_name(first) else {
            return Err(LslGenError::validation(
                "VALIDATION_PARAM_TYPE",
                format!(
                    "Unknown type \"{}\". LSL accepts seven types of variable data: string, key, integer, float, vector, rotation, or list.",
                    first
                ),
            ));
        };
        if tokens.len() != 2 {
            return Err(LslGenError::validation(
                "VALIDATION_PARAM_PAIR",
                format!("An argument needs a valid LSL type and a name, got \"{}\".", pair),
            ));
        }
        Self::new(ty, tokens[1])
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.ident)
    }
}

pub fn join_params(params: &[Param]) -> String {
    params
        .iter()
        .map(Param::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A validated state name. Blank input resolves to `default`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateName(String);

impl StateName {
    pub fn parse(raw: &str) -> Result<Self, LslGenError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::default_state());
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(LslGenError::validation(
                "VALIDATION_STATE_NAME_WHITESPACE",
                format!("State name \"{}\" must not contain internal whitespace.", trimmed),
            ));
        }
        if !is_identifier(trimmed) {
            return Err(LslGenError::validation(
                "VALIDATION_STATE_NAME",
                format!("State name \"{}\" is not a valid identifier.", trimmed),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn default_state() -> Self {
        Self(DEFAULT_STATE.to_string())
    }

    /// Recovers the name from a rendered label (`default` or `state <name>`).
    pub fn from_label(label: &str) -> Option<Self> {
        if label == DEFAULT_STATE {
            return Some(Self::default_state());
        }
        let name = label.strip_prefix(STATE_LABEL_PREFIX)?;
        if name == DEFAULT_STATE || !is_identifier(name) {
            return None;
        }
        Some(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_STATE
    }

    pub fn label(&self) -> String {
        if self.is_default() {
            self.0.clone()
        } else {
            format!("{}{}", STATE_LABEL_PREFIX, self.0)
        }
    }
}

impl fmt::Display for StateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The 39 LSL event kinds, in catalogue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Attach,
    AtRotTarget,
    AtTarget,
    Changed,
    Collision,
    CollisionEnd,
    CollisionStart,
    Control,
    Dataserver,
    Email,
    ExperiencePermissions,
    ExperiencePermissionsDenied,
    GameControl,
    HttpRequest,
    HttpResponse,
    LandCollision,
    LandCollisionEnd,
    LandCollisionStart,
    LinksetData,
    LinkMessage,
    Listen,
    Money,
    MovingEnd,
    MovingStart,
    NotAtRotTarget,
    NotAtTarget,
    NoSensor,
    ObjectRez,
    OnRez,
    PathUpdate,
    RunTimePermissions,
    Sensor,
    StateEntry,
    StateExit,
    Timer,
    TransactionResult,
    Touch,
    TouchEnd,
    TouchStart,
}

impl EventKind {
    pub fn signature(self) -> &'static EventSignature {
        &EVENT_CATALOG[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.signature().name
    }

    pub fn from_name(name: &str) -> Option<Self> {
        EVENT_CATALOG
            .iter()
            .find(|signature| signature.name == name)
            .map(|signature| signature.kind)
    }

    pub fn all() -> impl Iterator<Item = EventKind> {
        EVENT_CATALOG.iter().map(|signature| signature.kind)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod types_tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn parse_pair_accepts_each_lsl_type() {
        for ty in LslType::ALL {
            let param = Param::parse_pair(&format!("{} value", ty)).expect("pair should parse");
            assert_eq!(param.ty, ty);
            assert_eq!(param.ident, "value");
        }
        let spaced = Param::parse_pair("  integer   count ").expect("extra spaces should parse");
        assert_eq!(spaced.to_string(), "integer count");
    }

    #[test]
    fn parse_pair_rejects_unknown_type_and_missing_identifier() {
        let unknown = Param::parse_pair("weirdtype x").expect_err("unknown type should fail");
        assert_eq!(unknown.code, "VALIDATION_PARAM_TYPE");
        assert_eq!(unknown.kind, ErrorKind::Validation);

        let missing = Param::parse_pair("integer").expect_err("missing ident should fail");
        assert_eq!(missing.code, "VALIDATION_PARAM_PAIR");

        let extra = Param::parse_pair("integer x y").expect_err("three tokens should fail");
        assert_eq!(extra.code, "VALIDATION_PARAM_PAIR");

        let empty = Param::parse_pair("   ").expect_err("blank pair should fail");
        assert_eq!(empty.code, "VALIDATION_PARAM_PAIR");

        let ident = Param::parse_pair("integer 9lives").expect_err("bad ident should fail");
        assert_eq!(ident.code, "VALIDATION_PARAM_IDENT");
    }

    #[test]
    fn join_params_uses_comma_space() {
        let params = vec![
            Param::new(LslType::Integer, "a").expect("param"),
            Param::new(LslType::String, "b").expect("param"),
        ];
        assert_eq!(join_params(&params), "integer a, string b");
        assert_eq!(join_params(&[]), "");
    }

    #[test]
    fn state_name_defaults_and_labels() {
        let blank = StateName::parse("  ").expect("blank should default");
        assert!(blank.is_default());
        assert_eq!(blank.label(), "default");

        let two = StateName::parse(" two ").expect("name should parse");
        assert_eq!(two.as_str(), "two");
        assert_eq!(two.label(), "state two");

        let spaced = StateName::parse("two words").expect_err("whitespace should fail");
        assert_eq!(spaced.code, "VALIDATION_STATE_NAME_WHITESPACE");

        let symbol = StateName::parse("a{b").expect_err("brace should fail");
        assert_eq!(symbol.code, "VALIDATION_STATE_NAME");
    }

    #[test]
    fn state_name_from_label_inverts_label() {
        assert_eq!(
            StateName::from_label("default"),
            Some(StateName::default_state())
        );
        let two = StateName::from_label("state two").expect("label should parse");
        assert_eq!(two.as_str(), "two");
        assert_eq!(StateName::from_label("state default"), None);
        assert_eq!(StateName::from_label("two"), None);
    }

    #[test]
    fn event_kind_names_round_trip_through_catalog() {
        assert_eq!(EventKind::all().count(), 39);
        for kind in EventKind::all() {
            assert_eq!(EventKind::from_name(kind.name()), Some(kind));
            assert_eq!(kind.signature().kind, kind);
        }
        assert_eq!(EventKind::StateEntry.to_string(), "state_entry");
        assert_eq!(EventKind::from_name("remote_data"), None);
    }

    #[test]
    fn event_kind_serializes_as_snake_case() {
        let json = serde_json::to_string(&EventKind::TouchStart).expect("serialize");
        assert_eq!(json, "\"touch_start\"");
        let parsed: EventKind =
            serde_json::from_str("\"experience_permissions_denied\"").expect("deserialize");
        assert_eq!(parsed, EventKind::ExperiencePermissionsDenied);
    }
}
