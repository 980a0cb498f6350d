use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::LslGenError;

/// A UUID-shaped key literal. The empty key is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LslKey(String);

impl LslKey {
    pub fn parse(raw: &str) -> Result<Self, LslGenError> {
        if !key_regex().is_match(raw) {
            return Err(LslGenError::validation(
                "VALIDATION_KEY",
                format!("Key \"{}\" is not formatted as a UUID.", raw),
            ));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LslKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LslVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl LslVector {
    pub fn parse(raw: &str) -> Result<Self, LslGenError> {
        let components = parse_components(raw, vector_regex(), "VALIDATION_VECTOR", 3)?;
        Ok(Self {
            x: components[0],
            y: components[1],
            z: components[2],
        })
    }
}

impl fmt::Display for LslVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{:?},{:?},{:?}>", self.x, self.y, self.z)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LslRotation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub s: f64,
}

impl LslRotation {
    pub fn parse(raw: &str) -> Result<Self, LslGenError> {
        let components = parse_components(raw, rotation_regex(), "VALIDATION_ROTATION", 4)?;
        Ok(Self {
            x: components[0],
            y: components[1],
            z: components[2],
            s: components[3],
        })
    }
}

impl fmt::Display for LslRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{:?},{:?},{:?},{:?}>", self.x, self.y, self.z, self.s)
    }
}

fn parse_components(
    raw: &str,
    regex: &Regex,
    code: &str,
    expected: usize,
) -> Result<Vec<f64>, LslGenError> {
    if !regex.is_match(raw) {
        return Err(LslGenError::validation(
            code,
            format!(
                "\"{}\" is not a bracketed literal of {} floats (e.g. <0.1,0.2,0.3>).",
                raw, expected
            ),
        ));
    }

    let inner = raw.trim().trim_start_matches('<').trim_end_matches('>');
    inner
        .split(',')
        .map(|part| {
            part.trim().parse::<f64>().map_err(|_| {
                LslGenError::validation(code, format!("\"{}\" is not a float.", part.trim()))
            })
        })
        .collect()
}

const FLOAT_PATTERN: &str = r"[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)";

fn key_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(
            r"^(?:[A-Za-z0-9]{8}-[A-Za-z0-9]{4}-[A-Za-z0-9]{4}-[A-Za-z0-9]{4}-[A-Za-z0-9]{12})?$",
        )
        .expect("key regex")
    })
}

fn vector_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(&format!(
            r"^\s*<\s*(?:{f}\s*,\s*){{2}}{f}\s*>\s*$",
            f = FLOAT_PATTERN
        ))
        .expect("vector regex")
    })
}

fn rotation_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(&format!(
            r"^\s*<\s*(?:{f}\s*,\s*){{3}}{f}\s*>\s*$",
            f = FLOAT_PATTERN
        ))
        .expect("rotation regex")
    })
}
