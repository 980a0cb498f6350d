//! Placeholder tokens stand in for characters the host template cannot carry
//! inside generated content. They are expanded once, right before the finished
//! script is persisted.

pub const OPEN_BRACE_TOKEN: &str = "__obrace__";
pub const CLOSE_BRACE_TOKEN: &str = "__cbrace__";
pub const DOUBLE_QUOTE_TOKEN: &str = "__dquote__";

const SUBSTITUTIONS: [(&str, char); 3] = [
    (OPEN_BRACE_TOKEN, '{'),
    (CLOSE_BRACE_TOKEN, '}'),
    (DOUBLE_QUOTE_TOKEN, '"'),
];

pub fn expand_placeholders(text: &str) -> String {
    SUBSTITUTIONS
        .iter()
        .fold(text.to_string(), |acc, (token, ch)| {
            acc.replace(token, &ch.to_string())
        })
}

pub fn encode_placeholders(text: &str) -> String {
    let mut encoded = String::with_capacity(text.len());
    for ch in text.chars() {
        match SUBSTITUTIONS.iter().find(|(_, raw)| *raw == ch) {
            Some((token, _)) => encoded.push_str(token),
            None => encoded.push(ch),
        }
    }
    encoded
}

pub fn find_raw_delimiter(text: &str) -> Option<char> {
    text.chars()
        .find(|ch| SUBSTITUTIONS.iter().any(|(_, raw)| raw == ch))
}
