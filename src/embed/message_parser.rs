use regex::Regex;
use std::sync::LazyLock;

///
/// Description, then the first parenthesized group. The group may not
/// be empty and ends at the first closing parenthesis.
///
static MESSAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\s*\(([^)]+)\)").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMessage {
    pub description: String,
    pub reference: Option<String>,
}

///
/// Split notification message into description and reference token.
///
/// `"Deploy finished (img:v1.2.3) extra text"` is parsed into
/// description `"Deploy finished"` and reference `"img:v1.2.3"`.
/// Everything after the first closing parenthesis is dropped.
///
/// When the message doesn't contain a parenthesized group,
/// the whole message becomes the description.
///
pub fn parse_message(message: &str) -> ParsedMessage {
    match MESSAGE_REGEX.captures(message) {
        Some(captures) => ParsedMessage {
            description: captures[1].trim_end().to_string(),
            reference: Some(captures[2].trim().to_string()),
        },
        None => ParsedMessage {
            description: message.to_string(),
            reference: None,
        },
    }
}
