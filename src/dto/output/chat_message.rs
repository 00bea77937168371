use serde::Serialize;

///
/// Body of the Discord execute-webhook request.
/// Empty values are left out of the JSON.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<ChatEmbed>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatEmbed {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    ///
    /// RGB color as a decimal integer
    ///
    #[serde(skip_serializing_if = "is_zero")]
    pub color: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<ChatEmbedField>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatEmbedField {
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "is_false")]
    pub inline: bool,
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

fn is_false(value: &bool) -> bool {
    !*value
}
