use serde::{Deserialize, Serialize};
use serde_json::Value;

// query is kept as a raw JSON value: the contract only rejects
// absent/falsy values, anything else is forwarded verbatim
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub query: Option<Value>,
}

impl AskRequest {
    pub fn into_query(self) -> Option<Value> {
        self.query.filter(|q| !is_falsy(q))
    }
}

// mirrors javascript truthiness: null, false, 0 and "" all count as missing
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub role: String,
    pub content: Value,
}

#[derive(Debug, Serialize)]
pub struct ClaudeRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<Message>,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ClaudeResponse {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub usage: Option<Value>,
}

impl ClaudeResponse {
    pub fn answer_text(&self) -> Option<&str> {
        self.content
            .first()
            .and_then(|block| block.text.as_deref())
            .filter(|text| !text.is_empty())
    }
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Value>,
}
