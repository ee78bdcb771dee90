/// Data structures for YTC chat
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who wrote a message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    User,
    Ai,
}

impl Author {
    pub fn as_str(&self) -> &'static str {
        match self {
            Author::User => "user",
            Author::Ai => "ai",
        }
    }

    /// CSS class of the message container, e.g. "user-message"
    pub fn css_class(&self) -> String {
        format!("{}-message", self.as_str())
    }
}

/// One rendered chat bubble
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub id: Uuid,
    pub text: String,
    pub author: Author,
    pub timestamp: String,
}

impl Message {
    pub fn new(text: impl Into<String>, author: Author, timestamp: impl Into<String>) -> Message {
        Message {
            id: Uuid::new_v4(),
            text: text.into(),
            author,
            timestamp: timestamp.into(),
        }
    }
}

/// Body of `POST /chat/{video_id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> ChatRequest {
        ChatRequest {
            message: message.into(),
        }
    }
}

/// Backend reply; only `message` is rendered
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    pub message: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_creation() {
        let message = Message::new("hello", Author::User, "09:05");

        assert_eq!(message.text, "hello");
        assert_eq!(message.author, Author::User);
        assert_eq!(message.timestamp, "09:05");
    }

    #[test]
    fn test_message_ids_are_unique() {
        let a = Message::new("same", Author::Ai, "10:00");
        let b = Message::new("same", Author::Ai, "10:00");

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_author_css_class() {
        assert_eq!(Author::User.css_class(), "user-message");
        assert_eq!(Author::Ai.css_class(), "ai-message");
    }

    #[test]
    fn test_chat_request_body() {
        let json = serde_json::to_string(&ChatRequest::new("what is this about?")).unwrap();
        assert_eq!(json, r#"{"message":"what is this about?"}"#);
    }

    #[test]
    fn test_chat_response_keeps_extra_fields() {
        let response: ChatResponse =
            serde_json::from_str(r#"{"message":"hi there","sources":[1,2]}"#).unwrap();

        assert_eq!(response.message, "hi there");
        assert!(response.extra.contains_key("sources"));
    }

    #[test]
    fn test_chat_response_requires_message() {
        let result = serde_json::from_str::<ChatResponse>(r#"{"status":200}"#);
        assert!(result.is_err());
    }
}
