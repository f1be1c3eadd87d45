use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a post. The backend hands out integer primary keys, but any
/// JSON string is accepted as well.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum PostId {
    Int(i64),
    Text(String),
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostId::Int(id) => write!(f, "{id}"),
            PostId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for PostId {
    fn from(id: i64) -> Self {
        PostId::Int(id)
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        PostId::Text(id.to_string())
    }
}

/// A single sentiment-annotated post as returned by the feed endpoint.
///
/// Fields the backend adds beyond these four are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub sentiment: String,
    /// Raw timestamp; parsed only when rendered.
    pub created_at: String,
}

/// Coarse classification of a sentiment label, used for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
    Unknown,
}

impl Tone {
    pub fn from_label(label: &str) -> Self {
        let label = label.trim().to_ascii_uppercase();
        if label.starts_with("POS") {
            Tone::Positive
        } else if label.starts_with("NEG") {
            Tone::Negative
        } else if label.starts_with("NEU") {
            Tone::Neutral
        } else {
            Tone::Unknown
        }
    }
}

impl Post {
    pub fn tone(&self) -> Tone {
        Tone::from_label(&self.sentiment)
    }
}
