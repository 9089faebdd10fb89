use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Canonical identifier for a question, shared by the generated survey and the
/// form editor.
///
/// The generation service emits UUID strings, but numeric ids are accepted on
/// the wire and stored as their decimal text so both shapes agree on one type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl<'de> Deserialize<'de> for QuestionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => QuestionId(text),
            RawId::Signed(n) => QuestionId(n.to_string()),
            RawId::Unsigned(n) => QuestionId(n.to_string()),
        })
    }
}

/// Numeric range attached to rating-like questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub min: i64,
    pub max: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

/// A question as returned by the generation service.
///
/// `question_type` is kept as the raw backend tag; the set of tags is open and
/// unknown values are legal. See [`crate::mapping::map_type`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    #[serde(rename = "type")]
    pub question_type: String,
    pub text: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<Scale>,
}

/// The survey document produced by `POST /api/surveys/generate`.
///
/// Question order is display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Survey {
    pub id: String,
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}
