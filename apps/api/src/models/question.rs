use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

/// Question categories the prompt asks the model to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Technical,
    Behavioral,
    RoleSpecific,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technical => "Technical",
            Category::Behavioral => "Behavioral",
            Category::RoleSpecific => "Role-Specific",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Accepts the canonical names case-insensitively, plus the common
    /// "Role Specific" / "RoleSpecific" spellings models produce.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "technical" => Ok(Category::Technical),
            "behavioral" | "behavioural" => Ok(Category::Behavioral),
            "rolespecific" => Ok(Category::RoleSpecific),
            _ => Err(format!("unknown question category '{s}'")),
        }
    }
}

/// One question as returned by the model.
///
/// The record is kept as the model sent it: malformed or extra fields pass
/// through untouched, and the typed accessors return `None` when a field is
/// missing or has the wrong shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QuestionRecord(Value);

impl QuestionRecord {
    pub fn category_text(&self) -> Option<&str> {
        self.0.get("category").and_then(Value::as_str)
    }

    pub fn category(&self) -> Option<Category> {
        self.category_text().and_then(|c| c.parse().ok())
    }

    pub fn question(&self) -> Option<&str> {
        self.0
            .get("question")
            .and_then(Value::as_str)
            .filter(|q| !q.trim().is_empty())
    }

    /// True when the record matches the `{category, question}` contract.
    pub fn is_well_formed(&self) -> bool {
        self.category().is_some() && self.question().is_some()
    }
}

impl From<Value> for QuestionRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
