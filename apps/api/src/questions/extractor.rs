//! Response Extractor: pulls the question list out of a free-form LLM reply.
//!
//! The model is told to return a bare JSON array, but replies still arrive
//! wrapped in markdown fences, surrounded by chatter, or nested in an object.
//! Each parse attempt below handles one of those shapes; the first that
//! yields a list wins. Unparseable replies produce an empty list, never an error.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};
use tracing::debug;

use crate::models::question::QuestionRecord;

static FENCED_JSON_ARRAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```json\s*(\[.*?\])\s*```").expect("valid regex"));
static BARE_ARRAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\[.*?\]").expect("valid regex"));

type ParseAttempt = fn(&str) -> Option<Vec<Value>>;

/// Tried in order; the first `Some` is the result.
const PARSE_ATTEMPTS: [(&str, ParseAttempt); 3] = [
    ("fenced json block", fenced_json_array),
    ("first bare array", first_bare_array),
    ("whole reply", whole_reply),
];

/// Extracts question records from a raw model reply.
pub fn extract_questions(reply: &str) -> Vec<QuestionRecord> {
    if reply.trim().is_empty() {
        return Vec::new();
    }

    PARSE_ATTEMPTS
        .iter()
        .find_map(|(shape, attempt)| {
            let items = attempt(reply)?;
            debug!("Parsed {} items from LLM reply ({shape})", items.len());
            Some(items)
        })
        .unwrap_or_default()
        .into_iter()
        .map(QuestionRecord::from)
        .collect()
}

fn fenced_json_array(reply: &str) -> Option<Vec<Value>> {
    let captures = FENCED_JSON_ARRAY.captures(reply)?;
    parse_array(captures.get(1)?.as_str())
}

/// Non-greedy: stops at the first `]`, so nested arrays only parse via the other attempts.
fn first_bare_array(reply: &str) -> Option<Vec<Value>> {
    parse_array(BARE_ARRAY.find(reply)?.as_str())
}

fn whole_reply(reply: &str) -> Option<Vec<Value>> {
    match serde_json::from_str::<Value>(reply.trim()).ok()? {
        Value::Array(items) => Some(items),
        Value::Object(map) => list_in_object(map),
        _ => None,
    }
}

/// Prefers a `questions` list, then the first list-valued key in document order.
fn list_in_object(map: Map<String, Value>) -> Option<Vec<Value>> {
    let mut first_list = None;
    for (key, value) in map {
        if let Value::Array(items) = value {
            if key == "questions" {
                return Some(items);
            }
            first_list.get_or_insert(items);
        }
    }
    first_list
}

fn parse_array(candidate: &str) -> Option<Vec<Value>> {
    serde_json::from_str(candidate).ok()
}
