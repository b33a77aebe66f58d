//! Request payloads for the simulation backend.
//!
//! A new question is posted as `{"text": ...}`; a fork as
//! `{"newText": ..., "parentTimelineId": ...}`. Text is trimmed and must be
//! non-empty and at most `MAX_TEXT_CHARS` characters.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::tree::Question;


/// Longest question or fork text the backend accepts.
pub const MAX_TEXT_CHARS: usize = 500;


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRequest {
    pub text: String,
}


impl QuestionRequest {
    pub fn new(text: &str) -> Result<QuestionRequest> {
        Ok(QuestionRequest {
            text: validate_text(text)?,
        })
    }
}


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForkRequest {
    pub new_text: String,
    pub parent_timeline_id: String,
}


impl ForkRequest {
    pub fn new(text: &str, parent_timeline_id: &str) -> Result<ForkRequest> {
        let parent = parent_timeline_id.trim();
        if parent.is_empty() {
            return Err(Error::InvalidRequest("parent timeline id is empty".into()));
        }
        Ok(ForkRequest {
            new_text: validate_text(text)?,
            parent_timeline_id: parent.to_string(),
        })
    }

    /// Build a fork request, checking the parent exists in `question`.
    pub fn for_question(question: &Question, text: &str, parent_timeline_id: &str) -> Result<ForkRequest> {
        let request = Self::new(text, parent_timeline_id)?;
        if question.find_timeline(&request.parent_timeline_id).is_none() {
            return Err(Error::TimelineNotFound(request.parent_timeline_id));
        }
        Ok(request)
    }
}


fn validate_text(text: &str) -> Result<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidRequest("text is empty".into()));
    }
    let len = trimmed.chars().count();
    if len > MAX_TEXT_CHARS {
        return Err(Error::InvalidRequest(format!(
            "text is {} characters, limit is {}",
            len, MAX_TEXT_CHARS
        )));
    }
    Ok(trimmed.to_string())
}


/// Abbreviated id for display: the part before the first `-`, then `...`.
pub fn short_id(id: &str) -> String {
    let head = id.split('-').next().unwrap_or_default();
    format!("{}...", head)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::tree::Timeline;

    #[test]
    fn question_request_trims() {
        let req = QuestionRequest::new("  Quit my job?  ").unwrap();
        assert_eq!(req.text, "Quit my job?");
        assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"text":"Quit my job?"}"#);
    }

    #[test]
    fn blank_text_rejected() {
        assert!(matches!(QuestionRequest::new("   \n"), Err(Error::InvalidRequest(_))));
        assert!(matches!(ForkRequest::new("", "t-1"), Err(Error::InvalidRequest(_))));
    }

    #[test]
    fn over_limit_rejected() {
        let text = "a".repeat(MAX_TEXT_CHARS + 1);
        assert!(matches!(QuestionRequest::new(&text), Err(Error::InvalidRequest(_))));
        let text = "a".repeat(MAX_TEXT_CHARS);
        assert!(QuestionRequest::new(&text).is_ok());
    }

    #[test]
    fn fork_request_wire_shape() {
        let req = ForkRequest::new("What if I stay a year?", "t-1").unwrap();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["newText"], "What if I stay a year?");
        assert_eq!(json["parentTimelineId"], "t-1");
    }

    #[test]
    fn fork_request_requires_parent() {
        assert!(matches!(ForkRequest::new("why", "  "), Err(Error::InvalidRequest(_))));
    }

    #[test]
    fn fork_for_question_checks_tree() {
        let q = Question {
            timelines: vec![Timeline {
                id: "t-1".into(),
                forks: vec![Timeline {
                    id: "t-2".into(),
                    ..Timeline::default()
                }],
                ..Timeline::default()
            }],
            ..Question::default()
        };
        assert!(ForkRequest::for_question(&q, "deeper", "t-2").is_ok());
        match ForkRequest::for_question(&q, "deeper", "t-9") {
            Err(Error::TimelineNotFound(id)) => assert_eq!(id, "t-9"),
            other => panic!("expected TimelineNotFound, got {:?}", other),
        }
    }

    #[test]
    fn short_id_takes_first_segment() {
        assert_eq!(short_id("3f2a9c1e-77b0-4c1d"), "3f2a9c1e...");
        assert_eq!(short_id("plain"), "plain...");
    }
}
