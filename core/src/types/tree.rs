//! Source tree — the question/timeline/fork data returned by the backend.
//!
//! Field names follow the backend's JSON exactly: the question's children
//! live under `Timelines`, a timeline's children under `forks`, and its
//! simulation results under `simulation`. Missing or `null` fields default to
//! empty so partially-populated payloads still load.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};


/// The root decision prompt a user submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(rename = "Timelines", default, deserialize_with = "null_as_default")]
    pub timelines: Vec<Timeline>,
}


/// One generated outcome scenario. Forks share this shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub question_id: String,
    #[serde(default)]
    pub forked_from_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tldr: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fork_question: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(rename = "simulation", default, deserialize_with = "null_as_default")]
    pub simulations: Vec<Simulation>,
    #[serde(rename = "forks", default, deserialize_with = "null_as_default")]
    pub forks: Vec<Timeline>,
}


/// A single agent's analysis of a timeline. Carried through layout untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Simulation {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub timeline_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub agent_type: AgentType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "deserialize_score")]
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
}


/// Which analysis agent produced a simulation.
///
/// Unknown agent names are preserved in `Other` rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AgentType {
    PersonalGrowth,
    Finance,
    MentalHealth,
    #[default]
    Unknown,
    Other(String),
}


impl AgentType {
    pub fn as_str(&self) -> &str {
        match self {
            AgentType::PersonalGrowth => "PERSONAL_GROWTH",
            AgentType::Finance => "FINANCE",
            AgentType::MentalHealth => "MENTAL_HEALTH",
            AgentType::Unknown => "",
            AgentType::Other(name) => name,
        }
    }
}


impl From<String> for AgentType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PERSONAL_GROWTH" => AgentType::PersonalGrowth,
            "FINANCE" => AgentType::Finance,
            "MENTAL_HEALTH" => AgentType::MentalHealth,
            "" => AgentType::Unknown,
            _ => AgentType::Other(value),
        }
    }
}


impl From<AgentType> for String {
    fn from(value: AgentType) -> Self {
        value.as_str().to_string()
    }
}


impl fmt::Display for AgentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


/// The backend sends `null` for fields it has not filled in yet.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}


/// Scores arrive as numbers, but some payloads carry them as strings.
fn deserialize_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawScore {
        Number(f64),
        Text(String),
    }

    let raw = Option::<RawScore>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawScore::Number(n)) => Some(n),
        Some(RawScore::Text(s)) => s.trim().parse::<f64>().ok(),
        None => None,
    })
}


/// A borrowed reference to either variant of the source tree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SourceNode<'a> {
    Question(&'a Question),
    Timeline(&'a Timeline),
}


impl<'a> SourceNode<'a> {
    pub fn id(&self) -> &'a str {
        match *self {
            SourceNode::Question(q) => &q.id,
            SourceNode::Timeline(t) => &t.id,
        }
    }

    pub fn is_timeline(&self) -> bool {
        matches!(self, SourceNode::Timeline(_))
    }

    pub fn as_timeline(&self) -> Option<&'a Timeline> {
        match *self {
            SourceNode::Timeline(t) => Some(t),
            SourceNode::Question(_) => None,
        }
    }
}


impl Question {
    /// Total number of timeline and fork nodes under this question.
    pub fn node_count(&self) -> usize {
        self.timelines.iter().map(Timeline::subtree_size).sum()
    }

    /// Number of fork nodes (every non-root node that is not a direct timeline).
    pub fn fork_count(&self) -> usize {
        self.node_count() - self.timelines.len()
    }

    /// Deepest edge count from the question to any node. Zero when empty.
    pub fn max_depth(&self) -> usize {
        self.timelines
            .iter()
            .map(|t| 1 + t.height())
            .max()
            .unwrap_or(0)
    }

    /// Find a timeline or fork anywhere in the tree by its backend id.
    pub fn find_timeline(&self, id: &str) -> Option<&Timeline> {
        self.timelines.iter().find_map(|t| t.find(id))
    }

    /// Depth-first iterator over every timeline and fork.
    pub fn walk(&self) -> impl Iterator<Item = &Timeline> {
        let mut stack: Vec<&Timeline> = self.timelines.iter().rev().collect();
        std::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(next.forks.iter().rev());
            Some(next)
        })
    }
}


impl Timeline {
    /// This node plus all of its descendants.
    pub fn subtree_size(&self) -> usize {
        1 + self.forks.iter().map(Timeline::subtree_size).sum::<usize>()
    }

    /// Longest chain of forks below this node.
    pub fn height(&self) -> usize {
        self.forks
            .iter()
            .map(|f| 1 + f.height())
            .max()
            .unwrap_or(0)
    }

    fn find(&self, id: &str) -> Option<&Timeline> {
        if self.id == id {
            return Some(self);
        }
        self.forks.iter().find_map(|f| f.find(id))
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "id": "q-1",
        "text": "Should I move to Lisbon?",
        "userId": "u-9",
        "createdAt": "2025-03-01T10:00:00Z",
        "Timelines": [
            {
                "id": "t-a",
                "questionId": "q-1",
                "forkedFromId": null,
                "summary": "You move and thrive.",
                "tldr": "Thrive",
                "createdAt": "2025-03-01T10:00:01Z",
                "simulation": [
                    {"id": "s1", "timelineId": "t-a", "agentType": "FINANCE",
                     "summary": "Costs drop", "score": 7, "createdAt": ""},
                    {"id": "s2", "timelineId": "t-a", "agentType": "MENTAL_HEALTH",
                     "summary": "Calmer", "score": "8.5", "createdAt": ""}
                ],
                "forks": [
                    {"id": "t-a-1", "forkQuestion": "What if I buy a flat?",
                     "summary": "Mortgage", "tldr": "", "simulation": []}
                ]
            },
            {"id": "t-b", "summary": "You stay.", "tldr": "Stay"}
        ]
    }"#;

    #[test]
    fn parses_backend_payload() {
        let q: Question = serde_json::from_str(PAYLOAD).unwrap();
        assert_eq!(q.id, "q-1");
        assert_eq!(q.timelines.len(), 2);
        assert_eq!(q.timelines[0].forks.len(), 1);
        assert_eq!(
            q.timelines[0].forks[0].fork_question.as_deref(),
            Some("What if I buy a flat?")
        );
        assert!(q.timelines[1].forks.is_empty());
        assert!(q.timelines[1].simulations.is_empty());
    }

    #[test]
    fn scores_accept_numbers_and_strings() {
        let q: Question = serde_json::from_str(PAYLOAD).unwrap();
        let sims = &q.timelines[0].simulations;
        assert_eq!(sims[0].score, Some(7.0));
        assert_eq!(sims[1].score, Some(8.5));
    }

    #[test]
    fn unparsable_score_is_none() {
        let s: Simulation = serde_json::from_str(r#"{"score": "high"}"#).unwrap();
        assert_eq!(s.score, None);
        let s: Simulation = serde_json::from_str(r#"{"score": null}"#).unwrap();
        assert_eq!(s.score, None);
    }

    #[test]
    fn agent_type_known_and_unknown() {
        let s: Simulation =
            serde_json::from_str(r#"{"agentType": "PERSONAL_GROWTH"}"#).unwrap();
        assert_eq!(s.agent_type, AgentType::PersonalGrowth);
        let s: Simulation = serde_json::from_str(r#"{"agentType": "CAREER"}"#).unwrap();
        assert_eq!(s.agent_type, AgentType::Other("CAREER".into()));
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"agentType\":\"CAREER\""));
    }

    #[test]
    fn null_timelines_load_as_empty() {
        let q: Question =
            serde_json::from_str(r#"{"id": "q", "text": "t", "Timelines": null}"#).unwrap();
        assert!(q.timelines.is_empty());
        assert!(crate::layout::layout(&q).is_empty());
    }

    #[test]
    fn null_fields_in_timeline_default() {
        let q: Question = serde_json::from_str(
            r#"{"Timelines": [{"id": "a", "tldr": null, "summary": "S", "forks": null,
                "simulation": null, "createdAt": null}]}"#,
        )
        .unwrap();
        let t = &q.timelines[0];
        assert_eq!(t.tldr, "");
        assert!(t.forks.is_empty());
        assert!(t.simulations.is_empty());
        let graph = crate::layout::layout(&q);
        assert_eq!(graph.node("timeline-0").map(|n| n.data.label.as_str()), Some("S..."));
    }

    #[test]
    fn null_agent_type_is_unknown() {
        let s: Simulation = serde_json::from_str(r#"{"agentType": null, "score": 3}"#).unwrap();
        assert_eq!(s.agent_type, AgentType::Unknown);
    }

    #[test]
    fn counts_and_depth() {
        let q: Question = serde_json::from_str(PAYLOAD).unwrap();
        assert_eq!(q.node_count(), 3);
        assert_eq!(q.fork_count(), 1);
        assert_eq!(q.max_depth(), 2);
        assert_eq!(Question::default().max_depth(), 0);
    }

    #[test]
    fn find_timeline_searches_forks() {
        let q: Question = serde_json::from_str(PAYLOAD).unwrap();
        assert_eq!(q.find_timeline("t-a-1").map(|t| t.summary.as_str()), Some("Mortgage"));
        assert!(q.find_timeline("missing").is_none());
    }

    #[test]
    fn walk_is_depth_first() {
        let q: Question = serde_json::from_str(PAYLOAD).unwrap();
        let ids: Vec<&str> = q.walk().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t-a", "t-a-1", "t-b"]);
    }

    #[test]
    fn source_node_resolves_by_tag() {
        let q: Question = serde_json::from_str(PAYLOAD).unwrap();
        let root = SourceNode::Question(&q);
        let child = SourceNode::Timeline(&q.timelines[0]);
        assert!(!root.is_timeline());
        assert!(child.is_timeline());
        assert_eq!(root.id(), "q-1");
        assert_eq!(child.as_timeline().map(|t| t.tldr.as_str()), Some("Thrive"));
    }
}
