//! Tree summary — counts and per-agent score averages for one question.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::tree::{AgentType, Question};


#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeSummary {
    pub question_id: String,
    pub timelines: usize,
    pub forks: usize,
    pub max_depth: usize,
    pub simulations: usize,
    /// Mean score per agent type, over simulations that carry a score.
    pub agent_scores: BTreeMap<String, f64>,
}


impl TreeSummary {
    pub fn of(question: &Question) -> TreeSummary {
        let mut simulations = 0;
        let mut totals: BTreeMap<String, (f64, usize)> = BTreeMap::new();

        for timeline in question.walk() {
            simulations += timeline.simulations.len();
            for sim in &timeline.simulations {
                if sim.agent_type == AgentType::Unknown {
                    continue;
                }
                if let Some(score) = sim.score {
                    let entry = totals.entry(sim.agent_type.to_string()).or_insert((0.0, 0));
                    entry.0 += score;
                    entry.1 += 1;
                }
            }
        }

        TreeSummary {
            question_id: question.id.clone(),
            timelines: question.timelines.len(),
            forks: question.fork_count(),
            max_depth: question.max_depth(),
            simulations,
            agent_scores: totals
                .into_iter()
                .map(|(agent, (sum, n))| (agent, sum / n as f64))
                .collect(),
        }
    }
}
