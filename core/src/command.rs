//! Command — the typed interface for all Forkline operations.
//!
//! Every front end (the CLI today) parses its input into a `Command` and
//! hands it to `Sys::execute`.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "command")]
pub enum Command {
    // -----------------------------------------------------------------
    // Tree commands
    // -----------------------------------------------------------------

    /// Lay out a question document and print the graph.
    #[serde(rename = "layout")]
    Layout {
        path: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pretty: Option<bool>,
    },

    /// Print counts and score averages for a question document.
    #[serde(rename = "summary")]
    Summary {
        path: String,
    },

    // -----------------------------------------------------------------
    // Request commands
    // -----------------------------------------------------------------

    /// Build the payload that submits a new question.
    #[serde(rename = "ask")]
    Ask {
        text: String,
    },

    /// Build the payload that forks a timeline. With `path`, the timeline
    /// must exist in that question document.
    #[serde(rename = "fork")]
    Fork {
        timeline: String,
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        path: Option<String>,
    },

    // -----------------------------------------------------------------
    // Config / Help
    // -----------------------------------------------------------------

    #[serde(rename = "config")]
    Config,

    #[serde(rename = "help")]
    Help {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        topic: Option<String>,
    },
}
