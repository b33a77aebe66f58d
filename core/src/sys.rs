use crate::command::Command;
use crate::data::document::load_question;
use crate::data::request::{ForkRequest, QuestionRequest};
use crate::data::summary::TreeSummary;
use crate::error::Result;
use crate::layout::layout_with;
use crate::response::Response;
use crate::types::config::Settings;


/// Central runtime for Forkline. Dispatches tree, request, and help commands.
pub struct Sys {
    settings: Settings,
}


impl Sys {
    pub fn new(settings: Settings) -> Sys {
        Sys { settings }
    }

    /// The single dispatch method.
    pub fn execute(&self, cmd: Command) -> Response {
        tracing::debug!(?cmd, "executing");
        let result = match cmd {
            Command::Layout { path, pretty } => self.cmd_layout(&path, pretty),
            Command::Summary { path } => self.cmd_summary(&path),
            Command::Ask { text } => self.cmd_ask(&text),
            Command::Fork { timeline, text, path } => self.cmd_fork(&timeline, &text, path.as_deref()),
            Command::Config => self.settings.to_yaml(),
            Command::Help { topic } => Ok(crate::help::help_text(topic.as_deref())),
        };
        if let Err(e) = &result {
            tracing::warn!(error = %e, "command failed");
        }
        Response::from(result)
    }

    // -----------------------------------------------------------------------
    // Tree commands
    // -----------------------------------------------------------------------

    fn cmd_layout(&self, path: &str, pretty: Option<bool>) -> Result<String> {
        let question = load_question(path)?;
        let graph = layout_with(&question, &self.settings.layout, None);
        self.to_json(&graph, pretty)
    }

    fn cmd_summary(&self, path: &str) -> Result<String> {
        let question = load_question(path)?;
        self.to_json(&TreeSummary::of(&question), None)
    }

    // -----------------------------------------------------------------------
    // Request commands
    // -----------------------------------------------------------------------

    fn cmd_ask(&self, text: &str) -> Result<String> {
        self.to_json(&QuestionRequest::new(text)?, None)
    }

    fn cmd_fork(&self, timeline: &str, text: &str, path: Option<&str>) -> Result<String> {
        let request = match path {
            Some(path) => {
                let question = load_question(path)?;
                ForkRequest::for_question(&question, text, timeline)?
            }
            None => ForkRequest::new(text, timeline)?,
        };
        self.to_json(&request, None)
    }

    fn to_json<T: serde::Serialize>(&self, value: &T, pretty: Option<bool>) -> Result<String> {
        let out = if pretty.unwrap_or(self.settings.pretty) {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(out)
    }
}
