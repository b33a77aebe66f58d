//! Help system for Forkline commands.

pub fn help_text(topic: Option<&str>) -> String {
    match topic {
        None => overview(),
        Some(t) => {
            if let Some(text) = command_help(t) {
                return text;
            }
            if let Some(text) = group_help(t) {
                return text;
            }
            format!("Unknown help topic: '{}'. Run 'forkline help' for a list of commands.", t)
        }
    }
}


fn overview() -> String {
    "\
forkline — lay out question/timeline trees for a node-graph renderer

Usage: forkline [--config-dir <dir>] [-v...] <command> [args...]

Tree commands:
  layout <path|-> [--pretty]          Print the positioned node/edge graph
  summary <path|->                    Print counts and agent score averages

Request commands:
  ask <text>                          Build a new-question payload
  fork <timeline> <text> [--tree <path>]
                                      Build a fork payload

Other commands:
  config                              Show effective settings
  help [topic]                        Show help

Run 'forkline help <command>' for detailed help on a specific command."
        .into()
}


fn group_help(group: &str) -> Option<String> {
    let text = match group {
        "tree" => "\
Tree commands — read a question document (backend JSON) and inspect it

  layout <path|-> [--pretty]
    Lay the tree out and print {nodes, edges} as JSON. Use '-' for stdin.

  summary <path|->
    Print timeline and fork counts, maximum depth, and the mean score of
    each simulation agent.",

        "request" => "\
Request commands — build JSON payloads for the simulation backend

  ask <text>
    Payload for submitting a new question. Text is trimmed and limited to
    500 characters.

  fork <timeline> <text> [--tree <path>]
    Payload for forking a timeline. With --tree, the timeline id must exist
    in that question document.",

        _ => return None,
    };
    Some(text.into())
}


fn command_help(command: &str) -> Option<String> {
    let text = match command {
        "layout" => "forkline layout — lay out a question tree\n\nUsage: forkline layout <path|-> [--pretty]",
        "summary" => "forkline summary — summarize a question tree\n\nUsage: forkline summary <path|->",
        "ask" => "forkline ask — build a new-question payload\n\nUsage: forkline ask <text>",
        "fork" => "forkline fork — build a fork payload\n\nUsage: forkline fork <timeline> <text> [--tree <path>]",
        "config" => "forkline config — show effective settings\n\nUsage: forkline config",
        "help" => "forkline help — show help\n\nUsage: forkline help [topic]",
        _ => return None,
    };
    Some(text.into())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_lists_groups() {
        let text = help_text(None);
        assert!(text.contains("Tree commands:"));
        assert!(text.contains("Request commands:"));
    }

    #[test]
    fn group_help_tree() {
        let text = help_text(Some("tree"));
        assert!(text.contains("layout"));
        assert!(text.contains("summary"));
    }

    #[test]
    fn command_help_fork() {
        let text = help_text(Some("fork"));
        assert!(text.contains("Usage:"));
        assert!(text.contains("--tree"));
    }

    #[test]
    fn unknown_topic() {
        let text = help_text(Some("bogus"));
        assert!(text.contains("Unknown help topic"));
    }
}
