//! Question documents — load backend JSON from a file or stdin.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::tree::Question;


/// Path that stands for standard input.
pub const STDIN: &str = "-";


/// Parse a question document from JSON text.
pub fn parse_question(input: &str) -> Result<Question> {
    Ok(serde_json::from_str(input)?)
}


/// Load a question document from `path`, or from stdin when `path` is `-`.
pub fn load_question(path: &str) -> Result<Question> {
    let content = if path == STDIN {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| Error::Io {
                path: PathBuf::from("<stdin>"),
                source,
            })?;
        buf
    } else {
        std::fs::read_to_string(Path::new(path)).map_err(|source| Error::Io {
            path: PathBuf::from(path),
            source,
        })?
    };
    let question = parse_question(&content)?;
    tracing::debug!(path, question = %question.id, nodes = question.node_count(), "loaded question");
    Ok(question)
}
