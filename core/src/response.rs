//! Response — the uniform result of executing a `Command`.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Response {
    Ok { output: String },
    Error { message: String },
}


impl Response {
    pub fn is_ok(&self) -> bool {
        matches!(self, Response::Ok { .. })
    }
}


impl<E: std::fmt::Display> From<Result<String, E>> for Response {
    fn from(result: Result<String, E>) -> Self {
        match result {
            Ok(output) => Response::Ok { output },
            Err(e) => Response::Error {
                message: e.to_string(),
            },
        }
    }
}
