//! Forkline core — question/timeline tree model and the layout engine that
//! positions it for a node-graph renderer.

pub mod command;
pub mod data;
pub mod error;
pub mod help;
pub mod layout;
pub mod response;
pub mod sys;
pub mod types;

pub use error::{Error, Result};
pub use layout::{layout, layout_with};
