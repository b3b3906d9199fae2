//! Wrap selected lines in a configurable boilerplate block, or strip such
//! blocks (nested or not) back out of a selection.

pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod indent;
pub mod line_ending;
pub mod matcher;
pub mod scan;
pub mod selection;
pub mod template;
pub mod unwrap;
pub mod wrap;

pub use engine::Engine;
pub use error::{Imbalance, Result, StepwrapError};
pub use selection::SelectionSpan;
pub use template::WrapperTemplate;
