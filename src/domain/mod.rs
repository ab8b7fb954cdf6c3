//! Domain logic - pure acceptance rules independent of any host API

pub mod affix;
pub mod history;
pub mod matcher;

pub use history::{HistoryCheck, HistoryEvaluator};
