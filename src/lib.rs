pub mod dataset;
pub mod error;
pub mod eval;
pub mod report;

pub use dataset::{load_gold_standard, load_system_answers, AlternativeSlots, RelationList};
pub use error::{RelevalError, Result};
pub use eval::{evaluate_alternatives, evaluate_multiset, EvalSummary, KnowledgeBase};
