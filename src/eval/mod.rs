//! Evaluation core: knowledge-base conventions, per-question metrics, and
//! corpus-level aggregation.

pub mod aggregate;
pub mod metrics;

pub use aggregate::{evaluate_alternatives, evaluate_multiset, EvalSummary};
pub use metrics::{calculate_f1, score_alternatives, score_multiset, QuestionScore};

use crate::error::RelevalError;
use std::fmt;
use std::str::FromStr;

/// Knowledge-base convention the input files follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnowledgeBase {
    /// Gold answers are ordered slots of alternative labels.
    Dbpedia,
    /// Gold answers are flat relation multisets.
    Wikidata,
}

impl FromStr for KnowledgeBase {
    type Err = RelevalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dbpedia" => Ok(KnowledgeBase::Dbpedia),
            "wikidata" => Ok(KnowledgeBase::Wikidata),
            other => Err(RelevalError::Config(format!(
                "unknown knowledge base '{}' (expected \"dbpedia\" or \"wikidata\")",
                other
            ))),
        }
    }
}

impl fmt::Display for KnowledgeBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KnowledgeBase::Dbpedia => write!(f, "dbpedia"),
            KnowledgeBase::Wikidata => write!(f, "wikidata"),
        }
    }
}
