//! Gold standard and system answer loading.
//!
//! Both input files are JSON arrays of question records: an `id` plus a
//! `relations` payload whose shape depends on the knowledge base (ordered
//! alternative slots for DBpedia, a flat relation list for Wikidata).

use crate::error::{RelevalError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Gold relations for one DBpedia question: ordered slots, each a list of
/// relation labels any one of which satisfies the slot.
pub type AlternativeSlots = Vec<Vec<String>>;

/// Flat relation list. System predictions always use this shape; Wikidata
/// gold answers do too (duplicate labels are meaningful there).
pub type RelationList = Vec<String>;

#[derive(Debug, Deserialize)]
struct QuestionRecord<R> {
    id: String,
    relations: Option<R>,
}

/// Load the gold standard. Every record must carry both `id` and
/// `relations`; anything else is a parse error.
pub fn load_gold_standard<R: DeserializeOwned>(path: &Path) -> Result<HashMap<String, R>> {
    let records = read_records(path)?;
    let mut answers = HashMap::with_capacity(records.len());
    for record in records {
        let relations = record.relations.ok_or_else(|| {
            RelevalError::Parse(format!(
                "gold record '{}' in {} has no relations field",
                record.id,
                path.display()
            ))
        })?;
        insert_answer(&mut answers, record.id, relations);
    }
    log::info!("gold answers: loaded {} questions", answers.len());
    Ok(answers)
}

/// Load system output. A record without `relations` means "no answer
/// provided": it is logged and left out of the map, so the scorer skips
/// that question.
pub fn load_system_answers<R: DeserializeOwned>(path: &Path) -> Result<HashMap<String, R>> {
    let records = read_records(path)?;
    let mut answers = HashMap::with_capacity(records.len());
    let mut skipped = 0usize;
    for record in records {
        match record.relations {
            Some(relations) => insert_answer(&mut answers, record.id, relations),
            None => {
                log::warn!("system record '{}' has no relations field, skipping", record.id);
                skipped += 1;
            }
        }
    }
    log::info!(
        "system answers: loaded {} questions ({} skipped)",
        answers.len(),
        skipped
    );
    Ok(answers)
}

fn read_records<R: DeserializeOwned>(path: &Path) -> Result<Vec<QuestionRecord<R>>> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| RelevalError::Parse(format!("JSON parse error in {}: {}", path.display(), e)))
}

fn insert_answer<R>(answers: &mut HashMap<String, R>, id: String, relations: R) {
    if answers.insert(id.clone(), relations).is_some() {
        log::warn!("duplicate question id '{}', keeping the last record", id);
    }
}
