//! Per-question scoring: alternative-slot matching (DBpedia) and multiset
//! intersection (Wikidata), plus the shared F1 helper.

use std::collections::{HashMap, HashSet};

/// Precision, recall, and F1 for a single question.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QuestionScore {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

impl QuestionScore {
    fn new(precision: f64, recall: f64) -> Self {
        QuestionScore {
            precision,
            recall,
            f1: calculate_f1(precision, recall),
        }
    }
}

/// Harmonic mean of precision and recall; 0 when both are 0.
pub fn calculate_f1(precision: f64, recall: f64) -> f64 {
    if precision + recall == 0.0 {
        0.0
    } else {
        2.0 * ((precision * recall) / (precision + recall))
    }
}

/// Score one question under the alternatives convention: each gold slot
/// lists several acceptable labels (e.g. a location slot accepting any of
/// `dbo:locatedInArea`, `dbo:city`, `dbo:isPartOf`), any one of which
/// satisfies it.
///
/// Precision counts predictions whose label appears in the union of all
/// slots; duplicate predictions each count. Recall walks the slots in
/// order and consumes one matching prediction per covered slot, so a
/// single prediction never covers two slots. The walk takes the first
/// alternative still present, in slot order, not an optimal assignment.
///
/// An empty prediction list scores 0 on all three metrics (the reference
/// division is undefined there).
pub fn score_alternatives(gold_slots: &[Vec<String>], system_relations: &[String]) -> QuestionScore {
    if gold_slots.is_empty() || system_relations.is_empty() {
        return QuestionScore::default();
    }

    // all correct labels, across every slot
    let all_gold_rels: HashSet<&str> = gold_slots.iter().flatten().map(String::as_str).collect();
    let correct_count = system_relations
        .iter()
        .filter(|rel| all_gold_rels.contains(rel.as_str()))
        .count();

    let mut remaining: Vec<&str> = system_relations.iter().map(String::as_str).collect();
    let mut found_count = 0usize;
    for slot in gold_slots {
        for rel in slot {
            if let Some(pos) = remaining.iter().position(|r| *r == rel.as_str()) {
                remaining.remove(pos);
                found_count += 1;
                break;
            }
        }
    }

    let precision = correct_count as f64 / system_relations.len() as f64;
    let recall = found_count as f64 / gold_slots.len() as f64;
    QuestionScore::new(precision, recall)
}

/// Score one question under the multiset convention: the overlap is the
/// sum over distinct labels of the minimum multiplicity present in both
/// prediction and gold.
///
/// Empty inputs score 0 on all three metrics.
pub fn score_multiset(gold_relations: &[String], system_relations: &[String]) -> QuestionScore {
    if gold_relations.is_empty() || system_relations.is_empty() {
        return QuestionScore::default();
    }

    let gold_counts = label_counts(gold_relations);
    let system_counts = label_counts(system_relations);
    let overlap: usize = system_counts
        .iter()
        .map(|(label, count)| *count.min(gold_counts.get(label).unwrap_or(&0)))
        .sum();

    let precision = overlap as f64 / system_relations.len() as f64;
    let recall = overlap as f64 / gold_relations.len() as f64;
    QuestionScore::new(precision, recall)
}

fn label_counts(relations: &[String]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for rel in relations {
        *counts.entry(rel.as_str()).or_insert(0) += 1;
    }
    counts
}
