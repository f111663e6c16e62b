//! Corpus-level aggregation: mean precision/recall/F1 over the gold
//! question set.

use crate::eval::metrics::{score_alternatives, score_multiset, QuestionScore};
use std::collections::HashMap;

/// Mean precision, recall, and F1 over all gold questions, plus the counts
/// behind them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EvalSummary {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Gold questions (the averaging denominator).
    pub total: usize,
    /// Gold questions that received a scoreable system answer.
    pub answered: usize,
}

/// Mean metrics under the alternatives convention. Questions without a
/// system answer contribute zero to every sum but stay in the denominator,
/// so missing answers depress the means.
pub fn evaluate_alternatives(
    gold_answers: &HashMap<String, Vec<Vec<String>>>,
    system_answers: &HashMap<String, Vec<String>>,
) -> EvalSummary {
    summarize(gold_answers, |ques_id, gold_slots| {
        system_answers
            .get(ques_id)
            .map(|relations| score_alternatives(gold_slots, relations))
    })
}

/// Mean metrics under the multiset convention. Unanswered questions and
/// empty predictions are both skipped while remaining in the denominator.
pub fn evaluate_multiset(
    gold_answers: &HashMap<String, Vec<String>>,
    system_answers: &HashMap<String, Vec<String>>,
) -> EvalSummary {
    summarize(gold_answers, |ques_id, gold_relations| {
        system_answers
            .get(ques_id)
            .filter(|relations| !relations.is_empty())
            .map(|relations| score_multiset(gold_relations, relations))
    })
}

/// Fold per-question scores into corpus means. `score` returns None when a
/// question has no usable system answer and is skipped.
fn summarize<G, F>(gold_answers: &HashMap<String, G>, score: F) -> EvalSummary
where
    F: Fn(&str, &G) -> Option<QuestionScore>,
{
    let total = gold_answers.len();
    if total == 0 {
        return EvalSummary::default();
    }

    let (sum_p, sum_r, sum_f1, answered) = gold_answers.iter().fold(
        (0.0, 0.0, 0.0, 0usize),
        |(sum_p, sum_r, sum_f1, answered), (ques_id, gold)| match score(ques_id.as_str(), gold) {
            Some(s) => {
                log::debug!(
                    "{}: precision={:.5} recall={:.5} f1={:.5}",
                    ques_id,
                    s.precision,
                    s.recall,
                    s.f1
                );
                (
                    sum_p + s.precision,
                    sum_r + s.recall,
                    sum_f1 + s.f1,
                    answered + 1,
                )
            }
            None => {
                log::debug!("{}: no system answer, skipping", ques_id);
                (sum_p, sum_r, sum_f1, answered)
            }
        },
    );

    let count = total as f64;
    EvalSummary {
        precision: sum_p / count,
        recall: sum_r / count,
        f1: sum_f1 / count,
        total,
        answered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rels(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    fn gold_alternatives(entries: &[(&str, &[&[&str]])]) -> HashMap<String, Vec<Vec<String>>> {
        entries
            .iter()
            .map(|(id, slots)| (id.to_string(), slots.iter().map(|s| rels(s)).collect()))
            .collect()
    }

    fn flat(entries: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
        entries
            .iter()
            .map(|(id, labels)| (id.to_string(), rels(labels)))
            .collect()
    }

    #[test]
    fn alternatives_perfect_mirror() {
        let gold = gold_alternatives(&[("q1", &[&["a", "b"], &["c"]]), ("q2", &[&["d"]])]);
        let system = flat(&[("q1", &["a", "c"]), ("q2", &["d"])]);
        let summary = evaluate_alternatives(&gold, &system);
        assert!((summary.precision - 1.0).abs() < 1e-9);
        assert!((summary.recall - 1.0).abs() < 1e-9);
        assert!((summary.f1 - 1.0).abs() < 1e-9);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.answered, 2);
    }

    #[test]
    fn alternatives_skipped_question_divides_mean() {
        // q2 has no system answer; the perfect q1 is averaged over both
        let gold = gold_alternatives(&[("q1", &[&["a"]]), ("q2", &[&["b"]])]);
        let system = flat(&[("q1", &["a"])]);
        let summary = evaluate_alternatives(&gold, &system);
        assert!((summary.precision - 0.5).abs() < 1e-9);
        assert!((summary.recall - 0.5).abs() < 1e-9);
        assert!((summary.f1 - 0.5).abs() < 1e-9);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.answered, 1);
    }

    #[test]
    fn alternatives_empty_system_index() {
        let gold = gold_alternatives(&[("q1", &[&["a"]]), ("q2", &[&["b"]])]);
        let system = HashMap::new();
        let summary = evaluate_alternatives(&gold, &system);
        assert_eq!(summary.precision, 0.0);
        assert_eq!(summary.recall, 0.0);
        assert_eq!(summary.f1, 0.0);
        assert_eq!(summary.answered, 0);
    }

    #[test]
    fn alternatives_empty_gold_index() {
        let gold = HashMap::new();
        let system = flat(&[("q1", &["a"])]);
        let summary = evaluate_alternatives(&gold, &system);
        assert_eq!(summary, EvalSummary::default());
    }

    #[test]
    fn alternatives_means_stay_in_unit_interval() {
        let gold = gold_alternatives(&[
            ("q1", &[&["a", "b"], &["c"]]),
            ("q2", &[&["d"], &["e"]]),
            ("q3", &[&["f"]]),
        ]);
        let system = flat(&[("q1", &["a", "c", "x"]), ("q2", &["d"]), ("q3", &["y", "z"])]);
        let summary = evaluate_alternatives(&gold, &system);
        for value in [summary.precision, summary.recall, summary.f1] {
            assert!((0.0..=1.0).contains(&value), "metric out of range: {}", value);
        }
    }

    #[test]
    fn multiset_empty_prediction_skipped_but_counted() {
        let gold = flat(&[("q1", &["a"]), ("q2", &["b"])]);
        let system = flat(&[("q1", &["a"]), ("q2", &[])]);
        let summary = evaluate_multiset(&gold, &system);
        assert!((summary.precision - 0.5).abs() < 1e-9);
        assert!((summary.recall - 0.5).abs() < 1e-9);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.answered, 1);
    }

    #[test]
    fn multiset_mean_over_mixed_questions() {
        // q1 scores p=0.5, r=1/3, f1=0.4; q2 is perfect
        let gold = flat(&[("q1", &["a", "a", "b"]), ("q2", &["c"])]);
        let system = flat(&[("q1", &["a", "c"]), ("q2", &["c"])]);
        let summary = evaluate_multiset(&gold, &system);
        assert!((summary.precision - 0.75).abs() < 1e-9);
        assert!((summary.recall - (1.0 / 3.0 + 1.0) / 2.0).abs() < 1e-9);
        assert!((summary.f1 - 0.7).abs() < 1e-9);
    }
}
