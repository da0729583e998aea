//! Survey scoring — a pure heuristic over free-text answers.
//!
//! Each answer is scored independently and the contributions are summed, so
//! answer order never changes the total and identical answer lists always
//! produce identical scores. Rules per answer:
//!
//! | Rule | Points |
//! |---|---|
//! | contains a `%` character | +20 |
//! | contains "quốc tế" (case-insensitive) | +30 |
//! | longer than 20 characters | +10 |
//!
//! An answer can trigger any subset of the rules (0 to 60 points); the total
//! has no upper bound.

/// Keyword indicating international ambition in an answer.
const INTERNATIONAL_KEYWORD: &str = "quốc tế";

/// Score an ordered list of survey answers.
pub fn score_answers(answers: &[String]) -> i64 {
    answers.iter().map(|answer| score_answer(answer)).sum()
}

fn score_answer(answer: &str) -> i64 {
    let mut score = 0;
    if answer.contains('%') {
        score += 20;
    }
    if answer.to_lowercase().contains(INTERNATIONAL_KEYWORD) {
        score += 30;
    }
    if answer.chars().count() > 20 {
        score += 10;
    }
    score
}
