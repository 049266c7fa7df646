//! Quiz normalization and grading.
//!
//! Generated quizzes arrive with whatever the model produced: missing
//! options, stray whitespace, lowercase answer keys, more questions than the
//! display wants. Normalization squares all of that away; grading then
//! compares selections against answers case-insensitively and reports
//! per-question outcomes alongside the score.

use log::{debug, info};

use trellis_core::quiz::{
    OPTION_KEYS, QuizOutcome, QuizQuestion, QuizReport, QuizSubmission,
};
use trellis_payload::RawQuizItem;

use crate::config::QuizOptions;

/// Normalizes raw quiz items into displayable questions.
///
/// The first `max_questions` items are considered; items without a question
/// text are dropped. Every question ends up with exactly the option keys
/// `A`–`D` (missing texts become empty strings) and a trimmed, uppercased
/// answer key.
pub fn normalize_quiz(items: &[RawQuizItem], options: &QuizOptions) -> Vec<QuizQuestion> {
    let mut quiz = Vec::new();

    for item in items.iter().take(options.max_questions()) {
        let Some(question) = item
            .question
            .as_deref()
            .map(str::trim)
            .filter(|question| !question.is_empty())
        else {
            continue;
        };

        let option_texts = OPTION_KEYS
            .iter()
            .map(|&key| {
                let text = item
                    .options
                    .get(key)
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or("")
                    .trim()
                    .to_string();
                (key.to_string(), text)
            })
            .collect();

        quiz.push(QuizQuestion {
            question: question.to_string(),
            options: option_texts,
            answer: item.answer.as_deref().unwrap_or("").trim().to_uppercase(),
        });
    }

    debug!(kept = quiz.len(), received = items.len(); "Quiz normalized");
    quiz
}

/// Grades a submission against its own quiz.
///
/// Selections are trimmed and uppercased before comparison, so `"b"` matches
/// an answer of `B`. An unanswered question grades with an empty selection.
pub fn grade_quiz(submission: &QuizSubmission) -> QuizReport {
    let mut results = Vec::with_capacity(submission.quiz.len());
    let mut score = 0;

    for (index, question) in submission.quiz.iter().enumerate() {
        let selected = submission
            .answers
            .get(&index)
            .map(|answer| answer.trim().to_uppercase())
            .unwrap_or_default();
        let correct = question.answer.trim().to_uppercase();

        let ok = selected == correct;
        if ok {
            score += 1;
        }

        results.push(QuizOutcome {
            index,
            question: question.question.clone(),
            selected,
            correct,
            ok,
        });
    }

    info!(score, total = submission.quiz.len(); "Quiz graded");

    QuizReport {
        score,
        total: submission.quiz.len(),
        results,
    }
}
