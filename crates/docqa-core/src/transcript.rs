use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::{ChatMessage, RankedEntry, Role, TranscriptStats};

pub const DEFAULT_TOP_QUESTIONS: usize = 5;
pub const DEFAULT_TOP_WORDS: usize = 10;

static CITATION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[doc\d+\]").expect("citation pattern"));

/// Strip `[docN]` retrieval citations from an assistant answer.
pub fn clean_answer(answer: &str) -> String {
    CITATION_MARKER.replace_all(answer, "").trim().to_string()
}

/// Trim, then upper-case the first character and lower-case the rest.
pub fn normalize_question(question: &str) -> String {
    let mut chars = question.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|ch: char| !ch.is_alphanumeric())
        .filter(|word| word.chars().count() >= 2)
        .map(str::to_lowercase)
}

/// Count occurrences, most frequent first; ties keep first-seen order.
fn rank<I>(values: I, limit: usize) -> Vec<RankedEntry>
where
    I: IntoIterator<Item = String>,
{
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    for value in values {
        let count = counts.entry(value.clone()).or_insert(0);
        if *count == 0 {
            order.push(value);
        }
        *count += 1;
    }
    let mut ranked: Vec<RankedEntry> = order
        .into_iter()
        .map(|value| {
            let count = counts.get(&value).copied().unwrap_or_default();
            RankedEntry { value, count }
        })
        .collect();
    // stable sort keeps first-seen order among equal counts
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}

pub fn compute_stats(
    messages: &[ChatMessage],
    top_questions: usize,
    top_words: usize,
) -> TranscriptStats {
    let questions: Vec<&str> = messages
        .iter()
        .filter(|message| message.role == Role::User)
        .map(|message| message.content.as_str())
        .collect();
    let answers = messages
        .iter()
        .filter(|message| message.role == Role::Assistant)
        .count();

    let stats = TranscriptStats {
        questions: questions.len(),
        answers,
        top_questions: rank(
            questions.iter().map(|question| normalize_question(question)),
            top_questions,
        ),
        top_words: rank(questions.iter().flat_map(|question| words(question)), top_words),
    };
    tracing::debug!(
        event = "transcript_stats_computed",
        messages = messages.len(),
        questions = stats.questions,
        answers = stats.answers
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn message(id: i64, role: Role, content: &str) -> ChatMessage {
        let timestamp = NaiveDate::from_ymd_opt(2025, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .expect("timestamp");
        ChatMessage {
            id,
            role,
            content: content.to_string(),
            timestamp,
        }
    }

    #[test]
    fn clean_answer_strips_citations() {
        assert_eq!(
            clean_answer("Leave is 20 days [doc1] per year[doc12]. "),
            "Leave is 20 days  per year."
        );
        assert_eq!(clean_answer("[doc3]"), "");
        assert_eq!(clean_answer("see [docs] and [doc]"), "see [docs] and [doc]");
    }

    #[test]
    fn normalize_question_capitalizes() {
        assert_eq!(normalize_question("  how MANY days?  "), "How many days?");
        assert_eq!(normalize_question(""), "");
        assert_eq!(normalize_question("   "), "");
        assert_eq!(normalize_question("çfarë"), "Çfarë");
    }

    #[test]
    fn stats_count_roles_and_rank_questions() {
        let messages = vec![
            message(1, Role::User, "what is leave?"),
            message(2, Role::Assistant, "20 days"),
            message(3, Role::User, "Salary date"),
            message(4, Role::User, "  WHAT is leave?"),
            message(5, Role::Assistant, "the 5th"),
            message(6, Role::System, "ignored"),
        ];
        let stats = compute_stats(&messages, DEFAULT_TOP_QUESTIONS, DEFAULT_TOP_WORDS);
        assert_eq!(stats.questions, 3);
        assert_eq!(stats.answers, 2);
        assert_eq!(
            stats.top_questions,
            vec![
                RankedEntry {
                    value: "What is leave?".to_string(),
                    count: 2
                },
                RankedEntry {
                    value: "Salary date".to_string(),
                    count: 1
                },
            ]
        );
        let top_words: Vec<(&str, usize)> = stats
            .top_words
            .iter()
            .map(|entry| (entry.value.as_str(), entry.count))
            .collect();
        assert_eq!(
            top_words,
            vec![
                ("what", 2),
                ("is", 2),
                ("leave", 2),
                ("salary", 1),
                ("date", 1)
            ]
        );
    }

    #[test]
    fn stats_respect_limits() {
        let messages: Vec<ChatMessage> = (0..8)
            .map(|idx| message(idx, Role::User, &format!("question {idx}")))
            .collect();
        let stats = compute_stats(&messages, 5, 1);
        assert_eq!(stats.top_questions.len(), 5);
        assert_eq!(stats.top_questions[0].value, "Question 0");
        assert_eq!(
            stats.top_words,
            vec![RankedEntry {
                value: "question".to_string(),
                count: 8
            }]
        );
    }

    #[test]
    fn stats_on_empty_transcript() {
        let stats = compute_stats(&[], DEFAULT_TOP_QUESTIONS, DEFAULT_TOP_WORDS);
        assert_eq!(stats.questions, 0);
        assert_eq!(stats.answers, 0);
        assert!(stats.top_questions.is_empty());
        assert!(stats.top_words.is_empty());
    }
}
