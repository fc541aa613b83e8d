//! Test model
//!
//! A test is a set of questions sampled from the company's question bank
//! for one condidat. Sampling and scoring are pure functions here so the
//! service only deals with persistence.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::presence::percentage;

/// Test database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Test {
    pub id: Uuid,
    pub company_id: Uuid,
    pub condidat_id: Uuid,
    pub title: String,
    pub technologies: Vec<String>,
    pub question_count: i32,
    /// Percentage of correct answers, set on submission
    pub score: Option<f64>,
    pub status: String,
    pub created_by: Option<Uuid>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// A question of a test joined with its bank entry
#[derive(Debug, Clone, FromRow)]
pub struct TestQuestionRow {
    pub question_id: Uuid,
    pub position: i32,
    pub answer: Option<i32>,
    pub technology: String,
    pub content: String,
    pub options: Vec<String>,
    pub correct_option: i32,
    pub level: String,
}

/// Requested number of questions for one technology
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechnologyQuota {
    pub technology: String,
    pub count: usize,
}

/// Why a test could not be assembled
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SamplingError {
    #[error("technology '{0}' requested more than once")]
    DuplicateTechnology(String),

    #[error("technology '{technology}' has {available} question(s), {requested} requested")]
    NotEnoughQuestions {
        technology: String,
        available: usize,
        requested: usize,
    },
}

/// Draw `count` distinct questions per technology, uniformly at random.
///
/// Output keeps the quota order across technologies and is shuffled within
/// each technology. `bank` maps a normalized technology to its question ids.
pub fn sample_questions<R: Rng + ?Sized>(
    quotas: &[TechnologyQuota],
    bank: &HashMap<String, Vec<Uuid>>,
    rng: &mut R,
) -> Result<Vec<Uuid>, SamplingError> {
    let mut seen = HashSet::new();
    for quota in quotas {
        if !seen.insert(quota.technology.as_str()) {
            return Err(SamplingError::DuplicateTechnology(quota.technology.clone()));
        }
    }

    let mut selected = Vec::with_capacity(quotas.iter().map(|q| q.count).sum());
    for quota in quotas {
        let pool = bank.get(&quota.technology).map(Vec::as_slice).unwrap_or(&[]);
        if pool.len() < quota.count {
            return Err(SamplingError::NotEnoughQuestions {
                technology: quota.technology.clone(),
                available: pool.len(),
                requested: quota.count,
            });
        }

        let mut candidates = pool.to_vec();
        let (picked, _) = candidates.partial_shuffle(rng, quota.count);
        selected.extend_from_slice(picked);
    }

    Ok(selected)
}

/// Outcome of grading a test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestScore {
    pub correct: usize,
    /// Percent of `question_count`, two decimals
    pub score: f64,
}

/// Grade against the number of questions the test was generated with.
///
/// Rows missing from `questions` count as wrong, as do unanswered ones.
pub fn score_answers(
    questions: &[TestQuestionRow],
    answers: &HashMap<Uuid, i32>,
    question_count: usize,
) -> TestScore {
    let correct = questions
        .iter()
        .filter(|q| answers.get(&q.question_id) == Some(&q.correct_option))
        .count();
    let total = question_count.max(questions.len());
    TestScore {
        correct,
        score: percentage(correct as i64, total as i64),
    }
}

/// "First Last - rust, sql", cut to at most `max_chars` characters
pub fn default_test_title(
    first_name: &str,
    last_name: &str,
    technologies: &[String],
    max_chars: usize,
) -> String {
    let title = format!("{} {} - {}", first_name, last_name, technologies.join(", "));
    match title.char_indices().nth(max_chars) {
        Some((cut, _)) => title[..cut].trim_end().to_string(),
        None => title,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn bank(entries: &[(&str, usize)]) -> HashMap<String, Vec<Uuid>> {
        entries
            .iter()
            .map(|(tech, n)| (tech.to_string(), (0..*n).map(|_| Uuid::new_v4()).collect()))
            .collect()
    }

    fn quota(technology: &str, count: usize) -> TechnologyQuota {
        TechnologyQuota {
            technology: technology.to_string(),
            count,
        }
    }

    #[test]
    fn test_sampling_respects_quotas_and_order() {
        let bank = bank(&[("rust", 10), ("sql", 4)]);
        let mut rng = StdRng::seed_from_u64(7);

        let picked =
            sample_questions(&[quota("sql", 2), quota("rust", 3)], &bank, &mut rng).unwrap();

        assert_eq!(picked.len(), 5);
        assert!(picked[..2].iter().all(|id| bank["sql"].contains(id)));
        assert!(picked[2..].iter().all(|id| bank["rust"].contains(id)));
    }

    #[test]
    fn test_sampling_never_repeats() {
        let bank = bank(&[("go", 6)]);
        let mut rng = StdRng::seed_from_u64(42);

        let picked = sample_questions(&[quota("go", 6)], &bank, &mut rng).unwrap();
        let unique: HashSet<_> = picked.iter().collect();
        assert_eq!(unique.len(), 6);
    }

    #[test]
    fn test_sampling_fails_when_bank_too_small() {
        let bank = bank(&[("rust", 2)]);
        let mut rng = StdRng::seed_from_u64(1);

        let err = sample_questions(&[quota("rust", 3)], &bank, &mut rng).unwrap_err();
        assert_eq!(
            err,
            SamplingError::NotEnoughQuestions {
                technology: "rust".to_string(),
                available: 2,
                requested: 3,
            }
        );

        let err = sample_questions(&[quota("cobol", 1)], &bank, &mut rng).unwrap_err();
        assert!(matches!(err, SamplingError::NotEnoughQuestions { available: 0, .. }));
    }

    #[test]
    fn test_sampling_rejects_duplicate_technology() {
        let bank = bank(&[("rust", 5)]);
        let mut rng = StdRng::seed_from_u64(3);

        let err = sample_questions(&[quota("rust", 1), quota("rust", 1)], &bank, &mut rng)
            .unwrap_err();
        assert_eq!(err, SamplingError::DuplicateTechnology("rust".to_string()));
    }

    #[test]
    fn test_sampling_varies_with_seed() {
        let bank = bank(&[("rust", 50)]);
        let a = sample_questions(&[quota("rust", 5)], &bank, &mut StdRng::seed_from_u64(1)).unwrap();
        let b = sample_questions(&[quota("rust", 5)], &bank, &mut StdRng::seed_from_u64(2)).unwrap();
        assert_ne!(a, b);
    }

    fn row(correct_option: i32) -> TestQuestionRow {
        TestQuestionRow {
            question_id: Uuid::new_v4(),
            position: 0,
            answer: None,
            technology: "rust".to_string(),
            content: "?".to_string(),
            options: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            correct_option,
            level: "easy".to_string(),
        }
    }

    #[test]
    fn test_score_answers() {
        let questions = vec![row(0), row(1), row(2)];
        let mut answers = HashMap::new();
        answers.insert(questions[0].question_id, 0);
        answers.insert(questions[1].question_id, 2);
        // third question left unanswered

        let graded = score_answers(&questions, &answers, 3);
        assert_eq!(graded.correct, 1);
        assert_eq!(graded.score, 33.33);
    }

    #[test]
    fn test_score_all_correct_and_empty() {
        let questions = vec![row(1), row(1)];
        let answers = questions.iter().map(|q| (q.question_id, 1)).collect();
        assert_eq!(score_answers(&questions, &answers, 2).score, 100.0);
        assert_eq!(score_answers(&[], &HashMap::new(), 0).score, 0.0);
    }

    #[test]
    fn test_score_uses_generated_question_count() {
        // one question row left out of a four-question test
        let questions = vec![row(1)];
        let answers = questions.iter().map(|q| (q.question_id, 1)).collect();

        let graded = score_answers(&questions, &answers, 4);
        assert_eq!(graded.correct, 1);
        assert_eq!(graded.score, 25.0);
    }

    #[test]
    fn test_default_title_fits_column() {
        let long = "é".repeat(100);
        let title = default_test_title(&long, &long, &["rust".to_string()], 128);
        assert_eq!(title.chars().count(), 128);
        assert!(title.starts_with(&long));

        let short = default_test_title("Ada", "Lovelace", &["rust".into(), "sql".into()], 128);
        assert_eq!(short, "Ada Lovelace - rust, sql");
    }
}
