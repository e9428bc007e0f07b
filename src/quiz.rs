//! Quiz questions derived from a comic's dialogue, and their scoring.

use rand::Rng;
use rand::seq::SliceRandom;
use regex::Regex;

use crate::config::MAX_QUIZ_QUESTIONS;
use crate::model::Comic;

pub const BLANK: &str = "_____";
const DISTRACTORS: usize = 3;
const OPTION_IDS: [char; 4] = ['a', 'b', 'c', 'd'];
// Used when the dialogue is too short to supply real distractors.
const FILLER: [&str; 3] = ["Not this option", "Nor this one", "Definitely not this"];

#[derive(Clone, Debug, PartialEq)]
pub struct QuizOption {
    pub id: char,
    pub text: String,
    pub correct: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizQuestion {
    pub id: usize,
    pub text: String,
    pub options: Vec<QuizOption>,
}

impl QuizQuestion {
    pub fn is_correct(&self, option_id: char) -> bool {
        self.options
            .iter()
            .any(|o| o.id == option_id && o.correct)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Quiz {
    pub title: String,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuizScore {
    pub correct: u32,
    pub total: u32,
}

impl QuizScore {
    /// Whole-number percentage; an empty quiz scores 0.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            0
        } else {
            self.correct * 100 / self.total
        }
    }
}

/// Non-empty dialogue lines across all scenes, in scene order.
pub fn key_points(comic: &Comic) -> Vec<&str> {
    comic.scenes.iter().flat_map(|s| s.dialogue_lines()).collect()
}

pub fn generate_quiz<R: Rng + ?Sized>(comic: &Comic, rng: &mut R) -> Quiz {
    let points = key_points(comic);
    let verb = Regex::new(r"\b(?:is|are)\b").ok();
    let pool = distractor_pool(&points);
    let questions = points
        .iter()
        .take(MAX_QUIZ_QUESTIONS)
        .enumerate()
        .map(|(i, point)| build_question(i + 1, point, verb.as_ref(), &pool, rng))
        .collect();
    Quiz {
        title: format!("{} Quiz", comic.title),
        questions,
    }
}

fn build_question<R: Rng + ?Sized>(
    id: usize,
    point: &str,
    verb: Option<&Regex>,
    pool: &[String],
    rng: &mut R,
) -> QuizQuestion {
    let (text, answer) = blank_and_answer(point, verb);
    let mut choices = vec![(answer.clone(), true)];
    choices.extend(pick_distractors(pool, &answer, rng).into_iter().map(|d| (d, false)));
    choices.shuffle(rng);
    // ids follow display order
    let options = choices
        .into_iter()
        .zip(OPTION_IDS)
        .map(|((text, correct), id)| QuizOption { id, text, correct })
        .collect();
    QuizQuestion { id, text, options }
}

/// Blanks the first "is"/"are" and takes the answer from the words after it.
fn blank_and_answer(point: &str, verb: Option<&Regex>) -> (String, String) {
    let found = verb.and_then(|re| re.find(point));
    let (text, tail) = match found {
        Some(m) => (
            format!("{}{}{}", &point[..m.start()], BLANK, &point[m.end()..]),
            &point[m.end()..],
        ),
        None => (point.to_string(), point),
    };
    let answer = last_words(tail);
    let answer = if answer.is_empty() { last_words(point) } else { answer };
    let answer = if answer.is_empty() { point.to_string() } else { answer };
    (text, answer)
}

fn last_words(s: &str) -> String {
    let words: Vec<&str> = s.split_whitespace().collect();
    let start = words.len().saturating_sub(3);
    words[start..]
        .join(" ")
        .trim_end_matches(|c: char| c.is_ascii_punctuation())
        .to_string()
}

fn clean_word(w: &str) -> &str {
    w.trim_matches(|c: char| !c.is_alphanumeric())
}

/// Three-word windows over every word longer than three characters.
fn distractor_pool(points: &[&str]) -> Vec<String> {
    let words: Vec<&str> = points
        .iter()
        .flat_map(|p| p.split_whitespace())
        .map(clean_word)
        .filter(|w| w.chars().count() > 3)
        .collect();
    if words.len() < 3 {
        return words.into_iter().map(String::from).collect();
    }
    words.windows(3).map(|w| w.join(" ")).collect()
}

/// One pass over the shuffled pool, then filler, then repeats. Always returns
/// exactly `DISTRACTORS` texts, none equal to `correct`.
fn pick_distractors<R: Rng + ?Sized>(pool: &[String], correct: &str, rng: &mut R) -> Vec<String> {
    let same = |a: &str, b: &str| a.eq_ignore_ascii_case(b);
    let mut candidates: Vec<&str> = pool
        .iter()
        .map(String::as_str)
        .filter(|c| !same(c, correct))
        .collect();
    candidates.shuffle(rng);

    let mut picked: Vec<String> = Vec::with_capacity(DISTRACTORS);
    for c in candidates.into_iter().chain(FILLER) {
        if picked.len() == DISTRACTORS {
            break;
        }
        if !same(c, correct) && !picked.iter().any(|p| same(p, c)) {
            picked.push(c.to_string());
        }
    }
    let base = picked.len();
    let mut i = 0;
    while picked.len() < DISTRACTORS {
        let again = if base > 0 {
            picked[i % base].clone()
        } else {
            format!("{} ({})", FILLER[i % FILLER.len()], i + 1)
        };
        picked.push(again);
        i += 1;
    }
    picked
}

/// Counts selected options marked correct. `answers[i]` is the option id
/// picked for question `i`, if any.
pub fn score(quiz: &Quiz, answers: &[Option<char>]) -> QuizScore {
    let correct = quiz
        .questions
        .iter()
        .zip(answers.iter().chain(std::iter::repeat(&None)))
        .filter(|(q, a)| a.is_some_and(|id| q.is_correct(id)))
        .count();
    QuizScore {
        correct: correct as u32,
        total: quiz.questions.len() as u32,
    }
}
