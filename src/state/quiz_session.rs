//! Quiz lifecycle: idle → in progress → completed → idle.

use std::rc::Rc;
use yew::Reducible;

use super::session::SessionAction;
use crate::quiz::{Quiz, QuizScore, score};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuizPhase {
    #[default]
    Idle,
    InProgress,
    Completed(QuizScore),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuizSession {
    pub phase: QuizPhase,
    pub quiz: Quiz,
    /// Selected option id per question.
    pub answers: Vec<Option<char>>,
    pub current: usize,
    /// Bumped on every completion so effects can award points once per quiz.
    pub completions: u32,
}

impl QuizSession {
    pub fn answered(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn last_score(&self) -> Option<QuizScore> {
        match self.phase {
            QuizPhase::Completed(s) => Some(s),
            _ => None,
        }
    }

    /// Points owed for the latest completion, given how many completions
    /// were already paid out. At most one award per completion.
    pub fn reward_since(&self, awarded: u32) -> Option<SessionAction> {
        if self.completions == awarded {
            return None;
        }
        self.last_score().map(|score| SessionAction::QuizCompleted { score })
    }

    fn complete(&mut self) {
        self.phase = QuizPhase::Completed(score(&self.quiz, &self.answers));
        self.completions = self.completions.wrapping_add(1);
    }
}

#[derive(Clone, Debug)]
pub enum QuizAction {
    Start(Quiz),
    Answer { question: usize, option: char },
    Goto(usize),
    /// Early submit; unanswered questions count as wrong.
    Submit,
    Close,
}

impl Reducible for QuizSession {
    type Action = QuizAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use QuizAction::*;
        let mut new = (*self).clone();
        match action {
            Start(quiz) => {
                if new.phase != QuizPhase::Idle {
                    return self;
                }
                new.answers = vec![None; quiz.questions.len()];
                new.quiz = quiz;
                new.current = 0;
                new.phase = QuizPhase::InProgress;
            }
            Answer { question, option } => {
                if new.phase != QuizPhase::InProgress || question >= new.answers.len() {
                    return self;
                }
                new.answers[question] = Some(option);
                if new.answers.iter().all(Option::is_some) {
                    new.complete();
                } else if let Some(next) = (question + 1..new.answers.len())
                    .chain(0..question)
                    .find(|&i| new.answers[i].is_none())
                {
                    new.current = next;
                }
            }
            Goto(i) => {
                if new.phase != QuizPhase::InProgress || new.answers.is_empty() {
                    return self;
                }
                new.current = i.min(new.answers.len() - 1);
            }
            Submit => {
                if new.phase != QuizPhase::InProgress {
                    return self;
                }
                new.complete();
            }
            Close => {
                new.phase = QuizPhase::Idle;
                new.answers.clear();
                new.current = 0;
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{QuizOption, QuizQuestion};

    fn quiz(n: usize) -> Quiz {
        Quiz {
            title: "T Quiz".into(),
            questions: (0..n)
                .map(|i| QuizQuestion {
                    id: i + 1,
                    text: format!("Q{i}"),
                    options: ['a', 'b', 'c', 'd']
                        .into_iter()
                        .map(|id| QuizOption {
                            id,
                            text: id.to_string(),
                            correct: id == 'b',
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    fn run(actions: Vec<QuizAction>) -> QuizSession {
        actions
            .into_iter()
            .fold(Rc::new(QuizSession::default()), |s, a| s.reduce(a))
            .as_ref()
            .clone()
    }

    #[test]
    fn answering_everything_completes() {
        let s = run(vec![
            QuizAction::Start(quiz(2)),
            QuizAction::Answer { question: 0, option: 'b' },
        ]);
        assert_eq!(s.phase, QuizPhase::InProgress);
        assert_eq!(s.current, 1);
        let s = Rc::new(s).reduce(QuizAction::Answer { question: 1, option: 'a' });
        assert_eq!(s.phase, QuizPhase::Completed(QuizScore { correct: 1, total: 2 }));
        assert_eq!(s.completions, 1);
    }

    #[test]
    fn all_correct_and_all_wrong() {
        let right = run(vec![
            QuizAction::Start(quiz(3)),
            QuizAction::Answer { question: 0, option: 'b' },
            QuizAction::Answer { question: 1, option: 'b' },
            QuizAction::Answer { question: 2, option: 'b' },
        ]);
        assert_eq!(right.last_score(), Some(QuizScore { correct: 3, total: 3 }));
        let wrong = run(vec![
            QuizAction::Start(quiz(3)),
            QuizAction::Answer { question: 0, option: 'a' },
            QuizAction::Answer { question: 1, option: 'c' },
            QuizAction::Answer { question: 2, option: 'd' },
        ]);
        assert_eq!(wrong.last_score(), Some(QuizScore { correct: 0, total: 3 }));
    }

    #[test]
    fn early_submit_and_close_return_to_idle() {
        let s = run(vec![
            QuizAction::Start(quiz(4)),
            QuizAction::Answer { question: 2, option: 'b' },
            QuizAction::Submit,
        ]);
        assert_eq!(s.last_score(), Some(QuizScore { correct: 1, total: 4 }));
        let s = Rc::new(s).reduce(QuizAction::Close);
        assert_eq!(s.phase, QuizPhase::Idle);
        assert_eq!(s.completions, 1);
    }

    #[test]
    fn empty_quiz_submits_as_zero_of_zero() {
        let s = run(vec![QuizAction::Start(quiz(0)), QuizAction::Submit]);
        assert_eq!(s.last_score(), Some(QuizScore { correct: 0, total: 0 }));
        assert_eq!(s.last_score().map(|x| x.percent()), Some(0));
    }

    #[test]
    fn answers_ignored_outside_progress() {
        let s = run(vec![QuizAction::Answer { question: 0, option: 'b' }]);
        assert_eq!(s.phase, QuizPhase::Idle);
        let done = run(vec![
            QuizAction::Start(quiz(1)),
            QuizAction::Answer { question: 0, option: 'b' },
            QuizAction::Answer { question: 0, option: 'a' },
            QuizAction::Submit,
        ]);
        assert_eq!(done.completions, 1);
        assert_eq!(done.last_score(), Some(QuizScore { correct: 1, total: 1 }));
    }

    #[test]
    fn each_completion_is_rewarded_once() {
        assert!(QuizSession::default().reward_since(0).is_none());

        let s = run(vec![
            QuizAction::Start(quiz(2)),
            QuizAction::Answer { question: 0, option: 'b' },
            QuizAction::Answer { question: 1, option: 'b' },
        ]);
        match s.reward_since(0) {
            Some(SessionAction::QuizCompleted { score }) => {
                assert_eq!(score, QuizScore { correct: 2, total: 2 })
            }
            other => panic!("expected quiz award, got {other:?}"),
        }
        let paid = s.completions;
        assert!(s.reward_since(paid).is_none());

        let closed = Rc::new(s).reduce(QuizAction::Close);
        assert!(closed.reward_since(paid).is_none());

        let retake = closed
            .reduce(QuizAction::Start(quiz(1)))
            .reduce(QuizAction::Submit);
        assert_eq!(retake.completions, paid + 1);
        assert!(matches!(
            retake.reward_since(paid),
            Some(SessionAction::QuizCompleted { score: QuizScore { correct: 0, total: 1 } })
        ));
    }

    #[test]
    fn goto_clamps() {
        let s = run(vec![QuizAction::Start(quiz(3)), QuizAction::Goto(10)]);
        assert_eq!(s.current, 2);
    }
}
