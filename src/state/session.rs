//! Session-wide gamification counters. Level is always derived from points.

use std::rc::Rc;
use yew::Reducible;

use crate::config::{LEVEL_THRESHOLD, SEED_POINTS};
use crate::model::StyleId;
use crate::quiz::QuizScore;

const AWARD_HISTORY: usize = 20;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointsAward {
    pub reason: &'static str,
    pub amount: u32,
    /// Points total right after this award.
    pub total: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub points: u32,
    /// Most recent awards, oldest first.
    pub awards: Vec<PointsAward>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::with_points(SEED_POINTS)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelProgress {
    pub level: u32,
    pub xp_in_level: u32,
    pub xp_to_next: u32,
    pub percent: u32,
}

impl SessionState {
    pub fn with_points(points: u32) -> Self {
        Self {
            points,
            awards: Vec::new(),
        }
    }

    pub fn level(&self) -> u32 {
        level_for(self.points)
    }

    pub fn progress(&self) -> LevelProgress {
        let xp_in_level = self.points % LEVEL_THRESHOLD;
        LevelProgress {
            level: self.level(),
            xp_in_level,
            xp_to_next: LEVEL_THRESHOLD - xp_in_level,
            percent: xp_in_level * 100 / LEVEL_THRESHOLD,
        }
    }
}

pub fn level_for(points: u32) -> u32 {
    1 + points / LEVEL_THRESHOLD
}

#[derive(Clone, Debug)]
pub enum SessionAction {
    StyleSelected,
    LanguageChanged,
    QuizCompleted { score: QuizScore },
}

impl SessionAction {
    fn award(&self) -> (&'static str, u32) {
        match self {
            SessionAction::StyleSelected => ("Style picked", 5),
            SessionAction::LanguageChanged => ("Language changed", 5),
            SessionAction::QuizCompleted { score } => ("Quiz completed", score.correct.saturating_mul(10)),
        }
    }
}

/// Outcome of clicking a style card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StylePick {
    /// Level too low: the card shakes and nothing changes.
    Locked,
    Unchanged,
    Changed,
}

impl StylePick {
    pub fn award(self) -> Option<SessionAction> {
        match self {
            StylePick::Changed => Some(SessionAction::StyleSelected),
            StylePick::Locked | StylePick::Unchanged => None,
        }
    }
}

pub fn style_pick(current: StyleId, picked: StyleId, level: u32) -> StylePick {
    if picked.option().locked_at(level) {
        StylePick::Locked
    } else if picked == current {
        StylePick::Unchanged
    } else {
        StylePick::Changed
    }
}

/// Award for switching the UI language; re-picking the active one is free.
pub fn language_pick(current: &str, picked: &str) -> Option<SessionAction> {
    (current != picked).then_some(SessionAction::LanguageChanged)
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let (reason, amount) = action.award();
        let mut new = (*self).clone();
        new.points = new.points.saturating_add(amount);
        new.awards.push(PointsAward {
            reason,
            amount,
            total: new.points,
        });
        if new.awards.len() > AWARD_HISTORY {
            let excess = new.awards.len() - AWARD_HISTORY;
            new.awards.drain(..excess);
        }
        Rc::new(new)
    }
}
