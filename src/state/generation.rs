//! One comic generation at a time, plus the session's recent topics.

use std::rc::Rc;
use yew::Reducible;

use crate::config::RECENT_TOPICS_LIMIT;
use crate::error::AppError;
use crate::model::{Comic, WikiSummary};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GenerationState {
    pub loading: bool,
    pub error: Option<AppError>,
    pub summary: Option<WikiSummary>,
    pub comic: Option<Comic>,
    /// Most recent first.
    pub recent_topics: Vec<String>,
}

impl GenerationState {
    /// Submit is allowed only with a topic and nothing in flight.
    pub fn can_submit(&self, topic: &str) -> bool {
        !self.loading && !topic.trim().is_empty()
    }
}

#[derive(Clone, Debug)]
pub enum GenerationAction {
    Started,
    Succeeded {
        topic: String,
        summary: WikiSummary,
        comic: Box<Comic>,
    },
    Failed(AppError),
    DismissError,
}

impl Reducible for GenerationState {
    type Action = GenerationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use GenerationAction::*;
        let mut new = (*self).clone();
        match action {
            Started => {
                if new.loading {
                    return self;
                }
                new.loading = true;
                new.error = None;
                new.summary = None;
                new.comic = None;
            }
            Succeeded { topic, summary, comic } => {
                new.loading = false;
                new.summary = Some(summary);
                new.comic = Some(*comic);
                push_recent(&mut new.recent_topics, &topic);
            }
            Failed(e) => {
                new.loading = false;
                new.error = Some(e);
            }
            DismissError => new.error = None,
        }
        Rc::new(new)
    }
}

/// Moves `topic` to the front, dropping duplicates and the oldest overflow.
pub fn push_recent(list: &mut Vec<String>, topic: &str) {
    let topic = topic.trim();
    if topic.is_empty() {
        return;
    }
    list.retain(|t| !t.eq_ignore_ascii_case(topic));
    list.insert(0, topic.to_string());
    list.truncate(RECENT_TOPICS_LIMIT);
}

/// Guard shared with the async request so a second submit in the same frame
/// is dropped before the rendered button catches up.
#[derive(Debug, Default)]
pub struct RequestGate {
    in_flight: bool,
}

impl RequestGate {
    pub fn try_begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(title: &str) -> WikiSummary {
        WikiSummary {
            title: title.into(),
            ..Default::default()
        }
    }

    #[test]
    fn submit_disabled_while_loading() {
        let s = Rc::new(GenerationState::default());
        assert!(s.can_submit("Moon"));
        assert!(!s.can_submit("   "));
        let loading = s.reduce(GenerationAction::Started);
        assert!(!loading.can_submit("Moon"));
        let again = loading.clone().reduce(GenerationAction::Started);
        assert!(Rc::ptr_eq(&loading, &again));
    }

    #[test]
    fn success_records_comic_and_topic() {
        let s = Rc::new(GenerationState::default())
            .reduce(GenerationAction::Started)
            .reduce(GenerationAction::Succeeded {
                topic: "Moon".into(),
                summary: summary("Moon"),
                comic: Box::new(Comic {
                    title: "Moon".into(),
                    ..Default::default()
                }),
            });
        assert!(!s.loading);
        assert_eq!(s.comic.as_ref().map(|c| c.title.as_str()), Some("Moon"));
        assert_eq!(s.recent_topics, vec!["Moon".to_string()]);
    }

    #[test]
    fn failure_keeps_static_error() {
        let s = Rc::new(GenerationState::default())
            .reduce(GenerationAction::Started)
            .reduce(GenerationAction::Failed(AppError::NetworkFailure("500".into())));
        assert!(!s.loading);
        assert!(s.error.is_some());
        assert!(s.reduce(GenerationAction::DismissError).error.is_none());
    }

    #[test]
    fn recent_topics_dedupe_and_cap() {
        let mut list = Vec::new();
        for t in ["a", "b", "c", "d", "e", "f", "B"] {
            push_recent(&mut list, t);
        }
        assert_eq!(list, vec!["B", "f", "e", "d", "c"]);
        push_recent(&mut list, "  ");
        assert_eq!(list.len(), RECENT_TOPICS_LIMIT);
    }

    #[test]
    fn gate_allows_one_request() {
        let mut g = RequestGate::default();
        assert!(g.try_begin());
        assert!(!g.try_begin());
        g.finish();
        assert!(g.try_begin());
    }
}
