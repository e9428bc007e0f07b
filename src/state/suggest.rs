//! Sequencing for the topic suggestion fetches. Every keystroke gets a new
//! sequence number; only the response tagged with the latest one is applied.

use crate::config::MIN_SUGGEST_CHARS;
use crate::error::AppError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SuggestPlan {
    /// Query too short: clear the list, no request.
    Clear,
    Fetch { seq: u64, query: String },
}

#[derive(Clone, Debug, Default)]
pub struct SuggestionSequencer {
    latest: u64,
}

impl SuggestionSequencer {
    /// Decides what a change of the topic input should do. Also invalidates
    /// any request still in flight.
    pub fn plan(&mut self, query: &str) -> SuggestPlan {
        self.latest += 1;
        let query = query.trim();
        if query.chars().count() < MIN_SUGGEST_CHARS {
            SuggestPlan::Clear
        } else {
            SuggestPlan::Fetch {
                seq: self.latest,
                query: query.to_string(),
            }
        }
    }

    /// Returns the list to show, or `None` when the response is stale.
    /// Failures clear the list silently.
    pub fn accept(&self, seq: u64, result: Result<Vec<String>, AppError>) -> Option<Vec<String>> {
        if seq != self.latest {
            return None;
        }
        match result {
            Ok(list) => Some(list),
            Err(e) => {
                log::debug!("suggestions dropped: {e}");
                Some(Vec::new())
            }
        }
    }

    /// Invalidates in-flight requests, e.g. after a suggestion was picked.
    pub fn cancel(&mut self) {
        self.latest += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetches(seq: &mut SuggestionSequencer, inputs: &[&str]) -> usize {
        inputs
            .iter()
            .filter(|q| matches!(seq.plan(q), SuggestPlan::Fetch { .. }))
            .count()
    }

    #[test]
    fn short_queries_never_fetch() {
        let mut s = SuggestionSequencer::default();
        assert_eq!(s.plan("E"), SuggestPlan::Clear);
        assert_eq!(s.plan(""), SuggestPlan::Clear);
        assert_eq!(s.plan(" E "), SuggestPlan::Clear);
        assert_eq!(fetches(&mut s, &["a", "b", "c"]), 0);
    }

    #[test]
    fn one_fetch_per_change_event() {
        let mut s = SuggestionSequencer::default();
        assert_eq!(fetches(&mut s, &["E", "Ei", "Ein"]), 2);
        assert_eq!(
            s.plan("Ein"),
            SuggestPlan::Fetch {
                seq: 4,
                query: "Ein".into()
            }
        );
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut s = SuggestionSequencer::default();
        let SuggestPlan::Fetch { seq: first, .. } = s.plan("Ei") else {
            panic!("expected fetch");
        };
        let SuggestPlan::Fetch { seq: second, .. } = s.plan("Ein") else {
            panic!("expected fetch");
        };
        assert_eq!(s.accept(first, Ok(vec!["Eiffel Tower".into()])), None);
        assert_eq!(
            s.accept(second, Ok(vec!["Albert Einstein".into()])),
            Some(vec!["Albert Einstein".to_string()])
        );
    }

    #[test]
    fn errors_clear_silently() {
        let mut s = SuggestionSequencer::default();
        let SuggestPlan::Fetch { seq, .. } = s.plan("Moon") else {
            panic!("expected fetch");
        };
        assert_eq!(
            s.accept(seq, Err(AppError::NetworkFailure("offline".into()))),
            Some(Vec::new())
        );
    }

    #[test]
    fn clearing_or_cancelling_invalidates_in_flight() {
        let mut s = SuggestionSequencer::default();
        let SuggestPlan::Fetch { seq, .. } = s.plan("Mars") else {
            panic!("expected fetch");
        };
        s.plan("M");
        assert_eq!(s.accept(seq, Ok(vec!["Mars".into()])), None);

        let SuggestPlan::Fetch { seq, .. } = s.plan("Venus") else {
            panic!("expected fetch");
        };
        s.cancel();
        assert_eq!(s.accept(seq, Ok(vec!["Venus".into()])), None);
    }
}
