pub mod gallery;
pub mod generation;
pub mod load;
pub mod quiz_session;
pub mod session;
pub mod suggest;
pub mod viewer;

pub use gallery::paginate;
pub use generation::{GenerationAction, GenerationState, RequestGate};
pub use load::LoadState;
pub use quiz_session::{QuizAction, QuizPhase, QuizSession};
pub use session::{SessionAction, SessionState, StylePick, language_pick, style_pick};
pub use suggest::{SuggestPlan, SuggestionSequencer};
pub use viewer::{ViewerAction, ViewerState};
