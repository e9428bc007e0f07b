use crate::error::AppError;

/// Status of a primary page load (gallery listing, single comic).
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed(AppError),
}

impl<T> From<Result<T, AppError>> for LoadState<T> {
    fn from(result: Result<T, AppError>) -> Self {
        match result {
            Ok(v) => LoadState::Loaded(v),
            Err(e) => LoadState::Failed(e),
        }
    }
}
