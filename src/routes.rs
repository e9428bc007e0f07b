use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/gallery")]
    Gallery,
    /// `id` is the comic title; the router percent-encodes it in the path.
    #[at("/comic/:id")]
    Comic { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn comic(title: &str) -> Self {
        Route::Comic {
            id: title.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_survive_the_path() {
        for title in ["Cats", "Black hole", "Café au lait", "100% Juice"] {
            let path = Route::comic(title).to_path();
            assert!(!path.contains(' '), "{path}");
            assert_eq!(Route::recognize(&path), Some(Route::comic(title)));
        }
    }

    #[test]
    fn paths_are_encoded_once() {
        assert_eq!(Route::Gallery.to_path(), "/gallery");
        assert_eq!(Route::comic("Black hole").to_path(), "/comic/Black%20hole");
        assert_eq!(
            Route::recognize("/comic/Black%20hole"),
            Some(Route::Comic { id: "Black hole".into() })
        );
    }
}
