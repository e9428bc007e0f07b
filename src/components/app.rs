use std::rc::Rc;

use super::{comic_viewer::ComicViewer, comics_gallery::ComicsGallery, header::Header, landing_page::LandingPage};
use crate::config::ApiConfig;
use crate::model::LANGUAGES;
use crate::routes::Route;
use crate::state::{SessionAction, SessionState, language_pick};
use yew::prelude::*;
use yew_router::prelude::*;

// Session-wide state shared by every page (points, level, language, backend location)
#[derive(Clone, PartialEq)]
pub struct AppContext {
    pub session: SessionState,
    pub award: Callback<SessionAction>,
    pub config: Rc<ApiConfig>,
    pub language: &'static str,
    pub set_language: Callback<&'static str>,
}

impl Default for AppContext {
    fn default() -> Self {
        Self {
            session: SessionState::default(),
            award: Callback::noop(),
            config: Rc::new(ApiConfig::default()),
            language: LANGUAGES[0].code,
            set_language: Callback::noop(),
        }
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <LandingPage /> },
        Route::Gallery => html! { <ComicsGallery /> },
        Route::Comic { id } => html! { <ComicViewer title={id} /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let session = use_reducer(SessionState::default);
    let language = use_state(|| LANGUAGES[0].code);
    let config = use_memo((), |_| ApiConfig::default());

    {
        let config = config.clone();
        use_effect_with((), move |_| {
            log::info!("using comic backend at {}", config.base_url);
            || ()
        });
    }

    let award = {
        let session = session.clone();
        Callback::from(move |action: SessionAction| {
            log::debug!("session award: {action:?}");
            session.dispatch(action);
        })
    };
    let set_language = {
        let language = language.clone();
        let award = award.clone();
        Callback::from(move |code: &'static str| {
            if let Some(action) = language_pick(*language, code) {
                language.set(code);
                award.emit(action);
            }
        })
    };

    let ctx = AppContext {
        session: (*session).clone(),
        award,
        config,
        language: *language,
        set_language,
    };

    html! {
        <BrowserRouter>
            <ContextProvider<AppContext> context={ctx}>
                <div style="min-height:100vh; background:#0d1117; color:#e6edf3; font-family:system-ui, sans-serif;">
                    <Header />
                    <main style="max-width:1100px; margin:0 auto; padding:20px 16px 48px 16px;">
                        <Switch<Route> render={switch} />
                    </main>
                </div>
            </ContextProvider<AppContext>>
        </BrowserRouter>
    }
}
