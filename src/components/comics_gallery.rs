use std::rc::Rc;

use super::app::AppContext;
use super::comic_image::ComicImage;
use super::load_error::LoadError;
use crate::api;
use crate::config::GALLERY_PAGE_SIZE;
use crate::model::{Comic, ComicStatus};
use crate::routes::Route;
use crate::state::{LoadState, paginate};
use crate::util::{format_created_at, plural};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

fn status_badge(status: ComicStatus) -> (&'static str, &'static str) {
    match status {
        ComicStatus::Pending => ("Pending", "#d29922"),
        ComicStatus::Completed => ("Completed", "#3fb950"),
        ComicStatus::Failed => ("Failed", "#f85149"),
    }
}

#[function_component]
pub fn ComicsGallery() -> Html {
    let ctx = use_context::<AppContext>().unwrap_or_default();
    let load = use_state(|| LoadState::<Rc<Vec<Comic>>>::Loading);
    let page = use_state(|| 1usize);
    let attempt = use_state(|| 0u32);

    {
        let load = load.clone();
        let config = ctx.config.clone();
        use_effect_with(*attempt, move |_| {
            load.set(LoadState::Loading);
            spawn_local(async move {
                let result = api::list_comics(&config).await;
                match &result {
                    Ok(comics) => log::debug!("gallery loaded {} comics", comics.len()),
                    Err(e) => log::warn!("gallery load failed: {e}"),
                }
                load.set(result.map(Rc::new).into());
            });
            || ()
        });
    }

    let comics = match &*load {
        LoadState::Loading => {
            return html! { <div style="padding:48px; text-align:center;">{"Loading comics..."}</div> };
        }
        LoadState::Failed(error) => {
            let retry = {
                let attempt = attempt.clone();
                Callback::from(move |_| attempt.set(*attempt + 1))
            };
            return html! { <LoadError error={error.clone()} {retry} back_to={Route::Home} back_label="Back to Home" /> };
        }
        LoadState::Loaded(comics) => comics.clone(),
    };

    let current = paginate(comics.as_slice(), *page, GALLERY_PAGE_SIZE);
    let goto = |target: usize| {
        let page = page.clone();
        Callback::from(move |_| page.set(target))
    };

    let cards = current.items.iter().map(|comic| {
        let (label, color) = status_badge(comic.status);
        html! {
            <Link<Route> to={Route::comic(&comic.title)}>
                <div style="display:flex; flex-direction:column; background:#161b22; border:1px solid #30363d; border-radius:10px; overflow:hidden; color:#e6edf3;">
                    <ComicImage image={comic.cover()} alt={comic.title.clone()} style="height:200px; object-fit:cover;" />
                    <div style="padding:10px 12px; display:flex; flex-direction:column; gap:6px;">
                        <div style="font-weight:700;">{ comic.title.clone() }</div>
                        <div style="display:flex; justify-content:space-between; align-items:center; font-size:12px;">
                            <span style="opacity:0.75;">{ plural(comic.scenes.len(), "scene") }</span>
                            <span style={format!("padding:2px 8px; border-radius:999px; border:1px solid {0}; color:{0};", color)}>{ label }</span>
                        </div>
                        if let Some(created) = comic.created_at.as_deref() {
                            <div style="font-size:11px; opacity:0.6;">{ format_created_at(created) }</div>
                        }
                    </div>
                </div>
            </Link<Route>>
        }
    });

    let numbers = (1..=current.total_pages).map(|n| {
        let bg = if n == current.page { "#1f6feb" } else { "#161b22" };
        html! {
            <button key={n} onclick={goto(n)} style={format!("min-width:32px; padding:4px 8px; border-radius:6px; border:1px solid #30363d; background:{}; color:inherit; cursor:pointer;", bg)}>{ n }</button>
        }
    });

    html! {
        <div style="display:flex; flex-direction:column; gap:18px;">
            <div style="display:flex; justify-content:space-between; align-items:baseline;">
                <h1 style="margin:0; color:#ffd600;">{"Comic Gallery"}</h1>
                <span style="opacity:0.7;">{ plural(comics.len(), "comic") }</span>
            </div>
            if comics.is_empty() {
                <div style="padding:48px; text-align:center; opacity:0.8;">
                    {"No comics yet. "}
                    <Link<Route> to={Route::Home}><span style="color:#58a6ff;">{"Create the first one"}</span></Link<Route>>
                </div>
            } else {
                <div style="display:grid; grid-template-columns:repeat(auto-fill, minmax(240px, 1fr)); gap:16px;">
                    { for cards }
                </div>
                <div style="display:flex; gap:6px; justify-content:center; align-items:center;">
                    <button onclick={goto(current.page.saturating_sub(1))} disabled={!current.has_previous()}>{"◀"}</button>
                    { for numbers }
                    <button onclick={goto(current.page + 1)} disabled={!current.has_next()}>{"▶"}</button>
                </div>
            }
        </div>
    }
}
