use super::comic_image::ComicImage;
use crate::model::{Comic, WikiSummary};
use crate::routes::Route;
use crate::state::{ViewerAction, ViewerState};
use crate::util::plural;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ComicResultProps {
    pub summary: WikiSummary,
    pub comic: Comic,
    pub quiz_available: bool,
    pub on_quiz: Callback<()>,
}

#[function_component]
pub fn ComicResult(props: &ComicResultProps) -> Html {
    let scene_count = props.comic.page_count();
    let flip = use_reducer(|| ViewerState::new(scene_count));
    {
        let flip = flip.clone();
        use_effect_with((props.comic.title.clone(), scene_count), move |(_, count)| {
            flip.dispatch(ViewerAction::Reset { scene_count: *count });
            || ()
        });
    }

    let prev = {
        let flip = flip.clone();
        Callback::from(move |_| flip.dispatch(ViewerAction::Previous))
    };
    let next = {
        let flip = flip.clone();
        Callback::from(move |_| flip.dispatch(ViewerAction::Next))
    };
    let quiz_btn = {
        let cb = props.on_quiz.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let comic = &props.comic;
    let scene = comic.scenes.get(flip.current);
    let page = if scene_count == 0 {
        html! { <div style="padding:24px; text-align:center; opacity:0.7;">{"No scenes were generated."}</div> }
    } else {
        html! {
            <div style="display:flex; flex-direction:column; gap:10px;">
                <ComicImage image={comic.scene_image(flip.current)} alt={format!("{} scene {}", comic.title, flip.current + 1)} style="max-height:480px; border-radius:8px;" />
                if let Some(scene) = scene {
                    <div style="display:flex; flex-direction:column; gap:4px; padding:10px 12px; background:#fff; color:#111; border-radius:10px; font-family:'Comic Sans MS', cursive;">
                        { for scene.dialogue_lines().map(|line| html! { <p style="margin:0;">{ line.to_string() }</p> }) }
                    </div>
                }
                <div style="display:flex; justify-content:space-between; align-items:center;">
                    <button onclick={prev} disabled={flip.is_first()}>{"◀ Prev"}</button>
                    <span style="font-variant-numeric:tabular-nums;">{ format!("{} / {}", flip.current + 1, scene_count) }</span>
                    <button onclick={next} disabled={flip.is_last()}>{"Next ▶"}</button>
                </div>
            </div>
        }
    };

    html! {
        <section style="display:flex; flex-direction:column; gap:14px; padding:18px; background:#161b22; border:1px solid #30363d; border-radius:12px;">
            <div style="display:flex; justify-content:space-between; align-items:baseline; gap:12px; flex-wrap:wrap;">
                <h2 style="margin:0; color:#ffd600;">{ props.summary.title.clone() }</h2>
                <span style="font-size:12px; opacity:0.7;">{ plural(scene_count, "scene") }</span>
            </div>
            if let Some(text) = props.summary.summary.as_deref().filter(|s| !s.is_empty()) {
                <p style="margin:0; line-height:1.5; opacity:0.9;">{ text.to_string() }</p>
            }
            if let Some(url) = props.summary.url.as_deref().filter(|u| !u.is_empty()) {
                <a href={url.to_string()} target="_blank" rel="noopener noreferrer" style="color:#58a6ff;">{"Read more on Wikipedia"}</a>
            }
            if let Some(storyline) = comic.storyline.as_deref().filter(|s| !s.is_empty()) {
                <details>
                    <summary style="cursor:pointer; font-weight:600;">{"Storyline"}</summary>
                    <p style="white-space:pre-wrap; line-height:1.5;">{ storyline.to_string() }</p>
                </details>
            }
            { page }
            <div style="display:flex; gap:10px; flex-wrap:wrap;">
                <button onclick={quiz_btn} disabled={!props.quiz_available}>{"Take Quiz"}</button>
                <Link<Route> to={Route::comic(&comic.title)}>
                    <span style="color:#58a6ff;">{"Open in viewer"}</span>
                </Link<Route>>
            </div>
        </section>
    }
}
