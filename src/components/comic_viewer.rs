use std::rc::Rc;

use super::app::AppContext;
use super::comic_image::ComicImage;
use super::load_error::LoadError;
use super::quiz_modal::{QuizModal, use_quiz_rewards};
use crate::api;
use crate::model::Comic;
use crate::quiz::{Quiz, generate_quiz, key_points};
use crate::routes::Route;
use crate::state::{LoadState, QuizAction, QuizPhase, QuizSession, ViewerAction, ViewerState};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ComicViewerProps {
    /// Comic title from the route.
    pub title: String,
}

#[function_component]
pub fn ComicViewer(props: &ComicViewerProps) -> Html {
    let ctx = use_context::<AppContext>().unwrap_or_default();
    let load = use_state(|| LoadState::<Rc<Comic>>::Loading);
    let attempt = use_state(|| 0u32);
    // Only the newest load may write its result.
    let latest_load = use_mut_ref(|| 0u64);
    let viewer = use_reducer(ViewerState::default);
    let quiz = use_reducer(QuizSession::default);
    let achievement = use_quiz_rewards(&quiz, &ctx.award);
    // keydown listener reads this instead of the (stale) quiz handle
    let quiz_open = use_mut_ref(|| false);
    *quiz_open.borrow_mut() = quiz.phase != QuizPhase::Idle;
    let viewer_now = use_mut_ref(ViewerState::default);
    *viewer_now.borrow_mut() = (*viewer).clone();

    {
        let load = load.clone();
        let viewer = viewer.clone();
        let latest_load = latest_load.clone();
        let config = ctx.config.clone();
        use_effect_with((props.title.clone(), *attempt), move |(title, _)| {
            let seq = {
                let mut latest = latest_load.borrow_mut();
                *latest += 1;
                *latest
            };
            load.set(LoadState::Loading);
            let title = title.clone();
            spawn_local(async move {
                let result = api::fetch_comic(&config, &title).await;
                if *latest_load.borrow() != seq {
                    return;
                }
                match result {
                    Ok(comic) => {
                        log::debug!("viewer loaded {title:?} ({} scenes)", comic.scenes.len());
                        viewer.dispatch(ViewerAction::Reset { scene_count: comic.page_count() });
                        load.set(LoadState::Loaded(Rc::new(comic)));
                    }
                    Err(e) => {
                        log::warn!("viewer failed to load {title:?}: {e}");
                        load.set(LoadState::Failed(e));
                    }
                }
            });
            || ()
        });
    }

    // Keyboard navigation
    {
        let viewer = viewer.clone();
        let quiz_open = quiz_open.clone();
        let viewer_now = viewer_now.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let keydown_cb = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
                if *quiz_open.borrow() {
                    return;
                }
                let Some(action) = ViewerAction::from_key(&e.key()) else {
                    return;
                };
                if !viewer_now.borrow().changes_on(&action) {
                    return;
                }
                e.prevent_default();
                viewer.dispatch(action);
            }) as Box<dyn FnMut(_)>);
            if let Some(win) = &window {
                win.add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())
                    .ok();
            }
            move || {
                if let Some(win) = window {
                    win.remove_event_listener_with_callback(
                        "keydown",
                        keydown_cb.as_ref().unchecked_ref(),
                    )
                    .ok();
                }
            }
        });
    }

    let comic = match &*load {
        LoadState::Loading => {
            return html! { <div style="padding:48px; text-align:center;">{"Loading comic..."}</div> };
        }
        LoadState::Failed(error) => {
            let retry = {
                let attempt = attempt.clone();
                Callback::from(move |_| attempt.set(*attempt + 1))
            };
            return html! { <LoadError error={error.clone()} {retry} back_to={Route::Gallery} back_label="Back to Gallery" /> };
        }
        LoadState::Loaded(comic) => comic.clone(),
    };

    let dispatch = |action: ViewerAction| {
        let viewer = viewer.clone();
        Callback::from(move |_| viewer.dispatch(action.clone()))
    };
    let regenerate = {
        let comic = comic.clone();
        Callback::from(move |_: ()| -> Quiz { generate_quiz(&comic, &mut rand::thread_rng()) })
    };
    let start_quiz = {
        let quiz = quiz.clone();
        let regenerate = regenerate.clone();
        Callback::from(move |_| quiz.dispatch(QuizAction::Start(regenerate.emit(()))))
    };
    let dismiss_achievement = {
        let achievement = achievement.clone();
        Callback::from(move |_| achievement.set(None))
    };

    let points = key_points(&comic);
    let count = viewer.scene_count;
    let scene = comic.scenes.get(viewer.current);
    let scene_no = scene.map_or(viewer.current as u32 + 1, |s| s.number_or(viewer.current));
    let alt = format!("{} scene {}", comic.title, scene_no);

    let thumbs = (0..count).map(|i| {
        let border = if i == viewer.current { "#ffd600" } else { "#30363d" };
        html! {
            <button key={i} onclick={dispatch(ViewerAction::JumpTo(i))} style={format!("flex:0 0 auto; width:84px; padding:0; border:2px solid {}; border-radius:6px; overflow:hidden; background:none; cursor:pointer;", border)}>
                <ComicImage image={comic.scene_image(i)} alt={format!("Thumbnail {}", i + 1)} style="height:56px; object-fit:cover;" />
            </button>
        }
    });

    html! {
        <div style="display:flex; flex-direction:column; gap:16px;">
            <div style="display:flex; justify-content:space-between; align-items:center; gap:12px; flex-wrap:wrap;">
                <Link<Route> to={Route::Gallery}><span style="color:#58a6ff;">{"◀ Back to Gallery"}</span></Link<Route>>
                <h1 style="margin:0; font-size:26px; color:#ffd600;">{ comic.title.clone() }</h1>
                <div style="display:flex; gap:8px;">
                    <button onclick={dispatch(ViewerAction::ToggleInfo)}>{ if viewer.show_info { "Hide Info" } else { "Info (i)" } }</button>
                    <button onclick={start_quiz} disabled={points.is_empty()}>{"Take Quiz"}</button>
                </div>
            </div>
            if let Some(score) = *achievement {
                <div style="display:flex; justify-content:space-between; align-items:center; padding:10px 14px; border-radius:8px; background:rgba(212,175,55,0.15); border:1px solid #d4af37; color:#d4af37;">
                    <span>{ format!("🏆 Achievement unlocked: quiz finished with {}/{} correct (+{} points)", score.correct, score.total, score.correct * 10) }</span>
                    <button onclick={dismiss_achievement}>{"✕"}</button>
                </div>
            }
            if count == 0 {
                <div style="padding:48px; text-align:center; opacity:0.7;">{"This comic has no scenes yet."}</div>
            } else {
                <div style="display:flex; gap:16px; align-items:flex-start; flex-wrap:wrap;">
                    <div style="flex:1 1 520px; display:flex; flex-direction:column; gap:10px;">
                        <ComicImage image={comic.scene_image(viewer.current)} alt={alt.clone()}
                            style="max-height:560px; border-radius:10px;" onclick={{
                                let viewer = viewer.clone();
                                Callback::from(move |_: ()| viewer.dispatch(ViewerAction::OpenLightbox))
                            }} />
                        if let Some(scene) = scene {
                            <div style="display:flex; flex-direction:column; gap:4px; padding:10px 12px; background:#fff; color:#111; border-radius:10px; font-family:'Comic Sans MS', cursive;">
                                { for scene.dialogue_lines().map(|line| html! { <p style="margin:0;">{ line.to_string() }</p> }) }
                            </div>
                        }
                        <div style="display:flex; justify-content:space-between; align-items:center;">
                            <button onclick={dispatch(ViewerAction::Previous)} disabled={viewer.is_first()}>{"◀ Prev"}</button>
                            <span style="font-variant-numeric:tabular-nums;">{ format!("Scene {} of {}", viewer.current + 1, count) }</span>
                            <button onclick={dispatch(ViewerAction::Next)} disabled={viewer.is_last()}>{"Next ▶"}</button>
                        </div>
                        <div style="display:flex; gap:6px; overflow-x:auto; padding-bottom:4px;">{ for thumbs }</div>
                    </div>
                    if viewer.show_info {
                        <aside style="flex:0 1 300px; padding:14px; background:#161b22; border:1px solid #30363d; border-radius:10px; display:flex; flex-direction:column; gap:8px;">
                            <h3 style="margin:0;">{"Key Points"}</h3>
                            if let Some(style) = comic.style.as_deref() {
                                <div style="font-size:12px; opacity:0.7;">{ format!("Style: {}", style) }</div>
                            }
                            <ul style="margin:0 0 0 18px; padding:0; display:flex; flex-direction:column; gap:4px; font-size:14px;">
                                { for points.iter().map(|p| html! { <li>{ p.to_string() }</li> }) }
                            </ul>
                        </aside>
                    }
                </div>
            }
            if viewer.lightbox_open {
                <div onclick={dispatch(ViewerAction::CloseLightbox)} style="position:fixed; inset:0; z-index:70; background:rgba(0,0,0,0.9); display:flex; align-items:center; justify-content:center; cursor:zoom-out;">
                    <div onclick={Callback::from(|e: MouseEvent| e.stop_propagation())} style="max-width:92vw; max-height:92vh; cursor:default;">
                        <ComicImage image={comic.scene_image(viewer.current)} alt={alt} style="max-height:92vh;" />
                    </div>
                </div>
            }
            <QuizModal session={quiz.clone()} {regenerate} />
        </div>
    }
}
