use super::app::AppContext;
use super::comic_result::ComicResult;
use super::complexity_slider::ComplexitySlider;
use super::quiz_modal::{QuizModal, use_quiz_rewards};
use super::style_selector::StyleSelector;
use super::topic_input::TopicInput;
use crate::api;
use crate::model::{Length, StyleId};
use crate::quiz::{Quiz, generate_quiz, key_points};
use crate::state::{
    GenerationAction, GenerationState, QuizAction, QuizSession, RequestGate, SuggestPlan, SuggestionSequencer,
    style_pick,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component]
pub fn LandingPage() -> Html {
    let ctx = use_context::<AppContext>().unwrap_or_default();
    let topic = use_state(String::new);
    let style = use_state(|| StyleId::Manga);
    let complexity = use_state(|| 50u8);
    let length = use_state(Length::default);
    let suggestions = use_state(Vec::<String>::new);
    let sequencer = use_mut_ref(SuggestionSequencer::default);
    let generation = use_reducer(GenerationState::default);
    let gate = use_mut_ref(RequestGate::default);
    let quiz = use_reducer(QuizSession::default);
    use_quiz_rewards(&quiz, &ctx.award);

    let on_input = {
        let topic = topic.clone();
        let suggestions = suggestions.clone();
        let sequencer = sequencer.clone();
        let config = ctx.config.clone();
        Callback::from(move |value: String| {
            topic.set(value.clone());
            let plan = sequencer.borrow_mut().plan(&value);
            match plan {
                SuggestPlan::Clear => suggestions.set(Vec::new()),
                SuggestPlan::Fetch { seq, query } => {
                    let suggestions = suggestions.clone();
                    let sequencer = sequencer.clone();
                    let config = config.clone();
                    spawn_local(async move {
                        let result = api::suggest(&config, &query).await;
                        if let Some(list) = sequencer.borrow().accept(seq, result) {
                            suggestions.set(list);
                        }
                    });
                }
            }
        })
    };

    let on_pick = {
        let topic = topic.clone();
        let suggestions = suggestions.clone();
        let sequencer = sequencer.clone();
        Callback::from(move |picked: String| {
            sequencer.borrow_mut().cancel();
            suggestions.set(Vec::new());
            topic.set(picked);
        })
    };

    let on_submit = {
        let topic = topic.clone();
        let style = style.clone();
        let length = length.clone();
        let suggestions = suggestions.clone();
        let sequencer = sequencer.clone();
        let generation = generation.clone();
        let gate = gate.clone();
        let quiz = quiz.clone();
        let config = ctx.config.clone();
        Callback::from(move |_| {
            let query = topic.trim().to_string();
            if !generation.can_submit(&query) || !gate.borrow_mut().try_begin() {
                return;
            }
            sequencer.borrow_mut().cancel();
            suggestions.set(Vec::new());
            quiz.dispatch(QuizAction::Close);
            generation.dispatch(GenerationAction::Started);

            let (style, length) = (*style, *length);
            let generation = generation.clone();
            let gate = gate.clone();
            let config = config.clone();
            spawn_local(async move {
                match api::generate_comic(&config, &query, style, length).await {
                    Ok((summary, comic)) => {
                        log::info!("generated {:?}: {} scenes", comic.title, comic.scenes.len());
                        generation.dispatch(GenerationAction::Succeeded {
                            topic: query,
                            summary,
                            comic: Box::new(comic),
                        });
                    }
                    Err(e) => {
                        log::warn!("comic generation for {query:?} failed: {e}");
                        generation.dispatch(GenerationAction::Failed(e));
                    }
                }
                gate.borrow_mut().finish();
            });
        })
    };

    let on_style = {
        let style = style.clone();
        let award = ctx.award.clone();
        let level = ctx.session.level();
        Callback::from(move |id: StyleId| {
            if let Some(action) = style_pick(*style, id, level).award() {
                style.set(id);
                award.emit(action);
            }
        })
    };
    let on_complexity = {
        let complexity = complexity.clone();
        Callback::from(move |v: u8| complexity.set(v))
    };
    let on_length = {
        let length = length.clone();
        Callback::from(move |l: Length| length.set(l))
    };
    let dismiss_error = {
        let generation = generation.clone();
        Callback::from(move |_| generation.dispatch(GenerationAction::DismissError))
    };

    let regenerate = {
        let generation = generation.clone();
        Callback::from(move |_: ()| match &generation.comic {
            Some(comic) => generate_quiz(comic, &mut rand::thread_rng()),
            None => Quiz::default(),
        })
    };
    let start_quiz = {
        let quiz = quiz.clone();
        let regenerate = regenerate.clone();
        Callback::from(move |_| quiz.dispatch(QuizAction::Start(regenerate.emit(()))))
    };

    let recent: Html = generation.recent_topics.iter().map(|t| {
        let pick = on_pick.clone();
        let t = t.clone();
        let onclick = {
            let t = t.clone();
            Callback::from(move |_| pick.emit(t.clone()))
        };
        html! {
            <button key={t.clone()} {onclick} style="padding:4px 10px; border-radius:999px; border:1px solid #30363d; background:#161b22; color:inherit; cursor:pointer; font-size:12px;">{ t }</button>
        }
    }).collect();

    let section = "display:flex; flex-direction:column; gap:10px;";

    html! {
        <div style="display:flex; flex-direction:column; gap:22px;">
            <div style="text-align:center; padding:12px 0;">
                <h1 style="margin:0; font-size:36px; color:#ffd600;">{"Turn Wikipedia into Comics"}</h1>
                <p style="margin:6px 0 0 0; opacity:0.8;">{"Pick a topic, choose a style and learn with a comic and a quiz."}</p>
            </div>
            <div style={section}>
                <TopicInput value={(*topic).clone()} suggestions={(*suggestions).clone()} disabled={generation.loading}
                    {on_input} {on_pick} {on_submit} />
                if !generation.recent_topics.is_empty() {
                    <div style="display:flex; gap:6px; flex-wrap:wrap; align-items:center;">
                        <span style="font-size:12px; opacity:0.7;">{"Recent:"}</span>
                        { recent }
                    </div>
                }
            </div>
            <div style={section}>
                <h3 style="margin:0;">{"Comic Style"}</h3>
                <StyleSelector selected={*style} level={ctx.session.level()} on_select={on_style} />
            </div>
            <ComplexitySlider complexity={*complexity} length={*length} {on_complexity} {on_length} />
            if generation.loading {
                <div style="padding:24px; text-align:center; font-weight:600;">{ format!("Drawing your {} comic...", style.option().name) }</div>
            }
            if let Some(err) = &generation.error {
                <div style="display:flex; justify-content:space-between; align-items:center; gap:12px; padding:12px 14px; border:1px solid #f85149; border-radius:8px; background:rgba(248,81,73,0.1); color:#f85149;">
                    <span>{ err.user_message() }</span>
                    <button onclick={dismiss_error}>{"Dismiss"}</button>
                </div>
            }
            if let (Some(summary), Some(comic)) = (&generation.summary, &generation.comic) {
                <ComicResult summary={summary.clone()} comic={comic.clone()}
                    quiz_available={!key_points(comic).is_empty()} on_quiz={start_quiz} />
            }
            <QuizModal session={quiz.clone()} {regenerate} />
        </div>
    }
}
