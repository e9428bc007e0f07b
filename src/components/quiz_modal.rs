use super::quiz_results::QuizResults;
use crate::quiz::{Quiz, QuizScore};
use crate::state::{QuizAction, QuizPhase, QuizSession, SessionAction};
use yew::prelude::*;

/// Awards points once per completed quiz and remembers the last awarded
/// score (for the achievement banner).
#[hook]
pub fn use_quiz_rewards(
    quiz: &UseReducerHandle<QuizSession>,
    award: &Callback<SessionAction>,
) -> UseStateHandle<Option<QuizScore>> {
    let achievement = use_state(|| None::<QuizScore>);
    // completions already paid out
    let awarded = use_mut_ref(|| 0u32);
    {
        let quiz = quiz.clone();
        let award = award.clone();
        let achievement = achievement.clone();
        use_effect_with(quiz.completions, move |completions| {
            if let Some(action) = quiz.reward_since(*awarded.borrow()) {
                *awarded.borrow_mut() = *completions;
                if let SessionAction::QuizCompleted { score } = &action {
                    log::info!("quiz completed: {}/{} correct", score.correct, score.total);
                    achievement.set(Some(*score));
                }
                award.emit(action);
            }
            || ()
        });
    }
    achievement
}

#[derive(Properties, PartialEq, Clone)]
pub struct QuizModalProps {
    pub session: UseReducerHandle<QuizSession>,
    /// Builds a fresh quiz (new option order) for a retake.
    pub regenerate: Callback<(), Quiz>,
}

#[function_component]
pub fn QuizModal(props: &QuizModalProps) -> Html {
    let session = props.session.clone();
    if session.phase == QuizPhase::Idle {
        return html! {};
    }

    let close_cb = {
        let session = session.clone();
        Callback::from(move |_| session.dispatch(QuizAction::Close))
    };

    let body = match session.phase {
        QuizPhase::Completed(score) => {
            let retake = {
                let session = session.clone();
                let regenerate = props.regenerate.clone();
                Callback::from(move |_| {
                    session.dispatch(QuizAction::Close);
                    session.dispatch(QuizAction::Start(regenerate.emit(())));
                })
            };
            let close = {
                let session = session.clone();
                Callback::from(move |_| session.dispatch(QuizAction::Close))
            };
            html! { <QuizResults {score} {close} {retake} /> }
        }
        _ => render_question(&session),
    };

    html! {<div style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.6); z-index:60;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:18px 22px; width:90%; max-width:560px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{ session.quiz.title.clone() }</h3>
                <button onclick={close_cb} style="padding:4px 8px;">{"✕"}</button>
            </div>
            { body }
        </div>
    </div>}
}

fn render_question(session: &UseReducerHandle<QuizSession>) -> Html {
    let Some(question) = session.quiz.questions.get(session.current) else {
        return html! {
            <div style="opacity:0.8;">{"This comic has no dialogue to quiz you on yet."}</div>
        };
    };
    let total = session.quiz.questions.len();
    let selected = session.answers.get(session.current).copied().flatten();

    let dots = (0..total).map(|i| {
        let goto = {
            let session = session.clone();
            Callback::from(move |_| session.dispatch(QuizAction::Goto(i)))
        };
        let answered = session.answers.get(i).copied().flatten().is_some();
        let border = if i == session.current { "#58a6ff" } else { "#30363d" };
        let bg = if answered { "#1f6feb" } else { "transparent" };
        html! {
            <button key={i} onclick={goto} style={format!("width:28px; height:28px; border-radius:50%; border:2px solid {}; background:{}; color:inherit; cursor:pointer;", border, bg)}>
                { i + 1 }
            </button>
        }
    });

    let options = question.options.iter().map(|opt| {
        let pick = {
            let session = session.clone();
            let question = session.current;
            let option = opt.id;
            Callback::from(move |_| session.dispatch(QuizAction::Answer { question, option }))
        };
        let is_selected = selected == Some(opt.id);
        let bg = if is_selected { "#1f6feb" } else { "#0d1117" };
        html! {
            <button key={opt.id.to_string()} onclick={pick} style={format!("display:flex; gap:10px; align-items:center; padding:10px 12px; border:1px solid #30363d; border-radius:8px; background:{}; color:inherit; cursor:pointer; text-align:left;", bg)}>
                <span style="font-weight:700; text-transform:uppercase;">{ opt.id.to_string() }</span>
                <span>{ opt.text.clone() }</span>
            </button>
        }
    });

    let submit = {
        let session = session.clone();
        Callback::from(move |_| session.dispatch(QuizAction::Submit))
    };

    html! {
        <>
            <div style="display:flex; gap:6px; flex-wrap:wrap;">{ for dots }</div>
            <div style="font-size:12px; opacity:0.7;">{ format!("Question {} of {} · {} answered", session.current + 1, total, session.answered()) }</div>
            <p style="margin:0; font-size:16px; line-height:1.4;">{ question.text.clone() }</p>
            <div style="display:flex; flex-direction:column; gap:8px;">{ for options }</div>
            <div style="display:flex; justify-content:flex-end;">
                <button onclick={submit} disabled={session.answered() == 0}>{"Submit"}</button>
            </div>
        </>
    }
}
