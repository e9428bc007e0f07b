use crate::quiz::QuizScore;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct QuizResultsProps {
    pub score: QuizScore,
    pub close: Callback<()>,
    pub retake: Callback<()>,
}

#[function_component]
pub fn QuizResults(props: &QuizResultsProps) -> Html {
    let close_btn = {
        let cb = props.close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let retake_btn = {
        let cb = props.retake.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let percent = props.score.percent();
    let (headline, color) = match percent {
        80.. => ("Comic Genius!", "#3fb950"),
        50..=79 => ("Nice Work!", "#d4af37"),
        _ => ("Keep Reading!", "#f85149"),
    };
    html! {
        <div style="text-align:center; display:flex; flex-direction:column; gap:8px;">
            <h2 style={format!("margin:0 0 4px 0; color:{};", color)}>{ headline }</h2>
            <p style="margin:4px 0; font-size:28px; font-weight:800; font-variant-numeric:tabular-nums;">
                { format!("{} / {}", props.score.correct, props.score.total) }
            </p>
            <p style="margin:4px 0;">{ format!("Score: {}%", percent) }</p>
            <p style="margin:4px 0; color:#d4af37;">{ format!("+{} points", props.score.correct * 10) }</p>
            <div style="margin-top:12px; display:flex; gap:12px; justify-content:center;">
                <button onclick={retake_btn}>{"Retake Quiz"}</button>
                <button onclick={close_btn}>{"Close"}</button>
            </div>
        </div>
    }
}
