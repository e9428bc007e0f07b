use crate::model::{Complexity, Length};
use web_sys::HtmlInputElement;
use yew::TargetCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ComplexitySliderProps {
    pub complexity: u8,
    pub length: Length,
    pub on_complexity: Callback<u8>,
    pub on_length: Callback<Length>,
}

/// "Brain power" slider plus the comic length toggle.
#[function_component]
pub fn ComplexitySlider(props: &ComplexitySliderProps) -> Html {
    let oninput = {
        let cb = props.on_complexity.clone();
        let current = props.complexity;
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value().parse::<u8>().unwrap_or(current).min(100));
        })
    };
    let level = Complexity::from_slider(props.complexity);

    html! {
        <div style="display:flex; flex-wrap:wrap; gap:20px; align-items:center;">
            <label style="display:flex; align-items:center; gap:10px; flex:1; min-width:240px;">
                <span style="font-weight:600;">{"Brain Power"}</span>
                <input type="range" min="0" max="100" value={props.complexity.to_string()} {oninput} style="flex:1;" />
                <span style="padding:2px 8px; border-radius:999px; background:#30363d; font-size:12px; min-width:90px; text-align:center;">{ level.label() }</span>
            </label>
            <div style="display:flex; gap:6px; align-items:center;">
                <span style="font-weight:600;">{"Length"}</span>
                { for Length::ALL.iter().map(|&len| {
                    let onclick = {
                        let cb = props.on_length.clone();
                        Callback::from(move |_| cb.emit(len))
                    };
                    let bg = if len == props.length { "#1f6feb" } else { "#161b22" };
                    html! {
                        <button key={len.as_str()} {onclick} style={format!("padding:6px 12px; border-radius:6px; border:1px solid #30363d; background:{}; color:inherit; cursor:pointer;", bg)}>
                            { len.label() }
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}
