use web_sys::HtmlInputElement;
use yew::TargetCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TopicInputProps {
    pub value: String,
    pub suggestions: Vec<String>,
    pub disabled: bool,
    pub on_input: Callback<String>,
    pub on_pick: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component]
pub fn TopicInput(props: &TopicInputProps) -> Html {
    let oninput = {
        let cb = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };
    let onkeydown = {
        let cb = props.on_submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                cb.emit(());
            }
        })
    };
    let submit_btn = {
        let cb = props.on_submit.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div style="position:relative; display:flex; gap:8px;">
            <input type="text" placeholder="Search any Wikipedia topic, e.g. Black hole"
                value={props.value.clone()} {oninput} {onkeydown} disabled={props.disabled}
                style="flex:1; padding:12px 14px; font-size:16px; border-radius:8px; border:1px solid #30363d; background:#0d1117; color:inherit;" />
            <button onclick={submit_btn} disabled={props.disabled || props.value.trim().is_empty()}
                style="padding:12px 18px; font-weight:700; border-radius:8px; background:#ffd600; color:#111; border:none; cursor:pointer;">
                { if props.disabled { "Creating..." } else { "Create Comic" } }
            </button>
            if !props.suggestions.is_empty() {
                <ul style="position:absolute; top:calc(100% + 4px); left:0; right:120px; margin:0; padding:4px; list-style:none; background:#161b22; border:1px solid #30363d; border-radius:8px; z-index:10; box-shadow:0 6px 18px rgba(0,0,0,0.6);">
                    { for props.suggestions.iter().map(|s| {
                        let pick = {
                            let cb = props.on_pick.clone();
                            let s = s.clone();
                            Callback::from(move |_| cb.emit(s.clone()))
                        };
                        html! {
                            <li key={s.clone()} onclick={pick} style="padding:8px 10px; border-radius:6px; cursor:pointer;">{ s.clone() }</li>
                        }
                    }) }
                </ul>
            }
        </div>
    }
}
