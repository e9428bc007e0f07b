use crate::config::LEVEL_THRESHOLD;
use crate::model::STYLE_OPTIONS;
use crate::state::SessionState;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressKind {
    Points,
    Level,
}

#[derive(Properties, PartialEq, Clone)]
pub struct ProgressModalProps {
    pub kind: ProgressKind,
    pub session: SessionState,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn ProgressModal(props: &ProgressModalProps) -> Html {
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let progress = props.session.progress();

    let body = match props.kind {
        ProgressKind::Points => html! {
            <>
                <h3 style="margin:0; font-size:18px; color:#d4af37;">{ format!("★ {} points", props.session.points) }</h3>
                <ul style="margin:0 0 0 18px; padding:0; display:flex; flex-direction:column; gap:4px; font-size:14px;">
                    <li>{"Pick a comic style: +5"}</li>
                    <li>{"Change language: +5"}</li>
                    <li>{"Finish a quiz: +10 per correct answer"}</li>
                </ul>
                <div style="display:flex; flex-direction:column; gap:4px; max-height:200px; overflow-y:auto; font-size:13px;">
                    if props.session.awards.is_empty() {
                        <div style="opacity:0.7;">{"No points earned yet this session."}</div>
                    }
                    { for props.session.awards.iter().rev().map(|a| html! {
                        <div style="display:flex; justify-content:space-between; gap:12px;">
                            <span>{ a.reason }</span>
                            <span style="font-variant-numeric:tabular-nums; color:#3fb950;">{ format!("+{} ({})", a.amount, a.total) }</span>
                        </div>
                    }) }
                </div>
            </>
        },
        ProgressKind::Level => html! {
            <>
                <h3 style="margin:0; font-size:18px; color:#58a6ff;">{ format!("Level {}", progress.level) }</h3>
                <div style="height:10px; background:#30363d; border-radius:5px; overflow:hidden;">
                    <div style={format!("height:100%; width:{}%; background:#58a6ff;", progress.percent)}></div>
                </div>
                <div style="font-size:13px; opacity:0.85;">
                    { format!("{} / {} XP, {} to level {}", progress.xp_in_level, LEVEL_THRESHOLD, progress.xp_to_next, progress.level + 1) }
                </div>
                <div style="display:flex; flex-direction:column; gap:6px; font-size:13px;">
                    { for STYLE_OPTIONS.iter().map(|s| {
                        let locked = s.locked_at(progress.level);
                        html! {
                            <div style="display:flex; justify-content:space-between; gap:12px;">
                                <span style={format!("color:{};", s.color)}>{ s.name }</span>
                                <span>{ if locked { format!("🔒 Level {}", s.level) } else { "Unlocked".to_string() } }</span>
                            </div>
                        }
                    }) }
                </div>
            </>
        },
    };

    html! {<div style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:320px; max-width:440px; display:flex; flex-direction:column; gap:14px;">
            { body }
            <div style="display:flex; justify-content:flex-end;">
                <button onclick={close_cb}>{"Close"}</button>
            </div>
        </div>
    </div>}
}
