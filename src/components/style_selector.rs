use crate::model::{STYLE_OPTIONS, StyleId};
use crate::state::{StylePick, style_pick};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StyleSelectorProps {
    pub selected: StyleId,
    pub level: u32,
    pub on_select: Callback<StyleId>,
}

#[function_component]
pub fn StyleSelector(props: &StyleSelectorProps) -> Html {
    // locked card currently playing the shake animation
    let shaking = use_state(|| None::<StyleId>);

    let cards = STYLE_OPTIONS.iter().map(|opt| {
        let locked = opt.locked_at(props.level);
        let onclick = {
            let cb = props.on_select.clone();
            let shaking = shaking.clone();
            let (current, level) = (props.selected, props.level);
            let id = opt.id;
            Callback::from(move |_| match style_pick(current, id, level) {
                StylePick::Locked => {
                    log::debug!("style {} locked until level {}", id.as_str(), id.option().level);
                    shaking.set(Some(id));
                }
                StylePick::Unchanged => {}
                StylePick::Changed => cb.emit(id),
            })
        };
        let onanimationend = {
            let shaking = shaking.clone();
            Callback::from(move |_| shaking.set(None))
        };
        let selected = props.selected == opt.id;
        let border = if selected { "#ffd600" } else { "transparent" };
        let animation = if *shaking == Some(opt.id) { "animation:shake 0.4s;" } else { "" };
        let dim = if locked { "opacity:0.45; filter:grayscale(0.6);" } else { "" };
        html! {
            <button key={opt.id.as_str()} {onclick} {onanimationend}
                style={format!("display:flex; flex-direction:column; align-items:flex-start; gap:4px; padding:12px; border-radius:10px; border:3px solid {}; background:{}; color:#fff; cursor:pointer; text-align:left; {} {}", border, opt.color, dim, animation)}>
                <span style={format!("font-weight:800; font-size:13px; padding:2px 6px; border-radius:4px; background:{};", opt.banner_color)}>{ opt.name }</span>
                <span style="font-size:12px; opacity:0.9;">{ opt.description }</span>
                if locked {
                    <span style="font-size:11px;">{ format!("🔒 Unlocks at level {}", opt.level) }</span>
                }
            </button>
        }
    });

    html! {
        <div style="display:grid; grid-template-columns:repeat(auto-fill, minmax(160px, 1fr)); gap:10px;">
            { for cards }
        </div>
    }
}
