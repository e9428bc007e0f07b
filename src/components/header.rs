use super::app::AppContext;
use super::progress_modal::{ProgressKind, ProgressModal};
use crate::model::LANGUAGES;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component]
pub fn Header() -> Html {
    let ctx = use_context::<AppContext>().unwrap_or_default();
    let modal = use_state(|| None::<ProgressKind>);
    let menu_open = use_state(|| false);

    let progress = ctx.session.progress();
    let current_lang = LANGUAGES
        .iter()
        .find(|l| l.code == ctx.language)
        .unwrap_or(&LANGUAGES[0]);

    let open_points = {
        let modal = modal.clone();
        Callback::from(move |_| modal.set(Some(ProgressKind::Points)))
    };
    let open_level = {
        let modal = modal.clone();
        Callback::from(move |_| modal.set(Some(ProgressKind::Level)))
    };
    let close_modal = {
        let modal = modal.clone();
        Callback::from(move |_| modal.set(None))
    };
    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    let chip = "display:flex; align-items:center; gap:6px; padding:6px 12px; border-radius:999px; border:1px solid #30363d; background:#161b22; color:inherit; cursor:pointer; font-weight:600; font-variant-numeric:tabular-nums;";
    let link = "color:#e6edf3; text-decoration:none; font-weight:600;";

    html! {
        <header style="position:sticky; top:0; z-index:20; display:flex; align-items:center; justify-content:space-between; gap:12px; padding:10px 20px; background:rgba(22,27,34,0.95); border-bottom:1px solid #30363d;">
            <div style="display:flex; align-items:center; gap:18px;">
                <Link<Route> to={Route::Home}>
                    <span style="font-size:22px; font-weight:800; color:#ffd600; letter-spacing:1px;">{"WikiComic"}</span>
                </Link<Route>>
                <Link<Route> to={Route::Home}><span style={link}>{"Create"}</span></Link<Route>>
                <Link<Route> to={Route::Gallery}><span style={link}>{"Gallery"}</span></Link<Route>>
            </div>
            <div style="display:flex; align-items:center; gap:10px;">
                <button onclick={open_points} style={format!("{} color:#d4af37;", chip)} title="Points">
                    <span>{"★"}</span><span>{ ctx.session.points }</span>
                </button>
                <button onclick={open_level} style={format!("{} color:#58a6ff;", chip)} title="Level">
                    <span>{ format!("Lv {}", progress.level) }</span>
                    <span style="width:60px; height:6px; background:#30363d; border-radius:3px; overflow:hidden;">
                        <span style={format!("display:block; height:100%; width:{}%; background:#58a6ff;", progress.percent)}></span>
                    </span>
                </button>
                <div style="position:relative;">
                    <button onclick={toggle_menu} style={chip}>
                        <span>{ current_lang.flag }</span><span>{ current_lang.code.to_uppercase() }</span>
                    </button>
                    if *menu_open {
                        <div style="position:absolute; right:0; top:calc(100% + 6px); background:#161b22; border:1px solid #30363d; border-radius:8px; padding:6px; display:flex; flex-direction:column; min-width:160px; box-shadow:0 6px 18px rgba(0,0,0,0.6);">
                            { for LANGUAGES.iter().map(|lang| {
                                let pick = {
                                    let set_language = ctx.set_language.clone();
                                    let menu_open = menu_open.clone();
                                    let code = lang.code;
                                    Callback::from(move |_| {
                                        menu_open.set(false);
                                        set_language.emit(code);
                                    })
                                };
                                let active = lang.code == ctx.language;
                                let bg = if active { "#1f6feb" } else { "transparent" };
                                html! {
                                    <button key={lang.code} onclick={pick} style={format!("display:flex; gap:8px; align-items:center; padding:6px 10px; border:none; border-radius:6px; background:{}; color:inherit; cursor:pointer; text-align:left;", bg)}>
                                        <span>{ lang.flag }</span><span>{ lang.name }</span>
                                    </button>
                                }
                            }) }
                        </div>
                    }
                </div>
            </div>
            if let Some(kind) = *modal {
                <ProgressModal {kind} session={ctx.session.clone()} on_close={close_modal} />
            }
        </header>
    }
}
