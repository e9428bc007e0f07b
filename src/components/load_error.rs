use crate::error::AppError;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LoadErrorProps {
    pub error: AppError,
    pub retry: Callback<()>,
    pub back_to: Route,
    pub back_label: AttrValue,
}

#[function_component]
pub fn LoadError(props: &LoadErrorProps) -> Html {
    let retry_btn = {
        let cb = props.retry.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="margin:48px auto; background:rgba(0,0,0,0.85); border:2px solid #f85149; padding:24px 32px; border-radius:12px; text-align:center; max-width:420px;">
            <h2 style="margin:0 0 12px 0; color:#f85149;">{"Oops!"}</h2>
            <p style="margin:4px 0;">{ props.error.user_message() }</p>
            <div style="margin-top:16px; display:flex; gap:12px; justify-content:center; align-items:center;">
                <button onclick={retry_btn}>{"Try Again"}</button>
                <Link<Route> to={props.back_to.clone()}>
                    <span style="color:#58a6ff;">{ props.back_label.clone() }</span>
                </Link<Route>>
            </div>
        </div>
    }
}
