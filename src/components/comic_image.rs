use super::app::AppContext;
use crate::error::AppError;
use crate::image_url::resolve_image_url;
use crate::model::ImageRef;
use web_sys::HtmlImageElement;
use yew::TargetCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ComicImageProps {
    pub image: Option<ImageRef>,
    pub alt: AttrValue,
    #[prop_or_default]
    pub style: AttrValue,
    #[prop_or_default]
    pub onclick: Option<Callback<()>>,
}

/// Resolves the backend image reference and swaps in the placeholder if the
/// browser fails to load it.
#[function_component]
pub fn ComicImage(props: &ComicImageProps) -> Html {
    let ctx = use_context::<AppContext>().unwrap_or_default();
    let src = resolve_image_url(props.image.as_ref(), &ctx.config);

    let onerror = {
        let placeholder = ctx.config.placeholder.clone();
        Callback::from(move |e: Event| {
            let Some(img) = e.target_dyn_into::<HtmlImageElement>() else {
                return;
            };
            // placeholder itself missing: stop here rather than loop
            if img.src().ends_with(&placeholder) {
                return;
            }
            log::warn!("{}", AppError::ImageLoadFailure(img.src()));
            img.set_src(&placeholder);
        })
    };
    let onclick = props.onclick.clone().map(|cb| Callback::from(move |_: MouseEvent| cb.emit(())));
    let cursor = if onclick.is_some() { "cursor:zoom-in;" } else { "" };

    html! {
        <img {src} alt={props.alt.clone()} loading="lazy" {onerror} {onclick}
            style={format!("display:block; width:100%; object-fit:contain; background:#0d1117; {} {}", cursor, props.style)} />
    }
}
