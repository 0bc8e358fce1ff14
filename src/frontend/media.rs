use crate::content::MediaKind;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MediaProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// An image or Lottie animation picked by file extension.
///
/// Images that fail to load are swapped for a neutral placeholder block.
#[function_component(Media)]
pub fn media(props: &MediaProps) -> Html {
    let failed = use_state_eq(|| false);

    {
        let failed = failed.clone();
        use_effect_with(props.src.clone(), move |_| {
            failed.set(false);
            || ()
        });
    }

    if *failed {
        return html! {
            <div
                class={classes!("media-placeholder", props.class.clone())}
                role="img"
                aria-label={props.alt.clone()}
            />
        };
    }

    match MediaKind::from_path(&props.src) {
        MediaKind::Image => {
            let onerror = {
                let failed = failed.clone();
                let src = props.src.clone();
                Callback::from(move |_: Event| {
                    log::warn!("could not load image {src}, showing placeholder");
                    failed.set(true);
                })
            };

            html! {
                <img
                    class={props.class.clone()}
                    src={props.src.clone()}
                    alt={props.alt.clone()}
                    loading="lazy"
                    decoding="async"
                    {onerror}
                />
            }
        }
        MediaKind::Animation => html! {
            <lottie-player
                class={props.class.clone()}
                src={props.src.clone()}
                aria-label={props.alt.clone()}
                background="transparent"
                speed="1"
                loop="true"
                autoplay="true"
            ></lottie-player>
        },
    }
}
