use super::dom::{self, AnimationLoop, WindowListener};
use crate::marquee::{self, Dimensions, MarqueeConfig, MarqueeState};
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SkillsMarqueeProps {
    pub tags: Vec<String>,
    pub config: MarqueeConfig,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: AttrValue,
}

fn measure_strip(container_ref: &NodeRef, sequence_ref: &NodeRef) -> Option<Dimensions> {
    let container = container_ref.cast::<Element>()?;
    let sequence = sequence_ref.cast::<Element>()?;

    marquee::measure(
        container.get_bounding_client_rect().width(),
        sequence.get_bounding_client_rect().width(),
    )
}

/// Endless horizontal strip of skill tags that slows to a stop on hover.
#[function_component(SkillsMarquee)]
pub fn skills_marquee(props: &SkillsMarqueeProps) -> Html {
    let container_ref = use_node_ref();
    let sequence_ref = use_node_ref();
    let track_ref = use_node_ref();
    let dimensions = use_state_eq(|| None::<Dimensions>);
    let hovered = use_state_eq(|| false);
    let state = use_mut_ref(MarqueeState::default);

    {
        let container_ref = container_ref.clone();
        let sequence_ref = sequence_ref.clone();
        let dimensions = dimensions.clone();
        use_effect_with((props.tags.clone(), props.config.gap), move |_| {
            let remeasure = move || dimensions.set(measure_strip(&container_ref, &sequence_ref));
            remeasure();
            let listener = WindowListener::new("resize", move |_| remeasure());
            move || drop(listener)
        });
    }

    {
        let track_ref = track_ref.clone();
        let state = state.clone();
        let target = props.config.effective_target(*hovered);
        use_effect_with((target, *dimensions), move |&(target, dimensions)| {
            let animation = dimensions.and_then(|dimensions| {
                let track = track_ref.cast::<HtmlElement>()?;

                if state.borrow_mut().sync_width(dimensions.sequence_width, target) {
                    log::debug!(
                        "marquee sequence is {}px wide, {} copies",
                        dimensions.sequence_width,
                        dimensions.copy_count
                    );
                    let _ = track.style().set_property("transform", &marquee::translate(0.0));
                }

                if dom::prefers_reduced_motion() {
                    return None;
                }

                let state = state.clone();
                AnimationLoop::start(move |timestamp| {
                    if let Some(offset) = state.borrow_mut().tick(timestamp, target) {
                        let _ = track.style().set_property("transform", &marquee::translate(offset));
                    }
                })
            });

            move || {
                drop(animation);
                state.borrow_mut().suspend();
            }
        });
    }

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    if props.tags.is_empty() {
        return html! {};
    }

    let copies = dimensions.map_or(marquee::MIN_COPIES, |dimensions| dimensions.copy_count);
    let sequence_style = format!("gap: {gap}px; padding-right: {gap}px;", gap = props.config.gap);

    html! {
        <div
            ref={container_ref}
            class={classes!("marquee", props.class.clone())}
            style={props.style.clone()}
            role="marquee"
            aria-label="Skills"
            {onmouseenter}
            {onmouseleave}
        >
            <div ref={track_ref} class="marquee-track">
                { for (0..copies).map(|copy| html! {
                    <ul
                        key={copy.to_string()}
                        ref={if copy == 0 { sequence_ref.clone() } else { NodeRef::default() }}
                        class="marquee-sequence"
                        style={sequence_style.clone()}
                        aria-hidden={(copy > 0).to_string()}
                    >
                        { for props.tags.iter().map(|tag| html! {
                            <li class="skill-tag">{tag.clone()}</li>
                        }) }
                    </ul>
                }) }
            </div>
        </div>
    }
}
