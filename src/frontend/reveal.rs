use super::dom::{self, AnimationLoop};
use crate::scroll::{self, ElementGeometry, ScrollFrame, Timeline, TimelineState};
use std::{cell::Cell, rc::Rc};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

/// A pinned card and the document top it would have without pinning.
/// The top is kept current by whoever lays the cards out.
#[derive(Clone)]
pub struct PinnedOrigin {
    pub card: NodeRef,
    pub top: Rc<Cell<Option<f64>>>,
}

impl PartialEq for PinnedOrigin {
    fn eq(&self, other: &Self) -> bool {
        self.card == other.card && Rc::ptr_eq(&self.top, &other.top)
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    pub timeline: Timeline,
    /// Set when the reveal sits inside a pinned card.
    #[prop_or_default]
    pub pinned: Option<PinnedOrigin>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Drives `timeline` from the page scroll position.
///
/// The outer box is measured and the inner box is styled, so the animated
/// transform never feeds back into the measured geometry.
#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let outer_ref = use_node_ref();
    let inner_ref = use_node_ref();

    {
        let outer_ref = outer_ref.clone();
        let inner_ref = inner_ref.clone();
        use_effect_with(
            (props.timeline.clone(), props.pinned.clone()),
            move |(timeline, pinned)| {
                let animation = start_reveal(timeline.clone(), pinned.clone(), &outer_ref, &inner_ref);
                move || drop(animation)
            },
        );
    }

    html! {
        <div ref={outer_ref} class={classes!("scroll-reveal", props.class.clone())}>
            <div ref={inner_ref} class="scroll-reveal-inner">
                { for props.children.iter() }
            </div>
        </div>
    }
}

fn pinned_geometry(origin: &PinnedOrigin, element: &HtmlElement) -> Option<ElementGeometry> {
    let card_top = origin.top.get()?;
    let card = origin.card.cast::<Element>()?;
    let offset = dom::offset_within(element, &card)?;

    Some(scroll::pinned_child(
        card_top,
        offset,
        f64::from(element.offset_height()),
    ))
}

fn start_reveal(
    timeline: Timeline,
    pinned: Option<PinnedOrigin>,
    outer_ref: &NodeRef,
    inner_ref: &NodeRef,
) -> Option<AnimationLoop> {
    if timeline.is_empty() {
        return None;
    }
    let outer = outer_ref.cast::<Element>()?;
    let inner = inner_ref.cast::<Element>()?;

    if dom::prefers_reduced_motion() {
        let _ = inner.set_attribute("style", &timeline.settled().to_css());
        return None;
    }

    let measure = move |frame: ScrollFrame| {
        pinned
            .as_ref()
            .zip(outer.dyn_ref::<HtmlElement>())
            .and_then(|(origin, element)| pinned_geometry(origin, element))
            .unwrap_or_else(|| dom::document_geometry(&outer, frame.scroll_y))
    };

    let mut state = TimelineState::default();
    let mut sample = move |dt: f64| {
        let frame = dom::scroll_frame();
        timeline.advance(&mut state, measure(frame), frame, dt).to_css()
    };

    // first paint must already show the starting pose
    let mut applied = sample(0.0);
    let _ = inner.set_attribute("style", &applied);

    let mut last_timestamp: Option<f64> = None;
    AnimationLoop::start(move |timestamp| {
        let dt = last_timestamp.map_or(0.0, |last| (timestamp - last).max(0.0) / 1000.0);
        last_timestamp = Some(timestamp);

        let css = sample(dt);
        if css != applied {
            let _ = inner.set_attribute("style", &css);
            applied = css;
        }
    })
}
