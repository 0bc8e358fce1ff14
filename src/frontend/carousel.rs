use super::{dom, link::ProjectLinks, media::Media};
use crate::{
    carousel::{Carousel, CarouselSettings},
    content::ProjectItem,
};
use gloo_timers::callback::Interval;
use std::rc::Rc;
use yew::prelude::*;

pub enum CarouselAction {
    Next,
    Prev,
    GoTo(usize),
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let current = *self;
        Rc::new(match action {
            CarouselAction::Next => current.next(),
            CarouselAction::Prev => current.prev(),
            CarouselAction::GoTo(index) => current.go_to(index),
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectCarouselProps {
    pub slides: Vec<ProjectItem>,
    pub settings: CarouselSettings,
}

#[function_component(ProjectCarousel)]
pub fn project_carousel(props: &ProjectCarouselProps) -> Html {
    let carousel = {
        let len = props.slides.len();
        let looped = props.settings.looped;
        use_reducer_eq(move || Carousel::new(len, looped))
    };
    let hovered = use_state_eq(|| false);

    {
        let dispatcher = carousel.dispatcher();
        use_effect_with(
            (props.settings.autoplay_ms, *hovered, props.slides.len()),
            move |&(autoplay_ms, hovered, len)| {
                let interval = autoplay_ms
                    .filter(|_| !hovered && len > 1 && !dom::prefers_reduced_motion())
                    .map(|period| {
                        Interval::new(period, move || dispatcher.dispatch(CarouselAction::Next))
                    });
                move || drop(interval)
            },
        );
    }

    if carousel.is_empty() {
        return html! {};
    }

    let dispatch = |action: fn() -> CarouselAction| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(action()))
    };
    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let track_style = format!(
        "transform: translate3d({:.0}%, 0, 0);",
        carousel.offset_percent()
    );

    html! {
        <div
            class="carousel"
            role="region"
            aria-roledescription="carousel"
            aria-label="Project highlights"
            {onmouseenter}
            {onmouseleave}
        >
            <div class="carousel-viewport">
                <div class="carousel-track" style={track_style}>
                    { for props.slides.iter().enumerate().map(|(index, project)| html! {
                        <article
                            key={project.id.to_string()}
                            class="carousel-slide"
                            aria-hidden={(index != carousel.index()).to_string()}
                        >
                            <Media
                                class="carousel-media"
                                src={project.asset.clone()}
                                alt={project.title.clone()}
                            />
                            <div class="carousel-caption">
                                <span class="eyebrow">{project.subtitle.clone()}</span>
                                <h3>{project.title.clone()}</h3>
                                <ul class="tag-list">
                                    { for project.tags.iter().map(|tag| html! { <li>{tag.clone()}</li> }) }
                                </ul>
                                <ProjectLinks project={project.clone()} />
                            </div>
                        </article>
                    }) }
                </div>
            </div>

            <div class="carousel-controls">
                <button
                    type="button"
                    class="carousel-arrow"
                    aria-label="Previous slide"
                    disabled={!carousel.can_go_prev()}
                    onclick={dispatch(|| CarouselAction::Prev)}
                >
                    {"←"}
                </button>
                <div class="carousel-pagination" role="tablist">
                    { for carousel.bullets().into_iter().enumerate().map(|(index, current)| {
                        let onclick = {
                            let carousel = carousel.clone();
                            Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::GoTo(index)))
                        };
                        html! {
                            <button
                                key={index.to_string()}
                                type="button"
                                role="tab"
                                class={classes!("carousel-bullet", current.then_some("is-active"))}
                                aria-label={format!("Go to slide {}", index + 1)}
                                aria-selected={current.to_string()}
                                {onclick}
                            />
                        }
                    }) }
                </div>
                <button
                    type="button"
                    class="carousel-arrow"
                    aria-label="Next slide"
                    disabled={!carousel.can_go_next()}
                    onclick={dispatch(|| CarouselAction::Next)}
                >
                    {"→"}
                </button>
            </div>
        </div>
    }
}
