use super::{
    dom::{self, AnimationLoop},
    link::ProjectLinks,
    media::Media,
    reveal::{PinnedOrigin, ScrollReveal},
};
use crate::{
    content::{ProjectItem, ProjectsContent},
    scroll::{self, AnimationSettings, Marker, Props, ScrubState, Tween},
};
use std::{cell::Cell, rc::Rc};
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

/// Margin above each stacked card, matching `.stack-card` in the stylesheet.
const CARD_GAP: f64 = 40.0;

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub projects: ProjectsContent,
    pub animations: AnimationSettings,
}

/// Project cards that pin to the top of the viewport and shrink as the
/// next card slides over them.
#[function_component(Projects)]
pub fn projects(props: &ProjectsProps) -> Html {
    let stack_ref = use_node_ref();
    let count = props.projects.items.len();
    let origins = use_memo(count, |&count| {
        (0..count)
            .map(|_| PinnedOrigin {
                card: NodeRef::default(),
                top: Rc::new(Cell::new(None)),
            })
            .collect::<Vec<_>>()
    });

    {
        let stack_ref = stack_ref.clone();
        let origins = origins.clone();
        use_effect_with(count, move |&count| {
            let animation = start_stack(count, stack_ref, origins);
            move || drop(animation)
        });
    }

    let animations = &props.animations;
    let projects = &props.projects;

    html! {
        <section id="projects" class="section projects" aria-labelledby="projects-heading">
            <header class="projects-header">
                <ScrollReveal timeline={scroll::fade_up(30.0, animations.heading_start, animations.heading_end)}>
                    <h2 id="projects-heading" class="section-title">
                        {projects.heading.clone()}
                        {" "}
                        <span class="muted">{projects.highlight.clone()}</span>
                    </h2>
                </ScrollReveal>
                <ScrollReveal timeline={scroll::fade_up(40.0, animations.text_start, animations.text_end)}>
                    <p class="section-blurb">{projects.blurb.clone()}</p>
                </ScrollReveal>
            </header>

            <div ref={stack_ref} class="stack">
                { for projects.items.iter().zip(origins.iter()).map(|(project, origin)| html! {
                    <ProjectCard
                        key={project.id.to_string()}
                        project={project.clone()}
                        origin={origin.clone()}
                        text_start={animations.text_start}
                        text_end={animations.text_end}
                    />
                }) }
            </div>
            <div class="stack-spacer" aria-hidden="true" />
        </section>
    }
}

fn start_stack(count: usize, stack_ref: NodeRef, origins: Rc<Vec<PinnedOrigin>>) -> Option<AnimationLoop> {
    if count == 0 || dom::prefers_reduced_motion() {
        return None;
    }

    let tweens: Vec<Tween> = (0..count).map(|index| scroll::card_scale(index, count)).collect();
    let mut scrubs = vec![ScrubState::default(); count];
    let mut applied = vec![String::new(); count];
    let mut last_timestamp: Option<f64> = None;

    AnimationLoop::start(move |timestamp| {
        let dt = last_timestamp.map_or(0.0, |last| (timestamp - last).max(0.0) / 1000.0);
        last_timestamp = Some(timestamp);

        let Some(stack) = stack_ref.cast::<Element>() else {
            return;
        };
        let cards: Vec<HtmlElement> = origins
            .iter()
            .filter_map(|origin| origin.card.cast::<HtmlElement>())
            .collect();
        if cards.len() != tweens.len() {
            return;
        }

        let frame = dom::scroll_frame();
        let heights: Vec<f64> = cards
            .iter()
            .map(|card| f64::from(card.offset_height()))
            .collect();
        // sticky cards report their stuck position, so lay them out from the container
        let container_top = dom::document_geometry(&stack, frame.scroll_y).top;
        let offsets = scroll::stack_offsets(container_top, &heights, CARD_GAP);
        let ranges = scroll::pinned_ranges(&offsets, &heights, frame.viewport_height);
        for (origin, &top) in origins.iter().zip(&offsets) {
            origin.top.set(Some(top));
        }

        let slots = cards
            .iter()
            .zip(&tweens)
            .zip(ranges)
            .zip(scrubs.iter_mut())
            .zip(applied.iter_mut());
        for ((((card, tween), range), scrub), applied) in slots {
            let progress = scrub.advance(range.progress(frame.scroll_y), dt, tween.trigger.scrub);
            let mut props = Props::new();
            tween.apply(progress, &mut props);

            let css = props.to_css();
            if css != *applied {
                let _ = card.set_attribute("style", &css);
                *applied = css;
            }
        }
    })
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: ProjectItem,
    origin: PinnedOrigin,
    text_start: Marker,
    text_end: Marker,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;

    html! {
        <article ref={props.origin.card.clone()} class="stack-card">
            <div class="stack-card-copy">
                <span class="eyebrow">{project.subtitle.clone()}</span>
                <ScrollReveal
                    timeline={scroll::fade_up(20.0, props.text_start, props.text_end)}
                    pinned={props.origin.clone()}
                >
                    <h3 class="stack-card-title">{project.title.clone()}</h3>
                </ScrollReveal>
                <ScrollReveal
                    timeline={scroll::fade_up(30.0, props.text_start, props.text_end)}
                    pinned={props.origin.clone()}
                >
                    <p class="stack-card-description">{project.description.clone()}</p>
                </ScrollReveal>
                <ul class="tag-list">
                    { for project.tags.iter().map(|tag| html! { <li>{tag.clone()}</li> }) }
                </ul>
                <ProjectLinks project={project.clone()} />
            </div>
            <div class="stack-card-media">
                <Media class="stack-card-image" src={project.asset.clone()} alt={project.title.clone()} />
            </div>
        </article>
    }
}
