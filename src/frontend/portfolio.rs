use super::{carousel::ProjectCarousel, media::Media, reveal::ScrollReveal};
use crate::{
    content::{PortfolioContent, ProjectItem},
    scroll::{self, AnimationSettings, RevealOptions},
    spotlight::{self, MaskMode, Pointer, SPOTLIGHT_RADIUS},
};
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub portfolio: PortfolioContent,
    pub projects: Vec<ProjectItem>,
    pub animations: AnimationSettings,
}

/// Grayscale showcase with a colour spotlight that follows the pointer.
#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    let stage_ref = use_node_ref();
    let pointer = use_state_eq(Pointer::default);

    let onmousemove = {
        let stage_ref = stage_ref.clone();
        let pointer = pointer.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(stage) = stage_ref.cast::<Element>() else {
                return;
            };
            let rect = stage.get_bounding_client_rect();
            pointer.set(spotlight::relative_pointer(
                event.client_x(),
                event.client_y(),
                rect.left(),
                rect.top(),
            ));
        })
    };

    let reveal = scroll::image_reveal(RevealOptions {
        rotation_end: props.animations.image_rotation_end,
        ..RevealOptions::default()
    });
    let cover_style = spotlight::mask_style(*pointer, SPOTLIGHT_RADIUS, MaskMode::Cover);
    let spotlight_style = spotlight::mask_style(*pointer, SPOTLIGHT_RADIUS, MaskMode::Reveal);
    let portfolio = &props.portfolio;

    html! {
        <section
            id="portfolio"
            class="section portfolio"
            aria-labelledby="portfolio-heading"
            {onmousemove}
        >
            <div ref={stage_ref} class="portfolio-stage">
                <div class="portfolio-cover" style={cover_style} aria-hidden="true" />
                <ScrollReveal class="portfolio-figure" timeline={reveal.clone()}>
                    <Media
                        class="portfolio-image is-grayscale"
                        src={portfolio.image.clone()}
                        alt={portfolio.highlight.clone()}
                    />
                </ScrollReveal>
                <div class="portfolio-spotlight" style={spotlight_style} aria-hidden="true">
                    <ScrollReveal class="portfolio-figure" timeline={reveal}>
                        <Media class="portfolio-image" src={portfolio.image.clone()} alt="" />
                    </ScrollReveal>
                </div>
            </div>

            <div class="portfolio-copy">
                <h2 id="portfolio-heading" class="section-title">
                    {portfolio.heading.clone()}
                    {" "}
                    <span class="muted">{portfolio.highlight.clone()}</span>
                </h2>
                <p class="section-blurb">{portfolio.blurb.clone()}</p>
                <ProjectCarousel slides={props.projects.clone()} settings={portfolio.carousel.clone()} />
            </div>
        </section>
    }
}
