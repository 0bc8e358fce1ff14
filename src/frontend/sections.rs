use super::{link::ExternalLink, reveal::ScrollReveal};
use crate::{
    content::{AboutContent, ContactContent},
    scroll::{self, AnimationSettings},
};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub about: AboutContent,
    pub animations: AnimationSettings,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let animations = &props.animations;

    html! {
        <section id="about" class="section about" aria-labelledby="about-heading">
            <ScrollReveal timeline={scroll::fade_up(30.0, animations.heading_start, animations.heading_end)}>
                <h2 id="about-heading" class="section-title">{props.about.heading.clone()}</h2>
            </ScrollReveal>
            { for props.about.paragraphs.iter().map(|paragraph| html! {
                <ScrollReveal timeline={scroll::fade_up(40.0, animations.text_start, animations.text_end)}>
                    <p class="about-text">{paragraph.clone()}</p>
                </ScrollReveal>
            }) }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub contact: ContactContent,
    pub animations: AnimationSettings,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let contact = &props.contact;
    let animations = &props.animations;

    html! {
        <section id="contact" class="section contact" aria-labelledby="contact-heading">
            <ScrollReveal timeline={scroll::fade_up(30.0, animations.heading_start, animations.heading_end)}>
                <h2 id="contact-heading" class="section-title">{contact.heading.clone()}</h2>
            </ScrollReveal>
            <ScrollReveal timeline={scroll::fade_up(40.0, animations.text_start, animations.text_end)}>
                <p class="section-blurb">{contact.blurb.clone()}</p>
                <a class="button button-primary contact-email" href={format!("mailto:{}", contact.email)}>
                    {contact.email.clone()}
                </a>
            </ScrollReveal>
            if !contact.links.is_empty() {
                <ul class="row-list contact-links">
                    { for contact.links.iter().map(|link| html! {
                        <li key={link.href.clone()}>
                            <ExternalLink href={link.href.clone()} label={link.label.clone()} />
                        </li>
                    }) }
                </ul>
            }
        </section>
    }
}
