mod carousel;
mod dom;
mod hero;
mod hooks;
mod link;
mod media;
mod navigation;
mod portfolio;
mod projects;
mod reveal;
mod sections;
mod skills;

use crate::content::SiteContent;
use hero::Hero;
use navigation::Navigation;
use portfolio::Portfolio;
use projects::Projects;
use sections::{About, Contact};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub content: Rc<SiteContent>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let content = &props.content;

    html! {
        <>
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            <Navigation items={content.navigation.clone()} />
            <main id="content" class="page-shell">
                <Hero hero={content.hero.clone()} skills={content.skills.clone()} />
                <About about={content.about.clone()} animations={content.animations.clone()} />
                <Portfolio
                    portfolio={content.portfolio.clone()}
                    projects={content.projects.items.clone()}
                    animations={content.animations.clone()}
                />
                <Projects projects={content.projects.clone()} animations={content.animations.clone()} />
                <Contact contact={content.contact.clone()} animations={content.animations.clone()} />
            </main>
        </>
    }
}

fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

const UNAVAILABLE_MESSAGE: &str = "This page could not be loaded. Please try again later.";

pub fn run() {
    console_error_panic_hook::set_once();
    // only fails if a logger is already installed
    let _ = console_log::init_with_level(log_level());

    let Some(document) = dom::document() else {
        log::error!("no document to render into");
        return;
    };
    let Some(root) = document.get_element_by_id("app") else {
        log::error!("missing #app mount point");
        return;
    };

    let content = match SiteContent::embedded() {
        Ok(content) => Rc::new(content),
        Err(error) => {
            log::error!("site content rejected: {error}");
            root.set_text_content(Some(UNAVAILABLE_MESSAGE));
            return;
        }
    };
    document.set_title(&content.meta.title);

    log::info!(
        "rendering {} sections, {} projects",
        content.navigation.len(),
        content.projects.items.len()
    );
    yew::Renderer::<App>::with_root_and_props(root, AppProps { content }).render();
}
