use crate::content::ProjectItem;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExternalLinkProps {
    pub href: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ExternalLink)]
pub fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a
            class={classes!("link", props.class.clone())}
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
        >
            {props.label.clone()}
            <span class="external-mark" aria-hidden="true">{"↗"}</span>
            <span class="sr-only">{" (opens in a new tab)"}</span>
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectLinksProps {
    pub project: ProjectItem,
}

/// Live demo and source links for a project, whichever it has.
#[function_component(ProjectLinks)]
pub fn project_links(props: &ProjectLinksProps) -> Html {
    let project = &props.project;
    if project.live_url.is_none() && project.source_url.is_none() {
        return html! {};
    }

    html! {
        <div class="project-links">
            if let Some(href) = project.live_url.clone() {
                <ExternalLink class="button button-primary" {href} label="Live Demo" />
            }
            if let Some(href) = project.source_url.clone() {
                <ExternalLink class="button" {href} label="Source" />
            }
        </div>
    }
}
