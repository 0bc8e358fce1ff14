use super::dom::{self, WindowListener};
use crate::{
    content::NavItem,
    nav::{self, ScrollSpy, SectionOffset},
};
use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// How long a clicked item may wait for its smooth scroll to arrive.
const CLICK_HOLD_MS: u32 = 1_500;

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub items: Vec<NavItem>,
}

/// Floating icon bar. Tracks the section in view and scrolls to sections on click.
#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let active = use_state_eq(|| {
        props
            .items
            .first()
            .map(|item| item.id.clone())
            .unwrap_or_default()
    });
    let spy = use_mut_ref(ScrollSpy::default);
    let hold = use_mut_ref(|| None::<Timeout>);

    {
        let active = active.clone();
        let spy = spy.clone();
        use_effect_with(props.items.clone(), move |items| {
            let items = items.clone();
            let track = move || {
                let Some(document) = dom::document() else {
                    return;
                };
                let frame = dom::scroll_frame();
                let sections: Vec<SectionOffset> = items
                    .iter()
                    .filter_map(|item| {
                        let section = document.get_element_by_id(nav::anchor_id(&item.href))?;
                        Some(SectionOffset {
                            id: item.id.as_str(),
                            top: dom::document_geometry(&section, frame.scroll_y).top,
                        })
                    })
                    .collect();

                let in_view = nav::active_section(&sections, frame);
                if let Some(id) = spy.borrow_mut().observe(in_view) {
                    log::debug!("section in view: {id}");
                    active.set(id.to_string());
                }
            };

            track();
            let listener = WindowListener::new("scroll", move |_| track());
            move || drop(listener)
        });
    }

    html! {
        <nav class="site-nav" aria-label="Sections">
            <div class="site-nav-items">
                { for props.items.iter().map(|item| {
                    let is_active = *active == item.id;
                    let onclick = {
                        let active = active.clone();
                        let spy = spy.clone();
                        let hold = hold.clone();
                        let id = item.id.clone();
                        let anchor = nav::anchor_id(&item.href).to_string();
                        Callback::from(move |_: MouseEvent| {
                            log::debug!("navigate to #{anchor}");
                            spy.borrow_mut().select(&id);
                            active.set(id.clone());

                            let spy = spy.clone();
                            *hold.borrow_mut() = Some(Timeout::new(CLICK_HOLD_MS, move || {
                                spy.borrow_mut().release();
                            }));
                            dom::scroll_to_anchor(&anchor);
                        })
                    };

                    html! {
                        <button
                            key={item.id.clone()}
                            type="button"
                            class={classes!("nav-button", is_active.then_some("is-active"))}
                            title={item.label.clone()}
                            aria-label={item.label.clone()}
                            aria-current={if is_active { "true" } else { "false" }}
                            {onclick}
                        >
                            <svg class="nav-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d={item.icon.clone()}
                                />
                            </svg>
                        </button>
                    }
                }) }
            </div>
        </nav>
    }
}
