use super::{
    dom,
    hooks::{entrance_delay, use_entrance},
    skills::SkillsMarquee,
};
use crate::content::{HeroContent, SkillsConfig};
use yew::prelude::*;

/// Stagger for headline, tagline, stats, actions and scroll hint.
const ENTRANCE_DELAYS_MS: [u32; 5] = [0, 300, 500, 700, 900];
const MARQUEE_DELAY_MS: u32 = 400;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub hero: HeroContent,
    pub skills: SkillsConfig,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let revealed = use_entrance();
    let entrance = |extra: &'static str| classes!("entrance", extra, revealed.then_some("is-revealed"));
    let [headline_delay, tagline_delay, stats_delay, actions_delay, hint_delay] =
        ENTRANCE_DELAYS_MS.map(entrance_delay);

    let hero = &props.hero;

    html! {
        <section id="home" class="hero" aria-labelledby="hero-heading">
            <div class="hero-inner">
                <h1 id="hero-heading" class={entrance("hero-heading")} style={headline_delay}>
                    {"I'm "}
                    <span class="muted">{hero.name.clone()}</span>
                    {","}
                    <br />
                    {hero.role.clone()}
                </h1>

                <p class={entrance("hero-tagline")} style={tagline_delay}>{hero.tagline.clone()}</p>

                <SkillsMarquee
                    class={entrance("hero-marquee")}
                    style={entrance_delay(MARQUEE_DELAY_MS)}
                    tags={props.skills.tags.clone()}
                    config={props.skills.marquee.clone()}
                />

                if !hero.stats.is_empty() {
                    <dl class={entrance("hero-stats")} style={stats_delay}>
                        { for hero.stats.iter().map(|stat| html! {
                            <div class="hero-stat" key={stat.label.clone()}>
                                <dt class="hero-stat-value">{stat.value.clone()}</dt>
                                <dd class="hero-stat-label">{stat.label.clone()}</dd>
                            </div>
                        }) }
                    </dl>
                }

                <div class={entrance("hero-actions")} style={actions_delay}>
                    { for hero.actions.iter().map(|action| {
                        let target = action.target.clone();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            log::debug!("hero action to #{target}");
                            dom::scroll_to_anchor(&target);
                        });

                        html! {
                            <button
                                key={action.target.clone()}
                                type="button"
                                class={classes!("button", action.primary.then_some("button-primary"))}
                                {onclick}
                            >
                                {action.label.clone()}
                            </button>
                        }
                    }) }
                </div>
            </div>

            <div class={entrance("scroll-hint")} style={hint_delay} aria-hidden="true">
                <span class="scroll-hint-label">{"Scroll"}</span>
                <span class="scroll-hint-line" />
            </div>
        </section>
    }
}
