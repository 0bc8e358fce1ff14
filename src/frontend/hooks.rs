use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Delay before entrance classes are applied, so the hidden state is painted first.
const ENTRANCE_TICK_MS: u32 = 16;

/// Flips to `true` shortly after mount. Drives CSS entrance transitions.
#[hook]
pub fn use_entrance() -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with((), move |_| {
            let timeout = Timeout::new(ENTRANCE_TICK_MS, move || revealed.set(true));
            move || drop(timeout)
        });
    }

    *revealed
}

/// Inline `transition-delay` for a staggered entrance.
pub fn entrance_delay(delay_ms: u32) -> String {
    format!("transition-delay: {delay_ms}ms;")
}
