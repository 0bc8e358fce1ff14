use serde::Deserialize;

/// Easing curves used by scroll-linked tweens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    #[default]
    None,
    Power1Out,
    Power2Out,
    Power2InOut,
    Power3Out,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        match self {
            Self::None => t,
            Self::Power1Out => 1.0 - (1.0 - t).powi(2),
            Self::Power2Out => 1.0 - (1.0 - t).powi(3),
            Self::Power2InOut => {
                if t < 0.5 {
                    4.0 * t.powi(3)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Self::Power3Out => 1.0 - (1.0 - t).powi(4),
        }
    }
}

/// Blend factor `1 - e^(-dt / tau)` for an exponential approach over `dt` seconds.
pub fn smoothing_factor(dt: f64, tau: f64) -> f64 {
    if !(dt > 0.0) {
        return 0.0;
    }
    if !(tau > 0.0) {
        return 1.0;
    }

    1.0 - (-dt / tau).exp()
}

/// Moves `current` toward `target` by the smoothing factor for `dt`.
///
/// Written as `target - gap * decay` so the result never crosses `target`.
pub fn approach(current: f64, target: f64, dt: f64, tau: f64) -> f64 {
    let decay = 1.0 - smoothing_factor(dt, tau);
    target - (target - current) * decay
}

pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
