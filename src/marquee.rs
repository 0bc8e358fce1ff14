//! Physics for the looping skills strip.
//!
//! The strip is `copy_count` copies of one tag sequence laid out in a row.
//! Translating the row by an offset wrapped into `[0, sequence_width)` makes
//! the copies tile seamlessly, so the strip appears to scroll forever.

use crate::easing;
use serde::Deserialize;

pub const SMOOTH_TAU: f64 = 0.25;
/// Speed changes settle a little slower than `SMOOTH_TAU` alone.
pub const EASING_TAU: f64 = SMOOTH_TAU * 1.5;
pub const MIN_COPIES: usize = 2;
pub const COPY_HEADROOM: usize = 2;
/// Below this speed (px/s) the track is left where it is.
pub const REST_VELOCITY: f64 = 0.1;

const DEFAULT_SPEED: f64 = 30.0;
const DEFAULT_GAP: f64 = 32.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Left,
    Right,
}

impl Direction {
    fn multiplier(self) -> f64 {
        match self {
            Self::Left => 1.0,
            Self::Right => -1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarqueeConfig {
    pub speed: f64,
    pub direction: Direction,
    pub gap: f64,
    pub pause_on_hover: bool,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            direction: Direction::Left,
            gap: DEFAULT_GAP,
            pause_on_hover: true,
        }
    }
}

impl MarqueeConfig {
    /// Signed steady-state speed in px/s. Positive moves content leftward.
    pub fn target_velocity(&self) -> f64 {
        self.speed.abs() * self.direction.multiplier()
    }

    /// The speed to ease toward given the current hover state.
    pub fn effective_target(&self, hovered: bool) -> f64 {
        if self.pause_on_hover && hovered {
            0.0
        } else {
            self.target_velocity()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    pub sequence_width: f64,
    pub copy_count: usize,
}

/// Works out how many sequence copies keep the container covered.
///
/// Returns `None` while the sequence has not been laid out yet.
pub fn measure(container_width: f64, sequence_width: f64) -> Option<Dimensions> {
    if !(sequence_width > 0.0) || !sequence_width.is_finite() {
        return None;
    }

    let container_width = if container_width.is_finite() {
        container_width.max(0.0)
    } else {
        0.0
    };
    let copies_needed = (container_width / sequence_width).ceil() as usize + COPY_HEADROOM;

    Some(Dimensions {
        sequence_width: sequence_width.ceil(),
        copy_count: copies_needed.max(MIN_COPIES),
    })
}

/// Floored modulo into `[0, width)`.
pub fn wrap_offset(offset: f64, width: f64) -> f64 {
    if !(width > 0.0) || !offset.is_finite() {
        return 0.0;
    }

    let wrapped = offset.rem_euclid(width);
    // rem_euclid can round up to `width` for tiny negative inputs.
    if wrapped >= width {
        0.0
    } else {
        wrapped
    }
}

pub fn translate(offset: f64) -> String {
    format!("translate3d({:.3}px, 0, 0)", -offset)
}

/// Frame-to-frame state of one marquee. Outlives individual renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarqueeState {
    offset: f64,
    velocity: f64,
    last_timestamp: Option<f64>,
    sequence_width: f64,
}

impl MarqueeState {
    #[cfg(test)]
    fn offset(&self) -> f64 {
        self.offset
    }

    #[cfg(test)]
    fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Adopts a freshly measured sequence width.
    ///
    /// A changed width restarts the loop at offset 0 and cruising speed so
    /// the strip does not jump. Returns whether that reset happened.
    pub fn sync_width(&mut self, width: f64, target: f64) -> bool {
        if width == self.sequence_width {
            return false;
        }

        self.sequence_width = width;
        self.offset = 0.0;
        self.velocity = target;
        true
    }

    /// Advances one animation frame.
    ///
    /// `timestamp_ms` is the frame time as reported by the browser. Returns
    /// the wrapped offset when the track should be moved.
    pub fn tick(&mut self, timestamp_ms: f64, target: f64) -> Option<f64> {
        if !(self.sequence_width > 0.0) {
            return None;
        }

        let last = *self.last_timestamp.get_or_insert(timestamp_ms);
        let dt = (timestamp_ms - last).max(0.0) / 1000.0;
        self.last_timestamp = Some(timestamp_ms);

        self.velocity = easing::approach(self.velocity, target, dt, EASING_TAU);

        if self.velocity.abs() <= REST_VELOCITY {
            return None;
        }

        self.offset = wrap_offset(self.offset + self.velocity * dt, self.sequence_width);
        Some(self.offset)
    }

    /// Forgets the frame clock so a restarted loop does not see a huge gap.
    pub fn suspend(&mut self) {
        self.last_timestamp = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    fn running(width: f64, velocity: f64) -> MarqueeState {
        let mut state = MarqueeState::default();
        state.sync_width(width, velocity);
        state
    }

    #[test]
    fn direction_sets_velocity_sign() {
        let left = MarqueeConfig {
            speed: 30.0,
            direction: Direction::Left,
            ..MarqueeConfig::default()
        };
        let right = MarqueeConfig {
            direction: Direction::Right,
            ..left.clone()
        };

        assert_eq!(left.target_velocity(), 30.0);
        assert_eq!(right.target_velocity(), -30.0);
    }

    #[test]
    fn negative_speed_uses_magnitude() {
        let config = MarqueeConfig {
            speed: -45.0,
            direction: Direction::Left,
            ..MarqueeConfig::default()
        };
        assert_eq!(config.target_velocity(), 45.0);
    }

    #[test]
    fn hover_pauses_only_when_enabled() {
        let mut config = MarqueeConfig::default();
        assert_eq!(config.effective_target(true), 0.0);
        assert_eq!(config.effective_target(false), 30.0);

        config.pause_on_hover = false;
        assert_eq!(config.effective_target(true), 30.0);
    }

    #[test]
    fn copy_count_example() {
        let dims = measure(900.0, 400.0).expect("laid out");
        assert_eq!(dims.copy_count, 5);
        assert_eq!(dims.sequence_width, 400.0);
    }

    #[test]
    fn copy_count_has_floor_of_two() {
        let dims = measure(0.0, 1200.0).expect("laid out");
        assert_eq!(dims.copy_count, COPY_HEADROOM.max(MIN_COPIES));
    }

    #[test]
    fn fractional_sequence_width_is_rounded_up() {
        let dims = measure(500.0, 250.4).expect("laid out");
        assert_eq!(dims.sequence_width, 251.0);
        assert_eq!(dims.copy_count, 4);
    }

    #[test]
    fn unmeasured_sequence_yields_nothing() {
        assert_eq!(measure(900.0, 0.0), None);
        assert_eq!(measure(900.0, -4.0), None);
        assert_eq!(measure(900.0, f64::NAN), None);
    }

    #[test]
    fn measuring_twice_is_stable() {
        assert_eq!(measure(1337.0, 421.5), measure(1337.0, 421.5));
    }

    #[test]
    fn zero_width_never_animates() {
        let mut state = MarqueeState::default();
        assert_eq!(state.tick(0.0, 30.0), None);
        assert_eq!(state.tick(500.0, 30.0), None);
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn width_change_resets_offset_and_velocity() {
        let mut state = running(400.0, 30.0);
        state.tick(0.0, 30.0);
        state.tick(1000.0, 30.0);
        assert!(state.offset() > 0.0);

        assert!(state.sync_width(420.0, 30.0));
        assert_eq!(state.offset(), 0.0);
        assert_eq!(state.velocity(), 30.0);
        assert!(!state.sync_width(420.0, 30.0));
    }

    #[test]
    fn first_frame_has_zero_elapsed_time() {
        let mut state = running(400.0, 30.0);
        assert_eq!(state.tick(12_345.0, 30.0), Some(0.0));
    }

    #[test]
    fn cruising_offset_advances_by_velocity() {
        let mut state = running(400.0, 30.0);
        state.tick(0.0, 30.0);
        let offset = state.tick(1000.0, 30.0).expect("moving");
        assert!((offset - 30.0).abs() < 1e-9);
    }

    #[test]
    fn offset_wraps_past_sequence_width() {
        let mut state = running(100.0, 30.0);
        state.tick(0.0, 30.0);
        let offset = state.tick(4000.0, 30.0).expect("moving");
        assert!((offset - 20.0).abs() < 1e-9);
    }

    #[test]
    fn rightward_motion_wraps_from_below_zero() {
        let mut state = running(100.0, -30.0);
        state.tick(0.0, -30.0);
        let offset = state.tick(1000.0, -30.0).expect("moving");
        assert!((offset - 70.0).abs() < 1e-9);
    }

    #[test]
    fn resting_strip_is_left_alone() {
        let mut state = running(400.0, 0.0);
        state.tick(0.0, 0.0);
        assert_eq!(state.tick(FRAME_MS, 0.0), None);
    }

    #[test]
    fn suspend_restarts_the_frame_clock() {
        let mut state = running(400.0, 30.0);
        state.tick(0.0, 30.0);
        state.tick(100.0, 30.0);
        let before = state.offset();

        state.suspend();
        state.tick(60_000.0, 30.0);
        assert_eq!(state.offset(), before);
    }

    #[test]
    fn backwards_clock_is_treated_as_no_time() {
        let mut state = running(400.0, 30.0);
        state.tick(1000.0, 30.0);
        let before = state.offset();
        state.tick(900.0, 30.0);
        assert_eq!(state.offset(), before);
    }

    #[test]
    fn wrap_offset_guards_bad_input() {
        assert_eq!(wrap_offset(f64::INFINITY, 100.0), 0.0);
        assert_eq!(wrap_offset(50.0, 0.0), 0.0);
        assert_eq!(wrap_offset(-1e-20, 400.0), 0.0);
    }

    #[test]
    fn translate_moves_track_left() {
        assert_eq!(translate(12.5), "translate3d(-12.500px, 0, 0)");
    }

    proptest! {
        #[test]
        fn offset_stays_within_sequence_width(
            width in 1.0f64..5000.0,
            target in -400.0f64..400.0,
            steps in prop::collection::vec(0.0f64..250.0, 1..120),
        ) {
            let mut state = running(width, target);
            let mut now = 0.0;
            for step in steps {
                now += step;
                state.tick(now, target);
                prop_assert!(state.offset() >= 0.0 && state.offset() < width);
            }
        }

        #[test]
        fn velocity_approaches_target_without_overshoot(
            target in 0.5f64..400.0,
            steps in prop::collection::vec(1.0f64..100.0, 1..120),
        ) {
            let mut state = running(300.0, 0.0);
            let mut now = 0.0;
            let mut previous = state.velocity();
            state.tick(now, target);
            for step in steps {
                now += step;
                state.tick(now, target);
                let velocity = state.velocity();
                prop_assert!(velocity >= previous - 1e-9);
                prop_assert!(velocity <= target);
                previous = velocity;
            }
        }

        #[test]
        fn hover_pause_decelerates_monotonically(
            speed in 1.0f64..400.0,
            leftward in any::<bool>(),
            steps in prop::collection::vec(1.0f64..100.0, 1..200),
        ) {
            let config = MarqueeConfig {
                speed,
                direction: if leftward { Direction::Left } else { Direction::Right },
                ..MarqueeConfig::default()
            };
            let mut state = running(300.0, config.target_velocity());
            let mut now = 0.0;
            state.tick(now, config.effective_target(false));

            let paused = config.effective_target(true);
            prop_assert_eq!(paused, 0.0);
            let mut previous = state.velocity().abs();
            for step in steps {
                now += step;
                state.tick(now, paused);
                let magnitude = state.velocity().abs();
                prop_assert!(magnitude <= previous);
                previous = magnitude;
            }
        }

        #[test]
        fn copy_count_covers_container(
            container in 0.0f64..10_000.0,
            sequence in 1.0f64..4000.0,
        ) {
            let dims = measure(container, sequence).expect("positive width");
            let lower = (container / sequence).ceil() as usize + COPY_HEADROOM;
            prop_assert!(dims.copy_count >= lower);
            prop_assert!(dims.copy_count >= MIN_COPIES);
            prop_assert_eq!(Some(dims), measure(container, sequence));
        }
    }
}
