//! Scroll-linked tweens.
//!
//! A [`Marker`] pins a point on an element to a line in the viewport, e.g.
//! `"top 80%"` is reached when the element's top edge crosses 80% of the
//! viewport height. Two markers bound a [`ScrollRange`]; the scroll position
//! inside that range is the progress of every [`Tween`] attached to it.

use crate::easing::{self, Ease};
use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;

pub const CARD_SCALE: f64 = 0.5;
pub const CARD_SCRUB_SECONDS: f64 = 0.5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MarkerError {
    #[error("marker `{0}` must name an element anchor and a viewport anchor")]
    Shape(String),
    #[error("`{0}` is not a valid anchor length")]
    Length(String),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Pixels(f64),
    Percent(f64),
}

impl Length {
    fn resolve(self, extent: f64) -> f64 {
        match self {
            Self::Pixels(value) => value,
            Self::Percent(value) => extent * value / 100.0,
        }
    }

    fn negated(self) -> Self {
        match self {
            Self::Pixels(value) => Self::Pixels(-value),
            Self::Percent(value) => Self::Percent(-value),
        }
    }
}

impl FromStr for Length {
    type Err = MarkerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (number, percent) = match raw.strip_suffix('%') {
            Some(number) => (number, true),
            None => (raw.strip_suffix("px").unwrap_or(raw), false),
        };

        let value: f64 = number
            .trim()
            .parse()
            .map_err(|_| MarkerError::Length(raw.to_string()))?;
        if !value.is_finite() {
            return Err(MarkerError::Length(raw.to_string()));
        }

        Ok(if percent {
            Self::Percent(value)
        } else {
            Self::Pixels(value)
        })
    }
}

/// A point along one axis of an element or of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    base: Length,
    shift: Length,
}

impl Anchor {
    pub const TOP: Self = Self::percent(0.0);
    pub const CENTER: Self = Self::percent(50.0);
    pub const BOTTOM: Self = Self::percent(100.0);

    pub const fn percent(value: f64) -> Self {
        Self {
            base: Length::Percent(value),
            shift: Length::Pixels(0.0),
        }
    }

    pub const fn shifted(self, shift: Length) -> Self {
        Self {
            base: self.base,
            shift,
        }
    }

    fn resolve(self, extent: f64) -> f64 {
        self.base.resolve(extent) + self.shift.resolve(extent)
    }
}

impl FromStr for Anchor {
    type Err = MarkerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (base, shift) = match raw.find("+=").or_else(|| raw.find("-=")) {
            Some(at) => {
                let shift: Length = raw[at + 2..].parse()?;
                let shift = if raw[at..].starts_with('-') {
                    shift.negated()
                } else {
                    shift
                };
                (&raw[..at], shift)
            }
            None => (raw, Length::Pixels(0.0)),
        };

        let base = match base {
            "top" => Length::Percent(0.0),
            "center" => Length::Percent(50.0),
            "bottom" => Length::Percent(100.0),
            other => other.parse()?,
        };

        Ok(Self { base, shift })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Marker {
    pub element: Anchor,
    pub viewport: Anchor,
}

impl Marker {
    pub const TOP_TOP: Self = Self::new(Anchor::TOP, Anchor::TOP);
    pub const CENTER_CENTER: Self = Self::new(Anchor::CENTER, Anchor::CENTER);
    pub const TOP_BOTTOM: Self = Self::new(Anchor::TOP, Anchor::BOTTOM);
    pub const BOTTOM_BOTTOM: Self = Self::new(Anchor::BOTTOM, Anchor::BOTTOM);

    pub const fn new(element: Anchor, viewport: Anchor) -> Self {
        Self { element, viewport }
    }

    /// The scroll offset at which the element anchor meets the viewport anchor.
    pub fn scroll_position(&self, element: ElementGeometry, viewport_height: f64) -> f64 {
        element.top + self.element.resolve(element.height) - self.viewport.resolve(viewport_height)
    }
}

impl FromStr for Marker {
    type Err = MarkerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut parts = raw.split_whitespace();
        let (Some(element), Some(viewport), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(MarkerError::Shape(raw.to_string()));
        };

        Ok(Self::new(element.parse()?, viewport.parse()?))
    }
}

impl TryFrom<String> for Marker {
    type Error = MarkerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Document-space box of an element: top edge and height in px.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementGeometry {
    pub top: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollFrame {
    pub scroll_y: f64,
    pub viewport_height: f64,
    /// Full scrollable height of the page.
    pub document_height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRange {
    pub start: f64,
    pub end: f64,
}

impl ScrollRange {
    /// Progress in `[0, 1]`; an empty range switches at `start`.
    pub fn progress(&self, scroll_y: f64) -> f64 {
        let span = self.end - self.start;
        if !(span > 0.0) {
            return if scroll_y >= self.start { 1.0 } else { 0.0 };
        }

        let progress = ((scroll_y - self.start) / span).clamp(0.0, 1.0);
        if progress.is_nan() {
            0.0
        } else {
            progress
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Scrub {
    #[default]
    Instant,
    /// Seconds the displayed progress takes to catch up with the scroll position.
    Lag(f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTrigger {
    pub start: Marker,
    pub end: Marker,
    pub scrub: Scrub,
}

impl ScrollTrigger {
    pub fn new(start: Marker, end: Marker) -> Self {
        Self {
            start,
            end,
            scrub: Scrub::Instant,
        }
    }

    pub fn scrub(mut self, scrub: Scrub) -> Self {
        self.scrub = scrub;
        self
    }

    pub fn range(&self, element: ElementGeometry, viewport_height: f64) -> ScrollRange {
        ScrollRange {
            start: self.start.scroll_position(element, viewport_height),
            end: self.end.scroll_position(element, viewport_height),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrubState {
    progress: Option<f64>,
}

impl ScrubState {
    pub fn advance(&mut self, target: f64, dt: f64, scrub: Scrub) -> f64 {
        let next = match (scrub, self.progress) {
            (Scrub::Lag(seconds), Some(current)) => easing::approach(current, target, dt, seconds),
            _ => target,
        };
        self.progress = Some(next);
        next
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Property {
    Opacity,
    Y,
    Rotate,
    Scale,
    Blur,
}

impl Property {
    const ALL: [Self; 5] = [Self::Opacity, Self::Y, Self::Rotate, Self::Scale, Self::Blur];

    fn neutral(self) -> f64 {
        match self {
            Self::Opacity | Self::Scale => 1.0,
            Self::Y | Self::Rotate | Self::Blur => 0.0,
        }
    }
}

/// Animatable visual properties. `None` leaves a property untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Props {
    pub opacity: Option<f64>,
    pub y: Option<f64>,
    pub rotate: Option<f64>,
    pub scale: Option<f64>,
    pub blur: Option<f64>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity(mut self, value: f64) -> Self {
        self.opacity = Some(value);
        self
    }

    pub fn y(mut self, value: f64) -> Self {
        self.y = Some(value);
        self
    }

    pub fn rotate(mut self, value: f64) -> Self {
        self.rotate = Some(value);
        self
    }

    pub fn scale(mut self, value: f64) -> Self {
        self.scale = Some(value);
        self
    }

    pub fn blur(mut self, value: f64) -> Self {
        self.blur = Some(value);
        self
    }

    fn get(&self, property: Property) -> Option<f64> {
        match property {
            Property::Opacity => self.opacity,
            Property::Y => self.y,
            Property::Rotate => self.rotate,
            Property::Scale => self.scale,
            Property::Blur => self.blur,
        }
    }

    fn set(&mut self, property: Property, value: f64) {
        let slot = match property {
            Property::Opacity => &mut self.opacity,
            Property::Y => &mut self.y,
            Property::Rotate => &mut self.rotate,
            Property::Scale => &mut self.scale,
            Property::Blur => &mut self.blur,
        };
        *slot = Some(value);
    }

    pub fn to_css(&self) -> String {
        let mut declarations = Vec::new();

        if let Some(opacity) = self.opacity {
            declarations.push(format!("opacity: {opacity:.3};"));
        }

        let mut transforms = Vec::new();
        if let Some(y) = self.y {
            transforms.push(format!("translate3d(0, {y:.2}px, 0)"));
        }
        if let Some(rotate) = self.rotate {
            transforms.push(format!("rotate({rotate:.2}deg)"));
        }
        if let Some(scale) = self.scale {
            transforms.push(format!("scale({scale:.3})"));
        }
        if !transforms.is_empty() {
            declarations.push(format!("transform: {};", transforms.join(" ")));
        }

        if let Some(blur) = self.blur {
            declarations.push(format!("filter: blur({blur:.2}px);"));
        }

        declarations.join(" ")
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: Props,
    pub to: Props,
    pub ease: Ease,
    pub trigger: ScrollTrigger,
}

impl Tween {
    pub fn from_to(from: Props, to: Props, trigger: ScrollTrigger) -> Self {
        Self {
            from,
            to,
            ease: Ease::None,
            trigger,
        }
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Writes every property this tween animates, sampled at `progress`.
    pub fn apply(&self, progress: f64, target: &mut Props) {
        let t = self.ease.apply(progress);

        for property in Property::ALL {
            let (from, to) = (self.from.get(property), self.to.get(property));
            if from.is_none() && to.is_none() {
                continue;
            }

            let from = from.unwrap_or(property.neutral());
            let to = to.unwrap_or(property.neutral());
            target.set(property, easing::lerp(from, to, t));
        }
    }
}

/// Tweens bound to one element. Later tweens win on shared properties.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timeline {
    tweens: Vec<Tween>,
}

/// Per-tween scrub progress for a running [`Timeline`].
#[derive(Clone, Debug, Default)]
pub struct TimelineState {
    scrubs: Vec<ScrubState>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, tween: Tween) -> Self {
        self.tweens.push(tween);
        self
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    pub fn advance(
        &self,
        state: &mut TimelineState,
        element: ElementGeometry,
        frame: ScrollFrame,
        dt: f64,
    ) -> Props {
        state.scrubs.resize(self.tweens.len(), ScrubState::default());

        let mut props = Props::default();
        for (tween, scrub) in self.tweens.iter().zip(state.scrubs.iter_mut()) {
            let target = tween
                .trigger
                .range(element, frame.viewport_height)
                .progress(frame.scroll_y);
            let progress = scrub.advance(target, dt, tween.trigger.scrub);
            tween.apply(progress, &mut props);
        }
        props
    }

    /// The end state of every tween.
    pub fn settled(&self) -> Props {
        let mut props = Props::default();
        for tween in &self.tweens {
            tween.apply(1.0, &mut props);
        }
        props
    }
}

/// Scroll markers used by the page's reveal animations.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    pub heading_start: Marker,
    pub heading_end: Marker,
    pub text_start: Marker,
    pub text_end: Marker,
    pub image_rotation_end: Marker,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            heading_start: Marker::new(Anchor::TOP, Anchor::percent(80.0)),
            heading_end: Marker::new(Anchor::TOP, Anchor::percent(50.0)),
            text_start: Marker::new(Anchor::TOP, Anchor::percent(80.0)),
            text_end: Marker::new(Anchor::TOP, Anchor::percent(20.0)),
            image_rotation_end: Marker::BOTTOM_BOTTOM,
        }
    }
}

pub fn fade_up(distance: f64, start: Marker, end: Marker) -> Timeline {
    Timeline::new().add(
        Tween::from_to(
            Props::new().opacity(0.0).y(distance),
            Props::new().opacity(1.0).y(0.0),
            ScrollTrigger::new(start, end),
        )
        .ease(Ease::Power2Out),
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub base_opacity: f64,
    pub base_rotation: f64,
    pub blur: Option<f64>,
    pub rotation_end: Marker,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            base_opacity: 0.0,
            base_rotation: 5.0,
            blur: Some(10.0),
            rotation_end: Marker::BOTTOM_BOTTOM,
        }
    }
}

/// Straightens, fades in and unblurs an image as it scrolls into view.
pub fn image_reveal(options: RevealOptions) -> Timeline {
    let fade_start = Marker::new(Anchor::TOP, Anchor::BOTTOM.shifted(Length::Percent(-20.0)));
    let fade = ScrollTrigger::new(fade_start, Marker::BOTTOM_BOTTOM);

    let timeline = Timeline::new()
        .add(Tween::from_to(
            Props::new().rotate(options.base_rotation),
            Props::new().rotate(0.0),
            ScrollTrigger::new(Marker::TOP_BOTTOM, options.rotation_end),
        ))
        .add(Tween::from_to(
            Props::new().opacity(options.base_opacity),
            Props::new().opacity(1.0),
            fade,
        ));

    match options.blur {
        Some(strength) => timeline.add(Tween::from_to(
            Props::new().blur(strength),
            Props::new().blur(0.0),
            fade,
        )),
        None => timeline,
    }
}

/// Shrinks a pinned card while later cards slide over it. The last card keeps its size.
///
/// The scroll range comes from [`pinned_ranges`]; the trigger only carries the scrub lag.
pub fn card_scale(index: usize, count: usize) -> Tween {
    let target = if index + 1 >= count { 1.0 } else { CARD_SCALE };

    Tween::from_to(
        Props::new().scale(1.0),
        Props::new().scale(target),
        ScrollTrigger::new(Marker::TOP_TOP, Marker::CENTER_CENTER)
            .scrub(Scrub::Lag(CARD_SCRUB_SECONDS)),
    )
}

/// Natural document tops of stacked cards, each preceded by `gap` px of margin.
pub fn stack_offsets(container_top: f64, heights: &[f64], gap: f64) -> Vec<f64> {
    let mut top = container_top;
    heights
        .iter()
        .map(|height| {
            top += gap;
            let card_top = top;
            top += height;
            card_top
        })
        .collect()
}

/// Each card stays pinned from reaching the viewport top until the last
/// card is centred in the viewport.
pub fn pinned_ranges(offsets: &[f64], heights: &[f64], viewport_height: f64) -> Vec<ScrollRange> {
    let cards: Vec<ElementGeometry> = offsets
        .iter()
        .zip(heights)
        .map(|(&top, &height)| ElementGeometry { top, height })
        .collect();

    let Some(&last) = cards.last() else {
        return Vec::new();
    };
    let end = Marker::CENTER_CENTER.scroll_position(last, viewport_height);

    cards
        .iter()
        .map(|&card| ScrollRange {
            start: Marker::TOP_TOP.scroll_position(card, viewport_height),
            end,
        })
        .collect()
}

/// Box of an element inside a pinned card, placed relative to the card's
/// unpinned top so the pin does not drag the element's triggers along.
pub fn pinned_child(card_top: f64, offset_in_card: f64, height: f64) -> ElementGeometry {
    ElementGeometry {
        top: card_top + offset_in_card,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn marker(raw: &str) -> Marker {
        raw.parse().expect("valid marker")
    }

    #[test]
    fn keyword_markers_parse() {
        assert_eq!(marker("top top"), Marker::TOP_TOP);
        assert_eq!(marker("center center"), Marker::CENTER_CENTER);
        assert_eq!(marker("bottom bottom"), Marker::BOTTOM_BOTTOM);
        assert_eq!(marker("  top   bottom "), Marker::TOP_BOTTOM);
    }

    #[test]
    fn percent_and_pixel_anchors_parse() {
        let parsed = marker("top 80%");
        assert_eq!(parsed.viewport, Anchor::percent(80.0));

        let element = ElementGeometry { top: 0.0, height: 200.0 };
        assert_eq!(marker("100px top").scroll_position(element, 1000.0), 100.0);
        assert_eq!(marker("25 top").scroll_position(element, 1000.0), 25.0);
    }

    #[test]
    fn relative_offsets_shift_the_anchor() {
        let element = ElementGeometry { top: 1500.0, height: 300.0 };
        // element top meets 80% of a 1000px viewport
        assert_eq!(marker("top bottom-=20%").scroll_position(element, 1000.0), 700.0);
        assert_eq!(marker("top center+=100px").scroll_position(element, 1000.0), 900.0);
    }

    #[test]
    fn malformed_markers_are_rejected() {
        assert_eq!(
            "top".parse::<Marker>(),
            Err(MarkerError::Shape("top".to_string()))
        );
        assert_eq!(
            "top bottom center".parse::<Marker>(),
            Err(MarkerError::Shape("top bottom center".to_string()))
        );
        assert_eq!(
            "top middle".parse::<Marker>(),
            Err(MarkerError::Length("middle".to_string()))
        );
        assert!("top bottom-=lots".parse::<Marker>().is_err());
        assert!("top inf%".parse::<Marker>().is_err());
    }

    #[test]
    fn marker_deserializes_from_string() {
        let parsed: Marker = serde_json::from_str("\"top 50%\"").expect("valid marker");
        assert_eq!(parsed, Marker::new(Anchor::TOP, Anchor::percent(50.0)));
        assert!(serde_json::from_str::<Marker>("\"sideways\"").is_err());
    }

    #[test]
    fn progress_is_clamped_to_range() {
        let range = ScrollRange { start: 100.0, end: 300.0 };
        assert_eq!(range.progress(0.0), 0.0);
        assert_eq!(range.progress(200.0), 0.5);
        assert_eq!(range.progress(900.0), 1.0);
        assert_eq!(range.progress(f64::NAN), 0.0);
    }

    #[test]
    fn empty_range_switches_at_start() {
        let range = ScrollRange { start: 300.0, end: 100.0 };
        assert_eq!(range.progress(299.0), 0.0);
        assert_eq!(range.progress(300.0), 1.0);
    }

    #[test]
    fn fade_up_reaches_resting_position() {
        let settings = AnimationSettings::default();
        let timeline = fade_up(30.0, settings.heading_start, settings.heading_end);
        let element = ElementGeometry { top: 2000.0, height: 80.0 };
        let mut state = TimelineState::default();

        let before = timeline.advance(
            &mut state,
            element,
            ScrollFrame { scroll_y: 0.0, viewport_height: 1000.0, ..ScrollFrame::default() },
            0.016,
        );
        assert_eq!(before.opacity, Some(0.0));
        assert_eq!(before.y, Some(30.0));

        // top 80% at scroll 1200, top 50% at scroll 1500
        let halfway = timeline.advance(
            &mut state,
            element,
            ScrollFrame { scroll_y: 1350.0, viewport_height: 1000.0, ..ScrollFrame::default() },
            0.016,
        );
        assert!((halfway.opacity.expect("animated") - 0.875).abs() < 1e-9);

        let after = timeline.advance(
            &mut state,
            element,
            ScrollFrame { scroll_y: 5000.0, viewport_height: 1000.0, ..ScrollFrame::default() },
            0.016,
        );
        assert_eq!(after, timeline.settled());
        assert_eq!(after.opacity, Some(1.0));
        assert_eq!(after.y, Some(0.0));
    }

    #[test]
    fn image_reveal_animates_rotation_opacity_and_blur() {
        let timeline = image_reveal(RevealOptions::default());
        assert_eq!(timeline.len(), 3);

        let settled = timeline.settled();
        assert_eq!(settled.rotate, Some(0.0));
        assert_eq!(settled.opacity, Some(1.0));
        assert_eq!(settled.blur, Some(0.0));
    }

    #[test]
    fn image_reveal_without_blur_leaves_filter_alone() {
        let timeline = image_reveal(RevealOptions {
            blur: None,
            ..RevealOptions::default()
        });
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline.settled().blur, None);
    }

    #[test]
    fn image_reveal_starts_tilted_and_hidden() {
        let timeline = image_reveal(RevealOptions::default());
        let element = ElementGeometry { top: 3000.0, height: 600.0 };
        let props = timeline.advance(
            &mut TimelineState::default(),
            element,
            ScrollFrame { scroll_y: 0.0, viewport_height: 900.0, ..ScrollFrame::default() },
            0.0,
        );

        assert_eq!(props.rotate, Some(5.0));
        assert_eq!(props.opacity, Some(0.0));
        assert_eq!(props.blur, Some(10.0));
    }

    #[test]
    fn lagged_scrub_trails_the_scroll_position() {
        let mut scrub = ScrubState::default();
        assert_eq!(scrub.advance(0.0, 0.016, Scrub::Lag(0.5)), 0.0);

        let trailing = scrub.advance(1.0, 0.016, Scrub::Lag(0.5));
        assert!(trailing > 0.0 && trailing < 0.1);

        let caught_up = scrub.advance(1.0, 10.0, Scrub::Lag(0.5));
        assert!((caught_up - 1.0).abs() < 1e-6);
    }

    #[test]
    fn instant_scrub_follows_exactly() {
        let mut scrub = ScrubState::default();
        scrub.advance(0.0, 0.016, Scrub::Instant);
        assert_eq!(scrub.advance(0.7, 0.016, Scrub::Instant), 0.7);
    }

    #[test]
    fn css_lists_only_animated_properties() {
        assert_eq!(Props::new().to_css(), "");
        assert_eq!(Props::new().opacity(0.5).to_css(), "opacity: 0.500;");
        assert_eq!(
            Props::new().y(12.0).rotate(2.5).scale(0.8).blur(3.0).to_css(),
            "transform: translate3d(0, 12.00px, 0) rotate(2.50deg) scale(0.800); filter: blur(3.00px);"
        );
    }

    #[test]
    fn later_tweens_override_shared_properties() {
        let trigger = ScrollTrigger::new(Marker::TOP_BOTTOM, Marker::BOTTOM_BOTTOM);
        let timeline = Timeline::new()
            .add(Tween::from_to(Props::new().opacity(0.0), Props::new().opacity(1.0), trigger))
            .add(Tween::from_to(Props::new().opacity(0.2), Props::new().opacity(0.4), trigger));

        assert_eq!(timeline.settled().opacity, Some(0.4));
    }

    #[test]
    fn one_sided_tween_starts_from_neutral() {
        let trigger = ScrollTrigger::new(Marker::TOP_BOTTOM, Marker::BOTTOM_BOTTOM);
        let tween = Tween::from_to(Props::new(), Props::new().scale(0.5), trigger);
        let mut props = Props::new();
        tween.apply(0.0, &mut props);
        assert_eq!(props.scale, Some(1.0));
        assert_eq!(props.opacity, None);
    }

    #[test]
    fn last_card_keeps_full_size() {
        let mut props = Props::new();
        card_scale(2, 3).apply(1.0, &mut props);
        assert_eq!(props.scale, Some(1.0));

        card_scale(0, 3).apply(1.0, &mut props);
        assert_eq!(props.scale, Some(CARD_SCALE));
    }

    #[test]
    fn stacked_cards_account_for_margins() {
        let offsets = stack_offsets(1000.0, &[500.0, 600.0, 400.0], 40.0);
        assert_eq!(offsets, vec![1040.0, 1580.0, 2220.0]);
    }

    #[test]
    fn pinned_cards_release_when_last_card_is_centred() {
        let heights = [500.0, 600.0, 400.0];
        let offsets = stack_offsets(1000.0, &heights, 40.0);
        let ranges = pinned_ranges(&offsets, &heights, 800.0);

        assert_eq!(ranges.len(), 3);
        assert_eq!(ranges[0].start, 1040.0);
        assert_eq!(ranges[1].start, 1580.0);
        // last card centre (2220 + 200) meets viewport centre (400)
        for range in &ranges {
            assert_eq!(range.end, 2020.0);
        }
        assert!(pinned_ranges(&[], &[], 800.0).is_empty());
    }

    #[test]
    fn text_in_pinned_card_finishes_its_reveal() {
        let settings = AnimationSettings::default();
        let reveal = fade_up(30.0, settings.text_start, settings.text_end);
        let trigger = ScrollTrigger::new(settings.text_start, settings.text_end);
        let viewport_height = 1000.0;
        // card pins at scroll 3000; its text sits 400px down, below the 20% end line
        let (card_top, offset, height) = (3000.0, 400.0, 60.0);
        let scroll_y = 3200.0;

        let natural = pinned_child(card_top, offset, height);
        assert_eq!(natural, ElementGeometry { top: 3400.0, height: 60.0 });
        assert_eq!(trigger.range(natural, viewport_height).progress(scroll_y), 1.0);

        // measuring the stuck box instead stalls two thirds of the way
        let stuck = ElementGeometry { top: scroll_y + offset, height };
        let stalled = trigger.range(stuck, viewport_height).progress(scroll_y);
        assert!((stalled - 2.0 / 3.0).abs() < 1e-9);

        let frame = ScrollFrame {
            scroll_y,
            viewport_height,
            ..ScrollFrame::default()
        };
        let props = reveal.advance(&mut TimelineState::default(), natural, frame, 0.0);
        assert_eq!(props, reveal.settled());
    }

    proptest! {
        #[test]
        fn progress_is_always_in_unit_interval(
            start in -10_000.0f64..10_000.0,
            length in -500.0f64..5_000.0,
            scroll in -20_000.0f64..20_000.0,
        ) {
            let progress = ScrollRange { start, end: start + length }.progress(scroll);
            prop_assert!((0.0..=1.0).contains(&progress));
        }

        #[test]
        fn progress_is_monotonic_in_scroll(
            start in -5_000.0f64..5_000.0,
            length in 1.0f64..5_000.0,
            a in -10_000.0f64..10_000.0,
            b in -10_000.0f64..10_000.0,
        ) {
            let range = ScrollRange { start, end: start + length };
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(range.progress(low) <= range.progress(high));
        }
    }
}
