use serde::Deserialize;

const DEFAULT_AUTOPLAY_MS: u32 = 4_500;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    /// `None` disables autoplay.
    pub autoplay_ms: Option<u32>,
    pub looped: bool,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            autoplay_ms: Some(DEFAULT_AUTOPLAY_MS),
            looped: true,
        }
    }
}

/// Which slide a carousel shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    looped: bool,
}

impl Carousel {
    pub fn new(len: usize, looped: bool) -> Self {
        Self {
            len,
            index: 0,
            looped,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(self) -> Self {
        let index = if self.index + 1 < self.len {
            self.index + 1
        } else if self.looped {
            0
        } else {
            self.index
        };
        Self { index, ..self }
    }

    pub fn prev(self) -> Self {
        let index = if self.index > 0 {
            self.index - 1
        } else if self.looped {
            self.len.saturating_sub(1)
        } else {
            0
        };
        Self { index, ..self }
    }

    /// Jumps to `index`, clamped to the last slide.
    pub fn go_to(self, index: usize) -> Self {
        Self {
            index: index.min(self.len.saturating_sub(1)),
            ..self
        }
    }

    pub fn can_go_next(&self) -> bool {
        self.looped || self.index + 1 < self.len
    }

    pub fn can_go_prev(&self) -> bool {
        self.looped || self.index > 0
    }

    /// One flag per pagination bullet, set on the current slide.
    pub fn bullets(&self) -> Vec<bool> {
        (0..self.len).map(|slide| slide == self.index).collect()
    }

    /// Horizontal track offset in percent of one slide width.
    pub fn offset_percent(&self) -> f64 {
        -(self.index as f64) * 100.0
    }
}
