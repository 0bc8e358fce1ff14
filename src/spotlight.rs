pub const SPOTLIGHT_RADIUS: f64 = 200.0;

/// Pointer position relative to the masked element's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

pub fn relative_pointer(client_x: i32, client_y: i32, left: f64, top: f64) -> Pointer {
    Pointer {
        x: f64::from(client_x) - left,
        y: f64::from(client_y) - top,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaskMode {
    /// Transparent under the pointer, opaque elsewhere.
    Cover,
    /// Opaque under the pointer, fading out with distance.
    Reveal,
}

impl MaskMode {
    fn stops(self) -> (&'static str, &'static str) {
        const CLEAR: &str = "rgba(0,0,0,0)";
        const SOLID: &str = "rgba(0,0,0,1)";

        match self {
            Self::Cover => (CLEAR, SOLID),
            Self::Reveal => (SOLID, CLEAR),
        }
    }
}

pub fn mask_gradient(pointer: Pointer, radius: f64, mode: MaskMode) -> String {
    let (inner, outer) = mode.stops();
    format!(
        "radial-gradient(circle {radius:.0}px at {:.1}px {:.1}px, {inner} 0%, {outer} 100%)",
        pointer.x, pointer.y
    )
}

/// Inline style applying the gradient as both standard and WebKit mask.
pub fn mask_style(pointer: Pointer, radius: f64, mode: MaskMode) -> String {
    let gradient = mask_gradient(pointer, radius, mode);
    format!("mask: {gradient}; -webkit-mask: {gradient};")
}
