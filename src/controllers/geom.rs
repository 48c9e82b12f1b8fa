//! Horizontal track geometry shared by drag-driven widgets.
//!
//! Kept free of DOM types so the math stays testable off-wasm; the view layer
//! builds an [`HBounds`] from a `web_sys::DomRect` at the event site.

/// Horizontal extent of an interactive region, in the same coordinate space
/// as pointer `clientX` values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HBounds {
    pub left: f64,
    pub width: f64,
}

/// Maps an absolute x coordinate to a fraction in `[0, 1]` along the track.
///
/// Returns `None` when the track has no measurable width (detached or
/// zero-sized element), so callers can hold their previous state instead of
/// propagating a NaN.
pub fn track_fraction(client_x: f64, bounds: HBounds) -> Option<f64> {
    if bounds.width <= 0.0 {
        return None;
    }
    let x = (client_x - bounds.left).clamp(0.0, bounds.width);
    Some(x / bounds.width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_inside_track() {
        let bounds = HBounds { left: 100.0, width: 400.0 };
        assert_eq!(track_fraction(140.0, bounds), Some(0.1));
    }

    #[test]
    fn fraction_clamps_to_edges() {
        let bounds = HBounds { left: 100.0, width: 400.0 };
        assert_eq!(track_fraction(50.0, bounds), Some(0.0));
        assert_eq!(track_fraction(900.0, bounds), Some(1.0));
    }

    #[test]
    fn zero_width_yields_none() {
        let bounds = HBounds { left: 0.0, width: 0.0 };
        assert_eq!(track_fraction(42.0, bounds), None);
        let negative = HBounds { left: 0.0, width: -3.0 };
        assert_eq!(track_fraction(42.0, negative), None);
    }
}
