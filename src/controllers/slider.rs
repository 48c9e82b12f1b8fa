//! Drag state for the before/after comparison slider.

use super::geom::{track_fraction, HBounds};

/// The divider never reaches the true edges so the BEFORE/AFTER corner labels
/// stay visible.
const MIN_POSITION: f64 = 5.0;
const MAX_POSITION: f64 = 95.0;

/// Position of the comparison divider plus the active-drag flag.
///
/// Mouse moves only take effect between `begin_drag` and `end_drag`; touch
/// moves always take effect. That asymmetry matches the shipped behavior of
/// the page and is deliberate until product review says otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderState {
    position: f64,
    dragging: bool,
}

impl Default for SliderState {
    fn default() -> Self {
        Self { position: 50.0, dragging: false }
    }
}

impl SliderState {
    /// Divider position as a percentage in `[5, 95]`.
    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// Ends the drag session. Also called when the pointer leaves the
    /// region, so a drag never outlives the interactive area.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Moves the divider to follow a mouse pointer. No-op unless a drag is
    /// active or the track has zero width.
    pub fn update_from_pointer(&mut self, client_x: f64, bounds: HBounds) {
        if !self.dragging {
            return;
        }
        self.track(client_x, bounds);
    }

    /// Moves the divider to follow a touch point. Touch moves are not gated
    /// on the drag flag.
    pub fn update_from_touch(&mut self, touch_x: f64, bounds: HBounds) {
        self.track(touch_x, bounds);
    }

    fn track(&mut self, client_x: f64, bounds: HBounds) {
        if let Some(fraction) = track_fraction(client_x, bounds) {
            self.position = (fraction * 100.0).clamp(MIN_POSITION, MAX_POSITION);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: HBounds = HBounds { left: 100.0, width: 400.0 };

    fn dragging() -> SliderState {
        let mut state = SliderState::default();
        state.begin_drag();
        state
    }

    #[test]
    fn starts_at_midpoint_not_dragging() {
        let state = SliderState::default();
        assert_eq!(state.position(), 50.0);
        assert!(!state.is_dragging());
    }

    #[test]
    fn pointer_maps_to_track_percentage() {
        let mut state = dragging();
        // 140 - 100 = 40px into a 400px track -> 10%.
        state.update_from_pointer(140.0, BOUNDS);
        assert_eq!(state.position(), 10.0);
    }

    #[test]
    fn pointer_left_of_track_clamps_to_lower_bound() {
        let mut state = dragging();
        state.update_from_pointer(50.0, BOUNDS);
        assert_eq!(state.position(), 5.0);
    }

    #[test]
    fn pointer_right_of_track_clamps_to_upper_bound() {
        let mut state = dragging();
        state.update_from_pointer(10_000.0, BOUNDS);
        assert_eq!(state.position(), 95.0);
    }

    #[test]
    fn position_always_within_bounds_while_dragging() {
        let mut state = dragging();
        for client_x in [-1e9, -500.0, 0.0, 99.9, 100.0, 300.0, 500.0, 501.0, 1e9] {
            state.update_from_pointer(client_x, BOUNDS);
            assert!((5.0..=95.0).contains(&state.position()), "x={client_x}");
        }
    }

    #[test]
    fn repeated_identical_input_is_idempotent() {
        let mut state = dragging();
        state.update_from_pointer(300.0, BOUNDS);
        let first = state.position();
        state.update_from_pointer(300.0, BOUNDS);
        assert_eq!(state.position(), first);
    }

    #[test]
    fn pointer_ignored_when_not_dragging() {
        let mut state = SliderState::default();
        state.update_from_pointer(140.0, BOUNDS);
        assert_eq!(state.position(), 50.0);
    }

    #[test]
    fn end_drag_stops_tracking() {
        let mut state = dragging();
        state.update_from_pointer(140.0, BOUNDS);
        state.end_drag();
        state.update_from_pointer(400.0, BOUNDS);
        assert_eq!(state.position(), 10.0);
    }

    #[test]
    fn touch_updates_without_drag_flag() {
        let mut state = SliderState::default();
        state.update_from_touch(140.0, BOUNDS);
        assert_eq!(state.position(), 10.0);
        assert!(!state.is_dragging());
    }

    #[test]
    fn zero_width_track_holds_previous_position() {
        let mut state = dragging();
        state.update_from_pointer(300.0, BOUNDS);
        let before = state.position();
        state.update_from_pointer(300.0, HBounds { left: 0.0, width: 0.0 });
        assert_eq!(state.position(), before);
        assert!(!state.position().is_nan());
    }
}
