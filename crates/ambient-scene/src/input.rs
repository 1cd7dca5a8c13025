//! Pointer tracking.

use crate::builder::Viewport;

/// Latest pointer position in normalized device terms.
///
/// Both axes span [-1, 1]; +y is up. The centre of the window is (0, 0).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

/// Records the pointer position from raw pointer-move events.
///
/// Pure state: it never touches the scene. The animation reads
/// [`InputTracker::pointer`] once per frame.
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    state: PointerState,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a pointer-move event against the window size at event time.
    ///
    /// A zero-sized window leaves the state untouched.
    pub fn on_pointer_move(&mut self, event_x: f64, event_y: f64, viewport: Viewport) {
        if viewport.is_empty() {
            return;
        }
        let x = (event_x / viewport.width as f64) * 2.0 - 1.0;
        let y = -((event_y / viewport.height as f64) * 2.0 - 1.0);
        self.state = PointerState {
            x: x as f32,
            y: y as f32,
        };
    }

    pub fn pointer(&self) -> PointerState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VP: Viewport = Viewport {
        width: 800,
        height: 600,
    };

    #[test]
    fn starts_centred() {
        assert_eq!(InputTracker::new().pointer(), PointerState::default());
    }

    #[test]
    fn corners_map_to_unit_square() {
        let mut t = InputTracker::new();
        t.on_pointer_move(0.0, 0.0, VP);
        assert_eq!(t.pointer(), PointerState { x: -1.0, y: 1.0 });
        t.on_pointer_move(800.0, 600.0, VP);
        assert_eq!(t.pointer(), PointerState { x: 1.0, y: -1.0 });
    }

    #[test]
    fn centre_maps_to_zero() {
        let mut t = InputTracker::new();
        t.on_pointer_move(400.0, 300.0, VP);
        assert_eq!(t.pointer(), PointerState { x: 0.0, y: 0.0 });
    }

    #[test]
    fn up_is_positive() {
        let mut t = InputTracker::new();
        t.on_pointer_move(400.0, 150.0, VP);
        assert!((t.pointer().y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn uses_window_size_at_event_time() {
        let mut t = InputTracker::new();
        t.on_pointer_move(400.0, 300.0, VP);
        assert_eq!(t.pointer().x, 0.0);
        // Same raw coordinates after the window doubled in size.
        t.on_pointer_move(
            400.0,
            300.0,
            Viewport {
                width: 1600,
                height: 1200,
            },
        );
        assert!((t.pointer().x - -0.5).abs() < 1e-6);
        assert!((t.pointer().y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn zero_sized_window_keeps_last_state() {
        let mut t = InputTracker::new();
        t.on_pointer_move(800.0, 0.0, VP);
        t.on_pointer_move(10.0, 10.0, Viewport { width: 0, height: 600 });
        assert_eq!(t.pointer(), PointerState { x: 1.0, y: 1.0 });
    }
}
