use crate::config::{BASE_SCALE, CURSOR_SMOOTHING, HALO_TRAIL, HOVER_SCALE, PRESS_SCALE};

/// Interpolated state of the cursor follower and its halo.
///
/// The target is written by pointer events; the current position is owned by
/// the frame loop and eased toward the target each frame. Scale is a
/// last-event-wins value: hover and press both just overwrite it.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorState {
    pub target_x: f64,
    pub target_y: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub visible: bool,
}

impl CursorState {
    /// Starts centered on the given point (typically the viewport center) so
    /// the follower does not fly in from the origin on the first move.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            target_x: x,
            target_y: y,
            x,
            y,
            scale: BASE_SCALE,
            visible: false,
        }
    }

    pub fn point_to(&mut self, x: f64, y: f64) {
        self.target_x = x;
        self.target_y = y;
    }

    /// One frame of exponential easing toward the target.
    pub fn step(&mut self) {
        self.x += (self.target_x - self.x) * CURSOR_SMOOTHING;
        self.y += (self.target_y - self.y) * CURSOR_SMOOTHING;
    }

    pub fn hover_enter(&mut self) {
        self.scale = HOVER_SCALE;
    }

    pub fn hover_exit(&mut self) {
        self.scale = BASE_SCALE;
    }

    pub fn press(&mut self) {
        self.scale = PRESS_SCALE;
    }

    pub fn release(&mut self) {
        self.scale = BASE_SCALE;
    }

    /// The halo trails scale changes instead of mirroring them.
    pub fn halo_scale(&self) -> f64 {
        1.0 + (self.scale - 1.0) * HALO_TRAIL
    }

    pub fn marker_transform(&self) -> String {
        transform(self.x, self.y, self.scale)
    }

    pub fn halo_transform(&self) -> String {
        transform(self.x, self.y, self.halo_scale())
    }
}

fn transform(x: f64, y: f64, scale: f64) -> String {
    format!("translate3d({x}px, {y}px, 0) translate(-50%, -50%) scale({scale})")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance(c: &CursorState) -> f64 {
        ((c.target_x - c.x).powi(2) + (c.target_y - c.y).powi(2)).sqrt()
    }

    #[test]
    fn converges_toward_static_target_without_overshoot() {
        let mut c = CursorState::new(0.0, 0.0);
        c.point_to(200.0, -120.0);
        let mut prev = distance(&c);
        for _ in 0..200 {
            c.step();
            let d = distance(&c);
            assert!(d < prev, "distance must strictly decrease while far away");
            // never passes the target on either axis
            assert!(c.x <= 200.0 && c.y >= -120.0);
            if d < 1e-9 {
                break;
            }
            prev = d;
        }
        assert!(distance(&c) < 1.0);
    }

    #[test]
    fn step_is_a_fixed_fraction_of_remaining_distance() {
        let mut c = CursorState::new(0.0, 0.0);
        c.point_to(100.0, 0.0);
        c.step();
        assert!((c.x - 18.0).abs() < 1e-12);
        c.step();
        assert!((c.x - (18.0 + 82.0 * 0.18)).abs() < 1e-12);
    }

    #[test]
    fn scale_is_last_event_wins() {
        let mut c = CursorState::new(0.0, 0.0);
        c.hover_enter();
        assert_eq!(c.scale, HOVER_SCALE);
        c.press();
        assert_eq!(c.scale, PRESS_SCALE);
        c.release();
        assert_eq!(c.scale, BASE_SCALE);
        c.hover_enter();
        c.hover_exit();
        assert_eq!(c.scale, BASE_SCALE);
    }

    #[test]
    fn halo_scale_is_damped() {
        let mut c = CursorState::new(0.0, 0.0);
        c.hover_enter();
        assert!((c.halo_scale() - (1.0 + 0.8 * 0.6)).abs() < 1e-12);
        c.press();
        assert!(c.halo_scale() > c.scale, "halo lags the shrink on press");
    }

    #[test]
    fn transforms_embed_current_position() {
        let mut c = CursorState::new(10.0, 20.0);
        c.point_to(10.0, 20.0);
        c.step();
        assert!(c.marker_transform().contains("translate3d(10px, 20px, 0)"));
        assert!(c.halo_transform().contains("scale(1)"));
    }
}
