//! Diagnostic line output
//!
//! Casts can be visualised by installing a [`DebugDraw`] sink on the
//! controller. Drawing never influences resolution.

use void_math::Vec2;

/// Colors used for cast diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebugColor {
    /// Axis-aligned cast, start and end
    Red,
    /// Axis-aligned cast, impact
    Cyan,
    /// Rotated cast, start and end
    Yellow,
    /// Rotated cast, impact
    Green,
    /// Slope probe rays
    Magenta,
}

/// Receiver for debug lines
pub trait DebugDraw {
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: DebugColor);

    /// Draw a ray of `length` from `origin` along `direction`
    fn draw_ray(&mut self, origin: Vec2, direction: Vec2, length: f32, color: DebugColor) {
        self.draw_line(origin, origin + direction * length, color);
    }
}

/// Draw the outline of a rectangle given its top-left corner
pub fn draw_rect(sink: &mut dyn DebugDraw, top_left: Vec2, size: Vec2, color: DebugColor) {
    let top_right = Vec2::new(top_left.x + size.x, top_left.y);
    let bottom_left = Vec2::new(top_left.x, top_left.y - size.y);
    let bottom_right = Vec2::new(top_left.x + size.x, top_left.y - size.y);

    sink.draw_line(top_left, top_right, color);
    sink.draw_line(top_left, bottom_left, color);
    sink.draw_line(bottom_left, bottom_right, color);
    sink.draw_line(bottom_right, top_right, color);
}

/// A recorded debug line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugLine {
    pub from: Vec2,
    pub to: Vec2,
    pub color: DebugColor,
}

/// Sink that keeps every line it receives
#[derive(Debug, Default)]
pub struct LineRecorder {
    pub lines: Vec<DebugLine>,
}

impl LineRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines of a single color
    pub fn with_color(&self, color: DebugColor) -> impl Iterator<Item = &DebugLine> {
        self.lines.iter().filter(move |l| l.color == color)
    }
}

impl DebugDraw for LineRecorder {
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: DebugColor) {
        self.lines.push(DebugLine { from, to, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_rect_emits_four_edges() {
        let mut recorder = LineRecorder::new();
        draw_rect(&mut recorder, Vec2::new(-1.0, 1.0), Vec2::new(2.0, 2.0), DebugColor::Red);

        assert_eq!(recorder.lines.len(), 4);
        assert!(recorder
            .lines
            .iter()
            .all(|l| l.color == DebugColor::Red));
        assert_eq!(recorder.lines[2].from, Vec2::new(-1.0, -1.0));
        assert_eq!(recorder.lines[2].to, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_draw_ray() {
        let mut recorder = LineRecorder::new();
        recorder.draw_ray(Vec2::ZERO, Vec2::RIGHT, 0.5, DebugColor::Magenta);

        assert_eq!(recorder.with_color(DebugColor::Magenta).count(), 1);
        assert_eq!(recorder.lines[0].to, Vec2::new(0.5, 0.0));
    }
}
