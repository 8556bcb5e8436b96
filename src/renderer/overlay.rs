//! Status text layout
//!
//! Text lives in a clip-like space where Y spans [-1, 1] and X spans
//! [-aspect, aspect]; the projection squeezes X back into [-1, 1].

use glam::{Mat4, Vec3, Vec4};

use super::colors;
use crate::sim::Outcome;

/// Line height in overlay units
pub const TEXT_HEIGHT: f32 = 0.09;

/// One line of text for the host's line renderer
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: &'static str,
    /// Bottom-left corner of the first glyph
    pub anchor: Vec3,
    /// Glyph advance direction and scale
    pub x_basis: Vec3,
    /// Glyph up direction and scale
    pub y_basis: Vec3,
    pub color: [u8; 4],
}

/// Projection that undoes the aspect stretch of overlay space
pub fn overlay_projection(aspect: f32) -> Mat4 {
    Mat4::from_diagonal(Vec4::new(1.0 / aspect, 1.0, 1.0, 1.0))
}

/// Bottom-left status line for a decided outcome
pub fn status_line(outcome: Outcome, aspect: f32) -> Option<TextLine> {
    let text = outcome.message()?;
    let h = TEXT_HEIGHT;
    Some(TextLine {
        text,
        anchor: Vec3::new(-aspect + 0.1 * h, -1.0 + 0.1 * h, 0.0),
        x_basis: Vec3::new(h, 0.0, 0.0),
        y_basis: Vec3::new(0.0, h, 0.0),
        color: colors::STATUS_TEXT,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_line_while_playing() {
        assert!(status_line(Outcome::Playing, 1.5).is_none());
    }

    #[test]
    fn test_line_anchored_bottom_left() {
        let line = status_line(Outcome::Lost, 16.0 / 9.0).unwrap();
        assert_eq!(line.text, "You were caught... Game over!");
        assert!((line.anchor.x - (-16.0 / 9.0 + 0.009)).abs() < 1e-6);
        assert!((line.anchor.y - (-0.991)).abs() < 1e-6);
        assert_eq!(line.x_basis, Vec3::new(TEXT_HEIGHT, 0.0, 0.0));
        assert_eq!(line.y_basis, Vec3::new(0.0, TEXT_HEIGHT, 0.0));
    }

    #[test]
    fn test_projection_maps_left_edge_to_clip() {
        let aspect = 2.0;
        let p = overlay_projection(aspect);
        let left = p.transform_point3(Vec3::new(-aspect, 0.0, 0.0));
        assert!((left.x + 1.0).abs() < 1e-6);
    }
}
