//! Geometry and text derived from world state on every redraw.

use crate::camera::{Camera, Viewport};
use crate::entries::{Entry, Rgb};
use crate::vector::Vec2;

pub const BACKGROUND: Rgb = Rgb(15, 16, 20);
pub const GRID_COLOR: Rgb = Rgb(40, 42, 48);
pub const AXIS_COLOR: Rgb = Rgb(90, 180, 255);
pub const TICK_TEXT_COLOR: Rgb = Rgb(170, 170, 170);
pub const CAPTION_COLOR: Rgb = Rgb(240, 240, 240);
pub const HUD_COLOR: Rgb = Rgb(200, 200, 200);
/// Colour of vectors placed with the mouse.
pub const PLACED_COLOR: Rgb = Rgb(80, 220, 160);

/// Arrow head length and half-width in pixels.
const HEAD_LENGTH_PX: f32 = 10.0;
const HEAD_WIDTH_PX: f32 = 6.0;

/// Screen offsets for text, relative to the anchor pixel.
pub const CAPTION_OFFSET: (i32, i32) = (8, -14);
pub const X_TICK_OFFSET: (i32, i32) = (2, 2);
pub const Y_TICK_OFFSET: (i32, i32) = (4, -16);
pub const HUD_POSITION: (i32, i32) = (8, 8);

/// World-space end points of the two barbs of an arrow head. Both barbs run
/// from these points to the tip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowHead {
    pub left: Vec2,
    pub right: Vec2,
}

/// Arrow head for the arrow `from → to`, sized in pixels so it looks the same
/// at every zoom level. Arrows too short to have a direction get no head.
pub fn arrow_head(from: Vec2, to: Vec2, camera: &Camera) -> Option<ArrowHead> {
    let v = to - from;
    if v.length2() <= 1e-12 {
        return None;
    }
    let dir = v.normalize();
    let base = to - dir * camera.pixels_to_world(HEAD_LENGTH_PX);
    let side = dir.perp() * camera.pixels_to_world(HEAD_WIDTH_PX);
    Some(ArrowHead {
        left: base + side,
        right: base - side,
    })
}

/// Clips the screen-space segment `p0 → p1` to the viewport grown by `margin`
/// pixels on every side (Liang–Barsky). Returns `None` when no part of the
/// segment is inside.
///
/// Drawing backends with narrow pixel coordinates need the clipped segment:
/// clamping each end point on its own would change the slope.
pub fn clip_segment(p0: Vec2, p1: Vec2, viewport: Viewport, margin: f32) -> Option<(Vec2, Vec2)> {
    let (min_x, min_y) = (-margin, -margin);
    let max_x = viewport.width as f32 + margin;
    let max_y = viewport.height as f32 + margin;
    let d = p1 - p0;

    let mut t0 = 0.0f32;
    let mut t1 = 1.0f32;
    let edges = [
        (-d.x, p0.x - min_x),
        (d.x, max_x - p0.x),
        (-d.y, p0.y - min_y),
        (d.y, max_y - p0.y),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            // parallel to this edge
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            if t > t1 {
                return None;
            }
            t0 = t0.max(t);
        } else {
            if t < t0 {
                return None;
            }
            t1 = t1.min(t);
        }
    }

    let start = if t0 > 0.0 { p0 + d * t0 } else { p0 };
    let end = if t1 < 1.0 { p0 + d * t1 } else { p1 };
    Some((start, end))
}

/// Text drawn next to an arrow tip, e.g. `a  |a|=2.000`.
pub fn caption(entry: &Entry) -> String {
    format!(
        "{label}  |{label}|={len:.3}",
        label = entry.label,
        len = entry.vector.length()
    )
}

/// Status line listing the active preset and the controls.
pub fn hud_line(preset_name: &str, vector_count: usize) -> String {
    format!(
        "Preset: {preset_name}  |  1:Prev  2:Next  |  LMB:Add  RMB:Pan  Wheel:Zoom  R:Reset  Del:Clear  (Vectors: {vector_count})"
    )
}
