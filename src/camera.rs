//! Camera and the mapping between world space (y up) and screen space (y down).

use crate::vector::Vec2;

pub const DEFAULT_SCALE: f32 = 80.0;
pub const MIN_SCALE: f32 = 10.0;
pub const MAX_SCALE: f32 = 2000.0;
/// Scale multiplier applied per wheel notch.
pub const ZOOM_STEP: f32 = 1.1;
/// Preferred on-screen spacing between grid lines, in pixels.
pub const GRID_TARGET_PX: f64 = 80.0;

/// Size of the drawable client area in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// Pixels per world unit.
    pub scale: f32,
    pub pan_x: f32,
    pub pan_y: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }
}

impl Camera {
    /// Maps a world point to a pixel. Coordinates are truncated toward zero.
    pub fn world_to_screen(&self, viewport: Viewport, p: Vec2) -> (i32, i32) {
        let s = self.world_to_screen_f32(viewport, p);
        (s.x as i32, s.y as i32)
    }

    /// Screen position of a world point before truncation to whole pixels.
    pub fn world_to_screen_f32(&self, viewport: Viewport, p: Vec2) -> Vec2 {
        Vec2::new(
            viewport.width as f32 * 0.5 + self.pan_x + p.x * self.scale,
            viewport.height as f32 * 0.5 + self.pan_y - p.y * self.scale,
        )
    }

    pub fn screen_to_world(&self, viewport: Viewport, sx: i32, sy: i32) -> Vec2 {
        let x = (sx as f32 - viewport.width as f32 * 0.5 - self.pan_x) / self.scale;
        let y = (viewport.height as f32 * 0.5 + self.pan_y - sy as f32) / self.scale;
        Vec2::new(x, y)
    }

    pub fn pan(&mut self, dx: i32, dy: i32) {
        self.pan_x += dx as f32;
        self.pan_y += dy as f32;
    }

    /// Zooms one wheel notch in (`wheel_delta > 0`) or out, keeping the world
    /// point under the cursor fixed on screen.
    pub fn zoom_at(&mut self, viewport: Viewport, wheel_delta: i32, mx: i32, my: i32) {
        let anchor = self.screen_to_world(viewport, mx, my);
        let factor = if wheel_delta > 0 { ZOOM_STEP } else { 1.0 / ZOOM_STEP };
        self.scale = (self.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
        let (sx, sy) = self.world_to_screen(viewport, anchor);
        self.pan_x += (mx - sx) as f32;
        self.pan_y += (my - sy) as f32;
    }

    pub fn reset(&mut self) {
        *self = Camera::default();
    }

    /// Converts a length in pixels to world units at the current scale.
    pub fn pixels_to_world(&self, px: f32) -> f32 {
        px / self.scale
    }
}

/// Picks a grid spacing of 1, 2, 5 or 10 times a power of ten near `target`.
///
/// Returns 1.0 for non-positive input.
pub fn nice_step_for_scale(target: f64) -> f64 {
    if target <= 0.0 {
        return 1.0;
    }
    let base = 10f64.powf(target.log10().floor());
    let frac = target / base;
    let factor = if frac < 1.5 {
        1.0
    } else if frac < 3.0 {
        2.0
    } else if frac < 7.0 {
        5.0
    } else {
        10.0
    };
    factor * base
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    /// World coordinate of the line (x for vertical lines, y for horizontal ones).
    pub value: f64,
    pub labeled: bool,
}

/// Grid lines covering the visible part of the world.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLayout {
    pub step: f64,
    pub min: Vec2,
    pub max: Vec2,
    pub vertical: Vec<GridLine>,
    pub horizontal: Vec<GridLine>,
}

/// Every n-th grid line carries a tick label.
const LABEL_EVERY: i64 = 2;

impl GridLayout {
    pub fn compute(camera: &Camera, viewport: Viewport) -> GridLayout {
        let top_left = camera.screen_to_world(viewport, 0, 0);
        let bottom_right = camera.screen_to_world(viewport, viewport.width, viewport.height);
        let min = top_left.min(bottom_right);
        let max = top_left.max(bottom_right);

        let step = nice_step_for_scale(GRID_TARGET_PX / camera.scale as f64);
        GridLayout {
            step,
            min,
            max,
            vertical: lines_between(min.x as f64, max.x as f64, step),
            horizontal: lines_between(min.y as f64, max.y as f64, step),
        }
    }
}

fn lines_between(lo: f64, hi: f64, step: f64) -> Vec<GridLine> {
    let first = (lo / step).floor() as i64;
    let mut lines = Vec::new();
    for i in 0.. {
        let value = (first + i) as f64 * step;
        if value > hi + 1e-9 {
            break;
        }
        lines.push(GridLine {
            value,
            labeled: i % LABEL_EVERY == 0,
        });
    }
    lines
}

/// Formats a tick value with three significant digits, like C's `%.3g`:
/// trailing zeros are trimmed and scientific notation carries a signed,
/// two-digit exponent (`1.5e+03`).
///
/// Values within a billionth of a grid step from zero print as `0`.
pub fn format_tick(value: f64, step: f64) -> String {
    if value.abs() <= step.abs() * 1e-9 {
        return "0".to_string();
    }
    let sci = format!("{:.2e}", value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    if !(-4..3).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", trim_zeros(mantissa), sign, exp.abs());
    }
    let decimals = (2 - exp) as usize;
    trim_zeros(&format!("{:.*}", decimals, value)).to_string()
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
