use std::fmt::Display;

use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, RenderTarget, TextureCreator};
use sdl2::ttf::Font;
use sdl2::video::{Window, WindowContext};
use vecview::Vec2;
use vecview::camera::{Camera, Viewport};
use vecview::entries::{Entry, Rgb};
use vecview::error::{Result, ViewerError};
use vecview::scene::{self, CAPTION_COLOR, CAPTION_OFFSET};

/// Width of arrow shafts and barbs in pixels
const ARROW_WIDTH: u8 = 2;

pub fn sdl_color(rgb: Rgb) -> Color {
    Color::RGB(rgb.0, rgb.1, rgb.2)
}

/// gfx primitives read the colour channels in reverse order.
pub fn to_abgr(color: Color) -> Color {
    Color::RGBA(color.a, color.b, color.g, color.r)
}

/// gfx primitives take i16 pixel coordinates.
fn gfx_px(v: f32) -> i16 {
    v.round().clamp(i16::MIN as f32, i16::MAX as f32) as i16
}

/// Logs a failed draw call and carries on with the rest of the frame.
pub fn log_failure<E: Display>(what: &str, result: std::result::Result<(), E>) {
    if let Err(e) = result {
        log::warn!("skipped {}: {}", what, e);
    }
}

/// Draws the visible part of the screen-space segment `p0 → p1`.
pub fn thick_line<T: RenderTarget>(
    canvas: &mut Canvas<T>,
    viewport: Viewport,
    p0: Vec2,
    p1: Vec2,
    width: u8,
    color: Rgb,
) -> std::result::Result<(), String> {
    let Some((p0, p1)) = scene::clip_segment(p0, p1, viewport, width as f32) else {
        return Ok(());
    };
    canvas.thick_line(
        gfx_px(p0.x),
        gfx_px(p0.y),
        gfx_px(p1.x),
        gfx_px(p1.y),
        width,
        to_abgr(sdl_color(color)),
    )
}

/// Renders `text` with its top-left corner at `(x, y)`.
pub fn draw_text(
    canvas: &mut Canvas<Window>,
    texture_creator: &TextureCreator<WindowContext>,
    font: &Font,
    text: &str,
    (x, y): (i32, i32),
    color: Rgb,
) -> Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    let surface = font
        .render(text)
        .blended(sdl_color(color))
        .map_err(|e| ViewerError::Render(e.to_string()))?;
    let texture = texture_creator
        .create_texture_from_surface(&surface)
        .map_err(|e| ViewerError::Render(e.to_string()))?;
    let query = texture.query();
    canvas
        .copy(&texture, None, Some(Rect::new(x, y, query.width, query.height)))
        .map_err(ViewerError::Render)
}

/// Draws the arrow `from → entry.vector` with its head and a caption holding
/// the label and length.
pub fn draw_arrow_with_label(
    canvas: &mut Canvas<Window>,
    texture_creator: &TextureCreator<WindowContext>,
    font: &Font,
    camera: &Camera,
    viewport: Viewport,
    from: Vec2,
    entry: &Entry,
) {
    let tail = camera.world_to_screen_f32(viewport, from);
    let tip = camera.world_to_screen_f32(viewport, entry.vector);
    log_failure(
        "arrow shaft",
        thick_line(canvas, viewport, tail, tip, ARROW_WIDTH, entry.color),
    );

    if let Some(head) = scene::arrow_head(from, entry.vector, camera) {
        for barb in [head.left, head.right] {
            let p = camera.world_to_screen_f32(viewport, barb);
            log_failure(
                "arrow head",
                thick_line(canvas, viewport, p, tip, ARROW_WIDTH, entry.color),
            );
        }
    }

    let (tx, ty) = camera.world_to_screen(viewport, entry.vector);
    let at = (tx + CAPTION_OFFSET.0, ty + CAPTION_OFFSET.1);
    log_failure(
        "caption",
        draw_text(
            canvas,
            texture_creator,
            font,
            &scene::caption(entry),
            at,
            CAPTION_COLOR,
        ),
    );
}
