use sdl2::rect::Point;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::ttf::Font;
use sdl2::video::{Window, WindowContext};
use vecview::Vec2;
use vecview::camera::{Camera, GridLayout, Viewport, format_tick};
use vecview::scene::{
    AXIS_COLOR, BACKGROUND, GRID_COLOR, TICK_TEXT_COLOR, X_TICK_OFFSET, Y_TICK_OFFSET,
};

use crate::items::{draw_text, log_failure, sdl_color, thick_line};

/// Width of the x and y axes in pixels
const AXIS_WIDTH: u8 = 2;

fn point(p: (i32, i32)) -> Point {
    Point::new(p.0, p.1)
}

/// Clears the frame and draws the grid, both axes and the tick labels.
pub fn draw_grid_and_axes(
    canvas: &mut Canvas<Window>,
    texture_creator: &TextureCreator<WindowContext>,
    font: &Font,
    camera: &Camera,
    viewport: Viewport,
    layout: &GridLayout,
) {
    canvas.set_draw_color(sdl_color(BACKGROUND));
    canvas.clear();

    let to_screen =
        |x: f64, y: f64| camera.world_to_screen(viewport, Vec2::new(x as f32, y as f32));
    let (x0, x1) = (layout.min.x as f64, layout.max.x as f64);
    let (y0, y1) = (layout.min.y as f64, layout.max.y as f64);

    canvas.set_draw_color(sdl_color(GRID_COLOR));
    for line in &layout.vertical {
        let p0 = to_screen(line.value, y0);
        let p1 = to_screen(line.value, y1);
        log_failure("grid line", canvas.draw_line(point(p0), point(p1)));
    }
    for line in &layout.horizontal {
        let p0 = to_screen(x0, line.value);
        let p1 = to_screen(x1, line.value);
        log_failure("grid line", canvas.draw_line(point(p0), point(p1)));
    }

    let x_axis = [Vec2::new(layout.min.x, 0.0), Vec2::new(layout.max.x, 0.0)];
    let y_axis = [Vec2::new(0.0, layout.min.y), Vec2::new(0.0, layout.max.y)];
    for (what, [a, b]) in [("x axis", x_axis), ("y axis", y_axis)] {
        let a = camera.world_to_screen_f32(viewport, a);
        let b = camera.world_to_screen_f32(viewport, b);
        let drawn = thick_line(canvas, viewport, a, b, AXIS_WIDTH, AXIS_COLOR);
        log_failure(what, drawn);
    }

    for line in layout.vertical.iter().filter(|l| l.labeled) {
        let p = to_screen(line.value, 0.0);
        let text = format_tick(line.value, layout.step);
        let at = (p.0 + X_TICK_OFFSET.0, p.1 + X_TICK_OFFSET.1);
        log_failure(
            "tick label",
            draw_text(canvas, texture_creator, font, &text, at, TICK_TEXT_COLOR),
        );
    }
    for line in layout.horizontal.iter().filter(|l| l.labeled) {
        let p = to_screen(0.0, line.value);
        let text = format_tick(line.value, layout.step);
        let at = (p.0 + Y_TICK_OFFSET.0, p.1 + Y_TICK_OFFSET.1);
        log_failure(
            "tick label",
            draw_text(canvas, texture_creator, font, &text, at, TICK_TEXT_COLOR),
        );
    }
}
