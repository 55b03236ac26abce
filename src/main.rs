//! Interactive viewer for 2D vectors.
//!
//! Vectors are drawn as labelled arrows from the origin on a Cartesian grid
//! that can be panned and zoomed. Clicking places new vectors; the number keys
//! cycle through demo scenes built with the vector math library.

mod grid;
mod items;

use crate::items::{draw_text, log_failure};
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::mouse::{MouseButton, MouseWheelDirection};
use sdl2::render::Canvas;
use sdl2::ttf::{Font, FontStyle, Sdl2TtfContext};
use sdl2::video::Window;
use std::process::ExitCode;
use std::time::Duration;
use vecview::Vec2;
use vecview::camera::Viewport;
use vecview::config::ViewerConfig;
use vecview::error::{Result, ViewerError};
use vecview::scene::{HUD_COLOR, HUD_POSITION};
use vecview::viewer::{Input, Key, Viewer};

/// Target frame rate of the event loop
const FPS: u32 = 60;

/// Fonts loaded once at startup.
struct Fonts<'ttf> {
    /// Tick labels and the status line
    regular: Font<'ttf, 'static>,
    /// Arrow captions
    bold: Font<'ttf, 'static>,
}

impl<'ttf> Fonts<'ttf> {
    fn load(ttf_context: &'ttf Sdl2TtfContext, config: &ViewerConfig) -> Result<Fonts<'ttf>> {
        let load = || {
            ttf_context
                .load_font(&config.font_path, config.font_size)
                .map_err(|e| ViewerError::Font(format!("{}: {}", config.font_path.display(), e)))
        };
        let regular = load()?;
        let mut bold = load()?;
        bold.set_style(FontStyle::BOLD);
        Ok(Fonts { regular, bold })
    }
}

/// Translates an SDL event into viewer input.
fn to_input(event: &Event) -> Option<Input> {
    match *event {
        Event::MouseButtonDown {
            mouse_btn: MouseButton::Left,
            x,
            y,
            ..
        } => Some(Input::LeftDown { x, y }),
        Event::MouseButtonDown {
            mouse_btn: MouseButton::Right,
            x,
            y,
            ..
        } => Some(Input::RightDown { x, y }),
        Event::MouseButtonUp {
            mouse_btn: MouseButton::Right,
            ..
        } => Some(Input::RightUp),
        Event::MouseMotion { x, y, .. } => Some(Input::Motion { x, y }),
        Event::MouseWheel {
            y,
            direction,
            mouse_x,
            mouse_y,
            ..
        } => {
            let delta = if direction == MouseWheelDirection::Flipped {
                -y
            } else {
                y
            };
            Some(Input::Wheel {
                delta,
                x: mouse_x,
                y: mouse_y,
            })
        }
        Event::KeyDown {
            keycode: Some(keycode),
            ..
        } => {
            let key = match keycode {
                Keycode::Num1 | Keycode::Kp1 => Key::PrevPreset,
                Keycode::Num2 | Keycode::Kp2 => Key::NextPreset,
                Keycode::R => Key::ResetCamera,
                Keycode::Delete => Key::Clear,
                _ => return None,
            };
            Some(Input::Key(key))
        }
        Event::Window {
            win_event: WindowEvent::SizeChanged(width, height),
            ..
        } => Some(Input::Resize { width, height }),
        Event::Window {
            win_event: WindowEvent::Exposed,
            ..
        } => Some(Input::Repaint),
        _ => None,
    }
}

/// Redraws the whole frame from the viewer state.
///
/// The texture creator and every text texture live only for this call.
fn draw_frame(canvas: &mut Canvas<Window>, fonts: &Fonts, viewer: &Viewer) {
    let texture_creator = canvas.texture_creator();
    let camera = viewer.camera();
    let viewport = viewer.viewport();

    let layout = viewer.grid();
    grid::draw_grid_and_axes(
        canvas,
        &texture_creator,
        &fonts.regular,
        camera,
        viewport,
        &layout,
    );
    for entry in viewer.entries() {
        items::draw_arrow_with_label(
            canvas,
            &texture_creator,
            &fonts.bold,
            camera,
            viewport,
            Vec2::ZERO,
            entry,
        );
    }
    let hud = viewer.hud_line();
    let drawn = draw_text(
        canvas,
        &texture_creator,
        &fonts.regular,
        &hud,
        HUD_POSITION,
        HUD_COLOR,
    );
    log_failure("status line", drawn);
    canvas.present();
}

/// Sets up SDL2, then runs the event loop until the window is closed or
/// Escape is pressed.
fn run(config: ViewerConfig) -> Result<()> {
    let sdl_context = sdl2::init().map_err(|e| ViewerError::SdlInit(e.to_string()))?;
    let video_subsystem = sdl_context
        .video()
        .map_err(|e| ViewerError::Video(e.to_string()))?;
    let ttf_context = sdl2::ttf::init().map_err(|e| ViewerError::Ttf(e.to_string()))?;

    let window = video_subsystem
        .window(&config.title, config.width, config.height)
        .position_centered()
        .resizable()
        .build()
        .map_err(|e| ViewerError::Window(e.to_string()))?;
    let fonts = Fonts::load(&ttf_context, &config)?;
    let mut canvas = window
        .into_canvas()
        .build()
        .map_err(|e| ViewerError::Canvas(e.to_string()))?;
    let mut event_pump = sdl_context
        .event_pump()
        .map_err(|e| ViewerError::EventPump(e.to_string()))?;

    let mut viewer = Viewer::new(Viewport::new(config.width as i32, config.height as i32));
    let mut dirty = true;
    log::info!(
        "viewer ready ({}x{}, font {})",
        config.width,
        config.height,
        config.font_path.display()
    );

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                event => {
                    if let Some(input) = to_input(&event) {
                        dirty |= viewer.handle(input);
                    }
                }
            }
        }

        // Only repaint after something changed
        if dirty {
            draw_frame(&mut canvas, &fonts, &viewer);
            dirty = false;
        }
        ::std::thread::sleep(Duration::new(0, 1_000_000_000u32 / FPS));
    }
    log::info!("viewer closed");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ViewerConfig::from_env();
    log::debug!("{:?}", config);
    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
