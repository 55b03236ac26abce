//! Application state and the single entry point for input events.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::camera::{Camera, GridLayout, Viewport};
use crate::entries::EntryList;
use crate::presets::{Preset, PresetCycle};
use crate::scene::{self, PLACED_COLOR};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    PrevPreset,
    NextPreset,
    ResetCamera,
    Clear,
}

/// Toolkit-independent input, in client pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    LeftDown { x: i32, y: i32 },
    RightDown { x: i32, y: i32 },
    RightUp,
    Motion { x: i32, y: i32 },
    Wheel { delta: i32, x: i32, y: i32 },
    Key(Key),
    Resize { width: i32, height: i32 },
    /// The window contents were lost, e.g. after being uncovered.
    Repaint,
}

pub struct Viewer {
    camera: Camera,
    viewport: Viewport,
    entries: EntryList,
    presets: PresetCycle,
    drag_from: Option<(i32, i32)>,
    rng: StdRng,
}

impl Viewer {
    /// Creates the viewer with the first preset applied.
    pub fn new(viewport: Viewport) -> Viewer {
        Viewer::with_rng(viewport, StdRng::from_os_rng())
    }

    pub fn with_rng(viewport: Viewport, rng: StdRng) -> Viewer {
        let mut viewer = Viewer {
            camera: Camera::default(),
            viewport,
            entries: EntryList::new(),
            presets: PresetCycle::default(),
            drag_from: None,
            rng,
        };
        viewer.apply_preset(0);
        viewer
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn entries(&self) -> &EntryList {
        &self.entries
    }

    pub fn preset(&self) -> Preset {
        self.presets.current()
    }

    pub fn is_panning(&self) -> bool {
        self.drag_from.is_some()
    }

    pub fn grid(&self) -> GridLayout {
        GridLayout::compute(&self.camera, self.viewport)
    }

    pub fn hud_line(&self) -> String {
        scene::hud_line(self.preset().name(), self.entries.len())
    }

    /// Applies one input event. Returns true when the view needs a redraw.
    pub fn handle(&mut self, input: Input) -> bool {
        match input {
            Input::LeftDown { x, y } => {
                let world = self.camera.screen_to_world(self.viewport, x, y);
                let label = self.entries.push(world, PLACED_COLOR);
                log::debug!("placed {} at {}", label, world);
                true
            }
            Input::RightDown { x, y } => {
                self.drag_from = Some((x, y));
                false
            }
            Input::RightUp => {
                self.drag_from = None;
                false
            }
            Input::Motion { x, y } => match self.drag_from {
                Some((last_x, last_y)) => {
                    self.camera.pan(x - last_x, y - last_y);
                    self.drag_from = Some((x, y));
                    true
                }
                None => false,
            },
            Input::Wheel { delta, x, y } => {
                if delta == 0 {
                    return false;
                }
                self.camera.zoom_at(self.viewport, delta, x, y);
                log::debug!("zoom to {:.2} px/unit", self.camera.scale);
                true
            }
            Input::Key(Key::PrevPreset) => {
                self.apply_preset(self.presets.index() as isize - 1);
                true
            }
            Input::Key(Key::NextPreset) => {
                self.apply_preset(self.presets.index() as isize + 1);
                true
            }
            Input::Key(Key::ResetCamera) => {
                self.camera.reset();
                log::debug!("camera reset");
                true
            }
            Input::Key(Key::Clear) => {
                self.entries.clear();
                log::debug!("cleared all vectors");
                true
            }
            Input::Resize { width, height } => {
                self.viewport = Viewport::new(width, height);
                true
            }
            Input::Repaint => true,
        }
    }

    fn apply_preset(&mut self, index: isize) {
        let preset = self.presets.select(index);
        preset.apply(&mut self.entries, &mut self.rng);
        log::info!("preset: {} ({} vectors)", preset.name(), self.entries.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vec2;

    fn viewer() -> Viewer {
        Viewer::with_rng(Viewport::new(800, 600), StdRng::seed_from_u64(3))
    }

    #[test]
    fn test_starts_on_empty_preset() {
        let v = viewer();
        assert_eq!(v.preset(), Preset::Empty);
        assert!(v.entries().is_empty());
        assert_eq!(*v.camera(), Camera::default());
    }

    #[test]
    fn test_left_click_places_vector() {
        let mut v = viewer();
        assert!(v.handle(Input::LeftDown { x: 560, y: 140 }));
        assert!(v.handle(Input::LeftDown { x: 400, y: 300 }));
        let placed = v.entries().as_slice();
        assert_eq!(placed.len(), 2);
        assert_eq!(placed[0].vector, Vec2::new(2.0, 2.0));
        assert_eq!(placed[0].label, "a");
        assert_eq!(placed[0].color, PLACED_COLOR);
        assert_eq!(placed[1].vector, Vec2::ZERO);
        assert_eq!(placed[1].label, "b");
    }

    #[test]
    fn test_right_drag_pans() {
        let mut v = viewer();
        assert!(!v.handle(Input::Motion { x: 10, y: 10 }));
        assert!(!v.handle(Input::RightDown { x: 100, y: 100 }));
        assert!(v.is_panning());
        assert!(v.handle(Input::Motion { x: 130, y: 90 }));
        assert!(v.handle(Input::Motion { x: 150, y: 95 }));
        assert!(!v.handle(Input::RightUp));
        assert!(!v.is_panning());
        assert!(!v.handle(Input::Motion { x: 400, y: 400 }));
        assert_eq!((v.camera().pan_x, v.camera().pan_y), (50.0, -5.0));
    }

    #[test]
    fn test_wheel_zooms_and_reset_restores() {
        let mut v = viewer();
        assert!(v.handle(Input::Wheel { delta: 1, x: 300, y: 200 }));
        assert!(v.camera().scale > 80.0);
        assert!(!v.handle(Input::Wheel { delta: 0, x: 300, y: 200 }));
        v.handle(Input::RightDown { x: 0, y: 0 });
        v.handle(Input::Motion { x: 40, y: 40 });
        assert!(v.handle(Input::Key(Key::ResetCamera)));
        assert_eq!(*v.camera(), Camera::default());
    }

    #[test]
    fn test_preset_keys_cycle() {
        let mut v = viewer();
        v.handle(Input::Key(Key::NextPreset));
        assert_eq!(v.preset(), Preset::BasisDiagonals);
        assert_eq!(v.entries().len(), 6);
        v.handle(Input::Key(Key::PrevPreset));
        v.handle(Input::Key(Key::PrevPreset));
        assert_eq!(v.preset(), Preset::Rotations);
        assert_eq!(v.entries().len(), 12);
        assert!(v.hud_line().contains("Preset: Rotations"));
        assert!(v.hud_line().contains("(Vectors: 12)"));
    }

    #[test]
    fn test_clear_restarts_labels() {
        let mut v = viewer();
        v.handle(Input::Key(Key::NextPreset));
        assert!(v.handle(Input::Key(Key::Clear)));
        assert!(v.entries().is_empty());
        assert_eq!(v.preset(), Preset::BasisDiagonals);
        v.handle(Input::LeftDown { x: 10, y: 10 });
        assert_eq!(v.entries().as_slice()[0].label, "a");
    }

    #[test]
    fn test_resize_moves_origin() {
        let mut v = viewer();
        assert!(v.handle(Input::Resize { width: 1000, height: 800 }));
        assert_eq!(v.viewport(), Viewport::new(1000, 800));
        assert_eq!(v.camera().world_to_screen(v.viewport(), Vec2::ZERO), (500, 400));
        let grid = v.grid();
        assert!(grid.vertical.iter().any(|l| l.value == 0.0));
    }

    #[test]
    fn test_repaint_redraws_without_changes() {
        let mut v = viewer();
        let camera = *v.camera();
        let count = v.entries().len();
        assert!(v.handle(Input::Repaint));
        assert_eq!(*v.camera(), camera);
        assert_eq!(v.entries().len(), count);
    }
}
