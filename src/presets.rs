//! Demo scenes that can be cycled through with the number keys.

use std::f32::consts::TAU;

use rand::Rng;

use crate::entries::{EntryList, Rgb};
use crate::vector::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    Empty,
    BasisDiagonals,
    SpokesCircle,
    RandomVectors,
    Projection,
    Reflection,
    Rotations,
}

impl Preset {
    /// All presets in cycling order.
    pub const ALL: [Preset; 7] = [
        Preset::Empty,
        Preset::BasisDiagonals,
        Preset::SpokesCircle,
        Preset::RandomVectors,
        Preset::Projection,
        Preset::Reflection,
        Preset::Rotations,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Empty => "Empty",
            Preset::BasisDiagonals => "Basis & Diagonals",
            Preset::SpokesCircle => "Spokes Circle",
            Preset::RandomVectors => "Random Vectors",
            Preset::Projection => "Projection (a onto b)",
            Preset::Reflection => "Reflection (i about n)",
            Preset::Rotations => "Rotations",
        }
    }

    /// Replaces the contents of `list` with this scene.
    pub fn apply<R: Rng>(self, list: &mut EntryList, rng: &mut R) {
        list.clear();
        match self {
            Preset::Empty => {}
            Preset::BasisDiagonals => list.extend([
                (Vec2::new(2.0, 0.0), Rgb(230, 80, 80)),
                (Vec2::new(0.0, 2.0), Rgb(80, 160, 255)),
                (Vec2::new(-2.0, 0.0), Rgb(160, 90, 90)),
                (Vec2::new(0.0, -2.0), Rgb(90, 120, 180)),
                (Vec2::new(1.5, 1.5), Rgb(90, 220, 120)),
                (Vec2::new(-1.5, 1.5), Rgb(220, 180, 90)),
            ]),
            Preset::SpokesCircle => {
                const SPOKES: usize = 16;
                const RADIUS: f32 = 3.0;
                list.extend((0..SPOKES).map(|i| {
                    let a = i as f32 * (TAU / SPOKES as f32);
                    (Vec2::new(a.cos() * RADIUS, a.sin() * RADIUS), Rgb(120, 210, 140))
                }));
            }
            Preset::RandomVectors => {
                list.extend((0..40).map(|_| {
                    let x: f32 = rng.random_range(-5.0..5.0);
                    let y: f32 = rng.random_range(-3.0..3.0);
                    (Vec2::new(x, y), Rgb(80, 220, 160))
                }));
            }
            Preset::Projection => {
                let a = Vec2::new(3.0, 2.0);
                let b = Vec2::new(4.0, 1.0);
                list.extend([
                    (a, Rgb(90, 200, 255)),
                    (b, Rgb(255, 160, 60)),
                    (a.project(b), Rgb(255, 220, 0)),
                ]);
            }
            Preset::Reflection => {
                let incident = Vec2::new(3.0, -2.0);
                let normal = Vec2::new(0.0, 1.0);
                list.extend([
                    (incident, Rgb(90, 200, 255)),
                    (normal, Rgb(255, 160, 60)),
                    (incident.reflect(normal), Rgb(255, 80, 200)),
                ]);
            }
            Preset::Rotations => {
                let v = Vec2::new(4.0, 0.0);
                list.extend((0..12).map(|k| {
                    (v.rotate(k as f32 * (TAU / 12.0)), Rgb(100, 210, 130))
                }));
            }
        }
    }
}

/// Tracks which preset is active. Stepping past either end wraps around.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PresetCycle {
    index: usize,
}

impl PresetCycle {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Preset {
        Preset::ALL[self.index]
    }

    /// Activates the preset at `index`; -1 wraps to the last preset and
    /// anything past the end wraps to the first.
    pub fn select(&mut self, index: isize) -> Preset {
        let count = Preset::ALL.len() as isize;
        self.index = index.rem_euclid(count) as usize;
        self.current()
    }

    pub fn next(&mut self) -> Preset {
        self.select(self.index as isize + 1)
    }

    pub fn prev(&mut self) -> Preset {
        self.select(self.index as isize - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::EPSILON;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn applied(preset: Preset) -> EntryList {
        let mut list = EntryList::new();
        let mut rng = StdRng::seed_from_u64(7);
        preset.apply(&mut list, &mut rng);
        list
    }

    #[test]
    fn test_cycle_wraps_both_ways() {
        let mut cycle = PresetCycle::default();
        assert_eq!(cycle.current(), Preset::Empty);
        assert_eq!(cycle.prev(), Preset::Rotations);
        assert_eq!(cycle.index(), 6);
        assert_eq!(cycle.next(), Preset::Empty);
        assert_eq!(cycle.next(), Preset::BasisDiagonals);
        for _ in 0..Preset::ALL.len() {
            cycle.next();
        }
        assert_eq!(cycle.current(), Preset::BasisDiagonals);
    }

    #[test]
    fn test_select_out_of_range_wraps() {
        let mut cycle = PresetCycle::default();
        assert_eq!(cycle.select(7), Preset::Empty);
        assert_eq!(cycle.select(-1), Preset::Rotations);
        assert_eq!(cycle.select(3), Preset::RandomVectors);
    }

    #[test]
    fn test_names() {
        let names: Vec<&str> = Preset::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(names[0], "Empty");
        assert_eq!(names[1], "Basis & Diagonals");
        assert_eq!(names[4], "Projection (a onto b)");
        assert_eq!(names[6], "Rotations");
    }

    #[test]
    fn test_apply_replaces_previous_scene() {
        let mut list = EntryList::new();
        let mut rng = StdRng::seed_from_u64(1);
        Preset::SpokesCircle.apply(&mut list, &mut rng);
        assert_eq!(list.len(), 16);
        Preset::Projection.apply(&mut list, &mut rng);
        assert_eq!(list.len(), 3);
        assert_eq!(list.as_slice()[0].label, "a");
        Preset::Empty.apply(&mut list, &mut rng);
        assert!(list.is_empty());
    }

    #[test]
    fn test_basis() {
        let list = applied(Preset::BasisDiagonals);
        assert_eq!(list.len(), 6);
        let first = &list.as_slice()[0];
        assert_eq!(first.vector, Vec2::new(2.0, 0.0));
        assert_eq!(first.color, Rgb(230, 80, 80));
        assert_eq!(list.as_slice()[5].label, "f");
    }

    #[test]
    fn test_spokes_lie_on_circle() {
        let list = applied(Preset::SpokesCircle);
        assert_eq!(list.len(), 16);
        for e in &list {
            assert!((e.vector.length() - 3.0).abs() < 1e-5);
        }
        let up = list.as_slice()[4].vector;
        assert!(up.x.abs() < 1e-5 && (up.y - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_random_vectors_stay_in_bounds() {
        let list = applied(Preset::RandomVectors);
        assert_eq!(list.len(), 40);
        for e in &list {
            assert!((-5.0..5.0).contains(&e.vector.x));
            assert!((-3.0..3.0).contains(&e.vector.y));
        }
    }

    #[test]
    fn test_random_vectors_follow_the_seed() {
        let a = applied(Preset::RandomVectors);
        let b = applied(Preset::RandomVectors);
        assert_eq!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn test_projection_scene() {
        let list = applied(Preset::Projection);
        let p = list.as_slice()[2].vector;
        assert!(p.equal(Vec2::new(56.0 / 17.0, 14.0 / 17.0), 1e-5));
        assert_eq!(list.as_slice()[2].color, Rgb(255, 220, 0));
    }

    #[test]
    fn test_reflection_scene() {
        let list = applied(Preset::Reflection);
        assert!(list.as_slice()[2].vector.equal(Vec2::new(3.0, 2.0), EPSILON));
    }

    #[test]
    fn test_rotations_scene() {
        let list = applied(Preset::Rotations);
        assert_eq!(list.len(), 12);
        assert_eq!(list.as_slice()[0].vector, Vec2::new(4.0, 0.0));
        let quarter = list.as_slice()[3].vector;
        assert!(quarter.x.abs() < 1e-5 && (quarter.y - 4.0).abs() < 1e-5);
    }
}
