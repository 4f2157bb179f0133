// File: ./src/palette.rs
// Golden-ratio palette generation and the editable five-color palette
use crate::color::{Hsl, hsl_to_hex};
use rand::Rng;

pub const PALETTE_SIZE: usize = 5;
pub const GOLDEN_RATIO_CONJUGATE: f64 = 0.618033988749895;

/// Hue step between consecutive generated colors, in degrees.
pub const GOLDEN_HUE_STEP: f64 = 360.0 * GOLDEN_RATIO_CONJUGATE;

/// Endless walk around the hue circle in golden-ratio steps.
/// Each call to `next` advances first, then yields the new hue.
#[derive(Debug, Clone, Copy)]
pub struct HueWalk {
    hue: f64,
}

impl HueWalk {
    pub fn new(start: f64) -> Self {
        Self {
            hue: start.rem_euclid(360.0),
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.gen_range(0.0..360.0))
    }

    pub fn current(&self) -> f64 {
        self.hue
    }
}

impl Iterator for HueWalk {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.hue = (self.hue + GOLDEN_HUE_STEP) % 360.0;
        Some(self.hue)
    }
}

/// Fills every unlocked position with a fresh color.
///
/// The hue cursor only moves for positions that actually receive a new
/// color; a locked position copies its current value and leaves the walk
/// where it was. A locked position whose current color is empty counts as
/// unlocked. Saturation is drawn from [55, 85) and lightness from [45, 70).
pub fn generate_palette<R: Rng + ?Sized>(
    locked: &[bool; PALETTE_SIZE],
    current: &[String; PALETTE_SIZE],
    seed: Option<f64>,
    rng: &mut R,
) -> [String; PALETTE_SIZE] {
    let mut walk = match seed {
        Some(hue) => HueWalk::new(hue),
        None => HueWalk::random(rng),
    };

    std::array::from_fn(|i| {
        if locked[i] && !current[i].is_empty() {
            return current[i].clone();
        }
        let hue = walk.next().unwrap_or_default();
        let s = rng.gen_range(55.0..85.0_f64).round() as u8;
        let l = rng.gen_range(45.0..70.0_f64).round() as u8;
        hsl_to_hex(Hsl::new(hue.round() as i32, s, l))
    })
}

/// `generate_palette` with an unseeded hue and the thread-local RNG.
pub fn random_palette(
    locked: &[bool; PALETTE_SIZE],
    current: &[String; PALETTE_SIZE],
) -> [String; PALETTE_SIZE] {
    generate_palette(locked, current, None, &mut rand::thread_rng())
}

/// Repeats colors from the start until there are five.
/// Longer inputs are cut to five; an empty input stays empty.
pub fn pad_to_five(colors: &[String]) -> Vec<String> {
    if colors.is_empty() {
        return vec![];
    }
    colors
        .iter()
        .cycle()
        .take(PALETTE_SIZE)
        .cloned()
        .collect()
}

/// The palette being edited: five colors and their lock flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteState {
    pub colors: [String; PALETTE_SIZE],
    pub locked: [bool; PALETTE_SIZE],
}

impl PaletteState {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let locked = [false; PALETTE_SIZE];
        let empty: [String; PALETTE_SIZE] = Default::default();
        Self {
            colors: generate_palette(&locked, &empty, None, rng),
            locked,
        }
    }

    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.colors = generate_palette(&self.locked, &self.colors, None, rng);
    }

    pub fn toggle_lock(&mut self, index: usize) {
        if let Some(lock) = self.locked.get_mut(index) {
            *lock = !*lock;
        }
    }

    pub fn set_color(&mut self, index: usize, color: &str) {
        if let Some(slot) = self.colors.get_mut(index) {
            *slot = color.to_string();
        }
    }

    /// Replaces the whole palette and clears every lock.
    /// Missing trailing colors are padded from the start of `colors`.
    pub fn load(&mut self, colors: &[String]) {
        let padded = pad_to_five(colors);
        if padded.len() != PALETTE_SIZE {
            return;
        }
        for (slot, color) in self.colors.iter_mut().zip(padded) {
            *slot = color;
        }
        self.locked = [false; PALETTE_SIZE];
    }

    pub fn locked_count(&self) -> usize {
        self.locked.iter().filter(|l| **l).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::hex_to_hsl;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn palette(colors: [&str; 5]) -> [String; 5] {
        colors.map(String::from)
    }

    fn hue_distance(a: u16, b: u16) -> i32 {
        let d = (a as i32 - b as i32).rem_euclid(360);
        d.min(360 - d)
    }

    #[test]
    fn test_all_locked_is_identity() {
        let current = palette(["#111111", "#222222", "#333333", "#444444", "#555555"]);
        let mut rng = StdRng::seed_from_u64(1);
        let out = generate_palette(&[true; 5], &current, None, &mut rng);
        assert_eq!(out, current);
    }

    #[test]
    fn test_random_palette_shape() {
        let current = palette(["#abcdef", "", "", "", ""]);
        let out = random_palette(&[true, false, false, false, false], &current);
        assert_eq!(out[0], "#abcdef");
        for hex in &out[1..] {
            let hsl = hex_to_hsl(hex).unwrap();
            assert!((54..=86).contains(&hsl.s) && (44..=71).contains(&hsl.l), "{hex}");
        }
    }

    #[test]
    fn test_locked_empty_slot_is_filled() {
        let current: [String; 5] = Default::default();
        let mut rng = StdRng::seed_from_u64(2);
        let out = generate_palette(&[true; 5], &current, Some(0.0), &mut rng);
        assert!(out.iter().all(|c| c.len() == 7 && c.starts_with('#')));
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let current: [String; 5] = Default::default();
        let a = generate_palette(&[false; 5], &current, Some(42.0), &mut StdRng::seed_from_u64(7));
        let b = generate_palette(&[false; 5], &current, Some(42.0), &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_seeded_hues_follow_golden_walk() {
        let current: [String; 5] = Default::default();
        let expected: Vec<f64> = HueWalk::new(10.0).take(5).collect();
        for rng_seed in 0..4 {
            let out = generate_palette(
                &[false; 5],
                &current,
                Some(10.0),
                &mut StdRng::seed_from_u64(rng_seed),
            );
            for (hex, hue) in out.iter().zip(&expected) {
                let hsl = hex_to_hsl(hex).unwrap();
                let want = (hue.round() as i32).rem_euclid(360) as u16;
                assert!(hue_distance(hsl.h, want) <= 1, "{hex} {hsl:?} vs {hue}");
                assert!((54..=86).contains(&hsl.s), "{hsl:?}");
                assert!((44..=71).contains(&hsl.l), "{hsl:?}");
            }
        }
    }

    #[test]
    fn test_locked_slot_does_not_advance_walk() {
        let current = palette(["", "#123456", "", "", ""]);
        let locked = [false, true, false, false, false];
        let out = generate_palette(&locked, &current, Some(0.0), &mut StdRng::seed_from_u64(3));
        assert_eq!(out[1], "#123456");

        // Unlocked slots 0, 2, 3, 4 take the first four hues of the walk.
        let hues: Vec<f64> = HueWalk::new(0.0).take(4).collect();
        for (slot, hue) in [0usize, 2, 3, 4].into_iter().zip(hues) {
            let got = hex_to_hsl(&out[slot]).unwrap().h;
            let want = (hue.round() as i32).rem_euclid(360) as u16;
            assert!(hue_distance(got, want) <= 1, "slot {slot}: {got} vs {want}");
        }
    }

    #[test]
    fn test_hue_walk_wraps() {
        let mut walk = HueWalk::new(350.0);
        let first = walk.next().unwrap();
        assert!((first - (350.0 + GOLDEN_HUE_STEP - 360.0)).abs() < 1e-9);
        assert!(walk.take(100).all(|h| (0.0..360.0).contains(&h)));
        assert_eq!(HueWalk::new(-10.0).current(), 350.0);
    }

    #[test]
    fn test_pad_to_five() {
        let two = vec!["#a".to_string(), "#b".to_string()];
        assert_eq!(pad_to_five(&two), ["#a", "#b", "#a", "#b", "#a"]);
        let six: Vec<String> = (0..6).map(|i| i.to_string()).collect();
        assert_eq!(pad_to_five(&six).len(), 5);
        assert!(pad_to_five(&[]).is_empty());
    }

    #[test]
    fn test_state_transitions() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut state = PaletteState::new(&mut rng);
        assert_eq!(state.locked_count(), 0);

        state.toggle_lock(2);
        state.toggle_lock(7);
        assert_eq!(state.locked, [false, false, true, false, false]);

        let kept = state.colors[2].clone();
        state.generate(&mut rng);
        assert_eq!(state.colors[2], kept);

        state.set_color(0, "#000000");
        assert_eq!(state.colors[0], "#000000");

        state.load(&["#ff0000".to_string(), "#00ffff".to_string()]);
        assert_eq!(state.colors[4], "#ff0000");
        assert_eq!(state.locked_count(), 0);

        let before = state.clone();
        state.load(&[]);
        assert_eq!(state, before);
    }
}
