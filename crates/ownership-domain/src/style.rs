//! Cosmetic edge styling.
//!
//! Lengths and colors only help tell edges apart; nothing structural depends on them.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};

pub const MIN_ARROW_LENGTH: u8 = 1;
pub const MAX_ARROW_LENGTH: u8 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dotted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadStyle {
    Open,
    Full,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `rrggbb`, without a leading `#`.
    pub fn hex(&self) -> String {
        hex::encode([self.r, self.g, self.b])
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArrowStyle {
    pub line: LineStyle,
    pub head: HeadStyle,
    pub bold: bool,
    pub length: u8,
    pub color: Color,
}

impl ArrowStyle {
    /// Component -> component dependency: bold, solid, full head.
    pub fn dependency(length: u8, color: Color) -> Self {
        Self {
            line: LineStyle::Solid,
            head: HeadStyle::Full,
            bold: true,
            length: clamp_length(length),
            color,
        }
    }

    /// Component -> owner method usage: dotted, open head.
    pub fn method_usage(length: u8, color: Color) -> Self {
        Self {
            line: LineStyle::Dotted,
            head: HeadStyle::Open,
            bold: false,
            length: clamp_length(length),
            color,
        }
    }
}

fn clamp_length(length: u8) -> u8 {
    length.clamp(MIN_ARROW_LENGTH, MAX_ARROW_LENGTH)
}

/// Picks the cosmetic parts of an edge, given the names of its endpoints.
pub trait EdgeStyler {
    /// Arrow length in `MIN_ARROW_LENGTH..=MAX_ARROW_LENGTH`.
    fn length(&mut self, source: &str, target: &str) -> u8;

    fn color(&mut self, source: &str, target: &str) -> Color;
}

/// Random lengths and colors. Seeded stylers repeat their sequence.
#[derive(Clone, Debug)]
pub struct RandomStyler {
    rng: StdRng,
}

impl RandomStyler {
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl EdgeStyler for RandomStyler {
    fn length(&mut self, _source: &str, _target: &str) -> u8 {
        self.rng.random_range(MIN_ARROW_LENGTH..=MAX_ARROW_LENGTH)
    }

    fn color(&mut self, _source: &str, _target: &str) -> Color {
        Color::rgb(self.rng.random(), self.rng.random(), self.rng.random())
    }
}

/// Lengths and colors derived from a SHA-256 of the endpoints, so the same edge is
/// styled the same way on every run.
#[derive(Clone, Copy, Debug, Default)]
pub struct HashedStyler;

impl HashedStyler {
    fn digest(source: &str, target: &str) -> Vec<u8> {
        let mut hasher = Sha256::new();
        hasher.update(source.as_bytes());
        hasher.update(b"->");
        hasher.update(target.as_bytes());
        hasher.finalize().to_vec()
    }
}

impl EdgeStyler for HashedStyler {
    fn length(&mut self, source: &str, target: &str) -> u8 {
        let digest = Self::digest(source, target);
        MIN_ARROW_LENGTH + digest[3] % (MAX_ARROW_LENGTH - MIN_ARROW_LENGTH + 1)
    }

    fn color(&mut self, source: &str, target: &str) -> Color {
        let digest = Self::digest(source, target);
        Color::rgb(digest[0], digest[1], digest[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashed_styler_is_stable_per_edge() {
        let mut a = HashedStyler;
        let mut b = HashedStyler;
        assert_eq!(a.color("com.acme.Y", "com.acme.X"), b.color("com.acme.Y", "com.acme.X"));
        assert_eq!(a.length("com.acme.Y", "com.acme.X"), b.length("com.acme.Y", "com.acme.X"));
        assert_ne!(a.color("com.acme.Y", "com.acme.X"), a.color("com.acme.X", "com.acme.Y"));
    }

    #[test]
    fn lengths_stay_in_range() {
        let mut hashed = HashedStyler;
        let mut random = RandomStyler::seeded(7);
        for i in 0..200 {
            let source = format!("C{i}");
            for styler in [&mut hashed as &mut dyn EdgeStyler, &mut random] {
                let len = styler.length(&source, "target");
                assert!((MIN_ARROW_LENGTH..=MAX_ARROW_LENGTH).contains(&len));
            }
        }
    }

    #[test]
    fn seeded_random_styler_repeats() {
        let mut a = RandomStyler::seeded(42);
        let mut b = RandomStyler::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.color("s", "t"), b.color("s", "t"));
            assert_eq!(a.length("s", "t"), b.length("s", "t"));
        }
    }

    #[test]
    fn arrow_styles_clamp_length_and_pick_shapes() {
        let dep = ArrowStyle::dependency(9, Color::rgb(0, 0, 0));
        assert_eq!(dep.length, MAX_ARROW_LENGTH);
        assert!(dep.bold);
        assert_eq!(dep.head, HeadStyle::Full);

        let usage = ArrowStyle::method_usage(0, Color::rgb(0, 0, 0));
        assert_eq!(usage.length, MIN_ARROW_LENGTH);
        assert_eq!(usage.line, LineStyle::Dotted);
    }

    #[test]
    fn color_hex_is_lowercase_rrggbb() {
        assert_eq!(Color::rgb(0x1f, 0x77, 0xb4).hex(), "1f77b4");
    }
}
