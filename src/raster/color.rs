//! Color value type and the pure color arithmetic used for matching
//!
//! Averages truncate toward zero per channel and distances are Manhattan,
//! so every result is an exact integer and ties resolve by search order.

use std::fmt;

/// An opaque 8-bit RGB triple
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Pure black
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a color from its three channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Same value in every channel
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Pack channels into the low three bytes of an integer (red lowest)
pub const fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    (r as u32) | ((g as u32) << 8) | ((b as u32) << 16)
}

/// Inverse of [`pack_rgb`]; the high byte is ignored
pub const fn unpack_rgb(packed: u32) -> Color {
    Color::new(
        (packed & 0xff) as u8,
        ((packed >> 8) & 0xff) as u8,
        ((packed >> 16) & 0xff) as u8,
    )
}

/// Manhattan distance over the three channels
pub const fn color_distance(a: Color, b: Color) -> u32 {
    (a.r.abs_diff(b.r) as u32) + (a.g.abs_diff(b.g) as u32) + (a.b.abs_diff(b.b) as u32)
}

/// Per-channel integer mean of a color sequence
///
/// Remainders are dropped, not rounded. Returns `None` for an empty sequence.
pub fn average_color<I>(colors: I) -> Option<Color>
where
    I: IntoIterator<Item = Color>,
{
    let mut sums = [0_u64; 3];
    let mut count = 0_u64;

    for color in colors {
        sums[0] += u64::from(color.r);
        sums[1] += u64::from(color.g);
        sums[2] += u64::from(color.b);
        count += 1;
    }

    if count == 0 {
        return None;
    }

    // Each mean is bounded by the largest channel value, so it fits in a byte
    let packed = pack_rgb(
        (sums[0] / count) as u8,
        (sums[1] / count) as u8,
        (sums[2] / count) as u8,
    );
    Some(unpack_rgb(packed))
}

/// Index of the candidate nearest to `target`
///
/// The first candidate at the minimal distance wins. Returns `None` when
/// there are no candidates.
pub fn closest_color_index<I>(candidates: I, target: Color) -> Option<usize>
where
    I: IntoIterator<Item = Color>,
{
    let mut best: Option<(usize, u32)> = None;

    for (index, candidate) in candidates.into_iter().enumerate() {
        let distance = color_distance(candidate, target);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
        if distance == 0 {
            break;
        }
    }

    best.map(|(index, _)| index)
}
