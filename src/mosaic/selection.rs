//! Tile selection policies that limit how often palette tiles repeat

use std::fmt;

use bitvec::prelude::*;
use rand::{Rng, rngs::StdRng};

use crate::io::configuration::{MAX_RESET_THRESHOLD, MIN_RESET_THRESHOLD};
use crate::io::error::{MosaicError, Result};
use crate::raster::Color;
use crate::raster::color::closest_color_index;

/// Rule governing tile reuse across the cells of one mosaic
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Always search the whole palette; tiles may repeat freely
    #[default]
    Unrestricted,
    /// Withhold recently used tiles, forgetting them after 2 to 6 selections
    AvoidAdjacentRepeat,
    /// Use every tile once before any tile is used again
    ExhaustBeforeRepeat,
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrestricted => write!(f, "unrestricted"),
            Self::AvoidAdjacentRepeat => write!(f, "avoid-adjacent-repeat"),
            Self::ExhaustBeforeRepeat => write!(f, "exhaust-before-repeat"),
        }
    }
}

/// Working set of palette indices still eligible for selection
///
/// Iteration follows palette order, so searching it preserves the
/// first-match tie-break of the full palette.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileSet {
    bits: BitVec,
}

impl TileSet {
    /// Create a set containing every index below `len`
    pub fn all(len: usize) -> Self {
        Self {
            bits: bitvec![1; len],
        }
    }

    /// Make every index eligible again
    pub fn refill(&mut self) {
        self.bits.fill(true);
    }

    /// Withdraw an index
    pub fn remove(&mut self, index: usize) {
        if index < self.bits.len() {
            self.bits.set(index, false);
        }
    }

    /// Test membership
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).is_some_and(|bit| *bit)
    }

    /// Test if no index remains
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count remaining indices
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Remaining indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }
}

/// Picks palette indices for successive cells under one policy
///
/// Holds a private working set; the palette it was built from is never
/// modified.
#[derive(Debug)]
pub struct TileSelector {
    averages: Vec<Color>,
    policy: SelectionPolicy,
    available: TileSet,
    since_reset: usize,
    threshold: usize,
    last: Option<usize>,
    rng: StdRng,
}

impl TileSelector {
    /// Create a selector over tiles with the given average colors
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::EmptyPalette`] if `averages` is empty
    pub fn new(averages: Vec<Color>, policy: SelectionPolicy, mut rng: StdRng) -> Result<Self> {
        if averages.is_empty() {
            return Err(MosaicError::EmptyPalette);
        }

        let threshold = draw_threshold(&mut rng);
        Ok(Self {
            available: TileSet::all(averages.len()),
            averages,
            policy,
            since_reset: 0,
            threshold,
            last: None,
            rng,
        })
    }

    /// Active policy
    pub const fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Indices currently eligible
    pub const fn available(&self) -> &TileSet {
        &self.available
    }

    /// Choose the tile whose average is nearest to `target`
    pub fn select(&mut self, target: Color) -> usize {
        let index = match self.policy {
            SelectionPolicy::Unrestricted => {
                closest_color_index(self.averages.iter().copied(), target).unwrap_or(0)
            }
            SelectionPolicy::AvoidAdjacentRepeat => self.select_avoiding_adjacent(target),
            SelectionPolicy::ExhaustBeforeRepeat => self.select_exhausting(target),
        };
        self.last = Some(index);
        index
    }

    fn select_avoiding_adjacent(&mut self, target: Color) -> usize {
        if self.available.is_empty() {
            self.reset();
            // Keep the previous tile out of the refilled set when there is a choice
            if let Some(last) = self.last.filter(|_| self.averages.len() > 1) {
                self.available.remove(last);
            }
        }

        let index = self.nearest(self.available.iter(), target);

        self.since_reset += 1;
        if self.since_reset >= self.threshold {
            self.reset();
        }
        self.available.remove(index);
        index
    }

    fn select_exhausting(&mut self, target: Color) -> usize {
        if self.available.is_empty() {
            tracing::trace!(tiles = self.averages.len(), "palette exhausted, refilling");
            self.available.refill();
        }

        let index = self.nearest(self.available.iter(), target);
        self.available.remove(index);
        index
    }

    fn reset(&mut self) {
        tracing::trace!(
            since_reset = self.since_reset,
            threshold = self.threshold,
            "resetting tile working set"
        );
        self.available.refill();
        self.since_reset = 0;
        self.threshold = draw_threshold(&mut self.rng);
    }

    // Nearest among `candidates`, keeping the first-match tie-break of the full palette
    fn nearest(&self, candidates: impl Iterator<Item = usize>, target: Color) -> usize {
        let candidates: Vec<(usize, Color)> = candidates
            .filter_map(|index| self.averages.get(index).map(|&color| (index, color)))
            .collect();
        closest_color_index(candidates.iter().map(|&(_, color)| color), target)
            .and_then(|position| candidates.get(position))
            .map_or(0, |&(index, _)| index)
    }
}

fn draw_threshold(rng: &mut StdRng) -> usize {
    rng.random_range(MIN_RESET_THRESHOLD..=MAX_RESET_THRESHOLD)
}
