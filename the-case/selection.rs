//! Regions, host selections, and target region resolution.
//!
//! A [`Region`] is a half-open `[start, end)` interval of codepoint offsets.
//! A [`SelectionSet`] is the ordered list of regions the host hands to a
//! command. Unlike an editor's own selection type it is not normalized: it is
//! a snapshot of whatever the host supplied, including overlapping, unsorted,
//! or even inverted regions.
//!
//! [`resolve_regions`] turns a selection into the list of regions a case
//! command actually visits:
//!
//! ```text
//! selection []                 len 13 -> [0..13)
//! selection [4..9) [0..6)      merge  -> [0..9)
//! selection [4..9) [0..6)      as-given -> [4..9) [0..6)
//! selection [0..3) [3..5)      merge  -> [0..3) [3..5)   (touching, kept apart)
//! ```
//!
//! The resolver never rejects a region. Bounds are checked against the live
//! buffer by the executor, which is what turns a bad region into
//! [`CaseCommandError::InvalidRegion`](crate::command::CaseCommandError).

use std::fmt;

use smallvec::{
  SmallVec,
  smallvec,
};

use crate::config::{
  CaseConfig,
  EmptySelectionPolicy,
  OverlapPolicy,
};

pub type Regions = SmallVec<[Region; 1]>;

/// A half-open interval of codepoint offsets.
///
/// The fields are public and unchecked; a host may hand over `start > end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Region {
  pub start: usize,
  pub end:   usize,
}

impl Region {
  #[inline]
  pub const fn new(start: usize, end: usize) -> Self {
    Self { start, end }
  }

  /// A region covering the first `len` codepoints.
  #[inline]
  pub const fn whole(len: usize) -> Self {
    Self::new(0, len)
  }

  /// Number of codepoints covered. Zero for inverted regions.
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.end.saturating_sub(self.start)
  }

  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.start >= self.end
  }

  #[inline]
  #[must_use]
  pub fn is_inverted(&self) -> bool {
    self.start > self.end
  }

  /// `0 <= start <= end <= len`.
  #[inline]
  #[must_use]
  pub fn is_valid_for(&self, len: usize) -> bool {
    self.start <= self.end && self.end <= len
  }

  /// Whether the two regions share at least one codepoint.
  #[inline]
  #[must_use]
  pub fn overlaps(&self, other: &Region) -> bool {
    self.start < other.end && other.start < self.end
  }

  #[inline]
  #[must_use]
  pub fn contains(&self, pos: usize) -> bool {
    self.start <= pos && pos < self.end
  }
}

impl From<(usize, usize)> for Region {
  fn from((start, end): (usize, usize)) -> Self {
    Self::new(start, end)
  }
}

impl From<std::ops::Range<usize>> for Region {
  fn from(range: std::ops::Range<usize>) -> Self {
    Self::new(range.start, range.end)
  }
}

impl fmt::Display for Region {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}..{}", self.start, self.end)
  }
}

/// Host-supplied regions, in the order the host keeps them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SelectionSet {
  regions: Regions,
}

impl SelectionSet {
  /// A selection with no regions. Commands treat it according to
  /// [`EmptySelectionPolicy`].
  #[must_use]
  pub fn empty() -> Self {
    Self::default()
  }

  pub fn new(regions: impl IntoIterator<Item = Region>) -> Self {
    Self {
      regions: regions.into_iter().collect(),
    }
  }

  pub fn single(region: Region) -> Self {
    Self {
      regions: smallvec![region],
    }
  }

  pub fn push(&mut self, region: Region) {
    self.regions.push(region);
  }

  pub fn clear(&mut self) {
    self.regions.clear();
  }

  #[inline]
  pub fn regions(&self) -> &[Region] {
    &self.regions
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.regions.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.regions.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Region> {
    self.regions.iter()
  }
}

impl FromIterator<Region> for SelectionSet {
  fn from_iter<T: IntoIterator<Item = Region>>(iter: T) -> Self {
    Self::new(iter)
  }
}

impl<'a> IntoIterator for &'a SelectionSet {
  type Item = &'a Region;
  type IntoIter = std::slice::Iter<'a, Region>;

  fn into_iter(self) -> Self::IntoIter {
    self.regions.iter()
  }
}

/// Produce the ordered list of regions a command should act on.
pub fn resolve_regions(selection: &SelectionSet, len: usize, config: &CaseConfig) -> Regions {
  if selection.is_empty() {
    return match config.empty_selection {
      EmptySelectionPolicy::WholeBuffer => smallvec![Region::whole(len)],
      EmptySelectionPolicy::Ignore => Regions::new(),
    };
  }

  match config.overlap {
    OverlapPolicy::AsGiven => selection.regions.clone(),
    OverlapPolicy::Merge => merge_overlapping(selection.regions()),
  }
}

/// Sort by `(start, end)` and fold strictly overlapping regions together.
///
/// Touching regions are not merged. Inverted regions pass through untouched
/// so they are still reported when the executor validates them.
fn merge_overlapping(regions: &[Region]) -> Regions {
  let mut sorted: Regions = regions.iter().copied().collect();
  sorted.sort_unstable();

  let mut merged = Regions::with_capacity(sorted.len());
  for region in sorted {
    if region.is_inverted() {
      merged.push(region);
      continue;
    }
    match merged.last_mut() {
      Some(last) if !last.is_inverted() && region.start < last.end => {
        last.end = last.end.max(region.end);
      },
      _ => merged.push(region),
    }
  }

  if merged.len() != regions.len() {
    tracing::trace!(
      before = regions.len(),
      after = merged.len(),
      "merged overlapping selection regions"
    );
  }

  merged
}
