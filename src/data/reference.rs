//! Published reference table.
//!
//! Maximum number of distinct game sequences under three-fold repetition and
//! the fifty-move rule, keyed by full-move count. The fitter calibrates the
//! branching model against these values in log space.

use std::sync::LazyLock;

use crate::domain::ReferenceEntry;
use crate::error::DataError;

/// The ten published calibration points (5, 10, ..., 50 full moves).
pub const PUBLISHED_COUNTS: [ReferenceEntry; 10] = [
    ReferenceEntry::new(5, 3_775_852_872.0),
    ReferenceEntry::new(10, 7.30398216506453e16),
    ReferenceEntry::new(15, 1.51577893358687e23),
    ReferenceEntry::new(20, 7.69827064587585e28),
    ReferenceEntry::new(25, 1.42404361906059e34),
    ReferenceEntry::new(30, 1.21138616306393e39),
    ReferenceEntry::new(35, 5.51777898897728e43),
    ReferenceEntry::new(40, 1.49693269286536e48),
    ReferenceEntry::new(45, 2.61553428261307e52),
    ReferenceEntry::new(50, 3.12407154730694e56),
];

/// Largest full-move count whose ply count (`2m`) fits in a `u32`.
pub const MAX_FULL_MOVES: u32 = u32::MAX / 2;

static PUBLISHED: LazyLock<ReferenceDataset> = LazyLock::new(|| ReferenceDataset {
    entries: PUBLISHED_COUNTS.to_vec(),
});

/// Immutable, ordered reference table.
///
/// Entries are sorted by ascending full-move count, counts are finite and
/// positive, and full-move counts are distinct (so ply counts are too).
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceDataset {
    entries: Vec<ReferenceEntry>,
}

impl ReferenceDataset {
    /// Build a custom table. Entries are sorted; invalid or duplicate entries are rejected.
    pub fn new(mut entries: Vec<ReferenceEntry>) -> Result<Self, DataError> {
        if entries.is_empty() {
            return Err(DataError::Empty);
        }
        for e in &entries {
            if e.full_moves == 0 {
                return Err(DataError::NonPositiveMoves);
            }
            if e.full_moves > MAX_FULL_MOVES {
                return Err(DataError::MovesOutOfRange(e.full_moves));
            }
            if !(e.count.is_finite() && e.count > 0.0) {
                return Err(DataError::InvalidCount {
                    full_moves: e.full_moves,
                    count: e.count,
                });
            }
        }

        entries.sort_by_key(|e| e.full_moves);
        if let Some(pair) = entries.windows(2).find(|w| w[0].full_moves == w[1].full_moves) {
            return Err(DataError::Duplicate(pair[0].full_moves));
        }

        Ok(Self { entries })
    }

    /// The process-wide published table.
    pub fn published() -> &'static ReferenceDataset {
        &PUBLISHED
    }

    /// Entries in ascending full-move order.
    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    pub fn get(&self, full_moves: u32) -> Option<&ReferenceEntry> {
        self.entries
            .binary_search_by_key(&full_moves, |e| e.full_moves)
            .ok()
            .map(|idx| &self.entries[idx])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ply counts in ascending order.
    pub fn plies(&self) -> Vec<u32> {
        self.entries.iter().map(ReferenceEntry::plies).collect()
    }
}
