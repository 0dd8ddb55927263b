use std::time::Duration;

/// How long a cell has held its current state, banded into the four
/// regimes the rule table distinguishes. The longer a cell sits in one
/// state, the tighter its survival/birth thresholds get, so long-lived
/// patterns stagnate instead of persisting forever.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Band {
    /// Held state for under 2 seconds
    Fresh,
    /// 2 to 3 seconds
    Settled,
    /// 3 to 4 seconds
    Stale,
    /// 4 seconds or more: no rule applies, the cell is frozen in place
    Stagnant,
}

impl Band {
    /// Classify an elapsed duration into its band.
    pub fn of(elapsed: Duration) -> Self {
        match elapsed.as_secs_f32() {
            t if t < 2.0 => Band::Fresh,
            t if t < 3.0 => Band::Settled,
            t if t < 4.0 => Band::Stale,
            _ => Band::Stagnant,
        }
    }
}

/// Pure transition function: next life state from the current state, the
/// elapsed-time band, and the Moore-neighborhood live count.
///
/// The original rule table leaves the Stagnant band undefined; here it is
/// an explicit hold, never a fall-through to the Stale thresholds.
pub fn next_state(alive: bool, band: Band, neighbors: u8) -> bool {
    match (alive, band) {
        (true, Band::Fresh) => matches!(neighbors, 3..=6),
        (true, Band::Settled) => matches!(neighbors, 3..=5),
        (true, Band::Stale) => matches!(neighbors, 3 | 4),
        (false, Band::Fresh) => neighbors == 3,
        (false, Band::Settled) => matches!(neighbors, 3 | 4),
        (false, Band::Stale) => matches!(neighbors, 3..=5),
        (_, Band::Stagnant) => alive,
    }
}
