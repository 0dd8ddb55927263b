use std::time::Instant;

use super::color::{self, AGE_RAMP_SECS, JUST_BORN, LONG_LIVED, Rgb};
use super::rules::{Band, next_state};

/// Cell is the fundamental unit of the automaton: a life state plus a
/// timestamp marking when that state was entered.
///
/// A generation is two phases: `step` writes only `pending_alive` (so every
/// neighbor computation in the same generation still sees committed state),
/// and `apply` commits it, resetting the timer only on an actual transition.
#[derive(Clone, Copy, Debug)]
pub struct Cell {
    alive: bool,
    pending_alive: bool,
    state_entered_at: Instant,
    color: Rgb,
}

impl Cell {
    /// Create a cell entering `alive` at time `now`.
    pub fn new(alive: bool, now: Instant) -> Self {
        Self {
            alive,
            pending_alive: alive,
            state_entered_at: now,
            color: if alive { JUST_BORN } else { color::DEAD },
        }
    }

    /// Check if the cell is currently alive (committed state).
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    /// Color cached by the last `apply`.
    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// When the cell last changed state.
    pub const fn state_entered_at(&self) -> Instant {
        self.state_entered_at
    }

    /// Compute the next-generation state from the live neighbor count.
    /// Writes only `pending_alive`; committed state is untouched until
    /// `apply`, which keeps the whole generation synchronous.
    pub fn step(&mut self, neighbors: u8, now: Instant) {
        let band = Band::of(now.duration_since(self.state_entered_at));
        self.pending_alive = next_state(self.alive, band, neighbors);
    }

    /// Commit the pending state. The timer resets only on a real
    /// transition, so a surviving cell keeps aging. The cached color is
    /// recomputed after the possible reset: a cell born this generation
    /// always starts at the JUST_BORN end of the ramp.
    pub fn apply(&mut self, now: Instant) {
        if self.pending_alive != self.alive {
            self.alive = self.pending_alive;
            self.state_entered_at = now;
        }

        self.color = if self.alive {
            let age = now.duration_since(self.state_entered_at).as_secs_f32();
            color::lerp(JUST_BORN, LONG_LIVED, age / AGE_RAMP_SECS)
        } else {
            color::DEAD
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_fresh_survival() {
        let t0 = Instant::now();
        let mut cell = Cell::new(true, t0);

        cell.step(3, t0);
        cell.apply(t0);
        assert!(cell.is_alive());

        cell.step(2, t0);
        cell.apply(t0);
        assert!(!cell.is_alive());
    }

    #[test]
    fn test_aged_cell_uses_tighter_band() {
        let t0 = Instant::now();
        let t3 = t0 + Duration::from_secs(3);

        // 5 neighbors keeps a Fresh cell alive but kills a Stale one
        let mut fresh = Cell::new(true, t0);
        fresh.step(5, t0);
        fresh.apply(t0);
        assert!(fresh.is_alive());

        let mut stale = Cell::new(true, t0);
        stale.step(5, t3);
        stale.apply(t3);
        assert!(!stale.is_alive());
    }

    #[test]
    fn test_stagnant_cell_holds() {
        let t0 = Instant::now();
        let t9 = t0 + Duration::from_secs(9);

        let mut cell = Cell::new(true, t0);
        cell.step(0, t9);
        cell.apply(t9);
        assert!(cell.is_alive(), "no rule past 4s, state must hold");

        let mut cell = Cell::new(false, t0);
        cell.step(3, t9);
        cell.apply(t9);
        assert!(!cell.is_alive());
    }

    #[test]
    fn test_timer_resets_only_on_transition() {
        let t0 = Instant::now();
        let t1 = t0 + Duration::from_secs(1);

        // Survival: timer keeps its original value
        let mut cell = Cell::new(true, t0);
        cell.step(3, t1);
        cell.apply(t1);
        assert_eq!(cell.state_entered_at(), t0);

        // Death: timer resets to commit time
        let mut cell = Cell::new(true, t0);
        cell.step(0, t1);
        cell.apply(t1);
        assert_eq!(cell.state_entered_at(), t1);
    }

    #[test]
    fn test_newly_born_cell_starts_red() {
        let t0 = Instant::now();
        let t1 = t0 + Duration::from_secs(1);

        let mut cell = Cell::new(false, t0);
        cell.step(3, t1);
        cell.apply(t1);
        // Timer reset at t1, so elapsed is zero at commit time
        assert_eq!(cell.color(), JUST_BORN);
    }

    #[test]
    fn test_old_cell_fades_to_blue() {
        let t0 = Instant::now();
        let t9 = t0 + Duration::from_secs(9);

        let mut cell = Cell::new(true, t0);
        cell.step(3, t9);
        cell.apply(t9);
        assert_eq!(cell.color(), LONG_LIVED);
    }

    #[test]
    fn test_dead_cell_is_black() {
        let t0 = Instant::now();
        let mut cell = Cell::new(true, t0);
        cell.step(0, t0);
        cell.apply(t0);
        assert_eq!(cell.color(), color::DEAD);
    }
}
