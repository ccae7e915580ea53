//! Shared primitive types used across the race simulation.

/// A simulation tick. One tick = one fixed-duration step of the race.
pub type Tick = u64;

/// Registry-assigned racer identifier. Positive, unique, never reused.
pub type RacerId = u64;

/// A 1-based position in the running order. Rank 1 is the leader.
pub type Rank = usize;
