//! Race events — everything the simulation reports about itself.
//!
//! RULE: Passes communicate outward ONLY through events.
//! A pass never calls another pass, and price side effects are driven
//! entirely off the event stream by the runner.

use crate::price::Price;
use crate::types::{RacerId, Rank, Tick};
use serde::{Deserialize, Serialize};

/// Percentage applied to a racer's price on a rank improvement.
pub const OVERTAKE_BOOST_PCT: u32 = 10;
/// Percentage removed from a racer's price on a crash.
pub const CRASH_PENALTY_PCT: u32 = 20;
/// Percentage applied to a racer's price on crossing the line.
pub const FINISH_BONUS_PCT: u32 = 5;

/// Every event emitted during a race.
/// Variants are appended over time — never removed or reordered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RaceEvent {
    // ── Engine events ──────────────────────────────
    TickStarted {
        tick: Tick,
    },
    TickCompleted {
        tick: Tick,
    },
    RaceStarted {
        seed: u64,
        field_size: usize,
        race_distance: f64,
    },
    RaceCompleted {
        tick: Tick,
        ranking: Vec<RacerId>,
    },

    // ── Pass events ────────────────────────────────
    Overtake {
        tick: Tick,
        racer_id: RacerId,
        name: String,
        old_rank: Rank,
        new_rank: Rank,
    },
    Crash {
        tick: Tick,
        racer_id: RacerId,
        name: String,
        distance_lost: f64,
    },
    Finished {
        tick: Tick,
        racer_id: RacerId,
        name: String,
        distance: f64,
    },

    // ── Runner events ──────────────────────────────
    PriceAdjusted {
        tick: Tick,
        racer_id: RacerId,
        cause: PriceMoveCause,
        old_price: Price,
        new_price: Price,
    },
    PriceWriteFailed {
        tick: Tick,
        racer_id: RacerId,
        detail: String,
    },
}

impl RaceEvent {
    /// Stable string name for the event_type column of the event log.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::TickStarted { .. } => "tick_started",
            Self::TickCompleted { .. } => "tick_completed",
            Self::RaceStarted { .. } => "race_started",
            Self::RaceCompleted { .. } => "race_completed",
            Self::Overtake { .. } => "overtake",
            Self::Crash { .. } => "crash",
            Self::Finished { .. } => "finished",
            Self::PriceAdjusted { .. } => "price_adjusted",
            Self::PriceWriteFailed { .. } => "price_write_failed",
        }
    }
}

/// Why a price moved.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PriceMoveCause {
    Overtake,
    Crash,
    Finish,
}

impl PriceMoveCause {
    /// Apply this cause's percentage move. Exact integer arithmetic:
    /// boosts add floor(price * pct / 100), the crash cut subtracts it
    /// and saturates at zero.
    pub fn apply(self, price: Price) -> Price {
        match self {
            Self::Overtake => price.add_pct(OVERTAKE_BOOST_PCT),
            Self::Crash => price.sub_pct(CRASH_PENALTY_PCT),
            Self::Finish => price.add_pct(FINISH_BONUS_PCT),
        }
    }
}

/// One entry of the in-memory event log kept by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLogEntry {
    pub tick: Tick,
    /// Name of the pass (or "engine"/"runner") that emitted the event.
    pub source: String,
    pub event_type: String,
    /// JSON-serialized RaceEvent.
    pub payload: String,
}
