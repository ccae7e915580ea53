//! Race clock — owns tick state and the race lifecycle.
//!
//! The lifecycle is a one-way machine: NotStarted → Running → Complete.
//! There is no pause or cancellation path; a race runs to completion.

use crate::types::Tick;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RaceClock {
    pub current_tick: Tick,
    pub stage:        RaceStage,
}

impl RaceClock {
    pub fn new() -> Self {
        Self {
            current_tick: 0,
            stage: RaceStage::NotStarted,
        }
    }

    /// Advance one tick. Returns the new tick number.
    /// Panics unless the race is running — callers must start() first.
    pub fn advance(&mut self) -> Tick {
        assert_eq!(self.stage, RaceStage::Running, "advance() on a race that is not running");
        self.current_tick += 1;
        self.current_tick
    }

    /// Move NotStarted → Running. Panics on a second call.
    pub fn start(&mut self) {
        assert_eq!(self.stage, RaceStage::NotStarted, "start() called twice");
        self.stage = RaceStage::Running;
    }

    /// Move Running → Complete. Terminal.
    pub fn complete(&mut self) {
        assert_eq!(self.stage, RaceStage::Running, "complete() on a race that is not running");
        self.stage = RaceStage::Complete;
    }
}

impl Default for RaceClock {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RaceStage {
    NotStarted,
    Running,
    Complete,
}
