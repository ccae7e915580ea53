//! Race pass trait.
//!
//! RULE: Every stage of a tick implements RacePass.
//! The engine calls update() on each registered pass in registration
//! order, every tick. Execution order is fixed and documented in
//! engine.rs.

use crate::event::RaceEvent;
use crate::field::RaceField;
use crate::rng::StreamRng;
use crate::types::Tick;

/// The contract every pass must fulfill.
pub trait RacePass: Send {
    /// Unique stable name for this pass.
    fn name(&self) -> &'static str;

    /// Called once per tick by the engine.
    ///
    /// - `tick`:  the current tick number
    /// - `field`: the shared race state, mutated in place
    /// - `rng`:   this pass's deterministic RNG stream
    ///
    /// Returns the events this pass emitted during the tick.
    fn update(&mut self, tick: Tick, field: &mut RaceField, rng: &mut StreamRng) -> Vec<RaceEvent>;
}
