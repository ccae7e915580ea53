//! The simulation engine — advances a race one tick at a time.
//!
//! EXECUTION ORDER (fixed, documented, never reordered):
//!   1. Physics pass    — advance all unfinished racers
//!   2. Standings pass  — re-sort, detect overtakes
//!   3. Crash pass      — probabilistic setbacks
//!   4. Finish pass     — threshold check on post-crash distance
//!
//! RULES:
//!   - Passes execute in registration order, every tick.
//!   - No pass calls another pass's functions directly.
//!   - All randomness flows through the RngBank streams.
//!   - Every emitted event is recorded in the event log.
//!
//! The engine knows nothing about the transport: price side effects are
//! applied by the runner off the event stream.

use crate::{
    clock::RaceClock,
    config::RaceConfig,
    crash_pass::CrashPass,
    error::RaceResult,
    event::{EventLogEntry, RaceEvent},
    field::RaceField,
    finish_pass::FinishPass,
    pass::RacePass,
    physics_pass::PhysicsPass,
    rng::{RngBank, StreamRng, StreamSlot},
    standings_pass::StandingsPass,
};

pub struct RaceEngine {
    pub clock: RaceClock,
    rng_bank:  RngBank,
    passes:    Vec<(StreamRng, Box<dyn RacePass>)>,
    field:     RaceField,
    event_log: Vec<EventLogEntry>,
}

impl RaceEngine {
    pub fn new(seed: u64, field: RaceField) -> Self {
        Self {
            clock: RaceClock::new(),
            rng_bank: RngBank::new(seed),
            passes: Vec::new(),
            field,
            event_log: Vec::new(),
        }
    }

    /// Build a fully wired engine with all passes registered.
    /// Call this instead of new() + manual register() calls.
    pub fn build(seed: u64, field: RaceField, config: &RaceConfig) -> Self {
        let mut engine = Self::new(seed, field);

        // EXECUTION ORDER — fixed, documented, never reordered.
        engine.register(StreamSlot::Physics, Box::new(PhysicsPass::new(config.base_drift)));
        engine.register(StreamSlot::Standings, Box::new(StandingsPass));
        engine.register(StreamSlot::Crash, Box::new(CrashPass::new(config.crash_base)));
        engine.register(StreamSlot::Finish, Box::new(FinishPass));
        engine
    }

    /// Register a pass. Call in the documented execution order. The slot
    /// pins the pass to its RNG stream for the lifetime of the race.
    pub fn register(&mut self, slot: StreamSlot, pass: Box<dyn RacePass>) {
        let rng = self.rng_bank.stream(slot);
        self.passes.push((rng, pass));
    }

    /// Advance one tick. This is the core simulation step.
    pub fn tick(&mut self) -> RaceResult<Vec<RaceEvent>> {
        let current_tick = self.clock.advance();
        let mut tick_events = vec![RaceEvent::TickStarted { tick: current_tick }];

        for (rng, pass) in &mut self.passes {
            let new_events = pass.update(current_tick, &mut self.field, rng);

            for event in &new_events {
                self.event_log.push(EventLogEntry {
                    tick: current_tick,
                    source: pass.name().to_string(),
                    event_type: event.type_name().to_string(),
                    payload: serde_json::to_string(event)?,
                });
            }

            tick_events.extend(new_events);
        }

        tick_events.push(RaceEvent::TickCompleted { tick: current_tick });
        Ok(tick_events)
    }

    /// Record an event that originated outside the passes (the runner's
    /// price adjustments, lifecycle markers).
    pub fn record(&mut self, source: &str, event: &RaceEvent) -> RaceResult<()> {
        self.event_log.push(EventLogEntry {
            tick: self.clock.current_tick,
            source: source.to_string(),
            event_type: event.type_name().to_string(),
            payload: serde_json::to_string(event)?,
        });
        Ok(())
    }

    pub fn field(&self) -> &RaceField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut RaceField {
        &mut self.field
    }

    pub fn event_log(&self) -> &[EventLogEntry] {
        &self.event_log
    }
}
