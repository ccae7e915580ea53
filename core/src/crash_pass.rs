//! Crash detection — probabilistic setbacks for unfinished racers.
//!
//! Per racer per tick:
//!
//!   p = base_rate + 0.01 * (aggression/255)
//!                 + 0.01 * (1 - consistency/255) * (aggression/255)
//!
//! A crash knocks the racer back twice its speed stat, clamped at zero.
//! The rank fallout shows up on the NEXT tick's standings comparison; it
//! is not corrected mid-tick.

use crate::event::RaceEvent;
use crate::field::RaceField;
use crate::pass::RacePass;
use crate::rng::StreamRng;
use crate::types::Tick;

pub struct CrashPass {
    base_rate: f64,
}

impl CrashPass {
    pub fn new(base_rate: f64) -> Self {
        Self { base_rate }
    }
}

impl RacePass for CrashPass {
    fn name(&self) -> &'static str {
        "crash"
    }

    fn update(&mut self, tick: Tick, field: &mut RaceField, rng: &mut StreamRng) -> Vec<RaceEvent> {
        let mut events = Vec::new();
        for racer in field.racers_mut() {
            if racer.finished {
                continue;
            }
            let aggression = f64::from(racer.aggression) / 255.0;
            let steadiness = f64::from(racer.consistency) / 255.0;
            let p = self.base_rate + 0.01 * aggression + 0.01 * (1.0 - steadiness) * aggression;
            if !rng.chance(p) {
                continue;
            }
            let before = racer.distance;
            racer.distance = (racer.distance - f64::from(racer.speed) * 2.0).max(0.0);
            let distance_lost = before - racer.distance;
            log::debug!(
                "tick={tick} crash: racer={} lost={distance_lost:.1}",
                racer.id
            );
            events.push(RaceEvent::Crash {
                tick,
                racer_id: racer.id,
                name: racer.name.clone(),
                distance_lost,
            });
        }
        events
    }
}
