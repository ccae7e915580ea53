//! Finish detection.
//!
//! Runs after the crash pass, so the threshold check uses post-crash
//! distance. Crossing the line is terminal per racer: finished flips
//! false→true exactly once and the racer drops out of physics and crash
//! processing from the next tick on.

use crate::event::RaceEvent;
use crate::field::RaceField;
use crate::pass::RacePass;
use crate::rng::StreamRng;
use crate::types::Tick;

pub struct FinishPass;

impl RacePass for FinishPass {
    fn name(&self) -> &'static str {
        "finish"
    }

    fn update(&mut self, tick: Tick, field: &mut RaceField, _rng: &mut StreamRng) -> Vec<RaceEvent> {
        let goal = field.race_distance;
        let mut events = Vec::new();
        for racer in field.racers_mut() {
            if racer.finished || racer.distance < goal {
                continue;
            }
            racer.finished = true;
            log::debug!(
                "tick={tick} finish: racer={} distance={:.1}",
                racer.id,
                racer.distance
            );
            events.push(RaceEvent::Finished {
                tick,
                racer_id: racer.id,
                name: racer.name.clone(),
                distance: racer.distance,
            });
        }
        events
    }
}
