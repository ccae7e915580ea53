//! Rank-change detection.
//!
//! Re-sorts the field by distance descending (stable, in place) and
//! compares each racer's new index against its index in the prior tick's
//! order. An index improvement is an overtake. The first sort of a race
//! only establishes previous_order and emits nothing. Finished racers
//! stay in the sort, so a finisher parked at the front keeps its rank.

use crate::event::RaceEvent;
use crate::field::RaceField;
use crate::pass::RacePass;
use crate::rng::StreamRng;
use crate::types::Tick;

pub struct StandingsPass;

impl RacePass for StandingsPass {
    fn name(&self) -> &'static str {
        "standings"
    }

    fn update(&mut self, tick: Tick, field: &mut RaceField, _rng: &mut StreamRng) -> Vec<RaceEvent> {
        field.sort_by_distance();
        let order = field.current_order();

        let mut events = Vec::new();
        if let Some(previous) = field.previous_order.as_ref() {
            for (index, id) in order.iter().enumerate() {
                let Some(prev_index) = previous.iter().position(|p| p == id) else {
                    continue;
                };
                if prev_index > index {
                    let racer = &field.racers()[index];
                    log::debug!(
                        "tick={tick} overtake: racer={} {}→{}",
                        racer.id,
                        prev_index + 1,
                        index + 1
                    );
                    events.push(RaceEvent::Overtake {
                        tick,
                        racer_id: *id,
                        name: racer.name.clone(),
                        old_rank: prev_index + 1,
                        new_rank: index + 1,
                    });
                }
            }
        }

        field.previous_order = Some(order);
        events
    }
}
