//! Tick advancement — per-racer incremental progress.
//!
//! For each unfinished racer the pass draws one speed sample and adds it
//! to the racer's distance:
//!
//!   consistency_factor = consistency / 200
//!   noise  = uniform(0, base_drift) * (1 - cf) - (base_drift / 2) * (1 - cf)
//!   burst  = aggression / 20 with probability aggression / 500, else 0
//!   sample = max(0, speed + burst + noise)
//!
//! Noise is symmetric around zero and shrinks as consistency approaches
//! 200; above 200 the factor exceeds 1 and the term flips sign, which is
//! intentional and left unclamped. Samples never go negative, so distance
//! only moves backward through the crash pass.

use crate::event::RaceEvent;
use crate::field::RaceField;
use crate::pass::RacePass;
use crate::rng::StreamRng;
use crate::types::Tick;

pub struct PhysicsPass {
    base_drift: f64,
}

impl PhysicsPass {
    pub fn new(base_drift: f64) -> Self {
        Self { base_drift }
    }
}

impl RacePass for PhysicsPass {
    fn name(&self) -> &'static str {
        "physics"
    }

    fn update(&mut self, _tick: Tick, field: &mut RaceField, rng: &mut StreamRng) -> Vec<RaceEvent> {
        for racer in field.racers_mut() {
            if racer.finished {
                continue;
            }
            let consistency_factor = f64::from(racer.consistency) / 200.0;
            let spread = 1.0 - consistency_factor;
            let noise =
                rng.next_f64() * self.base_drift * spread - (self.base_drift / 2.0) * spread;
            let burst = if rng.chance(f64::from(racer.aggression) / 500.0) {
                f64::from(racer.aggression) / 20.0
            } else {
                0.0
            };
            let sample = (f64::from(racer.speed) + burst + noise).max(0.0);
            racer.distance += sample;
        }
        Vec::new()
    }
}
