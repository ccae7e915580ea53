//! The race field — all participants and their per-race state.
//!
//! The racers vec is kept in current standing order: the standings pass
//! re-sorts it in place with a stable sort every tick, so equal-distance
//! ties keep their prior relative order and never register as a rank
//! change. `previous_order` holds the id sequence from the prior tick's
//! sort; it is None until the first sort has happened.

use crate::error::{RaceError, RaceResult};
use crate::price::Price;
use crate::transport::RacerRecord;
use crate::types::RacerId;
use std::collections::HashSet;

/// One participant. Identity and stats are frozen at race start; only
/// distance, finished, and the local price cache move.
#[derive(Debug, Clone)]
pub struct Racer {
    pub id: RacerId,
    pub name: String,
    pub speed: u8,
    pub aggression: u8,
    pub consistency: u8,
    pub distance: f64,
    pub finished: bool,
    /// Local price cache. Updated optimistically on every event, even
    /// when the remote write fails.
    pub current_price: Price,
}

impl Racer {
    pub fn from_record(record: RacerRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            speed: record.speed,
            aggression: record.aggression,
            consistency: record.consistency,
            distance: 0.0,
            finished: false,
            current_price: record.price,
        }
    }
}

pub struct RaceField {
    racers: Vec<Racer>,
    /// Id sequence from the prior tick's sort. None before the first sort.
    pub previous_order: Option<Vec<RacerId>>,
    pub race_distance: f64,
}

impl RaceField {
    /// Build a field from a registry roster. The roster is the universe
    /// of participants for the whole race: it must be non-empty and ids
    /// must be unique.
    pub fn from_roster(roster: Vec<RacerRecord>, race_distance: f64) -> RaceResult<Self> {
        if roster.is_empty() {
            return Err(RaceError::EmptyRoster);
        }
        let mut seen = HashSet::new();
        for record in &roster {
            if !seen.insert(record.id) {
                return Err(RaceError::DuplicateRacer(record.id));
            }
        }
        Ok(Self {
            racers: roster.into_iter().map(Racer::from_record).collect(),
            previous_order: None,
            race_distance,
        })
    }

    pub fn racers(&self) -> &[Racer] {
        &self.racers
    }

    pub fn racers_mut(&mut self) -> &mut [Racer] {
        &mut self.racers
    }

    pub fn racer(&self, id: RacerId) -> Option<&Racer> {
        self.racers.iter().find(|r| r.id == id)
    }

    pub fn racer_mut(&mut self, id: RacerId) -> Option<&mut Racer> {
        self.racers.iter_mut().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.racers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.racers.is_empty()
    }

    /// Stable in-place sort by distance descending. Ties keep their
    /// current relative order.
    pub fn sort_by_distance(&mut self) {
        self.racers
            .sort_by(|a, b| b.distance.total_cmp(&a.distance));
    }

    /// Id sequence in current standing order.
    pub fn current_order(&self) -> Vec<RacerId> {
        self.racers.iter().map(|r| r.id).collect()
    }

    pub fn all_finished(&self) -> bool {
        self.racers.iter().all(|r| r.finished)
    }
}
