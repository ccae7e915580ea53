//! The race runner — seeds the field from the registry, drives the
//! engine to completion, and pushes price updates back out.
//!
//! RULES:
//!   - A failed roster read aborts startup; the race never begins.
//!   - A failed price write never aborts anything: the local price is
//!     already updated optimistically, the failure is logged and
//!     recorded, and the loop keeps ticking. Local race state is the
//!     source of truth for the duration of the race.
//!   - One runner = one race = one thread. Transport calls are
//!     sequential; nothing here is shared across races.

use crate::{
    config::RaceConfig,
    engine::RaceEngine,
    error::{RaceError, RaceResult},
    event::{PriceMoveCause, RaceEvent},
    field::RaceField,
    price::Price,
    transport::RegistryTransport,
    types::{RacerId, Rank, Tick},
};
use std::thread;
use std::time::Duration;

/// Pause between retry attempts for a failed price push.
const WRITE_RETRY_BACKOFF: Duration = Duration::from_millis(50);

pub struct RaceRunner {
    engine: RaceEngine,
    transport: Box<dyn RegistryTransport>,
    seed: u64,
    tick_ms: u64,
    write_retries: u32,
    write_failures: u64,
    overtakes: u64,
    crashes: u64,
}

impl RaceRunner {
    /// Read the roster and build a ready-to-run race. Fatal on transport
    /// or roster-validation failure.
    pub fn start(
        config: &RaceConfig,
        seed: u64,
        transport: Box<dyn RegistryTransport>,
    ) -> RaceResult<Self> {
        let roster = transport.read_all().map_err(RaceError::Startup)?;
        let field = RaceField::from_roster(roster, config.race_distance)?;
        log::info!(
            "race seeded: {} racers, distance {}, seed {seed}",
            field.len(),
            config.race_distance
        );
        Ok(Self {
            engine: RaceEngine::build(seed, field, config),
            transport,
            seed,
            tick_ms: config.tick_ms,
            write_retries: config.write_retries,
            write_failures: 0,
            overtakes: 0,
            crashes: 0,
        })
    }

    /// Run the race to completion and return the final report.
    pub fn run(&mut self) -> RaceResult<RaceReport> {
        let seed_event = RaceEvent::RaceStarted {
            seed: self.seed,
            field_size: self.engine.field().len(),
            race_distance: self.engine.field().race_distance,
        };
        self.engine.record("engine", &seed_event)?;
        self.engine.clock.start();

        while !self.engine.field().all_finished() {
            let events = self.engine.tick()?;
            for event in &events {
                self.settle(event)?;
            }
            if self.tick_ms > 0 && !self.engine.field().all_finished() {
                thread::sleep(Duration::from_millis(self.tick_ms));
            }
        }

        // Final ranking: one more stable sort, since a same-tick crash can
        // leave the vec stale relative to final distances.
        self.engine.field_mut().sort_by_distance();
        let ranking = self.engine.field().current_order();
        let final_tick = self.engine.clock.current_tick;
        self.engine.record(
            "engine",
            &RaceEvent::RaceCompleted {
                tick: final_tick,
                ranking: ranking.clone(),
            },
        )?;
        self.engine.clock.complete();
        log::info!("race complete after {final_tick} ticks");
        Ok(self.report())
    }

    pub fn engine(&self) -> &RaceEngine {
        &self.engine
    }

    /// Apply the price side effect of one event: update the local cache
    /// first, then push to the registry best-effort.
    fn settle(&mut self, event: &RaceEvent) -> RaceResult<()> {
        let (racer_id, cause) = match event {
            RaceEvent::Overtake { racer_id, .. } => {
                self.overtakes += 1;
                (*racer_id, PriceMoveCause::Overtake)
            }
            RaceEvent::Crash { racer_id, .. } => {
                self.crashes += 1;
                (*racer_id, PriceMoveCause::Crash)
            }
            RaceEvent::Finished { racer_id, .. } => (*racer_id, PriceMoveCause::Finish),
            _ => return Ok(()),
        };

        let tick = self.engine.clock.current_tick;
        let Some(racer) = self.engine.field_mut().racer_mut(racer_id) else {
            log::debug!("settle: racer {racer_id} not in field, skipping");
            return Ok(());
        };
        let old_price = racer.current_price;
        let new_price = cause.apply(old_price);
        racer.current_price = new_price;

        self.engine.record(
            "runner",
            &RaceEvent::PriceAdjusted {
                tick,
                racer_id,
                cause,
                old_price,
                new_price,
            },
        )?;
        self.push_price(tick, racer_id, new_price)
    }

    /// Best-effort price push. Failures are terminal for the write, not
    /// for the race.
    fn push_price(&mut self, tick: Tick, racer_id: RacerId, price: Price) -> RaceResult<()> {
        let mut attempt = 0;
        loop {
            match self.transport.write_price(racer_id, price) {
                Ok(receipt) => {
                    log::debug!(
                        "price push confirmed for racer {racer_id}: {}",
                        receipt.confirmation
                    );
                    return Ok(());
                }
                Err(err) if attempt < self.write_retries => {
                    attempt += 1;
                    log::debug!(
                        "price push for racer {racer_id} failed ({err}), retry {attempt}/{}",
                        self.write_retries
                    );
                    thread::sleep(WRITE_RETRY_BACKOFF);
                }
                Err(err) => {
                    log::warn!("price push failed for racer {racer_id}: {err}");
                    self.write_failures += 1;
                    self.engine.record(
                        "runner",
                        &RaceEvent::PriceWriteFailed {
                            tick,
                            racer_id,
                            detail: err.to_string(),
                        },
                    )?;
                    return Ok(());
                }
            }
        }
    }

    fn report(&self) -> RaceReport {
        let standings = self
            .engine
            .field()
            .racers()
            .iter()
            .enumerate()
            .map(|(index, racer)| StandingLine {
                rank: index + 1,
                racer_id: racer.id,
                name: racer.name.clone(),
                distance: racer.distance,
                price: racer.current_price,
            })
            .collect();
        RaceReport {
            ticks: self.engine.clock.current_tick,
            overtakes: self.overtakes,
            crashes: self.crashes,
            write_failures: self.write_failures,
            standings,
        }
    }
}

/// End-of-run summary handed to the caller (and printed by race-runner).
#[derive(Debug, Clone, PartialEq)]
pub struct RaceReport {
    pub ticks: Tick,
    pub overtakes: u64,
    pub crashes: u64,
    pub write_failures: u64,
    pub standings: Vec<StandingLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StandingLine {
    pub rank: Rank,
    pub racer_id: RacerId,
    pub name: String,
    pub distance: f64,
    pub price: Price,
}
