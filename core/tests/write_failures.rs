//! A dead registry must never stall or kill a race.
//!
//! Price pushes are fire-and-forget: the local cache is updated before
//! the write goes out, failures are recorded, and the loop keeps ticking.

use paddock_core::{
    config::RaceConfig,
    price::Price,
    runner::RaceRunner,
    transport::{MemoryTransport, RacerRecord},
};

const ONE_UNIT: u128 = 1_000_000_000_000_000_000;

fn solo_roster() -> Vec<RacerRecord> {
    vec![RacerRecord {
        id: 9,
        name: "Solo".to_string(),
        speed: 200,
        aggression: 0,
        consistency: 255,
        price: Price::new(ONE_UNIT),
    }]
}

fn quiet_config() -> RaceConfig {
    let mut config = RaceConfig::default_test();
    config.race_distance = 10.0;
    config.base_drift = 0.0;
    config.crash_base = 0.0;
    config
}

#[test]
fn race_completes_when_every_write_fails() {
    let registry = MemoryTransport::new(solo_roster());
    registry.set_fail_writes(true);

    let mut runner =
        RaceRunner::start(&quiet_config(), 3, Box::new(registry.clone())).expect("start");
    let report = runner.run().expect("run must not surface write errors");

    assert_eq!(report.ticks, 1);
    assert_eq!(report.write_failures, 1);

    // Local cache took the finish bonus anyway.
    assert_eq!(
        report.standings[0].price,
        Price::new(1_050_000_000_000_000_000)
    );

    // The registry saw nothing.
    assert_eq!(registry.price_of(9), Some(Price::new(ONE_UNIT)));
    assert!(registry.writes().is_empty());

    // The failure is on the record.
    let failures = runner
        .engine()
        .event_log()
        .iter()
        .filter(|entry| entry.event_type == "price_write_failed")
        .count();
    assert_eq!(failures, 1);
}

#[test]
fn exhausted_retries_still_do_not_abort() {
    let registry = MemoryTransport::new(solo_roster());
    registry.set_fail_writes(true);

    let mut config = quiet_config();
    config.write_retries = 2;

    let mut runner = RaceRunner::start(&config, 3, Box::new(registry.clone())).expect("start");
    let report = runner.run().expect("run");

    // Retries burn attempts, not the race; the failure counts once.
    assert_eq!(report.write_failures, 1);
    assert!(registry.writes().is_empty());
}
