//! Tick advancement properties.

use paddock_core::{
    field::RaceField,
    pass::RacePass,
    physics_pass::PhysicsPass,
    price::Price,
    rng::{StreamRng, StreamSlot},
    transport::RacerRecord,
};

fn field_of(records: Vec<RacerRecord>) -> RaceField {
    RaceField::from_roster(records, 5000.0).expect("field")
}

fn record(id: u64, speed: u8, aggression: u8, consistency: u8) -> RacerRecord {
    RacerRecord {
        id,
        name: format!("racer-{id}"),
        speed,
        aggression,
        consistency,
        price: Price::new(1_000),
    }
}

fn physics_rng() -> StreamRng {
    StreamRng::new(42, StreamSlot::Physics as u64)
}

#[test]
fn zero_drift_zero_aggression_is_pure_speed() {
    let mut field = field_of(vec![record(1, 200, 0, 0)]);
    let mut pass = PhysicsPass::new(0.0);
    let mut rng = physics_rng();

    for _ in 0..3 {
        let events = pass.update(1, &mut field, &mut rng);
        assert!(events.is_empty());
    }
    assert_eq!(field.racer(1).expect("racer").distance, 600.0);
}

#[test]
fn consistency_200_cancels_noise_entirely() {
    // spread = 1 - 200/200 = 0, so the drift magnitude is irrelevant.
    let mut field = field_of(vec![record(1, 150, 0, 200)]);
    let mut pass = PhysicsPass::new(5.0);
    let mut rng = physics_rng();

    pass.update(1, &mut field, &mut rng);
    assert_eq!(field.racer(1).expect("racer").distance, 150.0);
}

#[test]
fn samples_never_move_a_racer_backward() {
    // A hopeless racer: zero speed, zero consistency, huge drift. The
    // sample clamp at zero keeps distance non-decreasing regardless of
    // how the noise lands.
    let mut field = field_of(vec![record(1, 0, 0, 0)]);
    let mut pass = PhysicsPass::new(1000.0);
    let mut rng = physics_rng();

    let mut last = 0.0;
    for tick in 1..=100 {
        pass.update(tick, &mut field, &mut rng);
        let distance = field.racer(1).expect("racer").distance;
        assert!(distance >= last, "tick {tick}: {distance} < {last}");
        last = distance;
    }
}

#[test]
fn finished_racers_do_not_move() {
    let mut field = field_of(vec![record(1, 200, 0, 0)]);
    {
        let racer = field.racer_mut(1).expect("racer");
        racer.distance = 5000.0;
        racer.finished = true;
    }
    let mut pass = PhysicsPass::new(5.0);
    let mut rng = physics_rng();

    pass.update(1, &mut field, &mut rng);
    assert_eq!(field.racer(1).expect("racer").distance, 5000.0);
}
