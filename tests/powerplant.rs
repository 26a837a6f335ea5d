use bomber_design_calculator::airframe::Manufacturer;
use bomber_design_calculator::catalog::EngineCatalog;
use bomber_design_calculator::powerplant::{Engine, Gear, Powerplant};

fn engine(id: &str) -> Engine {
    EngineCatalog::standard()
        .get(id)
        .unwrap_or_else(|| panic!("engine {id} in catalogue"))
        .clone()
}

#[test]
fn single_engine_reliability_is_the_bare_figure() {
    let mercury = engine("mercury-xv");
    let plant = Powerplant::new(1, mercury.clone());
    assert!((plant.rely1() - mercury.rely).abs() < 1e-12);
    assert!(plant.rely2().abs() < 1e-12);
}

#[test]
fn two_or_more_failures_never_beat_one_or_more() {
    let vulture = engine("vulture-i");
    for count in 1..=6 {
        let plant = Powerplant::new(count, vulture.clone());
        assert!(
            plant.rely2() <= plant.rely1() + 1e-12,
            "count {count}: rely2 {} > rely1 {}",
            plant.rely2(),
            plant.rely1()
        );
        assert!(plant.rely2() >= -1e-12);
    }
}

#[test]
fn more_engines_fail_more_often() {
    let pegasus = engine("pegasus-xviii");
    let mut last = 0.0;
    for count in 1..=6 {
        let plant = Powerplant::new(count, pegasus.clone());
        assert!(plant.rely1() > last);
        last = plant.rely1();
    }
}

#[test]
fn power_peaks_at_full_throttle_height() {
    // Single-speed Mercury: flat boost to 10.25, falling off above.
    let mercury = engine("mercury-xv");
    let mut previous = mercury.power_at_altitude(0.0);
    for step in 1..=20 {
        let alt = f64::from(step) * 0.5;
        let power = mercury.power_at_altitude(alt);
        if alt <= 10.25 {
            assert!(
                power >= previous - 1e-9,
                "power should not fall below FTH (alt {alt})"
            );
        } else {
            assert!(power < previous, "power should fall above FTH (alt {alt})");
        }
        previous = power;
    }
}

#[test]
fn single_speed_has_no_high_gear() {
    let mercury = engine("mercury-xv");
    assert_eq!(mercury.power_at(5.0, Gear::High), 0.0);
    assert!(mercury.power_at(5.0, Gear::Low) > 0.0);
}

#[test]
fn high_gear_wins_above_the_crossover() {
    // Two-speed Merlin XX: low gear is better on the deck, high gear at height.
    let merlin = engine("merlin-xx");
    assert!(merlin.power_at(0.0, Gear::Low) > merlin.power_at(0.0, Gear::High));
    assert!(merlin.power_at(18.0, Gear::High) > merlin.power_at(18.0, Gear::Low));
    // power_at_altitude always takes the better of the two
    for step in 0..=50 {
        let alt = f64::from(step) * 0.5;
        let best = merlin.power_at_altitude(alt);
        assert!(best >= merlin.power_at(alt, Gear::Low));
        assert!(best >= merlin.power_at(alt, Gear::High));
    }
}

#[test]
fn two_stage_holds_power_higher_than_two_speed() {
    let two_speed = engine("merlin-xx");
    let two_stage = engine("merlin-60");
    let ratio_at = |e: &Engine, alt: f64| e.power_at_altitude(alt) / e.power;
    assert!(ratio_at(&two_stage, 25.0) > ratio_at(&two_speed, 25.0));
}

#[test]
fn odd_installations_lose_a_tenth_of_an_engine() {
    let mercury = engine("mercury-xv");
    let twin = Powerplant::new(2, mercury.clone());
    let triple = Powerplant::new(3, mercury.clone());
    assert!((twin.power_factor() - 2.0).abs() < 1e-12);
    assert!((triple.power_factor() - 2.9).abs() < 1e-12);
    let expected = 2.9 * mercury.power_at_altitude(0.0);
    assert!((triple.power_at_altitude(0.0) - expected).abs() < 1e-9);
}

#[test]
fn in_house_engines_get_the_mounting_discount() {
    let mercury = engine("mercury-xv");
    let mut at_bristol = Powerplant::new(2, mercury.clone());
    at_bristol.assign_airframe(Manufacturer::Bristol);
    let mut at_avro = Powerplant::new(2, mercury.clone());
    at_avro.assign_airframe(Manufacturer::Avro);
    assert!(at_bristol.tare() < at_avro.tare());
    // the discount applies to the mounting structure only
    let bare = 2.0 * mercury.tare;
    let full_mounts = at_avro.tare() - bare;
    let cut_mounts = at_bristol.tare() - bare;
    assert!((cut_mounts / full_mounts - 0.8).abs() < 1e-9);
}

#[test]
fn rolls_royce_never_matches_an_airframe() {
    let merlin = engine("merlin-xx");
    for manu in Manufacturer::ALL {
        let mut plant = Powerplant::new(4, merlin.clone());
        let unassigned = plant.tare();
        plant.assign_airframe(manu);
        assert_eq!(plant.tare(), unassigned);
    }
}

#[test]
fn fuel_rate_scales_with_count_and_power() {
    let mercury = engine("mercury-xv");
    assert!((mercury.fuel_rate() - 840.0 * 0.36).abs() < 1e-9);
    let plant = Powerplant::new(2, mercury);
    assert!((plant.fuel_rate() - 2.0 * 840.0 * 0.36).abs() < 1e-9);
}

#[test]
fn installation_cost_carries_the_integration_overhead() {
    let merlin = engine("merlin-xx");
    let plant = Powerplant::new(4, merlin.clone());
    assert!((plant.cost() - 4.0 * merlin.cost * 1.5).abs() < 1e-9);
}
