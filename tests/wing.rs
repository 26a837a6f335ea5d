use bomber_design_calculator::airframe::{Manufacturer, Wing};

#[test]
fn heavier_loads_need_more_speed() {
    let wing = Wing::new(1297.0, 102.0);
    let mut last = 0.0;
    for weight in [20_000.0, 30_000.0, 45_000.0, 60_000.0, 68_000.0] {
        let v = wing.min_speed(weight, 0.0);
        assert!(v > last, "min speed should rise with weight");
        last = v;
    }
}

#[test]
fn thinner_air_needs_more_speed() {
    let wing = Wing::new(840.0, 86.0);
    let mut last = 0.0;
    for alt in [0.0, 5.0, 10.0, 20.0, 30.0] {
        let v = wing.min_speed(25_000.0, alt);
        assert!(v > last, "min speed should rise with altitude");
        last = v;
    }
}

#[test]
fn min_speed_inverts_the_lift_equation() {
    let wing = Wing::new(469.0, 56.0);
    let weight = 14_000.0;
    let v = wing.min_speed(weight, 0.0);
    assert!((wing.lift(v) - weight).abs() / weight < 1e-9);
}

#[test]
fn geometry_derivations() {
    let wing = Wing::new(1297.0, 102.0);
    assert!((wing.chord() - 1297.0 / 102.0).abs() < 1e-12);
    assert!((wing.aspect_ratio() - 102.0 * 102.0 / 1297.0).abs() < 1e-12);
    // the fitted Cl curve approaches pi^2/6 for slender wings
    assert!(wing.max_lift_coefficient() < std::f64::consts::PI.powi(2) / 6.0);
    assert!(wing.max_lift_coefficient() > 1.0);
}

#[test]
fn supermarine_wings_glide_better() {
    let mut ours = Wing::new(840.0, 86.0);
    ours.assign_airframe(Manufacturer::Supermarine);
    let mut theirs = Wing::new(840.0, 86.0);
    theirs.assign_airframe(Manufacturer::Vickers);
    assert!((ours.lift_to_drag() / theirs.lift_to_drag() - 1.05).abs() < 1e-9);
}

#[test]
fn armstrong_builds_lighter_stubby_wings() {
    // Below the generic aspect-ratio floor of 8, Armstrong's lower floor
    // shows up as less structure.
    let mut armstrong = Wing::new(469.0, 56.0);
    armstrong.assign_airframe(Manufacturer::Armstrong);
    let mut generic = Wing::new(469.0, 56.0);
    generic.assign_airframe(Manufacturer::Bristol);
    assert!(armstrong.aspect_ratio() < 8.0);
    assert!(armstrong.tare() < generic.tare());

    // Above the floor the firms weigh the same.
    let mut slender_a = Wing::new(1137.0, 105.0);
    slender_a.assign_airframe(Manufacturer::Armstrong);
    let mut slender_b = Wing::new(1137.0, 105.0);
    slender_b.assign_airframe(Manufacturer::Bristol);
    assert!(slender_a.aspect_ratio() > 8.0);
    assert_eq!(slender_a.tare(), slender_b.tare());
}

#[test]
fn span_dominates_the_mass_law() {
    let short = Wing::new(1297.0, 88.0);
    let long = Wing::new(1297.0, 118.0);
    assert!(long.tare() > short.tare());
}
