use std::io::Write;

use bomber_design_calculator::catalog::EngineCatalog;
use bomber_design_calculator::config::{
    ConfigError, ElectronicsConfig, build_design, find_design, load_designs,
};

#[test]
fn reference_scenario_contains_the_fleet() {
    let designs = load_designs("data/scenarios/designs.yaml").expect("designs yaml");
    assert!(designs.len() >= 8);
    for name in [
        "Blenheim IV",
        "Whitley V",
        "Hampden",
        "Wellington Ic",
        "Mosquito IX",
        "Manchester",
        "Stirling",
        "Lancaster",
    ] {
        assert!(
            designs.iter().any(|d| d.name == name),
            "{name} missing from scenario"
        );
    }
}

#[test]
fn omitted_fields_take_their_doctrine_defaults() {
    let designs = load_designs("data/scenarios/designs.yaml").expect("designs yaml");
    let manchester = designs
        .iter()
        .find(|d| d.name == "Manchester")
        .expect("Manchester");
    assert!(matches!(manchester.electronics, ElectronicsConfig::High));
    assert!(manchester.self_sealing_tanks);
    assert!(!manchester.high_altitude);
}

#[test]
fn every_reference_design_builds() {
    let catalog = EngineCatalog::standard();
    let designs = load_designs("data/scenarios/designs.yaml").expect("designs yaml");
    for design in &designs {
        build_design(design, &catalog)
            .unwrap_or_else(|e| panic!("{} should build: {e}", design.name));
    }
}

#[test]
fn design_lookup_is_case_insensitive() {
    let designs = load_designs("data/scenarios/designs.yaml").expect("designs yaml");
    assert!(find_design(&designs, "lancaster").is_ok());
    assert!(find_design(&designs, "LANCASTER").is_ok());
    let missing = find_design(&designs, "Halifax");
    assert!(matches!(missing, Err(ConfigError::UnknownDesign(_))));
}

#[test]
fn unknown_catalogue_ids_are_reported() {
    let catalog = EngineCatalog::standard();
    let designs = load_designs("data/scenarios/designs.yaml").expect("designs yaml");
    let blenheim = designs
        .iter()
        .find(|d| d.name == "Blenheim IV")
        .expect("Blenheim");

    let mut bad_engine = blenheim.clone();
    bad_engine.engines.model = "griffon-61".to_string();
    assert!(matches!(
        build_design(&bad_engine, &catalog),
        Err(ConfigError::UnknownEngine(_))
    ));

    let mut bad_turret = blenheim.clone();
    bad_turret.turrets.push("mid-under-quad".to_string());
    assert!(matches!(
        build_design(&bad_turret, &catalog),
        Err(ConfigError::UnknownTurret(_))
    ));
}

#[test]
fn invalid_designs_carry_their_name() {
    let catalog = EngineCatalog::standard();
    let designs = load_designs("data/scenarios/designs.yaml").expect("designs yaml");
    let mut wellington = designs
        .iter()
        .find(|d| d.name == "Wellington Ic")
        .expect("Wellington")
        .clone();
    // a second tail turret claims an occupied position
    wellington.turrets.push("tail-quad".to_string());
    let err = build_design(&wellington, &catalog).err().expect("conflict");
    let message = err.to_string();
    assert!(message.contains("Wellington Ic"), "got: {message}");
}

#[test]
fn toml_records_load_from_a_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let record = r#"
name = "Sparrow"
manufacturer = "bristol"
turrets = ["tail-twin"]
crew = ["pilot", "navigator", { role = "wireless_operator", gun = true }]
fuel_hours = 6.0
electronics = "low"

[engines]
model = "mercury-xv"
count = 2

[wing]
area_sqft = 469.0
span_ft = 56.0

[bomb_bay]
capacity_lb = 1000.0
girth = "small"
"#;
    let mut file = std::fs::File::create(dir.path().join("sparrow.toml")).expect("create toml");
    file.write_all(record.as_bytes()).expect("write toml");
    drop(file);

    let designs = load_designs(dir.path()).expect("toml dir");
    assert_eq!(designs.len(), 1);
    assert_eq!(designs[0].name, "Sparrow");
    // defaults fill the omitted doctrine fields
    assert!(designs[0].self_sealing_tanks);

    let catalog = EngineCatalog::standard();
    let bomber = build_design(&designs[0], &catalog).expect("Sparrow builds");
    assert_eq!(bomber.gunners(), 1);
    assert!(bomber.warnings().is_empty());
}
