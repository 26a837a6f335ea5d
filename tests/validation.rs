use bomber_design_calculator::airframe::{
    Bomber, BombBay, Crewman, DesignError, DesignSpec, DesignWarning, Electronics, Fuselage,
    Girth, Manufacturer, MountPoint, Role, Turret, Wing,
};
use bomber_design_calculator::catalog::EngineCatalog;
use bomber_design_calculator::powerplant::Powerplant;

fn spec(
    engine_count: u32,
    turrets: Vec<Turret>,
    manufacturer: Manufacturer,
    fuselage: Fuselage,
) -> DesignSpec {
    let catalog = EngineCatalog::standard();
    let pegasus = catalog.get("pegasus-xviii").expect("pegasus").clone();
    DesignSpec {
        powerplant: Powerplant::new(engine_count, pegasus),
        turrets,
        wing: Wing::new(840.0, 86.0),
        crew: vec![
            Crewman::pilot(),
            Crewman::navigator(),
            Crewman::wireless_operator(),
            Crewman::gunner(),
            Crewman::gunner(),
            Crewman::gunner(),
        ],
        bay: BombBay::new(4500.0, Girth::Medium),
        fuel_hours: 10.0,
        manufacturer,
        fuselage,
        electronics: Electronics::High,
        high_altitude: false,
        self_sealing_tanks: true,
    }
}

#[test]
fn nose_engine_conflicts_with_nose_turret() {
    let result = Bomber::new(spec(
        3,
        vec![Turret::NoseTwin, Turret::TailTwin],
        Manufacturer::HandleyPage,
        Fuselage::Normal,
    ));
    assert_eq!(result.err(), Some(DesignError::MountConflict(MountPoint::Nose)));
}

#[test]
fn two_turrets_cannot_share_a_position() {
    let result = Bomber::new(spec(
        2,
        vec![Turret::TailTwin, Turret::TailQuad],
        Manufacturer::HandleyPage,
        Fuselage::Normal,
    ));
    assert_eq!(result.err(), Some(DesignError::MountConflict(MountPoint::Tail)));
}

#[test]
fn dustbin_and_aft_mount_both_claim_the_ventral_slot() {
    let result = Bomber::new(spec(
        2,
        vec![Turret::VentralDustbin, Turret::VentralAft],
        Manufacturer::HandleyPage,
        Fuselage::Normal,
    ));
    assert_eq!(
        result.err(),
        Some(DesignError::MountConflict(MountPoint::Ventral))
    );
}

#[test]
fn conflict_errors_name_the_position() {
    let err = Bomber::new(spec(
        3,
        vec![Turret::NoseSingle],
        Manufacturer::HandleyPage,
        Fuselage::Normal,
    ))
    .err()
    .expect("conflict");
    assert!(err.to_string().contains("nose"), "got: {err}");
}

#[test]
fn geodetic_construction_is_a_vickers_monopoly() {
    let refused = Bomber::new(spec(
        2,
        vec![Turret::NoseTwin, Turret::TailTwin],
        Manufacturer::Avro,
        Fuselage::Geodetic,
    ));
    assert_eq!(
        refused.err(),
        Some(DesignError::GeodeticLicence(Manufacturer::Avro))
    );

    let built = Bomber::new(spec(
        2,
        vec![Turret::NoseTwin, Turret::TailTwin],
        Manufacturer::Vickers,
        Fuselage::Geodetic,
    ));
    assert!(built.is_ok());
}

#[test]
fn undergunned_designs_build_with_a_warning() {
    let mut undergunned = spec(
        2,
        vec![Turret::NoseTwin, Turret::Waist, Turret::TailTwin],
        Manufacturer::Vickers,
        Fuselage::Normal,
    );
    undergunned.crew = vec![Crewman::pilot(), Crewman::navigator(), Crewman::gunner()];
    let bomber = Bomber::new(undergunned).expect("warning is not fatal");
    assert_eq!(
        bomber.warnings(),
        &[DesignWarning::NotEnoughGunners {
            turrets: 3,
            gunners: 1,
        }]
    );
}

#[test]
fn fully_crewed_designs_carry_no_warnings() {
    let bomber = Bomber::new(spec(
        2,
        vec![Turret::NoseTwin, Turret::Waist, Turret::TailTwin],
        Manufacturer::Vickers,
        Fuselage::Normal,
    ))
    .expect("valid design");
    assert!(bomber.warnings().is_empty());
}

#[test]
fn crewmen_on_guns_count_as_gunners() {
    let mut doubled = spec(
        2,
        vec![Turret::NoseTwin, Turret::TailTwin],
        Manufacturer::Vickers,
        Fuselage::Normal,
    );
    doubled.crew = vec![
        Crewman::pilot(),
        Crewman::new(Role::WirelessOperator, true),
        Crewman::gunner(),
    ];
    let bomber = Bomber::new(doubled).expect("valid design");
    assert_eq!(bomber.gunners(), 2);
    assert!(bomber.warnings().is_empty());
}

#[test]
fn unarmed_designs_validate_trivially() {
    let bomber = Bomber::new(spec(
        2,
        Vec::new(),
        Manufacturer::DeHavilland,
        Fuselage::Normal,
    ))
    .expect("valid design");
    assert_eq!(bomber.needed_gunners(), 0);
}
