//! The defensive armament catalogue.
//!
//! A closed set of gun installations, each a static record plus a pure
//! coverage function over the six attack sectors. Firepower is counted in
//! rifle-calibre (.303) gun equivalents; mounts with poor sighting on a
//! sector bring less than their gun count to bear.

/// Attack-approach sectors used to score defensive fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Front,
    BeamHigh,
    BeamLow,
    TailHigh,
    TailLow,
    Beneath,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::Front,
        Direction::BeamHigh,
        Direction::BeamLow,
        Direction::TailHigh,
        Direction::TailLow,
        Direction::Beneath,
    ];

    /// Approaches from above the horizon.
    pub fn is_high(&self) -> bool {
        matches!(self, Direction::BeamHigh | Direction::TailHigh)
    }

    /// Approaches from below the horizon.
    pub fn is_low(&self) -> bool {
        matches!(
            self,
            Direction::BeamLow | Direction::TailLow | Direction::Beneath
        )
    }

    /// Relative weight of the fighter threat from this sector. Attacks
    /// from astern and below dominate.
    pub fn threat_weight(&self) -> f64 {
        match self {
            Direction::Front => 1.0,
            Direction::BeamHigh => 2.0,
            Direction::BeamLow => 1.0,
            Direction::TailHigh => 2.0,
            Direction::TailLow => 3.0,
            Direction::Beneath => 3.0,
        }
    }
}

/// Positions a gun installation can occupy. An odd engine count claims
/// the nose for itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountPoint {
    Nose,
    Dorsal,
    Tail,
    Waist,
    Ventral,
    Chin,
}

impl std::fmt::Display for MountPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            MountPoint::Nose => "nose",
            MountPoint::Dorsal => "dorsal",
            MountPoint::Tail => "tail",
            MountPoint::Waist => "waist",
            MountPoint::Ventral => "ventral",
            MountPoint::Chin => "chin",
        })
    }
}

/// Static record for one gun installation.
#[derive(Debug, Clone, Copy)]
pub struct TurretSpec {
    pub name: &'static str,
    pub description: &'static str,
    /// Chance the installation needs maintenance on a given day.
    pub serv: f64,
    /// Bare weight in lb, mounting structure excluded.
    pub tare: f64,
    /// Drag in mph knocked off the airframe; the design model converts
    /// this to a force with a fixed fudge factor.
    pub drag: f64,
    pub mount: MountPoint,
    /// Gun count in .303 equivalents.
    pub guns: u32,
}

/// The closed catalogue of gun installations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turret {
    NoseSingle,
    NoseTwin,
    DorsalTwin,
    DorsalAft,
    DorsalQuad,
    VentralDustbin,
    VentralAft,
    Waist,
    Chin,
    TailTwin,
    TailQuad,
}

const NOSE_SINGLE: TurretSpec = TurretSpec {
    name: "Nose gun (single)",
    description: "Single .303 on a flexible mount or simple turret in the nose.",
    serv: 0.002,
    tare: 25.0,
    drag: 4.0,
    mount: MountPoint::Nose,
    guns: 1,
};

const NOSE_TWIN: TurretSpec = TurretSpec {
    name: "Nose turret (twin)",
    description: "Twin .303s in a powered nose turret.",
    serv: 0.005,
    tare: 100.0,
    drag: 6.0,
    mount: MountPoint::Nose,
    guns: 2,
};

const DORSAL_TWIN: TurretSpec = TurretSpec {
    name: "Dorsal turret (twin)",
    description: "Twin .303s in a fully rotating mid-upper turret.",
    serv: 0.005,
    tare: 100.0,
    drag: 10.0,
    mount: MountPoint::Dorsal,
    guns: 2,
};

const DORSAL_AFT: TurretSpec = TurretSpec {
    name: "Dorsal after mount",
    description: "Twin .303s in a rearward-facing upper blister.",
    serv: 0.005,
    tare: 30.0,
    drag: 6.0,
    mount: MountPoint::Dorsal,
    guns: 2,
};

const DORSAL_QUAD: TurretSpec = TurretSpec {
    name: "Dorsal turret (quad)",
    description: "Quad .303s in a fully rotating mid-upper turret.",
    serv: 0.005,
    tare: 170.0,
    drag: 12.0,
    mount: MountPoint::Dorsal,
    guns: 4,
};

const VENTRAL_DUSTBIN: TurretSpec = TurretSpec {
    name: "Ventral dustbin",
    description: "Retractable mid-under turret with twin .303s.",
    serv: 0.01,
    tare: 170.0,
    drag: 20.0,
    mount: MountPoint::Ventral,
    guns: 2,
};

const VENTRAL_AFT: TurretSpec = TurretSpec {
    name: "Ventral after mount",
    description: "Twin .303s in a rearward-facing under mount.",
    serv: 0.005,
    tare: 50.0,
    drag: 8.0,
    mount: MountPoint::Ventral,
    guns: 2,
};

const WAIST: TurretSpec = TurretSpec {
    name: "Waist mounts",
    description: ".303s in the waist, one each side.",
    serv: 0.005,
    tare: 30.0,
    drag: 3.0,
    mount: MountPoint::Waist,
    guns: 2,
};

const CHIN: TurretSpec = TurretSpec {
    name: "Rearward chin mount",
    description: "Twin .303s firing aft from under the nose.",
    serv: 0.005,
    tare: 50.0,
    drag: 5.0,
    mount: MountPoint::Chin,
    guns: 2,
};

const TAIL_TWIN: TurretSpec = TurretSpec {
    name: "Tail turret (twin)",
    description: "Twin .303s in a tail turret.",
    serv: 0.005,
    tare: 120.0,
    drag: 7.0,
    mount: MountPoint::Tail,
    guns: 2,
};

const TAIL_QUAD: TurretSpec = TurretSpec {
    name: "Tail turret (quad)",
    description: "Quad .303s in a tail turret.",
    serv: 0.005,
    tare: 190.0,
    drag: 7.0,
    mount: MountPoint::Tail,
    guns: 4,
};

impl Turret {
    pub const ALL: [Turret; 11] = [
        Turret::NoseSingle,
        Turret::NoseTwin,
        Turret::DorsalTwin,
        Turret::DorsalAft,
        Turret::DorsalQuad,
        Turret::VentralDustbin,
        Turret::VentralAft,
        Turret::Waist,
        Turret::Chin,
        Turret::TailTwin,
        Turret::TailQuad,
    ];

    /// The static record for this installation.
    pub fn spec(&self) -> &'static TurretSpec {
        match self {
            Turret::NoseSingle => &NOSE_SINGLE,
            Turret::NoseTwin => &NOSE_TWIN,
            Turret::DorsalTwin => &DORSAL_TWIN,
            Turret::DorsalAft => &DORSAL_AFT,
            Turret::DorsalQuad => &DORSAL_QUAD,
            Turret::VentralDustbin => &VENTRAL_DUSTBIN,
            Turret::VentralAft => &VENTRAL_AFT,
            Turret::Waist => &WAIST,
            Turret::Chin => &CHIN,
            Turret::TailTwin => &TAIL_TWIN,
            Turret::TailQuad => &TAIL_QUAD,
        }
    }

    /// Firepower brought to bear on an attack from `direction`, in .303
    /// equivalents.
    pub fn coverage(&self, direction: Direction) -> f64 {
        match self {
            Turret::NoseSingle => match direction {
                Direction::Front => 1.0,
                _ => 0.0,
            },
            Turret::NoseTwin => match direction {
                Direction::Front | Direction::BeamHigh => 2.0,
                _ => 0.0,
            },
            Turret::DorsalTwin => {
                if direction.is_high() {
                    2.0
                } else {
                    0.0
                }
            }
            Turret::DorsalAft => match direction {
                Direction::TailHigh => 2.0,
                _ => 0.0,
            },
            Turret::DorsalQuad => match direction {
                // limited field of fire ahead
                Direction::Front => 2.0,
                d if d.is_high() => 4.0,
                _ => 0.0,
            },
            Turret::VentralDustbin => {
                // poor sighting
                if direction.is_low() {
                    1.5
                } else {
                    0.0
                }
            }
            Turret::VentralAft => match direction {
                Direction::TailLow | Direction::Beneath => 2.0,
                _ => 0.0,
            },
            Turret::Waist => match direction {
                Direction::BeamHigh | Direction::BeamLow => 1.0,
                _ => 0.0,
            },
            Turret::Chin => match direction {
                // poor sighting
                Direction::TailLow => 1.5,
                _ => 0.0,
            },
            Turret::TailTwin => match direction {
                Direction::TailHigh | Direction::TailLow => 2.0,
                _ => 0.0,
            },
            Turret::TailQuad => match direction {
                Direction::TailHigh | Direction::TailLow => 4.0,
                _ => 0.0,
            },
        }
    }

    /// Ammunition load in lb: 2,000 rounds per gun at roughly 0.09 lb a round.
    pub fn ammo_mass(&self) -> f64 {
        f64::from(self.spec().guns) * 180.0
    }
}
