//! The bomber design aggregate.
//!
//! A [`Bomber`] is commissioned from its components once, validated at
//! construction, and read-only thereafter. Every performance figure is a
//! pure derivation over the component state, recomputed on each read, so
//! the derivations are safe to call concurrently on a shared instance.
//! The derivations are grouped by concern:
//! mass breakdown in `mass`, drag/speed/climb in `performance`,
//! survivability scoring in `defence`, and pricing in `cost`.

mod cost;
mod defence;
mod mass;
mod performance;

use thiserror::Error;

use bomber_core::manufacturer::Manufacturer;
use bomber_powerplant::Powerplant;

use crate::armament::{MountPoint, Turret};
use crate::bay::BombBay;
use crate::crew::Crewman;
use crate::fuselage::{Electronics, Fuselage};
use crate::manufacturer::ManuFactors;
use crate::wing::Wing;

/// Fatal configuration problems. A design that fails validation is never
/// built; no derived figure of it is reachable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DesignError {
    #[error("conflicting gun installations in the {0} position")]
    MountConflict(MountPoint),
    #[error("geodetic structures can only be built at Vickers, not {0}")]
    GeodeticLicence(Manufacturer),
}

/// Advisory problems. The design flies, but impaired; callers may surface
/// these to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DesignWarning {
    #[error("{turrets} turrets but only {gunners} gunners; defence will be impaired")]
    NotEnoughGunners { turrets: usize, gunners: usize },
}

/// Everything needed to commission a design. Consumed by [`Bomber::new`].
#[derive(Debug, Clone)]
pub struct DesignSpec {
    pub powerplant: Powerplant,
    pub turrets: Vec<Turret>,
    pub wing: Wing,
    pub crew: Vec<Crewman>,
    pub bay: BombBay,
    /// Fuel endurance in hours.
    pub fuel_hours: f64,
    pub manufacturer: Manufacturer,
    pub fuselage: Fuselage,
    pub electronics: Electronics,
    /// Crews are expected to operate high; buys a longer climb schedule.
    pub high_altitude: bool,
    pub self_sealing_tanks: bool,
}

/// A validated bomber design.
///
/// Owns its powerplant, wing, and bomb bay, which it tags with its
/// manufacturer at construction; the firm shows up in their internal
/// formulas. To evaluate a variant, build a new `Bomber`.
#[derive(Debug, Clone)]
pub struct Bomber {
    powerplant: Powerplant,
    turrets: Vec<Turret>,
    wing: Wing,
    crew: Vec<Crewman>,
    bay: BombBay,
    fuel_hours: f64,
    manufacturer: Manufacturer,
    fuselage: Fuselage,
    electronics: Electronics,
    high_altitude: bool,
    self_sealing_tanks: bool,
    warnings: Vec<DesignWarning>,
}

impl Bomber {
    /// Validate and commission a design. Fatal configuration problems
    /// abort construction; advisory ones are recorded on the built value.
    pub fn new(spec: DesignSpec) -> Result<Bomber, DesignError> {
        let DesignSpec {
            mut powerplant,
            turrets,
            mut wing,
            crew,
            mut bay,
            fuel_hours,
            manufacturer,
            fuselage,
            electronics,
            high_altitude,
            self_sealing_tanks,
        } = spec;

        powerplant.assign_airframe(manufacturer);
        wing.assign_airframe(manufacturer);
        bay.assign_airframe(manufacturer);

        let mut bomber = Bomber {
            powerplant,
            turrets,
            wing,
            crew,
            bay,
            fuel_hours,
            manufacturer,
            fuselage,
            electronics,
            high_altitude,
            self_sealing_tanks,
            warnings: Vec::new(),
        };
        bomber.validate()?;
        Ok(bomber)
    }

    fn validate(&mut self) -> Result<(), DesignError> {
        if let Some(slot) = self.mount_conflict() {
            return Err(DesignError::MountConflict(slot));
        }
        if self.fuselage == Fuselage::Geodetic
            && !ManuFactors::of(self.manufacturer).geodetic_licence
        {
            return Err(DesignError::GeodeticLicence(self.manufacturer));
        }
        if self.needed_gunners() > self.gunners() {
            self.warnings.push(DesignWarning::NotEnoughGunners {
                turrets: self.needed_gunners(),
                gunners: self.gunners(),
            });
        }
        Ok(())
    }

    /// First gun position claimed twice, if any. An odd engine count puts
    /// an engine in the nose, which counts as a claim.
    fn mount_conflict(&self) -> Option<MountPoint> {
        let mut occupied: Vec<MountPoint> = Vec::new();
        if self.powerplant.is_odd() {
            occupied.push(MountPoint::Nose);
        }
        for turret in &self.turrets {
            let mount = turret.spec().mount;
            if occupied.contains(&mount) {
                return Some(mount);
            }
            occupied.push(mount);
        }
        None
    }

    pub fn powerplant(&self) -> &Powerplant {
        &self.powerplant
    }

    pub fn turrets(&self) -> &[Turret] {
        &self.turrets
    }

    pub fn wing(&self) -> &Wing {
        &self.wing
    }

    pub fn crew(&self) -> &[Crewman] {
        &self.crew
    }

    pub fn bay(&self) -> &BombBay {
        &self.bay
    }

    /// Fuel endurance in hours.
    pub fn fuel_hours(&self) -> f64 {
        self.fuel_hours
    }

    pub fn manufacturer(&self) -> Manufacturer {
        self.manufacturer
    }

    pub fn fuselage(&self) -> Fuselage {
        self.fuselage
    }

    pub fn electronics(&self) -> Electronics {
        self.electronics
    }

    pub fn high_altitude(&self) -> bool {
        self.high_altitude
    }

    pub fn self_sealing_tanks(&self) -> bool {
        self.self_sealing_tanks
    }

    /// Advisory findings recorded at construction.
    pub fn warnings(&self) -> &[DesignWarning] {
        &self.warnings
    }

    /// One gunner per turret keeps the defence fully manned.
    pub fn needed_gunners(&self) -> usize {
        self.turrets.len()
    }

    /// Crewmen able to man a turret.
    pub fn gunners(&self) -> usize {
        self.crew.iter().filter(|c| c.is_gunner()).count()
    }
}
