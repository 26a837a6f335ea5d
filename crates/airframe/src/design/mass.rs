//! Mass breakdown: tare from the bottom up, then full-load gross.

use bomber_core::units::kg_to_lb;

use super::Bomber;
use crate::manufacturer::ManuFactors;

impl Bomber {
    /// Full fuel load in lb.
    pub fn fuel_mass(&self) -> f64 {
        self.powerplant.fuel_rate() * self.fuel_hours
    }

    /// Ammunition load across every installation, lb.
    pub fn ammo_mass(&self) -> f64 {
        self.turrets.iter().map(|t| t.ammo_mass()).sum()
    }

    /// Installed turret weight, lb. Mounting structure runs to three
    /// quarters again of the bare turret.
    pub fn turret_tare(&self) -> f64 {
        let bare: f64 = self.turrets.iter().map(|t| t.spec().tare).sum();
        bare * 1.75
    }

    /// Core structure weight: turrets, crew stations and their
    /// incidentals, and the bomb bay.
    pub fn core_tare(&self) -> f64 {
        let mut total = self.turret_tare();
        total += kg_to_lb(75.0) * self.crew.len() as f64;
        total += self.bay.tare();
        total * ManuFactors::of(self.manufacturer).core_tare
    }

    /// Fuselage and empennage weight, as a style-dependent multiple of
    /// the core structure it has to wrap.
    pub fn fuse_tare(&self) -> f64 {
        self.core_tare() * self.fuselage.tare_factor(ManuFactors::of(self.manufacturer))
    }

    /// Tankage weight. Self-sealing liners cost a tenth more.
    pub fn fuel_tare(&self) -> f64 {
        let tank_factor = if self.self_sealing_tanks { 1.1 } else { 1.0 };
        self.fuel_mass() * 0.12 * tank_factor
    }

    /// Empty weight of the whole airframe, lb.
    pub fn tare(&self) -> f64 {
        self.core_tare()
            + self.fuse_tare()
            + self.fuel_tare()
            + self.wing.tare() * 1.35
            + self.powerplant.tare() * 1.5
    }

    /// Take-off weight at full load, lb. Fuel counts at six tenths,
    /// the typical state with a full bomb load aboard.
    pub fn gross(&self) -> f64 {
        self.tare()
            + self.fuel_mass() * 0.6
            + self.ammo_mass()
            + kg_to_lb(80.0) * self.crew.len() as f64
            + self.bay.capacity
    }
}
