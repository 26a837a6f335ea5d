//! Pricing. Each subsystem has its own empirical cost law with firm and
//! fuselage-style multipliers; there is no shared formula.

use super::Bomber;
use crate::fuselage::{Electronics, Fuselage};
use crate::manufacturer::ManuFactors;

impl Bomber {
    /// Gun installations: priced on weight plus a per-gun charge.
    pub fn turret_cost(&self) -> f64 {
        self.turrets
            .iter()
            .map(|t| {
                let spec = t.spec();
                3.0 * spec.tare + 10.0 * f64::from(spec.guns)
            })
            .sum()
    }

    /// Core structure, doubled for designs with more than two engines.
    pub fn core_cost(&self) -> f64 {
        let firm = ManuFactors::of(self.manufacturer).structure_cost;
        let style = self.fuselage.factors().core_cost;
        let engines = if self.powerplant.count > 2 { 2.0 } else { 1.0 };
        self.core_tare() * firm * style * engines
    }

    /// Fuselage and empennage.
    pub fn fuse_cost(&self) -> f64 {
        let firm = ManuFactors::of(self.manufacturer).structure_cost;
        let style = self.fuselage.factors().fuse_cost;
        self.fuse_tare() * 1.2 * firm * style
    }

    /// Wings: priced superlinearly on weight with an aspect-ratio premium
    /// and a surcharge above three engines. Shorts price at a flat rate
    /// with no surcharge.
    pub fn wing_cost(&self) -> f64 {
        let factors = ManuFactors::of(self.manufacturer);
        let ar_premium = self.wing.aspect_ratio().max(6.0) / 6.0;
        if factors.flat_rate_wings {
            return self.wing.tare().powf(1.1) * ar_premium / 5.0;
        }
        let engines = if self.powerplant.count > 3 { 1.2 } else { 1.0 };
        self.wing.tare().powf(1.2) * factors.wing_cost * ar_premium * engines / 12.0
    }

    /// Electrical fit. Generator capacity is shared across the engines,
    /// so more engines make the higher tiers cheaper per airframe; the
    /// stabilised fit costs extra to squeeze into a slender fuselage.
    pub fn electronics_cost(&self) -> f64 {
        let engines = f64::from(self.powerplant.count);
        match self.electronics {
            Electronics::Low => 90.0,
            Electronics::High => 600.0 / engines,
            Electronics::Stable => {
                let base = 500.0 / engines;
                if self.fuselage == Fuselage::Slender {
                    base + 1200.0
                } else {
                    base + 900.0
                }
            }
        }
    }

    /// Unit price: engines, guns, core, fuselage, and wings. The
    /// electrical fit is funded from a separate vote and reported on its
    /// own line, not summed here.
    pub fn cost(&self) -> f64 {
        self.powerplant.cost()
            + self.turret_cost()
            + self.core_cost()
            + self.fuse_cost()
            + self.wing_cost()
    }
}
