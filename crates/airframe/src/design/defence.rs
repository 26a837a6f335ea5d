//! Survivability: reliability, serviceability, and the defensive scoring
//! chain. Every score here is a cost — lower is better throughout.

use super::Bomber;
use crate::armament::Direction;
use crate::manufacturer::ManuFactors;

impl Bomber {
    /// Probability at least one engine fails on a long flight.
    pub fn rely1(&self) -> f64 {
        self.powerplant.rely1()
    }

    /// Probability two or more engines fail on a long flight.
    pub fn rely2(&self) -> f64 {
        self.powerplant.rely2()
    }

    /// Combined daily maintenance burden of the gun installations.
    pub fn turret_serv(&self) -> f64 {
        self.turrets.iter().map(|t| t.spec().serv).sum()
    }

    /// Fraction of days the aircraft is available: one minus the summed
    /// maintenance burdens of engines, turrets, and structure.
    pub fn serviceability(&self) -> f64 {
        let mut burden = self.powerplant.serv() * 6.0;
        burden += self.turret_serv();
        burden += self.fuselage.factors().serv_pct / 100.0;
        burden += ManuFactors::of(self.manufacturer).serv_penalty;
        1.0 - burden
    }

    /// Loss-to-mechanical-failure rating. A second engine out is worth
    /// far more than a first.
    pub fn failure_rating(&self) -> f64 {
        self.rely1() * 2.0 + self.rely2() * 30.0 + self.fuselage.factors().fail_pct / 100.0
    }

    /// Exposure to fighter attack given the guns fitted: each sector's
    /// threat weight discounted by the fire that covers it, scaled up
    /// when the turrets outnumber the gunners. Attacks from directly
    /// beneath only count against `schrage`-armed night fighters.
    pub fn gun_rating(&self, schrage: bool) -> f64 {
        let mut exposure = 0.0;
        for direction in Direction::ALL {
            if direction == Direction::Beneath && !schrage {
                continue;
            }
            let covering: f64 = self.turrets.iter().map(|t| t.coverage(direction)).sum();
            exposure += direction.threat_weight() / (1.0 + covering);
        }
        exposure * (self.needed_gunners() as f64 + 1.0) / (self.gunners() as f64 + 1.0)
    }

    /// Fuel load as a fraction of wing structure; a proxy for how much of
    /// the airframe is tank.
    pub fn fuel_ratio(&self) -> f64 {
        self.fuel_mass() / self.wing.tare()
    }

    /// Gross weight per square foot of wing.
    pub fn wing_loading(&self) -> f64 {
        self.gross() / self.wing.area
    }

    /// Roll sluggishness grows with aspect ratio.
    pub fn roll_penalty(&self) -> f64 {
        self.wing.aspect_ratio().sqrt()
    }

    /// Turn sluggishness grows with wing loading past the firm's handling
    /// threshold.
    pub fn turn_penalty(&self) -> f64 {
        let threshold = ManuFactors::of(self.manufacturer).turn_threshold;
        (self.wing_loading() - threshold).max(0.0).sqrt()
    }

    /// Combined manoeuvre penalty.
    pub fn agility_penalty(&self) -> f64 {
        self.roll_penalty() + self.turn_penalty()
    }

    /// How hard the aircraft is to bring to battle: flying high and fast
    /// shrinks it, manoeuvrability buys a little dodge on top.
    pub fn evade_factor(&self) -> f64 {
        let mut base = (30.0 - self.ceiling()).max(3.0) / 10.0;
        base *= (300.0 - self.cruising_speed()).max(10.0).sqrt();
        let dodge = 0.3 / (self.agility_penalty() - 4.5).max(0.5);
        base * (1.0 - dodge)
    }

    /// Weighted count of crew who can fight fires and patch damage.
    pub fn defensive_crew(&self) -> f64 {
        self.crew.iter().map(|c| c.defence_weight()).sum()
    }

    /// How much a hit hurts: engines and structure, amplified when the
    /// crew cannot fight the damage, plus the fuel load itself.
    pub fn vuln(&self) -> f64 {
        let fuse = self.fuselage.factors();
        let mut base = self.powerplant.vuln() + fuse.vuln;
        base *= (4.0 - self.defensive_crew()).max(1.0);
        let tank_factor = if self.self_sealing_tanks { 0.5 } else { 1.0 };
        base + self.fuel_ratio() * tank_factor / fuse.fuel_vuln_divisor
    }

    /// Expected loss rate to fighters.
    pub fn fight_factor(&self, schrage: bool) -> f64 {
        self.evade_factor().powf(0.7) * (self.vuln() * 4.0 + self.gun_rating(schrage)) / 3.0
    }

    /// Expected loss rate to flak; altitude is the only shelter.
    pub fn flak_factor(&self) -> f64 {
        self.vuln() * 3.0 * (30.0 - self.ceiling()).max(1.0).sqrt()
    }

    /// Overall defensive liability. Lower is better.
    pub fn defence(&self, schrage: bool) -> f64 {
        self.fight_factor(schrage) + self.flak_factor()
    }
}
