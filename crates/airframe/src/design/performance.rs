//! Drag, speed, climb, ceiling, and range.

use bomber_core::constants::{HP_LBF_FT_MIN, HP_LBF_MPH};

use super::Bomber;
use crate::manufacturer::ManuFactors;

/// Climb rate below which the climb-out is called off, ft/min.
const CLIMB_FLOOR_FPM: f64 = 400.0;
/// Hard altitude limit without a pressure cabin, thousands of feet.
const ALTITUDE_LIMIT_KFT: f64 = 35.0;
/// Fraction of surplus shaft power that converts into climb.
const CLIMB_EFFICIENCY: f64 = 0.52;

impl Bomber {
    /// Turret drag in lbf. The catalogue quotes mph knocked off; the
    /// factor of 24 converts that to a force for the power model.
    pub fn turret_drag(&self) -> f64 {
        let mph: f64 = self.turrets.iter().map(|t| t.spec().drag).sum();
        mph * 24.0
    }

    /// Induced drag in steady level flight: lift equals weight, so drag
    /// is gross weight over the wing's L/D.
    pub fn wing_drag(&self) -> f64 {
        self.gross() / self.wing.lift_to_drag()
    }

    /// Fuselage drag, a rough scaling law on non-wing structural weight.
    pub fn fuse_drag(&self) -> f64 {
        let factors = ManuFactors::of(self.manufacturer);
        (self.tare() - self.wing.tare()).sqrt()
            * factors.fuse_drag
            * self.fuselage.drag_factor(factors)
    }

    /// Total drag in lbf.
    pub fn drag(&self) -> f64 {
        self.wing_drag() + self.fuse_drag() + self.powerplant.drag() + self.turret_drag()
    }

    /// Level top speed at `alt` thousands of feet, mph.
    pub fn speed_at_altitude(&self, alt_kft: f64) -> f64 {
        self.powerplant.power_at_altitude(alt_kft) * HP_LBF_MPH / self.drag()
    }

    /// Unstick speed at gross weight with the usual safety margin, mph.
    pub fn takeoff_speed(&self) -> f64 {
        self.wing.min_speed(self.gross(), 0.0) * 1.6
    }

    /// The all-up weight that could be lifted off at `v` mph, lb.
    pub fn all_up_weight(&self, v_mph: f64) -> f64 {
        self.wing.lift(v_mph / 1.6)
    }

    /// Climb rate at `alt` thousands of feet, ft/min: whatever power is
    /// left over level flight at the minimum flyable speed, converted
    /// through a fixed thrust-to-climb efficiency.
    pub fn climb_at_altitude(&self, alt_kft: f64) -> f64 {
        let v = self.wing.min_speed(self.gross(), alt_kft);
        let level_power = self.drag() * v / HP_LBF_MPH;
        let surplus = self.powerplant.power_at_altitude(alt_kft) - level_power;
        surplus * CLIMB_EFFICIENCY * HP_LBF_FT_MIN / self.gross()
    }

    /// Service ceiling in thousands of feet.
    ///
    /// Climbs out in 500 ft steps until the rate sags below 400 ft/min,
    /// the climb schedule runs out (45 min under high-altitude doctrine,
    /// 21 otherwise), or the 35,000 ft cabin limit. The altitude bound
    /// caps the loop at 70 steps.
    pub fn ceiling(&self) -> f64 {
        let schedule_min = if self.high_altitude { 45.0 } else { 21.0 };
        let mut alt = 0.0;
        let mut elapsed = 0.0;
        loop {
            let climb = self.climb_at_altitude(alt);
            if climb < CLIMB_FLOOR_FPM || elapsed > schedule_min || alt >= ALTITUDE_LIMIT_KFT {
                return alt;
            }
            alt += 0.5;
            elapsed += 500.0 / climb;
        }
    }

    /// Cruising altitude in thousands of feet: up with the ceiling to
    /// 10,000 ft, half the surplus above that.
    pub fn cruising_altitude(&self) -> f64 {
        let ceiling = self.ceiling();
        ceiling.min(10.0) + (ceiling - 10.0).max(0.0) / 2.0
    }

    /// Speed at cruising altitude, mph.
    pub fn cruising_speed(&self) -> f64 {
        self.speed_at_altitude(self.cruising_altitude())
    }

    /// Operational radius of action in miles, with a fixed reserve held back.
    pub fn range(&self) -> f64 {
        self.fuel_hours * 0.6 * self.cruising_speed() - 150.0
    }

    /// Ferry range in miles: all the fuel, no reserve.
    pub fn ferry_range(&self) -> f64 {
        self.fuel_hours * self.cruising_speed()
    }
}
