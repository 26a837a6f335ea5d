//! Engine specifications and the multi-engine powerplant aggregate.
//!
//! An [`Engine`] is the static record for one engine model: rated power,
//! supercharger fit, reliability figures, weight, and cost. A
//! [`Powerplant`] is N identical engines mounted on an airframe, and
//! derives the combined power, reliability, weight, drag, and fuel burn
//! the design formulas consume.

use bomber_core::atmosphere::relative_density;
use bomber_core::manufacturer::Manufacturer;
use bomber_core::units::kg_to_lb;

/// Engine firms in the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineMaker {
    Bristol,
    RollsRoyce,
    ArmstrongSiddeley,
}

impl EngineMaker {
    /// Trading name, for reports.
    pub fn name(&self) -> &'static str {
        match self {
            EngineMaker::Bristol => "Bristol",
            EngineMaker::RollsRoyce => "Rolls-Royce",
            EngineMaker::ArmstrongSiddeley => "Armstrong-Siddeley",
        }
    }

    /// Whether mounting structures get the in-house discount on this airframe.
    /// Only Bristol and Armstrong-Siddeley build both engines and airframes.
    pub fn matches_airframe(&self, airframe: Manufacturer) -> bool {
        matches!(
            (self, airframe),
            (EngineMaker::Bristol, Manufacturer::Bristol)
                | (EngineMaker::ArmstrongSiddeley, Manufacturer::Armstrong)
        )
    }
}

/// Supercharger fit. Higher stages trade a fixed power tax in high gear
/// for a greater full-throttle height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Supercharger {
    SingleSpeed,
    TwoSpeed,
    TwoStage,
}

/// Blower gear selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gear {
    Low,
    High,
}

/// Static specification for one engine model. Fractions (`vuln`, `rely`,
/// `serv`) are stored in [0, 1]; the constructor takes them as percentages.
#[derive(Debug, Clone)]
pub struct Engine {
    pub maker: EngineMaker,
    pub name: String,
    /// Rated power in hp.
    pub power: f64,
    /// Chance a hit disables the engine.
    pub vuln: f64,
    /// Chance the engine fails on a long flight.
    pub rely: f64,
    /// Chance the engine needs maintenance on a given day.
    pub serv: f64,
    /// Unit price in pounds sterling.
    pub cost: f64,
    pub supercharger: Supercharger,
    /// Dry weight in lb.
    pub tare: f64,
    /// Installed drag in lbf.
    pub drag: f64,
    pub description: String,
}

impl Engine {
    /// Build an engine specification. `vuln_pct`, `rely_pct`, and `serv_pct`
    /// are quoted as percentages 0-100 and divided down here.
    pub fn new(
        maker: EngineMaker,
        name: &str,
        power_hp: f64,
        vuln_pct: f64,
        rely_pct: f64,
        serv_pct: f64,
        cost: f64,
        supercharger: Supercharger,
        tare_lb: f64,
        drag_lbf: f64,
        description: &str,
    ) -> Self {
        Engine {
            maker,
            name: name.to_string(),
            power: power_hp,
            vuln: vuln_pct / 100.0,
            rely: rely_pct / 100.0,
            serv: serv_pct / 100.0,
            cost,
            supercharger,
            tare: tare_lb,
            drag: drag_lbf,
            description: description.to_string(),
        }
    }

    /// Shaft power at `alt` (thousands of feet) in the requested blower gear.
    /// An engine with no selectable high gear delivers nothing if one is asked for.
    pub fn power_at(&self, alt_kft: f64, gear: Gear) -> f64 {
        let (full_throttle_height, gear_tax) = match (self.supercharger, gear) {
            (Supercharger::SingleSpeed, Gear::Low) => (10.25, 0.0),
            (Supercharger::SingleSpeed, Gear::High) => return 0.0,
            (Supercharger::TwoSpeed, Gear::Low) => (10.25, 0.0),
            (Supercharger::TwoSpeed, Gear::High) => (16.0, 0.02),
            (Supercharger::TwoStage, Gear::Low) => (12.0, 0.0),
            (Supercharger::TwoStage, Gear::High) => (21.0, 0.06),
        };
        // Below full-throttle height the boost is flat; above it power
        // falls off with density.
        let density = relative_density((alt_kft - full_throttle_height).max(0.0));
        self.power * (density - gear_tax)
    }

    /// Shaft power at `alt`, in whichever gear delivers more.
    pub fn power_at_altitude(&self, alt_kft: f64) -> f64 {
        self.power_at(alt_kft, Gear::Low)
            .max(self.power_at(alt_kft, Gear::High))
    }

    /// Cruise fuel burn in lb/h. Fixed specific consumption of 0.36 lb/hp·h;
    /// cruise runs well below full power, so this sits under the bench figures.
    pub fn fuel_rate(&self) -> f64 {
        self.power * 0.36
    }
}

/// N identical engines mounted on one airframe.
///
/// The owning design assigns its manufacturer at construction time; the
/// airframe firm affects the mounting-structure weight.
#[derive(Debug, Clone)]
pub struct Powerplant {
    pub count: u32,
    pub model: Engine,
    airframe: Option<Manufacturer>,
}

impl Powerplant {
    pub fn new(count: u32, model: Engine) -> Self {
        Powerplant {
            count,
            model,
            airframe: None,
        }
    }

    /// Record the airframe firm these engines are mounted on.
    pub fn assign_airframe(&mut self, airframe: Manufacturer) {
        self.airframe = Some(airframe);
    }

    /// An odd engine count puts one engine in the nose.
    pub fn is_odd(&self) -> bool {
        self.count % 2 == 1
    }

    /// Effective number of engines' worth of power. An odd installation
    /// loses a tenth of an engine to slipstream drag on the fuselage.
    pub fn power_factor(&self) -> f64 {
        let mut factor = f64::from(self.count);
        if self.is_odd() {
            factor -= 0.1;
        }
        factor
    }

    /// Combined shaft power at `alt` (thousands of feet).
    pub fn power_at_altitude(&self, alt_kft: f64) -> f64 {
        self.power_factor() * self.model.power_at_altitude(alt_kft)
    }

    /// Chance a hit disables an engine (per-engine figure).
    pub fn vuln(&self) -> f64 {
        self.model.vuln
    }

    /// Probability at least one engine fails on a long flight.
    pub fn rely1(&self) -> f64 {
        1.0 - (1.0 - self.model.rely).powi(self.count as i32)
    }

    /// Probability two or more engines fail on a long flight:
    /// the complement of zero-or-exactly-one failures.
    pub fn rely2(&self) -> f64 {
        let p = self.model.rely;
        let n = self.count;
        1.0 - (1.0 - p).powi(n as i32)
            - f64::from(n) * p * (1.0 - p).powi(n as i32 - 1)
    }

    /// Probability at least one engine is unserviceable on a given day.
    pub fn serv(&self) -> f64 {
        1.0 - (1.0 - self.model.serv).powi(self.count as i32)
    }

    /// Purchase cost including installation overhead.
    pub fn cost(&self) -> f64 {
        f64::from(self.count) * self.model.cost * 1.5
    }

    /// Combined cruise fuel burn in lb/h.
    pub fn fuel_rate(&self) -> f64 {
        f64::from(self.count) * self.model.fuel_rate()
    }

    /// Installed weight: bare engines plus nacelle and mounting structure.
    pub fn tare(&self) -> f64 {
        let n = f64::from(self.count);
        let mut mounts = kg_to_lb(100.0) * n;
        if self.is_odd() {
            // nose mounts are lighter than nacelles
            mounts -= kg_to_lb(25.0);
        }
        // wing structure to carry the paired nacelles
        mounts += kg_to_lb(60.0) * f64::from(self.count / 2);
        if self
            .airframe
            .is_some_and(|m| self.model.maker.matches_airframe(m))
        {
            mounts *= 0.8;
        }
        self.model.tare * n + mounts
    }

    /// Combined installed drag in lbf.
    pub fn drag(&self) -> f64 {
        self.model.drag * f64::from(self.count)
    }
}
