//! Fuselage construction styles and electrical fit tiers.

use crate::manufacturer::ManuFactors;

/// Fuselage construction styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fuselage {
    /// Conventional semi-monocoque.
    Normal,
    /// Slim cross-section; cramped but light and clean.
    Slender,
    /// Slab-sided; roomy, cheap, and draggy.
    Slabby,
    /// Basket-weave lattice; damage-tolerant, licence-restricted.
    Geodetic,
}

/// Coefficients a fuselage style applies across the design formulas.
#[derive(Debug, Clone, Copy)]
pub struct FuseFactors {
    /// Daily unserviceability contribution, percent.
    pub serv_pct: f64,
    /// Contribution to the failure rating, percent.
    pub fail_pct: f64,
    /// Structural vulnerability constant.
    pub vuln: f64,
    /// Divisor on the fuel-load vulnerability term.
    pub fuel_vuln_divisor: f64,
    /// Factor on core structure cost.
    pub core_cost: f64,
    /// Factor on fuselage cost.
    pub fuse_cost: f64,
}

const NORMAL: FuseFactors = FuseFactors {
    serv_pct: 3.0,
    fail_pct: 3.0,
    vuln: 0.2,
    fuel_vuln_divisor: 4.0,
    core_cost: 1.0,
    fuse_cost: 1.0,
};

const SLENDER: FuseFactors = FuseFactors {
    serv_pct: 6.4,
    fail_pct: 4.0,
    vuln: 0.3,
    fuel_vuln_divisor: 4.0,
    core_cost: 1.6,
    fuse_cost: 1.6,
};

const SLABBY: FuseFactors = FuseFactors {
    serv_pct: 2.7,
    fail_pct: 2.7,
    vuln: 0.2,
    fuel_vuln_divisor: 4.0,
    core_cost: 0.8,
    fuse_cost: 0.7,
};

const GEODETIC: FuseFactors = FuseFactors {
    serv_pct: 2.0,
    fail_pct: 2.0,
    vuln: 0.08,
    fuel_vuln_divisor: 5.0,
    core_cost: 1.0,
    fuse_cost: 1.1,
};

impl Fuselage {
    pub fn name(&self) -> &'static str {
        match self {
            Fuselage::Normal => "normal",
            Fuselage::Slender => "slender",
            Fuselage::Slabby => "slab-sided",
            Fuselage::Geodetic => "geodetic",
        }
    }

    /// The style's fixed coefficients.
    pub fn factors(&self) -> &'static FuseFactors {
        match self {
            Fuselage::Normal => &NORMAL,
            Fuselage::Slender => &SLENDER,
            Fuselage::Slabby => &SLABBY,
            Fuselage::Geodetic => &GEODETIC,
        }
    }

    /// Fuselage tare as a multiple of core tare. Normal and slab-sided
    /// construction vary by firm.
    pub fn tare_factor(&self, manu: &ManuFactors) -> f64 {
        match self {
            Fuselage::Normal => manu.normal_fuse_tare,
            Fuselage::Slender => 1.0,
            Fuselage::Slabby => manu.slabby_fuse_tare,
            Fuselage::Geodetic => 1.7,
        }
    }

    /// Drag scaling factor for the style.
    pub fn drag_factor(&self, manu: &ManuFactors) -> f64 {
        match self {
            Fuselage::Normal => manu.normal_fuse_drag,
            Fuselage::Slender => 3.0,
            Fuselage::Slabby => 7.2,
            Fuselage::Geodetic => 5.4,
        }
    }
}

/// Electrical fit tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Electronics {
    /// Minor utilities only.
    Low,
    /// Generator capacity for radio navigation receivers.
    High,
    /// Stabilised supply for precision radar aids.
    Stable,
}

impl Electronics {
    pub fn name(&self) -> &'static str {
        match self {
            Electronics::Low => "low",
            Electronics::High => "high",
            Electronics::Stable => "stable",
        }
    }
}
