//! Per-manufacturer coefficient table.
//!
//! Every firm-specific bonus and malus in the design formulas lives here,
//! so the formulas themselves look their coefficients up in one place
//! instead of branching on the firm inline.

use bomber_core::manufacturer::Manufacturer;

/// Coefficients a manufacturer applies across the design formulas.
#[derive(Debug, Clone, Copy)]
pub struct ManuFactors {
    /// Multiplier on the wing lift/drag ratio.
    pub ld_bonus: f64,
    /// Aspect-ratio floor in the wing mass law.
    pub wing_min_ar: f64,
    /// Bomb-bay capacity (lb) above which the structure factor grows.
    pub bay_capacity_break: f64,
    /// Discount on the fully-enclosed bomb-bay structure factor.
    pub cookie_bay_discount: f64,
    /// Multiplier on the core structure weight.
    pub core_tare: f64,
    /// Normal-fuselage tare as a multiple of core tare.
    pub normal_fuse_tare: f64,
    /// Slab-sided-fuselage tare as a multiple of core tare.
    pub slabby_fuse_tare: f64,
    /// Multiplier on fuselage drag.
    pub fuse_drag: f64,
    /// Normal-fuselage drag scaling factor.
    pub normal_fuse_drag: f64,
    /// Multiplier on core and fuselage costs.
    pub structure_cost: f64,
    /// Multiplier on wing cost.
    pub wing_cost: f64,
    /// Whether wings are costed at the flat rate, with no multi-engine surcharge.
    pub flat_rate_wings: bool,
    /// Wing loading (lb/sq ft) above which turning suffers.
    pub turn_threshold: f64,
    /// Additional daily unserviceability across the airframe.
    pub serv_penalty: f64,
    /// Whether the firm holds the geodetic construction licence.
    pub geodetic_licence: bool,
}

const BASE: ManuFactors = ManuFactors {
    ld_bonus: 1.0,
    wing_min_ar: 8.0,
    bay_capacity_break: 8_000.0,
    cookie_bay_discount: 1.0,
    core_tare: 1.0,
    normal_fuse_tare: 1.5,
    slabby_fuse_tare: 0.9,
    fuse_drag: 1.0,
    normal_fuse_drag: 5.0,
    structure_cost: 1.0,
    wing_cost: 1.0,
    flat_rate_wings: false,
    turn_threshold: 18.0,
    serv_penalty: 0.0,
    geodetic_licence: false,
};

const ARMSTRONG: ManuFactors = ManuFactors {
    wing_min_ar: 6.0,
    slabby_fuse_tare: 0.81,
    ..BASE
};

const AVRO: ManuFactors = ManuFactors {
    bay_capacity_break: 9_000.0,
    cookie_bay_discount: 0.92,
    structure_cost: 1.05,
    wing_cost: 1.05,
    ..BASE
};

const BRISTOL: ManuFactors = ManuFactors {
    turn_threshold: 20.0,
    ..BASE
};

const DE_HAVILLAND: ManuFactors = ManuFactors {
    normal_fuse_tare: 1.65,
    normal_fuse_drag: 4.5,
    ..BASE
};

const SHORTS: ManuFactors = ManuFactors {
    core_tare: 1.08,
    structure_cost: 0.8,
    flat_rate_wings: true,
    serv_penalty: 0.15,
    ..BASE
};

const SUPERMARINE: ManuFactors = ManuFactors {
    ld_bonus: 1.05,
    fuse_drag: 0.9,
    ..BASE
};

const VICKERS: ManuFactors = ManuFactors {
    geodetic_licence: true,
    ..BASE
};

impl ManuFactors {
    /// Coefficients for a firm.
    pub fn of(manu: Manufacturer) -> &'static ManuFactors {
        match manu {
            Manufacturer::Armstrong => &ARMSTRONG,
            Manufacturer::Avro => &AVRO,
            Manufacturer::Bristol => &BRISTOL,
            Manufacturer::DeHavilland => &DE_HAVILLAND,
            Manufacturer::HandleyPage => &BASE,
            Manufacturer::Shorts => &SHORTS,
            Manufacturer::Supermarine => &SUPERMARINE,
            Manufacturer::Vickers => &VICKERS,
        }
    }

    /// Coefficients for a component not yet assigned to a firm.
    pub fn of_opt(manu: Option<Manufacturer>) -> &'static ManuFactors {
        manu.map(ManuFactors::of).unwrap_or(&BASE)
    }
}
