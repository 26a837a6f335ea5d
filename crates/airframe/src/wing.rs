//! Geometry-driven wing lift, drag, and mass model.
//!
//! The lift and lift/drag formulas are empirical approximations: a
//! cruising-attitude L/D from the aspect ratio, and a maximum lift
//! coefficient from a fitted curve, not a polar.

use bomber_core::atmosphere::weight_density;
use bomber_core::constants::SEA_LEVEL_AIR_LBF_CU_FT;
use bomber_core::manufacturer::Manufacturer;
use bomber_core::units::{fps_to_mph, mph_to_fps};

use crate::manufacturer::ManuFactors;

/// A wing planform owned by a design.
#[derive(Debug, Clone)]
pub struct Wing {
    /// Planform area in sq ft.
    pub area: f64,
    /// Span in ft.
    pub span: f64,
    manufacturer: Option<Manufacturer>,
}

impl Wing {
    /// Area in sq ft, span in ft; both must be positive.
    pub fn new(area_sqft: f64, span_ft: f64) -> Self {
        Wing {
            area: area_sqft,
            span: span_ft,
            manufacturer: None,
        }
    }

    /// Record the firm building this wing.
    pub fn assign_airframe(&mut self, manufacturer: Manufacturer) {
        self.manufacturer = Some(manufacturer);
    }

    /// Mean chord in ft.
    pub fn chord(&self) -> f64 {
        self.area / self.span
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.span * self.span / self.area
    }

    /// Maximum lift coefficient, from the fitted curve π²/6 / (1 + 2/AR).
    pub fn max_lift_coefficient(&self) -> f64 {
        let pi = std::f64::consts::PI;
        pi * pi / 6.0 / (1.0 + 2.0 / self.aspect_ratio())
    }

    /// Cruising lift/drag ratio, π·√AR with the firm's aerodynamic polish.
    pub fn lift_to_drag(&self) -> f64 {
        std::f64::consts::PI
            * self.aspect_ratio().sqrt()
            * ManuFactors::of_opt(self.manufacturer).ld_bonus
    }

    /// Lift in lb at `v` mph and sea level: L = ½·Cl·ρ·v²·S.
    pub fn lift(&self, v_mph: f64) -> f64 {
        let u = mph_to_fps(v_mph);
        self.max_lift_coefficient() * SEA_LEVEL_AIR_LBF_CU_FT * u * u * self.area / 2.0
    }

    /// Minimum speed (mph) that sustains `weight` lb at `alt` thousands of
    /// feet: the lift equation inverted at the altitude-adjusted density.
    pub fn min_speed(&self, weight_lb: f64, alt_kft: f64) -> f64 {
        let density = weight_density(alt_kft);
        let u = (weight_lb * 2.0 / (self.max_lift_coefficient() * density * self.area)).sqrt();
        fps_to_mph(u)
    }

    /// Structural weight in lb. The mass law punishes high aspect ratios,
    /// down to the firm's floor.
    pub fn tare(&self) -> f64 {
        let min_ar = ManuFactors::of_opt(self.manufacturer).wing_min_ar;
        let ar_penalty = self.aspect_ratio().max(min_ar).sqrt() / 6.0;
        self.span.powf(1.5) * self.chord().powf(1.2) * ar_penalty
    }
}
