//! Core units, constants, and shared primitives for the bomber design calculator workspace.

/// Empirical constants shared by the performance formulas. Imperial units throughout:
/// masses in lb, forces in lbf, speeds in mph, altitudes in thousands of feet.
pub mod constants {
    /// Pounds per kilogram, for the catalogue figures quoted in kg.
    pub const LB_PER_KG: f64 = 2.2;
    /// One horsepower expressed in lbf·mph.
    pub const HP_LBF_MPH: f64 = 375.0;
    /// One horsepower expressed in lbf·ft/min.
    pub const HP_LBF_FT_MIN: f64 = 33_000.0;
    /// Sea-level air weight density in lbf/cu ft (1.2 kg/cu m with g taken as ~10).
    pub const SEA_LEVEL_AIR_LBF_CU_FT: f64 = 0.0075;
    /// Scale height of the exponential density fall-off, in thousands of feet.
    pub const DENSITY_SCALE_HEIGHT_KFT: f64 = 25.1;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::LB_PER_KG;

    /// Convert miles per hour to feet per second.
    #[inline]
    pub fn mph_to_fps(v: f64) -> f64 {
        v * 22.0 / 15.0
    }

    /// Convert feet per second to miles per hour.
    #[inline]
    pub fn fps_to_mph(v: f64) -> f64 {
        v * 15.0 / 22.0
    }

    /// Convert kilograms to pounds.
    #[inline]
    pub fn kg_to_lb(v: f64) -> f64 {
        v * LB_PER_KG
    }
}

/// Exponential-atmosphere helpers shared by the engine power curve and the wing stall model.
pub mod atmosphere {
    use super::constants::{DENSITY_SCALE_HEIGHT_KFT, SEA_LEVEL_AIR_LBF_CU_FT};

    /// Air density at `alt` (thousands of feet) relative to sea level.
    #[inline]
    pub fn relative_density(alt_kft: f64) -> f64 {
        (-alt_kft / DENSITY_SCALE_HEIGHT_KFT).exp()
    }

    /// Air weight density at `alt` (thousands of feet), in lbf/cu ft.
    #[inline]
    pub fn weight_density(alt_kft: f64) -> f64 {
        SEA_LEVEL_AIR_LBF_CU_FT * relative_density(alt_kft)
    }
}

/// Airframe manufacturers. Each gets specific bonuses and maluses in the
/// design formulas; the coefficient tables live with the airframe model.
pub mod manufacturer {
    /// The firms that can be commissioned to build a design.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Manufacturer {
        Armstrong,
        Avro,
        Bristol,
        DeHavilland,
        HandleyPage,
        Shorts,
        Supermarine,
        Vickers,
    }

    impl Manufacturer {
        /// Every manufacturer, for catalogue listings.
        pub const ALL: [Manufacturer; 8] = [
            Manufacturer::Armstrong,
            Manufacturer::Avro,
            Manufacturer::Bristol,
            Manufacturer::DeHavilland,
            Manufacturer::HandleyPage,
            Manufacturer::Shorts,
            Manufacturer::Supermarine,
            Manufacturer::Vickers,
        ];

        /// Trading name, for reports.
        pub fn name(&self) -> &'static str {
            match self {
                Manufacturer::Armstrong => "Armstrong Whitworth",
                Manufacturer::Avro => "Avro",
                Manufacturer::Bristol => "Bristol",
                Manufacturer::DeHavilland => "de Havilland",
                Manufacturer::HandleyPage => "Handley Page",
                Manufacturer::Shorts => "Shorts",
                Manufacturer::Supermarine => "Supermarine",
                Manufacturer::Vickers => "Vickers",
            }
        }
    }

    impl std::fmt::Display for Manufacturer {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }
}
