//! Bomb bay sizing and structure weight.

use bomber_core::manufacturer::Manufacturer;

use crate::manufacturer::ManuFactors;

/// Bay girth classes, trading drag against the stores they can swallow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Girth {
    /// 500 lb general-purpose stores only.
    Small,
    /// Takes a 4,000 lb blockbuster, at a drag cost.
    Medium,
    /// Fully enclosed 4,000 lb stowage.
    Cookie,
}

/// Payload container sized for a capacity and girth class.
#[derive(Debug, Clone)]
pub struct BombBay {
    /// Capacity in lb of high explosive.
    pub capacity: f64,
    pub girth: Girth,
    manufacturer: Option<Manufacturer>,
}

impl BombBay {
    pub fn new(capacity_lb: f64, girth: Girth) -> Self {
        BombBay {
            capacity: capacity_lb,
            girth,
            manufacturer: None,
        }
    }

    /// Record the firm building this bay.
    pub fn assign_airframe(&mut self, manufacturer: Manufacturer) {
        self.manufacturer = Some(manufacturer);
    }

    /// Structure weight in lb: a girth-class factor on capacity, growing
    /// past the firm's capacity break point.
    pub fn tare(&self) -> f64 {
        let factors = ManuFactors::of_opt(self.manufacturer);
        let mut factor = match self.girth {
            Girth::Small => 0.07,
            Girth::Medium => 0.09,
            Girth::Cookie => 0.11,
        };
        if self.girth == Girth::Cookie {
            factor *= factors.cookie_bay_discount;
        }
        if self.capacity > factors.bay_capacity_break {
            factor += (self.capacity - factors.bay_capacity_break) / 3e5;
        }
        self.capacity * factor
    }
}
