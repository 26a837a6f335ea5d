//! Re-exported APIs for consumers of the airframe crate.

pub use crate::armament::{Direction, MountPoint, Turret, TurretSpec};
pub use crate::bay::{BombBay, Girth};
pub use crate::crew::{Crewman, Role};
pub use crate::design::{Bomber, DesignError, DesignSpec, DesignWarning};
pub use crate::fuselage::{Electronics, FuseFactors, Fuselage};
pub use crate::manufacturer::ManuFactors;
pub use crate::wing::Wing;
pub use bomber_core::manufacturer::Manufacturer;
pub use bomber_powerplant::{Engine, EngineMaker, Gear, Powerplant, Supercharger};
