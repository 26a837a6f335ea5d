//! Named catalogues of engines and gun installations.
//!
//! Engines are keyed by stable kebab-case ids so that scenarios name the
//! model they mean instead of indexing into a list by position.

use std::collections::BTreeMap;

use bomber_airframe::Turret;
use bomber_core::units::kg_to_lb;
use bomber_powerplant::{Engine, EngineMaker, Supercharger};

/// Chance a hit disables a liquid-cooled engine (cooling system and all), percent.
pub const VULN_LIQUID_COOLED: f64 = 10.0;
/// Chance a hit disables an air-cooled radial, percent.
pub const VULN_AIR_COOLED: f64 = 6.0;

/// The engine catalogue, keyed by stable id.
#[derive(Debug, Clone)]
pub struct EngineCatalog {
    entries: BTreeMap<&'static str, Engine>,
}

impl EngineCatalog {
    /// The standard catalogue.
    pub fn standard() -> Self {
        let mut entries = BTreeMap::new();
        let mut add = |id: &'static str, engine: Engine| {
            entries.insert(id, engine);
        };

        add(
            "mercury-xv",
            Engine::new(
                EngineMaker::Bristol,
                "Mercury XV",
                840.0,
                VULN_AIR_COOLED,
                0.8,
                0.8,
                800.0,
                Supercharger::SingleSpeed,
                kg_to_lb(440.0),
                90.0,
                "1938 development of the Mercury radial, as fitted to the Blenheim IV.",
            ),
        );
        add(
            "merlin-iv",
            Engine::new(
                EngineMaker::RollsRoyce,
                "Merlin IV",
                1030.0,
                VULN_LIQUID_COOLED,
                0.6,
                1.0,
                1000.0,
                Supercharger::SingleSpeed,
                kg_to_lb(600.0),
                72.0,
                "Early glycol-cooled Merlin, as fitted to the Whitley IV.",
            ),
        );
        add(
            "merlin-x",
            Engine::new(
                EngineMaker::RollsRoyce,
                "Merlin X",
                1145.0,
                VULN_LIQUID_COOLED,
                0.5,
                1.0,
                1500.0,
                Supercharger::TwoSpeed,
                kg_to_lb(660.0),
                65.0,
                "Improved early Merlin with a two-speed blower and water/glycol \
                 cooling. Powered the Whitley V, Wellington II, and Halifax I.",
            ),
        );
        add(
            "merlin-xx",
            Engine::new(
                EngineMaker::RollsRoyce,
                "Merlin XX",
                1240.0,
                VULN_LIQUID_COOLED,
                0.5,
                0.9,
                1600.0,
                Supercharger::TwoSpeed,
                kg_to_lb(680.0),
                70.0,
                "Mid-period Merlin, most famously hung on the Lancaster.",
            ),
        );
        add(
            "merlin-60",
            Engine::new(
                EngineMaker::RollsRoyce,
                "Merlin 60",
                1565.0,
                VULN_LIQUID_COOLED,
                0.5,
                1.2,
                2000.0,
                Supercharger::TwoStage,
                kg_to_lb(750.0),
                105.0,
                "Two-stage supercharged Merlin for high-altitude work, as on the \
                 Wellington VI and Mosquito IX.",
            ),
        );
        add(
            "pegasus-xviii",
            Engine::new(
                EngineMaker::Bristol,
                "Pegasus XVIII",
                965.0,
                VULN_AIR_COOLED,
                1.0,
                0.8,
                1200.0,
                Supercharger::TwoSpeed,
                1111.0,
                84.0,
                "Supercharged radial developed from the Jupiter, as fitted to the \
                 Hampden and Wellington I.",
            ),
        );
        add(
            "hercules-iii",
            Engine::new(
                EngineMaker::Bristol,
                "Hercules III",
                1375.0,
                VULN_AIR_COOLED,
                1.2,
                0.9,
                1400.0,
                Supercharger::SingleSpeed,
                1850.0,
                104.0,
                "Early-model 14-cylinder two-row sleeve-valve radial.",
            ),
        );
        add(
            "hercules-xi",
            Engine::new(
                EngineMaker::Bristol,
                "Hercules XI",
                1500.0,
                VULN_AIR_COOLED,
                0.9,
                0.7,
                1600.0,
                Supercharger::SingleSpeed,
                1929.0,
                102.0,
                "14-cylinder two-row sleeve-valve radial.",
            ),
        );
        add(
            "hercules-xviii",
            Engine::new(
                EngineMaker::Bristol,
                "Hercules XVIII",
                1675.0,
                VULN_AIR_COOLED,
                0.8,
                0.8,
                2100.0,
                Supercharger::SingleSpeed,
                1940.0,
                101.0,
                "Developed 14-cylinder two-row sleeve-valve radial.",
            ),
        );
        add(
            "vulture-i",
            Engine::new(
                EngineMaker::RollsRoyce,
                "Vulture I",
                1760.0,
                VULN_LIQUID_COOLED,
                3.0,
                1.5,
                1800.0,
                Supercharger::TwoSpeed,
                2450.0,
                90.0,
                "Troubled X-24, as hung on the Manchester I.",
            ),
        );
        add(
            "deerhound-ii",
            Engine::new(
                EngineMaker::ArmstrongSiddeley,
                "Deerhound II",
                1500.0,
                VULN_AIR_COOLED,
                0.8,
                0.8,
                1200.0,
                Supercharger::TwoSpeed,
                1600.0,
                93.0,
                "Triple-row 21-cylinder radial.",
            ),
        );
        add(
            "tiger-viii",
            Engine::new(
                EngineMaker::ArmstrongSiddeley,
                "Tiger VIII",
                920.0,
                VULN_AIR_COOLED,
                0.7,
                0.6,
                800.0,
                Supercharger::TwoSpeed,
                1287.0,
                72.0,
                "14-cylinder two-row radial.",
            ),
        );

        EngineCatalog { entries }
    }

    /// Look an engine up by id.
    pub fn get(&self, id: &str) -> Option<&Engine> {
        self.entries.get(id)
    }

    /// Every id in the catalogue, in order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Look a gun installation up by its scenario id.
pub fn turret_by_id(id: &str) -> Option<Turret> {
    Turret::ALL.into_iter().find(|t| turret_id(*t) == id)
}

/// The scenario id for a gun installation.
pub fn turret_id(turret: Turret) -> &'static str {
    match turret {
        Turret::NoseSingle => "nose-single",
        Turret::NoseTwin => "nose-twin",
        Turret::DorsalTwin => "dorsal-twin",
        Turret::DorsalAft => "dorsal-aft",
        Turret::DorsalQuad => "dorsal-quad",
        Turret::VentralDustbin => "ventral-dustbin",
        Turret::VentralAft => "ventral-aft",
        Turret::Waist => "waist",
        Turret::Chin => "chin",
        Turret::TailTwin => "tail-twin",
        Turret::TailQuad => "tail-quad",
    }
}
