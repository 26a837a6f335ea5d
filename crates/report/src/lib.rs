//! Report writers for design appraisals.
//!
//! Everything here reads a finished [`Bomber`]'s derived figures and
//! formats them; no numbers are derived in this crate.

use bomber_airframe::Bomber;

/// Human-readable stat blocks.
pub mod statblock {
    use std::io::{self, Write};

    use super::Bomber;

    /// Write the full appraisal block for one design.
    pub fn write_statblock(writer: &mut dyn Write, name: &str, b: &Bomber) -> io::Result<()> {
        writeln!(writer, "=== {} ({}) ===", name, b.manufacturer())?;
        writeln!(
            writer,
            "Tare    : {:7.0} lb (wings {:.0}, engines {:.0}, turrets {:.0}, bay {:.0}, fuselage {:.0}, tanks {:.0})",
            b.tare(),
            b.wing().tare(),
            b.powerplant().tare(),
            b.turret_tare(),
            b.bay().tare(),
            b.fuse_tare(),
            b.fuel_tare(),
        )?;
        writeln!(
            writer,
            "Gross   : {:7.0} lb (fuel {:.0}, bombs {:.0}, ammo {:.0}); lifts {:.0}/{:.0}/{:.0} lb at 90/99/108 mph",
            b.gross(),
            b.fuel_mass(),
            b.bay().capacity,
            b.ammo_mass(),
            b.all_up_weight(90.0),
            b.all_up_weight(99.0),
            b.all_up_weight(108.0),
        )?;
        writeln!(
            writer,
            "Drag    : {:7.0} lbf (wings {:.0}, fuselage {:.0}, engines {:.0}, turrets {:.0}); wing L/D {:.1}",
            b.drag(),
            b.wing_drag(),
            b.fuse_drag(),
            b.powerplant().drag(),
            b.turret_drag(),
            b.wing().lift_to_drag(),
        )?;
        writeln!(
            writer,
            "Speed   : {:7.1} mph at sea level; {:.1} mph cruise at {:.0} ft; take-off {:.1} mph",
            b.speed_at_altitude(0.0),
            b.cruising_speed(),
            b.cruising_altitude() * 1000.0,
            b.takeoff_speed(),
        )?;
        writeln!(
            writer,
            "Climb   : ceiling {:.0} ft; initial climb {:.0} ft/min; serviceability {:.0}%",
            b.ceiling() * 1000.0,
            b.climb_at_altitude(0.0),
            b.serviceability() * 100.0,
        )?;
        writeln!(
            writer,
            "Range   : {:7.0} mi normal, {:.0} mi ferry; failure rating {:.0}",
            b.range(),
            b.ferry_range(),
            b.failure_rating() * 100.0,
        )?;
        writeln!(
            writer,
            "Defence : {:7.1} (fight {:.1}, flak {:.1}, guns {:.2}, evade {:.2}, vuln {:.2}, loading {:.1} lb/sqft)",
            b.defence(false),
            b.fight_factor(false),
            b.flak_factor(),
            b.gun_rating(false),
            b.evade_factor(),
            b.vuln(),
            b.wing_loading(),
        )?;
        writeln!(
            writer,
            "Cost    : {:7.0} (engines {:.0}, turrets {:.0}, core {:.0}, fuselage {:.0}, wings {:.0}); electronics {:.0}",
            b.cost(),
            b.powerplant().cost(),
            b.turret_cost(),
            b.core_cost(),
            b.fuse_cost(),
            b.wing_cost(),
            b.electronics_cost(),
        )
    }
}

/// Fleet comparison tables in CSV.
pub mod fleet {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    use super::Bomber;

    const HEADER: &str = "name,manufacturer,engine,engine_count,tare_lb,gross_lb,drag_lbf,\
sea_level_speed_mph,cruise_speed_mph,cruise_alt_ft,ceiling_ft,initial_climb_fpm,range_mi,\
ferry_mi,serviceability,failure_rating,defence,defence_schrage,cost,electronics_cost";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the standard fleet CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row emitted by the fleet exporter.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub name: &'a str,
        pub manufacturer: &'a str,
        pub engine: &'a str,
        pub engine_count: u32,
        pub tare_lb: f64,
        pub gross_lb: f64,
        pub drag_lbf: f64,
        pub sea_level_speed_mph: f64,
        pub cruise_speed_mph: f64,
        pub cruise_alt_ft: f64,
        pub ceiling_ft: f64,
        pub initial_climb_fpm: f64,
        pub range_mi: f64,
        pub ferry_mi: f64,
        pub serviceability: f64,
        pub failure_rating: f64,
        pub defence: f64,
        pub defence_schrage: f64,
        pub cost: f64,
        pub electronics_cost: f64,
    }

    impl<'a> Record<'a> {
        /// Collect one design's figures into a row.
        pub fn from_design(name: &'a str, b: &'a Bomber) -> Record<'a> {
            Record {
                name,
                manufacturer: b.manufacturer().name(),
                engine: &b.powerplant().model.name,
                engine_count: b.powerplant().count,
                tare_lb: b.tare(),
                gross_lb: b.gross(),
                drag_lbf: b.drag(),
                sea_level_speed_mph: b.speed_at_altitude(0.0),
                cruise_speed_mph: b.cruising_speed(),
                cruise_alt_ft: b.cruising_altitude() * 1000.0,
                ceiling_ft: b.ceiling() * 1000.0,
                initial_climb_fpm: b.climb_at_altitude(0.0),
                range_mi: b.range(),
                ferry_mi: b.ferry_range(),
                serviceability: b.serviceability(),
                failure_rating: b.failure_rating(),
                defence: b.defence(false),
                defence_schrage: b.defence(true),
                cost: b.cost(),
                electronics_cost: b.electronics_cost(),
            }
        }

        /// Serialize the record to CSV, matching the standard header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{},{},{},{},{:.0},{:.0},{:.0},{:.1},{:.1},{:.0},{:.0},{:.0},{:.0},{:.0},{:.4},{:.4},{:.2},{:.2},{:.0},{:.0}",
                self.name,
                self.manufacturer,
                self.engine,
                self.engine_count,
                self.tare_lb,
                self.gross_lb,
                self.drag_lbf,
                self.sea_level_speed_mph,
                self.cruise_speed_mph,
                self.cruise_alt_ft,
                self.ceiling_ft,
                self.initial_climb_fpm,
                self.range_mi,
                self.ferry_mi,
                self.serviceability,
                self.failure_rating,
                self.defence,
                self.defence_schrage,
                self.cost,
                self.electronics_cost,
            )
        }
    }

}

/// JSON summary sidecars.
pub mod summary {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::fs::{self, File};
    use std::io;
    use std::path::Path;

    use super::Bomber;

    /// Mass breakdown of a design, lb.
    #[derive(Debug, Serialize)]
    pub struct MassBreakdown {
        pub tare_lb: f64,
        pub wing_tare_lb: f64,
        pub engine_tare_lb: f64,
        pub turret_tare_lb: f64,
        pub bay_tare_lb: f64,
        pub fuse_tare_lb: f64,
        pub fuel_tare_lb: f64,
        pub gross_lb: f64,
    }

    /// Envelope of one design's appraisal.
    #[derive(Debug, Serialize)]
    pub struct DesignSummary {
        pub name: String,
        pub manufacturer: String,
        pub engine: String,
        pub engine_count: u32,
        pub mass: MassBreakdown,
        pub drag_lbf: f64,
        pub sea_level_speed_mph: f64,
        pub cruise_speed_mph: f64,
        pub cruise_alt_ft: f64,
        pub ceiling_ft: f64,
        pub range_mi: f64,
        pub ferry_mi: f64,
        pub defence: f64,
        pub defence_schrage: f64,
        pub cost: f64,
        pub electronics_cost: f64,
        pub warnings: Vec<String>,
    }

    impl DesignSummary {
        /// Collect one design's figures into a summary envelope.
        pub fn from_design(name: &str, b: &Bomber) -> DesignSummary {
            DesignSummary {
                name: name.to_string(),
                manufacturer: b.manufacturer().name().to_string(),
                engine: b.powerplant().model.name.clone(),
                engine_count: b.powerplant().count,
                mass: MassBreakdown {
                    tare_lb: b.tare(),
                    wing_tare_lb: b.wing().tare(),
                    engine_tare_lb: b.powerplant().tare(),
                    turret_tare_lb: b.turret_tare(),
                    bay_tare_lb: b.bay().tare(),
                    fuse_tare_lb: b.fuse_tare(),
                    fuel_tare_lb: b.fuel_tare(),
                    gross_lb: b.gross(),
                },
                drag_lbf: b.drag(),
                sea_level_speed_mph: b.speed_at_altitude(0.0),
                cruise_speed_mph: b.cruising_speed(),
                cruise_alt_ft: b.cruising_altitude() * 1000.0,
                ceiling_ft: b.ceiling() * 1000.0,
                range_mi: b.range(),
                ferry_mi: b.ferry_range(),
                defence: b.defence(false),
                defence_schrage: b.defence(true),
                cost: b.cost(),
                electronics_cost: b.electronics_cost(),
                warnings: b.warnings().iter().map(|w| w.to_string()).collect(),
            }
        }
    }

    /// Write a summary as pretty JSON under `dir`, named after the design.
    pub fn write_summary(dir: &Path, summary: &DesignSummary) -> io::Result<()> {
        fs::create_dir_all(dir)?;
        let file_name = format!(
            "{}.json",
            summary.name.to_lowercase().replace([' ', '/'], "_")
        );
        let file = File::create(dir.join(file_name))?;
        to_writer_pretty(file, summary).map_err(io::Error::other)
    }
}
