use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use bomber_design_calculator::catalog::EngineCatalog;
use bomber_design_calculator::config::{build_design, find_design, load_designs};
use bomber_design_calculator::report::{fleet, statblock, summary};

#[derive(Parser)]
#[command(author, version, about = "Appraise bomber designs from a scenario file")]
struct Cli {
    /// Scenario file (YAML or TOML) or directory of TOML records
    #[arg(long, default_value = "data/scenarios/designs.yaml")]
    scenarios: PathBuf,

    /// Appraise a single design by name (case-insensitive; default: all)
    #[arg(long)]
    design: Option<String>,

    /// Also score defence against upward-firing night fighters
    #[arg(long, default_value_t = false)]
    schrage: bool,

    /// Write a fleet comparison CSV to the path (use - for stdout)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write per-design JSON summaries into the directory
    #[arg(long)]
    json_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let catalog = EngineCatalog::standard();
    let designs = load_designs(&cli.scenarios)?;

    let selected: Vec<_> = match &cli.design {
        Some(name) => vec![find_design(&designs, name)?.clone()],
        None => designs,
    };

    let mut appraised = Vec::new();
    for config in &selected {
        let bomber = build_design(config, &catalog)?;
        for warning in bomber.warnings() {
            eprintln!("{}: warning: {}", config.name, warning);
        }
        appraised.push((config.name.as_str(), bomber));
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for (name, bomber) in &appraised {
        statblock::write_statblock(&mut out, name, bomber)?;
        if cli.schrage {
            writeln!(
                out,
                "Schrage : {:7.1} defence counting attacks from beneath",
                bomber.defence(true)
            )?;
        }
        writeln!(out)?;
    }

    if let Some(path) = &cli.csv {
        let mut writer = fleet::writer_for_path(path)?;
        fleet::write_header(writer.as_mut())?;
        for (name, bomber) in &appraised {
            fleet::Record::from_design(name, bomber).write_to(writer.as_mut())?;
        }
        writer.flush()?;
    }

    if let Some(dir) = &cli.json_dir {
        for (name, bomber) in &appraised {
            summary::write_summary(dir, &summary::DesignSummary::from_design(name, bomber))?;
        }
    }

    Ok(())
}
