use clap::{Parser, ValueEnum};
use color_eyre::Result;
use std::path::PathBuf;

use survey_planner::export::{export_csv, export_json};
use survey_planner::select::Subsystem;
use survey_planner::storage::load_project;
use survey_planner::ui::App;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SubsystemArg {
    Radiation,
    Microclimate,
    Noise,
    Ventilation,
}

impl From<SubsystemArg> for Subsystem {
    fn from(arg: SubsystemArg) -> Self {
        match arg {
            SubsystemArg::Radiation => Subsystem::Radiation,
            SubsystemArg::Microclimate => Subsystem::Microclimate,
            SubsystemArg::Noise => Subsystem::Noise,
            SubsystemArg::Ventilation => Subsystem::Ventilation,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "survey-planner")]
#[command(about = "Survey Planner - building structure and measurement selections")]
#[command(version)]
struct Args {
    /// Path to project file
    #[arg(required = true)]
    file: PathBuf,

    /// Export the selected-rooms report to CSV (optional output path)
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Export the building structure to JSON (optional output path)
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Subsystem for the CSV report
    #[arg(long, value_enum, default_value = "radiation")]
    subsystem: SubsystemArg,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let building = load_project(&args.file)?;

    if let Some(csv_path) = &args.csv {
        export_csv(&building, args.subsystem.into(), csv_path)?;
        println!("Exported to CSV: {}", csv_path.display());
    }

    if let Some(json_path) = &args.json {
        export_json(&building, json_path)?;
        println!("Exported to JSON: {}", json_path.display());
    }

    if args.csv.is_some() || args.json.is_some() {
        return Ok(());
    }

    let terminal = ratatui::init();
    let result = App::new(building, args.file).run(terminal);
    ratatui::restore();
    result
}
