//! Appraisal CLI binary.
//!
//! Provides command-line interface for property valuation.

use appraisal::{AppraisalConfig, Appraiser};
use appraisal_features::{Categorical, District, HeatingType, OccupancyStatus, PropertyRecord};
use appraisal_invest::InvestmentAssumptions;
use appraisal_model::ModelProvider;
use appraisal_output::{ExportFormat, Exporter, ReportFormat};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "appraisal")]
#[command(about = "Appraisal: property valuation and investment analytics", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter (overrides RUST_LOG), e.g. "debug" or "appraisal_model=info"
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate a property's value and derive investment figures
    Estimate(EstimateArgs),

    /// List the districts the model knows
    Districts,

    /// Show the feature names the loaded model was trained on
    Contract {
        /// Model artifact to inspect
        #[arg(long)]
        model: Option<PathBuf>,
    },
}

#[derive(clap::Args)]
struct EstimateArgs {
    /// District name, e.g. "Kadıköy" or "kadikoy"
    #[arg(long, default_value = "Adalar")]
    district: String,

    /// Gross area in m²
    #[arg(long, default_value_t = 100.0)]
    gross_area: f64,

    /// Net area in m²
    #[arg(long, default_value_t = 85.0)]
    net_area: f64,

    /// Number of rooms
    #[arg(long, default_value_t = 3)]
    rooms: u32,

    /// Building age in years
    #[arg(long, default_value_t = 5)]
    building_age: u32,

    /// Floor the unit is on
    #[arg(long, default_value_t = 2)]
    floor: u32,

    /// Number of floors in the building
    #[arg(long, default_value_t = 5)]
    building_floors: u32,

    /// Number of bathrooms
    #[arg(long, default_value_t = 1)]
    bathrooms: u32,

    /// Has a balcony
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    balcony: bool,

    /// Building has an elevator
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    elevator: bool,

    /// Sold furnished
    #[arg(long, default_value_t = false, action = ArgAction::Set)]
    furnished: bool,

    /// Eligible for a mortgage
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    mortgage_eligible: bool,

    /// Has parking
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    parking: bool,

    /// Heating type, e.g. "Kombi" or "merkezi-sistem"
    #[arg(long, default_value = "Kombi")]
    heating: String,

    /// Occupancy status, e.g. "Kiracılı" or "bos"
    #[arg(long, default_value = "Mülk Sahibi Oturuyor")]
    occupancy: String,

    /// Listed asking price to compare against the estimate
    #[arg(long)]
    asking_price: Option<f64>,

    /// Amortization horizon in years (12-30)
    #[arg(long)]
    horizon: Option<u32>,

    /// Expected yearly appreciation in percent (10-100)
    #[arg(long)]
    appreciation: Option<f64>,

    /// Model artifact, tried before the configured candidates
    #[arg(long)]
    model: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the 10-year projection to this file (CSV, or JSON by extension)
    #[arg(long)]
    export_projection: Option<PathBuf>,
}

impl EstimateArgs {
    fn record(&self) -> PropertyRecord {
        PropertyRecord {
            district: self.district.clone(),
            gross_area: self.gross_area,
            net_area: self.net_area,
            rooms: self.rooms,
            building_age: self.building_age,
            floor: self.floor,
            building_floors: self.building_floors,
            bathrooms: self.bathrooms,
            has_balcony: self.balcony,
            has_elevator: self.elevator,
            furnished: self.furnished,
            mortgage_eligible: self.mortgage_eligible,
            has_parking: self.parking,
            heating: self.heating.clone(),
            occupancy: self.occupancy.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Plain-text table
    Text,
    /// Markdown document
    Markdown,
    /// JSON document
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Self::Text,
            OutputFormat::Markdown => Self::Markdown,
            OutputFormat::Json => Self::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing(level: Option<&str>) {
    let filter = level.map_or_else(
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        EnvFilter::new,
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => AppraisalConfig::load(path)?,
        None => AppraisalConfig::default(),
    };
    debug!(?config, "effective configuration");

    match cli.command {
        Commands::Estimate(args) => estimate(&args, config)?,
        Commands::Districts => list_districts(),
        Commands::Contract { model } => show_contract(model, config)?,
    }

    Ok(())
}

fn estimate(
    args: &EstimateArgs,
    mut config: AppraisalConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(model) = &args.model {
        config.model_path = Some(model.clone());
    }

    let record = args.record().canonicalized();
    record.validate()?;

    let assumptions = InvestmentAssumptions::new(
        args.horizon.unwrap_or(config.default_horizon_years),
        args.appreciation.unwrap_or(config.default_appreciation_pct),
    )?;

    let appraiser = Appraiser::from_config(&config);
    let appraisal = appraiser.appraise(&record, args.asking_price, &assumptions)?;
    let report = appraisal.report(&record, args.asking_price);

    println!("{}", report.render(args.format.into())?);

    if let Some(path) = &args.export_projection {
        export_projection(&report.projection, path)?;
    }

    Ok(())
}

fn export_projection(
    projection: &appraisal_invest::InvestmentProjection,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = ExportFormat::from_path(path).unwrap_or(ExportFormat::Csv);
    projection.export_to_file(path, format)?;
    eprintln!("Projection written to {}", path.display());
    Ok(())
}

fn list_districts() {
    println!("Districts:");
    println!("==========\n");

    for (i, district) in District::all().iter().enumerate() {
        println!("{:2} - {:<16} {}", i + 1, district.label(), district.column());
    }

    println!("\nHeating types:");
    for heating in HeatingType::all() {
        println!("  {}", heating.label());
    }

    println!("\nOccupancy statuses:");
    for occupancy in OccupancyStatus::all() {
        println!("  {}", occupancy.label());
    }
}

fn show_contract(
    model: Option<PathBuf>,
    config: AppraisalConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let provider = match model {
        Some(path) => {
            let mut candidates = vec![path];
            candidates.extend(config.candidates());
            ModelProvider::new(candidates)
        }
        None => config.provider(),
    };
    let model = provider.load()?;

    println!("Model: {}", model.source().display());
    if let Some(target) = model.target() {
        println!("Target: {target}");
    }
    println!("Inputs: {}\n", model.n_features());

    match model.feature_names() {
        Some(contract) => {
            for (i, column) in contract.columns().iter().enumerate() {
                println!("{:3}  {}", i, column);
            }
        }
        None => println!("The artifact records no feature names; input is not aligned."),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_estimate_defaults_match_record_defaults() {
        let cli = Cli::try_parse_from(["appraisal", "estimate"]).unwrap();
        let Commands::Estimate(args) = cli.command else {
            panic!("expected estimate");
        };
        assert_eq!(args.record(), PropertyRecord::default());
        assert!(args.asking_price.is_none());
    }

    #[test]
    fn test_estimate_flags() {
        let cli = Cli::try_parse_from([
            "appraisal",
            "estimate",
            "--district",
            "kadikoy",
            "--net-area",
            "120",
            "--furnished",
            "true",
            "--asking-price",
            "5000000",
            "--format",
            "markdown",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        let Commands::Estimate(args) = cli.command else {
            panic!("expected estimate");
        };
        let record = args.record().canonicalized();
        assert_eq!(record.district, "Kadıköy");
        assert_eq!(record.net_area, 120.0);
        assert!(record.furnished);
        assert_eq!(args.asking_price, Some(5_000_000.0));
        assert!(matches!(args.format, OutputFormat::Markdown));
    }
}
