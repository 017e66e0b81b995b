use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use stunting_model::{Model, StuntingScorer};
use stunting_report::Assessment;

pub mod config;

use config::{Config, OutputFormat, CONFIG_FILE, MAX_PRECISION};

#[derive(Debug, Parser)]
#[command(
    name = "carestunt",
    version,
    about = "Stunting risk assessment for children aged 18-36 months",
    long_about = "carestunt estimates the risk of stunting (Rendah, Sedang, Tinggi) from a \
        child's age, diet quality, infection history and sanitation level.\n\n\
        EXAMPLES:\n\
        \n  carestunt assess --age 24 --diet Kurang --infection \"Sering Diare\" --environment Kurang\
        \n  carestunt assess --age 20 --diet Baik --infection \"tidak ada\" --environment Baik --format json\
        \n  carestunt tables\
        \n  carestunt init-config\n\n\
        The result supports decisions; it is not a medical diagnosis."
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (defaults to ./carestunt.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score one child and print the assessment
    Assess(AssessArgs),
    /// Print the conditional probability tables as JSON
    Tables,
    /// Write a default configuration file
    InitConfig(InitConfigArgs),
}

#[derive(Debug, Args)]
struct AssessArgs {
    /// Age in months
    #[arg(long, value_parser = clap::value_parser!(i32).range(0..=60))]
    age: i32,

    /// Diet quality: Baik, Cukup or Kurang
    #[arg(long)]
    diet: String,

    /// Infection history, e.g. "Tidak Ada", "Jarang", "Sering Diare", "Sering Infeksi"
    #[arg(long)]
    infection: String,

    /// Sanitation level: Baik, Cukup or Kurang
    #[arg(long)]
    environment: String,

    /// Child's name, shown in the report
    #[arg(long)]
    name: Option<String>,

    /// Output format (overrides the configuration file)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Decimals for percentages in text output
    #[arg(long)]
    precision: Option<usize>,

    /// Omit recommended actions
    #[arg(long)]
    no_advice: bool,
}

#[derive(Debug, Args)]
struct InitConfigArgs {
    /// Where to write the file
    #[arg(long, default_value = CONFIG_FILE)]
    path: PathBuf,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG, when set, overrides the flag
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

fn load_config(explicit: Option<&Path>) -> Result<Config, i32> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    match config::discover_config(explicit, &cwd) {
        Ok(cfg) => {
            log::debug!("configuration: {cfg}");
            Ok(cfg)
        }
        Err(e) => {
            eprintln!("error: {e}");
            Err(2)
        }
    }
}

fn run_assess(cli_config: Option<&Path>, args: &AssessArgs) -> i32 {
    let mut cfg = match load_config(cli_config) {
        Ok(cfg) => cfg,
        Err(rc) => return rc,
    };

    if let Some(name) = &args.name {
        if name.trim().is_empty() {
            eprintln!("error: --name must not be blank");
            return 2;
        }
    }
    if let Some(format) = args.format {
        cfg.output.format = format;
    }
    if let Some(precision) = args.precision {
        if precision > MAX_PRECISION {
            eprintln!("error: --precision must be at most {MAX_PRECISION}");
            return 2;
        }
        cfg.output.precision = precision;
    }
    if args.no_advice {
        cfg.report.advice = false;
    }

    let model = StuntingScorer::new();
    log::info!(
        "scoring with {}: age={} diet={:?} infection={:?} environment={:?}",
        model.name(),
        args.age,
        args.diet,
        args.infection,
        args.environment
    );
    let inference = model.predict_raw(args.age, &args.diet, &args.infection, &args.environment);
    let assessment = Assessment::from_inference(
        args.name.as_deref().map(str::trim),
        args.age,
        &inference,
        cfg.report_options(),
    );

    match cfg.output.format {
        OutputFormat::Text => print!("{assessment:.precision$}", precision = cfg.output.precision),
        OutputFormat::Json => match assessment.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize assessment: {e}");
                return 1;
            }
        },
    }
    0
}

fn run_tables() -> i32 {
    let tables = StuntingScorer::new().tables();
    match serde_json::to_string_pretty(&tables) {
        Ok(json) => {
            println!("{json}");
            0
        }
        Err(e) => {
            eprintln!("error: failed to serialize tables: {e}");
            1
        }
    }
}

fn run_init_config(args: &InitConfigArgs) -> i32 {
    if args.path.exists() {
        eprintln!("error: '{}' already exists", args.path.display());
        return 2;
    }
    if let Err(e) = fs::write(&args.path, config::generate_config()) {
        eprintln!("error: failed to write '{}': {e}", args.path.display());
        return 2;
    }
    println!("Created {}", args.path.display());
    0
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match &cli.command {
        Command::Assess(args) => run_assess(cli.config.as_deref(), args),
        Command::Tables => run_tables(),
        Command::InitConfig(args) => run_init_config(args),
    }
}

fn main() {
    std::process::exit(run_cli());
}
