use std::path::PathBuf;

use chrono::Local;
use clap::{ArgAction, Parser};
use log::debug;

use poly_mtncl::catalog::Catalog;
use poly_mtncl::combination::generate_all;
use poly_mtncl::compat::SubsetDirection;
use poly_mtncl::export::{default_csv_file_name, render_report, write_csv_file};
use poly_mtncl::types::Arity;

/// Enumerate polymorphic (HVDD/LVDD) threshold-gate combinations.
#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Gate input counts to enumerate.
    #[arg(short = 'n', long, value_name = "INT", num_args = 1.., default_values_t = [2u8, 3, 4], value_parser = clap::value_parser!(u8).range(2..=4))]
    inputs: Vec<u8>,

    /// Subset relation: `hvdd_subset` (HVDD gate is a subset of LVDD gate) or `lvdd_subset`.
    #[arg(short, long, value_name = "DIRECTION", default_value = "hvdd_subset")]
    subset: SubsetDirection,

    /// Print the truth table of each combination.
    #[arg(short, long)]
    truth_tables: bool,

    /// CSV output path (default: timestamped file in the current directory).
    #[arg(short, long, value_name = "FILE", conflicts_with = "no_csv")]
    output: Option<PathBuf>,

    /// Do not write a CSV file.
    #[arg(long)]
    no_csv: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Disable logging.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> simplelog::LevelFilter {
        if self.quiet {
            return simplelog::LevelFilter::Off;
        }
        match self.verbose {
            0 => simplelog::LevelFilter::Warn,
            1 => simplelog::LevelFilter::Info,
            2 => simplelog::LevelFilter::Debug,
            _ => simplelog::LevelFilter::Trace,
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log_level(),
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    debug!("args = {:?}", args);

    let arities = args
        .inputs
        .iter()
        .map(|&n| Arity::new(n as usize))
        .collect::<Result<Vec<_>, _>>()?;

    let catalog = Catalog::builtin();
    let combinations = generate_all(catalog, &arities, args.subset)?;
    print!("{}", render_report(&combinations, args.truth_tables));

    if !args.no_csv {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(default_csv_file_name(Local::now().naive_local())));
        let path = write_csv_file(&path, &combinations)?;
        println!("\nCombinations saved to: {}", path.display());
    }

    Ok(())
}
