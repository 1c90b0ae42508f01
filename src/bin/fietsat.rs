use std::{fs::File, io::BufWriter, path::PathBuf};

use clap::Parser;
use fietsat::*;

/// Staff every route with one driver per experience tier
#[derive(Parser, Debug)]
#[command(name = "fietsat", version)]
struct Args {
    /// JSON array of drivers
    drivers: PathBuf,
    /// JSON array of routes
    routes: PathBuf,
    /// Which tiers a driver's experience lets them fill
    #[arg(long, value_enum, default_value_t = Qualification::AtLeast)]
    qualification: Qualification,
    /// Encoding of the at-most-one constraints
    #[arg(long, value_enum, default_value_t = AtMostOne::Auto)]
    at_most_one: AtMostOne,
    /// Also write the CNF instance to this file in DIMACS format
    #[arg(long)]
    dimacs: Option<PathBuf>,
    /// Print the plan as JSON instead of a report
    #[arg(long)]
    json: bool,
    /// More logging; repeat for more
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Error> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let instance = Instance::load(&args.drivers, &args.routes)?;
    let config = Config::default()
        .with_qualification(args.qualification)
        .with_at_most_one(args.at_most_one);
    let mut planner = Planner::new(config, Splr);

    let outcome = planner.plan_with(&instance, |formula| {
        if let Some(path) = &args.dimacs {
            let io_error = |source| Error::Io {
                path: path.clone(),
                source,
            };
            let file = File::create(path).map_err(io_error)?;
            formula.write_dimacs(BufWriter::new(file)).map_err(io_error)?;
            log::info!("wrote {} clauses to {}", formula.num_clauses(), path.display());
        }
        Ok(())
    })?;
    log::info!(
        "{} propositions, {} auxiliary variables, {} clauses; encoded in {}ms",
        outcome.stats.propositions,
        outcome.stats.auxiliary,
        outcome.stats.clauses,
        outcome.stats.encode_time.as_millis()
    );

    if args.json {
        let json = serde_json::to_string_pretty(&outcome.plan).map_err(Error::Serialize)?;
        println!("{}", json);
    } else {
        print!("{}", Report::new(&instance, &outcome.plan));
    }
    Ok(())
}
