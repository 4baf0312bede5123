use clap::Parser;
use colored::Colorize;
use std::error::Error;
use subnet_calculator::output::{report_to_json, render_report};
use subnet_calculator::processing::split_cidr_arg;
use subnet_calculator::{calculate_with, format_summary, CalcConfig, CalculationError};

const LOG_CONFIG_ENV: &str = "SUBNET_CALC_LOG_CONFIG";

#[derive(Parser)]
#[command(name = "subnet-calc")]
#[command(about = "Calculate IPv4 subnet boundaries and split a network into smaller subnets.")]
struct CommandLine {
    /// IPv4 address, optionally with its prefix (e.g. 192.168.10.5/24)
    address: String,
    /// Prefix length or dotted mask (e.g. /24 or 255.255.255.0)
    mask: Option<String>,
    /// Print the report as JSON
    #[arg(long, conflicts_with = "summary")]
    json: bool,
    /// Print only the plain text summary
    #[arg(long)]
    summary: bool,
    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let log_config = std::env::var(LOG_CONFIG_ENV).unwrap_or_else(|_| "log4rs.yml".to_string());
    if let Err(e) = log4rs::init_file(&log_config, Default::default()) {
        eprintln!("Logging disabled, could not load {log_config}: {e}");
    }
    log::debug!("#Start main()");

    let args = CommandLine::parse();
    if args.no_color {
        colored::control::set_override(false);
    }
    let config = CalcConfig::from_env().unwrap_or_else(|e| exit_with(&e));

    let (address, mask) =
        split_cidr_arg(&args.address, args.mask.as_deref(), &config.default_mask);

    let report = calculate_with(&address, &mask, &config).unwrap_or_else(|e| {
        log::warn!("Calculation failed for {address} {mask}: {e:?}");
        exit_with(&e)
    });

    if args.json {
        println!("{}", report_to_json(&report)?);
    } else if args.summary {
        println!("{}", format_summary(&report));
    } else {
        print!("{}", render_report(&report));
    }

    Ok(())
}

fn exit_with(e: &CalculationError) -> ! {
    eprintln!("{} {}", "Error:".red(), e.message());
    std::process::exit(1);
}
