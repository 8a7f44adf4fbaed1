use kassel_mensa_rs::canteens::available_canteens;
use kassel_mensa_rs::constants::DEFAULT_TIMEOUT_SECS;
use kassel_mensa_rs::data_types::menu_data_types::ParseResult;
use kassel_mensa_rs::fetcher::pull;
use kassel_mensa_rs::projection::transpose;
use kassel_mensa_rs::shared_main::{logger_init, to_json_string};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::time::{Duration, Instant};

/// Weekly meal plans of the Studentenwerk Kassel canteens as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Commands,
    /// Group meals by weekday instead of by meal slot
    #[arg(short, long, global = true)]
    transposed: bool,
    /// Enable verbose logging (mostly performance metrics){n}[SETS env: RUST_LOG=debug]
    #[arg(short, long, global = true)]
    verbose: bool,
    /// HTTP timeout in seconds
    #[arg(long, env = "KASSEL_MENSA_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    timeout: u64,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pull current menu of a canteen and put result to stdout
    Pull {
        /// Canteen key, see `list`
        canteen: String,
    },
    /// List available canteens
    List,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }
    logger_init(module_path!());

    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Commands::List => {
            for key in available_canteens() {
                println!("{}", key);
            }
            Ok(())
        }
        Commands::Pull { canteen } => {
            let now = Instant::now();
            let parsed = pull(&canteen, Duration::from_secs(args.timeout)).await?;
            log::debug!("pull {}: {:.2?}", canteen, now.elapsed());

            print_menu(parsed, args.transposed)
        }
    }
}

fn print_menu(parsed: ParseResult, transposed: bool) -> Result<()> {
    if !parsed.success {
        bail!(parsed
            .message
            .unwrap_or_else(|| "menu could not be parsed".to_string()));
    }

    let json = if transposed {
        to_json_string(&transpose(parsed).menu)?
    } else {
        to_json_string(&parsed.menu)?
    };
    println!("{}", json);

    Ok(())
}
