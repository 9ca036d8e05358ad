use std::process::ExitCode;

use clap::Parser;

use lol_namecheck::checker::{LookupMode, NameChecker};
use lol_namecheck::config::Config;
use lol_namecheck::logging;

#[derive(Parser)]
#[command(
    name = "lol-namecheck",
    about = "Check whether a League of Legends summoner name is available for reuse",
    after_help = "Reads the Riot API key from the RIOT_API_KEY environment variable \
                  (a .env file is honored). The verdict goes to stdout; logs and \
                  errors go to stderr."
)]
struct Cli {
    /// Region the name lives on (br, eune, euw, lan, las, na, oce, ru, tr, jp, kr)
    region: String,

    /// Summoner name to check
    name: String,

    /// Use the summoner record's last-update timestamp instead of walking
    /// match history (one request instead of up to four)
    #[arg(long)]
    quick: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    };

    let checker = match NameChecker::new(config.riot_api_key, &cli.region) {
        Ok(checker) => checker,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    };

    let checker = if cli.quick {
        checker.with_mode(LookupMode::RevisionDate)
    } else {
        checker
    };

    match checker.check_name(&cli.name).await {
        Ok(verdict) => {
            println!("{verdict}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}
