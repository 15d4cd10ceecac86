use clap::Parser;

use linalg_utils::args::LinalgArgs;
use linalg_utils::cli::{self, CliError};
use linalg_utils::config_loader::load_config_or_default;

fn main() {
    let args = LinalgArgs::parse();

    let config = match load_config_or_default(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    env_logger::init_from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    );

    match execute(&args, &config) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}

fn execute(
    args: &LinalgArgs,
    config: &linalg_utils::config_loader::Config,
) -> Result<serde_json::Value, CliError> {
    let request = cli::read_request(args)?;
    log::debug!("running {:?}", args.op);
    cli::run(args, &request, config)
}
