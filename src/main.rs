use std::process::ExitCode;

use anyhow::Result;
use human_panic::setup_panic;
use log::error;

use dirconv::cli::{
    get_config_path, get_log_file, get_matches, get_verbosity, processing_options,
};
use dirconv::config::resolve_settings;
use dirconv::logging::init_logger;
use dirconv::workflow::{exit_status, process_tree};

fn main() -> ExitCode {
    setup_panic!();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::from(exit_status(&e))
        }
    }
}

fn run() -> Result<()> {
    let matches = get_matches();

    let log_file = get_log_file(&matches);
    if let Err(e) = init_logger(get_verbosity(&matches), log_file.as_deref()) {
        eprintln!("Failed to initialise logging: {e}");
    }

    let settings = resolve_settings(get_config_path(&matches))?;
    let options = processing_options(settings, &matches);

    process_tree(options)?;

    Ok(())
}
