use std::process::ExitCode;

use bollettino::{
    BulletinConfig, BulletinError, Result, TOMORROW, chooser_for, compose_bulletin, load_day,
    logging, write_bulletin, writer,
};
use tracing::{debug, info};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = ?err, "Bulletin generation failed");
            eprintln!("❌ {err}");
            eprintln!("{}", err.user_message());
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = BulletinConfig::load().map_err(BulletinError::from)?;
    logging::init_tracing(&config.logging)?;
    info!(version = bollettino::VERSION, "Starting bulletin generation");

    println!("{}", writer::start_message());

    let day = load_day(&config.paths.input, TOMORROW)?;
    println!("{}", writer::loaded_summary(&day));

    let mut chooser = chooser_for(config.bulletin.seed);
    let bulletin = compose_bulletin(&day, chooser.as_mut());

    write_bulletin(&config.paths.output, &bulletin)?;
    println!("{}", writer::bulletin_report(&config.paths.output, &bulletin));

    Ok(())
}
