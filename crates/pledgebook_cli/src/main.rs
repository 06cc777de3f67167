//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `pledgebook_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use pledgebook_core::db::open_db_in_memory;
use pledgebook_core::{
    default_log_level, init_logging, ManualCounter, RegistryService, SqliteRegistryStore,
};
use uuid::Uuid;

fn main() {
    println!("pledgebook_core version={}", pledgebook_core::core_version());

    // Opt-in file logging; the probe stays silent on disk by default.
    if let Ok(log_dir) = std::env::var("PLEDGEBOOK_LOG_DIR") {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    if let Err(err) = run_scenario() {
        eprintln!("scenario failed: {err}");
        std::process::exit(1);
    }
}

// Drives one initiate/classify/schedule/inspect pass over an in-memory
// registry so core wiring can be checked without any persistent state.
fn run_scenario() -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_db_in_memory()?;
    let store = SqliteRegistryStore::try_new(&conn)?;
    let counter = ManualCounter::starting_at(100);
    let registry = RegistryService::new(store, &counter);

    let caller = Uuid::nil();
    registry.initiate(caller, "probe objective")?;
    registry.classify(caller, 2)?;
    let target = registry.schedule(caller, 25)?;

    let status = registry.inspect(caller)?;
    println!(
        "scenario present={} description_len={} completed={} target_point={target}",
        status.present, status.description_len, status.completed
    );

    Ok(())
}
