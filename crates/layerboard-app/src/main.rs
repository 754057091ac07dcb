//! Main application entry point (native).

use layerboard_app::{App, AppConfig, AppResult};
use layerboard_core::storage::FileStorage;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::Arc;

#[cfg(feature = "native")]
fn main() {
    env_logger::init();
    log::info!("Starting Layerboard");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}

#[cfg_attr(not(feature = "native"), allow(dead_code))]
fn run() -> AppResult<()> {
    let mut config = AppConfig::load()?;
    if let Some(script) = std::env::args_os().nth(1) {
        config.script = Some(PathBuf::from(script));
    }

    let storage = match &config.storage_dir {
        Some(dir) => FileStorage::new(dir.clone())?,
        None => FileStorage::default_location()?,
    };
    log::info!("Storing layouts in {}", storage.base_path().display());

    let mut app = App::new(config.clone(), Arc::new(storage));
    if config.restore_on_start {
        app.restore()?;
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = match &config.script {
        Some(path) => {
            let file = std::fs::File::open(path)?;
            app.run(BufReader::new(file), &mut out)?
        }
        None => app.run(std::io::stdin().lock(), &mut out)?,
    };
    log::info!(
        "Done: {} commands, {} skipped, {} failed",
        summary.executed,
        summary.skipped,
        summary.failed
    );
    Ok(())
}
