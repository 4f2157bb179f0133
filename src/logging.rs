// File: ./src/logging.rs
// The TUI owns stdout, so log records go to a file.
use anyhow::Result;
use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

pub const LOG_FILE: &str = "colormind.log";
pub const PANIC_LOG_FILE: &str = "colormind_panic.log";

/// Appends log records to `<dir>/colormind.log`. Level comes from
/// `RUST_LOG`, `info` when unset.
pub fn init(dir: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))?;
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()?;
    Ok(())
}

/// Records panics in `<dir>/colormind_panic.log` before the default hook runs.
pub fn install_panic_hook(dir: &Path) {
    let panic_path = dir.join(PANIC_LOG_FILE);
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&panic_path)
        {
            let _ = writeln!(file, "PANIC: {:?}", info);
        }
        log::error!("panic: {}", info);
        default_hook(info);
    }));
}
