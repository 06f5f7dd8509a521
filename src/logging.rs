use std::fs::OpenOptions;
use std::path::Path;

use env_logger::{Env, Target};

/// Route `log` output to `path`. The terminal belongs to the TUI, so nothing
/// is ever written to stdout or stderr once the UI is up.
pub fn init(path: &Path, default_level: &str) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()?;
    Ok(())
}
