use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::filter::EnvFilter;

use crate::hlt::PlayerId;

/// `<dir>/<player>_<name>.log`, the per-game log file name used by the starter kits.
pub fn log_file_path(dir: &Path, player: PlayerId, name: &str) -> PathBuf {
    dir.join(format!("{player}_{name}.log"))
}

/// Creates (truncating) the game's log file.
pub fn open_log_file(dir: &Path, player: PlayerId, name: &str) -> Result<(File, PathBuf)> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed creating log directory {}", dir.display()))?;
    let path = log_file_path(dir, player, name);
    let file = File::create(&path)
        .with_context(|| format!("failed creating log file {}", path.display()))?;
    Ok((file, path))
}

/// Routes `tracing` output to the game's log file. stdout belongs to the engine.
pub fn init(dir: &Path, player: PlayerId, name: &str) -> Result<PathBuf> {
    let (file, path) = open_log_file(dir, player, name)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed installing log subscriber: {err}"))?;
    Ok(path)
}
