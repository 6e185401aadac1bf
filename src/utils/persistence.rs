//! Generic JSON persistence helpers for ~/.cultivate/ save files.
//!
//! Every record is a self-contained snapshot. Missing or corrupt files
//! degrade to defaults so the game always starts from a valid state.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Get the ~/.cultivate/ directory path, creating it if needed.
pub fn save_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".cultivate");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a save file in ~/.cultivate/.
pub fn save_path(filename: &str) -> io::Result<PathBuf> {
    Ok(save_dir()?.join(filename))
}

/// Load a JSON file, returning `None` if missing or unparseable.
pub fn load_json<T: serde::de::DeserializeOwned>(filename: &str) -> Option<T> {
    let path = save_path(filename).ok()?;
    let json = fs::read_to_string(path).ok()?;
    serde_json::from_str(&json).ok()
}

/// Load a JSON file, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(filename: &str) -> T {
    load_json(filename).unwrap_or_default()
}

/// Save a value as pretty-printed JSON to ~/.cultivate/.
pub fn save_json<T: serde::Serialize>(filename: &str, data: &T) -> io::Result<()> {
    let path = save_path(filename)?;
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    Ok(())
}

/// Remove a save file if it exists.
pub fn delete_file(filename: &str) -> io::Result<()> {
    let path = save_path(filename)?;
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}
