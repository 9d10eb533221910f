use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Base goman config directory (~/.config/goman/ on Unix-like systems)
pub fn goman() -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::internal_unexpected(
                "APPDATA environment variable not set on Windows".to_string(),
            )
        })?;
        Ok(PathBuf::from(appdata).join("goman"))
    }

    #[cfg(not(windows))]
    {
        let home = home()?;
        Ok(home.join(".config").join("goman"))
    }
}

/// Global goman.json config file path
pub fn goman_json() -> Result<PathBuf> {
    Ok(goman()?.join("goman.json"))
}

/// User home directory
pub fn home() -> Result<PathBuf> {
    #[cfg(windows)]
    let var = "USERPROFILE";
    #[cfg(not(windows))]
    let var = "HOME";

    env::var(var).map(PathBuf::from).map_err(|_| {
        Error::internal_unexpected(format!("{} environment variable not set", var))
    })
}

/// Default Go source root ($HOME/go/src)
pub fn default_source_root() -> Result<PathBuf> {
    Ok(home()?.join("go").join("src"))
}
