//! Environment configuration.
//!
//! | Variable          | Values                            | Default  |
//! |-------------------|-----------------------------------|----------|
//! | `CUBIC_EOS_UNITS` | `native`, `engineering`, `si`     | `native` |
//!
//! Variables may also come from a `.env` file, looked up in the working
//! directory, then `CARGO_MANIFEST_DIR`, then next to the executable.

use std::env;
use std::path::PathBuf;
use std::sync::Once;

use converter::UnitSystem;

use crate::error::{EosError, Result};

/// Name of the unit-preset variable.
pub const UNITS_VAR: &str = "CUBIC_EOS_UNITS";

/// Load `.env` once per process.
pub fn load_dotenv() {
    static DOTENV_INIT: Once = Once::new();
    DOTENV_INIT.call_once(|| {
        if dotenvy::dotenv().is_ok() { return; }
        if let Ok(dir) = env::var("CARGO_MANIFEST_DIR") {
            let p = PathBuf::from(dir).join(".env");
            if p.exists() { let _ = dotenvy::from_path(&p); return; }
        }
        if let Ok(exe) = env::current_exe() {
            if let Some(dir) = exe.parent() {
                let p = dir.join(".env");
                if p.exists() { let _ = dotenvy::from_path(&p); }
            }
        }
    });
}

/// Unit system selected by `CUBIC_EOS_UNITS`.
pub fn units_from_env() -> Result<UnitSystem> {
    load_dotenv();
    match env::var(UNITS_VAR) {
        Ok(name) => parse_units(&name),
        Err(env::VarError::NotPresent) => Ok(UnitSystem::native()),
        Err(e) => Err(EosError::InvalidConfig(format!("{UNITS_VAR}: {e}"))),
    }
}

/// Resolve a preset name, rejecting unknown ones.
pub fn parse_units(name: &str) -> Result<UnitSystem> {
    UnitSystem::preset(name).ok_or_else(|| {
        EosError::InvalidConfig(format!(
            "{UNITS_VAR}={name} (expected one of: native, engineering, si)"
        ))
    })
}
