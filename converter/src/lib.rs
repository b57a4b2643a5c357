//! Configurable unit conversion for cubic equation-of-state values.
//!
//! The solver works internally in **K, bar, cm³/mol**, the units in which
//! the gas constant is R = 83.14 bar·cm³/(mol·K).  This crate lets callers
//! work in whatever units they prefer (°C, kPa, L/mol, …) and handles the
//! conversion transparently.
//!
//! # Presets
//!
//! | Preset          | T   | P   | V       |
//! |-----------------|-----|-----|---------|
//! | `native()`      | K   | bar | cm³/mol |
//! | `engineering()` | °C  | bar | L/mol   |
//! | `si()`          | K   | Pa  | m³/mol  |
//!
//! # Builder
//!
//! ```
//! use converter::{UnitSystem, TempUnit, PressUnit};
//!
//! let units = UnitSystem::new()
//!     .temperature(TempUnit::Celsius)
//!     .pressure(PressUnit::KPa);
//! ```

// ────────────────────────────────────────────────────────────────────
//  Unit enums
// ────────────────────────────────────────────────────────────────────

/// Temperature unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempUnit {
    /// Kelvin (native)
    Kelvin,
    /// Degrees Celsius
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
    /// Degrees Rankine
    Rankine,
}

/// Pressure unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressUnit {
    /// Bar (native)
    Bar,
    /// Kilopascal
    KPa,
    /// Megapascal
    MPa,
    /// Pascal
    Pa,
    /// Standard atmosphere (1.01325 bar)
    Atm,
    /// Pounds per square inch
    Psi,
}

/// Molar volume unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeUnit {
    /// cm³/mol (native)
    Cm3PerMol,
    /// L/mol (= dm³/mol)
    LPerMol,
    /// m³/mol
    M3PerMol,
}

// ────────────────────────────────────────────────────────────────────
//  UnitSystem — user configuration
// ────────────────────────────────────────────────────────────────────

/// Describes the set of units the user wants to work in.
///
/// Create one with a preset (`native()`, `engineering()`, `si()`) or
/// customise individual quantities with the builder methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitSystem {
    pub temperature: TempUnit,
    pub pressure:    PressUnit,
    pub volume:      VolumeUnit,
}

impl UnitSystem {
    /// Start from native units.  Use the builder methods to change
    /// individual quantities.
    pub fn new() -> Self { Self::native() }

    // ── Presets ──────────────────────────────────────────────────────

    /// Native: K, bar, cm³/mol.
    pub fn native() -> Self {
        Self {
            temperature: TempUnit::Kelvin,
            pressure:    PressUnit::Bar,
            volume:      VolumeUnit::Cm3PerMol,
        }
    }

    /// Engineering: °C, bar, L/mol.
    pub fn engineering() -> Self {
        Self {
            temperature: TempUnit::Celsius,
            pressure:    PressUnit::Bar,
            volume:      VolumeUnit::LPerMol,
        }
    }

    /// Strict SI: K, Pa, m³/mol.
    pub fn si() -> Self {
        Self {
            temperature: TempUnit::Kelvin,
            pressure:    PressUnit::Pa,
            volume:      VolumeUnit::M3PerMol,
        }
    }

    /// Look a preset up by name (`"native"`, `"engineering"`, `"si"`,
    /// case-insensitive).
    pub fn preset(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "native" | "default" => Some(Self::native()),
            "engineering" | "eng" => Some(Self::engineering()),
            "si" => Some(Self::si()),
            _ => None,
        }
    }

    // ── Builder methods ─────────────────────────────────────────────

    pub fn temperature(mut self, u: TempUnit) -> Self { self.temperature = u; self }
    pub fn pressure(mut self, u: PressUnit) -> Self { self.pressure = u; self }
    pub fn volume(mut self, u: VolumeUnit) -> Self { self.volume = u; self }
}

impl Default for UnitSystem {
    fn default() -> Self { Self::native() }
}

// ────────────────────────────────────────────────────────────────────
//  Converter
// ────────────────────────────────────────────────────────────────────

/// Performs conversions between user units and native units.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Converter {
    pub units: UnitSystem,
}

impl Converter {
    pub fn new(units: UnitSystem) -> Self {
        Self { units }
    }

    /// Identity converter — native units in, native units out.
    pub fn identity() -> Self {
        Self { units: UnitSystem::native() }
    }

    // ── Temperature ─────────────────────────────────────────────────

    /// User → native (K)
    pub fn t_to_native(&self, t: f64) -> f64 {
        match self.units.temperature {
            TempUnit::Kelvin     => t,
            TempUnit::Celsius    => t + 273.15,
            TempUnit::Fahrenheit => (t - 32.0) * 5.0 / 9.0 + 273.15,
            TempUnit::Rankine    => t * 5.0 / 9.0,
        }
    }

    /// Native (K) → user
    pub fn t_from_native(&self, t: f64) -> f64 {
        match self.units.temperature {
            TempUnit::Kelvin     => t,
            TempUnit::Celsius    => t - 273.15,
            TempUnit::Fahrenheit => (t - 273.15) * 9.0 / 5.0 + 32.0,
            TempUnit::Rankine    => t * 9.0 / 5.0,
        }
    }

    // ── Pressure ────────────────────────────────────────────────────

    /// Size of one user pressure unit, in bar.
    fn bar_per_unit(&self) -> f64 {
        match self.units.pressure {
            PressUnit::Bar => 1.0,
            PressUnit::KPa => 0.01,
            PressUnit::MPa => 10.0,
            PressUnit::Pa  => 1.0e-5,
            PressUnit::Atm => 1.013_25,
            PressUnit::Psi => 0.068_947_57,
        }
    }

    /// User → native (bar)
    pub fn p_to_native(&self, p: f64) -> f64 {
        p * self.bar_per_unit()
    }

    /// Native (bar) → user
    pub fn p_from_native(&self, p: f64) -> f64 {
        p / self.bar_per_unit()
    }

    // ── Molar volume ────────────────────────────────────────────────

    /// Size of one user volume unit, in cm³/mol.
    fn cm3_per_unit(&self) -> f64 {
        match self.units.volume {
            VolumeUnit::Cm3PerMol => 1.0,
            VolumeUnit::LPerMol   => 1.0e3,
            VolumeUnit::M3PerMol  => 1.0e6,
        }
    }

    /// User → native (cm³/mol)
    pub fn v_to_native(&self, v: f64) -> f64 {
        v * self.cm3_per_unit()
    }

    /// Native (cm³/mol) → user
    pub fn v_from_native(&self, v: f64) -> f64 {
        v / self.cm3_per_unit()
    }

    // ── Attraction parameter (pressure × volume²) ───────────────────

    /// Native (bar·cm⁶/mol²) → user
    pub fn a_from_native(&self, a: f64) -> f64 {
        let v = self.cm3_per_unit();
        a / (self.bar_per_unit() * v * v)
    }

    /// User → native (bar·cm⁶/mol²)
    pub fn a_to_native(&self, a: f64) -> f64 {
        let v = self.cm3_per_unit();
        a * self.bar_per_unit() * v * v
    }
}
