use converter::{Converter, UnitSystem};
use serde::{Deserialize, Serialize};

use crate::classify::{classify_eos, evaluate};
use crate::config;
use crate::eos::EosKind;
use crate::equation::StateInput;
use crate::error::*;
use crate::properties::{ClassifiedResult, Evaluation};

/// Molar gas constant in native units, bar·cm³/(mol·K).
pub const GAS_CONSTANT: f64 = 83.144_626_181_532;

/// Critical constants of a pure substance.
///
/// Stored in native units (K, bar); an optional [`UnitSystem`] lets
/// callers pass temperatures and pressures and read volumes in °C, kPa,
/// L/mol, ….
///
/// ```
/// use cubic_eos::{EosKind, Substance, UnitSystem};
///
/// let butane = Substance::with_units("n-butane", 151.95, 37.96, 0.200, UnitSystem::engineering());
/// let result = butane.solve(EosKind::PengRobinson, 226.85, 10.0)?;
/// assert_eq!(result.label(), "single-phase");
/// # Ok::<(), cubic_eos::EosError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Substance {
    pub name: String,
    /// Critical temperature (K)
    pub critical_temperature: f64,
    /// Critical pressure (bar)
    pub critical_pressure: f64,
    pub acentric_factor: f64,
    #[serde(skip)]
    conv: Converter,
}

impl Substance {
    // ── Constructors ─────────────────────────────────────────────────

    /// Critical constants in native units (K, bar).
    pub fn new(name: &str, critical_temperature: f64, critical_pressure: f64, acentric_factor: f64) -> Self {
        Self::with_units(name, critical_temperature, critical_pressure, acentric_factor, UnitSystem::native())
    }

    /// Critical constants, and every later input/output, in `units`.
    pub fn with_units(
        name: &str,
        critical_temperature: f64,
        critical_pressure: f64,
        acentric_factor: f64,
        units: UnitSystem,
    ) -> Self {
        let conv = Converter::new(units);
        Self {
            name: name.to_string(),
            critical_temperature: conv.t_to_native(critical_temperature),
            critical_pressure: conv.p_to_native(critical_pressure),
            acentric_factor,
            conv,
        }
    }

    /// Units taken from `CUBIC_EOS_UNITS` (see [`config`]).
    pub fn from_env(
        name: &str,
        critical_temperature: f64,
        critical_pressure: f64,
        acentric_factor: f64,
    ) -> Result<Self> {
        let units = config::units_from_env()?;
        Ok(Self::with_units(name, critical_temperature, critical_pressure, acentric_factor, units))
    }

    // ── Public API ───────────────────────────────────────────────────

    /// Native-unit state at temperature `t` and pressure `p` (user units).
    pub fn state(&self, t: f64, p: f64) -> StateInput {
        StateInput::new(
            self.conv.t_to_native(t),
            self.conv.p_to_native(p),
            self.critical_temperature,
            self.critical_pressure,
            GAS_CONSTANT,
        )
        .with_acentric_factor(self.acentric_factor)
    }

    /// Classified molar volumes, in user units.
    pub fn solve(&self, kind: EosKind, t: f64, p: f64) -> Result<ClassifiedResult> {
        let result = classify_eos(kind, &self.state(t, p))?;
        Ok(result.convert_volumes(|v| self.conv.v_from_native(v)))
    }

    /// Report for one model; errors become an `error` classification.
    pub fn evaluate(&self, kind: EosKind, t: f64, p: f64) -> Evaluation {
        let raw = evaluate(kind, &self.state(t, p));
        Evaluation {
            kind: raw.kind,
            attraction: self.conv.a_from_native(raw.attraction),
            result: raw.result.convert_volumes(|v| self.conv.v_from_native(v)),
        }
    }

    /// Reports for all four models, in [`EosKind::ALL`] order.
    pub fn evaluate_all(&self, t: f64, p: f64) -> Vec<Evaluation> {
        EosKind::ALL
            .into_iter()
            .map(|kind| self.evaluate(kind, t, p))
            .collect()
    }

    /// Access the active converter.
    pub fn converter(&self) -> &Converter {
        &self.conv
    }
}
