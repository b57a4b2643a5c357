use log::debug;
use serde::{Deserialize, Serialize};

use crate::eos::EosKind;
use crate::error::{EosError, Quantity, Result};
use crate::solver::{solve_cubic, RootSet};

// ── State input ─────────────────────────────────────────────────────

/// Substance and state variables for one solve, in any consistent unit
/// system (the gas constant fixes which one).
///
/// | Field                | Example unit        |
/// |----------------------|---------------------|
/// | temperature          | K                   |
/// | pressure             | bar                 |
/// | critical_temperature | K                   |
/// | critical_pressure    | bar                 |
/// | gas_constant         | bar·cm³/(mol·K)     |
/// | acentric_factor      | dimensionless       |
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateInput {
    pub temperature: f64,
    pub pressure: f64,
    pub critical_temperature: f64,
    pub critical_pressure: f64,
    pub gas_constant: f64,
    /// Only read by SRK and Peng-Robinson.
    #[serde(default)]
    pub acentric_factor: f64,
}

impl StateInput {
    /// State with a zero acentric factor (enough for vdW and RK).
    pub fn new(
        temperature: f64,
        pressure: f64,
        critical_temperature: f64,
        critical_pressure: f64,
        gas_constant: f64,
    ) -> Self {
        Self {
            temperature,
            pressure,
            critical_temperature,
            critical_pressure,
            gas_constant,
            acentric_factor: 0.0,
        }
    }

    pub fn with_acentric_factor(mut self, acentric_factor: f64) -> Self {
        self.acentric_factor = acentric_factor;
        self
    }

    /// Check T, P, Tc, Pc and R (in that order), then ω.  The error names
    /// the first offending quantity.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            (Quantity::Temperature, self.temperature),
            (Quantity::Pressure, self.pressure),
            (Quantity::CriticalTemperature, self.critical_temperature),
            (Quantity::CriticalPressure, self.critical_pressure),
            (Quantity::GasConstant, self.gas_constant),
        ];
        for (quantity, value) in positive {
            validate_positive(quantity, value)?;
        }
        validate_finite(Quantity::AcentricFactor, self.acentric_factor)
    }

    /// `T / Tc`
    pub fn reduced_temperature(&self) -> f64 {
        self.temperature / self.critical_temperature
    }

    /// `R·T / P`
    pub fn ideal_gas_volume(&self) -> f64 {
        self.gas_constant * self.temperature / self.pressure
    }
}

/// Ensure a value is a finite number (not NaN, not ±Infinity).
fn validate_finite(quantity: Quantity, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(EosError::InvalidInput {
            quantity,
            message: format!("{quantity} must be a finite number, got {value}"),
        });
    }
    Ok(())
}

fn validate_positive(quantity: Quantity, value: f64) -> Result<()> {
    validate_finite(quantity, value)?;
    if value <= 0.0 {
        return Err(EosError::InvalidInput {
            quantity,
            message: format!("{quantity} must be greater than zero, got {value}"),
        });
    }
    Ok(())
}

// ── Model parameters ────────────────────────────────────────────────

/// `b = Ω·R·Tc / Pc`.  Only Tc, Pc and R are checked, so this still
/// succeeds when T or P is out of range.
pub fn co_volume(kind: EosKind, state: &StateInput) -> Result<f64> {
    validate_positive(Quantity::CriticalTemperature, state.critical_temperature)?;
    validate_positive(Quantity::CriticalPressure, state.critical_pressure)?;
    validate_positive(Quantity::GasConstant, state.gas_constant)?;
    Ok(kind.shape_constants().omega * state.gas_constant * state.critical_temperature
        / state.critical_pressure)
}

/// `a(T) = Ψ·α(Tr, ω)·R²·Tc² / Pc`.  Needs T, Tc, Pc, R and ω but not P.
pub fn attraction(kind: EosKind, state: &StateInput) -> Result<f64> {
    validate_positive(Quantity::Temperature, state.temperature)?;
    validate_positive(Quantity::CriticalTemperature, state.critical_temperature)?;
    validate_positive(Quantity::CriticalPressure, state.critical_pressure)?;
    validate_positive(Quantity::GasConstant, state.gas_constant)?;
    validate_finite(Quantity::AcentricFactor, state.acentric_factor)?;

    let r = state.gas_constant;
    let tc = state.critical_temperature;
    let alpha = kind.alpha(state.reduced_temperature(), state.acentric_factor);
    Ok(kind.shape_constants().psi * alpha * r * r * tc * tc / state.critical_pressure)
}

// ── Equation coefficients ───────────────────────────────────────────

/// `a`, `b` and the cubic in molar volume `e·V³ + f·V² + g·V + h = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquationCoefficients {
    /// Attraction parameter a(T).
    pub a: f64,
    /// Co-volume b.
    pub b: f64,
    pub e: f64,
    pub f: f64,
    pub g: f64,
    pub h: f64,
}

impl EquationCoefficients {
    /// Validate `state` and derive the cubic for `kind`.
    pub fn build(kind: EosKind, state: &StateInput) -> Result<Self> {
        state.validate()?;

        let consts = kind.shape_constants();
        let p = state.pressure;
        let a = attraction(kind, state)?;
        let b = co_volume(kind, state)?;

        let sum = consts.sigma + consts.epsilon;
        let product = consts.sigma * consts.epsilon;
        let v_ig = state.ideal_gas_volume();

        let coefficients = Self {
            a,
            b,
            e: 1.0,
            f: b * (sum - 1.0) - v_ig,
            g: b * ((product - sum) * b - sum * v_ig) + a / p,
            h: -product * b * b * (b + v_ig) - a * b / p,
        };
        debug!(
            "{kind}: a={a:e} b={b:e} cubic=[{:e}, {:e}, {:e}, {:e}]",
            coefficients.e, coefficients.f, coefficients.g, coefficients.h
        );
        Ok(coefficients)
    }

    /// `[e, f, g, h]`, leading coefficient first.
    pub fn polynomial(&self) -> [f64; 4] {
        [self.e, self.f, self.g, self.h]
    }

    pub fn solve(&self) -> Result<RootSet> {
        solve_cubic(self.e, self.f, self.g, self.h)
    }
}

/// Molar-volume roots of `kind` at `state`.
pub fn solve_eos(kind: EosKind, state: &StateInput) -> Result<RootSet> {
    EquationCoefficients::build(kind, state)?.solve()
}
