//! The four cubic equations of state, as a closed set of parameter sets.
//!
//! Every model is written in the generic form
//!
//! ```text
//! P = RT/(V − b) − a(T) / ((V + εb)(V + σb))
//! ```
//!
//! and differs only in its alpha function and the constants `(σ, ε, Ω, Ψ)`.

use std::f64::consts::SQRT_2;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EosError;

/// Dimensionless constants of the generic cubic form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeConstants {
    pub sigma: f64,
    pub epsilon: f64,
    /// Co-volume coefficient, `b = Ω·R·Tc/Pc`.
    pub omega: f64,
    /// Attraction coefficient, `a = Ψ·α·R²·Tc²/Pc`.
    pub psi: f64,
}

/// Equation-of-state family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EosKind {
    VanDerWaals,
    RedlichKwong,
    SoaveRedlichKwong,
    PengRobinson,
}

impl EosKind {
    /// Every model, in report order.
    pub const ALL: [EosKind; 4] = [
        EosKind::VanDerWaals,
        EosKind::RedlichKwong,
        EosKind::SoaveRedlichKwong,
        EosKind::PengRobinson,
    ];

    /// Temperature-dependent attraction correction α(Tr, ω).
    pub fn alpha(self, reduced_temperature: f64, acentric_factor: f64) -> f64 {
        let w = acentric_factor;
        match self {
            EosKind::VanDerWaals => 1.0,
            EosKind::RedlichKwong => 1.0 / reduced_temperature.sqrt(),
            EosKind::SoaveRedlichKwong => {
                let m = 0.480 + 1.574 * w - 0.716 * w * w;
                soave(m, reduced_temperature)
            }
            EosKind::PengRobinson => {
                let m = 0.37464 + 1.54226 * w - 0.26992 * w * w;
                soave(m, reduced_temperature)
            }
        }
    }

    pub fn shape_constants(self) -> ShapeConstants {
        match self {
            EosKind::VanDerWaals => ShapeConstants {
                sigma: 0.0,
                epsilon: 0.0,
                omega: 1.0 / 8.0,
                psi: 27.0 / 64.0,
            },
            EosKind::RedlichKwong | EosKind::SoaveRedlichKwong => ShapeConstants {
                sigma: 1.0,
                epsilon: 0.0,
                omega: 0.08664,
                psi: 0.42728,
            },
            EosKind::PengRobinson => ShapeConstants {
                sigma: 1.0 + SQRT_2,
                epsilon: 1.0 - SQRT_2,
                omega: 0.07780,
                psi: 0.45724,
            },
        }
    }

    /// Display name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            EosKind::VanDerWaals => "van der Waals",
            EosKind::RedlichKwong => "Redlich-Kwong",
            EosKind::SoaveRedlichKwong => "Soave-Redlich-Kwong",
            EosKind::PengRobinson => "Peng-Robinson",
        }
    }

    /// Short tag accepted by [`FromStr`].
    pub fn tag(self) -> &'static str {
        match self {
            EosKind::VanDerWaals => "vdw",
            EosKind::RedlichKwong => "rk",
            EosKind::SoaveRedlichKwong => "srk",
            EosKind::PengRobinson => "pr",
        }
    }

    /// Whether the alpha function reads the acentric factor.
    pub fn uses_acentric_factor(self) -> bool {
        matches!(self, EosKind::SoaveRedlichKwong | EosKind::PengRobinson)
    }
}

/// Soave-type alpha: `(1 + m·(1 − √Tr))²`.
fn soave(m: f64, reduced_temperature: f64) -> f64 {
    let c = 1.0 + m * (1.0 - reduced_temperature.sqrt());
    c * c
}

impl fmt::Display for EosKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EosKind {
    type Err = EosError;

    /// Accepts the short tag (`vdw`, `rk`, `srk`, `pr`) or the display
    /// name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        EosKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == wanted || kind.name().to_lowercase() == wanted)
            .ok_or_else(|| EosError::UnknownModel(s.to_string()))
    }
}
