//! Closed-form solution of `a·x³ + b·x² + c·x + d = 0`.
//!
//! The cubic is reduced to the depressed form `y³ + p·y + q = 0` and the
//! discriminant `Δ = q²/4 + p³/27` picks the formula:
//!
//! * `Δ ≥ 0` — Cardano with real cube roots (one real root and a
//!   complex-conjugate pair, or a repeated real root at `Δ = 0`);
//! * `Δ < 0` — trigonometric form (three distinct real roots, no complex
//!   round-off in the result).

use std::f64::consts::PI;

use log::debug;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{EosError, Result};

/// The three algebraic roots of a cubic, in no particular order.
pub type RootSet = [Complex64; 3];

/// `p` and `q` below this fraction of `shift²` and `|shift|³` are treated as
/// an exact triple root.
pub const DEGENERACY_TOLERANCE: f64 = 1e-12;

/// Which closed-form expression produced the roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CubicBranch {
    /// Radical form, `Δ ≥ 0`.
    Cardano,
    /// Cosine form, `Δ < 0`.
    Trigonometric,
}

/// `y³ + p·y + q = 0` with `x = y − shift`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepressedCubic {
    pub p: f64,
    pub q: f64,
    pub shift: f64,
}

impl DepressedCubic {
    /// Normalise by `a` and remove the quadratic term.
    pub fn from_coefficients(a: f64, b: f64, c: f64, d: f64) -> Result<Self> {
        if a == 0.0 {
            return Err(EosError::InvalidEquation(
                "equation provided is not cubic (a = 0)".into(),
            ));
        }

        let (b, c, d) = (b / a, c / a, d / a);
        let shift = b / 3.0;
        let mut p = c - b * b / 3.0;
        let mut q = 2.0 * b * b * b / 27.0 - b * c / 3.0 + d;

        // A triple root leaves only round-off in p and q, which the cube
        // roots would blow up into spurious imaginary parts.
        if p.abs() <= DEGENERACY_TOLERANCE * shift * shift
            && q.abs() <= DEGENERACY_TOLERANCE * shift.abs().powi(3)
        {
            p = 0.0;
            q = 0.0;
        }

        Ok(Self { p, q, shift })
    }

    pub fn discriminant(&self) -> f64 {
        self.q * self.q / 4.0 + self.p * self.p * self.p / 27.0
    }

    pub fn branch(&self) -> CubicBranch {
        if self.discriminant() >= 0.0 {
            CubicBranch::Cardano
        } else {
            CubicBranch::Trigonometric
        }
    }

    /// All three roots of the original (un-shifted) cubic.
    pub fn roots(&self) -> RootSet {
        let depressed = match self.branch() {
            CubicBranch::Cardano => self.cardano_roots(),
            CubicBranch::Trigonometric => self.trigonometric_roots(),
        };
        depressed.map(|y| y - self.shift)
    }

    fn cardano_roots(&self) -> RootSet {
        let sqrt_delta = self.discriminant().sqrt();
        let u = (-self.q / 2.0 + sqrt_delta).cbrt();
        let v = (-self.q / 2.0 - sqrt_delta).cbrt();

        // Non-trivial cube roots of unity.
        let omega = Complex64::new(-0.5, 3f64.sqrt() / 2.0);
        let omega2 = omega.conj();

        [
            Complex64::from(u + v),
            omega * u + omega2 * v,
            omega2 * u + omega * v,
        ]
    }

    fn trigonometric_roots(&self) -> RootSet {
        // p < 0 whenever Δ < 0, so r is real and positive.
        let r = (-self.p * self.p * self.p / 27.0).sqrt();
        let phi = (-self.q / (2.0 * r)).clamp(-1.0, 1.0).acos();
        let t = 2.0 * r.cbrt();

        [0.0, 1.0, 2.0].map(|k: f64| Complex64::from(t * ((phi + 2.0 * PI * k) / 3.0).cos()))
    }
}

/// Solve `a·x³ + b·x² + c·x + d = 0`.
///
/// Returns exactly three roots (real roots have a zero imaginary part).
/// Fails with [`EosError::InvalidEquation`] when `a == 0`.
///
/// ```
/// use cubic_eos::solve_cubic;
///
/// let roots = solve_cubic(1.0, -6.0, 11.0, -6.0)?;
/// let mut re: Vec<f64> = roots.iter().map(|r| r.re).collect();
/// re.sort_by(f64::total_cmp);
/// assert!((re[0] - 1.0).abs() < 1e-12 && (re[2] - 3.0).abs() < 1e-12);
/// # Ok::<(), cubic_eos::EosError>(())
/// ```
pub fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> Result<RootSet> {
    let cubic = DepressedCubic::from_coefficients(a, b, c, d)?;
    debug!(
        "depressed cubic p={:e} q={:e} delta={:e} ({:?})",
        cubic.p,
        cubic.q,
        cubic.discriminant(),
        cubic.branch()
    );
    Ok(cubic.roots())
}

/// Evaluate `c[0]·x³ + c[1]·x² + c[2]·x + c[3]` at a complex point.
pub fn evaluate_polynomial(coefficients: [f64; 4], x: Complex64) -> Complex64 {
    coefficients
        .iter()
        .fold(Complex64::new(0.0, 0.0), |acc, &c| acc * x + c)
}
