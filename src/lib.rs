//! # cubic-eos
//!
//! Molar-volume roots of the classic cubic equations of state — van der
//! Waals, Redlich-Kwong, Soave-Redlich-Kwong and Peng-Robinson — solved in
//! closed form and classified into physical regimes.
//!
//! ## Highlights
//!
//! * **Exact cubic solver** — Cardano / trigonometric split on the
//!   discriminant, see [`solve_cubic`]
//! * **Closed model set** — [`EosKind`] with total dispatch for α(Tr, ω) and
//!   the `(σ, ε, Ω, Ψ)` constants
//! * **Phase classification** — single-phase, two-phase (liquid / unstable /
//!   vapor), critical, or none; see [`classify()`]
//! * **Configurable units** — work in K + bar + cm³/mol, °C + bar + L/mol,
//!   or SI through [`Substance`]
//!
//! ## Quick example
//!
//! ```
//! use cubic_eos::{classify_eos, EosKind, Phase, StateInput};
//!
//! // n-butane at 350 K and its saturation pressure, R in bar·cm³/(mol·K)
//! let state = StateInput::new(350.0, 9.4573, 425.1, 37.96, 83.14);
//! let result = classify_eos(EosKind::RedlichKwong, &state)?;
//!
//! match result.phase {
//!     Phase::TwoPhase { liquid, vapor, .. } => {
//!         println!("V_liq = {liquid:.2} cm³/mol, V_vap = {vapor:.2} cm³/mol");
//!     }
//!     other => println!("{other}"),
//! }
//! # Ok::<(), cubic_eos::EosError>(())
//! ```
//!
//! ## Unit system
//!
//! ```
//! use cubic_eos::{EosKind, Substance, UnitSystem};
//!
//! let butane = Substance::with_units("n-butane", 151.95, 37.96, 0.200, UnitSystem::engineering());
//! for report in butane.evaluate_all(76.85, 9.4573) {
//!     println!("{report}\n");
//! }
//! ```

// ── Internal modules ─────────────────────────────────────────────────
pub mod classify;
pub mod config;
pub mod eos;
pub mod equation;
pub mod error;
pub mod properties;
pub mod solver;
pub mod substance;

// ── Public re-exports ────────────────────────────────────────────────
pub use classify::{
    admissible_volumes, classify, classify_eos, evaluate, CRITICAL_TOLERANCE,
    IMAGINARY_TOLERANCE,
};
pub use eos::{EosKind, ShapeConstants};
pub use equation::{solve_eos, EquationCoefficients, StateInput};
pub use error::{EosError, Quantity, Result};
pub use properties::{ClassifiedResult, Evaluation, Phase};
pub use solver::{
    evaluate_polynomial, solve_cubic, CubicBranch, DepressedCubic, RootSet, DEGENERACY_TOLERANCE,
};
pub use substance::{Substance, GAS_CONSTANT};

pub use converter::{Converter, PressUnit, TempUnit, UnitSystem, VolumeUnit};
pub use num_complex::Complex64;
