use log::{debug, warn};

use crate::eos::EosKind;
use crate::equation::{attraction, co_volume, EquationCoefficients, StateInput};
use crate::error::Result;
use crate::properties::{ClassifiedResult, Evaluation, Phase};
use crate::solver::RootSet;

/// Roots with an imaginary part at least this large are not real.
pub const IMAGINARY_TOLERANCE: f64 = 1e-9;

/// Three sorted volumes closer than this (pairwise, adjacent) are one
/// critical volume.
pub const CRITICAL_TOLERANCE: f64 = 1e-6;

/// Real roots with `V > 0` and `V > b`, sorted ascending.
pub fn admissible_volumes(roots: &RootSet, b: f64) -> Vec<f64> {
    let mut volumes: Vec<f64> = roots
        .iter()
        .filter(|root| root.im.abs() < IMAGINARY_TOLERANCE)
        .map(|root| root.re)
        .filter(|&v| v > 0.0 && v > b)
        .collect();
    volumes.sort_by(f64::total_cmp);
    volumes
}

/// Map a root set onto a phase.
pub fn classify(roots: &RootSet, b: f64) -> ClassifiedResult {
    let phase = match admissible_volumes(roots, b).as_slice() {
        [] => Phase::None,
        &[volume] => Phase::SinglePhase { volume },
        &[low, high] => Phase::TwoRoots { low, high },
        &[liquid, unstable, vapor, ..] => {
            if (liquid - unstable).abs() < CRITICAL_TOLERANCE
                && (unstable - vapor).abs() < CRITICAL_TOLERANCE
            {
                Phase::Critical { volume: liquid }
            } else {
                Phase::TwoPhase { liquid, unstable, vapor }
            }
        }
    };
    ClassifiedResult { phase, co_volume: b }
}

/// Build, solve and classify in one step.
pub fn classify_eos(kind: EosKind, state: &StateInput) -> Result<ClassifiedResult> {
    let coefficients = EquationCoefficients::build(kind, state)?;
    let roots = coefficients.solve()?;
    let result = classify(&roots, coefficients.b);
    debug!("{kind}: {}", result.label());
    Ok(result)
}

/// Like [`classify_eos`], but an error becomes an `error` classification
/// so that a report over several models never aborts half-way.
///
/// On error, `a` and `b` are still reported when the inputs they depend on
/// are valid (`b` needs only Tc, Pc and R), and are NaN otherwise.
pub fn evaluate(kind: EosKind, state: &StateInput) -> Evaluation {
    let outcome = EquationCoefficients::build(kind, state).and_then(|coefficients| {
        let roots = coefficients.solve()?;
        Ok((coefficients.a, classify(&roots, coefficients.b)))
    });

    match outcome {
        Ok((a, result)) => Evaluation { kind, attraction: a, result },
        Err(err) => {
            warn!("{kind}: {err}");
            Evaluation {
                kind,
                attraction: attraction(kind, state).unwrap_or(f64::NAN),
                result: ClassifiedResult {
                    co_volume: co_volume(kind, state).unwrap_or(f64::NAN),
                    ..ClassifiedResult::from_error(err.to_string())
                },
            }
        }
    }
}
