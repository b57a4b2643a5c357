use std::f64::consts::SQRT_2;

use approx::assert_relative_eq;
use cubic_eos::{EosError, EosKind, ShapeConstants};

// ═══════════════════════════════════════════════════════════════════
//  Alpha functions
// ═══════════════════════════════════════════════════════════════════

#[test]
fn van_der_waals_alpha_is_constant() {
    for (tr, w) in [(0.3, 0.0), (1.0, 0.5), (2.7, -0.2)] {
        assert_eq!(EosKind::VanDerWaals.alpha(tr, w), 1.0);
    }
}

#[test]
fn redlich_kwong_alpha_is_inverse_sqrt_of_reduced_temperature() {
    assert_relative_eq!(EosKind::RedlichKwong.alpha(0.25, 0.0), 2.0);
    assert_relative_eq!(EosKind::RedlichKwong.alpha(4.0, 0.7), 0.5);
    assert_relative_eq!(EosKind::RedlichKwong.alpha(1.0, 0.3), 1.0);
}

#[test]
fn soave_type_alphas_are_one_at_the_critical_temperature() {
    for w in [-0.1, 0.0, 0.2, 0.9] {
        assert_relative_eq!(EosKind::SoaveRedlichKwong.alpha(1.0, w), 1.0);
        assert_relative_eq!(EosKind::PengRobinson.alpha(1.0, w), 1.0);
    }
}

#[test]
fn soave_redlich_kwong_alpha() {
    // m = 0.480 + 1.574·0.1 − 0.716·0.01 = 0.63024, (1 + 0.2·m)²
    assert_relative_eq!(
        EosKind::SoaveRedlichKwong.alpha(0.64, 0.1),
        1.267_984_098_303_999_8,
        max_relative = 1e-12
    );
}

#[test]
fn peng_robinson_alpha() {
    // m = 0.37464 + 1.54226·0.2 − 0.26992·0.04 = 0.6722952, (1 + 0.1·m)²
    assert_relative_eq!(
        EosKind::PengRobinson.alpha(0.81, 0.2),
        1.138_978_848_359_430_3,
        max_relative = 1e-12
    );
}

#[test]
fn only_srk_and_pr_read_the_acentric_factor() {
    for kind in EosKind::ALL {
        let changes = kind.alpha(0.7, 0.0) != kind.alpha(0.7, 0.4);
        assert_eq!(changes, kind.uses_acentric_factor(), "{kind}");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Shape constants
// ═══════════════════════════════════════════════════════════════════

#[test]
fn shape_constants_match_published_values() {
    assert_eq!(
        EosKind::VanDerWaals.shape_constants(),
        ShapeConstants { sigma: 0.0, epsilon: 0.0, omega: 0.125, psi: 0.421875 }
    );
    assert_eq!(
        EosKind::RedlichKwong.shape_constants(),
        ShapeConstants { sigma: 1.0, epsilon: 0.0, omega: 0.08664, psi: 0.42728 }
    );
    assert_eq!(
        EosKind::SoaveRedlichKwong.shape_constants(),
        EosKind::RedlichKwong.shape_constants()
    );

    let pr = EosKind::PengRobinson.shape_constants();
    assert_eq!(pr.sigma, 1.0 + SQRT_2);
    assert_eq!(pr.epsilon, 1.0 - SQRT_2);
    assert_eq!(pr.omega, 0.07780);
    assert_eq!(pr.psi, 0.45724);
}

// ═══════════════════════════════════════════════════════════════════
//  Names
// ═══════════════════════════════════════════════════════════════════

#[test]
fn all_lists_every_model_once_in_report_order() {
    let names: Vec<&str> = EosKind::ALL.iter().map(|k| k.name()).collect();
    assert_eq!(
        names,
        ["van der Waals", "Redlich-Kwong", "Soave-Redlich-Kwong", "Peng-Robinson"]
    );
}

#[test]
fn parse_tags_and_names() {
    assert_eq!("vdw".parse::<EosKind>().unwrap(), EosKind::VanDerWaals);
    assert_eq!(" RK ".parse::<EosKind>().unwrap(), EosKind::RedlichKwong);
    assert_eq!("srk".parse::<EosKind>().unwrap(), EosKind::SoaveRedlichKwong);
    assert_eq!("Peng-Robinson".parse::<EosKind>().unwrap(), EosKind::PengRobinson);

    for kind in EosKind::ALL {
        assert_eq!(kind.to_string().parse::<EosKind>().unwrap(), kind);
    }
}

#[test]
fn unknown_model_is_an_error() {
    let err = "virial".parse::<EosKind>().unwrap_err();
    assert_eq!(err, EosError::UnknownModel("virial".into()));
}
