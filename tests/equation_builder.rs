use approx::assert_relative_eq;
use cubic_eos::{
    evaluate_polynomial, solve_eos, EosError, EosKind, EquationCoefficients, Quantity, StateInput,
};

/// n-butane at 350 K and its saturation pressure (bar, cm³/mol).
fn butane() -> StateInput {
    StateInput::new(350.0, 9.4573, 425.1, 37.96, 83.14).with_acentric_factor(0.200)
}

fn states() -> Vec<StateInput> {
    vec![
        butane(),
        // supercritical vapor
        StateInput::new(500.0, 10.0, 425.1, 37.96, 83.14).with_acentric_factor(0.200),
        // compressed liquid
        StateInput::new(300.0, 150.0, 425.1, 37.96, 83.14).with_acentric_factor(0.200),
        // dilute methane
        StateInput::new(250.0, 0.5, 190.6, 45.99, 83.14).with_acentric_factor(0.012),
        // reduced units
        StateInput::new(1.0, 1.0, 1.0, 1.0, 1.0).with_acentric_factor(0.3),
    ]
}

// ═══════════════════════════════════════════════════════════════════
//  Coefficients
// ═══════════════════════════════════════════════════════════════════

#[test]
fn redlich_kwong_attraction_and_co_volume() {
    let eq = EquationCoefficients::build(EosKind::RedlichKwong, &butane()).unwrap();
    assert_relative_eq!(eq.a, 15_495_305.454_749_158, max_relative = 1e-12);
    assert_relative_eq!(eq.b, 80.666_528_054_794_51, max_relative = 1e-12);
    assert_eq!(eq.e, 1.0);
}

#[test]
fn van_der_waals_cubic_has_textbook_form() {
    // V³ − (b + RT/P)V² + (a/P)V − ab/P
    let state = butane();
    let eq = EquationCoefficients::build(EosKind::VanDerWaals, &state).unwrap();
    let v_ig = state.ideal_gas_volume();

    assert_relative_eq!(eq.f, -(eq.b + v_ig), max_relative = 1e-12);
    assert_relative_eq!(eq.g, eq.a / state.pressure, max_relative = 1e-12);
    assert_relative_eq!(eq.h, -eq.a * eq.b / state.pressure, max_relative = 1e-12);
}

#[test]
fn peng_robinson_coefficients() {
    // σ + ε = 2, σ·ε = −1
    let state = butane();
    let eq = EquationCoefficients::build(EosKind::PengRobinson, &state).unwrap();
    let (a, b, p, v_ig) = (eq.a, eq.b, state.pressure, state.ideal_gas_volume());

    assert_relative_eq!(eq.f, b - v_ig, max_relative = 1e-12);
    assert_relative_eq!(eq.g, b * (-3.0 * b - 2.0 * v_ig) + a / p, max_relative = 1e-9);
    assert_relative_eq!(eq.h, b * b * (b + v_ig) - a * b / p, max_relative = 1e-9);
}

#[test]
fn acentric_factor_only_moves_srk_and_pr() {
    let plain = butane().with_acentric_factor(0.0);
    let polar = butane().with_acentric_factor(0.35);
    for kind in EosKind::ALL {
        let a0 = EquationCoefficients::build(kind, &plain).unwrap().a;
        let a1 = EquationCoefficients::build(kind, &polar).unwrap().a;
        assert_eq!(a0 != a1, kind.uses_acentric_factor(), "{kind}");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Round trip: every root solves e·V³ + f·V² + g·V + h = 0
// ═══════════════════════════════════════════════════════════════════

#[test]
fn roots_satisfy_the_equation_of_state_cubic() {
    for kind in EosKind::ALL {
        for state in states() {
            let eq = EquationCoefficients::build(kind, &state).unwrap();
            let roots = solve_eos(kind, &state).unwrap();
            let c = eq.polynomial();

            for v in roots {
                let scale: f64 = c
                    .iter()
                    .enumerate()
                    .map(|(i, ci)| (ci * v.norm().powi(3 - i as i32)).abs())
                    .sum();
                let residual = evaluate_polynomial(c, v).norm() / scale;
                assert!(
                    residual < 1e-9,
                    "{kind} at T={} P={}: root {v} residual {residual:e}",
                    state.temperature,
                    state.pressure
                );
            }
        }
    }
}

#[test]
fn solving_is_deterministic() {
    for kind in EosKind::ALL {
        assert_eq!(solve_eos(kind, &butane()).unwrap(), solve_eos(kind, &butane()).unwrap());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Input validation
// ═══════════════════════════════════════════════════════════════════

fn with(quantity: Quantity, value: f64) -> StateInput {
    let mut s = butane();
    match quantity {
        Quantity::Temperature => s.temperature = value,
        Quantity::Pressure => s.pressure = value,
        Quantity::CriticalTemperature => s.critical_temperature = value,
        Quantity::CriticalPressure => s.critical_pressure = value,
        Quantity::GasConstant => s.gas_constant = value,
        Quantity::AcentricFactor => s.acentric_factor = value,
    }
    s
}

#[test]
fn non_positive_quantities_are_named() {
    let quantities = [
        Quantity::Temperature,
        Quantity::Pressure,
        Quantity::CriticalTemperature,
        Quantity::CriticalPressure,
        Quantity::GasConstant,
    ];
    for kind in EosKind::ALL {
        for quantity in quantities {
            for value in [0.0, -1.0, -350.0] {
                let err = solve_eos(kind, &with(quantity, value)).unwrap_err();
                assert_eq!(err.quantity(), Some(quantity), "{kind}, {quantity} = {value}");
                assert!(
                    err.to_string().contains(&quantity.to_string()),
                    "message should name {quantity}: {err}"
                );
            }
        }
    }
}

#[test]
fn first_offending_quantity_wins() {
    let mut state = butane();
    state.gas_constant = -1.0;
    state.pressure = 0.0;
    let err = EquationCoefficients::build(EosKind::PengRobinson, &state).unwrap_err();
    assert_eq!(err.quantity(), Some(Quantity::Pressure));

    state.temperature = -5.0;
    let err = EquationCoefficients::build(EosKind::PengRobinson, &state).unwrap_err();
    assert_eq!(err.quantity(), Some(Quantity::Temperature));
}

#[test]
fn non_finite_quantities_are_rejected() {
    let err = solve_eos(EosKind::RedlichKwong, &with(Quantity::CriticalPressure, f64::NAN)).unwrap_err();
    assert_eq!(err.quantity(), Some(Quantity::CriticalPressure));
    assert!(err.to_string().contains("finite"), "{err}");

    let err = solve_eos(EosKind::VanDerWaals, &with(Quantity::Temperature, f64::INFINITY)).unwrap_err();
    assert_eq!(err.quantity(), Some(Quantity::Temperature));

    let err = solve_eos(EosKind::SoaveRedlichKwong, &with(Quantity::AcentricFactor, f64::NAN)).unwrap_err();
    assert_eq!(err.quantity(), Some(Quantity::AcentricFactor));
}

#[test]
fn negative_acentric_factor_is_allowed() {
    assert!(solve_eos(EosKind::PengRobinson, &with(Quantity::AcentricFactor, -0.15)).is_ok());
}

#[test]
fn invalid_input_error_message() {
    let err = solve_eos(EosKind::VanDerWaals, &with(Quantity::GasConstant, 0.0)).unwrap_err();
    assert_eq!(
        err,
        EosError::InvalidInput {
            quantity: Quantity::GasConstant,
            message: "gas constant must be greater than zero, got 0".into(),
        }
    );
    assert_eq!(err.to_string(), "Invalid input: gas constant must be greater than zero, got 0");
}
