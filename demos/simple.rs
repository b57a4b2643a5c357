use cubic_eos::{classify_eos, solve_eos, EosKind, EquationCoefficients, StateInput};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // n-butane at 350 K and 9.4573 bar, R in bar·cm³/(mol·K)
    let state = StateInput::new(
        350.0,  // T (K)
        9.4573, // P (bar)
        425.1,  // Tc (K)
        37.96,  // Pc (bar)
        83.14,  // R
    );

    println!("=== Redlich-Kwong ===\n");

    // ── Cubic coefficients ──────────────────────────────────────────
    let eq = EquationCoefficients::build(EosKind::RedlichKwong, &state)?;
    println!("a = {:.4}, b = {:.4}", eq.a, eq.b);
    println!("V³ + ({:.4})V² + ({:.4})V + ({:.4}) = 0\n", eq.f, eq.g, eq.h);

    // ── Raw roots ───────────────────────────────────────────────────
    for root in solve_eos(EosKind::RedlichKwong, &state)? {
        println!("root: {root:.4}");
    }

    // ── Classification ──────────────────────────────────────────────
    let result = classify_eos(EosKind::RedlichKwong, &state)?;
    println!("\n{result}");

    Ok(())
}
