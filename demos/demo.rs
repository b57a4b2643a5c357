use cubic_eos::{EosKind, Substance, UnitSystem};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Units from CUBIC_EOS_UNITS / .env (native by default) ───────
    let butane = Substance::from_env("n-butane", 425.1, 37.96, 0.200)?;
    println!("{} in {:?}\n", butane.name, butane.converter().units);

    // ── All four models at the same state ───────────────────────────
    for report in butane.evaluate_all(350.0, 9.4573) {
        println!("{report}\n");
    }

    // ── Engineering units: °C, bar, L/mol ───────────────────────────
    let butane = Substance::with_units("n-butane", 151.95, 37.96, 0.200, UnitSystem::engineering());
    let result = butane.solve(EosKind::PengRobinson, 226.85, 10.0)?;
    println!("Peng-Robinson at 226.85 °C, 10 bar [{}]:\n{result}", result.label());

    // ── Rejected input is reported, not raised ──────────────────────
    let report = butane.evaluate(EosKind::SoaveRedlichKwong, 76.85, -1.0);
    println!("\n{report}");

    Ok(())
}
