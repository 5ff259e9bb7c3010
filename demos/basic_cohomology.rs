//! Basic example: the cohomology ring of the Grassmannian of lines in P^3

use schubert_calculus::prelude::*;
use schubert_calculus::utils::timing::Timer;

fn main() -> schubert_calculus::Result<()> {
    println!("=== Cohomology of G(2,4) ===\n");

    let space = Grassmannian::lines_in(3)?;
    let basis = CohomologyBasis::build(space)?;

    // Additive structure
    println!("--- Betti numbers ---");
    for (degree, group) in basis.groups().iter().enumerate() {
        let labels: Vec<String> = group.iter().map(|c| c.to_string()).collect();
        println!("H^{} rank {}: [{}]", degree, group.len(), labels.join(", "));
    }

    // Pieri and Giambelli
    println!("\n--- Products ---");
    let s1 = SchubertClass::new(&[1], space, 1)?;
    let s11 = SchubertClass::new(&[1, 1], space, 1)?;
    println!("σ_1 · σ_1 = {}", s1.multiply(&s1)?);
    println!("σ_(1,1) · σ_(1,1) = {}", s11.multiply(&s11)?);
    println!("σ_1^4 = {}", s1.pow(4)?);

    // Schubert varieties
    println!("\n--- Schubert varieties ---");
    for class in basis.generators() {
        println!("{}: {}", class, class.variety_description());
    }

    // Malformed input is coerced, with a diagnostic
    println!("\n--- Malformed input ---");
    let (zero, diagnostic) = SchubertClass::make(&[1, 2], space, 1);
    println!("make([1,2]) = {}", zero);
    if let Some(err) = diagnostic {
        println!("  diagnostic: {}", err);
    }

    // Larger Grassmannian
    println!("\n--- G(3,6) ---");
    {
        let _timer = Timer::new("G(3,6) multiplication table");
        let basis = CohomologyBasis::build(Grassmannian::new(3, 5)?)?;
        let table = basis.multiplication_table()?;
        println!("{} generators, symmetric table: {}", table.generators.len(), table.is_symmetric());
        let s1 = SchubertClass::new(&[1], basis.space(), 1)?;
        println!("σ_1^9 = {}", s1.pow(9)?);
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
