use clap::Parser;
use maneuver_calculator::newton::solve_missing;

#[derive(Parser)]
#[command(author, version, about = "Solve F = m*a for the missing quantity")]
struct Cli {
    /// Force (N)
    #[arg(long)]
    force: Option<f64>,

    /// Mass (kg)
    #[arg(long)]
    mass: Option<f64>,

    /// Acceleration (m/s^2)
    #[arg(long)]
    accel: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let solution = solve_missing(cli.force, cli.mass, cli.accel)?;
    println!(
        "{} = {:.2} {}",
        solution.variable.name(),
        solution.value,
        solution.variable.unit()
    );
    Ok(())
}
