use clap::Parser;
use maneuver_calculator::config::{find_body, load_bodies};
use maneuver_calculator::impulsive;
use maneuver_calculator::orbits::OrbitParameters;
use maneuver_calculator::{time, units};

#[derive(Parser)]
#[command(author, version, about = "Two-impulse transfer planner")]
struct Cli {
    /// Central body name from the catalog (case-insensitive)
    #[arg(long, default_value = "earth")]
    body: String,

    /// Catalog path (YAML file or directory of TOML fragments)
    #[arg(long, default_value = "configs/bodies.yaml")]
    config: String,

    /// Override the central body's gravitational parameter (m^3/s^2)
    #[arg(long)]
    mu: Option<f64>,

    /// Override the central body's radius (m)
    #[arg(long)]
    body_radius: Option<f64>,

    /// Departure orbit: current altitude above the surface (m)
    #[arg(long)]
    alt1: f64,

    /// Departure orbit: apoapsis altitude (m)
    #[arg(long)]
    apo1: f64,

    /// Departure orbit: periapsis altitude (m)
    #[arg(long)]
    peri1: f64,

    /// Departure orbit: inclination (degrees)
    #[arg(long, default_value_t = 0.0)]
    inc1: f64,

    /// Target orbit: current altitude above the surface (m)
    #[arg(long)]
    alt2: f64,

    /// Target orbit: apoapsis altitude (m)
    #[arg(long)]
    apo2: f64,

    /// Target orbit: periapsis altitude (m)
    #[arg(long)]
    peri2: f64,

    /// Target orbit: inclination (degrees)
    #[arg(long, default_value_t = 0.0)]
    inc2: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mu, body_radius) = match (cli.mu, cli.body_radius) {
        (Some(mu), Some(radius)) => (mu, radius),
        _ => {
            let bodies = load_bodies(&cli.config)?;
            let body = find_body(&bodies, &cli.body)?;
            (
                cli.mu.unwrap_or(body.mu_m3_s2),
                cli.body_radius.unwrap_or(body.radius_m),
            )
        }
    };

    let orbit1 = OrbitParameters::from_surface(body_radius, cli.alt1, cli.apo1, cli.peri1, cli.inc1);
    let orbit2 = OrbitParameters::from_surface(body_radius, cli.alt2, cli.apo2, cli.peri2, cli.inc2);
    let plan = impulsive::transfer(mu, &orbit1, &orbit2)?;

    println!("=== Transfer Plan ===");
    println!("Central body  : {} (mu = {:.6e} m^3/s^2)", cli.body, mu);
    println!(
        "Departure     : r = {:.1} km, apoapsis = {:.1} km, periapsis = {:.1} km, i = {:.1} deg",
        units::m_to_km(orbit1.radius_m),
        units::m_to_km(orbit1.apoapsis_m),
        units::m_to_km(orbit1.periapsis_m),
        orbit1.inclination_deg
    );
    println!(
        "Target        : r = {:.1} km, i = {:.1} deg",
        units::m_to_km(orbit2.radius_m),
        orbit2.inclination_deg
    );
    println!("First burn    : dV1 = {:.2} m/s", plan.dv1_m_s);
    println!("Second burn   : dV2 = {:.2} m/s", plan.dv2_m_s);
    println!("Total delta-v : {:.2} m/s", plan.dv_total_m_s);
    println!(
        "Transfer time : {:.2} s ({:.2} days)",
        plan.time_taken_s,
        time::seconds_to_days(plan.time_taken_s)
    );

    Ok(())
}
