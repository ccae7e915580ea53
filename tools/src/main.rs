//! race-runner: headless driver for the paddock race simulation.
//!
//! Usage:
//!   race-runner --seed 12345
//!   race-runner --dry-run --seed 7
//!
//! Live runs read API_BASE and ADMIN_TOKEN (or ADMIN_SECRET) from the
//! environment; --dry-run races an in-process sample roster instead.

use anyhow::Result;
use paddock_core::{
    config::{RaceConfig, TransportConfig},
    runner::{RaceReport, RaceRunner},
    transport::{HttpTransport, MemoryTransport, RegistryTransport},
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let dry_run = args.iter().any(|a| a == "--dry-run");

    let config = RaceConfig::from_env()?;

    println!("paddock — race-runner");
    println!("  started:   {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    println!("  seed:      {seed}");
    println!("  distance:  {}", config.race_distance);
    println!("  tick_ms:   {}", config.tick_ms);
    println!("  mode:      {}", if dry_run { "dry-run" } else { "live" });
    println!();

    let transport: Box<dyn RegistryTransport> = if dry_run {
        Box::new(MemoryTransport::sample())
    } else {
        let transport_config = TransportConfig::from_env()?;
        Box::new(HttpTransport::from_config(&transport_config)?)
    };

    let mut runner = RaceRunner::start(&config, seed, transport)?;
    let report = runner.run()?;
    print_summary(&report);
    Ok(())
}

fn print_summary(report: &RaceReport) {
    println!("=== RACE SUMMARY ===");
    println!("  ticks run:      {}", report.ticks);
    println!("  overtakes:      {}", report.overtakes);
    println!("  crashes:        {}", report.crashes);
    println!("  write failures: {}", report.write_failures);
    println!();
    println!("=== FINAL STANDINGS ===");
    for line in &report.standings {
        println!(
            "  {:>2}. {:<12} distance {:>9.1}  price {}",
            line.rank, line.name, line.distance, line.price
        );
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
