//! Batch ticket simulator CLI.
//!
//! Scratches a configurable batch per ticket type and prints a payout table,
//! or the full report as JSON for downstream tooling.

use clap::Parser;
use sf_core::SfResult;
use sf_sim::{SimConfig, SimReport};

#[derive(Parser, Debug)]
#[command(name = "sf-sim", version, about = "Scratch ticket batch simulator")]
struct Args {
    /// Tickets to scratch per ticket type
    #[arg(long, default_value_t = 10_000)]
    tickets: u64,

    /// Fraction of each batch issued as bonus tickets
    #[arg(long, default_value_t = 0.2)]
    bonus_ratio: f64,

    /// Prefix for derived ticket ids
    #[arg(long, default_value = "sim")]
    seed_prefix: String,

    /// Emit the full report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> SfResult<()> {
    env_logger::init();
    let args = Args::parse();

    let config = SimConfig {
        tickets_per_type: args.tickets,
        bonus_ratio: args.bonus_ratio,
        seed_prefix: args.seed_prefix,
    };
    log::info!("simulating on {} cores", num_cpus::get());

    let report = sf_sim::run(&config)?;
    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print_table(&report);
    }
    Ok(())
}

fn print_table(report: &SimReport) {
    println!(
        "{:<8} {:>8} {:>7} {:>7} {:>12} {:>16} {:>16} {:>12} {:>14}",
        "type", "plays", "wins", "hit%", "tokens", "cash", "stock value", "max tokens", "max money"
    );
    for stats in &report.stats {
        let name = stats.ticket_type.to_string();
        println!(
            "{:<8} {:>8} {:>7} {:>6.1}% {:>12} {:>16.2} {:>16.2} {:>12} {:>14.2}",
            name,
            stats.plays,
            stats.wins,
            100.0 * stats.hit_rate(),
            stats.total_tokens,
            stats.total_cash,
            stats.total_stock_value,
            stats.max_tokens,
            stats.max_money_value
        );
    }
}
