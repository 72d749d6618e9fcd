//! Post-run console summary.

use colored::*;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};

use crate::core::{RiskTier, WorkerResult};

/// Build the per-worker summary table. Split from printing so tests can
/// look at the rendered text.
pub fn summary_table(results: &[WorkerResult], plain: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(if plain {
            presets::ASCII_FULL
        } else {
            presets::UTF8_FULL
        })
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Trabajador", "Puntuación Total", "Nivel de Riesgo"]);

    for result in results {
        let tier_cell = if plain {
            Cell::new(result.tier.label())
        } else {
            Cell::new(result.tier.label()).fg(tier_color(result.tier))
        };
        table.add_row(vec![
            Cell::new(&result.name),
            Cell::new(result.total),
            tier_cell,
        ]);
    }
    table
}

fn tier_color(tier: RiskTier) -> Color {
    match tier {
        RiskTier::Nil => Color::Green,
        RiskTier::Low => Color::DarkGreen,
        RiskTier::Medium => Color::Yellow,
        RiskTier::High => Color::DarkYellow,
        RiskTier::VeryHigh => Color::Red,
    }
}

/// Print the post-run summary: headline, per-worker table, and the tier
/// distribution.
pub fn print_summary(results: &[WorkerResult], plain: bool) {
    println!();
    println!("{} {}", "Workers evaluated:".bold(), results.len());
    println!("{}", summary_table(results, plain));
    print_tier_distribution(results);
}

fn print_tier_distribution(results: &[WorkerResult]) {
    let count = |tier: RiskTier| results.iter().filter(|result| result.tier == tier).count();

    println!();
    println!("Risk distribution:");
    println!(
        "  Muy alto: {} worker(s)",
        count(RiskTier::VeryHigh).to_string().red()
    );
    println!(
        "  Alto: {} worker(s)",
        count(RiskTier::High).to_string().yellow()
    );
    println!("  Medio: {} worker(s)", count(RiskTier::Medium));
    println!(
        "  Bajo: {} worker(s)",
        count(RiskTier::Low).to_string().green()
    );
    println!(
        "  Nulo o despreciable: {} worker(s)",
        count(RiskTier::Nil).to_string().cyan()
    );
}
