// Results formatting and reporting
//
// Presentation only: the engine returns plain records and never calls into
// this module. Callers wanting their own output format can ignore it.

use crate::stats::{format_value, Stats};
use crate::units::Units;
use colored::*;

pub struct Reporter;

impl Reporter {
    pub fn print_header(title: &str) {
        let width = 80;
        println!("{}", "=".repeat(width).bright_blue());
        println!("{:^width$}", title.bright_white().bold(), width = width);
        println!("{}", "=".repeat(width).bright_blue());
        println!();
    }

    pub fn print_separator() {
        println!("{}", "-".repeat(80).blue());
    }

    pub fn print_record(stats: &Stats, units: Units) {
        println!(
            "{} {} {} {}",
            "✓".green().bold(),
            stats.func_name.bright_white(),
            "on".dimmed(),
            stats.input_name.cyan()
        );
        println!("  Samples: {}", stats.samples);
        println!("  Mean:    {}", format_value(stats.mean, units).yellow());
        println!("  σ²:      {}", format_value(stats.sigma_squared, units).blue());
        println!("  σ:       {}", format_value(stats.sigma, units).blue());
    }

    pub fn print_table(results: &[Stats], units: Units) {
        println!(
            "{:<20} {:<15} {:>8} {:>15} {:>15} {:>15}",
            "Function".bright_white().bold(),
            "Input".bright_white().bold(),
            "Samples".bright_white().bold(),
            "Mean".bright_white().bold(),
            "σ²".bright_white().bold(),
            "σ".bright_white().bold()
        );
        Self::print_separator();

        for stats in results {
            println!(
                "{:<20} {:<15} {:>8} {:>15} {:>15} {:>15}",
                stats.func_name.bright_white(),
                stats.input_name.cyan(),
                stats.samples,
                format_value(stats.mean, units).yellow(),
                format_value(stats.sigma_squared, units).blue(),
                format_value(stats.sigma, units).blue()
            );
        }
        println!();
    }

    pub fn print_summary(results: &[Stats], units: Units) {
        let finite: Vec<&Stats> = results.iter().filter(|s| s.mean.is_finite()).collect();
        if finite.is_empty() {
            return;
        }

        let fastest = finite
            .iter()
            .min_by(|a, b| a.mean.partial_cmp(&b.mean).unwrap_or(std::cmp::Ordering::Equal))
            .unwrap();
        let slowest = finite
            .iter()
            .max_by(|a, b| a.mean.partial_cmp(&b.mean).unwrap_or(std::cmp::Ordering::Equal))
            .unwrap();

        Self::print_header("Summary");
        println!("Measurements: {}", results.len().to_string().bright_white().bold());
        println!(
            "Fastest: {} {} ({})",
            fastest.func_name.bright_white(),
            format_value(fastest.mean, units).green(),
            fastest.input_name.cyan()
        );
        println!(
            "Slowest: {} {} ({})",
            slowest.func_name.bright_white(),
            format_value(slowest.mean, units).red(),
            slowest.input_name.cyan()
        );
        if fastest.mean > 0.0 {
            println!(
                "Spread:  {}",
                format!("{:.2}x", slowest.mean / fastest.mean).bright_green().bold()
            );
        }
        println!();
    }

    /// Serialize a result list to pretty-printed JSON.
    pub fn to_json(results: &[Stats]) -> Result<String, String> {
        serde_json::to_string_pretty(results).map_err(|e| format!("JSON encoding failed: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Units;

    fn sample_stats() -> Stats {
        Stats::from_times("quick", "random", &[1.0, 2.0, 3.0], Units::Ms)
    }

    #[test]
    fn test_to_json_includes_all_fields() {
        let json = Reporter::to_json(&[sample_stats()]).unwrap();
        for field in ["func_name", "input_name", "samples", "mean", "sigma_squared", "sigma"] {
            assert!(json.contains(field), "missing field {}", field);
        }
    }

    #[test]
    fn test_to_json_empty_list() {
        assert_eq!(Reporter::to_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_print_helpers_do_not_panic() {
        let stats = sample_stats();
        Reporter::print_header("Test");
        Reporter::print_record(&stats, Units::Ms);
        Reporter::print_table(&[stats.clone()], Units::Ms);
        Reporter::print_summary(&[stats], Units::Ms);
        Reporter::print_summary(&[], Units::Ms);
    }
}
