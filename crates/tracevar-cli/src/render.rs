//! Plain-text rendering of variability reports

use std::fmt::Write;

use tracevar_metrics::{PairingStrategy, VariabilityReport};

/// Render one report as a human-readable block
pub fn render_text(report: &VariabilityReport) -> String {
    let mut out = String::new();
    // writing to a String cannot fail
    let _ = write_report(&mut out, report);
    out
}

fn write_report(out: &mut String, report: &VariabilityReport) -> std::fmt::Result {
    writeln!(out, "Log {}", report.source.as_deref().unwrap_or("<memory>"))?;
    writeln!(out, "Total number of traces: {}", report.total_cases)?;
    writeln!(out, "Distinct event types: {}", report.event_types)?;
    writeln!(out, "Trace frequencies:")?;
    for (frequency, variants) in &report.frequency_histogram {
        let noun = if *variants == 1 { "trace appears" } else { "traces appear" };
        let times = if *frequency == 1 { "time" } else { "times" };
        writeln!(out, "- {} {} {} {}", variants, noun, frequency, times)?;
    }

    writeln!(out, "Number of variants: {}", report.variant_count)?;
    match report.variant_percentage {
        Some(pct) => writeln!(out, "Variability (perc.): {:.3}%", pct)?,
        None => writeln!(out, "Variability (perc.): undefined (log is empty)")?,
    }
    writeln!(
        out,
        "Edit distance ({}): {:.3}",
        pairing_label(report),
        report.edit_distance
    )?;
    writeln!(out, "Prefix entropy: {:.6}", report.prefix_entropy)?;
    writeln!(out, "Elapsed: {} ms", report.elapsed_ms)?;
    Ok(())
}

fn pairing_label(report: &VariabilityReport) -> &'static str {
    match report.pairing {
        PairingStrategy::Anchor => "anchor",
        PairingStrategy::AllPairs => "all pairs",
    }
}

/// Render a one-line-per-log comparison table
pub fn render_summary(reports: &[VariabilityReport]) -> String {
    let mut out = String::new();
    let width = reports
        .iter()
        .filter_map(|r| r.source.as_deref())
        .map(str::len)
        .max()
        .unwrap_or(0)
        .max("source".len());

    let _ = writeln!(
        out,
        "{:<width$}  {:>8}  {:>8}  {:>9}  {:>14}  {:>14}",
        "source", "cases", "variants", "perc.", "edit distance", "prefix entropy"
    );
    for report in reports {
        let pct = report
            .variant_percentage
            .map(|p| format!("{:.3}%", p))
            .unwrap_or_else(|| "-".to_string());
        let edit = report
            .edit_distance
            .value()
            .map(|v| format!("{:.3}", v))
            .unwrap_or_else(|| "-".to_string());
        let entropy = report
            .prefix_entropy
            .value()
            .map(|v| format!("{:.6}", v))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:<width$}  {:>8}  {:>8}  {:>9}  {:>14}  {:>14}",
            report.source.as_deref().unwrap_or("<memory>"),
            report.total_cases,
            report.variant_count,
            pct,
            edit,
            entropy
        );
    }
    out
}
