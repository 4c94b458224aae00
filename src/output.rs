//! Output formatting module

use crate::cli::OutputFormat;
use crate::constants::{tiers, PanelSpec, PANEL_CATALOG};
use crate::domain::model::{DentSize, PanelOrientation, PricingResult, Quote, QuoteBreakdown};
use crate::error::Result;

pub fn output_pricing_result(format: OutputFormat, result: &PricingResult) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        println!("\nBucket Price");
        println!("============");
        println!("Work units:  {} AW", result.work_units);
        println!("Labor hours: {:.1} h", result.labor_hours);
        println!("Labor cost:  {:.2} EUR", result.cost);
    }
    Ok(())
}

pub fn output_breakdown(format: OutputFormat, breakdown: &QuoteBreakdown) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(breakdown)?);
        return Ok(());
    }

    println!("\nQuote Breakdown");
    println!("===============");
    for panel in &breakdown.panels {
        if panel.buckets.is_empty() {
            continue;
        }
        println!(
            "\n{} ({}, {})",
            panel.panel_name,
            panel.panel_id,
            panel.orientation.label()
        );
        for bucket in &panel.buckets {
            println!(
                "  {:>2}mm x {:<4} {:>4} AW  {:>5.1} h  {:>8.2} EUR",
                bucket.size_mm,
                bucket.count,
                bucket.result.work_units,
                bucket.result.labor_hours,
                bucket.result.cost
            );
        }
        println!("  Panel total: {} AW", panel.panel_work_units);
    }

    println!("\n---------------");
    println!("Total AW:    {}", breakdown.totals.total_work_units);
    println!("Quote price: {:.2} EUR", breakdown.totals.total_cost);
    Ok(())
}

pub fn output_quote_list(format: OutputFormat, quotes: &[Quote]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(quotes)?);
        return Ok(());
    }

    if quotes.is_empty() {
        println!("No stored quotes.");
        return Ok(());
    }

    println!(
        "{:<38} {:<12} {:<24} {:>8} {:>10}",
        "ID", "Date", "Vehicle", "AW", "Price EUR"
    );
    println!("{}", "-".repeat(96));
    for quote in quotes {
        println!(
            "{:<38} {:<12} {:<24} {:>8} {:>10.2}",
            quote.id,
            quote.date.format("%Y-%m-%d"),
            truncate_str(&quote.vehicle, 23),
            quote.total_aw,
            quote.price_euro
        );
    }
    Ok(())
}

pub fn output_panels(format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        let entries: Vec<serde_json::Value> = PANEL_CATALOG
            .iter()
            .map(|p: &PanelSpec| {
                serde_json::json!({
                    "id": p.id,
                    "name": p.name,
                    "orientation": p.orientation.label(),
                    "row": p.row,
                    "col": p.col,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!(
        "{:<26} {:<26} {:<12} {:>4} {:>4}",
        "ID", "Name", "Orientation", "Row", "Col"
    );
    println!("{}", "-".repeat(76));
    for panel in PANEL_CATALOG {
        println!(
            "{:<26} {:<26} {:<12} {:>4} {:>4}",
            panel.id,
            panel.name,
            panel.orientation.label(),
            panel.row,
            panel.col
        );
    }
    Ok(())
}

pub fn output_tiers(
    format: OutputFormat,
    orientation: PanelOrientation,
    size: DentSize,
) -> Result<()> {
    let table = tiers(orientation, size);

    if format == OutputFormat::Json {
        let entries: Vec<serde_json::Value> = table
            .iter()
            .map(|&(count, aw)| serde_json::json!({ "upToCount": count, "workUnits": aw }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!(
        "AW tiers: {} / {}mm",
        orientation.label(),
        size.mm()
    );
    println!("{:>10} {:>8}", "Up to", "AW");
    println!("{}", "-".repeat(19));
    for &(count, aw) in table {
        println!("{:>10} {:>8}", count, aw);
    }
    Ok(())
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
