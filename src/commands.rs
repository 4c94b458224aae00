//! Command handlers

use crate::cli::{Cli, Commands, OutputFormat};
use crate::config::Config;
use crate::constants::orientation_for;
use crate::domain::model::{
    DentSize, MaterialFlags, PanelDamageReport, PanelOrientation, Quote,
};
use crate::domain::repository::QuoteRepository;
use crate::domain::service::{pricing_engine, quote_aggregator};
use crate::error::{Error, Result};
use crate::output::{
    output_breakdown, output_panels, output_pricing_result, output_quote_list, output_tiers,
};
use crate::store::QuoteStore;
use std::path::Path;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(rate) = cli.rate {
        config.hourly_rate = rate;
    }
    let format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Price {
            size,
            count,
            panel,
            horizontal,
            aluminum,
            glue,
            pre_press,
            cavity_access,
        } => {
            let orientation = match panel {
                Some(ref id) => orientation_for(id),
                None if horizontal => PanelOrientation::Horizontal,
                None => PanelOrientation::Vertical,
            };
            let materials = MaterialFlags {
                aluminum,
                glue_technique: glue,
                paint: false,
                needs_pre_press: pre_press,
                needs_cavity_access: cavity_access,
            };
            let result =
                pricing_engine::compute(size, count, orientation, &materials, config.hourly_rate)?;
            output_pricing_result(format, &result)
        }

        Commands::Quote { report } => {
            let reports = read_damage_report(&report)?;
            let breakdown = quote_aggregator::calculate_breakdown(&reports, config.hourly_rate)?;
            output_breakdown(format, &breakdown)
        }

        Commands::Add {
            report,
            client,
            vehicle,
            plate,
            chassis,
        } => {
            let reports = read_damage_report(&report)?;
            let mut quote = Quote::new(client, vehicle, reports);
            if let Some(plate) = plate {
                quote = quote.with_plate(plate);
            }
            if let Some(chassis) = chassis {
                quote = quote.with_chassis(chassis);
            }

            let mut store = QuoteStore::open(config.store_dir()?)?;
            let saved = store.save(quote)?;

            if format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&saved)?);
            } else {
                println!("Stored quote {}", saved.id);
                println!("Total AW:    {}", saved.total_aw);
                println!("Quote price: {:.2} EUR", saved.price_euro);
            }
            Ok(())
        }

        Commands::List => {
            let store = QuoteStore::open(config.store_dir()?)?;
            let quotes = store.find_all()?;
            output_quote_list(format, &quotes)
        }

        Commands::Show { id } => {
            let store = QuoteStore::open(config.store_dir()?)?;
            let quote = store
                .find_by_id(&id)?
                .ok_or_else(|| Error::QuoteNotFound(id))?;

            if format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&quote)?);
                return Ok(());
            }

            println!("Quote {}", quote.id);
            println!("Date:    {}", quote.date.format("%Y-%m-%d %H:%M"));
            println!("Client:  {}", quote.client_id);
            println!("Vehicle: {}", quote.vehicle);
            if let Some(ref plate) = quote.plate {
                println!("Plate:   {}", plate);
            }
            if let Some(ref chassis) = quote.chassis {
                println!("Chassis: {}", chassis);
            }

            let breakdown =
                quote_aggregator::calculate_breakdown(&quote.damage, config.hourly_rate)?;
            output_breakdown(format, &breakdown)
        }

        Commands::Remove { id } => {
            let mut store = QuoteStore::open(config.store_dir()?)?;
            if !store.remove(&id)? {
                return Err(Error::QuoteNotFound(id));
            }
            println!("Removed quote {}", id);
            Ok(())
        }

        Commands::Panels => output_panels(format),

        Commands::Tiers { size, vertical } => {
            let size = DentSize::from_mm(size)?;
            let orientation = if vertical {
                PanelOrientation::Vertical
            } else {
                PanelOrientation::Horizontal
            };
            output_tiers(format, orientation, size)
        }

        Commands::Config {
            show,
            set_rate,
            set_output,
            reset,
        } => cmd_config(show, set_rate, set_output, reset),
    }
}

fn read_damage_report(path: &Path) -> Result<Vec<PanelDamageReport>> {
    let content = std::fs::read_to_string(path)?;
    let reports: Vec<PanelDamageReport> = serde_json::from_str(&content)?;
    Ok(reports)
}

fn cmd_config(
    show: bool,
    set_rate: Option<f64>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Config reset to defaults.");
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut changed = false;

    if let Some(rate) = set_rate {
        if rate <= 0.0 {
            return Err(Error::Config(format!(
                "hourly rate must be positive, got {rate}"
            )));
        }
        config.hourly_rate = rate;
        changed = true;
    }
    if let Some(output) = set_output {
        config.output_format = output;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Config updated.");
    }

    if show || !changed {
        print!("{}", config);
    }
    Ok(())
}
