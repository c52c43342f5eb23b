//! Weighed-collection recording.

use std::sync::Arc;

use clap::Args;

use ecocollect::weigh::{WeighRequest, WeighedCollectionRecorder};

use crate::error::CliError;
use crate::notifier::ConsoleNotifier;
use crate::runner::CliRunner;

/// Arguments for the `weigh` subcommand.
#[derive(Args)]
pub struct WeighArgs {
    /// Client the pickup was collected from
    #[arg(long)]
    client: String,

    /// Waste category label
    #[arg(long, default_value = "Household")]
    category: String,

    /// Weight in kilograms
    #[arg(long)]
    weight: String,

    /// Unit price per kilogram
    #[arg(long)]
    price: String,
}

/// Execute the `weigh` subcommand.
pub fn execute(args: WeighArgs, debug: bool) -> Result<(), CliError> {
    let _runner = CliRunner::with_debug(debug)?;

    let recorder = WeighedCollectionRecorder::new(Arc::new(ConsoleNotifier));
    let record = recorder.submit(&WeighRequest {
        client: args.client,
        category: args.category,
        weight_kg: args.weight,
        unit_price: args.price,
    })?;

    println!();
    println!("Recorded weighed collection #{}", record.id);
    println!("  Client:   {}", record.client);
    println!("  Category: {}", record.category);
    println!("  Weight:   {:.1} kg at {:.2}/kg", record.weight_kg, record.unit_price);
    println!("  Total:    {:.2}", record.total);
    println!("  Points:   {}", record.points);
    println!("  At:       {}", record.recorded_at);

    Ok(())
}
