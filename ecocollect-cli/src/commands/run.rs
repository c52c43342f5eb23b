//! Demonstration collection session.
//!
//! Seeds a small route, runs a scripted live scan (no camera required) for
//! the given payload, resolves it through the service, and prints the
//! ledger before and after. `--manual` completes a stop through the manual
//! path instead of scanning.

use std::sync::Arc;

use clap::Args;
use tracing::info;

use ecocollect::matcher::DEMO_CODE;
use ecocollect::reader::scripted::{blank_frame, text_frame, ScriptedFrameSource, TextPayloadDecoder};
use ecocollect::reader::ScanOutcome;
use ecocollect::route::{Completion, Stop};
use ecocollect::service::{CollectionService, ScanResolution};

use crate::error::CliError;
use crate::notifier::ConsoleNotifier;
use crate::runner::CliRunner;

/// Arguments for the `run` subcommand.
#[derive(Args)]
pub struct RunArgs {
    /// Payload the scripted scan will decode
    #[arg(long, default_value = DEMO_CODE)]
    payload: String,

    /// Complete this stop manually instead of scanning
    #[arg(long, value_name = "STOP_ID")]
    manual: Option<u32>,

    /// Override the configured confirmation delay in milliseconds
    #[arg(long, value_name = "MS")]
    confirm_delay_ms: Option<u64>,
}

/// Execute the `run` subcommand.
pub fn execute(args: RunArgs, debug: bool) -> Result<(), CliError> {
    let runner = CliRunner::with_debug(debug)?;

    let runtime =
        tokio::runtime::Runtime::new().map_err(|e| CliError::Runtime(e.to_string()))?;
    runtime.block_on(run_session(args, &runner))
}

async fn run_session(args: RunArgs, runner: &CliRunner) -> Result<(), CliError> {
    let service = CollectionService::builder(
        runner.confirmer(args.confirm_delay_ms),
        Arc::new(TextPayloadDecoder),
    )
    .route(demo_route())
    .notifier(Arc::new(ConsoleNotifier))
    .scanner_config(runner.scanner_config())
    .build();

    println!("Today's route:");
    print_stops(&service.route());
    println!();

    match args.manual {
        Some(stop_id) => {
            println!("Completing stop {} manually...", stop_id);
            match service.complete_manual(stop_id).await? {
                Completion::Confirmed(stop) => {
                    println!("✓ {} completed", stop.name);
                }
                Completion::AlreadyCompleted(stop) => {
                    println!("{} was already collected - nothing to do", stop.name);
                }
                Completion::InFlight => {
                    println!("A confirmation for that stop is already in progress");
                }
            }
        }
        None => {
            info!(payload = %args.payload, "Starting scripted scan session");
            println!("Scanning (scripted camera)...");

            let camera = ScriptedFrameSource::new(vec![
                blank_frame(),
                blank_frame(),
                text_frame(&args.payload),
            ]);
            let mut handle = service.start_live_scan(camera)?;

            match handle.wait().await {
                ScanOutcome::Decoded(payload) => {
                    println!("Decoded payload: {}", payload);
                    match service.resolve_payload(&payload).await? {
                        ScanResolution::Completed(stop) => {
                            println!("✓ {} completed (certified by scan)", stop.name);
                        }
                        ScanResolution::AlreadyCollected(stop) => {
                            println!("{} was already collected - nothing to do", stop.name);
                        }
                        ScanResolution::InFlight => {
                            println!("A confirmation for that stop is already in progress");
                        }
                        ScanResolution::Unrecognized { payload } => {
                            println!("Code '{}' matches no stop on today's route", payload);
                        }
                    }
                }
                ScanOutcome::Cancelled => println!("Scan dismissed"),
                ScanOutcome::Failed(e) => {
                    println!("Scan failed: {}", e);
                    println!("Stops can still be completed manually with --manual <stop-id>");
                }
            }
        }
    }

    println!();
    println!("Pending:");
    print_stops(&service.pending());
    println!("Completed:");
    print_stops(&service.completed());

    Ok(())
}

/// The seeded demonstration route.
pub(crate) fn demo_route() -> Vec<Stop> {
    vec![
        Stop::new(1, "Restaurant Le Jardin", "12 Rue des Lilas", "Organic", "08:30")
            .with_code("ECO-STOP-001"),
        Stop::new(2, "Café Riviera", "4 Quai des Arts", "Glass", "09:15")
            .with_code("ECO-STOP-002"),
        Stop::new(3, "Marché Central", "1 Place du Marché", "Household", "10:00")
            .with_code("ECO-STOP-003"),
        Stop::new(4, "École Pasteur", "8 Avenue de la Gare", "Recyclable", "11:30"),
    ]
}

fn print_stops(stops: &[Stop]) {
    if stops.is_empty() {
        println!("  (none)");
        return;
    }
    for stop in stops {
        println!(
            "  #{} {} - {} [{}] at {}",
            stop.id, stop.name, stop.address, stop.category, stop.scheduled
        );
    }
}
