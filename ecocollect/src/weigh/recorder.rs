//! Weighed-collection recorder implementation.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, RwLock};

use chrono::Local;
use thiserror::Error;
use tracing::{debug, info};

use crate::notify::{Audience, Notifier, Severity};

/// Loyalty points credited per collected kilogram.
pub const POINTS_PER_KG: u32 = 2;

/// Errors rejecting a weighed-collection submission.
///
/// Validation runs before any state mutation: a rejected submission leaves
/// the history untouched and dispatches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeighError {
    /// The client name was empty.
    #[error("Client name is required")]
    MissingClient,

    /// The weight did not parse as a positive number.
    #[error("Weight '{0}' is not a positive number")]
    InvalidWeight(String),

    /// The unit price did not parse as a positive number.
    #[error("Unit price '{0}' is not a positive number")]
    InvalidPrice(String),
}

/// Raw operator input for one weighed collection, as a form submits it.
#[derive(Debug, Clone)]
pub struct WeighRequest {
    /// Client display name.
    pub client: String,
    /// Waste category label.
    pub category: String,
    /// Weight in kilograms, as entered.
    pub weight_kg: String,
    /// Unit price per kilogram, as entered.
    pub unit_price: String,
}

/// One recorded pay-by-weight pickup. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct WeighedCollection {
    /// Record identifier, unique within the session.
    pub id: u32,
    /// Client display name.
    pub client: String,
    /// Waste category label.
    pub category: String,
    /// Weight in kilograms.
    pub weight_kg: f64,
    /// Unit price per kilogram.
    pub unit_price: f64,
    /// Amount due: always `weight_kg * unit_price`, computed at creation.
    pub total: f64,
    /// Loyalty points earned: `floor(weight_kg * POINTS_PER_KG)`.
    pub points: u32,
    /// Local-time label of when the record was created.
    pub recorded_at: String,
}

/// Session-scoped, append-only history of weighed collections.
///
/// On every accepted submission the recorder dispatches two notifications:
/// a payment-due message to the client (with the computed total) and an
/// operational summary to the administrative audience.
pub struct WeighedCollectionRecorder {
    /// Records, most recent first.
    records: RwLock<Vec<WeighedCollection>>,

    /// Next record identifier.
    next_id: AtomicU32,

    /// Dispatch target for payment and summary messages.
    notifier: Arc<dyn Notifier>,
}

impl WeighedCollectionRecorder {
    /// Create an empty recorder.
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            next_id: AtomicU32::new(1),
            notifier,
        }
    }

    /// Validate and record one weighed collection.
    ///
    /// The total is always recomputed from weight and unit price here; it is
    /// never supplied by the caller. On success the new record is returned
    /// and prepended to the history (most recent first).
    pub fn submit(&self, request: &WeighRequest) -> Result<WeighedCollection, WeighError> {
        let client = request.client.trim();
        if client.is_empty() {
            return Err(WeighError::MissingClient);
        }
        let weight_kg = parse_positive(&request.weight_kg)
            .ok_or_else(|| WeighError::InvalidWeight(request.weight_kg.clone()))?;
        let unit_price = parse_positive(&request.unit_price)
            .ok_or_else(|| WeighError::InvalidPrice(request.unit_price.clone()))?;

        let total = weight_kg * unit_price;
        let points = (weight_kg * POINTS_PER_KG as f64).floor() as u32;

        let record = WeighedCollection {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            client: client.to_string(),
            category: request.category.clone(),
            weight_kg,
            unit_price,
            total,
            points,
            recorded_at: Local::now().format("%Y-%m-%d %H:%M").to_string(),
        };

        if let Ok(mut records) = self.records.write() {
            records.insert(0, record.clone());
        }

        info!(
            client = %record.client,
            weight_kg,
            unit_price,
            total,
            points,
            "Weighed collection recorded"
        );

        self.notifier.notify(
            Audience::Client(record.client.clone()),
            "Payment due",
            &format!(
                "Pickup of {:.1} kg ({}) recorded. Amount due: {:.2}.",
                weight_kg, record.category, total
            ),
            Severity::Warning,
        );
        self.notifier.notify(
            Audience::Admin,
            "Weighed collection",
            &format!(
                "{}: {:.1} kg {} at {:.2}/kg, total {:.2}, {} points credited.",
                record.client, weight_kg, record.category, unit_price, total, points
            ),
            Severity::Info,
        );

        Ok(record)
    }

    /// Snapshot of the session history, most recent first.
    pub fn records(&self) -> Vec<WeighedCollection> {
        self.records.read().map(|r| r.clone()).unwrap_or_default()
    }

    /// Number of records in the session history.
    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    /// Returns true if nothing has been recorded this session.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parse a finite number greater than zero, the only kind of weight or
/// price a pay-by-weight record can carry.
fn parse_positive(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    if value.is_finite() && value > 0.0 {
        debug!(raw, value, "Parsed numeric input");
        Some(value)
    } else {
        None
    }
}
