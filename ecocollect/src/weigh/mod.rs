//! Weighed, pay-by-weight collections.
//!
//! Ad-hoc pickups outside the fixed route are priced by weight: the
//! operator weighs the load, the recorder computes the total from weight
//! and unit price, credits loyalty points, and appends an immutable record
//! to the session history. There is no update or delete path; the history
//! is append-only for the session.

mod recorder;

pub use recorder::{
    WeighError, WeighRequest, WeighedCollection, WeighedCollectionRecorder, POINTS_PER_KG,
};
