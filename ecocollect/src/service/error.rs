//! Service error types.

use thiserror::Error;

use crate::reader::ReaderError;
use crate::route::LedgerError;
use crate::weigh::WeighError;

/// Errors that can occur during service operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The decode library is unusable; scanning features are disabled.
    #[error("Scanning unavailable: decoder '{0}' failed to load")]
    ScanningUnavailable(String),

    /// A reader operation failed.
    #[error("Reader error: {0}")]
    Reader(#[from] ReaderError),

    /// A ledger operation failed.
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// A weighed-collection submission was rejected.
    #[error("Weighed collection rejected: {0}")]
    Weigh(#[from] WeighError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_scanning_unavailable() {
        let err = ServiceError::ScanningUnavailable("zbar".to_string());
        assert!(err.to_string().contains("zbar"));
        assert!(err.to_string().contains("Scanning unavailable"));
    }

    #[test]
    fn test_from_reader_error() {
        let err: ServiceError = ReaderError::PermissionDenied.into();
        assert!(matches!(err, ServiceError::Reader(_)));
    }

    #[test]
    fn test_from_ledger_error() {
        let err: ServiceError = LedgerError::StopNotFound(7).into();
        assert!(matches!(err, ServiceError::Ledger(_)));
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn test_from_weigh_error() {
        let err: ServiceError = WeighError::MissingClient.into();
        assert!(matches!(err, ServiceError::Weigh(_)));
    }
}
