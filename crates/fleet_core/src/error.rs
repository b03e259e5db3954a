//! Error types for the fleet simulation.

use thiserror::Error;

/// Result type alias using [`FleetError`].
pub type Result<T> = std::result::Result<T, FleetError>;

/// Top-level error type for all fleet operations.
///
/// Every failure here is recoverable by the caller: a rejected purchase
/// or a lookup on an unknown id leaves the fleet unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FleetError {
    /// Purchase rejected: the catalog entry is not an autonomous unit.
    #[error("equipment '{0}' is not autonomous")]
    NotAutonomous(String),

    /// Purchase rejected: the catalog entry carries no purchase cost.
    #[error("equipment '{0}' has no purchase cost")]
    MissingPurchaseCost(String),

    /// Sell or lookup on an id no robot in the fleet matches.
    #[error("no robot with id '{0}'")]
    RobotNotFound(String),
}
