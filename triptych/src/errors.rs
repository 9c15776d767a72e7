use std::fmt;

use thiserror::Error;

use crate::model::Side;

/// Errors surfaced while validating construction options.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{side} panel width {value} is outside (0, 1)")]
    PanelWidthOutOfRange { side: Side, value: f32 },
    #[error("side panel widths total {total} and leave no room for the main panel")]
    NoRoomForMainPanel { total: f32 },
    #[error("duplicate tab id: {0}")]
    DuplicateTabId(String),
    #[error(
        "mobile breakpoint {mobile_max} must be below tablet breakpoint {tablet_max}"
    )]
    InvalidBreakpoints { mobile_max: u32, tablet_max: u32 },
}

/// Failure reported by a host data source.
///
/// Converted at the loader boundary into panel error states; never
/// propagated past the controller.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct SourceError {
    message: String,
}

impl SourceError {
    /// Wrap any displayable failure from the host data source.
    pub fn new(message: impl fmt::Display) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    /// Return the failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}
