pub mod nm;
pub mod sample;

use crate::models::{NetworkRecord, RecordSource};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("permission to scan Wi-Fi networks was denied")]
    PermissionDenied,
    #[error("not connected to a Wi-Fi network")]
    NotConnected,
    #[error("backend unavailable: {0}")]
    Unavailable(String),
    #[error("D-Bus error: {0}")]
    Bus(#[from] zbus::Error),
}

pub type BackendResult<T> = Result<T, BackendError>;

/// Source of the network list.
pub trait Scanner: Send + Sync {
    fn rescan_and_list(&self) -> BackendResult<Vec<NetworkRecord>>;
    fn source(&self) -> RecordSource;
}

/// A live Wi-Fi stack: scanning plus the permission and current-connection
/// lookups.
///
/// Calls block; the UI runs them off the main thread. Each call may fail on
/// its own without affecting the others.
pub trait Backend: Scanner {
    fn check_permission(&self) -> BackendResult<()>;
    fn current_ssid(&self) -> BackendResult<String>;
    fn current_frequency(&self) -> BackendResult<u32>;
}

/// Only an explicit denial stops the lookups. Failing to ask is logged and
/// every lookup still gets its own chance to fail.
pub fn scan_allowed(permission: &BackendResult<()>) -> bool {
    match permission {
        Ok(()) => true,
        Err(BackendError::PermissionDenied) => {
            tracing::warn!("Wi-Fi scan permission denied, not scanning");
            false
        }
        Err(err) => {
            tracing::warn!("Cannot check scan permission: {err}");
            true
        }
    }
}
