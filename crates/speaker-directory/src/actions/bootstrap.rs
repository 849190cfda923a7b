//! Bootstrap actions
//!
//! Actions for session initialization.

/// Actions for session bootstrap
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapAction {
    /// Session started; triggers the initial fetch exactly once
    Start,
}
