//! Global actions - not tied to any specific domain

/// Global actions that affect the entire application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobalAction {
    /// Quit the application
    Quit,
}
