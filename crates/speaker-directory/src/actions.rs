//! Actions module
//!
//! Every state change in the application is described by an `Action`.
//! Actions are tagged by domain:
//! - `Bootstrap`: session start-up
//! - `Speaker`: the speaker collection, favorites and the click counter
//! - `View`: presentation state (day filters, cursor)
//! - `Global`: application-wide actions

pub mod bootstrap;
pub mod global;
pub mod speaker;
pub mod view;

pub use bootstrap::BootstrapAction;
pub use global::GlobalAction;
pub use speaker::SpeakerAction;
pub use view::ViewAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Session start-up
    Bootstrap(BootstrapAction),
    /// Speaker data actions
    Speaker(SpeakerAction),
    /// Presentation state actions
    View(ViewAction),
    /// Global application actions
    Global(GlobalAction),

    /// No-op action. Reducers return the state untouched.
    None,
}
