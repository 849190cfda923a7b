//! View actions
//!
//! Presentation state: the two day filters and the list cursor.

/// Actions for the speaker list view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    /// Flip the Saturday filter
    ToggleSaturday,
    /// Flip the Sunday filter
    ToggleSunday,
    /// Move the cursor down; `visible` is the length of the presented list
    SelectNext { visible: usize },
    /// Move the cursor up
    SelectPrevious,
}
