//! Actions emitted by widgets while a frame is drawn.

use resume_model::TabId;

/// Collected during rendering and applied by the shell once the frame is
/// complete, so panel data is never borrowed mutably mid-draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    SelectTab(TabId),
    OpenLink(String),
}

impl UiAction {
    pub fn name(&self) -> &'static str {
        match self {
            UiAction::SelectTab(_) => "select_tab",
            UiAction::OpenLink(_) => "open_link",
        }
    }
}
