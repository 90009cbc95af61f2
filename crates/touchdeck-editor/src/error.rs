use thiserror::Error;
use touchdeck_core::{LayoutError, WidgetKey};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditorError {
    #[error("no widget is being dragged")]
    NotDragging,
    #[error("widget {0:?} is already being dragged")]
    AlreadyDragging(WidgetKey),
    #[error(transparent)]
    Layout(#[from] LayoutError),
}
