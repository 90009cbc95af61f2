use thiserror::Error;

use crate::{LayerKey, WidgetId, WidgetKey};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("widget id `{0}` is already used in this layout")]
    DuplicateWidgetId(WidgetId),
    #[error("layer id `{0}` is already used in this layout")]
    DuplicateLayerId(String),
    #[error("unknown widget {0:?}")]
    UnknownWidget(WidgetKey),
    #[error("unknown widget id `{0}`")]
    UnknownWidgetId(WidgetId),
    #[error("unknown layer {0:?}")]
    UnknownLayer(LayerKey),
    #[error("widget `{id}` cannot be placed in the {list} list of a layer")]
    WrongWidgetList { id: WidgetId, list: &'static str },
    #[error("layer index {index} is out of range (layout has {len} layers)")]
    LayerIndexOutOfRange { index: usize, len: usize },
}
