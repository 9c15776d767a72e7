mod center;
mod config;
mod errors;
mod event;
mod layout;
mod model;
mod render;
mod selection;
mod services;
mod source;

pub use center::{
    DETAIL_ERROR_MESSAGE, Hooks, LIST_ERROR_MESSAGE, ListPhase,
    NO_DETAIL_MESSAGE, NO_ITEMS_MESSAGE, SituationCenter, TAB_ERROR_MESSAGE,
};
pub use config::{Breakpoints, CenterConfig};
pub use errors::{ConfigError, SourceError};
pub use event::Event;
pub use layout::PanelLayout;
pub use model::{
    ContentPayload, Item, ItemStatus, LayoutMode, LoadTarget, Panel, Side,
    StatusKind, Tab,
};
pub use render::RenderAdapter;
pub use selection::Selection;
pub use source::{DataSource, SourceFuture};
