use std::fmt;

use crate::model::{ContentPayload, Item, LoadTarget, Panel, Side};

/// Events reduced by the situation center.
///
/// User intents arrive from host chrome; completion variants are delivered
/// by the host runtime when a data-source future resolves. Epoch-stamped
/// completions that no longer match the live selection are discarded.
#[derive(Clone)]
pub enum Event<C> {
    SelectItem {
        item_id: String,
    },
    SelectTab {
        tab_id: String,
    },
    SetPanelVisible {
        side: Side,
        visible: bool,
    },
    ViewportResized {
        width: u32,
    },
    FocusPanel {
        panel: Panel,
    },
    LoadItems,
    CreateItemRequested,
    SetMainContent {
        content: C,
    },
    SetDetailContent {
        content: Option<C>,
    },
    SetLoading {
        panel: Panel,
        visible: bool,
    },
    ItemsLoaded {
        items: Vec<Item>,
    },
    DetailLoaded {
        epoch: u64,
        payload: ContentPayload<C>,
    },
    TabContentLoaded {
        epoch: u64,
        content: C,
    },
    LoadFailed {
        target: LoadTarget,
        message: String,
    },
}

impl<C> fmt::Debug for Event<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Event::*;

        match self {
            SelectItem { item_id } => {
                f.write_fmt(format_args!("Event::SelectItem {item_id}"))
            },
            SelectTab { tab_id } => {
                f.write_fmt(format_args!("Event::SelectTab {tab_id}"))
            },
            SetPanelVisible { side, visible } => f.write_fmt(format_args!(
                "Event::SetPanelVisible side: {side}, visible: {visible}"
            )),
            ViewportResized { width } => {
                f.write_fmt(format_args!("Event::ViewportResized {width}"))
            },
            FocusPanel { panel } => {
                f.write_fmt(format_args!("Event::FocusPanel {panel:?}"))
            },
            LoadItems => f.write_str("Event::LoadItems"),
            CreateItemRequested => f.write_str("Event::CreateItemRequested"),
            SetMainContent { .. } => f.write_str("Event::SetMainContent"),
            SetDetailContent { content } => f.write_fmt(format_args!(
                "Event::SetDetailContent present: {}",
                content.is_some()
            )),
            SetLoading { panel, visible } => f.write_fmt(format_args!(
                "Event::SetLoading panel: {panel:?}, visible: {visible}"
            )),
            ItemsLoaded { items } => f.write_fmt(format_args!(
                "Event::ItemsLoaded count: {}",
                items.len()
            )),
            DetailLoaded { epoch, .. } => f.write_fmt(format_args!(
                "Event::DetailLoaded epoch: {epoch}"
            )),
            TabContentLoaded { epoch, .. } => f.write_fmt(format_args!(
                "Event::TabContentLoaded epoch: {epoch}"
            )),
            LoadFailed { target, message } => f.write_fmt(format_args!(
                "Event::LoadFailed target: {target}, message: {message}"
            )),
        }
    }
}
