use std::sync::Arc;

use iced::Task;

use crate::config::CenterConfig;
use crate::errors::ConfigError;
use crate::event::Event;
use crate::layout::PanelLayout;
use crate::model::{ContentPayload, Item, LayoutMode, LoadTarget, Panel};
use crate::render::RenderAdapter;
use crate::selection::Selection;
use crate::services;
use crate::source::DataSource;

/// Empty-state message for a list without entries.
pub const NO_ITEMS_MESSAGE: &str = "No items available";
/// Empty-state message for the detail panel without content.
pub const NO_DETAIL_MESSAGE: &str = "Select an item to view details";
/// Error message shown when the item list cannot be loaded.
pub const LIST_ERROR_MESSAGE: &str =
    "Failed to load items. Use refresh to retry.";
/// Error message shown when item content cannot be loaded.
pub const DETAIL_ERROR_MESSAGE: &str =
    "Failed to load item content. Select the item again.";
/// Error message shown when tab content cannot be loaded.
pub const TAB_ERROR_MESSAGE: &str = "Failed to load tab content.";

/// Host callbacks fired after state commits.
#[derive(Default)]
pub struct Hooks {
    pub on_selection_changed: Option<Box<dyn FnMut(&str) + Send>>,
    pub on_tab_changed: Option<Box<dyn FnMut(&str) + Send>>,
    pub on_viewport_mode_changed: Option<Box<dyn FnMut(LayoutMode) + Send>>,
    pub on_create_item: Option<Box<dyn FnMut() + Send>>,
}

/// Load phase of the list panel, exposed for host chrome such as retry
/// buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    Loading,
    Ready,
    Empty,
    Failed,
}

/// Three-pane master-detail controller.
///
/// Owns panel layout, selection and tab state, and the async content
/// lifecycle against an injected [`DataSource`]. Presentation flows through
/// an injected [`RenderAdapter`]; effects are returned as [`iced::Task`]
/// values whose completion events the host feeds back into [`reduce`].
///
/// [`reduce`]: SituationCenter::reduce
pub struct SituationCenter<C> {
    config: CenterConfig,
    layout: PanelLayout,
    selection: Selection,
    items: Vec<Item>,
    list_phase: ListPhase,
    source: Arc<dyn DataSource<C>>,
    adapter: Box<dyn RenderAdapter<C>>,
    hooks: Hooks,
}

impl<C> SituationCenter<C>
where
    C: Clone + Send + 'static,
{
    /// Construct the controller and the initial list-load task.
    pub fn new(
        config: CenterConfig,
        source: Arc<dyn DataSource<C>>,
        adapter: Box<dyn RenderAdapter<C>>,
    ) -> Result<(Self, Task<Event<C>>), ConfigError> {
        config.validate()?;

        let layout = PanelLayout::new(&config);
        let selection =
            Selection::new(config.initial_tab_id().map(ToOwned::to_owned));

        let mut center = Self {
            config,
            layout,
            selection,
            items: Vec::new(),
            list_phase: ListPhase::Loading,
            source,
            adapter,
            hooks: Hooks::default(),
        };

        center.adapter.apply_layout(&center.layout);
        if center.config.has_tabs() {
            center
                .adapter
                .render_tabs(&center.config.tabs, center.selection.active_tab());
        }

        let task = center.begin_items_load();
        Ok((center, task))
    }

    /// Replace host hooks.
    pub fn set_hooks(&mut self, hooks: Hooks) {
        self.hooks = hooks;
    }

    /// Return the construction-time configuration.
    pub fn config(&self) -> &CenterConfig {
        &self.config
    }

    /// Return the current panel layout.
    pub fn layout(&self) -> &PanelLayout {
        &self.layout
    }

    /// Return the current selection and epoch state.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Return the loaded item roster.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Return the list panel load phase.
    pub fn list_phase(&self) -> ListPhase {
        self.list_phase
    }

    /// Reduce one event into state commits, adapter updates and follow-up
    /// tasks.
    pub fn reduce(&mut self, event: Event<C>) -> Task<Event<C>> {
        match event {
            Event::SelectItem { item_id } => self.reduce_select_item(&item_id),
            Event::SelectTab { tab_id } => self.reduce_select_tab(&tab_id),
            Event::SetPanelVisible { side, visible } => {
                if self.layout.set_side_visible(side, visible) {
                    self.adapter.apply_layout(&self.layout);
                }
                Task::none()
            },
            Event::ViewportResized { width } => {
                self.reduce_viewport_resized(width)
            },
            Event::FocusPanel { panel } => {
                self.layout.focus(panel);
                self.adapter.focus_panel(panel);
                Task::none()
            },
            Event::LoadItems => self.begin_items_load(),
            Event::CreateItemRequested => {
                match self.hooks.on_create_item.as_mut() {
                    Some(hook) => hook(),
                    None => {
                        log::debug!("create item requested without a host hook")
                    },
                }
                Task::none()
            },
            Event::SetMainContent { content } => {
                self.adapter.render_main_content(&content);
                Task::none()
            },
            Event::SetDetailContent { content } => {
                self.commit_detail_content(content.as_ref());
                Task::none()
            },
            Event::SetLoading { panel, visible } => {
                self.adapter.set_loading(panel, visible);
                Task::none()
            },
            Event::ItemsLoaded { items } => self.reduce_items_loaded(items),
            Event::DetailLoaded { epoch, payload } => {
                self.reduce_detail_loaded(epoch, payload)
            },
            Event::TabContentLoaded { epoch, content } => {
                self.reduce_tab_content_loaded(epoch, content)
            },
            Event::LoadFailed { target, message } => {
                self.reduce_load_failed(target, message)
            },
        }
    }

    fn begin_items_load(&mut self) -> Task<Event<C>> {
        self.list_phase = ListPhase::Loading;
        self.adapter.set_empty_state(Panel::Left, false, "");
        self.adapter.set_loading(Panel::Left, true);
        services::request_load_items(&self.source)
    }

    fn reduce_select_item(&mut self, item_id: &str) -> Task<Event<C>> {
        let Some(epoch) = self.selection.select_item(item_id) else {
            return Task::none();
        };

        self.adapter.render_item_list(&self.items, Some(item_id));
        self.adapter.set_loading(Panel::Main, true);
        self.adapter.set_empty_state(Panel::Right, false, "");

        if let Some(hook) = self.hooks.on_selection_changed.as_mut() {
            hook(item_id);
        }

        services::request_load_detail(&self.source, item_id, epoch)
    }

    fn reduce_select_tab(&mut self, tab_id: &str) -> Task<Event<C>> {
        if !self.config.has_tab(tab_id) {
            log::warn!("ignoring selection of unknown tab {tab_id}");
            return Task::none();
        }

        let Some(epoch) = self.selection.select_tab(tab_id) else {
            return Task::none();
        };

        self.adapter.render_tabs(&self.config.tabs, Some(tab_id));

        if let Some(hook) = self.hooks.on_tab_changed.as_mut() {
            hook(tab_id);
        }

        let Some(item_id) =
            self.selection.active_item().map(ToOwned::to_owned)
        else {
            return Task::none();
        };

        self.adapter.set_loading(Panel::Main, true);
        services::request_load_tab(&self.source, &item_id, tab_id, epoch)
    }

    fn reduce_viewport_resized(&mut self, width: u32) -> Task<Event<C>> {
        let Some(mode) = self.layout.apply_viewport_width(width) else {
            return Task::none();
        };

        self.adapter.apply_layout(&self.layout);
        if let Some(hook) = self.hooks.on_viewport_mode_changed.as_mut() {
            hook(mode);
        }

        Task::none()
    }

    fn reduce_items_loaded(&mut self, items: Vec<Item>) -> Task<Event<C>> {
        self.adapter.set_loading(Panel::Left, false);
        self.items = items;

        if self.items.is_empty() {
            self.list_phase = ListPhase::Empty;
            self.adapter.render_item_list(&[], None);
            self.adapter.set_empty_state(Panel::Left, true, NO_ITEMS_MESSAGE);
            return Task::none();
        }

        self.list_phase = ListPhase::Ready;
        self.adapter
            .render_item_list(&self.items, self.selection.active_item());

        let Some(item_id) = self.auto_select_target() else {
            return Task::none();
        };
        self.reduce_select_item(&item_id)
    }

    /// Pick the item auto-selected after a list load: the surviving current
    /// selection, else the configured initial item when it exists in the
    /// roster, else the first entry.
    fn auto_select_target(&self) -> Option<String> {
        if let Some(active) = self.selection.active_item() {
            if self.items.iter().any(|item| item.id == active) {
                return None;
            }
        }

        let configured = self
            .config
            .initial_active_item
            .as_deref()
            .filter(|id| self.items.iter().any(|item| item.id == *id));

        configured
            .or_else(|| self.items.first().map(|item| item.id.as_str()))
            .map(ToOwned::to_owned)
    }

    fn reduce_detail_loaded(
        &mut self,
        epoch: u64,
        payload: ContentPayload<C>,
    ) -> Task<Event<C>> {
        if !self.selection.is_current(epoch) {
            log::debug!("discarding stale detail result for epoch {epoch}");
            return Task::none();
        }

        self.adapter.set_loading(Panel::Main, false);
        self.adapter.render_main_content(&payload.main);
        self.commit_detail_content(payload.detail.as_ref());

        if self.layout.mode() == LayoutMode::Mobile {
            self.layout.focus(Panel::Main);
            self.adapter.focus_panel(Panel::Main);
        }

        Task::none()
    }

    fn reduce_tab_content_loaded(
        &mut self,
        epoch: u64,
        content: C,
    ) -> Task<Event<C>> {
        if !self.selection.is_current(epoch) {
            log::debug!("discarding stale tab content for epoch {epoch}");
            return Task::none();
        }

        self.adapter.set_loading(Panel::Main, false);
        self.adapter.render_main_content(&content);
        Task::none()
    }

    fn reduce_load_failed(
        &mut self,
        target: LoadTarget,
        message: String,
    ) -> Task<Event<C>> {
        match &target {
            LoadTarget::Items => {
                log::warn!("failed to load {target}: {message}");
                self.list_phase = ListPhase::Failed;
                self.adapter.set_loading(Panel::Left, false);
                self.adapter.set_error_state(Panel::Left, LIST_ERROR_MESSAGE);
            },
            LoadTarget::Detail { epoch, .. } => {
                if !self.selection.is_current(*epoch) {
                    log::debug!("discarding stale failure for {target}");
                    return Task::none();
                }
                log::warn!("failed to load {target}: {message}");
                self.adapter.set_loading(Panel::Main, false);
                self.adapter
                    .set_error_state(Panel::Main, DETAIL_ERROR_MESSAGE);
                self.commit_detail_content(None);
            },
            LoadTarget::TabContent { epoch, .. } => {
                if !self.selection.is_current(*epoch) {
                    log::debug!("discarding stale failure for {target}");
                    return Task::none();
                }
                log::warn!("failed to load {target}: {message}");
                self.adapter.set_loading(Panel::Main, false);
                self.adapter.set_error_state(Panel::Main, TAB_ERROR_MESSAGE);
            },
        }

        Task::none()
    }

    fn commit_detail_content(&mut self, content: Option<&C>) {
        match content {
            Some(content) => {
                self.adapter.render_detail_content(Some(content));
                self.adapter.set_empty_state(Panel::Right, false, "");
            },
            None => {
                self.adapter.render_detail_content(None);
                self.adapter
                    .set_empty_state(Panel::Right, true, NO_DETAIL_MESSAGE);
            },
        }
    }
}
