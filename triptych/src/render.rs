use crate::layout::PanelLayout;
use crate::model::{Item, Panel, Tab};

/// Presentation capability implemented by the host.
///
/// The controller builds no widgets and queries no markup; every visual
/// consequence of a state commit flows through this trait. Implementations
/// are free to target any surface: retained widgets, immediate-mode views,
/// a terminal, or a test recorder.
pub trait RenderAdapter<C> {
    /// Replace the list panel entries, highlighting the active item.
    fn render_item_list(&mut self, items: &[Item], active_id: Option<&str>);

    /// Update the tab bar to reflect the active tab.
    fn render_tabs(&mut self, tabs: &[Tab], active_id: Option<&str>);

    /// Replace the main panel content.
    fn render_main_content(&mut self, content: &C);

    /// Replace the detail panel content; `None` clears it.
    fn render_detail_content(&mut self, content: Option<&C>);

    /// Show or hide a panel's loading indicator.
    fn set_loading(&mut self, panel: Panel, visible: bool);

    /// Show or hide a panel's empty-state surface.
    fn set_empty_state(&mut self, panel: Panel, visible: bool, message: &str);

    /// Show a panel's error surface with a retry affordance.
    fn set_error_state(&mut self, panel: Panel, message: &str);

    /// Apply panel visibility and width shares.
    fn apply_layout(&mut self, layout: &PanelLayout);

    /// Bring a panel into view and mark it active for navigation chrome.
    fn focus_panel(&mut self, panel: Panel);
}
