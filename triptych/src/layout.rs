use crate::config::{Breakpoints, CenterConfig};
use crate::model::{LayoutMode, Panel, Side};

/// Layout state for the three panel regions.
///
/// Tablet mode keeps the side panels mutually exclusive; desktop mode lets
/// them vary independently. Crossing into tablet with both side panels open
/// hides both, and returning to desktop does not restore them.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLayout {
    mode: LayoutMode,
    left_visible: bool,
    right_visible: bool,
    focused: Panel,
    left_width: f32,
    right_width: f32,
    breakpoints: Breakpoints,
}

impl PanelLayout {
    /// Build the initial layout: desktop mode with both side panels open.
    pub(crate) fn new(config: &CenterConfig) -> Self {
        Self {
            mode: LayoutMode::Desktop,
            left_visible: true,
            right_visible: true,
            focused: Panel::Left,
            left_width: config.left_panel_width,
            right_width: config.right_panel_width,
            breakpoints: config.breakpoints,
        }
    }

    /// Return the current layout mode.
    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// Return whether a side panel is currently visible.
    pub fn is_side_visible(&self, side: Side) -> bool {
        match side {
            Side::Left => self.left_visible,
            Side::Right => self.right_visible,
        }
    }

    /// Return the panel marked active for navigation chrome.
    pub fn focused(&self) -> Panel {
        self.focused
    }

    /// Return a side panel's configured share of the container width.
    pub fn side_width(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.left_width,
            Side::Right => self.right_width,
        }
    }

    /// Return the main panel's share of the container width.
    pub fn main_share(&self) -> f32 {
        let mut share = 1.0;
        if self.left_visible {
            share -= self.left_width;
        }
        if self.right_visible {
            share -= self.right_width;
        }
        share
    }

    /// Show or hide a side panel, enforcing tablet exclusivity.
    ///
    /// Returns whether any visibility actually changed.
    pub(crate) fn set_side_visible(
        &mut self,
        side: Side,
        visible: bool,
    ) -> bool {
        let before = (self.left_visible, self.right_visible);

        match side {
            Side::Left => self.left_visible = visible,
            Side::Right => self.right_visible = visible,
        }

        if visible && self.mode == LayoutMode::Tablet {
            match side {
                Side::Left => self.right_visible = false,
                Side::Right => self.left_visible = false,
            }
        }

        (self.left_visible, self.right_visible) != before
    }

    /// Recompute the layout mode for a new viewport width.
    ///
    /// Returns the new mode when it changed. Side panels default to hidden
    /// when space becomes constrained; the user must reopen them.
    pub(crate) fn apply_viewport_width(
        &mut self,
        width: u32,
    ) -> Option<LayoutMode> {
        let mode = self.breakpoints.mode_for(width);
        if mode == self.mode {
            return None;
        }

        self.mode = mode;
        if mode == LayoutMode::Tablet
            && self.left_visible
            && self.right_visible
        {
            self.left_visible = false;
            self.right_visible = false;
        }

        Some(mode)
    }

    /// Mark a panel active for navigation chrome.
    pub(crate) fn focus(&mut self, panel: Panel) {
        self.focused = panel;
    }
}
