use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::model::{LayoutMode, Side, Tab};

/// Viewport width thresholds separating layout modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    pub mobile_max: u32,
    pub tablet_max: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile_max: 767,
            tablet_max: 1199,
        }
    }
}

impl Breakpoints {
    /// Return the layout mode for a viewport width.
    pub fn mode_for(&self, width: u32) -> LayoutMode {
        if width <= self.mobile_max {
            LayoutMode::Mobile
        } else if width <= self.tablet_max {
            LayoutMode::Tablet
        } else {
            LayoutMode::Desktop
        }
    }
}

/// Construction-time options for a situation center.
///
/// Side panel widths are fractions of the container width; the main panel
/// takes whatever the visible side panels leave over.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CenterConfig {
    pub left_panel_title: String,
    pub main_panel_title: String,
    pub right_panel_title: String,
    pub left_panel_width: f32,
    pub right_panel_width: f32,
    pub enable_tabs: bool,
    pub tabs: Vec<Tab>,
    pub mobile_navigation: bool,
    pub collapsible_panels: bool,
    pub initial_active_item: Option<String>,
    pub breakpoints: Breakpoints,
}

impl Default for CenterConfig {
    fn default() -> Self {
        Self {
            left_panel_title: String::from("Items"),
            main_panel_title: String::from("Content"),
            right_panel_title: String::from("Details"),
            left_panel_width: 0.25,
            right_panel_width: 0.25,
            enable_tabs: true,
            tabs: Vec::new(),
            mobile_navigation: true,
            collapsible_panels: true,
            initial_active_item: None,
            breakpoints: Breakpoints::default(),
        }
    }
}

impl CenterConfig {
    /// Check option consistency before the controller starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_width(Side::Left, self.left_panel_width)?;
        validate_width(Side::Right, self.right_panel_width)?;

        let total = self.left_panel_width + self.right_panel_width;
        if total >= 1.0 {
            return Err(ConfigError::NoRoomForMainPanel { total });
        }

        for (index, tab) in self.tabs.iter().enumerate() {
            let duplicated = self.tabs[..index]
                .iter()
                .any(|earlier| earlier.id == tab.id);
            if duplicated {
                return Err(ConfigError::DuplicateTabId(tab.id.clone()));
            }
        }

        if self.breakpoints.mobile_max >= self.breakpoints.tablet_max {
            return Err(ConfigError::InvalidBreakpoints {
                mobile_max: self.breakpoints.mobile_max,
                tablet_max: self.breakpoints.tablet_max,
            });
        }

        Ok(())
    }

    /// Return whether tabs are enabled and at least one is configured.
    pub fn has_tabs(&self) -> bool {
        self.enable_tabs && !self.tabs.is_empty()
    }

    /// Return whether `tab_id` belongs to the configured tab set.
    pub fn has_tab(&self, tab_id: &str) -> bool {
        self.has_tabs() && self.tabs.iter().any(|tab| tab.id == tab_id)
    }

    /// Return the tab active at construction, the first configured one.
    pub fn initial_tab_id(&self) -> Option<&str> {
        if self.has_tabs() {
            self.tabs.first().map(|tab| tab.id.as_str())
        } else {
            None
        }
    }
}

fn validate_width(side: Side, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(ConfigError::PanelWidthOutOfRange { side, value })
    }
}

#[cfg(test)]
mod tests {
    use super::{Breakpoints, CenterConfig};
    use crate::errors::ConfigError;
    use crate::model::{LayoutMode, Tab};

    fn tab(id: &str) -> Tab {
        Tab {
            id: String::from(id),
            title: String::from(id),
            icon: None,
        }
    }

    #[test]
    fn given_default_config_when_validated_then_it_passes() {
        assert!(CenterConfig::default().validate().is_ok());
    }

    #[test]
    fn given_zero_panel_width_when_validated_then_it_is_rejected() {
        let config = CenterConfig {
            left_panel_width: 0.0,
            ..CenterConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::PanelWidthOutOfRange { .. })
        ));
    }

    #[test]
    fn given_side_widths_filling_container_when_validated_then_rejected() {
        let config = CenterConfig {
            left_panel_width: 0.5,
            right_panel_width: 0.5,
            ..CenterConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::NoRoomForMainPanel { .. })
        ));
    }

    #[test]
    fn given_duplicate_tab_ids_when_validated_then_rejected() {
        let config = CenterConfig {
            tabs: vec![tab("info"), tab("history"), tab("info")],
            ..CenterConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateTabId(id)) if id == "info"
        ));
    }

    #[test]
    fn given_inverted_breakpoints_when_validated_then_rejected() {
        let config = CenterConfig {
            breakpoints: Breakpoints {
                mobile_max: 1199,
                tablet_max: 767,
            },
            ..CenterConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBreakpoints { .. })
        ));
    }

    #[test]
    fn given_default_breakpoints_when_classifying_widths_then_modes_match() {
        let breakpoints = Breakpoints::default();

        assert_eq!(breakpoints.mode_for(767), LayoutMode::Mobile);
        assert_eq!(breakpoints.mode_for(768), LayoutMode::Tablet);
        assert_eq!(breakpoints.mode_for(1199), LayoutMode::Tablet);
        assert_eq!(breakpoints.mode_for(1200), LayoutMode::Desktop);
    }

    #[test]
    fn given_partial_config_json_when_deserialized_then_defaults_fill_in() {
        let config: CenterConfig = serde_json::from_str(
            r#"{ "left_panel_title": "Branches", "enable_tabs": false }"#,
        )
        .expect("config should deserialize");

        assert_eq!(config.left_panel_title, "Branches");
        assert!(!config.enable_tabs);
        assert_eq!(config.breakpoints, Breakpoints::default());
        assert!((config.left_panel_width - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn given_disabled_tabs_when_queried_then_no_tab_is_recognized() {
        let config = CenterConfig {
            enable_tabs: false,
            tabs: vec![tab("info")],
            ..CenterConfig::default()
        };

        assert!(!config.has_tabs());
        assert!(!config.has_tab("info"));
        assert!(config.initial_tab_id().is_none());
    }
}
