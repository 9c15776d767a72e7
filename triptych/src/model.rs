use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three fixed panel regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Left,
    Main,
    Right,
}

/// Collapsible side panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Return the panel region occupied by this side.
    pub fn panel(self) -> Panel {
        match self {
            Side::Left => Panel::Left,
            Side::Right => Panel::Right,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Breakpoint-derived UI arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Desktop,
    Tablet,
    Mobile,
}

/// Severity of a list item status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Warning,
    Danger,
    Info,
}

/// Status badge attached to a list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStatus {
    #[serde(rename = "type")]
    pub kind: StatusKind,
    pub text: String,
}

/// List entry supplied by the data source.
///
/// Items are immutable snapshots; identity is `id` and the roster is
/// replaced wholesale on the next list load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub status: Option<ItemStatus>,
}

/// Tab configured at construction; the set is fixed for the controller's
/// lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Content produced by a detail fetch.
///
/// Owned by the request that produced it and discarded when superseded.
#[derive(Clone)]
pub struct ContentPayload<C> {
    pub main: C,
    pub detail: Option<C>,
}

/// Identifies which request a failed load belonged to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadTarget {
    Items,
    Detail {
        item_id: String,
        epoch: u64,
    },
    TabContent {
        item_id: String,
        tab_id: String,
        epoch: u64,
    },
}

impl fmt::Display for LoadTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadTarget::Items => f.write_str("item list"),
            LoadTarget::Detail { item_id, .. } => {
                f.write_fmt(format_args!("detail for item {item_id}"))
            },
            LoadTarget::TabContent {
                item_id, tab_id, ..
            } => f.write_fmt(format_args!(
                "tab {tab_id} content for item {item_id}"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Item, LoadTarget, StatusKind};

    #[test]
    fn given_backend_item_json_when_deserialized_then_fields_are_mapped() {
        let json = r#"{
            "id": "1",
            "title": "Central branch",
            "icon": "building",
            "status": { "type": "success", "text": "Active" }
        }"#;

        let item: Item =
            serde_json::from_str(json).expect("item should deserialize");

        assert_eq!(item.id, "1");
        assert_eq!(item.icon.as_deref(), Some("building"));
        let status = item.status.expect("status should be present");
        assert_eq!(status.kind, StatusKind::Success);
        assert_eq!(status.text, "Active");
    }

    #[test]
    fn given_minimal_item_json_when_deserialized_then_optionals_default() {
        let item: Item =
            serde_json::from_str(r#"{ "id": "2", "title": "Depot" }"#)
                .expect("item should deserialize");

        assert!(item.icon.is_none());
        assert!(item.status.is_none());
    }

    #[test]
    fn given_load_targets_when_displayed_then_descriptions_name_the_request()
    {
        let detail = LoadTarget::Detail {
            item_id: String::from("7"),
            epoch: 3,
        };
        let tab = LoadTarget::TabContent {
            item_id: String::from("7"),
            tab_id: String::from("history"),
            epoch: 4,
        };

        assert_eq!(format!("{}", LoadTarget::Items), "item list");
        assert_eq!(format!("{detail}"), "detail for item 7");
        assert_eq!(format!("{tab}"), "tab history content for item 7");
    }
}
