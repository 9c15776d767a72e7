use iced::futures::future::BoxFuture;

use crate::errors::SourceError;
use crate::model::{ContentPayload, Item};

/// Boxed future returned by data-source requests.
pub type SourceFuture<T> = BoxFuture<'static, Result<T, SourceError>>;

/// External collaborator supplying items and panel content.
///
/// Issuing a request is synchronous; the returned future is driven by the
/// host runtime. Overlapping requests are never cancelled, their results
/// are resolved purely by the epoch check on completion.
pub trait DataSource<C>: Send + Sync {
    /// Fetch the list panel entries.
    fn list_items(&self) -> SourceFuture<Vec<Item>>;

    /// Fetch main and detail content for an item.
    fn load_item_detail(
        &self,
        item_id: &str,
    ) -> SourceFuture<ContentPayload<C>>;

    /// Fetch content for one tab of an item.
    fn load_tab_content(
        &self,
        item_id: &str,
        tab_id: &str,
    ) -> SourceFuture<C>;
}
