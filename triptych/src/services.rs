use std::sync::Arc;

use iced::Task;

use crate::event::Event;
use crate::model::LoadTarget;
use crate::source::DataSource;

/// Request the item list from the data source.
pub(crate) fn request_load_items<C>(
    source: &Arc<dyn DataSource<C>>,
) -> Task<Event<C>>
where
    C: Clone + Send + 'static,
{
    let fut = source.list_items();
    Task::perform(fut, |result| match result {
        Ok(items) => Event::ItemsLoaded { items },
        Err(err) => Event::LoadFailed {
            target: LoadTarget::Items,
            message: format!("{err}"),
        },
    })
}

/// Request detail content for the item selected at `epoch`.
pub(crate) fn request_load_detail<C>(
    source: &Arc<dyn DataSource<C>>,
    item_id: &str,
    epoch: u64,
) -> Task<Event<C>>
where
    C: Clone + Send + 'static,
{
    let fut = source.load_item_detail(item_id);
    let item_id = item_id.to_owned();
    Task::perform(fut, move |result| match result {
        Ok(payload) => Event::DetailLoaded { epoch, payload },
        Err(err) => Event::LoadFailed {
            target: LoadTarget::Detail {
                item_id: item_id.clone(),
                epoch,
            },
            message: format!("{err}"),
        },
    })
}

/// Request content for one tab of the item selected at `epoch`.
pub(crate) fn request_load_tab<C>(
    source: &Arc<dyn DataSource<C>>,
    item_id: &str,
    tab_id: &str,
    epoch: u64,
) -> Task<Event<C>>
where
    C: Clone + Send + 'static,
{
    let fut = source.load_tab_content(item_id, tab_id);
    let item_id = item_id.to_owned();
    let tab_id = tab_id.to_owned();
    Task::perform(fut, move |result| match result {
        Ok(content) => Event::TabContentLoaded { epoch, content },
        Err(err) => Event::LoadFailed {
            target: LoadTarget::TabContent {
                item_id: item_id.clone(),
                tab_id: tab_id.clone(),
                epoch,
            },
            message: format!("{err}"),
        },
    })
}
