use crate::types::PlaylistItem;

use super::{Catalog, CatalogError};

/// Fetches every item of a playlist, following `next` cursors until the last page.
///
/// `on_page` is called after each page with the number of items fetched so far
/// and the total the catalog reported on the first page.
pub async fn fetch_playlist_items<C, P>(
    catalog: &C,
    playlist_id: &str,
    mut on_page: P,
) -> Result<Vec<PlaylistItem>, CatalogError>
where
    C: Catalog,
    P: FnMut(usize, Option<u64>),
{
    let mut page = catalog.playlist_items(playlist_id).await?;
    let total = page.total;
    let mut items = std::mem::take(&mut page.items);
    on_page(items.len(), total);

    while page.next.is_some() {
        page = catalog.next_page(&page).await?;
        items.append(&mut page.items);
        on_page(items.len(), total);
    }

    Ok(items)
}
