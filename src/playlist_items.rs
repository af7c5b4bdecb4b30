use std::sync::Arc;

use serde::Deserialize;

use crate::models::{apply_privacy_filter, RawPlaylistItem, Record};
use crate::pages::{PageKind, ResultsPage};
use crate::{channels, Context, YouTubeError};

const PLAYLIST_ITEMS_URL: &str = "https://www.googleapis.com/youtube/v3/playlistItems";
const PLAYLIST_ITEM_LIST_KIND: &str = "youtube#playlistItemListResponse";

#[derive(Debug, Deserialize)]
struct ApiResponse {
    kind: String,
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
    #[serde(rename = "prevPageToken")]
    prev_page_token: Option<String>,
    #[serde(rename = "pageInfo")]
    page_info: PageInfo,
    items: Vec<RawPlaylistItem>,
}

#[derive(Debug, Deserialize)]
struct PageInfo {
    #[serde(rename = "totalResults")]
    total_results: u32,
    #[serde(rename = "resultsPerPage")]
    results_per_page: u32,
}

/// Lists the videos of one playlist, one page at a time. The channel's
/// content details are resolved first; the playlist-items request depends
/// on that lookup succeeding.
pub(crate) async fn fetch_videos(
    ctx: &Arc<Context>,
    playlist_id: &str,
    max_results: Option<u32>,
    privacy_status: Option<&str>,
    page_token: Option<&str>,
) -> Result<ResultsPage, YouTubeError> {
    channels::fetch_uploads_playlist_id(ctx).await?;

    let mut params = vec![
        ("part", "snippet, status".to_string()),
        ("playlistId", playlist_id.to_string()),
        ("key", ctx.credentials.api_key.clone()),
    ];

    if let Some(max_results) = max_results {
        params.push(("maxResults", max_results.to_string()));
    }

    if let Some(page_token) = page_token {
        params.push(("pageToken", page_token.to_string()));
    }

    log::debug!(
        "fetching videos of playlist {}, page_token={:?}",
        playlist_id,
        page_token
    );

    let value = ctx.transport.get(PLAYLIST_ITEMS_URL, &params).await?;
    let response: ApiResponse = serde_json::from_value(value)?;

    if response.kind != PLAYLIST_ITEM_LIST_KIND {
        return Err(YouTubeError::MalformedResponse(format!(
            "unexpected response kind {:?}",
            response.kind
        )));
    }

    let records = response
        .items
        .into_iter()
        .map(Record::from_playlist_item)
        .collect::<Result<Vec<_>, _>>()?;
    let data = apply_privacy_filter(records, privacy_status);

    Ok(ResultsPage::new(
        Arc::clone(ctx),
        PageKind::PlaylistItems {
            playlist_id: playlist_id.to_string(),
        },
        response.page_info.results_per_page,
        response.page_info.total_results,
        response.prev_page_token,
        response.next_page_token,
        data,
        privacy_status.map(str::to_string),
    ))
}
