use std::sync::Arc;

use serde::Deserialize;

use crate::models::{apply_privacy_filter, RawPlaylist, Record};
use crate::pages::{PageKind, ResultsPage};
use crate::{Context, YouTubeError};

const PLAYLISTS_URL: &str = "https://www.googleapis.com/youtube/v3/playlists";
const PLAYLIST_LIST_KIND: &str = "youtube#playlistListResponse";

#[derive(Debug, Deserialize)]
struct ApiResponse {
    kind: String,
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
    #[serde(rename = "prevPageToken")]
    prev_page_token: Option<String>,
    #[serde(rename = "pageInfo")]
    page_info: PageInfo,
    items: Vec<RawPlaylist>,
}

#[derive(Debug, Deserialize)]
struct PageInfo {
    #[serde(rename = "totalResults")]
    total_results: u32,
    #[serde(rename = "resultsPerPage")]
    results_per_page: u32,
}

/// Lists the channel's playlists, one page at a time. Omitted optional
/// parameters are left out of the request entirely.
pub(crate) async fn fetch_playlists(
    ctx: &Arc<Context>,
    max_results: Option<u32>,
    privacy_status: Option<&str>,
    page_token: Option<&str>,
) -> Result<ResultsPage, YouTubeError> {
    let mut params = vec![
        ("part", "contentDetails, snippet, status".to_string()),
        ("channelId", ctx.credentials.channel_id.clone()),
        ("key", ctx.credentials.api_key.clone()),
    ];

    if let Some(max_results) = max_results {
        params.push(("maxResults", max_results.to_string()));
    }

    if let Some(page_token) = page_token {
        params.push(("pageToken", page_token.to_string()));
    }

    log::debug!("fetching playlists, page_token={:?}", page_token);

    let value = ctx.transport.get(PLAYLISTS_URL, &params).await?;
    let response: ApiResponse = serde_json::from_value(value)?;

    if response.kind != PLAYLIST_LIST_KIND {
        return Err(YouTubeError::MalformedResponse(format!(
            "unexpected response kind {:?}",
            response.kind
        )));
    }

    let records = response
        .items
        .into_iter()
        .map(Record::from_playlist)
        .collect::<Result<Vec<_>, _>>()?;
    let data = apply_privacy_filter(records, privacy_status);

    Ok(ResultsPage::new(
        Arc::clone(ctx),
        PageKind::Playlists,
        response.page_info.results_per_page,
        response.page_info.total_results,
        response.prev_page_token,
        response.next_page_token,
        data,
        privacy_status.map(str::to_string),
    ))
}
