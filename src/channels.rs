use serde::Deserialize;

use crate::models::{truncate_to_date, ChannelInfo};
use crate::{Context, YouTubeError};

pub(crate) const CHANNELS_URL: &str = "https://www.googleapis.com/youtube/v3/channels";

#[derive(Debug, Deserialize)]
struct InfoResponse {
    items: Vec<InfoItem>,
}

#[derive(Debug, Deserialize)]
struct InfoItem {
    snippet: ChannelSnippet,
    statistics: ChannelStatistics,
}

#[derive(Debug, Deserialize)]
struct ChannelSnippet {
    title: String,
    description: String,
    #[serde(rename = "customUrl")]
    custom_url: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: String,
    country: Option<String>,
}

// Statistics counters arrive as decimal strings.
#[derive(Debug, Deserialize)]
struct ChannelStatistics {
    #[serde(rename = "subscriberCount")]
    subscriber_count: String,
    #[serde(rename = "videoCount")]
    video_count: String,
    #[serde(rename = "viewCount")]
    view_count: String,
}

#[derive(Debug, Deserialize)]
struct ContentDetailsResponse {
    items: Vec<ContentDetailsItem>,
}

#[derive(Debug, Deserialize)]
struct ContentDetailsItem {
    #[serde(rename = "contentDetails")]
    content_details: ChannelContentDetails,
}

#[derive(Debug, Deserialize)]
struct ChannelContentDetails {
    #[serde(rename = "relatedPlaylists")]
    related_playlists: RelatedPlaylists,
}

#[derive(Debug, Deserialize)]
struct RelatedPlaylists {
    uploads: String,
}

pub(crate) async fn fetch_channel_info(ctx: &Context) -> Result<ChannelInfo, YouTubeError> {
    let params = [
        ("part", "snippet, statistics".to_string()),
        ("id", ctx.credentials.channel_id.clone()),
        ("key", ctx.credentials.api_key.clone()),
    ];

    let value = ctx.transport.get(CHANNELS_URL, &params).await?;
    let response: InfoResponse = serde_json::from_value(value)?;

    let item = response.items.into_iter().next().ok_or_else(|| {
        YouTubeError::MalformedResponse("channel list response has no items".to_string())
    })?;

    Ok(ChannelInfo {
        localization: item.snippet.country,
        custom_url: item.snippet.custom_url,
        title: item.snippet.title,
        description: item.snippet.description,
        creation_date: truncate_to_date(&item.snippet.published_at)?,
        subscriber_count: parse_count(&item.statistics.subscriber_count)?,
        video_count: parse_count(&item.statistics.video_count)?,
        view_count: parse_count(&item.statistics.view_count)?,
    })
}

/// Resolves the id of the channel's uploads playlist from its
/// `contentDetails.relatedPlaylists` linkage.
pub(crate) async fn fetch_uploads_playlist_id(ctx: &Context) -> Result<String, YouTubeError> {
    let params = [
        ("part", "contentDetails".to_string()),
        ("id", ctx.credentials.channel_id.clone()),
        ("key", ctx.credentials.api_key.clone()),
    ];

    let value = ctx.transport.get(CHANNELS_URL, &params).await?;
    let response: ContentDetailsResponse = serde_json::from_value(value)?;

    let item = response.items.into_iter().next().ok_or_else(|| {
        YouTubeError::MalformedResponse("channel list response has no items".to_string())
    })?;

    Ok(item.content_details.related_playlists.uploads)
}

fn parse_count(count: &str) -> Result<u64, YouTubeError> {
    count
        .parse::<u64>()
        .map_err(|e| YouTubeError::MalformedResponse(format!("bad count {:?}: {}", count, e)))
}
