use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::YouTubeError;

/// A normalized playlist or video entry. Constructed once from a raw API
/// item, never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Playlist(Playlist),
    Video(Video),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Playlist {
    pub id: String,
    pub title: String,
    pub description: String,
    pub creation_date: NaiveDate,
    pub video_count: u32,
    pub thumbnails: BTreeMap<String, String>,
    pub privacy_status: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub description: String,
    pub playlist_id: String,
    pub position: u32,
    pub creation_date: NaiveDate,
    pub thumbnails: BTreeMap<String, String>,
    pub privacy_status: String,
}

impl Record {
    pub fn id(&self) -> &str {
        match self {
            Record::Playlist(playlist) => &playlist.id,
            Record::Video(video) => &video.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Record::Playlist(playlist) => &playlist.title,
            Record::Video(video) => &video.title,
        }
    }

    pub fn privacy_status(&self) -> &str {
        match self {
            Record::Playlist(playlist) => &playlist.privacy_status,
            Record::Video(video) => &video.privacy_status,
        }
    }

    pub fn as_playlist(&self) -> Option<&Playlist> {
        match self {
            Record::Playlist(playlist) => Some(playlist),
            Record::Video(_) => None,
        }
    }

    pub fn as_video(&self) -> Option<&Video> {
        match self {
            Record::Video(video) => Some(video),
            Record::Playlist(_) => None,
        }
    }

    pub(crate) fn from_playlist(raw: RawPlaylist) -> Result<Record, YouTubeError> {
        Ok(Record::Playlist(Playlist {
            id: raw.id,
            title: raw.snippet.title,
            description: raw.snippet.localized.description,
            creation_date: truncate_to_date(&raw.snippet.published_at)?,
            video_count: raw.content_details.item_count,
            thumbnails: flatten_thumbnails(raw.snippet.thumbnails),
            privacy_status: raw.status.privacy_status,
        }))
    }

    pub(crate) fn from_playlist_item(raw: RawPlaylistItem) -> Result<Record, YouTubeError> {
        Ok(Record::Video(Video {
            id: raw.snippet.resource_id.video_id,
            title: raw.snippet.title,
            description: raw.snippet.description,
            playlist_id: raw.snippet.playlist_id,
            position: raw.snippet.position,
            creation_date: truncate_to_date(&raw.snippet.published_at)?,
            thumbnails: flatten_thumbnails(raw.snippet.thumbnails),
            privacy_status: raw.status.privacy_status,
        }))
    }
}

/// General channel information, flattened from the channel resource's
/// snippet and statistics sections.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelInfo {
    pub localization: Option<String>,
    pub custom_url: Option<String>,
    pub title: String,
    pub description: String,
    pub creation_date: NaiveDate,
    pub subscriber_count: u64,
    pub video_count: u64,
    pub view_count: u64,
}

// Upstream timestamps are RFC 3339; only the calendar day is kept.
pub(crate) fn truncate_to_date(published_at: &str) -> Result<NaiveDate, YouTubeError> {
    let day = published_at.get(..10).ok_or_else(|| {
        YouTubeError::MalformedResponse(format!("timestamp too short: {:?}", published_at))
    })?;

    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .map_err(|e| YouTubeError::MalformedResponse(format!("bad timestamp {:?}: {}", day, e)))
}

fn flatten_thumbnails(thumbnails: BTreeMap<String, Thumbnail>) -> BTreeMap<String, String> {
    thumbnails
        .into_iter()
        .map(|(size, thumbnail)| (size, thumbnail.url))
        .collect()
}

/// Keeps only records matching the requested privacy status; with no filter
/// every record passes through. Order is preserved either way.
pub(crate) fn apply_privacy_filter(
    records: Vec<Record>,
    privacy_status: Option<&str>,
) -> Vec<Record> {
    match privacy_status {
        Some(status) => records
            .into_iter()
            .filter(|record| record.privacy_status() == status)
            .collect(),
        None => records,
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawPlaylist {
    pub id: String,
    pub snippet: PlaylistSnippet,
    #[serde(rename = "contentDetails")]
    pub content_details: PlaylistContentDetails,
    pub status: ResourceStatus,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlaylistSnippet {
    pub title: String,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    pub thumbnails: BTreeMap<String, Thumbnail>,
    pub localized: LocalizedText,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LocalizedText {
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlaylistContentDetails {
    #[serde(rename = "itemCount")]
    pub item_count: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawPlaylistItem {
    pub snippet: PlaylistItemSnippet,
    pub status: ResourceStatus,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlaylistItemSnippet {
    pub title: String,
    pub description: String,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    #[serde(rename = "playlistId")]
    pub playlist_id: String,
    pub position: u32,
    #[serde(rename = "resourceId")]
    pub resource_id: ResourceId,
    pub thumbnails: BTreeMap<String, Thumbnail>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResourceId {
    #[serde(rename = "videoId")]
    pub video_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResourceStatus {
    #[serde(rename = "privacyStatus")]
    pub privacy_status: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Thumbnail {
    pub url: String,
}
