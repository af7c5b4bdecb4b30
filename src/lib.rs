use std::error::Error;
use std::sync::Arc;

use thiserror::Error;


pub mod models;
pub use models::{ChannelInfo, Playlist, Record, Video};
pub mod pages;
pub use pages::{PageKind, ResultsPage};
pub mod transport;
pub use transport::{ClientError, HyperTransport, Transport};

mod channels;
mod playlist_items;
mod playlists;

#[derive(Error, Debug)]
pub enum YouTubeError {
    #[error("request failed with status {status}: {status_text}")]
    Transport { status: u16, status_text: String },
    #[error("cannot fetch videos from {0:?}, no such playlist")]
    PlaylistNotFound(String),
    #[error("cannot fetch the next results page, no such page")]
    NoNextPage,
    #[error("cannot fetch the previous results page, no such page")]
    NoPreviousPage,
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("HTTP error: {0}")]
    HttpError(#[from] hyper::Error),
    #[error("Legacy HTTP error: {0}")]
    LegacyHttpError(#[from] hyper_util::client::legacy::Error),
    #[error("Other error: {0}")]
    Other(Box<dyn Error + Send + Sync>),
}

/// API key and channel id every request is scoped to. Built once at client
/// construction and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: String,
    pub channel_id: String,
}

pub(crate) struct Context {
    pub(crate) transport: Box<dyn Transport>,
    pub(crate) credentials: Credentials,
}

/// Client for one YouTube channel's metadata, playlists and videos.
///
/// Fetches are independent and uncoordinated; issuing two pagination calls
/// without awaiting the first produces two independent requests.
pub struct YouTubeChannelClient {
    ctx: Arc<Context>,
}

impl YouTubeChannelClient {
    pub fn new(
        api_key: impl Into<String>,
        channel_id: impl Into<String>,
    ) -> Result<Self, ClientError> {
        Ok(Self::with_transport(
            HyperTransport::new()?,
            Credentials {
                api_key: api_key.into(),
                channel_id: channel_id.into(),
            },
        ))
    }

    /// Builds a client on top of a caller-supplied transport.
    pub fn with_transport(transport: impl Transport + 'static, credentials: Credentials) -> Self {
        YouTubeChannelClient {
            ctx: Arc::new(Context {
                transport: Box::new(transport),
                credentials,
            }),
        }
    }

    /// Fetches general channel information.
    pub async fn channel_info(&self) -> Result<ChannelInfo, YouTubeError> {
        channels::fetch_channel_info(&self.ctx).await
    }

    /// Fetches one page of the channel's playlists, optionally restricted
    /// to a privacy status.
    pub async fn playlists(
        &self,
        max_results: Option<u32>,
        privacy_status: Option<&str>,
    ) -> Result<ResultsPage, YouTubeError> {
        playlists::fetch_playlists(&self.ctx, max_results, privacy_status, None).await
    }

    /// Fetches a single playlist by its exact title.
    pub async fn playlist(&self, title: &str) -> Result<Playlist, YouTubeError> {
        let page = playlists::fetch_playlists(&self.ctx, Some(50), None, None).await?;

        page.data()
            .iter()
            .find_map(|record| record.as_playlist().filter(|playlist| playlist.title == title))
            .cloned()
            .ok_or_else(|| YouTubeError::PlaylistNotFound(title.to_string()))
    }

    /// Fetches one page of the channel's uploaded videos.
    pub async fn uploads(
        &self,
        max_results: Option<u32>,
        privacy_status: Option<&str>,
    ) -> Result<ResultsPage, YouTubeError> {
        let uploads_playlist_id = channels::fetch_uploads_playlist_id(&self.ctx).await?;
        playlist_items::fetch_videos(
            &self.ctx,
            &uploads_playlist_id,
            max_results,
            privacy_status,
            None,
        )
        .await
    }

    /// Fetches one page of videos from the playlist with the given title.
    pub async fn playlist_uploads(
        &self,
        title: &str,
        max_results: Option<u32>,
        privacy_status: Option<&str>,
    ) -> Result<ResultsPage, YouTubeError> {
        let playlist = self.playlist(title).await?;
        playlist_items::fetch_videos(&self.ctx, &playlist.id, max_results, privacy_status, None)
            .await
    }
}
