use std::fmt;
use std::sync::Arc;

use crate::models::Record;
use crate::{playlist_items, playlists, Context, YouTubeError};

/// Which listing produced a page. Set at construction from the validated
/// upstream response kind, so pagination always knows where to route the
/// follow-up request. Item pages carry the playlist id they were scoped to,
/// independent of the (possibly filtered-out) page contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageKind {
    Playlists,
    PlaylistItems { playlist_id: String },
}

/// One page of a paged listing: the normalized, privacy-filtered records
/// plus the cursors and request context needed to fetch adjacent pages.
/// Immutable; every pagination step builds a fresh page.
pub struct ResultsPage {
    ctx: Arc<Context>,
    kind: PageKind,
    results_per_page: u32,
    total_results: u32,
    prev_page_token: Option<String>,
    next_page_token: Option<String>,
    data: Vec<Record>,
    privacy_status: Option<String>,
}

impl ResultsPage {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        ctx: Arc<Context>,
        kind: PageKind,
        results_per_page: u32,
        total_results: u32,
        prev_page_token: Option<String>,
        next_page_token: Option<String>,
        data: Vec<Record>,
        privacy_status: Option<String>,
    ) -> Self {
        ResultsPage {
            ctx,
            kind,
            results_per_page,
            total_results,
            prev_page_token,
            next_page_token,
            data,
            privacy_status,
        }
    }

    pub fn kind(&self) -> &PageKind {
        &self.kind
    }

    pub fn results_per_page(&self) -> u32 {
        self.results_per_page
    }

    /// Total matching count reported by the service, not the length of
    /// `data` after local filtering.
    pub fn total_results(&self) -> u32 {
        self.total_results
    }

    pub fn prev_page_token(&self) -> Option<&str> {
        self.prev_page_token.as_deref()
    }

    pub fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }

    pub fn data(&self) -> &[Record] {
        &self.data
    }

    pub fn privacy_status(&self) -> Option<&str> {
        self.privacy_status.as_deref()
    }

    /// Re-issues the original listing request with the next-page cursor and
    /// the same page size and privacy filter. Fails with
    /// [`YouTubeError::NoNextPage`] before any network call when the cursor
    /// is absent.
    pub async fn fetch_next_page(&self) -> Result<ResultsPage, YouTubeError> {
        let token = self
            .next_page_token
            .as_deref()
            .ok_or(YouTubeError::NoNextPage)?;
        self.fetch_page(token).await
    }

    /// Counterpart of [`fetch_next_page`](Self::fetch_next_page) for the
    /// previous-page cursor.
    pub async fn fetch_previous_page(&self) -> Result<ResultsPage, YouTubeError> {
        let token = self
            .prev_page_token
            .as_deref()
            .ok_or(YouTubeError::NoPreviousPage)?;
        self.fetch_page(token).await
    }

    async fn fetch_page(&self, page_token: &str) -> Result<ResultsPage, YouTubeError> {
        match &self.kind {
            PageKind::Playlists => {
                playlists::fetch_playlists(
                    &self.ctx,
                    Some(self.results_per_page),
                    self.privacy_status.as_deref(),
                    Some(page_token),
                )
                .await
            }
            PageKind::PlaylistItems { playlist_id } => {
                playlist_items::fetch_videos(
                    &self.ctx,
                    playlist_id,
                    Some(self.results_per_page),
                    self.privacy_status.as_deref(),
                    Some(page_token),
                )
                .await
            }
        }
    }
}

impl fmt::Debug for ResultsPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultsPage")
            .field("kind", &self.kind)
            .field("results_per_page", &self.results_per_page)
            .field("total_results", &self.total_results)
            .field("prev_page_token", &self.prev_page_token)
            .field("next_page_token", &self.next_page_token)
            .field("data", &self.data)
            .field("privacy_status", &self.privacy_status)
            .finish()
    }
}
