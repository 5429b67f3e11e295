//! Listing methods for [`CatalogClient`].
//!
//! # What this module handles:
//! - Fetching a single page
//! - Walking every page until the server stops returning a continuation token
//! - Stopping at the first locally-matching item
//!
//! # What this module does NOT handle:
//! - Low-level listing HTTP calls (in [`crate::endpoints`])

use std::ops::ControlFlow;

use tracing::debug;

use crate::client::CatalogClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::{ItemFilter, Lookup, Page, Source};

impl CatalogClient {
    /// Fetch one page of a listing, exactly as the server returned it.
    pub async fn fetch_page<F: ItemFilter>(
        &self,
        source: Source,
        filter: &F,
        continuation_token: Option<&str>,
    ) -> Result<Page<F::Item>> {
        endpoints::fetch_page(
            &self.http,
            &self.base_url,
            &self.auth,
            source,
            filter,
            continuation_token,
        )
        .await
    }

    /// Fetch every item matching `filter`, in server order.
    ///
    /// Items failing the local re-check are dropped. Fails with
    /// [`ClientError::PageLimitExceeded`] if the server is still handing out
    /// tokens after `max_pages` requests; no partial result is returned.
    pub async fn fetch_all<F: ItemFilter>(&self, source: Source, filter: &F) -> Result<Vec<F::Item>> {
        let mut matched = Vec::new();
        self.walk(source, filter, |item| {
            if filter.matches(&item) {
                matched.push(item);
            }
            ControlFlow::Continue(())
        })
        .await?;

        debug!(matched = matched.len(), "Listing complete");
        Ok(matched)
    }

    /// Return the first item matching `filter`, without fetching any page
    /// after the one it appears on.
    pub async fn fetch_first_match<F: ItemFilter>(
        &self,
        source: Source,
        filter: &F,
    ) -> Result<Lookup<F::Item>> {
        let mut found = None;
        self.walk(source, filter, |item| {
            if filter.matches(&item) {
                found = Some(item);
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .await?;

        Ok(Lookup::from(found))
    }

    /// Feed every item of every page to `visit` until it breaks or the pages run out.
    async fn walk<F, V>(&self, source: Source, filter: &F, mut visit: V) -> Result<()>
    where
        F: ItemFilter,
        V: FnMut(F::Item) -> ControlFlow<()>,
    {
        let mut token: Option<String> = None;

        for page_number in 1..=self.max_pages {
            let page = self.fetch_page(source, filter, token.as_deref()).await?;
            let next = page.next_token().map(str::to_owned);
            debug!(
                page = page_number,
                items = page.items.len(),
                last = next.is_none(),
                "Fetched page"
            );

            for item in page.items {
                if visit(item).is_break() {
                    debug!(page = page_number, "Stopped at first match");
                    return Ok(());
                }
            }

            match next {
                Some(next) => token = Some(next),
                None => return Ok(()),
            }
        }

        Err(ClientError::PageLimitExceeded(self.max_pages))
    }
}
