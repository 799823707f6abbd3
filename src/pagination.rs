//! Paginated list envelope and the aggregation loop.
//!
//! Every list-returning endpoint wraps its items in the same envelope.
//! `get_all_pages` drains it iteratively, so page depth never grows the call
//! stack. The `next` marker is trusted literally: when the server stops
//! sending it, aggregation stops, whatever `size` claims.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::Error;
use crate::transport::HttpTransport;

/// Envelope wrapping a single page of a list response.
#[derive(Debug, Clone, Deserialize)]
pub struct Paginated<T> {
    /// Total number of items across all pages, when the server reports it
    #[serde(default)]
    pub size: Option<u64>,
    /// Current page number
    #[serde(default)]
    pub page: Option<u32>,
    /// Page size
    #[serde(default)]
    pub pagelen: Option<u32>,
    /// Link to the following page; absent on the last page
    #[serde(default)]
    pub next: Option<String>,
    /// Link to the preceding page
    #[serde(default)]
    pub previous: Option<String>,
    /// Items on this page
    pub values: Vec<T>,
}

impl HttpTransport {
    /// Fetch every page of a paginated endpoint and concatenate the items in
    /// server order.
    ///
    /// The first request carries no `page` parameter; follow-up requests ask
    /// for `page=2`, `page=3`, ... as long as the previous envelope had a
    /// `next` link. An error on any page propagates and discards the pages
    /// already fetched.
    ///
    /// # Errors
    ///
    /// Returns an error if any page request fails.
    pub async fn get_all_pages<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<T>, Error> {
        let mut items = Vec::new();
        let mut page: u32 = 1;

        loop {
            let mut query: Vec<(&str, String)> = params.to_vec();
            if page > 1 {
                query.push(("page", page.to_string()));
            }

            let envelope: Paginated<T> = self.get(path, Some(query.as_slice())).await?;
            tracing::debug!("{path} page {page}: {} items", envelope.values.len());
            items.extend(envelope.values);

            if envelope.next.is_none() {
                break;
            }
            page += 1;
        }

        Ok(items)
    }
}
