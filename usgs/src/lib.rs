//! A thin client for the USGS FDSN event API
//! (<https://earthquake.usgs.gov/fdsnws/event/1/>), turning its GeoJSON feed into
//! `seismic::SeismicEvent`s. Query defaults focus on Myanmar, matching the dashboard's main feed.

#[macro_use]
extern crate log;

mod query;
mod response;

use anyhow::{Context, Result};

use seismic::SeismicEvent;

pub use crate::query::EventQuery;
pub use crate::response::EventFeed;

/// Fetches one page of events, most recent first. This must be called with a tokio runtime
/// somewhere.
pub async fn fetch_events(query: &EventQuery) -> Result<Vec<SeismicEvent>> {
    let url = query.url();
    info!("Fetching {}", url);
    let resp = reqwest::get(&url).await?;
    resp.error_for_status_ref()
        .with_context(|| format!("querying {}", url))?;
    let bytes = resp.bytes().await?;
    let feed: EventFeed =
        serde_json::from_slice(&bytes).with_context(|| format!("decoding response from {}", url))?;
    Ok(feed.into_events())
}
