use chrono::{Duration, NaiveDate, Utc};

use seismic::{Distance, LonLat, Magnitude, DEFAULT_SEARCH_RADIUS, MYANMAR_CENTER};

const API_URL: &str = "https://earthquake.usgs.gov/fdsnws/event/1/query";

/// Parameters for an FDSN event search. Results always come back as GeoJSON, ordered by time
/// (most recent first).
#[derive(Clone, Debug)]
pub struct EventQuery {
    /// Defaults to `lookback` before today.
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub min_magnitude: Magnitude,
    pub max_magnitude: Option<Magnitude>,
    pub center: LonLat,
    pub max_radius: Distance,
    pub limit: usize,
    /// Restrict to the curated "significant events" catalog.
    pub significant_only: bool,

    lookback: Duration,
}

impl EventQuery {
    /// The dashboard's main feed: the last 30 days of M4+ events near Myanmar.
    pub fn recent() -> EventQuery {
        EventQuery {
            start: None,
            end: None,
            min_magnitude: Magnitude::new(4.0),
            max_magnitude: None,
            center: MYANMAR_CENTER,
            max_radius: DEFAULT_SEARCH_RADIUS,
            limit: 100,
            significant_only: false,
            lookback: Duration::days(30),
        }
    }

    /// Long-range history: ten years of M5+ events, for the analytics charts.
    pub fn historical() -> EventQuery {
        EventQuery {
            min_magnitude: Magnitude::new(5.0),
            limit: 500,
            lookback: Duration::days(10 * 365),
            ..EventQuery::recent()
        }
    }

    pub fn url(&self) -> String {
        self.url_on(Utc::now().naive_utc().date())
    }

    /// `today` only matters when `start` is unset; split out so tests don't depend on the clock.
    fn url_on(&self, today: NaiveDate) -> String {
        let mut params = vec![(
            "starttime",
            self.start.unwrap_or(today - self.lookback).to_string(),
        )];
        if let Some(end) = self.end {
            params.push(("endtime", end.to_string()));
        }
        params.push(("minmagnitude", self.min_magnitude.inner().to_string()));
        if let Some(max) = self.max_magnitude {
            params.push(("maxmagnitude", max.inner().to_string()));
        }
        params.push(("latitude", self.center.latitude.to_string()));
        params.push(("longitude", self.center.longitude.to_string()));
        params.push((
            "maxradiuskm",
            self.max_radius.to_kilometers().to_string(),
        ));
        if self.significant_only {
            params.push(("catalog", "significant".to_string()));
        }
        params.push(("limit", self.limit.to_string()));
        params.push(("format", "geojson".to_string()));
        params.push(("orderby", "time".to_string()));

        let query = params
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", API_URL, query)
    }
}
