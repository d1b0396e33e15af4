use anyhow::{anyhow, bail, Result};
use chrono::{TimeZone, Utc};
use serde::Deserialize;

use seismic::{Distance, LonLat, Magnitude, SeismicEvent};

/// The subset of the USGS GeoJSON response we consume; everything else in the payload is
/// ignored.
#[derive(Debug, Deserialize)]
pub struct EventFeed {
    pub metadata: FeedMetadata,
    pub features: Vec<EventFeature>,
}

#[derive(Debug, Deserialize)]
pub struct FeedMetadata {
    pub title: String,
    pub count: usize,
}

#[derive(Debug, Deserialize)]
pub struct EventFeature {
    pub id: String,
    pub properties: EventProperties,
    pub geometry: EventGeometry,
}

#[derive(Debug, Deserialize)]
pub struct EventProperties {
    /// Missing for some unreviewed events
    pub mag: Option<f64>,
    pub place: Option<String>,
    /// Milliseconds since the epoch
    pub time: i64,
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct EventGeometry {
    /// [longitude, latitude, depth in km]
    pub coordinates: Vec<f64>,
}

impl EventFeed {
    /// Keeps the feed's ranking (most recent first). Features without a usable magnitude or
    /// coordinate triple are skipped, not fatal.
    pub fn into_events(self) -> Vec<SeismicEvent> {
        let mut events = Vec::new();
        for feature in self.features {
            let id = feature.id.clone();
            match feature.into_event() {
                Ok(ev) => events.push(ev),
                Err(err) => warn!("Skipping event {}: {}", id, err),
            }
        }
        events
    }
}

impl EventFeature {
    fn into_event(self) -> Result<SeismicEvent> {
        let mag = self
            .properties
            .mag
            .ok_or_else(|| anyhow!("no magnitude"))?;
        if !mag.is_finite() {
            bail!("magnitude {} isn't finite", mag);
        }
        if self.geometry.coordinates.len() != 3
            || self.geometry.coordinates.iter().any(|x| !x.is_finite())
        {
            bail!("bad coordinates {:?}", self.geometry.coordinates);
        }
        let occurred_at = Utc
            .timestamp_millis_opt(self.properties.time)
            .single()
            .ok_or_else(|| anyhow!("bad timestamp {}", self.properties.time))?;

        Ok(SeismicEvent {
            id: self.id,
            magnitude: Magnitude::new(mag),
            depth: Distance::kilometers(self.geometry.coordinates[2]),
            epicenter: LonLat::new(self.geometry.coordinates[0], self.geometry.coordinates[1]),
            occurred_at,
            place: self.properties.place.unwrap_or_default(),
            url: self.properties.url,
        })
    }
}

#[cfg(test)]
mod tests {
    use seismic::Severity;

    use super::*;

    // Trimmed from a real query response
    const FIXTURE: &str = r#"{
        "type": "FeatureCollection",
        "metadata": {
            "generated": 1743200000000,
            "url": "https://earthquake.usgs.gov/fdsnws/event/1/query?format=geojson",
            "title": "USGS Earthquakes",
            "status": 200,
            "api": "1.14.1",
            "count": 3
        },
        "features": [
            {
                "type": "Feature",
                "id": "us7000pn9s",
                "properties": {
                    "mag": 7.7,
                    "place": "12 km NNW of Sagaing, Myanmar",
                    "time": 1743142052000,
                    "updated": 1743150000000,
                    "tsunami": 0,
                    "url": "https://earthquake.usgs.gov/earthquakes/eventpage/us7000pn9s",
                    "title": "M 7.7 - 12 km NNW of Sagaing, Myanmar"
                },
                "geometry": { "type": "Point", "coordinates": [95.9121, 22.0013, 10.0] }
            },
            {
                "type": "Feature",
                "id": "us7000pnaa",
                "properties": {
                    "mag": null,
                    "place": "Myanmar",
                    "time": 1743142800000,
                    "url": "https://earthquake.usgs.gov/earthquakes/eventpage/us7000pnaa"
                },
                "geometry": { "type": "Point", "coordinates": [95.9, 22.0, 10.0] }
            },
            {
                "type": "Feature",
                "id": "us7000pnbb",
                "properties": {
                    "mag": 4.8,
                    "place": null,
                    "time": 1743143500000,
                    "url": "https://earthquake.usgs.gov/earthquakes/eventpage/us7000pnbb"
                },
                "geometry": { "type": "Point", "coordinates": [96.1, 21.5] }
            }
        ]
    }"#;

    #[test]
    fn parse_feed() {
        let feed: EventFeed = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(feed.metadata.count, 3);
        assert_eq!(feed.metadata.title, "USGS Earthquakes");

        // The null-magnitude and two-coordinate features get dropped
        let events = feed.into_events();
        assert_eq!(events.len(), 1);

        let ev = &events[0];
        assert_eq!(ev.id, "us7000pn9s");
        assert_eq!(ev.magnitude, Magnitude::new(7.7));
        assert_eq!(ev.depth, Distance::kilometers(10.0));
        assert_eq!(ev.epicenter, LonLat::new(95.9121, 22.0013));
        assert_eq!(ev.place, "12 km NNW of Sagaing, Myanmar");
        assert_eq!(ev.severity(), Severity::Critical);
        assert_eq!(ev.occurred_at.timestamp_millis(), 1_743_142_052_000);
    }
}
