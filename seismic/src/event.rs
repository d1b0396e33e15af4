use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    affected_radius, contours, estimate_affected_population, mmi_at, Distance, IntensityContour,
    LonLat, Magnitude, Severity,
};

/// Shaking right at the epicenter is evaluated at this distance, since the attenuation formula
/// blows up at zero.
const MIN_EPICENTRAL_DISTANCE: Distance = Distance::const_meters(100.0);

/// One earthquake, as reported by the event source. Immutable; a fresh fetch replaces the whole
/// list rather than editing it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeismicEvent {
    /// The source agency's event ID, like "us7000pn9s".
    pub id: String,
    pub magnitude: Magnitude,
    /// Hypocenter depth below the surface. Occasionally slightly negative in source data.
    pub depth: Distance,
    pub epicenter: LonLat,
    pub occurred_at: DateTime<Utc>,
    /// Human-readable location, like "12 km NNW of Sagaing, Myanmar".
    pub place: String,
    /// Link to the source agency's page for this event.
    pub url: String,
}

impl SeismicEvent {
    pub fn severity(&self) -> Severity {
        Severity::from_magnitude(self.magnitude)
    }

    pub fn affected_radius(&self) -> Distance {
        affected_radius(self.magnitude)
    }

    pub fn estimated_affected_population(&self) -> u64 {
        estimate_affected_population(self.magnitude)
    }

    pub fn contours(&self) -> Vec<IntensityContour> {
        contours(self.magnitude, self.depth)
    }

    /// Estimated MMI at a site. Sites within 100m of the epicenter are treated as 100m away.
    pub fn shaking_at(&self, site: LonLat) -> u8 {
        let dist = self.epicenter.gps_dist(site).max(MIN_EPICENTRAL_DISTANCE);
        mmi_at(self.magnitude, dist)
    }
}
