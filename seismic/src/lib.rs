//! The computational core of the Myanmar earthquake dashboard: classify events by severity,
//! estimate how far and how strongly shaking is felt, and produce Modified Mercalli Intensity
//! (MMI) contours for rendering around an epicenter.
//!
//! Everything here is a pure function of its inputs -- no I/O, no shared state. The formulas are
//! deliberately the rough heuristics the dashboard has always used; they're for visualization
//! scaling, not safety-critical modeling.

mod color;
mod event;
mod export;
mod gps;
mod intensity;
pub mod scale;
mod severity;
mod units;

pub use crate::color::Color;
pub use crate::event::SeismicEvent;
pub use crate::export::contours_to_geojson;
pub use crate::gps::{LonLat, EARTH_RADIUS};
pub use crate::intensity::{contours, mmi_at, IntensityContour};
pub use crate::scale::{MmiScaleEntry, MMI_SCALE};
pub use crate::severity::{affected_radius, estimate_affected_population, Severity};
pub use crate::units::{Distance, Magnitude};

use serde::{Deserialize, Deserializer, Serializer};

/// Myanmar's approximate center, the default focus for event queries and maps.
pub const MYANMAR_CENTER: LonLat = LonLat {
    longitude: 96.0785,
    latitude: 19.7633,
};

/// A search radius covering Myanmar and nearby regions.
pub const DEFAULT_SEARCH_RADIUS: Distance = Distance::const_meters(1_000_000.0);

// Round to a few decimal places for serialization and comparisons; full floating point precision
// is just noise here.
pub fn trim_f64(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

pub(crate) fn serialize_f64<S: Serializer>(x: &f64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(trim_f64(*x))
}

pub(crate) fn deserialize_f64<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    f64::deserialize(d)
}
