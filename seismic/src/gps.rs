use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Distance;

/// The mean radius of the Earth, for spherical approximations.
pub const EARTH_RADIUS: Distance = Distance::const_meters(6_371_000.0);

// longitude is x, latitude is y
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct LonLat {
    pub longitude: f64,
    pub latitude: f64,
}

impl LonLat {
    pub fn new(lon: f64, lat: f64) -> LonLat {
        LonLat {
            longitude: lon,
            latitude: lat,
        }
    }

    /// The great-circle distance to another point, by the haversine formula. Symmetric, and zero
    /// for identical points.
    pub fn gps_dist(self, other: LonLat) -> Distance {
        let lon1 = self.longitude.to_radians();
        let lon2 = other.longitude.to_radians();
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();

        let delta_lat = lat2 - lat1;
        let delta_lon = lon2 - lon1;

        let a = (delta_lat / 2.0).sin().powi(2)
            + (delta_lon / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        Distance::meters(EARTH_RADIUS.inner_meters() * c)
    }

    /// The point reached by travelling some distance along an initial bearing (degrees clockwise
    /// from north), on a spherical Earth.
    pub fn project_away(self, dist: Distance, bearing_degs: f64) -> LonLat {
        let ang_dist = dist.inner_meters() / EARTH_RADIUS.inner_meters();
        let bearing = bearing_degs.to_radians();
        let lat1 = self.latitude.to_radians();
        let lon1 = self.longitude.to_radians();

        let lat2 =
            (lat1.sin() * ang_dist.cos() + lat1.cos() * ang_dist.sin() * bearing.cos()).asin();
        let lon2 = lon1
            + (bearing.sin() * ang_dist.sin() * lat1.cos())
                .atan2(ang_dist.cos() - lat1.sin() * lat2.sin());
        LonLat::new(lon2.to_degrees(), lat2.to_degrees())
    }

    /// The componentwise average of some points.
    pub fn center(pts: &[LonLat]) -> LonLat {
        let mut lon = 0.0;
        let mut lat = 0.0;
        for pt in pts {
            lon += pt.longitude;
            lat += pt.latitude;
        }
        let len = pts.len() as f64;
        LonLat {
            longitude: lon / len,
            latitude: lat / len,
        }
    }
}

impl fmt::Display for LonLat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LonLat({0}, {1})", self.longitude, self.latitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MYANMAR_CENTER;

    #[test]
    fn dist_to_self_is_zero() {
        assert_eq!(
            MYANMAR_CENTER.gps_dist(LonLat::new(96.0785, 19.7633)),
            Distance::ZERO
        );
    }

    #[test]
    fn dist_is_symmetric() {
        // Mandalay and Yangon
        let a = LonLat::new(96.0891, 21.9588);
        let b = LonLat::new(96.1561, 16.8409);
        assert_eq!(a.gps_dist(b), b.gps_dist(a));
        // Roughly 570km apart
        let km = a.gps_dist(b).to_kilometers();
        assert!(km > 550.0 && km < 590.0, "got {}km", km);
    }

    #[test]
    fn project_away_round_trip() {
        let dist = Distance::kilometers(25.0);
        for bearing in [0.0, 45.0, 90.0, 180.0, 270.0] {
            let pt = MYANMAR_CENTER.project_away(dist, bearing);
            let err = (pt.gps_dist(MYANMAR_CENTER) - dist).abs();
            assert!(err < Distance::meters(50.0), "off by {}", err);
        }
    }

    #[test]
    fn center_of_points() {
        let center = LonLat::center(&[LonLat::new(96.0, 19.0), LonLat::new(98.0, 21.0)]);
        assert_eq!(center, LonLat::new(97.0, 20.0));
    }
}
