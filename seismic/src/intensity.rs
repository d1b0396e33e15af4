use serde::{Deserialize, Serialize};

use crate::{scale, Color, Distance, Magnitude};

/// Estimated felt intensity at some distance from the epicenter, on the 1-10 Modified Mercalli
/// scale: `round(1.5m - 0.5 log10(d_km) - 0.5)`, clamped to [1, 10].
///
/// This is a simplified attenuation formula; real models also account for soil conditions and
/// rupture geometry. `distance` must be positive -- evaluating at the epicenter itself needs a
/// small floor, which `SeismicEvent::shaking_at` applies.
pub fn mmi_at(magnitude: Magnitude, distance: Distance) -> u8 {
    if distance <= Distance::ZERO {
        panic!("Can't estimate MMI at distance {}", distance);
    }
    let raw = 1.5 * magnitude.inner() - 0.5 * distance.to_kilometers().log10() - 0.5;
    raw.round().clamp(1.0, 10.0) as u8
}

/// A ring around the epicenter inside which shaking of at least `level` is expected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntensityContour {
    pub level: u8,
    pub radius: Distance,
    pub color: Color,
}

/// Concentric MMI contours for an event, strongest (innermost) first. Each level's radius comes
/// from inverting the attenuation formula; levels whose radius would be non-positive or past
/// 1000km are skipped. An empty result is a normal outcome -- a zero-depth event has no rings at
/// all.
pub fn contours(magnitude: Magnitude, depth: Distance) -> Vec<IntensityContour> {
    let mut result = Vec::new();
    for level in (3..=10u8).rev() {
        let radius_km = 10f64
            .powf((1.5 * magnitude.inner() - (level as f64) - 0.5) / 0.5)
            * depth.to_kilometers().sqrt();

        // Only include reasonable radii. This comparison also drops the NaN from a negative
        // depth's sqrt.
        if !(radius_km > 0.0 && radius_km < 1000.0) {
            continue;
        }
        let radius = Distance::kilometers(radius_km);
        if radius == Distance::ZERO {
            // Rounded away to nothing; too small to render anyway
            continue;
        }
        result.push(IntensityContour {
            level,
            radius,
            color: scale::entry(level).fill(),
        });
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_to_scale() {
        assert_eq!(mmi_at(Magnitude::new(9.0), Distance::kilometers(0.001)), 10);
        assert_eq!(mmi_at(Magnitude::new(1.0), Distance::kilometers(5000.0)), 1);
    }

    #[test]
    fn attenuates_with_distance() {
        let m = Magnitude::new(7.0);
        let mut last = 11;
        for km in [1.0, 10.0, 100.0, 1000.0, 10000.0] {
            let mmi = mmi_at(m, Distance::kilometers(km));
            assert!(mmi <= last, "MMI grew from {} to {} at {}km", last, mmi, km);
            last = mmi;
        }
    }

    #[test]
    fn grows_with_magnitude() {
        let d = Distance::kilometers(50.0);
        assert!(mmi_at(Magnitude::new(8.0), d) > mmi_at(Magnitude::new(5.0), d));
    }

    #[test]
    #[should_panic]
    fn zero_distance() {
        mmi_at(Magnitude::new(6.0), Distance::ZERO);
    }

    #[test]
    fn contours_for_big_event() {
        let result = contours(Magnitude::new(7.0), Distance::kilometers(10.0));
        assert!(!result.is_empty());
        for pair in result.windows(2) {
            // Strongest shaking first, radius growing outwards
            assert!(pair[0].level > pair[1].level);
            assert!(pair[0].radius < pair[1].radius);
        }
        for c in &result {
            assert!(c.radius > Distance::ZERO);
            assert!(c.radius < Distance::kilometers(1000.0));
            assert_eq!(c.color, crate::scale::entry(c.level).fill());
        }
    }

    #[test]
    fn zero_depth_has_no_contours() {
        assert!(contours(Magnitude::new(7.0), Distance::ZERO).is_empty());
    }

    #[test]
    fn negative_depth_has_no_contours() {
        // USGS occasionally reports slightly negative depths
        assert!(contours(Magnitude::new(6.0), Distance::kilometers(-1.2)).is_empty());
    }
}
