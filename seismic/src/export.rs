use anyhow::Result;
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, Value};

use crate::{IntensityContour, LonLat};

/// How many points approximate each contour ring.
const RING_RESOLUTION: usize = 64;

/// Renders contours as a GeoJSON string: one polygon feature per ring (innermost first, so later
/// features draw on top in naive renderers... order them yourself if that matters), plus a point
/// feature for the epicenter. An empty contour list still produces the epicenter point.
pub fn contours_to_geojson(epicenter: LonLat, contours: &[IntensityContour]) -> Result<String> {
    let mut features = Vec::new();

    for contour in contours {
        let mut ring = Vec::new();
        for i in 0..RING_RESOLUTION {
            let bearing = 360.0 * (i as f64) / (RING_RESOLUTION as f64);
            let pt = epicenter.project_away(contour.radius, bearing);
            ring.push(vec![pt.longitude, pt.latitude]);
        }
        // GeoJSON rings must be explicitly closed
        ring.push(ring[0].clone());

        let mut feature = Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::Polygon(vec![ring]))),
            id: None,
            properties: None,
            foreign_members: None,
        };
        feature.set_property("mmi", contour.level);
        feature.set_property("radius_km", crate::trim_f64(contour.radius.to_kilometers()));
        feature.set_property("fill", contour.color.as_hex());
        feature.set_property("fill-opacity", 0.2);
        features.push(feature);
    }

    let mut epicenter_feature = Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Point(vec![
            epicenter.longitude,
            epicenter.latitude,
        ]))),
        id: None,
        properties: None,
        foreign_members: None,
    };
    epicenter_feature.set_property("type", "epicenter");
    features.push(epicenter_feature);

    let gj = GeoJson::FeatureCollection(FeatureCollection {
        features,
        bbox: None,
        foreign_members: None,
    });

    let x = serde_json::to_string_pretty(&gj)?;
    Ok(x)
}
