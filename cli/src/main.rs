//! Command-line tools around the earthquake estimator and the USGS feed, bundled as a single
//! executable.

#[macro_use]
extern crate log;

mod logger;

use anyhow::Result;
use structopt::StructOpt;

use seismic::{
    affected_radius, contours, contours_to_geojson, estimate_affected_population, mmi_at, scale,
    Distance, LonLat, Magnitude, Severity, MYANMAR_CENTER,
};
use usgs::EventQuery;

#[derive(StructOpt)]
#[structopt(name = "quakecli", about = "Myanmar earthquake dashboard multi-tool")]
enum Command {
    /// Fetch recent earthquakes near Myanmar from the USGS feed
    Events {
        /// Only include events of at least this magnitude
        #[structopt(long)]
        min_magnitude: Option<f64>,
        /// Maximum number of results
        #[structopt(long)]
        limit: Option<usize>,
        /// Search ten years of M5+ history instead of the last 30 days
        #[structopt(long)]
        historical: bool,
        /// With --historical, restrict to the curated "significant events" catalog
        #[structopt(long)]
        significant_only: bool,
    },
    /// Summarize severity, affected radius, and affected population for a magnitude
    Estimate {
        #[structopt(long)]
        magnitude: f64,
    },
    /// Estimate the felt intensity at some distance from an epicenter
    Mmi {
        #[structopt(long)]
        magnitude: f64,
        #[structopt(long)]
        distance_km: f64,
    },
    /// Write MMI contour rings for a hypothetical event as GeoJSON
    Contours {
        #[structopt(long)]
        magnitude: f64,
        #[structopt(long)]
        depth_km: f64,
        /// Epicenter longitude; defaults to Myanmar's center
        #[structopt(long)]
        lon: Option<f64>,
        /// Epicenter latitude; defaults to Myanmar's center
        #[structopt(long)]
        lat: Option<f64>,
        /// Write here instead of STDOUT
        #[structopt(long)]
        out: Option<String>,
    },
    /// Great-circle distance between two points
    Distance {
        #[structopt(long)]
        from_lon: f64,
        #[structopt(long)]
        from_lat: f64,
        #[structopt(long)]
        to_lon: f64,
        #[structopt(long)]
        to_lat: f64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    logger::setup();

    match Command::from_args() {
        Command::Events {
            min_magnitude,
            limit,
            historical,
            significant_only,
        } => {
            let mut query = if historical {
                EventQuery::historical()
            } else {
                EventQuery::recent()
            };
            if let Some(m) = min_magnitude {
                query.min_magnitude = Magnitude::new(m);
            }
            if let Some(n) = limit {
                query.limit = n;
            }
            query.significant_only = significant_only;
            events(query).await?;
        }
        Command::Estimate { magnitude } => estimate(Magnitude::new(magnitude)),
        Command::Mmi {
            magnitude,
            distance_km,
        } => mmi(Magnitude::new(magnitude), Distance::kilometers(distance_km)),
        Command::Contours {
            magnitude,
            depth_km,
            lon,
            lat,
            out,
        } => {
            let epicenter = match (lon, lat) {
                (Some(lon), Some(lat)) => LonLat::new(lon, lat),
                _ => MYANMAR_CENTER,
            };
            write_contours(
                Magnitude::new(magnitude),
                Distance::kilometers(depth_km),
                epicenter,
                out,
            )?;
        }
        Command::Distance {
            from_lon,
            from_lat,
            to_lon,
            to_lat,
        } => {
            let dist = LonLat::new(from_lon, from_lat).gps_dist(LonLat::new(to_lon, to_lat));
            println!("{}", dist.describe());
        }
    }
    Ok(())
}

async fn events(query: EventQuery) -> Result<()> {
    let events = usgs::fetch_events(&query).await?;
    info!("Got {} events", events.len());

    println!(
        "{:6} {:10} {:8} {:22} place",
        "mag", "severity", "depth", "time (UTC)"
    );
    for ev in events {
        println!(
            "{:6} {:10} {:8} {:22} {}",
            ev.magnitude.to_string(),
            ev.severity().to_string(),
            ev.depth.describe(),
            ev.occurred_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            ev.place
        );
    }
    Ok(())
}

fn estimate(magnitude: Magnitude) {
    let severity = Severity::from_magnitude(magnitude);
    println!("{} is {} ({})", magnitude, severity, severity.color().as_hex());
    println!("Affected radius: {}", affected_radius(magnitude).describe());
    println!(
        "Roughly {} people affected",
        estimate_affected_population(magnitude)
    );
}

fn mmi(magnitude: Magnitude, distance: Distance) {
    let level = mmi_at(magnitude, distance);
    let entry = scale::entry(level);
    println!(
        "{} at {} away feels like {}",
        magnitude,
        distance.describe(),
        entry.name
    );
    println!("{}", entry.description);
}

fn write_contours(
    magnitude: Magnitude,
    depth: Distance,
    epicenter: LonLat,
    out: Option<String>,
) -> Result<()> {
    let rings = contours(magnitude, depth);
    if rings.is_empty() {
        warn!(
            "No contours for {} at {} depth; nothing will render",
            magnitude,
            depth.describe()
        );
    }
    let raw = contours_to_geojson(epicenter, &rings)?;
    if let Some(path) = out {
        fs_err::write(&path, raw)?;
        info!("Wrote {}", path);
    } else {
        println!("{}", raw);
    }
    Ok(())
}
