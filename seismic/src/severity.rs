use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Error};
use serde::{Deserialize, Serialize};

use crate::{Color, Distance, Magnitude};

/// A coarse four-bucket classification derived from magnitude alone, used to color-code markers
/// and report badges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Moderate,
    Severe,
    Critical,
}

impl Severity {
    /// Each band is closed on its lower bound: exactly M4.0 is already `Moderate`.
    pub fn from_magnitude(magnitude: Magnitude) -> Severity {
        let m = magnitude.inner();
        if m < 4.0 {
            Severity::Low
        } else if m < 5.5 {
            Severity::Moderate
        } else if m < 6.5 {
            Severity::Severe
        } else {
            Severity::Critical
        }
    }

    /// The dashboard's marker color for this bucket.
    pub fn color(self) -> Color {
        match self {
            Severity::Low => Color::hex("#22c55e"),
            Severity::Moderate => Color::hex("#facc15"),
            Severity::Severe => Color::hex("#f97316"),
            Severity::Critical => Color::hex("#ef4444"),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let x = match self {
            Severity::Low => "low",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
            Severity::Critical => "critical",
        };
        write!(f, "{}", x)
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(x: &str) -> Result<Severity, Error> {
        match x {
            "low" => Ok(Severity::Low),
            "moderate" => Ok(Severity::Moderate),
            "severe" => Ok(Severity::Severe),
            "critical" => Ok(Severity::Critical),
            _ => bail!("Unknown severity {}", x),
        }
    }
}

/// Estimated radius inside which shaking is likely to be noticed: `10^(m - 3) * 5` km. A rough
/// heuristic for scaling map overlays, not a validated attenuation model.
pub fn affected_radius(magnitude: Magnitude) -> Distance {
    Distance::kilometers(10f64.powf(magnitude.inner() - 3.0) * 5.0)
}

/// Order-of-magnitude guess at how many people felt the event: `round(10^(m - 4) * 100)`. Ignores
/// population density, terrain, and time of day.
pub fn estimate_affected_population(magnitude: Magnitude) -> u64 {
    (10f64.powf(magnitude.inner() - 4.0) * 100.0).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries() {
        for (m, expected) in [
            (-1.0, Severity::Low),
            (3.9, Severity::Low),
            (4.0, Severity::Moderate),
            (5.4, Severity::Moderate),
            (5.5, Severity::Severe),
            (6.4, Severity::Severe),
            (6.5, Severity::Critical),
            (9.5, Severity::Critical),
        ] {
            assert_eq!(Severity::from_magnitude(Magnitude::new(m)), expected);
        }
    }

    #[test]
    fn severity_is_ordered() {
        assert!(Severity::Low < Severity::Moderate);
        assert!(Severity::Severe < Severity::Critical);
    }

    #[test]
    fn parse_round_trip() {
        for sev in [
            Severity::Low,
            Severity::Moderate,
            Severity::Severe,
            Severity::Critical,
        ] {
            assert_eq!(sev.to_string().parse::<Severity>().unwrap(), sev);
        }
        assert!("catastrophic".parse::<Severity>().is_err());
    }

    #[test]
    fn radius_formula() {
        assert_eq!(affected_radius(Magnitude::new(3.0)), Distance::kilometers(5.0));
        assert_eq!(affected_radius(Magnitude::new(4.0)), Distance::kilometers(50.0));
    }

    #[test]
    fn radius_and_population_increase_with_magnitude() {
        let mut m = 3.0;
        while m < 9.0 {
            assert!(affected_radius(Magnitude::new(m + 0.1)) > affected_radius(Magnitude::new(m)));
            assert!(
                estimate_affected_population(Magnitude::new(m + 1.0))
                    > estimate_affected_population(Magnitude::new(m))
            );
            m += 0.1;
        }
    }

    #[test]
    fn population_formula() {
        assert_eq!(estimate_affected_population(Magnitude::new(4.0)), 100);
        assert_eq!(estimate_affected_population(Magnitude::new(6.0)), 10_000);
    }
}
