use std::fmt;

use serde::Serialize;

use crate::direction::angular_difference;

/// Rough surfability rating for one set of conditions
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfQuality {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl SurfQuality {
    pub fn label(self) -> &'static str {
        match self {
            SurfQuality::Poor => "poor",
            SurfQuality::Fair => "fair",
            SurfQuality::Good => "good",
            SurfQuality::Excellent => "excellent",
        }
    }
}

impl fmt::Display for SurfQuality {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Wind direction relative to the direction the swell arrives from.
/// The swell direction stands in for the orientation of the beach.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WindRelation {
    Offshore,
    CrossShore,
    Onshore,
}

impl WindRelation {
    pub fn between(wind_direction: f64, swell_direction: f64) -> WindRelation {
        let diff = angular_difference(wind_direction, swell_direction);
        if diff >= 135.0 {
            WindRelation::Offshore
        } else if diff <= 45.0 {
            WindRelation::Onshore
        } else {
            WindRelation::CrossShore
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WindRelation::Offshore => "offshore",
            WindRelation::CrossShore => "cross-shore",
            WindRelation::Onshore => "onshore",
        }
    }
}

impl fmt::Display for WindRelation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inputs to the rating rules. Heights in metres, period in seconds, wind in knots.
#[derive(Clone, Copy, Debug)]
pub struct SurfConditions {
    pub swell_height: f64,
    pub swell_period: f64,
    pub wind_speed: f64,
    pub wind: WindRelation,
}

struct Rule {
    quality: SurfQuality,
    matches: fn(&SurfConditions) -> bool,
}

// Evaluated top to bottom, first match wins.
const RULES: &[Rule] = &[
    Rule {
        quality: SurfQuality::Poor,
        matches: |c| c.swell_height < 0.5,
    },
    Rule {
        quality: SurfQuality::Poor,
        matches: |c| c.wind == WindRelation::Onshore && c.wind_speed > 15.0,
    },
    Rule {
        quality: SurfQuality::Excellent,
        matches: |c| {
            c.swell_height >= 1.5
                && c.swell_period >= 12.0
                && (c.wind_speed <= 5.0
                    || (c.wind == WindRelation::Offshore && c.wind_speed <= 15.0))
        },
    },
    Rule {
        quality: SurfQuality::Good,
        matches: |c| {
            c.swell_height >= 1.0
                && c.swell_period >= 9.0
                && (c.wind_speed <= 10.0
                    || (c.wind == WindRelation::Offshore && c.wind_speed <= 20.0))
        },
    },
    Rule {
        quality: SurfQuality::Fair,
        matches: |c| c.swell_height >= 0.5 && c.swell_period >= 7.0 && c.wind_speed <= 20.0,
    },
];

pub fn assess(conditions: &SurfConditions) -> SurfQuality {
    RULES
        .iter()
        .find(|rule| (rule.matches)(conditions))
        .map(|rule| rule.quality)
        .unwrap_or(SurfQuality::Poor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conditions(swell_height: f64, swell_period: f64, wind_speed: f64, wind: WindRelation) -> SurfConditions {
        SurfConditions {
            swell_height,
            swell_period,
            wind_speed,
            wind,
        }
    }

    #[test]
    fn test_wind_relation() {
        assert_eq!(WindRelation::between(90.0, 270.0), WindRelation::Offshore);
        assert_eq!(WindRelation::between(260.0, 270.0), WindRelation::Onshore);
        assert_eq!(WindRelation::between(0.0, 270.0), WindRelation::CrossShore);
        assert_eq!(WindRelation::between(350.0, 10.0), WindRelation::Onshore);
    }

    #[test]
    fn test_small_swell_is_poor() {
        let c = conditions(0.4, 16.0, 0.0, WindRelation::Offshore);
        assert_eq!(assess(&c), SurfQuality::Poor);
    }

    #[test]
    fn test_strong_onshore_wind_is_poor() {
        let c = conditions(2.0, 14.0, 18.0, WindRelation::Onshore);
        assert_eq!(assess(&c), SurfQuality::Poor);
    }

    #[test]
    fn test_long_period_groundswell_offshore_is_excellent() {
        let c = conditions(1.8, 13.0, 12.0, WindRelation::Offshore);
        assert_eq!(assess(&c), SurfQuality::Excellent);

        let glassy = conditions(1.5, 12.0, 3.0, WindRelation::Onshore);
        assert_eq!(assess(&glassy), SurfQuality::Excellent);
    }

    #[test]
    fn test_medium_swell_with_offshore_breeze_is_good() {
        let c = conditions(1.5, 10.0, 12.0, WindRelation::Offshore);
        assert_eq!(assess(&c), SurfQuality::Good);
    }

    #[test]
    fn test_same_swell_with_cross_shore_breeze_is_fair() {
        let c = conditions(1.5, 10.0, 12.0, WindRelation::CrossShore);
        assert_eq!(assess(&c), SurfQuality::Fair);
    }

    #[test]
    fn test_short_period_wind_swell_is_poor() {
        let c = conditions(1.2, 5.0, 8.0, WindRelation::CrossShore);
        assert_eq!(assess(&c), SurfQuality::Poor);
    }

    #[test]
    fn test_rating_never_drops_as_swell_builds() {
        let mut previous = SurfQuality::Poor;
        for step in 0..40 {
            let height = step as f64 * 0.1;
            let rating = assess(&conditions(height, 12.0, 8.0, WindRelation::Offshore));
            assert!(rating >= previous, "{}m rated {} after {}", height, rating, previous);
            previous = rating;
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(SurfQuality::Excellent.to_string(), "excellent");
        assert_eq!(WindRelation::CrossShore.to_string(), "cross-shore");
    }
}
