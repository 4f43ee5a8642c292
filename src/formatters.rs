use std::fmt::Write;

use crate::constants::REPORT_DAYS;
use crate::direction::CompassPoint;
use crate::forecast::{DailySummary, HourlyConditions, SurfForecast};

/// Compass label followed by the raw bearing, e.g. "W (270°)"
fn bearing(degrees: f64) -> String {
    format!("{} ({:.0}\u{00b0})", CompassPoint::from_degrees(degrees), degrees)
}

impl SurfForecast {
    /// Renders the forecast as plain text for a language model's context.
    ///
    /// The output depends only on `self`, so identical forecasts render to
    /// identical strings.
    pub fn to_llm_context(&self) -> String {
        let mut output = String::new();
        self.write_header(&mut output);
        output.push('\n');

        if self.hourly.is_empty() {
            output.push_str("No overlapping marine and weather data is available for this location.\n");
            return output;
        }

        match &self.current {
            Some(current) => write_current(&mut output, current),
            None => output.push_str("Current conditions: unavailable\n"),
        }
        output.push('\n');

        let today = self.generated_at.date();
        let days: Vec<&DailySummary> = self
            .daily
            .iter()
            .filter(|day| day.date >= today)
            .take(REPORT_DAYS)
            .collect();

        let _ = writeln!(output, "{}-day forecast:", days.len());
        for day in days {
            write_day(&mut output, day);
        }
        output
    }

    fn write_header(&self, output: &mut String) {
        let _ = write!(
            output,
            "Surf forecast for {}\nCoordinates: {:.4}, {:.4}\nTimezone: {}\nGenerated: {} (local time)\n",
            self.location.name,
            self.location.latitude,
            self.location.longitude,
            self.timezone,
            self.generated_at.format("%Y-%m-%d %H:%M"),
        );
    }
}

fn write_current(output: &mut String, current: &HourlyConditions) {
    let marine = &current.marine;
    let weather = &current.weather;
    let _ = write!(
        output,
        "Current conditions ({}):\n  Waves: {:.1}m from {}\n  Swell: {:.1}m @ {:.1}s from {}\n  Wind waves: {:.1}m from {}\n  Wind: {:.1}kt from {}, gusts {:.1}kt, {}\n  Air temperature: {:.1}\u{00b0}C\n  Surf quality: {}\n",
        current.timestamp.format("%Y-%m-%d %H:%M"),
        marine.wave_height,
        bearing(marine.wave_direction),
        marine.swell_height,
        marine.swell_period,
        bearing(marine.swell_direction),
        marine.wind_wave_height,
        bearing(marine.wind_wave_direction),
        weather.wind_speed,
        bearing(weather.wind_direction),
        weather.wind_gust,
        current.wind_relation,
        weather.air_temperature,
        current.quality,
    );
}

fn write_day(output: &mut String, day: &DailySummary) {
    let _ = write!(
        output,
        "  {}: surf {}\n    Waves: up to {:.1}m, swell {:.1}m @ {:.1}s from {}\n    Wind: max {:.1}kt from {}, gusts to {:.1}kt\n    Temperature: {:.1}\u{00b0}C to {:.1}\u{00b0}C\n",
        day.date.format("%Y-%m-%d (%a)"),
        day.quality,
        day.max_wave_height,
        day.max_swell_height,
        day.swell_period,
        bearing(day.dominant_swell_direction),
        day.max_wind_speed,
        bearing(day.dominant_wind_direction),
        day.max_gust,
        day.min_temperature,
        day.max_temperature,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::tests::{marine, ts, weather};

    fn biarritz() -> SurfForecast {
        let m = marine(&[
            ("2026-10-17T12:00", 0.8, 8.0, 290.0),
            ("2026-10-18T09:00", 1.5, 10.0, 270.0),
            ("2026-10-18T10:00", 1.4, 10.0, 270.0),
            ("2026-10-19T09:00", 2.0, 13.0, 280.0),
        ]);
        let w = weather(&[
            ("2026-10-17T12:00", 18.0, 6.0, 300.0, 9.0),
            ("2026-10-18T09:00", 15.0, 12.0, 90.0, 15.0),
            ("2026-10-18T10:00", 16.0, 12.0, 95.0, 16.0),
            ("2026-10-19T09:00", 14.0, 4.0, 120.0, 7.0),
        ]);
        SurfForecast::build_at(
            &m,
            &w,
            "Biarritz, Pyrénées-Atlantiques, France",
            43.4832,
            -1.5586,
            ts("2026-10-18T09:30"),
        )
        .unwrap()
    }

    #[test]
    fn test_bearing() {
        assert_eq!(bearing(270.0), "W (270°)");
        assert_eq!(bearing(359.6), "N (360°)");
    }

    #[test]
    fn test_full_report() {
        let expected = "\
Surf forecast for Biarritz, Pyrénées-Atlantiques, France
Coordinates: 43.4832, -1.5586
Timezone: Europe/Paris
Generated: 2026-10-18 09:30 (local time)

Current conditions (2026-10-18 09:00):
  Waves: 1.6m from W (270°)
  Swell: 1.5m @ 10.0s from W (270°)
  Wind waves: 0.2m from W (265°)
  Wind: 12.0kt from E (90°), gusts 15.0kt, offshore
  Air temperature: 15.0°C
  Surf quality: good

2-day forecast:
  2026-10-18 (Sun): surf good
    Waves: up to 1.6m, swell 1.5m @ 10.0s from W (270°)
    Wind: max 12.0kt from E (90°), gusts to 16.0kt
    Temperature: 15.0°C to 16.0°C
  2026-10-19 (Mon): surf excellent
    Waves: up to 2.1m, swell 2.0m @ 13.0s from W (280°)
    Wind: max 4.0kt from ESE (120°), gusts to 7.0kt
    Temperature: 14.0°C to 14.0°C
";
        assert_eq!(biarritz().to_llm_context(), expected);
    }

    #[test]
    fn test_report_is_deterministic() {
        let forecast = biarritz();
        assert_eq!(forecast.to_llm_context(), forecast.to_llm_context());
        assert_eq!(forecast.to_llm_context(), biarritz().to_llm_context());
    }

    #[test]
    fn test_report_without_overlap() {
        let m = marine(&[("2026-10-18T08:00", 1.5, 10.0, 270.0)]);
        let w = weather(&[("2026-10-18T09:00", 15.0, 12.0, 90.0, 15.0)]);
        let forecast =
            SurfForecast::build_at(&m, &w, "Nowhere", 0.0, 0.0, ts("2026-10-18T09:00")).unwrap();

        let report = forecast.to_llm_context();
        assert!(report.starts_with("Surf forecast for Nowhere\n"));
        assert!(report.ends_with("No overlapping marine and weather data is available for this location.\n"));
    }

    #[test]
    fn test_report_lists_at_most_five_days() {
        let days = ["10-18", "10-19", "10-20", "10-21", "10-22", "10-23", "10-24"];
        let times: Vec<String> = days.iter().map(|d| format!("2026-{}T12:00", d)).collect();
        let m_rows: Vec<_> = times.iter().map(|t| (t.as_str(), 1.0, 9.0, 270.0)).collect();
        let w_rows: Vec<_> = times.iter().map(|t| (t.as_str(), 15.0, 8.0, 90.0, 10.0)).collect();
        let forecast = SurfForecast::build_at(
            &marine(&m_rows),
            &weather(&w_rows),
            "Somewhere",
            0.0,
            0.0,
            ts("2026-10-18T12:00"),
        )
        .unwrap();

        let report = forecast.to_llm_context();
        assert!(report.contains("5-day forecast:"));
        assert!(report.contains("2026-10-22"));
        assert!(!report.contains("2026-10-23"));
    }
}
