//! Turning a raw forecast payload into the display model.

use chrono::{Local, NaiveDate};

use crate::codes;
use crate::model::{ForecastDay, ForecastPayload, WeatherDisplay};

/// At most this many forecast entries survive normalization.
const FORECAST_DAYS: usize = 7;

fn round(value: f64) -> i32 {
    value.round() as i32
}

/// "Today", "Tomorrow", or the abbreviated weekday name relative to `today`.
///
/// Weekday abbreviations are fixed-locale English ("Mon".."Sun"). A date that
/// fails to parse is echoed back verbatim so the result is still
/// deterministic.
fn day_name(date_str: &str, today: NaiveDate) -> String {
    let Ok(date) = NaiveDate::parse_from_str(date_str, "%Y-%m-%d") else {
        return date_str.to_string();
    };

    if date == today {
        return "Today".to_string();
    }
    if Some(date) == today.succ_opt() {
        return "Tomorrow".to_string();
    }
    date.format("%a").to_string()
}

/// Normalize a raw payload into [`WeatherDisplay`], using the system's local
/// calendar date to label forecast days.
pub fn normalize(payload: &ForecastPayload, location_name: &str) -> WeatherDisplay {
    normalize_on(payload, location_name, Local::now().date_naive())
}

/// Same as [`normalize`] with an explicit "today".
///
/// Pure: no I/O, and identical inputs always produce identical output.
pub fn normalize_on(
    payload: &ForecastPayload,
    location_name: &str,
    today: NaiveDate,
) -> WeatherDisplay {
    let current = &payload.current;
    let daily = &payload.daily;

    let is_day = current.is_day == 1;
    let condition = codes::translate(current.weather_code, is_day);

    // Truncate to 7 days; a short payload yields fewer entries, never padded.
    let days = daily
        .time
        .len()
        .min(daily.temperature_2m_max.len())
        .min(daily.temperature_2m_min.len())
        .min(daily.weather_code.len())
        .min(daily.precipitation_probability_max.len())
        .min(FORECAST_DAYS);

    let forecast = (0..days)
        .map(|i| {
            // Forecast glyphs always use the day variant; actual day/night at
            // that future date is unknowable here.
            let info = codes::translate(daily.weather_code[i], true);
            ForecastDay {
                date: daily.time[i].clone(),
                day_name: day_name(&daily.time[i], today),
                high: round(daily.temperature_2m_max[i]),
                low: round(daily.temperature_2m_min[i]),
                condition: info.description.to_string(),
                condition_icon: info.icon.to_string(),
                precip_chance: daily.precipitation_probability_max[i],
            }
        })
        .collect();

    WeatherDisplay {
        temperature: round(current.temperature_2m),
        feels_like: round(current.apparent_temperature),
        humidity: current.relative_humidity_2m,
        wind_speed: round(current.wind_speed_10m),
        wind_direction: current.wind_direction_10m,
        condition: condition.description.to_string(),
        condition_icon: condition.icon.to_string(),
        is_day,
        forecast,
        location: location_name.to_string(),
    }
}
