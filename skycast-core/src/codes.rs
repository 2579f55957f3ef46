//! Translation of WMO weather condition codes into display text and glyphs.

/// Human-readable description and icon glyph for a condition code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionInfo {
    pub description: &'static str,
    pub icon: &'static str,
}

/// Sentinel for codes outside the known table.
pub const UNKNOWN_CONDITION: ConditionInfo = ConditionInfo { description: "Unknown", icon: "❓" };

/// (description, day icon, night icon) for a known code, `None` otherwise.
///
/// The description never varies with time of day; only the glyph does.
fn lookup(code: u16) -> Option<(&'static str, &'static str, &'static str)> {
    let entry = match code {
        0 => ("Clear sky", "☀️", "🌙"),
        1 => ("Mainly clear", "🌤️", "🌙"),
        2 => ("Partly cloudy", "⛅", "☁️"),
        3 => ("Overcast", "☁️", "☁️"),
        45 => ("Foggy", "🌫️", "🌫️"),
        48 => ("Depositing rime fog", "🌫️", "🌫️"),
        51 => ("Light drizzle", "🌧️", "🌧️"),
        53 => ("Moderate drizzle", "🌧️", "🌧️"),
        55 => ("Dense drizzle", "🌧️", "🌧️"),
        61 => ("Slight rain", "🌧️", "🌧️"),
        63 => ("Moderate rain", "🌧️", "🌧️"),
        65 => ("Heavy rain", "🌧️", "🌧️"),
        66 => ("Light freezing rain", "🌨️", "🌨️"),
        67 => ("Heavy freezing rain", "🌨️", "🌨️"),
        71 => ("Slight snow", "🌨️", "🌨️"),
        73 => ("Moderate snow", "❄️", "❄️"),
        75 => ("Heavy snow", "❄️", "❄️"),
        77 => ("Snow grains", "❄️", "❄️"),
        80 => ("Slight rain showers", "🌦️", "🌧️"),
        81 => ("Moderate rain showers", "🌦️", "🌧️"),
        82 => ("Violent rain showers", "⛈️", "⛈️"),
        85 => ("Slight snow showers", "🌨️", "🌨️"),
        86 => ("Heavy snow showers", "🌨️", "🌨️"),
        95 => ("Thunderstorm", "⛈️", "⛈️"),
        96 => ("Thunderstorm with hail", "⛈️", "⛈️"),
        99 => ("Thunderstorm with heavy hail", "⛈️", "⛈️"),
        _ => return None,
    };
    Some(entry)
}

/// Translate a condition code into display text plus a day- or night-variant
/// glyph. Unknown codes never fail; they map to [`UNKNOWN_CONDITION`] for
/// both day and night.
pub fn translate(code: u16, is_day: bool) -> ConditionInfo {
    match lookup(code) {
        Some((description, day_icon, night_icon)) => ConditionInfo {
            description,
            icon: if is_day { day_icon } else { night_icon },
        },
        None => UNKNOWN_CONDITION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN_CODES: [u16; 26] = [
        0, 1, 2, 3, 45, 48, 51, 53, 55, 61, 63, 65, 66, 67, 71, 73, 75, 77, 80, 81, 82, 85, 86,
        95, 96, 99,
    ];

    #[test]
    fn every_known_code_has_description_and_icons() {
        for code in KNOWN_CODES {
            let day = translate(code, true);
            let night = translate(code, false);

            assert!(!day.description.is_empty(), "code {code}");
            assert!(!day.icon.is_empty(), "code {code}");
            assert!(!night.icon.is_empty(), "code {code}");
            assert_eq!(day.description, night.description, "code {code}");
        }
    }

    #[test]
    fn day_and_night_glyphs_differ_where_the_sky_matters() {
        for code in [0, 1, 2, 80, 81] {
            let day = translate(code, true);
            let night = translate(code, false);
            assert_ne!(day.icon, night.icon, "code {code}");
        }
    }

    #[test]
    fn known_samples() {
        assert_eq!(translate(2, true), ConditionInfo { description: "Partly cloudy", icon: "⛅" });
        assert_eq!(translate(2, false), ConditionInfo { description: "Partly cloudy", icon: "☁️" });
        assert_eq!(translate(61, true).description, "Slight rain");
        assert_eq!(translate(0, false).icon, "🌙");
    }

    #[test]
    fn unknown_code_falls_back_for_day_and_night() {
        assert_eq!(translate(9999, true), UNKNOWN_CONDITION);
        assert_eq!(translate(9999, false), UNKNOWN_CONDITION);
        assert_eq!(UNKNOWN_CONDITION.description, "Unknown");
        assert_eq!(UNKNOWN_CONDITION.icon, "❓");
    }
}
