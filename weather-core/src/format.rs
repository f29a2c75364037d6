//! Rendering of reports and user-facing error strings.
//!
//! Replies are Russian with emoji section markers; the report is always
//! exactly five lines, with a placeholder standing in for any field the
//! upstream did not supply.

use crate::model::WeatherReport;

/// Placeholder rendered for any field missing from the upstream payload.
pub const NO_DATA: &str = "нет данных";

/// Generic apology shown for any failure that is not an unknown city.
pub const GENERIC_ERROR: &str = "Произошла ошибка при получении данных о погоде.";

/// Retry prompt for an unknown city; echoes the user's input back verbatim.
pub fn city_not_found(city: &str) -> String {
    format!("Не удалось найти город '{city}'. Попробуйте еще раз.")
}

/// First letter uppercased, the rest lowercased. Unicode-aware, so Russian
/// city names and descriptions come out right.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Build the five-line chat report: header, temperature, wind, humidity,
/// description.
pub fn render_report(city: &str, report: &WeatherReport) -> String {
    let description = report.description.as_deref().unwrap_or(NO_DATA);

    format!(
        "Погода в городе {}:\n\
         🌡️ Температура: {}°C (ощущается как {}°C)\n\
         🌬️ Ветер: {} м/с\n\
         💧 Влажность: {}%\n\
         ☁️ Описание: {}",
        capitalize(city),
        num(report.temperature_c),
        num(report.feels_like_c),
        num(report.wind_speed_mps),
        report
            .humidity_pct
            .map_or_else(|| NO_DATA.to_string(), |h| h.to_string()),
        capitalize(description),
    )
}

/// Whole numbers print without a fractional part ("18", not "18.0"); missing
/// values print the placeholder.
fn num(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 => (v as i64).to_string(),
        Some(v) => v.to_string(),
        None => NO_DATA.to_string(),
    }
}
