//! Time helpers for pickup schedules and table headers

use chrono::{Duration, Local, NaiveTime};

use shared::types::Millis;

/// Validate a pickup time string, returning its canonical "HH:MM" form
pub fn parse_pickup_time(raw: &str) -> Option<String> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .ok()
        .map(|t| t.format("%H:%M").to_string())
}

/// Pickup time N preparation-minutes from now, formatted "HH:MM"
/// (the quick buttons on the time dialog: 5, 10, ... 60 minutes)
pub fn pickup_time_in(minutes: i64) -> String {
    (Local::now() + Duration::minutes(minutes))
        .format("%H:%M")
        .to_string()
}

/// Elapsed-time label for a table header, e.g. "hace 5 minutos"
pub fn elapsed_label(now: Millis, since: Millis) -> String {
    let seconds = (now - since).max(0) / 1000;
    if seconds < 60 {
        return format!("hace {seconds} segundos");
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("hace {minutes} minutos");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("hace {hours} horas");
    }
    format!("hace {} días", hours / 24)
}
