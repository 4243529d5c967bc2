// src/domain/format.rs

use chrono::NaiveDateTime;

const EOK: u64 = 100_000_000;
const CHEONMAN: u64 = 10_000_000;
const MAN: u64 = 10_000;

/// Human budget in the units procurement notices use (억원 / 천만원 / 만원).
pub fn format_budget(budget: u64) -> String {
    if budget >= EOK {
        format!("{:.1}억원", budget as f64 / EOK as f64)
    } else if budget >= CHEONMAN {
        format!("{:.0}천만원", budget as f64 / CHEONMAN as f64)
    } else {
        format!("{:.0}만원", budget as f64 / MAN as f64)
    }
}

/// Whole days left until `deadline`, rounded up.
pub fn days_left(deadline: NaiveDateTime, now: NaiveDateTime) -> i64 {
    let secs = (deadline - now).num_seconds();
    let day = 24 * 60 * 60;
    // ceil for both signs
    if secs > 0 {
        (secs + day - 1) / day
    } else {
        secs / day
    }
}

pub fn d_day_label(deadline: Option<NaiveDateTime>, now: NaiveDateTime) -> String {
    let Some(deadline) = deadline else {
        return "-".to_string();
    };

    match days_left(deadline, now) {
        n if n < 0 => "마감".to_string(),
        0 => "D-Day".to_string(),
        n => format!("D-{n}"),
    }
}
