//! Unit-aware rendering of measurement values.
//!
//! Byte-style magnitudes scale by powers of 1024 and switch units only when
//! the value is strictly greater than the unit (so exactly 1024 stays
//! `1024B`). Durations are nanosecond counts.

use crate::profile::ProfileKind;

const KB: i64 = 1024;
const MB: i64 = KB * 1024;
const GB: i64 = MB * 1024;
const TB: i64 = GB * 1024;

/// Render a byte-style magnitude
///
/// # Example
/// ```
/// use pprof_agent::format::format_scalar;
/// assert_eq!(format_scalar(1024), "1024B");
/// assert_eq!(format_scalar(1025), "1.00KB");
/// ```
pub fn format_scalar(value: i64) -> String {
    if value > TB {
        format!("{:.2}TB", value as f64 / TB as f64)
    } else if value > GB {
        format!("{:.2}GB", value as f64 / GB as f64)
    } else if value > MB {
        format!("{:.2}MB", value as f64 / MB as f64)
    } else if value > KB {
        format!("{:.2}KB", value as f64 / KB as f64)
    } else {
        format!("{}B", value)
    }
}

/// Render a nanosecond count as a compact duration (`1.5s`, `2m3s`, `250µs`)
pub fn format_duration(nanos: i64) -> String {
    if nanos == 0 {
        return "0s".to_string();
    }

    let magnitude = nanos.unsigned_abs();
    let body = if magnitude < 1_000 {
        format!("{}ns", magnitude)
    } else if magnitude < 1_000_000 {
        format!("{}µs", with_fraction(magnitude, 3))
    } else if magnitude < 1_000_000_000 {
        format!("{}ms", with_fraction(magnitude, 6))
    } else {
        let total_secs = magnitude / 1_000_000_000;
        let hours = total_secs / 3600;
        let minutes = (total_secs / 60) % 60;
        let seconds = with_fraction((total_secs % 60) * 1_000_000_000 + magnitude % 1_000_000_000, 9);

        let mut out = String::new();
        if hours > 0 {
            out.push_str(&format!("{}h", hours));
        }
        if hours > 0 || minutes > 0 {
            out.push_str(&format!("{}m", minutes));
        }
        out.push_str(&format!("{}s", seconds));
        out
    };

    if nanos < 0 {
        format!("-{}", body)
    } else {
        body
    }
}

/// `value / 10^digits` with the fractional part trimmed of trailing zeros
fn with_fraction(value: u64, digits: u32) -> String {
    let scale = 10u64.pow(digits);
    let whole = value / scale;
    let frac = value % scale;
    if frac == 0 {
        return whole.to_string();
    }
    let frac = format!("{:0width$}", frac, width = digits as usize);
    format!("{}.{}", whole, frac.trim_end_matches('0'))
}

/// Render a value vector according to the slot meanings of `kind`
///
/// Slots are joined with `", "`. An empty vector renders as `no values`.
pub fn format_values(values: &[i64], kind: ProfileKind) -> String {
    if values.is_empty() {
        return "no values".to_string();
    }

    values
        .iter()
        .enumerate()
        .map(|(slot, &value)| format_slot(slot, value, kind))
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_slot(slot: usize, value: i64, kind: ProfileKind) -> String {
    match (kind, slot) {
        (ProfileKind::Heap, 0) => format!("{} in use", format_scalar(value)),
        (ProfileKind::Heap, 1) => format!("{} total alloc", format_scalar(value)),
        (ProfileKind::Block, 0) => format!("{} contentions", value),
        (ProfileKind::Block, 1) => format!("{} delay", format_duration(value)),
        (ProfileKind::Cpu, 0) => format!("{} CPU time", format_duration(value)),
        _ => format_scalar(value),
    }
}
