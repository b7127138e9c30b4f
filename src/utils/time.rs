//! Time utilities

/// Render a run time for reports: `850ms`, `1.50s`, `2m 5s`
pub fn format_milliseconds(ms: u64) -> String {
    match ms {
        0..1_000 => format!("{ms}ms"),
        1_000..60_000 => format!("{:.2}s", ms as f64 / 1000.0),
        _ => format!("{}m {}s", ms / 60_000, ms / 1000 % 60),
    }
}
