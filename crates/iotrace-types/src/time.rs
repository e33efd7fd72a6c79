use chrono::{DateTime, Utc};

/// Convert a raw epoch value into an absolute UTC timestamp.
///
/// The companion apps log second- and millisecond-resolution epochs into
/// the same columns. A value whose decimal rendering is exactly 10
/// characters long is taken as whole seconds; anything else is
/// integer-divided by 1000 first. The 10-character rule is a compatibility
/// contract with the vendor logs, not a format flag: second counts before
/// ~2001 or after ~2286 land on the millisecond path and come out wrong,
/// exactly as they always have. Values outside chrono's representable
/// range clamp to the Unix epoch.
pub fn normalize_epoch(raw: i64) -> DateTime<Utc> {
    let secs = if raw.to_string().len() == 10 {
        raw
    } else {
        raw / 1000
    };
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}
