use chrono::{DateTime, Utc};

/// 解析 TTL 字符串为秒数，支持：
/// - 纯数字（按秒）：30, 0.05
/// - 带单位：30s, 15m, 2h, 1d, 1w
/// - 组合格式：1h30m, 1d12h, 0.5h
pub fn parse_ttl(input: &str) -> Result<f64, String> {
    let input = input.trim();

    if input.is_empty() {
        return Err("TTL cannot be empty".to_string());
    }

    if let Ok(secs) = input.parse::<f64>() {
        return ensure_positive(secs, input);
    }

    let mut total = 0.0;
    let mut remaining = input;

    while !remaining.is_empty() {
        // 提取数字
        let num_len = remaining
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(remaining.len());
        if num_len == 0 {
            return Err(format!("Invalid TTL format: '{}'", input));
        }
        let num_str = &remaining[..num_len];
        let num: f64 = num_str
            .parse()
            .map_err(|_| format!("Invalid number: '{}'", num_str))?;
        remaining = &remaining[num_len..];

        // 提取单位
        let unit_len = remaining
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(remaining.len());
        if unit_len == 0 {
            return Err(format!("Missing time unit after '{}'", num_str));
        }
        let unit = &remaining[..unit_len];
        let factor = match unit.to_ascii_lowercase().as_str() {
            "s" | "sec" | "secs" | "second" | "seconds" => 1.0,
            "m" | "min" | "mins" | "minute" | "minutes" => 60.0,
            "h" | "hr" | "hour" | "hours" => 3600.0,
            "d" | "day" | "days" => 86_400.0,
            "w" | "week" | "weeks" => 604_800.0,
            _ => return Err(format!("Unsupported time unit: '{}'", unit)),
        };

        total += num * factor;
        remaining = &remaining[unit_len..];
    }

    ensure_positive(total, input)
}

fn ensure_positive(secs: f64, input: &str) -> Result<f64, String> {
    if secs.is_finite() && secs > 0.0 {
        Ok(secs)
    } else {
        Err(format!("TTL must be a positive duration: '{}'", input))
    }
}

/// 格式化剩余时间为人类可读的字符串
pub fn format_remaining(from: DateTime<Utc>, to: DateTime<Utc>) -> String {
    let secs = to.signed_duration_since(from).num_seconds();

    if secs < 0 {
        return "expired".to_string();
    }

    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3600;
    let minutes = (secs % 3600) / 60;

    match (days, hours, minutes) {
        (d, 0, _) if d > 0 => format!("{}d", d),
        (d, h, _) if d > 0 => format!("{}d {}h", d, h),
        (_, h, 0) if h > 0 => format!("{}h", h),
        (_, h, m) if h > 0 => format!("{}h {}m", h, m),
        (_, _, m) if m > 0 => format!("{}m", m),
        _ => format!("{}s", secs),
    }
}
