//! 数值格式化工具
//!
//! 报表中的百分比以文本输出，保留一位小数，0.5 向远离零的方向进位
//! （`6.25` → `"6.3"`），与前端历史报表保持一致。

/// 四舍五入到指定小数位
pub fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

/// 保留指定小数位并输出文本
pub fn to_fixed(value: f64, digits: u32) -> String {
    format!("{:.*}", digits as usize, round_to(value, digits))
}

/// 计算百分比，分母为 0 时返回 None
pub fn percentage(part: usize, total: usize) -> Option<f64> {
    (total > 0).then(|| part as f64 / total as f64 * 100.0)
}

/// 百分比文本，如 `"80.0%"`；分母为 0 时返回 None
pub fn format_percent(part: usize, total: usize) -> Option<String> {
    percentage(part, total).map(|p| format!("{}%", to_fixed(p, 1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_fixed_rounds_half_away_from_zero() {
        assert_eq!(to_fixed(6.25, 1), "6.3");
        assert_eq!(to_fixed(60.0, 1), "60.0");
        assert_eq!(to_fixed(100.0 / 3.0, 1), "33.3");
        assert_eq!(to_fixed(200.0 / 3.0, 1), "66.7");
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(4.256, 2), 4.26);
        assert_eq!(round_to(3.5, 0), 4.0);
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(4, 5).as_deref(), Some("80.0%"));
        assert_eq!(format_percent(0, 5).as_deref(), Some("0.0%"));
        assert_eq!(format_percent(3, 0), None);
    }
}
