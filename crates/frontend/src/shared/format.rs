//! 숫자/금액 표시 포맷
//!
//! ko-KR grouping: comma every three digits, no decimal places.

/// 천 단위 구분 쉼표
///
/// # Examples
///
/// ```
/// use frontend::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1,234,567");
/// ```
pub fn format_number(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut grouped = String::new();

    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if n < 0 {
        grouped.push('-');
    }
    grouped.chars().rev().collect()
}

/// 원화 표시 (`₩1,234,567`)
pub fn format_won(n: i64) -> String {
    format!("₩{}", format_number(n))
}

/// 단가 표시 — 소수부가 있으면 그대로 유지한다 (최대 3자리)
///
/// ko-KR `Intl.NumberFormat` defaults: grouped thousands, up to three
/// fraction digits, trailing zeros dropped. `120.5` stays `"120.5"`.
pub fn format_price(value: f64) -> String {
    let scaled = (value * 1000.0).round() as i64;
    let int_part = scaled / 1000;
    let frac = (scaled % 1000).abs();

    if frac == 0 {
        format_number(int_part)
    } else {
        let frac_digits = format!("{:03}", frac);
        format!(
            "{}.{}",
            format_number(int_part),
            frac_digits.trim_end_matches('0')
        )
    }
}
