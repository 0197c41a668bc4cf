//! Text formatting helpers shared by forecast labels and insight sentences

/// Signed percentage change from `old` to `new`, one decimal place
///
/// A zero base cannot produce a ratio, so it maps to "+100%" when the new
/// value is positive and "0%" otherwise.
pub fn percentage_change(old: f64, new: f64) -> String {
    if old == 0.0 {
        return if new > 0.0 {
            "+100%".to_string()
        } else {
            "0%".to_string()
        };
    }
    let change = (new - old) / old * 100.0;
    let sign = if change >= 0.0 { "+" } else { "" };
    format!("{}{:.1}%", sign, change)
}

/// Round to a whole amount and group digits the en-IN way (12,34,567)
pub fn group_digits(amount: f64) -> String {
    let rounded = amount.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(2);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    };

    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Currency display: symbol followed by the grouped whole amount
pub fn format_currency(symbol: &str, amount: f64) -> String {
    let grouped = group_digits(amount);
    match grouped.strip_prefix('-') {
        Some(rest) => format!("-{}{}", symbol, rest),
        None => format!("{}{}", symbol, grouped),
    }
}
