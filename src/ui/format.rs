//! Number formatting for display

/// en-US grouping with up to three fraction digits, trailing zeros dropped
pub fn group_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let scaled = (value.abs() * 1000.0).round() as u64;
    let whole = scaled / 1000;
    let frac = scaled % 1000;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if frac > 0 {
        let frac = format!("{:03}", frac);
        grouped.push('.');
        grouped.push_str(frac.trim_end_matches('0'));
    }

    if value < 0.0 && scaled > 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Salary as shown in the UI, e.g. `$120,000`
pub fn currency(value: f64) -> String {
    format!("${}", group_number(value))
}

/// Whole-dollar salary for chart labels, e.g. `$98,765`
pub fn currency_whole(value: f64) -> String {
    currency(value.round())
}
