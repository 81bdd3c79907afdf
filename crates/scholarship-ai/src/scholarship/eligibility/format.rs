use crate::scholarship::domain::ProfileField;

/// Render an observed profile value for a reason string.
///
/// Values use the field's usual precision unless rounding would land on or
/// across `threshold`; then the exact value is shown so the comparison stays
/// visible (`3.499`, not `3.50`, against `≥3.5`).
pub(crate) fn observed(field: ProfileField, value: f64, threshold: f64) -> String {
    let rounded = match field {
        ProfileField::Cgpa => format!("{value:.2}"),
        _ => format!("{value:.0}"),
    };
    let keeps_side = rounded
        .parse::<f64>()
        .map(|shown| shown.partial_cmp(&threshold) == value.partial_cmp(&threshold))
        .unwrap_or(false);

    let text = if keeps_side { rounded } else { value.to_string() };
    match field {
        ProfileField::FamilyIncome => group_thousands(&text),
        _ => text,
    }
}

/// Render a rule threshold; CGPA keeps at least one decimal (`3.0`, `3.5`).
pub(crate) fn threshold(field: ProfileField, value: f64) -> String {
    match field {
        ProfileField::Cgpa => trim_decimals(value),
        ProfileField::FamilyIncome => group_thousands(&value.to_string()),
        _ => value.to_string(),
    }
}

/// Insert thousands separators into the integer part of a rendered number.
pub(crate) fn group_thousands(rendered: &str) -> String {
    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered),
    };
    let (digits, fraction) = match unsigned.split_once('.') {
        Some((digits, fraction)) => (digits, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(rendered.len() + digits.len() / 3);
    grouped.push_str(sign);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

fn trim_decimals(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{trimmed}0")
    } else {
        trimmed.to_string()
    }
}
