//! Indian rupee formatting (en-IN digit grouping)

/// Group digits the Indian way: last three, then pairs.
///
/// `3150000` becomes `31,50,000`.
pub fn format_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

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
}

/// Rupee amount with the `₹` sign and Indian grouping
pub fn format_inr(value: u64) -> String {
    format!("₹{}", format_indian(value))
}

/// Round a non-negative amount to the nearest rupee
pub fn round_rupees(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}
