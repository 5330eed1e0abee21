//! Shared helpers for the response generators
//!
//! Loan arithmetic, WhatsApp deep links and small text helpers.

/// Calculate EMI using the standard amortization formula
///
/// EMI = P × r × (1 + r)^n / [(1 + r)^n - 1]
///
/// Where:
/// - P = Principal loan amount
/// - r = Monthly interest rate (annual_rate / 12 / 100)
/// - n = Number of months (tenure)
pub fn calculate_emi(principal: f64, annual_rate_percent: f64, tenure_months: i64) -> f64 {
    if tenure_months <= 0 || principal <= 0.0 {
        return 0.0;
    }

    let monthly_rate = annual_rate_percent / 100.0 / 12.0;

    if monthly_rate <= 0.0 {
        return principal / tenure_months as f64;
    }

    let n = tenure_months as f64;
    let one_plus_r_n = (1.0 + monthly_rate).powf(n);

    principal * monthly_rate * one_plus_r_n / (one_plus_r_n - 1.0)
}

/// Calculate total interest paid over the loan tenure
pub fn calculate_total_interest(
    principal: f64,
    annual_rate_percent: f64,
    tenure_months: i64,
) -> f64 {
    let emi = calculate_emi(principal, annual_rate_percent, tenure_months);
    let total_paid = emi * tenure_months as f64;
    total_paid - principal
}

/// `https://wa.me/<number>?text=<percent-encoded message>`
pub fn whatsapp_link(number: &str, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        number.trim_start_matches('+'),
        urlencoding::encode(message)
    )
}

/// `1 month`, `7 months`
pub fn months_label(months: u32) -> String {
    if months == 1 {
        "1 month".to_string()
    } else {
        format!("{} months", months)
    }
}

/// `a`, `a or b`, `a, b, or c`
pub fn join_with_or(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [a, b] => format!("{} or {}", a, b),
        [rest @ .., last] => format!("{}, or {}", rest.join(", "), last),
    }
}

/// Rupee amount in lakhs for prose, e.g. `30 lakhs`, `12.5 lakhs`
pub fn lakhs_label(rupees: u64) -> String {
    let lakhs = format!("{:.2}", rupees as f64 / 100_000.0);
    let lakhs = lakhs.trim_end_matches('0').trim_end_matches('.');
    format!("{} lakhs", lakhs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_emi() {
        // 1 lakh at 12% for 12 months
        let emi = calculate_emi(100_000.0, 12.0, 12);
        assert!((emi - 8884.87).abs() < 1.0);
    }

    #[test]
    fn test_home_loan_emi() {
        // 30 lakh over 20 years
        let at_8_5 = calculate_emi(3_000_000.0, 8.5, 240);
        let at_9 = calculate_emi(3_000_000.0, 9.0, 240);
        assert!((at_8_5 - 26035.0).abs() < 5.0);
        assert!((at_9 - 26992.0).abs() < 5.0);
    }

    #[test]
    fn test_calculate_emi_zero_principal() {
        assert_eq!(calculate_emi(0.0, 12.0, 12), 0.0);
    }

    #[test]
    fn test_calculate_emi_zero_tenure() {
        assert_eq!(calculate_emi(100_000.0, 12.0, 0), 0.0);
    }

    #[test]
    fn test_calculate_emi_zero_rate() {
        let emi = calculate_emi(100_000.0, 0.0, 12);
        assert!((emi - 8333.33).abs() < 1.0);
    }

    #[test]
    fn test_total_interest() {
        let interest = calculate_total_interest(100_000.0, 12.0, 12);
        assert!((interest - 6618.44).abs() < 1.0);
    }

    #[test]
    fn test_whatsapp_link_encodes_message() {
        assert_eq!(
            whatsapp_link("916374507535", "Hi! I have a question about construction."),
            "https://wa.me/916374507535?text=Hi%21%20I%20have%20a%20question%20about%20construction."
        );
        assert!(whatsapp_link("+91123", "x").starts_with("https://wa.me/91123?"));
    }

    #[test]
    fn test_join_with_or() {
        assert_eq!(join_with_or(&["1BHK"]), "1BHK");
        assert_eq!(join_with_or(&["1BHK", "2BHK"]), "1BHK or 2BHK");
        assert_eq!(join_with_or(&["1BHK", "2BHK", "3BHK"]), "1BHK, 2BHK, or 3BHK");
    }

    #[test]
    fn test_labels() {
        assert_eq!(months_label(1), "1 month");
        assert_eq!(months_label(9), "9 months");
        assert_eq!(lakhs_label(3_000_000), "30 lakhs");
        assert_eq!(lakhs_label(1_250_000), "12.5 lakhs");
    }
}
