//! Home loan answers

use construction_assistant_config::KnowledgeBase;
use construction_assistant_core::{format_inr, round_rupees, Reply, ReplyBuilder};

use crate::domain_tools::utils::{calculate_emi, calculate_total_interest, lakhs_label};

/// `• @8.5%: ~₹26,035/month` for each configured rate
fn emi_lines(
    mut reply: ReplyBuilder,
    kb: &KnowledgeBase,
    principal: u64,
    tenure_months: i64,
) -> ReplyBuilder {
    for rate in &kb.loans.rates_percent {
        let emi = round_rupees(calculate_emi(principal as f64, *rate, tenure_months));
        reply = reply.bullet(format!("@{:.1}%: ~{}/month", rate, format_inr(emi)));
    }
    reply
}

fn rate_band(kb: &KnowledgeBase) -> String {
    let rates = &kb.loans.rates_percent;
    let low = rates.iter().copied().fold(f64::INFINITY, f64::min);
    let high = rates.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if rates.is_empty() {
        String::new()
    } else {
        format!("~{}-{}% p.a.", low, high)
    }
}

/// General loan guidance with a worked EMI example
pub fn loan_info(kb: &KnowledgeBase) -> Reply {
    let loans = &kb.loans;
    let tenure_months = i64::from(loans.default_tenure_years) * 12;

    let reply = Reply::builder()
        .heading("💳 Home Loan Assistance:")
        .blank()
        .heading("We Help With:")
        .bullets([
            "Documentation preparation",
            "Bank liaison",
            "Loan application process",
            "Property valuation coordination",
        ])
        .blank()
        .heading("Loan Eligibility:")
        .bullets([
            "Typically 80-90% of property value",
            "Depends on income & credit score",
            "Construction loans released in stages",
        ])
        .blank()
        .heading("Popular Banks:")
        .bullets(&loans.banks)
        .blank()
        .field("Current Rates", rate_band(kb))
        .blank()
        .heading("Documents Required:")
        .bullets([
            "Income proof (salary slips/ITR)",
            "Property documents",
            "ID & address proof",
            "Bank statements (6 months)",
            "Building plan approval",
        ])
        .blank()
        .heading(format!(
            "EMI Example (₹{}, {} years):",
            lakhs_label(loans.example_principal),
            loans.default_tenure_years
        ));

    emi_lines(reply, kb, loans.example_principal, tenure_months)
        .blank()
        .tip("We work with loan consultants for faster processing!")
        .build()
}

/// EMI at each configured rate for a principal; tenure defaults to the guide's
pub fn emi_table(kb: &KnowledgeBase, principal: u64, tenure_years: Option<u32>) -> Reply {
    let years = tenure_years.unwrap_or(kb.loans.default_tenure_years);
    let tenure_months = i64::from(years) * 12;

    let reply = Reply::builder()
        .heading(format!(
            "💳 EMI Estimate for {} over {} years:",
            format_inr(principal),
            years
        ))
        .blank();

    let mut reply = emi_lines(reply, kb, principal, tenure_months).blank();

    if let Some(rate) = kb.loans.rates_percent.first() {
        let interest =
            round_rupees(calculate_total_interest(principal as f64, *rate, tenure_months));
        reply = reply.field(
            format!("Total interest @{:.1}%", rate),
            format_inr(interest),
        );
    }

    reply
        .blank()
        .tip("Actual EMI depends on the bank's sanctioned rate. We can help with the loan paperwork.")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loan_info_worked_example() {
        let kb = KnowledgeBase::builtin();
        let text = loan_info(&kb).plain_text();

        assert!(text.contains("EMI Example (₹30 lakhs, 20 years):"));
        assert!(text.contains("• @8.5%: ~₹26,03"));
        assert!(text.contains("• @9.0%: ~₹26,99"));
        assert!(text.contains("• @9.5%: ~₹27,96"));
        assert!(text.contains("Current Rates: ~8.5-9.5% p.a."));
        assert!(text.contains("• LIC Housing Finance"));
    }

    #[test]
    fn test_emi_table_default_tenure() {
        let kb = KnowledgeBase::builtin();
        let text = emi_table(&kb, 2_500_000, None).plain_text();
        assert!(text.starts_with("💳 EMI Estimate for ₹25,00,000 over 20 years:"));
        assert_eq!(text.matches("/month").count(), 3);
        assert!(text.contains("Total interest @8.5%"));
    }

    #[test]
    fn test_emi_table_shorter_tenure_raises_emi() {
        let kb = KnowledgeBase::builtin();
        let long = calculate_emi(2_500_000.0, 8.5, 240);
        let short = calculate_emi(2_500_000.0, 8.5, 120);
        assert!(short > long);

        let text = emi_table(&kb, 2_500_000, Some(10)).plain_text();
        assert!(text.contains("over 10 years"));
        assert!(text.contains(&format!("~{}/month", format_inr(round_rupees(short)))));
    }
}
