//! Company, greeting and fallback answers

use construction_assistant_config::KnowledgeBase;
use construction_assistant_core::{CallToAction, Reply};

use crate::domain_tools::utils::whatsapp_link;

/// Label of the fallback call-to-action
pub const FALLBACK_CTA_LABEL: &str = "WhatsApp Owner";

const FALLBACK_TEXT: &str =
    "I don't have that information in my dataset. Please reach out on WhatsApp for a precise answer.";

pub fn company_info(kb: &KnowledgeBase) -> Reply {
    let company = &kb.company;
    let mut reply = Reply::builder()
        .heading(format!("🏢 {}", company.name))
        .blank()
        .heading("Contact:")
        .line(format!("📱 Mobile: {}", company.phone_display))
        .line(format!("👤 {}", company.engineer))
        .blank()
        .heading("Address:");
    for line in &company.address {
        reply = reply.line(line);
    }

    reply = reply
        .blank()
        .heading("Services:")
        .bullets(&company.services)
        .blank()
        .heading("Why Choose Us:");
    for strength in &company.strengths {
        reply = reply.line(format!("✓ {}", strength));
    }

    reply
        .blank()
        .tip("We handle everything from approvals to final handover!")
        .build()
}

/// Reply to a greeting: what the assistant can help with
pub fn greeting(kb: &KnowledgeBase) -> Reply {
    Reply::builder()
        .line(format!(
            "Hello! 👋 Welcome to {}. I'm here to help you build your dream home!",
            kb.company.short_name
        ))
        .blank()
        .line("I can assist you with:")
        .bullets([
            "💰 Cost estimates (by area or BHK)",
            "🏠 BHK configurations (1BHK to 5BHK)",
            "📐 Plot size recommendations",
            "🏗️ Construction timeline",
            "🎨 Materials & specifications",
            "📋 Documentation & approvals",
        ])
        .blank()
        .line("How can I help you today?")
        .build()
}

/// First assistant message of a new session
pub fn welcome(kb: &KnowledgeBase) -> Reply {
    Reply::builder()
        .line(format!(
            "Hello! I'm your {}. I can help you with:",
            kb.company.assistant_name
        ))
        .blank()
        .bullets([
            "Cost calculations for different packages",
            "Material recommendations and specifications",
            "Construction duration estimates",
            "Quality and brand suggestions",
            "Project planning advice",
        ])
        .blank()
        .line("How can I assist you today?")
        .build()
}

/// Apology with a single WhatsApp call-to-action
pub fn contact_fallback(kb: &KnowledgeBase) -> Reply {
    let company = &kb.company;
    Reply::builder()
        .line(FALLBACK_TEXT)
        .cta(CallToAction::new(
            FALLBACK_CTA_LABEL,
            whatsapp_link(&company.whatsapp_number, &company.whatsapp_inquiry),
        ))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_has_one_whatsapp_cta() {
        let kb = KnowledgeBase::builtin();
        let reply = contact_fallback(&kb);

        assert_eq!(reply.plain_text(), FALLBACK_TEXT);
        assert_eq!(reply.cta.len(), 1);
        assert_eq!(reply.cta[0].label, "WhatsApp Owner");
        assert_eq!(
            reply.cta[0].href,
            "https://wa.me/916374507535?text=Hi%21%20I%20have%20a%20question%20about%20construction."
        );
    }

    #[test]
    fn test_welcome_text() {
        let kb = KnowledgeBase::builtin();
        let text = welcome(&kb).to_markup();
        assert!(text.starts_with(
            "Hello! I'm your Adithya Construction Assistant. I can help you with:\n\n• Cost calculations"
        ));
        assert!(text.ends_with("How can I assist you today?"));
    }

    #[test]
    fn test_greeting_text() {
        let kb = KnowledgeBase::builtin();
        let text = greeting(&kb).plain_text();
        assert!(text.starts_with("Hello! 👋 Welcome to Adithya Constructions."));
        assert!(text.contains("• 📐 Plot size recommendations"));
    }

    #[test]
    fn test_company_info() {
        let kb = KnowledgeBase::builtin();
        let text = company_info(&kb).plain_text();
        assert!(text.starts_with("🏢 Adithya Constructions & Architects"));
        assert!(text.contains("📱 Mobile: 63745 07535"));
        assert!(text.contains("2F Gujjans Arudra, Perur Main Road\nTelugupalayam, CBE 641 010"));
        assert!(text.contains("✓ Transparent pricing"));
        assert!(company_info(&kb).cta.is_empty());
    }
}
