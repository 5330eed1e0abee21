//! BHK configuration and multi-storey answers

use construction_assistant_config::{HouseConfiguration, KnowledgeBase};
use construction_assistant_core::{format_inr, Reply, ReplyBuilder};

fn range_label(min: u64, max: u64) -> String {
    format!("{} - {}", format_inr(min), format_inr(max))
}

/// Details for one configuration, or every configuration when the label is unknown
pub fn bhk_info(kb: &KnowledgeBase, label: &str) -> Reply {
    let Some(config) = kb.configuration(label) else {
        return all_bhk(kb);
    };

    let mut reply = Reply::builder()
        .heading(format!("🏠 {} House Configuration:", config.label))
        .blank()
        .heading("Area:")
        .bullet(format!("Minimum: {} sq.ft", config.min_area))
        .bullet(format!("Ideal: {} sq.ft", config.ideal_area))
        .blank()
        .heading("Rooms Included:")
        .line(&config.rooms)
        .blank()
        .heading("Suitable For:")
        .line(&config.suitable_for)
        .blank()
        .heading("Estimated Cost:");

    for pkg in &kb.packages {
        let range = config.cost_range_for(pkg);
        reply = reply.bullet_field(&pkg.name, range_label(range.min, range.max));
    }

    reply
        .blank()
        .tip("Final cost depends on plot size, customizations, and package selected.")
        .build()
}

/// Every configuration with its area band and starting price
pub fn all_bhk(kb: &KnowledgeBase) -> Reply {
    let mut reply = Reply::builder()
        .heading("🏘️ House Configurations Available:")
        .blank();

    for config in &kb.configurations {
        reply = reply
            .heading(format!("{}:", config.label))
            .bullet(format!(
                "Area: {}-{} sq.ft",
                config.min_area, config.ideal_area
            ))
            .bullet(&config.rooms)
            .bullet(format!(
                "Starting from {}",
                format_inr(config.cost_range.min)
            ))
            .blank();
    }

    reply
        .tip("Which configuration interests you? I can provide detailed cost breakdown.")
        .build()
}

fn comparison_block(
    reply: ReplyBuilder,
    label: &str,
    config: Option<&HouseConfiguration>,
) -> ReplyBuilder {
    match config {
        Some(config) => reply
            .heading(format!("{}:", config.label))
            .bullet(format!("Area: {} sq.ft", config.ideal_area))
            .bullet_field("Rooms", &config.rooms)
            .bullet_field(
                "Cost",
                range_label(config.cost_range.min, config.cost_range.max),
            )
            .bullet_field("Best for", &config.suitable_for),
        None => reply.line(format!("{}: Not available", label)),
    }
}

/// Side-by-side view of the requested configurations
///
/// Needs at least two labels; with fewer the full listing is returned.
pub fn bhk_comparison(kb: &KnowledgeBase, labels: &[String]) -> Reply {
    if labels.len() < 2 {
        return all_bhk(kb);
    }

    let mut reply = Reply::builder()
        .heading(format!("📊 Comparing {}:", labels.join(" vs ")))
        .blank();

    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            reply = reply.blank();
        }
        reply = comparison_block(reply, label, kb.configuration(label));
    }

    reply
        .blank()
        .tip("Need help choosing? Consider family size, future needs, and budget.")
        .build()
}

/// Duplex and villa construction overview
pub fn duplex_villa(kb: &KnowledgeBase) -> Reply {
    let (low, high) = rate_span(kb);

    Reply::builder()
        .heading("🏡 Duplex/Villa Construction:")
        .blank()
        .heading("Duplex (G+1):")
        .bullets([
            "Double the living space on same plot",
            "Ideal for 3BHK and above",
            "Better ventilation & natural light",
            "Separate floors for privacy",
        ])
        .bullet(format!("Cost: ~₹{}-{}/sq.ft per floor", low, high))
        .blank()
        .heading("Villa (G+2/G+3):")
        .bullets([
            "Maximum utilization of plot",
            "4BHK, 5BHK configurations",
            "Premium living experience",
            "Requires larger plot (1500+ sq.ft)",
            "Cost includes elevator option",
        ])
        .blank()
        .heading("Floor Options:")
        .bullets([
            "G+1: Ground + 1st floor",
            "G+2: Ground + 2 floors",
            "G+3: Ground + 3 floors",
        ])
        .blank()
        .heading("Additional Features:")
        .bullets([
            "Stilt parking (counts as G floor)",
            "Terrace garden",
            "Elevator installation: ₹8-12 lakhs",
        ])
        .blank()
        .tip("Multi-story construction requires structural design approval. We handle all permits!")
        .build()
}

/// Lowest and highest package rate
fn rate_span(kb: &KnowledgeBase) -> (u64, u64) {
    let rates = kb.packages.iter().map(|p| p.rate);
    let low = rates.clone().min().unwrap_or(0);
    let high = rates.max().unwrap_or(0);
    (low, high)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bhk_info_tier_ranges() {
        let kb = KnowledgeBase::builtin();
        let text = bhk_info(&kb, "3bhk").plain_text();

        assert!(text.starts_with("🏠 3BHK House Configuration:"));
        assert!(text.contains("• Minimum: 1200 sq.ft"));
        assert!(text.contains("• Ideal: 1500 sq.ft"));
        assert!(text.contains("• Standard Package: ₹25,20,000 - ₹37,50,000"));
        assert!(text.contains("• Premium Package: ₹27,59,400 - ₹41,06,250"));
        assert!(text.contains("• Luxury Package: ₹29,98,800 - ₹44,62,500"));
    }

    #[test]
    fn test_bhk_info_unknown_lists_all() {
        let kb = KnowledgeBase::builtin();
        let text = bhk_info(&kb, "9BHK").plain_text();
        assert!(text.starts_with("🏘️ House Configurations Available:"));
        for config in &kb.configurations {
            assert!(text.contains(&format!("{}:", config.label)));
        }
    }

    #[test]
    fn test_all_bhk_starting_prices() {
        let kb = KnowledgeBase::builtin();
        let text = all_bhk(&kb).to_markup();
        assert!(text.contains("**1BHK:**\n• Area: 450-600 sq.ft"));
        assert!(text.contains("• Starting from ₹9,45,000"));
        assert!(text.contains("• Starting from ₹52,50,000"));
    }

    #[test]
    fn test_bhk_comparison_two_labels() {
        let kb = KnowledgeBase::builtin();
        let labels = vec!["2BHK".to_string(), "3BHK".to_string()];
        let text = bhk_comparison(&kb, &labels).plain_text();

        assert!(text.starts_with("📊 Comparing 2BHK vs 3BHK:"));
        assert!(text.contains("• Area: 1000 sq.ft"));
        assert!(text.contains("• Area: 1500 sq.ft"));
        assert!(text.contains("• Cost: ₹16,80,000 - ₹25,00,000"));
        assert!(text.contains("• Best for: Medium to large families, comfortable living"));
    }

    #[test]
    fn test_bhk_comparison_unknown_label() {
        let kb = KnowledgeBase::builtin();
        let labels = vec!["2BHK".to_string(), "8BHK".to_string()];
        let text = bhk_comparison(&kb, &labels).plain_text();
        assert!(text.contains("8BHK: Not available"));
    }

    #[test]
    fn test_bhk_comparison_single_label_lists_all() {
        let kb = KnowledgeBase::builtin();
        let text = bhk_comparison(&kb, &["2BHK".to_string()]).plain_text();
        assert!(text.starts_with("🏘️ House Configurations Available:"));
    }

    #[test]
    fn test_duplex_rate_span() {
        let kb = KnowledgeBase::builtin();
        let text = duplex_villa(&kb).plain_text();
        assert!(text.contains("• Cost: ~₹2100-2500/sq.ft per floor"));
    }
}
