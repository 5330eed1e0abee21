//! Package specifications and brand answers

use construction_assistant_config::{addon_ids, KnowledgeBase, Package};
use construction_assistant_core::{format_indian, format_inr, Reply, ReplyBuilder, Span};

use crate::domain_tools::topics::{BrandFocus, MaterialFocus};

/// All packages with their headline specifications
pub fn package_comparison(kb: &KnowledgeBase) -> Reply {
    let mut reply = Reply::builder().heading("📦 Package Comparison:").blank();

    for (idx, pkg) in kb.packages.iter().enumerate() {
        reply = reply
            .spans(vec![
                Span::strong(format!("{}. {}", idx + 1, pkg.name)),
                Span::plain(format!(" - {}/sq.ft", format_inr(pkg.rate))),
            ])
            .bullet_field("Cement", &pkg.cement)
            .bullet_field("Steel", &pkg.steel)
            .bullet_field("Flooring", &pkg.flooring)
            .bullet_field("Paint", &pkg.inner_paint)
            .blank();
    }

    reply
        .spans(vec![
            Span::plain("💡 "),
            Span::strong("Recommendation:"),
            Span::plain(
                " Premium package offers the best value for quality. Luxury package is ideal for high-end finishes.",
            ),
        ])
        .build()
}

fn per_package(
    mut reply: ReplyBuilder,
    kb: &KnowledgeBase,
    value: impl Fn(&Package) -> &str,
) -> ReplyBuilder {
    for pkg in &kb.packages {
        reply = reply.field(pkg.tier_name(), value(pkg));
    }
    reply
}

/// Specification answer for one material, or the package comparison
pub fn material_info(kb: &KnowledgeBase, focus: MaterialFocus) -> Reply {
    let materials = &kb.materials;
    match focus {
        MaterialFocus::Cement => {
            let reply = Reply::builder().heading("🏗️ Cement Options:").blank();
            per_package(reply, kb, |p| p.cement.as_str())
                .field("Preferred brands", materials.cement.premium_brands.join(", "))
                .blank()
                .tip("Tip: Premium cement reduces cracking and improves longevity.")
                .build()
        },
        MaterialFocus::Steel => {
            let reply = Reply::builder().heading("⚙️ Steel Options:").blank();
            per_package(reply, kb, |p| p.steel.as_str())
                .field("Grades", materials.steel.grades.join(", "))
                .blank()
                .tip("Tip: Never compromise on steel quality for structural safety.")
                .build()
        },
        MaterialFocus::Brick => {
            let reply = Reply::builder().heading("🧱 Brick Options:").blank();
            per_package(reply, kb, |p| p.brick.as_str())
                .blank()
                .tip("Wire cut bricks reduce plastering thickness and improve aesthetics.")
                .build()
        },
        MaterialFocus::Flooring => {
            let reply = Reply::builder().heading("🪵 Flooring Options:").blank();
            per_package(reply, kb, |p| p.flooring.as_str())
                .blank()
                .tip("Tip: Invest in good flooring for high-traffic areas like living room.")
                .build()
        },
        MaterialFocus::General => package_comparison(kb),
    }
}

/// Brand recommendations, redirected to a trade answer when one is named
pub fn brands(kb: &KnowledgeBase, focus: BrandFocus) -> Reply {
    match focus {
        BrandFocus::Electrical => electrical(kb),
        BrandFocus::Plumbing => plumbing(kb),
        BrandFocus::General => {
            let cement: Vec<&str> = kb
                .materials
                .cement
                .premium_brands
                .iter()
                .take(3)
                .map(String::as_str)
                .collect();
            let steel: Vec<&str> = kb
                .materials
                .steel
                .premium_brands
                .iter()
                .take(3)
                .map(String::as_str)
                .collect();

            Reply::builder()
                .heading("🌟 Top Brand Recommendations:")
                .blank()
                .field("Cement", cement.join(", "))
                .field("Steel", steel.join(", "))
                .field("Tiles", "Kajaria, Somany, Nitco")
                .field("Paint", "Asian Paints, Berger, Dulux")
                .field("Sanitaryware", "Parryware, Jaquar, Hindware")
                .field("Electrical", "Legrand, Havells, Anchor")
                .field("Plumbing", "Ashirvad, Finolex, Supreme")
                .blank()
                .tip("We use only ISI/ISO certified materials across all packages.")
                .build()
        },
    }
}

/// One heading per package followed by its highlight bullets
fn highlights(
    mut reply: ReplyBuilder,
    kb: &KnowledgeBase,
    select: impl Fn(&Package) -> &[String],
) -> ReplyBuilder {
    for pkg in &kb.packages {
        reply = reply
            .heading(format!("{}:", pkg.name))
            .bullets(select(pkg))
            .blank();
    }
    reply
}

pub fn electrical(kb: &KnowledgeBase) -> Reply {
    let reply = Reply::builder()
        .heading("⚡ Electrical Specifications:")
        .blank();
    highlights(reply, kb, |p| p.highlights.electrical.as_slice())
        .tip("All packages include proper earthing and safety measures as per IS standards.")
        .build()
}

pub fn plumbing(kb: &KnowledgeBase) -> Reply {
    let reply = Reply::builder()
        .heading("💧 Plumbing Specifications:")
        .blank();
    let mut reply = highlights(reply, kb, |p| p.highlights.plumbing.as_slice())
        .heading("Optional Add-ons:");

    if let Some(sump) = kb.additional_cost(addon_ids::UNDERGROUND_SUMP) {
        if let Some(litres) = sump.standard_quantity {
            reply = reply.bullet(format!("{}: {}L capacity", sump.name, format_indian(litres)));
        }
    }
    if let Some(tank) = kb.additional_cost(addon_ids::WASTE_WATER_TANK) {
        reply = reply.bullet(format!("{} ({})", tank.name, format_inr(tank.rate)));
    }

    reply
        .blank()
        .tip("Proper plumbing prevents future leakage issues.")
        .build()
}

/// Inner and outer paint per package; packages sharing an outer paint are grouped
pub fn painting(kb: &KnowledgeBase) -> Reply {
    let mut reply = Reply::builder()
        .heading("🎨 Painting Specifications:")
        .blank()
        .heading("Inner Painting:");

    for pkg in &kb.packages {
        reply = reply.bullet_field(pkg.tier_name(), &pkg.inner_paint);
    }

    reply = reply.blank().heading("Outer Painting:");
    let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();
    for pkg in &kb.packages {
        match groups
            .iter_mut()
            .find(|(paint, _)| paint.eq_ignore_ascii_case(&pkg.outer_paint))
        {
            Some((_, tiers)) => tiers.push(pkg.tier_name()),
            None => groups.push((pkg.outer_paint.as_str(), vec![pkg.tier_name()])),
        }
    }
    for (paint, tiers) in groups {
        reply = reply.bullet_field(tiers.join(" & "), paint);
    }

    reply
        .blank()
        .tip("Proper putty work ensures smooth finish and paint longevity. Premium paints offer better washability and color retention.")
        .build()
}

pub fn doors_windows(kb: &KnowledgeBase) -> Reply {
    let reply = Reply::builder().heading("🚪 Doors & Windows:").blank();
    highlights(reply, kb, |p| p.highlights.doors.as_slice())
        .tip("UPVC windows offer better insulation and are termite-proof. Teak doors add elegance and security.")
        .build()
}

pub fn flooring(kb: &KnowledgeBase) -> Reply {
    let reply = Reply::builder().heading("🪵 Flooring Options:").blank();
    highlights(reply, kb, |p| p.highlights.flooring.as_slice())
        .heading("Additional Options:")
        .bullets([
            "Granite: ₹100-150/sq.ft",
            "Marble: ₹150-300/sq.ft",
            "Wooden flooring: ₹200-400/sq.ft",
        ])
        .blank()
        .tip("Vitrified tiles are low maintenance. Granite/Marble recommended for living areas.")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_comparison_lists_tiers_in_order() {
        let kb = KnowledgeBase::builtin();
        let text = package_comparison(&kb).to_markup();

        let standard = text.find("**1. Standard Package** - ₹2,100/sq.ft").unwrap();
        let premium = text.find("**2. Premium Package** - ₹2,300/sq.ft").unwrap();
        let luxury = text.find("**3. Luxury Package** - ₹2,500/sq.ft").unwrap();
        assert!(standard < premium && premium < luxury);
        assert!(text.contains("• Steel: TATA, JSW"));
        assert!(text.contains("**Recommendation:**"));
    }

    #[test]
    fn test_material_focus() {
        let kb = KnowledgeBase::builtin();
        let cement = material_info(&kb, MaterialFocus::Cement).plain_text();
        assert!(cement.starts_with("🏗️ Cement Options:"));
        assert!(cement.contains("Standard: Jsw, Kcp, or equivalent"));
        assert!(cement.contains("Luxury: Ultratech, Ramco"));

        let bricks = material_info(&kb, MaterialFocus::Brick).plain_text();
        assert!(bricks.contains("Standard: Ordinary brick"));
        assert!(bricks.contains("Premium: Wire cut brick"));

        let general = material_info(&kb, MaterialFocus::General);
        assert_eq!(general, package_comparison(&kb));
    }

    #[test]
    fn test_brands_redirect() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(brands(&kb, BrandFocus::Electrical), electrical(&kb));
        assert_eq!(brands(&kb, BrandFocus::Plumbing), plumbing(&kb));

        let text = brands(&kb, BrandFocus::General).plain_text();
        assert!(text.contains("Cement: Ultratech, Ramco, ACC"));
        assert!(text.contains("Steel: TATA, JSW, Vizag"));
    }

    #[test]
    fn test_electrical_highlights() {
        let kb = KnowledgeBase::builtin();
        let text = electrical(&kb).to_markup();
        assert!(text.contains("**Standard Package:**\n• ISI Pipes, Anchor, Fybros switches"));
        assert!(text.contains("• Smart home ready wiring"));
    }

    #[test]
    fn test_plumbing_add_ons() {
        let kb = KnowledgeBase::builtin();
        let text = plumbing(&kb).plain_text();
        assert!(text.contains("• Underground Sump: 10,000L capacity"));
        assert!(text.contains("• 15-year warranty"));
    }

    #[test]
    fn test_painting_groups_shared_outer_paint() {
        let kb = KnowledgeBase::builtin();
        let text = painting(&kb).plain_text();
        assert!(text.contains("• Standard & Premium: Asian paints Ace Apex"));
        assert!(text.contains("• Luxury: Asian Paints Ace Ultima"));
        assert!(text.contains("• Luxury: 3 Coat putty, 1 coat primer (Royale paint)"));
    }

    #[test]
    fn test_flooring_extras() {
        let kb = KnowledgeBase::builtin();
        let text = flooring(&kb).plain_text();
        assert!(text.contains("• Tiles @₹90/sq.ft"));
        assert!(text.contains("• Marble: ₹150-300/sq.ft"));
    }
}
