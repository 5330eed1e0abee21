//! Material consumption answers

use construction_assistant_config::KnowledgeBase;
use construction_assistant_core::Reply;

use crate::domain_tools::topics::ConsumptionMaterial;

/// Consumption figures for a material; asks which one when none was named
pub fn material_consumption(kb: &KnowledgeBase, material: Option<ConsumptionMaterial>) -> Reply {
    let materials = &kb.materials;
    let Some(material) = material else {
        return Reply::text(
            "Please specify which material's consumption you'd like to know about: cement, steel, brick, or sand.",
        );
    };

    match material {
        ConsumptionMaterial::Cement => Reply::builder()
            .heading("🏗️ Cement Consumption:")
            .blank()
            .field("Average", &materials.cement.consumption)
            .field("Types Available", materials.cement.types.join(", "))
            .field("Storage", &materials.cement.storage)
            .blank()
            .heading("For 1000 sq.ft:")
            .bullets([
                "Foundation: ~80 bags",
                "Walls: ~120 bags",
                "Plastering: ~60 bags",
                "Flooring: ~40 bags",
            ])
            .heading("Total: ~300 bags")
            .blank()
            .tip("Actual consumption varies based on design and structure.")
            .build(),
        ConsumptionMaterial::Steel => Reply::builder()
            .heading("⚙️ Steel Consumption:")
            .blank()
            .field("Average", &materials.steel.consumption)
            .field("Grades", materials.steel.grades.join(", "))
            .field("Specification", &materials.steel.specifications)
            .blank()
            .heading("For 1000 sq.ft:")
            .bullets([
                "Foundation: ~800 kg",
                "Columns: ~1200 kg",
                "Beams & Slab: ~2000 kg",
            ])
            .heading("Total: ~4000 kg (4 tons)")
            .blank()
            .tip("More for multi-story buildings. We use ISI certified TMT bars only.")
            .build(),
        ConsumptionMaterial::Brick => {
            let bricks = &materials.bricks;
            let mut reply = Reply::builder()
                .heading("🧱 Brick Consumption:")
                .blank()
                .field("Average", &bricks.consumption)
                .heading("Types Available:");
            for kind in &bricks.types {
                reply = reply.bullet_field(&kind.name, &kind.detail);
            }
            reply = reply.blank().heading("Cost:");
            for cost in &bricks.costs {
                reply = reply.bullet_field(&cost.name, &cost.detail);
            }
            reply
                .blank()
                .tip("Wire cut bricks recommended for better finish.")
                .build()
        },
        ConsumptionMaterial::Sand => Reply::builder()
            .heading("🏖️ Sand Consumption:")
            .blank()
            .field("Average", &materials.sand.consumption)
            .field("Types", materials.sand.types.join(", "))
            .field("Quality Check", &materials.sand.quality)
            .blank()
            .heading("For 1000 sq.ft:")
            .bullets([
                "Total sand needed: ~2.5 tons",
                "M-Sand for concrete",
                "P-Sand for plastering",
            ])
            .blank()
            .tip("We use M-Sand (manufactured sand) for consistency and strength.")
            .build(),
    }
}

pub fn sand_aggregates(kb: &KnowledgeBase) -> Reply {
    let sand = &kb.materials.sand;
    let aggregates = &kb.materials.aggregates;

    Reply::builder()
        .heading("🪨 Sand & Aggregates:")
        .blank()
        .heading("Sand Types:")
        .bullets(&sand.types)
        .field("Consumption", &sand.consumption)
        .blank()
        .heading("Aggregates:")
        .field("Sizes", aggregates.sizes.join(", "))
        .field("Consumption", &aggregates.consumption)
        .field("Source", &aggregates.source)
        .blank()
        .tip("Quality of sand & aggregates directly affects concrete strength.")
        .build()
}
