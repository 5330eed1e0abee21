//! Cost, duration and add-on estimates

use construction_assistant_config::{addon_ids, KnowledgeBase};
use construction_assistant_core::{format_indian, format_inr, Reply, Span};
use construction_assistant_text_processing::PlotDimensions;

use crate::domain_tools::utils::{join_with_or, months_label};

/// Per-package totals for a built-up area
pub fn cost_by_area(kb: &KnowledgeBase, area_sqft: u64) -> Reply {
    let mut reply = Reply::builder()
        .heading(format!("📊 Cost Estimate for {} sq.ft:", area_sqft))
        .blank();

    for pkg in &kb.packages {
        reply = reply
            .spans(vec![
                Span::strong(pkg.name.as_str()),
                Span::plain(format!(": {}", format_inr(pkg.cost_for(area_sqft)))),
            ])
            .line(format!("({}/sq.ft)", format_inr(pkg.rate)))
            .blank();
    }

    reply = reply.heading("Additional Options:");
    if let Some(parking) = kb.additional_cost(addon_ids::CAR_PARKING) {
        reply = reply.bullet_field(&parking.name, format_inr(parking.cost_for(area_sqft)));
    }
    if let Some(sump) = kb.additional_cost(addon_ids::UNDERGROUND_SUMP) {
        if let (Some(cost), Some(litres)) = (sump.standard_cost(), sump.standard_quantity) {
            reply = reply.bullet_field(
                &sump.name,
                format!("~{} (for {}L)", format_inr(cost), format_indian(litres)),
            );
        }
    }

    reply
        .blank()
        .tip("These are base estimates. Would you like details about any specific package?")
        .build()
}

/// Shown when a cost question names an unknown BHK type
pub fn invalid_bhk_prompt(kb: &KnowledgeBase) -> Reply {
    let labels: Vec<&str> = kb.configurations.iter().map(|c| c.label.as_str()).collect();
    Reply::text(format!(
        "Please specify a valid BHK type ({}).",
        join_with_or(&labels)
    ))
}

/// Per-package totals for a BHK configuration at its ideal area
///
/// Unknown labels get [`invalid_bhk_prompt`].
pub fn bhk_cost_estimate(kb: &KnowledgeBase, label: &str) -> Reply {
    let Some(config) = kb.configuration(label) else {
        return invalid_bhk_prompt(kb);
    };
    let area = config.ideal_area;

    let mut reply = Reply::builder()
        .heading(format!(
            "💰 {} Cost Estimate ({} sq.ft):",
            config.label, area
        ))
        .blank()
        .heading("Package-wise Costs:")
        .blank();

    for pkg in &kb.packages {
        let range = config.cost_range_for(pkg);
        reply = reply
            .spans(vec![
                Span::strong(pkg.name.as_str()),
                Span::plain(format!(" ({}/sq.ft):", format_inr(pkg.rate))),
            ])
            .line(format_inr(pkg.cost_for(area)))
            .line(format!(
                "Typical range: {} - {}",
                format_inr(range.min),
                format_inr(range.max)
            ))
            .blank();
    }

    reply = reply.heading("Additional Options:");
    if let Some(parking) = kb.additional_cost(addon_ids::CAR_PARKING) {
        reply = reply.bullet_field(&parking.name, format_inr(parking.cost_for(area)));
    }
    for id in [addon_ids::UNDERGROUND_SUMP, addon_ids::COMPOUND_WALL] {
        if let Some((addon, cost)) = kb
            .additional_cost(id)
            .and_then(|a| a.standard_cost().map(|c| (a, c)))
        {
            reply = reply.bullet_field(&addon.name, format_inr(cost));
        }
    }

    reply
        .blank()
        .tip(format!("Includes: {}", config.rooms))
        .build()
}

/// Asks for the missing input of a cost question
pub fn cost_prompt() -> Reply {
    Reply::builder()
        .line("I can help you calculate construction costs! Please provide:")
        .bullet("Square footage (e.g., 'Calculate cost for 1500 sq.ft')")
        .bullet("Or BHK type (e.g., 'Cost for 3BHK')")
        .bullet("Or plot size (e.g., 'Cost for 30x40 plot')")
        .build()
}

/// Total duration and stage breakdown for a built-up area
pub fn duration_estimate(kb: &KnowledgeBase, area_sqft: u64) -> Reply {
    let months = kb.timeline.months_for(area_sqft);

    let mut reply = Reply::builder()
        .heading(format!("🗓️ Estimated Timeline for {} sq.ft:", area_sqft))
        .blank()
        .field("Total Duration", months_label(months))
        .blank()
        .heading("Phase Breakdown:");

    for (label, stage_months) in kb.timeline.breakdown(months) {
        reply = reply.bullet_field(label, months_label(stage_months));
    }

    reply
        .blank()
        .tip("Timeline may vary based on weather, material availability, and design complexity.")
        .build()
}

/// Duration answer when neither an area nor a known BHK was given
pub fn duration_prompt() -> Reply {
    Reply::builder()
        .line("Construction duration depends on the plot size. Typically:")
        .bullet("Up to 1000 sq.ft: 6-8 months")
        .bullet("1000-2000 sq.ft: 8-12 months")
        .bullet("2000-3000 sq.ft: 12-15 months")
        .blank()
        .line("What's your plot size or BHK requirement?")
        .build()
}

/// Compound wall cost for a plot perimeter, or the standard example
pub fn compound_wall_estimate(kb: &KnowledgeBase, plot: Option<&PlotDimensions>) -> Reply {
    let Some(wall) = kb.additional_cost(addon_ids::COMPOUND_WALL) else {
        return Reply::text(
            "Compound wall pricing depends on height and finish. Please reach out to us for a quote.",
        );
    };
    let unit = wall.unit.as_str();

    let reply = Reply::builder().heading("🧱 Compound Wall Estimate:").blank();

    let reply = match plot {
        Some(dims) => {
            let perimeter = dims.perimeter();
            reply
                .field("Plot", format!("{} ft", dims.label()))
                .field("Perimeter", format!("{} {}", perimeter, unit))
                .field(
                    "Estimated Cost",
                    format!(
                        "{} ({}/{})",
                        format_inr(wall.cost_for(perimeter)),
                        format_inr(wall.rate),
                        unit
                    ),
                )
        },
        None => {
            let mut reply =
                reply.line(format!("Priced at {} per {}.", format_inr(wall.rate), unit));
            if let (Some(qty), Some(cost)) = (wall.standard_quantity, wall.standard_cost()) {
                reply = reply.field(format!("Typical plot ({} {})", qty, unit), format_inr(cost));
            }
            reply.tip("Share your plot dimensions (e.g. 30x40) for an exact figure.")
        },
    };

    reply.build()
}
