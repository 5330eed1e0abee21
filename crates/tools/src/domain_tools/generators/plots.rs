//! Plot size answers

use construction_assistant_config::KnowledgeBase;
use construction_assistant_core::{format_inr, Reply};

/// Details and per-package estimate for a plot, or the full listing when unknown
pub fn plot_info(kb: &KnowledgeBase, label: &str) -> Reply {
    let Some(plot) = kb.plot(label) else {
        return all_plots(kb);
    };
    let buildable = kb.buildable_area(plot);

    let mut reply = Reply::builder()
        .heading(format!("📐 {} Plot Details:", plot.label))
        .blank()
        .field("Total Area", format!("{} sq.ft", plot.area))
        .field(
            "Buildable Area",
            format!(
                "~{} sq.ft ({}% coverage)",
                buildable,
                kb.coverage_percent()
            ),
        )
        .field("Suitable For", &plot.suitable)
        .field("Recommended Floors", &plot.floors)
        .blank()
        .heading("Estimated Construction:");

    for pkg in &kb.packages {
        reply = reply.bullet_field(&pkg.name, format_inr(pkg.cost_for(buildable)));
    }

    reply
        .blank()
        .tip("With G+1, you can build double the ground coverage area!")
        .build()
}

/// Every catalogued plot size
pub fn all_plots(kb: &KnowledgeBase) -> Reply {
    let mut reply = Reply::builder().heading("📐 Common Plot Sizes:").blank();

    for plot in &kb.plots {
        reply = reply
            .heading(format!("{} ({} sq.ft):", plot.label, plot.area))
            .bullet_field("Suitable for", &plot.suitable)
            .bullet(format!("Buildable: ~{} sq.ft", kb.buildable_area(plot)))
            .bullet_field("Floors", &plot.floors)
            .blank();
    }

    reply
        .tip("Plot size determines buildable area and BHK options. What's your plot size?")
        .build()
}
