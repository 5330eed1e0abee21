//! Response generators
//!
//! Pure functions from the knowledge base (plus extracted parameters) to a
//! [`Reply`](construction_assistant_core::Reply). None of them fail: unknown
//! lookups fall back to the broader listing.

mod configurations;
mod contact;
mod estimates;
mod finance;
mod guidance;
mod materials;
mod packages;
mod plots;

pub use configurations::{all_bhk, bhk_comparison, bhk_info, duplex_villa};
pub use contact::{company_info, contact_fallback, greeting, welcome, FALLBACK_CTA_LABEL};
pub use estimates::{
    bhk_cost_estimate, compound_wall_estimate, cost_by_area, cost_prompt, duration_estimate,
    duration_prompt, invalid_bhk_prompt,
};
pub use finance::{emi_table, loan_info};
pub use guidance::{
    approvals, energy, interior, maintenance, parking, phases, room_sizes, smart_home,
    stilt_basement, vastu, warranty,
};
pub use materials::{material_consumption, sand_aggregates};
pub use packages::{
    brands, doors_windows, electrical, flooring, material_info, package_comparison, painting,
    plumbing,
};
pub use plots::{all_plots, plot_info};
