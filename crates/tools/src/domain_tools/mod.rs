//! Domain Tools
//!
//! Construction answers built from the knowledge base.
//!
//! This module is organized into:
//! - `utils`: Loan arithmetic, WhatsApp links, label helpers
//! - `topics`: Sub-topic selection from the query text
//! - `generators`: One function per kind of answer

pub mod generators;
mod topics;
mod utils;

// Re-export utilities
pub use utils::{
    calculate_emi, calculate_total_interest, join_with_or, lakhs_label, months_label,
    whatsapp_link,
};

// Re-export topic selectors
pub use topics::{
    BrandFocus, ConsumptionMaterial, InteriorFocus, MaterialFocus, PhaseFocus, RoomFocus,
};
