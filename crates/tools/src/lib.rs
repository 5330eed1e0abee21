//! Response generators for the construction assistant
//!
//! Every answer the assistant can give is a function in
//! [`domain_tools::generators`]. Generators read the shared
//! [`KnowledgeBase`](construction_assistant_config::KnowledgeBase) and return a
//! structured [`Reply`](construction_assistant_core::Reply); rendering to
//! message markup happens later.

pub mod domain_tools;

pub use domain_tools::generators;
pub use domain_tools::{
    calculate_emi, calculate_total_interest, whatsapp_link, BrandFocus, ConsumptionMaterial,
    InteriorFocus, MaterialFocus, PhaseFocus, RoomFocus,
};
