//! Text processing for the construction assistant
//!
//! This crate provides the deterministic text handling around the intent
//! cascade:
//! - **Area normalization**: `1,500 sq.ft`, `1500 square feet`, Tamil units
//! - **Entity extraction**: BHK tokens, plot dimensions, lakh/crore amounts
//! - **Indic numerals**: digits from Indian scripts mapped to ASCII
//! - **Message formatting**: markup to bold/numeric display segments

pub mod area;
pub mod entities;
pub mod formatter;
pub mod numerals;

pub use area::{extract_area, extract_area_with_unit, Area, AreaUnit};
pub use entities::{EntityExtractor, ExtractedEntities, PlotDimensions};
pub use formatter::{FormattedMessage, MessageFormatter, Segment, SegmentStyle};
pub use numerals::{indic_numerals_to_ascii, is_indic_numeral};
