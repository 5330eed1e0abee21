//! Entity extraction for construction queries
//!
//! Extracts the parameters response generators need:
//! - BHK configuration tokens (`3bhk`, `2 BHK`)
//! - Plot dimensions (`30x40`, `30 X 40`)
//! - Loan amounts with regional units (lakh/crore)
//! - Loan tenures (years)
//!
//! # Example
//!
//! ```
//! use construction_assistant_text_processing::entities::EntityExtractor;
//!
//! let entities = EntityExtractor::new().extract("compare 2bhk vs 3 BHK on a 30x40 plot");
//! assert_eq!(entities.bhk_labels, vec!["2BHK", "3BHK"]);
//! assert_eq!(entities.plot.unwrap().label(), "30x40");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::area::extract_area;
use crate::numerals::indic_numerals_to_ascii;

/// Plot dimensions in feet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotDimensions {
    pub width: u32,
    pub depth: u32,
}

impl PlotDimensions {
    /// Canonical label, e.g. `30x40`
    pub fn label(&self) -> String {
        format!("{}x{}", self.width, self.depth)
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.depth)
    }

    /// Boundary length in running feet
    pub fn perimeter(&self) -> u64 {
        2 * (u64::from(self.width) + u64::from(self.depth))
    }
}

/// Everything extracted from one query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedEntities {
    /// Built-up area in sq.ft
    pub area: Option<u64>,
    /// BHK tokens in order of appearance, normalised to `NBHK`
    pub bhk_labels: Vec<String>,
    pub plot: Option<PlotDimensions>,
    /// Loan amount in rupees
    pub amount: Option<u64>,
    pub tenure_years: Option<u32>,
}

impl ExtractedEntities {
    pub fn is_empty(&self) -> bool {
        self.area.is_none()
            && self.bhk_labels.is_empty()
            && self.plot.is_none()
            && self.amount.is_none()
            && self.tenure_years.is_none()
    }

    /// First BHK token, if any
    pub fn first_bhk(&self) -> Option<&str> {
        self.bhk_labels.first().map(String::as_str)
    }
}

static BHK_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d+)\s*bhk").unwrap());

static PLOT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s*x\s*(\d+)").unwrap());

// `l` and `cr` only count as units when they stand alone
static AMOUNT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(lakhs?|lacs?|l\b|crores?|cr\b)").unwrap()
});

static RUPEE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:rs\.?|rupees|₹|inr)\s*(\d[\d,]*)").unwrap()
});

static TENURE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s*(?:years?|yrs?)\b").unwrap());

const LAKH: f64 = 100_000.0;
const CRORE: f64 = 10_000_000.0;

/// Extractor for construction query entities
#[derive(Debug, Default, Clone)]
pub struct EntityExtractor;

impl EntityExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract all entities from text
    pub fn extract(&self, text: &str) -> ExtractedEntities {
        let text = indic_numerals_to_ascii(text);
        ExtractedEntities {
            area: extract_area(&text),
            bhk_labels: self.extract_bhk_labels(&text),
            plot: self.extract_plot(&text),
            amount: self.extract_amount(&text),
            tenure_years: self.extract_tenure_years(&text),
        }
    }

    /// All `N bhk` tokens as canonical `NBHK` labels
    pub fn extract_bhk_labels(&self, text: &str) -> Vec<String> {
        BHK_PATTERN
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|n| format!("{}BHK", n.as_str()))
            .collect()
    }

    /// First `W x D` pair
    pub fn extract_plot(&self, text: &str) -> Option<PlotDimensions> {
        let caps = PLOT_PATTERN.captures(text)?;
        let width = caps.get(1)?.as_str().parse().ok()?;
        let depth = caps.get(2)?.as_str().parse().ok()?;
        Some(PlotDimensions { width, depth })
    }

    /// Rupee amount from `30 lakh`, `1.2 crore` or `Rs 25,00,000`
    pub fn extract_amount(&self, text: &str) -> Option<u64> {
        if let Some(caps) = AMOUNT_PATTERN.captures(text) {
            let value: f64 = caps.get(1)?.as_str().parse().ok()?;
            let unit = caps.get(2)?.as_str().to_lowercase();
            let multiplier = if unit.starts_with('c') { CRORE } else { LAKH };
            let rupees = (value * multiplier).round();
            return (rupees > 0.0).then_some(rupees as u64);
        }

        let caps = RUPEE_PATTERN.captures(text)?;
        let digits: String = caps.get(1)?.as_str().chars().filter(|c| *c != ',').collect();
        digits.parse::<u64>().ok().filter(|v| *v > 0)
    }

    /// Tenure in years from `20 years`, `15 yrs`
    pub fn extract_tenure_years(&self, text: &str) -> Option<u32> {
        let caps = TENURE_PATTERN.captures(text)?;
        caps.get(1)?.as_str().parse().ok().filter(|v| *v > 0)
    }
}
