//! Knowledge base record types
//!
//! Mirrors `data/construction.yaml`. All records are plain data; anything
//! derived (totals, buildable area, tier ranges) is a method.

use serde::{Deserialize, Serialize};

/// Company identity used in greetings, contact details and the WhatsApp link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub short_name: String,
    /// How the assistant introduces itself
    pub assistant_name: String,
    pub engineer: String,
    pub phone_display: String,
    /// International format without `+`, as used by wa.me links
    pub whatsapp_number: String,
    #[serde(default)]
    pub address: Vec<String>,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    /// Prefilled WhatsApp message
    pub whatsapp_inquiry: String,
}

/// Per-package bullet points shown by the specification generators
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageHighlights {
    #[serde(default)]
    pub electrical: Vec<String>,
    #[serde(default)]
    pub plumbing: Vec<String>,
    #[serde(default)]
    pub doors: Vec<String>,
    #[serde(default)]
    pub flooring: Vec<String>,
}

/// Construction package tier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    pub id: String,
    pub name: String,
    /// Rupees per sq.ft of built-up area
    pub rate: u64,
    /// Multiplier applied to the standard-tier cost ranges
    #[serde(default = "default_range_multiplier")]
    pub range_multiplier: f64,
    pub cement: String,
    pub steel: String,
    pub brick: String,
    pub flooring: String,
    pub doors: String,
    pub electrical: String,
    pub plumbing: String,
    pub fittings: String,
    pub inner_paint: String,
    pub outer_paint: String,
    pub elevation: String,
    #[serde(default)]
    pub highlights: PackageHighlights,
}

fn default_range_multiplier() -> f64 {
    1.0
}

impl Package {
    /// Total construction cost for a built-up area
    pub fn cost_for(&self, area_sqft: u64) -> u64 {
        area_sqft.saturating_mul(self.rate)
    }

    /// Short tier name without the "Package" suffix
    pub fn tier_name(&self) -> &str {
        self.name.strip_suffix(" Package").unwrap_or(&self.name)
    }
}

/// Inclusive rupee range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostRange {
    pub min: u64,
    pub max: u64,
}

impl CostRange {
    /// Scale both ends, rounding to the nearest rupee
    pub fn scaled(&self, multiplier: f64) -> CostRange {
        CostRange {
            min: (self.min as f64 * multiplier).round() as u64,
            max: (self.max as f64 * multiplier).round() as u64,
        }
    }
}

/// BHK house configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseConfiguration {
    /// Canonical label, e.g. `3BHK`
    pub label: String,
    pub min_area: u64,
    pub ideal_area: u64,
    pub rooms: String,
    pub suitable_for: String,
    /// Standard-tier estimate
    pub cost_range: CostRange,
}

impl HouseConfiguration {
    /// Cost range for a package tier
    pub fn cost_range_for(&self, package: &Package) -> CostRange {
        self.cost_range.scaled(package.range_multiplier)
    }
}

/// Common plot size
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotSize {
    /// Canonical label, e.g. `30x40`
    pub label: String,
    /// Total plot area in sq.ft
    pub area: u64,
    pub suitable: String,
    pub floors: String,
}

impl PlotSize {
    /// Buildable ground-floor area for a coverage ratio
    pub fn buildable_area(&self, coverage_ratio: f64) -> u64 {
        (self.area as f64 * coverage_ratio).round() as u64
    }
}

/// Unit an add-on is priced in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostUnit {
    SqFt,
    Litre,
    RunningFoot,
    Unit,
    Kilowatt,
}

impl CostUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            CostUnit::SqFt => "sq.ft",
            CostUnit::Litre => "litre",
            CostUnit::RunningFoot => "running ft",
            CostUnit::Unit => "unit",
            CostUnit::Kilowatt => "kW",
        }
    }
}

/// Optional add-on priced per unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdditionalCost {
    pub id: String,
    pub name: String,
    pub rate: u64,
    pub unit: CostUnit,
    /// Typical quantity quoted when the visitor gives none
    #[serde(default)]
    pub standard_quantity: Option<u64>,
}

impl AdditionalCost {
    pub fn cost_for(&self, quantity: u64) -> u64 {
        quantity.saturating_mul(self.rate)
    }

    pub fn standard_cost(&self) -> Option<u64> {
        self.standard_quantity.map(|q| self.cost_for(q))
    }
}

/// Construction phase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstructionPhase {
    pub key: String,
    pub duration: String,
    pub description: String,
}

impl ConstructionPhase {
    /// Key with the first letter upper-cased
    pub fn title(&self) -> String {
        let mut chars = self.key.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Area threshold for the duration estimate
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimelineThreshold {
    pub max_area: u64,
    pub months: u32,
}

/// Share of the total duration spent in one stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineSplit {
    pub label: String,
    pub percent: u32,
}

/// Area-to-duration rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timeline {
    pub thresholds: Vec<TimelineThreshold>,
    pub beyond_months: u32,
    pub split: Vec<TimelineSplit>,
}

impl Timeline {
    /// Total months for a built-up area
    pub fn months_for(&self, area_sqft: u64) -> u32 {
        self.thresholds
            .iter()
            .find(|t| area_sqft <= t.max_area)
            .map(|t| t.months)
            .unwrap_or(self.beyond_months)
    }

    /// Months per stage, rounded half up
    pub fn breakdown(&self, total_months: u32) -> Vec<(&str, u32)> {
        self.split
            .iter()
            .map(|s| (s.label.as_str(), (total_months * s.percent + 50) / 100))
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CementSpec {
    pub premium_brands: Vec<String>,
    pub standard_brands: Vec<String>,
    pub types: Vec<String>,
    pub consumption: String,
    pub storage: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SteelSpec {
    pub premium_brands: Vec<String>,
    pub standard_brands: Vec<String>,
    pub grades: Vec<String>,
    pub consumption: String,
    pub specifications: String,
}

/// Name/detail pair used for brick types and prices
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedDetail {
    pub name: String,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickSpec {
    pub types: Vec<NamedDetail>,
    pub consumption: String,
    pub costs: Vec<NamedDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SandSpec {
    pub types: Vec<String>,
    pub consumption: String,
    pub quality: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateSpec {
    pub sizes: Vec<String>,
    pub consumption: String,
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Materials {
    pub cement: CementSpec,
    pub steel: SteelSpec,
    pub bricks: BrickSpec,
    pub sand: SandSpec,
    pub aggregates: AggregateSpec,
}

/// Recommended room dimensions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomType {
    pub key: String,
    pub name: String,
    pub min_size: String,
    pub ideal_size: String,
    pub flooring: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApprovalInfo {
    pub required: Vec<String>,
    pub documents: Vec<String>,
    pub timeline: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VastuRule {
    pub area: String,
    pub guidance: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmartHomeTier {
    pub name: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmartHome {
    pub tiers: Vec<SmartHomeTier>,
    pub cost: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarrantyTerm {
    pub component: String,
    pub coverage: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceSchedule {
    pub interval: String,
    pub tasks: Vec<String>,
}

/// Home loan reference figures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanGuide {
    /// Annual rates quoted in EMI tables
    pub rates_percent: Vec<f64>,
    pub example_principal: u64,
    pub default_tenure_years: u32,
    #[serde(default)]
    pub banks: Vec<String>,
}
