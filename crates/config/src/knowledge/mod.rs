//! Construction knowledge base
//!
//! Static reference data the assistant answers from. Loaded once from YAML,
//! validated, then shared read-only behind an `Arc`. The built-in copy is
//! embedded from `data/construction.yaml`; deployments can point
//! `knowledge_base_path` at their own file.

mod records;

pub use records::{
    AdditionalCost, AggregateSpec, ApprovalInfo, BrickSpec, CementSpec, Company,
    ConstructionPhase, CostRange, CostUnit, HouseConfiguration, LoanGuide, MaintenanceSchedule,
    Materials, NamedDetail, Package, PackageHighlights, PlotSize, RoomType, SandSpec, SmartHome,
    SmartHomeTier, SteelSpec, Timeline, TimelineSplit, TimelineThreshold, VastuRule,
    WarrantyTerm,
};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use crate::ConfigError;

const BUILTIN_YAML: &str = include_str!("../../data/construction.yaml");

static BUILTIN: Lazy<Arc<KnowledgeBase>> = Lazy::new(|| {
    Arc::new(
        KnowledgeBase::from_yaml(BUILTIN_YAML).expect("embedded knowledge base must be valid"),
    )
});

/// Package ids the generators look up by name
pub mod package_ids {
    pub const STANDARD: &str = "standard";
    pub const PREMIUM: &str = "premium";
    pub const LUXURY: &str = "luxury";
}

/// Add-on ids the generators look up by name
pub mod addon_ids {
    pub const CAR_PARKING: &str = "car_parking";
    pub const UNDERGROUND_SUMP: &str = "underground_sump";
    pub const WASTE_WATER_TANK: &str = "waste_water_tank";
    pub const COMPOUND_WALL: &str = "compound_wall";
    pub const SOLAR_POWER: &str = "solar_power";
}

/// The complete knowledge base
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub company: Company,
    pub packages: Vec<Package>,
    pub configurations: Vec<HouseConfiguration>,
    pub ground_coverage_ratio: f64,
    pub plots: Vec<PlotSize>,
    pub additional_costs: Vec<AdditionalCost>,
    pub phases: Vec<ConstructionPhase>,
    pub timeline: Timeline,
    pub materials: Materials,
    pub rooms: Vec<RoomType>,
    pub approvals: ApprovalInfo,
    pub vastu: Vec<VastuRule>,
    pub smart_home: SmartHome,
    pub energy: Vec<NamedDetail>,
    pub warranty: Vec<WarrantyTerm>,
    pub maintenance: Vec<MaintenanceSchedule>,
    pub loans: LoanGuide,
}

impl KnowledgeBase {
    /// Shared handle to the embedded knowledge base
    pub fn builtin() -> Arc<KnowledgeBase> {
        Arc::clone(&BUILTIN)
    }

    /// Parse and validate YAML content
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let kb: KnowledgeBase = serde_yaml::from_str(content).map_err(|e| {
            ConfigError::ParseError(format!("Failed to parse knowledge base: {}", e))
        })?;
        kb.validate()?;
        Ok(kb)
    }

    /// Load from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::ParseError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let kb = Self::from_yaml(&content)?;

        tracing::debug!(
            path = %path.display(),
            packages = kb.packages.len(),
            configurations = kb.configurations.len(),
            plots = kb.plots.len(),
            "Loaded knowledge base"
        );
        Ok(kb)
    }

    /// Load from `path` when given, otherwise use the embedded copy
    pub fn load_or_builtin(path: Option<&str>) -> Result<Arc<Self>, ConfigError> {
        match path {
            Some(p) if !p.trim().is_empty() => Ok(Arc::new(Self::load(p)?)),
            _ => Ok(Self::builtin()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.packages.is_empty() {
            return Err(ConfigError::MissingField("packages".to_string()));
        }
        if self.configurations.is_empty() {
            return Err(ConfigError::MissingField("configurations".to_string()));
        }
        if self.company.whatsapp_number.trim().is_empty() {
            return Err(ConfigError::MissingField(
                "company.whatsapp_number".to_string(),
            ));
        }

        for pkg in &self.packages {
            if pkg.rate == 0 {
                return Err(invalid(
                    format!("packages.{}.rate", pkg.id),
                    "Rate must be positive",
                ));
            }
            if !(pkg.range_multiplier.is_finite() && pkg.range_multiplier > 0.0) {
                return Err(invalid(
                    format!("packages.{}.range_multiplier", pkg.id),
                    "Multiplier must be a positive number",
                ));
            }
        }
        ensure_unique("packages", self.packages.iter().map(|p| p.id.as_str()))?;

        for cfg in &self.configurations {
            if cfg.min_area > cfg.ideal_area {
                return Err(invalid(
                    format!("configurations.{}", cfg.label),
                    format!(
                        "min_area {} exceeds ideal_area {}",
                        cfg.min_area, cfg.ideal_area
                    ),
                ));
            }
            if cfg.cost_range.min > cfg.cost_range.max {
                return Err(invalid(
                    format!("configurations.{}.cost_range", cfg.label),
                    "min exceeds max",
                ));
            }
        }
        ensure_unique(
            "configurations",
            self.configurations.iter().map(|c| c.label.as_str()),
        )?;
        ensure_unique("plots", self.plots.iter().map(|p| p.label.as_str()))?;
        ensure_unique(
            "additional_costs",
            self.additional_costs.iter().map(|a| a.id.as_str()),
        )?;

        if !(self.ground_coverage_ratio > 0.0 && self.ground_coverage_ratio <= 1.0) {
            return Err(invalid(
                "ground_coverage_ratio",
                format!("Must be in (0, 1], got {}", self.ground_coverage_ratio),
            ));
        }

        let thresholds = &self.timeline.thresholds;
        if thresholds.windows(2).any(|w| w[0].max_area >= w[1].max_area) {
            return Err(invalid(
                "timeline.thresholds",
                "Thresholds must be strictly ascending by max_area",
            ));
        }
        let split_total: u32 = self.timeline.split.iter().map(|s| s.percent).sum();
        if split_total != 100 {
            return Err(invalid(
                "timeline.split",
                format!("Percentages must sum to 100, got {}", split_total),
            ));
        }

        Ok(())
    }

    pub fn package(&self, id: &str) -> Option<&Package> {
        self.packages.iter().find(|p| p.id == id)
    }

    /// Base tier used for standard cost ranges
    pub fn standard_package(&self) -> &Package {
        self.package(package_ids::STANDARD)
            .unwrap_or(&self.packages[0])
    }

    /// Look up a BHK configuration; `3 bhk`, `3Bhk` and `3BHK` are equivalent
    pub fn configuration(&self, label: &str) -> Option<&HouseConfiguration> {
        let wanted = normalize_bhk_label(label);
        self.configurations.iter().find(|c| c.label == wanted)
    }

    /// Look up a plot; `30 x 40` and `30X40` resolve to `30x40`
    pub fn plot(&self, label: &str) -> Option<&PlotSize> {
        let wanted = normalize_plot_label(label);
        self.plots.iter().find(|p| p.label == wanted)
    }

    pub fn additional_cost(&self, id: &str) -> Option<&AdditionalCost> {
        self.additional_costs.iter().find(|a| a.id == id)
    }

    pub fn phase(&self, key: &str) -> Option<&ConstructionPhase> {
        self.phases.iter().find(|p| p.key == key)
    }

    pub fn room(&self, key: &str) -> Option<&RoomType> {
        self.rooms.iter().find(|r| r.key == key)
    }

    /// Buildable area of a plot under the configured coverage ratio
    pub fn buildable_area(&self, plot: &PlotSize) -> u64 {
        plot.buildable_area(self.ground_coverage_ratio)
    }

    /// Coverage ratio as a whole percentage
    pub fn coverage_percent(&self) -> u32 {
        (self.ground_coverage_ratio * 100.0).round() as u32
    }
}

/// Canonical BHK label: whitespace removed, upper-cased
pub fn normalize_bhk_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

/// Canonical plot label: whitespace removed, lower-cased
pub fn normalize_plot_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

fn invalid(field: impl Into<String>, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.into(),
        message: message.into(),
    }
}

fn ensure_unique<'a>(
    field: &str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(invalid(field, format!("Duplicate id '{}'", id)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_loads() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.packages.len(), 3);
        assert_eq!(kb.configurations.len(), 5);
        assert_eq!(kb.plots.len(), 5);
        assert_eq!(kb.phases.len(), 11);
        assert_eq!(kb.standard_package().rate, 2100);
        assert_eq!(kb.company.whatsapp_number, "916374507535");
    }

    #[test]
    fn test_lookups_normalize_labels() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.configuration("3 bhk").map(|c| c.ideal_area), Some(1500));
        assert_eq!(kb.configuration("2Bhk").map(|c| c.ideal_area), Some(1000));
        assert!(kb.configuration("7BHK").is_none());

        assert_eq!(kb.plot("30 X 40").map(|p| p.area), Some(1200));
        assert!(kb.plot("35x45").is_none());
    }

    #[test]
    fn test_buildable_area_is_derived() {
        let kb = KnowledgeBase::builtin();
        let expected = [
            ("20x30", 360),
            ("30x40", 720),
            ("30x50", 900),
            ("40x60", 1440),
            ("50x80", 2400),
        ];
        for (label, buildable) in expected {
            let plot = kb.plot(label).unwrap();
            assert_eq!(kb.buildable_area(plot), buildable, "plot {}", label);
        }
        assert_eq!(kb.coverage_percent(), 60);
    }

    #[test]
    fn test_tier_ranges_derived_from_multipliers() {
        let kb = KnowledgeBase::builtin();
        let cfg = kb.configuration("1BHK").unwrap();
        let premium = kb.package(package_ids::PREMIUM).unwrap();
        let luxury = kb.package(package_ids::LUXURY).unwrap();

        assert_eq!(cfg.cost_range_for(kb.standard_package()), cfg.cost_range);
        assert_eq!(cfg.cost_range_for(premium).min, 1034775);
        assert_eq!(cfg.cost_range_for(luxury).max, 1785000);
    }

    #[test]
    fn test_every_configuration_scales_by_tier() {
        let kb = KnowledgeBase::builtin();
        let premium = kb.package(package_ids::PREMIUM).unwrap();
        let luxury = kb.package(package_ids::LUXURY).unwrap();
        let scale = |v: u64, m: f64| (v as f64 * m).round() as u64;

        assert!(!kb.configurations.is_empty());
        for cfg in &kb.configurations {
            let base = cfg.cost_range;
            let p = cfg.cost_range_for(premium);
            let l = cfg.cost_range_for(luxury);
            assert_eq!(p.min, scale(base.min, 1.095), "{}", cfg.label);
            assert_eq!(p.max, scale(base.max, 1.095), "{}", cfg.label);
            assert_eq!(l.min, scale(base.min, 1.19), "{}", cfg.label);
            assert_eq!(l.max, scale(base.max, 1.19), "{}", cfg.label);
        }
    }

    #[test]
    fn test_addon_standard_costs() {
        let kb = KnowledgeBase::builtin();
        let sump = kb.additional_cost(addon_ids::UNDERGROUND_SUMP).unwrap();
        assert_eq!(sump.standard_cost(), Some(180000));
        let wall = kb.additional_cost(addon_ids::COMPOUND_WALL).unwrap();
        assert_eq!(wall.standard_cost(), Some(140000));
        let parking = kb.additional_cost(addon_ids::CAR_PARKING).unwrap();
        assert_eq!(parking.standard_cost(), None);
        assert_eq!(parking.cost_for(1500), 2700000);
    }

    #[test]
    fn test_validation_rejects_bad_split() {
        let mut kb = (*KnowledgeBase::builtin()).clone();
        kb.timeline.split[0].percent = 10;
        assert!(matches!(
            kb.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "timeline.split"
        ));
    }

    #[test]
    fn test_validation_rejects_duplicate_package() {
        let mut kb = (*KnowledgeBase::builtin()).clone();
        let dup = kb.packages[0].clone();
        kb.packages.push(dup);
        assert!(kb.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_inverted_areas() {
        let mut kb = (*KnowledgeBase::builtin()).clone();
        kb.configurations[0].min_area = 10_000;
        assert!(kb.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(BUILTIN_YAML.as_bytes()).unwrap();

        let kb = KnowledgeBase::load(file.path()).unwrap();
        assert_eq!(kb.packages[2].rate, 2500);
    }

    #[test]
    fn test_load_missing_file() {
        let result = KnowledgeBase::load("/nonexistent/construction.yaml");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_or_builtin_without_path() {
        let kb = KnowledgeBase::load_or_builtin(None).unwrap();
        assert!(Arc::ptr_eq(&kb, &KnowledgeBase::builtin()));
    }
}
