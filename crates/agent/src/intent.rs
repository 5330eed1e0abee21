//! Intent cascade
//!
//! A query is answered by the first rule, in declaration order, whose
//! predicate matches. Predicates are case-insensitive substring tests over the
//! lower-cased query plus the entities pulled out of it. Several rules can
//! match the same text, so the order of [`CASCADE`] is part of the behaviour:
//! specific checks (two BHK tokens with a compare word) sit above general ones
//! (any compare word).

use std::sync::Arc;

use construction_assistant_config::KnowledgeBase;
use construction_assistant_core::Reply;
use construction_assistant_text_processing::{EntityExtractor, ExtractedEntities};
use construction_assistant_tools::generators;
use construction_assistant_tools::{
    BrandFocus, ConsumptionMaterial, InteriorFocus, MaterialFocus, PhaseFocus, RoomFocus,
};

/// Rule name reported when nothing matched
pub const FALLBACK_RULE: &str = "fallback";

const COST_WORDS: &[&str] = &[
    "cost",
    "price",
    "calculate",
    "how much",
    "budget",
    "estimate",
    "rate",
    "charges",
];

const COMPARE_WORDS: &[&str] = &["compare", "difference", "vs", "versus", "better"];

const GREETINGS: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "good morning",
    "good afternoon",
    "good evening",
    "namaste",
];

/// A query prepared for rule evaluation
#[derive(Debug, Clone)]
pub struct QueryContext {
    /// Trimmed, lower-cased query
    pub lower: String,
    pub entities: ExtractedEntities,
}

impl QueryContext {
    pub fn new(text: &str, extractor: &EntityExtractor) -> Self {
        let text = text.trim();
        Self {
            lower: text.to_lowercase(),
            entities: extractor.extract(text),
        }
    }

    /// True when any of `words` occurs in the query
    pub fn mentions(&self, words: &[&str]) -> bool {
        words.iter().any(|w| self.lower.contains(w))
    }

    fn mentions_cost(&self) -> bool {
        self.mentions(COST_WORDS)
    }

    fn mentions_compare(&self) -> bool {
        self.mentions(COMPARE_WORDS)
    }
}

/// One entry of the cascade
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    matches: fn(&QueryContext, &KnowledgeBase) -> bool,
    respond: fn(&QueryContext, &KnowledgeBase) -> Reply,
}

impl Rule {
    pub fn matches(&self, ctx: &QueryContext, kb: &KnowledgeBase) -> bool {
        (self.matches)(ctx, kb)
    }

    pub fn respond(&self, ctx: &QueryContext, kb: &KnowledgeBase) -> Reply {
        (self.respond)(ctx, kb)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

macro_rules! keyword_rule {
    ($name:literal, [$($word:literal),+ $(,)?], $respond:expr) => {
        Rule {
            name: $name,
            matches: |ctx, _| ctx.mentions(&[$($word),+]),
            respond: $respond,
        }
    };
}

/// The ordered rule table
pub static CASCADE: &[Rule] = &[
    Rule {
        name: "bhk_comparison",
        matches: |ctx, _| ctx.mentions_compare() && ctx.entities.bhk_labels.len() >= 2,
        respond: |ctx, kb| generators::bhk_comparison(kb, &ctx.entities.bhk_labels),
    },
    // Unknown labels and queries that also give an area fall through to `bhk`
    Rule {
        name: "bhk_cost",
        matches: |ctx, kb| {
            ctx.mentions_cost()
                && ctx.entities.area.is_none()
                && ctx
                    .entities
                    .first_bhk()
                    .is_some_and(|label| kb.configuration(label).is_some())
        },
        respond: |ctx, kb| match ctx.entities.first_bhk() {
            Some(label) => generators::bhk_cost_estimate(kb, label),
            None => generators::all_bhk(kb),
        },
    },
    Rule {
        name: "bhk",
        matches: |ctx, _| {
            ctx.entities.first_bhk().is_some()
                || ctx.mentions(&["bhk", "bedroom", "how many rooms"])
        },
        respond: |ctx, kb| match ctx.entities.first_bhk() {
            Some(label) => generators::bhk_info(kb, label),
            None => generators::all_bhk(kb),
        },
    },
    Rule {
        name: "plot",
        matches: |ctx, kb| {
            ctx.mentions(&["plot", "site", "land"])
                || kb.plots.iter().any(|p| ctx.lower.contains(p.label.as_str()))
        },
        respond: |ctx, kb| match &ctx.entities.plot {
            Some(dims) => generators::plot_info(kb, &dims.label()),
            None => generators::all_plots(kb),
        },
    },
    Rule {
        name: "area_cost",
        matches: |ctx, _| ctx.mentions_cost() && ctx.entities.area.is_some(),
        respond: |ctx, kb| match ctx.entities.area {
            Some(area) => generators::cost_by_area(kb, area),
            None => generators::cost_prompt(),
        },
    },
    Rule {
        name: "cost_prompt",
        matches: |ctx, _| ctx.mentions_cost(),
        respond: |_, _| generators::cost_prompt(),
    },
    Rule {
        name: "compound_wall",
        matches: |ctx, _| ctx.mentions(&["compound wall", "boundary wall"]),
        respond: |ctx, kb| generators::compound_wall_estimate(kb, ctx.entities.plot.as_ref()),
    },
    keyword_rule!(
        "duplex_villa",
        ["duplex", "villa", "two story", "double story", "g+1", "g+2", "g+3"],
        |_, kb| generators::duplex_villa(kb)
    ),
    keyword_rule!(
        "interior",
        ["interior", "modular kitchen", "false ceiling", "wardrobe", "furniture"],
        |ctx, _| generators::interior(InteriorFocus::from_query(&ctx.lower))
    ),
    Rule {
        name: "loan",
        matches: |ctx, _| ctx.mentions(&["loan", "finance", "emi", "bank"]),
        respond: |ctx, kb| match ctx.entities.amount {
            Some(principal) => generators::emi_table(kb, principal, ctx.entities.tenure_years),
            None => generators::loan_info(kb),
        },
    },
    Rule {
        name: "comparison",
        matches: |ctx, _| ctx.mentions_compare(),
        respond: |ctx, kb| {
            if ctx.entities.bhk_labels.is_empty() {
                generators::package_comparison(kb)
            } else {
                generators::bhk_comparison(kb, &ctx.entities.bhk_labels)
            }
        },
    },
    keyword_rule!("packages", ["package", "option"], |_, kb| {
        generators::package_comparison(kb)
    }),
    keyword_rule!(
        "vastu",
        ["vastu", "direction", "facing", "puja room"],
        |_, kb| generators::vastu(kb)
    ),
    keyword_rule!(
        "room_size",
        [
            "room size",
            "bedroom size",
            "kitchen size",
            "bathroom size",
            "dimensions",
            "minimum size"
        ],
        |ctx, kb| generators::room_sizes(kb, RoomFocus::from_query(&ctx.lower))
    ),
    keyword_rule!(
        "approvals",
        [
            "approval",
            "permission",
            "sanction",
            "legal",
            "document",
            "noc",
            "panchayat",
            "municipal"
        ],
        |_, kb| generators::approvals(kb)
    ),
    keyword_rule!(
        "phases",
        ["phase", "stage", "step", "process", "sequence", "foundation", "structure"],
        |ctx, kb| generators::phases(kb, PhaseFocus::from_query(&ctx.lower))
    ),
    Rule {
        name: "material_consumption",
        matches: |ctx, _| {
            ctx.mentions(&["how much", "consumption", "quantity", "needed", "require"])
                && ConsumptionMaterial::from_query(&ctx.lower).is_some()
        },
        respond: |ctx, kb| {
            generators::material_consumption(kb, ConsumptionMaterial::from_query(&ctx.lower))
        },
    },
    keyword_rule!(
        "sand_aggregates",
        ["sand", "m-sand", "river sand", "aggregate", "stone"],
        |_, kb| generators::sand_aggregates(kb)
    ),
    keyword_rule!(
        "materials",
        ["material", "cement", "steel", "brick", "flooring", "tiles"],
        |ctx, kb| generators::material_info(kb, MaterialFocus::from_query(&ctx.lower))
    ),
    Rule {
        name: "duration",
        matches: |ctx, _| {
            ctx.mentions(&[
                "duration",
                "time",
                "how long",
                "timeline",
                "schedule",
                "when complete",
                "completion",
            ])
        },
        respond: |ctx, kb| {
            let area = ctx.entities.area.or_else(|| {
                ctx.entities
                    .first_bhk()
                    .and_then(|label| kb.configuration(label))
                    .map(|config| config.ideal_area)
            });
            match area {
                Some(area) => generators::duration_estimate(kb, area),
                None => generators::duration_prompt(),
            }
        },
    },
    keyword_rule!(
        "smart_home",
        [
            "smart home",
            "automation",
            "iot",
            "smart switch",
            "voice control",
            "alexa",
            "google home"
        ],
        |_, kb| generators::smart_home(kb)
    ),
    keyword_rule!(
        "energy",
        [
            "solar",
            "energy",
            "electricity saving",
            "rainwater",
            "green building",
            "eco friendly"
        ],
        |_, kb| generators::energy(kb)
    ),
    keyword_rule!(
        "warranty",
        ["warranty", "guarantee", "after sale", "service"],
        |_, kb| generators::warranty(kb)
    ),
    keyword_rule!(
        "maintenance",
        ["maintenance", "repair", "upkeep", "care", "servicing"],
        |_, kb| generators::maintenance(kb)
    ),
    keyword_rule!(
        "brands",
        ["brand", "recommend", "best", "quality", "which company"],
        |ctx, kb| generators::brands(kb, BrandFocus::from_query(&ctx.lower))
    ),
    keyword_rule!(
        "electrical",
        ["electrical", "wiring", "switch", "board", "mcb"],
        |_, kb| generators::electrical(kb)
    ),
    keyword_rule!(
        "plumbing",
        ["plumbing", "water", "pipe", "tank", "sanitary", "bathroom fitting"],
        |_, kb| generators::plumbing(kb)
    ),
    keyword_rule!(
        "painting",
        ["paint", "color", "finish", "putty", "emulsion"],
        |_, kb| generators::painting(kb)
    ),
    keyword_rule!(
        "doors_windows",
        ["door", "window", "teak", "upvc", "wooden"],
        |_, kb| generators::doors_windows(kb)
    ),
    keyword_rule!(
        "flooring",
        ["floor", "tile", "marble", "granite", "vitrified"],
        |_, kb| generators::flooring(kb)
    ),
    keyword_rule!(
        "parking",
        ["parking", "car park", "garage"],
        |_, kb| generators::parking(kb)
    ),
    keyword_rule!(
        "stilt_basement",
        ["stilt", "basement", "underground", "parking floor"],
        |_, kb| generators::stilt_basement(kb)
    ),
    keyword_rule!(
        "company",
        [
            "who are you",
            "about",
            "company",
            "contact",
            "location",
            "address",
            "phone",
            "mobile"
        ],
        |_, kb| generators::company_info(kb)
    ),
    Rule {
        name: "greeting",
        matches: |ctx, _| GREETINGS.iter().any(|g| ctx.lower.starts_with(g)),
        respond: |_, kb| generators::greeting(kb),
    },
];

/// Outcome of analysing one query
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Name of the winning rule, or [`FALLBACK_RULE`]
    pub rule: &'static str,
    pub reply: Reply,
}

/// Classifies queries against the cascade and produces replies
pub struct QueryAnalyzer {
    kb: Arc<KnowledgeBase>,
    extractor: EntityExtractor,
    rules: &'static [Rule],
}

impl QueryAnalyzer {
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self {
            kb,
            extractor: EntityExtractor::new(),
            rules: CASCADE,
        }
    }

    pub fn knowledge_base(&self) -> &Arc<KnowledgeBase> {
        &self.kb
    }

    /// Rule names in evaluation order
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|r| r.name)
    }

    fn select(&self, ctx: &QueryContext) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.matches(ctx, &self.kb))
    }

    /// Name of the rule that would answer `text`
    pub fn classify(&self, text: &str) -> &'static str {
        let ctx = QueryContext::new(text, &self.extractor);
        self.select(&ctx).map(|r| r.name).unwrap_or(FALLBACK_RULE)
    }

    /// Classify `text` and generate the reply
    pub fn analyze(&self, text: &str) -> Resolution {
        let ctx = QueryContext::new(text, &self.extractor);
        let resolution = match self.select(&ctx) {
            Some(rule) => Resolution {
                rule: rule.name,
                reply: rule.respond(&ctx, &self.kb),
            },
            None => Resolution {
                rule: FALLBACK_RULE,
                reply: generators::contact_fallback(&self.kb),
            },
        };

        tracing::debug!(
            rule = resolution.rule,
            area = ?ctx.entities.area,
            bhk = ?ctx.entities.bhk_labels,
            "Query classified"
        );
        resolution
    }
}

impl std::fmt::Debug for QueryAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryAnalyzer")
            .field("rules", &self.rules.len())
            .finish()
    }
}
