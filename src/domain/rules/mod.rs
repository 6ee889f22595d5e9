pub mod signals;

use crate::domain::value_objects::severity::Severity;
use crate::domain::value_objects::thresholds::MarkerThresholds;

pub use signals::ClinicalSignal;

pub const CRITICAL_TEMPLATE: &str =
    "Radiology reports no infection, but inflammatory markers are critically elevated.";
pub const MODERATE_TEMPLATE: &str =
    "Radiology reports no infection, but inflammatory markers are moderately elevated.";
pub const NO_DISCREPANCY_TEMPLATE: &str =
    "Radiology and laboratory findings show no significant discrepancy.";

/// One row of the ordered classification table.
/// Rules are pure: signal + thresholds in, match or no match out. No I/O.
#[derive(Clone, Copy)]
pub struct DiscrepancyRule {
    pub name: &'static str,
    pub severity: Severity,
    pub template: &'static str,
    predicate: fn(&ClinicalSignal, &MarkerThresholds) -> bool,
}

impl DiscrepancyRule {
    #[must_use]
    pub const fn new(
        name: &'static str,
        severity: Severity,
        template: &'static str,
        predicate: fn(&ClinicalSignal, &MarkerThresholds) -> bool,
    ) -> Self {
        Self {
            name,
            severity,
            template,
            predicate,
        }
    }

    #[must_use]
    pub fn matches(&self, signal: &ClinicalSignal, thresholds: &MarkerThresholds) -> bool {
        (self.predicate)(signal, thresholds)
    }
}

impl std::fmt::Debug for DiscrepancyRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscrepancyRule")
            .field("name", &self.name)
            .field("severity", &self.severity)
            .finish_non_exhaustive()
    }
}

/// Outcome of the first matching rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub rule: &'static str,
    pub severity: Severity,
    pub template: &'static str,
}

fn critical_inflammation(signal: &ClinicalSignal, t: &MarkerThresholds) -> bool {
    signal.infection_negative
        && (signal.crp.is_some_and(|crp| t.crp_is_critical(crp))
            || signal.wbc.is_some_and(|wbc| t.wbc_is_critical(wbc)))
}

fn moderate_inflammation(signal: &ClinicalSignal, t: &MarkerThresholds) -> bool {
    signal.infection_negative
        && (signal.crp.is_some_and(|crp| t.crp_is_elevated(crp))
            || signal.wbc.is_some_and(|wbc| t.wbc_is_elevated(wbc)))
}

// Fires for any marker value, elevated or not.
fn markers_present(signal: &ClinicalSignal, _: &MarkerThresholds) -> bool {
    signal.has_markers()
}

/// The default table, highest severity first.
#[must_use]
pub fn default_rules() -> Vec<DiscrepancyRule> {
    vec![
        DiscrepancyRule::new(
            "critical_inflammation",
            Severity::High,
            CRITICAL_TEMPLATE,
            critical_inflammation,
        ),
        DiscrepancyRule::new(
            "moderate_inflammation",
            Severity::Medium,
            MODERATE_TEMPLATE,
            moderate_inflammation,
        ),
        DiscrepancyRule::new(
            "markers_present",
            Severity::Low,
            NO_DISCREPANCY_TEMPLATE,
            markers_present,
        ),
    ]
}

/// Evaluates rules in order; the first match wins.
pub struct RuleEngine {
    rules: Vec<DiscrepancyRule>,
}

impl RuleEngine {
    #[must_use]
    pub fn new(rules: Vec<DiscrepancyRule>) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn rules(&self) -> &[DiscrepancyRule] {
        &self.rules
    }

    /// Returns `None` when no rule matches, i.e. no discrepancy to report.
    #[must_use]
    pub fn classify(
        &self,
        signal: &ClinicalSignal,
        thresholds: &MarkerThresholds,
    ) -> Option<Classification> {
        self.rules
            .iter()
            .find(|rule| rule.matches(signal, thresholds))
            .map(|rule| Classification {
                rule: rule.name,
                severity: rule.severity,
                template: rule.template,
            })
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new(default_rules())
    }
}
