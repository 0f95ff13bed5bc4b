//! Report Analysis Service
//!
//! Derives the consultancy findings - cash leaks and optimization
//! suggestions - from an immutable state snapshot. The snapshot is never
//! mutated; running the analysis twice on the same state yields the same
//! findings in the same order.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{CashLeak, OptimizationSuggestion, ProjectState};
use crate::domain::value_objects::{LeakCategory, Origin, RiskLevel};

/// Tunable floors and margins for the analyzer
///
/// Loaded from `manifold.toml` when present; the defaults encode common
/// market practice for mid-size commercial work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisThresholds {
    /// Minimum acceptable COP-equivalent efficiency for any line
    pub min_efficiency_cop: f64,
    /// Longest lead time tolerated before a procurement leak is flagged
    pub max_lead_time_weeks: u32,
    /// Installed TR allowed above the derived baseline before flagging
    pub capacity_margin_tr: f64,
    /// BOQ spend overrun tolerated, as a percentage of target budget
    pub budget_tolerance_pct: f64,
}

impl Default for AnalysisThresholds {
    fn default() -> Self {
        Self {
            min_efficiency_cop: 3.2,
            max_lead_time_weeks: 8,
            capacity_margin_tr: 5.0,
            budget_tolerance_pct: 10.0,
        }
    }
}

/// Findings produced for the analysis tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReportFindings {
    pub leaks: Vec<CashLeak>,
    pub suggestions: Vec<OptimizationSuggestion>,
}

impl ReportFindings {
    /// Sum of all identified avoidable spend
    pub fn total_leak_amount(&self) -> f64 {
        self.leaks.iter().map(|l| l.impact_amount).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.leaks.is_empty() && self.suggestions.is_empty()
    }
}

/// Cost applied to each excess TR of installed capacity
const COST_PER_EXCESS_TR: f64 = 45_000.0;

/// Holding cost per line-value fraction per week of late delivery
const DELAY_COST_RATE_PER_WEEK: f64 = 0.005;

/// Premium fraction of line value wasted by a below-floor selection
const INEFFICIENCY_COST_RATE: f64 = 0.08;

/// Analyze a state snapshot into report findings
pub fn analyze(state: &ProjectState, thresholds: &AnalysisThresholds) -> ReportFindings {
    let mut findings = ReportFindings::default();

    flag_import_lead_times(state, thresholds, &mut findings);
    flag_inefficient_selections(state, thresholds, &mut findings);
    flag_oversized_capacity(state, thresholds, &mut findings);
    flag_budget_overrun(state, thresholds, &mut findings);
    flag_open_compliance(state, &mut findings);

    findings
}

fn flag_import_lead_times(
    state: &ProjectState,
    thresholds: &AnalysisThresholds,
    findings: &mut ReportFindings,
) {
    for item in &state.inventory {
        if item.origin != Origin::Imported || item.lead_time_weeks <= thresholds.max_lead_time_weeks
        {
            continue;
        }

        let excess_weeks = item.lead_time_weeks - thresholds.max_lead_time_weeks;
        let impact = item.line_value() * DELAY_COST_RATE_PER_WEEK * f64::from(excess_weeks);

        findings.leaks.push(CashLeak {
            category: LeakCategory::Procurement,
            description: format!(
                "{} '{}' imported with a {}-week lead time",
                item.category, item.id, item.lead_time_weeks
            ),
            impact_amount: impact,
            justification: format!(
                "Site overhead runs {} weeks beyond the {}-week procurement window",
                excess_weeks, thresholds.max_lead_time_weeks
            ),
        });

        findings.suggestions.push(OptimizationSuggestion {
            title: format!("Source '{}' from a local OEM", item.id),
            basis: format!(
                "Supplier '{}' quotes {} weeks against a {}-week window",
                item.supplier, item.lead_time_weeks, thresholds.max_lead_time_weeks
            ),
            cost_impact: impact,
            energy_impact: "Neutral".to_string(),
            compliance_impact: "None".to_string(),
            risk_level: if excess_weeks > 4 {
                RiskLevel::Medium
            } else {
                RiskLevel::Low
            },
        });
    }
}

fn flag_inefficient_selections(
    state: &ProjectState,
    thresholds: &AnalysisThresholds,
    findings: &mut ReportFindings,
) {
    for item in &state.inventory {
        // Lines quoted without an efficiency figure are not penalized.
        if item.efficiency_value <= 0.0 {
            continue;
        }
        let cop = item.cop_equivalent();
        if cop >= thresholds.min_efficiency_cop {
            continue;
        }

        let impact = item.line_value() * INEFFICIENCY_COST_RATE;

        findings.leaks.push(CashLeak {
            category: LeakCategory::Specification,
            description: format!(
                "{} '{}' specified at {:.2} COP-equivalent",
                item.category, item.id, cop
            ),
            impact_amount: impact,
            justification: format!(
                "Selection sits below the {:.1} COP efficiency floor and locks in running cost",
                thresholds.min_efficiency_cop
            ),
        });

        findings.suggestions.push(OptimizationSuggestion {
            title: format!("Respecify '{}' to a higher-efficiency model", item.id),
            basis: format!(
                "{:.2} COP-equivalent vs a {:.1} floor",
                cop, thresholds.min_efficiency_cop
            ),
            cost_impact: impact,
            energy_impact: format!(
                "Closes a {:.2} COP shortfall on this line",
                thresholds.min_efficiency_cop - cop
            ),
            compliance_impact: "Supports ECBC conformance".to_string(),
            risk_level: RiskLevel::Low,
        });
    }
}

fn flag_oversized_capacity(
    state: &ProjectState,
    thresholds: &AnalysisThresholds,
    findings: &mut ReportFindings,
) {
    let Some(design) = &state.design else {
        return;
    };

    let installed = state.installed_capacity_tr();
    let baseline = design.total_cooling_load_tr as f64;
    if installed <= baseline + thresholds.capacity_margin_tr {
        return;
    }

    let excess = installed - baseline;
    findings.leaks.push(CashLeak {
        category: LeakCategory::Design,
        description: format!(
            "Installed cooling capacity of {:.1} TR against a {:.0} TR baseline",
            installed, baseline
        ),
        impact_amount: excess * COST_PER_EXCESS_TR,
        justification: format!(
            "Capacity exceeds the derived load by {:.1} TR, beyond the {:.1} TR margin",
            excess, thresholds.capacity_margin_tr
        ),
    });

    findings.suggestions.push(OptimizationSuggestion {
        title: "Right-size the chiller lineup".to_string(),
        basis: format!(
            "{:.1} TR installed vs {:.0} TR derived baseline",
            installed, baseline
        ),
        cost_impact: excess * COST_PER_EXCESS_TR,
        energy_impact: "Removes part-load penalty on oversized plant".to_string(),
        compliance_impact: "None".to_string(),
        risk_level: RiskLevel::Medium,
    });
}

fn flag_budget_overrun(
    state: &ProjectState,
    thresholds: &AnalysisThresholds,
    findings: &mut ReportFindings,
) {
    let Some(brief) = &state.brief else {
        return;
    };
    if brief.target_budget <= 0.0 {
        return;
    }

    let spend = state.inventory_value();
    let ceiling = brief.target_budget * (1.0 + thresholds.budget_tolerance_pct / 100.0);
    if spend <= ceiling {
        return;
    }

    let overrun = spend - brief.target_budget;
    findings.leaks.push(CashLeak {
        category: LeakCategory::Execution,
        description: format!(
            "BOQ value of INR {:.0} against a target budget of INR {:.0}",
            spend, brief.target_budget
        ),
        impact_amount: overrun,
        justification: format!(
            "Spend exceeds budget beyond the {:.0}% tolerance",
            thresholds.budget_tolerance_pct
        ),
    });

    findings.suggestions.push(OptimizationSuggestion {
        title: "Value-engineer the BOQ to the target budget".to_string(),
        basis: format!("Overrun of INR {:.0} on the current line-up", overrun),
        cost_impact: overrun,
        energy_impact: "Neutral".to_string(),
        compliance_impact: "None".to_string(),
        risk_level: RiskLevel::High,
    });
}

fn flag_open_compliance(state: &ProjectState, findings: &mut ReportFindings) {
    let Some(compliance) = &state.compliance else {
        return;
    };
    if compliance.is_clear() {
        return;
    }

    let mut open = Vec::new();
    if !compliance.nbc_compliant {
        open.push("NBC");
    }
    if !compliance.ecbc_compliant {
        open.push("ECBC");
    }
    if !compliance.fire_noc_status.is_resolved() {
        open.push("Fire NOC");
    }
    if !compliance.moef_clearance {
        open.push("MoEF");
    }

    findings.suggestions.push(OptimizationSuggestion {
        title: "Close out statutory approvals before procurement".to_string(),
        basis: format!("Open items: {}", open.join(", ")),
        cost_impact: 0.0,
        energy_impact: "None".to_string(),
        compliance_impact: format!("{} approval(s) outstanding", open.len()),
        risk_level: RiskLevel::High,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ComplianceStatus, DesignInputs, Equipment, ProjectBrief};
    use crate::domain::value_objects::{EfficiencyType, FireNocStatus, LayoutStatus};

    fn baseline_design(tr: i64) -> DesignInputs {
        DesignInputs {
            cad_reference: "ID-PUN-1000".to_string(),
            mechanical_layout_status: LayoutStatus::Completed,
            electrical_load_kw: 553,
            total_cooling_load_tr: tr,
            design_assumptions: "Market Standard Baseline. Site: Pune.".to_string(),
        }
    }

    fn item(id: &str) -> Equipment {
        Equipment {
            id: id.to_string(),
            category: "Chiller".to_string(),
            supplier: "CoolServe".to_string(),
            quantity: 1,
            unit_price: 400_000.0,
            efficiency_value: 3.6,
            efficiency_type: EfficiencyType::Cop,
            ..Equipment::default()
        }
    }

    #[test]
    fn empty_state_has_no_findings() {
        let findings = analyze(&ProjectState::new(), &AnalysisThresholds::default());
        assert!(findings.is_empty());
    }

    #[test]
    fn long_lead_import_is_a_procurement_leak() {
        let state = ProjectState::new().with_equipment_added(Equipment {
            origin: Origin::Imported,
            lead_time_weeks: 14,
            ..item("ch-1")
        });

        let findings = analyze(&state, &AnalysisThresholds::default());
        assert_eq!(findings.leaks.len(), 1);
        assert_eq!(findings.leaks[0].category, LeakCategory::Procurement);
        // 400_000 * 0.005 * 6 excess weeks
        assert!((findings.leaks[0].impact_amount - 12_000.0).abs() < 1e-6);
        assert_eq!(findings.suggestions[0].risk_level, RiskLevel::Medium);
    }

    #[test]
    fn local_long_lead_item_is_not_flagged() {
        let state = ProjectState::new().with_equipment_added(Equipment {
            origin: Origin::Local,
            lead_time_weeks: 14,
            ..item("ch-1")
        });

        let findings = analyze(&state, &AnalysisThresholds::default());
        assert!(findings.is_empty());
    }

    #[test]
    fn below_floor_efficiency_is_a_specification_leak() {
        let state = ProjectState::new().with_equipment_added(Equipment {
            efficiency_value: 2.8,
            ..item("ch-2")
        });

        let findings = analyze(&state, &AnalysisThresholds::default());
        assert_eq!(findings.leaks.len(), 1);
        assert_eq!(findings.leaks[0].category, LeakCategory::Specification);
        assert!((findings.leaks[0].impact_amount - 32_000.0).abs() < 1e-6);
    }

    #[test]
    fn eer_lines_are_compared_on_cop_equivalent() {
        // 12.0 EER is ~3.52 COP, above the 3.2 floor
        let state = ProjectState::new().with_equipment_added(Equipment {
            efficiency_value: 12.0,
            efficiency_type: EfficiencyType::Eer,
            ..item("vrf-1")
        });

        let findings = analyze(&state, &AnalysisThresholds::default());
        assert!(findings.leaks.is_empty());
    }

    #[test]
    fn unquoted_efficiency_is_not_penalized() {
        let state = ProjectState::new().with_equipment_added(Equipment {
            efficiency_value: 0.0,
            ..item("duct-1")
        });

        let findings = analyze(&state, &AnalysisThresholds::default());
        assert!(findings.is_empty());
    }

    #[test]
    fn oversized_capacity_is_a_design_leak() {
        let brief = ProjectBrief {
            city: "Pune".to_string(),
            built_up_area: 6500.0,
            ..ProjectBrief::default()
        };
        let state = ProjectState::new()
            .with_brief(brief, baseline_design(20))
            .with_equipment_added(Equipment {
                capacity: 30.0,
                capacity_unit: "TR".to_string(),
                ..item("ch-3")
            });

        let findings = analyze(&state, &AnalysisThresholds::default());
        let design_leaks: Vec<_> = findings
            .leaks
            .iter()
            .filter(|l| l.category == LeakCategory::Design)
            .collect();
        assert_eq!(design_leaks.len(), 1);
        // 10 TR excess at 45_000 each
        assert!((design_leaks[0].impact_amount - 450_000.0).abs() < 1e-6);
    }

    #[test]
    fn capacity_within_margin_is_not_flagged() {
        let brief = ProjectBrief {
            city: "Pune".to_string(),
            built_up_area: 6500.0,
            ..ProjectBrief::default()
        };
        let state = ProjectState::new()
            .with_brief(brief, baseline_design(20))
            .with_equipment_added(Equipment {
                capacity: 24.0,
                capacity_unit: "TR".to_string(),
                ..item("ch-3")
            });

        let findings = analyze(&state, &AnalysisThresholds::default());
        assert!(findings
            .leaks
            .iter()
            .all(|l| l.category != LeakCategory::Design));
    }

    #[test]
    fn budget_overrun_is_an_execution_leak() {
        let brief = ProjectBrief {
            city: "Pune".to_string(),
            target_budget: 500_000.0,
            ..ProjectBrief::default()
        };
        let state = ProjectState::new()
            .with_brief(brief, baseline_design(20))
            .with_equipment_added(Equipment {
                quantity: 2,
                unit_price: 400_000.0,
                ..item("ch-4")
            });

        let findings = analyze(&state, &AnalysisThresholds::default());
        let execution: Vec<_> = findings
            .leaks
            .iter()
            .filter(|l| l.category == LeakCategory::Execution)
            .collect();
        assert_eq!(execution.len(), 1);
        assert!((execution[0].impact_amount - 300_000.0).abs() < 1e-6);
    }

    #[test]
    fn open_compliance_yields_high_risk_suggestion_without_leak() {
        let state = ProjectState::new().with_compliance(ComplianceStatus {
            nbc_compliant: true,
            ecbc_compliant: false,
            fire_noc_status: FireNocStatus::Pending,
            moef_clearance: true,
            ..ComplianceStatus::default()
        });

        let findings = analyze(&state, &AnalysisThresholds::default());
        assert!(findings.leaks.is_empty());
        assert_eq!(findings.suggestions.len(), 1);
        assert_eq!(findings.suggestions[0].risk_level, RiskLevel::High);
        assert!(findings.suggestions[0].basis.contains("ECBC"));
        assert!(findings.suggestions[0].basis.contains("Fire NOC"));
    }

    #[test]
    fn analysis_is_deterministic() {
        let state = ProjectState::new().with_equipment_added(Equipment {
            origin: Origin::Imported,
            lead_time_weeks: 20,
            efficiency_value: 2.5,
            ..item("ch-5")
        });

        let thresholds = AnalysisThresholds::default();
        assert_eq!(analyze(&state, &thresholds), analyze(&state, &thresholds));
    }

    #[test]
    fn total_leak_amount_sums_all_leaks() {
        let state = ProjectState::new().with_equipment_added(Equipment {
            origin: Origin::Imported,
            lead_time_weeks: 14,
            efficiency_value: 2.8,
            ..item("ch-6")
        });

        let findings = analyze(&state, &AnalysisThresholds::default());
        assert_eq!(findings.leaks.len(), 2);
        assert!((findings.total_leak_amount() - 44_000.0).abs() < 1e-6);
    }
}
