//! Policy configuration types.
//!
//! This module contains the strongly-typed policy structures that are
//! deserialized from YAML configuration files. The defaults reproduce the
//! ratios the product has always shipped with; treat them as default
//! policy rather than confirmed business rules.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about the policy table.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyMetadata {
    /// Human-readable name of the policy.
    pub name: String,
    /// Jurisdiction the policy applies to (e.g., "IN").
    pub region: String,
    /// Version or effective date of the policy.
    pub version: String,
}

impl Default for PolicyMetadata {
    fn default() -> Self {
        Self {
            name: "Default payroll policy".to_string(),
            region: "IN".to_string(),
            version: "built-in".to_string(),
        }
    }
}

/// Thresholds for the compliance checks in the CTC breakdown view.
///
/// Values are percentages (0-100), matching how the checks are displayed.
#[derive(Debug, Clone, Deserialize)]
pub struct ComplianceThresholds {
    /// Minimum acceptable basic as a percentage of CTC.
    pub basic_pct_min: Decimal,
    /// Maximum acceptable basic as a percentage of CTC.
    pub basic_pct_max: Decimal,
    /// Maximum acceptable HRA as a percentage of basic.
    pub hra_max_pct_of_basic: Decimal,
}

impl Default for ComplianceThresholds {
    fn default() -> Self {
        Self {
            basic_pct_min: Decimal::from(30),
            basic_pct_max: Decimal::from(50),
            hra_max_pct_of_basic: Decimal::from(50),
        }
    }
}

/// Salary derivation ratios and statutory amounts.
///
/// All monetary values are in whole currency units per month unless noted.
#[derive(Debug, Clone, Deserialize)]
pub struct SalaryPolicy {
    /// Basic as a fraction of monthly gross.
    pub basic_pct: Decimal,
    /// HRA as a fraction of basic.
    pub hra_pct_of_basic: Decimal,
    /// Income tax as a fraction of monthly gross.
    pub tax_pct: Decimal,
    /// Employee PF contribution as a fraction of basic.
    pub pf_pct: Decimal,
    /// Monthly cap on the employee PF deduction.
    pub pf_monthly_cap: Decimal,
    /// Flat monthly professional tax.
    pub professional_tax: Decimal,
    /// Employer PF contribution as a fraction of PF wage.
    pub employer_pf_pct: Decimal,
    /// Monthly wage ceiling for the employer PF contribution.
    pub employer_pf_wage_ceiling: Decimal,
    /// Annual standard deduction applied before tax-slab lookup.
    pub standard_deduction: Decimal,
    /// Compliance thresholds for the breakdown view.
    #[serde(default)]
    pub compliance: ComplianceThresholds,
}

impl Default for SalaryPolicy {
    fn default() -> Self {
        Self {
            basic_pct: Decimal::new(40, 2),
            hra_pct_of_basic: Decimal::new(40, 2),
            tax_pct: Decimal::new(5, 2),
            pf_pct: Decimal::new(12, 2),
            pf_monthly_cap: Decimal::from(1800),
            professional_tax: Decimal::from(200),
            employer_pf_pct: Decimal::new(12, 2),
            employer_pf_wage_ceiling: Decimal::from(15000),
            standard_deduction: Decimal::from(50000),
            compliance: ComplianceThresholds::default(),
        }
    }
}

/// One row of the tax slab table.
///
/// A slab covers annual taxable income in `lower..upper`; the final slab
/// has no upper bound.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxSlab {
    /// Inclusive lower bound of the slab.
    pub lower: Decimal,
    /// Exclusive upper bound; `None` for the top slab.
    pub upper: Option<Decimal>,
    /// Tax rate for income inside the slab, as a fraction.
    pub rate: Decimal,
    /// Display label (e.g., "5% (₹2.5L - ₹5L)").
    pub label: String,
}

/// Tax slabs configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxSlabsConfig {
    /// The slab rows, in any order; sorted on load.
    pub slabs: Vec<TaxSlab>,
}

/// The complete policy configuration.
///
/// Aggregates everything loaded from a policy directory. Slabs are kept
/// sorted by lower bound so lookups and progressive sums can walk them
/// in order.
#[derive(Debug, Clone)]
pub struct PolicyConfig {
    metadata: PolicyMetadata,
    salary: SalaryPolicy,
    tax_slabs: Vec<TaxSlab>,
}

impl PolicyConfig {
    /// Creates a new PolicyConfig from its component parts.
    pub fn new(metadata: PolicyMetadata, salary: SalaryPolicy, tax_slabs: Vec<TaxSlab>) -> Self {
        let mut sorted_slabs = tax_slabs;
        sorted_slabs.sort_by(|a, b| a.lower.cmp(&b.lower));
        Self {
            metadata,
            salary,
            tax_slabs: sorted_slabs,
        }
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        &self.metadata
    }

    /// Returns the salary policy table.
    pub fn salary(&self) -> &SalaryPolicy {
        &self.salary
    }

    /// Returns the tax slabs, sorted by lower bound.
    pub fn tax_slabs(&self) -> &[TaxSlab] {
        &self.tax_slabs
    }

    /// Finds the slab containing the given annual taxable income.
    pub fn slab_for(&self, annual_taxable: Decimal) -> Option<&TaxSlab> {
        self.tax_slabs.iter().find(|s| {
            annual_taxable >= s.lower && s.upper.is_none_or(|upper| annual_taxable < upper)
        })
    }
}

impl Default for PolicyConfig {
    /// The built-in policy: the ratios and slabs the product shipped with.
    fn default() -> Self {
        Self::new(
            PolicyMetadata::default(),
            SalaryPolicy::default(),
            default_tax_slabs(),
        )
    }
}

/// The built-in tax slab table (old-regime style thresholds).
fn default_tax_slabs() -> Vec<TaxSlab> {
    vec![
        TaxSlab {
            lower: Decimal::ZERO,
            upper: Some(Decimal::from(250_000)),
            rate: Decimal::ZERO,
            label: "0% (up to ₹2.5L)".to_string(),
        },
        TaxSlab {
            lower: Decimal::from(250_000),
            upper: Some(Decimal::from(500_000)),
            rate: Decimal::new(5, 2),
            label: "5% (₹2.5L - ₹5L)".to_string(),
        },
        TaxSlab {
            lower: Decimal::from(500_000),
            upper: Some(Decimal::from(1_000_000)),
            rate: Decimal::new(20, 2),
            label: "20% (₹5L - ₹10L)".to_string(),
        },
        TaxSlab {
            lower: Decimal::from(1_000_000),
            upper: None,
            rate: Decimal::new(30, 2),
            label: "30% (above ₹10L)".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_policy_matches_shipped_constants() {
        let policy = SalaryPolicy::default();
        assert_eq!(policy.basic_pct, dec("0.40"));
        assert_eq!(policy.hra_pct_of_basic, dec("0.40"));
        assert_eq!(policy.tax_pct, dec("0.05"));
        assert_eq!(policy.pf_monthly_cap, dec("1800"));
        assert_eq!(policy.professional_tax, dec("200"));
        assert_eq!(policy.employer_pf_wage_ceiling, dec("15000"));
    }

    #[test]
    fn test_slab_for_picks_containing_slab() {
        let config = PolicyConfig::default();

        let slab = config.slab_for(dec("449992")).unwrap();
        assert_eq!(slab.rate, dec("0.05"));
        assert_eq!(slab.label, "5% (₹2.5L - ₹5L)");

        let slab = config.slab_for(dec("100000")).unwrap();
        assert_eq!(slab.rate, Decimal::ZERO);

        let slab = config.slab_for(dec("2000000")).unwrap();
        assert_eq!(slab.rate, dec("0.30"));
    }

    #[test]
    fn test_slab_bounds_are_lower_inclusive_upper_exclusive() {
        let config = PolicyConfig::default();
        assert_eq!(config.slab_for(dec("250000")).unwrap().rate, dec("0.05"));
        assert_eq!(config.slab_for(dec("249999.99")).unwrap().rate, Decimal::ZERO);
    }

    #[test]
    fn test_new_sorts_slabs_by_lower_bound() {
        let slabs = vec![
            TaxSlab {
                lower: dec("500000"),
                upper: None,
                rate: dec("0.20"),
                label: "upper".to_string(),
            },
            TaxSlab {
                lower: Decimal::ZERO,
                upper: Some(dec("500000")),
                rate: Decimal::ZERO,
                label: "lower".to_string(),
            },
        ];

        let config = PolicyConfig::new(PolicyMetadata::default(), SalaryPolicy::default(), slabs);
        assert_eq!(config.tax_slabs()[0].label, "lower");
        assert_eq!(config.tax_slabs()[1].label, "upper");
    }

    #[test]
    fn test_slabs_deserialize_from_yaml() {
        let yaml = r#"
slabs:
  - lower: 0
    upper: 250000
    rate: 0
    label: "0% (up to ₹2.5L)"
  - lower: 250000
    upper: ~
    rate: 0.05
    label: "5% (above ₹2.5L)"
"#;
        let parsed: TaxSlabsConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(parsed.slabs.len(), 2);
        assert_eq!(parsed.slabs[1].upper, None);
        assert_eq!(parsed.slabs[1].rate, dec("0.05"));
    }
}
