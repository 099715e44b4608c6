//! Federal amounts published for each supported tax year.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tax_core::{BracketTable, BracketTableError, BracketTables, FilingStatus, Jurisdiction};

use super::ByStatus;

/// One column of the earned income credit table, by number of qualifying
/// children (0, 1, 2, 3 or more).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EicSchedule {
    pub max_credit: Decimal,
    pub phase_in_rate: Decimal,
    pub phase_out_rate: Decimal,
    pub phase_out_start: Decimal,
    pub phase_out_start_joint: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EarnedIncomeCreditParameters {
    pub schedules: [EicSchedule; 4],
    pub investment_income_limit: Decimal,
    /// Age range for claiming the credit without a qualifying child.
    pub childless_min_age: i32,
    pub childless_max_age: i32,
}

impl EarnedIncomeCreditParameters {
    pub fn schedule(
        &self,
        qualifying_children: usize,
    ) -> &EicSchedule {
        &self.schedules[qualifying_children.min(self.schedules.len() - 1)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildTaxCreditParameters {
    pub per_child: Decimal,
    pub per_other_dependent: Decimal,
    pub phase_out_threshold: Decimal,
    pub phase_out_threshold_joint: Decimal,
    /// The reduction applies per started step of income over the threshold.
    pub phase_out_step: Decimal,
    pub reduction_per_step: Decimal,
    pub refundable_per_child: Decimal,
    pub earned_income_floor: Decimal,
    pub refundable_rate: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependentCareParameters {
    pub expense_limit_one: Decimal,
    pub expense_limit_two_or_more: Decimal,
    pub max_rate: Decimal,
    pub min_rate: Decimal,
    pub agi_floor: Decimal,
    /// Each started step over the floor lowers the rate by `rate_decrement`.
    pub agi_step: Decimal,
    pub rate_decrement: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudentLoanInterestParameters {
    pub max_deduction: Decimal,
    pub phase_out_start: Decimal,
    pub phase_out_range: Decimal,
    pub phase_out_start_joint: Decimal,
    pub phase_out_range_joint: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FederalParameters {
    pub tax_year: i32,
    pub standard_deduction: ByStatus,
    /// Per 65-or-older or blind box checked.
    pub additional_standard_deduction: ByStatus,
    pub earned_income_credit: EarnedIncomeCreditParameters,
    pub child_tax_credit: ChildTaxCreditParameters,
    pub dependent_care: DependentCareParameters,
    pub student_loan_interest: StudentLoanInterestParameters,
    pub additional_medicare_rate: Decimal,
    pub additional_medicare_threshold: ByStatus,
    /// Regular Medicare rate withheld on all wages.
    pub medicare_rate: Decimal,
    pub net_investment_income_rate: Decimal,
    pub net_investment_income_threshold: ByStatus,
    /// Interest or dividends above this require Schedule B.
    pub schedule_b_threshold: Decimal,
}

impl FederalParameters {
    pub fn for_year(tax_year: i32) -> Option<Self> {
        match tax_year {
            2024 => Some(Self::tax_year_2024()),
            _ => None,
        }
    }

    fn tax_year_2024() -> Self {
        Self {
            tax_year: 2024,
            standard_deduction: ByStatus {
                single: dec!(14600),
                married_filing_jointly: dec!(29200),
                married_filing_separately: dec!(14600),
                head_of_household: dec!(21900),
                qualifying_surviving_spouse: dec!(29200),
            },
            additional_standard_deduction: ByStatus {
                single: dec!(1950),
                married_filing_jointly: dec!(1550),
                married_filing_separately: dec!(1550),
                head_of_household: dec!(1950),
                qualifying_surviving_spouse: dec!(1550),
            },
            earned_income_credit: EarnedIncomeCreditParameters {
                schedules: [
                    EicSchedule {
                        max_credit: dec!(632),
                        phase_in_rate: dec!(0.0765),
                        phase_out_rate: dec!(0.0765),
                        phase_out_start: dec!(10330),
                        phase_out_start_joint: dec!(17250),
                    },
                    EicSchedule {
                        max_credit: dec!(4213),
                        phase_in_rate: dec!(0.34),
                        phase_out_rate: dec!(0.1598),
                        phase_out_start: dec!(22720),
                        phase_out_start_joint: dec!(29640),
                    },
                    EicSchedule {
                        max_credit: dec!(6960),
                        phase_in_rate: dec!(0.40),
                        phase_out_rate: dec!(0.2106),
                        phase_out_start: dec!(22720),
                        phase_out_start_joint: dec!(29640),
                    },
                    EicSchedule {
                        max_credit: dec!(7830),
                        phase_in_rate: dec!(0.45),
                        phase_out_rate: dec!(0.2106),
                        phase_out_start: dec!(22720),
                        phase_out_start_joint: dec!(29640),
                    },
                ],
                investment_income_limit: dec!(11600),
                childless_min_age: 25,
                childless_max_age: 64,
            },
            child_tax_credit: ChildTaxCreditParameters {
                per_child: dec!(2000),
                per_other_dependent: dec!(500),
                phase_out_threshold: dec!(200000),
                phase_out_threshold_joint: dec!(400000),
                phase_out_step: dec!(1000),
                reduction_per_step: dec!(50),
                refundable_per_child: dec!(1700),
                earned_income_floor: dec!(2500),
                refundable_rate: dec!(0.15),
            },
            dependent_care: DependentCareParameters {
                expense_limit_one: dec!(3000),
                expense_limit_two_or_more: dec!(6000),
                max_rate: dec!(0.35),
                min_rate: dec!(0.20),
                agi_floor: dec!(15000),
                agi_step: dec!(2000),
                rate_decrement: dec!(0.01),
            },
            student_loan_interest: StudentLoanInterestParameters {
                max_deduction: dec!(2500),
                phase_out_start: dec!(80000),
                phase_out_range: dec!(15000),
                phase_out_start_joint: dec!(165000),
                phase_out_range_joint: dec!(30000),
            },
            additional_medicare_rate: dec!(0.009),
            additional_medicare_threshold: ByStatus {
                single: dec!(200000),
                married_filing_jointly: dec!(250000),
                married_filing_separately: dec!(125000),
                head_of_household: dec!(200000),
                qualifying_surviving_spouse: dec!(200000),
            },
            medicare_rate: dec!(0.0145),
            net_investment_income_rate: dec!(0.038),
            net_investment_income_threshold: ByStatus {
                single: dec!(200000),
                married_filing_jointly: dec!(250000),
                married_filing_separately: dec!(125000),
                head_of_household: dec!(200000),
                qualifying_surviving_spouse: dec!(250000),
            },
            schedule_b_threshold: dec!(1500),
        }
    }
}

const RATES: [Decimal; 7] = [
    dec!(0.10),
    dec!(0.12),
    dec!(0.22),
    dec!(0.24),
    dec!(0.32),
    dec!(0.35),
    dec!(0.37),
];

/// 2024 ordinary income brackets (Rev. Proc. 2023-34).
pub fn bracket_tables() -> Result<BracketTables, BracketTableError> {
    let single = BracketTable::from_bounds(
        &[
            dec!(11600),
            dec!(47150),
            dec!(100525),
            dec!(191950),
            dec!(243725),
            dec!(609350),
        ],
        &RATES,
    )?;
    let joint = BracketTable::from_bounds(
        &[
            dec!(23200),
            dec!(94300),
            dec!(201050),
            dec!(383900),
            dec!(487450),
            dec!(731200),
        ],
        &RATES,
    )?;
    let separate = BracketTable::from_bounds(
        &[
            dec!(11600),
            dec!(47150),
            dec!(100525),
            dec!(191950),
            dec!(243725),
            dec!(365600),
        ],
        &RATES,
    )?;
    let head_of_household = BracketTable::from_bounds(
        &[
            dec!(16550),
            dec!(63100),
            dec!(100500),
            dec!(191950),
            dec!(243700),
            dec!(609350),
        ],
        &RATES,
    )?;

    let mut tables = BracketTables::new();
    tables.insert_for_statuses(Jurisdiction::Federal, 2024, &[FilingStatus::Single], &single);
    tables.insert_for_statuses(
        Jurisdiction::Federal,
        2024,
        &[
            FilingStatus::MarriedFilingJointly,
            FilingStatus::QualifyingSurvivingSpouse,
        ],
        &joint,
    );
    tables.insert_for_statuses(
        Jurisdiction::Federal,
        2024,
        &[FilingStatus::MarriedFilingSeparately],
        &separate,
    );
    tables.insert_for_statuses(
        Jurisdiction::Federal,
        2024,
        &[FilingStatus::HeadOfHousehold],
        &head_of_household,
    );
    Ok(tables)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tax_core::calculations::progressive_tax;

    use super::*;

    #[test]
    fn only_2024_is_published() {
        assert!(FederalParameters::for_year(2024).is_some());
        assert!(FederalParameters::for_year(2019).is_none());
    }

    #[test]
    fn eic_schedule_caps_at_three_children() {
        let params = FederalParameters::for_year(2024).unwrap();
        let eic = params.earned_income_credit;

        assert_eq!(eic.schedule(5).max_credit, dec!(7830));
        assert_eq!(eic.schedule(0).max_credit, dec!(632));
    }

    #[test]
    fn single_tax_on_published_table_row() {
        let tables = bracket_tables().unwrap();
        let single = tables
            .get(Jurisdiction::Federal, 2024, FilingStatus::Single)
            .unwrap();

        // 1160 + 4266 + 627
        assert_eq!(progressive_tax(single, dec!(50000)), dec!(6053));
    }

    #[test]
    fn surviving_spouse_shares_joint_brackets() {
        let tables = bracket_tables().unwrap();

        assert_eq!(
            tables.get(Jurisdiction::Federal, 2024, FilingStatus::QualifyingSurvivingSpouse),
            tables.get(Jurisdiction::Federal, 2024, FilingStatus::MarriedFilingJointly)
        );
    }
}
