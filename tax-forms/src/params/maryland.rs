//! Maryland state and local amounts published for each supported tax year.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tax_core::{
    BracketTable, BracketTableError, BracketTables, FilingStatus, Jurisdiction, Locality,
    StateCode,
};

/// Per-exemption amount allowed up to an AGI limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExemptionTier {
    /// `None` for the last tier.
    pub agi_limit: Option<Decimal>,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarylandParameters {
    pub tax_year: i32,
    pub standard_deduction_rate: Decimal,
    pub standard_deduction_min: Decimal,
    pub standard_deduction_max: Decimal,
    pub standard_deduction_min_joint: Decimal,
    pub standard_deduction_max_joint: Decimal,
    /// Tiers for single and married filing separately returns.
    pub exemption_tiers: Vec<ExemptionTier>,
    /// Tiers for joint, head of household and surviving spouse returns.
    pub exemption_tiers_joint: Vec<ExemptionTier>,
    /// Per 65-or-older or blind filer, regardless of income.
    pub senior_or_blind_exemption: Decimal,
    /// Share of the federal earned income credit, limited to state tax.
    pub earned_income_credit_rate: Decimal,
    /// Local credit is federal EIC times this times the local rate.
    pub local_earned_income_credit_factor: Decimal,
}

impl MarylandParameters {
    pub fn for_year(tax_year: i32) -> Option<Self> {
        match tax_year {
            2024 => Some(Self::tax_year_2024()),
            _ => None,
        }
    }

    fn tax_year_2024() -> Self {
        Self {
            tax_year: 2024,
            standard_deduction_rate: dec!(0.15),
            standard_deduction_min: dec!(1800),
            standard_deduction_max: dec!(2700),
            standard_deduction_min_joint: dec!(3650),
            standard_deduction_max_joint: dec!(5450),
            exemption_tiers: vec![
                ExemptionTier {
                    agi_limit: Some(dec!(100000)),
                    amount: dec!(3200),
                },
                ExemptionTier {
                    agi_limit: Some(dec!(125000)),
                    amount: dec!(1600),
                },
                ExemptionTier {
                    agi_limit: Some(dec!(150000)),
                    amount: dec!(800),
                },
                ExemptionTier {
                    agi_limit: None,
                    amount: Decimal::ZERO,
                },
            ],
            exemption_tiers_joint: vec![
                ExemptionTier {
                    agi_limit: Some(dec!(150000)),
                    amount: dec!(3200),
                },
                ExemptionTier {
                    agi_limit: Some(dec!(175000)),
                    amount: dec!(1600),
                },
                ExemptionTier {
                    agi_limit: Some(dec!(200000)),
                    amount: dec!(800),
                },
                ExemptionTier {
                    agi_limit: None,
                    amount: Decimal::ZERO,
                },
            ],
            senior_or_blind_exemption: dec!(1000),
            earned_income_credit_rate: dec!(0.50),
            local_earned_income_credit_factor: dec!(10),
        }
    }

    fn uses_single_schedule(status: FilingStatus) -> bool {
        matches!(
            status,
            FilingStatus::Single | FilingStatus::MarriedFilingSeparately
        )
    }

    /// `(min, max)` bounds of the percentage standard deduction.
    pub fn standard_deduction_bounds(
        &self,
        status: FilingStatus,
    ) -> (Decimal, Decimal) {
        if Self::uses_single_schedule(status) {
            (self.standard_deduction_min, self.standard_deduction_max)
        } else {
            (
                self.standard_deduction_min_joint,
                self.standard_deduction_max_joint,
            )
        }
    }

    /// Amount allowed per exemption at the given Maryland AGI.
    pub fn exemption_amount(
        &self,
        status: FilingStatus,
        agi: Decimal,
    ) -> Decimal {
        let tiers = if Self::uses_single_schedule(status) {
            &self.exemption_tiers
        } else {
            &self.exemption_tiers_joint
        };

        tiers
            .iter()
            .find(|tier| tier.agi_limit.is_none_or(|limit| agi <= limit))
            .map_or(Decimal::ZERO, |tier| tier.amount)
    }

    /// County or Baltimore City income tax rate.
    pub fn local_rate(
        &self,
        locality: Locality,
    ) -> Decimal {
        match locality {
            Locality::MdAnneArundel => dec!(0.0281),
            Locality::MdBaltimoreCity
            | Locality::MdBaltimoreCounty
            | Locality::MdHoward
            | Locality::MdMontgomery
            | Locality::MdPrinceGeorges => dec!(0.032),
            Locality::MdWorcester => dec!(0.0225),
        }
    }
}

const RATES_2024: [Decimal; 8] = [
    dec!(0.02),
    dec!(0.03),
    dec!(0.04),
    dec!(0.0475),
    dec!(0.05),
    dec!(0.0525),
    dec!(0.055),
    dec!(0.0575),
];

pub fn bracket_tables() -> Result<BracketTables, BracketTableError> {
    let state = Jurisdiction::State(StateCode::MD);
    let single = BracketTable::from_bounds(
        &[
            dec!(1000),
            dec!(2000),
            dec!(3000),
            dec!(100000),
            dec!(125000),
            dec!(150000),
            dec!(250000),
        ],
        &RATES_2024,
    )?;
    let joint = BracketTable::from_bounds(
        &[
            dec!(1000),
            dec!(2000),
            dec!(3000),
            dec!(150000),
            dec!(175000),
            dec!(225000),
            dec!(300000),
        ],
        &RATES_2024,
    )?;

    let mut tables = BracketTables::new();
    tables.insert_for_statuses(
        state,
        2024,
        &[FilingStatus::Single, FilingStatus::MarriedFilingSeparately],
        &single,
    );
    tables.insert_for_statuses(
        state,
        2024,
        &[
            FilingStatus::MarriedFilingJointly,
            FilingStatus::HeadOfHousehold,
            FilingStatus::QualifyingSurvivingSpouse,
        ],
        &joint,
    );
    Ok(tables)
}
