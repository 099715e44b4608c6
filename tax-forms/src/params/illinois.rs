//! Illinois amounts published for each supported tax year.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tax_core::{BracketTable, BracketTableError, BracketTables, FilingStatus, Jurisdiction, StateCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IllinoisParameters {
    pub tax_year: i32,
    /// Per exemption claimed for the filer, spouse and dependents.
    pub exemption_allowance: Decimal,
    /// Per 65-or-older or legally blind filer.
    pub senior_or_blind_allowance: Decimal,
    /// Above this federal AGI no exemption allowance is allowed.
    pub exemption_agi_limit: Decimal,
    pub exemption_agi_limit_joint: Decimal,
    /// Share of the federal earned income credit.
    pub earned_income_credit_rate: Decimal,
}

impl IllinoisParameters {
    pub fn for_year(tax_year: i32) -> Option<Self> {
        match tax_year {
            2024 => Some(Self {
                tax_year: 2024,
                exemption_allowance: dec!(2775),
                senior_or_blind_allowance: dec!(1000),
                exemption_agi_limit: dec!(250000),
                exemption_agi_limit_joint: dec!(500000),
                earned_income_credit_rate: dec!(0.20),
            }),
            _ => None,
        }
    }
}

const FLAT_RATE_2024: Decimal = dec!(0.0495);

/// Illinois taxes net income at one rate regardless of filing status.
pub fn bracket_tables() -> Result<BracketTables, BracketTableError> {
    let mut tables = BracketTables::new();
    tables.insert_for_statuses(
        Jurisdiction::State(StateCode::IL),
        2024,
        &FilingStatus::ALL,
        &BracketTable::flat(FLAT_RATE_2024)?,
    );
    Ok(tables)
}
