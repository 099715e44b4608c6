//! West Virginia amounts published for each supported tax year.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tax_core::{BracketTable, BracketTableError, BracketTables, FilingStatus, Jurisdiction, StateCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WestVirginiaParameters {
    pub tax_year: i32,
    pub exemption_amount: Decimal,
}

impl WestVirginiaParameters {
    pub fn for_year(tax_year: i32) -> Option<Self> {
        match tax_year {
            2024 => Some(Self {
                tax_year: 2024,
                exemption_amount: dec!(2000),
            }),
            _ => None,
        }
    }
}

const BOUNDS_2024: [Decimal; 4] = [dec!(10000), dec!(25000), dec!(40000), dec!(60000)];
const RATES_2024: [Decimal; 5] = [
    dec!(0.0236),
    dec!(0.0315),
    dec!(0.0354),
    dec!(0.0472),
    dec!(0.0512),
];

/// Married filing separately uses the same rates at half the bounds.
pub fn bracket_tables() -> Result<BracketTables, BracketTableError> {
    let state = Jurisdiction::State(StateCode::WV);
    let halved: Vec<Decimal> = BOUNDS_2024.iter().map(|bound| *bound / dec!(2)).collect();

    let mut tables = BracketTables::new();
    tables.insert_for_statuses(
        state,
        2024,
        &[
            FilingStatus::Single,
            FilingStatus::MarriedFilingJointly,
            FilingStatus::HeadOfHousehold,
            FilingStatus::QualifyingSurvivingSpouse,
        ],
        &BracketTable::from_bounds(&BOUNDS_2024, &RATES_2024)?,
    );
    tables.insert_for_statuses(
        state,
        2024,
        &[FilingStatus::MarriedFilingSeparately],
        &BracketTable::from_bounds(&halved, &RATES_2024)?,
    );
    Ok(tables)
}
