//! Published per-year amounts the forms are computed from.
//!
//! Bracket schedules are kept apart from the other parameters because they
//! are also loaded from external data; [`builtin_bracket_tables`] is the
//! shipped default set.

pub mod federal;
pub mod illinois;
pub mod maryland;
pub mod west_virginia;

use rust_decimal::Decimal;
use tax_core::{BracketTableError, BracketTables, FilingStatus};

pub use federal::FederalParameters;
pub use illinois::IllinoisParameters;
pub use maryland::MarylandParameters;
pub use west_virginia::WestVirginiaParameters;

/// An amount that differs by filing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByStatus {
    pub single: Decimal,
    pub married_filing_jointly: Decimal,
    pub married_filing_separately: Decimal,
    pub head_of_household: Decimal,
    pub qualifying_surviving_spouse: Decimal,
}

impl ByStatus {
    /// Same amount for every status.
    pub fn uniform(amount: Decimal) -> Self {
        Self {
            single: amount,
            married_filing_jointly: amount,
            married_filing_separately: amount,
            head_of_household: amount,
            qualifying_surviving_spouse: amount,
        }
    }

    pub fn get(
        &self,
        status: FilingStatus,
    ) -> Decimal {
        match status {
            FilingStatus::Single => self.single,
            FilingStatus::MarriedFilingJointly => self.married_filing_jointly,
            FilingStatus::MarriedFilingSeparately => self.married_filing_separately,
            FilingStatus::HeadOfHousehold => self.head_of_household,
            FilingStatus::QualifyingSurvivingSpouse => self.qualifying_surviving_spouse,
        }
    }
}

/// Every bracket schedule shipped with the crate.
///
/// # Errors
///
/// Returns [`BracketTableError`] if a shipped schedule is malformed.
pub fn builtin_bracket_tables() -> Result<BracketTables, BracketTableError> {
    let mut tables = BracketTables::new();
    tables.extend(federal::bracket_tables()?);
    tables.extend(illinois::bracket_tables()?);
    tables.extend(west_virginia::bracket_tables()?);
    tables.extend(maryland::bracket_tables()?);
    Ok(tables)
}
