//! Progressive bracket tax.
//!
//! Every progressive-rate jurisdiction computes its tax with this one walk
//! over a [`BracketTable`]; flat-rate jurisdictions use a single-bracket table.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::BracketTable;
//! use tax_core::calculations::brackets::progressive_tax;
//!
//! let table = BracketTable::from_bounds(
//!     &[dec!(10000), dec!(25000), dec!(40000), dec!(60000)],
//!     &[dec!(0.0236), dec!(0.0315), dec!(0.0354), dec!(0.0472), dec!(0.0512)],
//! )
//! .unwrap();
//!
//! // 236 + 472.50 + 531 + 472 = 1711.50
//! assert_eq!(progressive_tax(&table, dec!(50000)), dec!(1712));
//! ```

use rust_decimal::Decimal;

use crate::calculations::common::round_to_dollar;
use crate::models::BracketTable;

/// Tax on `taxable_income` before rounding.
///
/// Each bracket taxes the slice of income above the previous upper bound and
/// up to its own. An income exactly on a bound is taxed entirely at the lower
/// bracket's rate. Zero or negative income owes nothing.
pub fn bracket_tax(
    table: &BracketTable,
    taxable_income: Decimal,
) -> Decimal {
    if taxable_income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let mut tax = Decimal::ZERO;
    let mut lower = Decimal::ZERO;

    for bracket in table.brackets() {
        let upper = bracket
            .upper_bound
            .map_or(taxable_income, |bound| bound.min(taxable_income));
        if upper > lower {
            tax += (upper - lower) * bracket.rate;
        }

        match bracket.upper_bound {
            Some(bound) if bound < taxable_income => lower = bound,
            _ => break,
        }
    }

    tax
}

/// Tax on `taxable_income`, rounded half-up to whole currency units.
pub fn progressive_tax(
    table: &BracketTable,
    taxable_income: Decimal,
) -> Decimal {
    round_to_dollar(bracket_tax(table, taxable_income))
}
