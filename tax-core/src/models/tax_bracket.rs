use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::models::{FilingStatus, Jurisdiction};

/// Errors raised while building a [`BracketTable`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BracketTableError {
    #[error("bracket table needs at least one rate")]
    Empty,

    #[error("{bounds} upper bounds need {expected} rates, got {rates}")]
    RateCountMismatch {
        bounds: usize,
        rates: usize,
        expected: usize,
    },

    #[error("upper bounds must be strictly ascending, {previous} is followed by {next}")]
    NotAscending { previous: Decimal, next: Decimal },

    #[error("upper bound must be positive, got {0}")]
    NonPositiveBound(Decimal),

    #[error("marginal rate must be between 0 and 1, got {0}")]
    InvalidRate(Decimal),

    #[error("only the last bracket may be unbounded")]
    UnboundedBeforeLast,
}

/// One slice of a progressive schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// `None` for the top bracket.
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

/// Ordered marginal-rate schedule; the last bracket is unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TaxBracket>", into = "Vec<TaxBracket>")]
pub struct BracketTable {
    brackets: Vec<TaxBracket>,
}

impl BracketTable {
    /// Builds a table from `n` ascending upper bounds and `n + 1` rates.
    ///
    /// # Errors
    ///
    /// Returns [`BracketTableError`] if the counts disagree, the bounds are
    /// not strictly ascending and positive, or a rate is outside `[0, 1]`.
    pub fn from_bounds(
        bounds: &[Decimal],
        rates: &[Decimal],
    ) -> Result<Self, BracketTableError> {
        if rates.is_empty() {
            return Err(BracketTableError::Empty);
        }
        if rates.len() != bounds.len() + 1 {
            return Err(BracketTableError::RateCountMismatch {
                bounds: bounds.len(),
                rates: rates.len(),
                expected: bounds.len() + 1,
            });
        }

        let brackets: Vec<TaxBracket> = rates
            .iter()
            .enumerate()
            .map(|(i, rate)| TaxBracket {
                upper_bound: bounds.get(i).copied(),
                rate: *rate,
            })
            .collect();

        Self::try_from(brackets)
    }

    /// A single unbounded bracket.
    ///
    /// # Errors
    ///
    /// Returns [`BracketTableError::InvalidRate`] if `rate` is outside `[0, 1]`.
    pub fn flat(rate: Decimal) -> Result<Self, BracketTableError> {
        Self::from_bounds(&[], &[rate])
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    pub fn top_rate(&self) -> Decimal {
        self.brackets
            .last()
            .map_or(Decimal::ZERO, |bracket| bracket.rate)
    }
}

impl TryFrom<Vec<TaxBracket>> for BracketTable {
    type Error = BracketTableError;

    fn try_from(brackets: Vec<TaxBracket>) -> Result<Self, Self::Error> {
        let Some((last, rest)) = brackets.split_last() else {
            return Err(BracketTableError::Empty);
        };
        let top_rate = last.rate;

        let mut previous = Decimal::ZERO;
        for bracket in rest {
            let bound = bracket
                .upper_bound
                .ok_or(BracketTableError::UnboundedBeforeLast)?;
            if bound <= Decimal::ZERO {
                return Err(BracketTableError::NonPositiveBound(bound));
            }
            if bound <= previous {
                return Err(BracketTableError::NotAscending {
                    previous,
                    next: bound,
                });
            }
            previous = bound;
        }

        for bracket in &brackets {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(BracketTableError::InvalidRate(bracket.rate));
            }
        }

        // The top bracket is unbounded whatever the source says.
        let mut brackets = brackets;
        let top = brackets.len() - 1;
        brackets[top] = TaxBracket {
            upper_bound: None,
            rate: top_rate,
        };

        Ok(Self { brackets })
    }
}

impl From<BracketTable> for Vec<TaxBracket> {
    fn from(table: BracketTable) -> Self {
        table.brackets
    }
}

/// Identifies which schedule a table is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BracketKey {
    pub jurisdiction: Jurisdiction,
    pub tax_year: i32,
    pub filing_status: FilingStatus,
}

/// Immutable set of bracket schedules, supplied as configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BracketTables {
    tables: HashMap<BracketKey, BracketTable>,
}

impl BracketTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a schedule. A schedule already present for the same key is
    /// replaced.
    pub fn insert(
        &mut self,
        key: BracketKey,
        table: BracketTable,
    ) {
        if self.tables.insert(key, table).is_some() {
            warn!(
                jurisdiction = %key.jurisdiction,
                tax_year = key.tax_year,
                filing_status = %key.filing_status,
                "replacing existing bracket table"
            );
        }
    }

    /// Adds the same schedule under several filing statuses.
    pub fn insert_for_statuses(
        &mut self,
        jurisdiction: Jurisdiction,
        tax_year: i32,
        statuses: &[FilingStatus],
        table: &BracketTable,
    ) {
        for filing_status in statuses {
            self.insert(
                BracketKey {
                    jurisdiction,
                    tax_year,
                    filing_status: *filing_status,
                },
                table.clone(),
            );
        }
    }

    /// Copies every schedule from `other`, replacing same-keyed entries.
    pub fn extend(
        &mut self,
        other: BracketTables,
    ) {
        for (key, table) in other.tables {
            self.insert(key, table);
        }
    }

    pub fn get(
        &self,
        jurisdiction: Jurisdiction,
        tax_year: i32,
        filing_status: FilingStatus,
    ) -> Option<&BracketTable> {
        self.tables.get(&BracketKey {
            jurisdiction,
            tax_year,
            filing_status,
        })
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tracing_subscriber::fmt::format::FmtSpan;

    use super::*;
    use crate::models::StateCode;

    /// Initializes tracing subscriber for tests that verify log output.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_span_events(FmtSpan::NONE)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    // =========================================================================
    // BracketTable construction tests
    // =========================================================================

    #[test]
    fn from_bounds_pairs_rates_with_bounds_and_leaves_top_open() {
        let table =
            BracketTable::from_bounds(&[dec!(10000)], &[dec!(0.02), dec!(0.04)]).unwrap();

        assert_eq!(
            table.brackets(),
            &[
                TaxBracket {
                    upper_bound: Some(dec!(10000)),
                    rate: dec!(0.02),
                },
                TaxBracket {
                    upper_bound: None,
                    rate: dec!(0.04),
                },
            ]
        );
        assert_eq!(table.top_rate(), dec!(0.04));
    }

    #[test]
    fn from_bounds_rejects_rate_count_mismatch() {
        let result = BracketTable::from_bounds(&[dec!(10000)], &[dec!(0.02)]);

        assert_eq!(
            result,
            Err(BracketTableError::RateCountMismatch {
                bounds: 1,
                rates: 1,
                expected: 2,
            })
        );
    }

    #[test]
    fn from_bounds_rejects_descending_bounds() {
        let result = BracketTable::from_bounds(
            &[dec!(20000), dec!(10000)],
            &[dec!(0.01), dec!(0.02), dec!(0.03)],
        );

        assert_eq!(
            result,
            Err(BracketTableError::NotAscending {
                previous: dec!(20000),
                next: dec!(10000),
            })
        );
    }

    #[test]
    fn from_bounds_rejects_rate_above_one() {
        let result = BracketTable::flat(dec!(4.95));

        assert_eq!(result, Err(BracketTableError::InvalidRate(dec!(4.95))));
    }

    #[test]
    fn empty_table_is_rejected() {
        assert_eq!(
            BracketTable::from_bounds(&[], &[]),
            Err(BracketTableError::Empty)
        );
        assert_eq!(
            BracketTable::try_from(Vec::new()),
            Err(BracketTableError::Empty)
        );
    }

    #[test]
    fn unbounded_middle_bracket_is_rejected() {
        let result = BracketTable::try_from(vec![
            TaxBracket {
                upper_bound: None,
                rate: dec!(0.01),
            },
            TaxBracket {
                upper_bound: None,
                rate: dec!(0.02),
            },
        ]);

        assert_eq!(result, Err(BracketTableError::UnboundedBeforeLast));
    }

    // =========================================================================
    // BracketTables tests
    // =========================================================================

    #[test]
    fn tables_are_looked_up_by_jurisdiction_year_and_status() {
        let mut tables = BracketTables::new();
        let flat = BracketTable::flat(dec!(0.0495)).unwrap();
        tables.insert_for_statuses(
            Jurisdiction::State(StateCode::IL),
            2024,
            &FilingStatus::ALL,
            &flat,
        );

        assert_eq!(tables.len(), 5);
        assert_eq!(
            tables.get(
                Jurisdiction::State(StateCode::IL),
                2024,
                FilingStatus::HeadOfHousehold
            ),
            Some(&flat)
        );
        assert_eq!(
            tables.get(Jurisdiction::State(StateCode::IL), 2023, FilingStatus::Single),
            None
        );
    }

    #[test]
    fn extend_replaces_same_key() {
        let _guard = init_test_tracing();
        let key = BracketKey {
            jurisdiction: Jurisdiction::Federal,
            tax_year: 2024,
            filing_status: FilingStatus::Single,
        };
        let mut base = BracketTables::new();
        base.insert(key, BracketTable::flat(dec!(0.10)).unwrap());
        let mut overrides = BracketTables::new();
        overrides.insert(key, BracketTable::flat(dec!(0.12)).unwrap());

        base.extend(overrides);

        assert_eq!(base.len(), 1);
        assert_eq!(
            base.get(Jurisdiction::Federal, 2024, FilingStatus::Single)
                .map(BracketTable::top_rate),
            Some(dec!(0.12))
        );
    }
}
