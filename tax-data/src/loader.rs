use std::collections::HashMap;
use std::io::Read;

use rust_decimal::Decimal;
use serde::Deserialize;
use tax_core::{
    BracketKey, BracketTable, BracketTableError, BracketTables, FilingStatus, Jurisdiction,
    TaxBracket,
};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur when loading bracket schedules.
#[derive(Debug, Error)]
pub enum BracketTableLoaderError {
    #[error("csv parse error: {0}")]
    CsvParse(String),

    #[error("unknown jurisdiction '{0}', expected US or a two-letter state code")]
    InvalidJurisdiction(String),

    #[error("unknown filing status '{0}', expected one of S, MFJ, MFS, HOH, QSS")]
    InvalidFilingStatus(String),

    #[error("invalid {jurisdiction} {tax_year} {filing_status} schedule: {source}")]
    InvalidTable {
        jurisdiction: Jurisdiction,
        tax_year: i32,
        filing_status: FilingStatus,
        #[source]
        source: BracketTableError,
    },
}

impl From<csv::Error> for BracketTableLoaderError {
    fn from(err: csv::Error) -> Self {
        BracketTableLoaderError::CsvParse(err.to_string())
    }
}

/// A single row of a bracket schedule CSV file.
///
/// The CSV format has one row per bracket, listed bottom bracket first:
/// - `tax_year`: The tax year (e.g., 2024)
/// - `jurisdiction`: `US` or a two-letter state code
/// - `filing_status`: One of `S`, `MFJ`, `MFS`, `HOH`, `QSS`
/// - `upper_bound`: Top of the bracket (empty for the unbounded top bracket)
/// - `rate`: The marginal rate as a decimal (e.g., 0.10 for 10%)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BracketTableRecord {
    pub tax_year: i32,
    pub jurisdiction: String,
    pub filing_status: String,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

impl BracketTableRecord {
    fn key(&self) -> Result<BracketKey, BracketTableLoaderError> {
        let jurisdiction = Jurisdiction::parse(self.jurisdiction.trim()).ok_or_else(|| {
            BracketTableLoaderError::InvalidJurisdiction(self.jurisdiction.clone())
        })?;
        let filing_status = FilingStatus::parse(self.filing_status.trim()).ok_or_else(|| {
            BracketTableLoaderError::InvalidFilingStatus(self.filing_status.clone())
        })?;

        Ok(BracketKey {
            jurisdiction,
            tax_year: self.tax_year,
            filing_status,
        })
    }
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for bracket schedules supplied as CSV.
///
/// Rows are grouped by (jurisdiction, tax year, filing status); each group
/// becomes one [`BracketTable`] with its brackets in file order.
pub struct BracketTableLoader;

impl BracketTableLoader {
    /// Parse bracket records from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file or
    /// a string slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<BracketTableRecord>, BracketTableLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: BracketTableRecord = result?;
            records.push(record);
        }

        debug!(records = records.len(), "parsed bracket csv");
        Ok(records)
    }

    /// Build validated tables from parsed records.
    ///
    /// # Errors
    ///
    /// Fails on the first unknown jurisdiction or filing status code, or on
    /// a group whose brackets do not form a valid table.
    pub fn into_tables(
        records: &[BracketTableRecord]
    ) -> Result<BracketTables, BracketTableLoaderError> {
        let mut order: Vec<BracketKey> = Vec::new();
        let mut groups: HashMap<BracketKey, Vec<TaxBracket>> = HashMap::new();

        for record in records {
            let key = record.key()?;
            let brackets = groups.entry(key).or_insert_with(|| {
                order.push(key);
                Vec::new()
            });
            brackets.push(TaxBracket {
                upper_bound: record.upper_bound,
                rate: record.rate,
            });
        }

        let mut tables = BracketTables::new();
        for key in order {
            let brackets = groups.remove(&key).unwrap_or_default();
            let table = BracketTable::try_from(brackets).map_err(|source| {
                BracketTableLoaderError::InvalidTable {
                    jurisdiction: key.jurisdiction,
                    tax_year: key.tax_year,
                    filing_status: key.filing_status,
                    source,
                }
            })?;
            tables.insert(key, table);
        }

        info!(tables = tables.len(), "loaded bracket tables");
        Ok(tables)
    }

    /// Parse and build in one step.
    pub fn load<R: Read>(reader: R) -> Result<BracketTables, BracketTableLoaderError> {
        let records = Self::parse(reader)?;
        Self::into_tables(&records)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tax_core::StateCode;

    use super::*;

    const HEADER: &str = "tax_year,jurisdiction,filing_status,upper_bound,rate";

    fn bracket_csv(rows: &[&str]) -> String {
        let mut text = HEADER.to_string();
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text
    }

    // =========================================================================
    // parse tests
    // =========================================================================

    #[test]
    fn test_parse_csv_single_row() {
        let csv = bracket_csv(&["2024,WV,S,10000,0.0236"]);

        let records = BracketTableLoader::parse(csv.as_bytes()).expect("Failed to parse CSV");

        assert_eq!(
            records,
            vec![BracketTableRecord {
                tax_year: 2024,
                jurisdiction: "WV".to_string(),
                filing_status: "S".to_string(),
                upper_bound: Some(dec!(10000)),
                rate: dec!(0.0236),
            }]
        );
    }

    #[test]
    fn test_parse_csv_unbounded_top_bracket() {
        let csv = bracket_csv(&["2024,US,S,,0.37"]);

        let records = BracketTableLoader::parse(csv.as_bytes()).expect("Failed to parse CSV");

        assert_eq!(records[0].upper_bound, None);
        assert_eq!(records[0].rate, dec!(0.37));
    }

    #[test]
    fn test_parse_empty_csv() {
        let records =
            BracketTableLoader::parse(bracket_csv(&[]).as_bytes()).expect("Failed to parse CSV");

        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_invalid_csv_missing_column() {
        let csv = "tax_year,jurisdiction,filing_status\n2024,US,S";

        let err = BracketTableLoader::parse(csv.as_bytes())
            .expect_err("Should fail for missing column");
        let BracketTableLoaderError::CsvParse(msg) = err else {
            panic!("Expected CsvParse error, got: {:?}", err);
        };
        assert!(
            msg.contains("missing field"),
            "Expected 'missing field' in error, got: {}",
            msg
        );
    }

    #[test]
    fn test_parse_invalid_csv_bad_decimal() {
        let csv = bracket_csv(&["2024,US,S,abc,0.10"]);

        let err = BracketTableLoader::parse(csv.as_bytes())
            .expect_err("Should fail for invalid decimal");

        assert!(matches!(err, BracketTableLoaderError::CsvParse(_)));
    }

    // =========================================================================
    // into_tables tests
    // =========================================================================

    #[test]
    fn test_rows_group_into_one_table_per_key() {
        let csv = bracket_csv(&[
            "2024,WV,S,10000,0.02",
            "2024,IL,S,,0.0495",
            "2024,WV,S,,0.04",
            "2024,IL,MFJ,,0.0495",
        ]);

        let tables = BracketTableLoader::load(csv.as_bytes()).expect("Failed to load");

        assert_eq!(tables.len(), 3);
        let wv = tables
            .get(Jurisdiction::State(StateCode::WV), 2024, FilingStatus::Single)
            .unwrap();
        assert_eq!(
            wv,
            &BracketTable::from_bounds(&[dec!(10000)], &[dec!(0.02), dec!(0.04)]).unwrap()
        );
        assert!(
            tables
                .get(Jurisdiction::State(StateCode::IL), 2024, FilingStatus::MarriedFilingJointly)
                .is_some()
        );
    }

    #[test]
    fn test_unknown_jurisdiction_is_rejected() {
        let records =
            BracketTableLoader::parse(bracket_csv(&["2024,XX,S,,0.05"]).as_bytes()).unwrap();

        let result = BracketTableLoader::into_tables(&records);

        match result {
            Err(BracketTableLoaderError::InvalidJurisdiction(ref code)) => {
                assert_eq!(code, "XX");
            }
            other => panic!("expected InvalidJurisdiction, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_filing_status_is_rejected() {
        let records =
            BracketTableLoader::parse(bracket_csv(&["2024,US,Y-1,,0.10"]).as_bytes()).unwrap();

        let result = BracketTableLoader::into_tables(&records);

        match result {
            Err(BracketTableLoaderError::InvalidFilingStatus(ref code)) => {
                assert_eq!(code, "Y-1");
            }
            other => panic!("expected InvalidFilingStatus, got {other:?}"),
        }
    }

    #[test]
    fn test_out_of_order_bounds_name_the_schedule() {
        let csv = bracket_csv(&[
            "2024,US,HOH,20000,0.10",
            "2024,US,HOH,15000,0.12",
            "2024,US,HOH,,0.22",
        ]);

        let err = BracketTableLoader::load(csv.as_bytes()).expect_err("Should fail for bad order");

        let BracketTableLoaderError::InvalidTable {
            jurisdiction,
            filing_status,
            source,
            ..
        } = err
        else {
            panic!("Expected InvalidTable error, got: {:?}", err);
        };
        assert_eq!(jurisdiction, Jurisdiction::Federal);
        assert_eq!(filing_status, FilingStatus::HeadOfHousehold);
        assert_eq!(
            source,
            BracketTableError::NotAscending {
                previous: dec!(20000),
                next: dec!(15000),
            }
        );
    }

    #[test]
    fn test_unbounded_middle_bracket_is_rejected() {
        let csv = bracket_csv(&["2024,WV,MFS,,0.02", "2024,WV,MFS,,0.04"]);

        let err = BracketTableLoader::load(csv.as_bytes()).expect_err("Should fail");

        assert!(matches!(
            err,
            BracketTableLoaderError::InvalidTable {
                source: BracketTableError::UnboundedBeforeLast,
                ..
            }
        ));
    }
}
