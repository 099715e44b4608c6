//! Source documents the taxpayer received during the year.
//!
//! Amounts a document does not report are `None`, not zero.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{PersonRole, StateCode};

/// Wage and Tax Statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct W2 {
    pub employer_name: String,
    pub employer_ein: String,
    #[serde(default)]
    pub owner: PersonRole,
    /// Box 1.
    pub wages: Decimal,
    /// Box 2.
    pub federal_withholding: Decimal,
    /// Box 3.
    pub social_security_wages: Decimal,
    /// Box 4.
    pub social_security_withholding: Decimal,
    /// Box 5.
    pub medicare_wages: Decimal,
    /// Box 6.
    pub medicare_withholding: Decimal,
    /// Box 15.
    pub state: Option<StateCode>,
    /// Box 16.
    pub state_wages: Option<Decimal>,
    /// Box 17.
    pub state_withholding: Option<Decimal>,
}

/// Interest income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct F1099Int {
    pub payer: String,
    #[serde(default)]
    pub owner: PersonRole,
    pub interest: Decimal,
    pub federal_withholding: Option<Decimal>,
}

/// Dividends and distributions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct F1099Div {
    pub payer: String,
    #[serde(default)]
    pub owner: PersonRole,
    pub ordinary_dividends: Decimal,
    pub qualified_dividends: Option<Decimal>,
    pub federal_withholding: Option<Decimal>,
}

/// Certain government payments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct F1099G {
    pub payer: String,
    #[serde(default)]
    pub owner: PersonRole,
    pub unemployment_compensation: Decimal,
    pub federal_withholding: Option<Decimal>,
}

/// Student loan interest statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct F1098E {
    pub lender: String,
    #[serde(default)]
    pub owner: PersonRole,
    pub interest_paid: Decimal,
}

/// A person or organization paid for care of a qualifying person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareProvider {
    pub name: String,
    pub tin: String,
    pub amount_paid: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatedTaxPayment {
    pub date: NaiveDate,
    pub amount: Decimal,
}
