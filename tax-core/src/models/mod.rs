mod field_value;
mod filing_status;
mod income;
mod jurisdiction;
mod person;
mod tax_bracket;
mod taxpayer;

pub use field_value::FieldValue;
pub use filing_status::FilingStatus;
pub use income::{CareProvider, EstimatedTaxPayment, F1098E, F1099Div, F1099G, F1099Int, W2};
pub use jurisdiction::{Jurisdiction, Locality, StateCode};
pub use person::{Dependent, Person, PersonRole};
pub use tax_bracket::{BracketKey, BracketTable, BracketTableError, BracketTables, TaxBracket};
pub use taxpayer::TaxpayerInformation;
