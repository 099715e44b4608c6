//! State and local returns, and the closed table of supported states.
//!
//! Every [`StateCode`] maps to exactly one [`Registration`] or to nothing;
//! the match in [`registration`] lists every code, so adding a state is a
//! compile-checked edit in one place.

mod il1040;
mod il_schedule_e;
mod md502;
mod md_local;
mod wv_it140;

use rust_decimal::Decimal;
use tax_core::calculations::sum_present;
use tax_core::{BracketTable, Form, FormError, Jurisdiction, StateCode};

use crate::federal::F1040;

pub use il1040::Il1040;
pub use il_schedule_e::IlScheduleIlEEic;
pub use md502::Md502;
pub use md_local::MdLocalTax;
pub use wv_it140::WvIt140;

/// Builds a state's top-level return from the finished federal return.
pub type StateFormConstructor =
    for<'a> fn(&'a F1040<'a>) -> Result<Box<dyn Form + 'a>, FormError>;

/// How a supported state is handled.
#[derive(Clone, Copy)]
pub enum Registration {
    /// The state has no individual income tax return.
    NoFilingRequired,
    Form(StateFormConstructor),
}

impl std::fmt::Debug for Registration {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::NoFilingRequired => f.write_str("NoFilingRequired"),
            Self::Form(_) => f.write_str("Form"),
        }
    }
}

/// `None` means the state is not supported.
pub fn registration(state: StateCode) -> Option<Registration> {
    use StateCode::*;

    match state {
        AK | FL | NV | NH | SD | TN | TX | WA | WY => Some(Registration::NoFilingRequired),
        IL => Some(Registration::Form(il1040::create)),
        MD => Some(Registration::Form(md502::create)),
        WV => Some(Registration::Form(wv_it140::create)),
        AL | AR | AZ | CA | CO | CT | DC | DE | GA | HI | IA | ID | IN | KS | KY | LA | MA
        | ME | MI | MN | MO | MS | MT | NC | ND | NE | NJ | NM | NY | OH | OK | OR | PA | RI
        | SC | UT | VA | VT | WI => None,
    }
}

/// Every state with a registration, in code order.
pub fn supported_states() -> Vec<StateCode> {
    StateCode::ALL
        .into_iter()
        .filter(|state| registration(*state).is_some())
        .collect()
}

/// The state's schedule for the federal return's year and filing status.
fn state_brackets<'a>(
    f1040: &F1040<'a>,
    state: StateCode,
) -> Result<&'a BracketTable, FormError> {
    let jurisdiction = Jurisdiction::State(state);
    f1040
        .bracket_tables()
        .get(jurisdiction, f1040.tax_year(), f1040.filing_status())
        .ok_or(FormError::MissingBracketTable {
            jurisdiction,
            tax_year: f1040.tax_year(),
            filing_status: f1040.filing_status(),
        })
}

fn unsupported_year(
    f1040: &F1040<'_>,
    state: StateCode,
) -> FormError {
    FormError::UnsupportedTaxYear {
        jurisdiction: Jurisdiction::State(state),
        tax_year: f1040.tax_year(),
    }
}

/// State income tax withheld on W-2s issued for `state`.
fn state_withholding(
    f1040: &F1040<'_>,
    state: StateCode,
) -> Option<Decimal> {
    sum_present(
        f1040
            .w2s()
            .filter(|w2| w2.state == Some(state))
            .map(|w2| w2.state_withholding),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn supported_states_are_no_filing_states_plus_modeled_returns() {
        let no_filing: Vec<StateCode> = StateCode::ALL
            .into_iter()
            .filter(|state| matches!(registration(*state), Some(Registration::NoFilingRequired)))
            .collect();
        let with_forms: Vec<StateCode> = StateCode::ALL
            .into_iter()
            .filter(|state| matches!(registration(*state), Some(Registration::Form(_))))
            .collect();

        assert_eq!(
            no_filing,
            vec![
                StateCode::AK,
                StateCode::FL,
                StateCode::NH,
                StateCode::NV,
                StateCode::SD,
                StateCode::TN,
                StateCode::TX,
                StateCode::WA,
                StateCode::WY,
            ]
        );
        assert_eq!(with_forms, vec![StateCode::IL, StateCode::MD, StateCode::WV]);
        assert_eq!(supported_states().len(), no_filing.len() + with_forms.len());
    }

    #[test]
    fn every_other_code_is_unsupported() {
        assert!(registration(StateCode::CA).is_none());
        assert!(registration(StateCode::DC).is_none());
        assert_eq!(StateCode::ALL.len() - supported_states().len(), 39);
    }
}
