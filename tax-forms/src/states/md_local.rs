//! Maryland county and Baltimore City income tax, filed with Form 502.
//!
//! Reads the federal credit through the state return, so it is the deepest
//! view in the graph.

use rust_decimal::Decimal;
use tax_core::calculations::{not_less_than_zero, round_to_dollar, sum};
use tax_core::{FieldValue, Form, FormTag, Locality};

use crate::states::Md502;

pub struct MdLocalTax<'a> {
    md502: &'a Md502<'a>,
    locality: Locality,
}

impl<'a> MdLocalTax<'a> {
    pub fn new(
        md502: &'a Md502<'a>,
        locality: Locality,
    ) -> Self {
        Self { md502, locality }
    }

    pub fn rate(&self) -> Decimal {
        self.md502.params().local_rate(self.locality)
    }

    pub fn tax(&self) -> Decimal {
        round_to_dollar(self.md502.taxable_net_income() * self.rate())
    }

    /// Federal credit times a fixed factor times the local rate, limited to
    /// the local tax. Blank when no federal credit is claimed.
    pub fn earned_income_credit(&self) -> Option<Decimal> {
        let federal = self.md502.f1040().earned_income_credit()?;
        let factor = self.md502.params().local_earned_income_credit_factor;
        let credit = round_to_dollar(federal * factor * self.rate());
        Some(credit.min(self.tax()))
    }

    pub fn tax_after_credits(&self) -> Decimal {
        not_less_than_zero(self.tax() - sum([self.earned_income_credit()]))
    }
}

impl Form for MdLocalTax<'_> {
    fn tag(&self) -> FormTag {
        FormTag::MdLocalTax
    }

    fn sequence_index(&self) -> u32 {
        1
    }

    fn fields(&self) -> Vec<FieldValue> {
        vec![
            self.locality.name().into(),
            self.rate().into(),
            self.md502.taxable_net_income().into(),
            self.tax().into(),
            self.md502.f1040().earned_income_credit().into(),
            self.earned_income_credit().into(),
            self.tax_after_credits().into(),
        ]
    }
}
