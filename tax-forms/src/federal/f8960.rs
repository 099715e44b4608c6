//! Form 8960, Net Investment Income Tax.

use rust_decimal::Decimal;
use tax_core::calculations::{not_less_than_zero, round_half_up, sum};
use tax_core::{FieldValue, Form, FormTag};

use crate::federal::F1040;

pub struct F8960<'a> {
    f1040: &'a F1040<'a>,
}

impl<'a> F8960<'a> {
    pub fn new(f1040: &'a F1040<'a>) -> Self {
        Self { f1040 }
    }

    /// Lines 8 and 12. No investment expenses are modeled.
    pub fn net_investment_income(&self) -> Decimal {
        sum([
            self.f1040.taxable_interest(),
            self.f1040.ordinary_dividends(),
        ])
    }

    /// Line 14.
    pub fn threshold(&self) -> Decimal {
        self.f1040
            .params()
            .net_investment_income_threshold
            .get(self.f1040.filing_status())
    }

    /// Line 15.
    pub fn income_over_threshold(&self) -> Decimal {
        not_less_than_zero(self.f1040.agi() - self.threshold())
    }

    /// Line 17.
    pub fn tax(&self) -> Decimal {
        let base = self.net_investment_income().min(self.income_over_threshold());
        round_half_up(base * self.f1040.params().net_investment_income_rate)
    }

    /// Line 17 as carried to Schedule 2 line 12.
    pub fn net_investment_income_tax(&self) -> Option<Decimal> {
        let tax = self.tax();
        (tax > Decimal::ZERO).then_some(tax)
    }
}

impl Form for F8960<'_> {
    fn tag(&self) -> FormTag {
        FormTag::F8960
    }

    fn sequence_index(&self) -> u32 {
        72
    }

    fn is_needed(&self) -> bool {
        self.net_investment_income_tax().is_some()
    }

    fn fields(&self) -> Vec<FieldValue> {
        let info = self.f1040.info();
        vec![
            info.primary.full_name().into(),
            info.primary.ssn.as_str().into(),
            self.f1040.taxable_interest().into(),
            self.f1040.ordinary_dividends().into(),
            self.net_investment_income().into(),
            self.net_investment_income().into(),
            self.f1040.agi().into(),
            self.threshold().into(),
            self.income_over_threshold().into(),
            self.net_investment_income()
                .min(self.income_over_threshold())
                .into(),
            self.tax().into(),
        ]
    }
}
