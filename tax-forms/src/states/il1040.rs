//! Form IL-1040, Illinois Individual Income Tax Return.

use rust_decimal::Decimal;
use tax_core::calculations::{not_less_than_zero, progressive_tax, sum};
use tax_core::{BracketTable, FieldValue, Form, FormError, FormTag, StateCode};

use super::{state_brackets, state_withholding, unsupported_year};
use crate::federal::F1040;
use crate::params::IllinoisParameters;
use crate::states::IlScheduleIlEEic;

pub(super) fn create<'a>(f1040: &'a F1040<'a>) -> Result<Box<dyn Form + 'a>, FormError> {
    Ok(Box::new(Il1040::new(f1040)?))
}

pub struct Il1040<'a> {
    f1040: &'a F1040<'a>,
    params: IllinoisParameters,
    brackets: &'a BracketTable,
}

impl<'a> Il1040<'a> {
    /// # Errors
    ///
    /// Returns [`FormError`] if Illinois parameters or brackets are missing
    /// for the return's year and filing status.
    pub fn new(f1040: &'a F1040<'a>) -> Result<Self, FormError> {
        let params = IllinoisParameters::for_year(f1040.tax_year())
            .ok_or_else(|| unsupported_year(f1040, StateCode::IL))?;
        let brackets = state_brackets(f1040, StateCode::IL)?;

        Ok(Self {
            f1040,
            params,
            brackets,
        })
    }

    pub fn f1040(&self) -> &'a F1040<'a> {
        self.f1040
    }

    pub fn params(&self) -> &IllinoisParameters {
        &self.params
    }

    pub fn schedule_il_e(&self) -> IlScheduleIlEEic<'_> {
        IlScheduleIlEEic::new(self)
    }

    /// Lines 1 and 4. No Illinois additions are modeled.
    pub fn total_income(&self) -> Decimal {
        self.f1040.agi()
    }

    /// Line 9. No Illinois subtractions are modeled.
    pub fn base_income(&self) -> Decimal {
        self.total_income()
    }

    /// Line 10.
    pub fn exemption_allowance(&self) -> Decimal {
        self.schedule_il_e().exemption_allowance()
    }

    /// Line 11.
    pub fn net_income(&self) -> Decimal {
        not_less_than_zero(self.base_income() - self.exemption_allowance())
    }

    /// Lines 12 and 14.
    pub fn tax(&self) -> Decimal {
        progressive_tax(self.brackets, self.net_income())
    }

    /// Lines 16 and 24.
    pub fn total_tax(&self) -> Decimal {
        self.tax()
    }

    /// Line 25.
    pub fn withholding(&self) -> Option<Decimal> {
        state_withholding(self.f1040, StateCode::IL)
    }

    /// Line 29.
    pub fn earned_income_credit(&self) -> Option<Decimal> {
        self.schedule_il_e().earned_income_credit()
    }

    /// Line 30.
    pub fn total_payments(&self) -> Decimal {
        sum([self.withholding(), self.earned_income_credit()])
    }

    /// Line 31.
    pub fn overpayment(&self) -> Option<Decimal> {
        let overpaid = self.total_payments() - self.total_tax();
        (overpaid > Decimal::ZERO).then_some(overpaid)
    }

    /// Line 32.
    pub fn underpayment(&self) -> Option<Decimal> {
        let owed = self.total_tax() - self.total_payments();
        (owed > Decimal::ZERO).then_some(owed)
    }
}

impl Form for Il1040<'_> {
    fn tag(&self) -> FormTag {
        FormTag::Il1040
    }

    fn sequence_index(&self) -> u32 {
        0
    }

    fn fields(&self) -> Vec<FieldValue> {
        let info = self.f1040.info();
        vec![
            info.primary.first_name.as_str().into(),
            info.primary.last_name.as_str().into(),
            info.primary.ssn.as_str().into(),
            self.f1040.filing_status().as_str().into(),
            self.f1040.agi().into(),
            self.total_income().into(),
            self.base_income().into(),
            self.exemption_allowance().into(),
            self.net_income().into(),
            self.tax().into(),
            self.total_tax().into(),
            self.withholding().into(),
            self.earned_income_credit().into(),
            self.total_payments().into(),
            self.overpayment().into(),
            self.underpayment().into(),
        ]
    }

    fn attachments(&self) -> Vec<Box<dyn Form + '_>> {
        vec![Box::new(self.schedule_il_e())]
    }
}
