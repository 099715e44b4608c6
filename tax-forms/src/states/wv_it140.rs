//! Form IT-140, West Virginia Personal Income Tax Return.

use rust_decimal::Decimal;
use tax_core::calculations::{not_less_than_zero, progressive_tax, sum};
use tax_core::{BracketTable, FieldValue, Form, FormError, FormTag, StateCode};

use super::{state_brackets, state_withholding, unsupported_year};
use crate::federal::F1040;
use crate::params::WestVirginiaParameters;

pub(super) fn create<'a>(f1040: &'a F1040<'a>) -> Result<Box<dyn Form + 'a>, FormError> {
    Ok(Box::new(WvIt140::new(f1040)?))
}

pub struct WvIt140<'a> {
    f1040: &'a F1040<'a>,
    params: WestVirginiaParameters,
    brackets: &'a BracketTable,
}

impl<'a> WvIt140<'a> {
    /// # Errors
    ///
    /// Returns [`FormError`] if West Virginia parameters or brackets are
    /// missing for the return's year and filing status.
    pub fn new(f1040: &'a F1040<'a>) -> Result<Self, FormError> {
        let params = WestVirginiaParameters::for_year(f1040.tax_year())
            .ok_or_else(|| unsupported_year(f1040, StateCode::WV))?;
        let brackets = state_brackets(f1040, StateCode::WV)?;

        Ok(Self {
            f1040,
            params,
            brackets,
        })
    }

    /// Line 4. No modifications to federal AGI are modeled.
    pub fn west_virginia_agi(&self) -> Decimal {
        self.f1040.agi()
    }

    /// Line 6.
    pub fn exemptions(&self) -> Decimal {
        Decimal::from(self.f1040.info().exemption_count()) * self.params.exemption_amount
    }

    /// Line 7.
    pub fn taxable_income(&self) -> Decimal {
        not_less_than_zero(self.west_virginia_agi() - self.exemptions())
    }

    /// Lines 8 and 10.
    pub fn tax(&self) -> Decimal {
        progressive_tax(self.brackets, self.taxable_income())
    }

    /// Line 14.
    pub fn withholding(&self) -> Option<Decimal> {
        state_withholding(self.f1040, StateCode::WV)
    }

    /// Line 23.
    pub fn total_payments(&self) -> Decimal {
        sum([self.withholding()])
    }

    /// Line 24.
    pub fn overpayment(&self) -> Option<Decimal> {
        let overpaid = self.total_payments() - self.tax();
        (overpaid > Decimal::ZERO).then_some(overpaid)
    }

    /// Line 29.
    pub fn balance_due(&self) -> Option<Decimal> {
        let owed = self.tax() - self.total_payments();
        (owed > Decimal::ZERO).then_some(owed)
    }
}

impl Form for WvIt140<'_> {
    fn tag(&self) -> FormTag {
        FormTag::WvIt140
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
            Decimal::from(info.exemption_count()).into(),
            self.f1040.agi().into(),
            self.west_virginia_agi().into(),
            self.exemptions().into(),
            self.taxable_income().into(),
            self.tax().into(),
            self.withholding().into(),
            self.total_payments().into(),
            self.overpayment().into(),
            self.balance_due().into(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tax_core::FilingStatus;

    use super::*;
    use crate::params::builtin_bracket_tables;
    use crate::test_support::*;

    #[test]
    fn progressive_tax_on_income_after_exemptions() {
        let tables = builtin_bracket_tables().unwrap();
        let mut info = single_filer();
        info.w2s = vec![w2(dec!(52000))];
        let f1040 = F1040::new(&info, &tables).unwrap();
        let it140 = WvIt140::new(&f1040).unwrap();

        assert_eq!(it140.taxable_income(), dec!(50000));
        assert_eq!(it140.tax(), dec!(1712));
        assert_eq!(it140.balance_due(), Some(dec!(1712)));
    }

    #[test]
    fn separate_filer_reaches_higher_brackets_sooner() {
        let tables = builtin_bracket_tables().unwrap();
        let mut info = married_filers(FilingStatus::MarriedFilingSeparately);
        info.w2s = vec![w2(dec!(12000))];
        let f1040 = F1040::new(&info, &tables).unwrap();
        let it140 = WvIt140::new(&f1040).unwrap();

        // 5000 at 2.36% and 5000 at 3.15%
        assert_eq!(it140.taxable_income(), dec!(10000));
        assert_eq!(it140.tax(), dec!(276));
    }

    #[test]
    fn joint_return_claims_spouse_and_dependents() {
        let tables = builtin_bracket_tables().unwrap();
        let mut info = married_filers(FilingStatus::MarriedFilingJointly);
        info.dependents = vec![child(2015), child(2017)];
        let f1040 = F1040::new(&info, &tables).unwrap();
        let it140 = WvIt140::new(&f1040).unwrap();

        assert_eq!(it140.exemptions(), dec!(8000));
        assert_eq!(it140.tax(), dec!(0));
    }
}
