//! Form 502, Maryland Resident Income Tax Return.

use rust_decimal::Decimal;
use tax_core::calculations::{cap, not_less_than_zero, progressive_tax, round_to_dollar, sum, sum_present};
use tax_core::{BracketTable, Diagnostic, FieldValue, Form, FormError, FormTag, StateCode};

use super::{state_brackets, state_withholding, unsupported_year};
use crate::federal::F1040;
use crate::params::MarylandParameters;
use crate::states::MdLocalTax;

pub(super) fn create<'a>(f1040: &'a F1040<'a>) -> Result<Box<dyn Form + 'a>, FormError> {
    Ok(Box::new(Md502::new(f1040)?))
}

pub struct Md502<'a> {
    f1040: &'a F1040<'a>,
    params: MarylandParameters,
    brackets: &'a BracketTable,
}

impl<'a> Md502<'a> {
    /// # Errors
    ///
    /// Returns [`FormError`] if Maryland parameters or brackets are missing
    /// for the return's year and filing status.
    pub fn new(f1040: &'a F1040<'a>) -> Result<Self, FormError> {
        let params = MarylandParameters::for_year(f1040.tax_year())
            .ok_or_else(|| unsupported_year(f1040, StateCode::MD))?;
        let brackets = state_brackets(f1040, StateCode::MD)?;

        Ok(Self {
            f1040,
            params,
            brackets,
        })
    }

    pub fn f1040(&self) -> &'a F1040<'a> {
        self.f1040
    }

    pub fn params(&self) -> &MarylandParameters {
        &self.params
    }

    /// The local tax worksheet, when a Maryland county of residence is
    /// known.
    pub fn local_tax(&self) -> Option<MdLocalTax<'_>> {
        self.f1040
            .info()
            .locality
            .filter(|locality| locality.state() == StateCode::MD)
            .map(|locality| MdLocalTax::new(self, locality))
    }

    fn is_resident(&self) -> bool {
        self.f1040.info().state_residencies.contains(&StateCode::MD)
    }

    /// Line 16. No Maryland additions or subtractions are modeled.
    pub fn maryland_agi(&self) -> Decimal {
        self.f1040.agi()
    }

    /// Line 17: a percentage of Maryland AGI within fixed bounds.
    pub fn standard_deduction(&self) -> Decimal {
        let (min, max) = self.params.standard_deduction_bounds(self.f1040.filing_status());
        let percentage = round_to_dollar(self.maryland_agi() * self.params.standard_deduction_rate);
        cap(percentage, min, Some(max))
    }

    /// Line 18.
    pub fn net_income(&self) -> Decimal {
        not_less_than_zero(self.maryland_agi() - self.standard_deduction())
    }

    /// Line 19.
    pub fn exemptions(&self) -> Decimal {
        let info = self.f1040.info();
        let per_exemption = self
            .params
            .exemption_amount(self.f1040.filing_status(), self.maryland_agi());
        let boxes: u32 = std::iter::once(&info.primary)
            .chain(info.joint_spouse())
            .map(|person| u32::from(person.is_65_or_older(info.tax_year)) + u32::from(person.is_blind))
            .sum();

        Decimal::from(info.exemption_count()) * per_exemption
            + Decimal::from(boxes) * self.params.senior_or_blind_exemption
    }

    /// Line 20.
    pub fn taxable_net_income(&self) -> Decimal {
        not_less_than_zero(self.net_income() - self.exemptions())
    }

    /// Line 21.
    pub fn tax(&self) -> Decimal {
        progressive_tax(self.brackets, self.taxable_net_income())
    }

    /// Line 22: a share of the federal credit, limited to the state tax.
    pub fn earned_income_credit(&self) -> Option<Decimal> {
        let federal = self.f1040.earned_income_credit()?;
        let credit = round_to_dollar(federal * self.params.earned_income_credit_rate);
        Some(credit.min(self.tax()))
    }

    /// Line 26.
    pub fn total_credits(&self) -> Option<Decimal> {
        sum_present([self.earned_income_credit()])
    }

    /// Line 27.
    pub fn tax_after_credits(&self) -> Decimal {
        not_less_than_zero(self.tax() - sum([self.total_credits()]))
    }

    /// Line 28.
    pub fn local_income_tax(&self) -> Option<Decimal> {
        self.local_tax().map(|local| local.tax())
    }

    /// Line 29.
    pub fn local_earned_income_credit(&self) -> Option<Decimal> {
        self.local_tax().and_then(|local| local.earned_income_credit())
    }

    /// Line 32.
    pub fn local_tax_after_credits(&self) -> Option<Decimal> {
        self.local_tax().map(|local| local.tax_after_credits())
    }

    /// Line 34.
    pub fn total_tax(&self) -> Decimal {
        self.tax_after_credits() + sum([self.local_tax_after_credits()])
    }

    /// Line 40.
    pub fn withholding(&self) -> Option<Decimal> {
        state_withholding(self.f1040, StateCode::MD)
    }

    /// Line 44.
    pub fn total_payments(&self) -> Decimal {
        sum([self.withholding()])
    }

    /// Line 45.
    pub fn balance_due(&self) -> Option<Decimal> {
        let owed = self.total_tax() - self.total_payments();
        (owed > Decimal::ZERO).then_some(owed)
    }

    /// Line 46.
    pub fn overpayment(&self) -> Option<Decimal> {
        let overpaid = self.total_payments() - self.total_tax();
        (overpaid > Decimal::ZERO).then_some(overpaid)
    }
}

impl Form for Md502<'_> {
    fn tag(&self) -> FormTag {
        FormTag::Md502
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
            info.locality.map(|locality| locality.name()).into(),
            self.f1040.filing_status().as_str().into(),
            self.f1040.agi().into(),
            self.maryland_agi().into(),
            self.standard_deduction().into(),
            self.net_income().into(),
            self.exemptions().into(),
            self.taxable_net_income().into(),
            self.tax().into(),
            self.earned_income_credit().into(),
            self.total_credits().into(),
            self.tax_after_credits().into(),
            self.local_income_tax().into(),
            self.local_earned_income_credit().into(),
            self.local_tax_after_credits().into(),
            self.total_tax().into(),
            self.withholding().into(),
            self.total_payments().into(),
            self.balance_due().into(),
            self.overpayment().into(),
        ]
    }

    fn attachments(&self) -> Vec<Box<dyn Form + '_>> {
        self.local_tax()
            .into_iter()
            .map(|local| Box::new(local) as Box<dyn Form + '_>)
            .collect()
    }

    fn diagnostics(&self) -> Vec<Diagnostic> {
        if self.is_resident() && self.local_tax().is_none() {
            vec![Diagnostic::new(
                FormTag::Md502,
                "28",
                "no Maryland county of residence; local tax left blank",
            )]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tax_core::{FilingStatus, Locality};

    use super::*;
    use crate::params::builtin_bracket_tables;
    use crate::test_support::*;

    #[test]
    fn standard_deduction_is_percentage_within_bounds() {
        let tables = builtin_bracket_tables().unwrap();
        let mut info = single_filer();

        info.w2s = vec![w2(dec!(5000))];
        let low = F1040::new(&info, &tables).unwrap();
        assert_eq!(Md502::new(&low).unwrap().standard_deduction(), dec!(1800));

        info.w2s = vec![w2(dec!(16000))];
        let middle = F1040::new(&info, &tables).unwrap();
        assert_eq!(Md502::new(&middle).unwrap().standard_deduction(), dec!(2400));

        info.w2s = vec![w2(dec!(60000))];
        let high = F1040::new(&info, &tables).unwrap();
        assert_eq!(Md502::new(&high).unwrap().standard_deduction(), dec!(2700));
    }

    #[test]
    fn state_tax_on_taxable_net_income() {
        let tables = builtin_bracket_tables().unwrap();
        let mut info = single_filer();
        info.w2s = vec![w2(dec!(60000))];
        let f1040 = F1040::new(&info, &tables).unwrap();
        let md502 = Md502::new(&f1040).unwrap();

        // 60000 - 2700 deduction - 3200 exemption
        assert_eq!(md502.taxable_net_income(), dec!(54100));
        // 20 + 30 + 40 + 4.75% of 51100
        assert_eq!(md502.tax(), dec!(2517));
        assert_eq!(md502.local_income_tax(), None);
        assert_eq!(md502.total_tax(), dec!(2517));
    }

    #[test]
    fn state_credit_is_limited_to_state_tax() {
        let tables = builtin_bracket_tables().unwrap();
        let mut info = single_filer();
        info.filing_status = FilingStatus::HeadOfHousehold;
        info.dependents = vec![child(2016), child(2018)];
        info.w2s = vec![w2(dec!(20000))];
        let f1040 = F1040::new(&info, &tables).unwrap();
        let md502 = Md502::new(&f1040).unwrap();

        assert_eq!(f1040.earned_income_credit(), Some(dec!(6960)));
        // 20000 - 3650 minimum deduction - 3 * 3200 exemptions
        assert_eq!(md502.taxable_net_income(), dec!(6750));
        assert_eq!(md502.tax(), dec!(268));
        assert_eq!(md502.earned_income_credit(), Some(dec!(268)));
        assert_eq!(md502.tax_after_credits(), dec!(0));
    }

    #[test]
    fn resident_without_county_is_reported() {
        let tables = builtin_bracket_tables().unwrap();
        let mut info = single_filer();
        info.state_residencies = vec![StateCode::MD];
        let f1040 = F1040::new(&info, &tables).unwrap();
        let md502 = Md502::new(&f1040).unwrap();

        assert!(md502.attachments().is_empty());
        assert_eq!(md502.diagnostics().len(), 1);
        assert_eq!(md502.local_tax_after_credits(), None);

        info.locality = Some(Locality::MdHoward);
        let f1040 = F1040::new(&info, &tables).unwrap();
        let md502 = Md502::new(&f1040).unwrap();
        assert!(md502.diagnostics().is_empty());
        assert_eq!(md502.attachments().len(), 1);
    }
}
