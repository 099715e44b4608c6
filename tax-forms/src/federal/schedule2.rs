//! Schedule 2, Additional Taxes.

use rust_decimal::Decimal;
use tax_core::calculations::sum_present;
use tax_core::{FieldValue, Form, FormTag};

use crate::federal::F1040;

pub struct Schedule2<'a> {
    f1040: &'a F1040<'a>,
}

impl<'a> Schedule2<'a> {
    pub fn new(f1040: &'a F1040<'a>) -> Self {
        Self { f1040 }
    }

    /// Line 11.
    pub fn additional_medicare_tax(&self) -> Option<Decimal> {
        self.f1040.f8959().additional_medicare_tax()
    }

    /// Line 12.
    pub fn net_investment_income_tax(&self) -> Option<Decimal> {
        self.f1040.f8960().net_investment_income_tax()
    }

    /// Line 21.
    pub fn other_taxes(&self) -> Option<Decimal> {
        sum_present([
            self.additional_medicare_tax(),
            self.net_investment_income_tax(),
        ])
    }
}

impl Form for Schedule2<'_> {
    fn tag(&self) -> FormTag {
        FormTag::Schedule2
    }

    fn sequence_index(&self) -> u32 {
        2
    }

    fn is_needed(&self) -> bool {
        self.other_taxes().is_some()
    }

    fn fields(&self) -> Vec<FieldValue> {
        let info = self.f1040.info();
        vec![
            info.primary.full_name().into(),
            info.primary.ssn.as_str().into(),
            self.additional_medicare_tax().into(),
            self.net_investment_income_tax().into(),
            self.other_taxes().into(),
        ]
    }

    fn attachments(&self) -> Vec<Box<dyn Form + '_>> {
        vec![Box::new(self.f1040.f8959()), Box::new(self.f1040.f8960())]
    }
}
