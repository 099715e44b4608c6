//! Schedule 3, Additional Credits and Payments.

use rust_decimal::Decimal;
use tax_core::calculations::sum_present;
use tax_core::{FieldValue, Form, FormTag};

use crate::federal::F1040;

pub struct Schedule3<'a> {
    f1040: &'a F1040<'a>,
}

impl<'a> Schedule3<'a> {
    pub fn new(f1040: &'a F1040<'a>) -> Self {
        Self { f1040 }
    }

    /// Line 2, blank when Form 2441 is not filed.
    pub fn dependent_care_credit(&self) -> Option<Decimal> {
        self.f1040.f2441().credit()
    }

    /// Line 8.
    pub fn nonrefundable_credits(&self) -> Option<Decimal> {
        sum_present([self.dependent_care_credit()])
    }

    /// Line 10.
    pub fn extension_payment(&self) -> Option<Decimal> {
        self.f1040.info().extension_payment
    }

    /// Line 15.
    pub fn other_payments(&self) -> Option<Decimal> {
        sum_present([self.extension_payment()])
    }
}

impl Form for Schedule3<'_> {
    fn tag(&self) -> FormTag {
        FormTag::Schedule3
    }

    fn sequence_index(&self) -> u32 {
        3
    }

    fn is_needed(&self) -> bool {
        self.nonrefundable_credits().is_some() || self.other_payments().is_some()
    }

    fn fields(&self) -> Vec<FieldValue> {
        let info = self.f1040.info();
        vec![
            info.primary.full_name().into(),
            info.primary.ssn.as_str().into(),
            FieldValue::Absent,
            self.dependent_care_credit().into(),
            self.nonrefundable_credits().into(),
            self.extension_payment().into(),
            self.other_payments().into(),
        ]
    }

    fn attachments(&self) -> Vec<Box<dyn Form + '_>> {
        vec![Box::new(self.f1040.f2441())]
    }
}
