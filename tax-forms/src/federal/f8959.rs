//! Form 8959, Additional Medicare Tax.
//!
//! Only Part I (Medicare wages) and Part V (withholding reconciliation) are
//! computed; self-employment and RRTA compensation are not modeled.

use rust_decimal::Decimal;
use tax_core::calculations::{not_less_than_zero, round_half_up};
use tax_core::{FieldValue, Form, FormTag};

use crate::federal::F1040;

pub struct F8959<'a> {
    f1040: &'a F1040<'a>,
}

impl<'a> F8959<'a> {
    pub fn new(f1040: &'a F1040<'a>) -> Self {
        Self { f1040 }
    }

    /// Lines 1 and 4.
    pub fn medicare_wages(&self) -> Decimal {
        self.f1040.w2s().map(|w2| w2.medicare_wages).sum()
    }

    /// Line 5.
    pub fn threshold(&self) -> Decimal {
        self.f1040
            .params()
            .additional_medicare_threshold
            .get(self.f1040.filing_status())
    }

    /// Line 6.
    pub fn wages_over_threshold(&self) -> Decimal {
        not_less_than_zero(self.medicare_wages() - self.threshold())
    }

    /// Lines 7 and 18.
    pub fn total_additional_medicare_tax(&self) -> Decimal {
        round_half_up(self.wages_over_threshold() * self.f1040.params().additional_medicare_rate)
    }

    /// Line 19.
    pub fn medicare_tax_withheld(&self) -> Decimal {
        self.f1040.w2s().map(|w2| w2.medicare_withholding).sum()
    }

    /// Line 21.
    pub fn regular_medicare_tax(&self) -> Decimal {
        round_half_up(self.medicare_wages() * self.f1040.params().medicare_rate)
    }

    /// Lines 22 and 24.
    pub fn total_additional_withholding(&self) -> Decimal {
        not_less_than_zero(self.medicare_tax_withheld() - self.regular_medicare_tax())
    }

    /// Line 18 as carried to Schedule 2 line 11.
    pub fn additional_medicare_tax(&self) -> Option<Decimal> {
        let tax = self.total_additional_medicare_tax();
        (tax > Decimal::ZERO).then_some(tax)
    }

    /// Line 24 as carried to Form 1040 line 25c.
    pub fn additional_medicare_withholding(&self) -> Option<Decimal> {
        let withheld = self.total_additional_withholding();
        (withheld > Decimal::ZERO).then_some(withheld)
    }
}

impl Form for F8959<'_> {
    fn tag(&self) -> FormTag {
        FormTag::F8959
    }

    fn sequence_index(&self) -> u32 {
        71
    }

    fn is_needed(&self) -> bool {
        self.additional_medicare_tax().is_some() || self.additional_medicare_withholding().is_some()
    }

    fn fields(&self) -> Vec<FieldValue> {
        let info = self.f1040.info();
        vec![
            info.primary.full_name().into(),
            info.primary.ssn.as_str().into(),
            self.medicare_wages().into(),
            self.medicare_wages().into(),
            self.threshold().into(),
            self.wages_over_threshold().into(),
            self.total_additional_medicare_tax().into(),
            self.total_additional_medicare_tax().into(),
            self.medicare_tax_withheld().into(),
            self.medicare_wages().into(),
            self.regular_medicare_tax().into(),
            self.total_additional_withholding().into(),
            self.total_additional_withholding().into(),
        ]
    }
}
