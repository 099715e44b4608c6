//! Schedule B, Interest and Ordinary Dividends.

use rust_decimal::Decimal;
use tax_core::calculations::sum;
use tax_core::{Diagnostic, F1099Div, F1099Int, FieldValue, Form, FormTag};

use crate::federal::F1040;
use crate::layout;

const INTEREST_ROWS: usize = 14;
const DIVIDEND_ROWS: usize = 15;

pub struct ScheduleB<'a> {
    f1040: &'a F1040<'a>,
}

impl<'a> ScheduleB<'a> {
    pub fn new(f1040: &'a F1040<'a>) -> Self {
        Self { f1040 }
    }

    pub fn interest_payers(&self) -> impl Iterator<Item = &'a F1099Int> {
        let f1040 = self.f1040;
        f1040
            .info()
            .f1099_ints
            .iter()
            .filter(move |form| f1040.includes(form.owner))
    }

    pub fn dividend_payers(&self) -> impl Iterator<Item = &'a F1099Div> {
        let f1040 = self.f1040;
        f1040
            .info()
            .f1099_divs
            .iter()
            .filter(move |form| f1040.includes(form.owner))
    }

    /// Lines 2 and 4.
    pub fn total_interest(&self) -> Decimal {
        sum([self.f1040.taxable_interest()])
    }

    /// Line 6.
    pub fn total_dividends(&self) -> Decimal {
        sum([self.f1040.ordinary_dividends()])
    }
}

impl Form for ScheduleB<'_> {
    fn tag(&self) -> FormTag {
        FormTag::ScheduleB
    }

    fn sequence_index(&self) -> u32 {
        8
    }

    fn is_needed(&self) -> bool {
        let threshold = self.f1040.params().schedule_b_threshold;
        self.total_interest() > threshold || self.total_dividends() > threshold
    }

    /// Rows beyond the printed table are left off; the totals always
    /// include every payer.
    fn fields(&self) -> Vec<FieldValue> {
        let info = self.f1040.info();
        let mut fields: Vec<FieldValue> = vec![
            info.primary.full_name().into(),
            info.primary.ssn.as_str().into(),
        ];
        fields.extend(layout::rows(self.interest_payers(), INTEREST_ROWS, |form| {
            [form.payer.as_str().into(), form.interest.into()]
        }));
        fields.extend([
            self.total_interest().into(),
            FieldValue::Absent,
            self.total_interest().into(),
        ]);
        fields.extend(layout::rows(self.dividend_payers(), DIVIDEND_ROWS, |form| {
            [form.payer.as_str().into(), form.ordinary_dividends.into()]
        }));
        fields.push(self.total_dividends().into());
        fields
    }

    fn diagnostics(&self) -> Vec<Diagnostic> {
        [
            layout::overflow(
                FormTag::ScheduleB,
                "1",
                "interest payers",
                self.interest_payers().count(),
                INTEREST_ROWS,
            ),
            layout::overflow(
                FormTag::ScheduleB,
                "5",
                "dividend payers",
                self.dividend_payers().count(),
                DIVIDEND_ROWS,
            ),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
