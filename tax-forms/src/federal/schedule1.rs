//! Schedule 1, Additional Income and Adjustments to Income.

use rust_decimal::Decimal;
use tax_core::calculations::{not_less_than_zero, round_half_up, sum_present};
use tax_core::{FieldValue, FilingStatus, Form, FormTag};

use crate::federal::F1040;

pub struct Schedule1<'a> {
    f1040: &'a F1040<'a>,
}

impl<'a> Schedule1<'a> {
    pub fn new(f1040: &'a F1040<'a>) -> Self {
        Self { f1040 }
    }

    /// Line 7.
    pub fn unemployment_compensation(&self) -> Option<Decimal> {
        sum_present(
            self.f1040
                .info()
                .f1099_gs
                .iter()
                .filter(|form| self.f1040.includes(form.owner))
                .map(|form| Some(form.unemployment_compensation)),
        )
    }

    /// Line 10.
    pub fn additional_income(&self) -> Option<Decimal> {
        sum_present([self.unemployment_compensation()])
    }

    /// Student loan interest paid, before the deduction limit.
    pub fn student_loan_interest_paid(&self) -> Option<Decimal> {
        sum_present(
            self.f1040
                .info()
                .f1098es
                .iter()
                .filter(|form| self.f1040.includes(form.owner))
                .map(|form| Some(form.interest_paid)),
        )
    }

    /// Line 21, from the Student Loan Interest Deduction Worksheet.
    ///
    /// Married filing separately returns cannot take the deduction.
    pub fn student_loan_interest_deduction(&self) -> Option<Decimal> {
        if self.f1040.filing_status() == FilingStatus::MarriedFilingSeparately {
            return None;
        }
        let paid = self.student_loan_interest_paid()?;
        let params = &self.f1040.params().student_loan_interest;
        let allowed = paid.min(params.max_deduction);

        let (start, range) = if self.f1040.filing_status().is_joint() {
            (params.phase_out_start_joint, params.phase_out_range_joint)
        } else {
            (params.phase_out_start, params.phase_out_range)
        };
        let excess = not_less_than_zero(self.f1040.total_income() - start);
        let fraction = (excess / range).min(Decimal::ONE);

        Some(allowed - round_half_up(allowed * fraction))
    }

    /// Line 26.
    pub fn total_adjustments(&self) -> Option<Decimal> {
        sum_present([self.student_loan_interest_deduction()])
    }
}

impl Form for Schedule1<'_> {
    fn tag(&self) -> FormTag {
        FormTag::Schedule1
    }

    fn sequence_index(&self) -> u32 {
        1
    }

    fn is_needed(&self) -> bool {
        self.additional_income().is_some() || self.total_adjustments().is_some()
    }

    fn fields(&self) -> Vec<FieldValue> {
        let info = self.f1040.info();
        vec![
            info.primary.full_name().into(),
            info.primary.ssn.as_str().into(),
            self.unemployment_compensation().into(),
            self.additional_income().into(),
            self.student_loan_interest_deduction().into(),
            self.total_adjustments().into(),
        ]
    }
}
