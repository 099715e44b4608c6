//! Schedule 8812, Credits for Qualifying Children and Other Dependents.

use rust_decimal::Decimal;
use tax_core::calculations::{not_less_than_zero, round_half_up, sum};
use tax_core::{FieldValue, Form, FormTag};

use crate::federal::F1040;

pub struct Schedule8812<'a> {
    f1040: &'a F1040<'a>,
}

impl<'a> Schedule8812<'a> {
    pub fn new(f1040: &'a F1040<'a>) -> Self {
        Self { f1040 }
    }

    /// Line 4.
    pub fn qualifying_children(&self) -> usize {
        self.f1040.child_tax_credit_dependents().count()
    }

    /// Line 6.
    pub fn other_dependents(&self) -> usize {
        self.f1040.other_dependents().count()
    }

    /// Line 8.
    pub fn other_dependent_credit(&self) -> Decimal {
        Decimal::from(self.other_dependents())
            * self.f1040.params().child_tax_credit.per_other_dependent
    }

    /// Line 5.
    pub fn child_credit(&self) -> Decimal {
        Decimal::from(self.qualifying_children()) * self.f1040.params().child_tax_credit.per_child
    }

    /// Line 9.
    pub fn credit_before_phase_out(&self) -> Decimal {
        self.child_credit() + self.other_dependent_credit()
    }

    /// Line 11: a fixed amount per started step of AGI over the threshold.
    pub fn phase_out_reduction(&self) -> Decimal {
        let params = &self.f1040.params().child_tax_credit;
        let threshold = if self.f1040.filing_status().is_joint() {
            params.phase_out_threshold_joint
        } else {
            params.phase_out_threshold
        };
        let excess = not_less_than_zero(self.f1040.agi() - threshold);

        (excess / params.phase_out_step).ceil() * params.reduction_per_step
    }

    /// Line 12.
    pub fn credit_after_phase_out(&self) -> Decimal {
        not_less_than_zero(self.credit_before_phase_out() - self.phase_out_reduction())
    }

    /// Line 13, from Credit Limit Worksheet A.
    pub fn credit_limit(&self) -> Decimal {
        not_less_than_zero(
            self.f1040.tax_before_credits()
                - sum([self.f1040.schedule3().dependent_care_credit()]),
        )
    }

    /// Line 14.
    pub fn allowed_credit(&self) -> Decimal {
        self.credit_after_phase_out().min(self.credit_limit())
    }

    /// Line 14 as carried to Form 1040 line 19.
    pub fn nonrefundable_credit(&self) -> Option<Decimal> {
        self.is_needed().then(|| self.allowed_credit())
    }

    /// Line 27 as carried to Form 1040 line 28.
    ///
    /// The part of the child credit the tax could not absorb, limited per
    /// child and to a share of earned income above a floor.
    pub fn refundable_credit(&self) -> Option<Decimal> {
        if self.qualifying_children() == 0 {
            return None;
        }
        let params = &self.f1040.params().child_tax_credit;

        let unused = self.credit_after_phase_out() - self.allowed_credit();
        let per_child_limit = Decimal::from(self.qualifying_children()) * params.refundable_per_child;
        let limited = unused.min(per_child_limit);

        let earned_over_floor = not_less_than_zero(self.f1040.earned_income() - params.earned_income_floor);
        let earned_limit = round_half_up(earned_over_floor * params.refundable_rate);

        let credit = limited.min(earned_limit);
        (credit > Decimal::ZERO).then_some(credit)
    }
}

impl Form for Schedule8812<'_> {
    fn tag(&self) -> FormTag {
        FormTag::Schedule8812
    }

    fn sequence_index(&self) -> u32 {
        47
    }

    fn is_needed(&self) -> bool {
        self.credit_before_phase_out() > Decimal::ZERO
    }

    fn fields(&self) -> Vec<FieldValue> {
        let info = self.f1040.info();
        vec![
            info.primary.full_name().into(),
            info.primary.ssn.as_str().into(),
            self.f1040.agi().into(),
            Decimal::from(self.qualifying_children()).into(),
            self.child_credit().into(),
            Decimal::from(self.other_dependents()).into(),
            self.other_dependent_credit().into(),
            self.credit_before_phase_out().into(),
            self.phase_out_reduction().into(),
            self.credit_after_phase_out().into(),
            self.credit_limit().into(),
            self.allowed_credit().into(),
            self.refundable_credit().into(),
        ]
    }
}
