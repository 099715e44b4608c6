//! Form 2441, Child and Dependent Care Expenses.

use rust_decimal::Decimal;
use tax_core::calculations::{cap, not_less_than_zero, round_half_up};
use tax_core::{CareProvider, Dependent, Diagnostic, FieldValue, Form, FormTag, PersonRole};

use crate::federal::F1040;
use crate::layout;

const PROVIDER_ROWS: usize = 3;
const PERSON_ROWS: usize = 3;

pub struct F2441<'a> {
    f1040: &'a F1040<'a>,
}

impl<'a> F2441<'a> {
    pub fn new(f1040: &'a F1040<'a>) -> Self {
        Self { f1040 }
    }

    pub fn providers(&self) -> &'a [CareProvider] {
        &self.f1040.info().care_providers
    }

    pub fn qualifying_persons(&self) -> Vec<&'a Dependent> {
        let year = self.f1040.tax_year();
        self.f1040
            .info()
            .dependents
            .iter()
            .filter(|dependent| dependent.qualifies_for_dependent_care(year))
            .collect()
    }

    /// Line 3: expenses paid, limited by the number of qualifying persons.
    pub fn qualified_expenses(&self) -> Decimal {
        let params = &self.f1040.params().dependent_care;
        let paid: Decimal = self.providers().iter().map(|provider| provider.amount_paid).sum();
        let limit = match self.qualifying_persons().len() {
            0 => Decimal::ZERO,
            1 => params.expense_limit_one,
            _ => params.expense_limit_two_or_more,
        };
        paid.min(limit)
    }

    /// Line 4.
    pub fn primary_earned_income(&self) -> Decimal {
        self.f1040.wages_of(PersonRole::Primary)
    }

    /// Line 5. Blank on a joint return that names no spouse; on any other
    /// return it repeats line 4.
    pub fn spouse_earned_income(&self) -> Option<Decimal> {
        let info = self.f1040.info();
        if !info.filing_status.is_joint() {
            return Some(self.primary_earned_income());
        }
        info.spouse
            .as_ref()
            .map(|_| self.f1040.wages_of(PersonRole::Spouse))
    }

    /// Line 6.
    pub fn eligible_expenses(&self) -> Decimal {
        let smaller = self.qualified_expenses().min(self.primary_earned_income());
        self.spouse_earned_income()
            .map_or(smaller, |spouse| smaller.min(spouse))
    }

    /// Line 8: the credit rate drops one point per started step of AGI
    /// above the floor, down to the minimum rate.
    pub fn credit_rate(&self) -> Decimal {
        let params = &self.f1040.params().dependent_care;
        let excess = not_less_than_zero(self.f1040.agi() - params.agi_floor);
        let steps = (excess / params.agi_step).ceil();

        cap(
            params.max_rate - steps * params.rate_decrement,
            params.min_rate,
            Some(params.max_rate),
        )
    }

    /// Line 9a.
    pub fn tentative_credit(&self) -> Decimal {
        round_half_up(self.eligible_expenses() * self.credit_rate())
    }

    /// Line 10, from the Credit Limit Worksheet.
    pub fn credit_limit(&self) -> Decimal {
        self.f1040.tax_before_credits()
    }

    /// Line 11 as carried to Schedule 3 line 2.
    pub fn credit(&self) -> Option<Decimal> {
        self.is_needed()
            .then(|| self.tentative_credit().min(self.credit_limit()))
    }
}

impl Form for F2441<'_> {
    fn tag(&self) -> FormTag {
        FormTag::F2441
    }

    fn sequence_index(&self) -> u32 {
        21
    }

    fn is_needed(&self) -> bool {
        !self.providers().is_empty()
    }

    fn fields(&self) -> Vec<FieldValue> {
        let info = self.f1040.info();
        let mut fields: Vec<FieldValue> = vec![
            info.primary.full_name().into(),
            info.primary.ssn.as_str().into(),
        ];
        fields.extend(layout::rows(self.providers(), PROVIDER_ROWS, |provider| {
            [
                provider.name.as_str().into(),
                provider.tin.as_str().into(),
                provider.amount_paid.into(),
            ]
        }));
        fields.extend(layout::rows(
            self.qualifying_persons(),
            PERSON_ROWS,
            |dependent| {
                [
                    dependent.person.full_name().into(),
                    dependent.person.ssn.as_str().into(),
                ]
            },
        ));
        fields.extend([
            self.qualified_expenses().into(),
            self.primary_earned_income().into(),
            self.spouse_earned_income().into(),
            self.eligible_expenses().into(),
            self.f1040.agi().into(),
            self.credit_rate().into(),
            self.tentative_credit().into(),
            self.credit_limit().into(),
            self.credit().into(),
        ]);
        fields
    }

    fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        if !self.is_needed() {
            return diagnostics;
        }

        if self.spouse_earned_income().is_none() {
            diagnostics.push(Diagnostic::new(
                FormTag::F2441,
                "5",
                "joint return has no spouse; spouse earned income left blank",
            ));
        }
        if self.qualifying_persons().is_empty() {
            diagnostics.push(Diagnostic::new(
                FormTag::F2441,
                "2",
                "care expenses reported without a qualifying person",
            ));
        }
        diagnostics.extend(layout::overflow(
            FormTag::F2441,
            "1",
            "care providers",
            self.providers().len(),
            PROVIDER_ROWS,
        ));
        diagnostics.extend(layout::overflow(
            FormTag::F2441,
            "2",
            "qualifying persons",
            self.qualifying_persons().len(),
            PERSON_ROWS,
        ));
        diagnostics
    }
}
