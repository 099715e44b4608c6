//! Schedule IL-E/EIC, Illinois Exemption and Earned Income Credit.

use rust_decimal::Decimal;
use tax_core::calculations::round_to_dollar;
use tax_core::{Diagnostic, FieldValue, Form, FormTag};

use crate::layout;
use crate::states::Il1040;

const DEPENDENT_ROWS: usize = 4;

pub struct IlScheduleIlEEic<'a> {
    il1040: &'a Il1040<'a>,
}

impl<'a> IlScheduleIlEEic<'a> {
    pub fn new(il1040: &'a Il1040<'a>) -> Self {
        Self { il1040 }
    }

    fn exemption_limit_exceeded(&self) -> bool {
        let f1040 = self.il1040.f1040();
        let params = self.il1040.params();
        let limit = if f1040.filing_status().is_joint() {
            params.exemption_agi_limit_joint
        } else {
            params.exemption_agi_limit
        };
        f1040.agi() > limit
    }

    /// Step 3 line 1: the filer and a joint spouse.
    pub fn personal_exemptions(&self) -> Decimal {
        let filers = 1 + usize::from(self.il1040.f1040().info().joint_spouse().is_some());
        Decimal::from(filers) * self.il1040.params().exemption_allowance
    }

    /// Step 3 lines 2 and 3: one amount per 65-or-older or blind box.
    pub fn senior_and_blind_exemptions(&self) -> Decimal {
        let info = self.il1040.f1040().info();
        let boxes: u32 = std::iter::once(&info.primary)
            .chain(info.joint_spouse())
            .map(|person| u32::from(person.is_65_or_older(info.tax_year)) + u32::from(person.is_blind))
            .sum();
        Decimal::from(boxes) * self.il1040.params().senior_or_blind_allowance
    }

    /// Step 3 line 4.
    pub fn dependent_exemptions(&self) -> Decimal {
        let dependents = self.il1040.f1040().info().dependents.len();
        Decimal::from(dependents) * self.il1040.params().exemption_allowance
    }

    /// Step 3 line 5, zero above the federal AGI limit.
    pub fn exemption_allowance(&self) -> Decimal {
        if self.exemption_limit_exceeded() {
            return Decimal::ZERO;
        }
        self.personal_exemptions() + self.senior_and_blind_exemptions() + self.dependent_exemptions()
    }

    /// Step 4 line 7, blank when no federal credit is claimed.
    pub fn earned_income_credit(&self) -> Option<Decimal> {
        let rate = self.il1040.params().earned_income_credit_rate;
        self.il1040
            .f1040()
            .earned_income_credit()
            .map(|federal| round_to_dollar(federal * rate))
    }
}

impl Form for IlScheduleIlEEic<'_> {
    fn tag(&self) -> FormTag {
        FormTag::IlScheduleIlEEic
    }

    fn sequence_index(&self) -> u32 {
        1
    }

    fn is_needed(&self) -> bool {
        !self.il1040.f1040().info().dependents.is_empty()
            || self.il1040.f1040().earned_income_credit().is_some()
    }

    fn fields(&self) -> Vec<FieldValue> {
        let f1040 = self.il1040.f1040();
        let info = f1040.info();
        let mut fields: Vec<FieldValue> = vec![
            info.primary.full_name().into(),
            info.primary.ssn.as_str().into(),
        ];
        fields.extend(layout::rows(&info.dependents, DEPENDENT_ROWS, |dependent| {
            [
                dependent.person.full_name().into(),
                dependent.person.ssn.as_str().into(),
                dependent.relationship.as_str().into(),
                dependent.person.date_of_birth.into(),
            ]
        }));
        fields.extend([
            self.personal_exemptions().into(),
            self.senior_and_blind_exemptions().into(),
            self.dependent_exemptions().into(),
            self.exemption_allowance().into(),
            f1040.earned_income_credit().into(),
            self.earned_income_credit().into(),
        ]);
        fields
    }

    fn diagnostics(&self) -> Vec<Diagnostic> {
        layout::overflow(
            FormTag::IlScheduleIlEEic,
            "Section A",
            "dependents",
            self.il1040.f1040().info().dependents.len(),
            DEPENDENT_ROWS,
        )
        .into_iter()
        .collect()
    }
}
