//! Schedule EIC, Earned Income Credit.
//!
//! Besides listing qualifying children, this view owns the credit
//! computation: a phase-in on earned income up to the maximum credit, a
//! plateau, then a phase-out above a threshold that is higher for joint
//! returns. When AGI is above the phase-out start the credit is the smaller
//! of the amounts computed on earned income and on AGI.

use rust_decimal::Decimal;
use tax_core::calculations::{not_less_than_zero, round_to_dollar};
use tax_core::{Dependent, FieldValue, FilingStatus, Form, FormTag};

use crate::federal::F1040;
use crate::layout;
use crate::params::federal::EicSchedule;

const CHILD_ROWS: usize = 3;

pub struct ScheduleEic<'a> {
    f1040: &'a F1040<'a>,
}

impl<'a> ScheduleEic<'a> {
    pub fn new(f1040: &'a F1040<'a>) -> Self {
        Self { f1040 }
    }

    pub fn qualifying_children(&self) -> Vec<&'a Dependent> {
        let year = self.f1040.tax_year();
        self.f1040
            .info()
            .dependents
            .iter()
            .filter(|dependent| dependent.qualifies_for_eic(year))
            .collect()
    }

    fn is_eligible(
        &self,
        qualifying_children: usize,
    ) -> bool {
        let params = &self.f1040.params().earned_income_credit;
        if self.f1040.filing_status() == FilingStatus::MarriedFilingSeparately {
            return false;
        }
        if self.f1040.investment_income() > params.investment_income_limit {
            return false;
        }
        if qualifying_children > 0 {
            return true;
        }

        let info = self.f1040.info();
        std::iter::once(&info.primary)
            .chain(info.joint_spouse())
            .map(|person| person.age_at_end_of(info.tax_year))
            .any(|age| (params.childless_min_age..=params.childless_max_age).contains(&age))
    }

    /// Form 1040 line 27, blank when no credit is allowed.
    pub fn credit(&self) -> Option<Decimal> {
        let children = self.qualifying_children().len();
        if !self.is_eligible(children) {
            return None;
        }

        let schedule = self.f1040.params().earned_income_credit.schedule(children);
        let phase_out_start = if self.f1040.filing_status().is_joint() {
            schedule.phase_out_start_joint
        } else {
            schedule.phase_out_start
        };

        let mut credit = tentative_credit(schedule, self.f1040.earned_income(), phase_out_start);
        let agi = self.f1040.agi();
        if agi > phase_out_start {
            credit = credit.min(tentative_credit(schedule, agi, phase_out_start));
        }

        let credit = round_to_dollar(credit);
        (credit > Decimal::ZERO).then_some(credit)
    }
}

fn tentative_credit(
    schedule: &EicSchedule,
    income: Decimal,
    phase_out_start: Decimal,
) -> Decimal {
    let phased_in = (income * schedule.phase_in_rate).min(schedule.max_credit);
    let reduction = not_less_than_zero(income - phase_out_start) * schedule.phase_out_rate;
    not_less_than_zero(phased_in - reduction)
}

impl Form for ScheduleEic<'_> {
    fn tag(&self) -> FormTag {
        FormTag::ScheduleEic
    }

    fn sequence_index(&self) -> u32 {
        43
    }

    fn is_needed(&self) -> bool {
        self.credit().is_some() && !self.qualifying_children().is_empty()
    }

    fn fields(&self) -> Vec<FieldValue> {
        let info = self.f1040.info();
        let mut fields: Vec<FieldValue> = vec![
            info.primary.full_name().into(),
            info.primary.ssn.as_str().into(),
        ];
        fields.extend(layout::rows(
            self.qualifying_children(),
            CHILD_ROWS,
            |child| {
                let born = child.person.date_of_birth;
                [
                    child.person.full_name().into(),
                    child.person.ssn.as_str().into(),
                    FieldValue::Date(born),
                    child.is_full_time_student.into(),
                    child.is_disabled.into(),
                    child.relationship.as_str().into(),
                    FieldValue::Amount(child.months_lived_with_taxpayer.into()),
                ]
            },
        ));
        fields
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tax_core::{F1099Int, PersonRole};

    use super::*;
    use crate::params::builtin_bracket_tables;
    use crate::test_support::*;

    // =========================================================================
    // Credit formula tests
    // =========================================================================

    #[test]
    fn credit_phases_in_with_earned_income() {
        let tables = builtin_bracket_tables().unwrap();
        let mut info = single_filer();
        info.dependents = vec![child(2018)];
        info.w2s = vec![w2(dec!(5000))];
        let f1040 = F1040::new(&info, &tables).unwrap();

        // 34% of 5000
        assert_eq!(f1040.earned_income_credit(), Some(dec!(1700)));
    }

    #[test]
    fn credit_plateaus_at_maximum() {
        let tables = builtin_bracket_tables().unwrap();
        let mut info = single_filer();
        info.dependents = vec![child(2018), child(2019)];
        info.w2s = vec![w2(dec!(20000))];
        let f1040 = F1040::new(&info, &tables).unwrap();

        assert_eq!(f1040.earned_income_credit(), Some(dec!(6960)));
    }

    #[test]
    fn credit_phases_out_above_threshold() {
        let tables = builtin_bracket_tables().unwrap();
        let mut info = single_filer();
        info.dependents = vec![child(2018)];
        info.w2s = vec![w2(dec!(32720))];
        let f1040 = F1040::new(&info, &tables).unwrap();

        // 4213 - 15.98% of 10000
        assert_eq!(f1040.earned_income_credit(), Some(dec!(2615)));
    }

    #[test]
    fn joint_returns_phase_out_later() {
        let tables = builtin_bracket_tables().unwrap();
        let mut info = married_filers(FilingStatus::MarriedFilingJointly);
        info.dependents = vec![child(2018)];
        info.w2s = vec![w2(dec!(29640))];
        let f1040 = F1040::new(&info, &tables).unwrap();

        assert_eq!(f1040.earned_income_credit(), Some(dec!(4213)));
    }

    // =========================================================================
    // Eligibility tests
    // =========================================================================

    #[test]
    fn separate_return_gets_no_credit() {
        let tables = builtin_bracket_tables().unwrap();
        let mut info = married_filers(FilingStatus::MarriedFilingSeparately);
        info.dependents = vec![child(2018)];
        info.w2s = vec![w2(dec!(10000))];
        let f1040 = F1040::new(&info, &tables).unwrap();

        assert_eq!(f1040.earned_income_credit(), None);
    }

    #[test]
    fn excess_investment_income_disqualifies() {
        let tables = builtin_bracket_tables().unwrap();
        let mut info = single_filer();
        info.dependents = vec![child(2018)];
        info.w2s = vec![w2(dec!(10000))];
        info.f1099_ints = vec![F1099Int {
            payer: "Bank".to_string(),
            owner: PersonRole::Primary,
            interest: dec!(12000),
            federal_withholding: None,
        }];
        let f1040 = F1040::new(&info, &tables).unwrap();

        assert_eq!(f1040.earned_income_credit(), None);
    }

    #[test]
    fn childless_filer_must_be_of_age() {
        let tables = builtin_bracket_tables().unwrap();
        let mut info = single_filer();
        info.w2s = vec![w2(dec!(8000))];

        let adult = F1040::new(&info, &tables).unwrap();
        assert_eq!(adult.earned_income_credit(), Some(dec!(612)));
        assert!(!adult.schedule_eic().is_needed());

        info.primary = person("Jo", 2002);
        let young = F1040::new(&info, &tables).unwrap();
        assert_eq!(young.earned_income_credit(), None);
    }

    // =========================================================================
    // Layout tests
    // =========================================================================

    #[test]
    fn lists_qualifying_children() {
        let tables = builtin_bracket_tables().unwrap();
        let mut info = single_filer();
        info.dependents = vec![child(2018)];
        info.w2s = vec![w2(dec!(15000))];
        let f1040 = F1040::new(&info, &tables).unwrap();
        let schedule = f1040.schedule_eic();

        assert!(schedule.is_needed());
        let fields = schedule.fields();
        assert_eq!(fields.len(), 2 + CHILD_ROWS * 7);
        assert_eq!(fields[2].as_text(), Some("Kim Doe"));
        assert!(fields[9].is_absent());
    }
}
