//! Form 1040, U.S. Individual Income Tax Return.
//!
//! The root of the federal graph. Every federal schedule, and every state
//! return, is a view that borrows a fully built `F1040`.

use std::cell::OnceCell;

use rust_decimal::Decimal;
use tax_core::calculations::{not_less_than_zero, progressive_tax, sum, sum_present};
use tax_core::{
    BracketTable, BracketTables, Dependent, Diagnostic, FieldValue, FilingStatus, Form,
    FormError, FormTag, Jurisdiction, PersonRole, TaxpayerInformation, W2,
};

use crate::federal::{
    F2441, F8959, F8960, Schedule1, Schedule2, Schedule3, Schedule8812, ScheduleB, ScheduleEic,
};
use crate::layout;
use crate::params::FederalParameters;

const DEPENDENT_ROWS: usize = 4;

pub struct F1040<'a> {
    info: &'a TaxpayerInformation,
    tables: &'a BracketTables,
    brackets: &'a BracketTable,
    params: FederalParameters,
    agi: OnceCell<Decimal>,
}

impl<'a> F1040<'a> {
    /// # Errors
    ///
    /// Returns [`FormError`] if there are no federal parameters or no
    /// bracket table for the return's year and filing status.
    pub fn new(
        info: &'a TaxpayerInformation,
        tables: &'a BracketTables,
    ) -> Result<Self, FormError> {
        let params = FederalParameters::for_year(info.tax_year).ok_or(
            FormError::UnsupportedTaxYear {
                jurisdiction: Jurisdiction::Federal,
                tax_year: info.tax_year,
            },
        )?;
        let brackets = tables
            .get(Jurisdiction::Federal, info.tax_year, info.filing_status)
            .ok_or(FormError::MissingBracketTable {
                jurisdiction: Jurisdiction::Federal,
                tax_year: info.tax_year,
                filing_status: info.filing_status,
            })?;

        Ok(Self {
            info,
            tables,
            brackets,
            params,
            agi: OnceCell::new(),
        })
    }

    pub fn info(&self) -> &'a TaxpayerInformation {
        self.info
    }

    /// The full configuration the return was built with, for state returns.
    pub fn bracket_tables(&self) -> &'a BracketTables {
        self.tables
    }

    pub fn params(&self) -> &FederalParameters {
        &self.params
    }

    pub fn filing_status(&self) -> FilingStatus {
        self.info.filing_status
    }

    pub fn tax_year(&self) -> i32 {
        self.info.tax_year
    }

    // -------------------------------------------------------------------------
    // Subordinate forms
    // -------------------------------------------------------------------------

    pub fn schedule1(&self) -> Schedule1<'_> {
        Schedule1::new(self)
    }

    pub fn schedule2(&self) -> Schedule2<'_> {
        Schedule2::new(self)
    }

    pub fn schedule3(&self) -> Schedule3<'_> {
        Schedule3::new(self)
    }

    pub fn schedule_b(&self) -> ScheduleB<'_> {
        ScheduleB::new(self)
    }

    pub fn schedule_eic(&self) -> ScheduleEic<'_> {
        ScheduleEic::new(self)
    }

    pub fn schedule8812(&self) -> Schedule8812<'_> {
        Schedule8812::new(self)
    }

    pub fn f2441(&self) -> F2441<'_> {
        F2441::new(self)
    }

    pub fn f8959(&self) -> F8959<'_> {
        F8959::new(self)
    }

    pub fn f8960(&self) -> F8960<'_> {
        F8960::new(self)
    }

    // -------------------------------------------------------------------------
    // Source documents that count toward this return
    // -------------------------------------------------------------------------

    /// Spouse documents only count on a joint return.
    pub fn includes(
        &self,
        owner: PersonRole,
    ) -> bool {
        self.info.counts_toward_return(owner)
    }

    pub fn w2s(&self) -> impl Iterator<Item = &'a W2> {
        let info = self.info;
        info.w2s
            .iter()
            .filter(move |w2| info.counts_toward_return(w2.owner))
    }

    /// Box 1 wages of one person's W-2s.
    pub fn wages_of(
        &self,
        owner: PersonRole,
    ) -> Decimal {
        self.info.w2s_for(owner).map(|w2| w2.wages).sum()
    }

    /// Wages are the only earned income modeled.
    pub fn earned_income(&self) -> Decimal {
        self.wages()
    }

    /// Interest and dividends, for the investment income tests.
    pub fn investment_income(&self) -> Decimal {
        sum([self.taxable_interest(), self.ordinary_dividends()])
    }

    pub fn child_tax_credit_dependents(&self) -> impl Iterator<Item = &'a Dependent> {
        let year = self.info.tax_year;
        self.info
            .dependents
            .iter()
            .filter(move |dependent| dependent.qualifies_for_child_tax_credit(year))
    }

    pub fn other_dependents(&self) -> impl Iterator<Item = &'a Dependent> {
        let year = self.info.tax_year;
        self.info
            .dependents
            .iter()
            .filter(move |dependent| !dependent.qualifies_for_child_tax_credit(year))
    }

    // -------------------------------------------------------------------------
    // Income
    // -------------------------------------------------------------------------

    /// Lines 1a and 1z.
    pub fn wages(&self) -> Decimal {
        self.w2s().map(|w2| w2.wages).sum()
    }

    /// Line 2b.
    pub fn taxable_interest(&self) -> Option<Decimal> {
        sum_present(
            self.info
                .f1099_ints
                .iter()
                .filter(|form| self.includes(form.owner))
                .map(|form| Some(form.interest)),
        )
    }

    /// Line 3a.
    pub fn qualified_dividends(&self) -> Option<Decimal> {
        sum_present(
            self.info
                .f1099_divs
                .iter()
                .filter(|form| self.includes(form.owner))
                .map(|form| form.qualified_dividends),
        )
    }

    /// Line 3b.
    pub fn ordinary_dividends(&self) -> Option<Decimal> {
        sum_present(
            self.info
                .f1099_divs
                .iter()
                .filter(|form| self.includes(form.owner))
                .map(|form| Some(form.ordinary_dividends)),
        )
    }

    /// Line 8.
    pub fn additional_income(&self) -> Option<Decimal> {
        self.schedule1().additional_income()
    }

    /// Line 9.
    pub fn total_income(&self) -> Decimal {
        sum([
            Some(self.wages()),
            self.taxable_interest(),
            self.ordinary_dividends(),
            self.additional_income(),
        ])
    }

    /// Line 10.
    pub fn adjustments_to_income(&self) -> Option<Decimal> {
        self.schedule1().total_adjustments()
    }

    /// Line 11. Computed once per instance.
    pub fn agi(&self) -> Decimal {
        *self
            .agi
            .get_or_init(|| self.total_income() - sum([self.adjustments_to_income()]))
    }

    // -------------------------------------------------------------------------
    // Tax and credits
    // -------------------------------------------------------------------------

    /// Boxes checked for being 65 or older or blind.
    fn additional_deduction_boxes(&self) -> u32 {
        let year = self.info.tax_year;
        std::iter::once(&self.info.primary)
            .chain(self.info.joint_spouse())
            .map(|person| u32::from(person.is_65_or_older(year)) + u32::from(person.is_blind))
            .sum()
    }

    /// Line 12.
    pub fn standard_deduction(&self) -> Decimal {
        let status = self.info.filing_status;
        self.params.standard_deduction.get(status)
            + self.params.additional_standard_deduction.get(status)
                * Decimal::from(self.additional_deduction_boxes())
    }

    /// Line 14. No qualified business income deduction is modeled, so this
    /// is line 12.
    pub fn total_deductions(&self) -> Decimal {
        self.standard_deduction()
    }

    /// Line 15.
    pub fn taxable_income(&self) -> Decimal {
        not_less_than_zero(self.agi() - self.total_deductions())
    }

    /// Line 16.
    pub fn tax(&self) -> Decimal {
        progressive_tax(self.brackets, self.taxable_income())
    }

    /// Line 18. Schedule 2 Part I taxes are not computed.
    pub fn tax_before_credits(&self) -> Decimal {
        self.tax()
    }

    /// Line 19.
    pub fn child_tax_credit(&self) -> Option<Decimal> {
        self.schedule8812().nonrefundable_credit()
    }

    /// Line 20.
    pub fn schedule3_credits(&self) -> Option<Decimal> {
        self.schedule3().nonrefundable_credits()
    }

    /// Line 21.
    pub fn total_credits(&self) -> Decimal {
        sum([self.child_tax_credit(), self.schedule3_credits()])
    }

    /// Line 22.
    pub fn tax_after_credits(&self) -> Decimal {
        not_less_than_zero(self.tax_before_credits() - self.total_credits())
    }

    /// Line 23.
    pub fn other_taxes(&self) -> Option<Decimal> {
        self.schedule2().other_taxes()
    }

    /// Line 24.
    pub fn total_tax(&self) -> Decimal {
        self.tax_after_credits() + sum([self.other_taxes()])
    }

    // -------------------------------------------------------------------------
    // Payments
    // -------------------------------------------------------------------------

    /// Line 25a.
    pub fn w2_withholding(&self) -> Decimal {
        self.w2s().map(|w2| w2.federal_withholding).sum()
    }

    /// Line 25b.
    pub fn form1099_withholding(&self) -> Option<Decimal> {
        let interest = self
            .info
            .f1099_ints
            .iter()
            .filter(|form| self.includes(form.owner))
            .map(|form| form.federal_withholding);
        let dividends = self
            .info
            .f1099_divs
            .iter()
            .filter(|form| self.includes(form.owner))
            .map(|form| form.federal_withholding);
        let government = self
            .info
            .f1099_gs
            .iter()
            .filter(|form| self.includes(form.owner))
            .map(|form| form.federal_withholding);

        sum_present(interest.chain(dividends).chain(government))
    }

    /// Line 25c.
    pub fn other_withholding(&self) -> Option<Decimal> {
        self.f8959().additional_medicare_withholding()
    }

    /// Line 25d.
    pub fn total_withholding(&self) -> Decimal {
        self.w2_withholding() + sum([self.form1099_withholding(), self.other_withholding()])
    }

    /// Line 26.
    pub fn estimated_payments(&self) -> Option<Decimal> {
        sum_present(
            self.info
                .estimated_payments
                .iter()
                .map(|payment| Some(payment.amount)),
        )
    }

    /// Line 27.
    pub fn earned_income_credit(&self) -> Option<Decimal> {
        self.schedule_eic().credit()
    }

    /// Line 28.
    pub fn additional_child_tax_credit(&self) -> Option<Decimal> {
        self.schedule8812().refundable_credit()
    }

    /// Line 31.
    pub fn schedule3_payments(&self) -> Option<Decimal> {
        self.schedule3().other_payments()
    }

    /// Line 32.
    pub fn other_payments_and_refundable_credits(&self) -> Option<Decimal> {
        sum_present([
            self.earned_income_credit(),
            self.additional_child_tax_credit(),
            self.schedule3_payments(),
        ])
    }

    /// Line 33.
    pub fn total_payments(&self) -> Decimal {
        self.total_withholding()
            + sum([
                self.estimated_payments(),
                self.other_payments_and_refundable_credits(),
            ])
    }

    /// Lines 34 and 35a.
    pub fn refund(&self) -> Option<Decimal> {
        let overpaid = self.total_payments() - self.total_tax();
        (overpaid > Decimal::ZERO).then_some(overpaid)
    }

    /// Line 37.
    pub fn amount_owed(&self) -> Option<Decimal> {
        let owed = self.total_tax() - self.total_payments();
        (owed > Decimal::ZERO).then_some(owed)
    }

    fn header_fields(&self) -> Vec<FieldValue> {
        let info = self.info;
        let year = info.tax_year;
        let spouse = info.spouse.as_ref().filter(|_| {
            matches!(
                info.filing_status,
                FilingStatus::MarriedFilingJointly | FilingStatus::MarriedFilingSeparately
            )
        });
        let joint_spouse = info.joint_spouse();

        let mut fields: Vec<FieldValue> = vec![
            info.primary.first_name.as_str().into(),
            info.primary.last_name.as_str().into(),
            info.primary.ssn.as_str().into(),
            spouse.map(|spouse| spouse.first_name.as_str()).into(),
            spouse.map(|spouse| spouse.last_name.as_str()).into(),
            spouse.map(|spouse| spouse.ssn.as_str()).into(),
        ];
        fields.extend(
            FilingStatus::ALL
                .iter()
                .map(|status| FieldValue::Flag(*status == info.filing_status)),
        );
        fields.extend([
            FieldValue::from(info.primary.is_65_or_older(year)),
            info.primary.is_blind.into(),
            joint_spouse.map(|spouse| spouse.is_65_or_older(year)).into(),
            joint_spouse.map(|spouse| spouse.is_blind).into(),
        ]);
        fields.extend(layout::rows(&info.dependents, DEPENDENT_ROWS, |dependent| {
            let child = dependent.qualifies_for_child_tax_credit(year);
            [
                dependent.person.full_name().into(),
                dependent.person.ssn.as_str().into(),
                dependent.relationship.as_str().into(),
                child.into(),
                (!child).into(),
            ]
        }));
        fields
    }
}

impl Form for F1040<'_> {
    fn tag(&self) -> FormTag {
        FormTag::F1040
    }

    fn sequence_index(&self) -> u32 {
        0
    }

    fn fields(&self) -> Vec<FieldValue> {
        let mut fields = self.header_fields();
        fields.extend([
            self.wages().into(),
            self.wages().into(),
            FieldValue::Absent,
            self.taxable_interest().into(),
            self.qualified_dividends().into(),
            self.ordinary_dividends().into(),
            self.additional_income().into(),
            self.total_income().into(),
            self.adjustments_to_income().into(),
            self.agi().into(),
            self.standard_deduction().into(),
            FieldValue::Absent,
            self.total_deductions().into(),
            self.taxable_income().into(),
            self.tax().into(),
            FieldValue::Absent,
            self.tax_before_credits().into(),
            self.child_tax_credit().into(),
            self.schedule3_credits().into(),
            self.total_credits().into(),
            self.tax_after_credits().into(),
            self.other_taxes().into(),
            self.total_tax().into(),
            self.w2_withholding().into(),
            self.form1099_withholding().into(),
            self.other_withholding().into(),
            self.total_withholding().into(),
            self.estimated_payments().into(),
            self.earned_income_credit().into(),
            self.additional_child_tax_credit().into(),
            FieldValue::Absent,
            self.schedule3_payments().into(),
            self.other_payments_and_refundable_credits().into(),
            self.total_payments().into(),
            self.refund().into(),
            self.refund().into(),
            self.amount_owed().into(),
        ]);
        fields
    }

    fn attachments(&self) -> Vec<Box<dyn Form + '_>> {
        vec![
            Box::new(self.schedule1()),
            Box::new(self.schedule2()),
            Box::new(self.schedule3()),
            Box::new(self.schedule_b()),
            Box::new(self.schedule_eic()),
            Box::new(self.schedule8812()),
            Box::new(self.f8959()),
        ]
    }

    fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        if self.info.filing_status.is_joint() && self.info.spouse.is_none() {
            diagnostics.push(Diagnostic::new(
                FormTag::F1040,
                "spouse",
                "joint return has no spouse; spouse lines left blank",
            ));
        }
        if self.info.joint_spouse().is_none() {
            for w2 in self.info.w2s_for(PersonRole::Spouse) {
                diagnostics.push(Diagnostic::new(
                    FormTag::F1040,
                    "1a",
                    format!(
                        "spouse W-2 from {} excluded from a non-joint return",
                        w2.employer_name
                    ),
                ));
            }
        }
        diagnostics.extend(layout::overflow(
            FormTag::F1040,
            "Dependents",
            "dependents",
            self.info.dependents.len(),
            DEPENDENT_ROWS,
        ));
        diagnostics
    }
}
