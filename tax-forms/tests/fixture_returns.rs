//! Returns assembled from taxpayer data stored as JSON.

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use tax_core::{FilingStatus, FormTag, PersonRole, StateCode, TaxpayerInformation};
use tax_forms::states::WvIt140;
use tax_forms::{F1040, assemble, builtin_bracket_tables};

const JOINT_WEST_VIRGINIA: &str = include_str!("fixtures/joint_west_virginia.json");

fn load(json: &str) -> TaxpayerInformation {
    serde_json::from_str(json).expect("fixture should deserialize")
}

#[test]
fn fixture_deserializes_with_defaults() {
    let info = load(JOINT_WEST_VIRGINIA);

    assert_eq!(info.filing_status, FilingStatus::MarriedFilingJointly);
    assert_eq!(info.dependents.len(), 2);
    assert_eq!(info.w2s[0].owner, PersonRole::Primary);
    assert_eq!(info.w2s[1].owner, PersonRole::Spouse);
    assert_eq!(info.f1099_ints[0].owner, PersonRole::Primary);
    assert!(info.f1099_divs.is_empty());
    assert!(!info.primary.is_blind);
    assert_eq!(info.locality, None);
    assert_eq!(info.state_jurisdictions(), vec![StateCode::WV]);
}

#[test]
fn joint_family_federal_lines() {
    let tables = builtin_bracket_tables().unwrap();
    let info = load(JOINT_WEST_VIRGINIA);
    let f1040 = F1040::new(&info, &tables).unwrap();

    assert_eq!(f1040.agi(), dec!(91800));
    assert_eq!(f1040.taxable_income(), dec!(62600));
    // 2320 + 4728
    assert_eq!(f1040.tax(), dec!(7048));
    // dependent care at the 20% floor on 5000 of expenses
    assert_eq!(f1040.schedule3_credits(), Some(dec!(1000)));
    assert_eq!(f1040.child_tax_credit(), Some(dec!(4000)));
    assert_eq!(f1040.total_tax(), dec!(2048));
    assert_eq!(f1040.earned_income_credit(), None);
    assert_eq!(f1040.total_payments(), dec!(5500));
    assert_eq!(f1040.refund(), Some(dec!(3452)));
    assert_eq!(f1040.amount_owed(), None);
}

#[test]
fn joint_family_west_virginia_lines() {
    let tables = builtin_bracket_tables().unwrap();
    let info = load(JOINT_WEST_VIRGINIA);
    let f1040 = F1040::new(&info, &tables).unwrap();
    let it140 = WvIt140::new(&f1040).unwrap();

    assert_eq!(it140.exemptions(), dec!(8000));
    assert_eq!(it140.taxable_income(), dec!(83800));
    assert_eq!(it140.tax(), dec!(3402));
    assert_eq!(it140.withholding(), Some(dec!(2900)));
    assert_eq!(it140.balance_due(), Some(dec!(502)));
}

#[test]
fn joint_family_forms_in_filing_order() {
    let tables = builtin_bracket_tables().unwrap();
    let info = load(JOINT_WEST_VIRGINIA);

    let assembled = assemble(&info, &tables).unwrap();

    assert_eq!(
        assembled.tags(),
        vec![
            FormTag::F1040,
            FormTag::Schedule3,
            FormTag::ScheduleB,
            FormTag::F2441,
            FormTag::Schedule8812,
            FormTag::WvIt140,
        ]
    );
    assert!(assembled.failures.is_empty());
    assert!(assembled.diagnostics.is_empty());
}
