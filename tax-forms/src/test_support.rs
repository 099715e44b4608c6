//! Builders for taxpayer fixtures used across this crate's unit tests.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tax_core::{Dependent, FilingStatus, Person, PersonRole, TaxpayerInformation, W2};

pub fn person(
    first_name: &str,
    birth_year: i32,
) -> Person {
    Person {
        first_name: first_name.to_string(),
        last_name: "Doe".to_string(),
        ssn: "123-45-6789".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(birth_year, 3, 14).unwrap(),
        is_blind: false,
    }
}

pub fn child(birth_year: i32) -> Dependent {
    Dependent {
        person: person("Kim", birth_year),
        relationship: "Son".to_string(),
        months_lived_with_taxpayer: 12,
        is_full_time_student: false,
        is_disabled: false,
    }
}

pub fn w2(wages: Decimal) -> W2 {
    W2 {
        employer_name: "Acme".to_string(),
        employer_ein: "12-3456789".to_string(),
        owner: PersonRole::Primary,
        wages,
        federal_withholding: Decimal::ZERO,
        social_security_wages: wages,
        social_security_withholding: Decimal::ZERO,
        medicare_wages: wages,
        medicare_withholding: Decimal::ZERO,
        state: None,
        state_wages: None,
        state_withholding: None,
    }
}

pub fn w2_with_withholding(
    wages: Decimal,
    federal_withholding: Decimal,
) -> W2 {
    W2 {
        federal_withholding,
        ..w2(wages)
    }
}

pub fn single_filer() -> TaxpayerInformation {
    TaxpayerInformation {
        tax_year: 2024,
        filing_status: FilingStatus::Single,
        primary: person("Alex", 1985),
        spouse: None,
        dependents: Vec::new(),
        w2s: Vec::new(),
        f1099_ints: Vec::new(),
        f1099_divs: Vec::new(),
        f1099_gs: Vec::new(),
        f1098es: Vec::new(),
        care_providers: Vec::new(),
        estimated_payments: Vec::new(),
        extension_payment: None,
        state_residencies: Vec::new(),
        locality: None,
    }
}

pub fn married_filers(filing_status: FilingStatus) -> TaxpayerInformation {
    TaxpayerInformation {
        filing_status,
        spouse: Some(person("Sam", 1986)),
        ..single_filer()
    }
}
