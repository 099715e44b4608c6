use chrono::NaiveDate;
use rust_decimal::Decimal;
use tax_core::{
    CareProvider, Dependent, FilingStatus, Person, PersonRole, StateCode, TaxpayerInformation, W2,
};

pub fn person(
    first_name: &str,
    birth_year: i32,
) -> Person {
    Person {
        first_name: first_name.to_string(),
        last_name: "Rivera".to_string(),
        ssn: "400-00-1234".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(birth_year, 7, 4).unwrap(),
        is_blind: false,
    }
}

pub fn child(
    first_name: &str,
    birth_year: i32,
) -> Dependent {
    Dependent {
        person: person(first_name, birth_year),
        relationship: "Daughter".to_string(),
        months_lived_with_taxpayer: 12,
        is_full_time_student: false,
        is_disabled: false,
    }
}

pub fn w2(
    owner: PersonRole,
    wages: Decimal,
    state: Option<StateCode>,
) -> W2 {
    W2 {
        employer_name: "Northwind".to_string(),
        employer_ein: "31-1234567".to_string(),
        owner,
        wages,
        federal_withholding: Decimal::ZERO,
        social_security_wages: wages,
        social_security_withholding: Decimal::ZERO,
        medicare_wages: wages,
        medicare_withholding: Decimal::ZERO,
        state,
        state_wages: state.map(|_| wages),
        state_withholding: None,
    }
}

pub fn provider(amount: Decimal) -> CareProvider {
    CareProvider {
        name: "Sunrise Daycare".to_string(),
        tin: "55-5555555".to_string(),
        amount_paid: amount,
    }
}

pub fn taxpayer(filing_status: FilingStatus) -> TaxpayerInformation {
    TaxpayerInformation {
        tax_year: 2024,
        filing_status,
        primary: person("Ana", 1984),
        spouse: filing_status
            .is_joint()
            .then(|| person("Luis", 1983)),
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
