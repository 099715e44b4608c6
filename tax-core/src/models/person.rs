use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Whose document an income record is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PersonRole {
    #[default]
    Primary,
    Spouse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub ssn: String,
    pub date_of_birth: NaiveDate,
    #[serde(default)]
    pub is_blind: bool,
}

impl Person {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Age attained on December 31 of `tax_year`.
    pub fn age_at_end_of(
        &self,
        tax_year: i32,
    ) -> i32 {
        tax_year - self.date_of_birth.year()
    }

    /// A taxpayer is treated as 65 on the day before their 65th birthday,
    /// so anyone born before January 2 of `tax_year - 64` qualifies.
    pub fn is_65_or_older(
        &self,
        tax_year: i32,
    ) -> bool {
        NaiveDate::from_ymd_opt(tax_year - 64, 1, 2)
            .is_some_and(|cutoff| self.date_of_birth < cutoff)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependent {
    pub person: Person,
    pub relationship: String,
    pub months_lived_with_taxpayer: u8,
    #[serde(default)]
    pub is_full_time_student: bool,
    #[serde(default)]
    pub is_disabled: bool,
}

impl Dependent {
    fn lived_with_taxpayer_over_half_year(&self) -> bool {
        self.months_lived_with_taxpayer > 6
    }

    pub fn qualifies_for_child_tax_credit(
        &self,
        tax_year: i32,
    ) -> bool {
        self.lived_with_taxpayer_over_half_year() && self.person.age_at_end_of(tax_year) < 17
    }

    pub fn qualifies_for_eic(
        &self,
        tax_year: i32,
    ) -> bool {
        let age = self.person.age_at_end_of(tax_year);
        self.lived_with_taxpayer_over_half_year()
            && (age < 19 || (self.is_full_time_student && age < 24) || self.is_disabled)
    }

    pub fn qualifies_for_dependent_care(
        &self,
        tax_year: i32,
    ) -> bool {
        self.person.age_at_end_of(tax_year) < 13 || self.is_disabled
    }
}
