use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    CareProvider, Dependent, EstimatedTaxPayment, F1098E, F1099Div, F1099G, F1099Int,
    FilingStatus, Locality, Person, PersonRole, StateCode, W2,
};

/// Validated description of one taxpayer's year.
///
/// Built by upstream validation and only ever read by the form graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxpayerInformation {
    pub tax_year: i32,
    pub filing_status: FilingStatus,
    pub primary: Person,
    pub spouse: Option<Person>,
    #[serde(default)]
    pub dependents: Vec<Dependent>,

    #[serde(default)]
    pub w2s: Vec<W2>,
    #[serde(default)]
    pub f1099_ints: Vec<F1099Int>,
    #[serde(default)]
    pub f1099_divs: Vec<F1099Div>,
    #[serde(default)]
    pub f1099_gs: Vec<F1099G>,
    #[serde(default)]
    pub f1098es: Vec<F1098E>,
    #[serde(default)]
    pub care_providers: Vec<CareProvider>,
    #[serde(default)]
    pub estimated_payments: Vec<EstimatedTaxPayment>,
    pub extension_payment: Option<Decimal>,

    /// States the taxpayer lived in during the year.
    #[serde(default)]
    pub state_residencies: Vec<StateCode>,
    pub locality: Option<Locality>,
}

impl TaxpayerInformation {
    /// Spouse only when the return is joint.
    ///
    /// A spouse on a separate return does not contribute to this return's
    /// lines.
    pub fn joint_spouse(&self) -> Option<&Person> {
        if self.filing_status.is_joint() {
            self.spouse.as_ref()
        } else {
            None
        }
    }

    /// Whether a document owned by `owner` counts toward this return.
    pub fn counts_toward_return(
        &self,
        owner: PersonRole,
    ) -> bool {
        owner == PersonRole::Primary || self.joint_spouse().is_some()
    }

    pub fn w2s_for(
        &self,
        owner: PersonRole,
    ) -> impl Iterator<Item = &W2> {
        self.w2s.iter().filter(move |w2| w2.owner == owner)
    }

    /// Every state that may require a return: residencies first, then the
    /// states reported on W-2s that count toward the return, without
    /// repeats and in first-seen order.
    pub fn state_jurisdictions(&self) -> Vec<StateCode> {
        let mut states: Vec<StateCode> = Vec::new();
        let work_states = self
            .w2s
            .iter()
            .filter(|w2| self.counts_toward_return(w2.owner))
            .filter_map(|w2| w2.state);

        for state in self.state_residencies.iter().copied().chain(work_states) {
            if !states.contains(&state) {
                states.push(state);
            }
        }
        states
    }

    /// Number of personal exemptions claimed: the filer, a joint spouse,
    /// and every dependent.
    pub fn exemption_count(&self) -> usize {
        1 + usize::from(self.joint_spouse().is_some()) + self.dependents.len()
    }
}
