//! Return assembly.
//!
//! The federal return is built and fully collected before any state
//! constructor runs, since every state reads federal lines. Each
//! jurisdiction is collected depth-first from its top-level form: a form
//! is visited once per jurisdiction however many parents list it, and is
//! included exactly when its own `is_needed` says so. A needed form under
//! an unneeded parent is still included.
//!
//! A state that cannot be built is recorded in
//! [`AssembledReturn::failures`] and the rest of the return is still
//! produced; only a federal failure fails the whole assembly.

use std::collections::HashSet;

use thiserror::Error;
use tracing::{debug, info, warn};

use tax_core::{
    BracketTables, Diagnostic, FieldValue, Form, FormError, FormTag, Jurisdiction, StateCode,
    TaxpayerInformation,
};

use crate::federal::F1040;
use crate::states::{Registration, registration};

/// Errors raised while assembling a return.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    #[error("federal return could not be built: {0}")]
    Federal(#[from] FormError),

    #[error("no return is implemented for state {0}")]
    UnsupportedJurisdiction(StateCode),

    #[error("{state} return could not be built: {source}")]
    Jurisdiction {
        state: StateCode,
        #[source]
        source: FormError,
    },
}

/// One form as it goes to the PDF filler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledForm {
    pub jurisdiction: Jurisdiction,
    pub tag: FormTag,
    pub sequence_index: u32,
    pub fields: Vec<FieldValue>,
}

/// The ordered forms of a return, plus what went wrong along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssembledReturn {
    /// Federal forms first, then each state in the order its code was
    /// first seen; by sequence index within a jurisdiction.
    pub forms: Vec<AssembledForm>,
    /// One entry per state that produced no forms because of an error.
    pub failures: Vec<AssemblyError>,
    pub diagnostics: Vec<Diagnostic>,
}

impl AssembledReturn {
    pub fn find(
        &self,
        tag: FormTag,
    ) -> Option<&AssembledForm> {
        self.forms.iter().find(|form| form.tag == tag)
    }

    pub fn contains(
        &self,
        tag: FormTag,
    ) -> bool {
        self.find(tag).is_some()
    }

    pub fn forms_for(
        &self,
        jurisdiction: Jurisdiction,
    ) -> impl Iterator<Item = &AssembledForm> {
        self.forms
            .iter()
            .filter(move |form| form.jurisdiction == jurisdiction)
    }

    pub fn tags(&self) -> Vec<FormTag> {
        self.forms.iter().map(|form| form.tag).collect()
    }
}

/// Depth-first collection of the needed forms of one jurisdiction.
///
/// Field values are materialized as each form is visited, so nothing
/// collected borrows the graph.
#[derive(Debug, Default)]
pub struct FormCollector {
    seen: HashSet<FormTag>,
    forms: Vec<AssembledForm>,
    diagnostics: Vec<Diagnostic>,
}

impl FormCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collect(
        &mut self,
        form: &dyn Form,
    ) {
        let tag = form.tag();
        if !self.seen.insert(tag) {
            debug!(form = %tag, "already collected");
            return;
        }
        if form.is_needed() {
            debug!(form = %tag, "collecting form");
            self.forms.push(AssembledForm {
                jurisdiction: tag.jurisdiction(),
                tag,
                sequence_index: form.sequence_index(),
                fields: form.fields(),
            });
            self.diagnostics.extend(form.diagnostics());
        } else {
            debug!(form = %tag, "not needed");
        }

        for attachment in form.attachments() {
            self.collect(attachment.as_ref());
        }
    }

    /// Collected forms in filing order, and the diagnostics they raised.
    pub fn finish(mut self) -> (Vec<AssembledForm>, Vec<Diagnostic>) {
        self.forms.sort_by_key(|form| form.sequence_index);
        (self.forms, self.diagnostics)
    }
}

/// Builds every form of the return.
///
/// # Errors
///
/// Returns [`AssemblyError::Federal`] if Form 1040 cannot be built. State
/// errors are reported in [`AssembledReturn::failures`] instead.
pub fn assemble(
    info: &TaxpayerInformation,
    tables: &BracketTables,
) -> Result<AssembledReturn, AssemblyError> {
    info!(
        tax_year = info.tax_year,
        filing_status = info.filing_status.label(),
        "assembling return"
    );

    let f1040 = F1040::new(info, tables)?;
    let mut collector = FormCollector::new();
    collector.collect(&f1040);
    let (mut forms, mut diagnostics) = collector.finish();
    info!(jurisdiction = %Jurisdiction::Federal, forms = forms.len(), "jurisdiction assembled");

    let mut failures = Vec::new();
    for state in info.state_jurisdictions() {
        match assemble_state(&f1040, state) {
            Ok(Some((state_forms, state_diagnostics))) => {
                info!(jurisdiction = %state, forms = state_forms.len(), "jurisdiction assembled");
                forms.extend(state_forms);
                diagnostics.extend(state_diagnostics);
            }
            Ok(None) => info!(jurisdiction = %state, "no return required"),
            Err(error) => {
                warn!(%error, "jurisdiction skipped");
                failures.push(error);
            }
        }
    }

    for diagnostic in &diagnostics {
        warn!(%diagnostic, "line computed without a prerequisite");
    }

    Ok(AssembledReturn {
        forms,
        failures,
        diagnostics,
    })
}

/// `Ok(None)` for a state with no return to file.
fn assemble_state(
    f1040: &F1040<'_>,
    state: StateCode,
) -> Result<Option<(Vec<AssembledForm>, Vec<Diagnostic>)>, AssemblyError> {
    let registration =
        registration(state).ok_or(AssemblyError::UnsupportedJurisdiction(state))?;
    let Registration::Form(create) = registration else {
        return Ok(None);
    };

    let form = create(f1040).map_err(|source| AssemblyError::Jurisdiction { state, source })?;
    let mut collector = FormCollector::new();
    collector.collect(form.as_ref());
    Ok(Some(collector.finish()))
}
