//! The contract every computation unit satisfies.
//!
//! A [`Form`] is one node of the return graph. It knows its own identity and
//! filing position, whether it belongs in the return, and how to compute the
//! positional field values a PDF filler expects. Forms that read other forms
//! hold shared references to them and call their accessors directly; nothing
//! in the graph is ever mutated after construction.
//!
//! Subordinate forms are exposed through [`Form::attachments`] as borrowed
//! views of their parent, so a parent is always fully built before any
//! attachment that reads it exists.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{FieldValue, FilingStatus, Jurisdiction, StateCode};

/// Stable identity of a form type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormTag {
    F1040,
    Schedule1,
    Schedule2,
    Schedule3,
    ScheduleB,
    ScheduleEic,
    Schedule8812,
    F2441,
    F8959,
    F8960,
    Il1040,
    IlScheduleIlEEic,
    WvIt140,
    Md502,
    MdLocalTax,
}

impl FormTag {
    pub const ALL: [FormTag; 15] = [
        Self::F1040,
        Self::Schedule1,
        Self::Schedule2,
        Self::Schedule3,
        Self::ScheduleB,
        Self::ScheduleEic,
        Self::Schedule8812,
        Self::F2441,
        Self::F8959,
        Self::F8960,
        Self::Il1040,
        Self::IlScheduleIlEEic,
        Self::WvIt140,
        Self::Md502,
        Self::MdLocalTax,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::F1040 => "f1040",
            Self::Schedule1 => "f1040s1",
            Self::Schedule2 => "f1040s2",
            Self::Schedule3 => "f1040s3",
            Self::ScheduleB => "f1040sb",
            Self::ScheduleEic => "f1040sei",
            Self::Schedule8812 => "f1040s8",
            Self::F2441 => "f2441",
            Self::F8959 => "f8959",
            Self::F8960 => "f8960",
            Self::Il1040 => "il-1040",
            Self::IlScheduleIlEEic => "il-1040-schedule-il-e-eic",
            Self::WvIt140 => "wv-it140",
            Self::Md502 => "md-502",
            Self::MdLocalTax => "md-502-local",
        }
    }

    pub fn jurisdiction(&self) -> Jurisdiction {
        match self {
            Self::F1040
            | Self::Schedule1
            | Self::Schedule2
            | Self::Schedule3
            | Self::ScheduleB
            | Self::ScheduleEic
            | Self::Schedule8812
            | Self::F2441
            | Self::F8959
            | Self::F8960 => Jurisdiction::Federal,
            Self::Il1040 | Self::IlScheduleIlEEic => Jurisdiction::State(StateCode::IL),
            Self::WvIt140 => Jurisdiction::State(StateCode::WV),
            Self::Md502 | Self::MdLocalTax => Jurisdiction::State(StateCode::MD),
        }
    }
}

impl std::fmt::Display for FormTag {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A line that was computed although one of its prerequisites was missing.
///
/// Diagnostics never change a computed value; they exist so tests and
/// tooling can see where a blank or zero came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub form: FormTag,
    pub line: &'static str,
    pub message: String,
}

impl Diagnostic {
    pub fn new(
        form: FormTag,
        line: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            form,
            line,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{} line {}: {}", self.form, self.line, self.message)
    }
}

/// Errors raised while constructing a form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("no {jurisdiction} parameters for tax year {tax_year}")]
    UnsupportedTaxYear {
        jurisdiction: Jurisdiction,
        tax_year: i32,
    },

    #[error("no {jurisdiction} bracket table for tax year {tax_year} and filing status {filing_status}")]
    MissingBracketTable {
        jurisdiction: Jurisdiction,
        tax_year: i32,
        filing_status: FilingStatus,
    },
}

/// One computation unit of a return.
///
/// Every method must be a pure function of the taxpayer information and of
/// the forms this one references: calling it twice gives the same answer.
pub trait Form {
    fn tag(&self) -> FormTag;

    /// Filing position within this form's jurisdiction.
    fn sequence_index(&self) -> u32;

    /// Whether the form belongs in the assembled return.
    ///
    /// Safe to call before [`Form::fields`].
    fn is_needed(&self) -> bool {
        true
    }

    /// Field values in the order of the form's published layout.
    fn fields(&self) -> Vec<FieldValue>;

    /// Directly subordinate forms, whether needed or not.
    fn attachments(&self) -> Vec<Box<dyn Form + '_>> {
        Vec::new()
    }

    /// Lines computed from a missing prerequisite.
    fn diagnostics(&self) -> Vec<Diagnostic> {
        Vec::new()
    }
}
