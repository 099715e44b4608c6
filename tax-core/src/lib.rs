//! Core of the return computation graph: the taxpayer data model, the shared
//! arithmetic, and the contract every form implements.

pub mod calculations;
pub mod form;
pub mod models;

pub use form::{Diagnostic, Form, FormError, FormTag};
pub use models::*;
