//! Concrete forms of a U.S. individual return and the orchestrator that
//! assembles them.
//!
//! [`assemble`] builds Form 1040 from a [`TaxpayerInformation`], collects
//! every needed federal form, then builds the return of each state the
//! taxpayer lived or worked in.
//!
//! [`TaxpayerInformation`]: tax_core::TaxpayerInformation

pub mod assembly;
pub mod federal;
mod layout;
pub mod params;
pub mod states;

#[cfg(test)]
mod test_support;

pub use assembly::{AssembledForm, AssembledReturn, AssemblyError, FormCollector, assemble};
pub use federal::F1040;
pub use params::builtin_bracket_tables;
