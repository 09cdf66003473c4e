//! Objective-C fake (test double) generation
//!
//! A fake conforms to the protocol and records every call to an instance
//! method: a call counter, the last argument passed for each parameter, and
//! a settable return value. Class methods only return a zero value.

mod generator;
pub mod naming;
pub mod type_class;

pub use generator::FakeGenerator;

use serde::{Deserialize, Serialize};

/// The header and implementation text of one fake class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFake {
    pub class_name: String,
    pub header: String,
    pub implementation: String,
}

impl GeneratedFake {
    pub fn header_file_name(&self) -> String {
        format!("{}.h", self.class_name)
    }

    pub fn implementation_file_name(&self) -> String {
        format!("{}.m", self.class_name)
    }
}
