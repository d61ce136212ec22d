#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// One subsystem's material definition from a SEAM material file.
///
/// A record is two input lines: a header line carrying the subsystem id and
/// material type, and a properties line carrying the numeric parameters
/// MP1..MP6. The meaning of each parameter depends on `material_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    /// First token of the header line; unique key within one file.
    pub subsystem_id: String,
    /// Second token of the header line, stored as given (not validated
    /// against the SEAM type vocabulary).
    pub material_type: String,
    /// Numeric parameters in file order. The template defines up to six,
    /// but the grammar does not cap the count.
    pub properties: Vec<f64>,
}

impl MaterialRecord {
    pub fn new(subsystem_id: String, material_type: String) -> Self {
        MaterialRecord {
            subsystem_id,
            material_type,
            properties: Vec::new(),
        }
    }
}
