//! The SEAM material-type vocabulary and the meaning of the MP1..MP6
//! parameter slots for each type, from the material file template (rev 3.0).
//!
//! The parser never consults this table — a record's type is stored exactly
//! as written. It exists for reporting and for seeding the built-in catalog.

/// Material types defined by the SEAM template.
pub const MATERIAL_TYPES: &[&str] = &[
    "ISOELASTIC",
    "GAS",
    "LIQUID",
    "SOLIDWAVE",
    "FIBER",
    "FIBERZ",
];

/// Parameter labels for a material type, in MP1..MP6 order.
///
/// GAS and LIQUID share a column in the template. Returns `None` for a type
/// outside the vocabulary; callers render such properties unlabeled.
pub fn property_labels(material_type: &str) -> Option<&'static [&'static str]> {
    match material_type {
        "ISOELASTIC" => Some(&["RHO", "E", "G", "NU", "ETA", "DAMP_EXP"]),
        "GAS" | "LIQUID" => Some(&["RHO", "C", "ETA", "ALPHA", "DAMP_EXP", "ABS_EXP"]),
        "SOLIDWAVE" => Some(&["RHO", "C_LONG", "C_SHEAR", "ETA", "DAMP_EXP"]),
        "FIBER" => Some(&["RHO", "FIB_TYPE", "RHO_GAS", "C_GAS", "R_FLOW", "D"]),
        "FIBERZ" => Some(&["RHO", "RE_Z", "-IM_Z", "RE_B/OMEGA", "IM_B/OMEGA"]),
        _ => None,
    }
}
