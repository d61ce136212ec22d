//! Built-in reference materials with default SEAM parameters.
//!
//! Values follow the kg/mm/s unit convention of the material template
//! (densities in kg/mm^3, moduli in kPa, wave speeds in mm/s), consistent
//! with the documented steel example.
//!
//! Each entry: (name, material type, MP1..MP6 defaults)
const MATERIALS: &[(&str, &str, &[f64])] = &[
    // Structural solids
    ("steel", "ISOELASTIC", &[7.85e-6, 2.07e8, 8.0e7, 0.3, 0.01, 0.0]),
    ("aluminum", "ISOELASTIC", &[2.70e-6, 6.9e7, 2.6e7, 0.33, 0.01, 0.0]),
    ("lead", "ISOELASTIC", &[1.134e-5, 1.6e7, 5.6e6, 0.44, 0.02, 0.0]),
    ("glass", "ISOELASTIC", &[2.5e-6, 7.0e7, 2.87e7, 0.22, 0.002, 0.0]),
    ("concrete", "SOLIDWAVE", &[2.3e-6, 3.4e6, 2.1e6, 0.02, 0.0]),
    // Gases
    ("air", "GAS", &[1.21e-9, 3.43e5, 0.01]),
    ("helium", "GAS", &[1.79e-10, 1.007e6, 0.01]),
    // Liquids
    ("water", "LIQUID", &[1.0e-6, 1.48e6, 0.004]),
    ("sea water", "LIQUID", &[1.025e-6, 1.53e6, 0.004]),
    // Acoustic absorption
    ("mineral wool", "FIBER", &[6.0e-8, 1.0, 1.21e-9, 3.43e5]),
    ("glass fiber", "FIBER", &[2.0e-8, 2.0, 1.21e-9, 3.43e5]),
];

use seamio_data::MaterialRecord;

use crate::matfile::MaterialSet;

/// Find a built-in material by name (case-insensitive).
/// Returns (material type, default parameters).
pub fn find_material(name: &str) -> Option<(&'static str, &'static [f64])> {
    let lower = name.to_lowercase();
    MATERIALS
        .iter()
        .find(|&&(mat_name, _, _)| mat_name == lower)
        .map(|&(_, material_type, properties)| (material_type, properties))
}

impl MaterialSet {
    /// A set seeded from the built-in catalog, keyed by material name.
    pub fn builtin() -> MaterialSet {
        let mut set = MaterialSet::default();
        for &(name, material_type, properties) in MATERIALS {
            let mut record = MaterialRecord::new(name.to_string(), material_type.to_string());
            record.properties.extend_from_slice(properties);
            set.insert(record);
        }
        set
    }
}
