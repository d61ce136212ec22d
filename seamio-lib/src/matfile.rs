//! The SEAM material-file reader.
//!
//! A material file is line-oriented text: comment lines start with `!`,
//! section-bracket lines start with `(` or `)`, and every remaining line
//! belongs to an alternating two-line record cycle — a header line
//! (`<subsystem-id> <type> [name...]`) followed by a properties line of
//! numeric parameters. Fields may be separated by whitespace or commas.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use seamio_data::MaterialRecord;

use crate::error::{Result, SeamioError};
use crate::types::property_labels;

/// Which half of the two-line record cycle the next data line belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum LineState {
    #[default]
    Header,
    Properties,
}

/// Materials parsed from one `.mat` file, keyed by subsystem id.
///
/// Rebuilt wholesale by each parse call; a later record with a duplicate id
/// replaces the earlier one outright.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialSet {
    materials: HashMap<String, MaterialRecord>,
}

impl MaterialSet {
    pub fn get(&self, subsystem_id: &str) -> Option<&MaterialRecord> {
        self.materials.get(subsystem_id)
    }

    /// Like [`get`](Self::get), but a missing id is an error.
    pub fn require(&self, subsystem_id: &str) -> Result<&MaterialRecord> {
        self.materials
            .get(subsystem_id)
            .ok_or_else(|| SeamioError::UnknownMaterial(subsystem_id.to_string()))
    }

    pub fn insert(&mut self, record: MaterialRecord) {
        self.materials.insert(record.subsystem_id.clone(), record);
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MaterialRecord> {
        self.materials.values()
    }

    /// Subsystem ids in sorted order, the order the `Display` report uses.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.materials.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

impl fmt::Display for MaterialSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for id in self.ids() {
            let record = &self.materials[id];
            writeln!(f, "Subsystem ID: {}", record.subsystem_id)?;
            writeln!(f, "Type: {}", record.material_type)?;
            write!(f, "Properties:")?;
            let labels = property_labels(&record.material_type).unwrap_or(&[]);
            for (index, value) in record.properties.iter().enumerate() {
                match labels.get(index) {
                    Some(label) => write!(f, " {label}={value}")?,
                    None => write!(f, " {value}")?,
                }
            }
            writeln!(f)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parse a SEAM material file from disk.
///
/// The only failure is an unreadable file (`SeamioError::Io`); everything in
/// the file body is handled leniently. The file handle is released before
/// returning on every path.
pub fn parse_mat_file(path: impl AsRef<Path>) -> Result<MaterialSet> {
    let raw = fs::read_to_string(path)?;
    Ok(parse_mat_str(&raw))
}

/// Parse material-file content from an in-memory string.
///
/// Infallible by design: the SEAM format is hand-edited in practice, so
/// short header lines and unparsable tokens are tolerated rather than
/// rejected. A properties token that fails to parse as a number (a trailing
/// comment word, or a `#1061`-style frequency-table reference) stops numeric
/// consumption for that line.
pub fn parse_mat_str(raw: &str) -> MaterialSet {
    let mut set = MaterialSet::default();
    let mut state = LineState::default();
    let mut current_id = String::new();

    for line in raw.lines() {
        match line.chars().next() {
            // Blank lines count as comments per the template, so they never
            // advance the header/properties cycle.
            None => continue,
            Some('!') => continue,
            // Section brackets are ignored verbatim, never paired.
            Some('(') | Some(')') => continue,
            _ => {}
        }
        if line.trim().is_empty() {
            continue;
        }

        match state {
            LineState::Header => {
                let mut tokens = fields(line);
                let id = tokens.next().unwrap_or_default().to_string();
                let material_type = tokens.next().unwrap_or_default().to_string();
                // Remaining tokens are the optional name/comment, dropped.
                current_id = id.clone();
                set.insert(MaterialRecord::new(id, material_type));
                state = LineState::Properties;
            }
            LineState::Properties => {
                if let Some(record) = set.materials.get_mut(&current_id) {
                    for token in fields(line) {
                        match token.parse::<f64>() {
                            Ok(value) => record.properties.push(value),
                            Err(_) => break,
                        }
                    }
                }
                state = LineState::Header;
            }
        }
    }

    set
}

/// Field iterator for one line: the format allows formatted (whitespace) and
/// free (comma-delimited) records, so both separators are treated uniformly.
fn fields(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_formatted_record() {
        let set = parse_mat_str("1011 ISOELASTIC steel\n7.85e-6 2.07e8 8.0e7 0.3\n");
        assert_eq!(set.len(), 1);
        let record = set.get("1011").unwrap();
        assert_eq!(record.subsystem_id, "1011");
        assert_eq!(record.material_type, "ISOELASTIC");
        assert_eq!(record.properties, vec![7.85e-6, 2.07e8, 8.0e7, 0.3]);
    }

    #[test]
    fn comma_delimited_record_matches_formatted() {
        let formatted = parse_mat_str("1011 ISOELASTIC steel\n7.85e-6 2.07e8 8.0e7 0.3\n");
        let free = parse_mat_str("1011, ISOELASTIC, steel\n 7.85e-6,2.07e8,8.0e7, 0.3\n");
        assert_eq!(free.get("1011"), formatted.get("1011"));
    }

    #[test]
    fn trailing_comment_token_is_dropped() {
        let set = parse_mat_str("1011 ISOELASTIC steel\n7.85e-6 2.07e8 8.0e7 0.3 panel_b\n");
        let record = set.get("1011").unwrap();
        assert_eq!(record.properties, vec![7.85e-6, 2.07e8, 8.0e7, 0.3]);
    }

    #[test]
    fn frequency_table_reference_halts_numeric_consumption() {
        // `#1061` links to a FREQVAL table elsewhere in the file; the
        // numeric tokenizer stops there and drops the rest of the line.
        let set = parse_mat_str("1011 ISOELASTIC steel\n7.85e-6 2.07e8 8.0e7 0.3 #1061 panel_b\n");
        let record = set.get("1011").unwrap();
        assert_eq!(record.properties, vec![7.85e-6, 2.07e8, 8.0e7, 0.3]);
    }

    #[test]
    fn later_duplicate_id_replaces_earlier_record() {
        let set = parse_mat_str(
            "2001 GAS air\n1.21e-9 3.43e5 0.01\n2001 LIQUID water\n1.0e-6 1.48e6\n",
        );
        assert_eq!(set.len(), 1);
        let record = set.get("2001").unwrap();
        assert_eq!(record.material_type, "LIQUID");
        assert_eq!(record.properties, vec![1.0e-6, 1.48e6]);
    }

    #[test]
    fn trailing_header_yields_empty_properties() {
        let set = parse_mat_str("1011 ISOELASTIC steel\n");
        let record = set.get("1011").unwrap();
        assert!(record.properties.is_empty());
    }

    #[test]
    fn skip_lines_never_advance_the_record_cycle() {
        let input = "\
!material block
((MATDATA
1011 ISOELASTIC steel

! parameters follow
)
7.85e-6 2.07e8
))
2001 GAS air
!
1.21e-9 3.43e5
";
        let set = parse_mat_str(input);
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("1011").unwrap().properties, vec![7.85e-6, 2.07e8]);
        assert_eq!(set.get("2001").unwrap().properties, vec![1.21e-9, 3.43e5]);
    }

    #[test]
    fn leading_skip_lines_leave_parser_in_header_state() {
        let set = parse_mat_str("!comment\n\n(MATDATA\n1011 ISOELASTIC\n7.85e-6\n");
        assert_eq!(set.get("1011").unwrap().properties, vec![7.85e-6]);
    }

    #[test]
    fn blank_line_with_spaces_is_a_comment() {
        let set = parse_mat_str("1011 ISOELASTIC\n   \n7.85e-6 2.07e8\n");
        assert_eq!(set.get("1011").unwrap().properties, vec![7.85e-6, 2.07e8]);
    }

    #[test]
    fn single_token_header_gets_empty_type() {
        let set = parse_mat_str("1011\n7.85e-6\n");
        let record = set.get("1011").unwrap();
        assert_eq!(record.material_type, "");
        assert_eq!(record.properties, vec![7.85e-6]);
    }

    #[test]
    fn non_numeric_properties_line_leaves_record_empty() {
        let set = parse_mat_str("1011 ISOELASTIC\nsee table four\n");
        assert!(set.get("1011").unwrap().properties.is_empty());
    }

    #[test]
    fn extra_numeric_tokens_beyond_six_are_kept() {
        let set = parse_mat_str("3001 SOLIDWAVE\n1 2 3 4 5 6 7 8\n");
        assert_eq!(set.get("3001").unwrap().properties.len(), 8);
    }

    #[test]
    fn require_reports_unknown_material() {
        let set = parse_mat_str("1011 ISOELASTIC\n7.85e-6\n");
        assert!(set.require("1011").is_ok());
        let err = set.require("9999").unwrap_err();
        assert!(matches!(err, SeamioError::UnknownMaterial(_)));
    }

    #[test]
    fn display_labels_known_types_and_sorts_by_id() {
        let set = parse_mat_str(
            "2001 GAS air\n1.21e-9 3.43e5\n1011 ISOELASTIC steel\n7.85e-6 2.07e8\n",
        );
        let report = set.to_string();
        assert!(report.contains("RHO=0.00000785"));
        assert!(report.contains("E=207000000"));
        assert!(report.contains("C=343000"));
        let first = report.find("Subsystem ID: 1011").unwrap();
        let second = report.find("Subsystem ID: 2001").unwrap();
        assert!(first < second);
    }
}
