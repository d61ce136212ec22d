use std::env;
use std::path::{Path, PathBuf};

use seamio::{InputRole, MaterialSet};

fn main() {
    let manifest: PathBuf = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new("seamInputFiles").join("seam.in"));
    let input_dir = manifest
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."))
        .to_path_buf();

    println!("Resolving job manifest {:?}...", manifest);

    let resolved = match seamio::resolve_manifest(&manifest, &input_dir) {
        Ok(resolved) => resolved,
        Err(error) => {
            eprintln!("Unable to open the input file {:?}: {error}", manifest);
            std::process::exit(1);
        }
    };

    for diagnostic in &resolved.diagnostics {
        eprintln!("Error: {diagnostic}");
    }

    for role in InputRole::ALL {
        match resolved.get(role) {
            Some(path) => println!("{} file path: {}", role.label(), path.display()),
            None => println!("{} file path: (none)", role.label()),
        }
    }

    let materials = match &resolved.material {
        Some(path) => match seamio::parse_mat_file(path) {
            Ok(set) => set,
            Err(error) => {
                eprintln!("Failed to open file {}: {error}", path.display());
                MaterialSet::default()
            }
        },
        None => {
            println!("No material file resolved; using the built-in catalog");
            MaterialSet::builtin()
        }
    };

    println!("Parsed {} material record(s)\n", materials.len());
    print!("{materials}");
}
