//! Post-copy renaming of reserved template filenames.
//! Some files cannot ship in the template under their real name because
//! tooling would act on them prematurely (npm strips `.gitignore` from
//! published packages), so the template carries them under a placeholder
//! name and they are renamed once at the target root.

use log::warn;
use std::fs;
use std::path::Path;

use crate::constants::RESERVED_FILES;

/// Renames reserved files at the target root to their real names.
///
/// Missing files are skipped. A failed rename is logged as a warning and
/// generation continues with the file under its original name.
pub fn normalize_reserved_files(target_root: &Path) {
    for (reserved, real) in RESERVED_FILES {
        let source = target_root.join(reserved);
        if !source.exists() {
            continue;
        }
        match fs::rename(&source, target_root.join(real)) {
            Ok(()) => println!("Renamed {} to {}", reserved, real),
            Err(e) => warn!("Could not rename {}: {}", reserved, e),
        }
    }
}
