use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Error;
use crate::rules::Replacement;

/// Applies `rules` to the file in order, writing the file back after each rule
/// that matched. `on_fixed` is called once per write.
///
/// Returns the number of writes. A failed write stops the remaining rules.
pub fn rewrite_file<F>(
    file_path: &Path,
    rules: &[Replacement],
    mut on_fixed: F,
) -> Result<usize, Error>
where
    F: FnMut(&Path),
{
    let mut source_code = fs::read_to_string(file_path).map_err(|source| Error::Read {
        path: file_path.to_path_buf(),
        source,
    })?;

    let mut writes = 0;

    for rule in rules {
        let new_source_code = match rule.apply(&source_code) {
            None => continue,
            Some(new_source_code) => new_source_code,
        };

        fs::write(file_path, &new_source_code).map_err(|source| Error::Write {
            path: file_path.to_path_buf(),
            source,
        })?;

        debug!(path = %file_path.display(), from = rule.from, to = rule.to, "rewrote file");

        writes += 1;
        on_fixed(file_path);
        source_code = new_source_code;
    }

    Ok(writes)
}
