use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use std::io::{self, Write};
use std::path::Path;

/// Check whether a file may be created or overwritten.
///
/// - File does not exist → Ok(true)
/// - File exists and `force` is set → Ok(true)
/// - File exists without `force` → ask the user; declining returns
///   Ok(false), which callers treat as a cancelled export, not an error.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<bool> {
    if !path.exists() || force {
        return Ok(true);
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(true)
    } else {
        Ok(false)
    }
}
