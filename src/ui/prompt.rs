//! Yes/no questions on the terminal.

use crate::errors::AppResult;
use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Show `question` as a warning and read one answer line from stdin.
/// Only `y`/`yes` (any case) confirm.
pub fn confirm(question: &str, label: &str) -> AppResult<bool> {
    warning(question);
    print!("{label} [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

/// Ask before replacing an existing file.
pub fn confirm_overwrite(path: &Path) -> AppResult<bool> {
    confirm(
        &format!("The file '{}' already exists.", path.display()),
        "Overwrite?",
    )
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
