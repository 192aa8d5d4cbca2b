use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::confirm_overwrite;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info as log_info;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the data file to `dest_file`, optionally as a `.zip`.
    ///
    /// Returns the path actually written, or `None` if the user declined to
    /// overwrite an existing file.
    pub fn backup(data_file: &Path, dest_file: &str, compress: bool) -> AppResult<Option<PathBuf>> {
        let dest = Path::new(dest_file);

        // 1️⃣ Check data file exists
        if !data_file.exists() {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Data file not found: {}", data_file.display()),
            )));
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Destination already there → ask
        let final_path = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };
        if final_path.exists() && !confirm_overwrite(&final_path)? {
            warning("Backup cancelled by user.");
            return Ok(None);
        }

        // 4️⃣ Copy or compress
        if compress {
            compress_into(data_file, &final_path)?;
        } else {
            fs::copy(data_file, &final_path)?;
        }

        log_info!(from = %data_file.display(), to = %final_path.display(), compress, "backup created");
        success(format!("Backup created: {}", final_path.display()));
        Ok(Some(final_path))
    }
}

/// Write `src` as the single member of a deflated zip archive at `zip_path`.
fn compress_into(src: &Path, zip_path: &Path) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let name = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "entries.json".to_string());
    zip.start_file(name, options).map_err(io::Error::other)?;

    let mut f = fs::File::open(src)?;
    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    info(format!("📦 Compressed: {}", zip_path.display()));
    Ok(())
}
