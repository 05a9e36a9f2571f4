//! # Print Surface
//!
//! Receipts are written to an owner-only HTML file under a private
//! `mpos-receipts` directory in the OS temp directory and opened with the
//! system browser, which shows the print dialog on load.

use std::path::{Path, PathBuf};

use super::private_file;
use crate::core::error::{AppError, Result};
use crate::receipt::ReceiptLayout;

/// `mpos-receipt-<receipt>-<layout>.html`, keeping only characters that are
/// safe in a file name.
pub fn receipt_file_name(receipt_number: &str, layout: ReceiptLayout) -> String {
    let mut slug: String = receipt_number
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if slug.trim_matches('_').is_empty() {
        slug = "baru".to_string();
    }
    format!("mpos-receipt-{}-{}.html", slug, layout.as_str())
}

const RECEIPT_DIR: &str = "mpos-receipts";

/// Private receipt directory inside the OS temp directory, created on demand.
pub fn receipts_dir() -> Result<PathBuf> {
    let dir = std::env::temp_dir().join(RECEIPT_DIR);
    private_file::ensure_dir(&dir)?;
    Ok(dir)
}

/// Write the document into `dir`, replacing an earlier print of the same receipt.
pub fn write_receipt(
    dir: &Path,
    receipt_number: &str,
    layout: ReceiptLayout,
    html: &str,
) -> Result<PathBuf> {
    let path = dir.join(receipt_file_name(receipt_number, layout));
    private_file::write(&path, html.as_bytes())?;
    Ok(path)
}

/// Write the receipt to the temp directory and open it for printing.
#[tracing::instrument(skip(html), fields(layout = layout.as_str()))]
pub fn print_receipt(receipt_number: &str, layout: ReceiptLayout, html: &str) -> Result<PathBuf> {
    let path = write_receipt(&receipts_dir()?, receipt_number, layout, html)?;

    open::that(&path).map_err(|e| {
        tracing::error!(error = %e, path = %path.display(), "Failed to open receipt");
        AppError::Storage(format!("Gagal membuka struk: {}", e))
    })?;

    tracing::info!(path = %path.display(), "Receipt opened for printing");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_is_sanitized() {
        assert_eq!(
            receipt_file_name("BKT/2026 01", ReceiptLayout::Thermal),
            "mpos-receipt-BKT_2026_01-thermal.html"
        );
        assert_eq!(
            receipt_file_name("-", ReceiptLayout::Formal),
            "mpos-receipt---formal.html"
        );
        assert_eq!(
            receipt_file_name("", ReceiptLayout::Formal),
            "mpos-receipt-baru-formal.html"
        );
    }

    #[test]
    fn test_write_receipt_overwrites() {
        let dir = tempfile::tempdir().unwrap();

        let first = write_receipt(dir.path(), "BKT-1", ReceiptLayout::Thermal, "<p>a</p>").unwrap();
        let second = write_receipt(dir.path(), "BKT-1", ReceiptLayout::Thermal, "<p>b</p>").unwrap();

        assert_eq!(first, second);
        assert_eq!(std::fs::read_to_string(&second).unwrap(), "<p>b</p>");
    }

    #[cfg(unix)]
    #[test]
    fn test_write_receipt_replaces_planted_symlink() {
        let dir = tempfile::tempdir().unwrap();
        let victim = dir.path().join("victim");
        std::fs::write(&victim, "keep").unwrap();
        let name = receipt_file_name("BKT-9", ReceiptLayout::Formal);
        std::os::unix::fs::symlink(&victim, dir.path().join(&name)).unwrap();

        let path = write_receipt(dir.path(), "BKT-9", ReceiptLayout::Formal, "<p>x</p>").unwrap();

        assert_eq!(std::fs::read_to_string(&victim).unwrap(), "keep");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>x</p>");
    }

    #[test]
    fn test_write_receipt_missing_dir_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = write_receipt(&missing, "BKT-1", ReceiptLayout::Formal, "").unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
    }
}
