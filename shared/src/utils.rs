//! # Shared Utility Functions
//!
//! Formatting helpers used by the terminal's screens and receipt renderer.
//!
//! - [`format_rupiah`] - Indonesian thousands grouping (`1.250.000`)
//! - [`digits_only`] - Strip everything but ASCII digits from user input
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{digits_only, format_rupiah};
//!
//! assert_eq!(format_rupiah(1_250_000), "1.250.000");
//! assert_eq!(digits_only("Rp 50.000"), "50000");
//! ```

/// Format an amount with `.` as the thousands separator and no decimals.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_rupiah;
///
/// assert_eq!(format_rupiah(0), "0");
/// assert_eq!(format_rupiah(50_000), "50.000");
/// assert_eq!(format_rupiah(-1_500), "-1.500");
/// ```
pub fn format_rupiah(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Keep only ASCII digits.
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}
