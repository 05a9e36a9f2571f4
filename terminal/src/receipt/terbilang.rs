//! Indonesian amount-in-words ("terbilang").

const UNITS: [&str; 12] = [
    "", "satu", "dua", "tiga", "empat", "lima", "enam", "tujuh", "delapan", "sembilan", "sepuluh",
    "sebelas",
];

fn spell(n: u64) -> String {
    match n {
        0..=11 => UNITS[n as usize].to_string(),
        12..=19 => format!("{} belas", spell(n - 10)),
        20..=99 => format!("{} puluh {}", spell(n / 10), spell(n % 10)),
        100..=199 => format!("seratus {}", spell(n - 100)),
        200..=999 => format!("{} ratus {}", spell(n / 100), spell(n % 100)),
        1_000..=1_999 => format!("seribu {}", spell(n - 1_000)),
        2_000..=999_999 => format!("{} ribu {}", spell(n / 1_000), spell(n % 1_000)),
        1_000_000..=999_999_999 => format!("{} juta {}", spell(n / 1_000_000), spell(n % 1_000_000)),
        1_000_000_000..=999_999_999_999 => format!(
            "{} miliar {}",
            spell(n / 1_000_000_000),
            spell(n % 1_000_000_000)
        ),
        _ => format!(
            "{} triliun {}",
            spell(n / 1_000_000_000_000),
            spell(n % 1_000_000_000_000)
        ),
    }
}

/// Spell an integer in Indonesian, e.g. `1500` → `"seribu lima ratus"`.
pub fn to_words(amount: i64) -> String {
    if amount == 0 {
        return "nol".to_string();
    }
    let words = spell(amount.unsigned_abs())
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if amount < 0 {
        format!("minus {}", words)
    } else {
        words
    }
}

/// Amount in words with the currency, e.g. `"seratus ribu rupiah"`.
pub fn rupiah(amount: i64) -> String {
    format!("{} rupiah", to_words(amount))
}
