//! # Donation Entry Workflow
//!
//! The transaction form as a finite-state machine:
//!
//! ```text
//! Idle ──start──▶ ProfileEntry ──confirm_profile──▶ EventSelection
//!                      ▲                                 │
//!                      └────────────back─────────────────┤ confirm_event
//!                                                        ▼
//!              Done ◀──on_submitted── PaymentEntry ◀─────┘
//!                │                        ▲
//!                └──────new_entry─────────┘
//! ```
//!
//! Existing and new donors feed the same [`EntryForm`]; only the way the
//! profile fields get filled differs. Submission builds a
//! [`CreateTransactionRequest`] and never touches the network itself.

use std::sync::Arc;

use chrono::NaiveDate;
use shared::{digits_only, CategoryType, CreateTransactionRequest, DonorMatch, PaymentMethod};

use crate::core::error::{AppError, Result};
use crate::services::api::ProofImage;

/// Quick-amount presets, in rupiah
pub const QUICK_AMOUNTS: [u64; 5] = [50_000, 100_000, 200_000, 500_000, 1_000_000];

/// Longest amount the field accepts
pub const MAX_AMOUNT_DIGITS: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPhase {
    Idle,
    ProfileEntry,
    EventSelection,
    PaymentEntry,
    Done,
}

impl EntryPhase {
    pub fn step(&self) -> Option<usize> {
        match self {
            EntryPhase::ProfileEntry => Some(1),
            EntryPhase::EventSelection => Some(2),
            EntryPhase::PaymentEntry => Some(3),
            EntryPhase::Idle | EntryPhase::Done => None,
        }
    }
}

/// How the donor profile is being filled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DonorSource {
    /// Looked up with the donor search
    Existing,
    /// Typed in by staff
    New,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntryForm {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub date: NaiveDate,
    pub description: String,
    pub category_type: CategoryType,
    pub category_id: Option<String>,
    pub amount: String,
    pub payment_method: PaymentMethod,
    pub event_id: Option<String>,
    pub image: Option<Arc<ProofImage>>,
}

impl Default for EntryForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone_number: String::new(),
            email: String::new(),
            address: String::new(),
            date: chrono::Local::now().date_naive(),
            description: String::new(),
            category_type: CategoryType::default(),
            category_id: None,
            amount: String::new(),
            payment_method: PaymentMethod::default(),
            event_id: None,
            image: None,
        }
    }
}

impl EntryForm {
    /// Amount as a number; zero when empty.
    pub fn amount_value(&self) -> u64 {
        self.amount.parse().unwrap_or(0)
    }

    fn clear_transient(&mut self) {
        self.description.clear();
        self.amount.clear();
        self.image = None;
    }
}

/// Existing-donor lookup state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DonorSearch {
    pub query: String,
    pub results: Vec<DonorMatch>,
    pub loading: bool,
    pub error: Option<String>,
    /// A search has completed for the current query
    pub searched: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntryWorkflow {
    phase: EntryPhase,
    source: Option<DonorSource>,
    pub form: EntryForm,
    pub search: DonorSearch,
    /// Inline validation or submission error
    pub error: Option<String>,
}

impl Default for EntryWorkflow {
    fn default() -> Self {
        Self {
            phase: EntryPhase::Idle,
            source: None,
            form: EntryForm::default(),
            search: DonorSearch::default(),
            error: None,
        }
    }
}

impl EntryWorkflow {
    pub fn phase(&self) -> EntryPhase {
        self.phase
    }

    pub fn source(&self) -> Option<DonorSource> {
        self.source
    }

    fn require(&self, allowed: &[EntryPhase], action: &str) -> Result<()> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(AppError::State(format!(
                "{} is not allowed in {:?}",
                action, self.phase
            )))
        }
    }

    fn invalid(&mut self, message: &str) -> AppError {
        self.error = Some(message.to_string());
        AppError::Validation(message.to_string())
    }

    /// Begin (or switch) donor entry.
    pub fn start(&mut self, source: DonorSource) -> Result<()> {
        self.require(&[EntryPhase::Idle, EntryPhase::ProfileEntry], "start")?;
        self.phase = EntryPhase::ProfileEntry;
        self.source = Some(source);
        self.search = DonorSearch::default();
        self.error = None;
        Ok(())
    }

    /// Prefill the profile from a search hit. Missing fields keep what was typed.
    pub fn select_donor(&mut self, donor: &DonorMatch) -> Result<()> {
        self.require(&[EntryPhase::ProfileEntry], "select_donor")?;

        fn take(value: &Option<String>, current: &mut String) {
            if let Some(v) = value.as_ref().filter(|v| !v.trim().is_empty()) {
                *current = v.clone();
            }
        }
        take(&donor.name, &mut self.form.name);
        take(&donor.phone, &mut self.form.phone_number);
        take(&donor.email, &mut self.form.email);
        take(&donor.address, &mut self.form.address);

        self.search = DonorSearch::default();
        self.error = None;
        Ok(())
    }

    pub fn confirm_profile(&mut self) -> Result<()> {
        self.require(&[EntryPhase::ProfileEntry], "confirm_profile")?;
        if self.form.name.trim().is_empty() || self.form.phone_number.trim().is_empty() {
            return Err(self.invalid("Nama dan nomor HP wajib diisi"));
        }
        self.phase = EntryPhase::EventSelection;
        self.error = None;
        Ok(())
    }

    pub fn confirm_event(&mut self) -> Result<()> {
        self.require(&[EntryPhase::EventSelection], "confirm_event")?;
        if self.form.event_id.as_deref().map_or(true, str::is_empty) {
            return Err(self.invalid("Pilih event terlebih dahulu"));
        }
        self.phase = EntryPhase::PaymentEntry;
        self.error = None;
        Ok(())
    }

    /// Step back one phase. Form data is kept.
    pub fn back(&mut self) {
        self.phase = match self.phase {
            EntryPhase::PaymentEntry => EntryPhase::EventSelection,
            EntryPhase::EventSelection => EntryPhase::ProfileEntry,
            EntryPhase::ProfileEntry => {
                self.source = None;
                EntryPhase::Idle
            }
            other => other,
        };
        self.error = None;
    }

    /// Validate the form and build the request.
    pub fn submit(&mut self) -> Result<CreateTransactionRequest> {
        self.require(&[EntryPhase::PaymentEntry], "submit")?;
        let form = &self.form;

        if form.name.trim().is_empty() || form.phone_number.trim().is_empty() {
            return Err(self.invalid("Nama dan nomor HP wajib diisi"));
        }
        if form.amount.len() > MAX_AMOUNT_DIGITS {
            return Err(self.invalid("Nominal terlalu besar"));
        }
        if form.amount_value() == 0 {
            return Err(self.invalid("Nominal wajib diisi"));
        }
        let Some(event_id) = form.event_id.clone().filter(|e| !e.is_empty()) else {
            return Err(self.invalid("Pilih event terlebih dahulu"));
        };

        self.error = None;
        Ok(CreateTransactionRequest {
            name: form.name.clone(),
            phone_number: form.phone_number.clone(),
            email: form.email.clone(),
            address: form.address.clone(),
            date: form.date.format("%Y-%m-%d").to_string(),
            description: form.description.clone(),
            category_type: form.category_type,
            category_id: form.category_id.clone(),
            amount: form.amount.clone(),
            payment_method: form.payment_method,
            event_id,
        })
    }

    /// Submission accepted: clear transient fields and show the receipt.
    pub fn on_submitted(&mut self) {
        self.form.clear_transient();
        self.error = None;
        self.phase = EntryPhase::Done;
    }

    /// Submission rejected: keep everything and show the message verbatim.
    pub fn on_submit_failed(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    /// Start another transaction for the same donor, event and category.
    pub fn new_entry(&mut self) -> Result<()> {
        self.require(&[EntryPhase::Done], "new_entry")?;
        self.form.clear_transient();
        self.error = None;
        self.phase = EntryPhase::PaymentEntry;
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Change the category type. Returns whether it changed, in which case
    /// the selected sub-category is cleared and categories must be refetched.
    pub fn set_category_type(&mut self, category_type: CategoryType) -> bool {
        if self.form.category_type == category_type {
            return false;
        }
        self.form.category_type = category_type;
        self.form.category_id = None;
        true
    }

    /// Keep the digits, dropping any past [`MAX_AMOUNT_DIGITS`].
    pub fn set_amount(&mut self, input: &str) {
        let mut digits = digits_only(input);
        digits.truncate(MAX_AMOUNT_DIGITS);
        self.form.amount = digits;
    }

    pub fn apply_quick_amount(&mut self, amount: u64) {
        self.form.amount = amount.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> EntryWorkflow {
        let mut entry = EntryWorkflow::default();
        entry.start(DonorSource::New).unwrap();
        entry.form.name = "Ahmad".to_string();
        entry.form.phone_number = "081234567890".to_string();
        entry.confirm_profile().unwrap();
        entry.form.event_id = Some("1".to_string());
        entry.confirm_event().unwrap();
        entry.set_category_type(CategoryType::Zakat);
        entry.set_amount("100000");
        entry
    }

    #[test]
    fn test_happy_path_builds_request() {
        let mut entry = filled();
        assert_eq!(entry.phase(), EntryPhase::PaymentEntry);

        let request = entry.submit().unwrap();
        assert_eq!(request.name, "Ahmad");
        assert_eq!(request.amount, "100000");
        assert_eq!(request.event_id, "1");
        assert_eq!(request.category_type, CategoryType::Zakat);
        assert_eq!(request.category_id, None);
        assert_eq!(request.payment_method, PaymentMethod::Tunai);
    }

    #[test]
    fn test_submit_rejects_missing_fields() {
        let mut entry = filled();
        entry.form.name = "  ".to_string();
        assert!(matches!(entry.submit(), Err(AppError::Validation(_))));
        assert!(entry.error.is_some());

        let mut entry = filled();
        entry.form.phone_number.clear();
        assert!(matches!(entry.submit(), Err(AppError::Validation(_))));

        let mut entry = filled();
        entry.form.amount.clear();
        assert!(matches!(entry.submit(), Err(AppError::Validation(_))));

        let mut entry = filled();
        entry.set_amount("0");
        assert!(matches!(entry.submit(), Err(AppError::Validation(_))));

        let mut entry = filled();
        entry.form.event_id = None;
        assert!(matches!(entry.submit(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_oversized_amount_is_rejected_as_too_large() {
        let mut entry = filled();
        entry.set_amount("123456789012345678901234");
        assert_eq!(entry.form.amount, "123456789012345");
        assert!(entry.submit().is_ok());

        let mut entry = filled();
        entry.form.amount = "123456789012345678901234".to_string();
        assert!(matches!(entry.submit(), Err(AppError::Validation(_))));
        assert_eq!(entry.error.as_deref(), Some("Nominal terlalu besar"));
    }

    #[test]
    fn test_guards_block_out_of_order_transitions() {
        let mut entry = EntryWorkflow::default();
        assert!(matches!(entry.submit(), Err(AppError::State(_))));
        assert!(matches!(entry.confirm_event(), Err(AppError::State(_))));

        entry.start(DonorSource::New).unwrap();
        assert!(matches!(entry.confirm_profile(), Err(AppError::Validation(_))));
        assert_eq!(entry.phase(), EntryPhase::ProfileEntry);

        entry.form.name = "Ahmad".to_string();
        entry.form.phone_number = "0812".to_string();
        entry.confirm_profile().unwrap();
        assert!(matches!(entry.confirm_event(), Err(AppError::Validation(_))));
        assert_eq!(entry.phase(), EntryPhase::EventSelection);
    }

    #[test]
    fn test_category_type_switch_clears_sub_category() {
        let mut entry = filled();
        entry.form.category_id = Some("42".to_string());

        assert!(!entry.set_category_type(CategoryType::Zakat));
        assert_eq!(entry.form.category_id.as_deref(), Some("42"));

        assert!(entry.set_category_type(CategoryType::Campaign));
        assert_eq!(entry.form.category_id, None);
    }

    #[test]
    fn test_amount_normalizes_to_digits() {
        let mut entry = EntryWorkflow::default();
        entry.set_amount("Rp 1.500.000");
        assert_eq!(entry.form.amount, "1500000");

        entry.apply_quick_amount(QUICK_AMOUNTS[1]);
        assert_eq!(entry.form.amount, "100000");
        assert_eq!(entry.form.amount_value(), 100_000);
    }

    #[test]
    fn test_success_keeps_donor_context() {
        let mut entry = filled();
        entry.form.description = "titipan".to_string();
        entry.form.category_id = Some("3".to_string());
        entry.submit().unwrap();
        entry.on_submitted();

        assert_eq!(entry.phase(), EntryPhase::Done);
        assert!(entry.form.amount.is_empty());
        assert!(entry.form.description.is_empty());
        assert_eq!(entry.form.name, "Ahmad");

        entry.new_entry().unwrap();
        assert_eq!(entry.phase(), EntryPhase::PaymentEntry);
        assert_eq!(entry.form.event_id.as_deref(), Some("1"));
        assert_eq!(entry.form.category_type, CategoryType::Zakat);
        assert_eq!(entry.form.category_id.as_deref(), Some("3"));
    }

    #[test]
    fn test_failure_keeps_form() {
        let mut entry = filled();
        entry.submit().unwrap();
        entry.on_submit_failed("Event tidak ditemukan");

        assert_eq!(entry.phase(), EntryPhase::PaymentEntry);
        assert_eq!(entry.form.amount, "100000");
        assert_eq!(entry.error.as_deref(), Some("Event tidak ditemukan"));
    }

    #[test]
    fn test_select_existing_donor_prefills() {
        let mut entry = EntryWorkflow::default();
        entry.start(DonorSource::Existing).unwrap();
        entry.form.email = "typed@example.com".to_string();
        entry.search.query = "ahm".to_string();

        let donor = DonorMatch {
            id: Some("9".to_string()),
            name: Some("Ahmad".to_string()),
            phone: Some("0812".to_string()),
            email: None,
            address: Some("Semarang".to_string()),
        };
        entry.select_donor(&donor).unwrap();

        assert_eq!(entry.form.name, "Ahmad");
        assert_eq!(entry.form.phone_number, "0812");
        assert_eq!(entry.form.email, "typed@example.com");
        assert_eq!(entry.form.address, "Semarang");
        assert!(entry.search.query.is_empty());
    }

    #[test]
    fn test_back_walks_to_idle() {
        let mut entry = filled();
        entry.back();
        assert_eq!(entry.phase(), EntryPhase::EventSelection);
        entry.back();
        assert_eq!(entry.phase(), EntryPhase::ProfileEntry);
        entry.back();
        assert_eq!(entry.phase(), EntryPhase::Idle);
        assert_eq!(entry.source(), None);
        assert_eq!(entry.form.name, "Ahmad");
    }
}
