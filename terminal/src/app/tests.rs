use super::*;

use std::time::Duration;

use parking_lot::Mutex;
use shared::{
    Category, CategoryType, CreateTransactionRequest, DashboardSummary, DonorMatch, Event,
    HistoryPage, HistoryQuery, HistoryRecord, LoginRequest, LoginResponse, SubmittedTransaction,
    UserProfile,
};

use crate::core::error::{AppError, Result};
use crate::services::api::ProofImage;

/// Records every call and answers with canned results
struct MockApiService {
    calls: Mutex<Vec<String>>,
    submitted: Mutex<Vec<CreateTransactionRequest>>,
    login: Result<LoginResponse>,
    me: Result<UserProfile>,
    create: Result<SubmittedTransaction>,
    validate: Result<()>,
    pending: Vec<HistoryRecord>,
}

impl Default for MockApiService {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            submitted: Mutex::new(Vec::new()),
            login: Ok(LoginResponse {
                token: Some("tok-123".to_string()),
                user: None,
            }),
            me: Ok(UserProfile {
                name: Some("Siti".to_string()),
                ..Default::default()
            }),
            create: Ok(SubmittedTransaction {
                receipt_number: Some("BKT-1".to_string()),
                total_nominal: Some(100_000),
                ..Default::default()
            }),
            validate: Ok(()),
            pending: Vec::new(),
        }
    }
}

impl MockApiService {
    fn record(&self, call: impl Into<String>) {
        self.calls.lock().push(call.into());
    }

    fn count(&self, prefix: &str) -> usize {
        self.calls.lock().iter().filter(|c| c.starts_with(prefix)).count()
    }
}

#[async_trait::async_trait]
impl ApiService for MockApiService {
    async fn login(&self, request: LoginRequest) -> Result<LoginResponse> {
        self.record(format!("login:{}", request.email_or_phone_number));
        self.login.clone()
    }

    async fn get_me(&self) -> Result<UserProfile> {
        self.record("get_me");
        self.me.clone()
    }

    async fn get_events(&self) -> Result<Vec<Event>> {
        self.record("get_events");
        Ok(vec![Event {
            id: "1".to_string(),
            name: "Jumat Berkah".to_string(),
            location: None,
        }])
    }

    async fn get_categories(&self, category_type: CategoryType) -> Result<Vec<Category>> {
        self.record(format!("get_categories:{}", category_type.as_str()));
        Ok(vec![Category {
            id: "c1".to_string(),
            name: format!("{} umum", category_type.label()),
        }])
    }

    async fn create_transaction(
        &self,
        request: CreateTransactionRequest,
        _image: Option<ProofImage>,
    ) -> Result<SubmittedTransaction> {
        self.record("create_transaction");
        self.submitted.lock().push(request);
        self.create.clone()
    }

    async fn search_donors(&self, query: &str) -> Result<Vec<DonorMatch>> {
        self.record(format!("search_donors:{}", query));
        Ok(vec![DonorMatch {
            name: Some("Ahmad".to_string()),
            phone: Some("0812".to_string()),
            ..Default::default()
        }])
    }

    async fn get_history(&self, query: &HistoryQuery) -> Result<HistoryPage> {
        self.record(format!("get_history:{}", query.page));
        Ok(HistoryPage {
            total_pages: 3,
            number: query.page,
            ..Default::default()
        })
    }

    async fn get_pending(&self) -> Result<Vec<HistoryRecord>> {
        self.record("get_pending");
        Ok(self.pending.clone())
    }

    async fn validate_pending(&self, receipt_number: &str) -> Result<()> {
        self.record(format!("validate_pending:{}", receipt_number));
        self.validate.clone()
    }

    async fn get_dashboard(&self) -> Result<DashboardSummary> {
        self.record("get_dashboard");
        Ok(DashboardSummary::default())
    }
}

struct Harness {
    app: App,
    api: Arc<MockApiService>,
    tokens: TokenStore,
    _dir: tempfile::TempDir,
}

fn harness_with(api: MockApiService, stored_token: Option<&str>) -> Harness {
    let dir = tempfile::tempdir().unwrap();
    let tokens = TokenStore::new(dir.path().join("token"));
    if let Some(token) = stored_token {
        tokens.save(token).unwrap();
    }
    let api = Arc::new(api);
    let app = App::with_services(api.clone(), tokens.clone());
    Harness {
        app,
        api,
        tokens,
        _dir: dir,
    }
}

fn harness() -> Harness {
    harness_with(MockApiService::default(), None)
}

/// Apply events until the background tasks go quiet
async fn settle(app: &mut App) {
    while let Ok(Ok(event)) = tokio::time::timeout(Duration::from_millis(100), app.event_rx.recv()).await {
        app.handle_event(event);
    }
}

async fn logged_in() -> Harness {
    let mut h = harness_with(MockApiService::default(), Some("tok-123"));
    settle(&mut h.app).await;
    h
}

/// Walk the entry workflow to the payment step with a valid form
fn fill_entry(app: &mut App) {
    app.handle_start_entry(DonorSource::New);
    app.edit_entry(|entry| {
        entry.form.name = "Ahmad".to_string();
        entry.form.phone_number = "081234567890".to_string();
        entry.confirm_profile().unwrap();
        entry.form.event_id = Some("1".to_string());
        entry.confirm_event().unwrap();
        entry.set_amount("100000");
    });
}

// ========== Session ==========

#[tokio::test]
async fn test_startup_without_token_shows_login() {
    let mut h = harness();
    settle(&mut h.app).await;

    let state = h.app.state.read();
    assert_eq!(state.current_screen, Screen::Login);
    assert!(!state.is_authenticated());
    assert!(h.api.calls.lock().is_empty());
}

#[tokio::test]
async fn test_startup_with_token_restores_session() {
    let h = logged_in().await;

    let state = h.app.state.read();
    assert_eq!(state.current_screen, Screen::Transaction);
    assert_eq!(state.store.auth.token.as_deref(), Some("tok-123"));
    assert_eq!(state.store.auth.user.as_ref().and_then(|u| u.name.as_deref()), Some("Siti"));
    assert_eq!(state.store.pos.events.data.len(), 1);
    assert_eq!(h.api.count("get_me"), 1);
    assert_eq!(h.api.count("get_categories:campaign"), 1);
}

#[tokio::test]
async fn test_rejected_profile_clears_stored_token() {
    let api = MockApiService {
        me: Err(AppError::Session("Session expired".to_string())),
        ..Default::default()
    };
    let mut h = harness_with(api, Some("old"));
    settle(&mut h.app).await;

    let state = h.app.state.read();
    assert_eq!(state.current_screen, Screen::Login);
    assert_eq!(state.store.auth.token, None);
    assert_eq!(state.store.auth.error.as_deref(), Some("Session expired"));
    assert_eq!(h.tokens.load(), None);
}

#[tokio::test]
async fn test_unreachable_profile_keeps_stored_token() {
    let api = MockApiService {
        me: Err(AppError::Api("Session expired".to_string())),
        ..Default::default()
    };
    let mut h = harness_with(api, Some("old"));
    settle(&mut h.app).await;

    let state = h.app.state.read();
    assert_eq!(state.current_screen, Screen::Login);
    assert_eq!(state.store.auth.token, None);
    assert_eq!(h.tokens.load().as_deref(), Some("old"));
}

#[tokio::test]
async fn test_login_requires_both_fields() {
    let mut h = harness();
    h.app.state.write().login.identifier = "agen@lazis.id".to_string();
    h.app.handle_login_click();
    settle(&mut h.app).await;

    let state = h.app.state.read();
    assert!(state.login.error.is_some());
    assert_eq!(h.api.count("login"), 0);
}

#[tokio::test]
async fn test_login_success_persists_token_and_opens_entry() {
    let mut h = harness();
    {
        let mut state = h.app.state.write();
        state.login.identifier = " agen@lazis.id ".to_string();
        state.login.password = "rahasia".to_string();
    }
    h.app.handle_login_click();
    settle(&mut h.app).await;

    let state = h.app.state.read();
    assert_eq!(h.api.count("login:agen@lazis.id"), 1);
    assert_eq!(h.tokens.load().as_deref(), Some("tok-123"));
    assert_eq!(state.current_screen, Screen::Transaction);
    assert!(state.login.password.is_empty());
    assert_eq!(h.api.count("get_me"), 1);
    assert_eq!(h.api.count("get_events"), 1);
}

#[tokio::test]
async fn test_login_failure_shows_backend_message() {
    let api = MockApiService {
        login: Err(AppError::Api("Password salah".to_string())),
        ..Default::default()
    };
    let mut h = harness_with(api, None);
    {
        let mut state = h.app.state.write();
        state.login.identifier = "agen".to_string();
        state.login.password = "x".to_string();
    }
    h.app.handle_login_click();
    settle(&mut h.app).await;

    let state = h.app.state.read();
    assert_eq!(state.store.auth.error.as_deref(), Some("Password salah"));
    assert_eq!(state.current_screen, Screen::Login);
    assert_eq!(h.tokens.load(), None);
}

#[tokio::test]
async fn test_logout_resets_everything() {
    let mut h = logged_in().await;
    fill_entry(&mut h.app);

    h.app.handle_logout();

    let state = h.app.state.read();
    assert_eq!(state.current_screen, Screen::Login);
    assert_eq!(state.store, store::Store::default());
    assert_eq!(state.entry.phase(), EntryPhase::Idle);
    assert_eq!(h.tokens.load(), None);
}

// ========== Navigation ==========

#[tokio::test]
async fn test_protected_screen_redirects_to_login() {
    let mut h = harness();
    h.app.handle_screen_change(Screen::History);
    settle(&mut h.app).await;

    assert_eq!(h.app.state.read().current_screen, Screen::Login);
    assert_eq!(h.api.count("get_history"), 0);
}

#[tokio::test]
async fn test_shortcuts_switch_screens_and_fetch() {
    let mut h = logged_in().await;

    h.app.handle_shortcut(2);
    settle(&mut h.app).await;
    assert_eq!(h.app.state.read().current_screen, Screen::Pending);
    assert_eq!(h.api.count("get_pending"), 1);

    h.app.handle_shortcut(4);
    settle(&mut h.app).await;
    assert_eq!(h.app.state.read().current_screen, Screen::Dashboard);
    assert_eq!(h.api.count("get_dashboard"), 1);

    h.app.handle_shortcut(9);
    assert_eq!(h.app.state.read().current_screen, Screen::Dashboard);
}

// ========== Entry ==========

#[tokio::test]
async fn test_submit_without_required_fields_makes_no_call() {
    let mut h = logged_in().await;
    fill_entry(&mut h.app);

    h.app.edit_entry(|entry| entry.form.phone_number.clear());
    h.app.handle_submit();
    h.app.edit_entry(|entry| {
        entry.form.phone_number = "0812".to_string();
        entry.form.amount.clear();
    });
    h.app.handle_submit();
    settle(&mut h.app).await;

    let state = h.app.state.read();
    assert_eq!(h.api.count("create_transaction"), 0);
    assert!(state.entry.error.is_some());
    assert!(!state.store.pos.submitting);
}

#[tokio::test]
async fn test_submit_success_keeps_donor_context() {
    let mut h = logged_in().await;
    fill_entry(&mut h.app);
    h.app.handle_category_type_change(CategoryType::Zakat);
    settle(&mut h.app).await;

    h.app.handle_submit();
    settle(&mut h.app).await;

    {
        let submitted = h.api.submitted.lock();
        assert_eq!(submitted.len(), 1);
        let fields = submitted[0].form_fields();
        let field = |key: &str| fields.iter().find(|(k, _)| *k == key).map(|(_, v)| v.clone());
        assert_eq!(field("paymentMethod").as_deref(), Some("TUNAI"));
        assert_eq!(field("categoryId").as_deref(), Some(""));
        assert_eq!(field("categoryType").as_deref(), Some("zakat"));
        assert_eq!(field("amount").as_deref(), Some("100000"));
    }

    let state = h.app.state.read();
    assert_eq!(state.entry.phase(), EntryPhase::Done);
    assert!(state.store.pos.transaction_success.is_some());
    assert!(state.entry.form.amount.is_empty());
    assert_eq!(state.entry.form.name, "Ahmad");
    drop(state);

    h.app.handle_new_entry();
    let state = h.app.state.read();
    assert_eq!(state.entry.phase(), EntryPhase::PaymentEntry);
    assert!(state.store.pos.transaction_success.is_none());
    assert_eq!(state.entry.form.event_id.as_deref(), Some("1"));
}

#[tokio::test]
async fn test_finishing_entry_refetches_default_categories() {
    let mut h = logged_in().await;
    fill_entry(&mut h.app);
    h.app.handle_category_type_change(CategoryType::Zakat);
    settle(&mut h.app).await;
    h.app.handle_submit();
    settle(&mut h.app).await;
    let campaign_fetches = h.api.count("get_categories:campaign");

    h.app.handle_reset_entry();
    settle(&mut h.app).await;

    assert_eq!(h.api.count("get_categories:campaign"), campaign_fetches + 1);
    let state = h.app.state.read();
    assert_eq!(state.entry.phase(), EntryPhase::Idle);
    assert_eq!(state.entry.form.category_type, CategoryType::Campaign);
    assert_eq!(state.entry.form.category_id, None);
    assert!(state.store.pos.transaction_success.is_none());
    assert_eq!(state.store.pos.categories.data[0].name, "Campaign umum");
}

#[tokio::test]
async fn test_finishing_entry_keeps_categories_when_type_unchanged() {
    let mut h = logged_in().await;
    fill_entry(&mut h.app);
    let fetches = h.api.count("get_categories:");

    h.app.handle_reset_entry();
    settle(&mut h.app).await;

    assert_eq!(h.api.count("get_categories:"), fetches);
    assert_eq!(h.app.state.read().entry.phase(), EntryPhase::Idle);
}

#[tokio::test]
async fn test_submit_failure_surfaces_message() {
    let api = MockApiService {
        create: Err(AppError::Api("Event tidak aktif".to_string())),
        ..Default::default()
    };
    let mut h = harness_with(api, Some("tok"));
    settle(&mut h.app).await;
    fill_entry(&mut h.app);

    h.app.handle_submit();
    settle(&mut h.app).await;

    let state = h.app.state.read();
    assert_eq!(state.entry.phase(), EntryPhase::PaymentEntry);
    assert_eq!(state.entry.error.as_deref(), Some("Event tidak aktif"));
    assert_eq!(state.store.pos.transaction_error.as_deref(), Some("Event tidak aktif"));
    assert_eq!(state.entry.form.amount, "100000");
}

#[tokio::test]
async fn test_category_switch_refetches_and_drops_stale_results() {
    let mut h = logged_in().await;
    h.app.state.write().entry.form.category_id = Some("c1".to_string());

    h.app.handle_category_type_change(CategoryType::Infak);
    assert_eq!(h.app.state.read().entry.form.category_id, None);
    settle(&mut h.app).await;
    assert_eq!(h.api.count("get_categories:infak"), 1);

    h.app.handle_event(AppEvent::CategoriesResult {
        category_type: CategoryType::Zakat,
        result: Ok(vec![Category {
            id: "z".to_string(),
            name: "Zakat Maal".to_string(),
        }]),
    });
    let state = h.app.state.read();
    assert_eq!(state.store.pos.categories.data[0].name, "Infak umum");
}

#[tokio::test]
async fn test_donor_search_and_select() {
    let mut h = logged_in().await;
    h.app.handle_start_entry(DonorSource::Existing);
    h.app.state.write().entry.search.query = "ahm".to_string();

    h.app.handle_donor_search();
    settle(&mut h.app).await;
    assert_eq!(h.api.count("search_donors:ahm"), 1);

    let donor = h.app.state.read().entry.search.results[0].clone();
    h.app.edit_entry(|entry| entry.select_donor(&donor).unwrap());

    let state = h.app.state.read();
    assert_eq!(state.entry.form.name, "Ahmad");
    assert!(state.entry.search.results.is_empty());
}

#[tokio::test]
async fn test_editing_clears_success_state() {
    let mut h = logged_in().await;
    fill_entry(&mut h.app);
    h.app.handle_submit();
    settle(&mut h.app).await;
    assert!(h.app.state.read().store.pos.transaction_success.is_some());

    h.app.edit_entry(|entry| entry.form.description = "x".to_string());
    assert!(h.app.state.read().store.pos.transaction_success.is_none());
}

// ========== Pending ==========

#[tokio::test]
async fn test_validate_success_refetches_pending() {
    let mut h = logged_in().await;
    h.app.handle_screen_change(Screen::Pending);
    settle(&mut h.app).await;
    assert_eq!(h.api.count("get_pending"), 1);

    h.app.handle_validate_click("BKT/01".to_string());
    assert_eq!(h.app.state.read().store.pos.validating.as_deref(), Some("BKT/01"));
    settle(&mut h.app).await;

    let state = h.app.state.read();
    assert_eq!(h.api.count("validate_pending:BKT/01"), 1);
    assert_eq!(h.api.count("get_pending"), 2);
    assert_eq!(state.store.pos.validating, None);
    assert_eq!(state.store.pos.validate_error, None);
}

#[tokio::test]
async fn test_validate_failure_keeps_row_pending() {
    let api = MockApiService {
        validate: Err(AppError::Api("Validasi gagal".to_string())),
        ..Default::default()
    };
    let mut h = harness_with(api, Some("tok"));
    settle(&mut h.app).await;
    h.app.handle_screen_change(Screen::Pending);
    settle(&mut h.app).await;

    h.app.handle_validate_click("BKT-2".to_string());
    settle(&mut h.app).await;

    let state = h.app.state.read();
    assert_eq!(h.api.count("get_pending"), 1);
    let error = state.store.pos.validate_error.as_ref().unwrap();
    assert_eq!(error.receipt_number, "BKT-2");
    assert_eq!(error.error, "Validasi gagal");
}

#[tokio::test]
async fn test_validate_same_row_twice_is_ignored() {
    let mut h = logged_in().await;
    h.app.handle_validate_click("BKT-3".to_string());
    h.app.handle_validate_click("BKT-3".to_string());
    settle(&mut h.app).await;

    assert_eq!(h.api.count("validate_pending:BKT-3"), 1);
}

// ========== History ==========

#[tokio::test]
async fn test_filter_change_resets_page() {
    let mut h = logged_in().await;
    h.app.handle_screen_change(Screen::History);
    settle(&mut h.app).await;

    h.app.handle_history_page_change(2);
    settle(&mut h.app).await;
    assert_eq!(h.app.state.read().history_filters.page, 2);

    let mut filters = h.app.state.read().history_filters.clone();
    filters.search = "ahmad".to_string();
    h.app.handle_history_filters_change(filters);
    settle(&mut h.app).await;

    assert_eq!(h.app.state.read().history_filters.page, 0);
    assert_eq!(h.api.count("get_history:2"), 1);
    assert_eq!(h.api.count("get_history:0"), 2);
}

#[tokio::test]
async fn test_page_change_out_of_range_is_ignored() {
    let mut h = logged_in().await;
    h.app.handle_screen_change(Screen::History);
    settle(&mut h.app).await;

    h.app.handle_history_page_change(3);
    settle(&mut h.app).await;

    assert_eq!(h.app.state.read().history_filters.page, 0);
    assert_eq!(h.api.count("get_history"), 1);
}

#[tokio::test]
async fn test_late_history_response_is_discarded() {
    let mut h = logged_in().await;
    h.app.handle_screen_change(Screen::History);
    settle(&mut h.app).await;

    let latest = h.app.state.read().store.pos.history_seq;
    h.app.handle_event(AppEvent::HistoryResult {
        seq: latest - 1,
        result: Ok(HistoryPage {
            total_elements: 999,
            ..Default::default()
        }),
    });

    assert_eq!(h.app.state.read().store.pos.history.data.total_elements, 0);
}
