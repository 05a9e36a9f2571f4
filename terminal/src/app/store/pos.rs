//! POS data slice.
//!
//! Every concern owns its own [`Slot`], so fetches into different fields never
//! touch each other. Success replaces the data wholesale; failure clears it.

use shared::{Category, DashboardSummary, Event, HistoryPage, HistoryRecord, SubmittedTransaction};

/// Data plus its loading / error flags
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Slot<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T: Default> Slot<T> {
    fn request(self) -> Self {
        Self {
            loading: true,
            error: None,
            ..self
        }
    }

    fn succeed(data: T) -> Self {
        Self {
            data,
            loading: false,
            error: None,
        }
    }

    fn fail(error: String) -> Self {
        Self {
            data: T::default(),
            loading: false,
            error: Some(error),
        }
    }
}

/// Failed validation, kept per receipt number so the row can show it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidateError {
    pub receipt_number: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PosSlice {
    pub events: Slot<Vec<Event>>,
    pub categories: Slot<Vec<Category>>,
    pub history: Slot<HistoryPage>,
    pub pending: Slot<Vec<HistoryRecord>>,
    pub dashboard: Slot<Option<DashboardSummary>>,

    pub submitting: bool,
    pub transaction_success: Option<SubmittedTransaction>,
    pub transaction_error: Option<String>,

    /// Receipt number currently being validated
    pub validating: Option<String>,
    pub validate_error: Option<ValidateError>,

    /// Sequence number of the latest history request
    pub history_seq: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PosAction {
    EventsRequest,
    EventsSuccess(Vec<Event>),
    EventsFailure(String),

    CategoriesRequest,
    CategoriesSuccess(Vec<Category>),
    CategoriesFailure(String),

    CreateRequest,
    CreateSuccess(SubmittedTransaction),
    CreateFailure(String),
    ClearTransactionSuccess,

    HistoryRequest { seq: u64 },
    HistorySuccess { seq: u64, page: HistoryPage },
    HistoryFailure { seq: u64, error: String },

    PendingRequest,
    PendingSuccess(Vec<HistoryRecord>),
    PendingFailure(String),

    ValidateRequest(String),
    ValidateSuccess(String),
    ValidateFailure(ValidateError),

    DashboardRequest,
    DashboardSuccess(DashboardSummary),
    DashboardFailure(String),

    Reset,
}

pub fn reduce(state: PosSlice, action: PosAction) -> PosSlice {
    match action {
        PosAction::EventsRequest => PosSlice {
            events: state.events.request(),
            ..state
        },
        PosAction::EventsSuccess(events) => PosSlice {
            events: Slot::succeed(events),
            ..state
        },
        PosAction::EventsFailure(error) => PosSlice {
            events: Slot::fail(error),
            ..state
        },

        PosAction::CategoriesRequest => PosSlice {
            categories: state.categories.request(),
            ..state
        },
        PosAction::CategoriesSuccess(categories) => PosSlice {
            categories: Slot::succeed(categories),
            ..state
        },
        PosAction::CategoriesFailure(error) => PosSlice {
            categories: Slot::fail(error),
            ..state
        },

        PosAction::CreateRequest => PosSlice {
            submitting: true,
            transaction_success: None,
            transaction_error: None,
            ..state
        },
        PosAction::CreateSuccess(tx) => PosSlice {
            submitting: false,
            transaction_success: Some(tx),
            transaction_error: None,
            ..state
        },
        PosAction::CreateFailure(error) => PosSlice {
            submitting: false,
            transaction_success: None,
            transaction_error: Some(error),
            ..state
        },
        PosAction::ClearTransactionSuccess => PosSlice {
            transaction_success: None,
            ..state
        },

        PosAction::HistoryRequest { seq } => PosSlice {
            history: state.history.request(),
            history_seq: seq,
            ..state
        },
        PosAction::HistorySuccess { seq, page } if seq == state.history_seq => PosSlice {
            history: Slot::succeed(page),
            ..state
        },
        PosAction::HistoryFailure { seq, error } if seq == state.history_seq => PosSlice {
            history: Slot::fail(error),
            ..state
        },
        PosAction::HistorySuccess { seq, .. } | PosAction::HistoryFailure { seq, .. } => {
            tracing::debug!(seq, latest = state.history_seq, "Dropping stale history response");
            state
        }

        PosAction::PendingRequest => PosSlice {
            pending: state.pending.request(),
            ..state
        },
        PosAction::PendingSuccess(rows) => PosSlice {
            pending: Slot::succeed(rows),
            ..state
        },
        PosAction::PendingFailure(error) => PosSlice {
            pending: Slot::fail(error),
            ..state
        },

        PosAction::ValidateRequest(receipt_number) => PosSlice {
            validating: Some(receipt_number),
            validate_error: None,
            ..state
        },
        PosAction::ValidateSuccess(_) => PosSlice {
            validating: None,
            validate_error: None,
            ..state
        },
        PosAction::ValidateFailure(error) => PosSlice {
            validating: None,
            validate_error: Some(error),
            ..state
        },

        PosAction::DashboardRequest => PosSlice {
            dashboard: state.dashboard.request(),
            ..state
        },
        PosAction::DashboardSuccess(summary) => PosSlice {
            dashboard: Slot::succeed(Some(summary)),
            ..state
        },
        PosAction::DashboardFailure(error) => PosSlice {
            dashboard: Slot::fail(error),
            ..state
        },

        PosAction::Reset => PosSlice::default(),
    }
}
