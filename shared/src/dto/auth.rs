use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Agent sign-in request (`POST /api/auth/agen/signin`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email_or_phone_number: String,
    pub password: String,
}

/// Logged-in agent profile
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, deserialize_with = "crate::de::opt_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

impl UserProfile {
    /// Name printed as cashier on receipts: name, then email, then `SYSTEM`.
    pub fn cashier_name(&self) -> String {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .or_else(|| self.email.as_deref().filter(|e| !e.trim().is_empty()))
            .unwrap_or("SYSTEM")
            .to_string()
    }

    /// Extract the profile from a `get-me` body (`data` or the root object).
    pub fn from_envelope(body: Value) -> Option<Self> {
        let inner = match body {
            Value::Object(mut map) => match map.remove("data") {
                Some(data @ Value::Object(_)) => data,
                _ => Value::Object(map),
            },
            _ => return None,
        };
        serde_json::from_value(inner).ok()
    }
}

/// Sign-in response.
///
/// The backend nests the payload under `data` on some deployments and returns it
/// flat on others, so this is parsed from a raw [`Value`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginResponse {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
}

impl LoginResponse {
    pub fn from_json(body: &Value) -> Self {
        let data = body.get("data");
        let token = data
            .and_then(|d| d.get("token"))
            .or_else(|| body.get("token"))
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        let user = data
            .and_then(|d| d.get("user"))
            .or_else(|| body.get("user"))
            .or(data)
            .filter(|v| v.is_object())
            .and_then(|v| serde_json::from_value::<UserProfile>(v.clone()).ok());

        Self { token, user }
    }
}

/// Error body returned on non-2xx responses
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorResponse {
    /// Backend-provided message: `message`, then `error`.
    pub fn into_message(self) -> Option<String> {
        self.message
            .filter(|m| !m.is_empty())
            .or(self.error.filter(|e| !e.is_empty()))
    }
}
