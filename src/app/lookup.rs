use crate::core::service::InventoryService;
use crate::core::{JeepModel, JeepQuery, LookupObserver, Trim};
use crate::utils::error::{InventoryError, Result};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw `model` / `trim` parameters as they arrive from a caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupRequest {
    pub model: String,
    pub trim: String,
}

impl LookupRequest {
    pub fn new(model: impl Into<String>, trim: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            trim: trim.into(),
        }
    }

    pub fn parse(&self) -> Result<(JeepModel, Trim)> {
        let model = self.model.parse::<JeepModel>()?;
        let trim = Trim::parse(&self.trim)?;
        Ok((model, trim))
    }

    /// Request path with percent-encoded parameters.
    pub fn uri(&self) -> String {
        format!(
            "/jeeps?model={}&trim={}",
            urlencoding::encode(&self.model),
            urlencoding::encode(&self.trim)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    pub status_code: u16,
    pub reason: String,
    pub timestamp: String,
    pub uri: String,
}

impl ErrorResponse {
    fn from_error(error: &InventoryError, uri: String) -> Self {
        let status_code = error.status_code();
        Self {
            message: error.user_friendly_message(),
            status_code,
            reason: reason_phrase(status_code).to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            uri,
        }
    }
}

/// Status plus JSON body, independent of any transport.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: Value,
}

impl Reply {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        _ => "Internal Server Error",
    }
}

fn error_reply(error: &InventoryError, uri: String) -> Reply {
    let response = ErrorResponse::from_error(error, uri);
    let status = response.status_code;
    let body = serde_json::to_value(&response).unwrap_or_else(|_| {
        serde_json::json!({ "message": response.message, "status_code": status })
    });
    Reply { status, body }
}

/// Validates the request, runs the lookup and maps the outcome to a reply.
pub async fn handle<Q, O>(service: &InventoryService<Q, O>, request: &LookupRequest) -> Reply
where
    Q: JeepQuery,
    O: LookupObserver,
{
    let uri = request.uri();

    let (model, trim) = match request.parse() {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!("Rejected request {}: {}", uri, e);
            return error_reply(&e, uri);
        }
    };

    let result = service
        .fetch_jeeps(model, &trim)
        .await
        .and_then(|jeeps| serde_json::to_value(jeeps).map_err(InventoryError::from));

    match result {
        Ok(body) => Reply { status: 200, body },
        Err(e) => {
            if e.is_not_found() {
                tracing::info!("{}", e);
            } else {
                tracing::error!("Lookup failed for {}: {}", uri, e);
            }
            error_reply(&e, uri)
        }
    }
}
