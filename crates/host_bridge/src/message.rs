//! Wire format exchanged over `postMessage` between the shell and a sandboxed app.

use serde::{Deserialize, Serialize};

/// Marker string stamped on every bridge envelope so the receiving side can tell a
/// bridge message apart from any other `postMessage` traffic the embedding page
/// happens to generate (devtools extensions, other widgets, etc.), per `spec.md` §4.6.
pub const BRIDGE_MARKER: &str = "archbase.bridge.v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Discriminates the three message shapes the bridge transports.
pub enum BridgeKind {
    /// A call initiated by one side, expecting a matching [`BridgeKind::Response`].
    Request,
    /// The reply to a previously-sent [`BridgeKind::Request`], matched by `correlation_id`.
    Response,
    /// A fire-and-forget notification with no expected reply.
    Event,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Structured error carried by a failed [`BridgeKind::Response`].
pub struct BridgeError {
    /// Short machine-readable error code (e.g. `"permission-denied"`).
    pub code: String,
    /// Human-readable message, safe to surface in developer tooling.
    pub message: String,
}

impl BridgeError {
    /// Builds a `BridgeError` from a code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One envelope exchanged over the bridge transport.
pub struct BridgeMessage {
    /// Always [`BRIDGE_MARKER`]; validated by the receiver before anything else.
    pub marker: String,
    /// Message shape.
    pub kind: BridgeKind,
    /// Correlates a [`BridgeKind::Response`] with its originating [`BridgeKind::Request`].
    /// Ignored (but still present) on [`BridgeKind::Event`] messages.
    pub correlation_id: String,
    /// Dotted method path, e.g. `"windows.focus"` or `"notifications.show"`.
    pub method: String,
    /// JSON-encoded call arguments, return value, or event payload.
    pub payload: serde_json::Value,
    /// Present only on a failed [`BridgeKind::Response`].
    pub error: Option<BridgeError>,
}

impl BridgeMessage {
    /// Builds a request envelope.
    pub fn request(correlation_id: impl Into<String>, method: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            marker: BRIDGE_MARKER.to_string(),
            kind: BridgeKind::Request,
            correlation_id: correlation_id.into(),
            method: method.into(),
            payload,
            error: None,
        }
    }

    /// Builds a successful response envelope.
    pub fn response(correlation_id: impl Into<String>, method: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            marker: BRIDGE_MARKER.to_string(),
            kind: BridgeKind::Response,
            correlation_id: correlation_id.into(),
            method: method.into(),
            payload,
            error: None,
        }
    }

    /// Builds a failed response envelope.
    pub fn error_response(correlation_id: impl Into<String>, method: impl Into<String>, error: BridgeError) -> Self {
        Self {
            marker: BRIDGE_MARKER.to_string(),
            kind: BridgeKind::Response,
            correlation_id: correlation_id.into(),
            method: method.into(),
            payload: serde_json::Value::Null,
            error: Some(error),
        }
    }

    /// Builds an event envelope. Events carry an empty correlation id since no reply
    /// is ever matched against them.
    pub fn event(method: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            marker: BRIDGE_MARKER.to_string(),
            kind: BridgeKind::Event,
            correlation_id: String::new(),
            method: method.into(),
            payload,
            error: None,
        }
    }

    /// Whether `marker` equals [`BRIDGE_MARKER`]; the first check any receiver applies.
    pub fn has_valid_marker(&self) -> bool {
        self.marker == BRIDGE_MARKER
    }

    /// Splits `method` on its first `.`, returning `(namespace, action)`. Methods with
    /// no `.` return the whole string as `namespace` and an empty `action`.
    pub fn method_parts(&self) -> (&str, &str) {
        match self.method.split_once('.') {
            Some((namespace, action)) => (namespace, action),
            None => (self.method.as_str(), ""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_round_trips_through_json() {
        let msg = BridgeMessage::request("corr-1", "windows.focus", serde_json::json!({"windowId": 7}));
        let raw = serde_json::to_string(&msg).unwrap();
        let parsed: BridgeMessage = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, msg);
        assert!(parsed.has_valid_marker());
    }

    #[test]
    fn method_parts_splits_on_first_dot() {
        let msg = BridgeMessage::event("collaboration.cursor.moved", serde_json::Value::Null);
        assert_eq!(msg.method_parts(), ("collaboration", "cursor.moved"));
    }

    #[test]
    fn method_without_dot_is_whole_namespace_with_empty_action() {
        let msg = BridgeMessage::event("ping", serde_json::Value::Null);
        assert_eq!(msg.method_parts(), ("ping", ""));
    }

    #[test]
    fn a_foreign_marker_fails_validation() {
        let mut msg = BridgeMessage::request("corr-1", "windows.focus", serde_json::Value::Null);
        msg.marker = "some-other-extension".to_string();
        assert!(!msg.has_valid_marker());
    }
}
