//! HTTP infrastructure: implements `Publisher` against the Lavadocs API.
//!
//! One blocking `ureq` request per publish, run on `spawn_blocking`. No
//! retries and no timeout beyond the transport defaults.

use lavadocs_common::{CreateDocumentResponse, PublishedDocRef};

use crate::application::ports::Publisher;
use crate::domain::{DocumentPayload, LavadocsConfig, PublishError};

/// Error text the service uses for a rejected credential.
pub const UNAUTHORIZED_ERROR: &str = "Unauthorized";

/// Lowercase fragments of an error chain that point at TLS negotiation.
const TLS_MARKERS: &[&str] = &[
    "tls",
    "ssl",
    "certificate",
    "handshake",
    "corrupt message",
    "invalidcontenttype",
];

/// Production `Publisher` backed by a shared `ureq` agent.
#[derive(Clone)]
pub struct UreqPublisher {
    agent: ureq::Agent,
}

impl Default for UreqPublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl UreqPublisher {
    #[must_use]
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new()
            .user_agent(concat!("lavadocs-cli/", env!("CARGO_PKG_VERSION")))
            .build();
        Self { agent }
    }

    /// Send the create request on the current thread.
    ///
    /// # Errors
    ///
    /// Returns a categorized [`PublishError`] for every failure.
    pub fn publish_blocking(
        &self,
        payload: &DocumentPayload,
        config: &LavadocsConfig,
    ) -> Result<PublishedDocRef, PublishError> {
        let url = config.documents_endpoint();
        let body = serde_json::to_string(&payload.to_request())
            .map_err(|e| PublishError::Remote(format!("cannot encode request: {e}")))?;

        tracing::debug!(url = %url, bytes = body.len(), "POST");
        let result = self
            .agent
            .post(&url)
            .set("Content-Type", "application/json")
            .set("Authorization", &config.credential)
            .send_string(&body);

        match result {
            Ok(resp) => {
                let text = resp
                    .into_string()
                    .map_err(|e| PublishError::Remote(format!("cannot read response: {e}")))?;
                parse_success_body(&text)
            }
            Err(ureq::Error::Status(code, resp)) => {
                Err(classify_status(code, resp.into_string().ok().as_deref(), config))
            }
            Err(ureq::Error::Transport(t)) => Err(classify_transport(&t, config)),
        }
    }
}

impl Publisher for UreqPublisher {
    async fn publish(
        &self,
        payload: &DocumentPayload,
        config: &LavadocsConfig,
    ) -> Result<PublishedDocRef, PublishError> {
        let publisher = self.clone();
        let payload = payload.clone();
        let config = config.clone();
        tokio::task::spawn_blocking(move || publisher.publish_blocking(&payload, &config))
            .await
            .unwrap_or_else(|e| Err(PublishError::Remote(format!("publish task failed: {e}"))))
    }
}

/// Interpret a 2xx body. An `error` field turns it into a failure.
///
/// # Errors
///
/// Returns [`PublishError::Unauthorized`] for `"error":"Unauthorized"`,
/// [`PublishError::Remote`] for any other error text or an unparseable body.
pub fn parse_success_body(text: &str) -> Result<PublishedDocRef, PublishError> {
    let resp: CreateDocumentResponse = serde_json::from_str(text)
        .map_err(|e| PublishError::Remote(format!("invalid response: {e}")))?;
    match resp.error.as_deref() {
        Some(UNAUTHORIZED_ERROR) => Err(PublishError::Unauthorized),
        Some(other) => Err(PublishError::Remote(other.to_string())),
        None => Ok(resp.into()),
    }
}

/// Map a non-2xx status (and its body, if readable) to a category.
#[must_use]
pub fn classify_status(code: u16, body: Option<&str>, config: &LavadocsConfig) -> PublishError {
    let error_text = body
        .and_then(|b| serde_json::from_str::<CreateDocumentResponse>(b).ok())
        .and_then(|r| r.error);
    match (code, error_text.as_deref()) {
        (401, _) | (_, Some(UNAUTHORIZED_ERROR)) => PublishError::Unauthorized,
        (404, _) => PublishError::ServiceNotFound {
            address: config.service_address.clone(),
        },
        (_, Some(text)) => PublishError::Remote(format!("HTTP {code}: {text}")),
        (_, None) => PublishError::Remote(format!("HTTP {code}")),
    }
}

fn classify_transport(t: &ureq::Transport, config: &LavadocsConfig) -> PublishError {
    if is_tls_failure(t.kind(), &source_chain(t)) {
        PublishError::TransportOrTls {
            address: config.service_address.clone(),
            detail: transport_detail(t),
        }
    } else {
        PublishError::Remote(t.to_string())
    }
}

/// Kind, message and source chain of a transport error, without its URL.
fn transport_detail(t: &ureq::Transport) -> String {
    let mut parts = vec![t.kind().to_string()];
    if let Some(msg) = t.message() {
        parts.push(msg.to_string());
    }
    let chain = source_chain(t);
    if !chain.is_empty() {
        parts.push(chain);
    }
    parts.join(": ")
}

/// Underlying errors only. The transport message can carry the host name.
fn source_chain(t: &ureq::Transport) -> String {
    let mut parts = Vec::new();
    let mut source = std::error::Error::source(t);
    while let Some(err) = source {
        parts.push(err.to_string());
        source = err.source();
    }
    parts.join(": ")
}

/// Whether a transport failure is a scheme or TLS negotiation problem.
///
/// `chain` is the text of the underlying errors; name resolution failures
/// never count.
#[must_use]
pub fn is_tls_failure(kind: ureq::ErrorKind, chain: &str) -> bool {
    match kind {
        ureq::ErrorKind::UnknownScheme | ureq::ErrorKind::InsecureRequestHttpsOnly => true,
        ureq::ErrorKind::Dns => false,
        _ => {
            let lowered = chain.to_lowercase();
            TLS_MARKERS.iter().any(|m| lowered.contains(m))
        }
    }
}
