//! Call orchestration: build, dispatch once, classify.
//!
//! # Design
//! `NetworkService` owns its transport for its whole lifetime; each call
//! clones the `Arc` into its task, so no call can outlive the transport it
//! runs on. Request construction happens synchronously when an operation is
//! invoked and a construction failure yields an already-finished `Call`.
//! Everything after dispatch runs on the call's task and ends in exactly one
//! classified outcome.

use std::sync::Arc;

use endpoint_core::encoding::CONTENT_TYPE;
use endpoint_core::{
    classify, Download, Endpoint, HttpRequest, HttpResponse, JsonCodec, NetworkError,
    RequestBuilder,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, debug_span, trace, Instrument};

use crate::call::Call;
use crate::transport::Transport;

/// Response bodies longer than this are cut short in trace output.
const BODY_TRACE_LIMIT: usize = 1024;

/// Issues one transport call per operation and classifies its response.
#[derive(Clone)]
pub struct NetworkService {
    transport: Arc<dyn Transport>,
    builder: RequestBuilder,
}

impl NetworkService {
    pub fn new(transport: Arc<dyn Transport>, codec: JsonCodec) -> Self {
        Self {
            transport,
            builder: RequestBuilder::new(codec),
        }
    }

    /// Typed call: decode a 2xx body into `T`.
    pub fn request<T, P>(&self, endpoint: &Endpoint<P>) -> Call<T>
    where
        T: DeserializeOwned + Send + 'static,
        P: Serialize,
    {
        let codec = *self.builder.codec();
        self.dispatch(endpoint, |_| {}, move |response| classify::decode(response, &codec))
    }

    /// Completion-only call: succeeds on any 2xx, ignores the body.
    pub fn request_completion<P: Serialize>(&self, endpoint: &Endpoint<P>) -> Call<()> {
        self.dispatch(endpoint, |_| {}, classify::completion)
    }

    /// Send `data` as the body with `Content-Type: mime_type`; yields the
    /// response body.
    ///
    /// The uploaded bytes replace whatever body the endpoint's encoding
    /// produced.
    pub fn upload<P: Serialize>(
        &self,
        endpoint: &Endpoint<P>,
        data: Vec<u8>,
        mime_type: &str,
    ) -> Call<Vec<u8>> {
        self.dispatch(
            endpoint,
            |request| {
                request.set_header(CONTENT_TYPE, mime_type);
                request.body = Some(data);
            },
            classify::raw_body,
        )
    }

    /// Fetch raw bytes together with the response metadata.
    pub fn download<P: Serialize>(&self, endpoint: &Endpoint<P>) -> Call<Download> {
        self.dispatch(endpoint, |_| {}, classify::download)
    }

    fn dispatch<P, T, F>(
        &self,
        endpoint: &Endpoint<P>,
        prepare: impl FnOnce(&mut HttpRequest),
        classify: F,
    ) -> Call<T>
    where
        P: Serialize,
        T: Send + 'static,
        F: FnOnce(HttpResponse) -> Result<T, NetworkError> + Send + 'static,
    {
        let mut request = match self.builder.build(endpoint) {
            Ok(request) => request,
            Err(e) => {
                debug!(error = %e, path = %endpoint.path, "request construction failed");
                return Call::ready(Err(e));
            }
        };
        prepare(&mut request);
        if let Err(e) = request.validate_headers() {
            debug!(error = %e, path = %endpoint.path, "request construction failed");
            return Call::ready(Err(e));
        }

        let span = debug_span!("call", method = %request.method, url = %request.url);
        let transport = Arc::clone(&self.transport);
        Call::spawn(
            async move {
                debug!("dispatching request");
                let response = transport.send(request).await.map_err(|e| {
                    debug!(error = %e, "transport failed");
                    NetworkError::Transport(e.to_string())
                })?;
                debug!(
                    status = response.status,
                    bytes = response.body.as_ref().map_or(0, Vec::len),
                    "response received"
                );
                trace_body(&response);
                classify(response)
            }
            .instrument(span),
        )
    }
}

fn trace_body(response: &HttpResponse) {
    if let Some(body) = &response.body {
        let shown = &body[..body.len().min(BODY_TRACE_LIMIT)];
        trace!(
            body = %String::from_utf8_lossy(shown),
            truncated = body.len() > BODY_TRACE_LIMIT,
            "response body"
        );
    }
}
