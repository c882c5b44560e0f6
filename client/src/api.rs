//! Public facade over `NetworkService`.

use std::sync::Arc;

use endpoint_core::{Download, Endpoint, JsonCodec};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::call::Call;
use crate::config::ClientConfig;
use crate::service::NetworkService;
use crate::transport::{ReqwestTransport, Transport, TransportError};

/// HTTP client exposing the four call shapes.
///
/// Every operation must be invoked from within a tokio runtime; the request
/// is dispatched immediately and the returned [`Call`] resolves to its
/// outcome.
///
/// ```no_run
/// use endpoint_client::{ApiClient, ClientConfig, Endpoint};
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Item {
///     name: String,
/// }
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::new(&ClientConfig::default())?;
/// let endpoint = Endpoint::try_new("https://api.example.com/", "items/1")?;
/// let item: Item = client.perform_request(&endpoint).await?;
/// println!("{}", item.name);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ApiClient {
    service: NetworkService,
}

impl ApiClient {
    /// Client over a `ReqwestTransport` configured from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Build`] when the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let transport = ReqwestTransport::new(config)?;
        Ok(Self::with_transport(Arc::new(transport), config.codec()))
    }

    pub fn with_transport(transport: Arc<dyn Transport>, codec: JsonCodec) -> Self {
        Self {
            service: NetworkService::new(transport, codec),
        }
    }

    /// Decode the response body into `T`.
    pub fn perform_request<T, P>(&self, endpoint: &Endpoint<P>) -> Call<T>
    where
        T: DeserializeOwned + Send + 'static,
        P: Serialize,
    {
        self.service.request(endpoint)
    }

    /// Succeed on any 2xx response without reading the body.
    pub fn perform<P: Serialize>(&self, endpoint: &Endpoint<P>) -> Call<()> {
        self.service.request_completion(endpoint)
    }

    pub fn upload<P: Serialize>(
        &self,
        endpoint: &Endpoint<P>,
        data: Vec<u8>,
        mime_type: &str,
    ) -> Call<Vec<u8>> {
        self.service.upload(endpoint, data, mime_type)
    }

    pub fn download<P: Serialize>(&self, endpoint: &Endpoint<P>) -> Call<Download> {
        self.service.download(endpoint)
    }
}
