//! Stop data client for the Entur journey planner GraphQL API.

use std::future::Future;
use std::pin::Pin;

use futures_util::FutureExt;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use stopmap_transit::{
    BoundingBox, FetchError, Result, Stop, StopDataSource, StopDetail, StopIdentifier,
};
use tracing::debug;

use crate::SetupError;
use crate::config::ApiConfig;

pub mod query;
pub mod response;

use query::GraphQlRequest;

// ET-Client-Name; from_static only accepts lowercase
const CLIENT_NAME_HEADER: &str = "et-client-name";

/// One POST per call, no retries.
#[derive(Clone, Debug)]
pub struct EnturClient {
    client: reqwest::Client,
    endpoint: String,
}

impl EnturClient {
    pub fn new(config: &ApiConfig) -> std::result::Result<Self, SetupError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(CLIENT_NAME_HEADER),
            HeaderValue::from_str(&config.client_name)?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post(&self, request: GraphQlRequest) -> Result<Vec<u8>> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(network)?
            .error_for_status()
            .map_err(network)?;

        let body = response.bytes().await.map_err(network)?;
        Ok(body.to_vec())
    }
}

fn network(err: reqwest::Error) -> FetchError {
    debug!(error = %err, "stop data request failed");
    FetchError::Network(err.to_string())
}

impl StopDataSource for EnturClient {
    fn fetch_stops_in_bounds<'a>(
        &'a self,
        bounds: BoundingBox,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Stop>>> + Send + 'a>> {
        async move {
            let body = self.post(GraphQlRequest::stops_in_bounds(&bounds)).await?;
            let stops = response::parse_stops(&body)?;
            debug!(count = stops.len(), "fetched stops in bounds");
            Ok(stops)
        }
        .boxed()
    }

    fn fetch_stop_detail<'a>(
        &'a self,
        stop_id: &'a StopIdentifier,
    ) -> Pin<Box<dyn Future<Output = Result<StopDetail>> + Send + 'a>> {
        async move {
            let body = self.post(GraphQlRequest::stop_detail(stop_id)).await?;
            response::parse_stop_detail(stop_id, &body)
        }
        .boxed()
    }
}
