use log::{debug, info};
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Client, Method,
};

use crate::{config::Configuration, error::ApiError, resource::Resource};

pub const API_KEY_HEADER: &str = "x-api-key";

/// One call against the REST service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation<R> {
    List,
    Get(R),
    Add(R),
    Update(R),
    Delete(R),
}

/// A fully composed request, ready to be sent.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

pub fn build_request<R: Resource>(
    cfg: &Configuration,
    operation: &Operation<R>,
) -> Result<ApiRequest, ApiError> {
    let base = format!("{}/restvpn/{}", cfg.addr, R::PATH);

    let (method, url, body) = match operation {
        Operation::List => (Method::GET, format!("{base}/"), None),
        Operation::Get(record) => (Method::GET, format!("{base}/{}", record.identity()), None),
        Operation::Add(record) => (Method::POST, base, Some(serde_json::to_vec(record)?)),
        Operation::Update(record) => (
            Method::PUT,
            format!("{base}/{}/{}", record.identity(), record.remote_ip()),
            Some(serde_json::to_vec(&record.update_body())?),
        ),
        Operation::Delete(record) => (
            Method::DELETE,
            format!("{base}/{}/{}", record.identity(), record.remote_ip()),
            None,
        ),
    };

    let mut headers = HeaderMap::new();
    if body.is_some() {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }
    if let Some(key) = &cfg.api_key {
        let mut value = HeaderValue::from_str(key)?;
        value.set_sensitive(true);
        headers.insert(API_KEY_HEADER, value);
    }

    Ok(ApiRequest {
        method,
        url,
        headers,
        body,
    })
}

pub fn new_client() -> Result<Client, ApiError> {
    Client::builder().build().map_err(ApiError::Transport)
}

/// Sends the request and returns the response body as received, whatever
/// the status code.
pub async fn send(client: &Client, request: ApiRequest) -> Result<Vec<u8>, ApiError> {
    info!("{} {}", request.method, request.url);

    let mut builder = client
        .request(request.method, &request.url)
        .headers(request.headers);
    if let Some(body) = request.body {
        builder = builder.body(body);
    }

    let response = builder.send().await.map_err(ApiError::Transport)?;
    debug!("server answered {}", response.status());

    let body = response.bytes().await.map_err(ApiError::ReadBody)?;
    Ok(body.to_vec())
}
