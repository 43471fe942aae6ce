//! Platform-abstracted HTTP client with `Send` futures.
//!
//! On wasm, `reqwest::Response` holds JS values and is not `Send`. Requests there
//! run on the JS thread through `wasm_bindgen_futures::spawn_local` and report
//! back over a `flume` channel, so commands can return `Send` futures on every
//! target.

use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Transport-level failure: the request never produced a response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HttpError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("reading response body failed: {0}")]
    Body(String),
    #[error("request cancelled")]
    Cancelled,
    #[error("encoding request body failed: {0}")]
    Encode(String),
}

pub type HttpResult<T> = Result<T, HttpError>;

/// A fully-read response. Only `Send` data.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// The `message` field of a JSON error body, if there is one.
    pub fn error_message(&self) -> Option<String> {
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            message: Option<String>,
        }

        self.json::<ErrorBody>()
            .ok()
            .and_then(|body| body.message)
            .filter(|message| !message.is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    url: String,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl RequestBuilder {
    fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Appends percent-encoded query parameters to the URL.
    pub fn query<'a>(mut self, pairs: impl IntoIterator<Item = (&'a str, String)>) -> Self {
        let encoded = pairs
            .into_iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(&value)
                )
            })
            .collect::<Vec<_>>()
            .join("&");

        if !encoded.is_empty() {
            let separator = if self.url.contains('?') { '&' } else { '?' };
            self.url.push(separator);
            self.url.push_str(&encoded);
        }
        self
    }

    pub fn json<T: Serialize>(mut self, value: &T) -> HttpResult<Self> {
        let bytes = serde_json::to_vec(value).map_err(|err| HttpError::Encode(err.to_string()))?;
        self.body = Some(bytes);
        Ok(self.header("content-type", "application/json"))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn send(self) -> HttpResult<Response> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.execute().await
        }

        #[cfg(target_arch = "wasm32")]
        {
            let (tx, rx) = flume::bounded::<HttpResult<Response>>(1);

            wasm_bindgen_futures::spawn_local(async move {
                let result = self.execute().await;
                tx.send_async(result).await.ok();
            });

            rx.recv_async().await.map_err(|_| HttpError::Cancelled)?
        }
    }

    async fn execute(self) -> HttpResult<Response> {
        let client = reqwest::Client::new();

        let mut request = match self.method {
            Method::Get => client.get(&self.url),
            Method::Post => client.post(&self.url),
        };

        for (name, value) in &self.headers {
            request = request.header(name, value);
        }

        if let Some(body) = self.body {
            request = request.body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|err| HttpError::Request(err.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|err| HttpError::Body(err.to_string()))?
            .to_vec();

        Ok(Response { status, body })
    }
}

pub struct Client;

impl Client {
    pub fn get(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(Method::Get, url)
    }

    pub fn post(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(Method::Post, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &[u8]) -> Response {
        Response {
            status,
            body: body.to_vec(),
        }
    }

    #[test]
    fn success_range() {
        assert!(response(200, b"").is_success());
        assert!(response(204, b"").is_success());
        assert!(!response(302, b"").is_success());
        assert!(!response(500, b"").is_success());
    }

    #[test]
    fn error_message_reads_json_message() {
        let resp = response(400, br#"{"message": "User not found"}"#);
        assert_eq!(resp.error_message().as_deref(), Some("User not found"));
    }

    #[test]
    fn error_message_absent_for_plain_body() {
        assert_eq!(response(500, b"Internal Server Error").error_message(), None);
        assert_eq!(response(500, br#"{"message": ""}"#).error_message(), None);
        assert_eq!(response(500, br#"{"error": "x"}"#).error_message(), None);
    }

    #[test]
    fn query_is_percent_encoded() {
        let builder = Client::post("http://localhost/api/reviews/post").query([
            ("itemId", "7".to_owned()),
            ("reviewerComments", "tasty & warm".to_owned()),
        ]);

        assert_eq!(
            builder.url(),
            "http://localhost/api/reviews/post?itemId=7&reviewerComments=tasty%20%26%20warm"
        );
    }

    #[test]
    fn query_appends_to_existing_query() {
        let builder = Client::get("http://localhost/x?a=1").query([("b", "2".to_owned())]);
        assert_eq!(builder.url(), "http://localhost/x?a=1&b=2");
    }

    #[test]
    fn json_sets_body_and_content_type() {
        let builder = Client::post("http://localhost")
            .json(&serde_json::json!({ "id": 3 }))
            .expect("json body");

        assert_eq!(builder.body.as_deref(), Some(br#"{"id":3}"#.as_slice()));
        assert!(
            builder
                .headers
                .iter()
                .any(|(name, value)| name == "content-type" && value == "application/json")
        );
    }
}
