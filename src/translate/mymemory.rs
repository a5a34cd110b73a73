//! MyMemory translation API client.
//!
//! `GET {base}/get?q=<text>&langpair=<source>|<target>` answers with
//! `{"responseData": {"translatedText": "..."}, "responseStatus": 200, ...}`.

use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use super::{TranslateError, Translator};
use crate::config::Settings;
use crate::language::Language;

pub const DEFAULT_MYMEMORY_BASE_URL: &str = "https://api.mymemory.translated.net";

pub struct MyMemoryClient {
    http: reqwest::Client,
    base_url: String,
}

impl MyMemoryClient {
    pub fn new(
        base_url: &str,
        request_timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, TranslateError> {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| TranslateError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, TranslateError> {
        Self::new(
            &settings.translate_base_url,
            Duration::from_secs(settings.request_timeout_secs),
            Duration::from_secs(settings.connect_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait::async_trait]
impl Translator for MyMemoryClient {
    async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, TranslateError> {
        let url = format!("{}/get", self.base_url);
        let langpair = format!("{}|{}", source.code(), target.code());
        let response = self
            .http
            .get(url)
            .query(&[("q", text), ("langpair", langpair.as_str())])
            .send()
            .await
            .map_err(|e| TranslateError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TranslateError::Request(e.to_string()))?;
        if !(200..300).contains(&status) {
            return Err(TranslateError::Status { status, body });
        }
        tracing::trace!(%langpair, "translation received");
        parse_response(&body)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MyMemoryResponse {
    response_data: Option<ResponseData>,
    #[serde(default)]
    response_status: Option<Value>,
    #[serde(default)]
    response_details: Option<Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseData {
    translated_text: Option<String>,
}

/// Extract `responseData.translatedText` from a MyMemory response body.
fn parse_response(body: &str) -> Result<String, TranslateError> {
    let parsed: MyMemoryResponse =
        serde_json::from_str(body).map_err(|e| TranslateError::Parse(e.to_string()))?;

    // The service reports quota and language-pair errors in the body with HTTP 200.
    if let Some(status) = parsed.response_status.as_ref().and_then(status_code) {
        if status != 200 {
            let details = match parsed.response_details {
                Some(Value::String(s)) => s,
                Some(other) => other.to_string(),
                None => String::new(),
            };
            return Err(TranslateError::Service { status, details });
        }
    }

    parsed
        .response_data
        .and_then(|data| data.translated_text)
        .ok_or_else(|| TranslateError::Parse("missing responseData.translatedText".into()))
}

/// `responseStatus` arrives as a number or as a numeric string.
fn status_code(value: &Value) -> Option<u16> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
