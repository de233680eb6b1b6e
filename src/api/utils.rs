use anyhow::{Error, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

const MAX_ERROR_BODY: usize = 200;

/// Sends a GET and returns the status with the JSON body. Error statuses
/// are returned too when the body is JSON, since providers describe the
/// failure there.
pub async fn make_request(
    client: &Client,
    base_url: &str,
    endpoint: &str,
    params: &str,
) -> Result<(StatusCode, Value)> {
    let url = format!("{}/{}?{}", base_url.trim_end_matches('/'), endpoint, params);
    tracing::debug!(%url, "Sending request");
    let res = client.get(&url).send().await?;

    let status = res.status();
    let text = res.text().await?;

    match serde_json::from_str::<Value>(&text) {
        Ok(data) => Ok((status, data)),
        Err(_) if !status.is_success() => {
            let body: String = text.chars().take(MAX_ERROR_BODY).collect();
            Err(Error::msg(format!("Request failed: {} {}", status, body)))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn parse_response_object<T>(data: Value, error_msg: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    match data {
        Value::Object(obj) => serde_json::from_value(Value::Object(obj))
            .map_err(|e| Error::msg(format!("{}: {}", error_msg, e))),
        _ => Err(Error::msg("Unexpected API response format: not an object")),
    }
}
