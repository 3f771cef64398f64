//! API-Gateway-shaped request/response handling for the serverless
//! deployment. Kept free of `lambda_runtime` so it can be tested anywhere.

use crate::core::service::{ConversionService, ARABIC_PARAM, ROMAN_PARAM};
use crate::http::error::ApiError;
use crate::utils::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayRequest {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub raw_path: Option<String>,
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

impl GatewayRequest {
    fn route(&self) -> &str {
        self.raw_path
            .as_deref()
            .or(self.path.as_deref())
            .unwrap_or("/")
    }

    fn param(&self, name: &str) -> Option<&str> {
        self.query_string_parameters
            .as_ref()
            .and_then(|params| params.get(name))
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

pub fn handle(request: &GatewayRequest, allowed_origin: &str) -> GatewayResponse {
    let route = request.route();
    let endpoint = route.trim_end_matches('/').rsplit('/').next().unwrap_or("");

    tracing::info!("Request: {} ({})", route, endpoint);

    let outcome = match endpoint {
        "" => to_body(&ConversionService::welcome()),
        "r2a" => ConversionService::roman_to_arabic(request.param(ROMAN_PARAM))
            .map_err(ApiError::from)
            .and_then(|r| to_body(&r)),
        "a2r" => ConversionService::arabic_to_roman(request.param(ARABIC_PARAM))
            .map_err(ApiError::from)
            .and_then(|r| to_body(&r)),
        _ => Err(ApiError::NotFound(route.to_string())),
    };

    let (status_code, body) = match outcome {
        Ok(body) => (200, body),
        Err(e) => {
            let status = e.status().as_u16();
            let body = serde_json::to_string(&e.body())
                .unwrap_or_else(|_| r#"{"error":"Internal error"}"#.to_string());
            (status, body)
        }
    };

    GatewayResponse {
        status_code,
        headers: BTreeMap::from([
            ("Access-Control-Allow-Origin".to_string(), allowed_origin.to_string()),
            ("Content-Type".to_string(), "application/json".to_string()),
        ]),
        body,
    }
}

fn to_body<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ConvertError::from(e).into())
}
