// src/specs/device.rs
//! Reading one lookup reply.
//!
//! Steps are checked strictly in this order, first hit wins:
//! 1. transport failure      → `NetworkError`
//! 2. non-2xx status         → `ApiError { status }`
//! 3. body unreadable or not our schema → `UnexpectedError`
//! 4. `success: false`       → `NotFound { query }`
//! 5. no `data`/`data.specs` → `NoSpecs { title or query }`
//! 6. otherwise              → `DeviceResult`

use crate::core::net::{ HttpResponse, TransportError };
use crate::error::LookupError;

use super::schema::{ ApiResponse, DeviceResult };

pub fn interpret(
    query: &str,
    reply: Result<HttpResponse, TransportError>,
) -> Result<DeviceResult, LookupError> {
    let resp = reply?;

    if !resp.is_success() {
        return Err(LookupError::ApiError { status: resp.status });
    }

    if let Some(e) = resp.read_error {
        return Err(LookupError::UnexpectedError(e));
    }

    let parsed: ApiResponse = serde_json::from_str(&resp.body)?;

    if !parsed.success {
        return Err(LookupError::NotFound { query: s!(query) });
    }

    let Some(data) = parsed.data else {
        return Err(LookupError::NoSpecs { subject: s!(query) });
    };

    let title = data.title.filter(|t| !t.trim().is_empty());

    let Some(specs) = data.specs else {
        let subject = title.unwrap_or_else(|| s!(query));
        return Err(LookupError::NoSpecs { subject });
    };

    Ok(DeviceResult {
        title: title.unwrap_or_else(|| s!(query)),
        image: data.image.unwrap_or_default(),
        specs,
    })
}
