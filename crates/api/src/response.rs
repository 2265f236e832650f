//! Shared response envelope types for API handlers.
//!
//! Resource endpoints use a `{ "data": ... }` envelope. The analysis,
//! subscribe and transcribe endpoints answer with a flat `{ "success": true,
//! ... }` body that the browser client reads directly; their response
//! structs live next to their handlers.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
