//! HTTP middleware stack.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (added in `main`, capture errors and transactions)
//! 2. `TraceLayer` (request span and access log)
//! 3. CORS (single allowed origin from configuration)
//! 4. Request ID (add unique ID to each request)
//! 5. Security headers
//! 6. Body size limit
//! 7. Panic catcher (turn handler panics into a generic 500)

pub mod panic;
pub mod request_id;
pub mod security_headers;

pub use panic::handle_panic;
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
pub use security_headers::security_headers_middleware;
