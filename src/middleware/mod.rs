pub mod cors;
pub mod request_id;

pub use cors::cors_for;
pub use request_id::{CORRELATION_ID_HEADER, CorrelationId, RequestId, RequestIdExt};
