pub mod request_trace;

pub use request_trace::{RequestId, RequestIdExt, RequestTraceMiddleware};
