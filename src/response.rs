//! Response constructors for streaming and buffered bodies.
//!
//! All four strategies share one pattern: normalize the caller's body shape
//! through the bridge, optionally encode, optionally buffer, hand the result
//! to the message container, then set the default content-type if the caller
//! did not. The response value, and with it the header map, is built
//! immediately in every case; buffered variants defer only the body's
//! readiness, with the full drain running inside the body's first poll.

use bytes::Bytes;
use http::{header, HeaderMap, HeaderValue, Response, StatusCode};

use crate::body::{concat_bytes, StreamBody};
use crate::bridge::BodySource;
use crate::encode::string_source_to_byte_stream;
use crate::iter::{a_join, collect, promise_to_stream};

/// The content-type applied when the caller's headers carry none.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Initialization options passed through unchanged to the message container.
#[derive(Debug, Clone, Default)]
pub struct ResponseInit {
    pub status: StatusCode,
    pub headers: HeaderMap,
}

impl ResponseInit {
    /// Options with the given status and otherwise empty headers.
    pub fn with_status(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
        }
    }
}

fn finish(body: StreamBody, init: ResponseInit) -> Response<StreamBody> {
    let mut res = Response::new(body);
    *res.status_mut() = init.status;
    *res.headers_mut() = init.headers;
    if !res.headers().contains_key(header::CONTENT_TYPE) {
        res.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(DEFAULT_CONTENT_TYPE),
        );
    }
    res
}

/// Streaming text response: chunks are encoded and forwarded one pull at a
/// time, nothing is materialized up front.
pub fn stream_response(
    body: Option<BodySource<String>>,
    init: ResponseInit,
) -> Response<StreamBody> {
    let body = match body {
        Some(b) => StreamBody::new(string_source_to_byte_stream(b)),
        None => StreamBody::empty(),
    };
    finish(body, init)
}

/// Streaming byte response: chunks are forwarded as-is, no encode step.
pub fn byte_stream_response(
    body: Option<BodySource<Bytes>>,
    init: ResponseInit,
) -> Response<StreamBody> {
    let body = match body {
        Some(b) => StreamBody::new(b.into_stream()),
        None => StreamBody::empty(),
    };
    finish(body, init)
}

/// Buffered text response: the whole producer is drained and joined into one
/// string, encoded once, and exposed as a single chunk. No chunk is
/// observable until the entire source has been drained successfully; a
/// failed drain is the only read the body ever yields.
pub fn buffered_response(
    body: Option<BodySource<String>>,
    init: ResponseInit,
) -> Response<StreamBody> {
    let body = match body {
        Some(b) => {
            let it = b.into_async_iter();
            StreamBody::new(promise_to_stream(async move {
                let joined = a_join(it).await?;
                Ok(Bytes::from(joined.into_bytes()))
            }))
        }
        None => StreamBody::empty(),
    };
    finish(body, init)
}

/// Buffered byte response: the whole producer is drained and concatenated
/// into a single contiguous chunk before anything is observable.
pub fn buffered_byte_response(
    body: Option<BodySource<Bytes>>,
    init: ResponseInit,
) -> Response<StreamBody> {
    let body = match body {
        Some(b) => {
            let it = b.into_async_iter();
            StreamBody::new(promise_to_stream(async move {
                let chunks = collect(it).await?;
                Ok(concat_bytes(chunks))
            }))
        }
        None => StreamBody::empty(),
    };
    finish(body, init)
}
