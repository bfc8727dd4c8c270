//! Outgoing request constructors, mirroring the response strategies.

use bytes::Bytes;
use http::{header, HeaderMap, HeaderValue, Method, Request, Uri};

use crate::body::{concat_bytes, StreamBody};
use crate::bridge::BodySource;
use crate::encode::string_source_to_byte_stream;
use crate::iter::{a_join, collect, promise_to_stream};
use crate::response::DEFAULT_CONTENT_TYPE;

/// Initialization options passed through unchanged to the message container.
#[derive(Debug, Clone, Default)]
pub struct RequestInit {
    pub method: Method,
    pub headers: HeaderMap,
}

impl RequestInit {
    /// Options with the given method and otherwise empty headers.
    pub fn with_method(method: Method) -> Self {
        Self {
            method,
            headers: HeaderMap::new(),
        }
    }
}

/// Unlike responses, a request only receives the default content-type when a
/// body was actually supplied.
fn finish(uri: Uri, body: Option<StreamBody>, init: RequestInit) -> Request<StreamBody> {
    let has_body = body.is_some();
    let mut req = Request::new(body.unwrap_or_else(StreamBody::empty));
    *req.uri_mut() = uri;
    *req.method_mut() = init.method;
    *req.headers_mut() = init.headers;
    if has_body && !req.headers().contains_key(header::CONTENT_TYPE) {
        req.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(DEFAULT_CONTENT_TYPE),
        );
    }
    req
}

/// Streaming text request body, encoded chunk by chunk as it is pulled.
pub fn stream_request(
    uri: Uri,
    body: Option<BodySource<String>>,
    init: RequestInit,
) -> Request<StreamBody> {
    let body = body.map(|b| StreamBody::new(string_source_to_byte_stream(b)));
    finish(uri, body, init)
}

/// Streaming byte request body, forwarded as-is.
pub fn byte_stream_request(
    uri: Uri,
    body: Option<BodySource<Bytes>>,
    init: RequestInit,
) -> Request<StreamBody> {
    let body = body.map(|b| StreamBody::new(b.into_stream()));
    finish(uri, body, init)
}

/// Buffered text request body: fully drained and joined before a single
/// encoded chunk becomes observable.
pub fn buffered_request(
    uri: Uri,
    body: Option<BodySource<String>>,
    init: RequestInit,
) -> Request<StreamBody> {
    let body = body.map(|b| {
        let it = b.into_async_iter();
        StreamBody::new(promise_to_stream(async move {
            let joined = a_join(it).await?;
            Ok(Bytes::from(joined.into_bytes()))
        }))
    });
    finish(uri, body, init)
}

/// Buffered byte request body: fully drained and concatenated into one
/// contiguous chunk.
pub fn buffered_byte_request(
    uri: Uri,
    body: Option<BodySource<Bytes>>,
    init: RequestInit,
) -> Request<StreamBody> {
    let body = body.map(|b| {
        let it = b.into_async_iter();
        StreamBody::new(promise_to_stream(async move {
            let chunks = collect(it).await?;
            Ok(concat_bytes(chunks))
        }))
    });
    finish(uri, body, init)
}
