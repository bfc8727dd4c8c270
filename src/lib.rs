//! stream-response builds streaming and buffered HTTP message bodies from
//! iterators, async streams, or pre-built chunk streams.
//!
//! Callers construct outgoing bodies from incremental sources (say, a
//! producer emitting rows) without materializing the whole payload, or opt
//! out via the buffered variants that collect everything into a single chunk
//! before it becomes observable. Text bodies are UTF-8 encoded on the way
//! through; every constructed message defaults its content-type to
//! `application/octet-stream` unless the caller set one.
//!
//! ```
//! use stream_response::{stream_response, BodySource, ResponseInit};
//!
//! # async fn example() {
//! let rows = vec!["0,0,0\n".to_string(), "1,1,1\n".to_string()];
//! let res = stream_response(Some(BodySource::from_iter(rows)), ResponseInit::default());
//! let bytes = res.into_body().drain().await.unwrap();
//! assert_eq!(&bytes[..], b"0,0,0\n1,1,1\n");
//! # }
//! ```

pub mod body;
pub mod bridge;
pub mod encode;
pub mod error;
pub mod iter;
pub mod request;
pub mod response;

pub use body::StreamBody;
pub use bridge::BodySource;
pub use encode::string_source_to_byte_stream;
pub use error::{BodyError, BodyResult};
pub use iter::{AsyncIter, PullStream};
pub use request::{
    buffered_byte_request, buffered_request, byte_stream_request, stream_request, RequestInit,
};
pub use response::{
    buffered_byte_response, buffered_response, byte_stream_response, stream_response,
    ResponseInit, DEFAULT_CONTENT_TYPE,
};
