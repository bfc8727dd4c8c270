//! Text-to-byte encoding for string bodies, behind a capability-gated
//! strategy.
//!
//! The strategy is selected once per process. The default path reinterprets
//! each chunk's UTF-8 buffer in place as it flows through the pull stream.
//! Some deployments cannot trust an in-place transform stage, so setting
//! `STREAM_RESPONSE_ENCODE_FALLBACK=1` routes string bodies through a
//! per-chunk encode step on the producer side instead. Both paths yield the
//! identical byte sequence for identical input.

use bytes::{Bytes, BytesMut};
use lazy_static::lazy_static;

use crate::bridge::BodySource;
use crate::iter::{a_try_map, PullStream};

lazy_static! {
    /// Whether the in-place transform stage is trusted on this runtime.
    /// Probed once at first use, read-only thereafter.
    static ref NATIVE_ENCODER: bool = probe_native_encoder();
}

fn probe_native_encoder() -> bool {
    match std::env::var("STREAM_RESPONSE_ENCODE_FALLBACK") {
        Ok(v) if v == "1" || v.eq_ignore_ascii_case("true") => {
            log::debug!("string bodies will use the per-chunk encode fallback");
            false
        }
        _ => true,
    }
}

/// Convert a string-chunked body into the byte-chunked pull stream the
/// message container expects, using whichever strategy the capability probe
/// selected. Text never leaks past this point un-encoded.
pub fn string_source_to_byte_stream(body: BodySource<String>) -> PullStream<Bytes> {
    if *NATIVE_ENCODER {
        native_byte_stream(body)
    } else {
        fallback_byte_stream(body)
    }
}

/// Capable path: normalize to a pull stream, then apply the transform stage.
/// `String` already holds valid UTF-8, so the chunk's buffer is taken over
/// without copying.
fn native_byte_stream(body: BodySource<String>) -> PullStream<Bytes> {
    a_try_map(body.into_stream(), |s| Bytes::from(s.into_bytes()))
}

/// Fallback path: normalize to an async producer, encode each item into a
/// fresh buffer as it is pulled, and bridge the byte producer back into a
/// pull stream.
fn fallback_byte_stream(body: BodySource<String>) -> PullStream<Bytes> {
    let encoded = a_try_map(body.into_async_iter(), encode_chunk);
    BodySource::Pull(encoded).into_stream()
}

/// Encode one string chunk into a freshly allocated byte buffer.
pub(crate) fn encode_chunk(s: String) -> Bytes {
    let mut buf = BytesMut::with_capacity(s.len());
    buf.extend_from_slice(s.as_bytes());
    buf.freeze()
}
