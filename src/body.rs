//! The byte-chunked body value handed to the HTTP message container.

use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::{Bytes, BytesMut};
use futures_core::Stream;
use futures_util::stream::{self, StreamExt};
use http_body::{Body, Frame};

use crate::error::{BodyError, BodyResult};
use crate::iter::PullStream;

/// A single-consumer byte stream backing a request or response body.
///
/// The body is moved into the message at construction and polled to
/// exhaustion by the transport; ownership makes double consumption
/// unrepresentable. Errors raised by the source while the stream is
/// partially consumed surface as a failed read, never as silent truncation.
/// Dropping the body cancels it: no further pulls reach the source.
pub struct StreamBody {
    inner: PullStream<Bytes>,
}

impl StreamBody {
    /// Wrap a byte-chunked pull stream.
    pub fn new(inner: PullStream<Bytes>) -> Self {
        Self { inner }
    }

    /// An immediately-ended body, used when the caller supplies no body.
    pub fn empty() -> Self {
        Self {
            inner: stream::empty().boxed(),
        }
    }

    /// Fully read the body and concatenate its chunks.
    ///
    /// The first failed read aborts the drain and is returned.
    pub async fn drain(mut self) -> BodyResult<Bytes> {
        let mut buf = BytesMut::new();
        while let Some(chunk) = self.inner.next().await {
            buf.extend_from_slice(&chunk?);
        }
        Ok(buf.freeze())
    }
}

/// Concatenate collected chunks into a single contiguous block.
pub(crate) fn concat_bytes(chunks: Vec<Bytes>) -> Bytes {
    let total = chunks.iter().map(Bytes::len).sum();
    let mut buf = BytesMut::with_capacity(total);
    for chunk in chunks {
        buf.extend_from_slice(&chunk);
    }
    buf.freeze()
}

impl Stream for StreamBody {
    type Item = Result<Bytes, BodyError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().inner.poll_next_unpin(cx)
    }
}

impl Body for StreamBody {
    type Data = Bytes;
    type Error = BodyError;

    fn poll_frame(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Bytes>, BodyError>>> {
        match self.get_mut().inner.poll_next_unpin(cx) {
            Poll::Ready(Some(chunk)) => Poll::Ready(Some(chunk.map(Frame::data))),
            Poll::Ready(None) => Poll::Ready(None),
            Poll::Pending => Poll::Pending,
        }
    }
}

impl std::fmt::Debug for StreamBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StreamBody")
    }
}
