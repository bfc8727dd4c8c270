//! The protocol bridge: normalizing caller-supplied bodies between the
//! iteration-producer shape and the pull-stream shape.
//!
//! Rather than duck-typing "is this already a stream?" at runtime, the
//! caller's body arrives as an explicit tagged union, [`BodySource`]. Every
//! conversion takes the source by value, so a body is consumed at most once
//! by construction; there is no exhausted state to re-enter.

use bytes::Bytes;
use futures_core::Stream;
use futures_util::stream::{self, StreamExt};

use crate::error::BodyResult;
use crate::iter::{AsyncIter, PullStream};

/// A message body supplied by the caller, in whichever shape it already has.
///
/// `T` is the chunk type: `String` for text bodies, [`Bytes`] for byte
/// bodies.
pub enum BodySource<T> {
    /// Synchronous producer: every item is available on demand
    Iter(Box<dyn Iterator<Item = T> + Send + 'static>),
    /// Asynchronous producer: each iteration step may suspend
    Async(AsyncIter<T>),
    /// Pre-built pull stream, possibly carrying mid-stream errors
    Pull(PullStream<T>),
}

impl<T: Send + 'static> BodySource<T> {
    /// Wrap a synchronous producer.
    pub fn from_iter<I>(iterable: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: Send + 'static,
    {
        BodySource::Iter(Box::new(iterable.into_iter()))
    }

    /// Wrap an asynchronous producer.
    pub fn from_stream<S>(s: S) -> Self
    where
        S: Stream<Item = T> + Send + 'static,
    {
        BodySource::Async(s.boxed())
    }

    /// Wrap a pre-built pull stream.
    pub fn from_pull<S>(s: S) -> Self
    where
        S: Stream<Item = BodyResult<T>> + Send + 'static,
    {
        BodySource::Pull(s.boxed())
    }

    /// Adapt this source into the pull-stream shape a transport consumes.
    ///
    /// Producer arms lift each item into a successful chunk, one advance of
    /// the underlying iteration per pull; producer exhaustion closes the
    /// stream. A source that is already a pull stream is returned by move,
    /// unwrapped: converting an already-correct shape never nests wrappers.
    pub fn into_stream(self) -> PullStream<T> {
        match self {
            BodySource::Iter(it) => stream::iter(it).map(Ok).boxed(),
            BodySource::Async(s) => s.map(Ok).boxed(),
            BodySource::Pull(s) => s,
        }
    }

    /// Adapt this source into an asynchronous producer of fallible steps,
    /// for call sites that drain the body rather than forward it.
    ///
    /// In Rust both iteration protocols are `Stream`, so this is the same
    /// normalization as [`into_stream`](BodySource::into_stream): a pull
    /// stream read one chunk per step IS the async producer, with stream
    /// errors surfacing as failed steps. The same no-rewrapping rule holds.
    pub fn into_async_iter(self) -> AsyncIter<BodyResult<T>> {
        self.into_stream()
    }
}

impl<T: Send + 'static> From<Vec<T>> for BodySource<T> {
    fn from(items: Vec<T>) -> Self {
        BodySource::from_iter(items)
    }
}

impl From<String> for BodySource<String> {
    fn from(s: String) -> Self {
        BodySource::from_iter(std::iter::once(s))
    }
}

impl From<&str> for BodySource<String> {
    fn from(s: &str) -> Self {
        BodySource::from(s.to_owned())
    }
}

impl From<Bytes> for BodySource<Bytes> {
    fn from(b: Bytes) -> Self {
        BodySource::from_iter(std::iter::once(b))
    }
}

impl<T> std::fmt::Debug for BodySource<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BodySource::Iter(_) => f.write_str("BodySource::Iter"),
            BodySource::Async(_) => f.write_str("BodySource::Async"),
            BodySource::Pull(_) => f.write_str("BodySource::Pull"),
        }
    }
}
