//! Pull-based iteration combinators used to assemble message bodies.
//!
//! Producers come in two shapes: synchronous iterators, and asynchronous
//! streams where each `next` step may suspend. Every combinator here is
//! single-pass and order-preserving, and propagates the first error raised
//! by the underlying producer without retrying.

use async_stream::stream;
use futures_util::stream::{self, BoxStream, StreamExt};
use std::future::Future;

use crate::error::{BodyError, BodyResult};

/// A boxed, heap-allocated asynchronous producer of items
pub type AsyncIter<O> = BoxStream<'static, O>;

/// A boxed fallible chunk stream: the backpressure-aware shape a transport
/// pulls body bytes from. Demand is expressed by polling, cancellation by
/// dropping, and an error puts the stream into its terminal failed read.
pub type PullStream<O> = BoxStream<'static, Result<O, BodyError>>;

// ================================
// Lazy transformations
// ================================

/// Lazily apply `f` to each item of a synchronous producer.
pub fn map<A, B, I, F>(iterable: I, f: F) -> impl Iterator<Item = B>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> B,
{
    iterable.into_iter().map(f)
}

/// Lazily apply `f` to each item of an asynchronous producer.
///
/// Infinite-safe: items are transformed one at a time as they are pulled,
/// nothing is read ahead.
pub fn a_map<A, B, F>(s: AsyncIter<A>, f: F) -> AsyncIter<B>
where
    A: Send + 'static,
    B: Send + 'static,
    F: FnMut(A) -> B + Send + 'static,
{
    s.map(f).boxed()
}

/// Lazily apply `f` to the successful chunks of a pull stream, passing
/// errors through to the consumer untouched.
pub fn a_try_map<A, B, F>(s: PullStream<A>, mut f: F) -> PullStream<B>
where
    A: Send + 'static,
    B: Send + 'static,
    F: FnMut(A) -> B + Send + 'static,
{
    s.map(move |chunk| chunk.map(&mut f)).boxed()
}

// ================================
// Full drains
// ================================

/// Concatenate all items of a synchronous string producer.
pub fn join<I>(iterable: I) -> String
where
    I: IntoIterator<Item = String>,
{
    iterable.into_iter().collect()
}

/// Concatenate all chunks of an asynchronous string producer.
///
/// Fully drains the source; the first failed iteration step aborts the
/// drain and is returned as-is.
pub async fn a_join(mut s: PullStream<String>) -> BodyResult<String> {
    let mut out = String::new();
    while let Some(chunk) = s.next().await {
        out.push_str(&chunk?);
    }
    Ok(out)
}

/// Gather all items of an asynchronous producer into a `Vec`, in arrival
/// order. Fully drains the source.
pub async fn collect<T>(mut s: PullStream<T>) -> BodyResult<Vec<T>>
where
    T: Send + 'static,
{
    let mut chunks = Vec::new();
    while let Some(item) = s.next().await {
        chunks.push(item?);
    }
    Ok(chunks)
}

// ================================
// Interleaving
// ================================

/// Alternate items from `xs` and `ys`, stopping as soon as EITHER side is
/// exhausted. This is deliberately shorter-wins, not zip-to-longest: the
/// typical use is structural rows interleaved with separators, where the
/// trailing separator must be dropped.
///
/// # Examples
/// ```
/// use stream_response::iter::interleave;
///
/// let rows = vec!["a", "b", "c"];
/// let seps = vec![",", ","];
/// let out: Vec<_> = interleave(rows, seps).collect();
/// assert_eq!(out, vec!["a", ",", "b", ",", "c"]);
/// ```
pub fn interleave<T, X, Y>(xs: X, ys: Y) -> impl Iterator<Item = T>
where
    X: IntoIterator<Item = T>,
    Y: IntoIterator<Item = T>,
{
    let mut itx = xs.into_iter();
    let mut ity = ys.into_iter();
    let mut from_first = true;
    let mut done = false;
    std::iter::from_fn(move || {
        if done {
            return None;
        }
        let next = if from_first { itx.next() } else { ity.next() };
        from_first = !from_first;
        if next.is_none() {
            done = true;
        }
        next
    })
}

/// Like [`interleave`], but each item of `ys` is itself an asynchronous
/// producer that is fully flattened into the output before the outer
/// pairing advances. The same early-stop rule applies to the outer pairing.
pub fn a_interleave_flatten_second<T, X, Y>(xs: X, ys: Y) -> AsyncIter<T>
where
    T: Send + 'static,
    X: IntoIterator<Item = T> + Send + 'static,
    X::IntoIter: Send,
    Y: IntoIterator<Item = AsyncIter<T>> + Send + 'static,
    Y::IntoIter: Send,
{
    stream! {
        let mut itx = xs.into_iter();
        let mut ity = ys.into_iter();
        loop {
            match itx.next() {
                Some(x) => yield x,
                None => break,
            }
            match ity.next() {
                Some(mut inner) => {
                    while let Some(y) = inner.next().await {
                        yield y;
                    }
                }
                None => break,
            }
        }
    }
    .boxed()
}

// ================================
// One-shot producers
// ================================

/// Wrap a single deferred value as a one-item asynchronous producer.
pub fn promise_to_async_iter<T, F>(fut: F) -> AsyncIter<T>
where
    T: Send + 'static,
    F: Future<Output = T> + Send + 'static,
{
    stream::once(fut).boxed()
}

/// Wrap a single fallible deferred value as a one-chunk pull stream.
/// Rejection becomes the stream's single failed read.
pub fn promise_to_stream<T, F>(fut: F) -> PullStream<T>
where
    T: Send + 'static,
    F: Future<Output = BodyResult<T>> + Send + 'static,
{
    stream::once(fut).boxed()
}
