use bytes::Bytes;
use futures_util::stream::{self, StreamExt};
use stream_response::iter::*;
use stream_response::BodyError;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn ok_stream(items: &[&str]) -> PullStream<String> {
    stream::iter(strings(items)).map(Ok).boxed()
}

#[test]
fn test_map_is_lazy_over_infinite_input() {
    let result: Vec<i32> = map(1.., |x| x * 2).take(4).collect();
    assert_eq!(result, vec![2, 4, 6, 8]);
}

#[tokio::test]
async fn test_a_map() {
    let s: AsyncIter<i32> = stream::iter(vec![1, 2, 3]).boxed();
    let result = a_map(s, |x| x + 10).collect::<Vec<_>>().await;
    assert_eq!(result, vec![11, 12, 13]);
}

#[tokio::test]
async fn test_a_try_map_passes_errors_through() {
    let s: PullStream<i32> = stream::iter(vec![
        Ok(1),
        Err(BodyError::Source("bad".to_string())),
        Ok(3),
    ])
    .boxed();
    let result = a_try_map(s, |x| x * 2).collect::<Vec<_>>().await;
    assert_eq!(
        result,
        vec![Ok(2), Err(BodyError::Source("bad".to_string())), Ok(6)]
    );
}

#[test]
fn test_join() {
    assert_eq!(join(strings(&["a", "b", "c"])), "abc");
    assert_eq!(join(Vec::<String>::new()), "");
}

#[tokio::test]
async fn test_a_join_drains_in_order() {
    let joined = a_join(ok_stream(&["0,0,0\n", "1,1,1\n", "2,2,2\n"]))
        .await
        .unwrap();
    assert_eq!(joined, "0,0,0\n1,1,1\n2,2,2\n");
}

#[tokio::test]
async fn test_a_join_propagates_first_error() {
    let s: PullStream<String> = stream::iter(vec![
        Ok("first".to_string()),
        Err(BodyError::Source("boom".to_string())),
        Ok("never pulled".to_string()),
    ])
    .boxed();
    assert_eq!(
        a_join(s).await.unwrap_err(),
        BodyError::Source("boom".to_string())
    );
}

#[tokio::test]
async fn test_collect_preserves_arrival_order() {
    let s: PullStream<i32> = stream::iter((0..5).map(Ok)).boxed();
    assert_eq!(collect(s).await.unwrap(), vec![0, 1, 2, 3, 4]);
}

#[tokio::test]
async fn test_collect_propagates_errors() {
    let s: PullStream<i32> =
        stream::iter(vec![Ok(1), Err(BodyError::Source("boom".to_string()))]).boxed();
    assert!(collect(s).await.is_err());
}

#[test]
fn test_interleave_stops_when_second_runs_out() {
    // Shorter-wins: xs still has items after ys ends, but the alternation
    // stops at the first exhausted side.
    let out: Vec<i32> = interleave(vec![1, 2, 3], vec![10, 20]).collect();
    assert_eq!(out, vec![1, 10, 2, 20, 3]);
}

#[test]
fn test_interleave_stops_when_first_runs_out() {
    let out: Vec<i32> = interleave(vec![1], vec![10, 20, 30]).collect();
    assert_eq!(out, vec![1, 10]);
}

#[test]
fn test_interleave_empty_first_yields_nothing() {
    let out: Vec<i32> = interleave(vec![], vec![10, 20]).collect();
    assert_eq!(out, Vec::<i32>::new());
}

#[tokio::test]
async fn test_a_interleave_flatten_second() {
    let seps: Vec<AsyncIter<String>> = vec![
        stream::iter(strings(&[", ", "and "])).boxed(),
        stream::iter(strings(&["; "])).boxed(),
    ];
    let out = a_interleave_flatten_second(strings(&["a", "b", "c"]), seps)
        .collect::<Vec<_>>()
        .await;
    assert_eq!(out, strings(&["a", ", ", "and ", "b", "; ", "c"]));
}

#[tokio::test]
async fn test_a_interleave_flatten_second_stops_on_outer_exhaustion() {
    let seps: Vec<AsyncIter<i32>> = vec![stream::iter(vec![10, 11]).boxed()];
    let out = a_interleave_flatten_second(vec![1, 2, 3], seps)
        .collect::<Vec<_>>()
        .await;
    // After the single inner producer is flattened, the outer pairing pulls
    // x = 2, then finds ys exhausted and stops; 3 is never pulled.
    assert_eq!(out, vec![1, 10, 11, 2]);
}

#[tokio::test]
async fn test_promise_to_async_iter_yields_once() {
    let out = promise_to_async_iter(async { 42 }).collect::<Vec<_>>().await;
    assert_eq!(out, vec![42]);
}

#[tokio::test]
async fn test_promise_to_stream_rejection_is_single_failed_read() {
    let mut s = promise_to_stream::<Bytes, _>(async {
        Err(BodyError::Source("rejected".to_string()))
    });
    assert_eq!(
        s.next().await.unwrap().unwrap_err(),
        BodyError::Source("rejected".to_string())
    );
    assert!(s.next().await.is_none());
}
