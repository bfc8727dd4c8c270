use bytes::Bytes;
use http::{header, HeaderMap, HeaderValue, Method, Uri};
use stream_response::{
    buffered_byte_request, buffered_request, byte_stream_request, stream_request, BodySource,
    RequestInit,
};

fn uri() -> Uri {
    Uri::from_static("https://example.com/upload")
}

#[tokio::test]
async fn test_no_body_means_no_default_content_type() {
    let req = stream_request(uri(), None, RequestInit::default());
    assert!(req.headers().get(header::CONTENT_TYPE).is_none());
    assert_eq!(req.into_body().drain().await.unwrap(), Bytes::new());
}

#[tokio::test]
async fn test_body_gets_default_content_type() {
    let req = stream_request(
        uri(),
        Some(BodySource::from("payload")),
        RequestInit::with_method(Method::POST),
    );
    assert_eq!(
        req.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/octet-stream"
    );
}

#[tokio::test]
async fn test_explicit_content_type_preserved() {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/x-ndjson"),
    );
    let init = RequestInit {
        method: Method::POST,
        headers,
    };
    let req = stream_request(uri(), Some(BodySource::from("{}\n")), init);
    assert_eq!(
        req.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/x-ndjson"
    );
}

#[tokio::test]
async fn test_method_uri_and_headers_pass_through() {
    let mut init = RequestInit::with_method(Method::PUT);
    init.headers
        .insert("authorization", HeaderValue::from_static("Bearer t"));
    let req = byte_stream_request(uri(), None, init);
    assert_eq!(req.method(), Method::PUT);
    assert_eq!(req.uri().path(), "/upload");
    assert_eq!(req.headers().get("authorization").unwrap(), "Bearer t");
}

#[tokio::test]
async fn test_streaming_text_request_body_is_readable() {
    let req = stream_request(
        uri(),
        Some(BodySource::from_iter(vec![
            "line 1\n".to_string(),
            "line 2\n".to_string(),
        ])),
        RequestInit::with_method(Method::POST),
    );
    let bytes = req.into_body().drain().await.unwrap();
    assert_eq!(&bytes[..], b"line 1\nline 2\n");
}

#[tokio::test]
async fn test_buffered_request_joins_before_encoding() {
    let req = buffered_request(
        uri(),
        Some(BodySource::from_iter(vec![
            "héllo ".to_string(),
            "🦀".to_string(),
        ])),
        RequestInit::with_method(Method::POST),
    );
    let bytes = req.into_body().drain().await.unwrap();
    assert_eq!(bytes, Bytes::from("héllo 🦀".as_bytes().to_vec()));
}

#[tokio::test]
async fn test_buffered_byte_request_concatenates_chunks() {
    let chunks = vec![Bytes::from_static(b"\x01"), Bytes::from_static(b"\x02\x03")];
    let req = buffered_byte_request(
        uri(),
        Some(BodySource::from_iter(chunks)),
        RequestInit::with_method(Method::POST),
    );
    let bytes = req.into_body().drain().await.unwrap();
    assert_eq!(bytes, Bytes::from_static(b"\x01\x02\x03"));
}
