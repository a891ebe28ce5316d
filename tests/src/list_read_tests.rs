//! Reads against the mock list API: URL shape, headers, decoding, errors.

use anyhow::Result;
use serde::Deserialize;
use tms_lists::{Error, ListId, ListQuery};

use crate::utils::MockListApi;

const ROWS: &str = r#"{"value":[{"Title":"Basic Navigation","Id":1},{"Title":"Night Flying","Id":2}]}"#;

#[derive(Debug, Deserialize, PartialEq)]
struct Course {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Id")]
    id: u64,
}

#[tokio::test]
async fn test_read_sends_get_with_all_clauses() -> Result<()> {
    let api = MockListApi::start().await?;
    api.respond_with(200, ROWS);

    let query = ListQuery::new("Title,Id")
        .expand("Author")
        .filter("Status eq 'Open'");
    let read = api.client().read(&ListId::new("abc-123"), &query);
    assert_eq!(
        read.url(),
        format!(
            "{}web/Lists(guid'abc-123')/items?$select=Title,Id&$expand=Author&$filter=Status eq 'Open'&$top=5000",
            api.root
        )
    );

    let rows = read.fetch().await?;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1]["Title"], "Night Flying");

    let request = api.only_request();
    assert_eq!(request.method, axum::http::Method::GET);
    assert_eq!(request.path, "/_api/web/Lists(guid'abc-123')/items");
    assert_eq!(
        request.query_pairs(),
        vec![
            ("$select".to_string(), "Title,Id".to_string()),
            ("$expand".to_string(), "Author".to_string()),
            ("$filter".to_string(), "Status eq 'Open'".to_string()),
            ("$top".to_string(), "5000".to_string()),
        ]
    );
    assert_eq!(
        request.header("accept"),
        Some("application/json; odata=nometadata")
    );
    assert_eq!(request.header("x-requestdigest"), None);
    Ok(())
}

#[tokio::test]
async fn test_read_select_only() -> Result<()> {
    let api = MockListApi::start().await?;
    api.respond_with(200, r#"{"value":[]}"#);

    let rows = api
        .client()
        .read(&ListId::new("abc-123"), &ListQuery::new("Id"))
        .fetch()
        .await?;
    assert!(rows.is_empty());

    let keys: Vec<String> = api
        .only_request()
        .query_pairs()
        .into_iter()
        .map(|(k, _)| k)
        .collect();
    assert_eq!(keys, vec!["$select", "$top"]);
    Ok(())
}

#[tokio::test]
async fn test_fetch_as_decodes_rows() -> Result<()> {
    let api = MockListApi::start().await?;
    api.respond_with(200, ROWS);

    let courses: Vec<Course> = api
        .client()
        .read(&ListId::new("abc-123"), &ListQuery::new("Title,Id"))
        .fetch_as()
        .await?;
    assert_eq!(
        courses[0],
        Course {
            title: "Basic Navigation".into(),
            id: 1
        }
    );
    Ok(())
}

#[tokio::test]
async fn test_read_query_is_reusable() -> Result<()> {
    let api = MockListApi::start().await?;
    api.respond_with(200, ROWS);

    let url = tms_odata::build_list_url(
        api.client().root(),
        &ListId::new("abc-123"),
        "Title",
        None,
        None,
    );
    let read = api.client().read_url(url);
    read.fetch().await?;
    read.fetch().await?;
    assert_eq!(api.requests().len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_read_propagates_server_error() -> Result<()> {
    let api = MockListApi::start().await?;
    api.respond_with(400, r#"{"error":{"message":"bad $filter"}}"#);

    let err = api
        .client()
        .read(
            &ListId::new("abc-123"),
            &ListQuery::new("Id").filter("Status eq"),
        )
        .fetch()
        .await
        .unwrap_err();
    match err {
        Error::Status { status, body } => {
            assert_eq!(status, 400);
            assert!(body.contains("bad $filter"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_read_rejects_unexpected_shape() -> Result<()> {
    let api = MockListApi::start().await?;
    api.respond_with(200, r#"{"d":{"results":[]}}"#);

    let err = api
        .client()
        .read(&ListId::new("abc-123"), &ListQuery::new("Id"))
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode(_)));

    api.respond_with(200, "<html>sign in</html>");
    let err = api
        .client()
        .read(&ListId::new("abc-123"), &ListQuery::new("Id"))
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
    Ok(())
}
