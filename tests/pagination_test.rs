use axum_test::TestServer;
use serde_json::Value;

mod common;
use common::{create_customer, setup_test_server};

async fn seed(server: &TestServer, count: usize) {
    for i in 0..count {
        create_customer(server, &format!("고객{}", i), &format!("0101234{:04}", i)).await;
    }
}

#[tokio::test]
async fn test_pagination_basic() {
    let server = setup_test_server().await;
    seed(&server, 25).await;

    let response = server.get("/customer").add_query_param("size", 10).await;
    response.assert_status_ok();

    let page: Value = response.json();
    assert_eq!(page["content"].as_array().unwrap().len(), 10);
    assert_eq!(page["totalElements"], 25);
    assert_eq!(page["totalPages"], 3);
    assert_eq!(page["size"], 10);
    assert_eq!(page["number"], 0);
    assert_eq!(page["numberOfElements"], 10);
    assert_eq!(page["first"], true);
    assert_eq!(page["last"], false);
    assert_eq!(page["empty"], false);
    assert_eq!(page["pageable"]["pageNumber"], 0);
    assert_eq!(page["pageable"]["pageSize"], 10);
    assert_eq!(page["pageable"]["offset"], 0);
    assert_eq!(page["pageable"]["paged"], true);
}

#[tokio::test]
async fn test_last_page_is_partial() {
    let server = setup_test_server().await;
    seed(&server, 25).await;

    let page: Value = server
        .get("/customer")
        .add_query_param("page", 2)
        .add_query_param("size", 10)
        .await
        .json();

    assert_eq!(page["content"].as_array().unwrap().len(), 5);
    assert_eq!(page["numberOfElements"], 5);
    assert_eq!(page["pageable"]["offset"], 20);
    assert_eq!(page["first"], false);
    assert_eq!(page["last"], true);

    let page: Value = server
        .get("/customer")
        .add_query_param("page", 9)
        .add_query_param("size", 10)
        .await
        .json();
    assert_eq!(page["empty"], true);
    assert_eq!(page["totalElements"], 25);
}

#[tokio::test]
async fn test_huge_page_index_is_empty_last_page() {
    let server = setup_test_server().await;
    seed(&server, 1).await;

    let response = server
        .get("/customer")
        .add_query_param("page", i32::MAX)
        .add_query_param("size", 10)
        .await;
    response.assert_status_ok();

    let page: Value = response.json();
    assert_eq!(page["number"], i32::MAX);
    assert_eq!(page["content"].as_array().unwrap().len(), 0);
    assert_eq!(page["empty"], true);
    assert_eq!(page["last"], true);
    assert_eq!(page["totalElements"], 1);

    // Past the 32-bit range the index is treated as unparseable
    let response = server
        .get("/customer")
        .add_query_param("page", i64::MAX)
        .add_query_param("size", 10)
        .await;
    response.assert_status_ok();

    let page: Value = response.json();
    assert_eq!(page["number"], 0);
    assert_eq!(page["content"].as_array().unwrap().len(), 1);
    assert_eq!(page["last"], true);
}

#[tokio::test]
async fn test_default_and_invalid_parameters() {
    let server = setup_test_server().await;
    seed(&server, 25).await;

    let page: Value = server.get("/customer").await.json();
    assert_eq!(page["size"], 20);
    assert_eq!(page["content"].as_array().unwrap().len(), 20);

    let page: Value = server
        .get("/customer")
        .add_query_param("page", -3)
        .add_query_param("size", "abc")
        .await
        .json();
    assert_eq!(page["number"], 0);
    assert_eq!(page["size"], 20);
}

#[tokio::test]
async fn test_default_order_is_by_id() {
    let server = setup_test_server().await;
    seed(&server, 5).await;

    let page: Value = server.get("/customer").await.json();
    let ids: Vec<i64> = page["content"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();

    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
    assert_eq!(page["sort"]["unsorted"], true);
}

#[tokio::test]
async fn test_sort_by_name_descending() {
    let server = setup_test_server().await;
    create_customer(&server, "가", "01000000001").await;
    create_customer(&server, "다", "01000000002").await;
    create_customer(&server, "나", "01000000003").await;

    let page: Value = server
        .get("/customer")
        .add_query_param("sort", "name,desc")
        .await
        .json();

    let names: Vec<&str> = page["content"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["다", "나", "가"]);
    assert_eq!(page["sort"]["sorted"], true);
}

#[tokio::test]
async fn test_unknown_sort_property_is_ignored() {
    let server = setup_test_server().await;
    seed(&server, 3).await;

    let response = server
        .get("/customer")
        .add_query_param("sort", "password,desc")
        .await;
    response.assert_status_ok();

    let page: Value = response.json();
    assert_eq!(page["totalElements"], 3);
    assert_eq!(page["sort"]["sorted"], false);
}
