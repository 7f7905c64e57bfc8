mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{send, setup_app};

#[tokio::test]
async fn create_products_round_trips_fields() -> anyhow::Result<()> {
    let (app, _) = setup_app().await?;

    let res = send(
        &app,
        Method::POST,
        "/products",
        Some(json!([{"name":"A","price":100,"description":"d","slug":"a","url":"u"}])),
    )
    .await;
    assert_eq!(res.status, StatusCode::OK);

    let body = res.json();
    let created = body.as_array().expect("array");
    assert_eq!(created.len(), 1);
    let product = created[0].as_object().expect("object");
    assert!(product["id"].is_i64());

    let mut keys: Vec<&str> = product.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["description", "id", "name", "price", "slug", "url"]);

    let id = product["id"].clone();
    assert_eq!(
        created[0],
        json!({"id": id, "name":"A","price":100,"description":"d","slug":"a","url":"u"})
    );
    Ok(())
}

#[tokio::test]
async fn get_by_slug_returns_created_product() -> anyhow::Result<()> {
    let (app, _) = setup_app().await?;

    let created = send(
        &app,
        Method::POST,
        "/products",
        Some(json!([
            {"name":"Mug","price":1200,"description":"ceramic","slug":"mug","url":null},
            {"name":"Cap","price":900,"description":null,"slug":"cap","url":"http://img/cap"}
        ])),
    )
    .await
    .json();

    let res = send(&app, Method::GET, "/products/cap", None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json(), created[1]);
    assert_eq!(res.json()["description"], json!(null));
    Ok(())
}

#[tokio::test]
async fn unknown_slug_returns_empty_object() -> anyhow::Result<()> {
    let (app, _) = setup_app().await?;

    let res = send(&app, Method::GET, "/products/does-not-exist", None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json(), json!({}));
    Ok(())
}

#[tokio::test]
async fn list_returns_every_created_product() -> anyhow::Result<()> {
    let (app, _) = setup_app().await?;

    let empty = send(&app, Method::GET, "/products", None).await;
    assert_eq!(empty.json(), json!([]));

    let batch: Vec<_> = (0..5)
        .map(|i| json!({"name": format!("P{i}"), "price": 10 * i, "description": "x", "slug": format!("p-{i}"), "url": "u"}))
        .collect();
    send(&app, Method::POST, "/products", Some(json!(batch))).await;

    let res = send(&app, Method::GET, "/products", None).await;
    let mut slugs: Vec<String> = res
        .json()
        .as_array()
        .expect("array")
        .iter()
        .map(|p| p["slug"].as_str().unwrap_or_default().to_string())
        .collect();
    slugs.sort();
    assert_eq!(slugs, ["p-0", "p-1", "p-2", "p-3", "p-4"]);
    Ok(())
}

#[tokio::test]
async fn duplicate_slug_rejects_whole_batch() -> anyhow::Result<()> {
    let (app, _) = setup_app().await?;

    send(
        &app,
        Method::POST,
        "/products",
        Some(json!([{"name":"A","price":1,"description":"d","slug":"taken","url":"u"}])),
    )
    .await;

    let res = send(
        &app,
        Method::POST,
        "/products",
        Some(json!([
            {"name":"B","price":2,"description":"d","slug":"fresh","url":"u"},
            {"name":"C","price":3,"description":"d","slug":"taken","url":"u"}
        ])),
    )
    .await;
    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);

    let fresh = send(&app, Method::GET, "/products/fresh", None).await;
    assert_eq!(fresh.json(), json!({}));

    let all = send(&app, Method::GET, "/products", None).await.json();
    assert_eq!(all.as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn malformed_body_is_a_client_error() -> anyhow::Result<()> {
    let (app, _) = setup_app().await?;

    let res = send(&app, Method::POST, "/products", Some(json!([{"name":"A"}]))).await;
    assert!(res.status.is_client_error());
    Ok(())
}

#[tokio::test]
async fn unknown_route_is_not_found() -> anyhow::Result<()> {
    let (app, _) = setup_app().await?;

    let res = send(&app, Method::GET, "/nope", None).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.json()["message"], "Not Found");
    assert_eq!(res.json()["data"]["path"], "/nope");
    Ok(())
}

#[tokio::test]
async fn omitted_optional_fields_are_null() -> anyhow::Result<()> {
    let (app, _) = setup_app().await?;

    let res = send(
        &app,
        Method::POST,
        "/products",
        Some(json!([{"name":"Bare","price":7,"slug":"bare"}])),
    )
    .await;
    assert_eq!(res.status, StatusCode::OK);

    let created = &res.json()[0];
    assert_eq!(created["description"], json!(null));
    assert_eq!(created["url"], json!(null));
    Ok(())
}
