//! Storefront listing behavior: paging, sorting, filtering, caching.

mod common;

use axum::http::{StatusCode, header};
use serde_json::json;

use common::{read_json, spawn_app};

#[tokio::test]
async fn listing_defaults_echo_in_meta_and_cache_long() {
    let app = spawn_app().await;
    let token = app.admin_token().await;
    let refs = app.seed_lookups(&token).await;

    for (name, price) in [("Alpha", "50.00"), ("Beta", "20.00"), ("Gamma", "35.00")] {
        app.create_car(&token, name, price, refs).await;
    }

    let response = app.get("/api/cars/paginated").await;
    assert_eq!(response.status(), StatusCode::OK);
    let cache = response
        .headers()
        .get(header::CACHE_CONTROL)
        .expect("cache header")
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(cache, "public, s-maxage=600, stale-while-revalidate=1200");

    let body = read_json(response).await;
    assert_eq!(body["meta"]["page"], 1);
    assert_eq!(body["meta"]["pageSize"], 10);
    assert_eq!(body["meta"]["totalItems"], 3);
    assert_eq!(body["meta"]["totalPages"], 1);
    assert_eq!(body["meta"]["sort"], "price");
    assert_eq!(body["meta"]["order"], "asc");

    // Default sort is ascending price
    let names: Vec<&str> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Beta", "Gamma", "Alpha"]);

    // Nested lookup objects are denormalized onto each item
    let first = &body["items"][0];
    assert_eq!(first["brand"]["name"], "Porsche");
    assert_eq!(first["color"]["rgb"], "#D5001C");
    assert!(first["thumbnail"].is_null());
    assert_eq!(first["images"], json!([]));
}

#[tokio::test]
async fn malformed_query_parameters_are_rejected() {
    let app = spawn_app().await;

    for query in [
        "page=0",
        "page=abc",
        "limit=0",
        "limit=51",
        "limit=-2",
        "sort=password",
        "order=sideways",
        "brandId=abc",
    ] {
        let response = app.get(&format!("/api/cars/paginated?{query}")).await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "expected 400 for ?{query}"
        );
        let body = read_json(response).await;
        assert_eq!(body["error"], "validation_error", "for ?{query}");
    }

    // The documented maximum is fine
    let ok = app.get("/api/cars/paginated?limit=50").await;
    assert_eq!(ok.status(), StatusCode::OK);
}

#[tokio::test]
async fn price_sort_is_numeric_and_desc_reverses_it() {
    let app = spawn_app().await;
    let token = app.admin_token().await;
    let refs = app.seed_lookups(&token).await;

    // Lexicographic order would put "10.00" before "9.99"
    for (name, price) in [
        ("Mid", "10.00"),
        ("Cheap", "9.99"),
        ("Expensive", "100.50"),
        ("Budget", "2.00"),
    ] {
        app.create_car(&token, name, price, refs).await;
    }

    let asc = read_json(app.get("/api/cars/paginated?sort=price&order=asc").await).await;
    let asc_names: Vec<&str> = asc["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(asc_names, vec!["Budget", "Cheap", "Mid", "Expensive"]);

    let desc = read_json(app.get("/api/cars/paginated?sort=price&order=desc").await).await;
    let desc_names: Vec<&str> = desc["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    let mut reversed = asc_names.clone();
    reversed.reverse();
    assert_eq!(desc_names, reversed);
}

#[tokio::test]
async fn price_pages_are_disjoint_and_cover_everything() {
    let app = spawn_app().await;
    let token = app.admin_token().await;
    let refs = app.seed_lookups(&token).await;

    let mut created = Vec::new();
    for i in 0..75u32 {
        // Insertion order deliberately differs from price order
        let price = format!("{}.25", (i * 37) % 75);
        let id = app
            .create_car(&token, &format!("Car {i}"), &price, refs)
            .await;
        created.push(id);
    }

    let page1 = read_json(app.get("/api/cars/paginated?limit=50&page=1").await).await;
    let page2 = read_json(app.get("/api/cars/paginated?limit=50&page=2").await).await;

    assert_eq!(page1["meta"]["totalItems"], 75);
    assert_eq!(page1["meta"]["totalPages"], 2);
    assert_eq!(page1["items"].as_array().unwrap().len(), 50);
    assert_eq!(page2["items"].as_array().unwrap().len(), 25);

    let ids1: Vec<i64> = page1["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    let ids2: Vec<i64> = page2["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();

    let mut all: Vec<i64> = ids1.iter().chain(ids2.iter()).copied().collect();
    assert_eq!(all.len(), 75);
    all.sort_unstable();
    all.dedup();
    assert_eq!(all.len(), 75, "pages overlap or drop items");

    let mut expected = created.clone();
    expected.sort_unstable();
    assert_eq!(all, expected);

    // Prices across the page boundary are still ascending
    let prices: Vec<f64> = page1["items"]
        .as_array()
        .unwrap()
        .iter()
        .chain(page2["items"].as_array().unwrap().iter())
        .map(|c| c["price"].as_str().unwrap().parse::<f64>().unwrap())
        .collect();
    assert!(prices.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn search_matches_name_and_description_case_insensitively() {
    let app = spawn_app().await;
    let token = app.admin_token().await;
    let refs = app.seed_lookups(&token).await;
    let (_, model_id, color_id, status_id) = refs;

    let other_brand = app
        .create_entity("/api/brands", json!({"name": "Ferrari"}), &token)
        .await;

    app.create_car(&token, "Porsche 911 GT3", "200.00", refs).await;
    app.create_entity(
        "/api/cars",
        json!({
            "name": "F40",
            "price": "300.00",
            "scale": "1:18",
            "description": "The legendary TURBO flagship",
            "brandId": other_brand,
            "modelId": model_id,
            "colorId": color_id,
            "statusId": status_id,
        }),
        &token,
    )
    .await;
    app.create_car(&token, "Plain Car", "10.00", refs).await;

    // Case-insensitive name match
    let by_name = read_json(app.get("/api/cars/paginated?search=gt3").await).await;
    assert_eq!(by_name["meta"]["totalItems"], 1);
    assert_eq!(by_name["items"][0]["name"], "Porsche 911 GT3");

    // Case-insensitive description match
    let by_desc = read_json(app.get("/api/cars/paginated?search=turbo").await).await;
    assert_eq!(by_desc["meta"]["totalItems"], 1);
    assert_eq!(by_desc["items"][0]["name"], "F40");

    // Equality filter by brand
    let by_brand =
        read_json(app.get(&format!("/api/cars/paginated?brandId={other_brand}")).await).await;
    assert_eq!(by_brand["meta"]["totalItems"], 1);
    assert_eq!(by_brand["items"][0]["brand"]["name"], "Ferrari");

    // Search and filter combined: no overlap means empty page
    let combined = read_json(
        app.get(&format!("/api/cars/paginated?search=gt3&brandId={other_brand}"))
            .await,
    )
    .await;
    assert_eq!(combined["meta"]["totalItems"], 0);
    assert_eq!(combined["items"], json!([]));
}

#[tokio::test]
async fn searches_and_deep_pages_cache_short() {
    let app = spawn_app().await;

    for query in ["search=gt3", "page=2"] {
        let response = app.get(&format!("/api/cars/paginated?{query}")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let cache = response
            .headers()
            .get(header::CACHE_CONTROL)
            .expect("cache header")
            .to_str()
            .unwrap()
            .to_string();
        assert_eq!(
            cache, "public, s-maxage=60, stale-while-revalidate=120",
            "for ?{query}"
        );
    }
}

#[tokio::test]
async fn popular_is_the_first_twelve_catalog_entries() {
    let app = spawn_app().await;
    let token = app.admin_token().await;
    let refs = app.seed_lookups(&token).await;

    let mut created = Vec::new();
    for i in 0..15u32 {
        let id = app
            .create_car(&token, &format!("Car {i}"), "10.00", refs)
            .await;
        created.push(id);
    }

    let body = read_json(app.get("/api/cars/popular").await).await;
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, created[..12].to_vec());
}

#[tokio::test]
async fn car_detail_returns_404_for_unknown_id() {
    let app = spawn_app().await;
    let token = app.admin_token().await;
    let refs = app.seed_lookups(&token).await;

    let id = app.create_car(&token, "Solo", "42.00", refs).await;

    let found = app.get(&format!("/api/cars/{id}")).await;
    assert_eq!(found.status(), StatusCode::OK);
    let body = read_json(found).await;
    assert_eq!(body["name"], "Solo");
    assert_eq!(body["price"], "42.00");

    let missing = app.get("/api/cars/999999999").await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_json(missing).await["error"], "not_found");
}
