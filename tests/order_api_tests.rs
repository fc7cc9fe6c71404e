//! HTTP integration tests for the order API
//!
//! Every test drives the full stack: JSON → axum router → validator chain →
//! terminal handler → in-memory store → JSON.

use axum::http::StatusCode;
use axum_test::TestServer;
use order_desk::prelude::*;
use serde_json::{Value, json};

const STATUS_MESSAGE: &str =
    "Order must have a status of pending, preparing, out-for-delivery, delivered";

fn seeded(id: &str, status: OrderStatus) -> Order {
    Order {
        id: id.to_string(),
        deliver_to: "308 Negra Arroyo Lane, Albuquerque, NM".to_string(),
        mobile_number: "(505) 143-3369".to_string(),
        status,
        dishes: vec![Dish::new(2).with_field("name", json!("Dolcelatte and chickpea spaghetti"))],
    }
}

fn make_server(orders: Vec<Order>) -> TestServer {
    let app = ServerBuilder::new()
        .with_store(InMemoryOrderStore::with_orders(orders))
        .build()
        .expect("router should build");
    TestServer::new(app)
}

fn valid_data() -> Value {
    json!({
        "deliverTo": "123 Main",
        "mobileNumber": "555-0100",
        "dishes": [{ "quantity": 2 }]
    })
}

async fn order_count(server: &TestServer) -> usize {
    let body: Value = server.get("/orders").await.json();
    body["data"].as_array().map(Vec::len).unwrap_or_default()
}

fn assert_error(response: axum_test::TestResponse, status: StatusCode, message: &str) {
    response.assert_status(status);
    let body: Value = response.json();
    assert_eq!(body, json!({ "error": message }));
}

// =============================================================================
// Create
// =============================================================================

mod create_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_returns_201_with_pending_order() {
        let server = make_server(vec![]);

        let response = server
            .post("/orders")
            .json(&json!({ "data": valid_data() }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["data"]["deliverTo"], "123 Main");
        assert_eq!(body["data"]["mobileNumber"], "555-0100");
        assert_eq!(body["data"]["dishes"], json!([{ "quantity": 2 }]));
        assert_eq!(body["data"]["status"], "pending");
        assert!(!body["data"]["id"].as_str().unwrap_or_default().is_empty());
    }

    #[tokio::test]
    async fn test_create_ids_are_unique() {
        let server = make_server(vec![]);
        let first: Value = server
            .post("/orders")
            .json(&json!({ "data": valid_data() }))
            .await
            .json();
        let second: Value = server
            .post("/orders")
            .json(&json!({ "data": valid_data() }))
            .await
            .json();

        assert_ne!(first["data"]["id"], second["data"]["id"]);
        assert_eq!(order_count(&server).await, 2);
    }

    #[tokio::test]
    async fn test_create_keeps_dish_passthrough_fields() {
        let server = make_server(vec![]);
        let mut data = valid_data();
        data["dishes"] = json!([{ "quantity": 1, "name": "Falafel", "price": 6 }]);

        let body: Value = server.post("/orders").json(&json!({ "data": data })).await.json();
        assert_eq!(
            body["data"]["dishes"][0],
            json!({ "quantity": 1, "name": "Falafel", "price": 6 })
        );
    }

    #[tokio::test]
    async fn test_create_stores_large_quantities_unchanged() {
        let server = make_server(vec![]);
        for quantity in [1e20, 18446744073709551616.0] {
            let mut data = valid_data();
            data["dishes"] = json!([{ "quantity": quantity }]);

            let response = server.post("/orders").json(&json!({ "data": data })).await;
            response.assert_status(StatusCode::CREATED);
            let body: Value = response.json();
            assert_eq!(body["data"]["dishes"][0]["quantity"].as_f64(), Some(quantity));
            assert_eq!(body["data"]["dishes"][0]["quantity"].as_u64(), None);
        }
    }

    #[tokio::test]
    async fn test_create_missing_fields_rejected() {
        let cases = [
            ("deliverTo", "Order must include a deliverTo"),
            ("mobileNumber", "Order must include a mobileNumber"),
            ("dishes", "Order must include a dish"),
        ];

        for (field, message) in cases {
            let server = make_server(vec![seeded("a", OrderStatus::Pending)]);
            let mut data = valid_data();
            data.as_object_mut().unwrap().remove(field);

            let response = server.post("/orders").json(&json!({ "data": data })).await;
            assert_error(response, StatusCode::BAD_REQUEST, message);
            assert_eq!(order_count(&server).await, 1);
        }
    }

    #[tokio::test]
    async fn test_create_empty_strings_rejected() {
        let server = make_server(vec![]);
        let mut data = valid_data();
        data["mobileNumber"] = json!("");

        let response = server.post("/orders").json(&json!({ "data": data })).await;
        assert_error(response, StatusCode::BAD_REQUEST, "Order must include a mobileNumber");
    }

    #[tokio::test]
    async fn test_create_dishes_empty_or_not_array_rejected() {
        for dishes in [json!([]), json!({ "quantity": 1 }), json!("dish")] {
            let server = make_server(vec![]);
            let mut data = valid_data();
            data["dishes"] = dishes;

            let response = server.post("/orders").json(&json!({ "data": data })).await;
            assert_error(response, StatusCode::BAD_REQUEST, "Order must include at least one dish");
            assert_eq!(order_count(&server).await, 0);
        }
    }

    #[tokio::test]
    async fn test_create_bad_quantities_name_the_dish() {
        for quantity in [json!(0), json!(-1), json!(1.5), json!("2"), Value::Null] {
            let server = make_server(vec![]);
            let mut data = valid_data();
            data["dishes"] = json!([{ "quantity": 1 }, { "quantity": quantity }]);

            let response = server.post("/orders").json(&json!({ "data": data })).await;
            assert_error(
                response,
                StatusCode::BAD_REQUEST,
                "Dish 1 must have a quantity that is an integer greater than 0",
            );
            assert_eq!(order_count(&server).await, 0);
        }
    }

    #[tokio::test]
    async fn test_create_without_data_envelope_rejected() {
        let server = make_server(vec![]);
        let response = server.post("/orders").json(&valid_data()).await;
        assert_error(response, StatusCode::BAD_REQUEST, "Order must include a deliverTo");
    }

    #[tokio::test]
    async fn test_create_malformed_json_rejected() {
        let server = make_server(vec![]);
        let response = server
            .post("/orders")
            .text("{\"data\": ")
            .content_type("application/json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert!(
            body["error"]
                .as_str()
                .unwrap_or_default()
                .starts_with("Invalid request body")
        );
    }
}

// =============================================================================
// Read / List
// =============================================================================

mod read_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_read_round_trip() {
        let server = make_server(vec![]);
        let created: Value = server
            .post("/orders")
            .json(&json!({ "data": valid_data() }))
            .await
            .json();
        let id = created["data"]["id"].as_str().unwrap();

        let response = server.get(&format!("/orders/{}", id)).await;
        response.assert_status(StatusCode::OK);
        let read: Value = response.json();
        assert_eq!(read, created);
    }

    #[tokio::test]
    async fn test_read_missing_order_404() {
        let server = make_server(vec![seeded("a", OrderStatus::Pending)]);
        let response = server.get("/orders/nope").await;
        assert_error(response, StatusCode::NOT_FOUND, "Order does not exist: nope");
    }

    #[tokio::test]
    async fn test_list_returns_every_order_in_order() {
        let server = make_server(vec![
            seeded("b", OrderStatus::Delivered),
            seeded("a", OrderStatus::Pending),
        ]);

        let response = server.get("/orders").await;
        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        let ids: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|order| order["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_list_empty() {
        let server = make_server(vec![]);
        let body: Value = server.get("/orders").await.json();
        assert_eq!(body, json!({ "data": [] }));
    }
}

// =============================================================================
// Update
// =============================================================================

mod update_tests {
    use super::*;

    fn update_data(status: &str) -> Value {
        let mut data = valid_data();
        data["status"] = json!(status);
        data
    }

    #[tokio::test]
    async fn test_update_replaces_order() {
        let server = make_server(vec![seeded("a", OrderStatus::Pending)]);
        let mut data = update_data("preparing");
        data["id"] = json!("a");

        let response = server.put("/orders/a").json(&json!({ "data": data })).await;
        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(
            body["data"],
            json!({
                "id": "a",
                "deliverTo": "123 Main",
                "mobileNumber": "555-0100",
                "status": "preparing",
                "dishes": [{ "quantity": 2 }]
            })
        );

        let read: Value = server.get("/orders/a").await.json();
        assert_eq!(read["data"], body["data"]);
    }

    #[tokio::test]
    async fn test_update_without_body_id_keeps_route_id() {
        let server = make_server(vec![seeded("a", OrderStatus::Pending)]);
        let response = server
            .put("/orders/a")
            .json(&json!({ "data": update_data("out-for-delivery") }))
            .await;
        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["data"]["id"], "a");
    }

    #[tokio::test]
    async fn test_update_missing_order_404() {
        let server = make_server(vec![]);
        let response = server
            .put("/orders/ghost")
            .json(&json!({ "data": update_data("preparing") }))
            .await;
        assert_error(response, StatusCode::NOT_FOUND, "Order does not exist: ghost");
    }

    #[tokio::test]
    async fn test_update_id_mismatch_rejected_and_store_unchanged() {
        let original = seeded("a", OrderStatus::Pending);
        let server = make_server(vec![original.clone()]);

        // Invalid other fields too; the id check still decides the outcome.
        let response = server
            .put("/orders/a")
            .json(&json!({ "data": { "id": "b", "dishes": [] } }))
            .await;
        assert_error(
            response,
            StatusCode::BAD_REQUEST,
            "Order id does not match route id. Order: b, Route: a",
        );

        let read: Value = server.get("/orders/a").await.json();
        assert_eq!(read["data"], serde_json::to_value(&original).unwrap());
    }

    #[tokio::test]
    async fn test_update_numeric_body_id_rejected() {
        let original = seeded("5", OrderStatus::Pending);
        let server = make_server(vec![original.clone()]);
        let mut data = update_data("preparing");
        data["id"] = json!(5);

        let response = server.put("/orders/5").json(&json!({ "data": data })).await;
        assert_error(
            response,
            StatusCode::BAD_REQUEST,
            "Order id does not match route id. Order: 5, Route: 5",
        );

        let read: Value = server.get("/orders/5").await.json();
        assert_eq!(read["data"], serde_json::to_value(&original).unwrap());
    }

    #[tokio::test]
    async fn test_update_invalid_status_lists_allowed_values() {
        let server = make_server(vec![seeded("a", OrderStatus::Pending)]);
        for status in ["invalid", "", "shipped"] {
            let response = server
                .put("/orders/a")
                .json(&json!({ "data": update_data(status) }))
                .await;
            assert_error(response, StatusCode::BAD_REQUEST, STATUS_MESSAGE);
        }
    }

    #[tokio::test]
    async fn test_update_missing_status_rejected() {
        let server = make_server(vec![seeded("a", OrderStatus::Pending)]);
        let response = server
            .put("/orders/a")
            .json(&json!({ "data": valid_data() }))
            .await;
        assert_error(response, StatusCode::BAD_REQUEST, STATUS_MESSAGE);
    }

    #[tokio::test]
    async fn test_update_delivered_order_rejected_idempotently() {
        let original = seeded("a", OrderStatus::Delivered);
        let server = make_server(vec![original.clone()]);

        for _ in 0..2 {
            let response = server
                .put("/orders/a")
                .json(&json!({ "data": update_data("delivered") }))
                .await;
            assert_error(response, StatusCode::BAD_REQUEST, "A delivered order cannot be changed");
        }

        let read: Value = server.get("/orders/a").await.json();
        assert_eq!(read["data"], serde_json::to_value(&original).unwrap());
    }

    #[tokio::test]
    async fn test_update_status_cannot_move_backwards() {
        let server = make_server(vec![seeded("a", OrderStatus::OutForDelivery)]);
        let response = server
            .put("/orders/a")
            .json(&json!({ "data": update_data("preparing") }))
            .await;
        assert_error(
            response,
            StatusCode::BAD_REQUEST,
            "Order status cannot move from out-for-delivery back to preparing",
        );
    }

    #[tokio::test]
    async fn test_update_bad_dish_rejected() {
        let server = make_server(vec![seeded("a", OrderStatus::Pending)]);
        let mut data = update_data("preparing");
        data["dishes"] = json!([{ "quantity": "2" }]);

        let response = server.put("/orders/a").json(&json!({ "data": data })).await;
        assert_error(
            response,
            StatusCode::BAD_REQUEST,
            "Dish 0 must have a quantity that is an integer greater than 0",
        );
    }
}

// =============================================================================
// Delete
// =============================================================================

mod delete_tests {
    use super::*;

    #[tokio::test]
    async fn test_delete_pending_order() {
        let server = make_server(vec![
            seeded("a", OrderStatus::Pending),
            seeded("b", OrderStatus::Preparing),
        ]);

        let response = server.delete("/orders/a").await;
        response.assert_status(StatusCode::NO_CONTENT);
        assert!(response.as_bytes().is_empty());

        assert_eq!(order_count(&server).await, 1);
        server.get("/orders/a").await.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_non_pending_rejected() {
        let server = make_server(vec![seeded("a", OrderStatus::Preparing)]);

        let response = server.delete("/orders/a").await;
        assert_error(
            response,
            StatusCode::BAD_REQUEST,
            "An order cannot be deleted unless it is pending",
        );
        assert_eq!(order_count(&server).await, 1);
    }

    #[tokio::test]
    async fn test_delete_missing_order_404() {
        let server = make_server(vec![]);
        let response = server.delete("/orders/ghost").await;
        assert_error(response, StatusCode::NOT_FOUND, "Order does not exist: ghost");
    }
}

// =============================================================================
// Misc routes
// =============================================================================

mod route_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let server = make_server(vec![]);
        let response = server.get("/health").await;
        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_unknown_path_returns_json_404() {
        let server = make_server(vec![]);
        let response = server.get("/dishes").await;
        assert_error(response, StatusCode::NOT_FOUND, "Path not found: /dishes");
    }

    #[tokio::test]
    async fn test_seeded_from_config() {
        let config = OrdersConfig::from_yaml_str(
            r#"
seed_orders:
  - id: abc
    deliverTo: "Rick Sanchez (C-132)"
    mobileNumber: "(202) 456-1111"
    dishes:
      - quantity: 1
"#,
        )
        .unwrap();

        let app = ServerBuilder::new()
            .with_store(InMemoryOrderStore::from_config(&config))
            .build()
            .unwrap();
        let server = TestServer::new(app);

        let body: Value = server.get("/orders/abc").await.json();
        assert_eq!(body["data"]["status"], "pending");
    }
}
