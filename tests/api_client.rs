//! Wiremock tests for the booking API client: endpoint shapes, error
//! mapping, and circuit breaker behaviour.

use fake::faker::name::en::Name;
use fake::Fake;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use seat_booking::client::{ApiError, CircuitState};
use seat_booking::config::{
    ApiConfig, AppConfig, BookingConfig, CircuitBreakerConfig, Config, GridConfig,
};
use seat_booking::layout::LayoutEditor;
use seat_booking::models::{EdgeSide, ElementKind, Room, RoomLayout, Seat};
use seat_booking::ApiClient;

fn test_config(base_url: String) -> Config {
    Config {
        app: AppConfig {
            environment: "test".to_string(),
            rust_log: "seat_booking=debug".to_string(),
        },
        api: ApiConfig {
            base_url,
            timeout_seconds: 5,
        },
        booking: BookingConfig::default(),
        grid: GridConfig::default(),
        circuit_breaker: CircuitBreakerConfig {
            failure_threshold: 2,
            timeout_seconds: 60,
        },
    }
}

async fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::from_config(&test_config(server.uri()))
}

#[tokio::test]
async fn branches_deserialize_with_their_wire_names() {
    let server = MockServer::start().await;
    let blocked_by: String = Name().fake();

    Mock::given(method("GET"))
        .and(path("/branches"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1,
            "name": "Koramangala — 5th Block",
            "address": "Bangalore",
            "floors": [{
                "floorNumber": 2,
                "rooms": [{
                    "id": "room-1",
                    "roomNo": "201",
                    "name": "Reading Hall",
                    "isAc": true,
                    "price_daily": 120,
                    "pricing_tiers": {
                        "price_1w": 500, "price_2w": 900,
                        "price_3w": 1200, "price_1m": 1500
                    },
                    "seats": [{
                        "id": "s-1",
                        "seatNo": "1",
                        "available": false,
                        "isBlocked": true,
                        "blockInfo": {
                            "name": blocked_by,
                            "phone": "9900000000",
                            "startDate": "2025-03-01",
                            "endDate": "2025-03-29",
                            "bookedAt": "2025-02-20"
                        }
                    }]
                }]
            }]
        }])))
        .mount(&server)
        .await;

    let branches = client_for(&server).await.get_branches().await.unwrap();

    assert_eq!(branches.len(), 1);
    assert_eq!(branches[0].short_name(), "Koramangala");
    let room = &branches[0].floors[0].rooms[0];
    assert!(room.is_ac);
    assert_eq!(room.pricing_tiers.unwrap().price_1m, 1500);
    assert_eq!(room.seats[0].is_blocked, Some(true));
    assert!(room.seats[0].block_info.is_some());
}

#[tokio::test]
async fn room_layout_round_trips_through_the_editor() -> anyhow::Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rooms/room-1/layout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "gridCols": 8,
            "gridRows": 10,
            "seatPositions": [
                { "seatId": "s-1", "gridRow": 0, "gridCol": 0 }
            ],
            "elements": [
                { "id": 4, "roomId": "room-1", "type": "wall",
                  "gridRow": 2, "gridCol": 2, "side": "right" }
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let layout = client.get_room_layout("room-1").await?;
    assert!(layout.is_wall_edge(2, 3, EdgeSide::Left));

    let room = Room {
        id: "room-1".to_string(),
        room_no: "201".to_string(),
        name: "Reading Hall".to_string(),
        seats: vec![
            Seat {
                id: "s-1".to_string(),
                seat_no: "1".to_string(),
                available: true,
                is_blocked: None,
                label: None,
                block_info: None,
            },
            Seat {
                id: "s-2".to_string(),
                seat_no: "2".to_string(),
                available: true,
                is_blocked: None,
                label: None,
                block_info: None,
            },
        ],
        is_ac: false,
        seats_count: None,
        price_daily: None,
        pricing_tiers: None,
    };
    let mut editor = LayoutEditor::from_layout(&room, layout, GridConfig::default());
    editor.toggle_seat(1, 1)?;
    editor.toggle_edge(0, 0, EdgeSide::Top, ElementKind::Entrance)?;

    // The save payload carries the binding wire names and no server ids.
    Mock::given(method("PUT"))
        .and(path("/rooms/room-1/layout"))
        .and(body_json(json!({
            "gridCols": 8,
            "gridRows": 10,
            "seatPositions": [
                { "seatId": "s-1", "gridRow": 0, "gridCol": 0 },
                { "seatId": "s-2", "gridRow": 1, "gridCol": 1 }
            ],
            "elements": [
                { "type": "wall", "gridRow": 2, "gridCol": 2, "side": "right" },
                { "type": "entrance", "gridRow": 0, "gridCol": 0, "side": "top" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client.save_room_layout("room-1", &editor.to_layout()).await?;
    Ok(())
}

#[tokio::test]
async fn pricing_rule_updates_use_the_rule_shape() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/pricing-rules"))
        .and(body_json(json!({
            "branchId": 3,
            "isAc": true,
            "tiers": {
                "price_1w": 600, "price_2w": 1000,
                "price_3w": 1400, "price_1m": 1800
            }
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let tiers = seat_booking::models::PricingConfig {
        price_1w: 600,
        price_2w: 1000,
        price_3w: 1400,
        price_1m: 1800,
    };
    client_for(&server)
        .await
        .update_pricing_rule(3, true, &tiers)
        .await
        .unwrap();
}

#[tokio::test]
async fn holidays_accept_null_branch_ids() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/holidays"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "h-1", "date": "2025-01-26", "branchId": null, "reason": "Republic Day" },
            { "id": "h-2", "date": "2025-02-10", "branchId": 2, "reason": "Maintenance" }
        ])))
        .mount(&server)
        .await;

    let holidays = client_for(&server).await.get_holidays().await.unwrap();
    assert!(holidays[0].is_global());
    assert!(!holidays[1].is_global());
    assert!(holidays[1].applies_to(2));
}

#[tokio::test]
async fn catalog_loads_branches_and_rules_together() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/branches"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pricing-rules"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "branchId": 1, "isAc": false,
              "tiers": { "price_1w": 500, "price_2w": 900,
                         "price_3w": 1200, "price_1m": 1500 } }
        ])))
        .mount(&server)
        .await;

    let (branches, rules) = client_for(&server).await.load_catalog().await.unwrap();
    assert!(branches.is_empty());
    assert_eq!(rules[0].branch_id, 1);
}

#[tokio::test]
async fn non_success_statuses_surface_as_status_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rooms/missing/layout"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .get_room_layout("missing")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::Status { status } if status.as_u16() == 404
    ));
}

#[tokio::test]
async fn repeated_failures_open_the_circuit_breaker() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/branches"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server).await;

    // Threshold is 2: two real failures, then the breaker blocks.
    assert!(matches!(
        client.get_branches().await.unwrap_err(),
        ApiError::Status { .. }
    ));
    assert!(matches!(
        client.get_branches().await.unwrap_err(),
        ApiError::Status { .. }
    ));
    assert_eq!(client.circuit_state(), CircuitState::Open);
    assert!(matches!(
        client.get_branches().await.unwrap_err(),
        ApiError::Unavailable
    ));
}

#[tokio::test]
async fn save_errors_propagate_without_panicking() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/rooms/room-9/layout"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let layout = RoomLayout::empty(8, 10);
    let err = client_for(&server)
        .await
        .save_room_layout("room-9", &layout)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Status { status } if status.as_u16() == 503));
}
