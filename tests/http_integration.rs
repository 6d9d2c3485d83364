// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests against a mocked Govee API using wiremock.

use std::time::Duration;

use govee_lib::{
    Capabilities, CommandDispatcher, DeviceDirectory, DeviceFamily, DeviceRecord, Error, Lights,
    Session, ValueError,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-key";
const LAMP_MAC: &str = "AA:BB:CC:DD:EE:FF:00:11";
const PLUG_MAC: &str = "11:22:33:44:55:66:77:88";

fn session(server: &MockServer) -> Session {
    Session::builder(API_KEY)
        .with_base_url(server.uri())
        .build()
        .unwrap()
}

async fn mount_ping(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(status).set_body_string("Pong"))
        .mount(server)
        .await;
}

async fn mount_devices(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v1/devices"))
        .and(header("Govee-API-Key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "devices": [
                    {
                        "device": LAMP_MAC,
                        "deviceName": "Lamp",
                        "model": "H6159",
                        "controllable": true,
                        "retrievable": true,
                        "supportCmds": ["turn", "brightness", "color", "colorTem"]
                    },
                    {
                        "device": PLUG_MAC,
                        "deviceName": "Heater",
                        "model": "H5080",
                        "controllable": true,
                        "retrievable": true,
                        "supportCmds": ["turn"]
                    }
                ]
            },
            "message": "Success",
            "code": 200
        })))
        .mount(server)
        .await;
}

fn lamp_record() -> DeviceRecord {
    DeviceRecord {
        mac: LAMP_MAC.parse().unwrap(),
        name: "Lamp".to_string(),
        model: "H6159".to_string(),
        capabilities: Capabilities::from_commands(["turn", "brightness", "color", "colorTem"]),
        controllable: true,
        retrievable: true,
    }
}

// ============================================================================
// Directory
// ============================================================================

mod directory {
    use super::*;

    #[tokio::test]
    async fn lights_resolve_name_and_mac_to_model() {
        let server = MockServer::start().await;
        mount_ping(&server, 200).await;
        mount_devices(&server).await;

        let lights = session(&server).lights().await.unwrap();
        let directory = lights.directory();

        let (mac, model) = directory.resolve("Lamp").unwrap();
        assert_eq!(mac.as_str(), LAMP_MAC);
        assert_eq!(model, "H6159");

        let (mac, model) = directory.resolve(LAMP_MAC).unwrap();
        assert_eq!(mac.as_str(), LAMP_MAC);
        assert_eq!(model, "H6159");

        assert!(matches!(
            directory.resolve("Heater"),
            Err(Error::DeviceNotFound(_))
        ));
    }

    #[tokio::test]
    async fn plugs_see_only_non_color_devices() {
        let server = MockServer::start().await;
        mount_ping(&server, 200).await;
        mount_devices(&server).await;

        let plugs = session(&server).plugs().await.unwrap();
        assert_eq!(plugs.directory().names(), ["Heater"]);
        assert_eq!(plugs.directory().resolve("Heater").unwrap().1, "H5080");
    }

    #[tokio::test]
    async fn device_list_helpers() {
        let server = MockServer::start().await;
        mount_ping(&server, 200).await;
        mount_devices(&server).await;

        let session = session(&server);
        assert_eq!(session.device_count().await.unwrap(), 2);
        assert_eq!(session.device_names().await.unwrap(), ["Lamp", "Heater"]);

        let macs = session.device_macs().await.unwrap();
        assert_eq!(macs[0].as_str(), LAMP_MAC);
        assert_eq!(macs[1].as_str(), PLUG_MAC);
    }
}

// ============================================================================
// Control
// ============================================================================

mod control {
    use super::*;

    #[tokio::test]
    async fn turn_on_by_mac_sends_control_body() {
        let server = MockServer::start().await;
        mount_ping(&server, 200).await;
        mount_devices(&server).await;

        Mock::given(method("PUT"))
            .and(path("/v1/devices/control"))
            .and(header("Govee-API-Key", API_KEY))
            .and(header("Content-Type", "application/json"))
            .and(body_json(json!({
                "device": LAMP_MAC,
                "model": "H6159",
                "cmd": {"name": "turn", "value": "on"}
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"code": 200, "message": "Success", "data": {}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let lights = session(&server).lights().await.unwrap();
        let response = lights
            .turn_on("aa:bb:cc:dd:ee:ff:00:11")
            .await
            .unwrap();
        assert_eq!(
            response.parse::<serde_json::Value>().unwrap()["message"],
            "Success"
        );
    }

    #[tokio::test]
    async fn out_of_range_brightness_sends_nothing() {
        let server = MockServer::start().await;
        mount_ping(&server, 200).await;
        mount_devices(&server).await;

        Mock::given(method("PUT"))
            .and(path("/v1/devices/control"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let lights = session(&server).lights().await.unwrap();
        let before = server.received_requests().await.unwrap().len();

        let err = lights.set_brightness("Lamp", 150).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Value(ValueError::OutOfRange {
                field: "brightness",
                min: 0,
                max: 100,
                actual: 150,
            })
        ));

        assert_eq!(server.received_requests().await.unwrap().len(), before);
    }

    #[tokio::test]
    async fn service_unavailable_blocks_control() {
        let server = MockServer::start().await;
        mount_ping(&server, 503).await;

        Mock::given(method("PUT"))
            .and(path("/v1/devices/control"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let session = session(&server);
        let directory = DeviceDirectory::build([lamp_record()], DeviceFamily::LIGHTS);
        let lights = Lights::new(CommandDispatcher::new(session, directory));

        let err = lights.turn_on("Lamp").await.unwrap_err();
        assert!(matches!(
            err,
            Error::ServiceUnavailable { status: Some(503) }
        ));
    }

    #[tokio::test]
    async fn api_error_body_is_returned_verbatim() {
        let server = MockServer::start().await;
        mount_ping(&server, 200).await;
        mount_devices(&server).await;

        Mock::given(method("PUT"))
            .and(path("/v1/devices/control"))
            .respond_with(
                ResponseTemplate::new(400).set_body_string(r#"{"message":"invalid model"}"#),
            )
            .mount(&server)
            .await;

        let lights = session(&server).lights().await.unwrap();
        let err = lights
            .set_color_temperature("Lamp", 4000)
            .await
            .unwrap_err();

        assert_eq!(err.api_message().as_deref(), Some("invalid model"));
        match err {
            Error::Api { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body, r#"{"message":"invalid model"}"#);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn set_color_sends_rgb_object() {
        let server = MockServer::start().await;
        mount_ping(&server, 200).await;
        mount_devices(&server).await;

        Mock::given(method("PUT"))
            .and(path("/v1/devices/control"))
            .and(body_json(json!({
                "device": LAMP_MAC,
                "model": "H6159",
                "cmd": {"name": "color", "value": {"r": 255, "g": 128, "b": 0}}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 200})))
            .expect(1)
            .mount(&server)
            .await;

        let lights = session(&server).lights().await.unwrap();
        lights.set_color("Lamp", 255, 128, 0).await.unwrap();
    }

    #[tokio::test]
    async fn plug_state_uses_query_parameters() {
        let server = MockServer::start().await;
        mount_ping(&server, 200).await;
        mount_devices(&server).await;

        Mock::given(method("GET"))
            .and(path("/v1/devices/state"))
            .and(query_param("device", PLUG_MAC))
            .and(query_param("model", "H5080"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "device": PLUG_MAC,
                    "model": "H5080",
                    "properties": [{"online": true}, {"powerState": "on"}]
                },
                "message": "Success",
                "code": 200
            })))
            .expect(1)
            .mount(&server)
            .await;

        let plugs = session(&server).plugs().await.unwrap();
        let state = plugs.get_device_state("Heater").await.unwrap();
        assert_eq!(state.online(), Some(true));
        assert!(state.power().unwrap().is_on());
        assert_eq!(state.model(), Some("H5080"));
    }
}

// ============================================================================
// Session
// ============================================================================

mod session {
    use super::*;

    #[tokio::test]
    async fn ping_is_sent_without_api_key() {
        let server = MockServer::start().await;
        mount_ping(&server, 200).await;

        session(&server).check_liveness().await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url.path(), "/ping");
        assert!(requests[0].headers.get("govee-api-key").is_none());
    }

    #[tokio::test]
    async fn unreachable_api_is_service_unavailable() {
        // Nothing listens on port 1.
        let session = Session::builder(API_KEY)
            .with_base_url("http://127.0.0.1:1")
            .with_timeout(Duration::from_secs(2))
            .build()
            .unwrap();

        let err = session.device_list().await.unwrap_err();
        assert!(matches!(err, Error::ServiceUnavailable { status: None }));
    }

    #[tokio::test]
    async fn rate_limit_from_legacy_headers() {
        let server = MockServer::start().await;
        mount_ping(&server, 200).await;

        Mock::given(method("GET"))
            .and(path("/v1/devices"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("X-RateLimit-Remaining", "98")
                    .insert_header("X-RateLimit-Reset", "1700000000")
                    .insert_header("X-RateLimit-Limit", "100")
                    .set_body_json(json!({"data": {"devices": []}})),
            )
            .mount(&server)
            .await;

        let session = session(&server);
        assert!(!session.rate_limit().is_reported());
        assert_eq!(session.device_count().await.unwrap(), 0);

        let limit = session.rate_limit();
        assert_eq!(limit.remaining, Some(98));
        assert_eq!(limit.reset, Some(1_700_000_000));
        assert_eq!(limit.total, Some(100));
        assert_eq!(limit.reset_at().unwrap().timestamp(), 1_700_000_000);
    }

    #[tokio::test]
    async fn rate_limit_from_current_headers() {
        let server = MockServer::start().await;
        mount_ping(&server, 200).await;

        Mock::given(method("GET"))
            .and(path("/v1/devices"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("Rate-Limit-Remaining", "9999")
                    .insert_header("Rate-Limit-Reset", "1700000100")
                    .insert_header("Rate-Limit-Total", "10000")
                    .set_body_json(json!({"data": {"devices": []}})),
            )
            .mount(&server)
            .await;

        let session = session(&server);
        let clone = session.clone();
        session.device_list().await.unwrap();

        let limit = clone.rate_limit();
        assert_eq!(limit.remaining, Some(9999));
        assert_eq!(limit.reset, Some(1_700_000_100));
        assert_eq!(limit.total, Some(10_000));
    }

    #[tokio::test]
    async fn unauthorized_key_is_api_error() {
        let server = MockServer::start().await;
        mount_ping(&server, 200).await;

        Mock::given(method("GET"))
            .and(path("/v1/devices"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({"message": "Invalid API Key", "status": 401})),
            )
            .mount(&server)
            .await;

        let err = session(&server).lights().await.unwrap_err();
        assert!(matches!(err, Error::Api { status: 401, .. }));
        assert_eq!(err.api_message().as_deref(), Some("Invalid API Key"));
    }
}
