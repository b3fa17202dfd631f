//! Unit tests for tc-query.

#[cfg(test)]
mod helpers {
    use tc_catalogue::Catalogue;
    use tc_core::{GeoPoint, RoutingSettings};

    use crate::QueryFacade;

    pub fn settings() -> RoutingSettings {
        RoutingSettings::new(6, 60.0).unwrap()
    }

    /// Route `"1"`: linear A → B → C, 1 km per segment.
    /// Stop `"E"` is unserved.
    pub fn facade() -> QueryFacade {
        let mut c = Catalogue::new();
        c.add_stop("C", GeoPoint::new(55.0, 37.02)).unwrap();
        c.add_stop("A", GeoPoint::new(55.0, 37.0)).unwrap();
        c.add_stop("B", GeoPoint::new(55.0, 37.01)).unwrap();
        c.add_stop("E", GeoPoint::new(56.0, 38.0)).unwrap();
        c.set_distance("A", "B", 1_000).unwrap();
        c.set_distance("B", "C", 1_000).unwrap();
        c.add_route("1", &["A", "B", "C"], false).unwrap();
        c.add_route("empty", &[] as &[&str], true).unwrap();
        QueryFacade::build(c, settings()).unwrap()
    }

    pub const DOCUMENT: &str = r#"{
        "base_requests": [
            { "type": "Bus", "name": "14", "stops": ["X", "Y", "X"], "is_roundtrip": true },
            { "type": "Stop", "name": "X", "latitude": 55.0, "longitude": 37.0,
              "road_distances": { "Y": 1500 } },
            { "type": "Stop", "name": "Y", "latitude": 55.0, "longitude": 37.02 },
            { "type": "Stop", "name": "Z", "latitude": 55.1, "longitude": 37.1 }
        ],
        "routing_settings": { "bus_wait_time": 2, "bus_velocity": 30 },
        "stat_requests": [
            { "id": 1, "type": "Bus", "name": "14" },
            { "id": 2, "type": "Stop", "name": "Z" },
            { "id": 3, "type": "Stop", "name": "Q" },
            { "id": 4, "type": "Route", "from": "X", "to": "Y" },
            { "id": 5, "type": "Map" }
        ]
    }"#;
}

// ── Facade queries ────────────────────────────────────────────────────────────

#[cfg(test)]
mod facade {
    use tc_catalogue::Catalogue;
    use tc_core::GeoPoint;
    use tc_router::RouteItem;

    use super::helpers::*;
    use crate::{QueryError, QueryFacade};

    #[test]
    fn facade_is_shareable() {
        fn assert_shareable<T: Send + Sync + Clone>() {}
        assert_shareable::<QueryFacade>();
    }

    #[test]
    fn route_stats_through_facade() {
        let f = facade();
        let stats = f.route_stats("1").unwrap().unwrap();
        assert_eq!(stats.total_stops, 5);
        assert_eq!(stats.unique_stops, 3);
        assert_eq!(stats.length_m, 4_000);
        assert!(stats.curvature >= 1.0);
        assert!(f.route_stats("nope").unwrap().is_none());
    }

    #[test]
    fn stop_stats_through_facade() {
        let f = facade();
        assert_eq!(f.stop_stats("B").unwrap().routes, vec!["1"]);
        assert!(f.stop_stats("E").unwrap().is_unserved());
        assert!(f.stop_stats("nope").is_none());
    }

    #[test]
    fn route_plan_through_facade() {
        let f = facade();
        let plan = f.route_plan("A", "C").unwrap();
        assert!((plan.total_time - 8.0).abs() < 1e-9);
        assert_eq!(plan.items.len(), 2);
        assert!(matches!(&plan.items[0], RouteItem::Wait { stop_name, .. } if stop_name == "A"));
        assert!(f.route_plan("A", "E").is_none());
        assert!(f.route_plan("A", "nope").is_none());
    }

    #[test]
    fn map_snapshot_holds_active_entries_sorted() {
        let snapshot = facade().map_snapshot();
        let stops: Vec<&str> = snapshot.stops.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(stops, ["A", "B", "C"]);
        assert_eq!(snapshot.stops[0].latitude, 55.0);
        assert_eq!(snapshot.routes.len(), 1);
        assert_eq!(snapshot.routes[0].name, "1");
        assert_eq!(snapshot.routes[0].stops, ["A", "B", "C"]);
        assert!(!snapshot.routes[0].is_roundtrip);
    }

    #[test]
    fn missing_distance_fails_the_build() {
        let mut c = Catalogue::new();
        c.add_stop("A", GeoPoint::new(55.0, 37.0)).unwrap();
        c.add_stop("B", GeoPoint::new(55.0, 37.01)).unwrap();
        c.add_route("1", &["A", "B"], false).unwrap();
        let err = QueryFacade::build(c, settings()).err().unwrap();
        assert!(matches!(err, QueryError::Catalogue(_)));
    }

    #[test]
    fn clones_answer_from_other_threads() {
        let f = facade();
        std::thread::scope(|s| {
            for _ in 0..4 {
                let f = f.clone();
                s.spawn(move || {
                    let plan = f.route_plan("C", "A").unwrap();
                    assert!((plan.total_time - 8.0).abs() < 1e-9);
                });
            }
        });
    }
}

// ── Request boundary ──────────────────────────────────────────────────────────

#[cfg(test)]
mod requests {
    use tc_catalogue::{Catalogue, CatalogueError};

    use super::helpers::*;
    use crate::{apply_base_requests, BaseRequest, StatRequest, TransitDocument};

    #[test]
    fn document_deserializes() {
        let doc: TransitDocument = serde_json::from_str(DOCUMENT).unwrap();
        assert_eq!(doc.base_requests.len(), 4);
        assert_eq!(doc.routing_settings.bus_wait_time, 2);
        assert_eq!(doc.routing_settings.bus_velocity, 30.0);
        assert_eq!(doc.stat_requests[3], StatRequest::Route {
            id:   4,
            from: "X".into(),
            to:   "Y".into(),
        });
        assert!(matches!(
            &doc.base_requests[2],
            BaseRequest::Stop { road_distances, .. } if road_distances.is_empty()
        ));
    }

    #[test]
    fn stat_request_ids() {
        let doc: TransitDocument = serde_json::from_str(DOCUMENT).unwrap();
        let ids: Vec<i64> = doc.stat_requests.iter().map(StatRequest::id).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sections_may_be_omitted() {
        let doc: TransitDocument =
            serde_json::from_str(r#"{ "routing_settings": { "bus_wait_time": 1, "bus_velocity": 10.5 } }"#)
                .unwrap();
        assert!(doc.base_requests.is_empty());
        assert!(doc.stat_requests.is_empty());
    }

    #[test]
    fn base_requests_resolve_forward_references() {
        let doc: TransitDocument = serde_json::from_str(DOCUMENT).unwrap();
        let mut c = Catalogue::new();
        apply_base_requests(&mut c, &doc.base_requests).unwrap();
        assert_eq!(c.stop_count(), 3);
        assert_eq!(c.find_route("14").unwrap().stops.len(), 3);
        assert_eq!(c.distance("Y", "X").unwrap(), 1_500);
    }

    #[test]
    fn unknown_stop_in_bus_is_an_error() {
        let requests = vec![BaseRequest::Bus {
            name:         "7".into(),
            stops:        vec!["Nowhere".into()],
            is_roundtrip: true,
        }];
        let err = apply_base_requests(&mut Catalogue::new(), &requests).unwrap_err();
        assert!(matches!(err, CatalogueError::UnknownStop(ref n) if n == "Nowhere"));
    }
}

// ── Responses ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod responses {
    use serde_json::json;

    use super::helpers::*;
    use crate::{process_document, ResponseBody, StatRequest, TransitDocument};

    fn answer_json(request: StatRequest) -> serde_json::Value {
        serde_json::to_value(facade().answer(&request).unwrap()).unwrap()
    }

    #[test]
    fn bus_response_shape() {
        let v = answer_json(StatRequest::Bus { id: 7, name: "1".into() });
        assert_eq!(v["request_id"], 7);
        assert_eq!(v["route_length"], 4_000);
        assert_eq!(v["stop_count"], 5);
        assert_eq!(v["unique_stop_count"], 3);
        assert!(v["curvature"].as_f64().unwrap() >= 1.0);
    }

    #[test]
    fn stop_response_shape() {
        assert_eq!(
            answer_json(StatRequest::Stop { id: 1, name: "B".into() }),
            json!({ "request_id": 1, "buses": ["1"] })
        );
        assert_eq!(
            answer_json(StatRequest::Stop { id: 2, name: "E".into() }),
            json!({ "request_id": 2, "buses": [] })
        );
    }

    #[test]
    fn route_response_shape() {
        assert_eq!(
            answer_json(StatRequest::Route { id: 3, from: "A".into(), to: "C".into() }),
            json!({
                "request_id": 3,
                "total_time": 8.0,
                "items": [
                    { "type": "Wait", "stop_name": "A", "time": 6.0 },
                    { "type": "Bus", "bus": "1", "span_count": 2, "time": 2.0 }
                ]
            })
        );
    }

    #[test]
    fn same_stop_route_is_empty() {
        assert_eq!(
            answer_json(StatRequest::Route { id: 4, from: "B".into(), to: "B".into() }),
            json!({ "request_id": 4, "total_time": 0.0, "items": [] })
        );
    }

    #[test]
    fn unresolved_names_are_not_found() {
        let not_found = |id: i64| json!({ "request_id": id, "error_message": "not found" });
        assert_eq!(answer_json(StatRequest::Bus { id: 1, name: "x".into() }), not_found(1));
        assert_eq!(answer_json(StatRequest::Stop { id: 2, name: "x".into() }), not_found(2));
        assert_eq!(
            answer_json(StatRequest::Route { id: 3, from: "A".into(), to: "E".into() }),
            not_found(3)
        );
    }

    #[test]
    fn map_response_nests_snapshot() {
        let v = answer_json(StatRequest::Map { id: 9 });
        assert_eq!(v["request_id"], 9);
        assert_eq!(v["map"]["stops"].as_array().unwrap().len(), 3);
        assert_eq!(v["map"]["routes"][0]["stops"], json!(["A", "B", "C"]));
    }

    #[test]
    fn process_document_answers_in_order() {
        let doc: TransitDocument = serde_json::from_str(super::helpers::DOCUMENT).unwrap();
        let responses = process_document(&doc).unwrap();
        let ids: Vec<i64> = responses.iter().map(|r| r.request_id).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5]);

        // X → Y → X with 1500 m each way.
        assert!(matches!(
            responses[0].body,
            ResponseBody::Bus { route_length: 3_000, stop_count: 3, unique_stop_count: 2, .. }
        ));
        assert_eq!(responses[1].body, ResponseBody::Stop { buses: vec![] });
        assert!(responses[2].body.is_not_found());
        // 2 min wait, 1500 m at 500 m/min.
        match &responses[3].body {
            ResponseBody::Route { total_time, items } => {
                assert!((total_time - 5.0).abs() < 1e-9);
                assert_eq!(items.len(), 2);
            }
            other => panic!("unexpected body {other:?}"),
        }
        assert!(matches!(&responses[4].body, ResponseBody::Map { map } if map.stops.len() == 2));
    }
}
