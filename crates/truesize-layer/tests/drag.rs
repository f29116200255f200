//! End-to-end drag sessions against the in-memory map.

use kurbo::{Point, Size};
use truesize_core::geodesy::distance_km;
use truesize_core::{GeometryKind, IdCounter, LngLat};
use truesize_layer::{
    DragEvent, LayerError, LayerState, MapRenderer, MemoryMap, TrueSizeLayer, TrueSizeOptions,
    Viewport,
};

const SQUARE: &str = r#"{
    "type": "Feature",
    "properties": {"name": "block"},
    "geometry": {
        "type": "Polygon",
        "coordinates": [[[-0.05, -0.05], [0.05, -0.05], [0.05, 0.05], [-0.05, 0.05], [-0.05, -0.05]]]
    }
}"#;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn pairwise_km(points: &[LngLat]) -> Vec<f64> {
    let mut out = Vec::new();
    for i in 0..points.len() {
        for j in i + 1..points.len() {
            out.push(distance_km(points[i], points[j]));
        }
    }
    out
}

fn assert_same_shape(a: &[LngLat], b: &[LngLat]) {
    assert_eq!(a.len(), b.len());
    for (x, y) in pairwise_km(a).iter().zip(pairwise_km(b)) {
        if *x > 0.0 {
            assert!((x - y).abs() / x < 1e-3, "{x} vs {y}");
        }
    }
}

fn map() -> MemoryMap {
    MemoryMap::new(Viewport::new(LngLat::new(0.0, 0.0), 6.0, Size::new(1024.0, 768.0)))
}

#[test]
fn drag_session_follows_pointer() {
    init_logging();
    let mut map = map();
    let mut layer = TrueSizeLayer::from_json_str(SQUARE, TrueSizeOptions::default()).unwrap();
    let original = layer.geometry().vertices();

    layer.attach(&mut map).unwrap();
    assert_eq!(layer.state(), LayerState::Idle);

    let path = [
        Point::new(512.0, 384.0),
        Point::new(600.0, 350.0),
        Point::new(700.0, 300.0),
        Point::new(900.0, 120.0),
    ];
    layer
        .handle_drag(&mut map, DragEvent::Start { position: path[0] })
        .unwrap();
    let mut seen_layers = vec![layer.rendered_layer().unwrap()];
    for position in &path[1..] {
        layer
            .handle_drag(&mut map, DragEvent::Move { position: *position })
            .unwrap();
        let current = layer.rendered_layer().unwrap();
        assert!(!seen_layers.contains(&current));
        seen_layers.push(current);

        assert_eq!(map.len(), 1);
        assert!(map.layer(current).unwrap().draggable);
    }
    layer
        .handle_drag(&mut map, DragEvent::End { position: path[3] })
        .unwrap();
    assert_eq!(layer.state(), LayerState::Idle);

    let target = map.container_point_to_lng_lat(path[3]);
    let center = layer.center().unwrap();
    assert!((center.lng - target.lng).abs() < 1e-3);
    assert!((center.lat - target.lat).abs() < 1e-3);

    assert_same_shape(&original, &layer.geometry().vertices());
    assert_eq!(layer.feature().properties["name"], "block");

    let rendered = map.layer(layer.rendered_layer().unwrap()).unwrap();
    assert_eq!(rendered.feature, *layer.feature());

    layer.detach(&mut map).unwrap();
    assert!(map.is_empty());
    assert_eq!(layer.state(), LayerState::Detached);
}

#[test]
fn many_small_moves_match_one_large_move() {
    init_logging();
    let destination = LngLat::new(30.0, 40.0);

    let mut map_a = map();
    let mut stepped = TrueSizeLayer::from_json_str(SQUARE, TrueSizeOptions::default()).unwrap();
    stepped.attach(&mut map_a).unwrap();
    for step in 1..=50 {
        let t = f64::from(step) / 50.0;
        stepped
            .drag_to(&mut map_a, LngLat::new(destination.lng * t, destination.lat * t))
            .unwrap();
    }

    let mut map_b = map();
    let mut jumped = TrueSizeLayer::from_json_str(SQUARE, TrueSizeOptions::default()).unwrap();
    jumped.attach(&mut map_b).unwrap();
    jumped.drag_to(&mut map_b, destination).unwrap();

    let a = stepped.geometry().vertices();
    let b = jumped.geometry().vertices();
    assert_same_shape(&a, &b);
    for (p, q) in a.iter().zip(&b) {
        assert!((p.lng - q.lng).abs() < 1e-3 && (p.lat - q.lat).abs() < 1e-3, "{p:?} vs {q:?}");
    }
}

#[test]
fn dragging_back_restores_the_shape() {
    let mut map = map();
    let mut layer = TrueSizeLayer::from_json_str(SQUARE, TrueSizeOptions::default()).unwrap();
    let original = layer.geometry().vertices();
    let home = layer.center().unwrap();

    layer.attach(&mut map).unwrap();
    layer.drag_to(&mut map, LngLat::new(-60.0, 55.0)).unwrap();
    layer.drag_to(&mut map, home).unwrap();

    for (p, q) in layer.geometry().vertices().iter().zip(&original) {
        assert!((p.lng - q.lng).abs() < 2e-4 && (p.lat - q.lat).abs() < 2e-4, "{p:?} vs {q:?}");
    }
}

#[test]
fn every_supported_kind_keeps_its_nesting() {
    let inputs = [
        (
            r#"{"type": "LineString", "coordinates": [[0, 0], [0.1, 0.1], [0.2, 0]]}"#,
            GeometryKind::LineString,
            1,
        ),
        (
            r#"{"type": "Polygon", "coordinates": [[[0, 0], [0.1, 0], [0.1, 0.1], [0, 0]]]}"#,
            GeometryKind::Polygon,
            2,
        ),
        (
            r#"{"type": "MultiPolygon", "coordinates": [[[[0, 0], [0.1, 0], [0.1, 0.1], [0, 0]]]]}"#,
            GeometryKind::MultiPolygon,
            3,
        ),
    ];

    for (json, kind, depth) in inputs {
        let mut map = map();
        let mut layer = TrueSizeLayer::from_json_str(json, TrueSizeOptions::default()).unwrap();
        let before = layer.geometry().vertices();
        layer.attach(&mut map).unwrap();
        layer.drag_to(&mut map, LngLat::new(-20.0, -10.0)).unwrap();

        assert_eq!(layer.geometry().kind, kind);
        let value = serde_json::to_value(&layer.geometry().coordinates).unwrap();
        assert_eq!(nesting_depth(&value), depth + 1, "{kind}");
        assert_same_shape(&before, &layer.geometry().vertices());
    }
}

fn nesting_depth(value: &serde_json::Value) -> usize {
    match value {
        serde_json::Value::Array(items) => 1 + items.first().map_or(0, nesting_depth),
        _ => 0,
    }
}

#[test]
fn unsupported_kind_is_packed_as_one_ring() {
    let mut map = map();
    let mut layer = TrueSizeLayer::from_json_str(
        r#"{"type": "MultiLineString", "coordinates": [[[0, 0], [1, 1]], [[2, 2], [3, 3]]]}"#,
        TrueSizeOptions::default(),
    )
    .unwrap();
    layer.attach(&mut map).unwrap();
    layer.drag_to(&mut map, LngLat::new(1.5, 1.5)).unwrap();

    assert_eq!(layer.geometry().kind, GeometryKind::Other("MultiLineString".to_string()));
    let value = serde_json::to_value(&layer.geometry().coordinates).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 1);
    assert_eq!(value[0].as_array().unwrap().len(), 4);
}

#[test]
fn layers_get_distinct_ids() {
    let a = TrueSizeLayer::from_json_str(SQUARE, TrueSizeOptions::default()).unwrap();
    let b = TrueSizeLayer::from_json_str(SQUARE, TrueSizeOptions::default()).unwrap();
    assert_ne!(a.id(), b.id());

    let counter = IdCounter::new();
    let c = TrueSizeLayer::with_counter(a.feature().clone(), TrueSizeOptions::default(), &counter);
    assert_eq!(c.id().0, 0);
}

#[test]
fn detach_before_attach_fails() {
    let mut map = map();
    let mut layer = TrueSizeLayer::from_json_str(SQUARE, TrueSizeOptions::default()).unwrap();
    assert!(matches!(layer.detach(&mut map), Err(LayerError::NotAttached)));
}
