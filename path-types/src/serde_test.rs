use crate::{PathSegment, Point, Rect};
use std::vec::Vec;

#[test]
fn point_round_trip() {
    let point = Point::new(1.5f32, -2.0);
    let json = serde_json::to_string(&point).unwrap();
    assert_eq!(json, r#"{"x":1.5,"y":-2.0}"#);
    let back: Point<f32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, point);
}

#[test]
fn segment_round_trip() {
    let segments = vec![
        PathSegment::MoveTo(Point::new(0.0, 0.0)),
        PathSegment::QuadTo(Point::new(1.0, 1.0), Point::new(2.0, 0.0)),
        PathSegment::Close,
    ];
    let json = serde_json::to_string(&segments).unwrap();
    let back: Vec<PathSegment> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, segments);
}

#[test]
fn rect_fields() {
    let rect = Rect::from_origin_size(Point::new(1.0, 2.0), 3.0, 4.0);
    let json = serde_json::to_value(rect).unwrap();
    assert_eq!(json["x_max"], 4.0);
    assert_eq!(json["y_max"], 6.0);
}
