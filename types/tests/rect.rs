use bedrock_types::{Bundle, Portable, Rect, RectF, Savable};
use bytes::BytesMut;

#[test]
fn containment_and_intersection_contract() {
    let r = Rect::new(0, 0, 10, 10);

    assert!(!r.contains(10, 5));
    assert!(r.contains(9, 5));
    assert!(!r.contains_rect(0, 0, 10, 10));
    assert!(r.intersects(5, 5, 20, 20));
    assert!(r.contains_f(9.5, 0.0));
    assert!(!r.contains_f(10.0, 0.0));
}

#[test]
fn intersection_is_symmetric_for_non_empty_rectangles() {
    let pairs = [
        (Rect::new(0, 0, 10, 10), Rect::new(5, 5, 10, 10)),
        (Rect::new(-5, -5, 3, 3), Rect::new(0, 0, 10, 10)),
        (Rect::new(0, 0, 10, 10), Rect::new(2, 2, 2, 2)),
    ];
    for (a, b) in pairs {
        assert_eq!(
            a.intersects(b.x, b.y, b.width, b.height),
            b.intersects(a.x, a.y, a.width, a.height),
            "asymmetric for {a} / {b}"
        );
    }
}

#[test]
fn float_intersection_uses_overlap_geometry() {
    let r = RectF::new(0.0, 0.0, 10.0, 10.0);
    // Overlapping but not contained.
    assert!(r.intersects(5.0, 5.0, 20.0, 20.0));
    // Disjoint.
    assert!(!r.intersects(10.0, 0.0, 5.0, 5.0));
    // Empty other never intersects.
    assert!(!r.intersects(1.0, 1.0, 0.0, 5.0));
    // Empty self never intersects.
    assert!(!RectF::new(0.0, 0.0, 0.0, 10.0).intersects(-5.0, -5.0, 20.0, 20.0));
}

#[test]
fn bounds_covers_the_float_rectangle() {
    let mut out = Rect::new(9, 9, 9, 9);
    out.copy_from(&RectF::new(0.5, 0.5, 2.0, 2.0).bounds());
    assert_eq!(out, Rect::new(0, 0, 3, 3));
}

#[test]
fn identity_empty_reset() {
    let mut r = Rect::new(0, 0, 0, 0);
    assert!(r.is_identity());
    assert!(r.is_empty());

    r.set(1, 2, 3, 4);
    assert!(!r.is_identity());
    assert!(!r.is_empty());
    assert_eq!((r.left(), r.top(), r.right(), r.bottom()), (1, 2, 4, 6));

    r.set_size(0, 4);
    assert!(r.is_empty());

    r.reset();
    assert!(r.is_identity());

    let mut rf = RectF::new(0.0, 0.0, 1.0, 1.0);
    assert!(!rf.is_identity());
    rf.reset();
    assert!(rf.is_identity() && rf.is_empty());
}

#[test]
fn portable_round_trip() {
    let rect = Rect::new(-1, 2, 300, 40_000);
    let mut buf = BytesMut::new();
    rect.encode(&mut buf);
    assert_eq!(buf.len(), Rect::ENCODED_LEN);

    let mut decoded = Rect::default();
    decoded.decode(&mut buf.freeze()).unwrap();
    assert_eq!(decoded, rect);
}

#[test]
fn portable_round_trip_is_bit_exact_for_floats() {
    let rect = RectF::new(f32::NAN, -0.0, 1.5, f32::INFINITY);
    let mut buf = BytesMut::new();
    rect.encode(&mut buf);

    let mut decoded = RectF::default();
    decoded.decode(&mut buf.freeze()).unwrap();
    // Bitwise equality holds even through NaN and signed zero.
    assert_eq!(decoded, rect);
}

#[test]
fn bundle_round_trip_and_defaults() {
    let rect = Rect::new(1, 2, 3, 4);
    let mut bundle = Bundle::new();
    rect.save(&mut bundle);
    assert_eq!(bundle.get_i32("width", 0), 3);

    let mut loaded = Rect::default();
    loaded.load(&bundle);
    assert_eq!(loaded, rect);

    let mut rf = RectF::new(0.5, 1.5, 2.5, 3.5);
    let mut bundle = Bundle::new();
    rf.save(&mut bundle);
    let mut loaded = RectF::default();
    loaded.load(&bundle);
    assert_eq!(loaded, rf);

    // Missing entries read back as zero.
    rf.load(&Bundle::new());
    assert!(rf.is_identity());
}

#[test]
fn widening_conversion_preserves_fields() {
    let rf: RectF = Rect::new(1, -2, 3, 4).into();
    assert_eq!(rf, RectF::new(1.0, -2.0, 3.0, 4.0));
}
