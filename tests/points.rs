use projscatter::points::*;

#[test]
fn literal_table_has_39_points() {
    let points = load_points();
    assert_eq!(points.len(), 39);
    assert_eq!(points.len(), POINT_COUNT);
    assert_eq!(points[0], Point::new(0.0, 0.0, 0.0));
    assert_eq!(points[5], Point::new(1.0, 4.0, 0.0));
    assert_eq!(points[38], Point::new(0.0, 2.0, 4.0));
}

#[test]
fn load_points_is_deterministic() {
    let a = load_points();
    let b = load_points();
    assert_eq!(a, b);
    assert_eq!(a.as_slice(), &POINTS[..]);
}

#[test]
fn duplicates_are_preserved() {
    let points = load_points();
    let count = |p: Point| points.iter().filter(|&&q| q == p).count();
    assert_eq!(count(Point::new(1.0, 0.0, 0.0)), 2);
    assert_eq!(count(Point::new(2.0, 0.0, 0.0)), 2);
    assert_eq!(count(Point::new(0.0, 0.0, 1.0)), 3);
    assert_eq!(count(Point::new(0.0, 0.0, 2.0)), 3);
    assert_eq!(count(Point::new(0.0, 0.0, 3.0)), 2);
}

#[test]
fn split_preserves_length_and_order() {
    let points = load_points();
    let coords = split_coordinates(&points);
    assert_eq!(coords.xs.len(), points.len());
    assert_eq!(coords.ys.len(), points.len());
    assert_eq!(coords.zs.len(), points.len());
    for (i, p) in points.iter().enumerate() {
        assert_eq!((coords.xs[i], coords.ys[i], coords.zs[i]), (p.x, p.y, p.z), "index {i}");
    }
    assert_eq!(coords.to_points(), points);
}

#[test]
fn split_of_empty_input_is_empty() {
    let coords = split_coordinates(&[]);
    assert!(coords.is_empty());
    assert!(coords.ys.is_empty());
    assert!(coords.zs.is_empty());
}

#[test]
fn tuple_conversion() {
    let p: Point = (1.5, -2.0, 3.0).into();
    assert_eq!(p.to_array(), [1.5, -2.0, 3.0]);
    let t: (f64, f64, f64) = p.into();
    assert_eq!(t, (1.5, -2.0, 3.0));
}

#[test]
fn stats_of_literal_table() {
    let stats = PointStats::from_points(&load_points());
    assert_eq!(stats.count, 39);
    assert_eq!(stats.x.range, Some((0.0, 3.0)));
    assert_eq!(stats.y.range, Some((0.0, 4.0)));
    assert_eq!(stats.z.range, Some((0.0, 4.0)));
    assert_eq!(stats.x.unique, 4);
    assert_eq!(stats.y.unique, 5);
    assert_eq!(stats.z.unique, 5);
}

#[test]
fn stats_of_empty_set() {
    let stats = PointStats::from_points(&[]);
    assert_eq!(stats.count, 0);
    assert_eq!(stats.x.range, None);
    assert_eq!(stats.z.unique, 0);
}

#[test]
fn dedupe_keeps_first_occurrences_in_order() {
    let points = load_points();
    let unique = dedupe(&points);
    assert_eq!(unique.len(), 26);
    assert_eq!(unique[0], points[0]);
    assert_eq!(unique[22], Point::new(0.0, 4.0, 4.0));
    assert_eq!(unique[25], Point::new(0.0, 2.0, 4.0));
    // The source list is untouched.
    assert_eq!(points.len(), 39);
}

#[test]
fn dedupe_without_repeats_is_identity() {
    let pts = vec![Point::new(1.0, 2.0, 3.0), Point::new(3.0, 2.0, 1.0)];
    assert_eq!(dedupe(&pts), pts);
}
