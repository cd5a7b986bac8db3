use super::*;
use crate::cfg::OrderCfg;
use crate::convert::point_to_f64;
use crate::error::GeomError;
use crate::geom2::{Contain, Interval, Point, Vector};
use proptest::prelude::*;

fn pts(coords: &[(i32, i32)]) -> Vec<Point<i32>> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

fn sample_set() -> Vec<Point<i32>> {
    pts(&[
        (-2, 2),
        (0, -1),
        (-5, 1),
        (-2, 4),
        (0, -4),
        (-4, 3),
        (-6, -2),
        (5, 1),
        (2, 2),
        (3, -3),
        (-3, -4),
        (1, 4),
    ])
}

// Query points that lie on none of the four boundaries built from `sample_set`.
const INSIDE_ALL: [(i32, i32); 14] = [
    (-4, -1),
    (-4, 0),
    (-3, -1),
    (-3, 0),
    (-3, 1),
    (-2, -3),
    (-2, -2),
    (-2, -1),
    (-2, 0),
    (-1, -3),
    (-1, -2),
    (-1, -1),
    (-1, 0),
    (2, 0),
];
const OUTSIDE_ALL: [(i32, i32); 3] = [(0, 5), (3, 2), (-6, 3)];

#[test]
fn xmonotone_order_and_area() {
    let mut s = sample_set();
    create_xmono_polygon(&mut s).unwrap();
    assert_eq!(
        s,
        pts(&[
            (-6, -2),
            (-3, -4),
            (0, -4),
            (0, -1),
            (3, -3),
            (5, 1),
            (2, 2),
            (1, 4),
            (-2, 4),
            (-2, 2),
            (-4, 3),
            (-5, 1),
        ])
    );
    let p = Polygon::from_ordered_points(&s).unwrap();
    assert_eq!(p.signed_area_x2(), 110);
    assert_eq!(signed_area_x2_of(&s), 110);
    assert_eq!(p.num_vertices(), 12);
    assert_eq!(p.vertices().collect::<Vec<_>>(), s);
}

#[test]
fn ymonotone_order_and_area() {
    let mut s = sample_set();
    create_ymono_polygon(&mut s).unwrap();
    assert_eq!(
        s,
        pts(&[
            (-3, -4),
            (0, -4),
            (3, -3),
            (0, -1),
            (5, 1),
            (2, 2),
            (1, 4),
            (-2, 4),
            (-4, 3),
            (-2, 2),
            (-5, 1),
            (-6, -2),
        ])
    );
    let p = Polygon::create_ymonotone(sample_set()).unwrap();
    assert_eq!(p.signed_area_x2(), 102);
    assert_eq!(p.origin(), Point::new(-3, -4));
}

#[test]
fn rectilinear_xmonotone_is_clockwise() {
    let mut s = sample_set();
    let is_anticlockwise = create_xmono_rpolygon(&mut s).unwrap();
    assert!(!is_anticlockwise);
    assert_eq!(
        s,
        pts(&[
            (-6, -2),
            (-5, 1),
            (-4, 3),
            (-2, 2),
            (-2, 4),
            (0, -1),
            (1, 4),
            (2, 2),
            (5, 1),
            (3, -3),
            (0, -4),
            (-3, -4),
        ])
    );
    let p = RPolygon::from_ordered_points(&s).unwrap();
    assert_eq!(p.signed_area(), -53);
    assert_eq!(rsigned_area_of(&s), -53);
}

#[test]
fn rectilinear_ymonotone_is_anticlockwise() {
    let (p, is_anticlockwise) = RPolygon::create_ymonotone(sample_set()).unwrap();
    assert!(is_anticlockwise);
    assert_eq!(p.signed_area(), 45);
    assert_eq!(
        p.vertices().collect::<Vec<_>>(),
        pts(&[
            (-3, -4),
            (0, -4),
            (3, -3),
            (0, -1),
            (5, 1),
            (-2, 2),
            (2, 2),
            (-2, 4),
            (1, 4),
            (-4, 3),
            (-5, 1),
            (-6, -2),
        ])
    );
}

#[test]
fn staircase_expansion_doubles_area() {
    let (rx, _) = RPolygon::create_xmonotone(sample_set()).unwrap();
    let (ry, _) = RPolygon::create_ymonotone(sample_set()).unwrap();
    let ex = rx.to_polygon();
    let ey = ry.to_polygon();
    assert_eq!(ex.num_vertices(), 24);
    assert_eq!(ex.signed_area_x2(), -106);
    assert_eq!(ey.signed_area_x2(), 90);
    // The first corner sits below the origin at the closing vertex's height.
    assert_eq!(ex.origin(), Point::new(-6, -4));
}

#[test]
fn containment_agrees_between_slices_and_polygons() {
    let p = Polygon::create_xmonotone(sample_set()).unwrap();
    let q = Polygon::create_ymonotone(sample_set()).unwrap();
    let (rx, _) = RPolygon::create_xmonotone(sample_set()).unwrap();
    let (ry, _) = RPolygon::create_ymonotone(sample_set()).unwrap();
    let px: Vec<_> = p.vertices().collect();
    let rxs: Vec<_> = rx.vertices().collect();

    for (x, y) in INSIDE_ALL {
        let pt = Point::new(x, y);
        assert!(p.contains(&pt), "{pt} outside the x-monotone polygon");
        assert!(q.contains(&pt), "{pt} outside the y-monotone polygon");
        assert!(rx.contains(&pt), "{pt} outside the x staircase");
        assert!(ry.contains(&pt), "{pt} outside the y staircase");
        assert!(point_in_polygon(&px, &pt));
        assert!(point_in_rpolygon(&rxs, &pt));
    }
    for (x, y) in OUTSIDE_ALL {
        let pt = Point::new(x, y);
        assert!(!p.contains(&pt));
        assert!(!q.contains(&pt));
        assert!(!rx.contains(&pt));
        assert!(!ry.contains(&pt));
    }
}

#[test]
fn containment_differs_by_shape() {
    let p = Polygon::create_xmonotone(sample_set()).unwrap();
    let q = Polygon::create_ymonotone(sample_set()).unwrap();
    let (rx, _) = RPolygon::create_xmonotone(sample_set()).unwrap();
    let (ry, _) = RPolygon::create_ymonotone(sample_set()).unwrap();
    let cases = [
        ((-5, -3), [false, false, true, false]),
        ((-4, -3), [true, true, true, false]),
        ((-3, 2), [true, false, true, true]),
        ((-1, 3), [true, true, true, false]),
        ((1, -2), [false, true, true, false]),
        ((2, -2), [true, false, true, false]),
        ((4, 0), [true, false, false, true]),
    ];
    for ((x, y), expected) in cases {
        let pt = Point::new(x, y);
        let got = [
            p.contains(&pt),
            q.contains(&pt),
            rx.contains(&pt),
            ry.contains(&pt),
        ];
        assert_eq!(got, expected, "query {pt}");
    }
}

#[test]
fn translation_moves_area_and_containment() {
    let mut p = Polygon::create_xmonotone(sample_set()).unwrap();
    let mut r = RPolygon::create_xmonotone(sample_set()).unwrap().0;
    let offset = Vector::new(100, -7);
    p += offset;
    r.translate(offset);
    assert_eq!(p.signed_area_x2(), 110);
    assert_eq!(r.signed_area(), -53);
    assert_eq!(p.origin(), Point::new(94, -9));
    assert!(p.contains(&Point::new(98, -8)));
    assert!(!p.contains(&Point::new(-2, -1)));
    assert!(r.contains(&Point::new(98, -8)));
}

#[test]
fn bounding_box_spans_all_vertices() {
    let p = Polygon::create_ymonotone(sample_set()).unwrap();
    assert_eq!(p.lower(), Point::new(-6, -4));
    assert_eq!(p.upper(), Point::new(5, 4));
    let bb = p.bounding_box();
    assert_eq!(bb, Point::new(Interval::new(-6, 5), Interval::new(-4, 4)));
    assert!(p.vertices().all(|v| bb.contains(&v)));
}

#[test]
fn too_few_points_are_rejected() {
    let mut two = pts(&[(0, 0), (1, 1)]);
    let err = GeomError::TooFewPoints { min: 3, got: 2 };
    assert_eq!(create_xmono_polygon(&mut two), Err(err));
    assert_eq!(create_ymono_rpolygon(&mut two), Err(err));
    assert_eq!(Polygon::from_ordered_points(&two), Err(err));
    assert_eq!(
        RPolygon::<i32>::from_ordered_points(&[]),
        Err(GeomError::TooFewPoints { min: 3, got: 0 })
    );
    assert!(!point_in_polygon::<i32>(&[], &Point::new(0, 0)));
}

#[test]
fn degenerate_orderings_follow_policy() {
    let mut line = pts(&[(2, 2), (0, 0), (1, 1)]);
    create_xmono_polygon(&mut line).unwrap();
    assert_eq!(line, pts(&[(0, 0), (1, 1), (2, 2)]));
    assert_eq!(
        create_xmono_polygon_with(&mut line, &OrderCfg::strict()),
        Err(GeomError::ZeroArea { n: 3 })
    );
    assert_eq!(
        create_ymono_polygon_with(&mut line, &OrderCfg::strict()),
        Err(GeomError::ZeroArea { n: 3 })
    );

    let mut flat = pts(&[(0, 0), (2, 0), (1, 0)]);
    assert_eq!(
        create_xmono_rpolygon_with(&mut flat, &OrderCfg::strict()),
        Err(GeomError::ZeroArea { n: 3 })
    );
    let mut column = pts(&[(0, 2), (0, 0), (0, 1)]);
    assert_eq!(
        create_ymono_rpolygon_with(&mut column, &OrderCfg::strict()),
        Err(GeomError::ZeroArea { n: 3 })
    );
    let mut same = pts(&[(1, 1), (1, 1), (1, 1)]);
    assert!(create_xmono_rpolygon(&mut same).is_ok());
}

#[test]
fn strict_policy_accepts_proper_polygons() {
    let mut s = sample_set();
    assert_eq!(
        create_xmono_polygon_with(&mut s, &OrderCfg::strict()),
        Ok(())
    );
    let mut s = sample_set();
    assert_eq!(
        create_ymono_rpolygon_with(&mut s, &OrderCfg::strict()),
        Ok(true)
    );
}

#[test]
fn ymonotone_staircase_tie_on_x_starts_left() {
    // Bottom and top share x; the left chain comes first.
    let mut s = pts(&[(0, 0), (0, 4), (1, 2), (-1, 2)]);
    assert_eq!(create_ymono_rpolygon(&mut s), Ok(false));
    assert_eq!(s, pts(&[(0, 0), (-1, 2), (0, 4), (1, 2)]));
    assert_eq!(rsigned_area_of(&s), -4);
}

#[test]
fn four_chain_staircase_order_and_area() {
    let mut s = sample_set();
    create_test_rpolygon(&mut s).unwrap();
    assert_eq!(
        s,
        pts(&[
            (0, -4),
            (0, -1),
            (3, -3),
            (5, 1),
            (2, 2),
            (1, 4),
            (-2, 4),
            (-2, 2),
            (-4, 3),
            (-5, 1),
            (-6, -2),
            (-3, -4),
        ])
    );
    assert_eq!(rsigned_area_of(&s), 52);

    let mut two = pts(&[(0, 0), (1, 1)]);
    assert_eq!(
        create_test_rpolygon(&mut two),
        Err(GeomError::TooFewPoints { min: 3, got: 2 })
    );
    let mut flat = pts(&[(0, 0), (2, 0), (1, 0)]);
    assert_eq!(
        create_test_rpolygon_with(&mut flat, &OrderCfg::strict()),
        Err(GeomError::ZeroArea { n: 3 })
    );
}

fn point_sets() -> impl Strategy<Value = Vec<Point<i64>>> {
    prop::collection::vec((-50i64..50, -50i64..50), 3..24)
        .prop_map(|v| v.into_iter().map(|(x, y)| Point::new(x, y)).collect())
}

fn dense_point_sets() -> impl Strategy<Value = Vec<Point<i64>>> {
    prop::collection::btree_set((-4i64..4, -4i64..4), 3..24)
        .prop_map(|v| v.into_iter().map(|(x, y)| Point::new(x, y)).collect())
}

/// Segments `ab` and `cd` cross at a single point interior to both.
fn crosses_properly(a: Point<i64>, b: Point<i64>, c: Point<i64>, d: Point<i64>) -> bool {
    let side = |p: Point<i64>, q: Point<i64>, r: Point<i64>| (q - p).cross(&(r - p)).signum();
    side(a, b, c) * side(a, b, d) < 0 && side(c, d, a) * side(c, d, b) < 0
}

/// No two non-adjacent edges of the closed boundary cross.
fn is_simple_boundary(points: &[Point<i64>]) -> bool {
    let n = points.len();
    let edge = |i: usize| (points[i], points[(i + 1) % n]);
    (0..n).all(|i| {
        (i + 2..n)
            .filter(|&j| !(i == 0 && j == n - 1))
            .all(|j| {
                let ((a, b), (c, d)) = (edge(i), edge(j));
                !crosses_properly(a, b, c, d)
            })
    })
}

fn shoelace_f64(points: &[Point<i64>]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let a = point_to_f64(points[i]).coords;
            let b = point_to_f64(points[(i + 1) % n]).coords;
            nalgebra::Matrix2::from_columns(&[a, b]).determinant()
        })
        .sum()
}

proptest! {
    #[test]
    fn general_orderings_are_counterclockwise(set in point_sets()) {
        let mut xs = set.clone();
        create_xmono_polygon(&mut xs).unwrap();
        prop_assert!(signed_area_x2_of(&xs) >= 0);
        let mut ys = set;
        create_ymono_polygon(&mut ys).unwrap();
        prop_assert!(signed_area_x2_of(&ys) >= 0);
    }

    #[test]
    fn reordering_is_idempotent(set in point_sets()) {
        let mut once = set.clone();
        create_xmono_polygon(&mut once).unwrap();
        let mut twice = once.clone();
        create_xmono_polygon(&mut twice).unwrap();
        prop_assert_eq!(&once, &twice);

        let mut once = set;
        create_ymono_polygon(&mut once).unwrap();
        let mut twice = once.clone();
        create_ymono_polygon(&mut twice).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn reordering_is_a_permutation(set in point_sets()) {
        let mut reordered = set.clone();
        create_xmono_rpolygon(&mut reordered).unwrap();
        let mut expected = set;
        expected.sort();
        reordered.sort();
        prop_assert_eq!(reordered, expected);
    }

    #[test]
    fn monotone_boundaries_are_simple(set in dense_point_sets()) {
        let mut xs = set.clone();
        create_xmono_polygon(&mut xs).unwrap();
        prop_assert!(is_simple_boundary(&xs), "x-monotone self-crossing: {:?}", xs);
        let mut ys = set;
        create_ymono_polygon(&mut ys).unwrap();
        prop_assert!(is_simple_boundary(&ys), "y-monotone self-crossing: {:?}", ys);
    }

    #[test]
    fn four_chain_staircase_is_a_permutation(set in point_sets()) {
        let mut reordered = set.clone();
        create_test_rpolygon(&mut reordered).unwrap();
        let mut expected = set;
        expected.sort();
        reordered.sort();
        prop_assert_eq!(reordered, expected);
    }

    #[test]
    fn exact_area_matches_float_shoelace(set in point_sets()) {
        let mut s = set;
        create_ymono_polygon(&mut s).unwrap();
        let p = Polygon::from_ordered_points(&s).unwrap();
        let exact = p.signed_area_x2() as f64;
        prop_assert!((exact - shoelace_f64(&s)).abs() < 1e-6);
    }

    #[test]
    fn staircase_expansion_preserves_area(set in point_sets()) {
        let (r, _) = RPolygon::create_xmonotone(set).unwrap();
        prop_assert_eq!(r.to_polygon().signed_area_x2(), 2 * r.signed_area());
    }
}
