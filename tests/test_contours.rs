mod common;

use common::*;
use handshapes::detection::contours::{approximate_simple, dominant_contour, find_contours};
use image::GrayImage;

#[test]
fn test_empty_mask_has_no_contours() {
    let set = find_contours(&GrayImage::new(40, 30));
    assert!(set.is_empty());
    assert_eq!(dominant_contour(&set), None);
}

#[test]
fn test_rectangle_keeps_only_corners() {
    let set = find_contours(&rect_mask(50, 40, &[(10, 10, 20, 10)]));
    assert_eq!(set.len(), 1);

    let contour = &set.contours[0];
    assert_eq!(contour.kind, BorderKind::Outer);
    assert_eq!(contour.parent, None);
    assert_eq!(contour.len(), 4);
    for corner in [pt(10, 10), pt(29, 10), pt(29, 19), pt(10, 19)] {
        assert!(contour.points.contains(&corner), "missing corner {:?}", corner);
    }
    assert_eq!(contour.area(), 171.0);
}

#[test]
fn test_hole_is_nested_in_its_region() {
    let mut mask = rect_mask(60, 60, &[(10, 10, 40, 40)]);
    for y in 20..40 {
        for x in 20..40 {
            mask.put_pixel(x, y, image::Luma([0]));
        }
    }

    let set = find_contours(&mask);
    assert_eq!(set.len(), 2);

    let hole = set
        .contours
        .iter()
        .position(|c| c.kind == BorderKind::Hole)
        .expect("hole contour");
    let outer = set.contours[hole].parent.expect("hole has a parent");
    assert_eq!(set.contours[outer].kind, BorderKind::Outer);
    assert_eq!(set.children(outer), vec![hole]);
    assert_eq!(set.depth(outer), 0);
    assert_eq!(set.depth(hole), 1);
}

#[test]
fn test_separate_regions_are_separate_contours() {
    let set = find_contours(&rect_mask(80, 40, &[(5, 5, 10, 10), (40, 20, 15, 15)]));
    assert_eq!(set.len(), 2);
    assert!(set.contours.iter().all(|c| c.parent.is_none()));
}

#[test]
fn test_region_on_image_border_is_outer() {
    let set = find_contours(&rect_mask(60, 60, &[(0, 10, 20, 15)]));
    assert_eq!(set.len(), 1);

    let contour = &set.contours[0];
    assert_eq!(contour.kind, BorderKind::Outer);
    assert_eq!(contour.parent, None);
    // points stay in image coordinates
    for corner in [pt(0, 10), pt(19, 10), pt(19, 24), pt(0, 24)] {
        assert!(contour.points.contains(&corner), "missing corner {:?}", corner);
    }
}

#[test]
fn test_band_across_the_image_is_one_contour() {
    let set = find_contours(&rect_mask(60, 60, &[(0, 20, 60, 20)]));
    assert_eq!(set.len(), 1);
    assert_eq!(set.contours[0].kind, BorderKind::Outer);
    assert_eq!(set.contours[0].bounding_rect().map(|r| (r.left(), r.width())), Some((0, 60)));

    let set = find_contours(&rect_mask(5, 5, &[(0, 0, 5, 5)]));
    assert_eq!(set.len(), 1);
    assert_eq!(set.contours[0].kind, BorderKind::Outer);
    assert_eq!(set.contours[0].area(), 16.0);
}

#[test]
fn test_simple_approximation_drops_collinear_points() {
    let chain = vec![
        pt(0, 0), pt(1, 0), pt(2, 0),
        pt(2, 1), pt(2, 2),
        pt(1, 2), pt(0, 2),
        pt(0, 1),
    ];
    assert_eq!(approximate_simple(&chain), vec![pt(0, 0), pt(2, 0), pt(2, 2), pt(0, 2)]);

    // diagonal runs collapse too
    let diamond = vec![pt(2, 0), pt(3, 1), pt(4, 2), pt(3, 3), pt(2, 4), pt(1, 3), pt(0, 2), pt(1, 1)];
    assert_eq!(approximate_simple(&diamond), vec![pt(2, 0), pt(4, 2), pt(2, 4), pt(0, 2)]);

    let short = vec![pt(5, 5), pt(6, 5)];
    assert_eq!(approximate_simple(&short), short);
}

#[test]
fn test_dominant_is_largest() {
    let set = ContourSet {
        contours: vec![
            outer(&[(0, 0), (4, 0), (4, 4), (0, 4)]),
            outer(&[(10, 10), (30, 10), (30, 30), (10, 30)]),
            outer(&[(50, 50), (52, 50), (52, 52)]),
        ],
    };
    assert_eq!(dominant_contour(&set), Some(1));
}

#[test]
fn test_dominant_tie_keeps_first() {
    let set = ContourSet {
        contours: vec![
            outer(&[(0, 0), (10, 0), (10, 10), (0, 10)]),
            outer(&[(20, 0), (30, 0), (30, 10), (20, 10)]),
        ],
    };
    assert_eq!(dominant_contour(&set), Some(0));

    // same through extraction: two identical squares
    let found = find_contours(&rect_mask(80, 40, &[(5, 5, 12, 12), (40, 5, 12, 12)]));
    assert_eq!(found.len(), 2);
    assert_eq!(found.contours[0].area(), found.contours[1].area());
    assert_eq!(dominant_contour(&found), Some(0));
}

#[test]
fn test_zero_area_contours_fall_back_to_first() {
    let set = ContourSet {
        contours: vec![outer(&[(3, 3)]), outer(&[(8, 8), (9, 8)])],
    };
    assert_eq!(dominant_contour(&set), Some(0));
}

#[test]
fn test_bounding_rect() {
    let contour = outer(&[(3, 4), (10, 4), (10, 9), (3, 9)]);
    let rect = contour.bounding_rect().expect("rect");
    assert_eq!((rect.left(), rect.top(), rect.width(), rect.height()), (3, 4, 8, 6));
    assert!(outer(&[]).bounding_rect().is_none());
}
