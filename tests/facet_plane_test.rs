use crystal_designer::scene::config::{FacetConfig, Frame, Side};
use crystal_designer::scene::facet_plane::FacetPlane;
use glam::f64::{DMat3, DVec3};
use glam::i32::IVec3;

fn facet(frame: Frame, miller: IVec3, offset: f64, side: Side) -> FacetConfig {
    FacetConfig {
        frame,
        miller,
        offset,
        side,
    }
}

// 90 degree rotation about z: x -> y
fn z_quarter_turn() -> DMat3 {
    DMat3::from_cols(
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(-1.0, 0.0, 0.0),
        DVec3::new(0.0, 0.0, 1.0),
    )
}

#[test]
fn test_axis_miller_resolves_to_axis_normal() {
    let plane = FacetPlane::resolve(
        &facet(Frame::Sea, IVec3::new(1, 0, 0), 2.0, Side::Inside),
        &DMat3::IDENTITY,
        &DMat3::IDENTITY,
    )
    .unwrap();

    assert_eq!(plane.normal, DVec3::new(1.0, 0.0, 0.0));
    assert_eq!(plane.offset, 2.0);
    assert_eq!(plane.side, Side::Inside);
}

#[test]
fn test_miller_normal_is_normalized() {
    let plane = FacetPlane::resolve(
        &facet(Frame::Sea, IVec3::new(1, 1, 1), 0.0, Side::Inside),
        &DMat3::IDENTITY,
        &DMat3::IDENTITY,
    )
    .unwrap();

    assert!((plane.normal.length() - 1.0).abs() < 1e-12);
    let expected = DVec3::ONE / 3.0_f64.sqrt();
    assert!((plane.normal - expected).length() < 1e-12);
}

#[test]
fn test_zero_miller_is_dropped_not_fatal() {
    let plane = FacetPlane::resolve(
        &facet(Frame::Sea, IVec3::ZERO, 1.0, Side::Inside),
        &DMat3::IDENTITY,
        &DMat3::IDENTITY,
    );
    assert!(plane.is_none());
}

#[test]
fn test_frame_selects_the_matching_rotation() {
    let sea = DMat3::IDENTITY;
    let island = z_quarter_turn();

    let sea_plane = FacetPlane::resolve(
        &facet(Frame::Sea, IVec3::new(1, 0, 0), 0.0, Side::Inside),
        &sea,
        &island,
    )
    .unwrap();
    let island_plane = FacetPlane::resolve(
        &facet(Frame::Island, IVec3::new(1, 0, 0), 0.0, Side::Inside),
        &sea,
        &island,
    )
    .unwrap();

    assert!((sea_plane.normal - DVec3::new(1.0, 0.0, 0.0)).length() < 1e-12);
    assert!((island_plane.normal - DVec3::new(0.0, 1.0, 0.0)).length() < 1e-12);
}

#[test]
fn test_inside_keeps_points_below_the_offset() {
    let plane = FacetPlane::resolve(
        &facet(Frame::Sea, IVec3::new(1, 0, 0), 2.0, Side::Inside),
        &DMat3::IDENTITY,
        &DMat3::IDENTITY,
    )
    .unwrap();

    assert!(plane.keeps(DVec3::new(-5.0, 0.0, 0.0)));
    assert!(plane.keeps(DVec3::new(1.9, 3.0, -7.0)));
    assert!(!plane.keeps(DVec3::new(2.1, 0.0, 0.0)));
}

#[test]
fn test_outside_keeps_the_complement() {
    let inside = FacetPlane::resolve(
        &facet(Frame::Sea, IVec3::new(0, 1, 0), -1.0, Side::Inside),
        &DMat3::IDENTITY,
        &DMat3::IDENTITY,
    )
    .unwrap();
    let outside = FacetPlane::resolve(
        &facet(Frame::Sea, IVec3::new(0, 1, 0), -1.0, Side::Outside),
        &DMat3::IDENTITY,
        &DMat3::IDENTITY,
    )
    .unwrap();

    // Away from the boundary, exactly one side keeps each point
    for y in [-10.0, -2.0, 0.0, 3.0] {
        let rel = DVec3::new(0.5, y, -0.5);
        assert_ne!(inside.keeps(rel), outside.keeps(rel), "y = {}", y);
    }
}

#[test]
fn test_points_on_the_plane_are_kept_by_both_sides() {
    for side in [Side::Inside, Side::Outside] {
        let plane = FacetPlane::resolve(
            &facet(Frame::Sea, IVec3::new(1, 0, 0), 4.0, side),
            &DMat3::IDENTITY,
            &DMat3::IDENTITY,
        )
        .unwrap();
        assert!(plane.keeps(DVec3::new(4.0, 1.0, 2.0)));
    }
}
