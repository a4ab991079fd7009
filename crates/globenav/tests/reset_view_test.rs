//! End-to-end tests for the reset-view control against a headless map.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use globenav::*;
use proptest::prelude::*;
use serde_json::json;

fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
    let count = Arc::new(AtomicUsize::new(0));
    let handle = Arc::clone(&count);
    (count, move || {
        handle.fetch_add(1, Ordering::SeqCst);
    })
}

fn surface_entity(id: &str) -> Arc<Entity> {
    let position = Ellipsoid::WGS84.cartographic_to_cartesian(&Cartographic::from_degrees(
        2.35, 48.85, 0.0,
    ));
    Arc::new(Entity::new(id, position).with_radius(50.0))
}

#[test]
fn test_point_view_flies_with_default_duration() {
    let view = DefaultView::point(Cartographic::new(10.0, 20.0, 0.0));
    let mut control = ResetViewControl::new(
        HeadlessMap::new(),
        ResetViewOptions::default().with_default_view(view),
    );

    control.activate();

    let expected = Ellipsoid::WGS84.cartographic_to_cartesian(&Cartographic::new(10.0, 20.0, 0.0));
    let map = control.context();
    assert_eq!(map.flight_count(), 1);
    assert_eq!(
        map.calls(),
        &[CameraCall::FlyTo {
            destination: Destination::Cartesian(expected),
            orientation: Some(Orientation::reset_default()),
            duration: DEFAULT_DURATION_SECONDS,
            has_complete: false,
        }]
    );
}

#[test]
fn test_explicit_view_completes_once() {
    let destination = DVec3::new(4_000_000.0, 3_000_000.0, 4_000_000.0);
    let orientation = Orientation::new(0.5, -0.8, 0.0);
    let (completions, on_complete) = counter();
    let options = ResetViewOptions::default()
        .with_default_view(DefaultView::explicit(destination, orientation))
        .with_duration(5.0)
        .with_reset_success(on_complete);
    let mut control = ResetViewControl::new(HeadlessMap::new(), options);

    assert_eq!(
        control.reset_view(),
        ResetOutcome::Flight(TargetKind::ExplicitView)
    );
    assert!(!control.is_active(), "active must clear before the flight lands");
    assert_eq!(
        control.context().calls(),
        &[CameraCall::FlyTo {
            destination: Destination::Cartesian(destination),
            orientation: Some(orientation),
            duration: 5.0,
            has_complete: true,
        }]
    );

    let map = control.context_mut();
    for _ in 0..4 {
        map.tick(1.0);
        assert_eq!(completions.load(Ordering::SeqCst), 0);
    }
    map.tick(1.0);
    assert_eq!(completions.load(Ordering::SeqCst), 1);
    map.tick(10.0);
    assert_eq!(completions.load(Ordering::SeqCst), 1);

    let pose = map.camera().pose();
    assert_eq!(pose.position, destination);
    assert_eq!(pose.heading, 0.5);
    assert_eq!(pose.pitch, -0.8);
}

#[test]
fn test_rectangle_view_completes_once() {
    let (completions, on_complete) = counter();
    let rect = Rectangle::from_degrees(5.0, 45.0, 10.0, 50.0);
    let options = ResetViewOptions::default()
        .with_default_view(DefaultView::rectangle(rect))
        .with_orientation(Orientation::from_heading(0.0))
        .with_reset_success(on_complete);
    let mut control = ResetViewControl::new(HeadlessMap::new(), options);

    assert_eq!(
        control.reset_view(),
        ResetOutcome::Flight(TargetKind::BoundingRegion)
    );
    control.context_mut().tick(DEFAULT_DURATION_SECONDS);
    assert_eq!(completions.load(Ordering::SeqCst), 1);

    let map = control.context();
    let landed = map
        .camera()
        .position_cartographic()
        .expect("camera above the ellipsoid");
    assert!((landed.longitude - 7.5f64.to_radians()).abs() < 1e-9);
    assert!((landed.latitude - 47.5f64.to_radians()).abs() < 1e-9);
}

#[test]
fn test_point_view_never_calls_reset_success() {
    let (completions, on_complete) = counter();
    let options = ResetViewOptions::default()
        .with_default_view(DefaultView::point(Cartographic::from_degrees(0.0, 0.0, 1000.0)))
        .with_reset_success(on_complete);
    let mut control = ResetViewControl::new(HeadlessMap::new(), options);
    control.activate();
    control.context_mut().tick(10.0);
    assert_eq!(completions.load(Ordering::SeqCst), 0);
}

#[test]
fn test_locked_control_never_touches_camera() {
    let configurations = vec![
        None,
        Some(DefaultView::point(Cartographic::new(0.1, 0.2, 0.0))),
        Some(DefaultView::rectangle(Rectangle::new(0.0, 0.0, 0.1, 0.1))),
        Some(DefaultView::object(
            Tileset::new("city", BoundingSphere::new(DVec3::X * 6.4e6, 10.0)).into_handle(),
        )),
        Some(DefaultView::explicit(DVec3::Z * 7e6, Orientation::default())),
    ];

    let rover = surface_entity("rover");
    for (view, tracked) in configurations
        .into_iter()
        .flat_map(|view| [(view.clone(), false), (view, true)])
    {
        let mut options = ResetViewOptions::default().with_navigation_locked(true);
        options.default_reset_view = view;
        let mut control = ResetViewControl::new(HeadlessMap::new(), options);
        if tracked {
            control
                .context_mut()
                .set_tracked_entity(Some(rover.clone() as ObjectHandle));
            control.context_mut().tick(1.0);
            control.context_mut().clear_calls();
        }
        let home = control.context().camera().pose();

        assert_eq!(control.reset_view(), ResetOutcome::Skipped);
        control.context_mut().tick(5.0);
        assert!(control.context().calls().is_empty());
        assert_eq!(control.context().camera().pose(), home);
    }
}

#[test]
fn test_disabled_camera_input_skips_reset() {
    let mut map = HeadlessMap::new();
    map.set_camera_input_enabled(false);
    let mut control = ResetViewControl::new(map, ResetViewOptions::default());
    assert_eq!(control.reset_view(), ResetOutcome::Skipped);
    assert!(control.context().calls().is_empty());

    control.context_mut().set_camera_input_enabled(true);
    assert_eq!(control.reset_view(), ResetOutcome::Home);
}

#[test]
fn test_tracked_entity_is_reasserted_without_flight() {
    let entity = surface_entity("rover");
    let handle: ObjectHandle = entity.clone();
    let options = ResetViewOptions::default()
        .with_default_view(DefaultView::point(Cartographic::new(0.1, 0.2, 0.0)));
    let mut control = ResetViewControl::new(HeadlessMap::new(), options);
    control.context_mut().set_tracked_entity(Some(handle));
    control.context_mut().clear_calls();

    // Move the entity and pull the camera away; the reset must re-lock onto it.
    let moved = Ellipsoid::WGS84.cartographic_to_cartesian(&Cartographic::from_degrees(
        -0.12, 51.5, 0.0,
    ));
    entity.set_position(moved);
    control.context_mut().camera_mut().fly_home(0.0);

    assert_eq!(control.reset_view(), ResetOutcome::Retracked);

    let map = control.context();
    assert_eq!(map.flight_count(), 0);
    assert_eq!(
        map.calls(),
        &[
            CameraCall::TrackedEntity { id: None },
            CameraCall::TrackedEntity {
                id: Some("rover".to_string())
            },
        ]
    );
    let tracked = map.tracked_entity().expect("entity still tracked");
    assert!(same_object(&tracked, &(entity.clone() as ObjectHandle)));
    assert!(map.camera().position().distance(moved) < 1_000.0);
}

#[test]
fn test_dropped_tracked_entity_falls_back_to_default_view() {
    let entity: ObjectHandle = surface_entity("balloon");
    let mut control = ResetViewControl::new(HeadlessMap::new(), ResetViewOptions::default());
    control.context_mut().set_tracked_entity(Some(entity.clone()));
    drop(entity);
    control.context_mut().clear_calls();

    assert_eq!(control.reset_view(), ResetOutcome::Home);
}

#[test]
fn test_no_configuration_goes_home() {
    let mut control = ResetViewControl::new(HeadlessMap::new(), ResetViewOptions::default());
    assert_eq!(control.reset_view(), ResetOutcome::Home);
    assert_eq!(
        control.context().calls(),
        &[CameraCall::FlyHome {
            duration: HOME_FLIGHT_DURATION
        }]
    );
}

#[test]
fn test_no_configuration_without_home_uses_default_extent() {
    let options = ResetViewOptions::default().with_duration(4.0);
    let mut control = ResetViewControl::new(HeadlessMap::new().with_fly_home(false), options);
    assert_eq!(control.reset_view(), ResetOutcome::DefaultExtent);
    assert_eq!(
        control.context().calls(),
        &[CameraCall::FlyTo {
            destination: Destination::Rectangle(DEFAULT_VIEW_RECTANGLE),
            orientation: None,
            duration: 4.0,
            has_complete: false,
        }]
    );
}

#[test]
fn test_failing_tileset_zoom_is_absorbed() {
    init_logging();
    let tileset = Arc::new(Tileset::new(
        "photogrammetry",
        BoundingSphere::new(DVec3::X * 6.4e6, 300.0),
    ));
    tileset.destroy();
    let handle: ObjectHandle = tileset;
    let mut control = ResetViewControl::new(
        HeadlessMap::new(),
        ResetViewOptions::default().with_object(handle),
    );
    let before = control.context().camera().pose();

    assert_eq!(
        control.reset_view(),
        ResetOutcome::Failed(TargetKind::ObjectReference)
    );
    assert_eq!(control.phase(), ControlPhase::Idle);
    control.context_mut().tick(5.0);
    assert_eq!(control.context().camera().pose(), before);
    assert!(control.context().calls().is_empty());
}

#[test]
fn test_unplaced_entity_zoom_is_absorbed() {
    let entity: ObjectHandle = Arc::new(Entity::unplaced("ghost"));
    let mut control = ResetViewControl::new(
        HeadlessMap::new(),
        ResetViewOptions::default().with_object(entity),
    );
    let before = control.context().camera().pose();

    assert_eq!(
        control.reset_view(),
        ResetOutcome::Failed(TargetKind::NamedEntityReference)
    );
    assert_eq!(control.phase(), ControlPhase::Idle);
    control.context_mut().tick(5.0);
    assert!(control.context().calls().is_empty());
    assert_eq!(control.context().camera().pose(), before);
}

#[test]
fn test_tileset_and_entity_zoom() {
    let tileset = Tileset::new("city", BoundingSphere::new(DVec3::X * 6.4e6, 300.0)).into_handle();
    let mut control = ResetViewControl::new(
        HeadlessMap::new(),
        ResetViewOptions::default().with_object(tileset),
    );
    assert_eq!(
        control.reset_view(),
        ResetOutcome::Zoom(TargetKind::ObjectReference)
    );

    let entity: ObjectHandle = surface_entity("ship");
    control.set_options(ResetViewOptions::default().with_object(entity));
    assert_eq!(
        control.reset_view(),
        ResetOutcome::Zoom(TargetKind::NamedEntityReference)
    );
    control.context_mut().tick(ZOOM_DURATION);
    assert!(!control.context().camera().is_flying());
}

#[test]
fn test_point_takes_precedence_over_object_and_explicit() {
    let tileset = Tileset::new("city", BoundingSphere::new(DVec3::X * 6.4e6, 300.0)).into_handle();
    let mut view = DefaultView::explicit(DVec3::Z * 7e6, Orientation::default());
    view.longitude = Some(0.0);
    view.latitude = Some(0.0);
    view.object = Some(tileset);
    let mut control = ResetViewControl::new(
        HeadlessMap::new(),
        ResetViewOptions::default().with_default_view(view),
    );
    assert_eq!(
        control.reset_view(),
        ResetOutcome::Flight(TargetKind::GeodeticPoint)
    );
}

#[test]
fn test_second_reset_supersedes_first_flight() {
    let (completions, on_complete) = counter();
    let options = ResetViewOptions::default()
        .with_default_view(DefaultView::rectangle(Rectangle::from_degrees(
            0.0, 0.0, 10.0, 10.0,
        )))
        .with_reset_success(on_complete);
    let mut control = ResetViewControl::new(HeadlessMap::new(), options);

    control.activate();
    control.context_mut().tick(1.0);
    control.activate();
    assert_eq!(control.context().flight_count(), 2);

    control.context_mut().tick(DEFAULT_DURATION_SECONDS);
    assert_eq!(completions.load(Ordering::SeqCst), 1);
}

#[test]
fn test_options_from_json_drive_the_control() {
    let options = ResetViewOptions::from_json(
        r#"{
            "defaultResetView": {"west": -0.2, "south": 0.7, "east": 0.1, "north": 0.9},
            "duration": 1.5,
            "orientation": {"heading": 0.25}
        }"#,
    )
    .expect("valid options");
    let mut control = ResetViewControl::new(HeadlessMap::new(), options);
    assert_eq!(
        control.reset_view(),
        ResetOutcome::Flight(TargetKind::BoundingRegion)
    );
    assert_eq!(
        control.context().calls(),
        &[CameraCall::FlyTo {
            destination: Destination::Rectangle(Rectangle::new(-0.2, 0.7, 0.1, 0.9)),
            orientation: Some(Orientation::from_heading(0.25)),
            duration: 1.5,
            has_complete: false,
        }]
    );
}

#[test]
fn test_explicit_view_from_json_value() {
    let view: DefaultView = serde_json::from_value(json!({
        "destination": [1_000_000.0, 2_000_000.0, 7_000_000.0],
        "orientation": {"heading": 0.5, "pitch": -0.8, "roll": 0.0}
    }))
    .expect("valid view");
    let mut control = ResetViewControl::new(
        HeadlessMap::new(),
        ResetViewOptions::default()
            .with_default_view(view)
            .with_duration(2.0),
    );

    assert_eq!(
        control.reset_view(),
        ResetOutcome::Flight(TargetKind::ExplicitView)
    );
    assert_eq!(
        control.context().calls(),
        &[CameraCall::FlyTo {
            destination: Destination::Cartesian(DVec3::new(
                1_000_000.0,
                2_000_000.0,
                7_000_000.0
            )),
            orientation: Some(Orientation::new(0.5, -0.8, 0.0)),
            duration: 2.0,
            has_complete: false,
        }]
    );
}

#[test]
fn test_options_serialize_with_camel_case_keys() {
    let options = ResetViewOptions::default()
        .with_default_view(DefaultView::rectangle(Rectangle::new(-0.2, 0.7, 0.1, 0.9)))
        .with_duration(1.5)
        .with_navigation_locked(true)
        .with_reset_success(|| {});

    let value = serde_json::to_value(&options).expect("serializable options");
    assert_eq!(value["defaultResetView"]["west"], json!(-0.2));
    assert_eq!(value["defaultResetView"]["north"], json!(0.9));
    assert_eq!(value["duration"], json!(1.5));
    assert_eq!(value["navigationLocked"], json!(true));
    assert!(value.get("resetSuccess").is_none());

    let restored = ResetViewOptions::from_json(&value.to_string()).expect("round trip");
    assert!(restored.navigation_locked);
    assert!(restored.reset_success.is_none());
}

#[test]
fn test_bad_json_is_a_config_error() {
    let err = ResetViewOptions::from_json("{\"defaultResetView\": 12}").unwrap_err();
    assert!(matches!(err, GlobeNavError::Config(_)));
}

proptest! {
    /// West >= east or south >= north is rejected before any camera request.
    #[test]
    fn prop_unordered_rectangles_are_rejected(
        a in -3.0..3.0f64,
        b in -3.0..3.0f64,
        c in -1.5..1.5f64,
        d in -1.5..1.5f64,
        swap_longitudes in any::<bool>(),
    ) {
        let (low_lon, high_lon) = if a < b { (a, b) } else { (b, a) };
        let (low_lat, high_lat) = if c < d { (c, d) } else { (d, c) };
        let rect = if swap_longitudes {
            Rectangle::new(high_lon, low_lat, low_lon, high_lat)
        } else {
            Rectangle::new(low_lon, high_lat, high_lon, low_lat)
        };

        let mut control = ResetViewControl::new(
            HeadlessMap::new(),
            ResetViewOptions::default().with_default_view(DefaultView::rectangle(rect)),
        );
        prop_assert_eq!(control.reset_view(), ResetOutcome::Rejected);
        prop_assert!(control.context().calls().is_empty());
    }
}
