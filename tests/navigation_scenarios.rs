//! End-to-end navigation scenarios driven through the public API.

use glam::{UVec2, Vec2, Vec3};
use navcam::camera::{
    CameraCommand, CameraSnapshot, FlightCamera, HorizonCamera, MoveDirection,
    POLE_CLAMP_DEGREES,
};
use navcam::input::{InputEvent, InputProcessor, KeyBindings, MouseButton};
use navcam::options::Options;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn walker() -> HorizonCamera {
    HorizonCamera::builder()
        .with_position(Vec3::new(0.0, 0.0, 50.0))
        .with_direction(Vec3::new(0.0, 0.0, -1.0))
        .with_world_up_direction(Vec3::new(0.0, 1.0, 0.0))
        .with_field_of_view(45.0)
        .with_speed(2.0)
        .build()
}

#[test]
fn horizon_camera_quarter_turn_and_walk() {
    init_logging();
    let mut camera = walker();

    assert!(camera.right().abs_diff_eq(Vec3::X, 1e-6));
    assert!(camera.up().abs_diff_eq(Vec3::Y, 1e-6));
    assert!((camera.forward_len() - 1.0).abs() < 1e-6);

    let original_direction = camera.direction();
    camera.pitch_and_yaw(0.0, 90.0);
    let alignment = camera.right().dot(original_direction).abs();
    assert!((alignment - 1.0).abs() < 1e-4, "alignment {alignment}");
    assert!(camera.basis().is_orthonormal());

    let forward = camera.forward();
    let basis = *camera.basis();
    camera.walk(5.0, MoveDirection::Forward);
    let expected = Vec3::new(0.0, 0.0, 50.0) + 5.0 * forward;
    assert!(camera.position().abs_diff_eq(expected, 1e-5));
    assert_eq!(*camera.basis(), basis);
}

#[test]
fn long_mouse_session_keeps_invariants() {
    init_logging();
    let mut camera = walker();
    let world_up = camera.world_up();
    let cos_max = POLE_CLAMP_DEGREES.to_radians().cos();
    let mut input = InputProcessor::with_key_bindings(KeyBindings::walking());

    let start = InputEvent::CursorMoved { x: 400.0, y: 550.0 };
    assert_eq!(input.handle_event(start, camera.state()), None);
    let press = InputEvent::MouseButton {
        button: MouseButton::Left,
        pressed: true,
    };
    let _ = input.handle_event(press, camera.state());

    for i in 0..2_000 {
        let t = i as f32 * 0.05;
        let event = InputEvent::CursorMoved {
            x: 400.0 + 300.0 * t.sin(),
            y: 300.0 + 250.0 * (0.7 * t).cos(),
        };
        if let Some(cmd) = input.handle_event(event, camera.state()) {
            assert!(camera.apply(cmd));
        }
        if i % 10 == 0 {
            if let Some(cmd) = input.handle_key_press("KeyW", camera.state()) {
                assert!(camera.apply(cmd));
            }
        }

        assert!(camera.basis().is_orthonormal());
        assert!(camera.forward().dot(camera.direction()) >= cos_max - 1e-5);
        assert!(camera.right().dot(world_up).abs() < 1e-5);
    }
    assert_eq!(camera.world_up(), world_up);
    // Walking never leaves the horizon plane.
    assert!(camera.position().y.abs() < 1e-3);
}

#[test]
fn flight_commands_round_trip_through_apply() {
    init_logging();
    let mut camera = FlightCamera::builder()
        .with_position(Vec3::new(0.0, 5.0, 20.0))
        .with_rotation_speed(10.0)
        .build();
    let input = InputProcessor::with_key_bindings(KeyBindings::flying());

    for _ in 0..9 {
        let cmd = input.handle_key_press("KeyA", camera.state()).unwrap();
        assert_eq!(cmd, CameraCommand::Roll { degrees: 2.0 });
        assert!(camera.apply(cmd));
    }
    // Roll never changes where the camera looks.
    assert!(camera.direction().abs_diff_eq(Vec3::NEG_Z, 1e-5));
    assert!(camera.up().x > 0.0);

    camera.fly(3.0);
    assert!(camera.position().abs_diff_eq(Vec3::new(0.0, 5.0, 17.0), 1e-5));
}

#[test]
fn picking_ray_hits_target_in_front() {
    init_logging();
    let camera = FlightCamera::builder()
        .with_position(Vec3::new(0.0, 0.0, 10.0))
        .with_field_of_view(60.0)
        .with_near_plane(0.5)
        .build();
    let window = UVec2::new(1024, 768);
    let ray = camera.screen_point_to_ray(Vec2::new(512.0, 384.0), window);

    // The center ray passes through the origin.
    let t = (ray.origin.z) / -ray.direction.z;
    assert!(ray.at(t).abs_diff_eq(Vec3::ZERO, 1e-4));
    assert!((ray.origin.z - 9.5).abs() < 1e-4);
}

#[test]
fn options_seed_a_working_camera() {
    init_logging();
    let options: Options = toml::from_str(
        r#"
[camera]
position = [0.0, 1.7, 5.0]
direction = [0.0, 0.0, -1.0]
speed = 3.0
field_of_view = 50.0

[controls.sensitivity]
key_press_seconds = 0.5
"#,
    )
    .unwrap();

    let mut camera = options.camera.horizon_builder().build();
    let input = options.controls.input_processor();
    let cmd = input.handle_key_press("Space", camera.state()).unwrap();
    assert!(camera.apply(cmd));

    assert!(camera.position().abs_diff_eq(Vec3::new(0.0, 3.2, 5.0), 1e-5));
    let snapshot = CameraSnapshot::from(&camera);
    assert_eq!(snapshot.position, camera.position());
    assert_eq!(camera.state().field_of_view(), Some(50.0));
}
