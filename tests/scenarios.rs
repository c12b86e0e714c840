use fatou_explorer::core::dynamics::maps::tangent_quadratic::TangentQuadratic;
use fatou_explorer::core::util::screen_to_plane::{plane_to_screen, screen_to_plane};
use fatou_explorer::core::data::point::Point;
use fatou_explorer::{
    Camera, Complex, EngineState, FatouColourMap, FatouKind, FatouSystem, FrameDeltas, MapKinds,
    ParameterSet, SliderId, Thresholds, render_frame, render_frame_parallel,
};

fn reference_params() -> ParameterSet {
    ParameterSet::default()
}

#[test]
fn reference_orbit_settles_on_a_two_cycle() {
    let system = FatouSystem::new(TangentQuadratic);
    let thresholds = Thresholds::new(50, 100.0, 0.01).unwrap();

    let (result, orbit) = system.trace(Complex::new(0.0, 0.0), &reference_params(), &thresholds);

    assert_eq!(result.kind, FatouKind::Convergent);
    assert_eq!(result.period, 1);
    assert!((0.0..1e-9).contains(&result.value), "value {}", result.value);

    let points = orbit.points();
    assert_eq!(points.len(), 51);
    assert_eq!(points[1], Complex::new(-1.1423912339336475, 0.0));
    assert_eq!(points[49], Complex::new(-1.126411416756655, 0.0));
    assert_eq!(points[50], Complex::new(0.1264114458660872, 0.0));
}

#[test]
fn seed_escaping_on_first_step_is_divergent() {
    let system = FatouSystem::new(TangentQuadratic);
    let thresholds = Thresholds::default();

    let result = system.iterate(Complex::new(5.0, 0.0), &reference_params(), &thresholds);

    assert_eq!(result.kind, FatouKind::Divergent);
    let t = result.value * thresholds.max_iterations() as f64;
    assert!((0.0..=1.0).contains(&t), "t = {}", t);
}

#[test]
fn single_iteration_budget_still_classifies() {
    let system = FatouSystem::new(MapKinds::TangentQuadratic);
    let thresholds = Thresholds::new(1, 100.0, 0.01).unwrap();
    let offset = 1.5 * 1.0_f64.tanh();
    let fixed_point = (1.0 - (1.0 + 4.0 * offset).sqrt()) / 2.0;
    let cases = [
        (Complex::new(-3.0, -1.5), FatouKind::Divergent),
        (Complex::new(-0.5, -0.25), FatouKind::Indeterminate),
        (Complex::new(0.0, 0.0), FatouKind::Indeterminate),
        (Complex::new(0.5, 0.25), FatouKind::Indeterminate),
        (Complex::new(3.0, 1.5), FatouKind::Divergent),
        (Complex::new(fixed_point, 0.0), FatouKind::Convergent),
    ];

    for (seed, expected) in cases {
        let (result, orbit) = system.trace(seed, &reference_params(), &thresholds);

        assert_eq!(orbit.len(), 2, "seed {}", seed);
        assert_eq!(result.kind, expected, "seed {}", seed);
        assert!(result.value.is_finite(), "seed {}", seed);
        assert_eq!(result.period, 0, "seed {}", seed);
    }
}

#[test]
fn screen_and_plane_round_trip_for_every_pixel() {
    let camera = Camera::new(Complex::new(-0.75, 0.1), 2.5, 64, 48).unwrap();

    for y in 0..48 {
        for x in 0..64 {
            let pixel = Point { x, y };
            assert_eq!(plane_to_screen(screen_to_plane(pixel, &camera), &camera), pixel);
        }
    }
}

#[test]
fn serial_and_parallel_frames_are_byte_identical() {
    let mut state = EngineState::default();
    state.resize(160, 120).unwrap();
    let snapshot = state.snapshot();
    let system = FatouSystem::new(MapKinds::TangentQuadratic);
    let mut serial = vec![0u8; 160 * 120 * 3];
    let mut parallel = vec![0u8; 160 * 120 * 3];

    render_frame(&mut serial, 160, 120, &snapshot, &system, &FatouColourMap).unwrap();
    render_frame_parallel(&mut parallel, 160, 120, &snapshot, &system, &FatouColourMap).unwrap();

    assert_eq!(serial, parallel);
}

#[test]
fn interactive_session_renders_after_input() {
    let mut state = EngineState::default();
    state.resize(80, 60).unwrap();

    let seed_handle = state.slider_screen_position(SliderId::Seed).unwrap();
    assert_eq!(state.begin_drag(seed_handle), Some(SliderId::Seed));
    state.drag_to(Point { x: 40, y: 30 });
    state.end_drag();
    assert_eq!(state.params().seed(), state.camera().center());

    state.apply_deltas(&FrameDeltas {
        pan_x: 1,
        zoom_steps: 1,
        iteration_steps: -1,
        turbo: true,
        ..FrameDeltas::default()
    });

    let snapshot = state.snapshot();
    assert_eq!(snapshot.params.seed(), Complex::new(0.0, 4.0));
    assert_eq!(snapshot.thresholds.max_iterations(), 45);

    let mut frame = vec![0u8; 80 * 60 * 3];
    render_frame_parallel(
        &mut frame,
        80,
        60,
        &snapshot,
        &FatouSystem::new(MapKinds::TangentQuadratic),
        &FatouColourMap,
    )
    .unwrap();
}
