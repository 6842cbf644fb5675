use approx::{assert_abs_diff_eq, assert_relative_eq};
use lander_simulation::trajectory_system::kinematics::{altitude, velocity};
use lander_simulation::{
    parse_fuel_rates, Bisection, Lander, LanderState, LandingOutcome, MissionConfig,
    MissionControl, RootFindingError, SimulationError, Telemetry, ALTITUDE_TOLERANCE,
    DRY_MASS, EXHAUST_VELOCITY, INITIAL_MASS, LUNAR_GRAVITY, TIME_STEP, TIME_TOLERANCE,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Helper function to create the lander in its classic starting position
fn create_test_lander() -> Lander {
    let config = MissionConfig::default();
    Lander::new(config.initial_state, config.gravity, config.exhaust_velocity).unwrap()
}

fn random_fuel_rate(rng: &mut StdRng) -> f64 {
    if rng.gen_bool(0.25) {
        0.0
    } else {
        rng.gen_range(8.0..=200.0)
    }
}

#[test]
fn test_first_radar_check_with_full_burn_of_150() {
    let mut lander = create_test_lander();
    let before = lander.state();

    let touchdown = lander.advance(150.0, 10.0).unwrap();
    let after = lander.state();

    assert!(!touchdown);
    assert_eq!(after.time, 10.0);
    assert_eq!(after.mass, 31_000.0);
    assert_relative_eq!(
        after.altitude,
        altitude(10.0, 120.0, -1.0, 32_500.0, 1.8, 150.0, 0.001),
        epsilon = 1e-12
    );
    assert_relative_eq!(
        after.velocity,
        velocity(10.0, -1.0, 32_500.0, 1.8, 150.0, 0.001),
        epsilon = 1e-12
    );

    // The caller's earlier snapshot is unaffected by the step.
    assert_eq!(before, MissionConfig::default().initial_state);
}

#[test]
fn test_ballistic_impact_is_independent_of_duration() {
    let state = LanderState::new(5.0, 42.0, 0.3, DRY_MASS, DRY_MASS);
    let mut outcomes = Vec::new();
    for duration in [0.1, 10.0, 1_000.0] {
        let mut lander = Lander::new(state, LUNAR_GRAVITY, EXHAUST_VELOCITY).unwrap();
        assert!(lander.advance(0.0, duration).unwrap());
        outcomes.push(lander.state());
    }

    assert!(outcomes.iter().all(|s| s.altitude == 0.0));
    assert!(outcomes.windows(2).all(|pair| pair[0] == pair[1]));
    assert!(outcomes[0].time > state.time);
    assert!(outcomes[0].velocity < 0.0);
}

#[test]
fn test_exhaustion_hands_off_to_ballistic_fall() {
    let mut lander = create_test_lander();
    let mut steps = 0;
    while !lander.state().is_out_of_propellant() {
        assert!(!lander.advance(200.0, TIME_STEP).unwrap());
        steps += 1;
    }
    assert_eq!(steps, 8);
    let empty = lander.state();
    assert_eq!(empty.mass, DRY_MASS);

    // Any command now ends in free fall to the surface.
    assert!(lander.advance(137.0, 3.0).unwrap());
    let landed = lander.state();
    let expected = (empty.velocity
        + (empty.velocity.powi(2) + 2.0 * LUNAR_GRAVITY * empty.altitude).sqrt())
        / LUNAR_GRAVITY;
    assert_eq!(landed.altitude, 0.0);
    assert_relative_eq!(landed.time - empty.time, expected, epsilon = 1e-9);
    assert_eq!(landed.mass, DRY_MASS);
}

#[test]
fn test_partial_burn_stops_at_dry_mass() {
    let state = MissionConfig::default().initial_state.with_mass(DRY_MASS + 1_234.0);
    let mut lander = Lander::new(state, LUNAR_GRAVITY, EXHAUST_VELOCITY).unwrap();

    lander.advance(200.0, TIME_STEP).unwrap();
    let after = lander.state();

    assert_eq!(after.mass, DRY_MASS);
    assert_relative_eq!(after.time, 1_234.0 / 200.0, epsilon = 1e-12);
}

#[test]
fn test_free_fall_touchdown_is_refined_within_tolerance() {
    let mut lander = create_test_lander();
    let mut touchdown = false;
    let mut steps = 0;
    while !touchdown {
        touchdown = lander.advance(0.0, TIME_STEP).unwrap();
        steps += 1;
    }
    let state = lander.state();

    assert_eq!(steps, 12);
    assert_eq!(state.altitude, 0.0);
    assert_eq!(state.mass, INITIAL_MASS);
    // 120 + (-1) t - 0.0005 t^2 = 0
    let exact = (-1.0 + (1.0_f64 + 4.0 * 0.0005 * 120.0).sqrt()) / (2.0 * 0.0005);
    assert_abs_diff_eq!(state.time, exact, epsilon = TIME_TOLERANCE);
    assert_abs_diff_eq!(
        120.0 - state.time - 0.0005 * state.time.powi(2),
        0.0,
        epsilon = ALTITUDE_TOLERANCE
    );
}

#[test]
fn test_random_flights_conserve_mass_and_time() {
    let mut rng = StdRng::seed_from_u64(0x1a4d);

    for _ in 0..50 {
        let mut lander = create_test_lander();
        let mut touchdown = false;

        for _ in 0..200 {
            let before = lander.state();
            let k = random_fuel_rate(&mut rng);
            touchdown = lander.advance(k, TIME_STEP).unwrap();
            let after = lander.state();

            assert!(after.time > before.time, "time must advance: {:?}", after);
            assert!(after.mass >= after.dry_mass);
            assert!(after.mass <= before.mass);
            assert!(before.mass - after.mass <= before.remaining_propellant());
            assert_eq!(after.dry_mass, before.dry_mass);
            assert!(after.altitude >= 0.0);

            if touchdown {
                assert_eq!(after.altitude, 0.0);
                break;
            }
        }
        assert!(touchdown, "every flight ends on the surface");
    }
}

#[test]
fn test_mission_control_full_flight_report() {
    let mut mission = MissionControl::new(MissionConfig::default()).unwrap();
    let mut telemetry = Telemetry::new();

    let records = mission
        .execute(&parse_fuel_rates("200,200,200,200,200,200,200,200,200").unwrap())
        .unwrap();
    for record in mission.history() {
        telemetry.record(record);
    }

    assert_eq!(records.len(), 9);
    assert_eq!(telemetry.lines().len(), 10);
    assert!(mission.is_complete());
    assert_eq!(mission.fuel_out_time(), Some(80.0));

    let final_state = mission.final_state().unwrap();
    assert_eq!(final_state.altitude, 0.0);
    let report = Telemetry::final_report(&final_state, mission.fuel_out_time());
    assert!(report.starts_with("FUEL OUT AT 80.00 SECS\nON THE MOON AT "));
    assert!(matches!(
        LandingOutcome::from_impact_velocity(final_state.velocity),
        LandingOutcome::NoSurvivors { .. }
    ));
}

#[test]
fn test_mission_control_rejects_inconsistent_state() {
    let state = MissionConfig::default().initial_state.with_mass(DRY_MASS - 0.5);
    let config = MissionConfig::default().with_initial_state(state);
    assert!(matches!(
        MissionControl::new(config),
        Err(SimulationError::InvalidState(_))
    ));
}

#[test]
fn test_bisection_contract() {
    let solver = Bisection::new(1e-3, 1e-2);
    let root = solver.find_root(|x| x - 5.0, 0.0, 10.0).unwrap();
    assert_abs_diff_eq!(root, 5.0, epsilon = 1e-2);
    assert!((root - 5.0).abs() < 1e-3);

    assert!(matches!(
        solver.find_root(|x| x - 5.0, 10.0, 0.0),
        Err(RootFindingError::InvalidInterval { .. })
    ));
    assert!(matches!(
        solver.find_root(|x| x - 50.0, 0.0, 10.0),
        Err(RootFindingError::NoSignChange { .. })
    ));
}

#[test]
fn test_errors_render_messages() {
    let err = SimulationError::from(RootFindingError::InvalidInterval { a: 1.0, b: 0.0 });
    assert_eq!(err.to_string(), "Root finding error: Invalid interval [1, 0]");

    let err = parse_fuel_rates("500").unwrap_err();
    assert!(err.to_string().starts_with("Invalid input: "));
}
