use approx::assert_relative_eq;
use linkwork::{
    Hinge, LinkId, MechanismError, Resolution, Simulation, SolverConfig, StepObserver, Vector2,
};

#[derive(Default)]
struct CountingObserver {
    resolved: usize,
    degenerate: usize,
    lock_passes: usize,
    steps: usize,
}

impl StepObserver<f64> for CountingObserver {
    fn on_link_resolved(&mut self, _link: LinkId, resolution: Resolution<f64>) {
        self.resolved += 1;
        if resolution == Resolution::Degenerate {
            self.degenerate += 1;
        }
    }
    fn on_axis_locks_applied(&mut self, _pass: usize) {
        self.lock_passes += 1;
    }
    fn on_step_complete(&mut self) {
        self.steps += 1;
    }
}

#[test]
fn axis_lock_overrides_link_correction() {
    // The link alone would carry the hinge from (50, 50) to (55, 80).
    let rest = 11.0 * 37.0f64.sqrt();

    let mut free = Simulation::<f64>::new();
    let a = free.add_hinge(Hinge::fixed(Vector2::new(49.0, 44.0)));
    let b = free.add_hinge(Hinge::new(Vector2::new(50.0, 50.0)));
    free.add_link(rest, (a, b)).unwrap();
    free.step();
    let moved = free.hinge_position(b).unwrap();
    assert_relative_eq!(moved.x, 55.0, epsilon = 1e-9);
    assert_relative_eq!(moved.y, 80.0, epsilon = 1e-9);

    let mut locked = Simulation::<f64>::new();
    let a = locked.add_hinge(Hinge::fixed(Vector2::new(49.0, 44.0)));
    let b = locked.add_hinge(Hinge::locked(Vector2::new(50.0, 50.0), None, Some(100.0)));
    assert_eq!(locked.hinge_is_fixed(b), Some(false));
    locked.add_link(rest, (a, b)).unwrap();
    locked.step();
    let p = locked.hinge_position(b).unwrap();
    assert_relative_eq!(p.x, 55.0, epsilon = 1e-9);
    assert_eq!(p.y, 100.0);
}

#[test]
fn removing_hinge_cascades_to_its_links() {
    let mut sim = Simulation::<f64>::new();
    let h = sim.add_hinge(Hinge::new(Vector2::new(0.0, 0.0)));
    let a = sim.add_hinge(Hinge::new(Vector2::new(10.0, 0.0)));
    let b = sim.add_hinge(Hinge::new(Vector2::new(0.0, 10.0)));
    let c = sim.add_hinge(Hinge::new(Vector2::new(20.0, 20.0)));
    let d = sim.add_hinge(Hinge::new(Vector2::new(30.0, 20.0)));
    let l1 = sim.add_link(10.0, (h, a)).unwrap();
    let l2 = sim.add_link(10.0, (b, h)).unwrap();
    let l3 = sim.add_link(10.0, (c, d)).unwrap();

    sim.remove_hinge(h);

    assert!(!sim.contains_hinge(h));
    assert_eq!(sim.hinge_count(), 4);
    assert_eq!(sim.link_count(), 1);
    assert!(sim.link(l1).is_none());
    assert!(sim.link(l2).is_none());
    assert!(sim.link(l3).is_some());
    assert_eq!(sim.hinge_position(h), None);

    sim.step();
    assert_eq!(
        sim.link_endpoints(l3),
        Some((Vector2::new(20.0, 20.0), Vector2::new(30.0, 20.0)))
    );

    // Second removal is a no-op.
    sim.remove_hinge(h);
    assert_eq!(sim.hinge_count(), 4);
}

#[test]
fn duplicate_link_returns_existing_handle() {
    let mut sim = Simulation::<f64>::new();
    let a = sim.add_hinge(Hinge::new(Vector2::new(0.0, 0.0)));
    let b = sim.add_hinge(Hinge::new(Vector2::new(1.0, 0.0)));

    let first = sim.add_link(1.0, (a, b)).unwrap();
    let again = sim.add_link(9.0, (b, a)).unwrap();

    assert_eq!(first, again);
    assert_eq!(sim.link_count(), 1);
    assert_eq!(sim.link(first).unwrap().rest_length, 1.0);
}

#[test]
fn invalid_links_are_rejected() {
    let mut sim = Simulation::<f64>::new();
    let a = sim.add_hinge(Hinge::new(Vector2::new(0.0, 0.0)));
    let b = sim.add_hinge(Hinge::new(Vector2::new(1.0, 0.0)));

    assert_eq!(sim.add_link(-1.0, (a, b)), Err(MechanismError::InvalidRestLength));
    assert_eq!(sim.add_link(f64::NAN, (a, b)), Err(MechanismError::InvalidRestLength));
    assert_eq!(sim.add_link(1.0, (a, a)), Err(MechanismError::SelfLink));

    sim.remove_hinge(b);
    assert_eq!(sim.add_link(1.0, (a, b)), Err(MechanismError::UnknownHinge));
    assert_eq!(sim.connect(a, b), Err(MechanismError::UnknownHinge));
    assert_eq!(sim.link_count(), 0);
}

#[test]
fn invalid_config_is_rejected() {
    let bad = SolverConfig::<f64>::new().with_fraction(0.0);
    assert!(matches!(Simulation::with_config(bad), Err(MechanismError::InvalidFraction)));

    let mut sim = Simulation::<f64>::new();
    assert_eq!(sim.set_config(bad), Err(MechanismError::InvalidFraction));
    assert_eq!(sim.config().fraction, 0.5);
}

#[test]
fn zero_pass_config_is_rejected() {
    let mut no_passes = SolverConfig::<f64>::new();
    no_passes.iterations = 0;
    assert!(matches!(
        Simulation::with_config(no_passes),
        Err(MechanismError::InvalidIterations)
    ));

    let mut sim = Simulation::<f64>::new();
    assert_eq!(sim.set_config(no_passes), Err(MechanismError::InvalidIterations));
    let anchor = sim.add_hinge(Hinge::fixed(Vector2::new(0.0, 0.0)));
    let tip = sim.add_hinge(Hinge::new(Vector2::new(10.0, 0.0)));
    sim.add_link(5.0, (anchor, tip)).unwrap();
    sim.step();
    assert_eq!(sim.hinge_position(tip), Some(Vector2::new(7.5, 0.0)));
}

#[test]
fn connect_uses_current_distance() {
    let mut sim = Simulation::<f64>::new();
    let a = sim.add_hinge(Hinge::new(Vector2::new(1.0, 1.0)));
    let b = sim.add_hinge(Hinge::new(Vector2::new(4.0, 5.0)));
    let link = sim.connect(a, b).unwrap();
    assert_eq!(sim.link(link).unwrap().rest_length, 5.0);
}

#[test]
fn locking_both_axes_fixes_hinge() {
    let mut sim = Simulation::<f64>::new();
    let h = sim.add_hinge(Hinge::new(Vector2::new(1.0, 2.0)));

    assert!(sim.set_hinge_locks(h, Some(7.0), None));
    assert_eq!(sim.hinge_is_fixed(h), Some(false));
    assert_eq!(sim.hinge_position(h), Some(Vector2::new(1.0, 2.0)));

    assert!(sim.set_hinge_locks(h, Some(7.0), Some(8.0)));
    assert_eq!(sim.hinge_is_fixed(h), Some(true));
    assert_eq!(sim.hinge_position(h), Some(Vector2::new(7.0, 8.0)));
    assert_eq!(sim.hinge_locks(h), Some((Some(7.0), Some(8.0))));
}

#[test]
fn unfixing_a_fully_locked_hinge_is_refused() {
    let mut sim = Simulation::<f64>::new();
    let h = sim.add_hinge(Hinge::new(Vector2::new(1.0, 2.0)));
    sim.set_hinge_locks(h, Some(7.0), Some(8.0));

    assert!(sim.set_hinge_fixed(h, false));
    assert_eq!(sim.hinge_is_fixed(h), Some(true));
    assert_eq!(sim.hinge_locks(h), Some((Some(7.0), Some(8.0))));

    sim.set_hinge_locks(h, None, Some(8.0));
    sim.set_hinge_fixed(h, false);
    assert_eq!(sim.hinge_is_fixed(h), Some(false));
}

#[test]
fn unknown_handles_are_tolerated() {
    let mut sim = Simulation::<f64>::new();
    let h = sim.add_hinge(Hinge::new(Vector2::new(0.0, 0.0)));
    sim.remove_hinge(h);

    assert!(!sim.set_hinge_position(h, Vector2::new(1.0, 1.0)));
    assert!(!sim.set_hinge_fixed(h, true));
    assert!(!sim.set_hinge_locks(h, None, None));
    assert!(!sim.drag_hinge(h, Vector2::new(1.0, 1.0)));
    assert_eq!(sim.hinge_is_fixed(h), None);
    assert_eq!(sim.hinge_locks(h), None);
}

#[test]
fn fixed_hinge_can_still_be_placed_by_editor() {
    let mut sim = Simulation::<f64>::new();
    let h = sim.add_hinge(Hinge::fixed(Vector2::new(0.0, 0.0)));
    assert!(sim.set_hinge_position(h, Vector2::new(3.0, 3.0)));
    sim.step();
    assert_eq!(sim.hinge_position(h), Some(Vector2::new(3.0, 3.0)));
}

#[test]
fn drag_moves_free_hinge_and_steps() {
    let mut sim = Simulation::<f64>::new();
    let anchor = sim.add_hinge(Hinge::fixed(Vector2::new(0.0, 0.0)));
    let tip = sim.add_hinge(Hinge::new(Vector2::new(5.0, 0.0)));
    sim.connect(anchor, tip).unwrap();

    assert!(!sim.drag_hinge(anchor, Vector2::new(1.0, 1.0)));
    assert_eq!(sim.hinge_position(anchor), Some(Vector2::new(0.0, 0.0)));

    assert!(sim.drag_hinge(tip, Vector2::new(10.0, 0.0)));
    assert_eq!(sim.hinge_position(tip), Some(Vector2::new(7.5, 0.0)));
}

#[test]
fn hinge_near_prefers_latest() {
    let mut sim = Simulation::<f64>::new();
    let first = sim.add_hinge(Hinge::new(Vector2::new(100.0, 100.0)));
    let second = sim.add_hinge(Hinge::new(Vector2::new(104.0, 98.0)));

    assert_eq!(sim.hinge_near(Vector2::new(102.0, 100.0), 20.0), Some(second));
    assert_eq!(sim.hinge_near(Vector2::new(90.0, 100.0), 12.0), Some(first));
    assert_eq!(sim.hinge_near(Vector2::new(0.0, 0.0), 20.0), None);

    sim.remove_hinge(second);
    assert_eq!(sim.hinge_near(Vector2::new(102.0, 100.0), 20.0), Some(first));
}

#[test]
fn iteration_follows_insertion_order() {
    let mut sim = Simulation::<f64>::new();
    let ids: Vec<_> = (0..5)
        .map(|i| sim.add_hinge(Hinge::new(Vector2::new(i as f64, 0.0))))
        .collect();
    sim.remove_hinge(ids[1]);
    let later = sim.add_hinge(Hinge::new(Vector2::new(9.0, 9.0)));

    let order: Vec<_> = sim.hinges().map(|(id, _)| id).collect();
    assert_eq!(order, vec![ids[0], ids[2], ids[3], ids[4], later]);
}

#[test]
fn remove_link_keeps_hinges() {
    let mut sim = Simulation::<f64>::new();
    let a = sim.add_hinge(Hinge::new(Vector2::new(0.0, 0.0)));
    let b = sim.add_hinge(Hinge::new(Vector2::new(1.0, 0.0)));
    let link = sim.add_link(1.0, (a, b)).unwrap();

    assert!(sim.remove_link(link));
    assert!(!sim.remove_link(link));
    assert_eq!(sim.hinge_count(), 2);
    assert_eq!(sim.find_link(a, b), None);
    assert_eq!(sim.link_segments().count(), 0);
}

#[test]
fn observer_sees_every_pass() {
    let mut sim = Simulation::with_config(SolverConfig::new().with_iterations(2)).unwrap();
    let a = sim.add_hinge(Hinge::fixed(Vector2::new(0.0, 0.0)));
    let b = sim.add_hinge(Hinge::new(Vector2::new(10.0, 0.0)));
    let c = sim.add_hinge(Hinge::new(Vector2::new(10.0, 0.0)));
    sim.add_link(5.0, (a, b)).unwrap();
    sim.add_link(5.0, (a, c)).unwrap();
    sim.add_link(0.0, (b, c)).unwrap();

    let mut observer = CountingObserver::default();
    sim.step_observed(&mut observer);

    assert_eq!(observer.resolved, 6);
    assert_eq!(observer.lock_passes, 2);
    assert_eq!(observer.steps, 1);
    // b and c coincide whenever the (b, c) link is reached.
    assert_eq!(observer.degenerate, 2);
}

#[test]
fn extra_iterations_tighten_convergence() {
    let mut sim = Simulation::with_config(SolverConfig::new().with_iterations(3)).unwrap();
    let anchor = sim.add_hinge(Hinge::fixed(Vector2::new(0.0, 0.0)));
    let tip = sim.add_hinge(Hinge::new(Vector2::new(10.0, 0.0)));
    sim.add_link(5.0, (anchor, tip)).unwrap();

    sim.step();
    assert_eq!(sim.hinge_position(tip), Some(Vector2::new(5.625, 0.0)));
}
