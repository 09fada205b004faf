use super::*;

const BLUE: u32 = 0x0000ffff;

fn sim() -> SimulationCore {
    SimulationCore::new(800.0, 600.0).unwrap()
}

#[test]
fn handles_survive_swap_remove() {
    let mut sim = sim();
    let a = sim.create_body(100.0, 100.0, 10.0, BLUE, 0.8, 0.95).unwrap();
    let b = sim.create_body(200.0, 100.0, 12.0, BLUE, 0.8, 0.95).unwrap();
    let c = sim.create_body(300.0, 100.0, 14.0, BLUE, 0.8, 0.95).unwrap();

    sim.remove_body(a).unwrap();

    // `c` was moved into `a`'s dense slot; its handle must still resolve.
    assert_eq!(sim.body_count(), 2);
    assert_eq!(sim.body(c).unwrap().radius(), 14.0);
    assert_eq!(sim.body(b).unwrap().radius(), 12.0);
    assert_eq!(sim.body(c).unwrap().handle(), c);
    assert!(!sim.contains(a));
}

#[test]
fn stale_handle_is_rejected_after_slot_reuse() {
    let mut sim = sim();
    let a = sim.create_body(100.0, 100.0, 10.0, BLUE, 0.8, 0.95).unwrap();
    sim.remove_body(a).unwrap();
    let reused = sim.create_body(150.0, 100.0, 10.0, BLUE, 0.8, 0.95).unwrap();

    assert_eq!(reused.index(), a.index());
    assert_ne!(reused.generation(), a.generation());
    assert_eq!(sim.remove_body(a), Err(EngineError::UnknownHandle { handle: a }));
    assert!(sim.begin_drag(a, 0.0, 0.0).is_err());
    assert!(sim.contains(reused));
}

#[test]
fn invalid_radius_is_reported_and_nothing_is_created() {
    let mut sim = sim();
    assert_eq!(
        sim.create_body(10.0, 10.0, -1.0, BLUE, 0.8, 0.95),
        Err(EngineError::InvalidRadius { radius: -1.0 })
    );
    assert!(matches!(
        sim.create_body(f32::NAN, 10.0, 5.0, BLUE, 0.8, 0.95),
        Err(EngineError::InvalidPosition { .. })
    ));
    assert_eq!(sim.body_count(), 0);
    assert!(sim.handles().is_empty());
}

#[test]
fn removal_drops_stale_candidates() {
    let mut sim = sim();
    sim.set_gravity(0.0);
    let a = sim.create_body(100.0, 100.0, 10.0, BLUE, 0.8, 0.95).unwrap();
    let b = sim.create_body(115.0, 100.0, 10.0, BLUE, 0.8, 0.95).unwrap();
    sim.step();
    assert_eq!(sim.neighbor_candidates(a).unwrap(), vec![b]);

    sim.remove_body(b).unwrap();
    assert!(sim.neighbor_candidates(a).unwrap().is_empty());
    sim.step();
    assert!(sim.neighbor_candidates(a).unwrap().is_empty());
}

#[test]
fn pick_prefers_the_newest_body() {
    let mut sim = sim();
    let under = sim.create_body(100.0, 100.0, 30.0, BLUE, 0.8, 0.95).unwrap();
    let over = sim.create_body(110.0, 100.0, 30.0, BLUE, 0.8, 0.95).unwrap();

    assert_eq!(sim.pick_body(105.0, 100.0), Some(over));
    assert_eq!(sim.pick_body(75.0, 100.0), Some(under));
    assert_eq!(sim.pick_body(500.0, 500.0), None);

    sim.remove_body(over).unwrap();
    assert_eq!(sim.pick_body(105.0, 100.0), Some(under));
}

#[test]
fn drag_then_release_throws_the_body() {
    let mut sim = sim();
    sim.set_gravity(0.0);
    let h = sim.create_body(400.0, 300.0, 20.0, BLUE, 0.8, 0.95).unwrap();
    sim.body_mut(h).unwrap().velocity = Vec2::new(3.0, 3.0);

    // Grab 5 units right of center.
    sim.begin_drag(h, 405.0, 300.0).unwrap();
    assert_eq!(sim.body(h).unwrap().velocity, Vec2::zero());
    assert!(sim.body(h).unwrap().is_held());

    sim.update_drag(h, 415.0, 296.0).unwrap();
    assert_eq!(sim.body(h).unwrap().pos, Vec2::new(410.0, 296.0));

    sim.step();
    assert_eq!(sim.body(h).unwrap().velocity, Vec2::new(10.0, -4.0));
    assert_eq!(sim.body(h).unwrap().pos, Vec2::new(410.0, 296.0));

    sim.end_drag(h).unwrap();
    sim.step();
    let body = sim.body(h).unwrap();
    assert!(!body.is_held());
    assert_eq!(body.pos, Vec2::new(420.0, 292.0));
}

#[test]
fn held_body_stays_on_the_pointer_through_contacts() {
    let mut sim = sim();
    sim.set_gravity(0.0);
    let held = sim.create_body(400.0, 300.0, 20.0, BLUE, 0.8, 0.95).unwrap();
    let free = sim.create_body(420.0, 300.0, 20.0, BLUE, 0.8, 0.95).unwrap();

    sim.begin_drag(held, 395.0, 300.0).unwrap();
    sim.update_drag(held, 395.0, 300.0).unwrap();

    sim.step();
    assert_eq!(sim.body(held).unwrap().pos, Vec2::new(400.0, 300.0));
    assert_eq!(sim.body(free).unwrap().pos, Vec2::new(440.0, 300.0));

    // No pointer motion, so nothing to throw.
    sim.step();
    assert_eq!(sim.body(held).unwrap().pos, Vec2::new(400.0, 300.0));
    assert_eq!(sim.body(held).unwrap().velocity, Vec2::zero());

    sim.end_drag(held).unwrap();
    sim.step();
    assert_eq!(sim.body(held).unwrap().pos, Vec2::new(400.0, 300.0));
}

#[test]
fn drag_calls_out_of_order_fail_loudly() {
    let mut sim = sim();
    let h = sim.create_body(100.0, 100.0, 10.0, BLUE, 0.8, 0.95).unwrap();
    assert_eq!(sim.update_drag(h, 0.0, 0.0), Err(EngineError::NotDragging { handle: h }));
    assert_eq!(sim.end_drag(h), Err(EngineError::NotDragging { handle: h }));

    sim.begin_drag(h, 100.0, 100.0).unwrap();
    sim.end_drag(h).unwrap();
    assert!(sim.end_drag(h).is_err());
}

#[test]
fn bounds_change_between_ticks() {
    let mut sim = sim();
    sim.set_gravity(0.0);
    let h = sim.create_body(700.0, 300.0, 20.0, BLUE, 0.8, 0.95).unwrap();

    sim.set_bounds(400.0, 300.0).unwrap();
    sim.step();
    let body = sim.body(h).unwrap();
    assert_eq!(body.pos, Vec2::new(380.0, 280.0));

    assert!(sim.set_bounds(0.0, 300.0).is_err());
    assert_eq!(sim.settings().bounds, Bounds::new(400.0, 300.0));
}

#[test]
fn material_edits_are_seen_by_the_next_step() {
    let mut sim = sim();
    sim.set_gravity(0.0);
    let h = sim.create_body(400.0, 575.0, 40.0, BLUE, 0.8, 0.95).unwrap();
    sim.set_bounce(h, 0.5).unwrap();
    sim.set_friction(h, 0.5).unwrap();
    sim.body_mut(h).unwrap().velocity = Vec2::new(2.0, 10.0);

    sim.step();
    let body = sim.body(h).unwrap();
    assert_eq!(body.velocity, Vec2::new(1.0, -5.0));
}

#[test]
fn clear_invalidates_everything() {
    let mut sim = sim();
    let a = sim.create_body(100.0, 100.0, 10.0, BLUE, 0.8, 0.95).unwrap();
    sim.step();
    sim.clear();
    assert_eq!(sim.body_count(), 0);
    assert_eq!(sim.frame(), 0);
    assert!(!sim.contains(a));
    let b = sim.create_body(100.0, 100.0, 10.0, BLUE, 0.8, 0.95).unwrap();
    assert_ne!(a, b);
}

#[test]
fn perf_stats_follow_the_toggle() {
    let mut sim = sim();
    for i in 0..10 {
        sim.create_body(100.0 + i as f32 * 15.0, 500.0, 10.0, BLUE, 0.5, 0.9).unwrap();
    }

    sim.step();
    assert_eq!(sim.perf_stats().body_count(), 0);

    sim.enable_perf_metrics(true);
    sim.step();
    let stats = sim.perf_stats();
    assert_eq!(stats.body_count(), 10);
    assert_eq!(stats.solver_iterations(), 8);
    assert!(stats.candidate_pairs() >= 9);
    assert_eq!(stats.cell_size(), 48.0);
    assert!(stats.step_ms() >= 0.0);

    sim.enable_perf_metrics(false);
    assert_eq!(sim.perf_stats().candidate_pairs(), 0);
}

#[test]
fn render_extract_packs_bodies_in_storage_order() {
    let mut sim = sim();
    sim.create_body(10.0, 20.0, 5.0, 0x11223344, 0.8, 0.95).unwrap();
    sim.create_body(30.0, 40.0, 6.0, 0x55667788, 0.8, 0.95).unwrap();

    assert_eq!(sim.extract_render_data(), 2);
    assert_eq!(sim.render_len(), 2 * RENDER_STRIDE);
    assert_eq!(sim.render_data(), &[10.0, 20.0, 5.0, 1.0, 1.0, 30.0, 40.0, 6.0, 1.0, 1.0]);
    assert_eq!(sim.render_colors(), &[0x11223344, 0x55667788]);
}

#[test]
fn settings_json_round_trips_through_the_context() {
    let mut sim = sim();
    sim.load_settings_json(r#"{"gravity": 0.5, "solverIterations": 3, "bounds": {"width": 640, "height": 480}}"#)
        .unwrap();
    assert_eq!(sim.settings().solver_iterations, 3);
    assert_eq!(sim.settings().bounds, Bounds::new(640.0, 480.0));

    let exported = sim.settings_json();
    assert!(sim.load_settings_json("{\"solverIterations\": 0}").is_err());
    assert_eq!(sim.settings_json(), exported);
}
