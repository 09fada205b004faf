//! Browser-side checks; run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use ballpit_engine::World;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn invalid_input_surfaces_as_js_errors() {
    assert!(World::new(0.0, 600.0).is_err());

    let mut world = World::new(800.0, 600.0).unwrap();
    assert!(world.create_body(10.0, 10.0, -1.0, 0, 0.5, 0.5).is_err());
    assert!(world.remove_body(12345).is_err());
    assert!(world.load_settings("{not json".into()).is_err());

    let h = world.create_body(100.0, 100.0, 10.0, 0, 0.5, 0.5).unwrap();
    assert!(world.update_drag(h, 1.0, 1.0).is_err());
    world.remove_body(h).unwrap();
    assert!(world.body_x(h).is_err());
}

#[wasm_bindgen_test]
fn step_and_extract_in_the_browser() {
    let mut world = World::new(800.0, 600.0).unwrap();
    world.enable_perf_metrics(true);
    world.create_body(100.0, 100.0, 10.0, 0x00ff00ff, 0.8, 0.95).unwrap();
    world.create_body(112.0, 100.0, 10.0, 0xff0000ff, 0.8, 0.95).unwrap();
    world.step();

    assert_eq!(world.extract_render_data(), 2);
    assert_eq!(world.render_len(), 10);
    assert!(!world.render_ptr().is_null());
    assert!(world.get_perf_stats().contacts_resolved() >= 1);
}
