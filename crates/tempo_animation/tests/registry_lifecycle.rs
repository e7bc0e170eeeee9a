//! Integration tests for animations driven through the registry
//!
//! These tests verify that:
//! - Finished animations receive their final value and are evicted on the same tick
//! - Delivered values depend only on each animation's own timing and curve
//! - Config-built animations run through the registry like hand-built ones

use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use tempo_animation::{Animation, AnimationConfig, AnimationRegistry, Easing};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn started(duration: f32, easing: Easing, sink: Rc<RefCell<Vec<f32>>>) -> Animation {
    let mut anim = Animation::new(duration, easing, move |v| sink.borrow_mut().push(v)).unwrap();
    anim.start();
    anim
}

/// Three animations of different lengths retire one by one
#[test]
fn test_staggered_durations_are_evicted_in_turn() {
    init_tracing();

    let mut registry = AnimationRegistry::new();
    let one = registry.add(started(1.0, Easing::Linear, Rc::default()));
    let two = registry.add(started(2.0, Easing::Linear, Rc::default()));
    let half = registry.add(started(0.5, Easing::Linear, Rc::default()));

    registry.update(0.5);
    assert!(!registry.contains(half));
    assert!(registry.contains(one));
    assert!(registry.contains(two));
    assert_eq!(registry.len(), 2);

    registry.update(0.5);
    assert!(!registry.contains(one));
    assert_eq!(registry.len(), 1);

    registry.update(0.5);
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get(two).unwrap().elapsed(), 1.5);

    registry.update(0.5);
    assert!(registry.is_empty());
    assert!(!registry.has_active_animations());
}

/// Every hook sees the curve's end value on the tick that finishes it
#[test]
fn test_each_curve_delivers_exact_end_value() {
    let mut registry = AnimationRegistry::new();
    let sinks: Vec<_> = Easing::ALL
        .iter()
        .map(|easing| {
            let sink = Rc::new(RefCell::new(Vec::new()));
            registry.add(started(1.0, *easing, sink.clone()));
            (*easing, sink)
        })
        .collect();

    for _ in 0..4 {
        registry.update(0.25);
    }

    assert!(registry.is_empty());
    for (easing, sink) in sinks {
        let values = sink.borrow();
        assert_eq!(values.len(), 4, "{easing}");
        assert!((values[3] - 1.0).abs() < 1e-6, "{easing} ended at {}", values[3]);
    }
}

/// Values delivered to a hook don't depend on neighbours or their order
#[test]
fn test_values_independent_of_registry_contents() {
    let alone = Rc::new(RefCell::new(Vec::new()));
    let mut solo = AnimationRegistry::new();
    solo.add(started(1.2, Easing::EaseInOutElastic, alone.clone()));

    let crowded = Rc::new(RefCell::new(Vec::new()));
    let mut busy = AnimationRegistry::new();
    busy.add(started(0.3, Easing::EaseOutExpo, Rc::default()));
    busy.add(started(5.0, Easing::EaseInSine, Rc::default()));
    busy.add(started(1.2, Easing::EaseInOutElastic, crowded.clone()));
    busy.add(Animation::new(0.7, Easing::EaseInQuart, |_| {}).unwrap());

    for _ in 0..10 {
        solo.update(0.15);
        busy.update(0.15);
    }

    assert_eq!(*alone.borrow(), *crowded.borrow());
    assert_eq!(alone.borrow().last().copied(), Some(1.0));
}

/// Hooks can drive external state the way a render loop would read it
#[test]
fn test_hook_drives_external_state() {
    let x = Rc::new(Cell::new(0.0f32));
    let target = x.clone();

    let mut anim = Animation::new(2.0, Easing::EaseInOutQuad, move |p| {
        target.set(100.0 + 600.0 * p);
    })
    .unwrap();
    anim.start();

    let mut registry = AnimationRegistry::new();
    registry.add(anim);

    registry.update(1.0);
    assert!((x.get() - 400.0).abs() < 1e-3);

    registry.update(1.0);
    assert!((x.get() - 700.0).abs() < 1e-3);
    assert!(registry.is_empty());
}

/// A panicking hook aborts the rest of the tick
#[test]
fn test_hook_panic_stops_tick() {
    let later = Rc::new(RefCell::new(Vec::new()));

    let mut registry = AnimationRegistry::new();
    let mut failing = Animation::new(1.0, Easing::Linear, |_| panic!("hook failed")).unwrap();
    failing.start();
    registry.add(failing);
    let after = registry.add(started(1.0, Easing::Linear, later.clone()));

    let result = panic::catch_unwind(AssertUnwindSafe(|| registry.update(0.1)));
    assert!(result.is_err());
    assert!(later.borrow().is_empty());
    assert_eq!(registry.get(after).unwrap().elapsed(), 0.0);
}

/// Config-built animations behave like hand-built ones
#[test]
fn test_config_animations_in_registry() {
    let config = AnimationConfig::from_toml_str(
        r#"
        [animations.slide]
        duration = 1.0
        easing = "ease-out-quad"
        autostart = true
        "#,
    )
    .unwrap();

    let sink = Rc::new(RefCell::new(Vec::new()));
    let hook_sink = sink.clone();
    let mut registry = AnimationRegistry::new();
    registry.add(
        config
            .build("slide", move |v| hook_sink.borrow_mut().push(v))
            .unwrap(),
    );

    registry.update(0.5);
    registry.update(0.5);

    assert_eq!(*sink.borrow(), vec![0.75, 1.0]);
    assert!(registry.is_empty());
}
