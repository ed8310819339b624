mod common;

use std::cell::RefCell;
use std::f32::consts::{FRAC_PI_2, PI};
use std::rc::Rc;

use common::{showcase_model, texture_256, Harness, Recorder};
use embed3d::prelude::*;
use futures::executor::LocalPool;
use futures::task::LocalSpawnExt;

type Outcomes = Rc<RefCell<Vec<Result<(), EmbedError>>>>;

fn spawn_load(pool: &LocalPool, harness: &Harness, outcomes: &Outcomes) {
    let loading = harness.embed.load_assets(&harness.pipeline());
    let outcomes = outcomes.clone();
    pool.spawner()
        .spawn_local(async move {
            let outcome = loading.await;
            outcomes.borrow_mut().push(outcome);
        })
        .unwrap();
}

#[test]
fn model_is_dressed_and_placed() {
    let harness = Harness::new();
    let mut pool = LocalPool::new();
    let outcomes = Outcomes::default();

    spawn_load(&pool, &harness, &outcomes);
    assert_eq!(harness.models.requested(), 1);
    assert_eq!(harness.textures.requested(), 1);

    harness.textures.resolve_next(texture_256());
    pool.run_until_stalled();
    assert!(outcomes.borrow().is_empty());
    assert!(harness.embed.composer().borrow().model().is_none());

    harness.models.resolve_next(showcase_model());
    pool.run_until_stalled();
    assert!(matches!(outcomes.borrow()[..], [Ok(())]));

    let composer = harness.embed.composer().borrow();
    let model = composer.model().unwrap();
    assert_eq!(model.position(), Vec3::new(4.0, -11.5, -2.0));
    assert_eq!(model.local_scale(), Vec3::splat(0.9));

    let mut rebound = 0;
    let mut untouched = 0;
    model.apply_to_scene_nodes(&mut |node| match node.material() {
        Some(Material::Standard(m)) => {
            let map = m.map.as_ref().unwrap();
            assert_eq!(map.size, (256, 256));
            assert!(map.needs_update);
            assert!(!map.flip_y);
            assert_eq!(m.metalness, 1.0);
            assert_eq!(m.roughness, 0.4);
            rebound += 1;
        }
        Some(other) => panic!("mesh kept its loader material: {:?}", other),
        None => untouched += 1,
    });
    assert_eq!(rebound, 3);
    assert_eq!(untouched, 2);
}

#[test]
fn failed_model_leaves_the_scene_untouched() {
    let harness = Harness::new();
    let mut pool = LocalPool::new();
    let outcomes = Outcomes::default();
    let before = harness.embed.composer().borrow().scene().children();

    spawn_load(&pool, &harness, &outcomes);
    harness.models.reject_next("404 Not Found");
    harness.textures.resolve_next(texture_256());
    pool.run_until_stalled();

    assert!(matches!(
        outcomes.borrow()[..],
        [Err(EmbedError::Load(LoadError::Fetch { .. }))]
    ));

    let composer = harness.embed.composer().borrow();
    assert!(composer.model().is_none());
    let after = composer.scene().children();
    assert_eq!(after.len(), before.len());
    assert!(after.iter().zip(&before).all(|(a, b)| a.ptr_eq(b)));
}

#[test]
fn lights_follow_the_closed_form_orbit() {
    let harness = Harness::new();
    let animation = AnimationLoop::new(
        harness.embed.composer().clone(),
        harness.embed.renderer().clone(),
        harness.scheduler.clone(),
    );

    // angular speed is π/4: a quarter period every 2 seconds.
    for (t, expected) in [(0.0, 0.0), (2.0, FRAC_PI_2), (4.0, 0.0), (6.0, -FRAC_PI_2)] {
        let angle = animation.frame_at(t).unwrap();
        assert!((angle - expected).abs() < 1.0e-5, "t = {}", t);

        for light in harness.embed.composer().borrow().lights() {
            let p = light.position();
            let r = light.radius();
            assert!((p.x - r * expected.cos()).abs() < 1.0e-3);
            assert!((p.z - r * expected.sin()).abs() < 1.0e-3);
        }
    }

    let period = 2.0 * PI / harness.embed.composer().borrow().angular_speed();
    let a = animation.frame_at(1.3).unwrap();
    let b = animation.frame_at(1.3 + period).unwrap();
    assert!((a - b).abs() < 1.0e-4);
}

#[test]
fn concurrent_loads_insert_the_model_once() {
    let harness = Harness::new();
    let mut pool = LocalPool::new();
    let outcomes = Outcomes::default();

    spawn_load(&pool, &harness, &outcomes);
    spawn_load(&pool, &harness, &outcomes);
    assert_eq!(harness.models.requested(), 2);

    harness.models.resolve_next(showcase_model());
    harness.models.resolve_next(showcase_model());
    harness.textures.resolve_next(texture_256());
    harness.textures.resolve_next(texture_256());
    pool.run_until_stalled();

    let outcomes = outcomes.borrow();
    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes.iter().filter(|o| o.is_ok()).count(), 1);
    assert!(outcomes
        .iter()
        .any(|o| matches!(o, Err(EmbedError::ModelAlreadySet))));

    let composer = harness.embed.composer().borrow();
    let mut models = 0;
    for child in composer.scene().children() {
        if child.name().as_deref() == Some("showcase") {
            models += 1;
        }
    }
    assert_eq!(models, 1);
    assert_eq!(composer.scene().count_child(composer.model().unwrap()), 1);
}

#[test]
fn frames_render_before_and_after_the_model_arrives() {
    let harness = Harness::new();
    let mut pool = LocalPool::new();
    let outcomes = Outcomes::default();

    let handle = harness.embed.start(harness.scheduler.clone(), None);
    spawn_load(&pool, &harness, &outcomes);

    for _ in 0..3 {
        let _ = harness.scheduler.run_frame();
        pool.run_until_stalled();
    }

    harness.textures.resolve_next(texture_256());
    harness.models.resolve_next(showcase_model());
    pool.run_until_stalled();

    for _ in 0..2 {
        let _ = harness.scheduler.run_frame();
    }

    let meshes: Vec<usize> = harness.frames().iter().map(|f| f.meshes).collect();
    assert_eq!(meshes, [0, 0, 0, 0, 3, 3]);
    assert_eq!(handle.frames_rendered(), 6);
    assert!(handle.is_running());
}

#[test]
fn resize_updates_surface_and_projection() {
    let harness = Harness::new();
    let handle = harness.embed.start(harness.scheduler.clone(), None);
    assert_eq!(harness.recorder.borrow().size, (1280, 720));

    harness.page.0.set((600, 600));
    assert_eq!(harness.embed.handle_resize(), Some((600, 600)));
    let _ = harness.scheduler.run_frame();

    harness.page.0.set((600, 0));
    assert_eq!(harness.embed.handle_resize(), None);
    let _ = harness.scheduler.run_frame();

    let aspects: Vec<f32> = harness.frames().iter().map(|f| f.aspect).collect();
    assert_eq!(aspects, [1280.0 / 720.0, 1.0, 1.0]);
    assert_eq!(harness.recorder.borrow().size, (600, 600));
    handle.cancel();
}

#[test]
fn render_failure_stops_the_loop_for_good() {
    let harness = Harness::with_recorder(Recorder {
        fail_at: Some(3),
        ..Recorder::default()
    });
    let handle = harness.embed.start(harness.scheduler.clone(), None);

    let ran = harness.scheduler.run(100, None);
    assert_eq!(ran, 3);
    assert_eq!(harness.frames().len(), 3);
    assert_eq!(handle.frames_rendered(), 3);
    assert!(!handle.is_running());
}

#[test]
fn cancelled_loop_stops_requesting_frames() {
    let harness = Harness::new();
    let handle = harness.embed.start(harness.scheduler.clone(), None);
    let _ = harness.scheduler.run_frame();
    handle.cancel();

    assert_eq!(harness.scheduler.run(100, None), 1);
    assert_eq!(harness.scheduler.pending(), 0);
    assert_eq!(handle.frames_rendered(), 2);
}
