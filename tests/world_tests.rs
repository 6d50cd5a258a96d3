use std::time::Duration;

use tangible_physics::*;

fn make_world() -> World {
    let config = WorldConfig::default()
        .with_gravity(Vec3::ZERO)
        .with_air_density(0.0);
    World::with_config(WorldId(7), "arena", config).expect("valid config")
}

fn make_sphere(position: Vec3, velocity: Vec3, mass: f32) -> Body {
    Body::builder()
        .position(position)
        .velocity(velocity)
        .mass(mass)
        .sphere(1.0)
        .build()
        .expect("valid sphere")
}

#[test]
fn gravity_only_body_falls_by_updated_velocity() {
    let config = WorldConfig::default().with_gravity(Vec3::new(0.0, -9.8, 0.0));
    let mut world = World::with_config(WorldId(1), "fall", config).unwrap();
    let id = world.add_body(Body::builder().mass(1.0).build().unwrap());

    world.tick(Duration::from_secs(1)).unwrap();

    let body = world.body(id).expect("body should exist");
    assert_eq!(body.velocity, Vec3::new(0.0, -9.8, 0.0));
    assert_eq!(body.position, Vec3::new(0.0, -9.8, 0.0));
}

#[test]
fn head_on_spheres_exchange_velocities_on_first_contact() {
    let mut world = make_world();
    let a = world.add_body(make_sphere(Vec3::ZERO, Vec3::X, 1.0));
    let b = world.add_body(make_sphere(Vec3::new(1.2, 0.0, 0.0), -Vec3::X, 1.0));

    // A zero-length tick resolves contacts without letting drag or motion act.
    let report = world.tick(Duration::ZERO).unwrap();

    assert_eq!(report.contacts_started, vec![BodyPair::new(a, b).unwrap()]);
    assert_eq!(world.body(a).unwrap().velocity, Vec3::new(-1.0, 0.0, 0.0));
    assert_eq!(world.body(b).unwrap().velocity, Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn response_fires_once_per_contact() {
    let mut world = make_world();
    let dt = Duration::from_millis(10);
    let a = world.add_body(make_sphere(Vec3::ZERO, Vec3::X, 1.0));
    let b = world.add_body(make_sphere(Vec3::new(3.0, 0.0, 0.0), -Vec3::X, 1.0));

    // T1: apart
    let first = world.tick(dt).unwrap();
    assert!(first.contacts_started.is_empty());
    assert_eq!(world.contact_state(a, b), ContactState::NoContact);

    // T2: brought into contact
    world.body_mut(a).unwrap().position = Vec3::ZERO;
    world.body_mut(b).unwrap().position = Vec3::new(1.2, 0.0, 0.0);
    let second = world.tick(dt).unwrap();
    assert_eq!(second.contacts_started.len(), 1);
    assert_eq!(world.contact_state(a, b), ContactState::Touching);

    // T3: still touching, no second exchange (which would swap velocities back)
    let third = world.tick(dt).unwrap();
    assert!(third.contacts_started.is_empty());
    assert!(third.contacts_ended.is_empty());
    assert_eq!(world.contact_state(a, b), ContactState::Touching);
    assert!(world.body(a).unwrap().velocity.x < 0.0);
    assert!(world.body(b).unwrap().velocity.x > 0.0);
}

#[test]
fn approaching_spheres_collide_once_under_their_own_motion() {
    let mut world = make_world();
    let dt = Duration::from_millis(250);
    let a = world.add_body(make_sphere(Vec3::ZERO, Vec3::X, 1.0));
    let b = world.add_body(make_sphere(Vec3::new(3.0, 0.0, 0.0), -Vec3::X, 1.0));
    let pair = BodyPair::new(a, b).unwrap();

    let reports: Vec<TickReport> = (0..10).map(|_| world.tick(dt).unwrap()).collect();

    // Gap closes 0.5 per tick: 3.0, 2.5, 2.0, 1.5 apart, then 1.0 touching.
    for report in &reports[..4] {
        assert!(report.contacts_started.is_empty());
    }
    assert_eq!(reports[4].contacts_started, vec![pair]);
    assert_eq!(reports[5].contacts_ended, vec![pair]);
    let started: usize = reports.iter().map(|r| r.contacts_started.len()).sum();
    assert_eq!(started, 1);

    assert_eq!(world.body(a).unwrap().velocity, -Vec3::X);
    assert_eq!(world.body(b).unwrap().velocity, Vec3::X);
    assert_eq!(world.contact_state(a, b), ContactState::NoContact);
}

#[test]
fn bodies_that_stay_in_contact_get_no_further_response() {
    let mut world = make_world();
    let dt = Duration::from_secs(1);
    let a = world.add_body(make_sphere(Vec3::ZERO, Vec3::ZERO, 0.0));
    let b = world.add_body(make_sphere(Vec3::new(3.0, 0.0, 0.0), -Vec3::X, 0.0));

    // T1 and T2: apart while b closes in.
    assert!(world.tick(dt).unwrap().contacts_started.is_empty());
    assert!(world.tick(dt).unwrap().contacts_started.is_empty());

    // T3: touching; massless bodies come to rest and remain overlapped.
    let third = world.tick(dt).unwrap();
    assert_eq!(third.contacts_started, vec![BodyPair::new(a, b).unwrap()]);
    assert_eq!(world.body(b).unwrap().position, Vec3::new(1.0, 0.0, 0.0));

    for _ in 0..3 {
        let report = world.tick(dt).unwrap();
        assert!(report.contacts_started.is_empty());
        assert!(report.contacts_ended.is_empty());
        assert_eq!(world.contact_state(a, b), ContactState::Touching);
    }
}

#[test]
fn slow_spin_accumulates_over_many_ticks() {
    let config = WorldConfig::default()
        .with_gravity(Vec3::ZERO)
        .with_air_density(0.0);
    let mut world = World::with_config(WorldId(5), "spin", config).unwrap();
    let id = world.add_body(
        Body::builder()
            .mass(1.0)
            .spin(Vec3::new(0.0, 0.0, 1e-4))
            .build()
            .unwrap(),
    );

    for _ in 0..1000 {
        world.tick(Duration::from_millis(5)).unwrap();
    }

    let turned = world.body(id).unwrap().orientation * Vec3::X;
    approx::assert_relative_eq!(turned.y, 5e-4_f32.sin(), max_relative = 1e-3);
}

#[test]
fn separating_pair_produces_falling_edge() {
    let mut world = make_world();
    let a = world.add_body(make_sphere(Vec3::ZERO, Vec3::ZERO, 1.0));
    let b = world.add_body(make_sphere(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO, 1.0));
    world.tick(Duration::ZERO).unwrap();

    world.body_mut(b).unwrap().position = Vec3::new(10.0, 0.0, 0.0);
    let report = world.tick(Duration::ZERO).unwrap();

    assert_eq!(report.contacts_ended, vec![BodyPair::new(a, b).unwrap()]);
    assert!(world.overlaps().is_empty());
}

#[test]
fn massless_contact_comes_to_rest() {
    let mut world = make_world();
    let a = world.add_body(make_sphere(Vec3::ZERO, Vec3::new(2.0, 1.0, 0.0), 0.0));
    let b = world.add_body(make_sphere(Vec3::new(0.5, 0.0, 0.0), Vec3::new(-3.0, 0.0, 4.0), 0.0));

    world.tick(Duration::from_millis(16)).unwrap();

    for id in [a, b] {
        let velocity = world.body(id).unwrap().velocity;
        assert_eq!(velocity, Vec3::ZERO);
        assert!(velocity.is_finite());
    }
}

#[test]
fn resting_body_ignores_thick_fluid() {
    let config = WorldConfig::default()
        .with_gravity(Vec3::ZERO)
        .with_air_density(1.0e9);
    let mut world = World::with_config(WorldId(2), "mud", config).unwrap();
    let id = world.add_body(make_sphere(Vec3::ZERO, Vec3::ZERO, 1.0));

    world.tick(Duration::from_secs(1)).unwrap();

    assert_eq!(world.body(id).unwrap().velocity, Vec3::ZERO);
    assert_eq!(world.body(id).unwrap().position, Vec3::ZERO);
}

#[test]
fn drag_slows_moving_body() {
    let config = WorldConfig::default()
        .with_gravity(Vec3::ZERO)
        .with_air_density(1.0);
    let mut world = World::with_config(WorldId(3), "air", config).unwrap();
    let id = world.add_body(make_sphere(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), 10.0));

    world.tick(Duration::from_millis(100)).unwrap();

    let body = world.body(id).unwrap();
    let expected = 2.0 * (1.0 - 2.0 * std::f32::consts::PI * 0.1 / 10.0);
    approx::assert_relative_eq!(body.velocity.x, expected, epsilon = 1e-5);
    approx::assert_relative_eq!(body.position.x, expected * 0.1, epsilon = 1e-5);
}

#[test]
fn removed_body_contact_is_purged_without_response() {
    let mut world = make_world();
    let a = world.add_body(make_sphere(Vec3::ZERO, Vec3::ZERO, 1.0));
    let b = world.add_body(make_sphere(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO, 1.0));
    world.tick(Duration::ZERO).unwrap();
    assert_eq!(world.overlaps(), vec![BodyPair::new(a, b).unwrap()]);

    world.remove_body(b);
    world.body_mut(a).unwrap().velocity = Vec3::Y;
    let report = world.tick(Duration::ZERO).unwrap();

    assert!(world.overlaps().is_empty());
    assert!(report.contacts_started.is_empty());
    assert_eq!(world.body(a).unwrap().velocity, Vec3::Y);
}

#[test]
fn body_losing_its_shape_is_purged_during_tick() {
    let mut world = make_world();
    let a = world.add_body(make_sphere(Vec3::ZERO, Vec3::ZERO, 1.0));
    let b = world.add_body(make_sphere(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO, 1.0));
    world.tick(Duration::ZERO).unwrap();

    world.body_mut(b).unwrap().set_geometry(None).unwrap();
    let report = world.tick(Duration::ZERO).unwrap();

    let pair = BodyPair::new(a, b).unwrap();
    assert_eq!(report.stale_purged, vec![pair]);
    assert!(report.contacts_ended.is_empty());
    assert_eq!(world.contact_state(a, b), ContactState::NoContact);
}

#[test]
fn snapshots_are_detached_copies() {
    let mut world = make_world();
    let a = world.add_body(make_sphere(Vec3::ZERO, Vec3::ZERO, 1.0));
    world.add_body(make_sphere(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO, 1.0));
    world.tick(Duration::ZERO).unwrap();

    let mut bodies = world.bodies();
    let overlaps = world.overlaps();
    bodies[0].position = Vec3::splat(100.0);
    world.remove_body(a);

    assert_eq!(overlaps.len(), 1);
    assert_eq!(world.bodies().len(), 1);
    assert_eq!(bodies.len(), 2);
}

#[test]
fn denser_neighbour_thickens_the_medium() {
    let config = WorldConfig::default()
        .with_gravity(Vec3::ZERO)
        .with_air_density(0.001);
    let mut world = World::with_config(WorldId(4), "pool", config).unwrap();
    let swimmer = world.add_body(make_sphere(Vec3::ZERO, Vec3::ZERO, 1.0));
    let water = world.add_body(make_sphere(Vec3::new(0.5, 0.0, 0.0), Vec3::ZERO, 50.0));

    world.tick(Duration::ZERO).unwrap();

    let water_density = world.body(water).unwrap().density();
    assert_eq!(world.fluid_density_around(swimmer), water_density);
    assert_eq!(world.fluid_density_around(water), world.body(swimmer).unwrap().density());
}

#[test]
fn shapeless_bodies_never_collide() {
    let mut world = make_world();
    world.add_body(Body::builder().mass(1.0).velocity(Vec3::X).build().unwrap());
    world.add_body(Body::builder().mass(1.0).velocity(-Vec3::X).build().unwrap());

    let report = world.tick(Duration::from_millis(10)).unwrap();

    assert!(report.contacts_started.is_empty());
    assert!(world.overlaps().is_empty());
}

#[test]
fn cuboid_and_sphere_collide() {
    let mut world = make_world();
    let ball = world.add_body(make_sphere(Vec3::ZERO, Vec3::X, 1.0));
    let crate_box = world.add_body(
        Body::builder()
            .position(Vec3::new(0.9, 0.0, 0.0))
            .mass(3.0)
            .cuboid(Vec3::splat(0.5))
            .build()
            .unwrap(),
    );

    let report = world.tick(Duration::ZERO).unwrap();

    assert_eq!(report.contacts_started.len(), 1);
    assert_eq!(world.body(ball).unwrap().velocity, Vec3::new(-0.5, 0.0, 0.0));
    assert_eq!(world.body(crate_box).unwrap().velocity, Vec3::new(0.5, 0.0, 0.0));
}

#[test]
fn invalid_air_density_is_rejected() {
    let mut world = make_world();
    assert!(matches!(
        world.set_air_density(-1.0),
        Err(PhysicsError::InvalidAirDensity { .. })
    ));
    assert_eq!(world.air_density(), 0.0);
    assert_eq!(world.id(), WorldId(7));
    assert_eq!(world.name(), "arena");
}
