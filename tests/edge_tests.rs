use tether::{
    EdgeHandler, Particle, ReflectEdges, Vec2, WrapEdges, World, WorldConfig,
};

#[test]
fn wrap_preserves_overshoot_and_velocity() {
    let mut handler: EdgeHandler<Vec2<f32>> =
        EdgeHandler::Wrap(WrapEdges::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)));
    let mut p = Particle::new(Vec2::new(1.01, 0.5));
    p.velocity = Vec2::new(2.0, 0.0);

    handler.handle(&mut p);

    assert!(
        (p.position.x - 0.01).abs() < 1e-6,
        "overshoot must carry over: got {}",
        p.position.x
    );
    assert_eq!(p.velocity, Vec2::new(2.0, 0.0));
}

#[test]
fn wrap_works_from_the_low_side() {
    let mut handler: EdgeHandler<Vec2<f32>> =
        EdgeHandler::Wrap(WrapEdges::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)));
    let mut p = Particle::new(Vec2::new(-0.25, 0.5));
    handler.handle(&mut p);
    assert!((p.position.x - 0.75).abs() < 1e-6);
}

#[test]
fn reflect_clamps_and_scales_velocity_by_restitution() {
    let mut handler: EdgeHandler<Vec2<f32>> = EdgeHandler::Reflect(ReflectEdges::new(
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 1.0),
        0.5,
    ));
    let mut p = Particle::new(Vec2::new(1.2, 0.5));
    p.velocity = Vec2::new(3.0, 0.0);

    handler.handle(&mut p);

    assert_eq!(p.position.x, 1.0, "position clamps to the bound");
    assert!((p.velocity.x - (-1.5)).abs() < 1e-6, "departs at restitution * speed, reversed");
    assert_eq!(p.velocity.y, 0.0);
}

#[test]
fn reflect_handles_each_axis_independently() {
    let mut handler: EdgeHandler<Vec2<f32>> = EdgeHandler::Reflect(ReflectEdges::new(
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 1.0),
        1.0,
    ));
    let mut p = Particle::new(Vec2::new(1.2, -0.3));
    p.velocity = Vec2::new(1.0, -2.0);

    handler.handle(&mut p);

    assert_eq!(p.position, Vec2::new(1.0, 0.0));
    assert_eq!(p.velocity, Vec2::new(-1.0, 2.0));
}

#[test]
fn edge_handling_runs_after_position_integration() {
    let config: WorldConfig<Vec2<f32>> = WorldConfig::new().with_step_size(0.25);
    let mut world = World::with_config(config).unwrap();
    let idx = world.add_particle(Particle::new(Vec2::new(0.9, 0.5)));
    world.particle_mut(idx).velocity = Vec2::new(1.0, 0.0);
    world.set_edge_handler(EdgeHandler::Wrap(WrapEdges::new(
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 1.0),
    )));

    world.step(0.25);

    // integration carries the particle to 1.15, the wrap brings it to 0.15
    let p = world.particle(idx);
    assert!((p.position.x - 0.15).abs() < 1e-6, "got {}", p.position.x);
    assert_eq!(p.velocity.x, 1.0);
}

#[test]
fn reflect_bounces_a_falling_particle_off_the_floor() {
    let config: WorldConfig<Vec2<f32>> = WorldConfig::new().with_step_size(0.25);
    let mut world = World::with_config(config).unwrap();
    let idx = world.add_particle(Particle::new(Vec2::new(0.5, 0.05)));
    world.particle_mut(idx).velocity = Vec2::new(0.0, -1.0);
    world.set_edge_handler(EdgeHandler::Reflect(ReflectEdges::new(
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 1.0),
        0.5,
    )));

    world.step(0.25);

    let p = world.particle(idx);
    assert_eq!(p.position.y, 0.0, "clamped to the floor");
    assert!((p.velocity.y - 0.5).abs() < 1e-6, "departs upward at half speed");
}
