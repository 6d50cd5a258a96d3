use std::time::Duration;

use tangible_physics::*;

fn main() -> Result<()> {
    let config = WorldConfig::default().with_gravity(Vec3::ZERO);
    let mut world = World::with_config(WorldId(2), "billiards", config)?;

    let left = world.add_body(
        Body::builder()
            .position(Vec3::new(-3.0, 0.0, 0.0))
            .velocity(Vec3::new(1.0, 0.0, 0.0))
            .mass(1.0)
            .sphere(1.0)
            .build()?,
    );
    let right = world.add_body(
        Body::builder()
            .position(Vec3::new(3.0, 0.0, 0.0))
            .velocity(Vec3::new(-1.0, 0.0, 0.0))
            .mass(2.0)
            .sphere(1.0)
            .build()?,
    );

    for _ in 0..300 {
        let report = world.tick(Duration::from_millis(10))?;
        if !report.contacts_started.is_empty() {
            println!("impact: {:?}", world.overlaps());
        }
    }

    for id in [left, right] {
        if let Some(body) = world.body(id) {
            println!("{id}: position {:?} velocity {:?}", body.position, body.velocity);
        }
    }
    Ok(())
}
