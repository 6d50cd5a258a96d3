use std::time::Duration;

use tangible_physics::*;

fn main() -> Result<()> {
    let mut engine = PhysicsEngine::with_config(WorldId(1), "falling", WorldConfig::default())?;

    // Same size, very different mass: drag holds the light one back.
    let feather = engine.add_body(
        Body::builder()
            .position(Vec3::new(-2.0, 100.0, 0.0))
            .mass(0.05)
            .sphere(0.5)
            .build()?,
    );
    let cannonball = engine.add_body(
        Body::builder()
            .position(Vec3::new(2.0, 100.0, 0.0))
            .mass(20.0)
            .sphere(0.5)
            .build()?,
    );

    for step in 1..=120 {
        engine.tick(Duration::from_millis(16))?;
        if step % 30 == 0 {
            for (label, id) in [("feather", feather), ("cannonball", cannonball)] {
                if let Some(body) = engine.world().body(id) {
                    println!(
                        "step {step:>3} {label:>10}: height {:7.2} speed {:6.2}",
                        body.position.y,
                        body.velocity.length()
                    );
                }
            }
        }
    }
    Ok(())
}
