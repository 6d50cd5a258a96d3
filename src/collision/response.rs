use glam::Vec3;

use crate::{core::body::Body, error::Result, utils::math::checked_div};

/// Velocities of two bodies after a perfectly elastic exchange.
///
/// The 1-D elastic collision formula is applied to each component independently,
/// without projecting onto a contact normal. A pair with no combined mass comes to
/// rest instead of dividing by zero.
pub fn elastic_exchange(u1: Vec3, m1: f32, u2: Vec3, m2: f32) -> Result<(Vec3, Vec3)> {
    let total = m1 + m2;
    if total == 0.0 {
        return Ok((Vec3::ZERO, Vec3::ZERO));
    }

    let v1 = checked_div(u1 * (m1 - m2), total)? + checked_div(u2 * (2.0 * m2), total)?;
    let v2 = checked_div(u1 * (2.0 * m1), total)? + checked_div(u2 * (m2 - m1), total)?;
    Ok((v1, v2))
}

/// Applies [`elastic_exchange`] to two bodies that just came into contact.
pub fn resolve_contact(a: &mut Body, b: &mut Body) -> Result<()> {
    let (va, vb) = elastic_exchange(a.velocity, a.mass(), b.velocity, b.mass())?;
    log::trace!(
        "contact {} <-> {}: {} -> {}, {} -> {}",
        a.id(),
        b.id(),
        a.velocity,
        va,
        b.velocity,
        vb
    );
    a.velocity = va;
    b.velocity = vb;
    Ok(())
}
