pub mod commands;

use std::{
    collections::BTreeSet,
    fmt,
    time::{Duration, Instant},
};

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::{
    collision::{
        overlap::{ContactEvent, ContactState, OverlapTracker},
        pair::BodyPair,
        response::resolve_contact,
        solid::Solid,
    },
    config::{validate_air_density, WorldConfig},
    core::body::Body,
    dynamics::{
        forces::{FluidDrag, ForceGenerator, GravityForce, Surroundings},
        integrator::Integrator,
    },
    error::Result,
    utils::{
        allocator::{Arena, EntityId},
        logging::{warn_if_tick_budget_exceeded, ScopedTimer},
    },
};

pub use commands::{CommandQueue, WorldCommand};

/// Identifier of a world, assigned by whoever manages worlds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorldId(pub u64);

impl fmt::Display for WorldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "world-{}", self.0)
    }
}

/// What changed during one tick (and the command batch applied before it).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TickReport {
    /// Pairs that started touching; each received one collision response.
    pub contacts_started: Vec<BodyPair>,
    /// Pairs that stopped touching.
    pub contacts_ended: Vec<BodyPair>,
    /// Cached pairs dropped because a member left the world or lost its shape.
    pub stale_purged: Vec<BodyPair>,
    /// Bodies inserted by queued commands before the tick.
    pub added: Vec<EntityId>,
    /// Bodies removed by queued commands before the tick.
    pub removed: Vec<EntityId>,
}

/// A set of bodies stepped together under shared gravity and ambient density.
///
/// Each [`World::tick`] runs three phases in a fixed order: contact detection and
/// response, environmental forces, then motion integration. A world has a single
/// owner; mutations from elsewhere go through a [`CommandQueue`] applied between ticks.
pub struct World {
    id: WorldId,
    name: String,
    bodies: Arena<Body>,
    overlaps: OverlapTracker,
    gravity: Vec3,
    air_density: f32,
    tick_budget_ms: Option<f32>,
    integrator: Integrator,
}

impl World {
    pub fn new(id: WorldId, name: impl Into<String>) -> Self {
        let config = WorldConfig::default();
        Self {
            id,
            name: name.into(),
            bodies: Arena::new(),
            overlaps: OverlapTracker::new(),
            gravity: config.gravity,
            air_density: config.air_density,
            tick_budget_ms: config.tick_budget_ms,
            integrator: Integrator::new(),
        }
    }

    pub fn with_config(id: WorldId, name: impl Into<String>, config: WorldConfig) -> Result<Self> {
        config.validate()?;
        let mut world = Self::new(id, name);
        world.gravity = config.gravity;
        world.air_density = config.air_density;
        world.tick_budget_ms = config.tick_budget_ms;
        Ok(world)
    }

    pub fn id(&self) -> WorldId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gravity(&self) -> Vec3 {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: Vec3) {
        self.gravity = gravity;
    }

    pub fn air_density(&self) -> f32 {
        self.air_density
    }

    pub fn set_air_density(&mut self, density: f32) -> Result<()> {
        validate_air_density(density)?;
        self.air_density = density;
        Ok(())
    }

    pub fn add_body(&mut self, body: Body) -> EntityId {
        let id = self.bodies.insert(body);
        if let Some(stored) = self.bodies.get_mut(id) {
            stored.set_id(id);
        }
        log::debug!("{}: added body {id}", self.name);
        id
    }

    /// Removes a body and every cached contact it was part of.
    pub fn remove_body(&mut self, id: EntityId) -> Option<Body> {
        let body = self.bodies.remove(id)?;
        for pair in self.overlaps.forget_body(id) {
            log::debug!("{}: dropped contact {pair} with removed body", self.name);
        }
        Some(body)
    }

    pub fn body(&self, id: EntityId) -> Option<&Body> {
        self.bodies.get(id)
    }

    pub fn body_mut(&mut self, id: EntityId) -> Option<&mut Body> {
        self.bodies.get_mut(id)
    }

    pub fn body_ids(&self) -> Vec<EntityId> {
        self.bodies.ids().to_vec()
    }

    /// Copy of every body, in insertion order.
    pub fn bodies(&self) -> Vec<Body> {
        self.bodies.iter().map(|(_, body)| body.clone()).collect()
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Copy of the pairs currently touching.
    pub fn overlaps(&self) -> Vec<BodyPair> {
        self.overlaps.snapshot()
    }

    pub fn contact_state(&self, a: EntityId, b: EntityId) -> ContactState {
        BodyPair::new(a, b).map_or(ContactState::NoContact, |pair| self.overlaps.state(&pair))
    }

    /// Ambient density around `id`: the world's air density, or the density of the
    /// densest body it is touching if that is higher.
    pub fn fluid_density_around(&self, id: EntityId) -> f32 {
        self.overlaps
            .partners(id)
            .filter_map(|partner| self.bodies.get(partner))
            .map(Body::density)
            .fold(self.air_density, f32::max)
    }

    /// Applies queued mutations in order, recording additions and removals in `report`.
    pub fn apply_commands(&mut self, commands: Vec<WorldCommand>, report: &mut TickReport) {
        for command in commands {
            match command {
                WorldCommand::AddBody(body) => report.added.push(self.add_body(body)),
                WorldCommand::RemoveBody(id) => {
                    if self.remove_body(id).is_some() {
                        report.removed.push(id);
                    } else {
                        log::warn!("{}: ignoring removal of unknown body {id}", self.name);
                    }
                }
                WorldCommand::SetGravity(gravity) => self.set_gravity(gravity),
                WorldCommand::SetAirDensity(density) => {
                    if let Err(err) = self.set_air_density(density) {
                        log::warn!("{}: {err}", self.name);
                    }
                }
            }
        }
    }

    /// Advances the world by `delta`.
    pub fn tick(&mut self, delta: Duration) -> Result<TickReport> {
        let mut report = TickReport::default();
        self.tick_into(delta, &mut report)?;
        Ok(report)
    }

    pub(crate) fn tick_into(&mut self, delta: Duration, report: &mut TickReport) -> Result<()> {
        let started = Instant::now();
        let dt = delta.as_secs_f32();

        {
            let _timer = ScopedTimer::new("world::contacts");
            self.handle_collisions(report)?;
        }
        {
            let _timer = ScopedTimer::new("world::bodies");
            self.tick_bodies(dt);
        }

        if let Some(budget_ms) = self.tick_budget_ms {
            warn_if_tick_budget_exceeded(&self.name, started.elapsed(), budget_ms);
        }
        Ok(())
    }

    fn handle_collisions(&mut self, report: &mut TickReport) -> Result<()> {
        let shaped: Vec<(EntityId, Solid)> = self
            .bodies
            .iter()
            .filter_map(|(id, body)| body.solid().map(|solid| (id, solid)))
            .collect();

        let mut candidates = Vec::with_capacity(shaped.len() * shaped.len().saturating_sub(1) / 2);
        for (i, (id_a, solid_a)) in shaped.iter().enumerate() {
            for (id_b, solid_b) in &shaped[i + 1..] {
                if let Some(pair) = BodyPair::new(*id_a, *id_b) {
                    candidates.push((pair, solid_a, solid_b));
                }
            }
        }

        let candidate_set: BTreeSet<BodyPair> = candidates.iter().map(|(pair, ..)| *pair).collect();
        for pair in self.overlaps.purge_stale(&candidate_set) {
            log::debug!("{}: purged stale contact {pair}", self.name);
            report.stale_purged.push(pair);
        }

        for (pair, solid_a, solid_b) in candidates {
            match self.overlaps.observe(pair, solid_a.overlaps(solid_b)) {
                Some(ContactEvent::Began) => {
                    log::debug!("{}: contact began {pair}", self.name);
                    if let Some((a, b)) = self.bodies.get2_mut(pair.first(), pair.second()) {
                        resolve_contact(a, b)?;
                    }
                    report.contacts_started.push(pair);
                }
                Some(ContactEvent::Ended) => {
                    log::debug!("{}: contact ended {pair}", self.name);
                    report.contacts_ended.push(pair);
                }
                None => {}
            }
        }

        Ok(())
    }

    fn tick_bodies(&mut self, dt: f32) {
        let gravity = GravityForce::new(self.gravity);
        let ids = self.bodies.ids().to_vec();

        for id in ids {
            let surroundings = Surroundings {
                fluid_density: self.fluid_density_around(id),
            };
            let Some(body) = self.bodies.get_mut(id) else {
                continue;
            };

            gravity.apply(body, &surroundings, dt);
            if body.has_geometry() {
                FluidDrag.apply(body, &surroundings, dt);
            }
            self.integrator.integrate(body, dt);
        }
    }
}

impl fmt::Debug for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("World")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("bodies", &self.bodies.len())
            .field("overlaps", &self.overlaps.len())
            .field("gravity", &self.gravity)
            .field("air_density", &self.air_density)
            .finish()
    }
}
