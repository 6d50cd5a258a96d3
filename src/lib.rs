//! Tangible Physics – a tick-driven simulation step for worlds of 3D bodies.
//!
//! Every tick detects which bodies touch, answers each new contact with a single
//! elastic impulse exchange, applies gravity and fluid drag, and integrates motion.
//! Drag uses the densest body a body is touching as its surrounding medium.

pub mod collision;
pub mod config;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod utils;
pub mod world;

use std::time::Duration;

pub use glam::{Quat, Vec3};

pub use collision::{BodyPair, ContactEvent, ContactState, OverlapTracker, Solid};
pub use config::WorldConfig;
pub use crate::core::{Body, BodyBuilder, Geometry, GeometryKind, Pose, Triangle};
pub use dynamics::{FluidDrag, ForceGenerator, GravityForce, Integrator, Surroundings};
pub use error::{PhysicsError, Result};
pub use utils::allocator::EntityId;
pub use world::{CommandQueue, TickReport, World, WorldCommand, WorldId};

/// Single-owner handle that drives a [`World`].
///
/// Other threads submit changes through [`PhysicsEngine::commands`]; they are applied
/// at the start of the next [`PhysicsEngine::tick`], never in the middle of one.
pub struct PhysicsEngine {
    world: World,
    commands: CommandQueue,
}

impl PhysicsEngine {
    /// Wraps an existing world.
    pub fn new(world: World) -> Self {
        Self {
            world,
            commands: CommandQueue::new(),
        }
    }

    /// Creates an engine around a fresh world built from `config`.
    pub fn with_config(id: WorldId, name: impl Into<String>, config: WorldConfig) -> Result<Self> {
        Ok(Self::new(World::with_config(id, name, config)?))
    }

    /// A handle for queueing world mutations from anywhere.
    pub fn commands(&self) -> CommandQueue {
        self.commands.clone()
    }

    /// Adds a body immediately and returns its generated [`EntityId`].
    pub fn add_body(&mut self, body: Body) -> EntityId {
        self.world.add_body(body)
    }

    /// Removes a body immediately.
    pub fn remove_body(&mut self, id: EntityId) -> Option<Body> {
        self.world.remove_body(id)
    }

    /// Applies queued commands, then advances the world by `delta`.
    pub fn tick(&mut self, delta: Duration) -> Result<TickReport> {
        let mut report = TickReport::default();
        self.world.apply_commands(self.commands.drain(), &mut report);
        self.world.tick_into(delta, &mut report)?;
        Ok(report)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn into_world(self) -> World {
        self.world
    }
}
