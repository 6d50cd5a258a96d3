use std::{collections::VecDeque, sync::Arc};

use glam::Vec3;
use parking_lot::Mutex;

use crate::{core::body::Body, utils::allocator::EntityId};

/// A world mutation deferred until the owner applies it between ticks.
#[derive(Debug, Clone)]
pub enum WorldCommand {
    AddBody(Body),
    RemoveBody(EntityId),
    SetGravity(Vec3),
    SetAirDensity(f32),
}

/// Thread-safe FIFO of pending world mutations.
///
/// Clones share the same queue, so any thread can hold one and submit changes while
/// the world's single owner keeps ticking. Nothing here touches the world itself; the
/// owner drains the queue between ticks.
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    pending: Arc<Mutex<VecDeque<WorldCommand>>>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, command: WorldCommand) {
        self.pending.lock().push_back(command);
    }

    pub fn add_body(&self, body: Body) {
        self.push(WorldCommand::AddBody(body));
    }

    pub fn remove_body(&self, id: EntityId) {
        self.push(WorldCommand::RemoveBody(id));
    }

    pub fn set_gravity(&self, gravity: Vec3) {
        self.push(WorldCommand::SetGravity(gravity));
    }

    pub fn set_air_density(&self, density: f32) {
        self.push(WorldCommand::SetAirDensity(density));
    }

    /// Takes every pending command, oldest first.
    pub fn drain(&self) -> Vec<WorldCommand> {
        self.pending.lock().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.lock().is_empty()
    }
}
