//! Animation registry
//!
//! Owns a set of animations and advances them together on each driver tick,
//! retiring the ones that are no longer running.

use crate::animation::Animation;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    pub struct AnimationId;
}

/// Owns animations and advances them once per external tick
#[derive(Debug, Default)]
pub struct AnimationRegistry {
    animations: SlotMap<AnimationId, Animation>,
    /// Insertion order; the slot map reuses freed slots so it cannot provide it
    order: Vec<AnimationId>,
}

impl AnimationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of an animation. It is not started.
    pub fn add(&mut self, animation: Animation) -> AnimationId {
        let id = self.animations.insert(animation);
        self.order.push(id);
        id
    }

    pub fn get(&self, id: AnimationId) -> Option<&Animation> {
        self.animations.get(id)
    }

    pub fn get_mut(&mut self, id: AnimationId) -> Option<&mut Animation> {
        self.animations.get_mut(id)
    }

    pub fn remove(&mut self, id: AnimationId) -> Option<Animation> {
        let animation = self.animations.remove(id)?;
        self.order.retain(|other| *other != id);
        Some(animation)
    }

    /// Tick all animations
    ///
    /// Every held animation is advanced in insertion order first; only then
    /// are the ones that are not running dropped, so an animation finishing
    /// on this tick still delivers its final value. Animations that were
    /// never started are dropped too.
    pub fn update(&mut self, dt: f32) {
        for id in &self.order {
            if let Some(animation) = self.animations.get_mut(*id) {
                animation.update(dt);
            }
        }

        let animations = &mut self.animations;
        self.order.retain(|id| {
            let running = animations.get(*id).is_some_and(Animation::is_running);
            if !running {
                animations.remove(*id);
                tracing::trace!(?id, "animation evicted");
            }
            running
        });

        tracing::debug!(dt, remaining = self.order.len(), "animation registry ticked");
    }

    /// Check if any animations are still active
    pub fn has_active_animations(&self) -> bool {
        self.animations.iter().any(|(_, a)| a.is_running())
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (AnimationId, &Animation)> {
        self.order
            .iter()
            .filter_map(|id| self.animations.get(*id).map(|a| (*id, a)))
    }

    pub fn contains(&self, id: AnimationId) -> bool {
        self.animations.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    pub fn clear(&mut self) {
        self.animations.clear();
        self.order.clear();
    }
}
