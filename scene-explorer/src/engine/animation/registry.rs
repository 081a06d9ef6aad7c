use std::time::Duration;

use bevy::prelude::*;

use super::config::AnimationConfig;
use super::instance::{AnimationInstance, NodeBaseline};

/// Start/stop state of the shared animation tick.
///
/// The tick system only runs while `running` is set; it is flipped on the
/// 0 → 1 and 1 → 0 transitions of the active-instance count.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AnimationScheduler {
    running: bool,
    started_at: Option<Duration>,
}

impl AnimationScheduler {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn started_at(&self) -> Option<Duration> {
        self.started_at
    }

    fn sync(&mut self, active_count: usize, now: Duration) {
        match (self.running, active_count > 0) {
            (false, true) => {
                self.running = true;
                self.started_at = Some(now);
                info!("Animation loop started");
            }
            (true, false) => {
                self.running = false;
                self.started_at = None;
                info!("Animation loop stopped");
            }
            _ => {}
        }
    }
}

/// Named procedural animations bound to scene nodes.
///
/// Instances are evaluated in registration order; when two of them write the
/// same attribute of one node the later one wins that frame.
#[derive(Resource, Debug, Default)]
pub struct AnimationRegistry {
    instances: Vec<AnimationInstance>,
    scheduler: AnimationScheduler,
}

impl AnimationRegistry {
    /// Store a new instance, replacing any with the same id in place.
    ///
    /// The replaced instance is returned untouched; its baseline is not
    /// restored onto the node.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        node: Entity,
        config: AnimationConfig,
        baseline: NodeBaseline,
        now: Duration,
    ) -> Option<AnimationInstance> {
        let instance = AnimationInstance::new(id.into(), node, config, baseline, now);
        let replaced = match self.position(&instance.id) {
            Some(index) => Some(std::mem::replace(&mut self.instances[index], instance)),
            None => {
                self.instances.push(instance);
                None
            }
        };
        self.sync_scheduler(now);
        replaced
    }

    /// Remove an instance. The caller restores its baseline onto the node.
    pub fn unregister(&mut self, id: &str, now: Duration) -> Option<AnimationInstance> {
        let index = self.position(id)?;
        let removed = self.instances.remove(index);
        self.sync_scheduler(now);
        Some(removed)
    }

    /// Activate and restart the cycle at progress 0.
    pub fn play(&mut self, id: &str, now: Duration) -> bool {
        let Some(instance) = self.get_mut(id) else {
            return false;
        };
        instance.active = true;
        instance.phase_start = now;
        self.sync_scheduler(now);
        true
    }

    pub fn pause(&mut self, id: &str, now: Duration) -> bool {
        let Some(instance) = self.get_mut(id) else {
            return false;
        };
        instance.active = false;
        self.sync_scheduler(now);
        true
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.get(id).is_some_and(|instance| instance.active)
    }

    pub fn list_ids(&self) -> Vec<&str> {
        self.instances.iter().map(|instance| instance.id.as_str()).collect()
    }

    pub fn get(&self, id: &str) -> Option<&AnimationInstance> {
        self.instances.iter().find(|instance| instance.id == id)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.instances.iter().filter(|instance| instance.active).count()
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn scheduler(&self) -> &AnimationScheduler {
        &self.scheduler
    }

    /// Active instances in evaluation order.
    pub fn active(&self) -> impl Iterator<Item = &AnimationInstance> {
        self.instances.iter().filter(|instance| instance.active)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut AnimationInstance> {
        self.instances.iter_mut().find(|instance| instance.id == id)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.instances.iter().position(|instance| instance.id == id)
    }

    fn sync_scheduler(&mut self, now: Duration) {
        let active = self.active_count();
        self.scheduler.sync(active, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::animation::config::AnimationKind;

    fn baseline() -> NodeBaseline {
        NodeBaseline::capture(&Transform::from_xyz(0.0, 5.0, 0.0), None)
    }

    fn node(index: u32) -> Entity {
        Entity::from_raw(index)
    }

    #[test]
    fn scheduler_follows_active_count() {
        let mut registry = AnimationRegistry::default();
        assert!(!registry.is_running());

        registry.register("a", node(1), AnimationConfig::default(), baseline(), Duration::ZERO);
        assert!(registry.is_running());

        registry.register("b", node(2), AnimationConfig::default(), baseline(), Duration::ZERO);
        registry.pause("a", Duration::ZERO);
        assert!(registry.is_running());

        registry.pause("b", Duration::ZERO);
        assert!(!registry.is_running());

        registry.play("b", Duration::from_secs(1));
        assert!(registry.is_running());

        registry.unregister("b", Duration::from_secs(2));
        assert!(!registry.is_running());
        assert_eq!(registry.list_ids(), vec!["a"]);

        registry.unregister("a", Duration::from_secs(2));
        assert!(registry.is_empty());
        assert!(!registry.is_running());
    }

    #[test]
    fn paused_registration_does_not_start_loop() {
        let mut registry = AnimationRegistry::default();
        registry.register(
            "idle",
            node(1),
            AnimationConfig::default().paused(),
            baseline(),
            Duration::ZERO,
        );
        assert!(!registry.is_active("idle"));
        assert!(!registry.is_running());
    }

    #[test]
    fn play_restarts_cycle() {
        let mut registry = AnimationRegistry::default();
        registry.register("a", node(1), AnimationConfig::default(), baseline(), Duration::ZERO);
        registry.pause("a", Duration::from_secs(3));
        registry.play("a", Duration::from_secs(7));
        let instance = registry.get("a").unwrap();
        assert_eq!(instance.phase_start, Duration::from_secs(7));
        assert_eq!(instance.elapsed_secs(Duration::from_secs(7)), 0.0);
    }

    #[test]
    fn reregistering_replaces_in_place() {
        let mut registry = AnimationRegistry::default();
        registry.register("a", node(1), AnimationConfig::default(), baseline(), Duration::ZERO);
        registry.register("b", node(2), AnimationConfig::default(), baseline(), Duration::ZERO);

        let replaced = registry.register(
            "a",
            node(3),
            AnimationConfig::new(AnimationKind::Rotate),
            baseline(),
            Duration::ZERO,
        );

        assert_eq!(replaced.map(|instance| instance.node), Some(node(1)));
        assert_eq!(registry.list_ids(), vec!["a", "b"]);
        assert_eq!(registry.get("a").unwrap().kind(), AnimationKind::Rotate);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut registry = AnimationRegistry::default();
        assert!(!registry.play("ghost", Duration::ZERO));
        assert!(!registry.pause("ghost", Duration::ZERO));
        assert!(registry.unregister("ghost", Duration::ZERO).is_none());
        assert!(!registry.is_active("ghost"));
    }
}
