//! Entities of one scene, kept in spawn order.
//!
//! Bodies are never removed once spawned, so a flat Vec with linear lookup
//! is all the storage a solar system needs.

use crate::api::types::EntityId;
use crate::components::entity::Entity;

#[derive(Default)]
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity and hand back its id.
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = entity.id;
        if self.get(id).is_some() {
            log::warn!("entity {:?} spawned twice", id);
        }
        self.entities.push(entity);
        id
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// All entities, in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Active entities that accept clicks.
    pub fn pickable(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.active && e.pickable)
    }

    pub fn find_by_tag(&self, tag: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.tag == tag)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn spawn_returns_id() {
        let mut scene = Scene::new();
        let id = scene.spawn(Entity::new(EntityId(4)).with_pos(Vec3::new(10.0, 0.0, 20.0)));
        assert_eq!(id, EntityId(4));
        assert_eq!(scene.get(id).unwrap().pos, Vec3::new(10.0, 0.0, 20.0));
        assert!(scene.get(EntityId(5)).is_none());
    }

    #[test]
    fn pickable_skips_inactive_and_plain() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_tag("sun"));
        scene.spawn(Entity::new(EntityId(2)).with_tag("earth").pickable());
        let mut hidden = Entity::new(EntityId(3)).with_tag("mars").pickable();
        hidden.active = false;
        scene.spawn(hidden);

        let ids: Vec<EntityId> = scene.pickable().map(|e| e.id).collect();
        assert_eq!(ids, vec![EntityId(2)]);
        assert_eq!(scene.len(), 3);
    }

    #[test]
    fn find_by_tag_returns_first() {
        let mut scene = Scene::new();
        assert!(scene.is_empty());
        scene.spawn(Entity::new(EntityId(1)).with_tag("sun"));
        scene.spawn(Entity::new(EntityId(2)).with_tag("earth"));
        assert_eq!(scene.find_by_tag("earth").unwrap().id, EntityId(2));
        assert!(scene.find_by_tag("pluto").is_none());
    }
}
