use crate::components::entity::Entity;
use crate::renderer::instance::{BodyInstance, InstanceBuffer};

/// Build the instance buffer from entities with mesh components.
pub fn build_instance_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    buffer: &mut InstanceBuffer,
) {
    buffer.clear();
    for entity in entities {
        if !entity.active {
            continue;
        }
        let mesh = match &entity.mesh {
            Some(m) => m,
            None => continue,
        };
        let (ring_inner, ring_outer, ring_tilt) = match mesh.rings {
            Some(r) => (r.inner_radius, r.outer_radius, r.tilt),
            None => (0.0, 0.0, 0.0),
        };
        let pushed = buffer.push(BodyInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            z: entity.pos.z,
            radius: mesh.radius,
            spin: entity.spin,
            r: mesh.color.r,
            g: mesh.color.g,
            b: mesh.color.b,
            shininess: mesh.shininess,
            emissive: mesh.emissive,
            ring_inner,
            ring_outer,
            ring_tilt,
            _pad0: 0.0,
            _pad1: 0.0,
            _pad2: 0.0,
        });
        if !pushed {
            log::warn!("instance buffer full, dropping '{}'", entity.tag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::mesh::{Color, MeshComponent, RingComponent};
    use glam::Vec3;

    #[test]
    fn build_buffer_from_entity_with_mesh() {
        let mut mesh = MeshComponent::sphere(3.0, Color::new(1.0, 0.0, 0.0))
            .with_emissive(0.5)
            .with_rings(RingComponent { inner_radius: 3.6, outer_radius: 6.6, tilt: 1.2 });
        mesh.shininess = 64.0;
        let entity = Entity::new(EntityId(1))
            .with_pos(Vec3::new(50.0, 0.0, 75.0))
            .with_spin(0.25)
            .with_mesh(mesh);

        let entities = vec![entity];
        let mut buffer = InstanceBuffer::new();
        build_instance_buffer(entities.iter(), &mut buffer);

        assert_eq!(buffer.instance_count(), 1);
        let inst = buffer.as_slice()[0];
        assert_eq!(inst.x, 50.0);
        assert_eq!(inst.z, 75.0);
        assert_eq!(inst.radius, 3.0);
        assert_eq!(inst.spin, 0.25);
        assert_eq!(inst.r, 1.0);
        assert_eq!(inst.shininess, 64.0);
        assert_eq!(inst.emissive, 0.5);
        assert_eq!(inst.ring_outer, 6.6);
    }

    #[test]
    fn build_buffer_skips_inactive_and_no_mesh() {
        let e1 = Entity::new(EntityId(1)); // no mesh
        let mut e2 = Entity::new(EntityId(2)).with_mesh(MeshComponent::default());
        e2.active = false;
        let e3 = Entity::new(EntityId(3)).with_mesh(MeshComponent::default());

        let entities = vec![e1, e2, e3];
        let mut buffer = InstanceBuffer::new();
        build_instance_buffer(entities.iter(), &mut buffer);

        assert_eq!(buffer.instance_count(), 1);
        assert_eq!(buffer.as_slice()[0].ring_inner, 0.0);
    }
}
