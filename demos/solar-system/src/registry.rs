/// Body registry: runtime state for every planet and moon, and the
/// per-frame orbital update.
///
/// Planets come first (indexed like `bodies::PLANETS`), moons after them,
/// so a moon's parent index is also its registry index.

use std::f64::consts::TAU;

use glam::Vec3;
use orrery_engine::{
    Color, EngineContext, Entity, EntityId, LineBuffer, MeshComponent, RingComponent, Rng, Scene,
};

use crate::bodies::{self, MoonData, PlanetData};

#[derive(Debug, Clone)]
pub struct CelestialBody {
    pub name: &'static str,
    pub color: Color,
    pub radius: f32,
    /// Orbit radius around the parent (or the origin).
    pub distance: f32,
    /// Radians per update at time scale 1.
    pub speed: f64,
    /// Orbital angle in `[0, 2π)`.
    pub angle: f64,
    /// Self-rotation in `[0, 2π)`.
    pub spin: f64,
    spin_rate: f64,
    /// Registry index of the body this one circles.
    pub parent: Option<usize>,
    pub has_rings: bool,
    pub description: Option<&'static str>,
    /// World position after the last update.
    pub pos: Vec3,
    pub entity: Option<EntityId>,
}

impl CelestialBody {
    fn planet(data: &PlanetData) -> Self {
        Self {
            name: data.name,
            color: Color::from_hex(data.color),
            radius: data.radius,
            distance: data.distance,
            speed: data.speed,
            angle: 0.0,
            spin: 0.0,
            spin_rate: bodies::PLANET_SPIN,
            parent: None,
            has_rings: data.has_rings,
            description: data.description,
            pos: Vec3::new(data.distance, 0.0, 0.0),
            entity: None,
        }
    }

    fn moon(data: &MoonData) -> Self {
        Self {
            name: data.name,
            color: Color::from_hex(data.color),
            radius: data.radius,
            distance: data.distance,
            speed: data.speed,
            angle: 0.0,
            spin: 0.0,
            spin_rate: bodies::MOON_SPIN,
            parent: Some(data.parent),
            has_rings: false,
            description: None,
            pos: Vec3::ZERO,
            entity: None,
        }
    }

    pub fn is_moon(&self) -> bool {
        self.parent.is_some()
    }

    /// Offset from the orbit center for the current angle.
    fn orbit_offset(&self) -> Vec3 {
        let d = self.distance as f64;
        Vec3::new((d * self.angle.cos()) as f32, 0.0, (d * self.angle.sin()) as f32)
    }

    fn advance(&mut self, scale: f64) {
        self.angle = (self.angle + self.speed * scale).rem_euclid(TAU);
        self.spin = (self.spin + self.spin_rate * scale).rem_euclid(TAU);
    }

    fn mesh(&self) -> MeshComponent {
        let mesh = MeshComponent::sphere(self.radius, self.color);
        if self.has_rings {
            mesh.with_rings(RingComponent {
                inner_radius: self.radius * bodies::RING_INNER,
                outer_radius: self.radius * bodies::RING_OUTER,
                tilt: bodies::RING_TILT,
            })
        } else {
            mesh
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BodyRegistry {
    bodies: Vec<CelestialBody>,
}

impl BodyRegistry {
    /// All planets plus the moon of every planet flagged to have one,
    /// at angle zero.
    pub fn from_tables() -> Self {
        let mut list: Vec<CelestialBody> = bodies::PLANETS.iter().map(CelestialBody::planet).collect();
        if bodies::PLANETS[bodies::MOON.parent].has_moon {
            list.push(CelestialBody::moon(&bodies::MOON));
        }
        let mut registry = Self { bodies: list };
        registry.update_orbits(0.0);
        registry
    }

    /// Randomize orbital angles and recompute positions.
    pub fn scatter(&mut self, rng: &mut Rng) {
        for body in &mut self.bodies {
            body.angle = rng.next_f64() * TAU;
        }
        self.update_orbits(0.0);
    }

    /// Advance every body by `scale` updates' worth of motion.
    /// Planets move first so moons orbit their parent's new position.
    pub fn update_orbits(&mut self, scale: f64) {
        for body in self.bodies.iter_mut().filter(|b| !b.is_moon()) {
            body.advance(scale);
            body.pos = body.orbit_offset();
        }

        for i in 0..self.bodies.len() {
            let Some(parent) = self.bodies[i].parent else {
                continue;
            };
            let Some(center) = self.bodies.get(parent).map(|p| p.pos) else {
                log::warn!("{} has no parent at index {}", self.bodies[i].name, parent);
                continue;
            };
            let moon = &mut self.bodies[i];
            moon.advance(scale);
            moon.pos = center + moon.orbit_offset();
        }
    }

    /// Spawn one entity per body. Planets are pickable, moons are not.
    pub fn spawn(&mut self, ctx: &mut EngineContext) {
        for body in &mut self.bodies {
            let id = ctx.next_id();
            let mut entity = Entity::new(id)
                .with_tag(body.name)
                .with_pos(body.pos)
                .with_spin(body.spin as f32)
                .with_mesh(body.mesh());
            if !body.is_moon() {
                entity = entity.pickable();
            }
            body.entity = Some(ctx.scene.spawn(entity));
        }
    }

    /// Copy positions and spins onto the scene entities.
    pub fn sync(&self, scene: &mut Scene) {
        for body in &self.bodies {
            if let Some(entity) = body.entity.and_then(|id| scene.get_mut(id)) {
                entity.pos = body.pos;
                entity.spin = body.spin as f32;
            }
        }
    }

    /// One closed orbit trail per planet, centered on the origin.
    pub fn push_trails(&self, lines: &mut LineBuffer, segments: usize, alpha: f32) {
        for body in self.bodies.iter().filter(|b| !b.is_moon()) {
            lines.push_circle_xz(Vec3::ZERO, body.distance, segments, [1.0, 1.0, 1.0, alpha]);
        }
    }

    pub fn get(&self, index: usize) -> Option<&CelestialBody> {
        self.bodies.get(index)
    }

    pub fn index_of_entity(&self, id: EntityId) -> Option<usize> {
        self.bodies.iter().position(|b| b.entity == Some(id))
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }
}

#[cfg(test)]
impl BodyRegistry {
    pub fn get_mut(&mut self, index: usize) -> Option<&mut CelestialBody> {
        self.bodies.get_mut(index)
    }

    pub fn index_of_name(&self, name: &str) -> Option<usize> {
        self.bodies.iter().position(|b| b.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{EARTH, PLANET_COUNT, SATURN};

    fn scattered() -> BodyRegistry {
        let mut r = BodyRegistry::from_tables();
        r.scatter(&mut Rng::new(7));
        r
    }

    /// Distance between two angles on the circle.
    fn angle_gap(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(TAU);
        d.min(TAU - d)
    }

    #[test]
    fn planets_then_moon() {
        let r = BodyRegistry::from_tables();
        assert_eq!(r.len(), PLANET_COUNT + 1);
        let moon = r.get(PLANET_COUNT).unwrap();
        assert_eq!(moon.name, "moon");
        assert_eq!(moon.parent, Some(EARTH));
        assert!(r.iter().take(PLANET_COUNT).all(|b| !b.is_moon()));
    }

    #[test]
    fn angle_advances_linearly_with_scale() {
        let mut r = scattered();
        let initial: Vec<f64> = r.iter().map(|b| b.angle).collect();
        let (n, s) = (250, 1.7);
        for _ in 0..n {
            r.update_orbits(s);
        }
        for (body, a0) in r.iter().zip(&initial) {
            let expected = (a0 + n as f64 * body.speed * s).rem_euclid(TAU);
            assert!(angle_gap(body.angle, expected) < 1e-9, "{}: {} vs {}", body.name, body.angle, expected);
            assert!((0.0..TAU).contains(&body.angle));
        }
    }

    #[test]
    fn positions_stay_on_their_circles() {
        let mut r = scattered();
        for _ in 0..500 {
            r.update_orbits(3.0);
            for body in r.iter() {
                let center = body.parent.and_then(|p| r.get(p)).map_or(Vec3::ZERO, |p| p.pos);
                let offset = body.pos - center;
                assert!(offset.y.abs() < 1e-6);
                let d2 = offset.x * offset.x + offset.z * offset.z;
                let expected = body.distance * body.distance;
                assert!((d2 - expected).abs() < 1e-3 * expected, "{}: {d2} vs {expected}", body.name);
            }
        }
    }

    #[test]
    fn zero_scale_freezes_everything() {
        let mut r = scattered();
        let before: Vec<(f64, f64, Vec3)> = r.iter().map(|b| (b.angle, b.spin, b.pos)).collect();
        for _ in 0..1000 {
            r.update_orbits(0.0);
        }
        let after: Vec<(f64, f64, Vec3)> = r.iter().map(|b| (b.angle, b.spin, b.pos)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn spin_rates_differ_for_planets_and_moons() {
        let mut r = BodyRegistry::from_tables();
        r.update_orbits(2.0);
        assert!((r.get(EARTH).unwrap().spin - 0.002).abs() < 1e-12);
        assert!((r.get(PLANET_COUNT).unwrap().spin - 0.010).abs() < 1e-12);
    }

    #[test]
    fn scatter_is_seeded() {
        let a: Vec<f64> = scattered().iter().map(|b| b.angle).collect();
        let b: Vec<f64> = scattered().iter().map(|b| b.angle).collect();
        assert_eq!(a, b);
        assert!(a.iter().any(|&x| x != 0.0));
    }

    #[test]
    fn spawn_links_entities_and_marks_planets_pickable() {
        let mut ctx = EngineContext::default();
        let mut r = scattered();
        r.spawn(&mut ctx);
        assert_eq!(ctx.scene.len(), r.len());
        for (i, body) in r.iter().enumerate() {
            let id = body.entity.unwrap();
            assert_eq!(r.index_of_entity(id), Some(i));
            let entity = ctx.scene.get(id).unwrap();
            assert_eq!(entity.pickable, !body.is_moon());
            assert_eq!(entity.pos, body.pos);
        }
        let saturn = ctx.scene.find_by_tag("saturn").unwrap();
        let rings = saturn.mesh.unwrap().rings.unwrap();
        assert!((rings.inner_radius - 3.6).abs() < 1e-6);
        assert!((rings.outer_radius - 6.6).abs() < 1e-6);
        assert_eq!(r.index_of_name("saturn"), Some(SATURN));
    }

    #[test]
    fn sync_moves_entities() {
        let mut ctx = EngineContext::default();
        let mut r = scattered();
        r.spawn(&mut ctx);
        r.update_orbits(10.0);
        r.sync(&mut ctx.scene);
        for body in r.iter() {
            let entity = ctx.scene.get(body.entity.unwrap()).unwrap();
            assert_eq!(entity.pos, body.pos);
            assert_eq!(entity.spin, body.spin as f32);
        }
    }

    #[test]
    fn one_trail_per_planet() {
        let r = BodyRegistry::from_tables();
        let mut lines = LineBuffer::new();
        r.push_trails(&mut lines, 128, 0.3);
        assert_eq!(lines.strip_count(), PLANET_COUNT as u32);
        assert_eq!(lines.vertex_count(), (PLANET_COUNT * 129) as u32);
    }
}
