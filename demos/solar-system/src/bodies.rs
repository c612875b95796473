//! Static body tables: the sun, eight planets and Earth's moon.
//!
//! Distances and radii are scene units, not to scale. Speeds are radians
//! advanced per update at time scale 1.

/// Index of Earth in `PLANETS`, parent of the moon.
pub const EARTH: usize = 2;
pub const PLANET_COUNT: usize = 8;

// Remaining indices, named for tests.
#[cfg(test)]
pub const MERCURY: usize = 0;
#[cfg(test)]
pub const VENUS: usize = 1;
#[cfg(test)]
pub const MARS: usize = 3;
#[cfg(test)]
pub const JUPITER: usize = 4;
#[cfg(test)]
pub const SATURN: usize = 5;
#[cfg(test)]
pub const URANUS: usize = 6;
#[cfg(test)]
pub const NEPTUNE: usize = 7;

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 5.0;
pub const SUN_COLOR: u32 = 0xffffff;
pub const SUN_EMISSIVE: f32 = 1.2;

// ── Spin rates (radians per update at scale 1) ───────────────────────

pub const SUN_SPIN: f64 = 0.0005;
pub const PLANET_SPIN: f64 = 0.001;
pub const MOON_SPIN: f64 = 0.005;

// ── Saturn's rings, relative to the planet radius ────────────────────

pub const RING_INNER: f32 = 1.2;
pub const RING_OUTER: f32 = 2.2;
pub const RING_TILT: f32 = std::f32::consts::PI / 2.5;

/// One planet row.
pub struct PlanetData {
    pub name: &'static str,
    pub color: u32,
    pub radius: f32,
    pub distance: f32,
    pub speed: f64,
    pub has_moon: bool,
    pub has_rings: bool,
    pub description: Option<&'static str>,
}

/// A moon on a circular orbit around its parent planet.
pub struct MoonData {
    pub name: &'static str,
    /// Index into `PLANETS`.
    pub parent: usize,
    pub color: u32,
    pub radius: f32,
    pub distance: f32,
    pub speed: f64,
}

pub const PLANETS: [PlanetData; PLANET_COUNT] = [
    PlanetData {
        name: "mercury", color: 0x8c8c8c, radius: 0.38, distance: 10.0, speed: 0.020,
        has_moon: false, has_rings: false,
        description: Some("Mercury is the smallest planet in our solar system and nearest to the Sun. It is only slightly larger than Earth's Moon."),
    },
    PlanetData {
        name: "venus", color: 0xffd700, radius: 0.95, distance: 15.0, speed: 0.015,
        has_moon: false, has_rings: false,
        description: Some("Venus is the second planet from the Sun. It is named after the Roman goddess of love and beauty. As the brightest natural object in Earth's night sky after the Moon, Venus can cast shadows and can be, on rare occasion, visible to the naked eye in broad daylight."),
    },
    PlanetData {
        name: "earth", color: 0x0077ff, radius: 1.0, distance: 20.0, speed: 0.010,
        has_moon: true, has_rings: false,
        description: Some("Our home planet, Earth, is the third planet from the Sun, and the only place we know of so far that's inhabited by living things."),
    },
    PlanetData {
        name: "mars", color: 0xff4500, radius: 0.53, distance: 28.0, speed: 0.008,
        has_moon: false, has_rings: false,
        description: Some("Mars is the fourth planet from the Sun – a dusty, cold, desert world with a very thin atmosphere. Mars is also a dynamic planet with seasons, polar ice caps, canyons, extinct volcanoes, and evidence that it was even more active in the past."),
    },
    PlanetData {
        name: "jupiter", color: 0xffa500, radius: 3.5, distance: 45.0, speed: 0.004,
        has_moon: false, has_rings: false,
        description: Some("Jupiter is the fifth planet from our Sun and is, by far, the largest planet in the solar system – more than twice as massive as all the other planets combined."),
    },
    PlanetData {
        name: "saturn", color: 0xf0e68c, radius: 3.0, distance: 65.0, speed: 0.003,
        has_moon: false, has_rings: true,
        description: Some("Saturn is the sixth planet from the Sun and the second largest planet in our solar system. Adorned with thousands of beautiful ringlets, Saturn is unique among the planets."),
    },
    PlanetData {
        name: "uranus", color: 0xadd8e6, radius: 1.8, distance: 80.0, speed: 0.002,
        has_moon: false, has_rings: false,
        description: Some("Uranus is the seventh planet from the Sun. It's a giant, icy planet, also known as an \"ice giant.\" It is the only planet that rotates on its side."),
    },
    PlanetData {
        name: "neptune", color: 0x0000ff, radius: 1.7, distance: 95.0, speed: 0.001,
        has_moon: false, has_rings: false,
        description: Some("Neptune is the eighth and most distant major planet orbiting our Sun. It's dark, cold, and very windy. It's the last of the planets in our solar system."),
    },
];

pub const MOON: MoonData = MoonData {
    name: "moon",
    parent: EARTH,
    color: 0xcccccc,
    radius: 0.27,
    distance: 2.5,
    speed: 0.05,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planets_ordered_outward() {
        for pair in PLANETS.windows(2) {
            assert!(pair[0].distance < pair[1].distance, "{} before {}", pair[0].name, pair[1].name);
        }
    }

    #[test]
    fn planets_clear_the_sun() {
        for p in &PLANETS {
            assert!(p.distance - p.radius > SUN_RADIUS, "{} overlaps the sun", p.name);
        }
    }

    #[test]
    fn moon_parent_has_moon_flag() {
        assert!(MOON.parent < PLANET_COUNT);
        assert!(PLANETS[MOON.parent].has_moon);
        assert_eq!(PLANETS.iter().filter(|p| p.has_moon).count(), 1);
    }

    #[test]
    fn only_saturn_has_rings() {
        for (i, p) in PLANETS.iter().enumerate() {
            assert_eq!(p.has_rings, i == SATURN, "{}", p.name);
        }
    }

    #[test]
    fn descriptions_keep_source_punctuation() {
        let mars = PLANETS[MARS].description.unwrap();
        assert!(mars.starts_with("Mars is the fourth planet from the Sun – a dusty, cold"));
        let jupiter = PLANETS[JUPITER].description.unwrap();
        assert!(jupiter.contains("largest planet in the solar system – more than twice"));
        assert!(PLANETS[URANUS].description.unwrap().contains("\"ice giant.\""));
    }

    #[test]
    fn index_constants_match_names() {
        assert_eq!(PLANETS[MERCURY].name, "mercury");
        assert_eq!(PLANETS[VENUS].name, "venus");
        assert_eq!(PLANETS[MARS].name, "mars");
        assert_eq!(PLANETS[JUPITER].name, "jupiter");
        assert_eq!(PLANETS[URANUS].name, "uranus");
        assert_eq!(PLANETS[NEPTUNE].name, "neptune");
    }
}
