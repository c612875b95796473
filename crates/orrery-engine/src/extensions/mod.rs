// extensions/mod.rs
//
// Optional extension modules.
// These are decoupled from core Entity/Scene. Games opt in by creating these systems.

pub mod orbit_controls;

pub use orbit_controls::OrbitControls;
