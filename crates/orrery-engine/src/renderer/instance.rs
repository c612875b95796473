use bytemuck::{Pod, Zeroable};

/// Per-instance sphere render data.
/// Written to the shared buffer for the host's sphere pipeline.
/// 16 floats = 64 bytes per instance.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct BodyInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub radius: f32,
    pub spin: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub shininess: f32,
    pub emissive: f32,
    /// Ring inner radius (0 = no rings).
    pub ring_inner: f32,
    pub ring_outer: f32,
    pub ring_tilt: f32,
    pub _pad0: f32,
    pub _pad1: f32,
    pub _pad2: f32,
}

impl BodyInstance {
    pub const FLOATS: usize = 16;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Buffer of sphere instances rebuilt every frame.
pub struct InstanceBuffer {
    instances: Vec<BodyInstance>,
    max: usize,
}

impl InstanceBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
            max,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    /// Append an instance. Instances beyond capacity are dropped so the
    /// wire section never overflows.
    pub fn push(&mut self, instance: BodyInstance) -> bool {
        if self.instances.len() >= self.max {
            return false;
        }
        self.instances.push(instance);
        true
    }

    pub fn as_slice(&self) -> &[BodyInstance] {
        &self.instances
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }
}

impl Default for InstanceBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_instance_is_64_bytes() {
        assert_eq!(std::mem::size_of::<BodyInstance>(), 64);
        assert_eq!(BodyInstance::STRIDE_BYTES, 64);
    }

    #[test]
    fn push_respects_capacity() {
        let mut buf = InstanceBuffer::with_capacity(2);
        assert!(buf.push(BodyInstance::default()));
        assert!(buf.push(BodyInstance::default()));
        assert!(!buf.push(BodyInstance::default()));
        assert_eq!(buf.instance_count(), 2);
    }
}
