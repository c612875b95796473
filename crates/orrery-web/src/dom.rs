//! Host page helpers: container lookup and entropy.

use thiserror::Error;
use web_sys::Element;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("no global `window` (not running in a browser page)")]
    NoWindow,
    #[error("window has no `document`")]
    NoDocument,
    #[error("scene container `#{0}` not found")]
    ContainerNotFound(String),
}

/// Find the element the host renders the scene into.
pub fn find_container(id: &str) -> Result<Element, WebError> {
    let window = web_sys::window().ok_or(WebError::NoWindow)?;
    let document = window.document().ok_or(WebError::NoDocument)?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| WebError::ContainerNotFound(id.to_string()))
}

/// A fresh RNG seed from the host's `Math.random`.
pub fn host_seed() -> u64 {
    let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (hi << 32) | lo
}
