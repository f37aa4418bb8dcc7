use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnimationError {
    #[error("animation script could not be loaded from {0}")]
    ScriptUnavailable(String),
    #[error("animation renderer is not available")]
    Unavailable,
    #[error("animation document could not be fetched: {0}")]
    Fetch(String),
    #[error("animation document is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("animation document is unusable: {0}")]
    Invalid(&'static str),
    #[error("animation renderer failed: {0}")]
    Render(String),
}

#[derive(Clone, Debug, Deserialize)]
pub struct AnimationDocument {
    #[serde(rename = "fr")]
    pub frame_rate: f64,
    #[serde(rename = "ip")]
    pub in_point: f64,
    #[serde(rename = "op")]
    pub out_point: f64,
    #[serde(rename = "w")]
    pub width: u32,
    #[serde(rename = "h")]
    pub height: u32,
    #[serde(default)]
    pub layers: Vec<serde_json::Value>,
}

impl AnimationDocument {
    pub fn parse(raw: &str) -> Result<Self, AnimationError> {
        let document: Self = serde_json::from_str(raw)?;
        document.validate()?;
        Ok(document)
    }

    fn validate(&self) -> Result<(), AnimationError> {
        if !(self.frame_rate.is_finite() && self.frame_rate > 0.0) {
            return Err(AnimationError::Invalid("frame rate must be positive"));
        }
        if self.out_point <= self.in_point {
            return Err(AnimationError::Invalid("frame range is empty"));
        }
        if self.width == 0 || self.height == 0 {
            return Err(AnimationError::Invalid("canvas has no area"));
        }
        if self.layers.is_empty() {
            return Err(AnimationError::Invalid("no layers"));
        }
        Ok(())
    }

    pub fn duration_seconds(&self) -> f64 {
        (self.out_point - self.in_point) / self.frame_rate
    }
}

pub trait AnimationHandle {
    fn destroy(&mut self);
}

/// Owners call `release` on teardown.
pub enum Decoration<H: AnimationHandle> {
    Animated(H),
    Fallback,
}

impl<H: AnimationHandle> Decoration<H> {
    pub fn from_result(result: Result<H, AnimationError>) -> Self {
        match result {
            Ok(handle) => Self::Animated(handle),
            Err(err) => {
                log::warn!("{err}; using fallback decoration");
                Self::Fallback
            }
        }
    }

    pub fn fallback_visible(&self) -> bool {
        matches!(self, Self::Fallback)
    }

    pub fn release(&mut self) {
        if let Self::Animated(mut handle) = std::mem::replace(self, Self::Fallback) {
            handle.destroy();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    const BRAIN: &str = include_str!("../static/animations/ai-brain.json");

    struct CountingHandle(Rc<Cell<u32>>);

    impl AnimationHandle for CountingHandle {
        fn destroy(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn bundled_document_is_valid() {
        let document = AnimationDocument::parse(BRAIN).expect("bundled animation parses");

        assert_eq!(document.width, 600);
        assert_eq!(document.layers.len(), 2);
        assert!((document.duration_seconds() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn truncated_document_is_malformed() {
        let result = AnimationDocument::parse(&BRAIN[..BRAIN.len() / 2]);

        assert!(matches!(result, Err(AnimationError::Malformed(_))));
    }

    #[test]
    fn empty_frame_range_is_rejected() {
        let raw = r#"{"v":"5.7.4","fr":60,"ip":10,"op":10,"w":10,"h":10,"layers":[{}]}"#;

        assert!(matches!(
            AnimationDocument::parse(raw),
            Err(AnimationError::Invalid("frame range is empty"))
        ));
    }

    #[test]
    fn layerless_document_is_rejected() {
        let raw = r#"{"v":"5.7.4","fr":60,"ip":0,"op":10,"w":10,"h":10}"#;

        assert!(matches!(
            AnimationDocument::parse(raw),
            Err(AnimationError::Invalid("no layers"))
        ));
    }

    #[test]
    fn failed_acquisition_shows_fallback() {
        let decoration =
            Decoration::<CountingHandle>::from_result(Err(AnimationError::Unavailable));

        assert!(decoration.fallback_visible());
    }

    #[test]
    fn missing_script_shows_fallback() {
        let decoration = Decoration::<CountingHandle>::from_result(Err(
            AnimationError::ScriptUnavailable("/vendor/lottie.min.js".to_string()),
        ));

        assert!(decoration.fallback_visible());
    }

    #[test]
    fn live_animation_is_destroyed_once() {
        let destroyed = Rc::new(Cell::new(0));
        let mut decoration = Decoration::from_result(Ok(CountingHandle(destroyed.clone())));
        assert!(!decoration.fallback_visible());

        decoration.release();
        decoration.release();

        assert!(decoration.fallback_visible());
        assert_eq!(destroyed.get(), 1);
    }
}
