//! Parallax layer offsets.
//!
//! Each layer moves at `speed` times the scroll rate in the opposite
//! direction. Offsets are a pure function of scroll position and speed.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

/// Attribute marking additional parallax layers, ordered by document position.
pub const PARALLAX_ATTR: &str = "data-parallax";

/// Hero section whose background layer gets the single-layer speed.
pub const HERO_SELECTOR: &str = "section.relative.min-h-screen";

/// Background layer inside the hero section.
pub const HERO_LAYER_SELECTOR: &str = ".absolute.inset-0";

/// Speed of the `index`-th `[data-parallax]` layer.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn layer_speed(index: usize) -> f64 {
    0.1 + 0.05 * index as f64
}

/// Vertical offset in pixels for a layer.
#[must_use]
pub fn offset(scroll_y: f64, speed: f64) -> f64 {
    -(scroll_y * speed)
}

/// Inline `transform` for a vertical offset, rounded to two decimals.
#[must_use]
pub fn transform(offset_px: f64) -> String {
    // + 0.0 turns -0 into 0
    let rounded = (offset_px * 100.0).round() / 100.0 + 0.0;
    format!("translateY({rounded}px)")
}

/// Speeds of every layer found on the page, in DOM write order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParallaxLayers {
    speeds: Vec<f64>,
}

impl ParallaxLayers {
    /// Layers for an optional hero background plus the marked layers at
    /// `marked` positions among every `[data-parallax]` element.
    ///
    /// A position left out (an element that cannot be styled) keeps the
    /// speeds of the layers after it unchanged.
    #[must_use]
    pub fn new(hero_speed: Option<f64>, marked: &[usize]) -> Self {
        let speeds = hero_speed.into_iter().chain(marked.iter().copied().map(layer_speed)).collect();
        Self { speeds }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.speeds.is_empty()
    }

    /// One transform per layer for the given scroll offset.
    #[must_use]
    pub fn frame(&self, scroll_y: f64) -> Vec<String> {
        self.speeds.iter().map(|&speed| transform(offset(scroll_y, speed))).collect()
    }
}
