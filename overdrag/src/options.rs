// Copyright 2025 the Overdrag Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-instance configuration.

/// Configuration for one controlled element.
///
/// Options are fixed once the instance is attached. Inverted limits
/// (`max_content_width < min_content_width`) are accepted; the minimum wins.
///
/// ```
/// use overdrag::Options;
///
/// let options = Options::default()
///     .with_min_content_size(80, 40)
///     .with_max_content_width(Some(640))
///     .with_snap_threshold(8);
/// assert_eq!(options.min_content_width, 80);
/// assert_eq!(options.max_content_height, None);
/// assert_eq!(options.controls_threshold, 16);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct Options {
    /// Smallest CSS width a resize may produce.
    pub min_content_width: i32,
    /// Smallest CSS height a resize may produce.
    pub min_content_height: i32,
    /// Largest CSS width a resize may produce, `None` for unbounded.
    pub max_content_width: Option<i32>,
    /// Largest CSS height a resize may produce, `None` for unbounded.
    pub max_content_height: Option<i32>,
    /// Distance from a parent edge at which moves and resizes snap to it.
    pub snap_threshold: i32,
    /// Width of the edge sensors inside the visual bounds.
    pub controls_threshold: i32,
    /// Net pointer travel, per axis, below which a release counts as a click.
    pub click_detection_threshold: i32,
    /// Opt out of hover exclusivity so this instance can stay engaged
    /// together with nested instances.
    pub stack: bool,
    /// Keep children out of the parent's padding.
    pub exclude_padding: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_content_width: 50,
            min_content_height: 50,
            max_content_width: None,
            max_content_height: None,
            snap_threshold: 16,
            controls_threshold: 16,
            click_detection_threshold: 5,
            stack: false,
            exclude_padding: false,
        }
    }
}

impl Options {
    /// Set both minimum content dimensions.
    #[must_use]
    pub fn with_min_content_size(mut self, width: i32, height: i32) -> Self {
        self.min_content_width = width;
        self.min_content_height = height;
        self
    }

    /// Set the maximum content width.
    #[must_use]
    pub fn with_max_content_width(mut self, width: Option<i32>) -> Self {
        self.max_content_width = width;
        self
    }

    /// Set the maximum content height.
    #[must_use]
    pub fn with_max_content_height(mut self, height: Option<i32>) -> Self {
        self.max_content_height = height;
        self
    }

    /// Set the snap threshold.
    #[must_use]
    pub fn with_snap_threshold(mut self, threshold: i32) -> Self {
        self.snap_threshold = threshold;
        self
    }

    /// Set the edge sensor width.
    #[must_use]
    pub fn with_controls_threshold(mut self, threshold: i32) -> Self {
        self.controls_threshold = threshold;
        self
    }

    /// Set the click detection threshold.
    #[must_use]
    pub fn with_click_detection_threshold(mut self, threshold: i32) -> Self {
        self.click_detection_threshold = threshold;
        self
    }

    /// Opt in or out of stacking.
    #[must_use]
    pub fn with_stack(mut self, stack: bool) -> Self {
        self.stack = stack;
        self
    }

    /// Exclude or include the parent's padding in the action area.
    #[must_use]
    pub fn with_exclude_padding(mut self, exclude: bool) -> Self {
        self.exclude_padding = exclude;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let o = Options::default();
        assert_eq!((o.min_content_width, o.min_content_height), (50, 50));
        assert_eq!((o.max_content_width, o.max_content_height), (None, None));
        assert_eq!(o.snap_threshold, 16);
        assert_eq!(o.controls_threshold, 16);
        assert_eq!(o.click_detection_threshold, 5);
        assert!(!o.stack);
        assert!(!o.exclude_padding);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_option_bags_fill_defaults() {
        let o: Options =
            serde_json::from_str(r#"{ "maxContentWidth": 300, "stack": true }"#).unwrap();
        assert_eq!(o.max_content_width, Some(300));
        assert!(o.stack);
        assert_eq!(o.snap_threshold, 16);
    }
}
