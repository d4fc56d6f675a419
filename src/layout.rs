//! Geometry of a rendered barcode.
//!
//! The module width is derived from a fixed target width rather than from the
//! caller's bar width, so short and long values render at a similar size.

use crate::barcode::BitPattern;
use crate::error::{BarcodeError, Result};

/// Overall width the bars are scaled to fit.
pub const TARGET_WIDTH: u32 = 450;

/// Minimum blank margin left and right of the bars.
pub const MIN_PADDING: f64 = 20.0;

/// Space reserved under the bars when the label is shown.
pub const LABEL_HEIGHT: u32 = 25;

/// Top plus bottom margin around the bar region.
pub const VERTICAL_MARGIN: u32 = 20;

/// Distance of the bars from the top edge.
pub const BAR_TOP: u32 = 10;

/// Computed placement of a barcode on its canvas. Read-only once built.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Layout {
    module_width: u32,
    total_bars: usize,
    barcode_height: u32,
    label_height: u32,
    horizontal_padding: f64,
    canvas_width: f64,
    canvas_height: u32,
}

impl Layout {
    /// Lays out `pattern` for the given parameters.
    ///
    /// `bar_width` is accepted for compatibility and only checked to be positive;
    /// the module width is always `max(1, 450 / modules)`.
    ///
    /// # Errors
    ///
    /// Returns [`BarcodeError::InvalidHeight`] or [`BarcodeError::InvalidBarWidth`]
    /// for zero parameters and [`BarcodeError::CanvasTooLarge`] when the canvas
    /// size does not fit in 32 bits.
    ///
    /// # Example
    ///
    /// ```rust
    /// use barcode_svg::barcode::encode_code128;
    /// use barcode_svg::layout::Layout;
    ///
    /// let pattern = encode_code128("123456789");
    /// let layout = Layout::compute(&pattern, 2, 100, true).unwrap();
    /// assert_eq!(layout.module_width(), 3);
    /// assert_eq!(layout.canvas_height(), 145);
    /// ```
    pub fn compute(
        pattern: &BitPattern,
        bar_width: u32,
        barcode_height: u32,
        display_label: bool,
    ) -> Result<Self> {
        if barcode_height == 0 {
            return Err(BarcodeError::InvalidHeight(barcode_height));
        }
        if bar_width == 0 {
            return Err(BarcodeError::InvalidBarWidth(bar_width));
        }

        let total_bars = pattern.len();
        let too_large = || BarcodeError::CanvasTooLarge {
            bars: total_bars,
            height: barcode_height,
        };

        let bars = u32::try_from(total_bars).map_err(|_| too_large())?;
        let module_width = if bars == 0 { 1 } else { (TARGET_WIDTH / bars).max(1) };
        let actual_width = bars.checked_mul(module_width).ok_or_else(too_large)?;

        let slack = f64::from(TARGET_WIDTH) - f64::from(actual_width);
        let horizontal_padding = MIN_PADDING.max(slack / 2.0);
        let canvas_width = f64::from(actual_width) + 2.0 * horizontal_padding;

        let label_height = if display_label { LABEL_HEIGHT } else { 0 };
        let canvas_height = barcode_height
            .checked_add(label_height + VERTICAL_MARGIN)
            .ok_or_else(too_large)?;

        Ok(Self {
            module_width,
            total_bars,
            barcode_height,
            label_height,
            horizontal_padding,
            canvas_width,
            canvas_height,
        })
    }

    /// Width of one bar or space module; at least 1.
    pub fn module_width(&self) -> u32 {
        self.module_width
    }

    /// Number of module slots, equal to the pattern length.
    pub fn total_bars(&self) -> usize {
        self.total_bars
    }

    /// Height of the bars, as requested.
    pub fn barcode_height(&self) -> u32 {
        self.barcode_height
    }

    /// Space below the bars reserved for the label, 0 when hidden.
    pub fn label_height(&self) -> u32 {
        self.label_height
    }

    /// Blank margin left of the first module, never below 20.
    pub fn horizontal_padding(&self) -> f64 {
        self.horizontal_padding
    }

    /// Total document width: bars plus padding on both sides.
    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    /// Total document height: bars, label and vertical margin.
    pub fn canvas_height(&self) -> u32 {
        self.canvas_height
    }

    /// Width actually covered by modules.
    pub fn bars_width(&self) -> u64 {
        self.total_bars as u64 * u64::from(self.module_width)
    }

    /// Left edge of the module at `index`.
    pub fn module_x(&self, index: usize) -> f64 {
        self.horizontal_padding + (index as f64) * f64::from(self.module_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::barcode::{encode_code128, encode_code39};

    #[test]
    fn test_layout_123456789() {
        let pattern = encode_code128("123456789");
        let layout = Layout::compute(&pattern, 2, 100, true).unwrap();
        assert_eq!(layout.total_bars(), 123);
        assert_eq!(layout.module_width(), 3);
        assert_eq!(layout.bars_width(), 369);
        assert_eq!(layout.horizontal_padding(), 40.5);
        assert_eq!(layout.canvas_width(), 450.0);
        assert_eq!(layout.canvas_height(), 145);
    }

    #[test]
    fn test_layout_minimum_padding() {
        // 24 modules * 18 = 432, centering would leave only 9 on each side.
        let pattern = encode_code128("");
        let layout = Layout::compute(&pattern, 2, 100, false).unwrap();
        assert_eq!(layout.module_width(), 18);
        assert_eq!(layout.horizontal_padding(), 20.0);
        assert_eq!(layout.canvas_width(), 472.0);
        assert_eq!(layout.canvas_height(), 120);
        assert_eq!(layout.label_height(), 0);
    }

    #[test]
    fn test_layout_long_pattern_keeps_module_width() {
        let pattern = encode_code128(&"A".repeat(60));
        assert!(pattern.len() > 450);
        let layout = Layout::compute(&pattern, 2, 80, true).unwrap();
        assert_eq!(layout.module_width(), 1);
        assert_eq!(layout.horizontal_padding(), 20.0);
        assert_eq!(layout.canvas_width(), pattern.len() as f64 + 40.0);
    }

    #[test]
    fn test_layout_ignores_bar_width() {
        let pattern = encode_code39("HELLO");
        let narrow = Layout::compute(&pattern, 1, 100, true).unwrap();
        let wide = Layout::compute(&pattern, 7, 100, true).unwrap();
        assert_eq!(narrow, wide);
        assert_eq!(narrow.module_width(), 450 / 89);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let pattern = encode_code39("DETERMINISTIC");
        let a = Layout::compute(&pattern, 2, 60, true).unwrap();
        let b = Layout::compute(&pattern, 2, 60, true).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_layout_rejects_zero_parameters() {
        let pattern = encode_code128("1");
        assert!(matches!(
            Layout::compute(&pattern, 2, 0, true),
            Err(BarcodeError::InvalidHeight(0))
        ));
        assert!(matches!(
            Layout::compute(&pattern, 0, 100, true),
            Err(BarcodeError::InvalidBarWidth(0))
        ));
    }

    #[test]
    fn test_layout_rejects_overflowing_height() {
        let pattern = encode_code128("1");
        assert!(matches!(
            Layout::compute(&pattern, 2, u32::MAX, true),
            Err(BarcodeError::CanvasTooLarge { .. })
        ));
    }

    #[test]
    fn test_module_x() {
        let pattern = encode_code128("123456789");
        let layout = Layout::compute(&pattern, 2, 100, true).unwrap();
        assert_eq!(layout.module_x(0), 40.5);
        assert_eq!(layout.module_x(2), 46.5);
    }
}
