//! Multiple pass depth control for deep cuts.
//!
//! Pocketing steps down half a tool diameter per pass. The pass count is
//! `floor(total / step) + 1` and every depth is clamped to the total, so when
//! the step divides the total evenly the last two passes share a depth.
//! [`MultiPassConfig::cutting_depths`] drops the repeat.

/// Configuration for multi-pass depth control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiPassConfig {
    pub total_depth: f64,
    pub step_down: f64,
}

impl MultiPassConfig {
    /// Creates a new multi-pass configuration.
    pub fn new(total_depth: f64, step_down: f64) -> Self {
        debug_assert!(
            total_depth.is_finite(),
            "total_depth must be finite, got {total_depth}"
        );
        Self {
            total_depth,
            step_down,
        }
    }

    /// Steps down by half the tool diameter.
    pub fn for_tool(total_depth: f64, tool_diameter: f64) -> Self {
        Self::new(total_depth, tool_diameter / 2.0)
    }

    /// Calculates the number of passes needed.
    pub fn calculate_passes(&self) -> u32 {
        if !self.step_down.is_finite() || self.step_down <= 0.0 {
            return 1;
        }
        (self.total_depth.abs() / self.step_down).floor() as u32 + 1
    }

    /// Z for the zero-based `pass`; negative below the stock top.
    pub fn calculate_pass_depth(&self, pass: u32) -> f64 {
        let total = self.total_depth.abs();
        if !self.step_down.is_finite() || self.step_down <= 0.0 {
            return -total;
        }
        -((pass + 1) as f64 * self.step_down).min(total)
    }

    /// Gets all pass depths as a vector.
    pub fn get_all_pass_depths(&self) -> Vec<f64> {
        (0..self.calculate_passes())
            .map(|pass| self.calculate_pass_depth(pass))
            .collect()
    }

    /// Pass depths with consecutive repeats removed; what the emitter cuts.
    pub fn cutting_depths(&self) -> Vec<f64> {
        let mut depths = self.get_all_pass_depths();
        depths.dedup_by(|a, b| (*a - *b).abs() < f64::EPSILON);
        depths
    }
}
