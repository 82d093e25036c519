//! G-code generation from toolpaths.

use crate::toolpath::{Toolpath, ToolpathSegment, ToolpathSegmentType, DEFAULT_SAFE_HEIGHT};
use pocketcam_core::MeasurementSystem;

/// G-code generator for converting toolpaths to G-code commands.
///
/// Every motion is written verbatim in toolpath order. Coordinates are
/// absolute and printed with three decimals in the selected units.
#[derive(Debug, Clone)]
pub struct GcodeGenerator {
    units: MeasurementSystem,
    /// Safe Z height for the final return to the origin (mm)
    pub safe_z: f64,
    /// Modal feed rate set in the header (mm/min)
    pub feed_rate: f64,
    line_numbers_enabled: bool,
}

impl GcodeGenerator {
    /// Creates a new G-code generator.
    pub fn new(units: MeasurementSystem, safe_z: f64, feed_rate: f64) -> Self {
        Self {
            units,
            safe_z,
            feed_rate,
            line_numbers_enabled: false,
        }
    }

    /// Enables or disables `N` line numbers.
    pub fn with_line_numbers(mut self, enabled: bool) -> Self {
        self.line_numbers_enabled = enabled;
        self
    }

    pub fn units(&self) -> MeasurementSystem {
        self.units
    }

    /// Generates a complete program for `toolpaths`, in order.
    pub fn generate(&self, toolpaths: &[Toolpath]) -> String {
        let mut writer = LineWriter::new(self.line_numbers_enabled);

        writer.comment("Generated by PocketCAM");
        writer.comment(&format!("Operations: {}", toolpaths.len()));
        writer.command(self.units.gcode_word());
        writer.command("G90");
        writer.command(&format!("F{:.1}", self.units.from_mm(self.feed_rate)));

        for (i, toolpath) in toolpaths.iter().enumerate() {
            writer.comment(&format!(
                "Operation {}: tool {:.3}mm, depth {:.3}mm",
                i + 1,
                toolpath.tool_diameter,
                toolpath.depth
            ));
            for segment in &toolpath.segments {
                writer.command(&self.format_segment(segment));
            }
        }

        writer.command(&format!(
            "G0 X{} Y{} Z{}",
            self.coord(0.0),
            self.coord(0.0),
            self.coord(self.safe_z)
        ));
        writer.finish()
    }

    /// One motion as a single G-code line, without line number.
    pub fn format_segment(&self, segment: &ToolpathSegment) -> String {
        let end = format!(
            "X{} Y{} Z{}",
            self.coord(segment.end.x),
            self.coord(segment.end.y),
            self.coord(segment.end.z)
        );
        match segment.segment_type {
            ToolpathSegmentType::RapidMove => format!("G0 {}", end),
            ToolpathSegmentType::LinearMove => format!("G1 {}", end),
            ToolpathSegmentType::ArcCW | ToolpathSegmentType::ArcCCW => {
                let cmd = if segment.segment_type == ToolpathSegmentType::ArcCW {
                    "G2"
                } else {
                    "G3"
                };
                match segment.center {
                    Some(center) => format!(
                        "{} {} I{} J{}",
                        cmd,
                        end,
                        self.coord(center.x - segment.start.x),
                        self.coord(center.y - segment.start.y)
                    ),
                    // Fallback to linear if no center provided
                    None => format!("G1 {}", end),
                }
            }
        }
    }

    fn coord(&self, value_mm: f64) -> String {
        let value = self.units.from_mm(value_mm);
        // Avoid printing "-0.000"
        let value = if value.abs() < 0.0005 { 0.0 } else { value };
        format!("{:.3}", value)
    }
}

impl Default for GcodeGenerator {
    fn default() -> Self {
        Self::new(MeasurementSystem::Metric, DEFAULT_SAFE_HEIGHT, 100.0)
    }
}

struct LineWriter {
    out: String,
    line_numbers: bool,
    next_number: u32,
}

impl LineWriter {
    fn new(line_numbers: bool) -> Self {
        Self {
            out: String::new(),
            line_numbers,
            next_number: 10,
        }
    }

    fn comment(&mut self, text: &str) {
        self.out.push_str("; ");
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn command(&mut self, text: &str) {
        if self.line_numbers {
            self.out.push_str(&format!("N{} ", self.next_number));
            self.next_number += 10;
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn finish(self) -> String {
        self.out
    }
}
