//! Console rendering of sensor readings.
//!
//! The [`Renderer`] queries a sensor and writes a short report:
//!
//! ```text
//!
//! OfficeRoom : AQI  65
//!              CO2          2180  ppm
//!              Temperature  21    Celsius
//!              Humidity     23    %
//! ```
//!
//! The AQI line is painted by a [`Styler`] according to its [`AqiBand`];
//! detail lines are never styled.

use std::io::{self, Write};

use owo_colors::OwoColorize;
use tracing::warn;

use airq_types::Reading;

use crate::error::Result;
use crate::thresholds::{AqiBand, Thresholds};
use crate::traits::AirQualitySensor;

/// Printed in place of a reading whose first parameter is not the AQI.
pub const FORMAT_ERROR: &str = "Wrong data formatting.";

/// Width of the room name column.
const ROOM_WIDTH: usize = 10;
/// Indentation of detail lines, lining them up under the AQI value.
const DETAIL_INDENT: usize = 13;
const NAME_WIDTH: usize = 13;
const VALUE_WIDTH: usize = 6;

/// Maps a severity band and a line of text to its output representation.
pub trait Styler {
    fn paint(&self, band: AqiBand, text: &str) -> String;
}

impl<S: Styler + ?Sized> Styler for Box<S> {
    fn paint(&self, band: AqiBand, text: &str) -> String {
        (**self).paint(band, text)
    }
}

/// Green, yellow and red ANSI colors.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiStyler;

impl Styler for AnsiStyler {
    fn paint(&self, band: AqiBand, text: &str) -> String {
        match band {
            AqiBand::Good => text.green().to_string(),
            AqiBand::Moderate => text.yellow().to_string(),
            AqiBand::Poor => text.red().to_string(),
        }
    }
}

/// Leaves text unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn paint(&self, _band: AqiBand, text: &str) -> String {
        text.to_string()
    }
}

/// What the renderer printed for one sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The AQI line (and details, if requested) were printed.
    Rendered { band: AqiBand },
    /// The sensor returned an empty reading.
    NotConnected,
    /// The first parameter was not the AQI.
    WrongFormat,
    /// The sensor failed to produce a reading.
    ReadFailed,
}

/// Writes sensor reports.
#[derive(Debug, Clone, Default)]
pub struct Renderer<S = AnsiStyler> {
    styler: S,
    thresholds: Thresholds,
}

impl Renderer<AnsiStyler> {
    /// A renderer emitting ANSI colors.
    pub fn ansi() -> Self {
        Self::new(AnsiStyler)
    }
}

impl Renderer<PlainStyler> {
    /// A renderer emitting uncolored text.
    pub fn plain() -> Self {
        Self::new(PlainStyler)
    }
}

impl<S: Styler> Renderer<S> {
    /// Create a renderer with default thresholds.
    pub fn new(styler: S) -> Self {
        Self {
            styler,
            thresholds: Thresholds::default(),
        }
    }

    /// Use `thresholds` to pick the AQI band.
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Render `sensor` to stdout.
    pub fn render(
        &self,
        sensor: &dyn AirQualitySensor,
        show_details: bool,
    ) -> Result<RenderOutcome> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render_to(sensor, show_details, &mut out)
    }

    /// Render `sensor` to `out`.
    ///
    /// Sensor problems are written inline and reported through the
    /// returned [`RenderOutcome`]; only a failure to write is an error.
    pub fn render_to<W: Write + ?Sized>(
        &self,
        sensor: &dyn AirQualitySensor,
        show_details: bool,
        out: &mut W,
    ) -> Result<RenderOutcome> {
        writeln!(out)?;

        let room = sensor.room_name();
        let reading = match sensor.get_data() {
            Ok(reading) => reading,
            Err(e) => {
                warn!(room, model = sensor.model(), "skipping sensor: {}", e);
                writeln!(out, "{:<ROOM_WIDTH$} : failed to read sensor data ({})", room, e)?;
                return Ok(RenderOutcome::ReadFailed);
            }
        };

        let Some(first) = reading.first() else {
            writeln!(out, "{:<ROOM_WIDTH$} : not connected", room)?;
            return Ok(RenderOutcome::NotConnected);
        };
        if !first.is_aqi() {
            writeln!(out, "{}", FORMAT_ERROR)?;
            writeln!(out)?;
            return Ok(RenderOutcome::WrongFormat);
        }

        let band = self.thresholds.evaluate(first.value());
        writeln!(out, "{}", self.aqi_line(room, first.value()))?;

        if show_details {
            write_details(&reading, out)?;
        }
        Ok(RenderOutcome::Rendered { band })
    }

    /// Render every sensor in order to stdout.
    pub fn render_all(
        &self,
        sensors: &[Box<dyn AirQualitySensor>],
        show_details: bool,
    ) -> Result<Vec<RenderOutcome>> {
        sensors
            .iter()
            .map(|sensor| self.render(sensor.as_ref(), show_details))
            .collect()
    }

    /// The styled AQI line for `room`, including the advisory if any.
    pub fn aqi_line(&self, room: &str, aqi: i32) -> String {
        let band = self.thresholds.evaluate(aqi);
        let mut line = format!("{:<ROOM_WIDTH$} : AQI  {}", room, aqi);
        if let Some(advisory) = band.advisory() {
            line.push_str("  - ");
            line.push_str(advisory);
        }
        self.styler.paint(band, &line)
    }
}

fn write_details<W: Write + ?Sized>(reading: &Reading, out: &mut W) -> io::Result<()> {
    for param in reading.details() {
        writeln!(
            out,
            "{:DETAIL_INDENT$}{:<NAME_WIDTH$}{:<VALUE_WIDTH$}{}",
            "",
            param.name(),
            param.value(),
            param.unit()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::StructuredSensorAdapter;
    use crate::blob::BlobValues;
    use crate::mock::MockSensorBuilder;
    use crate::thresholds::ThresholdConfig;
    use airq_types::{Parameter, ParseError};

    fn render<S: Styler>(
        renderer: &Renderer<S>,
        sensor: &dyn AirQualitySensor,
        details: bool,
    ) -> (RenderOutcome, String) {
        let mut out = Vec::new();
        let outcome = renderer.render_to(sensor, details, &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    fn office() -> Reading {
        StructuredSensorAdapter::normalize(BlobValues {
            air_quality_index: 65,
            co2_level: 2180,
            temperature: 21,
            humidity: 23,
        })
    }

    #[test]
    fn test_aqi_line_layout() {
        let sensor = MockSensorBuilder::new().room_name("LivingRoom").aqi(65).build();
        let (outcome, text) = render(&Renderer::plain(), &sensor, true);

        assert_eq!(text, "\nLivingRoom : AQI  65\n");
        assert_eq!(outcome, RenderOutcome::Rendered { band: AqiBand::Moderate });
    }

    #[test]
    fn test_short_room_name_is_padded() {
        let sensor = MockSensorBuilder::new().room_name("Den").aqi(12).build();
        let (_, text) = render(&Renderer::plain(), &sensor, false);
        assert_eq!(text, "\nDen        : AQI  12\n");
    }

    #[test]
    fn test_details_layout() {
        let sensor = MockSensorBuilder::new()
            .room_name("OfficeRoom")
            .reading(office())
            .build();
        let (_, text) = render(&Renderer::plain(), &sensor, true);
        let lines: Vec<&str> = text.lines().collect();

        let indent = " ".repeat(13);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "OfficeRoom : AQI  65");
        assert_eq!(lines[2], format!("{indent}CO2          2180  ppm"));
        assert_eq!(lines[3], format!("{indent}Temperature  21    Celsius"));
        assert_eq!(lines[4], format!("{indent}Humidity     23    %"));
    }

    #[test]
    fn test_details_hidden() {
        let sensor = MockSensorBuilder::new().reading(office()).build();
        let (_, text) = render(&Renderer::plain(), &sensor, false);
        assert!(!text.contains("CO2"));
    }

    #[test]
    fn test_wrong_format_stops_rendering() {
        let reading = Reading::new(vec![
            Parameter::new("CO2", 900, "ppm"),
            Parameter::aqi(40),
        ]);
        let sensor = MockSensorBuilder::new().room_name("Lab").reading(reading).build();
        let (outcome, text) = render(&Renderer::plain(), &sensor, true);

        assert_eq!(outcome, RenderOutcome::WrongFormat);
        assert_eq!(text, "\nWrong data formatting.\n\n");
    }

    #[test]
    fn test_poor_band_advisory() {
        let sensor = MockSensorBuilder::new().room_name("BadRoom").aqi(151).build();
        let (outcome, text) = render(&Renderer::plain(), &sensor, false);

        assert_eq!(outcome, RenderOutcome::Rendered { band: AqiBand::Poor });
        assert_eq!(text, "\nBadRoom    : AQI  151  - Open a window!\n");
    }

    #[test]
    fn test_band_boundaries() {
        let renderer = Renderer::plain();
        for (aqi, band) in [
            (50, AqiBand::Good),
            (51, AqiBand::Moderate),
            (150, AqiBand::Moderate),
            (151, AqiBand::Poor),
        ] {
            let sensor = MockSensorBuilder::new().aqi(aqi).build();
            let (outcome, text) = render(&renderer, &sensor, false);
            assert_eq!(outcome, RenderOutcome::Rendered { band });
            assert_eq!(text.contains("Open a window!"), band == AqiBand::Poor);
        }
    }

    #[test]
    fn test_ansi_colors() {
        let renderer = Renderer::ansi();
        assert!(renderer.aqi_line("A", 20).starts_with("\u{1b}[32m"));
        assert!(renderer.aqi_line("A", 100).starts_with("\u{1b}[33m"));
        assert!(renderer.aqi_line("A", 200).starts_with("\u{1b}[31m"));
        assert!(renderer.aqi_line("A", 200).contains("Open a window!"));
    }

    #[test]
    fn test_boxed_styler() {
        let renderer: Renderer<Box<dyn Styler>> = Renderer::new(Box::new(PlainStyler));
        assert_eq!(renderer.aqi_line("Hall", 30), "Hall       : AQI  30");
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = Thresholds::new(ThresholdConfig {
            good_max: 10,
            moderate_max: 20,
        })
        .unwrap();
        let renderer = Renderer::plain().with_thresholds(thresholds);
        assert!(renderer.aqi_line("Hall", 21).ends_with("Open a window!"));
    }

    #[test]
    fn test_not_connected() {
        let sensor = MockSensorBuilder::new().auto_connect(false).build();
        let (outcome, text) = render(&Renderer::plain(), &sensor, true);
        assert_eq!(outcome, RenderOutcome::NotConnected);
        assert!(text.contains("not connected"));
    }

    #[test]
    fn test_read_failure_is_reported() {
        let sensor = MockSensorBuilder::new()
            .room_name("KidsRoom1")
            .fail_with(ParseError::missing_field("Temperature"))
            .build();
        let (outcome, text) = render(&Renderer::plain(), &sensor, true);

        assert_eq!(outcome, RenderOutcome::ReadFailed);
        assert!(text.starts_with("\nKidsRoom1  : failed to read sensor data"));
        assert!(text.contains("Missing field: Temperature"));
    }

    #[test]
    fn test_render_does_not_mutate_sensor() {
        let sensor = MockSensorBuilder::new().room_name("Study").aqi(70).build();
        let renderer = Renderer::plain();
        render(&renderer, &sensor, true);
        render(&renderer, &sensor, true);

        assert!(sensor.is_connected());
        assert_eq!(sensor.room_name(), "Study");
        assert_eq!(sensor.read_count(), 2);
    }
}
