//! Minimal TOML parser for `lights.toml`
//!
//! Handles only the subset the lighting configuration needs and allocates
//! nothing.
//!
//! Supported:
//! - `key = value` pairs (string, integer)
//! - Integer arrays on one line: `mapping = [1, 3, 4, 2, 0, 5]`
//! - `[section]` and `[section.N]` headers
//! - Comments (`# ...`), including after a value
//!
//! Sections:
//! - `[link]`: `baudrate`, `heartbeat_ms`, `heartbeat_text`
//! - `[animation]`: `clock_period_ms`, `fade_period_ms`, `fade_by`,
//!   `blend_amount`, `bass_hue`, `bass_left_offset`, `bass_right_offset`
//! - `[zones]`: `mapping`
//! - `[region.N]`: `start`, `length`, `hue` (`"bass"` or 0-255)
//!
//! Anything left out keeps its default.

use heapless::String;

use super::types::{BassHue, LightConfig, ValidationError, MAX_HEARTBEAT_LEN};
use crate::zone::{GeometryError, Region, RegionHue, ZoneGeometry, REGION_COUNT};
use marquee_protocol::ZONE_COUNT;

/// Configuration error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Unknown key in a known section
    InvalidKey,
    /// Value of the wrong type or out of range
    InvalidValue,
    /// Array or string longer than its storage
    TooManyItems,
    /// Regions or mapping do not form a valid geometry
    Geometry(GeometryError),
    /// A period of zero
    ZeroPeriod,
}

impl From<GeometryError> for ConfigError {
    fn from(e: GeometryError) -> Self {
        ConfigError::Geometry(e)
    }
}

impl From<ValidationError> for ConfigError {
    fn from(e: ValidationError) -> Self {
        match e {
            ValidationError::ZeroPeriod => ConfigError::ZeroPeriod,
            ValidationError::Geometry(g) => ConfigError::Geometry(g),
        }
    }
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Link,
    Animation,
    Zones,
    Region(usize),
}

/// Parse and validate a lighting configuration
pub fn parse_config(input: &str) -> Result<LightConfig, ConfigError> {
    let mut config = LightConfig::new();
    let mut regions = *config.geometry.regions();
    let mut mapping = *config.geometry.mapping();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            let header = strip_comment(line);
            if !header.ends_with(']') {
                return Err(ConfigError::InvalidSection);
            }
            section = parse_section_header(&header[1..header.len() - 1])?;
            continue;
        }

        let Some((key, value)) = parse_key_value(line) else {
            continue;
        };

        match section {
            // Top-level keys are reserved
            Section::Root => {}
            Section::Link => apply_link(&mut config, key, value)?,
            Section::Animation => apply_animation(&mut config, key, value)?,
            Section::Zones => match key {
                "mapping" => mapping = parse_int_array(value)?,
                _ => return Err(ConfigError::InvalidKey),
            },
            Section::Region(index) => apply_region(&mut regions[index], key, value)?,
        }
    }

    config.geometry = ZoneGeometry::new(regions, mapping)?;
    config.validate()?;
    Ok(config)
}

/// Parse a section header like "link" or "region.3"
fn parse_section_header(header: &str) -> Result<Section, ConfigError> {
    let header = header.trim();

    if let Some((name, index)) = header.split_once('.') {
        if name.trim() != "region" {
            return Err(ConfigError::InvalidSection);
        }
        let index: usize = parse_int(index.trim()).map_err(|_| ConfigError::InvalidSection)?;
        if index >= REGION_COUNT {
            return Err(ConfigError::InvalidSection);
        }
        return Ok(Section::Region(index));
    }

    match header {
        "link" => Ok(Section::Link),
        "animation" => Ok(Section::Animation),
        "zones" => Ok(Section::Zones),
        _ => Err(ConfigError::InvalidSection),
    }
}

fn apply_link(config: &mut LightConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    let link = &mut config.link;
    match key {
        "baudrate" => link.baudrate = parse_int(value)?,
        "heartbeat_ms" => link.heartbeat_ms = parse_int(value)?,
        "heartbeat_text" => {
            let text = parse_string(value)?;
            let mut s: String<MAX_HEARTBEAT_LEN> = String::new();
            s.push_str(text).map_err(|_| ConfigError::TooManyItems)?;
            link.heartbeat_text = s;
        }
        _ => return Err(ConfigError::InvalidKey),
    }
    Ok(())
}

fn apply_animation(config: &mut LightConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    let anim = &mut config.animation;
    match key {
        "clock_period_ms" => anim.clock_period_ms = parse_int(value)?,
        "fade_period_ms" => anim.fade_period_ms = parse_int(value)?,
        "fade_by" => anim.fade_by = parse_int(value)?,
        "blend_amount" => anim.blend_amount = parse_int(value)?,
        "bass_hue" => anim.bass_hue = parse_bass_hue(value)?,
        "bass_left_offset" => anim.bass_left_offset = parse_int(value)?,
        "bass_right_offset" => anim.bass_right_offset = parse_int(value)?,
        _ => return Err(ConfigError::InvalidKey),
    }
    Ok(())
}

fn apply_region(region: &mut Region, key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "start" => region.start = parse_int(value)?,
        "length" => region.length = parse_int(value)?,
        "hue" => region.hue = parse_region_hue(value)?,
        _ => return Err(ConfigError::InvalidKey),
    }
    Ok(())
}

/// Parse a key = value line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = strip_comment(line[eq_pos + 1..].trim());

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Remove a trailing comment, skipping any `#` inside a string
fn strip_comment(value: &str) -> &str {
    let mut in_quotes = false;
    for (pos, c) in value.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            '#' if !in_quotes => return value[..pos].trim(),
            _ => {}
        }
    }
    value
}

fn parse_string(value: &str) -> Result<&str, ConfigError> {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        Ok(&value[1..value.len() - 1])
    } else {
        // Unquoted strings are accepted for simple values
        Ok(value)
    }
}

fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue)
}

/// Parse `[a, b, c, ...]` into exactly `ZONE_COUNT` bytes
fn parse_int_array(value: &str) -> Result<[u8; ZONE_COUNT], ConfigError> {
    let inner = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .ok_or(ConfigError::InvalidValue)?;

    let mut out = [0u8; ZONE_COUNT];
    let mut count = 0;
    for item in inner.split(',') {
        let item = item.trim();
        // Trailing comma
        if item.is_empty() {
            continue;
        }
        let slot = out.get_mut(count).ok_or(ConfigError::TooManyItems)?;
        *slot = parse_int(item)?;
        count += 1;
    }

    if count != ZONE_COUNT {
        return Err(ConfigError::InvalidValue);
    }
    Ok(out)
}

fn parse_bass_hue(value: &str) -> Result<BassHue, ConfigError> {
    match parse_string(value)? {
        "intended" => Ok(BassHue::Intended),
        "literal" => Ok(BassHue::Literal),
        _ => Err(ConfigError::InvalidValue),
    }
}

fn parse_region_hue(value: &str) -> Result<RegionHue, ConfigError> {
    match parse_string(value)? {
        "bass" => Ok(RegionHue::Bass),
        offset => Ok(RegionHue::Offset(parse_int(offset)?)),
    }
}
