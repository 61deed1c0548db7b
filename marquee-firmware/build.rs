//! Build script for marquee-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates lights.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

const STRIP_LEN: i64 = 100;
const REGION_COUNT: usize = 6;

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate lights.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=lights.toml");

    let config_path = Path::new("lights.toml");
    if !config_path.exists() {
        fail(
            "lights.toml not found",
            &["The firmware embeds lights.toml from the marquee-firmware directory.".into()],
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read lights.toml", &[e.to_string()]),
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => fail(
            "Invalid TOML syntax in lights.toml",
            &e.to_string().lines().map(String::from).collect::<Vec<_>>(),
        ),
    };

    let mut errors = Vec::new();
    validate_required_sections(&config, &mut errors);
    validate_link(&config, &mut errors);
    validate_animation(&config, &mut errors);
    validate_mapping(&config, &mut errors);
    validate_regions(&config, &mut errors);

    if !errors.is_empty() {
        fail("Invalid configuration in lights.toml", &errors);
    }

    println!("cargo:warning=lights.toml validated successfully");
}

/// Abort the build with a boxed error listing
fn fail(title: &str, lines: &[String]) -> ! {
    let body = lines
        .iter()
        .map(|line| {
            let line = if line.len() > 62 {
                format!("{}...", &line[..59])
            } else {
                line.clone()
            };
            format!("║  • {:<62} ║", line)
        })
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}

fn validate_required_sections(config: &toml::Value, errors: &mut Vec<String>) {
    for section in ["link", "animation", "zones", "region"] {
        if config.get(section).is_none() {
            errors.push(format!("Missing [{}] section", section));
        }
    }
}

/// Check an optional integer field lies in `min..=max`
fn check_range(
    table: &toml::Value,
    section: &str,
    key: &str,
    min: i64,
    max: i64,
    errors: &mut Vec<String>,
) {
    match table.get(key) {
        None => {}
        Some(toml::Value::Integer(v)) if (min..=max).contains(v) => {}
        Some(_) => errors.push(format!("[{}] {} must be {}-{}", section, key, min, max)),
    }
}

fn validate_link(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(link) = config.get("link") else {
        return;
    };
    check_range(link, "link", "baudrate", 1200, 1_000_000, errors);
    check_range(link, "link", "heartbeat_ms", 1, u32::MAX.into(), errors);
    if let Some(text) = link.get("heartbeat_text") {
        match text.as_str() {
            Some(t) if t.len() <= 16 => {}
            _ => errors.push("[link] heartbeat_text must be a string of at most 16 bytes".into()),
        }
    }
}

fn validate_animation(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(animation) = config.get("animation") else {
        return;
    };
    check_range(animation, "animation", "clock_period_ms", 1, u32::MAX.into(), errors);
    check_range(animation, "animation", "fade_period_ms", 1, u32::MAX.into(), errors);
    for key in ["fade_by", "blend_amount", "bass_left_offset", "bass_right_offset"] {
        check_range(animation, "animation", key, 0, 255, errors);
    }
    if let Some(mode) = animation.get("bass_hue") {
        if !matches!(mode.as_str(), Some("intended" | "literal")) {
            errors.push("[animation] bass_hue must be 'intended' or 'literal'".into());
        }
    }
}

fn validate_mapping(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(mapping) = config.get("zones").and_then(|z| z.get("mapping")) else {
        return;
    };
    let Some(items) = mapping.as_array() else {
        errors.push("[zones] mapping must be an array".into());
        return;
    };

    let indices: Vec<i64> = items.iter().filter_map(|v| v.as_integer()).collect();
    if indices.len() != REGION_COUNT || items.len() != REGION_COUNT {
        errors.push(format!("[zones] mapping must list {} region indices", REGION_COUNT));
        return;
    }

    let mut sorted = indices.clone();
    sorted.sort_unstable();
    if sorted != (0..REGION_COUNT as i64).collect::<Vec<_>>() {
        errors.push("[zones] mapping must use each region 0-5 exactly once".into());
    }
}

fn validate_regions(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(regions) = config.get("region").and_then(|r| r.as_table()) else {
        return;
    };

    let mut covered = vec![0u8; STRIP_LEN as usize];

    for (name, region) in regions {
        let valid_index = name
            .parse::<usize>()
            .map(|i| i < REGION_COUNT)
            .unwrap_or(false);
        if !valid_index {
            errors.push(format!("[region.{}] region index must be 0-5", name));
            continue;
        }

        check_range(region, &format!("region.{}", name), "start", 0, STRIP_LEN - 1, errors);
        check_range(region, &format!("region.{}", name), "length", 1, STRIP_LEN, errors);

        match region.get("hue") {
            None => {}
            Some(toml::Value::String(s)) if s == "bass" => {}
            Some(toml::Value::Integer(v)) if (0..=255).contains(v) => {}
            Some(_) => errors.push(format!("[region.{}] hue must be 'bass' or 0-255", name)),
        }

        let (Some(start), Some(length)) = (
            region.get("start").and_then(|v| v.as_integer()),
            region.get("length").and_then(|v| v.as_integer()),
        ) else {
            errors.push(format!("[region.{}] needs both 'start' and 'length'", name));
            continue;
        };
        if start < 0 || length < 1 || start + length > STRIP_LEN {
            continue;
        }
        for pixel in &mut covered[start as usize..(start + length) as usize] {
            *pixel += 1;
        }
    }

    if regions.len() == REGION_COUNT {
        if let Some(pixel) = covered.iter().position(|&c| c > 1) {
            errors.push(format!("Regions overlap at pixel {}", pixel));
        }
        if let Some(pixel) = covered.iter().position(|&c| c == 0) {
            errors.push(format!("Pixel {} is not covered by any region", pixel));
        }
    } else {
        errors.push(format!("Define all {} [region.N] sections", REGION_COUNT));
    }
}
