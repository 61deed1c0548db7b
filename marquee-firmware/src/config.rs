//! Embedded lighting configuration
//!
//! `lights.toml` is compiled into the image and parsed once at boot. The
//! build script has already checked it, so a parse failure here means the
//! file and the parser disagree; the stock layout is used instead.

use defmt::*;
use marquee_core::config::{parse_config, LightConfig};

/// Edit lights.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../lights.toml");

/// Parse the embedded configuration, falling back to the defaults
pub fn load_config() -> LightConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Parsed embedded configuration");
            config
        }
        Err(e) => {
            error!("Failed to parse embedded config: {:?}", e);
            error!("Using default configuration");
            LightConfig::default()
        }
    }
}

pub fn log_summary(config: &LightConfig) {
    let link = &config.link;
    let anim = &config.animation;
    debug!(
        "Link: {} baud, heartbeat '{}' every {} ms",
        link.baudrate,
        link.heartbeat_text.as_str(),
        link.heartbeat_ms
    );
    debug!(
        "Animation: clock {} ms, fade by {} every {} ms, blend {}, bass {}",
        anim.clock_period_ms,
        anim.fade_by,
        anim.fade_period_ms,
        anim.blend_amount,
        anim.bass_hue
    );
    debug!("Zone mapping: {}", config.geometry.mapping());
}
