/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub setup: SetupConfig,
    pub layout: LayoutConfig,
    pub console: ConsoleConfig,
}

/// Accepted ranges for the floor and elevator counts asked for at startup.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SetupConfig {
    pub min_floors: u32,
    pub max_floors: u32,
    pub min_elevators: u32,
    pub max_elevators: u32,
}

/**
 * Fixed spacing constants for the building diagram, in pixels.
 *
 * # Fields
 * - `building_x`, `building_y`:    Top left corner of the building outline.
 * - `building_width`:              Width of the building outline.
 * - `band_height`:                 Height of one floor band.
 * - `band_x`, `band_width`:        Horizontal extent of every floor band.
 * - `shaft_width`:                 Width of one elevator shaft.
 * - `shaft_spacing`:               Gap between two neighbouring shafts.
 * - `first_shaft_offset`:          Distance from the building's right edge to the first shaft.
 * - `stats_gap`:                   Distance from the last shaft to the statistics panel.
 * - `stats_top_offset`:            Distance from the building top to the first statistics line.
 * - `stats_line_height`:           Vertical distance between statistics lines.
 * - `stats_panel_width`:           Room reserved right of the statistics anchor.
 * - `margin_top`, `margin_bottom`: Space above and below the floor bands.
 * - `min_canvas_width`:            The canvas is never narrower than this.
 */
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    pub building_x: i32,
    pub building_y: i32,
    pub building_width: i32,
    pub band_height: i32,
    pub band_x: i32,
    pub band_width: i32,
    pub shaft_width: i32,
    pub shaft_spacing: i32,
    pub first_shaft_offset: i32,
    pub stats_gap: i32,
    pub stats_top_offset: i32,
    pub stats_line_height: i32,
    pub stats_panel_width: i32,
    pub margin_top: i32,
    pub margin_bottom: i32,
    pub min_canvas_width: i32,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ConsoleConfig {
    pub refresh_interval_ms: u64,
    pub px_per_column: i32,
    pub px_per_row: i32,
    pub log_level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Default for SetupConfig {
    fn default() -> Self {
        SetupConfig {
            min_floors: 1,
            max_floors: 20,
            min_elevators: 1,
            max_elevators: 10,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            building_x: 50,
            building_y: 50,
            building_width: 300,
            band_height: 80,
            band_x: 0,
            band_width: 500,
            shaft_width: 100,
            shaft_spacing: 5,
            first_shaft_offset: 160,
            stats_gap: 250,
            stats_top_offset: 50,
            stats_line_height: 30,
            stats_panel_width: 300,
            margin_top: 50,
            margin_bottom: 100,
            min_canvas_width: 1200,
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            refresh_interval_ms: 500,
            px_per_column: 10,
            px_per_row: 20,
            log_level: "info".to_string(),
        }
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let config_str = fs::read_to_string(path)?;
    parse_config(&config_str)
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(config_str)?)
}

/***************************************/
/*             Unit tests              */
/***************************************/
