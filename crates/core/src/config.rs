//! Config module - session configuration and its validation
//!
//! A session is parameterized by grid size, palette size, fall speed, frame rate
//! and spawn point. Invalid configurations are rejected when the session is built;
//! nothing downstream re-checks them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::library::ShapeLibrary;
use crate::types::{
    DEFAULT_COLS, DEFAULT_FALL_SPEED, DEFAULT_FRAMES_PER_SECOND, DEFAULT_NUM_COLORS,
    DEFAULT_ROWS, DEFAULT_SPAWN_X, DEFAULT_SPAWN_Y, MAX_FRAMES_PER_SECOND, MAX_GRID_EDGE,
};

/// Configuration errors detected at session construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid must be between 1x1 and {max}x{max}, got {rows}x{cols}")]
    GridSize { rows: u8, cols: u8, max: u8 },
    #[error("need at least 2 color indices (empty + one material), got {0}")]
    TooFewColors(u8),
    #[error("fall speed must be positive")]
    ZeroFallSpeed,
    #[error("frame rate must be positive")]
    ZeroFrameRate,
    #[error("frame rate {fps} exceeds {max} frames per second")]
    FrameRateTooHigh { fps: u32, max: u32 },
    #[error("fall speed {speed} exceeds the frame rate {fps}")]
    FallFasterThanFrames { speed: u32, fps: u32 },
    #[error("spawn ({x}, {y}) is outside the {rows}x{cols} grid")]
    SpawnOutOfBounds { x: i8, y: i8, rows: u8, cols: u8 },
    #[error("no rotation of shape {shape} fits in a {rows}x{cols} grid")]
    ShapeDoesNotFit { shape: String, rows: u8, cols: u8 },
    #[error("shape library is empty")]
    EmptyLibrary,
}

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: u8,
    pub cols: u8,
    /// Number of color indices including the empty index 0
    pub num_colors: u8,
    /// Automatic steps down per second
    pub fall_speed: u32,
    pub frames_per_second: u32,
    pub spawn_x: i8,
    pub spawn_y: i8,
    /// Reshuffle match precedence once per frame
    pub shuffle_library: bool,
    /// Drop geometrically identical library variants
    pub dedup_library: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            num_colors: DEFAULT_NUM_COLORS,
            fall_speed: DEFAULT_FALL_SPEED,
            frames_per_second: DEFAULT_FRAMES_PER_SECOND,
            spawn_x: DEFAULT_SPAWN_X,
            spawn_y: DEFAULT_SPAWN_Y,
            shuffle_library: false,
            dedup_library: false,
        }
    }
}

impl GameConfig {
    /// Frames between two automatic steps down: `round(fps / fall_speed)`, at least 1
    pub fn fall_interval_frames(&self) -> u32 {
        let speed = u64::from(self.fall_speed.max(1));
        let frames = (u64::from(self.frames_per_second) + speed / 2) / speed;
        u32::try_from(frames).unwrap_or(u32::MAX).max(1)
    }

    /// Duration of one frame in milliseconds
    pub fn frame_ms(&self) -> u64 {
        1000 / u64::from(self.frames_per_second.max(1))
    }

    /// Check every precondition a session relies on
    pub fn validate(&self, library: &ShapeLibrary) -> Result<(), ConfigError> {
        let edge = 1..=MAX_GRID_EDGE;
        if !edge.contains(&self.rows) || !edge.contains(&self.cols) {
            return Err(ConfigError::GridSize {
                rows: self.rows,
                cols: self.cols,
                max: MAX_GRID_EDGE,
            });
        }
        if self.num_colors < 2 {
            return Err(ConfigError::TooFewColors(self.num_colors));
        }
        if self.fall_speed == 0 {
            return Err(ConfigError::ZeroFallSpeed);
        }
        if self.frames_per_second == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        if self.frames_per_second > MAX_FRAMES_PER_SECOND {
            return Err(ConfigError::FrameRateTooHigh {
                fps: self.frames_per_second,
                max: MAX_FRAMES_PER_SECOND,
            });
        }
        if self.fall_speed > self.frames_per_second {
            return Err(ConfigError::FallFasterThanFrames {
                speed: self.fall_speed,
                fps: self.frames_per_second,
            });
        }
        if self.spawn_x < 0
            || self.spawn_y < 0
            || self.spawn_x as u8 >= self.cols
            || self.spawn_y as u8 >= self.rows
        {
            return Err(ConfigError::SpawnOutOfBounds {
                x: self.spawn_x,
                y: self.spawn_y,
                rows: self.rows,
                cols: self.cols,
            });
        }
        if library.is_empty() {
            return Err(ConfigError::EmptyLibrary);
        }
        for name in library.base_names() {
            let fits = library
                .iter()
                .filter(|e| e.base == name)
                .any(|e| e.fits_within(self.rows as usize, self.cols as usize));
            if !fits {
                return Err(ConfigError::ShapeDoesNotFit {
                    shape: name.to_string(),
                    rows: self.rows,
                    cols: self.cols,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_seven_by_five() {
        let config = GameConfig::default();
        assert_eq!((config.rows, config.cols), (7, 5));
        assert_eq!(config.num_colors, 7);
        assert_eq!(config.fall_interval_frames(), 15);
        assert_eq!(config.frame_ms(), 33);
        assert!(config.validate(&ShapeLibrary::canonical()).is_ok());
    }

    #[test]
    fn test_fall_interval_rounds() {
        let mut config = GameConfig::default();
        config.fall_speed = 4;
        assert_eq!(config.fall_interval_frames(), 8); // 7.5 rounds up
        config.fall_speed = 30;
        assert_eq!(config.fall_interval_frames(), 1);
    }

    #[test]
    fn test_narrow_grid_rejected() {
        let config = GameConfig {
            rows: 3,
            cols: 3,
            spawn_x: 1,
            ..GameConfig::default()
        };
        let err = config.validate(&ShapeLibrary::canonical()).unwrap_err();
        assert_eq!(
            err,
            ConfigError::ShapeDoesNotFit {
                shape: "I".to_string(),
                rows: 3,
                cols: 3
            }
        );
    }

    #[test]
    fn test_smallest_accepted_grid() {
        // Horizontal I and flat T/L/Z variants fit in 2x4.
        let config = GameConfig {
            rows: 2,
            cols: 4,
            spawn_x: 0,
            ..GameConfig::default()
        };
        assert!(config.validate(&ShapeLibrary::canonical()).is_ok());
    }

    #[test]
    fn test_other_preconditions() {
        let lib = ShapeLibrary::canonical();
        let base = GameConfig::default();

        let zero = GameConfig { rows: 0, ..base.clone() };
        assert!(matches!(zero.validate(&lib), Err(ConfigError::GridSize { .. })));

        let mono = GameConfig { num_colors: 1, ..base.clone() };
        assert_eq!(mono.validate(&lib), Err(ConfigError::TooFewColors(1)));

        let frozen = GameConfig { fall_speed: 0, ..base.clone() };
        assert_eq!(frozen.validate(&lib), Err(ConfigError::ZeroFallSpeed));

        let stopped = GameConfig { frames_per_second: 0, ..base.clone() };
        assert_eq!(stopped.validate(&lib), Err(ConfigError::ZeroFrameRate));

        let outside = GameConfig { spawn_x: 5, ..base.clone() };
        assert!(matches!(
            outside.validate(&lib),
            Err(ConfigError::SpawnOutOfBounds { .. })
        ));

        assert_eq!(
            base.validate(&ShapeLibrary::default()),
            Err(ConfigError::EmptyLibrary)
        );
    }

    #[test]
    fn test_frame_rate_is_bounded() {
        let lib = ShapeLibrary::canonical();

        let huge = GameConfig {
            frames_per_second: u32::MAX,
            ..GameConfig::default()
        };
        assert_eq!(huge.fall_interval_frames(), 2_147_483_648);
        assert_eq!(
            huge.validate(&lib),
            Err(ConfigError::FrameRateTooHigh {
                fps: u32::MAX,
                max: 1000
            })
        );

        let fast = GameConfig {
            frames_per_second: 2000,
            ..GameConfig::default()
        };
        assert!(matches!(
            fast.validate(&lib),
            Err(ConfigError::FrameRateTooHigh { fps: 2000, .. })
        ));

        let edge = GameConfig {
            frames_per_second: 1000,
            ..GameConfig::default()
        };
        assert!(edge.validate(&lib).is_ok());
        assert_eq!(edge.frame_ms(), 1);
    }

    #[test]
    fn test_fall_speed_cannot_outrun_frames() {
        let config = GameConfig {
            fall_speed: 31,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(&ShapeLibrary::canonical()),
            Err(ConfigError::FallFasterThanFrames { speed: 31, fps: 30 })
        );

        let max_speed = GameConfig {
            fall_speed: 30,
            ..GameConfig::default()
        };
        assert!(max_speed.validate(&ShapeLibrary::canonical()).is_ok());
        assert_eq!(max_speed.fall_interval_frames(), 1);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"rows": 9, "shuffle_library": true}"#).unwrap();
        assert_eq!(config.rows, 9);
        assert_eq!(config.cols, 5);
        assert!(config.shuffle_library);
    }
}
