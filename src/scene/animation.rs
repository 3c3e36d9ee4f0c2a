use crate::error::ConfigError;
use crate::game::PlacedDisk;

/// Horizontal distance between neighbouring columns, in world units.
pub const COLUMN_SPACING: f32 = 0.58;
/// Vertical distance between neighbouring rows, in world units.
pub const ROW_SPACING: f32 = 0.42;
/// World-space height of the bottom row's centre.
pub const BOTTOM_ROW_Y: f32 = -1.0;
/// Column that sits on the board's vertical centre line.
pub const CENTER_COLUMN: usize = 4;

/// Drop animation timing.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Frames a disk spends falling before it rests.
    pub drop_frames: u64,
    /// How far above its resting place a disk starts, in world units.
    pub drop_height: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            drop_frames: 60,
            drop_height: 7.2,
        }
    }
}

impl AnimationConfig {
    /// Distance fallen per frame.
    pub fn fall_per_frame(&self) -> f32 {
        self.drop_height / self.drop_frames as f32
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.drop_frames == 0 {
            return Err(ConfigError::Validation(
                "animation.drop_frames must be > 0".into(),
            ));
        }
        if !self.drop_height.is_finite() || self.drop_height < 0.0 {
            return Err(ConfigError::Validation(
                "animation.drop_height must be a finite value >= 0".into(),
            ));
        }
        Ok(())
    }
}

/// Where a disk is drawn on a given frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiskPose {
    pub x: f32,
    pub y: f32,
    /// Height still to fall before reaching the resting position.
    pub lift: f32,
    pub landed: bool,
}

/// Resting (x, y) of a disk on the board.
pub fn resting_position(disk: &PlacedDisk) -> (f32, f32) {
    let x = (disk.column as f32 - CENTER_COLUMN as f32) * COLUMN_SPACING;
    let y = disk.row as f32 * ROW_SPACING + BOTTOM_ROW_Y;
    (x, y)
}

/// Fraction of the drop completed at `frame`, in `[0, 1]`.
pub fn drop_progress(disk: &PlacedDisk, frame: u64, animation: &AnimationConfig) -> f32 {
    let age = disk.age(frame).min(animation.drop_frames);
    age as f32 / animation.drop_frames as f32
}

/// Pose of a disk at `frame`: it starts `drop_height` above its resting
/// place on its key frame and falls at a constant rate until it lands.
pub fn disk_pose(disk: &PlacedDisk, frame: u64, animation: &AnimationConfig) -> DiskPose {
    let (x, rest_y) = resting_position(disk);
    let age = disk.age(frame);

    if age >= animation.drop_frames {
        return DiskPose {
            x,
            y: rest_y,
            lift: 0.0,
            landed: true,
        };
    }

    let lift = (animation.drop_height - animation.fall_per_frame() * age as f32).max(0.0);
    DiskPose {
        x,
        y: rest_y + lift,
        lift,
        landed: false,
    }
}

/// Row the disk appears in at this pose, counting rows above the board
/// past the top. Rounds to the nearest row and saturates for very tall drops.
pub fn visual_row(disk: &PlacedDisk, pose: &DiskPose) -> usize {
    let rows_above = (pose.lift / ROW_SPACING).round() as usize;
    disk.row.saturating_add(rows_above)
}
