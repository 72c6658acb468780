//! The adjustment table: which sprites exist and how they are corrected.
//!
//! The table is built once and then only read. It is passed explicitly to
//! [`crate::resolve`] and [`crate::apply_all`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::adjustment::Adjustment;

/// Asset directory the built-in table refers to, relative to the working directory.
pub const ASSETS_DIR: &str = "Sources/CatOnScreen/Resources/Assets";

/// A named animation sequence backed by numbered PNG files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteDescriptor {
    /// Name used as the key in the adjustment table (e.g. "front").
    pub name: String,
    /// File name prefix (e.g. "cat_front" for `cat_front_0.png`).
    pub prefix: String,
    /// Number of frames, indexed from 0.
    pub frame_count: u32,
}

impl SpriteDescriptor {
    pub fn new(name: impl Into<String>, prefix: impl Into<String>, frame_count: u32) -> Self {
        Self {
            name: name.into(),
            prefix: prefix.into(),
            frame_count,
        }
    }

    /// File name of frame `index`, e.g. `cat_front_4.png`.
    pub fn file_name(&self, index: u32) -> String {
        format!("{}_{}.png", self.prefix, index)
    }

    /// Full path of frame `index` under `assets_dir`.
    pub fn frame_path(&self, assets_dir: &Path, index: u32) -> PathBuf {
        assets_dir.join(self.file_name(index))
    }
}

/// Identity of a single frame: sprite name plus frame index.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameKey {
    pub sprite: String,
    pub frame: u32,
}

impl FrameKey {
    pub fn new(sprite: impl Into<String>, frame: u32) -> Self {
        Self {
            sprite: sprite.into(),
            frame,
        }
    }
}

impl std::fmt::Display for FrameKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}", self.sprite, self.frame)
    }
}

/// Declared sprites plus their sprite-wide and frame-specific adjustments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjustmentTable {
    /// Sprites in processing order.
    pub sprites: Vec<SpriteDescriptor>,
    /// Records applying to every frame of a sprite.
    pub sprite_wide: BTreeMap<String, Adjustment>,
    /// Records applying to exactly one frame. Replaces the sprite-wide record.
    pub frame_specific: BTreeMap<FrameKey, Adjustment>,
}

impl AdjustmentTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a sprite. Sprites are processed in declaration order.
    pub fn with_sprite(mut self, sprite: SpriteDescriptor) -> Self {
        self.sprites.push(sprite);
        self
    }

    /// Set the record applied to all frames of `sprite`.
    pub fn with_sprite_wide(mut self, sprite: impl Into<String>, adjustment: Adjustment) -> Self {
        self.sprite_wide.insert(sprite.into(), adjustment);
        self
    }

    /// Set the record for a single frame of `sprite`.
    pub fn with_frame(
        mut self,
        sprite: impl Into<String>,
        frame: u32,
        adjustment: Adjustment,
    ) -> Self {
        self.frame_specific
            .insert(FrameKey::new(sprite, frame), adjustment);
        self
    }

    /// Total number of declared adjustment records (both scopes).
    pub fn entry_count(&self) -> usize {
        self.sprite_wide.len() + self.frame_specific.len()
    }

    /// Look up a frame-specific record only.
    pub fn frame_entry(&self, sprite: &str, frame: u32) -> Option<&Adjustment> {
        self.frame_specific.get(&FrameKey::new(sprite, frame))
    }

    /// Look up a sprite-wide record only.
    pub fn sprite_entry(&self, sprite: &str) -> Option<&Adjustment> {
        self.sprite_wide.get(sprite)
    }

    /// The cat sprite corrections shipped with the app.
    ///
    /// Front frames sit 120px too low; frames 2 and 3 also drift right by
    /// 15px and frame 4 needs an extra 30px lift.
    pub fn builtin() -> Self {
        Self::new()
            .with_sprite(SpriteDescriptor::new("walking", "cat_walking", 7))
            .with_sprite(SpriteDescriptor::new("running", "cat_running", 8))
            .with_sprite(SpriteDescriptor::new("front", "cat_front", 8))
            .with_sprite(SpriteDescriptor::new("sitdown", "cat_sitdown", 8))
            .with_sprite(SpriteDescriptor::new("wave", "cat_wave", 8))
            .with_sprite(SpriteDescriptor::new("yarn", "cat_yarn", 4))
            .with_sprite(SpriteDescriptor::new("belly", "cat_belly", 4))
            .with_sprite_wide("front", Adjustment::offset(0, -120))
            .with_frame("front", 2, Adjustment::offset(-15, -120))
            .with_frame("front", 3, Adjustment::offset(-15, -120))
            .with_frame("front", 4, Adjustment::offset(0, -150))
    }
}
