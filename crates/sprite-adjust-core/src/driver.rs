//! The adjustment pass over every declared sprite frame.
//!
//! Frames are visited in table order, one at a time. Each file is loaded,
//! transformed and (only if something changed) overwritten before the next
//! frame is touched. The first hard error stops the pass; frames already
//! written stay written.

use std::io::Write;
use std::path::PathBuf;

use log::{debug, info};

use crate::error::AdjustError;
use crate::frame;
use crate::resolve::resolve;
use crate::table::{AdjustmentTable, ASSETS_DIR};
use crate::transform::transform;

/// Where frames live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    /// Directory holding `{prefix}_{index}.png` files.
    pub assets_dir: PathBuf,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from(ASSETS_DIR),
        }
    }
}

impl DriverConfig {
    pub fn with_assets_dir(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
        }
    }
}

/// Per-run frame counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames overwritten with adjusted pixels.
    pub written: usize,
    /// Frames with a neutral record; left on disk as they were.
    pub unchanged: usize,
    /// Frames with a record but no file.
    pub missing: usize,
    /// Frames without any record.
    pub skipped: usize,
}

/// Apply `table` to the frames under `config.assets_dir`.
///
/// Progress lines go to `out`:
///
/// ```text
/// Applying 4 adjustment(s)...
///   front_0: Offset Y:-120 X:0
///   front_5: File not found
///
/// Done! Adjustments applied.
/// ```
///
/// # Errors
///
/// Decode, encode and geometry errors abort the pass. A missing file does not.
pub fn apply_all<W: Write>(
    table: &AdjustmentTable,
    config: &DriverConfig,
    out: &mut W,
) -> Result<RunSummary, AdjustError> {
    let mut summary = RunSummary::default();

    writeln!(out, "Applying {} adjustment(s)...", table.entry_count())?;

    for sprite in &table.sprites {
        for index in 0..sprite.frame_count {
            let Some(adjustment) = resolve(table, &sprite.name, index) else {
                summary.skipped += 1;
                continue;
            };

            let path = sprite.frame_path(&config.assets_dir, index);
            if !path.exists() {
                writeln!(out, "  {}_{}: File not found", sprite.name, index)?;
                summary.missing += 1;
                continue;
            }

            let image = frame::load_png(&path)?;
            debug!(
                "{}_{}: loaded {}x{} from {}",
                sprite.name,
                index,
                image.width,
                image.height,
                path.display()
            );

            let result = transform(image, adjustment)?;
            if !result.is_changed() {
                debug!("{}_{}: neutral record, not rewritten", sprite.name, index);
                summary.unchanged += 1;
                continue;
            }

            writeln!(out, "  {}_{}: {}", sprite.name, index, result.describe())?;
            frame::save_png(&result.image, &path)?;
            summary.written += 1;
        }
    }

    writeln!(out, "\nDone! Adjustments applied.")?;
    info!(
        "adjustment pass finished: {} written, {} unchanged, {} missing, {} without record",
        summary.written, summary.unchanged, summary.missing, summary.skipped
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjustment::Adjustment;
    use crate::frame::SpriteImage;
    use crate::table::SpriteDescriptor;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    /// Opaque frame with a single red marker pixel.
    fn marker_frame(width: u32, height: u32, marker: (u32, u32)) -> SpriteImage {
        let mut img = SpriteImage::transparent(width, height);
        img.put_pixel(marker.0, marker.1, [255, 0, 0, 255]);
        img
    }

    fn write_frame(dir: &Path, name: &str, img: &SpriteImage) -> PathBuf {
        let path = dir.join(name);
        frame::save_png(img, &path).expect("failed to write test frame");
        path
    }

    fn run(table: &AdjustmentTable, dir: &Path) -> (RunSummary, String) {
        let mut out = Vec::new();
        let summary = apply_all(table, &DriverConfig::with_assets_dir(dir), &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_default_config() {
        let config = DriverConfig::default();
        assert_eq!(config.assets_dir, PathBuf::from(ASSETS_DIR));
    }

    #[test]
    fn test_header_and_footer() {
        let dir = tempdir().expect("failed to create temp directory");
        let (summary, out) = run(&AdjustmentTable::builtin(), dir.path());

        assert!(out.starts_with("Applying 4 adjustment(s)...\n"));
        assert!(out.ends_with("\nDone! Adjustments applied.\n"));
        // front has 8 frames, all missing in an empty directory
        assert_eq!(summary.missing, 8);
        assert_eq!(summary.skipped, 47 - 8);
        assert_eq!(summary.written, 0);
    }

    #[test]
    fn test_missing_file_is_reported_and_skipped() {
        let dir = tempdir().expect("failed to create temp directory");
        let table = AdjustmentTable::new()
            .with_sprite(SpriteDescriptor::new("ghost", "cat_ghost", 1))
            .with_sprite_wide("ghost", Adjustment::offset(0, 5));

        let (summary, out) = run(&table, dir.path());

        assert!(out.contains("  ghost_0: File not found\n"));
        assert_eq!(summary.missing, 1);
        assert!(!dir.path().join("cat_ghost_0.png").exists());
    }

    #[test]
    fn test_frames_without_record_are_byte_identical() {
        let dir = tempdir().expect("failed to create temp directory");
        let img = marker_frame(8, 8, (2, 2));
        let untouched = write_frame(dir.path(), "cat_walking_0.png", &img);
        let adjusted = write_frame(dir.path(), "cat_front_0.png", &img);
        let before = fs::read(&untouched).unwrap();

        let table = AdjustmentTable::new()
            .with_sprite(SpriteDescriptor::new("walking", "cat_walking", 1))
            .with_sprite(SpriteDescriptor::new("front", "cat_front", 1))
            .with_sprite_wide("front", Adjustment::offset(0, 1));
        let (summary, _) = run(&table, dir.path());

        assert_eq!(fs::read(&untouched).unwrap(), before);
        assert_ne!(fs::read(&adjusted).unwrap(), before);
        assert_eq!(summary.written, 1);
        assert_eq!(summary.skipped, 1);
    }

    #[test]
    fn test_neutral_record_does_not_write() {
        let dir = tempdir().expect("failed to create temp directory");
        let path = dir.path().join("cat_wave_0.png");
        // RGB source: any rewrite would come back as RGBA and change the bytes
        image::RgbImage::from_pixel(4, 4, image::Rgb([9, 9, 9]))
            .save(&path)
            .unwrap();
        let before = fs::read(&path).unwrap();

        let table = AdjustmentTable::new()
            .with_sprite(SpriteDescriptor::new("wave", "cat_wave", 1))
            .with_sprite_wide("wave", Adjustment::NEUTRAL);
        let (summary, out) = run(&table, dir.path());

        assert_eq!(fs::read(&path).unwrap(), before);
        assert_eq!(summary.unchanged, 1);
        assert_eq!(summary.written, 0);
        assert!(!out.contains("wave_0"));
    }

    #[test]
    fn test_frame_specific_overrides_sprite_wide_on_disk() {
        let dir = tempdir().expect("failed to create temp directory");
        let path = write_frame(dir.path(), "cat_front_4.png", &marker_frame(10, 10, (5, 5)));

        let sprite_wide = Adjustment {
            scale: 0.5,
            crop_top: 2,
            ..Adjustment::offset(3, 1)
        };
        let table = AdjustmentTable::new()
            .with_sprite(SpriteDescriptor::new("front", "cat_front", 5))
            .with_sprite_wide("front", sprite_wide)
            .with_frame("front", 4, Adjustment::offset(0, 2));
        let (_, out) = run(&table, dir.path());

        assert!(out.contains("  front_4: Offset Y:2 X:0\n"));
        let result = frame::load_png(&path).unwrap();
        // No crop or scale from the sprite-wide record
        assert_eq!((result.width, result.height), (10, 10));
        assert_eq!(result.pixel(5, 3), [255, 0, 0, 255]);
        assert_eq!(result.pixel(5, 5), [0, 0, 0, 0]);
    }

    #[test]
    fn test_second_run_shifts_again() {
        let dir = tempdir().expect("failed to create temp directory");
        let path = write_frame(dir.path(), "cat_yarn_0.png", &marker_frame(6, 12, (1, 8)));
        let table = AdjustmentTable::new()
            .with_sprite(SpriteDescriptor::new("yarn", "cat_yarn", 1))
            .with_sprite_wide("yarn", Adjustment::offset(0, 2));

        run(&table, dir.path());
        let first = frame::load_png(&path).unwrap();
        run(&table, dir.path());
        let second = frame::load_png(&path).unwrap();

        assert_eq!(first.pixel(1, 6), [255, 0, 0, 255]);
        assert_eq!(second.pixel(1, 4), [255, 0, 0, 255]);
        assert_ne!(first, second);
    }

    #[test]
    fn test_progress_line_lists_changes() {
        let dir = tempdir().expect("failed to create temp directory");
        write_frame(dir.path(), "cat_belly_1.png", &marker_frame(20, 20, (0, 0)));
        let table = AdjustmentTable::new()
            .with_sprite(SpriteDescriptor::new("belly", "cat_belly", 2))
            .with_frame(
                "belly",
                1,
                Adjustment {
                    crop_bottom: 4,
                    scale: 0.5,
                    ..Adjustment::offset(-1, 0)
                },
            );
        let (summary, out) = run(&table, dir.path());

        assert!(out.contains("  belly_1: Cropped to 20x16, Scaled to (10, 8), Offset Y:0 X:-1\n"));
        assert_eq!(summary.written, 1);
        assert_eq!(summary.skipped, 1);
    }

    #[test]
    fn test_corrupt_file_aborts_run() {
        let dir = tempdir().expect("failed to create temp directory");
        fs::write(dir.path().join("cat_front_0.png"), b"garbage").unwrap();
        let later = write_frame(dir.path(), "cat_front_1.png", &marker_frame(4, 4, (0, 3)));
        let before = fs::read(&later).unwrap();

        let table = AdjustmentTable::new()
            .with_sprite(SpriteDescriptor::new("front", "cat_front", 2))
            .with_sprite_wide("front", Adjustment::offset(0, 1));
        let mut out = Vec::new();
        let err = apply_all(&table, &DriverConfig::with_assets_dir(dir.path()), &mut out)
            .unwrap_err();

        assert!(matches!(err, AdjustError::Decode { .. }));
        // Frames after the failure are left alone
        assert_eq!(fs::read(&later).unwrap(), before);
    }

    #[test]
    fn test_zero_frame_sprite_is_ignored() {
        let dir = tempdir().expect("failed to create temp directory");
        let table = AdjustmentTable::new()
            .with_sprite(SpriteDescriptor::new("idle", "cat_idle", 0))
            .with_sprite_wide("idle", Adjustment::offset(1, 1));
        let (summary, out) = run(&table, dir.path());

        assert_eq!(summary, RunSummary::default());
        assert_eq!(out, "Applying 1 adjustment(s)...\n\nDone! Adjustments applied.\n");
    }
}
