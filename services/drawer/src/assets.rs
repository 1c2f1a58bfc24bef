//! Asset manifest
//!
//! Locates the background image, the ten digit images and the two sound
//! clips. Files are only checked for presence; nothing is decoded here.

use shared::errors::ServiceError;
use shared::{BACKGROUND_ASSET, CONFIRM_SOUND_ASSET, SPIN_SOUND_ASSET};
use shared::Cue;
use std::path::{Path, PathBuf};

use crate::display::Digit;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetManifest {
    pub background: PathBuf,
    /// `0.png` through `9.png`, indexed by digit
    pub digits: [PathBuf; 10],
    pub spin_sound: PathBuf,
    pub confirm_sound: PathBuf,
}

impl AssetManifest {
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            background: dir.join(BACKGROUND_ASSET),
            digits: std::array::from_fn(|i| dir.join(format!("{i}.png"))),
            spin_sound: dir.join(SPIN_SOUND_ASSET),
            confirm_sound: dir.join(CONFIRM_SOUND_ASSET),
        }
    }

    pub fn digit(&self, digit: Digit) -> &Path {
        &self.digits[digit.value() as usize]
    }

    pub fn sound(&self, cue: Cue) -> &Path {
        match cue {
            Cue::SpinTick => &self.spin_sound,
            Cue::Confirm => &self.confirm_sound,
        }
    }

    /// Fail on the first missing file. Sound clips are checked only when
    /// `with_sounds` is set.
    pub fn verify(&self, with_sounds: bool) -> Result<(), ServiceError> {
        let images = std::iter::once(&self.background).chain(self.digits.iter());
        let sounds = [&self.spin_sound, &self.confirm_sound]
            .into_iter()
            .filter(|_| with_sounds);

        for path in images.chain(sounds) {
            if !path.is_file() {
                return Err(ServiceError::asset_missing(path.display()));
            }
        }

        tracing::debug!(with_sounds, "Asset manifest verified");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::errors::ErrorCategory;
    use std::fs;

    fn scratch_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("bingo-assets-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn touch_images(dir: &Path) {
        fs::write(dir.join("background.png"), b"").unwrap();
        for i in 0..10 {
            fs::write(dir.join(format!("{i}.png")), b"").unwrap();
        }
    }

    #[test]
    fn test_manifest_paths() {
        let manifest = AssetManifest::from_dir("assets");
        assert_eq!(manifest.background, PathBuf::from("assets/background.png"));
        assert_eq!(manifest.digit(Digit::new(7).unwrap()), Path::new("assets/7.png"));
        assert_eq!(manifest.sound(Cue::Confirm), Path::new("assets/confirm.wav"));
    }

    #[test]
    fn test_verify_images_only() {
        let dir = scratch_dir();
        touch_images(&dir);

        let manifest = AssetManifest::from_dir(&dir);
        assert!(manifest.verify(false).is_ok());

        let error = manifest.verify(true).unwrap_err();
        assert_eq!(error.category, ErrorCategory::Asset);
        assert!(error.message.contains("spin.wav"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_verify_reports_missing_digit() {
        let dir = scratch_dir();
        touch_images(&dir);
        fs::remove_file(dir.join("4.png")).unwrap();

        let error = AssetManifest::from_dir(&dir).verify(false).unwrap_err();
        assert!(error.message.contains("4.png"));
        assert!(error.is_fatal());

        fs::remove_dir_all(&dir).unwrap();
    }
}
