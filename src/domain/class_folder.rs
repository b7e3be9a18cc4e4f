// ============================================================
// Layer 3 — Class Folder Domain Type
// ============================================================
// A class folder is an immediate subdirectory of the input
// root. Its name is the class label, and the image files
// directly inside it are the samples for that class.
//
// Example:
//   dataset/
//     cat/   ← ClassFolder { label: "cat", images: [a.jpg, b.png] }
//       a.jpg
//       b.png
//       notes.txt   (ignored: not an image extension)
//       extra/      (ignored: nested directories are not recursed)
//
// Only paths and file names are used. Image content is
// never opened or decoded.
//
// Reference: Rust Book §5 (Structs), §8 (Collections)

use std::path::{Path, PathBuf};

/// File extensions (lower-case, without the dot) accepted as images.
pub const IMAGE_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "bmp", "tif", "tiff", "webp"];

/// Returns true if the path's extension is in the image allow-set.
/// The comparison is case-insensitive, so `IMG_01.JPG` counts.
pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let lower = e.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&lower.as_str())
        })
        .unwrap_or(false)
}

/// One class of the dataset with its sorted image list.
#[derive(Debug, Clone)]
pub struct ClassFolder {
    /// Directory name, used as the class label and output prefix
    pub label: String,

    /// Full path to the class directory
    pub path: PathBuf,

    /// Image files directly inside `path`, sorted by file name
    pub images: Vec<PathBuf>,
}

impl ClassFolder {
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>, images: Vec<PathBuf>) -> Self {
        Self {
            label:  label.into(),
            path:   path.into(),
            images,
        }
    }

    /// Number of images available for sampling
    pub fn available(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Derive the class label from a class directory path.
/// Non-UTF-8 names are converted lossily so they can still prefix output names.
pub fn label_for(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
