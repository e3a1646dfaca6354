//! Decoding configuration.

/// What to do when an optional sub-directory (thumbnail, EXIF or GPS) fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubDirectoryPolicy {
    /// Log the failure and leave the directory absent.
    #[default]
    Skip,
    /// Abort document construction with the error.
    Strict,
}

/// Limits and policies applied while decoding an EXIF segment.
///
/// ```
/// use exif_ifd::{DecodeOptions, SubDirectoryPolicy};
///
/// let options = DecodeOptions::default()
///     .with_max_entries(512)
///     .with_sub_directory_policy(SubDirectoryPolicy::Strict);
/// assert_eq!(options.max_entries, 512);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Upper bound on the entry count a single directory may declare.
    pub max_entries: usize,
    /// Error scope for the thumbnail, EXIF and GPS directories.
    pub sub_directory_policy: SubDirectoryPolicy,
    /// Whether to decode the thumbnail directory (IFD1).
    pub follow_thumbnail: bool,
}

impl DecodeOptions {
    /// The default maximum number of entries per directory.
    pub const DEFAULT_MAX_ENTRIES: usize = 4096;

    /// Set [`max_entries`](Self::max_entries).
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    /// Set [`sub_directory_policy`](Self::sub_directory_policy).
    pub fn with_sub_directory_policy(mut self, policy: SubDirectoryPolicy) -> Self {
        self.sub_directory_policy = policy;
        self
    }

    /// Set [`follow_thumbnail`](Self::follow_thumbnail).
    pub fn with_follow_thumbnail(mut self, follow_thumbnail: bool) -> Self {
        self.follow_thumbnail = follow_thumbnail;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_entries: Self::DEFAULT_MAX_ENTRIES,
            sub_directory_policy: SubDirectoryPolicy::default(),
            follow_thumbnail: true,
        }
    }
}
