//! Aggregation of decoded directories across a whole JPEG file.

use crate::{directory::JpegDirectory, error::Result, file::JpegSegments, sof::JpegReader};

/// Decodes the contents of specific JPEG marker segments.
pub trait JpegSegmentMetadataReader {
    /// Returns the `0xXX` marker bytes of the segments this reader wants to see.
    fn segment_markers(&self) -> &[u8];

    /// Decodes `segments`, which all carry the given `marker`, into `metadata`.
    ///
    /// Malformed segments are reported through the directories' error lists rather than by
    /// failing, so one bad segment does not affect its siblings.
    fn read_jpeg_segments(&self, segments: &[&[u8]], metadata: &mut Metadata, marker: u8);
}

/// The directories decoded from one JPEG file, in the order they were produced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Metadata {
    directories: Vec<JpegDirectory>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_directory(&mut self, directory: JpegDirectory) {
        self.directories.push(directory);
    }

    #[inline]
    pub fn directories(&self) -> &[JpegDirectory] {
        &self.directories
    }

    #[inline]
    pub fn first(&self) -> Option<&JpegDirectory> {
        self.directories.first()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.directories.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.directories.is_empty()
    }

    /// Returns whether any directory recorded a decoding error.
    pub fn has_errors(&self) -> bool {
        self.directories.iter().any(JpegDirectory::has_errors)
    }
}

/// Reads the frame metadata of a JPEG file using the default set of readers.
pub fn read_metadata(jpeg: &[u8]) -> Result<Metadata> {
    read_metadata_with(jpeg, &[&JpegReader::new()])
}

/// Reads metadata from a JPEG file with the given readers.
///
/// The file is split into segments once. Each reader is then handed the segments for each marker
/// it asks for, in file order.
///
/// Only failures to locate the segments are returned as errors.
pub fn read_metadata_with(
    jpeg: &[u8],
    readers: &[&dyn JpegSegmentMetadataReader],
) -> Result<Metadata> {
    let segments = JpegSegments::collect(jpeg)?;
    log::trace!("found {} segments", segments.len());

    let mut metadata = Metadata::new();
    for reader in readers {
        for &marker in reader.segment_markers() {
            let payloads = segments.segments(marker).collect::<Vec<_>>();
            if payloads.is_empty() {
                continue;
            }
            log::debug!("decoding {} ff {:02x} segment(s)", payloads.len(), marker);
            reader.read_jpeg_segments(&payloads, &mut metadata, marker);
        }
    }

    Ok(metadata)
}
