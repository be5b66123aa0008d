//! Start-Of-Frame (SOFn) segment decoding.


use std::fmt;

use crate::{
    component::JpegComponent,
    directory::JpegDirectory,
    error::Result,
    metadata::{JpegSegmentMetadataReader, Metadata},
    reader::Reader,
};

/// Identifies the type of a SOFn segment by its marker byte.
///
/// Each SOFn marker selects a different compression process. `0xFF 0xC4` and `0xFF 0xCC` would be
/// SOF4 and SOF12, but are used for DHT and DAC segments instead and are not represented here.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SofMarker(u8);

impl fmt::Debug for SofMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::SOF0 => f.write_str("SOF0"),
            Self::SOF1 => f.write_str("SOF1"),
            Self::SOF2 => f.write_str("SOF2"),
            Self::SOF3 => f.write_str("SOF3"),
            Self::SOF5 => f.write_str("SOF5"),
            Self::SOF6 => f.write_str("SOF6"),
            Self::SOF7 => f.write_str("SOF7"),
            Self::SOF8 => f.write_str("SOF8"),
            Self::SOF9 => f.write_str("SOF9"),
            Self::SOF10 => f.write_str("SOF10"),
            Self::SOF11 => f.write_str("SOF11"),
            Self::SOF13 => f.write_str("SOF13"),
            Self::SOF14 => f.write_str("SOF14"),
            Self::SOF15 => f.write_str("SOF15"),
            _ => f
                .debug_tuple("SofMarker")
                .field(&format_args!("{:02x}", self.0))
                .finish(),
        }
    }
}

impl SofMarker {
    /// Baseline DCT.
    pub const SOF0: Self = Self(0xC0);
    /// Extended Sequential DCT.
    pub const SOF1: Self = Self(0xC1);
    /// Progressive DCT.
    pub const SOF2: Self = Self(0xC2);
    /// Lossless sequential.
    pub const SOF3: Self = Self(0xC3);
    /// Differential sequential DCT.
    pub const SOF5: Self = Self(0xC5);
    /// Differential progressive DCT.
    pub const SOF6: Self = Self(0xC6);
    /// Differential lossless (sequential).
    pub const SOF7: Self = Self(0xC7);
    /// `JPG`, reserved for JPEG extensions.
    pub const SOF8: Self = Self(0xC8);
    /// Extended sequential DCT, arithmetic coding.
    pub const SOF9: Self = Self(0xC9);
    /// Progressive DCT, arithmetic coding.
    pub const SOF10: Self = Self(0xCA);
    /// Lossless (sequential), arithmetic coding.
    pub const SOF11: Self = Self(0xCB);
    /// Differential sequential DCT, arithmetic coding.
    pub const SOF13: Self = Self(0xCD);
    /// Differential progressive DCT, arithmetic coding.
    pub const SOF14: Self = Self(0xCE);
    /// Differential lossless (sequential), arithmetic coding.
    pub const SOF15: Self = Self(0xCF);

    /// All supported SOFn markers, in marker order.
    pub const ALL: [Self; 14] = [
        Self::SOF0,
        Self::SOF1,
        Self::SOF2,
        Self::SOF3,
        Self::SOF5,
        Self::SOF6,
        Self::SOF7,
        Self::SOF8,
        Self::SOF9,
        Self::SOF10,
        Self::SOF11,
        Self::SOF13,
        Self::SOF14,
        Self::SOF15,
    ];

    /// Returns the [`SofMarker`] for the `0xXX` byte of a `0xFF 0xXX` marker, or `None` if it does
    /// not introduce a supported SOFn segment.
    pub fn from_marker(marker: u8) -> Option<Self> {
        match marker {
            0xC0..=0xC3 | 0xC5..=0xCB | 0xCD..=0xCF => Some(Self(marker)),
            _ => None,
        }
    }

    #[inline]
    pub fn marker(self) -> u8 {
        self.0
    }

    /// Returns the compression type recorded for frames of this kind (`n` in `SOFn`).
    #[inline]
    pub fn compression_type(self) -> i32 {
        i32::from(self.0 - Self::SOF0.0)
    }
}

/// Decodes SOFn segments into [`JpegDirectory`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct JpegReader;

impl JpegReader {
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Decodes a single SOFn segment payload (the bytes following the segment length).
    ///
    /// This never fails: if the segment ends early, the returned directory holds every tag that
    /// was decoded before that point, plus an error describing the truncation.
    pub fn extract(&self, segment: &[u8], sof: SofMarker) -> JpegDirectory {
        let mut directory = JpegDirectory::new();
        directory.set(JpegDirectory::TAG_COMPRESSION_TYPE, sof.compression_type());

        let mut reader = Reader::new(segment);
        match read_frame_header(&mut reader, &mut directory) {
            Ok(()) => {
                if !reader.remaining().is_empty() {
                    log::trace!(
                        "ignoring {} trailing bytes in {:?} segment",
                        reader.remaining().len(),
                        sof
                    );
                }
            }
            Err(e) => {
                log::warn!("{:?} segment: {}", sof, e);
                directory.add_error(e.to_string());
            }
        }

        directory
    }

    /// Decodes each segment in `segments`, adding one directory per segment to `metadata`.
    pub fn read_segments<'s>(
        &self,
        segments: impl IntoIterator<Item = &'s [u8]>,
        metadata: &mut Metadata,
        sof: SofMarker,
    ) {
        for segment in segments {
            metadata.add_directory(self.extract(segment, sof));
        }
    }
}

fn read_frame_header(reader: &mut Reader<'_>, directory: &mut JpegDirectory) -> Result<()> {
    directory.set(JpegDirectory::TAG_DATA_PRECISION, reader.read_u8()?);
    directory.set(JpegDirectory::TAG_IMAGE_HEIGHT, reader.read_u16()?);
    directory.set(JpegDirectory::TAG_IMAGE_WIDTH, reader.read_u16()?);
    let num_components = reader.read_u8()?;
    directory.set(JpegDirectory::TAG_NUMBER_OF_COMPONENTS, num_components);

    // Each component is 3 bytes: Ci, HiVi, Tqi.
    for i in 0..i32::from(num_components) {
        let component: JpegComponent = *reader.read_obj()?;
        log::trace!("component {}: {:?}", i, component);
        directory.set(JpegDirectory::TAG_COMPONENT_DATA_1 + i, component);
    }

    Ok(())
}

impl JpegSegmentMetadataReader for JpegReader {
    fn segment_markers(&self) -> &[u8] {
        const MARKERS: [u8; 14] = [
            0xC0, 0xC1, 0xC2, 0xC3, 0xC5, 0xC6, 0xC7, 0xC8, 0xC9, 0xCA, 0xCB, 0xCD, 0xCE, 0xCF,
        ];
        &MARKERS
    }

    fn read_jpeg_segments(&self, segments: &[&[u8]], metadata: &mut Metadata, marker: u8) {
        match SofMarker::from_marker(marker) {
            Some(sof) => self.read_segments(segments.iter().copied(), metadata, sof),
            None => log::warn!("JpegReader cannot decode ff {:02x} segments", marker),
        }
    }
}
