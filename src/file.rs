//! JPEG/JFIF marker segment splitter.
//!
//! This only locates marker segments; their contents are left to the metadata readers.


use crate::{
    error::{Error, Result},
    reader::Reader,
};

pub struct JpegParser<'a> {
    reader: Reader<'a>,
}

impl<'a> JpegParser<'a> {
    pub fn new(buf: &'a [u8]) -> Result<Self> {
        let mut reader = Reader::new(buf);
        if reader.read_u8()? != 0xFF || reader.read_u8()? != 0xD8 {
            return Err(Error::from("JPEG image does not start with SOI marker"));
        }
        Ok(Self { reader })
    }

    /// Reads the next [`Segment`] from the JPEG data.
    ///
    /// Returns `Ok(None)` once the EOI marker or the first SOS marker is encountered. SOS is
    /// followed by entropy-coded scan data, which is not parsed, so no segments after it are
    /// returned.
    pub fn next_segment(&mut self) -> Result<Option<Segment<'a>>> {
        let (offset, marker) = loop {
            while self.reader.read_u8()? != 0xff {}

            // Any number of 0xFF fill bytes may precede a marker.
            let mut marker = self.reader.read_u8()?;
            while marker == 0xff {
                marker = self.reader.read_u8()?;
            }
            let offset = self.reader.position() - 2;

            match marker {
                0x00 => return Err(Error::from("invalid ff 00 marker")),
                // TEM and RSTn have no length field and no content.
                0x01 | 0xD0..=0xD7 => {
                    log::debug!("skipping standalone ff {:02x} marker at {:#x}", marker, offset);
                    continue;
                }
                _ => break (offset, marker),
            }
        };

        if marker == 0xD9 {
            // EOI marker
            if !self.reader.remaining().is_empty() {
                log::warn!(
                    "ignoring {} trailing bytes after EOI",
                    self.reader.remaining().len()
                );
            }

            return Ok(None);
        }

        let length = usize::from(self.read_length()?);
        let raw_bytes = self.reader.read_slice(length)?;

        if marker == 0xDA {
            log::debug!("reached SOS at {:#x}, stopping", offset);
            return Ok(None);
        }

        Ok(Some(Segment {
            marker,
            raw_bytes,
            offset,
        }))
    }

    /// Returns the remaining (unparsed) bytes of the input data.
    pub fn remaining(&self) -> &'a [u8] {
        self.reader.remaining()
    }

    fn read_length(&mut self) -> Result<u16> {
        // Length parameter is the length of the segment parameters, including the length parameter,
        // but excluding the FF xx marker.

        let len = self.reader.read_u16()?;
        if len < 2 {
            return Err(Error::from(format!("invalid segment length {len}")));
        }
        if self.reader.remaining().len() < (len - 2).into() {
            return Err(Error::from(format!(
                "segment length {} exceeds the {} remaining bytes",
                len,
                self.reader.remaining().len()
            )));
        }
        Ok(len - 2)
    }
}

/// A segment of a JPEG file, introduced by a `0xFF 0xXX` marker.
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a> {
    marker: u8,
    raw_bytes: &'a [u8],
    offset: usize,
}

impl<'a> Segment<'a> {
    /// Returns the offset of the segment's `0xFF 0xXX` marker in the input buffer.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the value of the marker byte indicating the type of the segment.
    #[inline]
    pub fn marker(&self) -> u8 {
        self.marker
    }

    /// The raw bytes making up this segment, exluding the `0xFF 0xXX` marker and the segment length
    /// indication.
    #[inline]
    pub fn raw_bytes(&self) -> &'a [u8] {
        self.raw_bytes
    }
}

/// All segments of a JPEG file up to its first scan.
#[derive(Debug, Default)]
pub struct JpegSegments<'a> {
    segments: Vec<Segment<'a>>,
}

impl<'a> JpegSegments<'a> {
    pub fn collect(jpeg: &'a [u8]) -> Result<Self> {
        let mut parser = JpegParser::new(jpeg)?;
        let mut segments = Vec::new();
        while let Some(segment) = parser.next_segment()? {
            segments.push(segment);
        }
        Ok(Self { segments })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment<'a>> {
        self.segments.iter()
    }

    /// Returns the payloads of all segments with the given marker, in file order.
    pub fn segments(&self, marker: u8) -> impl Iterator<Item = &'a [u8]> + '_ {
        self.segments
            .iter()
            .filter(move |s| s.marker == marker)
            .map(|s| s.raw_bytes)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
