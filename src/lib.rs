//! Frame metadata extraction from JPEG Start-Of-Frame (SOFn) segments.
//!
//! A SOFn segment describes the dimensions, sample precision and color components of a JPEG frame.
//! [`JpegReader`] decodes such a segment into a [`JpegDirectory`]; [`read_metadata`] does so for
//! every SOFn segment of a whole JPEG file.
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let jpeg = std::fs::read("image.jpg")?;
//! let metadata = sofmeta::read_metadata(&jpeg)?;
//! for dir in metadata.directories() {
//!     println!("{:?}x{:?}", dir.image_width(), dir.image_height());
//! }
//! # Ok(()) }
//! ```

mod component;
mod directory;
mod error;
mod file;
mod metadata;
mod reader;
mod sof;


pub use component::JpegComponent;
pub use directory::{JpegDirectory, TagValue};
pub use error::{Error, Result};
pub use file::{JpegParser, JpegSegments, Segment};
pub use metadata::{read_metadata, read_metadata_with, JpegSegmentMetadataReader, Metadata};
pub use reader::Reader;
pub use sof::{JpegReader, SofMarker};
