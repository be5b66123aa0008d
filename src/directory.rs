//! Typed per-segment tag storage.

use std::collections::BTreeMap;

use crate::component::JpegComponent;

/// A value stored under a tag in a [`JpegDirectory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TagValue {
    Int(i32),
    Component(JpegComponent),
}

impl TagValue {
    #[inline]
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    #[inline]
    pub fn as_component(&self) -> Option<&JpegComponent> {
        match self {
            Self::Component(c) => Some(c),
            _ => None,
        }
    }
}

impl From<i32> for TagValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<u8> for TagValue {
    fn from(value: u8) -> Self {
        Self::Int(value.into())
    }
}

impl From<u16> for TagValue {
    fn from(value: u16) -> Self {
        Self::Int(value.into())
    }
}

impl From<JpegComponent> for TagValue {
    fn from(value: JpegComponent) -> Self {
        Self::Component(value)
    }
}

/// The frame metadata decoded from one SOFn segment.
///
/// Values are keyed by integer tag. Lookups never coerce between value types: asking for an
/// integer under a component tag yields `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JpegDirectory {
    tags: BTreeMap<i32, TagValue>,
    errors: Vec<String>,
}

impl JpegDirectory {
    /// The frame's compression process, as an offset from SOF0 (0 = baseline).
    pub const TAG_COMPRESSION_TYPE: i32 = -3;
    /// Sample precision in bits.
    pub const TAG_DATA_PRECISION: i32 = 0;
    pub const TAG_IMAGE_HEIGHT: i32 = 1;
    pub const TAG_IMAGE_WIDTH: i32 = 3;
    pub const TAG_NUMBER_OF_COMPONENTS: i32 = 5;
    /// Component `i` (0-based) is stored under `TAG_COMPONENT_DATA_1 + i`.
    pub const TAG_COMPONENT_DATA_1: i32 = 6;
    pub const TAG_COMPONENT_DATA_2: i32 = 7;
    pub const TAG_COMPONENT_DATA_3: i32 = 8;
    pub const TAG_COMPONENT_DATA_4: i32 = 9;

    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `tag`, replacing any previous value.
    pub fn set(&mut self, tag: i32, value: impl Into<TagValue>) {
        self.tags.insert(tag, value.into());
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    #[inline]
    pub fn get(&self, tag: i32) -> Option<&TagValue> {
        self.tags.get(&tag)
    }

    pub fn get_int(&self, tag: i32) -> Option<i32> {
        self.get(tag).and_then(TagValue::as_int)
    }

    pub fn get_component(&self, tag: i32) -> Option<&JpegComponent> {
        self.get(tag).and_then(TagValue::as_component)
    }

    #[inline]
    pub fn contains(&self, tag: i32) -> bool {
        self.tags.contains_key(&tag)
    }

    /// Returns the number of tags that hold a value.
    #[inline]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterates over all tags and their values in ascending tag order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &TagValue)> {
        self.tags.iter().map(|(tag, value)| (*tag, value))
    }

    /// Returns the errors recorded while decoding, in the order they occurred.
    #[inline]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn compression_type(&self) -> Option<i32> {
        self.get_int(Self::TAG_COMPRESSION_TYPE)
    }

    pub fn data_precision(&self) -> Option<i32> {
        self.get_int(Self::TAG_DATA_PRECISION)
    }

    pub fn image_height(&self) -> Option<i32> {
        self.get_int(Self::TAG_IMAGE_HEIGHT)
    }

    pub fn image_width(&self) -> Option<i32> {
        self.get_int(Self::TAG_IMAGE_WIDTH)
    }

    pub fn number_of_components(&self) -> Option<i32> {
        self.get_int(Self::TAG_NUMBER_OF_COMPONENTS)
    }

    /// Returns the component with the given 0-based index.
    pub fn component(&self, index: usize) -> Option<&JpegComponent> {
        let tag = i32::try_from(index)
            .ok()
            .and_then(|i| Self::TAG_COMPONENT_DATA_1.checked_add(i))?;
        self.get_component(tag)
    }

    /// Iterates over the stored components in index order.
    ///
    /// Iteration stops at the first missing index, so a directory whose segment was truncated
    /// yields only the components that were fully decoded.
    pub fn components(&self) -> impl Iterator<Item = &JpegComponent> {
        (0..).map_while(move |i| self.component(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites() {
        let mut dir = JpegDirectory::new();
        assert!(dir.is_empty());
        dir.set(JpegDirectory::TAG_IMAGE_WIDTH, 10u16);
        dir.set(JpegDirectory::TAG_IMAGE_WIDTH, 20u16);
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.image_width(), Some(20));
    }

    #[test]
    fn no_coercion() {
        let mut dir = JpegDirectory::new();
        dir.set(JpegDirectory::TAG_COMPONENT_DATA_1, JpegComponent::new(1, 0x11, 0));
        dir.set(JpegDirectory::TAG_DATA_PRECISION, 8u8);

        assert_eq!(dir.get_int(JpegDirectory::TAG_COMPONENT_DATA_1), None);
        assert_eq!(dir.get_component(JpegDirectory::TAG_DATA_PRECISION), None);
        assert_eq!(dir.data_precision(), Some(8));
        assert_eq!(dir.component(0), Some(&JpegComponent::new(1, 0x11, 0)));
        assert_eq!(dir.get(JpegDirectory::TAG_IMAGE_HEIGHT), None);
    }

    #[test]
    fn errors_keep_tags() {
        let mut dir = JpegDirectory::new();
        dir.set(JpegDirectory::TAG_COMPRESSION_TYPE, 2i32);
        dir.add_error("first");
        dir.add_error(String::from("second"));
        assert_eq!(dir.errors(), ["first", "second"]);
        assert!(dir.has_errors());
        assert_eq!(dir.compression_type(), Some(2));
    }

    #[test]
    fn components_stop_at_gap() {
        let mut dir = JpegDirectory::new();
        dir.set(JpegDirectory::TAG_COMPONENT_DATA_1, JpegComponent::new(1, 0x22, 0));
        dir.set(JpegDirectory::TAG_COMPONENT_DATA_2, JpegComponent::new(2, 0x11, 1));
        dir.set(JpegDirectory::TAG_COMPONENT_DATA_4, JpegComponent::new(4, 0x11, 1));

        let ids = dir.components().map(|c| c.id()).collect::<Vec<_>>();
        assert_eq!(ids, [1, 2]);
        assert_eq!(dir.component(3).map(|c| c.id()), Some(4));
        assert_eq!(dir.component(usize::MAX), None);
    }

    #[test]
    fn iter_order() {
        let mut dir = JpegDirectory::new();
        dir.set(JpegDirectory::TAG_IMAGE_WIDTH, 4u16);
        dir.set(JpegDirectory::TAG_COMPRESSION_TYPE, 0i32);
        dir.set(JpegDirectory::TAG_DATA_PRECISION, 8u8);
        let tags = dir.iter().map(|(tag, _)| tag).collect::<Vec<_>>();
        assert_eq!(tags, [-3, 0, 3]);
    }
}
