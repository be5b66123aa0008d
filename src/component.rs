use std::fmt;

use bytemuck::{Pod, Zeroable};

/// One color component of a frame, as described by a SOFn segment.
///
/// This is stored exactly as it appears in the segment: three bytes holding the component
/// identifier, the packed sampling factors, and the quantization table selector.
#[derive(Clone, Copy, PartialEq, Eq, Zeroable, Pod)]
#[repr(C)]
pub struct JpegComponent {
    id: u8,
    sampling_factors: u8,
    quantization_table: u8,
}

impl JpegComponent {
    #[inline]
    pub fn new(id: u8, sampling_factors: u8, quantization_table: u8) -> Self {
        Self {
            id,
            sampling_factors,
            quantization_table,
        }
    }

    /// Returns the component identifier.
    ///
    /// By convention 1 = Y, 2 = Cb, 3 = Cr, 4 = I and 5 = Q, but encoders are free to use any
    /// value here. It is not validated.
    #[inline]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Returns the raw sampling factor byte (horizontal factor in the high nibble, vertical factor
    /// in the low nibble).
    #[inline]
    pub fn sampling_factor_byte(&self) -> u8 {
        self.sampling_factors
    }

    #[inline]
    pub fn horizontal_sampling_factor(&self) -> u8 {
        self.sampling_factors >> 4
    }

    #[inline]
    pub fn vertical_sampling_factor(&self) -> u8 {
        self.sampling_factors & 0xf
    }

    /// Returns the index of the quantization table used by this component.
    #[inline]
    pub fn quantization_table_number(&self) -> u8 {
        self.quantization_table
    }

    /// Returns the conventional name of the component, if its identifier has one.
    pub fn component_name(&self) -> Option<&'static str> {
        match self.id {
            1 => Some("Y"),
            2 => Some("Cb"),
            3 => Some("Cr"),
            4 => Some("I"),
            5 => Some("Q"),
            _ => None,
        }
    }
}

impl fmt::Debug for JpegComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JpegComponent")
            .field("id", &self.id)
            .field("h", &self.horizontal_sampling_factor())
            .field("v", &self.vertical_sampling_factor())
            .field("qtable", &self.quantization_table)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let c = JpegComponent::new(1, 0x21, 0);
        assert_eq!(c.id(), 1);
        assert_eq!(c.sampling_factor_byte(), 0x21);
        assert_eq!(c.horizontal_sampling_factor(), 2);
        assert_eq!(c.vertical_sampling_factor(), 1);
        assert_eq!(c.quantization_table_number(), 0);
        assert_eq!(c.component_name(), Some("Y"));
    }

    #[test]
    fn names() {
        let names = (0..=6)
            .map(|id| JpegComponent::new(id, 0x11, 0).component_name())
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            [None, Some("Y"), Some("Cb"), Some("Cr"), Some("I"), Some("Q"), None]
        );
    }

    #[test]
    fn layout() {
        let c: &JpegComponent = bytemuck::from_bytes(&[3, 0x11, 1]);
        assert_eq!(*c, JpegComponent::new(3, 0x11, 1));
        assert_eq!(std::mem::size_of::<JpegComponent>(), 3);
    }
}
