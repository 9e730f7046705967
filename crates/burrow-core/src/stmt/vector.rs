use std::ops;

/// A fixed-size vector of 32-bit floats.
///
/// On the wire a vector travels as a blob of little-endian 4-byte floats, one
/// per element, with no header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct F32Vector(Vec<f32>);

impl F32Vector {
    pub fn new(items: Vec<f32>) -> F32Vector {
        F32Vector(items)
    }

    /// Encodes the vector as little-endian 4-byte floats.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.iter().flat_map(|item| item.to_le_bytes()).collect()
    }

    /// Decodes a blob of little-endian 4-byte floats.
    ///
    /// Returns `None` when the length is not a multiple of four.
    pub fn from_bytes(bytes: &[u8]) -> Option<F32Vector> {
        if bytes.len() % 4 != 0 {
            return None;
        }

        let items = bytes
            .chunks_exact(4)
            .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();

        Some(F32Vector(items))
    }

    pub fn into_inner(self) -> Vec<f32> {
        self.0
    }
}

impl ops::Deref for F32Vector {
    type Target = [f32];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<f32>> for F32Vector {
    fn from(value: Vec<f32>) -> Self {
        F32Vector(value)
    }
}

impl<const N: usize> From<[f32; N]> for F32Vector {
    fn from(value: [f32; N]) -> Self {
        F32Vector(value.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(overflowing_literals)]
    fn bytes_round_trip_is_bit_exact() {
        let vector = F32Vector::from([0.1, -0.0, f32::MIN_POSITIVE, 3.5e38]);
        let bytes = vector.to_bytes();
        assert_eq!(bytes.len(), 16);

        let decoded = F32Vector::from_bytes(&bytes).expect("multiple of four");
        let bits = |v: &F32Vector| v.iter().map(|item| item.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&vector), bits(&decoded));
    }

    #[test]
    fn little_endian_layout() {
        let vector = F32Vector::from([1.0]);
        assert_eq!(vector.to_bytes(), vec![0x00, 0x00, 0x80, 0x3f]);
    }

    #[test]
    fn ragged_bytes_are_rejected() {
        assert_eq!(F32Vector::from_bytes(&[0, 0, 0]), None);
        assert_eq!(F32Vector::from_bytes(&[]), Some(F32Vector::default()));
    }
}
