use super::blob::read_bytes;
use crate::WireValue;

use burrow_core::stmt::{F32Vector, Target};

/// Decodes a blob of `size` little-endian `f32`s. Any other length is
/// rejected.
pub(super) fn decode(size: usize, target: Target<'_>, wire: &WireValue) -> bool {
    let Target::Vector(slot) = target else {
        return false;
    };

    let Some(bytes) = read_bytes(wire) else {
        return false;
    };

    if bytes.len() != size * 4 {
        return false;
    }

    match F32Vector::from_bytes(&bytes) {
        Some(vector) => slot.set(vector),
        None => false,
    }
}
