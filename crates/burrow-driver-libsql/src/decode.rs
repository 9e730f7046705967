//! Type-directed decoding of wire values into record fields.
//!
//! Each storage class has its own policy for which wire shapes it accepts
//! and which native destinations it can fill. A value that cannot be
//! represented in the destination leaves the destination untouched and is
//! reported as `false`; decoding never fails a whole row.

mod blob;
mod integer;
mod real;
mod text;
mod vector;

use crate::WireValue;

use burrow_core::{schema::StorageClass, stmt::Target};

/// Assigns `wire` to `target` according to the column's storage class.
///
/// Returns `true` when the destination was written. A null value clears an
/// optional destination and leaves a required one untouched.
pub fn decode(storage: StorageClass, target: Target<'_>, wire: &WireValue) -> bool {
    if wire.is_null() {
        return target.clear();
    }

    match storage {
        StorageClass::Integer => integer::decode(target, wire),
        StorageClass::Real => real::decode(target, wire),
        StorageClass::Text => text::decode(target, wire),
        StorageClass::Blob => blob::decode(target, wire),
        StorageClass::FixedVector(size) => vector::decode(size, target, wire),
    }
}
