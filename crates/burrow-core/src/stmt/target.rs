use super::{F32Vector, Type};

/// A mutable destination for one decoded value.
///
/// `Required` slots always hold a value; `Optional` slots may be cleared.
#[derive(Debug)]
pub enum Slot<'a, T> {
    Required(&'a mut T),
    Optional(&'a mut Option<T>),
}

impl<T> Slot<'_, T> {
    /// Stores `value` in the slot. Always succeeds.
    pub fn set(self, value: T) -> bool {
        match self {
            Slot::Required(dst) => *dst = value,
            Slot::Optional(dst) => *dst = Some(value),
        }
        true
    }

    /// Clears the slot. A required slot has nothing to clear and is left
    /// untouched, which is reported as `false`.
    pub fn clear(self) -> bool {
        match self {
            Slot::Required(_) => false,
            Slot::Optional(dst) => {
                *dst = None;
                true
            }
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Slot::Optional(_))
    }

    /// Current value held by the slot, if any.
    pub fn get(&self) -> Option<&T> {
        match self {
            Slot::Required(dst) => Some(&**dst),
            Slot::Optional(dst) => dst.as_ref(),
        }
    }
}

/// A mutable destination field, tagged by its native shape.
#[derive(Debug)]
pub enum Target<'a> {
    Bool(Slot<'a, bool>),
    I8(Slot<'a, i8>),
    I16(Slot<'a, i16>),
    I32(Slot<'a, i32>),
    I64(Slot<'a, i64>),
    U8(Slot<'a, u8>),
    U16(Slot<'a, u16>),
    U32(Slot<'a, u32>),
    U64(Slot<'a, u64>),
    F32(Slot<'a, f32>),
    F64(Slot<'a, f64>),
    Timestamp(Slot<'a, jiff::Timestamp>),
    String(Slot<'a, String>),
    Bytes(Slot<'a, Vec<u8>>),
    Vector(Slot<'a, F32Vector>),
}

impl Target<'_> {
    pub fn ty(&self) -> Type {
        match self {
            Target::Bool(_) => Type::Bool,
            Target::I8(_) => Type::I8,
            Target::I16(_) => Type::I16,
            Target::I32(_) => Type::I32,
            Target::I64(_) => Type::I64,
            Target::U8(_) => Type::U8,
            Target::U16(_) => Type::U16,
            Target::U32(_) => Type::U32,
            Target::U64(_) => Type::U64,
            Target::F32(_) => Type::F32,
            Target::F64(_) => Type::F64,
            Target::Timestamp(_) => Type::Timestamp,
            Target::String(_) => Type::String,
            Target::Bytes(_) => Type::Bytes,
            Target::Vector(_) => Type::Vector,
        }
    }

    /// Clears the destination if it is optional.
    pub fn clear(self) -> bool {
        match self {
            Target::Bool(slot) => slot.clear(),
            Target::I8(slot) => slot.clear(),
            Target::I16(slot) => slot.clear(),
            Target::I32(slot) => slot.clear(),
            Target::I64(slot) => slot.clear(),
            Target::U8(slot) => slot.clear(),
            Target::U16(slot) => slot.clear(),
            Target::U32(slot) => slot.clear(),
            Target::U64(slot) => slot.clear(),
            Target::F32(slot) => slot.clear(),
            Target::F64(slot) => slot.clear(),
            Target::Timestamp(slot) => slot.clear(),
            Target::String(slot) => slot.clear(),
            Target::Bytes(slot) => slot.clear(),
            Target::Vector(slot) => slot.clear(),
        }
    }
}
