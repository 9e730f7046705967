use super::{F32Vector, Slot, Target, Type, Value};

/// A native type that can back a mapped record field.
///
/// Implemented for every supported shape and for its `Option` form. The
/// derive macro uses this trait to wire fields to the decoder and to the
/// statement builders.
pub trait Primitive {
    /// Native shape of the field.
    const TYPE: Type;

    /// `true` when the field may hold no value.
    const NULLABLE: bool;

    /// Borrows the field as a decoding destination.
    fn target(&mut self) -> Target<'_>;

    /// Reads the field as a statement value.
    fn to_value(&self) -> Value;
}

macro_rules! impl_primitive {
    ( $( $ty:ty => $variant:ident, )* ) => {
        $(
            impl Primitive for $ty {
                const TYPE: Type = Type::$variant;
                const NULLABLE: bool = false;

                fn target(&mut self) -> Target<'_> {
                    Target::$variant(Slot::Required(self))
                }

                fn to_value(&self) -> Value {
                    Value::from(self.clone())
                }
            }

            impl Primitive for Option<$ty> {
                const TYPE: Type = Type::$variant;
                const NULLABLE: bool = true;

                fn target(&mut self) -> Target<'_> {
                    Target::$variant(Slot::Optional(self))
                }

                fn to_value(&self) -> Value {
                    Value::from(self.clone())
                }
            }
        )*
    };
}

impl_primitive! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    jiff::Timestamp => Timestamp,
    String => String,
    Vec<u8> => Bytes,
    F32Vector => Vector,
}
