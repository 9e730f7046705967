mod direction;
pub use direction::Direction;

mod expr;
pub use expr::Expr;

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_cast;
pub use expr_cast::ExprCast;

mod expr_field;
pub use expr_field::ExprField;

mod expr_func;
pub use expr_func::ExprFunc;

mod expr_has_value;
pub use expr_has_value::ExprHasValue;

mod expr_in_list;
pub use expr_in_list::ExprInList;

mod expr_is_null;
pub use expr_is_null::ExprIsNull;

mod expr_not;
pub use expr_not::ExprNot;

mod expr_or;
pub use expr_or::ExprOr;

mod expr_pattern;
pub use expr_pattern::{ExprPattern, PatternKind};

mod expr_record;
pub use expr_record::ExprRecord;

mod expr_vector_distance;
pub use expr_vector_distance::ExprVectorDistance;

mod op_binary;
pub use op_binary::BinaryOp;

mod primitive;
pub use primitive::Primitive;

mod query;
pub use query::{Query, QueryOp};

mod target;
pub use target::{Slot, Target};

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;

mod vector;
pub use vector::F32Vector;
