mod arg;
pub use arg::WireArg;

pub mod decode;
pub use decode::decode;

mod insert_id;
pub use insert_id::assign_last_insert_row_id;

pub mod pipeline;
pub use pipeline::{PipelineRequest, PipelineResponse};

mod row;
pub use row::{decode_row, load_row};

mod value;
pub use value::WireValue;
