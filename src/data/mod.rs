mod index;
mod record;

pub use index::AttainmentIndex;
pub use record::{parse_records, AttainmentRecord};
