mod sensitive;
pub use self::sensitive::Sensitive;

mod timestamp;
pub use self::timestamp::{InvalidTimestamp, ParseError, Timestamp};
