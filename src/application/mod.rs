//! Application layer - record decoding and encoding.
//!
//! This layer coordinates text parsing, the schema validator port and the
//! domain constructors.

mod record_codec;

pub use record_codec::{CodecError, InterviewRecord, RecordCodec, RecordFormat};
