//! Per-step records of a running episode.
//!
//! The engine writes one [`Record`] per completed transition to the
//! [`Recorder`] attached with [`Episode::with_recorder`], under the keys
//! `"step"`, `"reward"`, `"total_reward"` and `"done"`.
//!
//! ```rust
//! use han_core::record::{Record, RecordValue};
//!
//! let mut record = Record::empty();
//! record.insert("step", RecordValue::Scalar(1.0));
//! record.insert("env", RecordValue::String("counter".to_string()));
//! assert_eq!(record.get_scalar("step").unwrap(), 1.0);
//! ```
//!
//! [`Episode::with_recorder`]: crate::Episode::with_recorder
mod base;
mod buffered_recorder;
mod null_recorder;
mod recorder;

pub use base::{Record, RecordError, RecordValue};
pub use buffered_recorder::BufferedRecorder;
pub use null_recorder::NullRecorder;
pub use recorder::Recorder;
