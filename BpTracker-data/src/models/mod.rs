// Storage models for readings as the host application hands them over
pub mod reading;

pub use reading::{NewReadingRecord, ReadingRecord};
