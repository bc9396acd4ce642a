// BpTracker Data
// This crate holds the storage-shaped reading records and the repository seam
// the host application fills with readings

// Repository implementations for data access
pub mod repository;

// Data storage models
pub mod models;
