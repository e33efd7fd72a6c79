// Error types
pub mod error;

// Classification outcome reporting
pub mod outcome;

// Vendor source families
pub mod ismartalarm;
pub mod nest;
pub mod qbee;
pub mod wink;

// Vendor registry
pub mod vendors;

// Error types
pub use error::{Error, Result, RowError};

// Outcome reporting
pub use outcome::{ClassifyOutcome, RowRejection};

// Registry
pub use vendors::{VendorMetadata, all_vendors, detect_vendor, vendor_metadata, vendor_names};
