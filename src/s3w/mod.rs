//! AWS API Wrapper

// -- Sub-modules
mod bucket_ops;
mod client;

// -- Re-exports
pub use self::bucket_ops::list_buckets;
pub use self::client::{new_s3_client, RegionProfile};
