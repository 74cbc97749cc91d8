//! Global constants

pub const BUCKETS_HEADER: &str = "S3 Buckets:";
pub const BUCKET_LINE_PREFIX: &str = "- ";
