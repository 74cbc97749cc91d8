use crate::prelude::*;
use aws_sdk_s3::Client;

/// Issue one ListBuckets request and project the bucket names,
/// in the order the service returned them.
/// Note: Deliberately no pagination follow-up; one request per call.
pub async fn list_buckets(client: &Client) -> Result<Vec<String>> {
	let buckets_output = client.list_buckets().send().await?;
	let buckets = buckets_output.buckets.unwrap_or_default();
	Ok(buckets.into_iter().flat_map(|b| b.name).collect())
}
