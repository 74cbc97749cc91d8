use crate::prelude::*;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::Client;
use std::env;

// Optional endpoint override (e.g., MinIO). Not part of the standard env chain.
const AWS_ENDPOINT: &str = "AWS_ENDPOINT";

pub struct RegionProfile {
	pub region: Option<String>,
	pub profile: Option<String>,
}

/// Build the S3 client from the SDK default config chain.
/// Credential resolution is left entirely to the aws sdk; only the
/// profile/region from the command line and an eventual AWS_ENDPOINT
/// are layered on top.
pub async fn new_s3_client(reg_pro: RegionProfile) -> Result<Client> {
	let mut loader = aws_config::from_env();

	if let Some(profile) = reg_pro.profile.as_deref() {
		loader = loader.profile_name(profile);
	}

	let endpoint = env::var(AWS_ENDPOINT).ok();
	if let Some(endpoint) = endpoint.as_deref() {
		loader = loader.endpoint_url(endpoint);
	}

	match (reg_pro.region, &endpoint) {
		// The --region arg takes precedence over profile/env region.
		(Some(region), _) => loader = loader.region(Region::new(region)),
		// WORKAROUND - the aws-sdk-s3 throws a NoRegion on .send if no region,
		// even when an endpoint is set.
		(None, Some(_)) => loader = loader.region(Region::new("endpoint-region")),
		(None, None) => (),
	}

	let config = loader.load().await;

	Ok(Client::new(&config))
}
