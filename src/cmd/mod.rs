use crate::cmd::app::{cmd_app, ARG_PROFILE, ARG_REGION};
use crate::consts::{BUCKETS_HEADER, BUCKET_LINE_PREFIX};
use crate::prelude::*;
use crate::s3w::{list_buckets, new_s3_client, RegionProfile};
use std::io::Write;

mod app;

pub async fn cmd_run() -> Result<()> {
	let argm = cmd_app().get_matches();

	let reg_pro = RegionProfile {
		region: argm.get_one::<String>(ARG_REGION).cloned(),
		profile: argm.get_one::<String>(ARG_PROFILE.0).cloned(),
	};

	exec_ls_buckets(reg_pro).await
}

async fn exec_ls_buckets(reg_pro: RegionProfile) -> Result<()> {
	let client = new_s3_client(reg_pro).await?;

	// Single ListBuckets call, no pagination follow-up.
	let names = list_buckets(&client).await?;

	let mut stdout = std::io::stdout();
	stdout.write_all(render_buckets(&names).as_bytes())?;

	Ok(())
}

/// Render the listing block: one header line, then one `- name` line
/// per bucket, in service order.
fn render_buckets(names: &[String]) -> String {
	let mut out = String::new();
	out.push_str(BUCKETS_HEADER);
	out.push('\n');
	for name in names {
		out.push_str(BUCKET_LINE_PREFIX);
		out.push_str(name);
		out.push('\n');
	}
	out
}

// endregion: --- Tests
