use clap::{crate_version, Arg, Command};

pub const ARG_REGION: &str = "region";
pub const ARG_PROFILE: (&str, char) = ("profile", 'p');

pub fn cmd_app() -> Command {
	Command::new("s3ls")
		.version(crate_version!())
		.about("List the S3 buckets visible to the resolved credentials")
		.args(args_region_profile())
}

// region:    --- Common Args
fn args_region_profile() -> [Arg; 2] {
	[
		Arg::new(ARG_PROFILE.0)
			.required(false)
			.num_args(1)
			.short(ARG_PROFILE.1)
			.long(ARG_PROFILE.0)
			.help("The aws config profile to use (credential resolution stays with the aws sdk)."),
		Arg::new(ARG_REGION)
			.required(false)
			.num_args(1)
			.long(ARG_REGION)
			.help("The region to use for this command (override profile/env region)."),
	]
}
// endregion: --- Common Args
