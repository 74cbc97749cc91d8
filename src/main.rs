use cmd::cmd_run;

mod cmd;
mod consts;
mod error;
mod prelude;
mod s3w;

pub use error::Error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
	if let Err(e) = cmd_run().await {
		eprintln!("Error:\n  {}", e);
		std::process::exit(1);
	}
}
