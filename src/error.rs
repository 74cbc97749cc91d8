use aws_sdk_s3::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_s3::operation::list_buckets::ListBucketsError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error("AWS Service Error. Code: {0}, Message: {1}")]
	AwsServiceError(String, String), // code, message

	#[error(transparent)]
	IO(#[from] std::io::Error),
}

/// For better CLI error reporting.
impl From<SdkError<ListBucketsError>> for Error {
	fn from(val: SdkError<ListBucketsError>) -> Self {
		let se = val.into_service_error();
		let code = se.code().unwrap_or_default().to_string();
		let message = se.message().unwrap_or_default().to_string();
		Error::AwsServiceError(code, message)
	}
}
