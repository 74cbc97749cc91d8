use anyhow::Result;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

/// Loopback S3 stub that answers every request with the same canned
/// ListAllMyBucketsResult and counts the requests it received.
pub struct BucketStub {
	pub endpoint: String,
	request_count: Arc<AtomicUsize>,
}

impl BucketStub {
	pub fn request_count(&self) -> usize {
		self.request_count.load(Ordering::SeqCst)
	}
}

pub fn spawn_bucket_stub(bucket_names: &[&str]) -> Result<BucketStub> {
	let listener = TcpListener::bind("127.0.0.1:0")?;
	let endpoint = format!("http://{}", listener.local_addr()?);
	let request_count = Arc::new(AtomicUsize::new(0));

	let body = bucket_list_xml(bucket_names);
	let count = Arc::clone(&request_count);

	thread::spawn(move || {
		for stream in listener.incoming() {
			let Ok(mut stream) = stream else { continue };

			// Read the request head (ListBuckets is a body-less GET).
			let mut buff = [0u8; 4096];
			let mut head: Vec<u8> = Vec::new();
			loop {
				match stream.read(&mut buff) {
					Ok(0) => break,
					Ok(n) => {
						head.extend_from_slice(&buff[..n]);
						if head.windows(4).any(|w| w == b"\r\n\r\n") {
							break;
						}
					}
					Err(_) => break,
				}
			}
			if head.is_empty() {
				continue;
			}

			count.fetch_add(1, Ordering::SeqCst);

			let resp = format!(
				"HTTP/1.1 200 OK\r\ncontent-type: application/xml\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
				body.len(),
				body
			);
			let _ = stream.write_all(resp.as_bytes());
		}
	});

	Ok(BucketStub {
		endpoint,
		request_count,
	})
}

/// Note: The ContinuationToken advertises more results beyond the returned
/// page, so a caller that followed it up would show as a second request.
fn bucket_list_xml(names: &[&str]) -> String {
	let buckets: String = names
		.iter()
		.map(|n| format!("<Bucket><Name>{n}</Name><CreationDate>2023-01-01T00:00:00.000Z</CreationDate></Bucket>"))
		.collect();

	format!(
		"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
<ListAllMyBucketsResult xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">\
<Owner><ID>stub-owner</ID><DisplayName>stub</DisplayName></Owner>\
<Buckets>{buckets}</Buckets>\
<ContinuationToken>stub-more-results</ContinuationToken>\
</ListAllMyBucketsResult>"
	)
}
