use crate::error::Result;
use crate::model::PhotoAsset;
use log::{debug, warn};
use reqwest::blocking::Client;
use std::io::{ErrorKind, Read, Write};
use std::time::Duration;

const CHUNK_SIZE: usize = 8 * 1024;

/// Blocking HTTP client for the recipe page and its photo.
///
/// No timeout and no retries: a request runs until it completes or fails.
pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder().timeout(None::<Duration>).build()?;

        Ok(Self { client })
    }

    /// GET `url` and return the body as text.
    ///
    /// A non-success status is logged together with the body, and the body is
    /// still returned. Only network-level failures are errors.
    pub fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            warn!("GET request failed on url {url} with status {status}, body: {body}");
        } else {
            debug!("Fetched {} bytes from {}", body.len(), url);
        }

        Ok(body)
    }

    /// Stream the body of `url` into `sink`, one chunk at a time.
    ///
    /// Content type and size are not checked. Returns the number of bytes written.
    pub fn download<W: Write>(&self, url: &str, sink: &mut W) -> Result<u64> {
        let mut response = self.client.get(url).send()?;
        if !response.status().is_success() {
            warn!("GET request for {url} returned status {}", response.status());
        }

        let mut buf = [0u8; CHUNK_SIZE];
        let mut written = 0u64;
        loop {
            match response.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => {
                    sink.write_all(&buf[..n])?;
                    written += n as u64;
                }
                Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        sink.flush()?;

        debug!("Downloaded {} bytes from {}", written, url);
        Ok(written)
    }

    /// Download the recipe photo into memory.
    pub fn download_photo(&self, url: &str) -> Result<PhotoAsset> {
        let mut bytes = Vec::new();
        self.download(url, &mut bytes)?;

        Ok(PhotoAsset {
            url: url.to_string(),
            bytes,
        })
    }
}
