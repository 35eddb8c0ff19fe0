use std::{sync::Arc, time::Duration};

use reqwest::{blocking::Client, redirect::Policy};

use crate::error::{EdumapError, Result};

use super::source::DocumentSource;

const USER_AGENT: &str = concat!("edumap/", env!("CARGO_PKG_VERSION"));

/// Document fetched over HTTP(S) with a blocking client.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: Client,
}

impl HttpSource {
    /// `timeout` of `None` waits indefinitely, like a browser fetch.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let url = url.into();
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(Policy::limited(10))
            .timeout(timeout)
            .build()
            .map_err(|e| EdumapError::fetch(url.clone(), e))?;
        Ok(Self { url, client })
    }
}

impl DocumentSource for HttpSource {
    fn fetch(&self) -> Result<Arc<[u8]>> {
        let response = self.client.get(&self.url).send()
            .and_then(|response| response.error_for_status())
            .map_err(|e| EdumapError::fetch(self.describe(), e))?;
        let bytes = response.bytes()
            .map_err(|e| EdumapError::fetch(self.describe(), e))?;
        Ok(Arc::from(bytes.as_ref()))
    }

    fn describe(&self) -> String { self.url.clone() }
}
