use gloo_net::http::{Request, Response};
use gloo_net::Error as GlooError;
use serde::Serialize;

use crate::config;

/// Client for the public Karibu API. The waitlist endpoint is anonymous,
/// so requests carry no credentials.
pub struct Api;

pub struct RequestWrapper {
    request: Request,
}

impl RequestWrapper {
    fn new(path: &str, method: &str) -> Self {
        let full_url = format!("{}{}", config::get_api_url(), path);
        let request = match method {
            "POST" => Request::post(&full_url),
            _ => Request::get(&full_url),
        };

        Self { request }
    }

    /// Add a header to the request
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.request = self.request.header(name, value);
        self
    }

    /// Set the request body as JSON
    pub fn json<T: Serialize>(mut self, data: &T) -> Result<Self, GlooError> {
        self.request = self.request.json(data)?;
        Ok(self)
    }

    pub async fn send(self) -> Result<Response, GlooError> {
        self.request.send().await
    }
}

impl Api {
    /// Create a POST request against the configured API origin
    pub fn post(path: &str) -> RequestWrapper {
        RequestWrapper::new(path, "POST")
    }
}
