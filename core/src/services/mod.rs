//! Resource services.
//!
//! Each service borrows the shared `Config` and turns its typed inputs into an
//! `Operation`: path placeholders substituted, every known query parameter
//! passed through (unset ones as `""`). The engine does the rest.

mod agents;
mod certificates;
mod key_pairs;
mod rules;
mod sites;
mod version;

pub use agents::{AgentsService, GetAgentsInput};
pub use certificates::{CertificatesService, GetCertificatesInput};
pub use key_pairs::KeyPairsService;
pub use rules::{GetRulesInput, RulesService};
pub use sites::{GetSitesInput, SitesService};
pub use version::VersionService;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::error::ApiError;
use crate::http::HttpResponse;
use crate::operation::Operation;
use crate::request::{build_request, Request};

/// Result of a service call together with the raw response, which is kept
/// even when the call failed so status and headers stay inspectable.
///
/// `Ok(None)` means the call succeeded without a payload (empty body, or an
/// operation that returns nothing).
#[derive(Debug)]
pub struct Outcome<T> {
    pub result: Result<Option<T>, ApiError>,
    pub response: Option<HttpResponse>,
}

impl<T> Outcome<T> {
    pub fn into_result(self) -> Result<Option<T>, ApiError> {
        self.result
    }

    pub fn status(&self) -> Option<u16> {
        self.response.as_ref().map(|r| r.status)
    }
}

pub(crate) const NO_BODY: Option<&()> = None;

fn run(request: Result<Request<'_>, ApiError>) -> (Result<(), ApiError>, Option<HttpResponse>) {
    match request {
        Ok(mut request) => {
            let result = request.send();
            (result, request.into_response())
        }
        Err(err) => (Err(err), None),
    }
}

/// Send and decode a JSON response into `T`.
pub(crate) fn call_json<T, B>(config: &Config, operation: Operation, body: Option<&B>) -> Outcome<T>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    let mut output: Option<T> = None;
    let (result, response) = run(build_request(config, operation, body, Some(&mut output)));
    Outcome {
        result: result.map(|()| output),
        response,
    }
}

/// Send and keep the response body as text, untouched.
pub(crate) fn call_text(config: &Config, operation: Operation) -> Outcome<String> {
    let mut output = String::new();
    let (result, response) = run(build_request(config, operation, NO_BODY, Some(&mut output)));
    Outcome {
        result: result.map(|()| Some(output)),
        response,
    }
}

/// Send and keep the response body as raw bytes.
pub(crate) fn call_bytes<B>(config: &Config, operation: Operation, body: Option<&B>) -> Outcome<Vec<u8>>
where
    B: Serialize + ?Sized,
{
    let mut output = Vec::new();
    let (result, response) = run(build_request(config, operation, body, Some(&mut output)));
    Outcome {
        result: result.map(|()| Some(output)),
        response,
    }
}

/// Send and ignore any response body.
pub(crate) fn call_empty<B>(config: &Config, operation: Operation, body: Option<&B>) -> Outcome<()>
where
    B: Serialize + ?Sized,
{
    let (result, response) = run(build_request(config, operation, body, None));
    Outcome {
        result: result.map(|()| None),
        response,
    }
}
