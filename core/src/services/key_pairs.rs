use crate::config::Config;
use crate::http::HttpMethod;
use crate::operation::{Operation, PathTemplate};
use crate::services::{call_bytes, Outcome};
use crate::types::ExportParameters;

/// Operations on `/keyPairs`.
#[derive(Debug, Clone, Copy)]
pub struct KeyPairsService<'a> {
    config: &'a Config,
}

impl<'a> KeyPairsService<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// PKCS#12 archive of the key pair, as raw bytes.
    pub fn export_key_pair(&self, id: &str, body: &ExportParameters) -> Outcome<Vec<u8>> {
        let path = PathTemplate::new("/keyPairs/{id}/pkcs12").param("id", id).render();
        let operation = Operation::new("ExportKeyPair", HttpMethod::Post, path);
        call_bytes(self.config, operation, Some(body))
    }
}
