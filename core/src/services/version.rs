use crate::config::Config;
use crate::http::HttpMethod;
use crate::operation::Operation;
use crate::services::{call_json, Outcome, NO_BODY};
use crate::types::VersionDocView;

#[derive(Debug, Clone, Copy)]
pub struct VersionService<'a> {
    config: &'a Config,
}

impl<'a> VersionService<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn get_version(&self) -> Outcome<VersionDocView> {
        let operation = Operation::new("GetVersion", HttpMethod::Get, "/version");
        call_json(self.config, operation, NO_BODY)
    }
}
