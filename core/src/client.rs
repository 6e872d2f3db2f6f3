//! Entry point tying the shared `Config` to the resource services.
//!
//! # Design
//! `Client` owns the `Config` and hands out borrowed service views, so every
//! service shares one transport and one set of credentials. Services are plain
//! structs with a fixed operation set; there is no registry and no dynamic
//! dispatch between them.

use crate::config::Config;
use crate::services::{
    AgentsService, CertificatesService, KeyPairsService, RulesService, SitesService,
    VersionService,
};

#[derive(Debug, Clone)]
pub struct Client {
    config: Config,
}

impl Client {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn agents(&self) -> AgentsService<'_> {
        AgentsService::new(&self.config)
    }

    pub fn certificates(&self) -> CertificatesService<'_> {
        CertificatesService::new(&self.config)
    }

    pub fn key_pairs(&self) -> KeyPairsService<'_> {
        KeyPairsService::new(&self.config)
    }

    pub fn rules(&self) -> RulesService<'_> {
        RulesService::new(&self.config)
    }

    pub fn sites(&self) -> SitesService<'_> {
        SitesService::new(&self.config)
    }

    pub fn version(&self) -> VersionService<'_> {
        VersionService::new(&self.config)
    }
}
