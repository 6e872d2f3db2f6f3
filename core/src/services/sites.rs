use crate::config::Config;
use crate::http::HttpMethod;
use crate::operation::{Operation, PathTemplate};
use crate::services::{call_empty, call_json, Outcome, NO_BODY};
use crate::types::{SiteView, SitesView};

#[derive(Debug, Clone, Default)]
pub struct GetSitesInput {
    pub page: String,
    pub number_per_page: String,
    pub filter: String,
    pub name: String,
    pub sort_key: String,
    pub order: String,
}

/// Operations on `/sites`.
#[derive(Debug, Clone, Copy)]
pub struct SitesService<'a> {
    config: &'a Config,
}

impl<'a> SitesService<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn get_sites(&self, input: &GetSitesInput) -> Outcome<SitesView> {
        let operation = Operation::new("GetSites", HttpMethod::Get, "/sites")
            .query("page", &input.page)
            .query("numberPerPage", &input.number_per_page)
            .query("filter", &input.filter)
            .query("name", &input.name)
            .query("sortKey", &input.sort_key)
            .query("order", &input.order);
        call_json(self.config, operation, NO_BODY)
    }

    pub fn get_site(&self, id: &str) -> Outcome<SiteView> {
        let path = PathTemplate::new("/sites/{id}").param("id", id).render();
        call_json(self.config, Operation::new("GetSite", HttpMethod::Get, path), NO_BODY)
    }

    pub fn add_site(&self, body: &SiteView) -> Outcome<SiteView> {
        let operation = Operation::new("AddSite", HttpMethod::Post, "/sites");
        call_json(self.config, operation, Some(body))
    }

    pub fn update_site(&self, id: &str, body: &SiteView) -> Outcome<SiteView> {
        let path = PathTemplate::new("/sites/{id}").param("id", id).render();
        let operation = Operation::new("UpdateSite", HttpMethod::Put, path);
        call_json(self.config, operation, Some(body))
    }

    pub fn delete_site(&self, id: &str) -> Outcome<()> {
        let path = PathTemplate::new("/sites/{id}").param("id", id).render();
        let operation = Operation::new("DeleteSite", HttpMethod::Delete, path);
        call_empty(self.config, operation, NO_BODY)
    }
}
