use crate::config::Config;
use crate::http::HttpMethod;
use crate::operation::{Operation, PathTemplate};
use crate::services::{call_empty, call_json, Outcome, NO_BODY};
use crate::types::{RuleView, RulesView};

#[derive(Debug, Clone, Default)]
pub struct GetRulesInput {
    pub page: String,
    pub number_per_page: String,
    pub filter: String,
    pub name: String,
    pub sort_key: String,
    pub order: String,
}

/// Operations on `/rules`.
#[derive(Debug, Clone, Copy)]
pub struct RulesService<'a> {
    config: &'a Config,
}

impl<'a> RulesService<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn get_rules(&self, input: &GetRulesInput) -> Outcome<RulesView> {
        let operation = Operation::new("GetRules", HttpMethod::Get, "/rules")
            .query("page", &input.page)
            .query("numberPerPage", &input.number_per_page)
            .query("filter", &input.filter)
            .query("name", &input.name)
            .query("sortKey", &input.sort_key)
            .query("order", &input.order);
        call_json(self.config, operation, NO_BODY)
    }

    pub fn get_rule(&self, id: &str) -> Outcome<RuleView> {
        let path = PathTemplate::new("/rules/{id}").param("id", id).render();
        call_json(self.config, Operation::new("GetRule", HttpMethod::Get, path), NO_BODY)
    }

    pub fn add_rule(&self, body: &RuleView) -> Outcome<RuleView> {
        let operation = Operation::new("AddRule", HttpMethod::Post, "/rules");
        call_json(self.config, operation, Some(body))
    }

    pub fn update_rule(&self, id: &str, body: &RuleView) -> Outcome<RuleView> {
        let path = PathTemplate::new("/rules/{id}").param("id", id).render();
        let operation = Operation::new("UpdateRule", HttpMethod::Put, path);
        call_json(self.config, operation, Some(body))
    }

    pub fn delete_rule(&self, id: &str) -> Outcome<()> {
        let path = PathTemplate::new("/rules/{id}").param("id", id).render();
        let operation = Operation::new("DeleteRule", HttpMethod::Delete, path);
        call_empty(self.config, operation, NO_BODY)
    }
}
