use crate::config::Config;
use crate::http::HttpMethod;
use crate::operation::{Operation, PathTemplate};
use crate::services::{call_empty, call_json, call_text, Outcome, NO_BODY};
use crate::types::{AgentView, AgentsView};

/// Query parameters for `get_agents`. Empty strings are not sent.
#[derive(Debug, Clone, Default)]
pub struct GetAgentsInput {
    pub page: String,
    pub number_per_page: String,
    pub filter: String,
    pub name: String,
    pub sort_key: String,
    pub order: String,
}

/// Operations on `/agents`.
#[derive(Debug, Clone, Copy)]
pub struct AgentsService<'a> {
    config: &'a Config,
}

impl<'a> AgentsService<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn get_agents(&self, input: &GetAgentsInput) -> Outcome<AgentsView> {
        let operation = Operation::new("GetAgents", HttpMethod::Get, "/agents")
            .query("page", &input.page)
            .query("numberPerPage", &input.number_per_page)
            .query("filter", &input.filter)
            .query("name", &input.name)
            .query("sortKey", &input.sort_key)
            .query("order", &input.order);
        call_json(self.config, operation, NO_BODY)
    }

    pub fn get_agent(&self, id: &str) -> Outcome<AgentView> {
        let path = PathTemplate::new("/agents/{id}").param("id", id).render();
        let operation = Operation::new("GetAgent", HttpMethod::Get, path);
        call_json(self.config, operation, NO_BODY)
    }

    pub fn add_agent(&self, body: &AgentView) -> Outcome<AgentView> {
        let operation = Operation::new("AddAgent", HttpMethod::Post, "/agents");
        call_json(self.config, operation, Some(body))
    }

    pub fn update_agent(&self, id: &str, body: &AgentView) -> Outcome<AgentView> {
        let path = PathTemplate::new("/agents/{id}").param("id", id).render();
        let operation = Operation::new("UpdateAgent", HttpMethod::Put, path);
        call_json(self.config, operation, Some(body))
    }

    pub fn delete_agent(&self, id: &str) -> Outcome<()> {
        let path = PathTemplate::new("/agents/{id}").param("id", id).render();
        let operation = Operation::new("DeleteAgent", HttpMethod::Delete, path);
        call_empty(self.config, operation, NO_BODY)
    }

    /// Download the agent properties file. `shared_secret_ids` is a
    /// comma-separated id list.
    pub fn get_agent_file(&self, agent_id: &str, shared_secret_ids: &str) -> Outcome<String> {
        let path = PathTemplate::new("/agents/{agentId}/config/{sharedSecretIds}")
            .param("agentId", agent_id)
            .param("sharedSecretIds", shared_secret_ids)
            .render();
        let operation = Operation::new("GetAgentFile", HttpMethod::Get, path);
        call_text(self.config, operation)
    }
}
