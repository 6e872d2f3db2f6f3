use crate::config::Config;
use crate::http::HttpMethod;
use crate::operation::{Operation, PathTemplate};
use crate::services::{call_empty, call_json, call_text, Outcome, NO_BODY};
use crate::types::{CertificateView, CertificatesView};

#[derive(Debug, Clone, Default)]
pub struct GetCertificatesInput {
    pub page: String,
    pub number_per_page: String,
    pub filter: String,
    pub alias: String,
    pub sort_key: String,
    pub order: String,
}

/// Operations on `/certificates`.
#[derive(Debug, Clone, Copy)]
pub struct CertificatesService<'a> {
    config: &'a Config,
}

impl<'a> CertificatesService<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn get_certificates(&self, input: &GetCertificatesInput) -> Outcome<CertificatesView> {
        let operation = Operation::new("GetCertificates", HttpMethod::Get, "/certificates")
            .query("page", &input.page)
            .query("numberPerPage", &input.number_per_page)
            .query("filter", &input.filter)
            .query("alias", &input.alias)
            .query("sortKey", &input.sort_key)
            .query("order", &input.order);
        call_json(self.config, operation, NO_BODY)
    }

    pub fn get_certificate(&self, id: &str) -> Outcome<CertificateView> {
        let path = PathTemplate::new("/certificates/{id}").param("id", id).render();
        let operation = Operation::new("GetCertificate", HttpMethod::Get, path);
        call_json(self.config, operation, NO_BODY)
    }

    pub fn delete_certificate(&self, id: &str) -> Outcome<()> {
        let path = PathTemplate::new("/certificates/{id}").param("id", id).render();
        let operation = Operation::new("DeleteCertificate", HttpMethod::Delete, path);
        call_empty(self.config, operation, NO_BODY)
    }

    /// PEM-encoded certificate, returned exactly as the server sent it.
    pub fn export_certificate_file(&self, id: &str) -> Outcome<String> {
        let path = PathTemplate::new("/certificates/{id}/file").param("id", id).render();
        let operation = Operation::new("ExportCertificateFile", HttpMethod::Get, path);
        call_text(self.config, operation)
    }
}
