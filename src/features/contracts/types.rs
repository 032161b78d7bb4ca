//! Contract list payloads.

use crate::{app_lib::query::with_query, features::contracts::status::ContractStatusFilter};
use serde::Deserialize;

/// Rows requested per page.
pub const PAGE_SIZE: u32 = 10;

/// Spring Data page envelope.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.number > 0
    }

    pub fn has_next(&self) -> bool {
        self.number + 1 < self.total_pages
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContractSummary {
    pub id: i64,
    #[serde(default)]
    pub contract_number: Option<String>,
    #[serde(default)]
    pub contract_status: Option<String>,
    #[serde(default)]
    pub customer_code: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub service_staff_name: Option<String>,
    #[serde(default)]
    pub technical_staff_name: Option<String>,
}

/// Page and filter the contract list is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContractQuery {
    pub page: u32,
    pub filter: ContractStatusFilter,
}

impl ContractQuery {
    /// Switches the filter. A new filter always starts from the first page;
    /// re-selecting the current one keeps the page.
    pub fn with_filter(self, filter: ContractStatusFilter) -> Self {
        if filter == self.filter {
            self
        } else {
            Self { page: 0, filter }
        }
    }

    pub fn next_page(self) -> Self {
        Self {
            page: self.page + 1,
            ..self
        }
    }

    pub fn previous_page(self) -> Self {
        Self {
            page: self.page.saturating_sub(1),
            ..self
        }
    }

    pub fn path(&self) -> String {
        contracts_path(self.page, self.filter)
    }
}

/// Path and query for one page of contracts under `filter`.
pub fn contracts_path(page: u32, filter: ContractStatusFilter) -> String {
    let page = page.to_string();
    let size = PAGE_SIZE.to_string();
    with_query(
        "/service/contracts",
        &[
            ("page", page.as_str()),
            ("size", size.as_str()),
            ("status", filter.status().unwrap_or_default()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contracts_path_omits_status_for_all() {
        assert_eq!(
            contracts_path(0, ContractStatusFilter::All),
            "/service/contracts?page=0&size=10"
        );
        assert_eq!(
            contracts_path(2, ContractStatusFilter::PendingSurveyReview),
            "/service/contracts?page=2&size=10&status=PENDING_SURVEY_REVIEW"
        );
    }

    #[test]
    fn changing_filter_resets_page_in_one_step() {
        let query = ContractQuery::default().next_page().next_page();
        assert_eq!(query.page, 2);

        let filtered = query.with_filter(ContractStatusFilter::Signed);
        assert_eq!(
            filtered,
            ContractQuery {
                page: 0,
                filter: ContractStatusFilter::Signed
            }
        );
        assert_eq!(filtered.path(), "/service/contracts?page=0&size=10&status=SIGNED");
    }

    #[test]
    fn reselecting_filter_keeps_page() {
        let query = ContractQuery::default()
            .with_filter(ContractStatusFilter::Active)
            .next_page();
        assert_eq!(query.with_filter(ContractStatusFilter::Active), query);
    }

    #[test]
    fn previous_page_stops_at_first() {
        assert_eq!(ContractQuery::default().previous_page().page, 0);
        assert_eq!(ContractQuery::default().next_page().previous_page().page, 0);
    }

    #[test]
    fn page_tolerates_missing_fields() {
        let page: Page<ContractSummary> = serde_json::from_str(
            r#"{"content":[{"id":3,"contractNumber":"HD-003","contractStatus":"ACTIVE"}],"totalPages":2}"#,
        )
        .expect("page");

        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].contract_number.as_deref(), Some("HD-003"));
        assert_eq!(page.content[0].customer_name, None);
        assert!(!page.has_previous());
        assert!(page.has_next());
    }

    #[test]
    fn last_page_has_no_next() {
        let page: Page<ContractSummary> =
            serde_json::from_str(r#"{"content":[],"number":1,"totalPages":2}"#).expect("page");
        assert!(page.has_previous());
        assert!(!page.has_next());
    }
}
