//! Contract list query (filter plus page), shared between the service sidebar
//! and the contract list. Both live in one signal so a filter change and its
//! page reset reach the list as a single update.

use crate::features::contracts::{status::ContractStatusFilter, types::ContractQuery};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ContractFilterContext {
    pub query: RwSignal<ContractQuery>,
}

impl ContractFilterContext {
    fn new() -> Self {
        Self {
            query: RwSignal::new(ContractQuery::default()),
        }
    }

    pub fn filter(&self) -> ContractStatusFilter {
        self.query.with(|query| query.filter)
    }

    /// Selects a filter, going back to the first page.
    pub fn select(&self, filter: ContractStatusFilter) {
        self.query.update(|query| *query = query.with_filter(filter));
    }
}

/// Provides a fresh query on the first page of [`ContractStatusFilter::All`].
pub fn provide_contract_filter() -> ContractFilterContext {
    let context = ContractFilterContext::new();
    provide_context(context);
    context
}

/// Returns the shared query, or a detached one outside the service portal.
pub fn use_contract_filter() -> ContractFilterContext {
    use_context::<ContractFilterContext>().unwrap_or_else(ContractFilterContext::new)
}
