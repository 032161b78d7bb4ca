use crate::{
    app_lib::{AppError, api::get_json},
    features::contracts::types::{ContractQuery, ContractSummary, Page},
};
use secrecy::SecretString;

/// Loads one page of the service staff's contracts.
pub async fn list_contracts(
    query: ContractQuery,
    token: &SecretString,
) -> Result<Page<ContractSummary>, AppError> {
    get_json(&query.path(), Some(token)).await
}
