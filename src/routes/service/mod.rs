mod contracts;

pub(crate) use contracts::ServiceContractsPage;
