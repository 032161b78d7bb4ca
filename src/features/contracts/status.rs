//! Contract status filters offered in the service sidebar.

/// Sidebar filter. `All` sends no status to the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ContractStatusFilter {
    #[default]
    All,
    Draft,
    Pending,
    PendingSurveyReview,
    Approved,
    PendingSign,
    Signed,
    Active,
}

impl ContractStatusFilter {
    /// Every filter in sidebar order.
    pub const ALL: [ContractStatusFilter; 8] = [
        ContractStatusFilter::All,
        ContractStatusFilter::Draft,
        ContractStatusFilter::Pending,
        ContractStatusFilter::PendingSurveyReview,
        ContractStatusFilter::Approved,
        ContractStatusFilter::PendingSign,
        ContractStatusFilter::Signed,
        ContractStatusFilter::Active,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ContractStatusFilter::All => "ALL",
            ContractStatusFilter::Draft => "DRAFT",
            ContractStatusFilter::Pending => "PENDING",
            ContractStatusFilter::PendingSurveyReview => "PENDING_SURVEY_REVIEW",
            ContractStatusFilter::Approved => "APPROVED",
            ContractStatusFilter::PendingSign => "PENDING_SIGN",
            ContractStatusFilter::Signed => "SIGNED",
            ContractStatusFilter::Active => "ACTIVE",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContractStatusFilter::All => "Tất cả hợp đồng",
            ContractStatusFilter::Draft => "Bản nháp",
            ContractStatusFilter::Pending => "Đang xử lý",
            ContractStatusFilter::PendingSurveyReview => "Đang khảo sát",
            ContractStatusFilter::Approved => "Đã duyệt",
            ContractStatusFilter::PendingSign => "Chờ ký",
            ContractStatusFilter::Signed => "Đã ký",
            ContractStatusFilter::Active => "Đang hoạt động",
        }
    }

    /// Value of the `status` query parameter, if any.
    pub fn status(self) -> Option<&'static str> {
        match self {
            ContractStatusFilter::All => None,
            other => Some(other.key()),
        }
    }

    /// Case-insensitive lookup; unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|filter| filter.key().eq_ignore_ascii_case(key))
    }
}

/// Readable label for a backend contract status, falling back to the raw value.
pub fn contract_status_label(status: &str) -> &str {
    match ContractStatusFilter::from_key(status) {
        Some(ContractStatusFilter::All) | None => status,
        Some(filter) => filter.label(),
    }
}
