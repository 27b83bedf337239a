pub const SPL_TRANSFER_ACTIVITY: &str = "ACTIVITY_SPL_TRANSFER";
pub const SORT_BY: &str = "block_time";
pub const SORT_ORDER: &str = "desc";

/// A single page request against the account transfer endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    pub address: String,
    pub from_time: i64,
    pub to_time: i64,
    pub page: u32,
    pub page_size: u32,
}

impl TransferRequest {
    pub fn new(address: &str, from_time: i64, to_time: i64, page: u32, page_size: u32) -> Self {
        TransferRequest {
            address: address.to_string(),
            from_time,
            to_time,
            page,
            page_size,
        }
    }

    pub fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("address", self.address.clone()),
            ("activity_type[]", SPL_TRANSFER_ACTIVITY.to_string()),
            ("from_time", self.from_time.to_string()),
            ("to_time", self.to_time.to_string()),
            ("page", self.page.to_string()),
            ("page_size", self.page_size.to_string()),
            ("sort_by", SORT_BY.to_string()),
            ("sort_order", SORT_ORDER.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_sorts_newest_first() {
        let request = TransferRequest::new("pool", 10, 20, 3, 100);
        let query = request.query();
        assert!(query.contains(&("page", "3".to_string())));
        assert!(query.contains(&("page_size", "100".to_string())));
        assert!(query.contains(&("activity_type[]", SPL_TRANSFER_ACTIVITY.to_string())));
        assert!(query.contains(&("sort_order", "desc".to_string())));
        assert!(query.contains(&("from_time", "10".to_string())));
        assert!(query.contains(&("to_time", "20".to_string())));
    }
}
