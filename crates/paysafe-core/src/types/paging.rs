use bon::Builder;
use serde::{Deserialize, Serialize};

/// Paging metadata echoed by list endpoints.
///
/// `number_of_records` is the total number of records matched by the query,
/// not the size of the current page. The server is authoritative for page
/// boundaries; list envelopes never slice client-side.
#[derive(Builder, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_records: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_meta_round_trip() {
        let meta = Meta::builder().number_of_records(25).limit(10).page(2).build();

        let wire = serde_json::to_value(meta).unwrap();
        assert_eq!(wire, json!({ "numberOfRecords": 25, "limit": 10, "page": 2 }));

        let back: Meta = serde_json::from_value(wire).unwrap();
        assert_eq!(back, meta);
    }

    #[test]
    fn test_unset_fields_are_omitted() {
        let meta = Meta::builder().limit(10).build();
        assert_eq!(serde_json::to_value(meta).unwrap(), json!({ "limit": 10 }));
    }
}
