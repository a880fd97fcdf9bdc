//! Mapping between [`Record`] and `DynamoDB` attribute maps.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

use moviehub_domain::record::Record;

pub const ATTR_ID: &str = "id";
pub const ATTR_TITLE: &str = "title";
pub const ATTR_YEAR: &str = "year";

/// Build the `PutItem` attribute map: `year` as `N`, `title` and `id` as `S`.
#[must_use]
pub fn to_item(record: &Record) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            ATTR_YEAR.to_string(),
            AttributeValue::N(record.year.to_string()),
        ),
        (
            ATTR_TITLE.to_string(),
            AttributeValue::S(record.title.clone()),
        ),
        (
            ATTR_ID.to_string(),
            AttributeValue::S(record.id.to_string()),
        ),
    ])
}
