//! Forum record types and the schema registry.
//!
//! Each record is a direct mapping to a table row and declares the table it
//! lives in through [`Record::SCHEMA`].

pub mod basic_info;
pub mod browse_record;
pub mod codec;
pub mod consumption_record;
pub mod favorites;
pub mod front_conf;
pub mod node;
pub mod notification;
pub mod plane;
pub mod poster;
pub mod reply;
pub mod sensitive_word;
pub mod session;
pub mod tab;
pub mod topic;
pub mod translator;
pub mod upload_file_record;

pub use basic_info::BasicInfo;
pub use browse_record::BrowseRecord;
pub use codec::{IntFlag, WideText};
pub use consumption_record::ConsumptionRecord;
pub use favorites::Favorites;
pub use front_conf::FrontConf;
pub use node::Node;
pub use notification::Notification;
pub use plane::Plane;
pub use poster::Poster;
pub use reply::Reply;
pub use sensitive_word::SensitiveWord;
pub use session::Session;
pub use tab::Tab;
pub use topic::Topic;
pub use translator::Translator;
pub use upload_file_record::UploadFileRecord;

use crate::schema::TableSchema;

/// A row type with a declared storage schema.
pub trait Record {
    const SCHEMA: TableSchema;
}

/// Every table the forum needs before it can serve requests.
pub const REGISTRY: &[TableSchema] = &[
    Session::SCHEMA,
    Topic::SCHEMA,
    Reply::SCHEMA,
    Poster::SCHEMA,
    Translator::SCHEMA,
    Node::SCHEMA,
    Favorites::SCHEMA,
    Tab::SCHEMA,
    Notification::SCHEMA,
    BasicInfo::SCHEMA,
    Plane::SCHEMA,
    ConsumptionRecord::SCHEMA,
    BrowseRecord::SCHEMA,
    UploadFileRecord::SCHEMA,
    SensitiveWord::SCHEMA,
    FrontConf::SCHEMA,
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_registry_schemas_are_valid() {
        for schema in REGISTRY {
            schema
                .validate()
                .unwrap_or_else(|e| panic!("{} is invalid: {}", schema.name, e));
        }
    }

    #[test]
    fn test_registry_table_names_are_unique() {
        let names: HashSet<&str> = REGISTRY.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), REGISTRY.len());
        assert_eq!(REGISTRY.len(), 16);
    }

    #[test]
    fn test_every_table_has_a_primary_key() {
        for schema in REGISTRY {
            assert!(
                schema.primary_key().count() > 0,
                "{} has no primary key",
                schema.name
            );
        }
    }

    #[test]
    fn test_session_key_is_fixed_length() {
        let key = Session::SCHEMA.column("session_key").unwrap();
        assert_eq!(key.ty, crate::schema::ColumnType::Char(64));
        assert!(key.primary_key);
    }
}
