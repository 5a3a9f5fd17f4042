//! Helpers shared by the importer and the dialect serializers.

pub mod markup;
pub mod text;
