//! Utility helpers: document serializers and file access.
pub mod files;
pub mod serialization;

pub use serialization::DocumentSerializer;
pub use serialization::JsonSerializer;
pub use serialization::Serializer;
pub use serialization::YamlSerializer;
