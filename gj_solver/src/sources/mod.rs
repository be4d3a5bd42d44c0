pub mod random_source;
pub mod source;
pub mod source_builder;
pub mod text_source;
