//! Catalog Adapters
//!
//! - **YamlQuestionReader** - Question catalog loaded from a YAML file

mod yaml_question_reader;

pub use yaml_question_reader::YamlQuestionReader;
