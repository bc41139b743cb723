#![forbid(unsafe_code)]

pub mod source;

pub use source::{
    ContentError, ContentSource, EmbeddedContent, InMemoryContent, YamlFileContent,
    parse_survey_yaml,
};
