mod persist;
mod recipe;
mod runner;
mod source;

pub use persist::persist_script;
pub use recipe::{CallSpec, Recipe, RecipeOp, RECIPE_SCHEMA_V1};
pub use runner::{build_session, render_recipe};
pub use source::{parse_recipe, read_recipe, read_recipes_from_dir, RECIPE_SUFFIX};

use std::path::PathBuf;

use lsl_core::LslGenError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LslApiError {
    #[error("Failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse recipe {path}: {source}")]
    ParseRecipe {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid recipe schema version \"{found}\", expected \"{expected}\".")]
    InvalidSchemaVersion { expected: String, found: String },
    #[error("No *.recipe.json files under {path}.")]
    SourceEmpty { path: PathBuf },
    #[error("Failed to write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Recipe operation {index} ({op}) failed: {source}")]
    Operation {
        index: usize,
        op: &'static str,
        source: LslGenError,
    },
}

impl LslApiError {
    /// Stable code reported to callers; engine failures keep the engine's code.
    pub fn code(&self) -> &str {
        match self {
            Self::ReadFile { .. } => "API_READ_FILE",
            Self::ParseRecipe { .. } => "API_RECIPE_PARSE",
            Self::InvalidSchemaVersion { .. } => "API_RECIPE_SCHEMA",
            Self::SourceEmpty { .. } => "API_SOURCE_EMPTY",
            Self::WriteFile { .. } => "API_WRITE_FILE",
            Self::Operation { source, .. } => &source.code,
        }
    }
}

#[cfg(test)]
mod lib_tests {
    use super::*;

    #[test]
    fn codes_are_stable_per_variant() {
        let read = LslApiError::ReadFile {
            path: PathBuf::from("a"),
            source: std::io::Error::other("io"),
        };
        assert_eq!(read.code(), "API_READ_FILE");

        let schema = LslApiError::InvalidSchemaVersion {
            expected: RECIPE_SCHEMA_V1.to_string(),
            found: "v0".to_string(),
        };
        assert_eq!(schema.code(), "API_RECIPE_SCHEMA");
        assert!(schema.to_string().contains("lslgen-recipe.v1"));
    }

    #[test]
    fn operation_error_keeps_engine_code() {
        let error = LslApiError::Operation {
            index: 3,
            op: "eventLine",
            source: LslGenError::validation("VALIDATION_STATE_NAME", "bad"),
        };
        assert_eq!(error.code(), "VALIDATION_STATE_NAME");
        assert_eq!(
            error.to_string(),
            "Recipe operation 3 (eventLine) failed: VALIDATION_STATE_NAME: bad"
        );
    }
}
