use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::{LslApiError, Recipe, RECIPE_SCHEMA_V1};

pub const RECIPE_SUFFIX: &str = ".recipe.json";

/// Parses recipe JSON; `path` only labels errors.
pub fn parse_recipe(path: &Path, raw: &str) -> Result<Recipe, LslApiError> {
    let parsed: Recipe = serde_json::from_str(raw).map_err(|source| LslApiError::ParseRecipe {
        path: path.to_path_buf(),
        source,
    })?;

    if parsed.schema_version != RECIPE_SCHEMA_V1 {
        return Err(LslApiError::InvalidSchemaVersion {
            expected: RECIPE_SCHEMA_V1.to_string(),
            found: parsed.schema_version,
        });
    }

    Ok(parsed)
}

pub fn read_recipe(recipe_path: &Path) -> Result<Recipe, LslApiError> {
    let raw = fs::read_to_string(recipe_path).map_err(|source| LslApiError::ReadFile {
        path: recipe_path.to_path_buf(),
        source,
    })?;
    parse_recipe(recipe_path, &raw)
}

/// Every `*.recipe.json` under `recipes_dir`, keyed by its relative path with
/// the suffix removed. A missing or unreadable directory is a read error.
pub fn read_recipes_from_dir(recipes_dir: &Path) -> Result<BTreeMap<String, Recipe>, LslApiError> {
    let mut recipes = BTreeMap::new();

    for entry in WalkDir::new(recipes_dir).follow_links(false) {
        let entry = entry.map_err(|error| LslApiError::ReadFile {
            path: error
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| recipes_dir.to_path_buf()),
            source: error.into(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path
            .strip_prefix(recipes_dir)
            .expect("walkdir path should start with recipes dir")
            .to_string_lossy()
            .replace('\\', "/");
        let Some(stem) = relative.strip_suffix(RECIPE_SUFFIX) else {
            continue;
        };

        let recipe = read_recipe(path)?;
        recipes.insert(stem.to_string(), recipe);
    }

    if recipes.is_empty() {
        return Err(LslApiError::SourceEmpty {
            path: recipes_dir.to_path_buf(),
        });
    }

    Ok(recipes)
}

#[cfg(test)]
mod source_tests {
    use super::*;

    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir(name: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time should move forward")
            .as_nanos();
        std::env::temp_dir().join(format!("lsl-api-{}-{}", name, nanos))
    }

    fn write_file(path: &Path, content: &str) {
        let parent = path.parent().expect("path should have parent");
        fs::create_dir_all(parent).expect("parent dir should be created");
        fs::write(path, content).expect("file should be written");
    }

    const MINIMAL: &str = r#"{"schemaVersion":"lslgen-recipe.v1","operations":[]}"#;

    #[test]
    fn read_recipes_from_dir_collects_recipe_files() {
        let root = temp_dir("recipes");
        write_file(&root.join("color.recipe.json"), MINIMAL);
        write_file(&root.join("nested/door.recipe.json"), MINIMAL);
        write_file(&root.join("notes.json"), "{}");

        let recipes = read_recipes_from_dir(&root).expect("scan should pass");
        assert_eq!(
            recipes.keys().cloned().collect::<Vec<_>>(),
            vec!["color".to_string(), "nested/door".to_string()]
        );
    }

    #[test]
    fn read_recipes_from_dir_fails_when_empty() {
        let root = temp_dir("empty-recipes");
        write_file(&root.join("ignore.txt"), "skip");

        let error = read_recipes_from_dir(&root).expect_err("empty source should fail");
        assert!(matches!(error, LslApiError::SourceEmpty { .. }));
        assert_eq!(error.code(), "API_SOURCE_EMPTY");
    }

    #[test]
    fn read_recipes_from_dir_reports_missing_dir_as_read_error() {
        let root = temp_dir("missing-recipes");

        let error = read_recipes_from_dir(&root).expect_err("missing dir should fail");
        assert!(matches!(error, LslApiError::ReadFile { .. }));
        assert_eq!(error.code(), "API_READ_FILE");
    }

    #[test]
    fn read_recipe_reports_read_parse_and_schema_errors() {
        let root = temp_dir("recipe-errors");
        fs::create_dir_all(&root).expect("root should be created");

        let missing = read_recipe(&root.join("missing.recipe.json")).expect_err("read should fail");
        assert!(matches!(missing, LslApiError::ReadFile { .. }));

        let bad_json = root.join("bad.recipe.json");
        write_file(&bad_json, "{");
        let parse_error = read_recipe(&bad_json).expect_err("parse should fail");
        assert!(matches!(parse_error, LslApiError::ParseRecipe { .. }));

        let bad_schema = root.join("old.recipe.json");
        write_file(&bad_schema, r#"{"schemaVersion":"v0"}"#);
        let schema_error = read_recipe(&bad_schema).expect_err("schema should fail");
        assert_eq!(schema_error.code(), "API_RECIPE_SCHEMA");
    }

    #[test]
    fn read_recipe_parses_valid_json() {
        let root = temp_dir("recipe-ok");
        let path = root.join("ok.recipe.json");
        write_file(
            &path,
            r#"{
  "schemaVersion": "lslgen-recipe.v1",
  "operations": [{"op":"event","event":"touch_start"}]
}"#,
        );
        let recipe = read_recipe(&path).expect("recipe should parse");
        assert_eq!(recipe.operations.len(), 1);
    }
}
