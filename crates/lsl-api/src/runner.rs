use lsl_compose::Session;
use lsl_core::{encode_placeholders, LslGenError};

use crate::{LslApiError, Recipe, RecipeOp};

/// Applies every operation of `recipe` to a fresh session, stopping at the
/// first failure.
pub fn build_session(recipe: &Recipe) -> Result<Session, LslApiError> {
    let mut session = Session::new();
    for (index, operation) in recipe.operations.iter().enumerate() {
        apply_operation(&mut session, operation).map_err(|source| LslApiError::Operation {
            index,
            op: operation.op_name(),
            source,
        })?;
        log::debug!("applied recipe operation {} ({})", index, operation.op_name());
    }
    Ok(session)
}

/// The document produced by `recipe`, placeholders left in place.
pub fn render_recipe(recipe: &Recipe) -> Result<String, LslApiError> {
    Ok(build_session(recipe)?.document())
}

fn apply_operation(session: &mut Session, operation: &RecipeOp) -> Result<(), LslGenError> {
    match operation {
        RecipeOp::Event {
            state,
            event,
            params: Some(params),
        } => {
            let idents = params.iter().map(String::as_str).collect::<Vec<_>>();
            session.register_event(state, *event, &idents)
        }
        RecipeOp::Event {
            state,
            event,
            params: None,
        } => session.register_event_with_defaults(state, *event),
        RecipeOp::EventLine { state, event, line } => {
            session.insert_event_line(state, *event, &encode_placeholders(line))
        }
        RecipeOp::Call { state, event, call } => {
            session.insert_call(state, *event, &call.to_call()?)
        }
        RecipeOp::Function { name, params } => session.define_function(name, params).map(|_| ()),
        RecipeOp::FunctionLine { name, line } => {
            session.insert_function_line(name, &encode_placeholders(line))
        }
        RecipeOp::FunctionBlankLine { name } => session.add_blank_line(name),
    }
}

#[cfg(test)]
mod runner_tests {
    use lsl_core::{expand_placeholders, EventKind, Missing};

    use super::*;
    use crate::{CallSpec, RECIPE_SCHEMA_V1};

    fn recipe(operations: Vec<RecipeOp>) -> Recipe {
        Recipe {
            schema_version: RECIPE_SCHEMA_V1.to_string(),
            operations,
        }
    }

    #[test]
    fn plain_lines_are_encoded_before_insertion() {
        let text = render_recipe(&recipe(vec![
            RecipeOp::Event {
                state: String::new(),
                event: EventKind::Listen,
                params: Some(vec![
                    "channel".to_string(),
                    "name".to_string(),
                    "id".to_string(),
                    "message".to_string(),
                ]),
            },
            RecipeOp::EventLine {
                state: "default".to_string(),
                event: EventKind::Listen,
                line: "if (message == \"red\") { llSetColor(<1,0,0>, ALL_SIDES); }".to_string(),
            },
        ]))
        .expect("recipe should run");

        assert!(text.contains(
            "        if (message == __dquote__red__dquote__) __obrace__ llSetColor(<1,0,0>, ALL_SIDES); __cbrace__\n"
        ));
        assert!(expand_placeholders(&text)
            .contains("        if (message == \"red\") { llSetColor(<1,0,0>, ALL_SIDES); }\n"));
    }

    #[test]
    fn functions_and_calls_render_in_order() {
        let text = render_recipe(&recipe(vec![
            RecipeOp::Event {
                state: String::new(),
                event: EventKind::StateEntry,
                params: None,
            },
            RecipeOp::Call {
                state: String::new(),
                event: EventKind::StateEntry,
                call: CallSpec::Say {
                    channel: 0,
                    message: "ready".to_string(),
                },
            },
            RecipeOp::Function {
                name: "Show".to_string(),
                params: vec![vec!["integer value".to_string()]],
            },
            RecipeOp::FunctionLine {
                name: "Show".to_string(),
                line: "llOwnerSay((string)value);".to_string(),
            },
            RecipeOp::FunctionBlankLine {
                name: "Show".to_string(),
            },
        ]))
        .expect("recipe should run");

        assert_eq!(
            text,
            "Show(integer value)\n\
             {\n    \
             llOwnerSay((string)value);\n\
             \n\
             }  // End of 'Show' function\n\
             \n\
             default\n\
             {\n    \
             state_entry()\n    \
             {\n        \
             llSay(0, __dquote__ready__dquote__);\n    \
             }  // End of 'state_entry' event\n\
             \n\
             }  // End of 'default' state\n\
             \n"
        );
    }

    #[test]
    fn failing_operation_reports_its_index() {
        let error = build_session(&recipe(vec![
            RecipeOp::Event {
                state: String::new(),
                event: EventKind::Timer,
                params: None,
            },
            RecipeOp::EventLine {
                state: "missing".to_string(),
                event: EventKind::Timer,
                line: "x();".to_string(),
            },
        ]))
        .expect_err("insert should fail");

        match error {
            LslApiError::Operation { index, op, source } => {
                assert_eq!(index, 1);
                assert_eq!(op, "eventLine");
                assert_eq!(source.missing(), Some(Missing::State));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn raw_call_text_is_plain_lsl() {
        let text = render_recipe(&recipe(vec![
            RecipeOp::Event {
                state: String::new(),
                event: EventKind::StateEntry,
                params: None,
            },
            RecipeOp::Call {
                state: String::new(),
                event: EventKind::StateEntry,
                call: CallSpec::Raw {
                    text: "llOwnerSay(\"hi\");".to_string(),
                },
            },
        ]))
        .expect("raw call should run");

        assert!(text.contains("        llOwnerSay(__dquote__hi__dquote__);\n"));
        assert!(expand_placeholders(&text).contains("        llOwnerSay(\"hi\");\n"));
    }

    #[test]
    fn invalid_call_literal_fails_the_operation() {
        let error = build_session(&recipe(vec![
            RecipeOp::Event {
                state: String::new(),
                event: EventKind::Touch,
                params: None,
            },
            RecipeOp::Call {
                state: String::new(),
                event: EventKind::Touch,
                call: CallSpec::SetColor {
                    color: "red".to_string(),
                    face: 0,
                },
            },
        ]))
        .expect_err("call should fail");
        assert_eq!(error.code(), "VALIDATION_VECTOR");
    }
}
