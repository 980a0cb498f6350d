use std::path::{Path, PathBuf};

use lsl_api::{
    persist_script, read_recipe, read_recipes_from_dir, render_recipe, LslApiError,
};
use lsl_core::expand_placeholders;

use crate::{BatchArgs, BuildArgs};

pub(crate) fn run_build(args: BuildArgs) -> Result<i32, LslApiError> {
    print!("{}", build_output(args)?);
    Ok(0)
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<i32, LslApiError> {
    print!("{}", batch_output(args)?);
    Ok(0)
}

/// Runs the recipe and writes the script; the returned stdout text is only
/// produced once every step has succeeded.
pub(crate) fn build_output(args: BuildArgs) -> Result<String, LslApiError> {
    let recipe = read_recipe(Path::new(&args.recipe))?;
    let text = render_recipe(&recipe)?;

    let mut output = String::from("RESULT:OK\n");
    match args.out {
        Some(out) => {
            persist_script(Path::new(&out), &text)?;
            output.push_str(&format!("SCRIPT_OUT:{}\n", out));
        }
        None if args.keep_placeholders => output.push_str(&text),
        None => output.push_str(&expand_placeholders(&text)),
    }
    Ok(output)
}

/// Renders every recipe under the directory before writing any script, so a
/// failing recipe leaves the output directory untouched.
pub(crate) fn batch_output(args: BatchArgs) -> Result<String, LslApiError> {
    let recipes = read_recipes_from_dir(Path::new(&args.recipes_dir))?;
    let out_dir = PathBuf::from(&args.out_dir);

    let mut rendered = Vec::with_capacity(recipes.len());
    for (stem, recipe) in &recipes {
        let text = render_recipe(recipe)?;
        rendered.push((out_dir.join(format!("{}.lsl", stem)), text));
    }

    for (path, text) in &rendered {
        persist_script(path, text)?;
    }

    let mut output = String::from("RESULT:OK\n");
    for (path, _) in &rendered {
        output.push_str(&format!("SCRIPT_OUT:{}\n", path.display()));
    }
    output.push_str(&format!("SCRIPT_COUNT:{}\n", rendered.len()));
    Ok(output)
}
