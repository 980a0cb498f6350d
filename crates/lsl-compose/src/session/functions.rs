use lsl_core::{is_identifier, LslGenError, Missing, Param};

use super::{body_chunk, Closing, FunctionBlock, Session};

const FUNCTION_BODY_INDENT: usize = 1;

impl Session {
    /// Emits an empty function in front of all existing content and returns its
    /// name. Each group holds `"<type> <identifier>"` pairs; groups are
    /// flattened in order.
    pub fn define_function<G, S>(
        &mut self,
        name: &str,
        param_groups: &[G],
    ) -> Result<String, LslGenError>
    where
        G: AsRef<[S]>,
        S: AsRef<str>,
    {
        let params = param_groups
            .iter()
            .flat_map(|group| group.as_ref().iter())
            .map(|pair| Param::parse_pair(pair.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        self.define_function_params(name, params)
    }

    pub fn define_function_params(
        &mut self,
        name: &str,
        params: Vec<Param>,
    ) -> Result<String, LslGenError> {
        let name = name.trim();
        if !is_identifier(name) {
            return Err(LslGenError::validation(
                "VALIDATION_FUNCTION_NAME",
                format!("Function name \"{}\" is not a valid identifier.", name),
            ));
        }
        if self.functions.iter().any(|block| block.name == name) {
            return Err(LslGenError::validation(
                "VALIDATION_FUNCTION_DUPLICATE",
                format!("Function '{}' is already defined.", name),
            ));
        }

        self.functions.insert(
            0,
            FunctionBlock {
                name: name.to_string(),
                params,
                body: Vec::new(),
                closing: Closing::Sentinel,
            },
        );
        Ok(name.to_string())
    }

    /// Adds `line` to the body of function `name`, directly above its
    /// sentinel. Blank lines are ignored; use [`Session::add_blank_line`].
    pub fn insert_function_line(&mut self, name: &str, line: &str) -> Result<(), LslGenError> {
        let Some(chunk) = body_chunk(line, FUNCTION_BODY_INDENT)? else {
            return Ok(());
        };
        self.sealed_function(name)?.body.push(chunk);
        Ok(())
    }

    pub fn add_blank_line(&mut self, name: &str) -> Result<(), LslGenError> {
        self.sealed_function(name)?.body.push("\n".to_string());
        Ok(())
    }

    fn sealed_function(&mut self, name: &str) -> Result<&mut FunctionBlock, LslGenError> {
        let block = self.function_block_mut(name).ok_or_else(|| {
            LslGenError::not_found(
                Missing::Function,
                format!("Unable to find function: '{}'", name),
            )
        })?;
        if block.closing != Closing::Sentinel {
            return Err(LslGenError::not_found(
                Missing::Sentinel,
                format!("Unable to find end of function: '{}'", name),
            ));
        }
        Ok(block)
    }
}
