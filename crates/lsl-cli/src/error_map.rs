use lsl_api::LslApiError;

pub(crate) fn emit_error(error: LslApiError) -> i32 {
    log::error!("{}", error);
    println!("RESULT:ERROR");
    println!("ERROR_CODE:{}", error.code());
    println!(
        "ERROR_MSG_JSON:{}",
        serde_json::to_string(&error.to_string()).expect("string json")
    );
    1
}
