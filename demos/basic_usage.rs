use envelope_errors::{
    Cause, FieldViolation, Password, Result, ShapedError, Shaper, SuccessResponse,
    ValidationErrors, compare_password, definitions, hash_password,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SignupRequest {
    name: String,
    age: u32,
    password: String,
}

fn validate(req: &SignupRequest) -> Option<ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if req.name.is_empty() {
        errors.push(FieldViolation::new("Name", "required").with_value(""));
    }
    if req.age <= 17 {
        errors.push(FieldViolation::new("Age", "gt").with_param("17").with_value(req.age));
    }
    if req.password.len() < 8 {
        errors.push(
            FieldViolation::new("Password", "min")
                .with_param("8")
                .with_value(req.password.as_str()),
        );
    }
    (!errors.is_empty()).then_some(errors)
}

fn signup(shaper: &Shaper, raw: &str) -> Result<SuccessResponse<String>> {
    let req: SignupRequest = serde_json::from_str(raw)
        .map_err(|e| shaper.reject(definitions::INVALID_INPUT_PARAMETER, Some(&Cause::from(e))))?;

    if let Some(errors) = validate(&req) {
        return Err(shaper.reject(definitions::INVALID_INPUT_PARAMETER, Some(&errors.into())));
    }

    let hash = hash_password(&Password::from(req.password))
        .map_err(|e| shaper.reject(definitions::INTERNAL_SYSTEM_ERROR, Some(&Cause::opaque(e))))?;
    Ok(SuccessResponse::new(hash))
}

fn print_rejection(err: &ShapedError) {
    println!("   HTTP {}", err.status);
    println!("   {}", serde_json::to_string(&err.body).unwrap_or_default());
    println!("   log: {}", err.log());
}

fn main() {
    let shaper = Shaper::new();

    println!("--- Basic Usage Example ---\n");

    println!("1. Malformed JSON:");
    if let Err(err) = signup(&shaper, "{\"name\": ") {
        print_rejection(&err);
    }

    println!("\n2. Field validation:");
    if let Err(err) = signup(&shaper, r#"{"name": "", "age": 12, "password": "short"}"#) {
        print_rejection(&err);
    }

    println!("\n3. Accepted signup, then a login attempt:");
    match signup(&shaper, r#"{"name": "Ann", "age": 30, "password": "correct horse"}"#) {
        Ok(ok) => {
            let attempt = Password::from("battery staple");
            if !compare_password(&ok.result, &attempt) {
                let err = shaper.reject(definitions::INVALID_PASSWORD, Some(&Cause::from("bad password")));
                print_rejection(&err);
            }
        }
        Err(err) => print_rejection(&err),
    }

    println!("\n4. Unknown code:");
    print_rejection(&shaper.reject(-41234, None));
}
