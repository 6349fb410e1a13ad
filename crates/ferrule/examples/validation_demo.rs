//! Walks through rule-string validation, custom rules and request input

use ferrule::prelude::*;

#[derive(Serialize)]
struct Signup {
    username: String,
    email: String,
    age: Option<u32>,
    password: String,
    password_confirmation: String,
}

impl ValidationRules for Signup {
    fn validation_rules() -> RuleSet {
        RuleSet::new()
            .field("username", "required|alpha_dash|chars_between:3,20|not_reserved")
            .field("email", "required|email")
            .field("age", "integer|value_between:13,120")
            .field("password", "required|min_chars:8|confirmed")
    }
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_logging(LoggingConfig::development())?;

    println!("ferrule validation demo");
    println!("=======================\n");

    demo_rule_strings();
    demo_custom_rule();
    demo_request_input()?;

    println!("\nAll validation demos completed.");
    Ok(())
}

fn demo_rule_strings() {
    println!("Rule strings");
    println!("------------");

    let rules = RuleSet::new()
        .field("name", "required|alpha")
        .field("age", "integer|min_value:0")
        .field("nickname", "alpha_num|max_chars:12");

    let mut values = FieldValues::new();
    values.insert("name".to_string(), "Bob123".to_string());
    values.insert("age".to_string(), "-5".to_string());

    match Validator::new().validate(&values, &rules) {
        Ok(()) => println!("  unexpected success"),
        Err(errors) => {
            for field in errors.fields() {
                println!("  {}: {}", field, errors.message(field).unwrap_or_default());
            }
            println!("  JSON: {}", errors.to_json());
        }
    }
}

fn demo_custom_rule() {
    println!("\nCustom rules");
    println!("------------");

    register_rule(
        "not_reserved",
        |ctx: &RuleContext<'_>| !["admin", "root", "system"].contains(&ctx.value),
        "The %s is reserved.",
    );

    let signup = Signup {
        username: "admin".to_string(),
        email: "admin@example.com".to_string(),
        age: Some(30),
        password: "long enough".to_string(),
        password_confirmation: "long enough".to_string(),
    };

    match Validator::from_global().validate_struct(&signup) {
        Ok(()) => println!("  unexpected success"),
        Err(errors) => println!("  {}", errors),
    }
}

fn demo_request_input() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    println!("\nRequest input");
    println!("-------------");

    let body = json!({"username": "ada_l", "email": "ada@example.com", "age": 36}).to_string();
    let input = Input::parse(Some("application/json"), None, body.as_bytes())?;

    let rules = RuleSet::new()
        .field("username", "required|alpha_dash")
        .field("email", "required|email")
        .field("age", "integer|value_between:13,120");

    match input.validate(&rules) {
        Ok(()) => println!("  {} fields passed validation", input.len()),
        Err(errors) => println!("  {}", errors),
    }

    Ok(())
}
