//! Builds a small document, prints it as JSON and YAML, and reads it back.
//!
//! Run with `RUST_LOG=openapi_model=debug` to see codec events.

use openapi_model::{
    requirement, Components, Info, License, MediaType, Method, OpenApi, Operation, Parameter,
    RequestBody, Response, SecurityScheme, Server, StatusCode, Tag,
};
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() -> openapi_model::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let pet = json!({"$ref": "#/components/schemas/Pet"});

    let doc = OpenApi::new("3.1.0", "Petstore")
        .info(
            Info::new("Petstore")
                .version("1.0.0")
                .license(License::spdx("MIT License", "MIT")),
        )
        .server(Server::new("https://petstore.example.com/v1"))
        .operation(
            "/pets/{petId}",
            Method::Get,
            Operation::new()
                .tag("pets")
                .operation_id("showPetById")
                .parameter(Parameter::path("petId").schema(json!({"type": "string"})))
                .response(
                    StatusCode::Ok,
                    Response::new("The pet").content("application/json", MediaType::new(pet.clone())),
                )
                .response(StatusCode::NotFound, Response::new("No such pet")),
        )
        .operation(
            "/pets",
            Method::Post,
            Operation::new()
                .tag("pets")
                .operation_id("createPet")
                .request_body(RequestBody::json(pet))
                .response(StatusCode::Created, Response::new("Created"))
                .security(requirement("bearer", Vec::<String>::new())),
        )
        .components(
            Components::new()
                .schema(
                    "Pet",
                    json!({
                        "type": "object",
                        "required": ["id", "name"],
                        "properties": {
                            "id": {"type": "integer"},
                            "name": {"type": "string"}
                        }
                    }),
                )
                .security_scheme("bearer", SecurityScheme::bearer("JWT")),
        )
        .tag(Tag::new("pets"));

    let json = doc.to_json_pretty()?;
    println!("{json}");

    let yaml = doc.to_yaml()?;
    println!("---\n{yaml}");

    let decoded = OpenApi::from_json(&json)?;
    for (path, method, op) in decoded.operations() {
        tracing::info!(%method, path, operation_id = %op.operation_id, "operation");
    }

    Ok(())
}
