//! Tool declaration helpers using JSON Schema generation

use schemars::gen::SchemaSettings;
use schemars::JsonSchema;

use super::types::ToolDeclaration;

/// Create a tool declaration from a type that implements JsonSchema
///
/// Nested argument types (such as the items of an array parameter) are
/// inlined into the generated schema instead of being emitted as `$ref`
/// definitions, which keeps the schema readable for the model.
///
/// # Example
///
/// ```
/// use order_tools::tools::create_tool_declaration;
/// use schemars::JsonSchema;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, JsonSchema)]
/// struct FindOrderArgs {
///     /// Order ID
///     order_id: String,
/// }
///
/// let decl = create_tool_declaration::<FindOrderArgs>(
///     "find_order",
///     "Find order by ID",
/// );
/// assert_eq!(decl.name, "find_order");
/// ```
pub fn create_tool_declaration<T: JsonSchema>(
    name: impl Into<String>,
    description: impl Into<String>,
) -> ToolDeclaration {
    let schema = SchemaSettings::draft07()
        .with(|settings| settings.inline_subschemas = true)
        .into_generator()
        .into_root_schema_for::<T>();

    ToolDeclaration {
        name: name.into(),
        description: description.into(),
        input_schema: serde_json::to_value(&schema)
            .expect("Failed to serialize schema - this is a bug in schemars or the JsonSchema impl"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, JsonSchema)]
    struct LineArgs {
        /// Line label
        label: String,
    }

    #[derive(Deserialize, JsonSchema)]
    struct TestArgs {
        /// A string field
        field1: String,
        /// A number field
        field2: f64,
        /// Nested lines
        lines: Vec<LineArgs>,
    }

    #[test]
    fn test_create_tool_declaration() {
        let decl = create_tool_declaration::<TestArgs>("test_tool", "A test tool");

        assert_eq!(decl.name, "test_tool");
        assert_eq!(decl.description, "A test tool");

        assert!(decl.input_schema.is_object());

        let schema_obj = decl.input_schema.as_object().unwrap();
        assert!(schema_obj.contains_key("$schema"));
        assert!(schema_obj.contains_key("title"));
        assert!(schema_obj.contains_key("type"));
        assert!(schema_obj.contains_key("properties"));
    }

    #[test]
    fn test_schema_includes_doc_comments() {
        let decl = create_tool_declaration::<TestArgs>("test", "test");

        let schema_str = serde_json::to_string_pretty(&decl.input_schema).unwrap();

        assert!(schema_str.contains("A string field"));
        assert!(schema_str.contains("A number field"));
    }

    #[test]
    fn test_nested_schemas_are_inlined() {
        let decl = create_tool_declaration::<TestArgs>("test", "test");

        let items = &decl.input_schema["properties"]["lines"]["items"];
        assert_eq!(items["type"], "object");
        assert_eq!(items["properties"]["label"]["type"], "string");
        assert!(decl.input_schema.get("definitions").is_none());
    }
}
