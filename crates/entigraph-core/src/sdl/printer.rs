//! Schema printer.
//!
//! Types are printed in registration order, built-ins skipped. Roots keep the
//! conventional names, so no `schema { ... }` block is needed.

use serde_json::Value;

use super::Config;
use crate::types::{
    ArgsId, EnumType, InputObjectType, ObjectType, ScalarType, TypeDef, TypeRef, UnionType,
};
use crate::{Colors, Schema};

const INDENT: &str = "  ";

/// SDL printer over a compiled schema.
pub struct Printer<'a> {
    schema: &'a Schema,
    config: Config,
    output: String,
}

impl<'a> Printer<'a> {
    pub fn new(schema: &'a Schema, config: Config) -> Self {
        Self {
            schema,
            config,
            output: String::new(),
        }
    }

    fn c(&self) -> Colors {
        self.config.colors
    }

    pub fn print(mut self) -> String {
        let schema = self.schema;
        for (_, def) in schema.registry().user_types() {
            match def {
                TypeDef::Scalar(scalar) => self.print_scalar(scalar),
                TypeDef::Object(object) => self.print_object(object),
                TypeDef::InputObject(input) => self.print_input(input),
                TypeDef::Enum(enum_type) => self.print_enum(enum_type),
                TypeDef::Union(union) => self.print_union(union),
            }
            self.output.push('\n');
        }

        self.output.truncate(self.output.trim_end().len());
        if !self.output.is_empty() {
            self.output.push('\n');
        }
        self.output
    }

    fn print_scalar(&mut self, scalar: &ScalarType) {
        let c = self.c();
        self.print_description(scalar.description.as_deref(), "");
        self.output.push_str(&format!(
            "{} {}\n",
            c.paint(c.keyword, "scalar"),
            c.paint(c.type_name, &scalar.name)
        ));
    }

    fn print_object(&mut self, object: &ObjectType) {
        self.print_description(object.description.as_deref(), "");
        self.open_block("type", &object.name);

        for (name, field) in &object.fields {
            self.print_description(field.description.as_deref(), INDENT);
            let args = field.args.map(|id| self.render_args(id)).unwrap_or_default();
            let ty = self.render_type(&field.ty);
            self.output
                .push_str(&format!("{INDENT}{name}{args}: {ty}"));
            self.print_deprecation(field.deprecation_reason.as_deref());
            self.output.push('\n');
        }

        self.close_block();
    }

    fn print_input(&mut self, input: &InputObjectType) {
        self.print_description(input.description.as_deref(), "");
        self.open_block("input", &input.name);

        for field in input.fields.values() {
            self.print_description(field.description.as_deref(), INDENT);
            let ty = self.render_type(&field.ty);
            let default = self.render_default(field.default_value.as_ref());
            self.output
                .push_str(&format!("{INDENT}{}: {ty}{default}", field.name));
            self.print_deprecation(field.deprecation_reason.as_deref());
            self.output.push('\n');
        }

        self.close_block();
    }

    fn print_enum(&mut self, enum_type: &EnumType) {
        self.print_description(enum_type.description.as_deref(), "");
        self.open_block("enum", &enum_type.name);

        for (symbol, value) in &enum_type.values {
            self.print_description(value.description.as_deref(), INDENT);
            self.output.push_str(&format!("{INDENT}{symbol}\n"));
        }

        self.close_block();
    }

    fn print_union(&mut self, union: &UnionType) {
        let c = self.c();
        self.print_description(union.description.as_deref(), "");

        let schema = self.schema;
        let registry = schema.registry();
        let members: Vec<String> = union
            .members
            .iter()
            .map(|&id| c.paint(c.type_name, registry.name(id).unwrap_or("?")))
            .collect();
        let separator = format!(" {} ", c.paint(c.punct, "|"));

        self.output.push_str(&format!(
            "{} {} {} {}\n",
            c.paint(c.keyword, "union"),
            c.paint(c.type_name, &union.name),
            c.paint(c.punct, "="),
            members.join(&separator)
        ));
    }

    fn open_block(&mut self, keyword: &str, name: &str) {
        let c = self.c();
        self.output.push_str(&format!(
            "{} {} {}\n",
            c.paint(c.keyword, keyword),
            c.paint(c.type_name, name),
            c.paint(c.punct, "{")
        ));
    }

    fn close_block(&mut self) {
        let c = self.c();
        self.output.push_str(&format!("{}\n", c.paint(c.punct, "}")));
    }

    fn print_description(&mut self, description: Option<&str>, indent: &str) {
        if !self.config.descriptions {
            return;
        }
        let Some(text) = description else {
            return;
        };

        let c = self.c();
        if text.contains('\n') {
            self.output
                .push_str(&format!("{indent}{}\"\"\"\n", c.description));
            for line in text.lines() {
                self.output.push_str(&format!("{indent}{line}\n"));
            }
            self.output
                .push_str(&format!("{indent}\"\"\"{}\n", c.reset));
        } else {
            self.output
                .push_str(&format!("{indent}{}\n", c.paint(c.description, &quote(text))));
        }
    }

    fn print_deprecation(&mut self, reason: Option<&str>) {
        let Some(reason) = reason else {
            return;
        };
        let c = self.c();
        self.output.push_str(&format!(
            " {}{} {}{}",
            c.paint(c.keyword, "@deprecated"),
            c.paint(c.punct, "(reason:"),
            c.paint(c.literal, &quote(reason)),
            c.paint(c.punct, ")")
        ));
    }

    fn render_args(&self, id: ArgsId) -> String {
        let arguments = self.schema.registry().arguments(id);
        if arguments.is_empty() {
            return String::new();
        }

        let rendered: Vec<String> = arguments
            .iter()
            .map(|(name, arg)| {
                let ty = self.render_type(&arg.ty);
                let default = self.render_default(arg.default_value.as_ref());
                format!("{name}: {ty}{default}")
            })
            .collect();
        format!("({})", rendered.join(", "))
    }

    fn render_type(&self, ty: &TypeRef) -> String {
        let c = self.c();
        let registry = self.schema.registry();
        match ty {
            TypeRef::Named(id) => c.paint(c.type_name, registry.name(*id).unwrap_or("?")),
            TypeRef::List(inner) => format!("[{}]", self.render_type(inner)),
            TypeRef::NonNull(inner) => format!("{}!", self.render_type(inner)),
        }
    }

    fn render_default(&self, value: Option<&Value>) -> String {
        match value {
            Some(value) => {
                let c = self.c();
                format!(" = {}", c.paint(c.literal, &literal(value)))
            }
            None => String::new(),
        }
    }
}

/// GraphQL literal for a JSON value.
fn literal(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote(s),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(literal).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(entries) => {
            let entries: Vec<String> = entries
                .iter()
                .map(|(key, value)| format!("{key}: {}", literal(value)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
    }
}

fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}
