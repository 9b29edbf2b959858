//! Placeholder substitution into definitions
//!
//! A definition registered under a pattern name acts as a template: its
//! fields may contain `{n}` placeholders that are filled with the variables
//! captured when a requested name matches the pattern.

use crate::definition::{Attribute, AttributeValue, Definition};
use crate::error::FormatError;
use crate::format::format_placeholders;

/// Create a concrete definition from a template definition
///
/// `name` is used verbatim. The parent name, preparer, template attribute,
/// and every local and cascaded attribute (names included) have `vars`
/// substituted into their placeholders. The template is left untouched.
pub fn replace_placeholders<V: AsRef<str>>(
    definition: &Definition,
    name: &str,
    vars: &[V],
) -> Result<Definition, FormatError> {
    let mut nudef = Definition::new(name);

    nudef.extends = replace(definition.extends.as_deref(), vars)?;
    nudef.preparer = replace(definition.preparer.as_deref(), vars)?;
    nudef.template_attribute = definition
        .template_attribute
        .as_ref()
        .map(|attr| replace_vars_in_attribute(attr, vars))
        .transpose()?;

    for (attr_name, attr) in &definition.attributes {
        let nuattr = replace_vars_in_attribute(attr, vars)?;
        nudef.put_attribute(replace_str(attr_name, vars)?, nuattr);
    }

    for (attr_name, attr) in &definition.cascaded_attributes {
        let nuattr = replace_vars_in_attribute(attr, vars)?;
        nudef.put_cascaded_attribute(replace_str(attr_name, vars)?, nuattr);
    }

    Ok(nudef)
}

/// Create a new attribute with `vars` substituted into its role and text value
///
/// The renderer is copied verbatim, the expression is cloned without
/// substitution, and non-text values are copied as they are.
pub fn replace_vars_in_attribute<V: AsRef<str>>(
    attr: &Attribute,
    vars: &[V],
) -> Result<Attribute, FormatError> {
    let value = match &attr.value {
        Some(AttributeValue::Text(text)) => Some(AttributeValue::Text(replace_str(text, vars)?)),
        other => other.clone(),
    };

    Ok(Attribute {
        value,
        expression: attr.expression.clone(),
        role: replace(attr.role.as_deref(), vars)?,
        renderer: attr.renderer.clone(),
    })
}

fn replace<V: AsRef<str>>(st: Option<&str>, vars: &[V]) -> Result<Option<String>, FormatError> {
    st.map(|s| replace_str(s, vars)).transpose()
}

fn replace_str<V: AsRef<str>>(st: &str, vars: &[V]) -> Result<String, FormatError> {
    format_placeholders(st, vars).map(|s| s.into_owned())
}
