//! Attribute values attached to a definition

/// Renderer identifier used for template attributes
pub const TEMPLATE_RENDERER: &str = "template";

/// An expression carried alongside an attribute value
///
/// Expressions are evaluated by the rendering layer; this crate only copies them.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    /// Expression source text
    pub expression: String,
    /// Expression language, if not the default one
    pub language: Option<String>,
}

impl Expression {
    /// Create an expression in the default language
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            language: None,
        }
    }

    /// Set the expression language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// The value held by an attribute
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// Text, the only kind of value placeholders are substituted into
    Text(String),
    Boolean(bool),
    Integer(i64),
    Float(f64),
    /// A list of nested attributes
    List(Vec<Attribute>),
}

impl AttributeValue {
    /// Get the text if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Text(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::Text(s)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::Boolean(b)
    }
}

impl From<i64> for AttributeValue {
    fn from(n: i64) -> Self {
        AttributeValue::Integer(n)
    }
}

impl From<f64> for AttributeValue {
    fn from(n: f64) -> Self {
        AttributeValue::Float(n)
    }
}

impl From<Vec<Attribute>> for AttributeValue {
    fn from(items: Vec<Attribute>) -> Self {
        AttributeValue::List(items)
    }
}

/// A single named value of a definition
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attribute {
    /// The value, if any
    pub value: Option<AttributeValue>,
    /// Expression evaluated at render time instead of the value
    pub expression: Option<Expression>,
    /// Role required to see this attribute
    pub role: Option<String>,
    /// How the value is rendered (e.g. "string", "template", "definition")
    pub renderer: Option<String>,
}

impl Attribute {
    /// Create an attribute holding a value
    pub fn new(value: impl Into<AttributeValue>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Create a text attribute
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(AttributeValue::Text(value.into()))
    }

    /// Create a template attribute pointing at a template path
    pub fn template(path: impl Into<String>) -> Self {
        Self::text(path).with_renderer(TEMPLATE_RENDERER)
    }

    /// Create an attribute backed only by an expression
    pub fn from_expression(expression: Expression) -> Self {
        Self {
            expression: Some(expression),
            ..Self::default()
        }
    }

    /// Set the role
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Set the renderer
    pub fn with_renderer(mut self, renderer: impl Into<String>) -> Self {
        self.renderer = Some(renderer.into());
        self
    }

    /// Set the expression
    pub fn with_expression(mut self, expression: Expression) -> Self {
        self.expression = Some(expression);
        self
    }

    /// Get the value as text, if it is text
    pub fn text_value(&self) -> Option<&str> {
        self.value.as_ref().and_then(AttributeValue::as_text)
    }
}
