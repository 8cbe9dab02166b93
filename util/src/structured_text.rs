use std::fmt;

/// A named field of a value rendered as structured text.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub value: String,
}

impl Field {
    pub fn new(name: &'static str, value: impl fmt::Display) -> Self {
        Self {
            name,
            value: value.to_string(),
        }
    }
}

/// Values that can be dumped as a human readable block of fields for diagnostics.
///
/// This is not a stable format, don't parse it.
pub trait StructuredText {
    fn type_name(&self) -> &'static str;

    fn fields(&self) -> Vec<Field>;
}

/// Display adapter for any [`StructuredText`] value.
///
/// ```text
/// PointLight {
///     intensity: 1
///     distance : 0
/// }
/// ```
///
/// Fields are indented with a tab, one per line, and their names are padded to the longest one.
#[derive(Debug, Clone, Copy)]
pub struct Structured<'a, T: ?Sized>(pub &'a T);

impl<T: StructuredText + ?Sized> fmt::Display for Structured<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = self.0.fields();
        let width = fields.iter().map(|field| field.name.len()).max().unwrap_or_default();

        writeln!(f, "{} {{", self.0.type_name())?;
        for field in &fields {
            writeln!(f, "\t{:width$}: {}", field.name, field.value)?;
        }
        write!(f, "}}")
    }
}

pub fn render(value: &(impl StructuredText + ?Sized)) -> String {
    Structured(value).to_string()
}
