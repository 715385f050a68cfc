//! Host Elements
//!
//! HTML elements reflect `class` through the `className` property; SVG
//! elements only expose the generic attribute accessors. `ClassHost` lets an
//! element advertise either capability, and `ClassAccess` picks one.

/// Attribute holding the class token list
pub const CLASS_ATTRIBUTE: &str = "class";

/// `className`-style string property
pub trait ClassNameProperty {
    fn class_name(&self) -> &str;
    fn set_class_name(&mut self, value: &str);
}

/// Generic attribute accessors (`getAttribute`/`setAttribute`/`removeAttribute`)
pub trait AttributeAccess {
    fn get_attribute(&self, name: &str) -> Option<&str>;
    fn set_attribute(&mut self, name: &str, value: &str);
    fn remove_attribute(&mut self, name: &str);
}

/// Element-like object whose class attribute a `ClassList` can manage
///
/// Implementors return `Some` for every capability they expose. An object
/// exposing neither is not element-like. Each shared accessor must be paired
/// with its `_mut` counterpart: a host that reads through `as_class_name` but
/// returns `None` from `as_class_name_mut` silently drops writes.
pub trait ClassHost {
    fn as_class_name(&self) -> Option<&dyn ClassNameProperty> {
        None
    }

    fn as_class_name_mut(&mut self) -> Option<&mut dyn ClassNameProperty> {
        None
    }

    fn as_attributes(&self) -> Option<&dyn AttributeAccess> {
        None
    }

    fn as_attributes_mut(&mut self) -> Option<&mut dyn AttributeAccess> {
        None
    }
}

/// How the class string is read and written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassAccess {
    /// Through the `className` property (HTML)
    ClassName,
    /// Through `getAttribute("class")`/`setAttribute("class", ..)` (SVG)
    Attribute,
}

impl ClassAccess {
    /// Probe a host for a usable capability, property first
    pub fn probe<H: ClassHost + ?Sized>(host: &H) -> Option<Self> {
        if host.as_class_name().is_some() {
            Some(Self::ClassName)
        } else if host.as_attributes().is_some() {
            Some(Self::Attribute)
        } else {
            None
        }
    }

    /// Read the raw class string (`None` if the attribute is absent)
    pub fn read<H: ClassHost + ?Sized>(self, host: &H) -> Option<&str> {
        match self {
            Self::ClassName => host.as_class_name().map(|p| p.class_name()),
            Self::Attribute => host
                .as_attributes()
                .and_then(|a| a.get_attribute(CLASS_ATTRIBUTE)),
        }
    }

    /// Write the class string. An empty value removes the attribute from
    /// attribute-style hosts when `clear_empty` is set.
    pub fn write<H: ClassHost + ?Sized>(self, host: &mut H, value: &str, clear_empty: bool) {
        match self {
            Self::ClassName => match host.as_class_name_mut() {
                Some(p) => p.set_class_name(value),
                None => tracing::debug!("className is not writable, dropped {:?}", value),
            },
            Self::Attribute => match host.as_attributes_mut() {
                Some(a) if value.is_empty() && clear_empty => a.remove_attribute(CLASS_ATTRIBUTE),
                Some(a) => a.set_attribute(CLASS_ATTRIBUTE, value),
                None => tracing::debug!("attributes are not writable, dropped {:?}", value),
            },
        }
    }
}

/// Ordered attribute list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    attrs: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set attribute, keeping its position if it already exists
    pub fn set(&mut self, name: &str, value: &str) {
        match self.attrs.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.attrs.push((name.to_string(), value.to_string())),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.attrs.iter().position(|(n, _)| n == name)?;
        Some(self.attrs.remove(index).1)
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// HTML element: `className` reflects the `class` attribute
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlElement {
    pub tag_name: String,
    pub attributes: Attributes,
}

impl HtmlElement {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.attributes.set(CLASS_ATTRIBUTE, class);
        self
    }
}

impl ClassNameProperty for HtmlElement {
    fn class_name(&self) -> &str {
        self.attributes.get(CLASS_ATTRIBUTE).unwrap_or("")
    }

    fn set_class_name(&mut self, value: &str) {
        self.attributes.set(CLASS_ATTRIBUTE, value);
    }
}

impl AttributeAccess for HtmlElement {
    fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.set(name, value);
    }

    fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }
}

impl ClassHost for HtmlElement {
    fn as_class_name(&self) -> Option<&dyn ClassNameProperty> {
        Some(self)
    }

    fn as_class_name_mut(&mut self) -> Option<&mut dyn ClassNameProperty> {
        Some(self)
    }

    fn as_attributes(&self) -> Option<&dyn AttributeAccess> {
        Some(self)
    }

    fn as_attributes_mut(&mut self) -> Option<&mut dyn AttributeAccess> {
        Some(self)
    }
}

/// SVG element: no string `className`, only attribute accessors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SvgElement {
    pub tag_name: String,
    pub attributes: Attributes,
}

impl SvgElement {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: Attributes::new(),
        }
    }
}

impl AttributeAccess for SvgElement {
    fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.set(name, value);
    }

    fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }
}

impl ClassHost for SvgElement {
    fn as_attributes(&self) -> Option<&dyn AttributeAccess> {
        Some(self)
    }

    fn as_attributes_mut(&mut self) -> Option<&mut dyn AttributeAccess> {
        Some(self)
    }
}

/// Any DOM node; only element variants carry a class list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Html(HtmlElement),
    Svg(SvgElement),
    Text(String),
    Comment(String),
    Document,
}

impl ClassHost for Node {
    fn as_class_name(&self) -> Option<&dyn ClassNameProperty> {
        match self {
            Node::Html(el) => el.as_class_name(),
            _ => None,
        }
    }

    fn as_class_name_mut(&mut self) -> Option<&mut dyn ClassNameProperty> {
        match self {
            Node::Html(el) => el.as_class_name_mut(),
            _ => None,
        }
    }

    fn as_attributes(&self) -> Option<&dyn AttributeAccess> {
        match self {
            Node::Html(el) => el.as_attributes(),
            Node::Svg(el) => el.as_attributes(),
            _ => None,
        }
    }

    fn as_attributes_mut(&mut self) -> Option<&mut dyn AttributeAccess> {
        match self {
            Node::Html(el) => el.as_attributes_mut(),
            Node::Svg(el) => el.as_attributes_mut(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe() {
        assert_eq!(ClassAccess::probe(&HtmlElement::new("div")), Some(ClassAccess::ClassName));
        assert_eq!(ClassAccess::probe(&SvgElement::new("svg")), Some(ClassAccess::Attribute));
        assert_eq!(ClassAccess::probe(&Node::Text("str".into())), None);
        assert_eq!(ClassAccess::probe(&Node::Document), None);
    }

    #[test]
    fn test_class_name_reflects_attribute() {
        let mut div = HtmlElement::new("div");
        assert_eq!(div.class_name(), "");
        assert_eq!(div.get_attribute(CLASS_ATTRIBUTE), None);

        div.set_class_name("btn");
        assert_eq!(div.get_attribute(CLASS_ATTRIBUTE), Some("btn"));
    }

    #[test]
    fn test_write_empty() {
        let mut svg = SvgElement::new("svg");
        svg.set_attribute(CLASS_ATTRIBUTE, "foo");

        ClassAccess::Attribute.write(&mut svg, "", false);
        assert_eq!(svg.get_attribute(CLASS_ATTRIBUTE), Some(""));

        ClassAccess::Attribute.write(&mut svg, "", true);
        assert_eq!(svg.get_attribute(CLASS_ATTRIBUTE), None);

        let mut div = HtmlElement::new("div").with_class("foo");
        ClassAccess::ClassName.write(&mut div, "", true);
        assert_eq!(div.class_name(), "");
    }

    /// Readable but not writable through the property capability
    struct ReadOnlyClassName(HtmlElement);

    impl ClassHost for ReadOnlyClassName {
        fn as_class_name(&self) -> Option<&dyn ClassNameProperty> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_write_without_mut_accessor_is_dropped() {
        let mut host = ReadOnlyClassName(HtmlElement::new("div").with_class("a"));
        assert_eq!(ClassAccess::probe(&host), Some(ClassAccess::ClassName));
        ClassAccess::ClassName.write(&mut host, "b", true);
        assert_eq!(ClassAccess::ClassName.read(&host), Some("a"));
    }

    #[test]
    fn test_attributes_keep_order() {
        let mut attrs = Attributes::new();
        assert!(attrs.is_empty());
        attrs.set("id", "main");
        attrs.set("class", "a");
        attrs.set("id", "other");

        let names: Vec<_> = attrs.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["id", "class"]);
        assert_eq!(attrs.len(), 2);
        assert!(!attrs.is_empty());
        assert_eq!(attrs.remove("id").as_deref(), Some("other"));
        assert!(!attrs.has("id"));
    }
}
