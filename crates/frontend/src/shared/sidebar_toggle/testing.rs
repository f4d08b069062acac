//! In-memory stand-ins for DOM elements and the document.

use super::errors::ToggleError;
use super::page::Page;
use super::style_host::StyleHost;
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Default)]
pub struct FakeElement {
    pub styles: RefCell<HashMap<String, String>>,
    pub attributes: HashMap<String, String>,
    /// Properties written, in order.
    pub writes: RefCell<Vec<String>>,
}

impl FakeElement {
    pub fn with(property: &str, value: &str) -> Self {
        let el = Self::default();
        el.styles
            .borrow_mut()
            .insert(property.to_string(), value.to_string());
        el
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn get(&self, property: &str) -> String {
        self.styles
            .borrow()
            .get(property)
            .cloned()
            .unwrap_or_default()
    }
}

impl StyleHost for FakeElement {
    fn style_value(&self, property: &str) -> Result<String, ToggleError> {
        Ok(self.get(property))
    }

    fn set_style_value(&self, property: &str, value: &str) -> Result<(), ToggleError> {
        self.writes.borrow_mut().push(property.to_string());
        self.styles
            .borrow_mut()
            .insert(property.to_string(), value.to_string());
        Ok(())
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }
}

pub struct FakePage {
    pub elements: HashMap<&'static str, FakeElement>,
    pub viewport_width: f64,
}

impl FakePage {
    pub fn new(viewport_width: f64) -> Self {
        Self {
            elements: HashMap::new(),
            viewport_width,
        }
    }

    pub fn with(mut self, selector: &'static str, element: FakeElement) -> Self {
        self.elements.insert(selector, element);
        self
    }

    pub fn element(&self, selector: &str) -> &FakeElement {
        &self.elements[selector]
    }
}

impl<'a> Page for &'a FakePage {
    type Element = &'a FakeElement;

    fn find(&self, selector: &'static str) -> Result<Option<Self::Element>, ToggleError> {
        let page: &'a FakePage = *self;
        Ok(page.elements.get(selector))
    }

    fn viewport_width(&self) -> Result<f64, ToggleError> {
        Ok(self.viewport_width)
    }
}
