use serde_json::Value;
use std::any::Any;

use super::{Namespaced, StoreError, StoreModule};

pub const DEFAULT_TITLE: &str = "Top Stories";

/// Toolbar title state
///
/// The title only changes through [`TopToolbar::change_title`] or the
/// `changeTitle` action, both of which go through the private `set_title`
/// mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopToolbar {
    title: String,
}

impl Default for TopToolbar {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

impl TopToolbar {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Overwrites the title, empty strings included
    pub fn change_title(&mut self, title: impl Into<String>) {
        self.set_title(title.into());
    }

    fn set_title(&mut self, title: String) {
        self.title = title;
    }
}

impl Namespaced for TopToolbar {
    const NAMESPACE: &'static str = "topToolbar";
}

impl StoreModule for TopToolbar {
    fn getter(&self, name: &str) -> Option<Value> {
        match name {
            "title" => Some(Value::String(self.title.clone())),
            _ => None,
        }
    }

    fn dispatch(&mut self, action: &str, payload: Value) -> Result<(), StoreError> {
        match action {
            "changeTitle" => {
                let title: String = serde_json::from_value(payload).map_err(|source| {
                    StoreError::InvalidPayload {
                        action: action.to_string(),
                        source,
                    }
                })?;
                self.change_title(title);
                Ok(())
            }
            _ => Err(StoreError::UnknownAction(action.to_string())),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
