use std::collections::HashMap;

/// One child of a SOAP `return` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// Plain text content.
    Scalar(String),
    /// Marked `xsi:nil`.
    Nil,
    /// Has child elements of its own.
    Nested,
}

/// The fields of a SOAP operation's `return` element, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReturnData {
    fields: HashMap<String, Field>,
}

impl ReturnData {
    pub fn new() -> Self {
        Self::default()
    }

    /// What an operation call returns in place of a transport timeout.
    pub fn timeout() -> Self {
        let mut data = Self::new();
        data.insert("resultCode", Field::Scalar("403".to_string()));
        data.insert("resultText", Field::Scalar("SOAP Timeout".to_string()));
        data
    }

    pub fn insert(&mut self, name: &str, field: Field) {
        self.fields.insert(name.to_string(), field);
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, Field)> for ReturnData {
    fn from_iter<T: IntoIterator<Item = (&'a str, Field)>>(iter: T) -> Self {
        let mut data = Self::new();
        for (name, field) in iter {
            data.insert(name, field);
        }

        data
    }
}
