use crate::models::value::Value;
use std::collections::HashMap;

/// Arguments for an operation call, either by parameter name or in the operation's parameter order.
#[derive(Debug, Clone, PartialEq, uniffi::Enum)]
pub enum Arguments {
    Named(HashMap<String, Value>),
    Positional(Vec<Value>),
}

impl Arguments {
    pub fn positional<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Arguments::Positional(values.into_iter().map(Into::into).collect())
    }

    pub fn named<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Arguments::Named(
            pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

impl Default for Arguments {
    fn default() -> Self {
        Arguments::Named(HashMap::new())
    }
}

impl From<HashMap<String, Value>> for Arguments {
    fn from(named: HashMap<String, Value>) -> Self {
        Arguments::Named(named)
    }
}

impl From<Vec<Value>> for Arguments {
    fn from(positional: Vec<Value>) -> Self {
        Arguments::Positional(positional)
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Arguments {
    fn from(pairs: [(K, V); N]) -> Self {
        Arguments::named(pairs)
    }
}
