//! Per-request input types.

/// Whether a request asks for a conversion or only shows the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestMode {
    /// First view (GET): echo inputs and defaults, compute nothing.
    Idle,
    /// Form submission (POST): validate and convert.
    Submitted,
}

/// Raw form fields as submitted. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionRequest {
    /// Value text, exactly as typed.
    pub value: Option<String>,
    /// Source unit name.
    pub from: Option<String>,
    /// Target unit name.
    pub to: Option<String>,
}

impl ConversionRequest {
    /// Build a request with every field present.
    pub fn new(value: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            from: Some(from.into()),
            to: Some(to.into()),
        }
    }

    /// Source unit, or `default` when absent or blank.
    pub fn from_or<'a>(&'a self, default: &'a str) -> &'a str {
        non_empty(self.from.as_deref()).unwrap_or(default)
    }

    /// Target unit, or `default` when absent or blank.
    pub fn to_or<'a>(&'a self, default: &'a str) -> &'a str {
        non_empty(self.to.as_deref()).unwrap_or(default)
    }

    /// Build a request from decoded `key=value` pairs.
    ///
    /// The first occurrence of each field wins; later repeats and unknown
    /// keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut request = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "value" => &mut request.value,
                "from" => &mut request.from,
                "to" => &mut request.to,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        request
    }

    /// Fields present in `self` win; gaps are taken from `fallback`.
    pub fn or(self, fallback: Self) -> Self {
        Self {
            value: self.value.or(fallback.value),
            from: self.from.or(fallback.from),
            to: self.to.or(fallback.to),
        }
    }

    /// Raw value text, empty when absent.
    pub fn raw_value(&self) -> &str {
        self.value.as_deref().unwrap_or_default()
    }
}

fn non_empty(field: Option<&str>) -> Option<&str> {
    field.filter(|s| !s.is_empty())
}
