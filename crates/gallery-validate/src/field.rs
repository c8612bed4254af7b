/// A text input with a touched flag.
///
/// Errors are only displayed once the field has lost focus, but validity is
/// computed from the value at all times.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldInput {
    value: String,
    touched: bool,
}

impl FieldInput {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            touched: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn blur(&mut self) {
        self.touched = true;
    }

    pub fn reset(&mut self) {
        self.value.clear();
        self.touched = false;
    }

    /// Whether to display an error for this field.
    pub fn has_error(&self, is_valid: impl FnOnce(&str) -> bool) -> bool {
        self.touched && !is_valid(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is_not_empty;

    #[test]
    fn errors_show_only_after_blur() {
        let mut field = FieldInput::default();
        assert!(!field.has_error(is_not_empty));
        field.blur();
        assert!(field.has_error(is_not_empty));
        field.set_value("title");
        assert!(!field.has_error(is_not_empty));
    }

    #[test]
    fn reset_clears_value_and_touch() {
        let mut field = FieldInput::new("x");
        field.blur();
        field.reset();
        assert_eq!(field, FieldInput::default());
    }
}
