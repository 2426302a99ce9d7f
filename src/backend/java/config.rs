//! Emission configuration for the Java backend

/// Java emission configuration
#[derive(Debug, Clone)]
pub struct EmitConfig {
    /// Name of the generated public class (and therefore of the `.java` file)
    pub class_name: String,
    /// Number of spaces per indentation level
    pub indent_width: usize,
    /// Number of blank lines between `main` and each hoisted function
    pub blank_lines_between_members: usize,
    /// Whether to emit the "generated file" comment above the class
    pub emit_header: bool,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            class_name: DEFAULT_CLASS_NAME.to_string(),
            indent_width: 4,
            blank_lines_between_members: 1,
            emit_header: true,
        }
    }
}

/// Class name used when none is configured.
pub const DEFAULT_CLASS_NAME: &str = "FunProgram";

impl EmitConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the generated class name
    pub fn with_class_name(mut self, name: impl Into<String>) -> Self {
        self.class_name = name.into();
        self
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Set the blank lines between class members
    pub fn with_blank_lines_between_members(mut self, count: usize) -> Self {
        self.blank_lines_between_members = count;
        self
    }

    /// Enable or disable the header comment
    pub fn with_header(mut self, emit: bool) -> Self {
        self.emit_header = emit;
        self
    }

    /// File name the generated unit must be written to (`<ClassName>.java`).
    pub fn file_name(&self) -> String {
        format!("{}.java", self.class_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EmitConfig::default();
        assert_eq!(config.class_name, "FunProgram");
        assert_eq!(config.indent_width, 4);
        assert_eq!(config.blank_lines_between_members, 1);
        assert!(config.emit_header);
    }

    #[test]
    fn test_new_equals_default() {
        let new_config = EmitConfig::new();
        let default_config = EmitConfig::default();
        assert_eq!(new_config.class_name, default_config.class_name);
        assert_eq!(new_config.indent_width, default_config.indent_width);
    }

    #[test]
    fn test_with_class_name() {
        let config = EmitConfig::new().with_class_name("Demo");
        assert_eq!(config.class_name, "Demo");
        assert_eq!(config.file_name(), "Demo.java");
        // Other fields unchanged
        assert_eq!(config.indent_width, 4);
    }

    #[test]
    fn test_with_indent_width() {
        let config = EmitConfig::new().with_indent_width(2);
        assert_eq!(config.indent_width, 2);
    }

    #[test]
    fn test_with_blank_lines_between_members() {
        let config = EmitConfig::new().with_blank_lines_between_members(0);
        assert_eq!(config.blank_lines_between_members, 0);
    }

    #[test]
    fn test_with_header() {
        let config = EmitConfig::new().with_header(false);
        assert!(!config.emit_header);
    }

    #[test]
    fn test_builder_override() {
        let config = EmitConfig::new().with_indent_width(2).with_indent_width(8);
        assert_eq!(config.indent_width, 8); // Last value wins
    }
}
