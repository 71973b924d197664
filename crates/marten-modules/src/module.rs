//! Module object handed back by built-in initializers.

/// Result of running a built-in module initializer.
pub type InitResult = Result<NativeModule, String>;

/// No-argument initializer for a built-in module.
pub type ModuleInitFn = fn() -> InitResult;

/// Handle for a constructed built-in module.
///
/// The table only carries these back to the loader; what a module exposes to
/// running programs is the interpreter core's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeModule {
    name: &'static str,
    doc: Option<&'static str>,
}

impl NativeModule {
    /// Create a module handle with the given name.
    pub fn new(name: &'static str) -> Self {
        Self { name, doc: None }
    }

    /// Attach a one-line doc string (builder pattern).
    pub fn with_doc(mut self, doc: &'static str) -> Self {
        self.doc = Some(doc);
        self
    }

    /// Module name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Doc string, if the initializer attached one.
    pub fn doc(&self) -> Option<&'static str> {
        self.doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_name_and_doc() {
        let module = NativeModule::new("io").with_doc("Line-oriented input and output");
        assert_eq!(module.name(), "io");
        assert_eq!(module.doc(), Some("Line-oriented input and output"));
    }

    #[test]
    fn doc_is_optional() {
        let module = NativeModule::new("math");
        assert_eq!(module.doc(), None);
    }
}
