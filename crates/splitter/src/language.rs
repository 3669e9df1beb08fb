use crate::types::Capability;
use std::path::Path;

/// Supported programming language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
    Java,
    C,
    Cpp,
}

impl Language {
    /// Detect language from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "py" | "pyw" => Some(Language::Python),
            "js" | "jsx" | "mjs" | "cjs" => Some(Language::JavaScript),
            "ts" | "tsx" => Some(Language::TypeScript),
            "java" => Some(Language::Java),
            "c" | "h" => Some(Language::C),
            "cpp" | "cc" | "cxx" | "hpp" | "hh" | "hxx" => Some(Language::Cpp),
            _ => None,
        }
    }

    /// Detect language from file path
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Get language name as string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Java => "java",
            Language::C => "c",
            Language::Cpp => "cpp",
        }
    }

    /// Get Tree-sitter language instance
    pub fn tree_sitter_language(self) -> tree_sitter::Language {
        match self {
            Language::Python => tree_sitter_python::LANGUAGE.into(),
            Language::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            Language::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Language::Java => tree_sitter_java::LANGUAGE.into(),
            Language::C => tree_sitter_c::LANGUAGE.into(),
            Language::Cpp => tree_sitter_cpp::LANGUAGE.into(),
        }
    }

    /// Get this language's immutable descriptor
    #[must_use]
    pub fn spec(self) -> &'static LanguageSpec {
        match self {
            Language::Python => &PYTHON,
            Language::JavaScript => &JAVASCRIPT,
            Language::TypeScript => &TYPESCRIPT,
            Language::Java => &JAVA,
            Language::C => &C,
            Language::Cpp => &CPP,
        }
    }

    /// Highest capability tier this language's pipeline reaches
    #[must_use]
    pub fn capability(self) -> Capability {
        self.spec().capability
    }

    /// Secondary language retried when parsing under this one fails
    #[must_use]
    pub fn fallback(self) -> Option<Language> {
        self.spec().fallback
    }
}

/// Immutable per-language configuration: the node-kind set for each unit
/// category, plus the emission syntax for the aggregator file. Data, not
/// behavior: the pipeline stages interpret it.
pub struct LanguageSpec {
    pub capability: Capability,
    pub import_kinds: &'static [&'static str],
    pub literal_kinds: &'static [&'static str],
    pub comment_kinds: &'static [&'static str],
    pub function_kinds: &'static [&'static str],
    /// Distinct method node kind, when the grammar has one. Empty means
    /// methods are derived by partitioning functions against classes.
    pub method_kinds: &'static [&'static str],
    pub class_kinds: &'static [&'static str],
    pub interface_kinds: &'static [&'static str],
    /// Import statement template; `%s` is replaced by the unit path
    pub import_template: &'static str,
    /// Separator substituted for `/` in rendered unit paths
    pub path_separator: char,
    /// Suffix appended to rendered unit paths and the aggregator file
    /// name; `None` keeps the source file's own extension
    pub unit_suffix: Option<&'static str>,
    pub fallback: Option<Language>,
}

static PYTHON: LanguageSpec = LanguageSpec {
    capability: Capability::Class,
    import_kinds: &[
        "import_statement",
        "import_from_statement",
        "future_import_statement",
    ],
    literal_kinds: &["string", "integer", "float"],
    comment_kinds: &["comment"],
    function_kinds: &["function_definition"],
    method_kinds: &[],
    class_kinds: &["class_definition"],
    interface_kinds: &[],
    import_template: "import .%s",
    path_separator: '.',
    unit_suffix: None,
    fallback: None,
};

static JAVASCRIPT: LanguageSpec = LanguageSpec {
    capability: Capability::Class,
    import_kinds: &["import_statement"],
    literal_kinds: &["string", "template_string", "number"],
    comment_kinds: &["comment"],
    function_kinds: &["function_declaration", "generator_function_declaration"],
    method_kinds: &["method_definition"],
    class_kinds: &["class_declaration"],
    interface_kinds: &[],
    import_template: "import \"./%s\"",
    path_separator: '/',
    unit_suffix: None,
    fallback: None,
};

static TYPESCRIPT: LanguageSpec = LanguageSpec {
    capability: Capability::Interface,
    import_kinds: &["import_statement"],
    literal_kinds: &["string", "template_string", "number"],
    comment_kinds: &["comment"],
    function_kinds: &["function_declaration", "generator_function_declaration"],
    method_kinds: &["method_definition"],
    class_kinds: &["class_declaration", "abstract_class_declaration"],
    interface_kinds: &["interface_declaration"],
    import_template: "import \"./%s\"",
    path_separator: '/',
    unit_suffix: None,
    fallback: Some(Language::JavaScript),
};

static JAVA: LanguageSpec = LanguageSpec {
    capability: Capability::Interface,
    import_kinds: &["import_declaration"],
    literal_kinds: &[
        "string_literal",
        "decimal_integer_literal",
        "decimal_floating_point_literal",
    ],
    comment_kinds: &["line_comment", "block_comment"],
    // Java has no free functions; methods are classified directly
    function_kinds: &[],
    method_kinds: &["method_declaration"],
    class_kinds: &["class_declaration"],
    interface_kinds: &["interface_declaration"],
    import_template: "import %s;",
    path_separator: '.',
    unit_suffix: None,
    fallback: None,
};

static C: LanguageSpec = LanguageSpec {
    capability: Capability::Function,
    import_kinds: &["preproc_include"],
    literal_kinds: &["string_literal", "number_literal", "char_literal"],
    comment_kinds: &["comment"],
    function_kinds: &["function_definition"],
    method_kinds: &[],
    class_kinds: &[],
    interface_kinds: &[],
    import_template: "#include \"%s\"",
    path_separator: '/',
    unit_suffix: Some(".h"),
    fallback: None,
};

static CPP: LanguageSpec = LanguageSpec {
    capability: Capability::Class,
    import_kinds: &["preproc_include"],
    literal_kinds: &["string_literal", "number_literal", "char_literal"],
    comment_kinds: &["comment"],
    function_kinds: &["function_definition"],
    method_kinds: &[],
    class_kinds: &["class_specifier", "struct_specifier"],
    interface_kinds: &[],
    import_template: "#include \"%s\"",
    path_separator: '/',
    unit_suffix: Some(".hpp"),
    fallback: Some(Language::C),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(Language::from_extension("py"), Some(Language::Python));
        assert_eq!(Language::from_extension("PY"), Some(Language::Python));
        assert_eq!(Language::from_extension("jsx"), Some(Language::JavaScript));
        assert_eq!(Language::from_extension("ts"), Some(Language::TypeScript));
        assert_eq!(Language::from_extension("hpp"), Some(Language::Cpp));
        assert_eq!(Language::from_extension("h"), Some(Language::C));
        assert_eq!(Language::from_extension("xyz"), None);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Language::from_path("src/app.py"), Some(Language::Python));
        assert_eq!(Language::from_path("Main.java"), Some(Language::Java));
        assert_eq!(Language::from_path("no_extension"), None);
    }

    #[test]
    fn test_fallback_chain() {
        assert_eq!(Language::TypeScript.fallback(), Some(Language::JavaScript));
        assert_eq!(Language::Cpp.fallback(), Some(Language::C));
        assert_eq!(Language::Python.fallback(), None);
        // fallbacks terminate
        assert_eq!(Language::JavaScript.fallback(), None);
        assert_eq!(Language::C.fallback(), None);
    }

    #[test]
    fn test_capability_tiers() {
        assert_eq!(Language::C.capability(), Capability::Function);
        assert_eq!(Language::Python.capability(), Capability::Class);
        assert_eq!(Language::TypeScript.capability(), Capability::Interface);
        assert_eq!(Language::Java.capability(), Capability::Interface);
    }

    #[test]
    fn test_spec_consistency() {
        for lang in [
            Language::Python,
            Language::JavaScript,
            Language::TypeScript,
            Language::Java,
            Language::C,
            Language::Cpp,
        ] {
            let spec = lang.spec();
            if spec.capability >= Capability::Class {
                assert!(
                    !spec.class_kinds.is_empty(),
                    "{} is class-bearing but names no class kinds",
                    lang.as_str()
                );
            }
            if spec.capability >= Capability::Interface {
                assert!(!spec.interface_kinds.is_empty());
            }
            assert!(spec.import_template.contains("%s"));
        }
    }
}
