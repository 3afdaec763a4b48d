//! Data model for a parsed loader header — output-agnostic.

/// One loaded entry point extracted from the loader header.
///
/// `return_type` and `params` are verbatim C text; nothing is interpreted
/// beyond trimming the surrounding typedef syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    /// Plain entry point name, e.g. `glGetError`
    pub name: String,
    /// e.g. `GLenum`, `const GLubyte *`
    pub return_type: String,
    /// Raw parameter declarations, e.g. `GLuint shader, GLenum pname, GLint * params`
    pub params: String,
}

impl Function {
    /// Whether the return type ends in a pointer declarator.
    pub fn returns_pointer(&self) -> bool {
        self.return_type.ends_with('*')
    }
}

/// Complete parse result of one loader header.
#[derive(Debug, Default)]
pub struct ParsedHeader {
    /// Entry points in declaration order
    pub functions: Vec<Function>,
    /// OpenGL-only header text with the platform header inlined
    pub gl_only: String,
    /// Leading comment of the loader header, kept for attribution
    pub source_comment: String,
}
