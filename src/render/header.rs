//! Standalone OpenGL header: the loader's GL block plus plain declarations.

use crate::model::*;
use crate::render::BANNER;

/// Compose the header that replaces everything from the banner onward in the
/// target header.
pub fn compose(parsed: &ParsedHeader) -> String {
    let mut declarations = String::new();
    for func in &parsed.functions {
        declarations.push_str(&declaration(func));
    }

    format!(
        "{BANNER}\n\
         // It contains the OpenGL parts of `glad/gl.h` and added OpenGL function declarations.\n\
         {}\n\
         #ifndef __gl_h_\n\
         #define GLAD_API_PTR\n\
         {}{}\n\
         #endif\n",
        parsed.source_comment, parsed.gl_only, declarations
    )
}

/// `GLenum glGetError();` or `const GLubyte *glGetString(GLenum name);`
fn declaration(func: &Function) -> String {
    let space = if func.returns_pointer() { "" } else { " " };
    format!("{}{}{}({});\n", func.return_type, space, func.name, func.params)
}
