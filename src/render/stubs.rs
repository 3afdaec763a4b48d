//! Fake GL entry points for builds without a driver.
//!
//! Emits `fake_glad_load_gl.h` / `fake_glad_load_gl.c`. Every loaded function
//! gets a `fake_` stub, and `fakeGladLoadGL()` points glad's function pointers
//! at them. Most stubs are empty; the few whose results steer control flow in
//! callers (status queries, sync objects, error checks) return success.

use crate::model::*;
use crate::render::GeneratedFile;

pub const HEADER_NAME: &str = "fake_glad_load_gl.h";
pub const SOURCE_NAME: &str = "fake_glad_load_gl.c";

const GENERATED_BY: &str = "// Generated by `gen-gl`";

/// Name of the stub standing in for `name`.
pub fn stub_name(name: &str) -> String {
    format!("fake_{name}")
}

/// Body of the stub for a function, without the surrounding braces.
///
/// Exact names win over the return-type fallbacks.
pub fn stub_body(name: &str, return_type: &str) -> &'static str {
    match name {
        "glCheckFramebufferStatus" | "glCheckNamedFramebufferStatus" => {
            "return GL_FRAMEBUFFER_COMPLETE;"
        }
        "glClientWaitSync" => "return GL_CONDITION_SATISFIED;",
        "glGetShaderiv" => "if(pname == GL_COMPILE_STATUS) *params = GL_TRUE;",
        "glGetProgramiv" => "if(pname == GL_LINK_STATUS) *params = GL_TRUE;",
        "glFenceSync" => "return (GLsync)1;",
        "glGetError" | "glGetGraphicsResetStatus" => "return GL_NO_ERROR;",
        "glUnmapBuffer" | "glUnmapNamedBuffer" => "return GL_TRUE;",
        _ => match return_type {
            "GLuint" | "GLint" => "return 1;",
            "GLboolean" => "return GL_TRUE;",
            _ => "",
        },
    }
}

/// Render the header and source file.
pub fn generate(parsed: &ParsedHeader) -> [GeneratedFile; 2] {
    let header = format!(
        "{GENERATED_BY}\n\
         #ifndef FAKE_GLAD_LOAD_GL_H\n\
         #define FAKE_GLAD_LOAD_GL_H\n\
         void fakeGladLoadGL();\n\
         #endif\n"
    );

    let mut stubs = String::new();
    for func in &parsed.functions {
        stubs.push_str(&format!(
            "{} {}({}) {{{}}}\n",
            func.return_type,
            stub_name(&func.name),
            func.params,
            stub_body(&func.name, &func.return_type)
        ));
    }

    let assignments: Vec<String> = parsed
        .functions
        .iter()
        .map(|func| format!("glad_{} = {};", func.name, stub_name(&func.name)))
        .collect();

    let source = format!(
        "{GENERATED_BY}\n\
         #include \"glad/gl.h\"\n\
         \n\
         {stubs}\n\
         void fakeGladLoadGL() {{\n    \
         {}\n\
         }}\n",
        assignments.join("\n    ")
    );

    [
        GeneratedFile { name: HEADER_NAME, contents: header },
        GeneratedFile { name: SOURCE_NAME, contents: source },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn func(name: &str, return_type: &str, params: &str) -> Function {
        Function {
            name: name.to_string(),
            return_type: return_type.to_string(),
            params: params.to_string(),
        }
    }

    fn source_of(functions: Vec<Function>) -> String {
        let parsed = ParsedHeader { functions, ..Default::default() };
        let [_, source] = generate(&parsed);
        source.contents
    }

    #[test]
    fn get_error_returns_no_error() {
        assert_eq!(stub_body("glGetError", "GLenum"), "return GL_NO_ERROR;");
        assert_eq!(
            source_of(vec![func("glGetError", "GLenum", "")])
                .lines()
                .find(|l| l.contains("fake_glGetError("))
                .unwrap(),
            "GLenum fake_glGetError() {return GL_NO_ERROR;}"
        );
    }

    #[test]
    fn shader_and_program_queries_report_success() {
        assert_eq!(
            stub_body("glGetShaderiv", "void"),
            "if(pname == GL_COMPILE_STATUS) *params = GL_TRUE;"
        );
        assert_eq!(
            stub_body("glGetProgramiv", "void"),
            "if(pname == GL_LINK_STATUS) *params = GL_TRUE;"
        );
    }

    #[test]
    fn named_special_cases() {
        assert_eq!(stub_body("glCheckFramebufferStatus", "GLenum"), "return GL_FRAMEBUFFER_COMPLETE;");
        assert_eq!(stub_body("glCheckNamedFramebufferStatus", "GLenum"), "return GL_FRAMEBUFFER_COMPLETE;");
        assert_eq!(stub_body("glClientWaitSync", "GLenum"), "return GL_CONDITION_SATISFIED;");
        assert_eq!(stub_body("glFenceSync", "GLsync"), "return (GLsync)1;");
        assert_eq!(stub_body("glGetGraphicsResetStatus", "GLenum"), "return GL_NO_ERROR;");
        assert_eq!(stub_body("glUnmapBuffer", "GLboolean"), "return GL_TRUE;");
        assert_eq!(stub_body("glUnmapNamedBuffer", "GLboolean"), "return GL_TRUE;");
    }

    #[test]
    fn name_match_is_case_sensitive() {
        assert_eq!(stub_body("glgeterror", "GLenum"), "");
    }

    #[test]
    fn return_type_fallbacks() {
        assert_eq!(stub_body("glCreateShader", "GLuint"), "return 1;");
        assert_eq!(stub_body("glGetUniformLocation", "GLint"), "return 1;");
        assert_eq!(stub_body("glIsEnabled", "GLboolean"), "return GL_TRUE;");
        assert_eq!(stub_body("glClear", "void"), "");
        assert_eq!(stub_body("glGetString", "const GLubyte *"), "");
        assert_eq!(stub_body("glGetInteger64v", "GLuint64"), "");
    }

    #[test]
    fn header_file() {
        let [header, source] = generate(&ParsedHeader::default());
        assert_eq!(header.name, "fake_glad_load_gl.h");
        assert_eq!(source.name, "fake_glad_load_gl.c");
        assert_eq!(
            header.contents,
            "// Generated by `gen-gl`\n#ifndef FAKE_GLAD_LOAD_GL_H\n#define FAKE_GLAD_LOAD_GL_H\nvoid fakeGladLoadGL();\n#endif\n"
        );
    }

    #[test]
    fn source_file_layout() {
        let source = source_of(vec![
            func("glClear", "void", "GLbitfield mask"),
            func("glGetError", "GLenum", ""),
        ]);
        let expected = "// Generated by `gen-gl`\n\
#include \"glad/gl.h\"\n\
\n\
void fake_glClear(GLbitfield mask) {}\n\
GLenum fake_glGetError() {return GL_NO_ERROR;}\n\
\n\
void fakeGladLoadGL() {\n\
\x20   glad_glClear = fake_glClear;\n\
\x20   glad_glGetError = fake_glGetError;\n\
}\n";
        assert_eq!(source, expected);
    }

    #[test]
    fn one_assignment_per_function() {
        let functions = vec![
            func("glClear", "void", "GLbitfield mask"),
            func("glIsEnabled", "GLboolean", "GLenum cap"),
            func("glFenceSync", "GLsync", "GLenum condition, GLbitfield flags"),
        ];
        let source = source_of(functions.clone());
        let assignments: Vec<&str> = source.lines().filter(|l| l.contains(" = fake_")).collect();
        assert_eq!(assignments.len(), functions.len());
        for (line, func) in assignments.iter().zip(&functions) {
            assert_eq!(line.trim(), format!("glad_{0} = fake_{0};", func.name));
        }
    }
}
