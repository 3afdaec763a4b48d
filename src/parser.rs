//! Loader header parser — line-by-line state machine.
//!
//! Recognizes the handful of fixed markers a glad-generated `gl.h` carries.
//! Nothing is validated: a header missing the markers simply yields empty
//! sections, and typedefs without a loaded pointer variable are skipped.

use crate::model::*;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

// -- Markers ------------------------------------------------------------------

const COMMENT_CLOSE: &str = "*/";
const PLATFORM_END: &str = "#endif /* GLAD_PLATFORM_H_ */";
const PLATFORM_INCLUDE: &str = "#include <KHR/khrplatform.h>";
const VERSION_GUARD: &str = "#define GL_VERSION_1_0 1";
const SIGNATURE_START: &str = "typedef";
const API_PTR: &str = "GLAD_API_PTR";
const POINTER_PREFIX: &str = "glad_";

// `GLAD_API_CALL PFNGLGETERRORPROC glad_glGetError;`
static RE_POINTER_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^GLAD_API_CALL (PFNGL[^ ]*) ([^ ]*)$").unwrap());

// -- Scanner ------------------------------------------------------------------

/// Position of the scanner relative to the sections of the loader header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// No line seen yet
    BeforeComment,
    /// Inside the leading comment block
    InComment,
    /// Watching for pointer typedefs, pointer variables and the platform guard
    ScanningDeclarations,
    /// Copying the OpenGL-only text
    InOpenGLBlock,
}

struct Scanner<'a> {
    state: ScanState,
    platform_header: &'a str,
    source_comment: String,
    gl_only: String,
    signature_lines: Vec<&'a str>,
    names_by_pointer: HashMap<&'a str, &'a str>,
}

impl<'a> Scanner<'a> {
    fn new(platform_header: &'a str) -> Self {
        Scanner {
            state: ScanState::BeforeComment,
            platform_header,
            source_comment: String::new(),
            gl_only: String::new(),
            signature_lines: Vec::new(),
            names_by_pointer: HashMap::new(),
        }
    }

    /// Feed one line, including its terminating newline.
    fn step(&mut self, line: &'a str) {
        match self.state {
            ScanState::InOpenGLBlock => {
                if line.starts_with(VERSION_GUARD) {
                    self.state = ScanState::ScanningDeclarations;
                } else if line.starts_with(PLATFORM_INCLUDE) {
                    self.gl_only.push_str(self.platform_header);
                } else {
                    self.gl_only.push_str(line);
                }
            }
            ScanState::BeforeComment | ScanState::InComment => {
                self.source_comment.push_str(line);
                self.state = if line.contains(COMMENT_CLOSE) {
                    ScanState::ScanningDeclarations
                } else {
                    ScanState::InComment
                };
                self.scan_declaration(line);
            }
            ScanState::ScanningDeclarations => self.scan_declaration(line),
        }
    }

    fn scan_declaration(&mut self, line: &'a str) {
        if line.starts_with(SIGNATURE_START) && line.contains(API_PTR) {
            self.signature_lines.push(line);
        } else if let Some((pointer, name)) = parse_pointer_declaration(line) {
            self.names_by_pointer.insert(pointer, name);
        } else if line.starts_with(PLATFORM_END) {
            self.state = ScanState::InOpenGLBlock;
        }
    }

    fn finish(self) -> ParsedHeader {
        let mut functions = Vec::new();
        let mut skipped = 0usize;

        for line in &self.signature_lines {
            let mapped = split_signature(line).and_then(|(return_type, pointer, params)| {
                self.names_by_pointer
                    .get(pointer)
                    .map(|name| Function {
                        name: name.to_string(),
                        return_type: return_type.to_string(),
                        params: params.to_string(),
                    })
            });
            match mapped {
                Some(func) => functions.push(func),
                None => skipped += 1,
            }
        }

        log::debug!(
            "extracted {} functions, skipped {} unmapped signatures",
            functions.len(),
            skipped
        );

        ParsedHeader {
            functions,
            gl_only: self.gl_only,
            source_comment: self.source_comment,
        }
    }
}

// -- Public API ---------------------------------------------------------------

/// Parse a loader header, inlining `platform_header` where it is included.
pub fn parse(loader_header: &str, platform_header: &str) -> ParsedHeader {
    let mut scanner = Scanner::new(platform_header);

    for line in loader_header.split_inclusive('\n') {
        scanner.step(line);
    }

    scanner.finish()
}

/// Split a pointer typedef into `(return type, pointer type, params)`.
///
/// `typedef const GLubyte * (GLAD_API_PTR *PFNGLGETSTRINGPROC)(GLenum name);`
/// → `("const GLubyte *", "PFNGLGETSTRINGPROC", "GLenum name")`.
/// Only the first two `(` split; the parameter list keeps any nested
/// parentheses. Returns `None` for lines with fewer than two.
pub fn split_signature(line: &str) -> Option<(&str, &str, &str)> {
    let mut parts = line.splitn(3, '(');
    let (typedef_result, pointer, params) = (parts.next()?, parts.next()?, parts.next()?);

    let return_type = typedef_result
        .strip_prefix("typedef")
        .unwrap_or(typedef_result)
        .trim();
    let pointer = pointer
        .strip_prefix("GLAD_API_PTR *")
        .unwrap_or(pointer)
        .trim_matches(')');
    let params = params.trim();
    let params = params.strip_suffix(");").unwrap_or(params);

    Some((return_type, pointer, params))
}

/// Extract `(pointer type, function name)` from a loader variable declaration.
///
/// `GLAD_API_CALL PFNGLGETERRORPROC glad_glGetError;` → `("PFNGLGETERRORPROC", "glGetError")`.
pub fn parse_pointer_declaration(line: &str) -> Option<(&str, &str)> {
    let caps = RE_POINTER_DECL.captures(line.trim_end())?;
    let pointer = caps.get(1)?.as_str();
    let name = caps.get(2)?.as_str();
    let name = name.strip_prefix(POINTER_PREFIX).unwrap_or(name);
    let name = name.strip_suffix(';').unwrap_or(name);
    Some((pointer, name))
}
