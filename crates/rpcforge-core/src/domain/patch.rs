//! Text-splice patching of hand-written source files.
//!
//! Nothing here parses the target language. Insertion points come from a
//! handful of literal anchors:
//!
//! | Anchor                 | Used for                                   |
//! |------------------------|--------------------------------------------|
//! | `package ` line        | where new imports go                       |
//! | first `import `        | keeps new imports grouped with old ones    |
//! | last `}`               | where a new member declaration goes        |
//! | `</set>` / `</beans>`  | service wiring registration                |
//!
//! Every function takes the current file text and returns the new text; the
//! caller owns the read and the whole-file rewrite.

use crate::domain::entities::{DerivedNames, ProjectDescriptor};
use crate::domain::error::DomainError;
use crate::domain::naming::lower_first;
use crate::domain::value_objects::DuplicatePolicy;

const CLOSING_SCOPE: char = '}';
const PACKAGE_KEYWORD: &str = "package ";
const IMPORT_KEYWORD: &str = "import ";
const INDENT: &str = "    ";

/// A member to append, plus the text that identifies it when it is already
/// present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Substring whose presence means the member already exists.
    pub probe: String,
    /// The full declaration, indented, without a trailing newline.
    pub text: String,
}

/// Result of [`SourcePatcher::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// New file text.
    Patched(String),
    /// The declaration was already present and the policy said skip.
    AlreadyPresent,
}

pub struct SourcePatcher;

impl SourcePatcher {
    // ── Imports ──────────────────────────────────────────────────────────────

    /// Insert `import X;` for every name not already imported verbatim.
    ///
    /// The block goes after the line holding the `package` statement, or
    /// directly before the first existing import line if that occurs
    /// earlier. Line endings follow the package line (`\n` or `\r\n`).
    /// Returns the input unchanged when there is nothing to add, and
    /// `MissingPackageHeader` when there is something to add but no package
    /// line to anchor it.
    pub fn insert_imports<S: AsRef<str>>(
        content: &str,
        fq_names: &[S],
    ) -> Result<String, DomainError> {
        let mut lines: Vec<String> = Vec::new();
        for name in fq_names {
            let line = format!("{IMPORT_KEYWORD}{};", name.as_ref());
            if !content.contains(&line) && !lines.contains(&line) {
                lines.push(line);
            }
        }

        if lines.is_empty() {
            return Ok(content.to_string());
        }

        let package_end =
            package_statement_end(content).ok_or(DomainError::MissingPackageHeader)?;
        let eol = line_ending(&content[..package_end]);

        let insert_at = match first_import_line(content) {
            Some(first_import) if first_import < package_end => first_import,
            _ => package_end,
        };

        let mut out = String::with_capacity(content.len() + lines.len() * 48);
        out.push_str(&content[..insert_at]);
        if !out.is_empty() && !out.ends_with('\n') {
            out.push_str(eol);
        }
        out.push_str(eol);
        for line in &lines {
            out.push_str(line);
            out.push_str(eol);
        }
        out.push_str(&content[insert_at..]);
        Ok(out)
    }

    // ── Declarations ─────────────────────────────────────────────────────────

    /// Append `declaration` immediately before the last closing brace.
    ///
    /// The result is `head + "\n\n" + declaration + "\n" + indent + "}" + tail`,
    /// where `head` loses at most one line break and `indent` is whatever
    /// already preceded the brace on its line. Everything else is kept byte
    /// for byte. CRLF files get CRLF separators. This always appends;
    /// duplicate detection lives in [`apply`](Self::apply).
    pub fn append_declaration(content: &str, declaration: &str) -> Result<String, DomainError> {
        let brace = content
            .rfind(CLOSING_SCOPE)
            .ok_or(DomainError::MissingClosingScope {
                delimiter: CLOSING_SCOPE,
            })?;

        let before = &content[..brace];
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let (head, indent) = if before[line_start..].chars().all(char::is_whitespace) {
            (&before[..line_start], &before[line_start..])
        } else {
            (before, "")
        };

        let eol = line_ending(head);
        let head = head
            .strip_suffix("\r\n")
            .or_else(|| head.strip_suffix('\n'))
            .unwrap_or(head);
        let declaration = if eol == "\r\n" {
            declaration.replace('\n', "\r\n")
        } else {
            declaration.to_string()
        };

        let mut out = String::with_capacity(content.len() + declaration.len() + 6);
        out.push_str(head);
        out.push_str(eol);
        out.push_str(eol);
        out.push_str(&declaration);
        out.push_str(eol);
        out.push_str(indent);
        out.push_str(&content[brace..]);
        Ok(out)
    }

    pub fn contains_declaration(content: &str, declaration: &Declaration) -> bool {
        content.contains(&declaration.probe)
    }

    /// Imports first, then the declaration, honouring `policy` when the
    /// declaration is already present.
    pub fn apply<S: AsRef<str>>(
        content: &str,
        imports: &[S],
        declaration: &Declaration,
        policy: DuplicatePolicy,
    ) -> Result<PatchOutcome, DomainError> {
        if Self::contains_declaration(content, declaration) {
            match policy {
                DuplicatePolicy::Skip => return Ok(PatchOutcome::AlreadyPresent),
                DuplicatePolicy::Reject => {
                    return Err(DomainError::DuplicateDeclaration {
                        probe: declaration.probe.trim().to_string(),
                    });
                }
                DuplicatePolicy::Append => {}
            }
        }

        // Brace checked before imports; a file missing either anchor is left as is.
        if !content.contains(CLOSING_SCOPE) {
            return Err(DomainError::MissingClosingScope {
                delimiter: CLOSING_SCOPE,
            });
        }

        let with_imports = Self::insert_imports(content, imports)?;
        Self::append_declaration(&with_imports, &declaration.text).map(PatchOutcome::Patched)
    }

    // ── Declaration builders ─────────────────────────────────────────────────

    /// Interface operation bound to `method_name` as its route.
    pub fn interface_method(names: &DerivedNames, method_name: &str) -> Declaration {
        let resp = &names.response_dto;
        let req = &names.request_dto;

        let text = [
            format!("{INDENT}@POST"),
            format!("{INDENT}@Consumes({{ \"application/json; charset=UTF-8\" }})"),
            format!("{INDENT}@Produces({{ \"application/json; charset=UTF-8\" }})"),
            format!("{INDENT}@Path(\"{method_name}\")"),
            format!("{INDENT}{resp} {method_name}(@RequestBody {req} requestDTO);"),
        ]
        .join("\n");

        Declaration {
            probe: format!("{resp} {method_name}("),
            text,
        }
    }

    /// Implementation that forwards the request through the project's proxy.
    ///
    /// Blank registry fields produce blank identifiers in the output rather
    /// than an error.
    pub fn implementation_method(
        names: &DerivedNames,
        method_name: &str,
        project: &ProjectDescriptor,
    ) -> Declaration {
        let resp = &names.response_dto;
        let req = &names.request_dto;
        let constant_ref = format!("{}.{}", project.constants_type_name(), names.constant);
        let proxy = lower_first(project.proxy_type_name());

        let text = [
            format!("{INDENT}/**"),
            format!("{INDENT} * generated method"),
            format!("{INDENT} * @param requestDTO"),
            format!("{INDENT} * @return"),
            format!("{INDENT} */"),
            format!("{INDENT}@Override"),
            format!("{INDENT}@GatewayLogCfg(logModule = {constant_ref})"),
            format!("{INDENT}public {resp} {method_name}({req} requestDTO) {{"),
            format!("{INDENT}{INDENT}{resp} responseDTO = new {resp}();"),
            format!("{INDENT}{INDENT}responseDTO = ({resp}) {proxy}.invoke({constant_ref},"),
            format!("{INDENT}{INDENT}{INDENT}requestDTO, responseDTO);"),
            format!("{INDENT}{INDENT}return responseDTO;"),
            format!("{INDENT}}}"),
        ]
        .join("\n");

        Declaration {
            probe: format!("public {resp} {method_name}("),
            text,
        }
    }

    /// String constant whose value is its own name.
    pub fn constant_field(constant: &str) -> Declaration {
        Declaration {
            probe: format!("String {constant} ="),
            text: format!("{INDENT}public static final String {constant} = \"{constant}\";"),
        }
    }

    // ── Service wiring ───────────────────────────────────────────────────────

    /// Register the interface in the service wiring XML.
    ///
    /// Returns `None` when a bean for the interface is already declared or
    /// referenced. The `<ref>` line goes on its own line before the `</set>`
    /// following the `services` constructor argument (skipped if that anchor
    /// is missing); the `<dubbo:service>` block goes before the last
    /// `</beans>`, or at the end of the file when there is none.
    pub fn register_service_bean(
        xml: &str,
        interface_name: &str,
        interface_fq_name: &str,
    ) -> Option<String> {
        let bean_id = format!("dsf{interface_name}");
        if xml.contains(&format!("id=\"{bean_id}\""))
            || xml.contains(&format!("<ref bean=\"{bean_id}\""))
        {
            return None;
        }

        let mut out = xml.to_string();

        if let Some(set_close) = find_services_set_close(&out) {
            let line_start = out[..set_close].rfind('\n').map_or(0, |i| i + 1);
            let indent: String = out[line_start..set_close]
                .chars()
                .take_while(|c| c.is_whitespace())
                .collect();
            let ref_line = format!("{indent}{INDENT}<ref bean=\"{bean_id}\"/>\n");
            out.insert_str(line_start, &ref_line);
        }

        let service_block = format!(
            "\n{INDENT}<dubbo:service id=\"{bean_id}\" ref=\"{impl_ref}\"\n\
             {pad}interface=\"{interface_fq_name}\"\n\
             {pad}protocol=\"tcdsfrest\">\n\
             {INDENT}</dubbo:service>\n",
            impl_ref = lower_first(interface_name),
            pad = " ".repeat(19),
        );

        match out.rfind("</beans>") {
            Some(idx) => out.insert_str(idx, &service_block),
            None => out.push_str(&service_block),
        }

        Some(out)
    }
}

/// Each line with the byte offset it starts at. Lines keep their terminator.
fn lines_with_offsets(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content.split_inclusive('\n').scan(0, |offset, line| {
        let start = *offset;
        *offset += line.len();
        Some((start, line))
    })
}

/// Offset just past the line holding the `package` statement.
///
/// Only the first line that starts with the keyword counts, and its `;`
/// must be on that same line.
fn package_statement_end(content: &str) -> Option<usize> {
    let (start, line) = lines_with_offsets(content)
        .find(|(_, line)| line.trim_start().starts_with(PACKAGE_KEYWORD))?;
    line.contains(';').then_some(start + line.len())
}

fn first_import_line(content: &str) -> Option<usize> {
    lines_with_offsets(content)
        .find(|(_, line)| line.trim_start().starts_with(IMPORT_KEYWORD))
        .map(|(start, _)| start)
}

/// `"\r\n"` when `text` ends with one, `"\n"` otherwise.
fn line_ending(text: &str) -> &'static str {
    if text.ends_with("\r\n") { "\r\n" } else { "\n" }
}

fn find_services_set_close(xml: &str) -> Option<usize> {
    let anchor = xml.find("<constructor-arg name=\"services\">")?;
    let set_open = anchor + xml[anchor..].find("<set")?;
    Some(set_open + xml[set_open..].find("</set>")?)
}
