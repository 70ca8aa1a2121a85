//! Uniform & Sampler Extraction
//!
//! Best-effort, line-based extraction of declared uniform names from
//! fragment shader text, in textual declaration order. The list feeds
//! uniform-buffer layout sorting downstream; sampler-typed declarations go
//! to a separate list so texture bindings can be wired apart from plain
//! values.
//!
//! Never errors: unrecognized lines are skipped, and preprocessor
//! conditionals or nested brace groups inside a block do not derail later
//! members. This is pattern matching, not parsing.

/// Names declared by a fragment shader, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderReflection {
    /// Plain uniform names, including interface-block members.
    pub uniforms: Vec<String>,
    /// Sampler-typed uniform names.
    pub samplers: Vec<String>,
}

/// Extract uniform and sampler names from fragment shader text.
///
/// Recognizes `uniform <type> <name>;` declarations and
/// `uniform <Block> { … };` bodies (each member name is collected).
/// Array suffixes are stripped (`lights[4]` extracts `lights`).
#[must_use]
pub fn reflect_uniforms(fragment_source: &str) -> ShaderReflection {
    let mut reflection = ShaderReflection::default();
    let mut block_depth = 0usize;

    for line in fragment_source.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("//") {
            continue;
        }

        if block_depth > 0 {
            if trimmed.starts_with('#') {
                continue;
            }
            let (members, new_depth) = scan_block_line(trimmed, block_depth);
            if block_depth == 1 {
                for member in members {
                    push_member(&mut reflection.uniforms, member);
                }
            }
            block_depth = new_depth;
            continue;
        }

        let Some(decl) = keyword_tail(trimmed, "uniform") else {
            continue;
        };

        if let Some(brace) = decl.find('{') {
            // Interface block. A one-line body closes immediately.
            let body = &decl[brace + 1..];
            if let Some(close) = body.find('}') {
                for member in split_members(&body[..close]) {
                    push_member(&mut reflection.uniforms, member);
                }
            } else {
                for member in split_members(body) {
                    push_member(&mut reflection.uniforms, member);
                }
                block_depth = 1;
            }
            continue;
        }

        // Plain declaration: `uniform <type> <name>;`
        let mut tokens = decl.split_whitespace();
        let Some(ty) = tokens.next() else { continue };
        let Some(name) = tokens.next() else { continue };
        if ty.starts_with("sampler") || ty.starts_with("texture") {
            push_member_name(&mut reflection.samplers, name);
        } else {
            push_member_name(&mut reflection.uniforms, name);
        }
    }

    reflection
}

/// Process one line inside an open block. Returns the member declarations
/// found at depth 1 and the new depth (0 when the block closed).
fn scan_block_line(trimmed: &str, depth: usize) -> (Vec<&str>, usize) {
    let mut new_depth = depth;
    for ch in trimmed.chars() {
        match ch {
            '{' => new_depth += 1,
            '}' => new_depth = new_depth.saturating_sub(1),
            _ => {}
        }
    }

    // Nested brace groups (struct declarations, initializers) are skipped
    // wholesale; only flat member lines are collected.
    if depth > 1 || trimmed.contains('{') {
        return (Vec::new(), new_depth);
    }

    let body = match trimmed.find('}') {
        Some(idx) => &trimmed[..idx],
        None => trimmed,
    };
    (split_members(body), new_depth)
}

/// Split `vec4 a; vec4 b;` into individual member declarations.
fn split_members(segment: &str) -> Vec<&str> {
    segment
        .split(';')
        .map(str::trim)
        .filter(|member| !member.is_empty())
        .collect()
}

/// Collect the variable name of one member declaration.
fn push_member(names: &mut Vec<String>, member: &str) {
    if let Some(name) = member.split_whitespace().last() {
        push_member_name(names, name);
    }
}

/// Strip `;` and array suffixes from a declared name and record it.
fn push_member_name(names: &mut Vec<String>, raw: &str) {
    let name = raw.trim_end_matches(';');
    let name = match name.find('[') {
        Some(idx) => &name[..idx],
        None => name,
    };
    if !name.is_empty() {
        names.push(name.to_string());
    }
}

/// The text after `keyword`, if `line` starts with it on a word boundary.
fn keyword_tail<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(keyword)?;
    if rest.starts_with(char::is_whitespace) {
        Some(rest.trim_start())
    } else {
        None
    }
}
