//! GLSL Preprocessor
//!
//! Rewrites portable-dialect GLSL into backend-specific source text. The
//! transformation is a fixed sequence of pure text passes:
//!
//! 1. strip `//` comments and blank lines
//! 2. pull the `precision` qualifier out for canonical placement
//! 3. assign explicit `set`/`binding`/`location` qualifiers
//!    (explicit-binding backends only; UBOs in set 0, textures and
//!    samplers in set 1)
//! 4. resolve the portable sampler macros per binding model
//! 5. assemble the final text (version directive, stage and entry
//!    defines, keyword aliases, user defines, fragment output shims)
//! 6. downgrade to GLSL ES 1.00 (legacy backends only: block flattening,
//!    draw-buffers MRT rewrite, `layout` stripping, builtin renames)
//! 7. give remaining unlocated fragment outputs location 0
//!    (explicit-binding backends only)
//!
//! The pipeline is deliberately tolerant: text that matches no pattern
//! passes through unchanged. Input is expected to already conform to the
//! portable dialect; nothing here validates GLSL semantics. The one hard
//! error is an explicit-binding backend with combined texture/sampler
//! objects, rejected before any pass runs.

use crate::errors::{GlintError, Result};
use crate::shader::defines::DefineMap;
use crate::shader::source::{ShaderFeatures, ShaderSource, ShaderStage};
use crate::vendor::{VendorInfo, ViewportOrigin};

const DEFAULT_PRECISION: &str = "precision mediump float;";

// ─── Entry Point ─────────────────────────────────────────────────────────────

/// Transform one stage of portable GLSL into backend-specific source.
///
/// Deterministic and stateless: the same inputs always produce the same
/// text. Fails only when `vendor` requires explicit binding locations but
/// models textures and samplers as one combined object.
pub fn preprocess(
    vendor: &VendorInfo,
    source: &ShaderSource,
    defines: &DefineMap,
    features: ShaderFeatures,
) -> Result<String> {
    if vendor.explicit_bindings && !vendor.separate_samplers {
        return Err(GlintError::CombinedSamplerBinding);
    }

    let stage = source.stage;
    log::debug!(
        "preprocessing {stage:?} stage for GLSL {}",
        vendor.glsl_version
    );

    let stripped = strip_comments(&source.text);
    let (precision, mut body) = split_precision(&stripped);

    if vendor.explicit_bindings {
        body = assign_bindings(stage, &body);
    }
    body = resolve_sampler_macros(&body, vendor.separate_samplers);

    let mrt = features.contains(ShaderFeatures::MRT);
    let mut text = assemble(vendor, stage, &precision, defines, mrt, &body);

    if vendor.glsl_version.is_legacy() {
        text = downgrade_to_legacy(stage, &text, mrt);
    }
    if vendor.explicit_bindings && stage == ShaderStage::Fragment {
        text = locate_fragment_outputs(&text);
    }
    Ok(text)
}

// ─── Comments & Precision ────────────────────────────────────────────────────

/// Remove `//` line comments and blank lines. Idempotent.
///
/// Block comments (`/* … */`) are a known limitation and pass through
/// untouched.
#[must_use]
pub fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.lines() {
        let code = match line.find("//") {
            Some(idx) => &line[..idx],
            None => line,
        };
        let code = code.trim_end();
        if code.trim_start().is_empty() {
            continue;
        }
        out.push_str(code);
        out.push('\n');
    }
    out
}

/// Pull the first `precision` line out of `text` for canonical placement.
/// Any further `precision` lines are dropped. Falls back to
/// `precision mediump float;` when the source declares none.
fn split_precision(text: &str) -> (String, String) {
    let mut precision: Option<String> = None;
    let mut rest = String::with_capacity(text.len());
    for line in text.lines() {
        let trimmed = line.trim();
        if strip_keyword(trimmed, "precision").is_some() {
            if precision.is_none() {
                precision = Some(trimmed.to_string());
            }
            continue;
        }
        rest.push_str(line);
        rest.push('\n');
    }
    (
        precision.unwrap_or_else(|| DEFAULT_PRECISION.to_string()),
        rest,
    )
}

// ─── Explicit Binding Layout ─────────────────────────────────────────────────

/// Assign `layout(...)` qualifiers for explicit-binding backends.
///
/// Uniform blocks receive `set = 0` with a monotonically increasing
/// binding; fragment `sampler2D` uniforms are split into a
/// `texture2D T_<name>` / `sampler S_<name>` pair sharing a binding
/// counter in `set = 1`. Stage inputs and outputs receive sequential
/// `location` indices, counted independently per direction. Lines already
/// starting with `layout` are trusted as hand-qualified.
fn assign_bindings(stage: ShaderStage, text: &str) -> String {
    let mut ubo_binding = 0u32;
    let mut tex_binding = 0u32;
    let mut in_location = 0u32;
    let mut out_location = 0u32;
    let mut inside_block = false;

    let mut out = String::with_capacity(text.len() + 128);
    for line in text.lines() {
        let trimmed = line.trim();

        if inside_block {
            out.push_str(line);
            out.push('\n');
            if trimmed.contains('}') {
                inside_block = false;
            }
            continue;
        }

        if trimmed.starts_with("layout") {
            out.push_str(line);
            out.push('\n');
            continue;
        }

        if let Some(decl) = strip_keyword(trimmed, "uniform") {
            if trimmed.contains('{') {
                out.push_str(&format!("layout(set = 0, binding = {ubo_binding}) {trimmed}\n"));
                ubo_binding += 1;
                if !trimmed.contains('}') {
                    inside_block = true;
                }
                continue;
            }
            if let Some(name) = sampler2d_name(decl) {
                match stage {
                    ShaderStage::Fragment => {
                        out.push_str(&format!(
                            "layout(set = 1, binding = {tex_binding}) uniform texture2D T_{name};\n"
                        ));
                        out.push_str(&format!(
                            "layout(set = 1, binding = {}) uniform sampler S_{name};\n",
                            tex_binding + 1
                        ));
                        tex_binding += 2;
                    }
                    ShaderStage::Vertex => {
                        // Raw sampler uniforms are fragment-only on the
                        // target backend.
                        log::warn!("dropping vertex-stage sampler uniform {name:?}");
                    }
                }
                continue;
            }
            // Loose non-sampler uniform: outside the recognized patterns.
            out.push_str(line);
            out.push('\n');
            continue;
        }

        let rewritten = match stage {
            ShaderStage::Vertex => {
                if let Some(decl) =
                    strip_keyword(trimmed, "attribute").or_else(|| strip_keyword(trimmed, "in"))
                {
                    let loc = in_location;
                    in_location += 1;
                    Some(format!("layout(location = {loc}) in {decl}"))
                } else if let Some(decl) =
                    strip_keyword(trimmed, "varying").or_else(|| strip_keyword(trimmed, "out"))
                {
                    let loc = out_location;
                    out_location += 1;
                    Some(format!("layout(location = {loc}) out {decl}"))
                } else {
                    None
                }
            }
            ShaderStage::Fragment => {
                // Fragment `out` declarations are located by the final
                // pass; only inputs are numbered here.
                if let Some(decl) =
                    strip_keyword(trimmed, "varying").or_else(|| strip_keyword(trimmed, "in"))
                {
                    let loc = in_location;
                    in_location += 1;
                    Some(format!("layout(location = {loc}) in {decl}"))
                } else {
                    None
                }
            }
        };

        match rewritten {
            Some(decl) => {
                out.push_str(&decl);
                out.push('\n');
            }
            None => {
                out.push_str(line);
                out.push('\n');
            }
        }
    }
    out
}

/// Parse the variable name out of a `sampler2D <name>;` declaration tail.
fn sampler2d_name(decl: &str) -> Option<&str> {
    let rest = strip_keyword(decl, "sampler2D")?;
    let name = rest.trim_end().trim_end_matches(';').trim_end();
    if name.is_empty() || !name.chars().all(is_ident_char) {
        return None;
    }
    Some(name)
}

// ─── Sampler Macros ──────────────────────────────────────────────────────────

/// Resolve the portable sampler macros for the vendor's binding model.
///
/// Combined model (WebGL): a `sampler2D` is one object, so every macro
/// collapses to the bare name (declarations keep the type).
///
/// Separate model (WebGPU-style): parameters become texture/sampler pairs
/// with `T_`/`S_` prefixes; `PU_SAMPLER_2D` forwards through `SAMPLER_2D`
/// with a `P_` parameter prefix so parameter access and global access
/// build the same combined expression.
fn resolve_sampler_macros(text: &str, separate: bool) -> String {
    if separate {
        let out = replace_macro_calls(text, "PD_SAMPLER_2D", |arg| {
            format!("texture2D T_P_{arg}, sampler S_P_{arg}")
        });
        let out = replace_macro_calls(&out, "PP_SAMPLER_2D", |arg| format!("T_{arg}, S_{arg}"));
        let out = replace_macro_calls(&out, "PU_SAMPLER_2D", |arg| format!("SAMPLER_2D(P_{arg})"));
        replace_macro_calls(&out, "SAMPLER_2D", |arg| {
            format!("sampler2D(T_{arg}, S_{arg})")
        })
    } else {
        let out = replace_macro_calls(text, "PD_SAMPLER_2D", |arg| format!("sampler2D {arg}"));
        let out = replace_macro_calls(&out, "PP_SAMPLER_2D", |arg| arg.to_string());
        let out = replace_macro_calls(&out, "PU_SAMPLER_2D", |arg| arg.to_string());
        replace_macro_calls(&out, "SAMPLER_2D", |arg| arg.to_string())
    }
}

/// Replace every call of macro `name` with `expand(argument)`. The macro
/// name must sit on a word boundary and be immediately followed by `(`;
/// arguments may contain nested parentheses.
fn replace_macro_calls(text: &str, name: &str, expand: impl Fn(&str) -> String) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < bytes.len() {
        let Some(offset) = text[i..].find(name) else {
            out.push_str(&text[i..]);
            break;
        };
        let start = i + offset;
        let after = start + name.len();
        let bounded = start == 0 || !is_ident_char(bytes[start - 1] as char);
        if bounded && after < bytes.len() && bytes[after] == b'(' {
            if let Some(close) = find_matching_paren(text, after) {
                out.push_str(&text[i..start]);
                out.push_str(&expand(text[after + 1..close].trim()));
                i = close + 1;
                continue;
            }
        }
        out.push_str(&text[i..after]);
        i = after;
    }
    out
}

/// Index of the `)` matching the `(` at `open`.
fn find_matching_paren(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, ch) in text[open..].char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + idx);
                }
            }
            _ => {}
        }
    }
    None
}

// ─── Final Assembly ──────────────────────────────────────────────────────────

/// Build the final shader text around the transformed body.
fn assemble(
    vendor: &VendorInfo,
    stage: ShaderStage,
    precision: &str,
    defines: &DefineMap,
    mrt: bool,
    body: &str,
) -> String {
    let legacy = vendor.glsl_version.is_legacy();
    let mut out = String::with_capacity(body.len() + 256);

    out.push_str(vendor.glsl_version.directive());
    out.push('\n');

    if legacy && mrt && stage == ShaderStage::Fragment {
        out.push_str("#extension GL_EXT_draw_buffers : require\n");
        // EXT_draw_buffers forbids mixing gl_FragColor with gl_FragData.
        out.push_str("#define gl_FragColor gl_FragData[0]\n");
    }

    out.push_str(precision);
    out.push('\n');

    out.push_str("#define ");
    out.push_str(stage.marker_define());
    out.push('\n');

    if !legacy {
        match stage {
            ShaderStage::Vertex => {
                out.push_str("#define attribute in\n");
                out.push_str("#define varying out\n");
            }
            ShaderStage::Fragment => {
                out.push_str("#define varying in\n");
            }
        }
    }

    out.push_str(&format!("#define {} main\n", stage.entry_point()));

    if vendor.viewport_origin == ViewportOrigin::UpperLeft {
        out.push_str("#define ORIGIN_UPPER_LEFT\n");
    }

    for (key, value) in defines.iter() {
        out.push_str(&format!("#define {key} {value}\n"));
    }

    // Post-1.00 dialects have no gl_FragColor; shim it onto a named
    // output so legacy-style bodies keep compiling.
    if !legacy && stage == ShaderStage::Fragment && contains_word(body, "gl_FragColor") {
        out.push_str("#define gl_FragColor fragColor\n");
        out.push_str("out vec4 fragColor;\n");
        if mrt {
            out.push_str("#define gl_FragData fragData\n");
            out.push_str("out vec4 fragData[4];\n");
        }
    }

    out.push_str(body);
    out
}

// ─── Legacy Downgrade ────────────────────────────────────────────────────────

/// Rewrite assembled source for GLSL ES 1.00 targets.
fn downgrade_to_legacy(stage: ShaderStage, text: &str, mrt: bool) -> String {
    let mut out = flatten_uniform_blocks(text);
    if mrt && stage == ShaderStage::Fragment {
        out = rewrite_mrt_outputs(&out);
    }
    out = strip_layout_qualifiers(&out);
    rename_legacy_builtins(&out)
}

/// Interface blocks predate ES 3.00; flatten each into a run of plain
/// `uniform <member>;` statements. Preprocessor conditionals inside a
/// block are kept in place.
fn flatten_uniform_blocks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut inside_block = false;
    for line in text.lines() {
        let trimmed = line.trim();

        if inside_block {
            if trimmed.starts_with('#') {
                out.push_str(line);
                out.push('\n');
            } else if let Some(close) = trimmed.find('}') {
                flatten_members(&trimmed[..close], &mut out);
                inside_block = false;
            } else {
                flatten_members(trimmed, &mut out);
            }
            continue;
        }

        if let Some(decl) = strip_keyword(trimmed, "uniform") {
            if let Some(brace) = decl.find('{') {
                let after = &decl[brace + 1..];
                if let Some(close) = after.find('}') {
                    flatten_members(&after[..close], &mut out);
                } else {
                    flatten_members(after, &mut out);
                    inside_block = true;
                }
                continue;
            }
        }

        out.push_str(line);
        out.push('\n');
    }
    out
}

fn flatten_members(segment: &str, out: &mut String) {
    for member in segment.split(';') {
        let member = member.trim();
        if member.is_empty() {
            continue;
        }
        out.push_str("uniform ");
        out.push_str(member);
        out.push_str(";\n");
    }
}

/// Draw-buffers MRT rewrite: collect `layout(location = N) out vec4 x;`
/// declarations, re-declare them as locals at the top of `main`, and write
/// each to its `gl_FragData` slot at the end of `main`.
fn rewrite_mrt_outputs(text: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    let mut outputs: Vec<(u32, String)> = Vec::new();

    for line in text.lines() {
        if let Some(output) = parse_located_output(line.trim()) {
            outputs.push(output);
        } else {
            kept.push(line);
        }
    }
    if outputs.is_empty() {
        return text.to_string();
    }

    // `void main` also matches the portable `mainVS`/`mainPS` spellings,
    // which the entry rename define maps back to `main`.
    let main_idx = kept.iter().position(|l| l.contains("void main"));
    let open_idx = main_idx.and_then(|idx| {
        kept[idx..]
            .iter()
            .position(|l| l.contains('{'))
            .map(|o| idx + o)
    });
    let close_idx = kept.iter().rposition(|l| l.trim() == "}");

    let (Some(open_idx), Some(close_idx)) = (open_idx, close_idx) else {
        return text.to_string();
    };

    let mut out = String::with_capacity(text.len() + outputs.len() * 32);
    for (idx, line) in kept.iter().enumerate() {
        if idx == close_idx {
            for (location, name) in &outputs {
                out.push_str(&format!("    gl_FragData[{location}] = {name};\n"));
            }
        }
        out.push_str(line);
        out.push('\n');
        if idx == open_idx {
            for (_, name) in &outputs {
                out.push_str(&format!("    vec4 {name};\n"));
            }
        }
    }
    out
}

/// Parse `layout(location = N) out vec4 <name>;` into `(N, name)`.
fn parse_located_output(line: &str) -> Option<(u32, String)> {
    let rest = line.strip_prefix("layout")?.trim_start();
    let rest = rest.strip_prefix('(')?;
    let close = rest.find(')')?;

    let mut location = None;
    for qualifier in rest[..close].split(',') {
        if let Some((key, value)) = qualifier.split_once('=') {
            if key.trim() == "location" {
                location = value.trim().parse::<u32>().ok();
            }
        }
    }
    let location = location?;

    let decl = rest[close + 1..].trim();
    let decl = strip_keyword(decl, "out")?;
    let decl = strip_keyword(decl, "vec4")?;
    let name = decl.trim_end().trim_end_matches(';').trim_end();
    if name.is_empty() || !name.chars().all(is_ident_char) {
        return None;
    }
    Some((location, name.to_string()))
}

/// Remove every `layout(...)` qualifier (and the whitespace separating it
/// from the declaration it annotated).
fn strip_layout_qualifiers(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < bytes.len() {
        let Some(offset) = text[i..].find("layout") else {
            out.push_str(&text[i..]);
            break;
        };
        let start = i + offset;
        let after = start + "layout".len();
        let bounded = start == 0 || !is_ident_char(bytes[start - 1] as char);
        let paren = text[after..]
            .find(|c: char| !c.is_whitespace())
            .map(|o| after + o);

        if bounded
            && let Some(paren_idx) = paren
            && bytes[paren_idx] == b'('
            && let Some(close) = find_matching_paren(text, paren_idx)
        {
            out.push_str(&text[i..start]);
            let mut next = close + 1;
            while next < bytes.len() && (bytes[next] == b' ' || bytes[next] == b'\t') {
                next += 1;
            }
            i = next;
            continue;
        }
        out.push_str(&text[i..after]);
        i = after;
    }
    out
}

/// Texture builtins grew new names in ES 3.00; map them back to their
/// extension-qualified ES 1.00 equivalents. Most specific first so prefix
/// names never shadow longer ones.
const LEGACY_TEXTURE_RENAMES: [(&str, &str); 4] = [
    ("textureProjLod", "texture2DProjLodEXT"),
    ("textureCubeLod", "textureCubeLodEXT"),
    ("textureLod", "texture2DLodEXT"),
    ("texture", "texture2D"),
];

fn rename_legacy_builtins(text: &str) -> String {
    let mut out = text.to_string();
    for (from, to) in LEGACY_TEXTURE_RENAMES {
        out = replace_builtin_call(&out, from, to);
    }
    out
}

/// Rename calls of `from(` to `to(`, requiring a word boundary on the left
/// and an immediate `(` on the right so partial names never match.
fn replace_builtin_call(text: &str, from: &str, to: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < bytes.len() {
        let Some(offset) = text[i..].find(from) else {
            out.push_str(&text[i..]);
            break;
        };
        let start = i + offset;
        let after = start + from.len();
        let bounded = start == 0 || !is_ident_char(bytes[start - 1] as char);
        let is_call = after < bytes.len() && bytes[after] == b'(';

        out.push_str(&text[i..start]);
        if bounded && is_call {
            out.push_str(to);
        } else {
            out.push_str(from);
        }
        i = after;
    }
    out
}

// ─── Fragment Output Locations ───────────────────────────────────────────────

/// Explicit-binding backends require a location on every fragment output;
/// any declaration the earlier passes left unlocated gets location 0.
fn locate_fragment_outputs(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 32);
    for line in text.lines() {
        let trimmed = line.trim();
        if strip_keyword(trimmed, "out").is_some() && trimmed.ends_with(';') {
            out.push_str("layout(location = 0) ");
            out.push_str(trimmed);
            out.push('\n');
        } else {
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

// ─── Text Helpers ────────────────────────────────────────────────────────────

/// The text after `keyword`, if `line` starts with it on a word boundary.
fn strip_keyword<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(keyword)?;
    if rest.starts_with(char::is_whitespace) {
        Some(rest.trim_start())
    } else {
        None
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Whether `word` occurs in `text` with word boundaries on both sides.
fn contains_word(text: &str, word: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;
    while let Some(offset) = text[i..].find(word) {
        let start = i + offset;
        let end = start + word.len();
        let left_ok = start == 0 || !is_ident_char(bytes[start - 1] as char);
        let right_ok = end == bytes.len() || !is_ident_char(bytes[end] as char);
        if left_ok && right_ok {
            return true;
        }
        i = end;
    }
    false
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_comments_removes_line_comments_and_blanks() {
        let src = "vec4 a; // trailing\n\n   \n// full line\nvec4 b;\n";
        assert_eq!(strip_comments(src), "vec4 a;\nvec4 b;\n");
    }

    #[test]
    fn strip_comments_is_idempotent() {
        let src = "vec4 a; // x\n\nvec4 b;\n";
        let once = strip_comments(src);
        assert_eq!(strip_comments(&once), once);
    }

    #[test]
    fn split_precision_takes_first_and_drops_rest() {
        let src = "precision highp float;\nvec4 a;\nprecision lowp int;\n";
        let (precision, rest) = split_precision(src);
        assert_eq!(precision, "precision highp float;");
        assert_eq!(rest, "vec4 a;\n");
    }

    #[test]
    fn split_precision_defaults_when_absent() {
        let (precision, rest) = split_precision("vec4 a;\n");
        assert_eq!(precision, DEFAULT_PRECISION);
        assert_eq!(rest, "vec4 a;\n");
    }

    #[test]
    fn macro_calls_respect_word_boundaries() {
        let replaced = replace_macro_calls("MY_SAMPLER_2D(x)", "SAMPLER_2D", |a| a.to_string());
        assert_eq!(replaced, "MY_SAMPLER_2D(x)");
    }

    #[test]
    fn macro_calls_handle_nested_parens() {
        let replaced = replace_macro_calls("F(g(a, b))", "F", |a| format!("[{a}]"));
        assert_eq!(replaced, "[g(a, b)]");
    }

    #[test]
    fn separate_mode_builds_pair_expressions() {
        let out = resolve_sampler_macros("texture(SAMPLER_2D(u_Map), uv)", true);
        assert_eq!(out, "texture(sampler2D(T_u_Map, S_u_Map), uv)");

        let out = resolve_sampler_macros("vec4 f(PD_SAMPLER_2D(map))", true);
        assert_eq!(out, "vec4 f(texture2D T_P_map, sampler S_P_map)");

        let out = resolve_sampler_macros("f(PP_SAMPLER_2D(u_Map))", true);
        assert_eq!(out, "f(T_u_Map, S_u_Map)");

        let out = resolve_sampler_macros("texture(PU_SAMPLER_2D(map), uv)", true);
        assert_eq!(out, "texture(sampler2D(T_P_map, S_P_map), uv)");
    }

    #[test]
    fn combined_mode_collapses_to_bare_names() {
        let out = resolve_sampler_macros(
            "vec4 f(PD_SAMPLER_2D(map)) { return texture(PU_SAMPLER_2D(map), uv); }",
            false,
        );
        assert_eq!(
            out,
            "vec4 f(sampler2D map) { return texture(map, uv); }"
        );
        assert_eq!(
            resolve_sampler_macros("f(PP_SAMPLER_2D(u_Map), SAMPLER_2D(u_Map))", false),
            "f(u_Map, u_Map)"
        );
    }

    #[test]
    fn parse_located_output_reads_location_and_name() {
        assert_eq!(
            parse_located_output("layout(location = 2) out vec4 o_Normal;"),
            Some((2, "o_Normal".to_string()))
        );
        assert_eq!(parse_located_output("layout(location = 0) in vec2 uv;"), None);
        assert_eq!(parse_located_output("out vec4 color;"), None);
    }

    #[test]
    fn layout_qualifiers_are_stripped() {
        let out = strip_layout_qualifiers("layout(location = 1) out vec4 a;\nlayout(set = 0, binding = 2) uniform B { vec4 c; };\n");
        assert_eq!(out, "out vec4 a;\nuniform B { vec4 c; };\n");
    }

    #[test]
    fn legacy_renames_keep_boundaries() {
        let out = rename_legacy_builtins("texture(s, uv) + textureLod(s, uv, 0.0) + mytexture(x)");
        assert_eq!(
            out,
            "texture2D(s, uv) + texture2DLodEXT(s, uv, 0.0) + mytexture(x)"
        );
        // already-legacy names stay put
        assert_eq!(
            rename_legacy_builtins("texture2D(s, uv) + textureCube(c, n)"),
            "texture2D(s, uv) + textureCube(c, n)"
        );
        assert_eq!(
            rename_legacy_builtins("textureProjLod(s, p, 0.0) + textureCubeLod(c, n, 0.0)"),
            "texture2DProjLodEXT(s, p, 0.0) + textureCubeLodEXT(c, n, 0.0)"
        );
    }

    #[test]
    fn flatten_handles_single_line_blocks() {
        let out = flatten_uniform_blocks("uniform Block { vec4 a; vec4 b; };\n");
        assert_eq!(out, "uniform vec4 a;\nuniform vec4 b;\n");
    }

    #[test]
    fn flatten_keeps_conditionals_inside_blocks() {
        let src = "uniform Block {\n#ifdef USE_FOG\n    vec4 fog;\n#endif\n    vec4 color;\n};\n";
        let out = flatten_uniform_blocks(src);
        assert_eq!(
            out,
            "#ifdef USE_FOG\nuniform vec4 fog;\n#endif\nuniform vec4 color;\n"
        );
    }

    #[test]
    fn contains_word_needs_boundaries() {
        assert!(contains_word("x = gl_FragColor;", "gl_FragColor"));
        assert!(!contains_word("x = gl_FragColor2;", "gl_FragColor"));
        assert!(!contains_word("my_gl_FragColor", "gl_FragColor"));
    }
}
