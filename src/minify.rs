//! JavaScript minification using SWC.
//!
//! This module parses a source text as an ECMAScript program, runs the SWC
//! minifier with compression and top-level name mangling, and emits compact
//! code. Any parse or emit failure surfaces as [`GaugeError::Minify`]; the
//! caller never falls back to the unminified source.

use std::path::Path;

use swc_common::{FileName, FilePathMapping, GLOBALS, Globals, Mark, SourceMap, sync::Lrc};
use swc_ecma_ast::{EsVersion, Program};
use swc_ecma_codegen::{
    Emitter,
    text_writer::{JsWriter, WriteJs, omit_trailing_semi},
};
use swc_ecma_minifier::option::{
    CompressOptions, ExtraOptions, MangleOptions, MinifyOptions, TopLevelOptions,
};
use swc_ecma_parser::{EsSyntax, Syntax, parse_file_as_program};
use swc_ecma_transforms_base::{fixer::fixer, resolver};
use swc_ecma_visit::VisitMutWith as _;

use crate::error::GaugeError;

/// Minify a JavaScript source text.
///
/// The source is parsed as ECMAScript, compressed and mangled at the top
/// level, and re-emitted without formatting. `path` is used for error
/// reporting only; nothing is read from or written to disk.
///
/// # Errors
///
/// Returns [`GaugeError::Minify`] when the source does not parse as
/// ECMAScript or the minified output is empty (e.g. a comment-only file).
pub fn minify(path: &Path, source: &str) -> Result<String, GaugeError> {
    let minify_error = |reason: String| GaugeError::Minify {
        path: path.to_path_buf(),
        reason,
    };

    let cm: Lrc<SourceMap> = Lrc::new(SourceMap::new(FilePathMapping::empty()));
    let fm = cm.new_source_file(
        FileName::Real(path.to_path_buf()).into(),
        source.to_owned(),
    );

    GLOBALS.set(&Globals::new(), || {
        let mut recovered_errors = Vec::new();
        let program = parse_file_as_program(
            &fm,
            Syntax::Es(EsSyntax::default()),
            EsVersion::latest(),
            None,
            &mut recovered_errors,
        )
        .map_err(|e| minify_error(e.kind().msg().to_string()))?;

        if let Some(error) = recovered_errors.into_iter().next() {
            return Err(minify_error(error.kind().msg().to_string()));
        }

        let unresolved_mark = Mark::new();
        let top_level_mark = Mark::new();
        let program = program.apply(resolver(unresolved_mark, top_level_mark, false));

        let mut program = swc_ecma_minifier::optimize(
            program,
            cm.clone(),
            None,
            None,
            &MinifyOptions {
                compress: Some(CompressOptions {
                    top_level: Some(TopLevelOptions { functions: true }),
                    ..Default::default()
                }),
                mangle: Some(MangleOptions {
                    top_level: Some(true),
                    ..Default::default()
                }),
                ..Default::default()
            },
            &ExtraOptions {
                unresolved_mark,
                top_level_mark,
                mangle_name_cache: None,
            },
        );
        program.visit_mut_with(&mut fixer(None));

        let code = emit(&cm, &program).map_err(|e| minify_error(e.to_string()))?;

        if code.is_empty() {
            return Err(minify_error("minifier produced no output".to_string()));
        }

        Ok(code)
    })
}

/// Emit a program as compact JavaScript.
fn emit(cm: &Lrc<SourceMap>, program: &Program) -> std::io::Result<String> {
    let mut buf = vec![];

    {
        let wr = JsWriter::new(cm.clone(), "\n", &mut buf, None);
        let mut emitter = Emitter {
            cfg: swc_ecma_codegen::Config::default().with_minify(true),
            cm: cm.clone(),
            comments: None,
            wr: Box::new(omit_trailing_semi(wr)) as Box<dyn WriteJs>,
        };

        emitter.emit_program(program)?;
    }

    Ok(String::from_utf8_lossy(&buf).to_string())
}
