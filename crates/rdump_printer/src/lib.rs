//! rdump_printer: syntax tree to annotated Rust source.
//!
//! Renders a module tree or a single expression back into Rust text that
//! re-parses to the same operator structure. Debug annotations mark binding
//! slots (`x/*3*/`), enum variant indices (`/*0*/A`) and the paths of
//! anonymous block modules (`// ANON: ::krate::#0`).

pub mod error;
pub mod indent;
pub mod literal;
pub mod precedence;

mod expr;
mod generics;
mod items;
mod pattern;
mod types;

pub use error::{DumpError, DumpResult};

use indent::Indent;
use rdump_ast::{Expr, Module, Pattern, TypeRef};
use rdump_core::{StringInterner, Symbol};
use std::path::Path;

/// Options for the printer.
#[derive(Debug, Clone)]
pub struct PrinterOptions {
    /// Text written once per indentation level.
    pub indent_unit: String,
    /// Emit slot, variant index and unresolved-binding comments. Markers on
    /// malformed input (`/*null*/`, `/* nil */`, `_/*INVAL*/`) are written
    /// regardless.
    pub annotations: bool,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        Self {
            indent_unit: "    ".to_string(),
            annotations: true,
        }
    }
}

/// The printer converts syntax trees to text.
///
/// One printer produces one dump; it owns the output buffer until
/// [`Printer::finish`] hands it back.
pub struct Printer<'i> {
    output: String,
    indent: Indent,
    /// The node about to be printed is a standalone statement. Set by blocks
    /// before each statement and cleared by every node on entry.
    expr_root: bool,
    options: PrinterOptions,
    interner: &'i StringInterner,
}

impl<'i> Printer<'i> {
    pub fn new(interner: &'i StringInterner) -> Self {
        Self::with_options(interner, PrinterOptions::default())
    }

    pub fn with_options(interner: &'i StringInterner, options: PrinterOptions) -> Self {
        Self {
            output: String::with_capacity(4096),
            indent: Indent::new(options.indent_unit.clone()),
            expr_root: false,
            options,
            interner,
        }
    }

    /// Print every item of `module` in canonical order.
    pub fn print_module(&mut self, module: &Module<'_>) -> DumpResult<()> {
        self.print_module_items(module)
    }

    /// Print one expression as a nested value.
    pub fn print_expression(&mut self, expr: &Expr<'_>) -> DumpResult<()> {
        self.expr_root = false;
        self.print_expr(expr)
    }

    pub fn print_pattern(&mut self, pattern: &Pattern<'_>, is_refutable: bool) {
        self.print_pat(pattern, is_refutable);
    }

    pub fn print_type(&mut self, ty: &TypeRef<'_>) {
        self.print_type_ref(ty);
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn indent_depth(&self) -> usize {
        self.indent.depth()
    }

    pub fn finish(self) -> String {
        self.output
    }

    // ========================================================================
    // Output helpers
    // ========================================================================

    fn resolve(&self, sym: Symbol) -> &'i str {
        self.interner.resolve(sym)
    }

    fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    fn write_owned(&mut self, s: String) {
        self.output.push_str(&s);
    }

    fn write_symbol(&mut self, sym: Symbol) {
        let text = self.resolve(sym);
        self.output.push_str(text);
    }

    fn write_newline(&mut self) {
        self.output.push('\n');
    }

    fn write_indent(&mut self) {
        self.indent.write_to(&mut self.output);
    }

    /// Run `f` one level deeper. The level is restored even when `f` fails.
    fn indented<F>(&mut self, f: F) -> DumpResult<()>
    where
        F: FnOnce(&mut Self) -> DumpResult<()>,
    {
        self.indent.increase();
        let result = f(self);
        self.indent.decrease();
        result
    }

    /// Write `/*text*/` when annotations are enabled.
    fn write_annotation(&mut self, text: &str) {
        if self.options.annotations {
            self.output.push_str("/*");
            self.output.push_str(text);
            self.output.push_str("*/");
        }
    }
}

// ============================================================================
// Entry points
// ============================================================================

/// Render `module` and write it to `path`, replacing any existing file.
///
/// The file is only created once rendering succeeded.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
pub fn dump_module(path: impl AsRef<Path>, interner: &StringInterner, module: &Module<'_>) -> DumpResult<()> {
    let path = path.as_ref();
    let text = module_to_string(interner, module)?;
    std::fs::write(path, text).map_err(|source| DumpError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("module dump written");
    Ok(())
}

/// Write `expr` to `sink`, without a trailing newline.
#[tracing::instrument(level = "debug", skip_all)]
pub fn dump_expr<W: std::io::Write>(sink: &mut W, interner: &StringInterner, expr: &Expr<'_>) -> DumpResult<()> {
    let text = expr_to_string(interner, expr)?;
    sink.write_all(text.as_bytes())?;
    Ok(())
}

pub fn module_to_string(interner: &StringInterner, module: &Module<'_>) -> DumpResult<String> {
    let mut printer = Printer::new(interner);
    printer.print_module(module)?;
    debug_assert_eq!(printer.indent_depth(), 0);
    Ok(printer.finish())
}

pub fn expr_to_string(interner: &StringInterner, expr: &Expr<'_>) -> DumpResult<String> {
    let mut printer = Printer::new(interner);
    printer.print_expression(expr)?;
    debug_assert_eq!(printer.indent_depth(), 0);
    Ok(printer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdump_ast::AstBuilder;
    use rdump_core::AstArena;

    #[test]
    fn test_default_options() {
        let options = PrinterOptions::default();
        assert_eq!(options.indent_unit, "    ");
        assert!(options.annotations);
    }

    #[test]
    fn test_indented_restores_depth_on_error() {
        let interner = StringInterner::new();
        let mut printer = Printer::new(&interner);
        let result = printer.indented(|p| {
            assert_eq!(p.indent_depth(), 1);
            Err(DumpError::UnexpectedImplItem { kind: "Enum", name: "E".to_string() })
        });
        assert!(result.is_err());
        assert_eq!(printer.indent_depth(), 0);
    }

    #[test]
    fn test_annotations_can_be_disabled() {
        let interner = StringInterner::new();
        let options = PrinterOptions { annotations: false, ..PrinterOptions::default() };
        let mut printer = Printer::with_options(&interner, options);
        printer.write_annotation("3");
        assert_eq!(printer.output(), "");
    }

    #[test]
    fn test_expr_to_string_has_no_trailing_newline() {
        let arena = AstArena::new();
        let interner = StringInterner::new();
        let b = AstBuilder::new(&arena, &interner);
        let text = expr_to_string(&interner, &b.named("x")).unwrap();
        assert_eq!(text, "x");
    }
}
