//! Pattern printing.

use crate::literal::{format_float, format_integer, quote_bytes, quote_str};
use crate::Printer;
use rdump_ast::{BindingMode, Pattern, PatternBinding, PatternKind, PatternValue, TuplePattern};

impl<'i> Printer<'i> {
    /// Print `pattern`. `is_refutable` is false for `let`, function and
    /// closure arguments, where a lone binding over `_` prints as just the
    /// binding.
    pub(crate) fn print_pat(&mut self, pattern: &Pattern<'_>, is_refutable: bool) {
        for binding in pattern.bindings {
            self.print_binding(binding);
            if !is_refutable && pattern.bindings.len() == 1 && pattern.is_wildcard() {
                return;
            }
            self.write(" @ ");
        }

        match &pattern.kind {
            PatternKind::Any => self.write("_"),
            PatternKind::MaybeBind(name) => {
                self.write_symbol(*name);
                if self.options.annotations {
                    self.write(" ");
                    self.write_annotation("?");
                }
            }
            PatternKind::Macro(mac) => self.print_macro_invocation(mac),
            PatternKind::Box(sub) => {
                self.write("box ");
                self.print_pat(sub, is_refutable);
            }
            PatternKind::Ref { mutable: true, sub } => {
                self.write("&mut ");
                self.print_pat(sub, is_refutable);
            }
            // `& mut v` would read back as a `&mut` pattern.
            PatternKind::Ref { mutable: false, sub } if sub.bindings.first().is_some_and(|b| b.mutable) => {
                self.write("&(");
                self.print_pat(sub, is_refutable);
                self.write(")");
            }
            PatternKind::Ref { mutable: false, sub } => {
                self.write("& ");
                self.print_pat(sub, is_refutable);
            }
            PatternKind::Value { start, end } => {
                self.print_pattern_value(start);
                if let Some(end) = end {
                    self.write(" ..= ");
                    self.print_pattern_value(end);
                }
            }
            PatternKind::ValueLeftInc { start, end } => {
                self.print_pattern_value(start);
                self.write(" .. ");
                self.print_pattern_value(end);
            }
            PatternKind::Tuple(tuple) => {
                self.write("(");
                self.print_tuple_pattern(tuple, is_refutable);
                self.write(")");
            }
            PatternKind::StructTuple { path, tuple } => {
                self.print_path(path);
                self.write("(");
                self.print_tuple_pattern(tuple, is_refutable);
                self.write(")");
            }
            PatternKind::Struct { path, fields, is_exhaustive } => {
                self.print_path(path);
                self.write(" {");
                for field in fields.iter() {
                    self.write(" ");
                    self.write_symbol(field.name);
                    self.write(": ");
                    self.print_pat(&field.pattern, is_refutable);
                    self.write(",");
                }
                if !*is_exhaustive {
                    self.write(" ..");
                }
                self.write(" }");
            }
            PatternKind::Slice(items) => {
                self.write("[");
                self.print_pattern_list(items, is_refutable);
                self.write("]");
            }
            PatternKind::SplitSlice { leading, extra_bind, trailing } => {
                self.write("[");
                self.print_pattern_list(leading, is_refutable);
                if let Some(binding) = extra_bind {
                    self.print_binding(binding);
                    self.write(" @ ");
                }
                self.write("..");
                if !trailing.is_empty() {
                    self.write(", ");
                    self.print_pattern_list(trailing, is_refutable);
                }
                self.write("]");
            }
            PatternKind::Or(alternatives) => {
                self.write("(");
                for (i, alt) in alternatives.iter().enumerate() {
                    if i > 0 {
                        self.write(" | ");
                    }
                    self.print_pat(alt, is_refutable);
                }
                self.write(")");
            }
        }
    }

    /// `mut ref name/*slot*/`
    fn print_binding(&mut self, binding: &PatternBinding) {
        if binding.mutable {
            self.write("mut ");
        }
        match binding.mode {
            BindingMode::Move => {}
            BindingMode::Ref => self.write("ref "),
            BindingMode::RefMut => self.write("ref mut "),
        }
        self.write_symbol(binding.name);
        self.write_annotation(&binding.slot.to_string());
    }

    fn print_tuple_pattern(&mut self, tuple: &TuplePattern<'_>, is_refutable: bool) {
        self.print_pattern_list(tuple.start, is_refutable);
        if tuple.has_wildcard {
            self.write(".., ");
            self.print_pattern_list(tuple.end, is_refutable);
        }
    }

    /// Each pattern followed by `, `.
    fn print_pattern_list(&mut self, patterns: &[Pattern<'_>], is_refutable: bool) {
        for pat in patterns {
            self.print_pat(pat, is_refutable);
            self.write(", ");
        }
    }

    fn print_pattern_value(&mut self, value: &PatternValue<'_>) {
        match value {
            PatternValue::Integer { value, ty } => self.write_owned(format_integer(*value, *ty)),
            PatternValue::Float { value, ty } => self.write_owned(format_float(*value, *ty)),
            PatternValue::String(sym) => {
                let quoted = quote_str(self.resolve(*sym));
                self.write_owned(quoted);
            }
            PatternValue::ByteString(bytes) => self.write_owned(quote_bytes(bytes)),
            PatternValue::Named(path) => self.print_path(path),
        }
    }
}
