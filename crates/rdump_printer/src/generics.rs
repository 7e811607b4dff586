//! Generic parameter lists and `where` blocks.

use crate::Printer;
use rdump_ast::{GenericBound, GenericParam, Generics};

impl<'i> Printer<'i> {
    /// `<'a, T = Default, const N: usize>`; nothing for an empty list.
    pub(crate) fn print_generic_params(&mut self, generics: &Generics<'_>) {
        if generics.params.is_empty() {
            return;
        }
        self.write("<");
        for (i, param) in generics.params.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            match param {
                GenericParam::None => self.write("/*-*/"),
                GenericParam::Lifetime { attrs, name } => {
                    self.print_attrs_inline(attrs);
                    self.print_lifetime(*name);
                }
                GenericParam::Type { attrs, name, default } => {
                    self.print_attrs_inline(attrs);
                    self.write_symbol(*name);
                    if let Some(default) = default {
                        self.write(" = ");
                        self.print_type_ref(default);
                    }
                }
                GenericParam::Value { attrs, name, ty } => {
                    self.print_attrs_inline(attrs);
                    self.write("const ");
                    self.write_symbol(*name);
                    self.write(": ");
                    self.print_type_ref(ty);
                }
            }
        }
        self.write(">");
    }

    /// The `where` block, starting at the beginning of a line and ending
    /// with a newline. `where` sits one level in, the bounds two.
    pub(crate) fn print_where_block(&mut self, generics: &Generics<'_>) {
        if !generics.has_bounds() {
            return;
        }
        self.indent.increase();
        self.write_indent();
        self.write("where");
        self.write_newline();
        self.indent.increase();
        let mut first = true;
        for bound in generics.bounds.iter().filter(|b| !b.is_none()) {
            if !first {
                self.write(",");
                self.write_newline();
            }
            first = false;
            self.write_indent();
            self.print_bound(bound);
        }
        self.write_newline();
        self.indent.decrease();
        self.indent.decrease();
    }

    fn print_bound(&mut self, bound: &GenericBound<'_>) {
        match bound {
            GenericBound::None => {}
            GenericBound::Lifetime { test, bound } => {
                self.print_lifetime(*test);
                self.write(": ");
                self.print_lifetime(*bound);
            }
            GenericBound::TypeLifetime { ty, bound } => {
                self.print_type_ref(ty);
                self.write(": ");
                self.print_lifetime(*bound);
            }
            GenericBound::IsTrait { outer_hrbs, ty, inner_hrbs, trait_path } => {
                self.print_hrbs(outer_hrbs);
                self.print_type_ref(ty);
                self.write(": ");
                self.print_hrbs(inner_hrbs);
                self.print_path(trait_path);
            }
            GenericBound::MaybeTrait { ty, trait_path } => {
                self.print_type_ref(ty);
                self.write(": ?");
                self.print_path(trait_path);
            }
            GenericBound::NotTrait { ty, trait_path } => {
                self.print_type_ref(ty);
                self.write(": !");
                self.print_path(trait_path);
            }
            GenericBound::Equality { ty, replacement } => {
                self.print_type_ref(ty);
                self.write(": =");
                self.print_type_ref(replacement);
            }
        }
    }
}
