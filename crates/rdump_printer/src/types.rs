//! Types, paths, visibility, attributes and token trees.
//!
//! These print verbatim: nothing is resolved or normalized.

use crate::Printer;
use rdump_ast::{
    Abi, Attribute, HigherRankedBounds, Lifetime, Path, PathSegment, TokenTree, TraitRef, TypeRef, Visibility,
};

impl<'i> Printer<'i> {
    pub(crate) fn print_type_ref(&mut self, ty: &TypeRef<'_>) {
        match ty {
            TypeRef::Infer => self.write("_"),
            TypeRef::Unit => self.write("()"),
            TypeRef::Never => self.write("!"),
            TypeRef::Primitive(core) => self.write(core.name()),
            TypeRef::Path(path) => self.print_path(path),
            TypeRef::Tuple(elems) => {
                self.write("(");
                for (i, elem) in elems.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.print_type_ref(elem);
                }
                if elems.len() == 1 {
                    self.write(",");
                }
                self.write(")");
            }
            TypeRef::Borrow { lifetime, mutable, inner } => {
                self.write("&");
                if let Some(lifetime) = lifetime {
                    self.print_lifetime(*lifetime);
                    self.write(" ");
                }
                if *mutable {
                    self.write("mut ");
                }
                self.print_type_ref(inner);
            }
            TypeRef::Pointer { mutable, inner } => {
                self.write(if *mutable { "*mut " } else { "*const " });
                self.print_type_ref(inner);
            }
            TypeRef::Slice(inner) => {
                self.write("[");
                self.print_type_ref(inner);
                self.write("]");
            }
            TypeRef::Array { inner, len } => {
                self.write("[");
                self.print_type_ref(inner);
                self.write_owned(format!("; {}]", len));
            }
            TypeRef::Function { hrbs, is_unsafe, abi, args, ret } => {
                self.print_hrbs(hrbs);
                if *is_unsafe {
                    self.write("unsafe ");
                }
                self.print_abi(*abi);
                self.write("fn(");
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.print_type_ref(arg);
                }
                self.write(")");
                if !ret.is_unit() {
                    self.write(" -> ");
                    self.print_type_ref(ret);
                }
            }
            TypeRef::TraitObject { traits, lifetime } => {
                self.write("dyn ");
                self.print_trait_list(traits);
                if let Some(lifetime) = lifetime {
                    self.write(" + ");
                    self.print_lifetime(*lifetime);
                }
            }
            TypeRef::ImplTrait(traits) => {
                self.write("impl ");
                self.print_trait_list(traits);
            }
        }
    }

    fn print_trait_list(&mut self, traits: &[TraitRef<'_>]) {
        for (i, tr) in traits.iter().enumerate() {
            if i > 0 {
                self.write(" + ");
            }
            self.print_trait_ref(tr);
        }
    }

    pub(crate) fn print_trait_ref(&mut self, tr: &TraitRef<'_>) {
        self.print_hrbs(&tr.hrbs);
        self.print_path(&tr.path);
    }

    pub(crate) fn print_path(&mut self, path: &Path<'_>) {
        if path.absolute {
            self.write("::");
        }
        for (i, seg) in path.segments.iter().enumerate() {
            if i > 0 {
                self.write("::");
            }
            self.print_path_segment(seg);
        }
    }

    /// `name` or `name::<A, B>`.
    pub(crate) fn print_path_segment(&mut self, seg: &PathSegment<'_>) {
        self.write_symbol(seg.name);
        if !seg.args.is_empty() {
            self.write("::<");
            for (i, arg) in seg.args.iter().enumerate() {
                if i > 0 {
                    self.write(", ");
                }
                self.print_type_ref(arg);
            }
            self.write(">");
        }
    }

    pub(crate) fn print_lifetime(&mut self, lifetime: Lifetime) {
        self.write("'");
        self.write_symbol(lifetime.0);
    }

    /// `for<'a, 'b> ` including the trailing space; nothing when empty.
    pub(crate) fn print_hrbs(&mut self, hrbs: &HigherRankedBounds<'_>) {
        if hrbs.is_empty() {
            return;
        }
        self.write("for<");
        for (i, lifetime) in hrbs.lifetimes.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.print_lifetime(*lifetime);
        }
        self.write("> ");
    }

    /// `extern "abi" ` for a non-Rust ABI.
    pub(crate) fn print_abi(&mut self, abi: Abi) {
        if let Abi::Named(name) = abi {
            self.write("extern ");
            let quoted = crate::literal::quote_str(self.resolve(name));
            self.write_owned(quoted);
            self.write(" ");
        }
    }

    /// Visibility including the trailing space; nothing when inherited.
    pub(crate) fn print_visibility(&mut self, vis: &Visibility<'_>) {
        match vis {
            Visibility::Inherited => {}
            Visibility::Public => self.write("pub "),
            Visibility::Crate => self.write("pub(crate) "),
            Visibility::Super => self.write("pub(super) "),
            Visibility::SelfModule => self.write("pub(self) "),
            Visibility::Restricted(path) => {
                self.write("pub(in ");
                self.print_path(path);
                self.write(") ");
            }
        }
    }

    // ========================================================================
    // Attributes and token trees
    // ========================================================================

    /// `#[path tokens]` without surrounding whitespace.
    pub(crate) fn print_attribute(&mut self, attr: &Attribute<'_>) {
        self.write("#[");
        self.print_path(&attr.path);
        if let Some(first) = attr.tokens.first() {
            if !matches!(first, TokenTree::Delimited { .. }) {
                self.write(" ");
            }
            self.print_token_trees(attr.tokens);
        }
        self.write("]");
    }

    /// Each attribute on its own line at the current indentation.
    pub(crate) fn print_attr_lines(&mut self, attrs: &[Attribute<'_>]) {
        for attr in attrs {
            self.write_indent();
            self.print_attribute(attr);
            self.write_newline();
        }
    }

    /// Attributes on one line, each followed by a space.
    pub(crate) fn print_attrs_inline(&mut self, attrs: &[Attribute<'_>]) {
        for attr in attrs {
            self.print_attribute(attr);
            self.write(" ");
        }
    }

    /// Tokens separated by single spaces, except inside delimiters and
    /// before `,` and `;`.
    pub(crate) fn print_token_trees(&mut self, trees: &[TokenTree<'_>]) {
        for (i, tree) in trees.iter().enumerate() {
            match tree {
                TokenTree::Token(sym) => {
                    let text = self.resolve(*sym);
                    if i > 0 && text != "," && text != ";" {
                        self.write(" ");
                    }
                    self.write(text);
                }
                TokenTree::Delimited { delim, trees } => {
                    if i > 0 {
                        self.write(" ");
                    }
                    self.write(delim.open());
                    self.print_token_trees(trees);
                    self.write(delim.close());
                }
            }
        }
    }
}
