//! Module and item printing.

use crate::error::{DumpError, DumpResult};
use crate::literal::quote_str;
use crate::Printer;
use rdump_ast::{
    EnumVariant, Function, Generics, Impl, Item, ItemKind, Module, Static, StructData, StructField, Trait, TypeAlias,
    UseEntry, VariantData, Visibility,
};

impl<'i> Printer<'i> {
    /// Print a module body: imports, extern crates, extern blocks, nested
    /// modules, type aliases, structs, enums, traits, statics, functions and
    /// impls, each group in source order.
    pub(crate) fn print_module_items(&mut self, module: &Module<'_>) -> DumpResult<()> {
        tracing::debug!(items = module.items.len(), depth = self.indent.depth(), "printing module");

        for item in module.items {
            if let ItemKind::Use(entries) = &item.kind {
                self.print_use(item, entries);
            }
        }

        for item in module.items {
            if let ItemKind::ExternCrate { crate_name } = &item.kind {
                self.print_attr_lines(item.attrs);
                self.write_indent();
                self.print_visibility(&item.vis);
                self.write("extern crate ");
                self.write_symbol(*crate_name);
                if *crate_name != item.name {
                    self.write(" as ");
                    self.write_symbol(item.name);
                }
                self.write(";");
                self.write_newline();
            }
        }

        for item in module.items {
            if let ItemKind::ExternBlock { abi, items } = &item.kind {
                self.print_extern_block(item, *abi, items)?;
            }
        }

        for item in module.items {
            if let ItemKind::Module(inner) = &item.kind {
                self.write_newline();
                self.print_attr_lines(item.attrs);
                self.write_indent();
                self.print_visibility(&item.vis);
                self.write("mod ");
                self.write_symbol(item.name);
                self.write_newline();
                self.write_indent();
                self.write("{");
                self.write_newline();
                self.indented(|p| p.print_module_items(inner))?;
                self.write_indent();
                self.write("}");
                self.write_newline();
            }
        }

        let mut need_newline = true;
        for item in module.items {
            if let ItemKind::Type(alias) = &item.kind {
                if need_newline {
                    self.write_newline();
                    need_newline = false;
                }
                self.print_type_alias(item, alias);
            }
        }

        for item in module.items {
            if let ItemKind::Struct { generics, data } = &item.kind {
                self.write_newline();
                self.print_attr_lines(item.attrs);
                self.write_indent();
                self.print_visibility(&item.vis);
                self.write("struct ");
                self.write_symbol(item.name);
                self.print_struct(generics, data);
            }
        }

        for item in module.items {
            if let ItemKind::Enum { generics, variants } = &item.kind {
                self.write_newline();
                self.print_attr_lines(item.attrs);
                self.write_indent();
                self.print_visibility(&item.vis);
                self.write("enum ");
                self.write_symbol(item.name);
                self.print_enum(generics, variants)?;
            }
        }

        for item in module.items {
            if let ItemKind::Trait(tr) = &item.kind {
                self.write_newline();
                self.print_attr_lines(item.attrs);
                self.print_trait(item, tr)?;
            }
        }

        let mut need_newline = true;
        for item in module.items {
            if let ItemKind::Static(st) = &item.kind {
                if need_newline {
                    self.write_newline();
                    need_newline = false;
                }
                self.print_attr_lines(item.attrs);
                self.print_static(&item.vis, item.name, st)?;
            }
        }

        for item in module.items {
            if let ItemKind::Function(func) = &item.kind {
                self.write_newline();
                self.print_attr_lines(item.attrs);
                self.print_function(&item.vis, item.name, func)?;
            }
        }

        for item in module.items {
            if let ItemKind::Impl(imp) = &item.kind {
                self.write_newline();
                self.print_attr_lines(item.attrs);
                self.print_impl(imp)?;
            }
        }

        Ok(())
    }

    /// `terminator` directly, or after the `where` block when there is one.
    fn finish_with_bounds(&mut self, generics: &Generics<'_>, terminator: &str) {
        if generics.has_bounds() {
            self.write_newline();
            self.print_where_block(generics);
            self.write_indent();
        }
        self.write(terminator);
        self.write_newline();
    }

    fn print_use(&mut self, item: &Item<'_>, entries: &[UseEntry<'_>]) {
        if entries.is_empty() {
            return;
        }
        self.print_attr_lines(item.attrs);
        self.write_indent();
        self.print_visibility(&item.vis);
        self.write("use ");
        if entries.len() > 1 {
            self.write("{");
        }
        for (i, entry) in entries.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.print_path(&entry.path);
            match entry.name {
                None => self.write("::*"),
                Some(name) if entry.path.last_name().is_some_and(|last| last != name) => {
                    self.write(" as ");
                    self.write_symbol(name);
                }
                Some(_) => {}
            }
        }
        if entries.len() > 1 {
            self.write("}");
        }
        self.write(";");
        self.write_newline();
    }

    fn print_extern_block(&mut self, item: &Item<'_>, abi: rdump_core::Symbol, items: &[Item<'_>]) -> DumpResult<()> {
        self.print_attr_lines(item.attrs);
        self.write_indent();
        self.write("extern ");
        let quoted = quote_str(self.resolve(abi));
        self.write_owned(quoted);
        if items.is_empty() {
            self.write(" {}");
            self.write_newline();
            return Ok(());
        }
        self.write_newline();
        self.write_indent();
        self.write("{");
        self.write_newline();
        self.indented(|p| {
            for foreign in items {
                match &foreign.kind {
                    ItemKind::Function(func) => {
                        p.print_attr_lines(foreign.attrs);
                        p.print_function(&foreign.vis, foreign.name, func)?;
                    }
                    ItemKind::Static(st) => {
                        p.print_attr_lines(foreign.attrs);
                        p.print_static(&foreign.vis, foreign.name, st)?;
                    }
                    ItemKind::Type(_) => {
                        p.print_attr_lines(foreign.attrs);
                        p.write_indent();
                        p.print_visibility(&foreign.vis);
                        p.write("type ");
                        p.write_symbol(foreign.name);
                        p.write(";");
                        p.write_newline();
                    }
                    other => tracing::debug!(kind = other.tag(), "skipping extern block member"),
                }
            }
            Ok(())
        })?;
        self.write_indent();
        self.write("}");
        self.write_newline();
        Ok(())
    }

    fn print_type_alias(&mut self, item: &Item<'_>, alias: &TypeAlias<'_>) {
        self.print_attr_lines(item.attrs);
        self.write_indent();
        self.print_visibility(&item.vis);
        self.write("type ");
        self.write_symbol(item.name);
        self.print_generic_params(&alias.generics);
        self.write(" = ");
        self.print_type_ref(&alias.ty);
        self.finish_with_bounds(&alias.generics, ";");
    }

    // ========================================================================
    // Structs and enums
    // ========================================================================

    fn print_struct(&mut self, generics: &Generics<'_>, data: &StructData<'_>) {
        self.print_generic_params(generics);
        match data {
            StructData::Unit => self.finish_with_bounds(generics, ";"),
            StructData::Tuple(fields) => {
                self.write("(");
                for field in fields.iter() {
                    self.print_visibility(&field.vis);
                    self.print_type_ref(&field.ty);
                    self.write(", ");
                }
                self.write(")");
                self.finish_with_bounds(generics, ";");
            }
            StructData::Named(fields) => {
                self.write_newline();
                self.print_where_block(generics);
                self.write_indent();
                self.write("{");
                self.write_newline();
                self.indent.increase();
                self.print_named_fields(fields, true);
                self.indent.decrease();
                self.write_indent();
                self.write("}");
                self.write_newline();
            }
        }
    }

    /// `vis name: Type,` lines at the current indentation.
    fn print_named_fields(&mut self, fields: &[StructField<'_>], with_vis: bool) {
        for field in fields {
            self.write_indent();
            if with_vis {
                self.print_visibility(&field.vis);
            }
            self.write_symbol(field.name);
            self.write(": ");
            self.print_type_ref(&field.ty);
            self.write(",");
            self.write_newline();
        }
    }

    fn print_enum(&mut self, generics: &Generics<'_>, variants: &[EnumVariant<'_>]) -> DumpResult<()> {
        self.print_generic_params(generics);
        self.write_newline();
        self.print_where_block(generics);
        self.write_indent();
        self.write("{");
        self.write_newline();
        self.indented(|p| {
            for (idx, variant) in variants.iter().enumerate() {
                p.print_attr_lines(variant.attrs);
                p.write_indent();
                p.write_annotation(&idx.to_string());
                p.write_symbol(variant.name);
                match &variant.data {
                    VariantData::Value(None) => {}
                    VariantData::Value(Some(value)) => {
                        p.write(" = ");
                        p.print_expr(value)?;
                    }
                    VariantData::Tuple(types) => {
                        p.write("(");
                        for ty in types.iter() {
                            p.print_type_ref(ty);
                            p.write(", ");
                        }
                        p.write(")");
                    }
                    VariantData::Struct(fields) => {
                        p.write(" {");
                        p.write_newline();
                        p.indent.increase();
                        p.print_named_fields(fields, false);
                        p.indent.decrease();
                        p.write_indent();
                        p.write("}");
                    }
                }
                p.write(",");
                p.write_newline();
            }
            Ok(())
        })?;
        self.write_indent();
        self.write("}");
        self.write_newline();
        Ok(())
    }

    // ========================================================================
    // Traits and impls
    // ========================================================================

    fn print_trait(&mut self, item: &Item<'_>, tr: &Trait<'_>) -> DumpResult<()> {
        self.write_indent();
        self.print_visibility(&item.vis);
        if tr.is_unsafe {
            self.write("unsafe ");
        }
        self.write("trait ");
        self.write_symbol(item.name);
        self.print_generic_params(&tr.generics);

        let mut sep = " : ";
        for lifetime in tr.lifetimes {
            self.write(sep);
            self.print_lifetime(*lifetime);
            sep = " + ";
        }
        for supertrait in tr.supertraits {
            self.write(sep);
            self.print_trait_ref(supertrait);
            sep = " + ";
        }
        self.write_newline();
        self.print_where_block(&tr.generics);

        self.write_indent();
        self.write("{");
        self.write_newline();
        self.indented(|p| {
            for member in tr.items {
                match &member.kind {
                    ItemKind::Type(alias) => {
                        p.print_attr_lines(member.attrs);
                        p.write_indent();
                        p.write("type ");
                        p.write_symbol(member.name);
                        if !alias.ty.is_infer() {
                            p.write(" = ");
                            p.print_type_ref(&alias.ty);
                        }
                        p.write(";");
                        p.write_newline();
                    }
                    ItemKind::Function(func) => {
                        p.print_attr_lines(member.attrs);
                        p.print_function(&Visibility::Inherited, member.name, func)?;
                    }
                    ItemKind::Static(st) => {
                        p.print_attr_lines(member.attrs);
                        p.print_static(&Visibility::Inherited, member.name, st)?;
                    }
                    other => tracing::debug!(kind = other.tag(), "skipping trait member"),
                }
            }
            Ok(())
        })?;
        self.write_indent();
        self.write("}");
        self.write_newline();
        Ok(())
    }

    fn print_impl(&mut self, imp: &Impl<'_>) -> DumpResult<()> {
        tracing::debug!(members = imp.items.len(), "printing impl block");

        self.write_indent();
        if imp.is_unsafe {
            self.write("unsafe ");
        }
        self.write("impl");
        self.print_generic_params(&imp.generics);
        self.write(" ");
        if let Some(trait_ref) = &imp.trait_ref {
            self.print_trait_ref(trait_ref);
            self.write(" for ");
        }
        self.print_type_ref(&imp.self_ty);
        self.write_newline();
        self.print_where_block(&imp.generics);

        self.write_indent();
        self.write("{");
        self.write_newline();
        self.indented(|p| {
            for member in imp.items {
                match &member.kind {
                    ItemKind::None | ItemKind::MacroInv(_) => {}
                    ItemKind::Static(st) => {
                        p.print_attr_lines(member.attrs);
                        p.print_static(&member.vis, member.name, st)?;
                    }
                    ItemKind::Type(alias) => {
                        p.print_attr_lines(member.attrs);
                        p.write_indent();
                        p.print_visibility(&member.vis);
                        p.write("type ");
                        p.write_symbol(member.name);
                        p.write(" = ");
                        p.print_type_ref(&alias.ty);
                        p.write(";");
                        p.write_newline();
                    }
                    ItemKind::Function(func) => {
                        p.print_attr_lines(member.attrs);
                        p.print_function(&member.vis, member.name, func)?;
                    }
                    other => {
                        let name = p.resolve(member.name).to_string();
                        tracing::error!(kind = other.tag(), %name, "unexpected item type in impl block");
                        return Err(DumpError::UnexpectedImplItem { kind: other.tag(), name });
                    }
                }
            }
            Ok(())
        })?;
        self.write_indent();
        self.write("}");
        self.write_newline();
        Ok(())
    }

    // ========================================================================
    // Statics and functions
    // ========================================================================

    /// `const N: T = value;`, or without the value for declarations.
    fn print_static(&mut self, vis: &Visibility<'_>, name: rdump_core::Symbol, st: &Static<'_>) -> DumpResult<()> {
        self.write_indent();
        self.print_visibility(vis);
        self.write(st.class.keyword());
        self.write_symbol(name);
        self.write(": ");
        self.print_type_ref(&st.ty);
        if let Some(value) = st.value {
            self.write(" = ");
            self.print_expr(value)?;
        }
        self.write(";");
        self.write_newline();
        Ok(())
    }

    pub(crate) fn print_function(
        &mut self,
        vis: &Visibility<'_>,
        name: rdump_core::Symbol,
        func: &Function<'_>,
    ) -> DumpResult<()> {
        self.write_indent();
        self.print_visibility(vis);
        if func.is_const {
            self.write("const ");
        }
        if func.is_async {
            self.write("async ");
        }
        if func.is_unsafe {
            self.write("unsafe ");
        }
        self.print_abi(func.abi);
        self.write("fn ");
        self.write_symbol(name);
        self.print_generic_params(&func.generics);

        self.write("(");
        for (i, arg) in func.args.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.print_attrs_inline(arg.attrs);
            self.print_pat(&arg.pattern, false);
            self.write(": ");
            self.print_type_ref(&arg.ty);
        }
        self.write(")");
        if !func.ret.is_unit() {
            self.write(" -> ");
            self.print_type_ref(&func.ret);
        }

        match func.body {
            Some(body) => {
                self.write_newline();
                self.print_where_block(&func.generics);
                self.write_indent();
                self.print_expr(body)?;
                self.write_newline();
            }
            None => self.finish_with_bounds(&func.generics, ";"),
        }
        Ok(())
    }
}
