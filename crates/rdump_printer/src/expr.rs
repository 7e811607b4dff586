//! Expression printing.
//!
//! Statement-level constructs (`if`, `match`, loops) switch between two
//! layouts: as a statement their body goes on its own line, nested inside
//! another expression it follows on the same line. `expr_root` carries
//! that context from the enclosing block to the statement node; every node
//! clears it on entry so it never leaks into children.

use crate::error::DumpResult;
use crate::literal::{escape_asm_template, format_float, format_integer, quote_bytes, quote_str};
use crate::precedence::{
    needs_parens_assign_slot, needs_parens_assign_value, needs_parens_cast_value, needs_parens_chain_condition,
    needs_parens_condition, needs_parens_left, needs_parens_let_scrutinee, needs_parens_prefix_operand,
    needs_parens_receiver, needs_parens_right,
};
use crate::Printer;
use rdump_ast::{
    ArrayExpr, AsmOperand, AsmOptions, AsmParam, AsmRegSpec, BinOpKind, Block, BlockKind, Closure, Expr, ExprKind,
    FieldInit, Flow, IfLetCondition, InlineAsm, LegacyAsm, LetBinding, Loop, LoopKind, MacroInvocation, MatchArm,
    UniOpKind, WhileLet,
};

impl<'i> Printer<'i> {
    pub(crate) fn print_expr(&mut self, expr: &Expr<'_>) -> DumpResult<()> {
        let is_root = std::mem::replace(&mut self.expr_root, false);

        match &expr.kind {
            ExprKind::Block(block) => self.print_block(block),
            ExprKind::Try(inner) => {
                self.write("try ");
                self.print_expr(inner)
            }
            ExprKind::Macro(mac) => {
                self.print_macro_invocation(mac);
                Ok(())
            }
            ExprKind::Asm(asm) => self.print_legacy_asm(asm),
            ExprKind::InlineAsm(asm) => self.print_inline_asm(asm),
            ExprKind::Flow(flow) => self.print_flow(flow),
            ExprKind::Let(binding) => self.print_let(binding),
            ExprKind::Assign { op, slot, value } => {
                self.print_child(slot, needs_parens_assign_slot(slot))?;
                self.write(" ");
                self.write(op.as_str());
                self.write(" ");
                self.print_child(value, needs_parens_assign_value(value))
            }
            ExprKind::CallPath { path, args } => {
                self.print_path(path);
                self.print_call_args(args)
            }
            ExprKind::CallMethod { receiver, method, args } => {
                self.print_child(receiver, needs_parens_receiver(receiver))?;
                self.write(".");
                self.print_path_segment(method);
                self.print_call_args(args)
            }
            ExprKind::CallObject { callee, args } => {
                self.print_child(callee, true)?;
                self.print_call_args(args)
            }
            ExprKind::Loop(lp) => self.print_loop(lp, is_root),
            ExprKind::WhileLet(wl) => self.print_while_let(wl, is_root),
            ExprKind::Match { value, arms } => self.print_match(value, arms, is_root),
            ExprKind::If { cond, then_branch, else_branch } => {
                self.write("if ");
                self.print_child(cond, needs_parens_condition(cond))?;
                self.print_if_tail(is_root, then_branch, *else_branch)
            }
            ExprKind::IfLet { conditions, then_branch, else_branch } => {
                self.write("if ");
                self.print_conditions(conditions)?;
                self.print_if_tail(is_root, then_branch, *else_branch)
            }
            ExprKind::Closure(closure) => self.print_closure(closure),
            ExprKind::Underscore => {
                self.write("_");
                Ok(())
            }
            ExprKind::Integer { value, ty } => {
                self.write_owned(format_integer(*value, *ty));
                Ok(())
            }
            ExprKind::Float { value, ty } => {
                self.write_owned(format_float(*value, *ty));
                Ok(())
            }
            ExprKind::Bool(value) => {
                self.write(if *value { "true" } else { "false" });
                Ok(())
            }
            ExprKind::String(sym) => {
                let quoted = quote_str(self.resolve(*sym));
                self.write_owned(quoted);
                Ok(())
            }
            ExprKind::ByteString(bytes) => {
                self.write_owned(quote_bytes(bytes));
                Ok(())
            }
            ExprKind::StructLiteral { path, fields, base } => self.print_struct_literal(path, fields, *base, false),
            ExprKind::StructLiteralPattern { path, fields } => self.print_struct_literal(path, fields, None, true),
            ExprKind::Array(ArrayExpr::List(items)) => {
                self.write("[");
                self.print_trailing_comma_list(items)?;
                self.write("]");
                Ok(())
            }
            ExprKind::Array(ArrayExpr::Repeat { value, count }) => {
                self.write("[");
                self.print_expr(value)?;
                self.write("; ");
                self.print_expr(count)?;
                self.write("]");
                Ok(())
            }
            ExprKind::Tuple(items) => {
                self.write("(");
                self.print_trailing_comma_list(items)?;
                self.write(")");
                Ok(())
            }
            ExprKind::NamedValue(path) => {
                self.print_path(path);
                Ok(())
            }
            ExprKind::Field { object, name } => {
                self.print_child(object, needs_parens_receiver(object))?;
                self.write(".");
                self.write_symbol(*name);
                Ok(())
            }
            ExprKind::Index { object, index } => {
                self.print_child(object, needs_parens_receiver(object))?;
                self.write("[");
                self.print_expr(index)?;
                self.write("]");
                Ok(())
            }
            ExprKind::Deref(value) => {
                self.write("*");
                self.print_child(value, needs_parens_prefix_operand(value))
            }
            ExprKind::Cast { value, ty } => {
                self.print_child(value, needs_parens_cast_value(value))?;
                self.write(" as ");
                self.print_type_ref(ty);
                Ok(())
            }
            ExprKind::TypeAnnotation { value, ty } => {
                self.print_child(value, true)?;
                self.write(": ");
                self.print_type_ref(ty);
                Ok(())
            }
            ExprKind::BinOp { op, left, right } => self.print_binop(*op, *left, *right),
            ExprKind::UniOp { op, value } => self.print_uniop(*op, value),
        }
    }

    /// Print `child`, in parentheses if `wrap`.
    fn print_child(&mut self, child: &Expr<'_>, wrap: bool) -> DumpResult<()> {
        if wrap {
            self.write("(");
            self.print_expr(child)?;
            self.write(")");
            Ok(())
        } else {
            self.print_expr(child)
        }
    }

    /// Newline and indent before a statement body, a space otherwise.
    fn write_body_break(&mut self, is_root: bool) {
        if is_root {
            self.write_newline();
            self.write_indent();
        } else {
            self.write(" ");
        }
    }

    // ========================================================================
    // Blocks
    // ========================================================================

    pub(crate) fn print_block(&mut self, block: &Block<'_>) -> DumpResult<()> {
        match block.kind {
            BlockKind::Bare => {}
            BlockKind::Unsafe => self.write("unsafe "),
            BlockKind::Const => self.write("const "),
        }
        if block.nodes.is_empty() && block.local_mod.is_none() {
            self.write("{ }");
            return Ok(());
        }

        self.write("{");
        self.indented(|p| {
            if let Some(module) = block.local_mod {
                p.write_newline();
                p.write_indent();
                p.write("// ANON: ");
                for name in module.path {
                    p.write("::");
                    p.write_symbol(*name);
                }
                p.write_newline();
                p.print_module_items(module)?;
            }

            for (i, node) in block.nodes.iter().enumerate() {
                if i > 0 {
                    p.write(";");
                }
                p.write_newline();
                match node {
                    Some(stmt) => {
                        p.print_attr_lines(stmt.attrs);
                        p.write_indent();
                        p.expr_root = true;
                        p.print_expr(stmt)?;
                    }
                    None => {
                        tracing::warn!("block statement is missing");
                        p.write_indent();
                        p.write("/* nil */");
                    }
                }
            }
            if !block.yields_final_value && !block.nodes.is_empty() {
                p.write(";");
            }
            p.write_newline();
            Ok(())
        })?;
        self.write_indent();
        self.write("}");
        Ok(())
    }

    // ========================================================================
    // Control flow
    // ========================================================================

    fn print_loop(&mut self, lp: &Loop<'_>, is_root: bool) -> DumpResult<()> {
        if let Some(label) = lp.label {
            self.print_lifetime(label);
            self.write(": ");
        }
        match &lp.kind {
            LoopKind::Infinite => self.write("loop"),
            LoopKind::While(cond) => {
                self.write("while ");
                self.print_child(cond, needs_parens_condition(cond))?;
            }
            LoopKind::For { pattern, iter } => {
                self.write("for ");
                self.print_pat(pattern, true);
                self.write(" in ");
                self.print_child(iter, needs_parens_condition(iter))?;
            }
        }
        self.write_body_break(is_root);
        self.print_expr(lp.body)
    }

    fn print_while_let(&mut self, wl: &WhileLet<'_>, is_root: bool) -> DumpResult<()> {
        if let Some(label) = wl.label {
            self.print_lifetime(label);
            self.write(": ");
        }
        self.write("while ");
        self.print_conditions(wl.conditions)?;
        self.write_body_break(is_root);
        self.print_expr(wl.body)
    }

    /// `let pat = value && cond && ...` of `if let`, `while let` and guards.
    fn print_conditions(&mut self, conditions: &[IfLetCondition<'_>]) -> DumpResult<()> {
        for (i, cond) in conditions.iter().enumerate() {
            if i > 0 {
                self.write(" && ");
            }
            match &cond.pattern {
                Some(pattern) => {
                    self.write("let ");
                    self.print_pat(pattern, true);
                    self.write(" = ");
                    self.print_child(cond.value, needs_parens_let_scrutinee(cond.value))?;
                }
                None => self.print_child(cond.value, needs_parens_chain_condition(cond.value))?,
            }
        }
        Ok(())
    }

    fn print_match(&mut self, value: &Expr<'_>, arms: &[MatchArm<'_>], is_root: bool) -> DumpResult<()> {
        self.write("match ");
        self.print_child(value, needs_parens_condition(value))?;
        if is_root {
            self.write_newline();
            self.write_indent();
            self.write("{");
        } else {
            self.write(" {");
        }
        self.write_newline();

        self.indented(|p| {
            for arm in arms {
                p.write_indent();
                for (i, pattern) in arm.patterns.iter().enumerate() {
                    if i > 0 {
                        p.write(" | ");
                    }
                    p.print_pat(pattern, true);
                }
                if !arm.guard.is_empty() {
                    p.write(" if ");
                    p.print_conditions(arm.guard)?;
                }
                p.write(" => ");
                p.print_expr(arm.body)?;
                p.write(",");
                p.write_newline();
            }
            Ok(())
        })?;

        self.write_indent();
        self.write("}");
        Ok(())
    }

    fn print_if_tail(&mut self, is_root: bool, then_branch: &Expr<'_>, else_branch: Option<&Expr<'_>>) -> DumpResult<()> {
        self.write_body_break(is_root);
        self.print_branch(then_branch)?;

        let Some(else_branch) = else_branch else {
            return Ok(());
        };
        let is_else_if = matches!(else_branch.kind, ExprKind::If { .. } | ExprKind::IfLet { .. });
        if is_root {
            self.write_newline();
            self.write_indent();
            self.write("else");
            if is_else_if {
                self.write(" ");
                self.expr_root = true;
            } else {
                self.write_newline();
                self.write_indent();
            }
        } else {
            self.write(" else ");
        }
        if is_else_if {
            self.print_expr(else_branch)
        } else {
            self.print_branch(else_branch)
        }
    }

    /// A branch body; anything but a block is wrapped in `{ }`.
    fn print_branch(&mut self, body: &Expr<'_>) -> DumpResult<()> {
        if matches!(body.kind, ExprKind::Block(_)) {
            self.print_expr(body)
        } else {
            self.write("{ ");
            self.print_expr(body)?;
            self.write(" }");
            Ok(())
        }
    }

    fn print_flow(&mut self, flow: &Flow<'_>) -> DumpResult<()> {
        self.write(flow.kind.keyword());
        if let Some(label) = flow.label {
            self.write(" ");
            self.print_lifetime(label);
        }
        if let Some(value) = flow.value {
            self.write(" ");
            self.print_expr(value)?;
        }
        Ok(())
    }

    fn print_let(&mut self, binding: &LetBinding<'_>) -> DumpResult<()> {
        self.write("let ");
        self.print_pat(&binding.pattern, false);
        self.write(": ");
        self.print_type_ref(&binding.ty);
        if let Some(value) = binding.value {
            self.write(" = ");
            self.print_expr(value)?;
        }
        Ok(())
    }

    fn print_closure(&mut self, closure: &Closure<'_>) -> DumpResult<()> {
        if closure.is_move {
            self.write("move ");
        }
        self.write("|");
        for (i, arg) in closure.args.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.print_pat(&arg.pattern, false);
            self.write(": ");
            self.print_type_ref(&arg.ty);
        }
        self.write("| -> ");
        self.print_type_ref(&closure.ret);
        self.write(" { ");
        self.print_expr(closure.body)?;
        self.write(" }");
        Ok(())
    }

    // ========================================================================
    // Operators and compound values
    // ========================================================================

    fn print_binop(&mut self, op: BinOpKind, left: Option<&Expr<'_>>, right: Option<&Expr<'_>>) -> DumpResult<()> {
        // Ranges print tight (`a..b`). Either side may be open, except the
        // end of `..=`.
        let spacer = if op.is_range() { "" } else { " " };

        match left {
            Some(left) => self.print_child(left, needs_parens_left(op, left))?,
            None if op.is_range() => {}
            None => {
                tracing::warn!(op = op.as_str(), "binary operator is missing its left operand");
                self.write("/*null*/");
            }
        }
        self.write(spacer);
        self.write(op.as_str());
        self.write(spacer);
        match right {
            Some(right) => self.print_child(right, needs_parens_right(op, right))?,
            None if op == BinOpKind::Range => {}
            None => {
                tracing::warn!(op = op.as_str(), "binary operator is missing its right operand");
                self.write("/*null*/");
            }
        }
        Ok(())
    }

    fn print_uniop(&mut self, op: UniOpKind, value: &Expr<'_>) -> DumpResult<()> {
        if op.is_postfix() {
            self.print_child(value, needs_parens_receiver(value))?;
            self.write(op.suffix());
        } else {
            self.write(op.prefix());
            self.print_child(value, needs_parens_prefix_operand(value))?;
        }
        Ok(())
    }

    fn print_call_args(&mut self, args: &[Expr<'_>]) -> DumpResult<()> {
        self.write("(");
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.print_expr(arg)?;
        }
        self.write(")");
        Ok(())
    }

    /// Each item followed by `, `.
    fn print_trailing_comma_list(&mut self, items: &[Expr<'_>]) -> DumpResult<()> {
        for item in items {
            self.print_expr(item)?;
            self.write(", ");
        }
        Ok(())
    }

    fn print_struct_literal(
        &mut self,
        path: &rdump_ast::Path<'_>,
        fields: &[FieldInit<'_>],
        base: Option<&Expr<'_>>,
        is_pattern: bool,
    ) -> DumpResult<()> {
        self.print_path(path);
        self.write(" {");
        self.write_newline();
        self.indented(|p| {
            for field in fields {
                p.write_indent();
                p.write_symbol(field.name);
                p.write(": ");
                p.print_expr(&field.value)?;
                p.write(",");
                p.write_newline();
            }
            if let Some(base) = base {
                p.write_indent();
                p.write("..");
                p.print_expr(base)?;
                p.write_newline();
            } else if is_pattern {
                p.write_indent();
                p.write("..");
                p.write_newline();
            }
            Ok(())
        })?;
        self.write_indent();
        self.write("}");
        Ok(())
    }

    // ========================================================================
    // Macros and inline assembly
    // ========================================================================

    pub(crate) fn print_macro_invocation(&mut self, mac: &MacroInvocation<'_>) {
        self.print_path(&mac.path);
        self.write("!");
        if let Some(ident) = mac.ident {
            self.write(" ");
            self.write_symbol(ident);
        }
        self.write(if mac.is_braced { "{" } else { "(" });
        self.print_token_trees(mac.tokens);
        self.write(if mac.is_braced { "}" } else { ")" });
    }

    /// `asm!( "tmpl" : outputs : inputs : clobbers : flags )`
    fn print_legacy_asm(&mut self, asm: &LegacyAsm<'_>) -> DumpResult<()> {
        self.write("asm!( ");
        let template = quote_str(self.resolve(asm.template));
        self.write_owned(template);
        self.write(" :");
        self.print_asm_operands(asm.outputs)?;
        self.write(" :");
        self.print_asm_operands(asm.inputs)?;
        for list in [asm.clobbers, asm.flags] {
            self.write(" :");
            for sym in list {
                self.write(" ");
                let quoted = quote_str(self.resolve(*sym));
                self.write_owned(quoted);
                self.write(",");
            }
        }
        self.write(" )");
        Ok(())
    }

    fn print_asm_operands(&mut self, operands: &[AsmOperand<'_>]) -> DumpResult<()> {
        for operand in operands {
            self.write(" ");
            let constraint = quote_str(self.resolve(operand.constraint));
            self.write_owned(constraint);
            self.write(" (");
            self.print_expr(&operand.value)?;
            self.write("),");
        }
        Ok(())
    }

    fn print_inline_asm(&mut self, asm: &InlineAsm<'_>) -> DumpResult<()> {
        self.write("asm!(");
        let mut first = true;
        for line in asm.lines {
            if !first {
                self.write(", ");
            }
            first = false;
            let mut text = String::from("\"");
            for frag in line.frags {
                escape_asm_template(self.resolve(frag.before), &mut text);
                text.push('{');
                text.push_str(&frag.index.to_string());
                if let Some(modifier) = frag.modifier {
                    text.push(':');
                    text.push(modifier);
                }
                text.push('}');
            }
            escape_asm_template(self.resolve(line.trailing), &mut text);
            text.push('"');
            self.write_owned(text);
        }
        for param in asm.params {
            if !first {
                self.write(", ");
            }
            first = false;
            self.print_asm_param(param)?;
        }
        if !asm.options.is_empty() {
            if !first {
                self.write(", ");
            }
            self.write("options(");
            let names: Vec<&str> = AsmOptions::NAMES
                .iter()
                .filter(|(flag, _)| asm.options.contains(*flag))
                .map(|(_, name)| *name)
                .collect();
            self.write(&names.join(", "));
            self.write(")");
        }
        self.write(")");
        Ok(())
    }

    fn print_asm_param(&mut self, param: &AsmParam<'_>) -> DumpResult<()> {
        match param {
            AsmParam::Const(value) => {
                self.write("const ");
                self.print_expr(value)
            }
            AsmParam::Sym(path) => {
                self.write("sym ");
                self.print_path(path);
                Ok(())
            }
            AsmParam::RegSingle { dir, spec, value } => {
                self.print_asm_reg(dir.as_str(), spec);
                self.print_expr(value)
            }
            AsmParam::Reg { dir, spec, val_in, val_out } => {
                self.print_asm_reg(dir.as_str(), spec);
                match (val_in, val_out) {
                    (Some(val_in), Some(val_out)) => {
                        self.print_expr(val_in)?;
                        self.write(" => ");
                        self.print_expr(val_out)
                    }
                    (Some(value), None) | (None, Some(value)) => self.print_expr(value),
                    (None, None) => {
                        self.write("_");
                        Ok(())
                    }
                }
            }
        }
    }

    /// `dir(spec) `
    fn print_asm_reg(&mut self, dir: &str, spec: &AsmRegSpec) {
        self.write(dir);
        self.write("(");
        match spec {
            AsmRegSpec::Class(class) => self.write_symbol(*class),
            AsmRegSpec::Explicit(reg) => {
                let quoted = quote_str(self.resolve(*reg));
                self.write_owned(quoted);
            }
        }
        self.write(") ");
    }
}
