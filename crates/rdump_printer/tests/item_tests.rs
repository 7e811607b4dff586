//! Module and item printer integration tests.

use pretty_assertions::assert_eq;
use rdump_ast::*;
use rdump_core::{AstArena, StringInterner};
use rdump_printer::{module_to_string, DumpError, Printer};

fn render(interner: &StringInterner, module: &Module<'_>) -> String {
    module_to_string(interner, module).expect("module dump failed")
}

/// Plain function with no qualifiers or generics.
fn function<'a>(b: &AstBuilder<'a>, ret: TypeRef<'a>, body: Option<Expr<'a>>) -> Function<'a> {
    Function {
        is_const: false,
        is_async: false,
        is_unsafe: false,
        abi: Abi::Rust,
        generics: Generics::default(),
        args: &[],
        ret,
        body: body.map(|e| b.boxed(e)),
    }
}

/// `<T> where T: Clone`
fn bounded_generics<'a>(b: &AstBuilder<'a>) -> Generics<'a> {
    Generics {
        params: b.slice([GenericParam::Type { attrs: &[], name: b.sym("T"), default: None }]),
        bounds: b.slice([GenericBound::IsTrait {
            outer_hrbs: HigherRankedBounds::default(),
            ty: b.ty_path("T"),
            inner_hrbs: HigherRankedBounds::default(),
            trait_path: b.path("Clone"),
        }]),
    }
}

fn trait_ref<'a>(b: &AstBuilder<'a>, path: &str) -> TraitRef<'a> {
    TraitRef { hrbs: HigherRankedBounds::default(), path: b.path(path) }
}

// ============================================================================
// Module layout
// ============================================================================

#[test]
fn test_groups_print_in_canonical_order() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = AstBuilder::new(&arena, &interner);

    let module = b.module(
        &["crate"],
        [
            b.item("main", ItemKind::Function(function(&b, TypeRef::Unit, Some(b.block([], false))))),
            b.item("S", ItemKind::Struct { generics: Generics::default(), data: StructData::Unit }),
        ],
    );
    assert_eq!(render(&interner, &module), "\nstruct S;\n\nfn main()\n{ }\n");
}

#[test]
fn test_empty_module() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = AstBuilder::new(&arena, &interner);

    assert_eq!(render(&interner, &b.module(&["crate"], [])), "");
}

#[test]
fn test_nested_module() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = AstBuilder::new(&arena, &interner);

    let inner = b.module(
        &["crate", "inner"],
        [b.item("f", ItemKind::Function(function(&b, TypeRef::Unit, Some(b.block([], false)))))],
    );
    let mut item = b.item("inner", ItemKind::Module(inner));
    item.vis = Visibility::Public;
    let module = b.module(&["crate"], [item]);
    assert_eq!(render(&interner, &module), "\npub mod inner\n{\n\n    fn f()\n    { }\n}\n");
}

#[test]
fn test_uses_and_extern_crates() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = AstBuilder::new(&arena, &interner);

    let grouped = b.slice([
        UseEntry { path: b.path("std::fmt"), name: Some(b.sym("fmt")) },
        UseEntry { path: b.path("a::b"), name: Some(b.sym("c")) },
        UseEntry { path: b.path("x"), name: None },
    ]);
    let mut single = b.item("", ItemKind::Use(b.slice([UseEntry { path: b.path("std::io"), name: Some(b.sym("io")) }])));
    single.vis = Visibility::Crate;

    let module = b.module(
        &["crate"],
        [
            b.item("alloc", ItemKind::ExternCrate { crate_name: b.sym("alloc") }),
            b.item("", ItemKind::Use(grouped)),
            b.item("", ItemKind::Use(&[])),
            single,
            b.item("c", ItemKind::ExternCrate { crate_name: b.sym("core") }),
        ],
    );
    assert_eq!(
        render(&interner, &module),
        "use {std::fmt, a::b as c, x::*};\npub(crate) use std::io;\nextern crate alloc;\nextern crate core as c;\n"
    );
}

#[test]
fn test_item_attributes() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = AstBuilder::new(&arena, &interner);

    let derive = Attribute {
        path: b.path("derive"),
        tokens: b.slice([TokenTree::Delimited {
            delim: Delimiter::Paren,
            trees: b.slice([TokenTree::Token(b.sym("Debug"))]),
        }]),
    };
    let mut item = b.item("S", ItemKind::Struct { generics: Generics::default(), data: StructData::Unit });
    item.attrs = b.slice([derive]);
    let module = b.module(&["crate"], [item]);
    assert_eq!(render(&interner, &module), "\n#[derive(Debug)]\nstruct S;\n");
}

// ============================================================================
// Type definitions
// ============================================================================

#[test]
fn test_type_aliases_and_statics_share_one_blank_line() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = AstBuilder::new(&arena, &interner);

    let module = b.module(
        &["crate"],
        [
            b.item("Id", ItemKind::Type(TypeAlias { generics: Generics::default(), ty: b.ty_prim(CoreType::U32) })),
            b.item("Name", ItemKind::Type(TypeAlias { generics: Generics::default(), ty: b.ty_path("String") })),
            b.item(
                "A",
                ItemKind::Static(Static {
                    class: StaticClass::Const,
                    ty: b.ty_prim(CoreType::U8),
                    value: Some(b.boxed(b.int(1, CoreType::U8))),
                }),
            ),
            b.item("B", ItemKind::Static(Static { class: StaticClass::Mut, ty: b.ty_prim(CoreType::I32), value: None })),
        ],
    );
    assert_eq!(
        render(&interner, &module),
        "\ntype Id = u32;\ntype Name = String;\n\nconst A: u8 = 0x1;\nstatic mut B: i32;\n"
    );
}

#[test]
fn test_struct_shapes() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = AstBuilder::new(&arena, &interner);

    let named = StructData::Named(b.slice([StructField { vis: Visibility::Public, name: b.sym("x"), ty: b.ty_path("T") }]));
    let tuple = StructData::Tuple(b.slice([
        TupleField { vis: Visibility::Public, ty: b.ty_prim(CoreType::U8) },
        TupleField { vis: Visibility::Inherited, ty: b.ty_prim(CoreType::I32) },
    ]));
    let module = b.module(
        &["crate"],
        [
            b.item("S", ItemKind::Struct { generics: bounded_generics(&b), data: named }),
            b.item("P", ItemKind::Struct { generics: Generics::default(), data: tuple }),
            b.item("U", ItemKind::Struct { generics: bounded_generics(&b), data: StructData::Unit }),
        ],
    );
    assert_eq!(
        render(&interner, &module),
        concat!(
            "\nstruct S<T>\n    where\n        T: Clone\n{\n    pub x: T,\n}\n",
            "\nstruct P(pub u8, i32, );\n",
            "\nstruct U<T>\n    where\n        T: Clone\n;\n",
        )
    );
}

#[test]
fn test_enum_variants_are_numbered() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = AstBuilder::new(&arena, &interner);

    let variants = b.slice([
        EnumVariant { attrs: &[], name: b.sym("A"), data: VariantData::Value(None) },
        EnumVariant { attrs: &[], name: b.sym("B"), data: VariantData::Tuple(b.slice([b.ty_prim(CoreType::U8)])) },
        EnumVariant {
            attrs: &[],
            name: b.sym("C"),
            data: VariantData::Struct(b.slice([StructField {
                vis: Visibility::Inherited,
                name: b.sym("x"),
                ty: b.ty_prim(CoreType::U32),
            }])),
        },
        EnumVariant { attrs: &[], name: b.sym("D"), data: VariantData::Value(Some(b.boxed(b.int(5, CoreType::I32)))) },
    ]);
    let module = b.module(&["crate"], [b.item("E", ItemKind::Enum { generics: Generics::default(), variants })]);
    assert_eq!(
        render(&interner, &module),
        "\nenum E\n{\n    /*0*/A,\n    /*1*/B(u8, ),\n    /*2*/C {\n        x: u32,\n    },\n    /*3*/D = 5,\n}\n"
    );
}

// ============================================================================
// Traits and impls
// ============================================================================

#[test]
fn test_trait_members() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = AstBuilder::new(&arena, &interner);

    let members = b.slice([
        b.item("Item", ItemKind::Type(TypeAlias { generics: Generics::default(), ty: TypeRef::Infer })),
        b.item("len", ItemKind::Function(function(&b, b.ty_prim(CoreType::Usize), None))),
        b.item("N", ItemKind::Static(Static { class: StaticClass::Const, ty: b.ty_prim(CoreType::Usize), value: None })),
        b.item("", ItemKind::None),
    ]);
    let tr = Trait {
        generics: Generics::default(),
        is_unsafe: true,
        lifetimes: b.slice([Lifetime(b.sym("a"))]),
        supertraits: b.slice([trait_ref(&b, "Clone")]),
        items: members,
    };
    let module = b.module(&["crate"], [b.item("T", ItemKind::Trait(tr))]);
    assert_eq!(
        render(&interner, &module),
        "\nunsafe trait T : 'a + Clone\n{\n    type Item;\n    fn len() -> usize;\n    const N: usize;\n}\n"
    );
}

#[test]
fn test_trait_impl() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = AstBuilder::new(&arena, &interner);

    let mut new_fn = b.item("new", ItemKind::Function(function(&b, b.ty_path("Self"), Some(b.block([], false)))));
    new_fn.vis = Visibility::Public;
    let imp = Impl {
        generics: Generics {
            params: b.slice([GenericParam::Type { attrs: &[], name: b.sym("T"), default: None }]),
            bounds: &[],
        },
        is_unsafe: false,
        trait_ref: Some(trait_ref(&b, "Display")),
        self_ty: b.ty_path("Wrapper"),
        items: b.slice([
            b.item("Output", ItemKind::Type(TypeAlias { generics: Generics::default(), ty: b.ty_prim(CoreType::U8) })),
            b.item("", ItemKind::None),
            new_fn,
        ]),
    };
    let module = b.module(&["crate"], [b.item("", ItemKind::Impl(imp))]);
    assert_eq!(
        render(&interner, &module),
        "\nimpl<T> Display for Wrapper\n{\n    type Output = u8;\n    pub fn new() -> Self\n    { }\n}\n"
    );
}

#[test]
fn test_unexpected_impl_member_is_an_error() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = AstBuilder::new(&arena, &interner);

    let imp = Impl {
        generics: Generics::default(),
        is_unsafe: false,
        trait_ref: None,
        self_ty: b.ty_path("Outer"),
        items: b.slice([b.item("Inner", ItemKind::Struct { generics: Generics::default(), data: StructData::Unit })]),
    };
    let module = b.module(&["crate"], [b.item("", ItemKind::Impl(imp))]);

    let mut printer = Printer::new(&interner);
    let err = printer.print_module(&module).unwrap_err();
    assert!(matches!(err, DumpError::UnexpectedImplItem { kind: "Struct", ref name } if name == "Inner"));
    assert_eq!(err.to_string(), "unexpected item type in impl block - Struct `Inner`");
    assert_eq!(printer.indent_depth(), 0);
}

// ============================================================================
// Functions and extern blocks
// ============================================================================

#[test]
fn test_function_qualifiers_and_where_block() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = AstBuilder::new(&arena, &interner);

    let func = Function {
        is_const: true,
        is_async: false,
        is_unsafe: true,
        abi: Abi::Named(b.sym("C")),
        generics: bounded_generics(&b),
        args: b.slice([FunctionArg { attrs: &[], pattern: b.bind_pat("x", 0), ty: b.ty_prim(CoreType::U8) }]),
        ret: b.ty_prim(CoreType::U8),
        body: Some(b.boxed(b.block([b.named("x")], true))),
    };
    let mut item = b.item("f", ItemKind::Function(func));
    item.vis = Visibility::Public;
    let module = b.module(&["crate"], [item]);
    assert_eq!(
        render(&interner, &module),
        "\npub const unsafe extern \"C\" fn f<T>(x/*0*/: u8) -> u8\n    where\n        T: Clone\n{\n    x\n}\n"
    );
}

#[test]
fn test_bodyless_function_with_bounds() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = AstBuilder::new(&arena, &interner);

    let mut func = function(&b, TypeRef::Unit, None);
    func.generics = bounded_generics(&b);
    func.is_async = true;
    let module = b.module(&["crate"], [b.item("g", ItemKind::Function(func))]);
    assert_eq!(render(&interner, &module), "\nasync fn g<T>()\n    where\n        T: Clone\n;\n");
}

#[test]
fn test_extern_blocks() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = AstBuilder::new(&arena, &interner);

    let mut puts = function(&b, b.ty_prim(CoreType::I32), None);
    puts.args = b.slice([FunctionArg {
        attrs: &[],
        pattern: b.bind_pat("s", 0),
        ty: TypeRef::Pointer { mutable: false, inner: b.alloc(b.ty_prim(CoreType::U8)) },
    }]);
    let members = b.slice([
        b.item("puts", ItemKind::Function(puts)),
        b.item("errno", ItemKind::Static(Static { class: StaticClass::Static, ty: b.ty_prim(CoreType::I32), value: None })),
        b.item("Opaque", ItemKind::Type(TypeAlias { generics: Generics::default(), ty: TypeRef::Infer })),
    ]);
    let module = b.module(
        &["crate"],
        [
            b.item("", ItemKind::ExternBlock { abi: b.sym("C"), items: members }),
            b.item("", ItemKind::ExternBlock { abi: b.sym("system"), items: &[] }),
        ],
    );
    assert_eq!(
        render(&interner, &module),
        concat!(
            "extern \"C\"\n{\n    fn puts(s/*0*/: *const u8) -> i32;\n    static errno: i32;\n    type Opaque;\n}\n",
            "extern \"system\" {}\n",
        )
    );
}
