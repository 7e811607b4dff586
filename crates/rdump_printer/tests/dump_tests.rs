//! File and sink entry point tests.

use pretty_assertions::assert_eq;
use rdump_ast::*;
use rdump_core::{AstArena, StringInterner};
use rdump_printer::{dump_expr, dump_module, module_to_string, DumpError};

fn sample_module<'a>(b: &AstBuilder<'a>) -> Module<'a> {
    b.module(&["crate"], [b.item("S", ItemKind::Struct { generics: Generics::default(), data: StructData::Unit })])
}

fn broken_module<'a>(b: &AstBuilder<'a>) -> Module<'a> {
    let imp = Impl {
        generics: Generics::default(),
        is_unsafe: false,
        trait_ref: None,
        self_ty: b.ty_path("S"),
        items: b.slice([b.item("m", ItemKind::Module(b.module(&["crate", "m"], [])))]),
    };
    b.module(&["crate"], [b.item("", ItemKind::Impl(imp))])
}

#[test]
fn test_dump_module_writes_file() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = AstBuilder::new(&arena, &interner);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.rs");

    let module = sample_module(&b);
    dump_module(&path, &interner, &module).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, "\nstruct S;\n");
    assert_eq!(written, module_to_string(&interner, &module).unwrap());
}

#[test]
fn test_dump_module_replaces_existing_file() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = AstBuilder::new(&arena, &interner);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.rs");
    std::fs::write(&path, "stale contents that are longer than the dump").unwrap();

    dump_module(&path, &interner, &sample_module(&b)).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "\nstruct S;\n");
}

#[test]
fn test_failed_dump_creates_no_file() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = AstBuilder::new(&arena, &interner);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.rs");

    let err = dump_module(&path, &interner, &broken_module(&b)).unwrap_err();
    assert!(matches!(err, DumpError::UnexpectedImplItem { kind: "Module", .. }));
    assert!(!path.exists());
}

#[test]
fn test_unwritable_path_reports_io_error() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = AstBuilder::new(&arena, &interner);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.rs");

    let err = dump_module(&path, &interner, &sample_module(&b)).unwrap_err();
    match err {
        DumpError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected an io error, got {other:?}"),
    }
}

#[test]
fn test_dump_expr_has_no_trailing_newline() {
    let arena = AstArena::new();
    let interner = StringInterner::new();
    let b = AstBuilder::new(&arena, &interner);

    let mut sink = Vec::new();
    dump_expr(&mut sink, &interner, &b.block([b.call("f", [])], true)).unwrap();
    assert_eq!(String::from_utf8(sink).unwrap(), "{\n    f()\n}");
}
