use hierc::decl::{DeclarationKind, TypeDeclaration};
use hierc::parse_decls;

fn parsed(src: &str) -> Vec<TypeDeclaration> {
    parse_decls(src).expect("expected successful parse")
}

fn err_contains(src: &str, needle: &str) {
    let err = parse_decls(src).unwrap_err().to_string();
    assert!(err.contains(needle), "{}", err);
}

// The complete Person fixture, bodies included
#[test]
fn parses_person_fixture() {
    let decls = parsed(
        r#"
interface Animal {
    void eat();
}

interface Mammal extends Animal {
    void move();
}

public class Person implements Mammal {

    public void eat() {
        System.out.println("Eating");
    }

    public void move() {
        System.out.println("Moving");
    }
}
"#,
    );

    assert_eq!(decls.len(), 3);
    assert_eq!(decls[0].kind, DeclarationKind::Interface);
    assert_eq!(decls[1].interfaces.len(), 1);
    assert_eq!(decls[2].kind, DeclarationKind::Class);
    assert_eq!(decls[2].methods.len(), 2);
    assert_eq!(decls[2].interfaces[0].as_str(), "Mammal");
}

#[test]
fn package_and_imports_are_ignored() {
    let decls = parsed(
        r#"
package com.example.zoo;

import java.util.List;
import static java.lang.Math.max;

interface Animal { void eat(); }
"#,
    );
    assert_eq!(decls.len(), 1);
}

#[test]
fn parameter_and_array_types_are_recorded() {
    let decls = parsed(
        r#"
interface Roster {
    int count(String[] names, int... extras);
}
"#,
    );
    let sig = &decls[0].methods[0];
    assert_eq!(sig.return_type, "int");
    assert_eq!(sig.param_types, vec!["String[]", "int[]"]);
}

#[test]
fn throws_clauses_are_accepted() {
    let decls = parsed(
        r#"
interface Loader {
    void load(String path) throws java.io.IOException, IllegalStateException;
}
"#,
    );
    assert_eq!(decls[0].methods.len(), 1);
}

// Fields, constructors and initializer blocks carry no signatures
#[test]
fn non_method_members_are_skipped() {
    let decls = parsed(
        r#"
class Counter {
    private int count = 0;
    private int[] history = {1, 2, 3};
    static { }

    Counter(int start) {
        this.count = start;
    }

    public int current() { return count; }
}
"#,
    );
    assert_eq!(decls[0].methods.len(), 1);
    assert_eq!(decls[0].methods[0].name, "current");
}

#[test]
fn default_methods_are_parsed_as_signatures() {
    let decls = parsed(
        r#"
interface Greeter {
    default void greet() {
        System.out.println("hi");
    }
}
"#,
    );
    assert_eq!(decls[0].methods.len(), 1);
    assert_eq!(decls[0].methods[0].name, "greet");
}

#[test]
fn annotations_are_skipped() {
    let decls = parsed(
        r#"
public class Person implements Mammal {
    @Override
    public void eat() { }
}
"#,
    );
    assert_eq!(decls[0].methods.len(), 1);
}

#[test]
fn qualified_supertype_names_are_kept() {
    let decls = parsed("class A extends com.example.Base { }");
    assert_eq!(decls[0].super_class.as_ref().unwrap().as_str(), "com.example.Base");
}

#[test]
fn generics_are_rejected() {
    err_contains("interface Box<T> { }", "generic types are not supported");
    err_contains(
        "class Holder { java.util.List<String> items; }",
        "generic types are not supported",
    );
}

#[test]
fn unterminated_body_is_an_error() {
    err_contains("class A {", "unexpected end of input");
}

#[test]
fn stray_top_level_token_is_an_error() {
    err_contains("interface Animal { } 42", "expected 'class' or 'interface'");
}
